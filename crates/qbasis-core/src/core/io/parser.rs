use super::dialect::BasisDialect;
use crate::core::error::{BasisError, ParseErrorKind};
use crate::core::models::angular::ShellLabel;
use crate::core::models::contraction::Contraction;
use tracing::trace;

/// A line of the source document together with its 1-based line number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLine<'a> {
    pub number: usize,
    pub text: &'a str,
}

/// Dialect-specific details of the shell grammar.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct ShellGrammar {
    /// Rows start with their 1-based index, which is checked and skipped.
    pub numbered_rows: bool,
    /// Shell headers may carry a trailing scale factor (`S   3   1.00`).
    pub scale_factor: bool,
}

/// Splits a document into atom blocks using the dialect's separator.
///
/// Ignorable lines are dropped and empty blocks, such as the one after a
/// trailing separator, are skipped.
pub(crate) fn split_chunks<'a>(
    text: &'a str,
    dialect: &dyn BasisDialect,
) -> Vec<Vec<SourceLine<'a>>> {
    let mut chunks = Vec::new();
    let mut current = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        if dialect.is_separator(line) {
            if !current.is_empty() {
                chunks.push(std::mem::take(&mut current));
            }
            continue;
        }
        if dialect.is_ignorable(line) {
            continue;
        }
        current.push(SourceLine {
            number: idx + 1,
            text: line,
        });
    }
    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}

/// Returns the first whitespace-delimited token of the atom line; anything
/// after it is annotation.
pub(crate) fn atom_label<'a>(lines: &[SourceLine<'a>]) -> Result<(&'a str, usize), BasisError> {
    let first = lines
        .first()
        .ok_or_else(|| BasisError::parse(0, ParseErrorKind::MissingAtomLabel))?;
    let label = first
        .text
        .split_whitespace()
        .next()
        .ok_or_else(|| BasisError::parse(first.number, ParseErrorKind::MissingAtomLabel))?;
    Ok((label, first.number))
}

/// Parses consecutive shell blocks until `lines` is exhausted.
pub(crate) fn parse_shells(
    lines: &[SourceLine<'_>],
    grammar: ShellGrammar,
) -> Result<Vec<Contraction>, BasisError> {
    let mut shells = Vec::new();
    let mut cursor = 0;

    while cursor < lines.len() {
        let header = lines[cursor];
        let (label, count) = parse_shell_header(header, grammar)?;

        let rows = &lines[cursor + 1..];
        if rows.len() < count {
            return Err(BasisError::parse(
                header.number,
                ParseErrorKind::TruncatedShell {
                    expected: count,
                    found: rows.len(),
                },
            ));
        }

        let shell = parse_rows(label, &rows[..count], grammar)?;
        trace!(
            line = header.number,
            label = %shell.label(),
            primitives = shell.len(),
            "Parsed shell."
        );
        shells.push(shell);
        cursor += count + 1;
    }

    Ok(shells)
}

fn parse_shell_header(
    line: SourceLine<'_>,
    grammar: ShellGrammar,
) -> Result<(ShellLabel, usize), BasisError> {
    let tokens: Vec<&str> = line.text.split_whitespace().collect();
    let (label, count) = match tokens.as_slice() {
        [label, count] => (*label, *count),
        [label, count, scale] if grammar.scale_factor => {
            parse_float(scale).ok_or_else(|| {
                BasisError::parse(line.number, ParseErrorKind::InvalidFloat(scale.to_string()))
            })?;
            (*label, *count)
        }
        _ => {
            return Err(BasisError::parse(
                line.number,
                ParseErrorKind::InvalidShellHeader(line.text.trim().to_string()),
            ));
        }
    };

    let label: ShellLabel = label.parse()?;
    let count = count
        .parse::<usize>()
        .ok()
        .filter(|&n| n > 0)
        .ok_or_else(|| {
            BasisError::parse(line.number, ParseErrorKind::InvalidRowCount(count.to_string()))
        })?;
    Ok((label, count))
}

fn parse_rows(
    label: ShellLabel,
    rows: &[SourceLine<'_>],
    grammar: ShellGrammar,
) -> Result<Contraction, BasisError> {
    let mut columns: Vec<Vec<f64>> = Vec::new();

    for (i, row) in rows.iter().enumerate() {
        let mut tokens = row.text.split_whitespace();
        if grammar.numbered_rows {
            let found = tokens.next().unwrap_or("");
            if found.parse::<usize>().ok() != Some(i + 1) {
                return Err(BasisError::parse(
                    row.number,
                    ParseErrorKind::InvalidRowIndex {
                        expected: i + 1,
                        found: found.to_string(),
                    },
                ));
            }
        }

        let values = tokens
            .map(|t| {
                parse_float(t).ok_or_else(|| {
                    BasisError::parse(row.number, ParseErrorKind::InvalidFloat(t.to_string()))
                })
            })
            .collect::<Result<Vec<f64>, _>>()?;

        if !(2..=3).contains(&values.len()) {
            return Err(BasisError::parse(
                row.number,
                ParseErrorKind::WrongColumnCount(values.len()),
            ));
        }
        if columns.is_empty() {
            columns = vec![Vec::with_capacity(rows.len()); values.len()];
        } else if columns.len() != values.len() {
            return Err(BasisError::parse(
                row.number,
                ParseErrorKind::InconsistentRows {
                    expected: columns.len(),
                    found: values.len(),
                },
            ));
        }
        for (column, value) in columns.iter_mut().zip(values) {
            column.push(value);
        }
    }

    let mut columns = columns.into_iter();
    let exponents = columns.next().unwrap_or_default();
    let coefficients = columns.next().unwrap_or_default();
    Contraction::from_columns(label, exponents, coefficients, columns.next())
}

/// Parses a fixed-point or scientific number, accepting Fortran `D` exponents.
fn parse_float(token: &str) -> Option<f64> {
    token
        .replace(['D', 'd'], "E")
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::angular::AngularMomentum;

    fn lines(text: &str) -> Vec<SourceLine<'_>> {
        text.lines()
            .enumerate()
            .map(|(i, text)| SourceLine {
                number: i + 1,
                text,
            })
            .collect()
    }

    const PLAIN: ShellGrammar = ShellGrammar {
        numbered_rows: false,
        scale_factor: true,
    };
    const NUMBERED: ShellGrammar = ShellGrammar {
        numbered_rows: true,
        scale_factor: false,
    };

    #[test]
    fn parse_float_accepts_fortran_exponents() {
        assert_eq!(parse_float("1.5D+02"), Some(150.0));
        assert_eq!(parse_float("2.0d-1"), Some(0.2));
        assert_eq!(parse_float("-0.25"), Some(-0.25));
        assert_eq!(parse_float("abc"), None);
        assert_eq!(parse_float("inf"), None);
        assert_eq!(parse_float("NaN"), None);
    }

    #[test]
    fn parses_consecutive_shells() {
        let src = lines("S 2\n 1.0 0.5\n 2.0 0.5\nSP 1 1.00\n 0.1 0.2 0.3\n");
        let shells = parse_shells(&src, PLAIN).unwrap();
        assert_eq!(shells.len(), 2);
        assert_eq!(shells[0].exponents(), vec![1.0, 2.0]);
        assert_eq!(
            shells[1].label(),
            ShellLabel::Shared(AngularMomentum::S, AngularMomentum::P)
        );
        assert_eq!(shells[1].coefficients2(), Some(vec![0.3]));
    }

    #[test]
    fn numbered_rows_skip_and_check_index() {
        let src = lines("P 2\n 1 0.5 0.1\n 2 0.7 0.9\n");
        let shells = parse_shells(&src, NUMBERED).unwrap();
        assert_eq!(shells[0].row(1), Some(vec![0.7, 0.9]));

        let src = lines("P 2\n 1 0.5 0.1\n 3 0.7 0.9\n");
        let err = parse_shells(&src, NUMBERED).unwrap_err();
        assert!(matches!(
            err,
            BasisError::MalformedDocument {
                line: 3,
                kind: ParseErrorKind::InvalidRowIndex { expected: 2, .. }
            }
        ));
    }

    #[test]
    fn truncated_shell_is_reported() {
        let src = lines("S 3\n 1.0 0.5\n 2.0 0.5\n");
        assert!(matches!(
            parse_shells(&src, PLAIN),
            Err(BasisError::MalformedDocument {
                line: 1,
                kind: ParseErrorKind::TruncatedShell {
                    expected: 3,
                    found: 2
                }
            })
        ));
    }

    #[test]
    fn overstated_count_swallows_next_header_and_fails() {
        let src = lines("S 2\n 1.0 0.5\nP 1\n 2.0 0.5\n");
        assert!(matches!(
            parse_shells(&src, PLAIN),
            Err(BasisError::MalformedDocument {
                line: 3,
                kind: ParseErrorKind::InvalidFloat(_)
            })
        ));
    }

    #[test]
    fn bad_headers_are_reported() {
        assert!(matches!(
            parse_shells(&lines("S\n"), PLAIN),
            Err(BasisError::MalformedDocument {
                kind: ParseErrorKind::InvalidShellHeader(_),
                ..
            })
        ));
        assert!(matches!(
            parse_shells(&lines("S two\n"), PLAIN),
            Err(BasisError::MalformedDocument {
                kind: ParseErrorKind::InvalidRowCount(_),
                ..
            })
        ));
        assert!(matches!(
            parse_shells(&lines("S 0\n"), PLAIN),
            Err(BasisError::MalformedDocument {
                kind: ParseErrorKind::InvalidRowCount(_),
                ..
            })
        ));
        assert!(matches!(
            parse_shells(&lines("S 1 1.00\n 1.0 1.0\n"), NUMBERED),
            Err(BasisError::MalformedDocument {
                kind: ParseErrorKind::InvalidShellHeader(_),
                ..
            })
        ));
        assert!(matches!(
            parse_shells(&lines("Q 1\n 1.0 1.0\n"), PLAIN),
            Err(BasisError::InvalidLabel(_))
        ));
    }

    #[test]
    fn row_shapes_are_checked() {
        assert!(matches!(
            parse_shells(&lines("S 1\n 1.0\n"), PLAIN),
            Err(BasisError::MalformedDocument {
                kind: ParseErrorKind::WrongColumnCount(1),
                ..
            })
        ));
        assert!(matches!(
            parse_shells(&lines("S 2\n 1.0 0.5\n 2.0 0.5 0.1\n"), PLAIN),
            Err(BasisError::MalformedDocument {
                line: 3,
                kind: ParseErrorKind::InconsistentRows {
                    expected: 2,
                    found: 3
                }
            })
        ));
        assert!(matches!(
            parse_shells(&lines("S 1\n -1.0 0.5\n"), PLAIN),
            Err(BasisError::InvalidExponent(_))
        ));
    }

    #[test]
    fn atom_label_takes_first_token() {
        let src = lines("  C  0  annotation\nS 1\n");
        assert_eq!(atom_label(&src).unwrap(), ("C", 1));
        assert!(matches!(
            atom_label(&[]),
            Err(BasisError::MalformedDocument {
                kind: ParseErrorKind::MissingAtomLabel,
                ..
            })
        ));
    }
}
