use super::dialect::{BasisDialect, shell_header, signed_field};
use super::parser::{self, ShellGrammar, SourceLine};
use crate::core::error::BasisError;
use crate::core::models::basis::Basis;
use crate::core::models::contraction::Contraction;

const ATOM_SEPARATOR: &str = "****";

const GRAMMAR: ShellGrammar = ShellGrammar {
    numbered_rows: false,
    scale_factor: true,
};

/// The Gaussian94 (`.gbs`) layout.
///
/// ```text
/// ****
/// H    0
/// S     2
///         1.0000000   0.5000000
///         2.0000000   0.5000000
/// ****
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Gaussian94Format;

impl BasisDialect for Gaussian94Format {
    fn name(&self) -> &'static str {
        "gaussian94"
    }

    fn write_contraction(&self, contraction: &Contraction, out: &mut String) {
        out.push_str(&shell_header(contraction));
        for p in contraction.primitives() {
            out.push_str(&format!("{:>17.7} {}", p.exponent, signed_field(p.coefficient)));
            if let Some(c2) = p.coefficient2 {
                out.push(' ');
                out.push_str(&signed_field(c2));
            }
            out.push('\n');
        }
    }

    fn write_atom_header(&self, atom: &str, out: &mut String) {
        out.push_str(&format!("{}    0\n", atom));
    }

    fn document_prefix(&self) -> &'static str {
        "****\n"
    }

    fn atom_terminator(&self) -> &'static str {
        "****\n"
    }

    fn is_separator(&self, line: &str) -> bool {
        line.trim_start().starts_with(ATOM_SEPARATOR)
    }

    fn is_ignorable(&self, line: &str) -> bool {
        let line = line.trim();
        line.is_empty() || line.starts_with('!')
    }

    fn parse_chunk(&self, lines: &[SourceLine<'_>]) -> Result<(String, Basis), BasisError> {
        let (label, _) = parser::atom_label(lines)?;
        let shells = parser::parse_shells(&lines[1..], GRAMMAR)?;
        Ok((label.to_string(), Basis::new(label, shells)))
    }
}
