use super::dialect::{BasisDialect, shell_header, signed_field};
use super::parser::{self, ShellGrammar, SourceLine};
use crate::core::error::BasisError;
use crate::core::models::basis::Basis;
use crate::core::models::contraction::Contraction;
use crate::core::utils::elements;

const GRAMMAR: ShellGrammar = ShellGrammar {
    numbered_rows: true,
    scale_factor: false,
};

/// The GAMESS `$DATA` layout.
///
/// Atom blocks open with the upper-cased element name and are separated by a
/// blank line. Every primitive row starts with its 1-based index.
///
/// ```text
/// HYDROGEN
/// S     2
///   1      1.0000000   0.5000000
///   2      2.0000000   0.5000000
///
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct GamessFormat;

impl BasisDialect for GamessFormat {
    fn name(&self) -> &'static str {
        "gamess"
    }

    fn write_contraction(&self, contraction: &Contraction, out: &mut String) {
        out.push_str(&shell_header(contraction));
        for (i, p) in contraction.primitives().enumerate() {
            out.push_str(&format!(
                " {:>2} {:>14.7} {}",
                i + 1,
                p.exponent,
                signed_field(p.coefficient)
            ));
            if let Some(c2) = p.coefficient2 {
                out.push(' ');
                out.push_str(&signed_field(c2));
            }
            out.push('\n');
        }
    }

    /// Writes the upper-cased element name when `atom` is exactly a canonical
    /// symbol (`C`, `Cl`) and the label verbatim otherwise (`c`, `Bq`), so every
    /// distinct label decodes back to itself.
    fn write_atom_header(&self, atom: &str, out: &mut String) {
        match elements::element_name(atom) {
            Some(name) => out.push_str(&name.to_uppercase()),
            None => out.push_str(atom),
        }
        out.push('\n');
    }

    fn document_prefix(&self) -> &'static str {
        ""
    }

    fn atom_terminator(&self) -> &'static str {
        "\n"
    }

    fn is_separator(&self, line: &str) -> bool {
        line.trim().is_empty()
    }

    fn is_ignorable(&self, _line: &str) -> bool {
        false
    }

    /// Maps an element-name header back to its symbol so that documents written
    /// by this dialect decode under their original atom labels.
    fn parse_chunk(&self, lines: &[SourceLine<'_>]) -> Result<(String, Basis), BasisError> {
        let (token, _) = parser::atom_label(lines)?;
        let label = elements::element_symbol(token).unwrap_or(token);
        let shells = parser::parse_shells(&lines[1..], GRAMMAR)?;
        Ok((label.to_string(), Basis::new(label, shells)))
    }
}
