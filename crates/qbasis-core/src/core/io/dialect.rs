use super::gamess::GamessFormat;
use super::gaussian94::Gaussian94Format;
use super::parser::SourceLine;
use crate::core::error::BasisError;
use crate::core::models::basis::Basis;
use crate::core::models::contraction::Contraction;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// A named text layout for serialising basis sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// Gaussian `.gbs` layout: atom blocks delimited by `****`.
    Gaussian94,
    /// GAMESS `$DATA` layout: numbered rows, atom blocks delimited by blank lines.
    Gamess,
}

impl Dialect {
    pub const ALL: [Dialect; 2] = [Dialect::Gaussian94, Dialect::Gamess];

    pub fn name(self) -> &'static str {
        self.strategy().name()
    }

    /// Returns the strategy object that reads and writes this dialect.
    pub fn strategy(self) -> &'static dyn BasisDialect {
        match self {
            Dialect::Gaussian94 => &Gaussian94Format,
            Dialect::Gamess => &GamessFormat,
        }
    }
}

impl FromStr for Dialect {
    type Err = BasisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Dialect::ALL
            .into_iter()
            .find(|d| d.name() == wanted)
            .ok_or_else(|| BasisError::UnsupportedDialect(s.to_string()))
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The grammar of one basis set dialect.
///
/// Each supported dialect is a unit struct implementing this trait. Encoding
/// and decoding in [`BasisSet`](crate::core::models::basis_set::BasisSet) only
/// talk to this interface, so a new dialect needs one implementation and one
/// [`Dialect`] variant.
pub trait BasisDialect: Sync {
    /// The lowercase name used on the command line and in configuration files.
    fn name(&self) -> &'static str;

    /// Appends the header line, primitive rows and trailing newline of one shell.
    fn write_contraction(&self, contraction: &Contraction, out: &mut String);

    /// Appends the line introducing an atom block.
    fn write_atom_header(&self, atom: &str, out: &mut String);

    /// Text written once before the first atom block.
    fn document_prefix(&self) -> &'static str;

    /// Text written after every atom block.
    fn atom_terminator(&self) -> &'static str;

    /// Returns `true` if `line` closes the current atom block.
    fn is_separator(&self, line: &str) -> bool;

    /// Returns `true` if `line` carries no data and should be dropped before parsing.
    fn is_ignorable(&self, line: &str) -> bool;

    /// Decodes one atom block into its label and basis.
    ///
    /// # Errors
    ///
    /// Returns [`BasisError::MalformedDocument`] for structural problems and
    /// propagates validation errors from [`Contraction`] construction.
    fn parse_chunk(&self, lines: &[SourceLine<'_>]) -> Result<(String, Basis), BasisError>;
}

/// The `LABEL    count` line that opens every shell block in both dialects.
pub(crate) fn shell_header(contraction: &Contraction) -> String {
    format!("{:<2}    {}\n", contraction.label().to_string(), contraction.len())
}

/// Formats `value` with 7 decimals in an 11-wide field whose sign column holds
/// a space for non-negative values and `-` otherwise.
pub(crate) fn signed_field(value: f64) -> String {
    let digits = format!("{:.7}", value);
    if digits.starts_with('-') {
        format!("{:>11}", digits)
    } else {
        format!("{:>11}", format!(" {}", digits))
    }
}
