use crate::core::error::BasisError;
use std::fmt;
use std::str::FromStr;

/// Angular momentum of a shell in spectroscopic notation.
///
/// The letters run `S, P, D, F, G, H, I, K, L, M, N` for `l = 0..=10`; `J` is
/// skipped by convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AngularMomentum {
    S,
    P,
    D,
    F,
    G,
    H,
    I,
    K,
    L,
    M,
    N,
}

const ALPHABET: [AngularMomentum; 11] = [
    AngularMomentum::S,
    AngularMomentum::P,
    AngularMomentum::D,
    AngularMomentum::F,
    AngularMomentum::G,
    AngularMomentum::H,
    AngularMomentum::I,
    AngularMomentum::K,
    AngularMomentum::L,
    AngularMomentum::M,
    AngularMomentum::N,
];

impl AngularMomentum {
    /// Returns the quantum number `l`.
    pub fn l(self) -> u32 {
        self as u32
    }

    /// Returns the momentum for quantum number `l`, if it is in the alphabet.
    pub fn from_l(l: u32) -> Option<Self> {
        ALPHABET.get(l as usize).copied()
    }

    /// Returns the upper-case spectroscopic letter.
    pub fn letter(self) -> char {
        match self {
            AngularMomentum::S => 'S',
            AngularMomentum::P => 'P',
            AngularMomentum::D => 'D',
            AngularMomentum::F => 'F',
            AngularMomentum::G => 'G',
            AngularMomentum::H => 'H',
            AngularMomentum::I => 'I',
            AngularMomentum::K => 'K',
            AngularMomentum::L => 'L',
            AngularMomentum::M => 'M',
            AngularMomentum::N => 'N',
        }
    }

    /// Parses a single letter, ignoring case.
    pub fn from_letter(c: char) -> Option<Self> {
        ALPHABET
            .iter()
            .copied()
            .find(|am| am.letter() == c.to_ascii_uppercase())
    }
}

impl fmt::Display for AngularMomentum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// The label of one shell.
///
/// A shared label fuses two sub-shells of consecutive angular momentum
/// (`SP`, `PD`, ...) that use one exponent list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShellLabel {
    Single(AngularMomentum),
    Shared(AngularMomentum, AngularMomentum),
}

impl ShellLabel {
    /// Returns the sub-shells in declaration order.
    pub fn components(self) -> Vec<AngularMomentum> {
        match self {
            ShellLabel::Single(am) => vec![am],
            ShellLabel::Shared(first, second) => vec![first, second],
        }
    }

    pub fn is_shared(self) -> bool {
        matches!(self, ShellLabel::Shared(..))
    }
}

impl FromStr for ShellLabel {
    type Err = BasisError;

    /// Parses a shell label such as `"s"`, `"D"` or `"SP"`.
    ///
    /// # Errors
    ///
    /// Returns [`BasisError::InvalidLabel`] if a letter is outside the
    /// alphabet, the label has more than two letters, or the two letters are
    /// not consecutive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || BasisError::InvalidLabel(s.to_string());
        let letters = s
            .trim()
            .chars()
            .map(AngularMomentum::from_letter)
            .collect::<Option<Vec<_>>>()
            .ok_or_else(invalid)?;

        match letters.as_slice() {
            [am] => Ok(ShellLabel::Single(*am)),
            [first, second] if second.l() == first.l() + 1 => {
                Ok(ShellLabel::Shared(*first, *second))
            }
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for ShellLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShellLabel::Single(am) => write!(f, "{}", am),
            ShellLabel::Shared(first, second) => write!(f, "{}{}", first, second),
        }
    }
}
