use qbasis::Dialect;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown dialect '{0}'. Expected 'gaussian94' or 'gamess'.")]
    UnknownDialect(String),

    #[error("Atom list '{0}' contains an empty label.")]
    EmptyAtom(String),

    #[error("Atom '{atom}' appears more than once in '{list}'.")]
    DuplicateAtom { atom: String, list: String },
}

/// An ordered, duplicate-free list of atom labels given as `H,C,O`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtomList(pub Vec<String>);

pub fn parse_dialect(s: &str) -> Result<Dialect, ParseError> {
    s.parse().map_err(|_| ParseError::UnknownDialect(s.to_string()))
}

pub fn parse_atom_list(s: &str) -> Result<AtomList, ParseError> {
    let mut atoms: Vec<String> = Vec::new();
    for atom in s.split(',').map(str::trim) {
        if atom.is_empty() {
            return Err(ParseError::EmptyAtom(s.to_string()));
        }
        if atoms.iter().any(|a| a == atom) {
            return Err(ParseError::DuplicateAtom {
                atom: atom.to_string(),
                list: s.to_string(),
            });
        }
        atoms.push(atom.to_string());
    }
    Ok(AtomList(atoms))
}
