use super::basis::Basis;
use crate::core::error::BasisError;
use crate::core::io::dialect::Dialect;
use crate::core::io::parser;
use indexmap::IndexMap;
use nalgebra::DMatrix;
use std::fmt;
use tracing::{debug, instrument};

/// How angular functions are represented. Only pure spherical harmonics are modelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AngularType {
    #[default]
    Spherical,
}

/// A basis set: one [`Basis`] per atom label, in insertion order.
///
/// Insertion order is the order atoms are printed in and the order they
/// appeared in a decoded document. Every mutating operation re-runs
/// [`BasisSet::check_basis_set`] on the affected entries.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BasisSet {
    atoms: IndexMap<String, Basis>,
    angular_type: AngularType,
}

impl BasisSet {
    /// Creates a basis set from an ordered map of atom label to basis.
    ///
    /// # Errors
    ///
    /// Fails fast on the first entry rejected by [`BasisSet::check_basis_set`].
    pub fn new(atoms: IndexMap<String, Basis>) -> Result<Self, BasisError> {
        Self::check_basis_set(&atoms)?;
        Ok(Self {
            atoms,
            angular_type: AngularType::Spherical,
        })
    }

    /// Checks that every entry is a well-formed basis stored under its own atom label.
    ///
    /// # Errors
    ///
    /// Returns [`BasisError::InvalidValue`] for an empty or whitespace-bearing
    /// label, or for a basis whose atom differs from its key, and propagates
    /// any shell validation error.
    pub fn check_basis_set(atoms: &IndexMap<String, Basis>) -> Result<(), BasisError> {
        atoms
            .iter()
            .try_for_each(|(label, basis)| check_entry(label, basis))
    }

    /// Replaces the whole atom table after validating it.
    ///
    /// On error the current table is left untouched.
    pub fn change_basis_set(&mut self, atoms: IndexMap<String, Basis>) -> Result<(), BasisError> {
        Self::check_basis_set(&atoms)?;
        self.atoms = atoms;
        Ok(())
    }

    /// Decodes a document written in the dialect named `dialect`.
    ///
    /// # Errors
    ///
    /// Returns [`BasisError::UnsupportedDialect`] before any parsing for an
    /// unknown name, otherwise as [`BasisSet::parse`].
    pub fn read(text: &str, dialect: &str) -> Result<Self, BasisError> {
        let dialect: Dialect = dialect.parse()?;
        Self::parse(text, dialect)
    }

    /// Decodes a document in `dialect`.
    ///
    /// The text is split into atom blocks on the dialect separator; each block
    /// yields one `(atom, Basis)` entry in document order. A later block for an
    /// atom that was already seen replaces the earlier basis but keeps its
    /// position.
    ///
    /// # Errors
    ///
    /// Returns [`BasisError::MalformedDocument`] with the offending line for
    /// structural problems, or the validation error of the first invalid shell.
    #[instrument(skip_all, fields(dialect = %dialect))]
    pub fn parse(text: &str, dialect: Dialect) -> Result<Self, BasisError> {
        let strategy = dialect.strategy();
        let mut atoms = IndexMap::new();

        for chunk in parser::split_chunks(text, strategy) {
            let (label, basis) = strategy.parse_chunk(&chunk)?;
            debug!(atom = %label, shells = basis.len(), "Decoded atom block.");
            atoms.insert(label, basis);
        }

        debug!(atoms = atoms.len(), "Decoded basis set.");
        Self::new(atoms)
    }

    /// Encodes the basis set in `dialect`.
    #[instrument(skip_all, fields(dialect = %dialect, atoms = self.atoms.len()))]
    pub fn render(&self, dialect: Dialect) -> String {
        let strategy = dialect.strategy();
        let mut out = String::from(strategy.document_prefix());
        for basis in self.atoms.values() {
            out.push_str(&basis.render(dialect, true));
            out.push_str(strategy.atom_terminator());
        }
        out
    }

    /// Encodes the basis set in the dialect named `dialect`.
    ///
    /// # Errors
    ///
    /// Returns [`BasisError::UnsupportedDialect`] for an unknown name; nothing
    /// is rendered in that case.
    pub fn print(&self, dialect: &str) -> Result<String, BasisError> {
        Ok(self.render(dialect.parse()?))
    }

    pub fn angular_type(&self) -> AngularType {
        self.angular_type
    }

    /// Returns the basis for `atom`.
    ///
    /// # Errors
    ///
    /// Returns [`BasisError::KeyNotFound`] if the atom is absent.
    pub fn get(&self, atom: &str) -> Result<&Basis, BasisError> {
        self.atoms
            .get(atom)
            .ok_or_else(|| BasisError::KeyNotFound(atom.to_string()))
    }

    /// Inserts or replaces the basis for `atom`, returning the previous one.
    ///
    /// A new atom is appended at the end; a replaced atom keeps its position.
    ///
    /// # Errors
    ///
    /// As [`BasisSet::check_basis_set`] for the single entry.
    pub fn set(&mut self, atom: impl Into<String>, basis: Basis) -> Result<Option<Basis>, BasisError> {
        let atom = atom.into();
        check_entry(&atom, &basis)?;
        Ok(self.atoms.insert(atom, basis))
    }

    /// Removes the basis for `atom`, preserving the order of the remaining atoms.
    ///
    /// # Errors
    ///
    /// Returns [`BasisError::KeyNotFound`] if the atom is absent.
    pub fn remove(&mut self, atom: &str) -> Result<Basis, BasisError> {
        self.atoms
            .shift_remove(atom)
            .ok_or_else(|| BasisError::KeyNotFound(atom.to_string()))
    }

    pub fn contains(&self, atom: &str) -> bool {
        self.atoms.contains_key(atom)
    }

    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// Atom labels in order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.atoms.keys().map(String::as_str)
    }

    /// Bases in atom order.
    pub fn iter(&self) -> indexmap::map::Values<'_, String, Basis> {
        self.atoms.values()
    }

    pub fn atoms(&self) -> &IndexMap<String, Basis> {
        &self.atoms
    }

    /// Returns, per atom and per shell, a copy of the raw numeric table.
    ///
    /// The matrices are a snapshot: modifying them does not modify the basis set.
    pub fn values(&self) -> Vec<Vec<DMatrix<f64>>> {
        self.atoms
            .values()
            .map(|basis| basis.iter().map(|c| c.to_matrix()).collect())
            .collect()
    }

    /// Returns a basis set with every atom's shells decontracted.
    pub fn decontracted(&self) -> BasisSet {
        BasisSet {
            atoms: self
                .atoms
                .iter()
                .map(|(label, basis)| (label.clone(), basis.decontracted()))
                .collect(),
            angular_type: self.angular_type,
        }
    }

    /// Builds a new basis set holding only `atoms`, in the order given.
    ///
    /// # Errors
    ///
    /// Returns [`BasisError::KeyNotFound`] for the first label that is absent.
    pub fn subset<S: AsRef<str>>(&self, atoms: &[S]) -> Result<BasisSet, BasisError> {
        let mut selected = IndexMap::with_capacity(atoms.len());
        for atom in atoms {
            let atom = atom.as_ref();
            selected.insert(atom.to_string(), self.get(atom)?.clone());
        }
        Ok(BasisSet {
            atoms: selected,
            angular_type: self.angular_type,
        })
    }
}

fn check_entry(label: &str, basis: &Basis) -> Result<(), BasisError> {
    if label.is_empty() || label.chars().any(char::is_whitespace) {
        return Err(BasisError::InvalidValue(format!(
            "atom label '{}' must be a single non-empty token",
            label
        )));
    }
    if basis.atom() != label {
        return Err(BasisError::InvalidValue(format!(
            "basis for atom '{}' stored under key '{}'",
            basis.atom(),
            label
        )));
    }
    basis.validate()
}

impl<'a> IntoIterator for &'a BasisSet {
    type Item = &'a Basis;
    type IntoIter = indexmap::map::Values<'a, String, Basis>;

    fn into_iter(self) -> Self::IntoIter {
        self.atoms.values()
    }
}

impl fmt::Display for BasisSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(Dialect::Gaussian94))
    }
}
