use super::contraction::Contraction;
use crate::core::error::BasisError;
use crate::core::io::dialect::Dialect;
use std::fmt;

/// The basis of one atom: its contracted shells in declaration order.
///
/// Shell order is meaningful to downstream programs and is never changed
/// implicitly; shells can be replaced or removed by position only.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Basis {
    atom: String,
    contractions: Vec<Contraction>,
}

impl Basis {
    /// Creates a basis for `atom` from its shells.
    ///
    /// Every [`Contraction`] is validated when it is built, so any list of
    /// them forms a well-formed basis.
    pub fn new(atom: impl Into<String>, contractions: Vec<Contraction>) -> Self {
        Self {
            atom: atom.into(),
            contractions,
        }
    }

    /// The atom label, typically an element symbol.
    pub fn atom(&self) -> &str {
        &self.atom
    }

    /// Number of shells.
    pub fn len(&self) -> usize {
        self.contractions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contractions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Contraction> {
        self.contractions.get(index)
    }

    /// Mutable access to one shell; row and column setters keep it valid.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Contraction> {
        self.contractions.get_mut(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Contraction> {
        self.contractions.iter()
    }

    pub fn contractions(&self) -> &[Contraction] {
        &self.contractions
    }

    /// Replaces the shell at `index` and returns the previous one.
    ///
    /// # Errors
    ///
    /// Returns [`BasisError::IndexOutOfRange`] if `index >= self.len()`.
    pub fn set(&mut self, index: usize, contraction: Contraction) -> Result<Contraction, BasisError> {
        let len = self.len();
        let slot = self
            .contractions
            .get_mut(index)
            .ok_or(BasisError::IndexOutOfRange { index, len })?;
        Ok(std::mem::replace(slot, contraction))
    }

    /// Removes the shell at `index`, shifting later shells down by one.
    ///
    /// # Errors
    ///
    /// Returns [`BasisError::IndexOutOfRange`] if `index >= self.len()`.
    pub fn remove(&mut self, index: usize) -> Result<Contraction, BasisError> {
        if index >= self.len() {
            return Err(BasisError::IndexOutOfRange {
                index,
                len: self.len(),
            });
        }
        Ok(self.contractions.remove(index))
    }

    /// Re-checks every shell.
    pub fn validate(&self) -> Result<(), BasisError> {
        self.contractions.iter().try_for_each(Contraction::validate)
    }

    /// Returns a basis where every shell is split into unit-coefficient primitives.
    pub fn decontracted(&self) -> Basis {
        Basis {
            atom: self.atom.clone(),
            contractions: self
                .contractions
                .iter()
                .flat_map(Contraction::decontracted)
                .collect(),
        }
    }

    /// A short description such as `<Basis C 3>`.
    pub fn summary(&self) -> String {
        format!("<Basis {} {}>", self.atom, self.len())
    }

    /// Formats the atom block in `dialect`.
    ///
    /// With `print_name` set to `false` the atom header line is omitted, which
    /// is how a basis is embedded inline in a larger input deck.
    pub fn render(&self, dialect: Dialect, print_name: bool) -> String {
        let strategy = dialect.strategy();
        let mut out = String::new();
        if print_name {
            strategy.write_atom_header(&self.atom, &mut out);
        }
        for contraction in &self.contractions {
            strategy.write_contraction(contraction, &mut out);
        }
        out
    }

    /// Formats the atom block in the dialect named `dialect`.
    ///
    /// # Errors
    ///
    /// Returns [`BasisError::UnsupportedDialect`] for an unknown name.
    pub fn print(&self, dialect: &str, print_name: bool) -> Result<String, BasisError> {
        Ok(self.render(dialect.parse()?, print_name))
    }
}

impl<'a> IntoIterator for &'a Basis {
    type Item = &'a Contraction;
    type IntoIter = std::slice::Iter<'a, Contraction>;

    fn into_iter(self) -> Self::IntoIter {
        self.contractions.iter()
    }
}

impl fmt::Display for Basis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(Dialect::Gaussian94, true))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn carbon() -> Basis {
        Basis::new(
            "C",
            vec![
                Contraction::new("S", &[1, 2], &[0.5, 0.5]).unwrap(),
                Contraction::new("P", &[0.01, 0.2, 1.0], &[0.3, 0.4, 0.3]).unwrap(),
                Contraction::with_second_column(
                    "SP",
                    &[0.1, 0.4, 3.0],
                    &[0.2, 0.3, 0.5],
                    &[0.1, 0.3, 0.6],
                )
                .unwrap(),
            ],
        )
    }

    #[test]
    fn indexing_replacement_and_removal() {
        let mut basis = carbon();
        assert_eq!(basis.len(), 3);

        let f = Contraction::new("F", &[4, 9], &[0.1, 0.9]).unwrap();
        let old = basis.set(0, f.clone()).unwrap();
        assert_eq!(old.summary(), "<Contraction S 2>");
        assert_eq!(basis.get(0), Some(&f));

        basis.remove(2).unwrap();
        assert_eq!(basis.len(), 2);
        assert!(basis.get(2).is_none());
        assert!(matches!(
            basis.remove(2),
            Err(BasisError::IndexOutOfRange { index: 2, len: 2 })
        ));
        assert!(matches!(
            basis.set(7, f),
            Err(BasisError::IndexOutOfRange { index: 7, len: 2 })
        ));
    }

    #[test]
    fn equality_is_structural() {
        let sp = carbon().get(2).cloned().unwrap();
        assert_eq!(Basis::new("C", vec![sp.clone()]), Basis::new("C", vec![sp.clone()]));
        assert_ne!(Basis::new("C", vec![sp.clone()]), Basis::new("N", vec![sp]));
    }

    #[test]
    fn gaussian94_block_has_atom_header() {
        let expected = "\
C    0
S     2
        1.0000000   0.5000000
        2.0000000   0.5000000
P     3
        0.0100000   0.3000000
        0.2000000   0.4000000
        1.0000000   0.3000000
SP    3
        0.1000000   0.2000000   0.1000000
        0.4000000   0.3000000   0.3000000
        3.0000000   0.5000000   0.6000000
";
        assert_eq!(carbon().to_string(), expected);
        assert_eq!(carbon().print("gaussian94", true).unwrap(), expected);
    }

    #[test]
    fn gamess_block_uses_element_name() {
        let expected = "\
CARBON
S     2
  1      1.0000000   0.5000000
  2      2.0000000   0.5000000
P     3
  1      0.0100000   0.3000000
  2      0.2000000   0.4000000
  3      1.0000000   0.3000000
SP    3
  1      0.1000000   0.2000000   0.1000000
  2      0.4000000   0.3000000   0.3000000
  3      3.0000000   0.5000000   0.6000000
";
        assert_eq!(carbon().print("gamess", true).unwrap(), expected);
    }

    #[test]
    fn print_name_false_omits_header() {
        let block = carbon().render(Dialect::Gaussian94, false);
        assert!(block.starts_with("S     2\n"));
        assert!(!block.contains("C    0"));
        assert!(carbon().render(Dialect::Gamess, false).starts_with("S     2\n"));
    }

    #[test]
    fn unknown_dialect_is_rejected() {
        assert!(matches!(
            carbon().print("bagel", true),
            Err(BasisError::UnsupportedDialect(_))
        ));
    }

    #[test]
    fn decontraction_and_summary() {
        let basis = carbon();
        assert_eq!(basis.summary(), "<Basis C 3>");
        let decon = basis.decontracted();
        assert_eq!(decon.atom(), "C");
        assert_eq!(decon.len(), 2 + 3 + 6);
        assert!(decon.iter().all(|c| c.len() == 1 && c.coefficients() == vec![1.0]));
        assert!(decon.validate().is_ok());
    }

    #[test]
    fn iteration_preserves_shell_order() {
        let labels: Vec<String> = (&carbon())
            .into_iter()
            .map(|c| c.label().to_string())
            .collect();
        assert_eq!(labels, vec!["S", "P", "SP"]);
    }
}
