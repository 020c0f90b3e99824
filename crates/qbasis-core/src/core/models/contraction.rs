use super::angular::ShellLabel;
use crate::core::error::BasisError;
use crate::core::io::dialect::Dialect;
use nalgebra::DMatrix;
use std::fmt;

/// Describes how many coefficient columns a contraction carries.
///
/// The layout is fixed when the contraction is built; every row operation
/// dispatches on it instead of inspecting row lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnLayout {
    /// `(exponent, coefficient)` rows.
    Single,
    /// `(exponent, coefficient, coefficient2)` rows, as in shared-exponent shells.
    Paired,
}

impl ColumnLayout {
    /// The number of numeric values in one row.
    pub fn arity(self) -> usize {
        match self {
            ColumnLayout::Single => 2,
            ColumnLayout::Paired => 3,
        }
    }
}

/// One row of a contraction table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Primitive {
    pub exponent: f64,
    pub coefficient: f64,
    pub coefficient2: Option<f64>,
}

/// A contracted shell: the primitive table of one angular-momentum shell.
///
/// Rows are stored as an `n x 2` or `n x 3` matrix whose first column holds the
/// exponents. The number of rows never changes after construction; rows and
/// columns can only be replaced in place.
#[derive(Debug, Clone, PartialEq)]
pub struct Contraction {
    label: ShellLabel,
    layout: ColumnLayout,
    values: DMatrix<f64>,
}

impl Contraction {
    /// Creates a contraction with a single coefficient column.
    ///
    /// # Arguments
    ///
    /// * `label` - Angular momentum label, e.g. `"S"` or `"sp"`.
    /// * `exponents` - Primitive exponents; all must be strictly positive.
    /// * `coefficients` - Contraction coefficients, one per exponent.
    ///
    /// # Errors
    ///
    /// Returns [`BasisError::InvalidLabel`], [`BasisError::ShapeMismatch`] or
    /// [`BasisError::InvalidExponent`], checked in that order.
    pub fn new<E, C>(label: &str, exponents: &[E], coefficients: &[C]) -> Result<Self, BasisError>
    where
        E: Copy + Into<f64>,
        C: Copy + Into<f64>,
    {
        let label = label.parse()?;
        Self::from_columns(label, to_f64(exponents), to_f64(coefficients), None)
    }

    /// Creates a contraction with two coefficient columns sharing one exponent list.
    ///
    /// # Errors
    ///
    /// As [`Contraction::new`]; additionally `coefficients2` must have as many
    /// entries as `coefficients`.
    pub fn with_second_column<E, C, C2>(
        label: &str,
        exponents: &[E],
        coefficients: &[C],
        coefficients2: &[C2],
    ) -> Result<Self, BasisError>
    where
        E: Copy + Into<f64>,
        C: Copy + Into<f64>,
        C2: Copy + Into<f64>,
    {
        let label = label.parse()?;
        Self::from_columns(
            label,
            to_f64(exponents),
            to_f64(coefficients),
            Some(to_f64(coefficients2)),
        )
    }

    pub(crate) fn from_columns(
        label: ShellLabel,
        exponents: Vec<f64>,
        coefficients: Vec<f64>,
        coefficients2: Option<Vec<f64>>,
    ) -> Result<Self, BasisError> {
        if exponents.is_empty() {
            return Err(BasisError::ShapeMismatch(
                "a contraction needs at least one exponent".into(),
            ));
        }
        if exponents.len() != coefficients.len() {
            return Err(BasisError::ShapeMismatch(format!(
                "got {} exponents but {} coefficients",
                exponents.len(),
                coefficients.len()
            )));
        }
        if let Some(c2) = &coefficients2 {
            if c2.len() != coefficients.len() {
                return Err(BasisError::ShapeMismatch(format!(
                    "second coefficient column has {} entries, expected {}",
                    c2.len(),
                    coefficients.len()
                )));
            }
        }
        check_exponents(&exponents)?;
        check_coefficients(&coefficients)?;
        if let Some(c2) = &coefficients2 {
            check_coefficients(c2)?;
        }

        let (layout, columns) = match coefficients2 {
            Some(c2) => (ColumnLayout::Paired, vec![exponents, coefficients, c2]),
            None => (ColumnLayout::Single, vec![exponents, coefficients]),
        };
        let values = DMatrix::from_fn(columns[0].len(), columns.len(), |r, c| columns[c][r]);

        Ok(Self {
            label,
            layout,
            values,
        })
    }

    pub fn label(&self) -> ShellLabel {
        self.label
    }

    pub fn layout(&self) -> ColumnLayout {
        self.layout
    }

    /// Returns `true` if rows carry a second coefficient column.
    pub fn has_second_column(&self) -> bool {
        self.layout == ColumnLayout::Paired
    }

    /// Number of primitives.
    pub fn len(&self) -> usize {
        self.values.nrows()
    }

    /// Always `false`; an empty contraction cannot be constructed.
    pub fn is_empty(&self) -> bool {
        self.values.nrows() == 0
    }

    pub fn exponents(&self) -> Vec<f64> {
        self.column(0)
    }

    pub fn coefficients(&self) -> Vec<f64> {
        self.column(1)
    }

    /// Returns the second coefficient column, or `None` for single-column contractions.
    pub fn coefficients2(&self) -> Option<Vec<f64>> {
        self.has_second_column().then(|| self.column(2))
    }

    /// Replaces the exponent column, re-checking that every exponent is positive.
    ///
    /// # Errors
    ///
    /// Returns [`BasisError::ShapeMismatch`] if the length differs from
    /// [`Contraction::len`], or [`BasisError::InvalidExponent`].
    pub fn set_exponents<T: Copy + Into<f64>>(&mut self, exponents: &[T]) -> Result<(), BasisError> {
        let exponents = to_f64(exponents);
        self.check_column_len(exponents.len())?;
        check_exponents(&exponents)?;
        self.set_column(0, &exponents);
        Ok(())
    }

    /// Replaces the first coefficient column.
    pub fn set_coefficients<T: Copy + Into<f64>>(
        &mut self,
        coefficients: &[T],
    ) -> Result<(), BasisError> {
        let coefficients = to_f64(coefficients);
        self.check_column_len(coefficients.len())?;
        check_coefficients(&coefficients)?;
        self.set_column(1, &coefficients);
        Ok(())
    }

    /// Replaces the second coefficient column.
    ///
    /// # Errors
    ///
    /// Returns [`BasisError::ShapeMismatch`] if this contraction has no second
    /// column or the length is wrong.
    pub fn set_coefficients2<T: Copy + Into<f64>>(
        &mut self,
        coefficients2: &[T],
    ) -> Result<(), BasisError> {
        if !self.has_second_column() {
            return Err(BasisError::ShapeMismatch(format!(
                "{} shell has no second coefficient column",
                self.label
            )));
        }
        let coefficients2 = to_f64(coefficients2);
        self.check_column_len(coefficients2.len())?;
        check_coefficients(&coefficients2)?;
        self.set_column(2, &coefficients2);
        Ok(())
    }

    /// Returns row `index` as `[exponent, coefficient(, coefficient2)]`.
    pub fn row(&self, index: usize) -> Option<Vec<f64>> {
        (index < self.len()).then(|| self.values.row(index).iter().copied().collect())
    }

    /// Replaces row `index`.
    ///
    /// # Errors
    ///
    /// Returns [`BasisError::IndexOutOfRange`], [`BasisError::ShapeMismatch`]
    /// if the row length differs from the layout arity, or
    /// [`BasisError::InvalidExponent`] if the new exponent is not positive.
    pub fn set_row<T: Copy + Into<f64>>(&mut self, index: usize, row: &[T]) -> Result<(), BasisError> {
        if index >= self.len() {
            return Err(BasisError::IndexOutOfRange {
                index,
                len: self.len(),
            });
        }
        let row = to_f64(row);
        if row.len() != self.layout.arity() {
            return Err(BasisError::ShapeMismatch(format!(
                "incorrect row size, expected {} elements but got {}",
                self.layout.arity(),
                row.len()
            )));
        }
        check_exponents(&row[..1])?;
        check_coefficients(&row[1..])?;
        for (col, value) in row.into_iter().enumerate() {
            self.values[(index, col)] = value;
        }
        Ok(())
    }

    /// Iterates over the rows in order.
    pub fn primitives(&self) -> impl Iterator<Item = Primitive> + '_ {
        self.values.row_iter().map(move |row| Primitive {
            exponent: row[0],
            coefficient: row[1],
            coefficient2: match self.layout {
                ColumnLayout::Paired => Some(row[2]),
                ColumnLayout::Single => None,
            },
        })
    }

    /// The raw numeric table, one row per primitive.
    pub fn as_matrix(&self) -> &DMatrix<f64> {
        &self.values
    }

    /// An owned copy of the numeric table; changes to it do not affect `self`.
    pub fn to_matrix(&self) -> DMatrix<f64> {
        self.values.clone()
    }

    /// Splits the shell into single-primitive shells with unit coefficients.
    ///
    /// A shared label yields every primitive of its first sub-shell followed
    /// by every primitive of the second.
    pub fn decontracted(&self) -> Vec<Contraction> {
        let exponents = self.exponents();
        self.label
            .components()
            .into_iter()
            .flat_map(|am| {
                exponents.iter().map(move |&exp| Contraction {
                    label: ShellLabel::Single(am),
                    layout: ColumnLayout::Single,
                    values: DMatrix::from_row_slice(1, 2, &[exp, 1.0]),
                })
            })
            .collect()
    }

    /// Re-checks the construction invariants.
    pub fn validate(&self) -> Result<(), BasisError> {
        if self.is_empty() {
            return Err(BasisError::ShapeMismatch(
                "a contraction needs at least one exponent".into(),
            ));
        }
        if self.values.ncols() != self.layout.arity() {
            return Err(BasisError::ShapeMismatch(format!(
                "expected {} columns, found {}",
                self.layout.arity(),
                self.values.ncols()
            )));
        }
        check_exponents(&self.exponents())?;
        check_coefficients(&self.coefficients())?;
        match self.coefficients2() {
            Some(c2) => check_coefficients(&c2),
            None => Ok(()),
        }
    }

    /// Compares two contractions, allowing `epsilon` absolute difference per value.
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.label == other.label
            && self.layout == other.layout
            && self.values.shape() == other.values.shape()
            && self
                .values
                .iter()
                .zip(other.values.iter())
                .all(|(a, b)| (a - b).abs() <= epsilon)
    }

    /// A short description such as `<Contraction S 2>` or `<Contraction SP 3x2>`.
    pub fn summary(&self) -> String {
        match self.layout {
            ColumnLayout::Single => format!("<Contraction {} {}>", self.label, self.len()),
            ColumnLayout::Paired => format!("<Contraction {} {}x2>", self.label, self.len()),
        }
    }

    /// Formats the shell block in the given dialect.
    pub fn render(&self, dialect: Dialect) -> String {
        let mut out = String::new();
        dialect.strategy().write_contraction(self, &mut out);
        out
    }

    /// Formats the shell block in the dialect named `dialect`.
    ///
    /// # Errors
    ///
    /// Returns [`BasisError::UnsupportedDialect`] for an unknown name.
    pub fn print(&self, dialect: &str) -> Result<String, BasisError> {
        Ok(self.render(dialect.parse()?))
    }

    fn column(&self, col: usize) -> Vec<f64> {
        self.values.column(col).iter().copied().collect()
    }

    fn set_column(&mut self, col: usize, values: &[f64]) {
        for (row, &value) in values.iter().enumerate() {
            self.values[(row, col)] = value;
        }
    }

    fn check_column_len(&self, len: usize) -> Result<(), BasisError> {
        if len != self.len() {
            return Err(BasisError::ShapeMismatch(format!(
                "column has {} entries, expected {}",
                len,
                self.len()
            )));
        }
        Ok(())
    }
}

impl fmt::Display for Contraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(Dialect::Gaussian94))
    }
}

/// Checks that every exponent is finite and strictly positive.
pub fn check_exponents(exponents: &[f64]) -> Result<(), BasisError> {
    match exponents.iter().find(|&&exp| !(exp.is_finite() && exp > 0.0)) {
        Some(&bad) => Err(BasisError::InvalidExponent(bad)),
        None => Ok(()),
    }
}

/// Checks that every coefficient is finite; only fixed-point numbers can be written.
pub fn check_coefficients(coefficients: &[f64]) -> Result<(), BasisError> {
    match coefficients.iter().find(|c| !c.is_finite()) {
        Some(&bad) => Err(BasisError::InvalidValue(format!(
            "coefficients must be finite, got {}",
            bad
        ))),
        None => Ok(()),
    }
}

fn to_f64<T: Copy + Into<f64>>(values: &[T]) -> Vec<f64> {
    values.iter().map(|&v| v.into()).collect()
}
