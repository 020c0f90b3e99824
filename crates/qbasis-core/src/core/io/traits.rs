use super::dialect::Dialect;
use crate::core::error::BasisError;
use crate::core::models::basis_set::BasisSet;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;
use tracing::debug;

/// Reading and writing whole basis set documents.
///
/// Documents are read in full before parsing starts and rendered in full
/// before the first byte is written, so a failed encode never leaves a
/// partially written file behind.
pub trait BasisSetFile: Sized {
    /// The error type for I/O and codec failures.
    type Error: Error + From<io::Error>;

    /// Reads and decodes a document from `reader`.
    ///
    /// # Errors
    ///
    /// Returns an error if reading fails or the text is not a valid document
    /// in `dialect`.
    fn read_from(reader: &mut impl Read, dialect: Dialect) -> Result<Self, Self::Error>;

    /// Encodes `self` and writes the complete document to `writer`.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_to(&self, dialect: Dialect, writer: &mut impl Write) -> Result<(), Self::Error>;

    /// Reads and decodes the document at `path`.
    fn read_from_path<P: AsRef<Path>>(path: P, dialect: Dialect) -> Result<Self, Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader, dialect)
    }

    /// Encodes `self` into a new file at `path`, replacing any existing file.
    fn write_to_path<P: AsRef<Path>>(&self, dialect: Dialect, path: P) -> Result<(), Self::Error> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.write_to(dialect, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}

impl BasisSetFile for BasisSet {
    type Error = BasisError;

    fn read_from(reader: &mut impl Read, dialect: Dialect) -> Result<Self, Self::Error> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        debug!(bytes = text.len(), %dialect, "Read basis set document.");
        BasisSet::parse(&text, dialect)
    }

    fn write_to(&self, dialect: Dialect, writer: &mut impl Write) -> Result<(), Self::Error> {
        let text = self.render(dialect);
        writer.write_all(text.as_bytes())?;
        Ok(())
    }
}
