pub mod convert;
pub mod decontract;
pub mod info;

use crate::error::{CliError, Result};
use qbasis::{BasisSet, BasisSetFile, Dialect};
use std::path::Path;
use tracing::info;

pub(crate) fn read_basis_set(path: &Path, dialect: Dialect) -> Result<BasisSet> {
    info!("Loading {} basis set from {:?}", dialect, path);
    BasisSet::read_from_path(path, dialect).map_err(|e| CliError::FileParsing {
        path: path.to_path_buf(),
        source: e.into(),
    })
}

pub(crate) fn write_basis_set(set: &BasisSet, path: &Path, dialect: Dialect) -> Result<()> {
    info!("Writing {} atom(s) as {} to {:?}", set.len(), dialect, path);
    set.write_to_path(dialect, path)
        .map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
}

/// Restricts `set` to `atoms`, in that order, when a selection is configured.
pub(crate) fn select_atoms(set: BasisSet, atoms: Option<&[String]>) -> Result<BasisSet> {
    match atoms {
        Some(atoms) => Ok(set.subset(atoms)?),
        None => Ok(set),
    }
}
