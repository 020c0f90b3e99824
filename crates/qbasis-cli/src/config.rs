use crate::error::{CliError, Result};
use crate::utils::parser::AtomList;
use qbasis::Dialect;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

pub const DEFAULT_DIALECT: Dialect = Dialect::Gaussian94;

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
struct FileDialectConfig {
    input: Option<Dialect>,
    output: Option<Dialect>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
struct FileOutputConfig {
    atoms: Option<Vec<String>>,
}

/// The optional TOML configuration file.
///
/// ```toml
/// [dialects]
/// input = "gaussian94"
/// output = "gamess"
///
/// [output]
/// atoms = ["H", "C"]
/// ```
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileConfig {
    dialects: Option<FileDialectConfig>,
    output: Option<FileOutputConfig>,
}

/// Settings for one command after merging CLI arguments over the file.
#[derive(Debug, Clone, PartialEq)]
pub struct CodecConfig {
    pub input_dialect: Dialect,
    pub output_dialect: Dialect,
    pub atoms: Option<Vec<String>>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `path` if given, otherwise returns an empty configuration.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    fn validate(&self) -> Result<()> {
        let Some(atoms) = self.output.as_ref().and_then(|o| o.atoms.as_ref()) else {
            return Ok(());
        };
        if atoms.is_empty() {
            return Err(CliError::Config(
                "`output.atoms` must list at least one atom when present.".to_string(),
            ));
        }
        for (i, atom) in atoms.iter().enumerate() {
            if atom.trim().is_empty() {
                return Err(CliError::Config(
                    "`output.atoms` cannot contain an empty label.".to_string(),
                ));
            }
            if atoms[..i].contains(atom) {
                return Err(CliError::Config(format!(
                    "`output.atoms` lists '{}' more than once.",
                    atom
                )));
            }
        }
        Ok(())
    }

    /// Applies command-line overrides on top of the file and the built-in defaults.
    pub fn merge_with_cli(
        &self,
        from: Option<Dialect>,
        to: Option<Dialect>,
        atoms: Option<&AtomList>,
    ) -> CodecConfig {
        let dialects = self.dialects.clone().unwrap_or_default();
        let file_atoms = self.output.as_ref().and_then(|o| o.atoms.clone());

        CodecConfig {
            input_dialect: from.or(dialects.input).unwrap_or(DEFAULT_DIALECT),
            output_dialect: to.or(dialects.output).unwrap_or(DEFAULT_DIALECT),
            atoms: atoms.map(|a| a.0.clone()).or(file_atoms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::{TempDir, tempdir};

    fn write_config_file(dir: &TempDir, content: &str) -> PathBuf {
        let file_path = dir.path().join("qbasis.toml");
        fs::write(&file_path, content).unwrap();
        file_path
    }

    #[test]
    fn defaults_apply_without_file() {
        let config = FileConfig::load(None).unwrap();
        assert_eq!(
            config.merge_with_cli(None, None, None),
            CodecConfig {
                input_dialect: Dialect::Gaussian94,
                output_dialect: Dialect::Gaussian94,
                atoms: None,
            }
        );
    }

    #[test]
    fn file_values_are_used_when_cli_is_silent() {
        let dir = tempdir().unwrap();
        let path = write_config_file(
            &dir,
            r#"
            [dialects]
            input = "gamess"
            output = "gaussian94"

            [output]
            atoms = ["C", "H"]
            "#,
        );
        let merged = FileConfig::from_file(&path)
            .unwrap()
            .merge_with_cli(None, None, None);
        assert_eq!(merged.input_dialect, Dialect::Gamess);
        assert_eq!(merged.output_dialect, Dialect::Gaussian94);
        assert_eq!(merged.atoms, Some(vec!["C".to_string(), "H".to_string()]));
    }

    #[test]
    fn cli_overrides_file() {
        let dir = tempdir().unwrap();
        let path = write_config_file(
            &dir,
            "[dialects]\ninput = \"gamess\"\n[output]\natoms = [\"C\"]\n",
        );
        let atoms = AtomList(vec!["O".to_string()]);
        let merged = FileConfig::from_file(&path).unwrap().merge_with_cli(
            Some(Dialect::Gaussian94),
            Some(Dialect::Gamess),
            Some(&atoms),
        );
        assert_eq!(merged.input_dialect, Dialect::Gaussian94);
        assert_eq!(merged.output_dialect, Dialect::Gamess);
        assert_eq!(merged.atoms, Some(vec!["O".to_string()]));
    }

    #[test]
    fn unknown_dialect_in_file_is_rejected() {
        let dir = tempdir().unwrap();
        let path = write_config_file(&dir, "[dialects]\noutput = \"bagel\"\n");
        assert!(matches!(
            FileConfig::from_file(&path),
            Err(CliError::FileParsing { .. })
        ));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = tempdir().unwrap();
        let path = write_config_file(&dir, "[dialects]\ninput = \"gamess\"\nformat = \"x\"\n");
        assert!(matches!(
            FileConfig::from_file(&path),
            Err(CliError::FileParsing { .. })
        ));
    }

    #[test]
    fn bad_atom_lists_are_config_errors() {
        let dir = tempdir().unwrap();
        let path = write_config_file(&dir, "[output]\natoms = []\n");
        assert!(matches!(FileConfig::from_file(&path), Err(CliError::Config(_))));

        let path = write_config_file(&dir, "[output]\natoms = [\"H\", \"H\"]\n");
        assert!(matches!(FileConfig::from_file(&path), Err(CliError::Config(_))));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempdir().unwrap();
        assert!(matches!(
            FileConfig::load(Some(&dir.path().join("absent.toml"))),
            Err(CliError::Io(_))
        ));
    }
}
