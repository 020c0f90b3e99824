use super::{read_basis_set, select_atoms, write_basis_set};
use crate::cli::DecontractArgs;
use crate::config::FileConfig;
use crate::error::Result;
use tracing::info;

pub fn run(args: DecontractArgs, file_config: &FileConfig) -> Result<()> {
    let config =
        file_config.merge_with_cli(args.input_dialect.from, args.output_dialect.to, None);

    let set = read_basis_set(&args.input, config.input_dialect)?;
    let set = select_atoms(set, config.atoms.as_deref())?;

    let before: usize = set.iter().map(|b| b.len()).sum();
    let decontracted = set.decontracted();
    let after: usize = decontracted.iter().map(|b| b.len()).sum();
    info!("Decontracted {} shell(s) into {} primitive shell(s).", before, after);

    write_basis_set(&decontracted, &args.output, config.output_dialect)?;

    println!(
        "✓ Decontracted {} shell(s) into {}; written to: {}",
        before,
        after,
        args.output.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{InputDialectArgs, OutputDialectArgs};
    use crate::commands::fixtures::WATER_GBS;
    use qbasis::BasisSet;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn every_shell_becomes_a_single_primitive() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("water.gbs");
        let output = dir.path().join("water-decon.gbs");
        fs::write(&input, WATER_GBS).unwrap();

        let args = DecontractArgs {
            input: input.clone(),
            output: output.clone(),
            input_dialect: InputDialectArgs::default(),
            output_dialect: OutputDialectArgs::default(),
        };
        run(args, &FileConfig::default()).unwrap();

        let set = BasisSet::read(&fs::read_to_string(&output).unwrap(), "gaussian94").unwrap();
        assert_eq!(set.get("H").unwrap().len(), 2);
        assert_eq!(set.get("O").unwrap().len(), 2 + 4);
        for basis in &set {
            for shell in basis {
                assert_eq!(shell.len(), 1);
                assert_eq!(shell.coefficients(), vec![1.0]);
                assert!(!shell.has_second_column());
            }
        }
    }
}
