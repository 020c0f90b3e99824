use super::{read_basis_set, select_atoms, write_basis_set};
use crate::cli::ConvertArgs;
use crate::config::FileConfig;
use crate::error::Result;
use tracing::info;

pub fn run(args: ConvertArgs, file_config: &FileConfig) -> Result<()> {
    let config = file_config.merge_with_cli(
        args.input_dialect.from,
        args.output_dialect.to,
        args.atoms.as_ref(),
    );
    info!(
        "Converting {} -> {}",
        config.input_dialect, config.output_dialect
    );

    let set = read_basis_set(&args.input, config.input_dialect)?;
    let set = select_atoms(set, config.atoms.as_deref())?;
    write_basis_set(&set, &args.output, config.output_dialect)?;

    println!(
        "✓ Wrote {} atom(s) as {} to: {}",
        set.len(),
        config.output_dialect,
        args.output.display()
    );
    Ok(())
}
