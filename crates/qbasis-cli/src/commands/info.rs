use super::read_basis_set;
use crate::cli::InfoArgs;
use crate::config::FileConfig;
use crate::error::Result;
use qbasis::BasisSet;

pub fn run(args: InfoArgs, file_config: &FileConfig) -> Result<()> {
    let config = file_config.merge_with_cli(args.input_dialect.from, None, None);
    let set = read_basis_set(&args.input, config.input_dialect)?;
    print!("{}", describe(&set));
    Ok(())
}

/// One `<Basis ...>` line per atom followed by its indented shell summaries.
pub fn describe(set: &BasisSet) -> String {
    let mut out = String::new();
    for basis in set {
        out.push_str(&format!("{}\n", basis.summary()));
        for shell in basis {
            out.push_str(&format!("    {}\n", shell.summary()));
        }
    }
    out.push_str(&format!(
        "{} atom(s), {} shell(s)\n",
        set.len(),
        set.iter().map(|b| b.len()).sum::<usize>()
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fixtures::WATER_GBS;

    #[test]
    fn describes_every_atom_and_shell() {
        let set = BasisSet::read(WATER_GBS, "gaussian94").unwrap();
        assert_eq!(
            describe(&set),
            "\
<Basis H 1>
    <Contraction S 2>
<Basis O 2>
    <Contraction S 2>
    <Contraction SP 2x2>
2 atom(s), 3 shell(s)
"
        );
    }

    #[test]
    fn empty_set_has_only_totals() {
        assert_eq!(describe(&BasisSet::default()), "0 atom(s), 0 shell(s)\n");
    }
}
