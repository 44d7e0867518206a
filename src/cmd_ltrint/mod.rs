//! Subcommand modules for the `ltrint` binary.

pub mod complete;
pub mod filter;
pub mod sort;

use clap::*;

/// `--exclude` shared by the subcommands that filter.
pub fn exclude_arg() -> Arg {
    Arg::new("exclude")
        .long("exclude")
        .short('e')
        .num_args(1..)
        .action(ArgAction::Append)
        .default_values(ltrint::libs::filter::NOISE_CLASSES)
        .help("Repeat classes to drop")
}

pub fn excluded(args: &ArgMatches) -> Vec<String> {
    args.get_many::<String>("exclude")
        .map(|vals| vals.cloned().collect())
        .unwrap_or_default()
}

/// Read and parse the rmsk table.
pub fn load_rmsk(infile: &str) -> anyhow::Result<Vec<ltrint::libs::feature::RawFeature>> {
    use anyhow::Context;

    let reader = ltrint::reader(infile)?;
    let raws = ltrint::libs::rmsk::read_rmsk(reader)
        .with_context(|| format!("reading RepeatMasker records from {}", infile))?;
    log::info!("Loaded {} RepeatMasker records", raws.len());

    Ok(raws)
}
