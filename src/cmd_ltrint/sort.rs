use clap::*;
use ltrint::libs::chrom::{ChromOrder, NaturalOrder};
use ltrint::libs::filter::NoiseFilter;
use std::io::Write;

// Create clap subcommand arguments
pub fn make_subcommand() -> Command {
    Command::new("sort")
        .about("Filter, then sort records by chromosome and position")
        .after_help(
            r###"
Chromosomes are ordered chr1..chrN, chrX, chrY, chrM, then the remaining
contigs lexically. The `chr` prefix is optional. Records on the same
chromosome are ordered by start, then end.

Output is the same as `ltrint filter`.

"###,
        )
        .arg(
            Arg::new("infile")
                .required(true)
                .num_args(1)
                .index(1)
                .help("RepeatMasker rmsk table. [stdin] for standard input"),
        )
        .arg(super::exclude_arg())
        .arg(
            Arg::new("outfile")
                .short('o')
                .long("outfile")
                .num_args(1)
                .default_value("stdout")
                .help("Output filename. [stdout] for screen"),
        )
}

// command implementation
pub fn execute(args: &ArgMatches) -> anyhow::Result<()> {
    let infile = args.get_one::<String>("infile").unwrap();
    let filter = NoiseFilter::new(&super::excluded(args));

    let raws = super::load_rmsk(infile)?;
    let mut kept = filter.apply(&raws);
    let order = NaturalOrder;
    // stable, so equal positions keep input order
    kept.sort_by_cached_key(|r| (order.key(&r.chr), r.start, r.end));

    let mut writer = ltrint::writer(args.get_one::<String>("outfile").unwrap())?;
    for raw in &kept {
        writer.write_fmt(format_args!("{}", raw))?;
    }
    writer.flush()?;

    Ok(())
}
