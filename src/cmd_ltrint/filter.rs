use clap::*;
use ltrint::libs::filter::NoiseFilter;
use std::io::Write;

// Create clap subcommand arguments
pub fn make_subcommand() -> Command {
    Command::new("filter")
        .about("Drop noise classes and records without a strand")
        .after_help(
            r###"
Keep rmsk records whose repClass is not excluded and whose strand is + or -.

Output is tab-separated, one record per line:
    chr start end strand subfamily class family

Examples:
1. Default noise classes (Simple_repeat, Low_complexity, Satellite):
   ltrint filter rmsk.txt.gz -o rmsk.tsv

2. Also drop rRNA:
   ltrint filter rmsk.txt.gz -e Simple_repeat Low_complexity Satellite rRNA

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
    let kept = filter.apply(&raws);
    log::info!("Kept {} of {} records", kept.len(), raws.len());

    let mut writer = ltrint::writer(args.get_one::<String>("outfile").unwrap())?;
    for raw in &kept {
        writer.write_fmt(format_args!("{}", raw))?;
    }
    writer.flush()?;

    Ok(())
}
