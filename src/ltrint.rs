extern crate clap;
use clap::*;

mod cmd_ltrint;

fn main() -> anyhow::Result<()> {
    let app = Command::new("ltrint")
        .version(crate_version!())
        .author(crate_authors!())
        .about("`ltrint` - curate complete LTR-INT-LTR retrotransposons")
        .propagate_version(true)
        .arg_required_else_help(true)
        .color(ColorChoice::Auto)
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::Count)
                .help("More log messages, repeat for debug output"),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .short('q')
                .global(true)
                .action(ArgAction::SetTrue)
                .conflicts_with("verbose")
                .help("Only report errors"),
        )
        .subcommand(cmd_ltrint::complete::make_subcommand())
        .subcommand(cmd_ltrint::filter::make_subcommand())
        .subcommand(cmd_ltrint::sort::make_subcommand())
        .after_help(
            r###"Subcommands:

* complete - Find LTR-INT-LTR elements in a RepeatMasker table
* filter   - Drop noise classes and records without a strand
* sort     - Filter, then sort records by chromosome and position

Input is a UCSC rmsk table (`rmsk.txt` or `rmsk.txt.gz`), with or without the
leading `bin` column. Coordinates stay 0-based, half-open.

"###,
        );

    let matches = app.get_matches();
    init_logger(&matches);

    // Check which subcommand the user ran...
    match matches.subcommand() {
        Some(("complete", sub_matches)) => cmd_ltrint::complete::execute(sub_matches),
        Some(("filter", sub_matches)) => cmd_ltrint::filter::execute(sub_matches),
        Some(("sort", sub_matches)) => cmd_ltrint::sort::execute(sub_matches),
        _ => unreachable!(),
    }?;

    Ok(())
}

fn init_logger(matches: &ArgMatches) {
    let level = if matches.get_flag("quiet") {
        log::LevelFilter::Error
    } else {
        match matches.get_count("verbose") {
            0 => log::LevelFilter::Info,
            1 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .format_target(false)
        .init();
}
