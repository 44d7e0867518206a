use clap::*;
use ltrint::libs::chrom::NaturalOrder;
use ltrint::libs::curate::{curate, Params};
use ltrint::libs::element::header_row;
use std::io::Write;

// Create clap subcommand arguments
pub fn make_subcommand() -> Command {
    Command::new("complete")
        .about("Find complete LTR-INT-LTR elements")
        .after_help(
            r###"
Reconstruct complete proviral elements: an INT record flanked on both sides by
LTR records of the given subfamily, on the same strand and chromosome.

Process:
1. Drop noise classes (--exclude) and records without a +/- strand
2. For each INT, take the nearest LTR ending at or before its start and the
   nearest LTR starting at or after its end, each within --tolerance bp
3. INTs resolving to the same LTR pair are merged into one element
4. LTRs are reported as 5'/3': on the - strand the downstream LTR is 5'

Output columns:
    chr,strand,ltr_5_start,ltr_5_end,int_start,int_end,ltr_3_start,ltr_3_end

Notes:
* Coordinates are 0-based, half-open, as in the rmsk table.
* Rows are sorted by chromosome (1..N, X, Y, M, others) and INT start.
* Finding nothing is not an error; only the header is written.

Examples:
1. HERVK with its LTR5_Hs:
   ltrint complete rmsk.txt.gz --int HERVK-int --ltr LTR5_Hs -o HERVK.csv

2. Tighter flanks, tab-separated output:
   ltrint complete rmsk.txt.gz -i HERVH-int -l LTR7 -t 500 --tsv

"###,
        )
        .arg(
            Arg::new("infile")
                .required(true)
                .num_args(1)
                .index(1)
                .help("RepeatMasker rmsk table. [stdin] for standard input"),
        )
        .arg(
            Arg::new("int")
                .long("int")
                .short('i')
                .required(true)
                .num_args(1)
                .help("INT subfamily name"),
        )
        .arg(
            Arg::new("ltr")
                .long("ltr")
                .short('l')
                .required(true)
                .num_args(1)
                .help("LTR subfamily name"),
        )
        .arg(
            Arg::new("tolerance")
                .long("tolerance")
                .short('t')
                .num_args(1)
                .default_value("10000")
                .allow_negative_numbers(true)
                .value_parser(value_parser!(i64))
                .help("Largest gap between the INT and a flanking LTR"),
        )
        .arg(super::exclude_arg())
        .arg(
            Arg::new("tsv")
                .long("tsv")
                .action(ArgAction::SetTrue)
                .help("Tab-separated output instead of CSV"),
        )
        .arg(
            Arg::new("parallel")
                .long("parallel")
                .short('p')
                .num_args(1)
                .default_value("1")
                .value_parser(value_parser!(usize))
                .help("Number of threads for parallel processing"),
        )
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
    //----------------------------
    // Args
    //----------------------------
    let infile = args.get_one::<String>("infile").unwrap();
    let params = Params {
        int_subfamily: args.get_one::<String>("int").unwrap().to_string(),
        ltr_subfamily: args.get_one::<String>("ltr").unwrap().to_string(),
        tolerance: *args.get_one::<i64>("tolerance").unwrap(),
        excluded: super::excluded(args),
    };
    let sep = if args.get_flag("tsv") { '\t' } else { ',' };

    // Set the number of threads for rayon
    let opt_parallel = *args.get_one::<usize>("parallel").unwrap();
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(opt_parallel)
        .build()?;

    //----------------------------
    // Operating
    //----------------------------
    let raws = super::load_rmsk(infile)?;
    let elements = pool.install(|| curate(&raws, &params, &NaturalOrder))?;

    //----------------------------
    // Output
    //----------------------------
    let outfile = args.get_one::<String>("outfile").unwrap();
    let mut writer = ltrint::writer(outfile)?;
    writer.write_fmt(format_args!("{}\n", header_row(sep)))?;
    for element in &elements {
        writer.write_fmt(format_args!("{}\n", element.to_row(sep)))?;
    }
    writer.flush()?;

    log::info!("Saved {} complete elements to {}", elements.len(), outfile);

    Ok(())
}
