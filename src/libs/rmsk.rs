//! UCSC RepeatMasker table (`rmsk.txt`) reader.
//!
//! Columns, tab-separated:
//!
//! ```text
//! bin swScore milliDiv milliDel milliIns genoName genoStart genoEnd genoLeft
//! strand repName repClass repFamily repStart repEnd repLeft id
//! ```
//!
//! Dumps without the leading `bin` column (16 fields) are also accepted.

use crate::libs::error::CurateError;
use crate::libs::feature::RawFeature;
use std::io::BufRead;

/// Number of fields without and with the `bin` column.
const PLAIN_FIELDS: usize = 16;
const BIN_FIELDS: usize = 17;

/// Parse one data line. `line_no` is 1-based and only used in errors.
/// Trailing tabs and `\r` are ignored before the columns are counted.
///
/// ```
/// # use ltrint::libs::rmsk::parse_line;
/// let line = "585\t1504\t13\t4\t13\tchr1\t10000\t10468\t-248945954\t+\t(TAACCC)n\tSimple_repeat\tSimple_repeat\t1\t471\t0\t1";
/// let raw = parse_line(line, 1).unwrap();
/// assert_eq!(raw.chr, "chr1");
/// assert_eq!((raw.start, raw.end), (10000, 10468));
/// assert_eq!(raw.strand, "+");
/// assert_eq!(raw.subfamily, "(TAACCC)n");
/// assert_eq!(raw.class, "Simple_repeat");
///
/// // without bin
/// let line = "1504\t13\t4\t13\tchr1\t10000\t10468\t-248945954\t-\tLTR5_Hs\tLTR\tERVK\t1\t471\t0\t1";
/// let raw = parse_line(line, 1).unwrap();
/// assert_eq!(raw.strand, "-");
/// assert_eq!(raw.family, "ERVK");
/// ```
pub fn parse_line(line: &str, line_no: usize) -> Result<RawFeature, CurateError> {
    let fields: Vec<&str> = line
        .trim_end_matches(&['\t', '\r'][..])
        .split('\t')
        .collect();
    // index of genoName, shifted by the leading `bin` column
    let offset = match fields.len() {
        PLAIN_FIELDS => 4,
        BIN_FIELDS => 5,
        n => {
            return Err(CurateError::schema(
                line_no,
                format!(
                    "expected {} or {} columns, found {}",
                    PLAIN_FIELDS, BIN_FIELDS, n
                ),
            ))
        }
    };

    let parse_coord = |name: &str, s: &str| {
        s.trim().parse::<u64>().map_err(|_| {
            CurateError::schema(line_no, format!("invalid {}: {}", name, s))
        })
    };

    let strand = fields[offset + 4].trim();
    if strand.is_empty() {
        return Err(CurateError::schema(line_no, "empty strand"));
    }

    let start = parse_coord("genoStart", fields[offset + 1])?;
    let end = parse_coord("genoEnd", fields[offset + 2])?;
    if start > end {
        return Err(CurateError::schema(
            line_no,
            format!("genoStart {} > genoEnd {}", start, end),
        ));
    }

    Ok(RawFeature {
        chr: fields[offset].to_string(),
        start,
        end,
        strand: strand.to_string(),
        subfamily: fields[offset + 5].to_string(),
        class: fields[offset + 6].to_string(),
        family: fields[offset + 7].to_string(),
    })
}

/// Read all records, skipping blank lines and `#` headers.
pub fn read_rmsk<R: BufRead>(reader: R) -> anyhow::Result<Vec<RawFeature>> {
    let mut features = vec![];

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }
        features.push(parse_line(&line, i + 1)?);
    }

    Ok(features)
}
