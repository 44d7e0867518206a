use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref RE_CHROM: Regex = Regex::new(r"(?i)^(?:chr)?(\d+|x|y|mt?)$").unwrap();
}

/// Coarse placement of a chromosome. The derived ordering is the sort order:
/// autosomes by number, then X, Y, the mitochondrion and everything else.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ChromRank {
    Autosome(u64),
    X,
    Y,
    Mito,
    Other,
}

impl ChromRank {
    /// ```
    /// # use ltrint::libs::chrom::ChromRank;
    /// assert_eq!(ChromRank::of("chr1"), ChromRank::Autosome(1));
    /// assert_eq!(ChromRank::of("22"), ChromRank::Autosome(22));
    /// assert_eq!(ChromRank::of("chrx"), ChromRank::X);
    /// assert_eq!(ChromRank::of("Y"), ChromRank::Y);
    /// assert_eq!(ChromRank::of("chrM"), ChromRank::Mito);
    /// assert_eq!(ChromRank::of("chrMT"), ChromRank::Mito);
    /// assert_eq!(ChromRank::of("chr1_KI270706v1_random"), ChromRank::Other);
    /// assert_eq!(ChromRank::of("chrUn_GL000220v1"), ChromRank::Other);
    /// ```
    pub fn of(chr: &str) -> Self {
        let caps = match RE_CHROM.captures(chr) {
            Some(caps) => caps,
            None => return ChromRank::Other,
        };

        let symbol = caps[1].to_ascii_uppercase();
        match symbol.as_str() {
            "X" => ChromRank::X,
            "Y" => ChromRank::Y,
            "M" | "MT" => ChromRank::Mito,
            digits => match digits.parse::<u64>() {
                Ok(n) => ChromRank::Autosome(n),
                Err(_) => ChromRank::Other,
            },
        }
    }
}

/// Sort key of a chromosome name. Names of equal rank fall back to lexical
/// order, so distinct names never compare equal.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ChromKey {
    rank: ChromRank,
    name: String,
}

impl ChromKey {
    pub fn new(chr: &str) -> Self {
        Self {
            rank: ChromRank::of(chr),
            name: chr.to_string(),
        }
    }

    pub fn rank(&self) -> &ChromRank {
        &self.rank
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Ordering of chromosome names used for grouping and output.
pub trait ChromOrder {
    type Key: Ord + Clone + Send + Sync;

    fn key(&self, chr: &str) -> Self::Key;
}

/// chr1..chrN, chrX, chrY, chrM, then unplaced contigs lexically.
#[derive(Debug, Clone, Copy, Default)]
pub struct NaturalOrder;

impl ChromOrder for NaturalOrder {
    type Key = ChromKey;

    fn key(&self, chr: &str) -> ChromKey {
        ChromKey::new(chr)
    }
}

/// Sort chromosome names with `order`.
///
/// ```
/// # use ltrint::libs::chrom::{sort_names, NaturalOrder};
/// let mut names = vec!["chrY", "chr10", "chrUn_b", "chrM", "chr2", "chrX", "chrUn_a", "chr1"];
/// sort_names(&mut names, &NaturalOrder);
/// assert_eq!(
///     names,
///     vec!["chr1", "chr2", "chr10", "chrX", "chrY", "chrM", "chrUn_a", "chrUn_b"]
/// );
/// ```
pub fn sort_names<S: AsRef<str>, O: ChromOrder>(names: &mut [S], order: &O) {
    names.sort_by_cached_key(|name| order.key(name.as_ref()));
}
