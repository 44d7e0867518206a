use std::fmt;
use std::str::FromStr;

//----------------------------
// Strand
//----------------------------
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Strand {
    Plus,
    Minus,
}

impl Strand {
    /// ```
    /// # use ltrint::libs::feature::Strand;
    /// assert_eq!(Strand::Plus.flip(), Strand::Minus);
    /// assert_eq!(Strand::Minus.flip(), Strand::Plus);
    /// ```
    pub fn flip(self) -> Self {
        match self {
            Strand::Plus => Strand::Minus,
            Strand::Minus => Strand::Plus,
        }
    }
}

impl FromStr for Strand {
    type Err = String;

    /// Only `+` and `-` are valid strands.
    ///
    /// ```
    /// # use ltrint::libs::feature::Strand;
    /// assert_eq!("+".parse::<Strand>().unwrap(), Strand::Plus);
    /// assert_eq!("-".parse::<Strand>().unwrap(), Strand::Minus);
    /// assert!(".".parse::<Strand>().is_err());
    /// assert!("C".parse::<Strand>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Strand::Plus),
            "-" => Ok(Strand::Minus),
            _ => Err(format!("invalid strand: {}", s)),
        }
    }
}

impl fmt::Display for Strand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Strand::Plus => write!(f, "+"),
            Strand::Minus => write!(f, "-"),
        }
    }
}

//----------------------------
// Span
//----------------------------
/// A genomic interval, 0-based half-open `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span {
    pub start: u64,
    pub end: u64,
}

impl Span {
    pub fn new(start: u64, end: u64) -> Self {
        Self { start, end }
    }

    /// Smallest span covering both.
    ///
    /// ```
    /// # use ltrint::libs::feature::Span;
    /// let a = Span::new(200, 400);
    /// let b = Span::new(350, 500);
    /// assert_eq!(a.union(&b), Span::new(200, 500));
    /// // disjoint spans are bridged
    /// assert_eq!(Span::new(10, 20).union(&Span::new(50, 60)), Span::new(10, 60));
    /// ```
    pub fn union(&self, other: &Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// Reflect the span on a sequence of `len` bases, `x -> len - x`.
    #[cfg(test)]
    pub(crate) fn mirror(&self, len: u64) -> Span {
        Span {
            start: len - self.end,
            end: len - self.start,
        }
    }
}

//----------------------------
// RawFeature
//----------------------------
/// One annotation record as read from disk. The strand is kept verbatim so
/// that records with unusable strands can be dropped by the filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawFeature {
    pub chr: String,
    pub start: u64,
    pub end: u64,
    pub strand: String,
    pub subfamily: String,
    pub class: String,
    pub family: String,
}

impl RawFeature {
    /// ```
    /// # use ltrint::libs::feature::RawFeature;
    /// let raw = RawFeature::new("chr1", 100, 200, "+", "LTR5_Hs", "LTR");
    /// assert_eq!(raw.chr, "chr1");
    /// assert_eq!(raw.family, "");
    /// ```
    pub fn new(chr: &str, start: u64, end: u64, strand: &str, subfamily: &str, class: &str) -> Self {
        Self {
            chr: chr.to_string(),
            start,
            end,
            strand: strand.to_string(),
            subfamily: subfamily.to_string(),
            class: class.to_string(),
            family: String::new(),
        }
    }
}

impl From<&Feature> for RawFeature {
    fn from(f: &Feature) -> Self {
        Self {
            chr: f.chr.clone(),
            start: f.span.start,
            end: f.span.end,
            strand: f.strand.to_string(),
            subfamily: f.subfamily.clone(),
            class: f.class.clone(),
            family: f.family.clone(),
        }
    }
}

impl fmt::Display for RawFeature {
    /// Tab-separated `chr start end strand subfamily class family`
    ///
    /// ```
    /// # use ltrint::libs::feature::RawFeature;
    /// let mut raw = RawFeature::new("chrX", 5, 15, "-", "HERVK-int", "LTR");
    /// raw.family = "ERVK".to_string();
    /// assert_eq!(raw.to_string(), "chrX\t5\t15\t-\tHERVK-int\tLTR\tERVK\n");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}",
            self.chr, self.start, self.end, self.strand, self.subfamily, self.class, self.family
        )
    }
}

//----------------------------
// Feature
//----------------------------
/// A filtered annotation record with a valid strand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feature {
    pub chr: String,
    pub span: Span,
    pub strand: Strand,
    pub subfamily: String,
    pub class: String,
    pub family: String,
}

impl TryFrom<&RawFeature> for Feature {
    type Error = String;

    fn try_from(raw: &RawFeature) -> Result<Self, Self::Error> {
        Ok(Self {
            chr: raw.chr.clone(),
            span: Span::new(raw.start, raw.end),
            strand: raw.strand.parse()?,
            subfamily: raw.subfamily.clone(),
            class: raw.class.clone(),
            family: raw.family.clone(),
        })
    }
}
