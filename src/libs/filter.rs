use crate::libs::feature::{Feature, RawFeature, Strand};

/// Repeat classes that never belong to a retrotransposon.
pub const NOISE_CLASSES: [&str; 3] = ["Simple_repeat", "Low_complexity", "Satellite"];

/// Drops noise classes and records without a `+`/`-` strand.
#[derive(Debug, Clone)]
pub struct NoiseFilter {
    excluded: Vec<String>,
}

impl Default for NoiseFilter {
    fn default() -> Self {
        Self::new(&NOISE_CLASSES)
    }
}

impl NoiseFilter {
    pub fn new<S: AsRef<str>>(excluded: &[S]) -> Self {
        Self {
            excluded: excluded.iter().map(|e| e.as_ref().to_string()).collect(),
        }
    }

    /// ```
    /// # use ltrint::libs::filter::NoiseFilter;
    /// # use ltrint::libs::feature::RawFeature;
    /// let filter = NoiseFilter::default();
    /// assert!(filter.keeps(&RawFeature::new("chr1", 0, 10, "+", "LTR5_Hs", "LTR")));
    /// assert!(!filter.keeps(&RawFeature::new("chr1", 0, 10, "+", "(CA)n", "Simple_repeat")));
    /// assert!(!filter.keeps(&RawFeature::new("chr1", 0, 10, ".", "LTR5_Hs", "LTR")));
    /// ```
    pub fn keeps(&self, raw: &RawFeature) -> bool {
        self.keeps_class(raw) && raw.strand.parse::<Strand>().is_ok()
    }

    fn keeps_class(&self, raw: &RawFeature) -> bool {
        !self.excluded.iter().any(|e| *e == raw.class)
    }

    /// Records that pass the filter, in input order.
    pub fn apply(&self, raws: &[RawFeature]) -> Vec<RawFeature> {
        raws.iter().filter(|r| self.keeps(r)).cloned().collect()
    }

    /// Records that pass the filter, typed. Typing rejects the bad strands.
    pub fn features(&self, raws: &[RawFeature]) -> Vec<Feature> {
        raws.iter()
            .filter(|r| self.keeps_class(r))
            .filter_map(|r| Feature::try_from(r).ok())
            .collect()
    }
}
