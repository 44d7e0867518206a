use crate::libs::chrom::ChromOrder;
use crate::libs::element::{aggregate, normalize, sort_elements, CompleteElement};
use crate::libs::error::CurateError;
use crate::libs::feature::{Feature, RawFeature};
use crate::libs::filter::{NoiseFilter, NOISE_CLASSES};
use crate::libs::flank::{find_pairings, partition};
use log::{debug, info, warn};
use rayon::prelude::*;

pub const DEFAULT_TOLERANCE: i64 = 10_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Params {
    /// Subfamily name of the internal region, exact match
    pub int_subfamily: String,
    /// Subfamily name of the flanking LTRs, exact match
    pub ltr_subfamily: String,
    /// Largest gap allowed between the INT and either LTR
    pub tolerance: i64,
    /// Repeat classes removed before matching
    pub excluded: Vec<String>,
}

impl Params {
    /// ```
    /// # use ltrint::libs::curate::Params;
    /// let params = Params::new("HERVK-int", "LTR5_Hs");
    /// assert_eq!(params.tolerance, 10_000);
    /// assert_eq!(params.excluded, vec!["Simple_repeat", "Low_complexity", "Satellite"]);
    /// ```
    pub fn new(int_subfamily: &str, ltr_subfamily: &str) -> Self {
        Self {
            int_subfamily: int_subfamily.to_string(),
            ltr_subfamily: ltr_subfamily.to_string(),
            tolerance: DEFAULT_TOLERANCE,
            excluded: NOISE_CLASSES.iter().map(|c| c.to_string()).collect(),
        }
    }

    /// Checked tolerance as an unsigned distance.
    pub fn checked_tolerance(&self) -> Result<u64, CurateError> {
        u64::try_from(self.tolerance).map_err(|_| {
            CurateError::ConfigurationError(format!(
                "tolerance must be non-negative, got {}",
                self.tolerance
            ))
        })
    }
}

/// Filter the raw table, then find and collapse complete elements.
pub fn curate<O: ChromOrder>(
    raws: &[RawFeature],
    params: &Params,
    order: &O,
) -> Result<Vec<CompleteElement>, CurateError> {
    let tolerance = params.checked_tolerance()?;

    let features = NoiseFilter::new(&params.excluded).features(raws);
    info!(
        "Kept {} of {} records after filtering",
        features.len(),
        raws.len()
    );

    curate_features(
        &features,
        &params.int_subfamily,
        &params.ltr_subfamily,
        tolerance,
        order,
    )
}

/// Match, aggregate and normalize already filtered features. Partitions are
/// processed on the current rayon pool.
pub fn curate_features<O: ChromOrder>(
    features: &[Feature],
    int_subfamily: &str,
    ltr_subfamily: &str,
    tolerance: u64,
    order: &O,
) -> Result<Vec<CompleteElement>, CurateError> {
    for (role, name) in [("INT", int_subfamily), ("LTR", ltr_subfamily)] {
        let count = features.iter().filter(|f| f.subfamily == name).count();
        if count == 0 {
            return Err(CurateError::ConfigurationError(format!(
                "{} subfamily {} matches no records",
                role, name
            )));
        }
        info!("{} {} records of {}", count, role, name);
    }

    let parts = partition(features, int_subfamily, ltr_subfamily, order);

    let mut elements: Vec<CompleteElement> = parts
        .par_iter()
        .flat_map_iter(|part| {
            let pairings = find_pairings(part, tolerance);
            let elements = normalize(&aggregate(&pairings));
            debug!(
                "{}({}): {} INT, {} LTR, {} pairings, {} elements",
                part.chr,
                part.strand,
                part.ints.len(),
                part.ltrs.len(),
                pairings.len(),
                elements.len()
            );
            elements
        })
        .collect();

    sort_elements(&mut elements, order);

    if elements.is_empty() {
        warn!("No complete elements found with the given parameters");
    }

    Ok(elements)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::chrom::NaturalOrder;
    use crate::libs::feature::{Span, Strand};
    use std::collections::BTreeSet;

    const INT: &str = "HERVK-int";
    const LTR: &str = "LTR5_Hs";

    fn raw(chr: &str, start: u64, end: u64, strand: &str, subfamily: &str) -> RawFeature {
        RawFeature::new(chr, start, end, strand, subfamily, "LTR")
    }

    fn run(raws: &[RawFeature], tolerance: i64) -> Vec<CompleteElement> {
        let params = Params {
            tolerance,
            ..Params::new(INT, LTR)
        };
        curate(raws, &params, &NaturalOrder).unwrap()
    }

    fn spans(e: &CompleteElement) -> (Span, Span, Span) {
        (e.ltr_5, e.int, e.ltr_3)
    }

    #[test]
    fn plus_strand_element() {
        let raws = vec![
            raw("chr1", 100, 200, "+", LTR),
            raw("chr1", 200, 500, "+", INT),
            raw("chr1", 500, 600, "+", LTR),
        ];
        let elements = run(&raws, 0);
        assert_eq!(elements.len(), 1);
        assert_eq!(
            spans(&elements[0]),
            (Span::new(100, 200), Span::new(200, 500), Span::new(500, 600))
        );
    }

    #[test]
    fn minus_strand_swaps_ltrs() {
        let raws = vec![
            raw("chr1", 100, 200, "-", LTR),
            raw("chr1", 200, 500, "-", INT),
            raw("chr1", 500, 600, "-", LTR),
        ];
        let elements = run(&raws, 0);
        assert_eq!(elements.len(), 1);
        assert_eq!(
            spans(&elements[0]),
            (Span::new(500, 600), Span::new(200, 500), Span::new(100, 200))
        );
    }

    #[test]
    fn overlapping_ints_merge() {
        let raws = vec![
            raw("chr1", 100, 200, "+", LTR),
            raw("chr1", 200, 400, "+", INT),
            raw("chr1", 350, 500, "+", INT),
            raw("chr1", 500, 600, "+", LTR),
        ];
        let elements = run(&raws, 200);
        assert_eq!(elements.len(), 1);
        assert_eq!(elements[0].int, Span::new(200, 500));
    }

    #[test]
    fn nearest_upstream_ltr() {
        let raws = vec![
            raw("chr1", 10, 20, "+", LTR),
            raw("chr1", 100, 150, "+", LTR),
            raw("chr1", 200, 500, "+", INT),
            raw("chr1", 510, 600, "+", LTR),
        ];
        let elements = run(&raws, 60);
        assert_eq!(elements.len(), 1);
        assert_eq!(elements[0].ltr_5, Span::new(100, 150));
    }

    #[test]
    fn noise_is_ignored() {
        let mut raws = vec![
            raw("chr1", 100, 150, "+", LTR),
            raw("chr1", 200, 500, "+", INT),
            raw("chr1", 500, 600, "+", LTR),
        ];
        // nearer, but a noise class and a bad strand
        raws.push(RawFeature::new("chr1", 160, 195, "+", LTR, "Satellite"));
        raws.push(raw("chr1", 170, 199, ".", LTR));

        let elements = run(&raws, 50);
        assert_eq!(elements.len(), 1);
        assert_eq!(elements[0].ltr_5, Span::new(100, 150));
    }

    #[test]
    fn no_ltr_in_window() {
        let raws = vec![
            raw("chr1", 100, 200, "+", LTR),
            raw("chr1", 5000, 6000, "+", INT),
            raw("chr1", 9000, 9100, "+", LTR),
            // right place, wrong strand and wrong chromosome
            raw("chr1", 6000, 6100, "-", LTR),
            raw("chr2", 6000, 6100, "+", LTR),
        ];
        assert!(run(&raws, 1000).is_empty());
    }

    #[test]
    fn negative_tolerance() {
        let raws = vec![raw("chr1", 100, 200, "+", LTR), raw("chr1", 200, 500, "+", INT)];
        let params = Params {
            tolerance: -1,
            ..Params::new(INT, LTR)
        };
        let err = curate(&raws, &params, &NaturalOrder).unwrap_err();
        assert_eq!(
            err,
            CurateError::ConfigurationError("tolerance must be non-negative, got -1".to_string())
        );
    }

    #[test]
    fn unknown_subfamily() {
        let raws = vec![raw("chr1", 100, 200, "+", LTR), raw("chr1", 200, 500, "+", INT)];

        let err = curate(&raws, &Params::new("HERVH-int", LTR), &NaturalOrder).unwrap_err();
        assert_eq!(
            err,
            CurateError::ConfigurationError("INT subfamily HERVH-int matches no records".to_string())
        );

        let err = curate(&raws, &Params::new(INT, "LTR7"), &NaturalOrder).unwrap_err();
        assert_eq!(
            err,
            CurateError::ConfigurationError("LTR subfamily LTR7 matches no records".to_string())
        );
    }

    #[test]
    fn subfamily_only_in_noise() {
        let raws = vec![
            RawFeature::new("chr1", 100, 200, "+", LTR, "Simple_repeat"),
            raw("chr1", 200, 500, "+", INT),
        ];
        let err = curate(&raws, &Params::new(INT, LTR), &NaturalOrder).unwrap_err();
        assert!(matches!(err, CurateError::ConfigurationError(_)));
    }

    // Several chromosomes, both strands, shared and missing flanks
    fn genome() -> Vec<RawFeature> {
        vec![
            raw("chr2", 1000, 1500, "+", LTR),
            raw("chr2", 1600, 7500, "+", INT),
            raw("chr2", 2000, 8000, "+", INT),
            raw("chr2", 8100, 8600, "+", LTR),
            raw("chr2", 20000, 20400, "-", LTR),
            raw("chr2", 20450, 25000, "-", INT),
            raw("chr2", 25300, 25700, "-", LTR),
            raw("chr2", 40000, 45000, "-", INT),
            raw("chr1", 3000, 3400, "-", LTR),
            raw("chr1", 3500, 9000, "-", INT),
            raw("chr1", 9900, 10300, "-", LTR),
            raw("chr1", 12000, 12400, "+", LTR),
            raw("chr1", 12410, 18000, "+", INT),
            raw("chr1", 18800, 19200, "+", LTR),
            raw("chrX", 100, 500, "+", LTR),
            raw("chrX", 3000, 8000, "+", INT),
            raw("chrX", 8010, 8400, "+", LTR),
        ]
    }

    #[test]
    fn deterministic_and_ordered() {
        let first = run(&genome(), 1000);
        let mut shuffled = genome();
        shuffled.reverse();
        let second = run(&shuffled, 1000);
        assert_eq!(first, second);

        let keys: Vec<(&str, u64)> = first.iter().map(|e| (e.chr.as_str(), e.int.start)).collect();
        assert_eq!(
            keys,
            vec![("chr1", 3500), ("chr1", 12410), ("chr2", 1600), ("chr2", 20450)]
        );
        assert_eq!(first[2].int, Span::new(1600, 8000));
    }

    #[test]
    fn parallel_matches_sequential() {
        let sequential = rayon::ThreadPoolBuilder::new()
            .num_threads(1)
            .build()
            .unwrap()
            .install(|| run(&genome(), 1000));
        let parallel = rayon::ThreadPoolBuilder::new()
            .num_threads(4)
            .build()
            .unwrap()
            .install(|| run(&genome(), 1000));
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn mirrored_strands() {
        let len = 50_000;
        let mirrored: Vec<RawFeature> = genome()
            .iter()
            .map(|r| {
                let span = Span::new(r.start, r.end).mirror(len);
                let strand = r.strand.parse::<Strand>().unwrap().flip();
                raw(&r.chr, span.start, span.end, &strand.to_string(), &r.subfamily)
            })
            .collect();

        let expected: BTreeSet<_> = run(&genome(), 1000)
            .iter()
            .map(|e| {
                (
                    e.chr.clone(),
                    e.strand.flip(),
                    e.ltr_5.mirror(len),
                    e.int.mirror(len),
                    e.ltr_3.mirror(len),
                )
            })
            .collect();
        let got: BTreeSet<_> = run(&mirrored, 1000)
            .iter()
            .map(|e| (e.chr.clone(), e.strand, e.ltr_5, e.int, e.ltr_3))
            .collect();

        assert_eq!(expected.len(), 4);
        assert_eq!(got, expected);
    }

    #[test]
    fn wider_tolerance_keeps_pairs() {
        let pairs = |tolerance| -> BTreeSet<_> {
            run(&genome(), tolerance)
                .iter()
                .map(|e| (e.chr.clone(), e.strand, e.ltr_5, e.ltr_3))
                .collect()
        };

        let tolerances = [0, 10, 100, 500, 1000, 5000, 20_000];
        for w in tolerances.windows(2) {
            let narrow = pairs(w[0]);
            let wide = pairs(w[1]);
            assert!(narrow.is_subset(&wide), "{} vs {}", w[0], w[1]);
        }
        assert!(pairs(0).is_empty());
        assert_eq!(pairs(1000).len(), 4);
        assert_eq!(pairs(20_000).len(), 5);
    }
}
