//! Partitioning by (chromosome, strand) and nearest-LTR search.
//!
//! Upstream and downstream are in sequence coordinates (smaller start is
//! upstream) regardless of strand.

use crate::libs::chrom::ChromOrder;
use crate::libs::feature::{Feature, Span, Strand};
use std::collections::BTreeMap;

/// INT and LTR spans of one chromosome and strand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    pub chr: String,
    pub strand: Strand,
    pub ints: Vec<Span>,
    pub ltrs: Vec<Span>,
}

impl Partition {
    fn new(chr: &str, strand: Strand) -> Self {
        Self {
            chr: chr.to_string(),
            strand,
            ints: vec![],
            ltrs: vec![],
        }
    }
}

/// Split features into partitions, keeping only the INT and LTR subfamilies.
/// Partitions come out in chromosome order, `+` before `-`; spans keep input
/// order.
///
/// A feature whose subfamily equals both names is filed as both.
pub fn partition<O: ChromOrder>(
    features: &[Feature],
    int_subfamily: &str,
    ltr_subfamily: &str,
    order: &O,
) -> Vec<Partition> {
    let mut part_of: BTreeMap<(O::Key, Strand), Partition> = BTreeMap::new();

    for feature in features {
        let is_int = feature.subfamily == int_subfamily;
        let is_ltr = feature.subfamily == ltr_subfamily;
        if !is_int && !is_ltr {
            continue;
        }

        let part = part_of
            .entry((order.key(&feature.chr), feature.strand))
            .or_insert_with(|| Partition::new(&feature.chr, feature.strand));
        if is_int {
            part.ints.push(feature.span);
        }
        if is_ltr {
            part.ltrs.push(feature.span);
        }
    }

    part_of.into_values().collect()
}

/// An INT feature with both of its nearest flanking LTRs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pairing {
    pub chr: String,
    pub strand: Strand,
    pub up: Span,
    pub int: Span,
    pub down: Span,
}

/// LTR spans of one partition, sorted for binary search on either boundary.
#[derive(Debug, Clone, Default)]
pub struct FlankIndex {
    by_end: Vec<Span>,
    by_start: Vec<Span>,
}

impl FlankIndex {
    pub fn new(ltrs: &[Span]) -> Self {
        let mut by_end = ltrs.to_vec();
        by_end.sort_by_key(|l| (l.end, l.start));
        let mut by_start = ltrs.to_vec();
        by_start.sort_by_key(|l| (l.start, l.end));

        Self { by_end, by_start }
    }

    /// Nearest LTR with `end <= int.start` and `int.start - end <= tolerance`.
    /// Equidistant candidates share the same end; the smallest start wins.
    ///
    /// ```
    /// # use ltrint::libs::flank::FlankIndex;
    /// # use ltrint::libs::feature::Span;
    /// let index = FlankIndex::new(&[Span::new(10, 20), Span::new(100, 150)]);
    /// let int = Span::new(200, 500);
    /// assert_eq!(index.upstream(&int, 60), Some(Span::new(100, 150)));
    /// assert_eq!(index.upstream(&int, 49), None);
    /// ```
    pub fn upstream(&self, int: &Span, tolerance: u64) -> Option<Span> {
        let hi = self.by_end.partition_point(|l| l.end <= int.start);
        if hi == 0 {
            return None;
        }

        let nearest_end = self.by_end[hi - 1].end;
        if int.start - nearest_end > tolerance {
            return None;
        }

        let lo = self.by_end[..hi].partition_point(|l| l.end < nearest_end);
        Some(self.by_end[lo])
    }

    /// Nearest LTR with `start >= int.end` and `start - int.end <= tolerance`.
    /// Equidistant candidates share the same start; the smallest end wins.
    ///
    /// ```
    /// # use ltrint::libs::flank::FlankIndex;
    /// # use ltrint::libs::feature::Span;
    /// let index = FlankIndex::new(&[Span::new(500, 600), Span::new(700, 800)]);
    /// let int = Span::new(200, 500);
    /// assert_eq!(index.downstream(&int, 0), Some(Span::new(500, 600)));
    /// assert_eq!(index.downstream(&Span::new(200, 450), 49), None);
    /// ```
    pub fn downstream(&self, int: &Span, tolerance: u64) -> Option<Span> {
        let lo = self.by_start.partition_point(|l| l.start < int.end);
        let nearest = self.by_start.get(lo)?;
        if nearest.start - int.end > tolerance {
            return None;
        }

        Some(*nearest)
    }
}

/// Pair every INT of the partition with its nearest flanks. INTs missing
/// either flank are dropped.
pub fn find_pairings(part: &Partition, tolerance: u64) -> Vec<Pairing> {
    let index = FlankIndex::new(&part.ltrs);

    part.ints
        .iter()
        .filter_map(|int| {
            let up = index.upstream(int, tolerance)?;
            let down = index.downstream(int, tolerance)?;
            Some(Pairing {
                chr: part.chr.clone(),
                strand: part.strand,
                up,
                int: *int,
                down,
            })
        })
        .collect()
}
