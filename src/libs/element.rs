use crate::libs::chrom::ChromOrder;
use crate::libs::feature::{Span, Strand};
use crate::libs::flank::Pairing;
use itertools::Itertools;
use std::collections::BTreeMap;

/// Output columns, in order.
pub const HEADER: [&str; 8] = [
    "chr",
    "strand",
    "ltr_5_start",
    "ltr_5_end",
    "int_start",
    "int_end",
    "ltr_3_start",
    "ltr_3_end",
];

/// One or more INTs sharing the same flanking LTR pair, in sequence
/// coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub chr: String,
    pub strand: Strand,
    pub up: Span,
    pub int: Span,
    pub down: Span,
}

/// Collapse pairings by their (upstream, downstream) LTR pair. The INT span
/// of an element covers all INTs of the group, whether or not they overlap.
///
/// ```
/// # use ltrint::libs::element::aggregate;
/// # use ltrint::libs::feature::{Span, Strand};
/// # use ltrint::libs::flank::Pairing;
/// let pairing = |s, e| Pairing {
///     chr: "chr1".to_string(),
///     strand: Strand::Plus,
///     up: Span::new(100, 200),
///     int: Span::new(s, e),
///     down: Span::new(500, 600),
/// };
/// let elements = aggregate(&[pairing(200, 400), pairing(350, 500)]);
/// assert_eq!(elements.len(), 1);
/// assert_eq!(elements[0].int, Span::new(200, 500));
/// ```
pub fn aggregate(pairings: &[Pairing]) -> Vec<Element> {
    let mut int_of: BTreeMap<(&str, Strand, Span, Span), Span> = BTreeMap::new();

    for p in pairings {
        int_of
            .entry((p.chr.as_str(), p.strand, p.up, p.down))
            .and_modify(|int| *int = int.union(&p.int))
            .or_insert(p.int);
    }

    int_of
        .into_iter()
        .map(|((chr, strand, up, down), int)| Element {
            chr: chr.to_string(),
            strand,
            up,
            int,
            down,
        })
        .collect()
}

/// A complete element with LTRs labelled by biological polarity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompleteElement {
    pub chr: String,
    pub strand: Strand,
    pub ltr_5: Span,
    pub int: Span,
    pub ltr_3: Span,
}

impl From<&Element> for CompleteElement {
    /// On `-` the downstream LTR is the 5' one.
    fn from(e: &Element) -> Self {
        let (ltr_5, ltr_3) = match e.strand {
            Strand::Plus => (e.up, e.down),
            Strand::Minus => (e.down, e.up),
        };

        Self {
            chr: e.chr.clone(),
            strand: e.strand,
            ltr_5,
            int: e.int,
            ltr_3,
        }
    }
}

impl CompleteElement {
    /// ```
    /// # use ltrint::libs::element::CompleteElement;
    /// # use ltrint::libs::feature::{Span, Strand};
    /// let e = CompleteElement {
    ///     chr: "chr1".to_string(),
    ///     strand: Strand::Minus,
    ///     ltr_5: Span::new(500, 600),
    ///     int: Span::new(200, 500),
    ///     ltr_3: Span::new(100, 200),
    /// };
    /// assert_eq!(e.to_row(','), "chr1,-,500,600,200,500,100,200");
    /// assert_eq!(e.to_row('\t'), "chr1\t-\t500\t600\t200\t500\t100\t200");
    /// ```
    pub fn to_row(&self, sep: char) -> String {
        [
            self.chr.clone(),
            self.strand.to_string(),
            self.ltr_5.start.to_string(),
            self.ltr_5.end.to_string(),
            self.int.start.to_string(),
            self.int.end.to_string(),
            self.ltr_3.start.to_string(),
            self.ltr_3.end.to_string(),
        ]
        .iter()
        .join(&sep.to_string())
    }
}

pub fn header_row(sep: char) -> String {
    HEADER.iter().join(&sep.to_string())
}

/// Relabel upstream/downstream as 5'/3'.
pub fn normalize(elements: &[Element]) -> Vec<CompleteElement> {
    elements.iter().map(CompleteElement::from).collect()
}

/// Order by chromosome, then INT start. Remaining ties fall to strand and the
/// LTR spans.
pub fn sort_elements<O: ChromOrder>(elements: &mut [CompleteElement], order: &O) {
    elements.sort_by_cached_key(|e| {
        (
            order.key(&e.chr),
            e.int.start,
            e.strand,
            e.ltr_5,
            e.int.end,
            e.ltr_3,
        )
    });
}
