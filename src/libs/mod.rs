pub mod chrom;
pub mod curate;
pub mod element;
pub mod error;
pub mod feature;
pub mod filter;
pub mod flank;
pub mod io;
pub mod rmsk;
