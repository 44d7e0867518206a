//! Curate complete proviral retrotransposon elements (LTR-INT-LTR) from
//! RepeatMasker annotations.

pub mod libs;

pub use crate::libs::io::*;
