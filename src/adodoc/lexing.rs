//! Line lexing
//!
//! Every line of a file is classified exactly once into a [`LineTag`]. The scanner,
//! the docstring locator and the signature folder all work on slices of that tag
//! array instead of re-running patterns over the whole file for every program.

pub mod keywords;
pub mod line_classification;

pub use keywords::{Keyword, DEFINE, PROGRAM};
pub use line_classification::{
    classify_document, classify_line, has_continuation, is_doc_block_end, is_doc_block_start,
    is_signature_start, is_subroutine_end, is_subroutine_start, LineTag,
};
