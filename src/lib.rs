//! # adodoc
//!
//! Extracts the documentation blocks embedded in Stata `.do` / `.ado` programs and
//! assembles them into a Markdown reference.
//!
//! The pipeline runs once per file:
//! 1. every line is classified in one pass ([`adodoc::lexing`])
//! 2. program boundaries are scanned from the tags ([`adodoc::scanning`])
//! 3. each program's docstring is located and rebuilt ([`adodoc::docstring`])
//! 4. the document is assembled ([`adodoc::assembling`])
//!
//! `syntax` statements can be folded into their clauses with [`adodoc::signature`].

pub mod adodoc;
