//! Docstrings
//!
//! A docstring is a comment block opened by `/* """` and closed by `""" */`:
//!
//! ```text
//! program define myprog
//!     /* """ Computes a thing.
//!
//!         Longer description, indented as a unit.
//!     """ */
//!     ...
//! end
//! ```
//!
//! [`locator`] finds the block inside a program; [`reconstruct`] turns it back
//! into text.

pub mod locator;
pub mod reconstruct;

pub use locator::{locate_docstring, DocBlock};
pub use reconstruct::{dedent, reconstruct_docstring};
