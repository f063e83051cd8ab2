//! Record formatting module
//!
//! Turns one raw catalog record into a display-ready card.
//!
//! # Overview
//!
//! Catalog records come from two historical schemas (`com_*` and `arbres_*`
//! field families). Each logical attribute resolves through an ordered list of
//! field names, first present value wins. Formatting is pure and total:
//! missing fields are left out, never reported as errors.

mod formatter;
mod types;

pub use formatter::{field_text, resolve, RecordFormatter};
pub use types::{Detail, FieldChain, FormattedRecord};

#[cfg(test)]
mod tests;
