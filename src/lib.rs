//! labelscan - Extract physical measurements from product label photos
//!
//! A two-stage pipeline: OCR turns a label photo into raw text, then the
//! extraction core scans that text for numbers adjacent to unit spellings of
//! the requested category and reports them in canonical form. The core lives
//! in [`extract`] and is front-end agnostic; [`vision`] and [`fetch`] are the
//! collaborators that produce its text input.

pub mod config;
pub mod extract;
pub mod fetch;
pub mod vision;

pub use extract::{Category, ExtractError, Extractor, Measurement, UnitRegistry};
