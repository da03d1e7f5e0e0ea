//! Extractors turning a parsed menu document into `MenuItem`s.
//!
//! Both variants walk the same logical tree:
//! session -> plans -> days -> meals -> recipe categories -> recipes.
//! Days without a usable date and recipes without a name are skipped,
//! never reported as errors.

pub mod json;
pub mod xml;

/// Count of records dropped while walking a document, for debug logging.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SkipStats {
    pub days: usize,
    pub recipes: usize,
}
