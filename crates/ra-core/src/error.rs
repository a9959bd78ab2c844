//! Error types for the generation pipeline.
//!
//! Only conditions that indicate a corrupted or incompatible reference
//! dataset surface as errors; retry and rollback inside the synthesizer are
//! normal control flow and never show up here.

use thiserror::Error;

use crate::item::ItemCategory;

/// Fatal conditions raised by the artifact generator
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RandartError {
    /// The reference corpus does not carry exactly the three named,
    /// never-randomized artifacts.
    #[error("reference corpus has {found} named artifacts, expected exactly 3")]
    BadNamedCount { found: usize },

    /// The reference corpus is empty.
    #[error("reference corpus is empty")]
    EmptyCorpus,

    /// An artifact names a base item kind the catalog does not know.
    #[error("unknown item kind: {category} subtype {subtype}")]
    UnknownKind { category: ItemCategory, subtype: u8 },

    /// A family rescaling denominator came out zero; the corpus carries no
    /// artifacts of a type the frequency tables need.
    #[error("no reference artifacts in the {category} family; cannot rescale frequencies")]
    EmptyFamily { category: &'static str },

    /// The batch acceptance loop exhausted its restart budget without
    /// producing a set that satisfies the category quotas.
    #[error("gave up after {attempts} full-set attempts without meeting category quotas")]
    RestartBudgetExhausted { attempts: u32 },
}
