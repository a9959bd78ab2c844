//! ra-core: random artifact generation engine.
//!
//! A single-pass offline content generator: it learns ability frequencies
//! from a hand-authored reference artifact set, then synthesizes a fresh
//! set of comparable power via budgeted stochastic search with rollback,
//! and finally checks the whole batch against per-slot distribution
//! quotas, restarting from scratch when they are not met.
//!
//! Pure logic, no I/O beyond `tracing` diagnostics. The whole pipeline is
//! reproducible from a single seed: every draw goes through one explicit
//! [`GameRng`] handle.
//!
//! ```
//! use ra_core::{generate, data, power::StandardPowerModel};
//!
//! let catalog = data::standard_catalog();
//! let corpus = data::standard_corpus(&catalog);
//! let arts = generate(&corpus, &catalog, &StandardPowerModel, 42, true).unwrap();
//! assert_eq!(arts.len(), corpus.len());
//! ```

pub mod ability;
pub mod batch;
pub mod data;
pub mod error;
pub mod flags;
pub mod freq;
pub mod item;
pub mod name;
pub mod power;
mod scramble;

mod consts;

pub use batch::{CategoryQuotas, GenerationConfig};
pub use consts::{AGGR_POWER, INHIBIT_POWER, MAX_TRIES};
pub use error::RandartError;
pub use freq::{BaselineStats, FrequencyTable};
pub use item::{Artifact, ArtifactSlot, ItemCatalog, ItemCategory, ItemKind, ReferenceCorpus};
pub use power::{PowerModel, StandardPowerModel};
pub use ra_rng::GameRng;

/// Generate a full artifact set with the default configuration.
///
/// `full` toggles between complete randomization and a names-only pass
/// that leaves every record's powers untouched.
pub fn generate(
    corpus: &ReferenceCorpus,
    catalog: &ItemCatalog,
    model: &dyn PowerModel,
    seed: u64,
    full: bool,
) -> Result<Vec<Artifact>, RandartError> {
    generate_with_config(corpus, catalog, model, seed, full, &GenerationConfig::default())
}

/// Generate a full artifact set.
///
/// The statistics are extracted once; batch restarts reuse the frozen
/// frequency snapshot and only repeat the synthesis.
pub fn generate_with_config(
    corpus: &ReferenceCorpus,
    catalog: &ItemCatalog,
    model: &dyn PowerModel,
    seed: u64,
    full: bool,
    config: &GenerationConfig,
) -> Result<Vec<Artifact>, RandartError> {
    let mut rng = GameRng::new(seed);
    let mut base = corpus.artifacts().to_vec();

    if !full {
        name::assign_names(&mut base, None, &mut rng);
        return Ok(base);
    }

    let baseline = BaselineStats::extract(corpus, catalog, model)?;
    let freqs = FrequencyTable::parse(corpus, catalog, &baseline)?;

    name::assign_names(&mut base, Some(&baseline), &mut rng);

    batch::scramble_set(&base, catalog, &baseline, &freqs, model, config, &mut rng)
}
