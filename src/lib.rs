//! # Arbalest
//!
//! A content-generation engine for crafting games: crosses a set of base
//! "carrier" items with a set of enchantment templates and derives one new
//! craftable item and one crafting recipe per pair, with deterministic
//! name-based identifiers.
//!
//! ## Architecture Overview
//!
//! - **Catalog**: In-memory content database of item, recipe, and merchant
//!   definitions, indexed by id and symbolic name
//! - **Generation System**: Pure builders that derive new records from a
//!   (carrier, template) pair, plus the driver that walks the full cross
//!   product and commits results to the catalog
//!
//! The engine owns no state of its own: the host loads a [`Catalog`], hands
//! it to [`generation::run`] together with a [`GenerationConfig`], and picks
//! up the mutated catalog afterwards. Generation is single-threaded and
//! run-once, invoked after the host has finished loading its content.

pub mod catalog;
pub mod generation;

// Core module re-exports
pub use catalog::*;
pub use generation::*;

/// Core error type for the Arbalest engine.
#[derive(thiserror::Error, Debug)]
pub enum ArbalestError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// A referenced record is missing from the catalog
    #[error("Record not found: {0}")]
    NotFound(String),

    /// An identifier collided with an existing catalog entry
    #[error("Duplicate identifier: {0}")]
    DuplicateId(String),

    /// Malformed generation configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type used throughout the Arbalest codebase.
pub type ArbalestResult<T> = Result<T, ArbalestError>;

/// Version information for the engine.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default generation constants.
pub mod defaults {
    use uuid::Uuid;

    /// Namespace for all identifiers derived by this engine.
    ///
    /// Keeping a fixed namespace guarantees that generated identifiers
    /// never collide with the base game's or another mod's records, and
    /// that re-running generation reproduces the same identifiers.
    /// Canonical form: `6eff8e23-1b2f-4e48-8cde-3abda9d4bc3b`.
    pub const GENERATION_NAMESPACE: Uuid =
        Uuid::from_u128(0x6eff8e23_1b2f_4e48_8cde_3abda9d4bc3b);

    /// Prefix for derived recipe names
    pub const RECIPE_NAME_PREFIX: &str = "RecipeEnchanting";

    /// Prefix for derived unlock-manual names
    pub const MANUAL_NAME_PREFIX: &str = "CraftingManual_";

    /// Gold cost of a generated unlock manual
    pub const DEFAULT_MANUAL_COST: u32 = 200;
}
