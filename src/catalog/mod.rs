//! # Catalog Module
//!
//! The in-memory content database that generation reads from and writes to.
//!
//! This module contains the record types for items, recipes, and merchants
//! (`definitions`) and the [`Catalog`] store that indexes them by identifier
//! and symbolic name (`store`). The catalog is owned by the host; the
//! generation system only looks records up and appends new ones.

pub mod definitions;
pub mod store;

pub use definitions::*;
pub use store::*;
