//! Compact authorable scene description library in pure Rust.
//!
//! A [`usd::Stage`] owns an in-memory root layer of prim and property specs
//! addressed by hierarchical paths. Typed prim schemas register with a
//! runtime type registry and layer a named API over the generic attribute
//! machinery. The [`usd_star`] module carries the one concrete geometric
//! schema shipped with the crate.

pub mod base;
pub mod sdf;
pub mod usd;

pub mod usd_geom;
pub mod usd_star;

mod usda;

#[doc(hidden)]
pub use base::*;

pub(crate) use tf::coding_error;
pub(crate) use tf::declare_public_tokens;
