//! Scene Description Foundations

mod data;
mod layer;
mod path;
mod schema;
mod value_type_name;

pub use data::*;
pub use layer::*;
pub use path::*;
pub use schema::{CHILDREN_KEYS, FIELD_KEYS};
pub use value_type_name::*;

use crate::vt;

/// An enum that specifies the type of an object.
/// Objects have fields and are adressable by path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpecType {
	Unknown,
	Attribute,
	Prim,
	PseudoRoot,
}

/// An enum that identifies the possible specifiers for a PrimSpec.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Specifier {
	Def,
	Over,
	Class,
}

/// An enum that identifies variability types for attributes.
///
/// Varying attributes may be animated over time, uniform attributes hold a
/// single value for all times.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Variability {
	Varying,
	Uniform,
}

/// Time-ordered samples authored for an attribute, strongest-to-weakest
/// resolution happening per sample time.
pub type TimeSampleMap = Vec<(f64, vt::Value)>;
