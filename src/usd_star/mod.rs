//! The Star Prim Schema

mod star;

pub use star::*;

use crate::{declare_public_tokens, tf};

declare_public_tokens!(Tokens, TOKENS, [
	extent: "extent",
	points: "points",
	star: "Star"
]);
