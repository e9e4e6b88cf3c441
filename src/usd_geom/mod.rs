//! Geometry Schemas

mod gprim;

pub use gprim::*;

use crate::{declare_public_tokens, tf};

declare_public_tokens!(Tokens, TOKENS, [
	default_: "default",
	double_sided: "doubleSided",
	gprim: "Gprim",
	inherited: "inherited",
	invisible: "invisible",
	left_handed: "leftHanded",
	orientation: "orientation",
	purpose: "purpose",
	right_handed: "rightHanded",
	visibility: "visibility"
]);
