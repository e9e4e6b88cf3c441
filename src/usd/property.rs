use super::Object;
use crate::{sdf, tf, usd};

/// Base class for [`usd::Attribute`] scenegraph objects.
#[repr(transparent)]
pub struct Property<'a>(Object<'a>);

impl<'a> Property<'a> {
	pub(crate) fn new(stage: &'a usd::Stage, path: sdf::Path) -> Self {
		Property(Object::new(stage, path))
	}

	/// The property's name, the final element of its path.
	pub fn name(&self) -> tf::Token {
		self.path().name_token()
	}
}

impl<'a> std::ops::Deref for Property<'a> {
	type Target = Object<'a>;
	fn deref(&self) -> &Self::Target {
		unsafe { std::mem::transmute(self) }
	}
}
