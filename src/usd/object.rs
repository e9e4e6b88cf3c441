use crate::{
	coding_error, sdf, tf, usd,
	vt::{self, ValueType},
};

/// Base class for Usd scenegraph objects, providing common API.
///
/// The commonality between the scenegraph object kinds ([`usd::Prim`],
/// [`usd::Attribute`]) is that they live at a path on a stage and can carry
/// metadata. Other objects in the API simply are kinds of metadata.
///
/// **Inheritance hierarchy:**
/// - [`usd::Object`]
///   - [`usd::Prim`]
///   - [`usd::Property`]
///     - [`usd::Attribute`]
pub struct Object<'a> {
	stage: &'a usd::Stage,
	path: sdf::Path,
}

impl<'a> Object<'a> {
	pub(crate) fn new(stage: &'a usd::Stage, path: sdf::Path) -> Self {
		Object { stage, path }
	}

	pub fn stage(&self) -> &usd::Stage {
		self.stage
	}

	pub fn path(&self) -> &sdf::Path {
		&self.path
	}

	/// Returns true if a spec exists at this object's path.
	pub fn is_valid(&self) -> bool {
		self.stage.has_spec(&self.path)
	}

	pub fn metadata<T: ValueType>(&self, key: &tf::Token) -> Option<T> {
		self.stage
			.resolve_value(&self.path, key)
			.and_then(|value| value.get::<T>())
	}

	pub fn set_metadata(&self, key: &tf::Token, value: impl Into<vt::Value>) {
		if !self.is_valid() {
			coding_error!("cannot author metadata '{key}' on invalid object <{}>", self.path);
			return;
		}
		self.stage.set_value(&self.path, key, value.into());
	}

	/// Return this object's documentation (metadata).
	///
	/// This returns the empty string if no documentation has been set.
	pub fn documentation(&self) -> String {
		self.metadata(&sdf::FIELD_KEYS.documentation)
			.unwrap_or_default()
	}

	pub fn set_documentation(&self, documentation: impl ToString) {
		self.set_metadata(
			&sdf::FIELD_KEYS.documentation,
			vt::Value::new(documentation.to_string()),
		);
	}

	/// Return this object's customData dictionary.
	pub fn custom_data(&self) -> vt::Dictionary {
		self.metadata(&sdf::FIELD_KEYS.custom_data)
			.unwrap_or_default()
	}

	#[doc(hidden)]
	pub fn spec_type(&self) -> Option<sdf::SpecType> {
		self.stage.spec_type(&self.path)
	}
}
