use crate::{sdf, tf, usd, vt};

/// The base class for all schema types.
///
/// Schema objects hold a [`usd::Prim`] internally and provide a
/// layer of specific named API atop the underlying scene graph.
#[repr(transparent)]
pub struct SchemaBase<'a>(usd::Prim<'a>);

impl<'a> SchemaBase<'a> {
	pub(crate) fn new(prim: usd::Prim<'a>) -> Self {
		SchemaBase(prim)
	}

	pub fn prim(&self) -> &usd::Prim<'a> {
		&self.0
	}

	pub fn is_valid(&self) -> bool {
		self.prim().is_valid()
	}

	/// Create (or retrieve) the named schema attribute with its declared
	/// value type and variability, optionally authoring `default`.
	///
	/// When `write_sparsely` is set the default is only authored if it
	/// differs from what already resolves for the attribute, so values that
	/// merely restate a schema fallback leave no opinion behind.
	pub(crate) fn create_attr(
		&self,
		name: &tf::Token,
		type_name: &sdf::ValueTypeName,
		custom: bool,
		variability: sdf::Variability,
		default: Option<vt::Value>,
		write_sparsely: bool,
	) -> usd::Attribute<'_> {
		let attr = self
			.prim()
			.create_attribute(name, type_name, custom, variability);

		if !attr.is_valid() {
			return attr;
		}

		if let Some(value) = default {
			let redundant = write_sparsely && attr.get_value().is_some_and(|current| current == value);
			if !redundant {
				attr.set(value);
			}
		}

		attr
	}
}
