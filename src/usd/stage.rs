use super::Prim;
use crate::{
	coding_error,
	sdf::{self, CHILDREN_KEYS, FIELD_KEYS},
	tf, vt,
};
use std::sync::Arc;

/// The outermost container for scene description, which owns and presents
/// prims as a scenegraph backed by its root layer.
pub struct Stage {
	root_layer: Arc<sdf::Layer>,
}

impl Stage {
	/// Create a new stage backed by an anonymous in-memory root layer.
	pub fn in_memory() -> Self {
		Self {
			root_layer: sdf::Layer::create_anonymous("stage"),
		}
	}

	pub fn root_layer(&self) -> &Arc<sdf::Layer> {
		&self.root_layer
	}

	pub fn pseudo_root(&self) -> Prim<'_> {
		Prim::new(self, sdf::Path::absolute_root_path())
	}

	/// Return the prim at `path`, valid or not. Validity of the result must
	/// be queried separately, this call never errors.
	pub fn prim_at_path(&self, path: impl Into<sdf::Path>) -> Prim<'_> {
		Prim::new(self, path.into())
	}

	/// Ensure a `def` prim of `type_name` exists at `path`, authoring it and
	/// any missing ancestors. An existing untyped prim is retyped; an
	/// existing prim of a different type is a coding error and the returned
	/// prim is invalid. Defining is idempotent.
	pub fn define_prim(&self, path: impl Into<sdf::Path>, type_name: &tf::Token) -> Prim<'_> {
		let path = path.into();
		if !path.is_prim_path() || !path.is_absolute() {
			coding_error!("cannot define a prim at <{path}>: not an absolute prim path");
			return Prim::new(self, sdf::Path::empty_path());
		}

		if let Some(existing) = self
			.resolve_value(&path, &FIELD_KEYS.type_name)
			.and_then(|value| value.get::<tf::Token>())
			&& !existing.is_empty()
			&& !type_name.is_empty()
			&& existing != *type_name
		{
			coding_error!(
				"prim at <{path}> is already typed '{existing}', cannot define it as '{type_name}'"
			);
			return Prim::new(self, sdf::Path::empty_path());
		}

		self.author_prim_specs(&path, sdf::Specifier::Def);

		self.root_layer.set(
			&path,
			&FIELD_KEYS.specifier,
			vt::Value::new(sdf::Specifier::Def),
		);
		if !type_name.is_empty() {
			self.root_layer.set(
				&path,
				&FIELD_KEYS.type_name,
				vt::Value::new(type_name.clone()),
			);
		}

		self.prim_at_path(path)
	}

	/// Ensure a prim spec exists at `path` without requiring it to be
	/// defined or typed, authoring `over` specs where nothing exists yet.
	pub fn override_prim(&self, path: impl Into<sdf::Path>) -> Prim<'_> {
		let path = path.into();
		if !path.is_prim_path() || !path.is_absolute() {
			coding_error!("cannot override a prim at <{path}>: not an absolute prim path");
			return Prim::new(self, sdf::Path::empty_path());
		}

		self.author_prim_specs(&path, sdf::Specifier::Over);

		self.prim_at_path(path)
	}

	fn author_prim_specs(&self, path: &sdf::Path, specifier: sdf::Specifier) {
		let mut prefixes: Vec<sdf::Path> = path.ancestors_range().collect();
		prefixes.reverse();

		for prefix in &prefixes {
			if !self.root_layer.has_spec(prefix) {
				self.root_layer.create_spec(prefix, sdf::SpecType::Prim);
				self.root_layer
					.set(prefix, &FIELD_KEYS.specifier, vt::Value::new(specifier));
				self.add_child_name(
					&prefix.parent_path(),
					&CHILDREN_KEYS.prim_children,
					&prefix.name_token(),
				);
			}
		}
	}

	/// Serialize the root layer as scene description text.
	pub fn export_to_string(&self) -> String {
		self.root_layer.export_to_string()
	}

	/// Write the root layer as scene description text to a file.
	pub fn save(&self, path: impl AsRef<std::path::Path>) -> std::io::Result<()> {
		self.root_layer.save(path)
	}
}

/// Data access for scenegraph objects.
impl Stage {
	pub(crate) fn resolve_value(&self, path: &sdf::Path, field: &tf::Token) -> Option<vt::Value> {
		self.root_layer.get(path, field)
	}

	pub(crate) fn set_value(&self, path: &sdf::Path, field: &tf::Token, value: vt::Value) {
		self.root_layer.set(path, field, value);
	}

	pub(crate) fn erase_value(&self, path: &sdf::Path, field: &tf::Token) {
		self.root_layer.erase(path, field);
	}

	pub(crate) fn create_spec(&self, path: &sdf::Path, spec_type: sdf::SpecType) {
		self.root_layer.create_spec(path, spec_type);
	}

	pub(crate) fn spec_type(&self, path: &sdf::Path) -> Option<sdf::SpecType> {
		self.root_layer.spec_type(path)
	}

	pub(crate) fn has_spec(&self, path: &sdf::Path) -> bool {
		self.root_layer.has_spec(path)
	}

	pub(crate) fn children_of(&self, path: &sdf::Path) -> vt::Array<tf::Token> {
		self.resolve_value(path, &CHILDREN_KEYS.prim_children)
			.and_then(|value| value.get::<vt::Array<tf::Token>>())
			.unwrap_or_default()
	}

	pub(crate) fn properties_of(&self, path: &sdf::Path) -> vt::Array<tf::Token> {
		self.resolve_value(path, &CHILDREN_KEYS.property_children)
			.and_then(|value| value.get::<vt::Array<tf::Token>>())
			.unwrap_or_default()
	}

	pub(crate) fn add_child_name(&self, parent: &sdf::Path, key: &tf::Token, name: &tf::Token) {
		let mut names = self
			.resolve_value(parent, key)
			.and_then(|value| value.get::<vt::Array<tf::Token>>())
			.unwrap_or_default();

		if !names.contains(name) {
			names.push(name.clone());
			self.root_layer.set(parent, key, vt::Value::new(names));
		}
	}
}
