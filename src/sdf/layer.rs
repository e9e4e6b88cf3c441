use crate::{sdf, tf, usda, vt};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

static ANONYMOUS_LAYER_COUNT: AtomicU64 = AtomicU64::new(0);

/// A scene description container holding prim and property specs.
/// The contents of a Layer adhere to the [`sdf::AbstractData`] data model.
///
/// Layers are authored through shared references, so the data sits behind a
/// lock. Stages hand out scenegraph objects that read and write through it.
pub struct Layer {
	identifier: String,
	pub(crate) data: RwLock<Box<dyn sdf::AbstractData>>,
}

impl std::fmt::Debug for Layer {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Layer")
			.field("identifier", &self.identifier)
			.finish()
	}
}

impl Layer {
	/// Create a new anonymous in-memory layer, with a pseudo-root spec ready
	/// for prims to be authored beneath.
	pub fn create_anonymous(tag: &str) -> Arc<Self> {
		let count = ANONYMOUS_LAYER_COUNT.fetch_add(1, Ordering::Relaxed);

		let mut data: Box<dyn sdf::AbstractData> = Box::new(sdf::Data::default());
		data.create_spec(&sdf::Path::absolute_root_path(), sdf::SpecType::PseudoRoot);

		Arc::new(Layer {
			identifier: format!("anon:{count}:{tag}"),
			data: RwLock::new(data),
		})
	}

	pub fn identifier(&self) -> &str {
		&self.identifier
	}

	/// Serialize this layer's contents as scene description text.
	pub fn export_to_string(&self) -> String {
		usda::write_layer(&**self.data.read().unwrap())
	}

	/// Write this layer's contents as scene description text to a file.
	pub fn save(&self, path: impl AsRef<std::path::Path>) -> std::io::Result<()> {
		std::fs::write(path, self.export_to_string())
	}
}

/// Data access, forwarded through the lock.
impl Layer {
	pub(crate) fn get(&self, path: &sdf::Path, field: &tf::Token) -> Option<vt::Value> {
		self.data.read().unwrap().get(path, field)
	}

	pub(crate) fn set(&self, path: &sdf::Path, field: &tf::Token, value: vt::Value) {
		self.data.write().unwrap().set(path, field, value);
	}

	pub(crate) fn erase(&self, path: &sdf::Path, field: &tf::Token) {
		self.data.write().unwrap().erase(path, field);
	}

	pub(crate) fn create_spec(&self, path: &sdf::Path, spec_type: sdf::SpecType) {
		self.data.write().unwrap().create_spec(path, spec_type);
	}

	pub(crate) fn spec_type(&self, path: &sdf::Path) -> Option<sdf::SpecType> {
		self.data.read().unwrap().spec_type(path)
	}

	pub(crate) fn has_spec(&self, path: &sdf::Path) -> bool {
		self.spec_type(path).is_some()
	}
}
