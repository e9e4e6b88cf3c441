use crate::{coding_error, sdf, tf, vt};
use std::collections::HashMap;

/// Interface for scene description data storage.
pub trait AbstractData: Send + Sync {
	/// Create a new spec at `path` with the given `spec_type`.
	/// If the spec already exists, the spec type will be changed.
	fn create_spec(&mut self, path: &sdf::Path, spec_type: sdf::SpecType);

	/// Return the type of the spec at `path`.
	fn spec_type(&self, path: &sdf::Path) -> Option<sdf::SpecType>;

	/// Return the value of the given `path` and `field`.
	fn get(&self, path: &sdf::Path, field: &tf::Token) -> Option<vt::Value>;

	/// Set the value of the given `path` and `field`.
	fn set(&mut self, path: &sdf::Path, field: &tf::Token, value: vt::Value);

	/// Remove the given `field` from the spec at `path`, if authored.
	fn erase(&mut self, path: &sdf::Path, field: &tf::Token);

	/// Return the names of all the fields that are set at `path`.
	fn list(&self, path: &sdf::Path) -> Vec<tf::Token>;

	/// Visit every spec in this AbstractData object, ordered by path text.
	fn visit_specs(&self) -> Vec<sdf::Path>;
}

/// A single addressable object in a layer: its type and authored fields.
#[derive(Debug, Clone)]
pub struct Spec {
	pub ty: sdf::SpecType,
	pub fields: HashMap<tf::Token, vt::Value>,
}

impl Spec {
	pub fn new(ty: sdf::SpecType) -> Self {
		Spec {
			ty,
			fields: HashMap::new(),
		}
	}
}

/// In-memory [`AbstractData`] implementation backing anonymous layers.
#[derive(Debug, Default)]
pub struct Data {
	specs: HashMap<sdf::Path, Spec>,
}

impl AbstractData for Data {
	fn create_spec(&mut self, path: &sdf::Path, spec_type: sdf::SpecType) {
		self.specs
			.entry(path.clone())
			.and_modify(|spec| spec.ty = spec_type)
			.or_insert_with(|| Spec::new(spec_type));
	}

	fn spec_type(&self, path: &sdf::Path) -> Option<sdf::SpecType> {
		self.specs.get(path).map(|spec| spec.ty)
	}

	fn get(&self, path: &sdf::Path, field: &tf::Token) -> Option<vt::Value> {
		let spec = self.specs.get(path)?;
		spec.fields.get(field).cloned()
	}

	fn set(&mut self, path: &sdf::Path, field: &tf::Token, value: vt::Value) {
		let Some(spec) = self.specs.get_mut(path) else {
			coding_error!("cannot set field '{field}' at <{path}>: no spec exists there");
			return;
		};
		spec.fields.insert(field.clone(), value);
	}

	fn erase(&mut self, path: &sdf::Path, field: &tf::Token) {
		if let Some(spec) = self.specs.get_mut(path) {
			spec.fields.remove(field);
		}
	}

	fn list(&self, path: &sdf::Path) -> Vec<tf::Token> {
		if let Some(spec) = self.specs.get(path) {
			let mut fields: Vec<tf::Token> = spec.fields.keys().cloned().collect();
			fields.sort();
			fields
		} else {
			Vec::new()
		}
	}

	fn visit_specs(&self) -> Vec<sdf::Path> {
		let mut paths: Vec<sdf::Path> = self.specs.keys().cloned().collect();
		paths.sort_by_key(|path| path.to_string());
		paths
	}
}

pub fn debug_dump(data: &dyn AbstractData) {
	println!("AbstractData dump");
	println!("Spec count: {}\n", data.visit_specs().len());

	for path in data.visit_specs() {
		let spec_type = data.spec_type(&path).unwrap_or(sdf::SpecType::Unknown);
		println!("[{:?}] {}", spec_type, path);

		for field in data.list(&path) {
			if let Some(value) = data.get(&path, &field) {
				println!("    {} = {:?}", field, value);
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn spec_lifecycle() {
		let mut data = Data::default();
		let path = sdf::Path::from("/Root");

		assert_eq!(data.spec_type(&path), None);

		data.create_spec(&path, sdf::SpecType::Prim);
		assert_eq!(data.spec_type(&path), Some(sdf::SpecType::Prim));

		data.set(&path, &sdf::FIELD_KEYS.type_name, vt::Value::new(tf::Token::new("Star")));
		assert_eq!(
			data.get(&path, &sdf::FIELD_KEYS.type_name)
				.and_then(|v| v.get::<tf::Token>()),
			Some(tf::Token::new("Star"))
		);

		data.erase(&path, &sdf::FIELD_KEYS.type_name);
		assert_eq!(data.get(&path, &sdf::FIELD_KEYS.type_name), None);

		// Retyping through create_spec keeps the fields.
		data.set(&path, &sdf::FIELD_KEYS.documentation, vt::Value::new("doc".to_string()));
		data.create_spec(&path, sdf::SpecType::PseudoRoot);
		assert_eq!(data.spec_type(&path), Some(sdf::SpecType::PseudoRoot));
		assert_eq!(data.list(&path).len(), 1);
	}

	#[test]
	fn set_without_spec_is_rejected() {
		let mut data = Data::default();
		let path = sdf::Path::from("/Nowhere");

		data.set(&path, &sdf::FIELD_KEYS.documentation, vt::Value::new("doc".to_string()));
		assert_eq!(data.get(&path, &sdf::FIELD_KEYS.documentation), None);
		assert!(data.visit_specs().is_empty());
	}
}
