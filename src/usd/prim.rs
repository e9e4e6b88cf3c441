use super::{Attribute, Object, Property};
use crate::{
	coding_error,
	sdf::{self, CHILDREN_KEYS, FIELD_KEYS},
	tf, usd, vt,
};

/// [`usd::Prim`] is the sole persistent scenegraph container object on a
/// [`usd::Stage`]: a named node in the namespace hierarchy that carries
/// properties and child prims.
#[repr(transparent)]
pub struct Prim<'a>(Object<'a>);

impl<'a> Prim<'a> {
	pub(crate) fn new(stage: &'a usd::Stage, path: sdf::Path) -> Self {
		Prim(Object::new(stage, path))
	}

	/// Returns true if a prim spec exists at this path.
	pub fn is_valid(&self) -> bool {
		matches!(
			self.spec_type(),
			Some(sdf::SpecType::Prim | sdf::SpecType::PseudoRoot)
		)
	}

	pub fn specifier(&self) -> Option<sdf::Specifier> {
		self.metadata(&FIELD_KEYS.specifier)
	}

	pub fn type_name(&self) -> tf::Token {
		self.metadata(&FIELD_KEYS.type_name).unwrap_or_default()
	}

	/// The registered schema type this prim's type name refers to, or the
	/// unknown type.
	pub fn tf_type(&self) -> tf::Type {
		usd::SchemaRegistry::get().tf_type(&self.type_name())
	}

	/// Returns true if this prim's schema type is or derives from `ty`.
	pub fn is_a(&self, ty: tf::Type) -> bool {
		self.tf_type().is_a(ty)
	}

	pub fn children<'b>(&'b self) -> ChildrenIter<'b> {
		ChildrenIter::new(self.stage(), self.path())
	}

	pub fn properties<'b>(&'b self) -> PropertyIter<'b> {
		PropertyIter::new(self.stage(), self.path())
	}

	/// Return a [`usd::Property`] with the given `name`.
	pub fn property<'b>(&'b self, name: &tf::Token) -> Property<'b> {
		Property::new(self.stage(), self.path().append_property(name))
	}
}

/// Attributes
impl<'a> Prim<'a> {
	/// Return a [`usd::Attribute`] with the given `name`.
	pub fn attribute<'b>(&'b self, name: &tf::Token) -> Attribute<'b> {
		Attribute::new(self.stage(), self.path().append_property(name))
	}

	pub fn has_attribute(&self, name: &tf::Token) -> bool {
		self.stage()
			.spec_type(&self.path().append_property(name))
			.is_some_and(|ty| ty == sdf::SpecType::Attribute)
	}

	/// Ensure an attribute spec named `name` exists on this prim, with the
	/// given declared value type and variability.
	///
	/// Creating is idempotent; an existing attribute of a different declared
	/// type is a coding error and the returned attribute is invalid.
	pub fn create_attribute<'b>(
		&'b self,
		name: &tf::Token,
		type_name: &sdf::ValueTypeName,
		custom: bool,
		variability: sdf::Variability,
	) -> Attribute<'b> {
		let invalid = |stage| Attribute::new(stage, sdf::Path::empty_path());

		if !self.is_valid() {
			coding_error!("cannot create attribute '{name}' on invalid prim <{}>", self.path());
			return invalid(self.stage());
		}

		let attr_path = self.path().append_property(name);
		if attr_path.is_empty() {
			coding_error!("'{name}' is not a valid attribute name");
			return invalid(self.stage());
		}

		if self.stage().has_spec(&attr_path) {
			let existing = self
				.stage()
				.resolve_value(&attr_path, &FIELD_KEYS.type_name)
				.and_then(|value| value.get::<tf::Token>())
				.unwrap_or_default();
			if existing != *type_name.token() {
				coding_error!(
					"attribute <{attr_path}> already exists with type '{existing}', requested '{type_name}'"
				);
				return invalid(self.stage());
			}
			return Attribute::new(self.stage(), attr_path);
		}

		self.stage().create_spec(&attr_path, sdf::SpecType::Attribute);
		self.stage().set_value(
			&attr_path,
			&FIELD_KEYS.type_name,
			vt::Value::new(type_name.token().clone()),
		);
		if variability == sdf::Variability::Uniform {
			self.stage().set_value(
				&attr_path,
				&FIELD_KEYS.variability,
				vt::Value::new(variability),
			);
		}
		if custom {
			self.stage()
				.set_value(&attr_path, &FIELD_KEYS.custom, vt::Value::new(true));
		}
		self.stage()
			.add_child_name(self.path(), &CHILDREN_KEYS.property_children, name);

		Attribute::new(self.stage(), attr_path)
	}
}

impl<'a> std::ops::Deref for Prim<'a> {
	type Target = Object<'a>;
	fn deref(&self) -> &Self::Target {
		unsafe { std::mem::transmute(self) }
	}
}

pub struct ChildrenIter<'a> {
	stage: &'a usd::Stage,
	base_path: sdf::Path,
	prim_children: vt::Array<tf::Token>,
	index: usize,
}

impl<'a> ChildrenIter<'a> {
	pub fn new(stage: &'a usd::Stage, path: &sdf::Path) -> Self {
		ChildrenIter {
			stage,
			base_path: path.clone(),
			prim_children: stage.children_of(path),
			index: 0,
		}
	}
}

impl<'a> Iterator for ChildrenIter<'a> {
	type Item = Prim<'a>;

	fn next(&mut self) -> Option<Self::Item> {
		if self.index < self.prim_children.len() {
			let name = self.prim_children[self.index].clone();
			self.index += 1;
			Some(Prim::new(self.stage, self.base_path.append_child(&name)))
		} else {
			None
		}
	}
}

pub struct PropertyIter<'a> {
	stage: &'a usd::Stage,
	base_path: sdf::Path,
	property_children: vt::Array<tf::Token>,
	index: usize,
}

impl<'a> PropertyIter<'a> {
	pub fn new(stage: &'a usd::Stage, path: &sdf::Path) -> Self {
		PropertyIter {
			stage,
			base_path: path.clone(),
			property_children: stage.properties_of(path),
			index: 0,
		}
	}
}

impl<'a> Iterator for PropertyIter<'a> {
	type Item = Property<'a>;

	fn next(&mut self) -> Option<Self::Item> {
		if self.index < self.property_children.len() {
			let name = self.property_children[self.index].clone();
			self.index += 1;
			Some(Property::new(
				self.stage,
				self.base_path.append_property(&name),
			))
		} else {
			None
		}
	}
}
