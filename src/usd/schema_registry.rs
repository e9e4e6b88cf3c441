use crate::{sdf, tf, usd_geom, usd_star, vt};
use std::collections::HashMap;
use std::sync::LazyLock;

/// Categorizes a registered schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaKind {
	/// A typed schema that only serves as a base for other schemas and
	/// cannot be the type of a prim itself.
	AbstractTyped,
	/// A typed schema prims can be defined as.
	ConcreteTyped,
}

/// Definition of a single schema attribute: declared name, value type,
/// variability and the fallback value resolved when nothing is authored.
pub struct AttributeDefinition {
	pub name: tf::Token,
	pub type_name: sdf::ValueTypeName,
	pub variability: sdf::Variability,
	pub fallback: Option<vt::Value>,
}

/// Everything the runtime knows about a registered prim schema.
pub struct PrimDefinition {
	pub type_name: tf::Token,
	pub tf_type: tf::Type,
	pub kind: SchemaKind,
	pub base: Option<tf::Token>,
	pub attributes: Vec<AttributeDefinition>,
}

/// Process-wide registry of prim schema definitions.
///
/// Built lazily on first use from the schema modules this crate ships. The
/// registry drives prim typing queries, schema attribute name listings and
/// fallback value resolution.
pub struct SchemaRegistry {
	schema_base_type: tf::Type,
	typed_type: tf::Type,
	definitions: HashMap<tf::Token, PrimDefinition>,
}

static REGISTRY: LazyLock<SchemaRegistry> = LazyLock::new(SchemaRegistry::build);

impl SchemaRegistry {
	pub fn get() -> &'static SchemaRegistry {
		&REGISTRY
	}

	fn build() -> Self {
		let schema_base_type = tf::Type::declare("SchemaBase", &[]);
		let typed_type = tf::Type::declare("Typed", &[schema_base_type]);

		let mut registry = SchemaRegistry {
			schema_base_type,
			typed_type,
			definitions: HashMap::new(),
		};

		usd_geom::register_schemas(&mut registry);
		usd_star::register_schemas(&mut registry);

		registry
	}

	pub fn schema_base_type(&self) -> tf::Type {
		self.schema_base_type
	}

	pub fn typed_type(&self) -> tf::Type {
		self.typed_type
	}

	/// Register a schema prim definition, declaring its runtime type under
	/// the base definition's type (or directly under `Typed`).
	///
	/// Concrete schemas also register their prim type name as an alias under
	/// `SchemaBase`, which is how is-a queries by type name are answered.
	pub(crate) fn register(
		&mut self,
		type_name: &str,
		base: Option<&str>,
		kind: SchemaKind,
		attributes: Vec<AttributeDefinition>,
	) -> tf::Type {
		let base_token = base.map(tf::Token::new);
		let base_type = base_token
			.as_ref()
			.and_then(|name| self.definitions.get(name))
			.map(|def| def.tf_type)
			.unwrap_or(self.typed_type);

		let tf_type = tf::Type::declare(type_name, &[base_type]);
		if kind == SchemaKind::ConcreteTyped {
			tf_type.add_alias(self.schema_base_type, type_name);
		}

		self.definitions.insert(
			tf::Token::new(type_name),
			PrimDefinition {
				type_name: tf::Token::new(type_name),
				tf_type,
				kind,
				base: base_token,
				attributes,
			},
		);

		tf_type
	}

	pub fn prim_definition(&self, type_name: &tf::Token) -> Option<&PrimDefinition> {
		self.definitions.get(type_name)
	}

	/// Resolve a prim type name to its runtime type, or the unknown type.
	pub fn tf_type(&self, type_name: &tf::Token) -> tf::Type {
		tf::Type::find_derived_by_name(self.schema_base_type, type_name.as_str())
	}

	pub fn is_typed(&self, ty: tf::Type) -> bool {
		ty.is_a(self.typed_type)
	}

	/// Names of the attributes a schema declares. With `include_inherited`
	/// the list carries the full base chain's names first, the schema's own
	/// names last.
	pub fn schema_attribute_names(
		&self,
		type_name: &tf::Token,
		include_inherited: bool,
	) -> Vec<tf::Token> {
		let mut chain = Vec::new();
		let mut current = Some(type_name.clone());

		while let Some(name) = current {
			let Some(def) = self.definitions.get(&name) else {
				break;
			};
			chain.push(def);
			if !include_inherited {
				break;
			}
			current = def.base.clone();
		}

		let mut names = Vec::new();
		for def in chain.iter().rev() {
			names.extend(def.attributes.iter().map(|attr| attr.name.clone()));
		}

		names
	}

	/// Find the definition of `attr` on `type_name` or the nearest base
	/// schema declaring it.
	pub fn attribute_definition(
		&self,
		type_name: &tf::Token,
		attr: &tf::Token,
	) -> Option<&AttributeDefinition> {
		let mut current = Some(type_name.clone());

		while let Some(name) = current {
			let def = self.definitions.get(&name)?;
			if let Some(found) = def.attributes.iter().find(|a| &a.name == attr) {
				return Some(found);
			}
			current = def.base.clone();
		}

		None
	}

	/// The fallback value `attr` resolves to on prims typed `type_name`
	/// when nothing is authored.
	pub fn fallback(&self, type_name: &tf::Token, attr: &tf::Token) -> Option<vt::Value> {
		self.attribute_definition(type_name, attr)
			.and_then(|def| def.fallback.clone())
	}
}
