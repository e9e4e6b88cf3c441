use super::TOKENS;
use crate::{
	coding_error,
	sdf::{self, VALUE_TYPE_NAMES},
	tf, usd, vt,
};
use std::sync::LazyLock;

pub(crate) fn register_schemas(registry: &mut usd::SchemaRegistry) {
	registry.register(
		TOKENS.gprim.as_str(),
		None,
		usd::SchemaKind::AbstractTyped,
		vec![
			usd::AttributeDefinition {
				name: TOKENS.visibility.clone(),
				type_name: VALUE_TYPE_NAMES.token.clone(),
				variability: sdf::Variability::Varying,
				fallback: Some(vt::Value::new(TOKENS.inherited.clone())),
			},
			usd::AttributeDefinition {
				name: TOKENS.purpose.clone(),
				type_name: VALUE_TYPE_NAMES.token.clone(),
				variability: sdf::Variability::Uniform,
				fallback: Some(vt::Value::new(TOKENS.default_.clone())),
			},
			usd::AttributeDefinition {
				name: TOKENS.double_sided.clone(),
				type_name: VALUE_TYPE_NAMES.bool.clone(),
				variability: sdf::Variability::Uniform,
				fallback: Some(vt::Value::new(false)),
			},
			usd::AttributeDefinition {
				name: TOKENS.orientation.clone(),
				type_name: VALUE_TYPE_NAMES.token.clone(),
				variability: sdf::Variability::Uniform,
				fallback: Some(vt::Value::new(TOKENS.right_handed.clone())),
			},
		],
	);
}

static GPRIM_TYPE: LazyLock<tf::Type> =
	LazyLock::new(|| usd::SchemaRegistry::get().tf_type(&TOKENS.gprim));

static LOCAL_ATTRIBUTE_NAMES: LazyLock<Vec<tf::Token>> =
	LazyLock::new(|| usd::SchemaRegistry::get().schema_attribute_names(&TOKENS.gprim, false));

static ALL_ATTRIBUTE_NAMES: LazyLock<Vec<tf::Token>> =
	LazyLock::new(|| usd::SchemaRegistry::get().schema_attribute_names(&TOKENS.gprim, true));

/// Base class for all geometric primitives.
///
/// Gprim is abstract: it encapsulates the attributes shared by every drawable
/// primitive but is never the type of a prim itself. Concrete gprim schemas
/// derive from it.
#[repr(transparent)]
pub struct Gprim<'a>(usd::SchemaBase<'a>);

impl Gprim<'_> {
	pub(crate) fn new(base: usd::SchemaBase<'_>) -> Gprim<'_> {
		Gprim(base)
	}

	/// Return a Gprim wrapping the prim at `path` on `stage`.
	///
	/// The wrapper is invalid if no prim exists there; the prim's actual
	/// type is not verified. An empty or non-prim `path` is a coding error.
	pub fn get(stage: &usd::Stage, path: impl Into<sdf::Path>) -> Gprim<'_> {
		let path = path.into();
		if !path.is_prim_path() {
			coding_error!("invalid prim path <{path}>");
			return Gprim(usd::SchemaBase::new(
				stage.prim_at_path(sdf::Path::empty_path()),
			));
		}

		Gprim(usd::SchemaBase::new(stage.prim_at_path(path)))
	}

	/// Whether the prim is visible, `inherited` if unauthored.
	pub fn visibility_attr(&self) -> usd::Attribute<'_> {
		self.prim().attribute(&TOKENS.visibility)
	}

	pub fn create_visibility_attr(
		&self,
		default: Option<vt::Value>,
		write_sparsely: bool,
	) -> usd::Attribute<'_> {
		self.create_attr(
			&TOKENS.visibility,
			&VALUE_TYPE_NAMES.token,
			false,
			sdf::Variability::Varying,
			default,
			write_sparsely,
		)
	}

	/// The purpose the prim is drawn for, `default` if unauthored.
	pub fn purpose_attr(&self) -> usd::Attribute<'_> {
		self.prim().attribute(&TOKENS.purpose)
	}

	pub fn create_purpose_attr(
		&self,
		default: Option<vt::Value>,
		write_sparsely: bool,
	) -> usd::Attribute<'_> {
		self.create_attr(
			&TOKENS.purpose,
			&VALUE_TYPE_NAMES.token,
			false,
			sdf::Variability::Uniform,
			default,
			write_sparsely,
		)
	}

	/// Whether the surface should be treated as double-sided.
	pub fn double_sided_attr(&self) -> usd::Attribute<'_> {
		self.prim().attribute(&TOKENS.double_sided)
	}

	pub fn create_double_sided_attr(
		&self,
		default: Option<vt::Value>,
		write_sparsely: bool,
	) -> usd::Attribute<'_> {
		self.create_attr(
			&TOKENS.double_sided,
			&VALUE_TYPE_NAMES.bool,
			false,
			sdf::Variability::Uniform,
			default,
			write_sparsely,
		)
	}

	/// Winding order of the prim's surface, `rightHanded` if unauthored.
	pub fn orientation_attr(&self) -> usd::Attribute<'_> {
		self.prim().attribute(&TOKENS.orientation)
	}

	pub fn create_orientation_attr(
		&self,
		default: Option<vt::Value>,
		write_sparsely: bool,
	) -> usd::Attribute<'_> {
		self.create_attr(
			&TOKENS.orientation,
			&VALUE_TYPE_NAMES.token,
			false,
			sdf::Variability::Uniform,
			default,
			write_sparsely,
		)
	}

	/// Return the names of the attributes this schema declares. With
	/// `include_inherited` the inherited names come first, this schema's
	/// own names last.
	pub fn schema_attribute_names(include_inherited: bool) -> &'static [tf::Token] {
		if include_inherited {
			&ALL_ATTRIBUTE_NAMES
		} else {
			&LOCAL_ATTRIBUTE_NAMES
		}
	}

	pub fn static_tf_type() -> tf::Type {
		*GPRIM_TYPE
	}

	pub fn schema_kind() -> usd::SchemaKind {
		usd::SchemaKind::AbstractTyped
	}

	pub fn is_typed_schema() -> bool {
		usd::SchemaRegistry::get().is_typed(Self::static_tf_type())
	}

	pub fn tf_type(&self) -> tf::Type {
		Self::static_tf_type()
	}
}

impl<'a> std::ops::Deref for Gprim<'a> {
	type Target = usd::SchemaBase<'a>;
	fn deref(&self) -> &Self::Target {
		unsafe { std::mem::transmute(self) }
	}
}
