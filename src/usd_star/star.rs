use super::TOKENS;
use crate::{
	coding_error, gf,
	sdf::{self, VALUE_TYPE_NAMES},
	tf, usd, usd_geom, vt,
};
use std::sync::LazyLock;

pub(crate) fn register_schemas(registry: &mut usd::SchemaRegistry) {
	registry.register(
		TOKENS.star.as_str(),
		Some(usd_geom::TOKENS.gprim.as_str()),
		usd::SchemaKind::ConcreteTyped,
		vec![
			usd::AttributeDefinition {
				name: TOKENS.extent.clone(),
				type_name: VALUE_TYPE_NAMES.float3_array.clone(),
				variability: sdf::Variability::Varying,
				fallback: None,
			},
			usd::AttributeDefinition {
				name: TOKENS.points.clone(),
				type_name: VALUE_TYPE_NAMES.int.clone(),
				variability: sdf::Variability::Varying,
				fallback: None,
			},
		],
	);
}

static STAR_TYPE: LazyLock<tf::Type> =
	LazyLock::new(|| usd::SchemaRegistry::get().tf_type(&TOKENS.star));

static LOCAL_ATTRIBUTE_NAMES: LazyLock<Vec<tf::Token>> =
	LazyLock::new(|| usd::SchemaRegistry::get().schema_attribute_names(&TOKENS.star, false));

static ALL_ATTRIBUTE_NAMES: LazyLock<Vec<tf::Token>> =
	LazyLock::new(|| usd::SchemaRegistry::get().schema_attribute_names(&TOKENS.star, true));

/// A star-shaped gprim.
///
/// `points` counts the points of the star and `extent` carries its
/// object-space bound as a hint, neither is computed from the other.
#[repr(transparent)]
pub struct Star<'a>(usd_geom::Gprim<'a>);

impl Star<'_> {
	/// Return a Star wrapping the prim at `path` on `stage`.
	///
	/// The wrapper is invalid if no prim exists there; the prim's actual
	/// type is not verified. An empty or non-prim `path` is a coding error.
	pub fn get(stage: &usd::Stage, path: impl Into<sdf::Path>) -> Star<'_> {
		let path = path.into();
		if !path.is_prim_path() {
			coding_error!("invalid prim path <{path}>");
			return Star::invalid(stage);
		}

		Star(usd_geom::Gprim::new(usd::SchemaBase::new(
			stage.prim_at_path(path),
		)))
	}

	/// Ensure a `Star` prim exists at `path` on `stage`, authoring it and
	/// any missing ancestors.
	///
	/// Defining is idempotent. An empty or non-prim `path` is a coding
	/// error, as is an existing prim of a different type; both answer with
	/// an invalid wrapper.
	pub fn define(stage: &usd::Stage, path: impl Into<sdf::Path>) -> Star<'_> {
		let path = path.into();
		if !path.is_prim_path() {
			coding_error!("invalid prim path <{path}>");
			return Star::invalid(stage);
		}

		let prim = stage.define_prim(path, &TOKENS.star);
		Star(usd_geom::Gprim::new(usd::SchemaBase::new(prim)))
	}

	fn invalid(stage: &usd::Stage) -> Star<'_> {
		Star(usd_geom::Gprim::new(usd::SchemaBase::new(
			stage.prim_at_path(sdf::Path::empty_path()),
		)))
	}

	/// The star's object-space bound: two corners, minimum then maximum.
	/// A hint for consumers, not computed from the shape.
	pub fn extent_attr(&self) -> usd::Attribute<'_> {
		self.prim().attribute(&TOKENS.extent)
	}

	pub fn create_extent_attr(
		&self,
		default: Option<vt::Value>,
		write_sparsely: bool,
	) -> usd::Attribute<'_> {
		self.create_attr(
			&TOKENS.extent,
			&VALUE_TYPE_NAMES.float3_array,
			false,
			sdf::Variability::Varying,
			default,
			write_sparsely,
		)
	}

	/// How many points the star has. Unrelated to the point arrays of
	/// point-based gprims.
	pub fn points_attr(&self) -> usd::Attribute<'_> {
		self.prim().attribute(&TOKENS.points)
	}

	pub fn create_points_attr(
		&self,
		default: Option<vt::Value>,
		write_sparsely: bool,
	) -> usd::Attribute<'_> {
		self.create_attr(
			&TOKENS.points,
			&VALUE_TYPE_NAMES.int,
			false,
			sdf::Variability::Varying,
			default,
			write_sparsely,
		)
	}

	/// Decode the resolved extent as a [`gf::Range3f`], if a two-corner
	/// extent resolves.
	pub fn extent_hint(&self) -> Option<gf::Range3f> {
		let extent = self.extent_attr().try_get::<vt::Array<gf::Vec3f>>()?;
		if extent.len() != 2 {
			return None;
		}

		Some(gf::Range3f::new(extent[0], extent[1]))
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
		*STAR_TYPE
	}

	pub fn schema_kind() -> usd::SchemaKind {
		usd::SchemaKind::ConcreteTyped
	}

	pub fn is_typed_schema() -> bool {
		usd::SchemaRegistry::get().is_typed(Self::static_tf_type())
	}

	pub fn tf_type(&self) -> tf::Type {
		Self::static_tf_type()
	}
}

impl<'a> std::ops::Deref for Star<'a> {
	type Target = usd_geom::Gprim<'a>;
	fn deref(&self) -> &Self::Target {
		unsafe { std::mem::transmute(self) }
	}
}
