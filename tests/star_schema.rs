use nanousd::usd::Stage;
use nanousd::usd_geom::Gprim;
use nanousd::usd_star::Star;
use nanousd::{gf, sdf, tf, vt};

fn init_logging() {
	use std::sync::OnceLock;
	static LOGGER: OnceLock<flexi_logger::LoggerHandle> = OnceLock::new();
	LOGGER.get_or_init(|| {
		flexi_logger::Logger::try_with_str("info")
			.unwrap()
			.start()
			.unwrap()
	});
}

#[test]
fn define_and_get() {
	init_logging();
	let stage = Stage::in_memory();

	let star = Star::define(&stage, "/Scene/StarA");
	assert!(star.is_valid());
	assert_eq!(star.prim().path().to_string(), "/Scene/StarA");
	assert_eq!(star.prim().type_name().as_str(), "Star");
	assert_eq!(star.prim().specifier(), Some(sdf::Specifier::Def));

	// Ancestors spring into existence as defs.
	assert!(stage.prim_at_path("/Scene").is_valid());

	let found = Star::get(&stage, "/Scene/StarA");
	assert!(found.is_valid());
	assert_eq!(found.prim().path().to_string(), "/Scene/StarA");

	let missing = Star::get(&stage, "/Scene/Nothing");
	assert!(!missing.is_valid());
}

#[test]
fn define_is_idempotent() {
	init_logging();
	let stage = Stage::in_memory();

	let first = Star::define(&stage, "/Scene/StarA");
	let second = Star::define(&stage, "/Scene/StarA");

	assert!(first.is_valid());
	assert!(second.is_valid());
	assert_eq!(first.prim().path(), second.prim().path());
	assert_eq!(second.prim().type_name().as_str(), "Star");

	// No duplicate children were authored.
	let scene = stage.prim_at_path("/Scene");
	assert_eq!(scene.children().count(), 1);
	assert_eq!(stage.pseudo_root().children().count(), 1);
}

#[test]
fn invalid_paths_answer_invalid_wrappers() {
	init_logging();
	let stage = Stage::in_memory();

	assert!(!Star::define(&stage, sdf::Path::empty_path()).is_valid());
	assert!(!Star::get(&stage, sdf::Path::empty_path()).is_valid());
	assert!(!Star::define(&stage, sdf::Path::absolute_root_path()).is_valid());

	// Property paths do not identify prims.
	assert!(!Star::define(&stage, "/Scene.attr").is_valid());
	assert!(!Star::get(&stage, "/Scene.attr").is_valid());

	// Relative paths cannot be defined either.
	assert!(!Star::define(&stage, "Scene/StarA").is_valid());
}

#[test]
fn define_rejects_conflicting_type() {
	init_logging();
	let stage = Stage::in_memory();

	stage.define_prim("/Scene/Shape", &tf::Token::new("Cube"));

	let star = Star::define(&stage, "/Scene/Shape");
	assert!(!star.is_valid());

	// The existing prim is untouched.
	let prim = stage.prim_at_path("/Scene/Shape");
	assert!(prim.is_valid());
	assert_eq!(prim.type_name().as_str(), "Cube");
}

#[test]
fn get_does_not_verify_type() {
	init_logging();
	let stage = Stage::in_memory();

	stage.define_prim("/Scene/Shape", &tf::Token::new("Cube"));

	let star = Star::get(&stage, "/Scene/Shape");
	assert!(star.is_valid());
	assert!(!star.points_attr().is_valid());

	let gprim = Gprim::get(&stage, "/Scene/Shape");
	assert!(gprim.is_valid());
	assert!(!Gprim::get(&stage, "/Scene/Nothing").is_valid());
}

#[test]
fn schema_attribute_names() {
	init_logging();

	let local = Star::schema_attribute_names(false);
	assert_eq!(local.len(), 2);
	assert_eq!(local[0].as_str(), "extent");
	assert_eq!(local[1].as_str(), "points");

	// The inherited list carries the base names first and always ends with
	// exactly the two local names.
	let all = Star::schema_attribute_names(true);
	assert!(all.len() > 2);
	assert_eq!(&all[all.len() - 2..], local);
	assert_eq!(
		&all[..all.len() - 2],
		Gprim::schema_attribute_names(true)
	);
	assert!(all.iter().any(|name| name.as_str() == "visibility"));
}

#[test]
fn create_then_get_attributes() {
	init_logging();
	let stage = Stage::in_memory();
	let star = Star::define(&stage, "/Scene/StarA");

	let extent = vt::Array::from(vec![
		gf::Vec3f::new(-1.0, -1.0, -1.0),
		gf::Vec3f::new(1.0, 1.0, 1.0),
	]);

	let created = star.create_extent_attr(Some(vt::Value::new(extent.clone())), false);
	assert!(created.is_valid());

	let attr = star.extent_attr();
	assert!(attr.is_valid());
	assert_eq!(attr.name().as_str(), "extent");
	assert_eq!(attr.path(), created.path());
	assert_eq!(attr.type_name().as_str(), "float3[]");
	assert_eq!(attr.variability(), sdf::Variability::Varying);
	assert!(!attr.is_custom());
	assert_eq!(attr.get::<vt::Array<gf::Vec3f>>(), extent);

	let created = star.create_points_attr(Some(vt::Value::new(5)), false);
	assert!(created.is_valid());

	let attr = star.points_attr();
	assert!(attr.is_valid());
	assert_eq!(attr.name().as_str(), "points");
	assert_eq!(attr.type_name().as_str(), "int");
	assert_eq!(attr.get::<i32>(), 5);

	// Unauthored attributes answer invalid handles.
	let other = Star::define(&stage, "/Scene/StarB");
	assert!(!other.extent_attr().is_valid());
	assert!(other.extent_attr().get_value().is_none());
}

#[test]
fn extent_hint_decodes_range() {
	init_logging();
	let stage = Stage::in_memory();
	let star = Star::define(&stage, "/Scene/StarA");

	assert_eq!(star.extent_hint(), None);

	star.create_extent_attr(
		Some(vt::Value::new(vt::Array::from(vec![
			gf::Vec3f::new(-2.0, -2.0, -0.5),
			gf::Vec3f::new(2.0, 2.0, 0.5),
		]))),
		false,
	);

	let range = star.extent_hint().unwrap();
	assert_eq!(range.min, gf::Vec3f::new(-2.0, -2.0, -0.5));
	assert_eq!(range.max, gf::Vec3f::new(2.0, 2.0, 0.5));
	assert!(!range.is_empty());
	assert!(gf::Range3f::empty().is_empty());

	let mut grown = range;
	grown.union_with(gf::Vec3f::new(3.0, 0.0, 0.0));
	assert_eq!(grown.max, gf::Vec3f::new(3.0, 2.0, 0.5));
	assert_eq!(grown.min, range.min);
}

#[test]
fn sparse_create_skips_redundant_defaults() {
	init_logging();
	let stage = Stage::in_memory();
	let star = Star::define(&stage, "/Scene/StarA");

	// The value restates the schema fallback, so nothing is authored.
	let attr = star.create_visibility_attr(
		Some(vt::Value::new(tf::Token::new("inherited"))),
		true,
	);
	assert!(attr.is_valid());
	assert!(!attr.has_authored_value());
	assert_eq!(attr.get::<tf::Token>().as_str(), "inherited");

	// A differing value is authored even when writing sparsely.
	let attr = star.create_visibility_attr(
		Some(vt::Value::new(tf::Token::new("invisible"))),
		true,
	);
	assert!(attr.has_authored_value());
	assert_eq!(attr.get::<tf::Token>().as_str(), "invisible");

	// Restating the now-authored value sparsely changes nothing.
	star.create_visibility_attr(Some(vt::Value::new(tf::Token::new("invisible"))), true);
	assert_eq!(star.visibility_attr().get::<tf::Token>().as_str(), "invisible");

	// Without a fallback, a sparse write authors the value.
	let attr = star.create_points_attr(Some(vt::Value::new(5)), true);
	assert!(attr.has_authored_value());
	assert_eq!(attr.get::<i32>(), 5);
}

#[test]
fn type_registry_queries() {
	init_logging();
	let stage = Stage::in_memory();
	let star = Star::define(&stage, "/Scene/StarA");

	assert!(!Star::static_tf_type().is_unknown());
	assert!(Star::is_typed_schema());
	assert_eq!(Star::static_tf_type().name().as_str(), "Star");

	assert!(star.prim().is_a(Star::static_tf_type()));
	assert!(star.prim().is_a(Gprim::static_tf_type()));
	assert!(!stage.pseudo_root().is_a(Gprim::static_tf_type()));

	// The prim type name is registered as an alias, which is how is-a
	// queries by name are answered.
	let registry = nanousd::usd::SchemaRegistry::get();
	let by_name = tf::Type::find_derived_by_name(registry.schema_base_type(), "Star");
	assert_eq!(by_name, Star::static_tf_type());
	assert!(by_name.is_a(Gprim::static_tf_type()));
}
