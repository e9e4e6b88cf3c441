use nanousd::usd::Stage;
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
fn define_authors_ancestors_and_children() {
	init_logging();
	let stage = Stage::in_memory();

	Star::define(&stage, "/World/Set/StarA");
	Star::define(&stage, "/World/Set/StarB");
	Star::define(&stage, "/World/Other");

	for path in ["/World", "/World/Set", "/World/Set/StarA", "/World/Set/StarB"] {
		assert!(
			stage.prim_at_path(path).is_valid(),
			"Could not find {path}"
		);
	}

	// Ancestors are defs without a type.
	let set = stage.prim_at_path("/World/Set");
	assert_eq!(set.specifier(), Some(sdf::Specifier::Def));
	assert!(set.type_name().is_empty());

	// Children appear in authoring order.
	let names: Vec<String> = set.children().map(|child| child.path().name()).collect();
	assert_eq!(names, ["StarA", "StarB"]);

	let world_names: Vec<String> = stage
		.prim_at_path("/World")
		.children()
		.map(|child| child.path().name())
		.collect();
	assert_eq!(world_names, ["Set", "Other"]);
}

#[test]
fn override_prim_authors_overs() {
	init_logging();
	let stage = Stage::in_memory();

	let over = stage.override_prim("/World/Sleeping");
	assert!(over.is_valid());
	assert_eq!(over.specifier(), Some(sdf::Specifier::Over));
	assert!(over.type_name().is_empty());

	// Defining on top of the over retypes it into a def.
	let star = Star::define(&stage, "/World/Sleeping");
	assert!(star.is_valid());
	assert_eq!(star.prim().specifier(), Some(sdf::Specifier::Def));
	assert_eq!(star.prim().type_name().as_str(), "Star");
}

#[test]
fn attribute_authoring() {
	init_logging();
	let stage = Stage::in_memory();
	let star = Star::define(&stage, "/World/StarA");

	star.create_extent_attr(None, false);
	star.create_points_attr(Some(vt::Value::new(6)), false);

	// Properties list in authoring order.
	let names: Vec<String> = star
		.prim()
		.properties()
		.map(|property| property.name().to_string())
		.collect();
	assert_eq!(names, ["extent", "points"]);

	assert!(star.prim().has_attribute(&tf::Token::new("points")));
	assert!(!star.prim().has_attribute(&tf::Token::new("radius")));

	// Re-creating with the declared type retrieves the existing attribute.
	let attr = star.create_points_attr(Some(vt::Value::new(7)), false);
	assert_eq!(attr.get::<i32>(), 7);
	let names: Vec<String> = star
		.prim()
		.properties()
		.map(|property| property.name().to_string())
		.collect();
	assert_eq!(names, ["extent", "points"]);

	// Clearing removes the authored opinion.
	attr.clear();
	assert!(!attr.has_authored_value());
	assert!(attr.get_value().is_none());
}

#[test]
fn time_samples_resolve_with_held_interpolation() {
	init_logging();
	let stage = Stage::in_memory();
	let star = Star::define(&stage, "/World/StarA");

	let small = vt::Array::from(vec![
		gf::Vec3f::new(-1.0, -1.0, -1.0),
		gf::Vec3f::new(1.0, 1.0, 1.0),
	]);
	let large = vt::Array::from(vec![
		gf::Vec3f::new(-4.0, -4.0, -4.0),
		gf::Vec3f::new(4.0, 4.0, 4.0),
	]);

	let attr = star.create_extent_attr(None, false);
	attr.set_time_sample(10.0, vt::Value::new(large.clone()));
	attr.set_time_sample(1.0, vt::Value::new(small.clone()));

	let samples = attr.time_samples();
	assert_eq!(samples.len(), 2);
	assert_eq!(samples[0].0, 1.0);
	assert_eq!(samples[1].0, 10.0);

	assert_eq!(attr.get_at_time::<vt::Array<gf::Vec3f>>(0.0), Some(small.clone()));
	assert_eq!(attr.get_at_time::<vt::Array<gf::Vec3f>>(1.0), Some(small.clone()));
	assert_eq!(attr.get_at_time::<vt::Array<gf::Vec3f>>(5.0), Some(small.clone()));
	assert_eq!(attr.get_at_time::<vt::Array<gf::Vec3f>>(10.0), Some(large.clone()));
	assert_eq!(attr.get_at_time::<vt::Array<gf::Vec3f>>(99.0), Some(large.clone()));

	// Replacing a sample at an existing time keeps the map deduplicated.
	attr.set_time_sample(1.0, vt::Value::new(large.clone()));
	assert_eq!(attr.time_samples().len(), 2);
	assert_eq!(attr.get_at_time::<vt::Array<gf::Vec3f>>(1.0), Some(large));
}

#[test]
fn export_scene_description_text() {
	init_logging();
	let stage = Stage::in_memory();

	let star = Star::define(&stage, "/World/StarA");
	star.prim().set_documentation("A five pointed star.");
	star.create_points_attr(Some(vt::Value::new(5)), false);
	star.create_extent_attr(
		Some(vt::Value::new(vt::Array::from(vec![
			gf::Vec3f::new(-1.0, -1.0, -1.0),
			gf::Vec3f::new(1.0, 1.0, 1.0),
		]))),
		false,
	);
	star.create_double_sided_attr(Some(vt::Value::new(true)), false);

	let text = stage.export_to_string();

	assert!(text.starts_with("#usda 1.0\n"));
	assert!(text.contains("def \"World\""));
	assert!(text.contains("def Star \"StarA\""));
	assert!(text.contains("doc = \"A five pointed star.\""));
	assert!(text.contains("int points = 5"));
	assert!(text.contains("float3[] extent = [(-1, -1, -1), (1, 1, 1)]"));
	assert!(text.contains("uniform bool doubleSided = 1"));
}

#[test]
fn export_time_samples() {
	init_logging();
	let stage = Stage::in_memory();

	let star = Star::define(&stage, "/World/StarA");
	let attr = star.create_points_attr(None, false);
	attr.set_time_sample(1.0, vt::Value::new(5));
	attr.set_time_sample(10.0, vt::Value::new(7));

	let text = stage.export_to_string();
	assert!(text.contains("int points.timeSamples = {"));
	assert!(text.contains("1: 5,"));
	assert!(text.contains("10: 7,"));
}

#[test]
fn save_writes_export_text() {
	init_logging();
	let stage = Stage::in_memory();

	let star = Star::define(&stage, "/World/StarA");
	star.create_points_attr(Some(vt::Value::new(5)), false);

	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("scene.usda");
	stage.save(&path).unwrap();

	let written = std::fs::read_to_string(&path).unwrap();
	assert_eq!(written, stage.export_to_string());
	assert!(written.contains("def Star \"StarA\""));
}
