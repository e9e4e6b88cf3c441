use crate::{
	sdf::{self, CHILDREN_KEYS, FIELD_KEYS},
	tf,
	vt::{self, ValueStore},
};

/// Serialize a layer's specs as `.usda`-style text, walking the namespace
/// from the pseudo-root down through the authored children lists.
pub(crate) fn write_layer(data: &dyn sdf::AbstractData) -> String {
	let mut out = String::from("#usda 1.0\n");

	let root = sdf::Path::absolute_root_path();
	for child in token_list(data, &root, &CHILDREN_KEYS.prim_children) {
		out.push('\n');
		write_prim(&mut out, data, &root.append_child(&child), 0);
	}

	out
}

fn token_list(data: &dyn sdf::AbstractData, path: &sdf::Path, field: &tf::Token) -> Vec<tf::Token> {
	data.get(path, field)
		.and_then(|value| value.get::<vt::Array<tf::Token>>())
		.map(|names| names.iter().cloned().collect())
		.unwrap_or_default()
}

fn indent(out: &mut String, level: usize) {
	for _ in 0..level {
		out.push_str("    ");
	}
}

fn write_prim(out: &mut String, data: &dyn sdf::AbstractData, path: &sdf::Path, level: usize) {
	let specifier = data
		.get(path, &FIELD_KEYS.specifier)
		.and_then(|value| value.get::<sdf::Specifier>())
		.unwrap_or(sdf::Specifier::Over);

	let specifier_text = match specifier {
		sdf::Specifier::Def => "def",
		sdf::Specifier::Over => "over",
		sdf::Specifier::Class => "class",
	};

	let type_name = data
		.get(path, &FIELD_KEYS.type_name)
		.and_then(|value| value.get::<tf::Token>())
		.unwrap_or_default();

	indent(out, level);
	if type_name.is_empty() {
		out.push_str(&format!("{} \"{}\"", specifier_text, path.name()));
	} else {
		out.push_str(&format!("{} {} \"{}\"", specifier_text, type_name, path.name()));
	}

	if let Some(doc) = data
		.get(path, &FIELD_KEYS.documentation)
		.and_then(|value| value.get::<String>())
	{
		out.push_str(" (\n");
		indent(out, level + 1);
		out.push_str(&format!("doc = {}\n", quote(&doc)));
		indent(out, level);
		out.push(')');
	}

	out.push('\n');
	indent(out, level);
	out.push_str("{\n");

	for name in token_list(data, path, &CHILDREN_KEYS.property_children) {
		write_attribute(out, data, &path.append_property(&name), level + 1);
	}

	for child in token_list(data, path, &CHILDREN_KEYS.prim_children) {
		out.push('\n');
		write_prim(out, data, &path.append_child(&child), level + 1);
	}

	indent(out, level);
	out.push_str("}\n");
}

fn write_attribute(out: &mut String, data: &dyn sdf::AbstractData, path: &sdf::Path, level: usize) {
	let type_name = data
		.get(path, &FIELD_KEYS.type_name)
		.and_then(|value| value.get::<tf::Token>())
		.unwrap_or_default();

	let mut prefix = String::new();
	if let Some(true) = data
		.get(path, &FIELD_KEYS.custom)
		.and_then(|value| value.get::<bool>())
	{
		prefix.push_str("custom ");
	}
	if let Some(sdf::Variability::Uniform) = data
		.get(path, &FIELD_KEYS.variability)
		.and_then(|value| value.get::<sdf::Variability>())
	{
		prefix.push_str("uniform ");
	}

	if let Some(default) = data.get(path, &FIELD_KEYS.default) {
		indent(out, level);
		out.push_str(&format!(
			"{}{} {} = {}\n",
			prefix,
			type_name,
			path.name(),
			format_value(&default)
		));
	}

	if let Some(samples) = data
		.get(path, &FIELD_KEYS.time_samples)
		.and_then(|value| value.get::<sdf::TimeSampleMap>())
	{
		indent(out, level);
		out.push_str(&format!("{}{} {}.timeSamples = {{\n", prefix, type_name, path.name()));
		for (time, value) in &samples {
			indent(out, level + 1);
			out.push_str(&format!("{}: {},\n", time, format_value(value)));
		}
		indent(out, level);
		out.push_str("}\n");
	}
}

fn quote(text: &str) -> String {
	format!("\"{}\"", text.replace('\\', "\\\\").replace('"', "\\\""))
}

fn format_array<T>(items: &vt::Array<T>, mut format_item: impl FnMut(&T) -> String) -> String {
	let formatted: Vec<String> = items.iter().map(|item| format_item(item)).collect();
	format!("[{}]", formatted.join(", "))
}

fn format_value(value: &vt::Value) -> String {
	match value.store_ref() {
		ValueStore::Empty => "None".to_string(),

		ValueStore::Bool(v) => (*v as u8).to_string(),
		ValueStore::BoolArray(v) => format_array(v, |item| (*item as u8).to_string()),

		ValueStore::Int(v) => v.to_string(),
		ValueStore::IntArray(v) => format_array(v, |item| item.to_string()),

		ValueStore::Half(v) => v.to_string(),
		ValueStore::HalfArray(v) => format_array(v, |item| item.to_string()),
		ValueStore::Float(v) => v.to_string(),
		ValueStore::FloatArray(v) => format_array(v, |item| item.to_string()),
		ValueStore::Double(v) => v.to_string(),
		ValueStore::DoubleArray(v) => format_array(v, |item| item.to_string()),

		ValueStore::Vec2f(v) => format!("({}, {})", v.x, v.y),
		ValueStore::Vec3f(v) => format!("({}, {}, {})", v.x, v.y, v.z),
		ValueStore::Vec4f(v) => format!("({}, {}, {}, {})", v.x, v.y, v.z, v.w),
		ValueStore::Vec2fArray(v) => format_array(v, |item| format!("({}, {})", item.x, item.y)),
		ValueStore::Vec3fArray(v) => {
			format_array(v, |item| format!("({}, {}, {})", item.x, item.y, item.z))
		}
		ValueStore::Vec4fArray(v) => format_array(v, |item| {
			format!("({}, {}, {}, {})", item.x, item.y, item.z, item.w)
		}),

		ValueStore::Vec3d(v) => format!("({}, {}, {})", v.x, v.y, v.z),

		ValueStore::Token(v) => quote(v.as_str()),
		ValueStore::TokenArray(v) => format_array(v, |item| quote(item.as_str())),

		ValueStore::String(v) => quote(v),
		ValueStore::StringArray(v) => format_array(v, |item| quote(item)),

		ValueStore::Path(v) => format!("<{}>", v),

		ValueStore::Specifier(v) => format!("{:?}", v),
		ValueStore::Variability(v) => format!("{:?}", v),

		ValueStore::TimeSamples(samples) => {
			let formatted: Vec<String> = samples
				.iter()
				.map(|(time, value)| format!("{}: {}", time, format_value(value)))
				.collect();
			format!("{{{}}}", formatted.join(", "))
		}

		ValueStore::Dictionary(dict) => {
			let mut keys: Vec<&String> = dict.keys().collect();
			keys.sort();
			let formatted: Vec<String> = keys
				.iter()
				.map(|key| format!("{} = {}", quote(key), format_value(&dict[*key])))
				.collect();
			format!("{{{}}}", formatted.join(", "))
		}
	}
}
