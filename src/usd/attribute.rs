use super::Property;
use crate::{
	coding_error,
	sdf::{self, FIELD_KEYS},
	tf, usd,
	vt::{self, ValueType},
};

/// Scenegraph object for authoring and retrieving numeric, string, and
/// array valued data, sampled over time.
#[repr(transparent)]
pub struct Attribute<'a>(Property<'a>);

impl<'a> Attribute<'a> {
	pub(crate) fn new(stage: &'a usd::Stage, path: sdf::Path) -> Self {
		Attribute(Property::new(stage, path))
	}

	/// Returns true if an attribute spec exists at this path.
	pub fn is_valid(&self) -> bool {
		matches!(self.spec_type(), Some(sdf::SpecType::Attribute))
	}

	// Resolution order: the authored default, else the fallback the owning
	// prim's schema declares for this attribute.
	pub(crate) fn resolved_value(&self) -> Option<vt::Value> {
		if let Some(value) = self.stage().resolve_value(self.path(), &FIELD_KEYS.default) {
			return Some(value);
		}

		let prim_type = self
			.stage()
			.resolve_value(&self.path().parent_path(), &FIELD_KEYS.type_name)?
			.get::<tf::Token>()?;

		usd::SchemaRegistry::get().fallback(&prim_type, &self.name())
	}

	/// Return the attribute's resolved value.
	///
	/// Panics if no value resolves or it is not a `T`. Use [`Self::try_get`]
	/// for the checked variant.
	#[track_caller]
	pub fn get<T: ValueType>(&self) -> T {
		self.resolved_value().unwrap().get::<T>().unwrap()
	}

	pub fn try_get<T: ValueType>(&self) -> Option<T> {
		self.resolved_value().and_then(|value| value.get::<T>())
	}

	pub fn get_value(&self) -> Option<vt::Value> {
		self.resolved_value()
	}

	/// Returns true if a default value has been authored, as opposed to
	/// resolving from a schema fallback (or not at all).
	pub fn has_authored_value(&self) -> bool {
		self.stage()
			.resolve_value(self.path(), &FIELD_KEYS.default)
			.is_some()
	}

	/// Author the attribute's default value.
	pub fn set(&self, value: impl Into<vt::Value>) {
		if !self.is_valid() {
			coding_error!("cannot set value on invalid attribute <{}>", self.path());
			return;
		}
		self.stage()
			.set_value(self.path(), &FIELD_KEYS.default, value.into());
	}

	/// Remove the authored default value, if any.
	pub fn clear(&self) {
		self.stage().erase_value(self.path(), &FIELD_KEYS.default);
	}

	pub fn type_name(&self) -> tf::Token {
		self.metadata(&FIELD_KEYS.type_name).unwrap_or_default()
	}

	pub fn variability(&self) -> sdf::Variability {
		self.metadata(&FIELD_KEYS.variability)
			.unwrap_or(sdf::Variability::Varying)
	}

	pub fn is_custom(&self) -> bool {
		self.metadata(&FIELD_KEYS.custom).unwrap_or(false)
	}
}

/// Time samples
impl<'a> Attribute<'a> {
	/// The authored time samples, ordered by time.
	pub fn time_samples(&self) -> sdf::TimeSampleMap {
		self.metadata(&FIELD_KEYS.time_samples).unwrap_or_default()
	}

	/// Author a value for a single sample time, replacing an existing sample
	/// at the same time.
	pub fn set_time_sample(&self, time: f64, value: impl Into<vt::Value>) {
		if !self.is_valid() {
			coding_error!("cannot set time sample on invalid attribute <{}>", self.path());
			return;
		}

		let value = value.into();
		let mut samples = self.time_samples();

		if let Some(sample) = samples.iter_mut().find(|(t, _)| *t == time) {
			sample.1 = value;
		} else {
			samples.push((time, value));
			samples.sort_by(|(a, _), (b, _)| a.partial_cmp(b).unwrap());
		}

		self.stage()
			.set_value(self.path(), &FIELD_KEYS.time_samples, vt::Value::new(samples));
	}

	/// Resolve the value at `time` with held interpolation: the sample at
	/// the greatest authored time not after `time`, or the earliest sample
	/// when `time` precedes them all. Without samples this resolves like
	/// [`Self::try_get`].
	pub fn get_at_time<T: ValueType>(&self, time: f64) -> Option<T> {
		let samples = self.time_samples();

		if samples.is_empty() {
			return self.try_get::<T>();
		}

		let held = samples
			.iter()
			.rev()
			.find(|(t, _)| *t <= time)
			.or_else(|| samples.first());

		held.and_then(|(_, value)| value.get::<T>())
	}
}

impl<'a> std::ops::Deref for Attribute<'a> {
	type Target = Property<'a>;
	fn deref(&self) -> &Self::Target {
		unsafe { std::mem::transmute(self) }
	}
}
