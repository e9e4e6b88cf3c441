//! Graphics Foundations

use half::f16;

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2<T> {
	pub x: T,
	pub y: T,
}

impl<T> Vec2<T> {
	pub fn new(x: T, y: T) -> Self {
		Self { x, y }
	}
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec3<T> {
	pub x: T,
	pub y: T,
	pub z: T,
}

impl<T> Vec3<T> {
	pub fn new(x: T, y: T, z: T) -> Self {
		Self { x, y, z }
	}
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec4<T> {
	pub x: T,
	pub y: T,
	pub z: T,
	pub w: T,
}

impl<T> Vec4<T> {
	pub fn new(x: T, y: T, z: T, w: T) -> Self {
		Self { x, y, z, w }
	}
}

pub type Vec2h = Vec2<f16>;
pub type Vec2f = Vec2<f32>;
pub type Vec2d = Vec2<f64>;
pub type Vec2i = Vec2<i32>;

pub type Vec3h = Vec3<f16>;
pub type Vec3f = Vec3<f32>;
pub type Vec3d = Vec3<f64>;
pub type Vec3i = Vec3<i32>;

pub type Vec4h = Vec4<f16>;
pub type Vec4f = Vec4<f32>;
pub type Vec4d = Vec4<f64>;
pub type Vec4i = Vec4<i32>;

impl From<Vec3f> for Vec3d {
	fn from(v: Vec3f) -> Self {
		Self {
			x: v.x.into(),
			y: v.y.into(),
			z: v.z.into(),
		}
	}
}

/// Axis-aligned bounding range in three dimensions.
///
/// The empty range has `min` greater than `max` on every axis and is the
/// identity for [`Range3f::union_with`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Range3f {
	pub min: Vec3f,
	pub max: Vec3f,
}

impl Range3f {
	pub fn new(min: Vec3f, max: Vec3f) -> Self {
		Self { min, max }
	}

	pub fn empty() -> Self {
		Self {
			min: Vec3f::new(f32::INFINITY, f32::INFINITY, f32::INFINITY),
			max: Vec3f::new(f32::NEG_INFINITY, f32::NEG_INFINITY, f32::NEG_INFINITY),
		}
	}

	pub fn is_empty(&self) -> bool {
		self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
	}

	/// Extend this range to contain `point`.
	pub fn union_with(&mut self, point: Vec3f) {
		self.min.x = self.min.x.min(point.x);
		self.min.y = self.min.y.min(point.y);
		self.min.z = self.min.z.min(point.z);
		self.max.x = self.max.x.max(point.x);
		self.max.y = self.max.y.max(point.y);
		self.max.z = self.max.z.max(point.z);
	}
}

impl Default for Range3f {
	fn default() -> Self {
		Self::empty()
	}
}
