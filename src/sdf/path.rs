use crate::{coding_error, tf};

/// A path value used to locate objects in layers or scenegraphs.
///
/// Paths are value types built from identifier segments: a (possibly
/// absolute) run of prim names, optionally followed by a single property
/// name. Namespaced property names use `:` separators.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path {
	absolute: bool,
	prims: Vec<tf::Token>,
	prop: Option<tf::Token>,
}

impl Path {
	/// The empty path value.
	pub const fn empty_path() -> Self {
		Self {
			absolute: false,
			prims: Vec::new(),
			prop: None,
		}
	}

	/// The absolute path representing the top of the namespace hierarchy.
	pub const fn absolute_root_path() -> Self {
		Self {
			absolute: true,
			prims: Vec::new(),
			prop: None,
		}
	}
}

/// Querying paths.
impl Path {
	/// Returns true if this path is the [`Self::empty_path`].
	pub fn is_empty(&self) -> bool {
		!self.absolute && self.prims.is_empty() && self.prop.is_none()
	}

	/// Returns true if this path is the [`Self::absolute_root_path`].
	pub fn is_absolute_root(&self) -> bool {
		self.absolute && self.prims.is_empty() && self.prop.is_none()
	}

	/// Returns true if this path starts at the namespace root.
	pub fn is_absolute(&self) -> bool {
		self.absolute
	}

	/// Returns whether the path identifies a prim.
	pub fn is_prim_path(&self) -> bool {
		!self.prims.is_empty() && self.prop.is_none()
	}

	/// Returns whether the path identifies a property of a prim.
	pub fn is_prim_property_path(&self) -> bool {
		!self.prims.is_empty() && self.prop.is_some()
	}

	/// Return the path that identifies this path's namespace parent.
	pub fn parent_path(&self) -> Self {
		if self.prop.is_some() {
			return Self {
				absolute: self.absolute,
				prims: self.prims.clone(),
				prop: None,
			};
		}

		if self.prims.is_empty() {
			return Self::empty_path();
		}

		let mut prims = self.prims.clone();
		prims.pop();

		Self {
			absolute: self.absolute,
			prims,
			prop: None,
		}
	}

	/// Return a range for iterating over the ancestors of this path.
	///
	/// The range provides iteration over the prefixes of a path, ordered from
	/// longest to shortest. Starting with the path itself and ending with a
	/// single element path, not including the empty/root path.
	pub fn ancestors_range(&self) -> PathAncestorsRange {
		PathAncestorsRange { path: self.clone() }
	}

	/// Returns the name of the prim or property identified by the path.
	pub fn name(&self) -> String {
		self.name_token().to_string()
	}

	/// Returns the name of the prim or property identified by the path, as a token.
	pub fn name_token(&self) -> tf::Token {
		if let Some(prop) = &self.prop {
			return prop.clone();
		}

		self.prims.last().cloned().unwrap_or_default()
	}
}

/// Creating new paths by modifying existing paths.
impl Path {
	/// Creates a path by appending an element for `child_name` to this path.
	///
	/// This path must be a prim path or the AbsoluteRootPath.
	pub fn append_child(&self, child_name: &tf::Token) -> Self {
		if self.prop.is_some() || self.is_empty() || !is_identifier(child_name.as_str()) {
			return Self::empty_path();
		}

		let mut prims = self.prims.clone();
		prims.push(child_name.clone());

		Self {
			absolute: self.absolute,
			prims,
			prop: None,
		}
	}

	/// Creates a path by appending an element for `prop_name` to this path.
	///
	/// This path must be a prim path.
	pub fn append_property(&self, prop_name: &tf::Token) -> Self {
		if !self.is_prim_path() || !is_property_name(prop_name.as_str()) {
			return Self::empty_path();
		}

		Self {
			absolute: self.absolute,
			prims: self.prims.clone(),
			prop: Some(prop_name.clone()),
		}
	}
}

/// Error produced when parsing a string that is not a valid path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
	text: String,
	message: &'static str,
}

impl std::fmt::Display for ParseError {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		write!(f, "invalid path \"{}\": {}", self.text, self.message)
	}
}

impl std::error::Error for ParseError {}

fn is_identifier(text: &str) -> bool {
	let mut chars = text.chars();
	match chars.next() {
		Some(c) if c.is_alphabetic() || c == '_' => {}
		_ => return false,
	}
	chars.all(|c| c.is_alphanumeric() || c == '_')
}

fn is_property_name(text: &str) -> bool {
	!text.is_empty() && text.split(':').all(is_identifier)
}

/// Parsing paths from text.
impl Path {
	pub fn parse(text: &str) -> Result<Self, ParseError> {
		let error = |message| ParseError {
			text: text.to_string(),
			message,
		};

		if text.is_empty() {
			return Ok(Self::empty_path());
		}

		if text == "/" {
			return Ok(Self::absolute_root_path());
		}

		let (prim_part, prop_part) = match text.split_once('.') {
			Some((prims, prop)) => (prims, Some(prop)),
			None => (text, None),
		};

		let (absolute, segments) = match prim_part.strip_prefix('/') {
			Some(rest) => (true, rest),
			None => (false, prim_part),
		};

		if segments.is_empty() {
			return Err(error("expected a prim name"));
		}

		let mut prims = Vec::new();
		for segment in segments.split('/') {
			if !is_identifier(segment) {
				return Err(error("prim names must be identifiers"));
			}
			prims.push(tf::Token::new(segment));
		}

		let prop = match prop_part {
			Some(name) => {
				if !is_property_name(name) {
					return Err(error("property names must be identifiers, optionally namespaced with ':'"));
				}
				Some(tf::Token::new(name))
			}
			None => None,
		};

		Ok(Self {
			absolute,
			prims,
			prop,
		})
	}
}

impl Default for Path {
	fn default() -> Self {
		Self::empty_path()
	}
}

impl From<&str> for Path {
	fn from(s: &str) -> Self {
		Self::parse(s).unwrap_or_else(|err| {
			coding_error!("{err}");
			Self::empty_path()
		})
	}
}

impl std::fmt::Display for Path {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		if self.is_absolute_root() {
			return write!(f, "/");
		}

		if self.absolute {
			write!(f, "/")?;
		}

		for (i, prim) in self.prims.iter().enumerate() {
			if i > 0 {
				write!(f, "/")?;
			}
			write!(f, "{prim}")?;
		}

		if let Some(prop) = &self.prop {
			write!(f, ".{prop}")?;
		}

		Ok(())
	}
}

pub struct PathAncestorsRange {
	path: Path,
}

impl std::iter::Iterator for PathAncestorsRange {
	type Item = Path;

	fn next(&mut self) -> Option<Self::Item> {
		if self.path.is_empty() || self.path.is_absolute_root() {
			return None;
		}

		let current_path = self.path.clone();
		self.path = self.path.parent_path();

		Some(current_path)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn p(s: &str) -> Path {
		Path::from(s)
	}

	fn t(s: &str) -> tf::Token {
		tf::Token::new(s)
	}

	#[test]
	fn append_child() {
		assert_eq!(p("/foo").append_child(&t("bar")), p("/foo/bar"));
		assert_eq!(p("foo").append_child(&t("bar")), p("foo/bar"));
		assert_eq!(Path::absolute_root_path().append_child(&t("foo")), p("/foo"));
		assert_eq!(p("/foo.prop").append_child(&t("bar")), Path::empty_path());
	}

	#[test]
	fn append_property() {
		assert_eq!(p("/foo").append_property(&t("prop")), p("/foo.prop"));
		assert_eq!(
			p("/foo").append_property(&t("prop:foo:bar")),
			p("/foo.prop:foo:bar")
		);
		assert_eq!(
			p("/foo.prop").append_property(&t("prop2")),
			Path::empty_path()
		);
		assert_eq!(
			Path::absolute_root_path().append_property(&t("prop")),
			Path::empty_path()
		);
	}

	#[test]
	fn parent_path() {
		assert_eq!(p("/foo").parent_path(), Path::absolute_root_path());
		assert_eq!(p("/foo/bar").parent_path(), p("/foo"));
		assert_eq!(p("foo/bar").parent_path(), p("foo"));
		assert_eq!(p("/foo.prop").parent_path(), p("/foo"));
		assert_eq!(p("foo.prop").parent_path(), p("foo"));
		assert_eq!(p("/foo.prop:bar").parent_path(), p("/foo"));
		assert_eq!(Path::absolute_root_path().parent_path(), Path::empty_path());
	}

	#[test]
	fn ancestors_range() {
		let path = p("/foo/bar/baz");
		let mut ancestors = path.ancestors_range();
		assert_eq!(ancestors.next(), Some(p("/foo/bar/baz")));
		assert_eq!(ancestors.next(), Some(p("/foo/bar")));
		assert_eq!(ancestors.next(), Some(p("/foo")));
		assert_eq!(ancestors.next(), None);

		let path = p("/foo/bar/baz.prop");
		let mut ancestors = path.ancestors_range();
		assert_eq!(ancestors.next(), Some(p("/foo/bar/baz.prop")));
		assert_eq!(ancestors.next(), Some(p("/foo/bar/baz")));
		assert_eq!(ancestors.next(), Some(p("/foo/bar")));
		assert_eq!(ancestors.next(), Some(p("/foo")));
		assert_eq!(ancestors.next(), None);
	}

	#[test]
	fn print() {
		assert_eq!(p("/foo").to_string(), "/foo");
		assert_eq!(p("/foo/bar").to_string(), "/foo/bar");
		assert_eq!(p("foo/bar").to_string(), "foo/bar");
		assert_eq!(p("/foo.prop").to_string(), "/foo.prop");
		assert_eq!(Path::absolute_root_path().to_string(), "/");
		assert_eq!(Path::empty_path().to_string(), "");
	}

	#[test]
	fn parse_valid() {
		assert!(Path::parse("").is_ok());
		assert!(Path::parse("/").is_ok());
		assert!(Path::parse("/root/prim").is_ok());
		assert!(Path::parse("my_identifier").is_ok());
		assert!(Path::parse("prim.property").is_ok());
		assert!(Path::parse("prim.prop:subprop:detail").is_ok());
		assert!(Path::parse("/p1/p2/p3.prop:name").is_ok());
	}

	#[test]
	fn parse_invalid() {
		assert!(Path::parse("//").is_err());
		assert!(Path::parse("/foo/").is_err());
		assert!(Path::parse("/foo.").is_err());
		assert!(Path::parse("/1foo").is_err());
		assert!(Path::parse("/foo bar").is_err());
		assert!(Path::parse(".prop").is_err());
		assert!(Path::parse("/foo.prop:").is_err());
		assert!(Path::parse("/foo..prop").is_err());
	}

	#[test]
	fn queries() {
		assert!(p("/foo").is_prim_path());
		assert!(p("foo").is_prim_path());
		assert!(!Path::absolute_root_path().is_prim_path());
		assert!(!p("/foo.prop").is_prim_path());
		assert!(p("/foo.prop").is_prim_property_path());
		assert_eq!(p("/foo/bar.prop").name(), "prop");
		assert_eq!(p("/foo/bar").name(), "bar");
	}
}
