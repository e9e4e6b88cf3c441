use super::Token;
use std::collections::HashMap;
use std::sync::{LazyLock, RwLock};

/// Handle to a type declared with the runtime type registry.
///
/// Handles are cheap to copy, compare and hash. The unknown type is the
/// result of failed lookups and answers `false` to every [`Type::is_a`]
/// query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Type(u32);

const UNKNOWN_TYPE_INDEX: u32 = u32::MAX;

struct TypeInfo {
	name: Token,
	bases: Vec<Type>,
	// Alias name -> derived type, for types registered under this base.
	aliases: HashMap<String, Type>,
}

#[derive(Default)]
struct Registry {
	infos: Vec<TypeInfo>,
	by_name: HashMap<String, Type>,
}

static REGISTRY: LazyLock<RwLock<Registry>> = LazyLock::new(|| RwLock::new(Registry::default()));

impl Type {
	pub const fn unknown() -> Self {
		Type(UNKNOWN_TYPE_INDEX)
	}

	pub fn is_unknown(&self) -> bool {
		self.0 == UNKNOWN_TYPE_INDEX
	}

	/// Declare a type under `name`, deriving from the given `bases`.
	///
	/// Declaring is idempotent: redeclaring an existing name returns the
	/// previously issued handle and leaves its bases untouched.
	pub fn declare(name: &str, bases: &[Type]) -> Self {
		let mut registry = REGISTRY.write().unwrap();

		if let Some(ty) = registry.by_name.get(name) {
			return *ty;
		}

		let ty = Type(registry.infos.len() as u32);
		registry.infos.push(TypeInfo {
			name: Token::new(name),
			bases: bases.to_vec(),
			aliases: HashMap::new(),
		});
		registry.by_name.insert(name.to_string(), ty);

		ty
	}

	/// Find a declared type by its registered name.
	pub fn find(name: &str) -> Self {
		let registry = REGISTRY.read().unwrap();
		registry
			.by_name
			.get(name)
			.copied()
			.unwrap_or(Type::unknown())
	}

	/// The name this type was declared under, or the empty token.
	pub fn name(&self) -> Token {
		let registry = REGISTRY.read().unwrap();
		registry
			.infos
			.get(self.0 as usize)
			.map(|info| info.name.clone())
			.unwrap_or_default()
	}

	/// Returns true if this type is `base` or transitively derives from it.
	pub fn is_a(&self, base: Type) -> bool {
		if self.is_unknown() || base.is_unknown() {
			return false;
		}

		let registry = REGISTRY.read().unwrap();
		let mut pending = vec![*self];

		while let Some(ty) = pending.pop() {
			if ty == base {
				return true;
			}
			if let Some(info) = registry.infos.get(ty.0 as usize) {
				pending.extend(info.bases.iter().copied());
			}
		}

		false
	}

	/// Register `alias` for this type under `base`, enabling
	/// [`Type::find_derived_by_name`] lookups by that name.
	pub fn add_alias(&self, base: Type, alias: &str) {
		let mut registry = REGISTRY.write().unwrap();
		if let Some(info) = registry.infos.get_mut(base.0 as usize) {
			info.aliases.insert(alias.to_string(), *self);
		}
	}

	/// Find the type derived from `base` that `name` refers to, either as a
	/// registered alias or as a declared type name.
	pub fn find_derived_by_name(base: Type, name: &str) -> Type {
		{
			let registry = REGISTRY.read().unwrap();
			if let Some(info) = registry.infos.get(base.0 as usize)
				&& let Some(ty) = info.aliases.get(name)
			{
				return *ty;
			}
		}

		let ty = Type::find(name);
		if !ty.is_unknown() && ty.is_a(base) {
			ty
		} else {
			Type::unknown()
		}
	}
}
