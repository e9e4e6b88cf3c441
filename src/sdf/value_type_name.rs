use crate::tf;

/// Name of a registered attribute value type, spelled the way it appears in
/// scene description text (`int`, `float3[]`, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueTypeName {
	token: tf::Token,
}

impl ValueTypeName {
	fn new(text: &str) -> Self {
		Self {
			token: tf::Token::new(text),
		}
	}

	pub fn token(&self) -> &tf::Token {
		&self.token
	}

	pub fn as_str(&self) -> &str {
		self.token.as_str()
	}

	/// Returns true if this names an array value type.
	pub fn is_array(&self) -> bool {
		self.as_str().ends_with("[]")
	}
}

impl std::fmt::Display for ValueTypeName {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		write!(f, "{}", self.token)
	}
}

macro_rules! declare_value_type_names {
	($struct:ident, $static:ident, [$($name:ident: $value:expr),*]) => {
		pub struct $struct {
			$(pub $name: ValueTypeName,)*
		}

		pub static $static: std::sync::LazyLock<$struct> = std::sync::LazyLock::new(|| {
			$struct {
				$($name: ValueTypeName::new($value),)*
			}
		});
	};
}

declare_value_type_names!(ValueTypeNames, VALUE_TYPE_NAMES, [
	bool: "bool",
	bool_array: "bool[]",
	int: "int",
	int_array: "int[]",
	half: "half",
	half_array: "half[]",
	float: "float",
	float_array: "float[]",
	double: "double",
	double_array: "double[]",
	double3: "double3",
	token: "token",
	token_array: "token[]",
	string: "string",
	string_array: "string[]",
	float2: "float2",
	float2_array: "float2[]",
	float3: "float3",
	float3_array: "float3[]",
	float4: "float4",
	float4_array: "float4[]"
]);
