use crate::{declare_public_tokens, tf};

declare_public_tokens!(FieldKeys, FIELD_KEYS, [
	custom: "custom",
	custom_data: "customData",
	default: "default",
	documentation: "documentation",
	specifier: "specifier",
	time_samples: "timeSamples",
	type_name: "typeName",
	variability: "variability"
]);

declare_public_tokens!(ChildrenKeys, CHILDREN_KEYS, [
	prim_children: "primChildren",
	property_children: "properties"
]);
