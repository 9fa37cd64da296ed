use history_core::{Argument, Arguments, IdentityArguments, IdentityConverter};
use serde_json::{json, Map, Value};

pub const IDENTITY_KEY: &str = "__identity";

/// Swaps entities for `{"__identity": <identifier>}`, walking nested lists and maps.
#[derive(Clone, Copy, Debug, Default)]
pub struct IdentityReferenceConverter;

impl IdentityReferenceConverter {
    fn convert(arg: &Argument) -> Value {
        match arg {
            Argument::Value(v) => v.clone(),
            Argument::Entity(e) => json!({ IDENTITY_KEY: e.identifier() }),
            Argument::List(items) => Value::Array(items.iter().map(Self::convert).collect()),
            Argument::Map(map) => Value::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), Self::convert(v)))
                    .collect::<Map<String, Value>>(),
            ),
        }
    }
}

impl IdentityConverter for IdentityReferenceConverter {
    fn convert_objects_to_identity_arrays(&self, arguments: &Arguments) -> IdentityArguments {
        arguments
            .iter()
            .map(|(k, v)| (k.clone(), Self::convert(v)))
            .collect()
    }
}
