use std::{collections::BTreeMap, fmt, sync::Arc};

use serde_json::Value;

/// A live domain object the host may attach to a history entry.
pub trait Entity: Send + Sync {
    /// Persistence identity, stable across requests.
    fn identifier(&self) -> String;

    fn type_name(&self) -> &str;
}

pub type EntityRef = Arc<dyn Entity>;

/// Identity comparison: true only when both handles point at the same allocation.
pub fn same_entity(a: &EntityRef, b: &EntityRef) -> bool {
    // Compare data pointers only; vtable pointers for the same type may differ
    // between codegen units.
    Arc::as_ptr(a) as *const () == Arc::as_ptr(b) as *const ()
}

/// Identity comparison for optional entities. Two absent entities are the same.
pub fn same_optional_entity(a: Option<&EntityRef>, b: Option<&EntityRef>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => same_entity(a, b),
        (None, None) => true,
        _ => false,
    }
}

/// Argument value as handed over by a controller, before identity conversion.
#[derive(Clone)]
pub enum Argument {
    Value(Value),
    Entity(EntityRef),
    List(Vec<Argument>),
    Map(BTreeMap<String, Argument>),
}

impl Argument {
    pub fn value<V: Into<Value>>(v: V) -> Self {
        Self::Value(v.into())
    }

    pub fn entity(e: EntityRef) -> Self {
        Self::Entity(e)
    }
}

impl fmt::Debug for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(v) => write!(f, "{v}"),
            Self::Entity(e) => write!(f, "{}#{}", e.type_name(), e.identifier()),
            Self::List(items) => f.debug_list().entries(items).finish(),
            Self::Map(map) => f.debug_map().entries(map).finish(),
        }
    }
}

pub type Arguments = BTreeMap<String, Argument>;

/// Arguments that only hold serializable values and identity references.
pub type IdentityArguments = serde_json::Map<String, Value>;

/// Replaces live entities inside request arguments with stable identity references.
pub trait IdentityConverter: Send + Sync {
    fn convert_objects_to_identity_arrays(&self, arguments: &Arguments) -> IdentityArguments;
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) struct Product {
        pub id: &'static str,
    }

    impl Entity for Product {
        fn identifier(&self) -> String {
            self.id.to_string()
        }

        fn type_name(&self) -> &str {
            "Product"
        }
    }

    pub(crate) fn product(id: &'static str) -> EntityRef {
        Arc::new(Product { id })
    }

    #[test]
    fn identity_is_by_allocation_not_by_value() {
        let a = product("p-1");
        let b = product("p-1");
        assert!(same_entity(&a, &a.clone()));
        assert!(!same_entity(&a, &b));
    }

    #[test]
    fn optional_identity() {
        let a = product("p-1");
        assert!(same_optional_entity(None, None));
        assert!(same_optional_entity(Some(&a), Some(&a)));
        assert!(!same_optional_entity(Some(&a), None));
        assert!(!same_optional_entity(None, Some(&a)));
    }

    #[test]
    fn argument_debug_shows_identity() {
        let arg = Argument::entity(product("p-7"));
        assert_eq!(format!("{arg:?}"), "Product#p-7");
    }
}
