use std::{collections::HashMap, sync::Arc};

use history_core::{Entity, EntityRef};

/// A stand-in domain object, referenced by name from console commands.
#[derive(Debug)]
pub struct DemoEntity {
    name: String,
}

impl Entity for DemoEntity {
    fn identifier(&self) -> String {
        self.name.clone()
    }

    fn type_name(&self) -> &str {
        "Entity"
    }
}

/// Hands out one shared instance per name, so repeating a name refers to the
/// same entity.
#[derive(Default)]
pub struct Catalog {
    entities: HashMap<String, EntityRef>,
}

impl Catalog {
    pub fn get_or_insert(&mut self, name: &str) -> EntityRef {
        self.entities
            .entry(name.to_string())
            .or_insert_with(|| {
                let e: EntityRef = Arc::new(DemoEntity { name: name.to_string() });
                e
            })
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use history_core::same_entity;

    #[test]
    fn same_name_same_entity() {
        let mut c = Catalog::default();
        let a = c.get_or_insert("p1");
        let b = c.get_or_insert("p1");
        let other = c.get_or_insert("p2");
        assert!(same_entity(&a, &b));
        assert!(!same_entity(&a, &other));
        assert_eq!(a.identifier(), "p1");
    }
}
