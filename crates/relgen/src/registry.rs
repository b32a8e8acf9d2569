use crate::relate::Relationship;
use indexmap::IndexMap;

/// A table-to-model mapping plus the relationships declared on that model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelConfig {
    /// Database table the model is generated from.
    pub table_name: String,

    /// Name of the model struct the engine should emit.
    pub model_name: String,

    pub relationships: Vec<Relationship>,
}

impl ModelConfig {
    pub fn new(table_name: impl Into<String>, model_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
            model_name: model_name.into(),
            relationships: vec![],
        }
    }

    /// Declares a relationship on this model.
    pub fn relationship(mut self, relationship: Relationship) -> Self {
        self.relationships.push(relationship);
        self
    }
}

/// Registry of every table that should produce a generated model.
///
/// Assembled once up front, then resolved once against an engine via
/// [`resolve`](Registry::resolve) and discarded.
#[derive(Debug, Default)]
pub struct Registry {
    pub(crate) items: IndexMap<String, ModelConfig>,
}

impl Registry {
    /// Builds a registry pre-populated with zero or more configs.
    pub fn new(configs: impl IntoIterator<Item = ModelConfig>) -> Self {
        let mut registry = Self::default();
        for config in configs {
            registry.add(config);
        }
        registry
    }

    /// Inserts or replaces the entry keyed by the config's table name.
    ///
    /// No validation happens here; cross-table checks are deferred to
    /// resolution, when every table is known.
    pub fn add(&mut self, config: ModelConfig) {
        self.items.insert(config.table_name.clone(), config);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_overwrites_same_table() {
        let mut registry = Registry::new([ModelConfig::new("users", "User")]);
        registry.add(ModelConfig::new("users", "Account"));

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.items["users"].model_name, "Account");
    }

    #[test]
    fn new_collects_configs() {
        let registry = Registry::new([
            ModelConfig::new("users", "User"),
            ModelConfig::new("orders", "Order"),
        ]);

        assert_eq!(registry.len(), 2);
        assert!(!registry.is_empty());
    }
}
