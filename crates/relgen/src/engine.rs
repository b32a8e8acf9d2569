use crate::relate::{RelateConfig, RelationKind};

/// Metadata handle for one generated model, owned by the engine.
///
/// The resolver treats handles as opaque apart from the struct name, which it
/// needs to cross-reference join tables and report generated names.
pub trait ModelMeta {
    /// Name of the generated model struct.
    fn model_struct_name(&self) -> &str;
}

/// Boundary to the external code-generation engine.
///
/// The engine owns SQL introspection, templating, and file emission; this
/// crate only sequences calls into it. Implementations are handed in
/// explicitly by the caller, never reached through shared global state.
pub trait Engine {
    type Meta: ModelMeta + Clone;

    /// Registers a table-to-model mapping, optionally with association
    /// options, and returns the metadata handle used for cross-referencing
    /// and final emission.
    fn generate_model_as(
        &mut self,
        table_name: &str,
        model_name: &str,
        opts: Vec<ModelOpt<Self::Meta>>,
    ) -> Self::Meta;

    /// Finalizes all provided metadata as generated source artifacts.
    fn apply_basic(&mut self, metas: Vec<Self::Meta>);
}

/// An association option consumed by [`Engine::generate_model_as`].
///
/// Built through [`ModelOpt::relate`] and read back through accessors by
/// engine implementations; callers never inspect one.
#[derive(Debug, Clone)]
pub struct ModelOpt<M> {
    kind: RelationKind,
    field_name: String,
    target: M,
    config: RelateConfig,
}

impl<M> ModelOpt<M> {
    /// Builds a relation option: `field_name` on the generated struct points
    /// at the model described by `target`, tagged per `config`.
    pub fn relate(
        kind: RelationKind,
        field_name: impl Into<String>,
        target: M,
        config: RelateConfig,
    ) -> Self {
        Self {
            kind,
            field_name: field_name.into(),
            target,
            config,
        }
    }

    pub fn kind(&self) -> RelationKind {
        self.kind
    }

    pub fn field_name(&self) -> &str {
        &self.field_name
    }

    /// Metadata handle of the association's target model.
    pub fn target(&self) -> &M {
        &self.target
    }

    pub fn config(&self) -> &RelateConfig {
        &self.config
    }
}
