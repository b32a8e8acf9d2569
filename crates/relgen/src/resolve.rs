use crate::engine::{Engine, ModelMeta, ModelOpt};
use crate::relate::{RelateConfig, RelationKind};
use crate::registry::Registry;
use crate::{Error, Result};
use indexmap::IndexMap;

/// A many-to-many association between two generated models, by struct name.
///
/// One record is surfaced per many-to-many relationship whose join table is
/// itself registered, for downstream consumers that need to know which
/// generated types participate in a join.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinTable {
    /// Struct name of the model declaring the association.
    pub model: String,

    /// Association field name on that struct.
    pub field: String,

    /// Struct name of the join model.
    pub join_model: String,
}

/// Output of resolving a registry against an engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Struct names of every generated model, collected during the base
    /// generation pass. Relationship enrichment changes association options,
    /// never struct names, so the list is not revisited afterwards.
    pub model_names: Vec<String>,

    /// Every many-to-many association discovered during enrichment.
    pub join_tables: Vec<JoinTable>,
}

impl Registry {
    /// Drives the engine through model generation for every registered table.
    ///
    /// Runs in two passes. The first generates base metadata for each table
    /// so that every relationship target has a handle to point at. The second
    /// regenerates each relationship-bearing table with its association
    /// options attached, replacing that table's handle. Every final handle is
    /// then submitted to the engine in a single [`apply_basic`] call.
    ///
    /// Tables are processed in registration order. The first resolution
    /// failure aborts the call; metadata already registered with the engine
    /// is not rolled back.
    ///
    /// [`apply_basic`]: Engine::apply_basic
    pub fn resolve<E: Engine>(&self, engine: &mut E) -> Result<Resolution> {
        let mut metas: IndexMap<&str, E::Meta> = IndexMap::new();
        let mut model_names = Vec::with_capacity(self.items.len());

        for (table_name, config) in &self.items {
            let meta = engine.generate_model_as(table_name, &config.model_name, vec![]);
            model_names.push(meta.model_struct_name().to_string());
            metas.insert(table_name, meta);
        }

        let mut join_tables = vec![];

        for (table_name, config) in &self.items {
            if config.relationships.is_empty() {
                continue;
            }

            let model_struct_name = metas[table_name.as_str()].model_struct_name().to_string();
            let mut opts = Vec::with_capacity(config.relationships.len());

            for relationship in &config.relationships {
                let Some(target_meta) = metas.get(relationship.target.table.as_str()) else {
                    return Err(Error::unresolved_relation_target(
                        relationship.target.table.as_str(),
                    ));
                };

                if relationship.kind != RelationKind::ManyToMany {
                    opts.push(ModelOpt::relate(
                        relationship.kind,
                        relationship.field_name.clone(),
                        target_meta.clone(),
                        RelateConfig::foreign_key(
                            &relationship.target.foreign_key,
                            &relationship.target.references,
                        ),
                    ));
                } else {
                    let Some(join) = &relationship.join else {
                        return Err(Error::missing_join_config(table_name.as_str()));
                    };

                    // An unregistered join table gets no JoinTable record,
                    // but the association itself is still generated.
                    if let Some(join_meta) = metas.get(join.table.as_str()) {
                        join_tables.push(JoinTable {
                            model: model_struct_name.clone(),
                            field: relationship.field_name.clone(),
                            join_model: join_meta.model_struct_name().to_string(),
                        });
                    }

                    opts.push(ModelOpt::relate(
                        relationship.kind,
                        relationship.field_name.clone(),
                        target_meta.clone(),
                        RelateConfig::many_to_many(
                            &relationship.target.foreign_key,
                            &join.foreign_key,
                            &join.table,
                            &join.references,
                            &relationship.target.references,
                        ),
                    ));
                }
            }

            let meta = engine.generate_model_as(table_name, &config.model_name, opts);
            metas.insert(table_name, meta);
        }

        engine.apply_basic(metas.into_values().collect());

        Ok(Resolution {
            model_names,
            join_tables,
        })
    }
}
