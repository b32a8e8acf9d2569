use indexmap::IndexMap;

/// The kind of association declared between two generated models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationKind {
    HasOne,
    HasMany,
    BelongsTo,
    ManyToMany,
}

/// One side of an association: the table it points at and the column pair
/// linking the two models.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelateTarget {
    /// Table holding the other side of the association.
    pub table: String,

    /// Foreign-key column on this side of the link.
    pub foreign_key: String,

    /// Column the foreign key references.
    pub references: String,
}

impl RelateTarget {
    pub fn new(
        table: impl Into<String>,
        foreign_key: impl Into<String>,
        references: impl Into<String>,
    ) -> Self {
        Self {
            table: table.into(),
            foreign_key: foreign_key.into(),
            references: references.into(),
        }
    }
}

/// A declared link from one model's field to another generated model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    pub kind: RelationKind,

    /// Name of the association field on the generated model struct.
    pub field_name: String,

    pub target: RelateTarget,

    /// Join table side. Required for many-to-many associations; ignored for
    /// every other kind.
    pub join: Option<RelateTarget>,
}

impl Relationship {
    pub fn has_one(field_name: impl Into<String>, target: RelateTarget) -> Self {
        Self::new(RelationKind::HasOne, field_name, target)
    }

    pub fn has_many(field_name: impl Into<String>, target: RelateTarget) -> Self {
        Self::new(RelationKind::HasMany, field_name, target)
    }

    pub fn belongs_to(field_name: impl Into<String>, target: RelateTarget) -> Self {
        Self::new(RelationKind::BelongsTo, field_name, target)
    }

    pub fn many_to_many(
        field_name: impl Into<String>,
        target: RelateTarget,
        join: RelateTarget,
    ) -> Self {
        Self {
            join: Some(join),
            ..Self::new(RelationKind::ManyToMany, field_name, target)
        }
    }

    fn new(kind: RelationKind, field_name: impl Into<String>, target: RelateTarget) -> Self {
        Self {
            kind,
            field_name: field_name.into(),
            target,
            join: None,
        }
    }
}

/// Ordered key-value descriptor encoding foreign-key/reference/join
/// information onto a generated association field.
///
/// Keys and values are forwarded to the engine verbatim; no column-name
/// validation happens here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelateTag {
    entries: IndexMap<String, String>,
}

impl RelateTag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Key-value pairs in the order they were set.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Association options for one generated field, carried into the engine when
/// a model is regenerated with its relationships attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelateConfig {
    pub tag: RelateTag,
}

impl RelateConfig {
    /// Builds the two-pair tag used by has-one, has-many, and belongs-to
    /// associations.
    ///
    /// hasOne    A.id   <--> B.A_id  foreignKey(B.A_id) references(A.id)
    /// hasMany   A.id   <--> B.A_id  foreignKey(B.A_id) references(A.id)
    /// belongsTo A.C_id <--> C.id    foreignKey(A.C_id) references(C.id)
    pub fn foreign_key(foreign_key: &str, references: &str) -> Self {
        let mut tag = RelateTag::new();
        tag.set("foreignKey", foreign_key);
        tag.set("references", references);
        Self { tag }
    }

    /// Builds the five-pair tag used by many-to-many associations.
    ///
    /// A <--> join(B.A_id, B.C_id) <--> C
    pub fn many_to_many(
        foreign_key: &str,
        join_foreign_key: &str,
        join_table: &str,
        join_references: &str,
        references: &str,
    ) -> Self {
        let mut tag = RelateTag::new();
        tag.set("many2many", join_table);
        tag.set("foreignKey", foreign_key);
        tag.set("joinForeignKey", join_foreign_key);
        tag.set("references", references);
        tag.set("JoinReferences", join_references);
        Self { tag }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(tag: &RelateTag) -> Vec<(&str, &str)> {
        tag.iter().collect()
    }

    #[test]
    fn foreign_key_tag_pairs() {
        let config = RelateConfig::foreign_key("order_id", "id");

        assert_eq!(
            pairs(&config.tag),
            [("foreignKey", "order_id"), ("references", "id")]
        );
        assert_eq!(config.tag.get("many2many"), None);
    }

    #[test]
    fn many_to_many_tag_pairs() {
        let config = RelateConfig::many_to_many("order_id", "tag_id", "order_tags", "id", "id");

        assert_eq!(
            pairs(&config.tag),
            [
                ("many2many", "order_tags"),
                ("foreignKey", "order_id"),
                ("joinForeignKey", "tag_id"),
                ("references", "id"),
                ("JoinReferences", "id"),
            ]
        );
    }

    #[test]
    fn tag_values_pass_through_verbatim() {
        // No column-name validation: whatever the config says goes through.
        let config = RelateConfig::foreign_key("ORDER ID ??", "");

        assert_eq!(config.tag.get("foreignKey"), Some("ORDER ID ??"));
        assert_eq!(config.tag.get("references"), Some(""));
    }

    #[test]
    fn set_overwrites_in_place() {
        let mut tag = RelateTag::new();
        tag.set("foreignKey", "a");
        tag.set("references", "b");
        tag.set("foreignKey", "c");

        assert_eq!(tag.len(), 2);
        assert_eq!(pairs(&tag), [("foreignKey", "c"), ("references", "b")]);
    }
}
