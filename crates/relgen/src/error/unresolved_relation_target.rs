use super::Error;

/// Error when a relationship names a target table with no registry entry.
///
/// Every relationship target must be registered so that its generated
/// metadata exists before the relationship is resolved against it. This is
/// caught during the enrichment pass and aborts the whole resolution.
#[derive(Debug)]
pub(super) struct UnresolvedRelationTarget {
    table: Box<str>,
}

impl std::error::Error for UnresolvedRelationTarget {}

impl core::fmt::Display for UnresolvedRelationTarget {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "relation table `{}` not defined", self.table)
    }
}

impl Error {
    /// Creates an error for a relationship whose target table is not
    /// registered.
    pub fn unresolved_relation_target(table: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnresolvedRelationTarget(
            UnresolvedRelationTarget {
                table: table.into().into(),
            },
        ))
    }

    /// Returns `true` if this error is an unresolved relation target error.
    pub fn is_unresolved_relation_target(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnresolvedRelationTarget(_))
    }
}
