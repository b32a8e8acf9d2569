use super::Error;

/// Error when a many-to-many relationship carries no join side.
///
/// The join table name and its foreign-key/references pair are required to
/// build the five-pair association tag, so their absence is a configuration
/// error, not something resolution can default its way around.
#[derive(Debug)]
pub(super) struct MissingJoinConfig {
    table: Box<str>,
}

impl std::error::Error for MissingJoinConfig {}

impl core::fmt::Display for MissingJoinConfig {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "table `{}` declares a many-to-many relation without a join config",
            self.table
        )
    }
}

impl Error {
    /// Creates an error for a many-to-many relationship missing its join
    /// side. `table` is the table that declares the relationship.
    pub fn missing_join_config(table: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::MissingJoinConfig(MissingJoinConfig {
            table: table.into().into(),
        }))
    }

    /// Returns `true` if this error is a missing join config error.
    pub fn is_missing_join_config(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::MissingJoinConfig(_))
    }
}
