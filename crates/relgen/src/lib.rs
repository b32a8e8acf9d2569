mod error;
pub use error::Error;

pub mod engine;
pub use engine::{Engine, ModelMeta, ModelOpt};

pub mod relate;
pub use relate::{RelateConfig, RelateTag, RelateTarget, RelationKind, Relationship};

mod registry;
pub use registry::{ModelConfig, Registry};

mod resolve;
pub use resolve::{JoinTable, Resolution};

/// A Result type alias that uses relgen's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
