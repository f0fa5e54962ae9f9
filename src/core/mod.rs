pub mod error;

pub use error::{RelError, RelResult, RelVisitError};
