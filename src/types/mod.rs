//! Shared utility types.
//!
//! | Module  | Purpose                                    |
//! |---------|--------------------------------------------|
//! | `error` | Error taxonomy and validation diagnostics  |
//! | `field` | Config field paths used by diagnostics     |

mod error;
mod field;

pub use error::{ConfigDiagnostic, ConfigDiagnostics, ConfigError};
pub use field::FieldPath;
