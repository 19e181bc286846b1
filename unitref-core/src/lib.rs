//! unitref Core - Fundamental types
//!
//! This crate provides the types shared by the unitref crates:
//! - `UnitrefError`: Structured errors for routers and tool servers
//! - `parse_value`: Parsing of user-typed numbers

mod number;
mod error;

pub use number::{parse_value, InputError};
pub use error::{UnitrefError, codes};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{parse_value, InputError, UnitrefError};
    pub use crate::error::codes;
}
