//! # Domain Layer
//!
//! Core types shared by every appstrap crate: the error taxonomy for
//! bootstrap failures and the constants that pin down the fixed service
//! set the bootstrapper registers.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`error`] | `Error` enum and `Result` alias for all bootstrap failures |
//! | [`constants`] | Service names, configuration keys, fixed defaults |

pub mod constants;
pub mod error;

pub use error::{Error, Result};
