//! # Mote Core
//!
//! Core value representation for the Mote runtime.
//!
//! This crate provides the foundational building blocks shared across all
//! Mote components:
//!
//! - **Value System**: every runtime datum packed into one small tagged word
//! - **Arena References**: typed indices into the pair/symbol/env tables
//! - **Error Handling**: result types and the fatal-condition definitions
//!
//! The arena tables themselves, and the runtime context that owns them,
//! live one crate up in `mote_runtime`.

#![deny(unsafe_op_in_unsafe_fn)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod value;

pub use error::{MoteError, MoteResult};
pub use value::{EnvRef, PairRef, Raw, SingletonKind, SundryKind, SymbolRef, Tag, Value};

/// Mote runtime version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
