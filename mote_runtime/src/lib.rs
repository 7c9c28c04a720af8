//! # Mote Runtime
//!
//! Arena tables and the runtime context for the Mote runtime.
//!
//! This crate provides the memory-management half of the core:
//!
//! - **Arenas**: append-only slot tables with serialized index issuance
//! - **Runtime Context**: an explicit, self-contained store owning the
//!   pair, symbol, and env tables plus the nil constant
//! - **Rendering**: textual output of Values against a context
//!
//! The Value encoding itself lives one crate down in `mote_core`, and is
//! re-exported here for convenience.

#![deny(unsafe_op_in_unsafe_fn)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod arena;
pub mod cells;
mod render;
pub mod runtime;

pub use arena::Arena;
pub use cells::{EnvFrame, PairCell, SymbolCell};
pub use runtime::{Runtime, RuntimeStats};

pub use mote_core::{MoteError, MoteResult, Value};
