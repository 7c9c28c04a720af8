//! Error types and result definitions for Mote.
//!
//! Every condition here is a programming-contract violation, not a
//! recoverable runtime state: asking a Value to be a kind it is not,
//! looking up a name that was never bound, or breaching an internal
//! invariant such as the arena index ceiling. The checked `try_*`
//! entry points surface these as `Err`; the unchecked entry points
//! abort with the same display text. Converting them into user-visible
//! errors is the evaluator's job, one layer up.

use thiserror::Error;

/// The unified result type used throughout Mote.
pub type MoteResult<T> = Result<T, MoteError>;

/// Fatal contract violations raised by the value and arena layers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoteError {
    /// A Value was cast to a kind its tag does not carry.
    #[error("WrongKind: expected {expected}, found {found}")]
    WrongKind {
        /// Kind the caller demanded.
        expected: &'static str,
        /// Kind the tag bits actually describe.
        found: &'static str,
    },

    /// Environment lookup for a symbol with no binding in the frame.
    #[error("UnboundSymbol: no binding for '{name}'")]
    UnboundSymbol {
        /// Name of the symbol that missed.
        name: String,
    },

    /// An arena grew to the point where indices would alias tag bits.
    #[error("ArenaExhausted: {arena} arena reached its index ceiling of {limit}")]
    ArenaExhausted {
        /// Which arena hit the ceiling.
        arena: &'static str,
        /// The ceiling, in slots.
        limit: usize,
    },
}

impl MoteError {
    /// Create a wrong-kind cast error.
    #[must_use]
    pub const fn wrong_kind(expected: &'static str, found: &'static str) -> Self {
        Self::WrongKind { expected, found }
    }

    /// Create an unbound-symbol error naming the symbol.
    #[must_use]
    pub fn unbound(name: impl Into<String>) -> Self {
        Self::UnboundSymbol { name: name.into() }
    }

    /// Create an arena-exhausted error.
    #[must_use]
    pub const fn exhausted(arena: &'static str, limit: usize) -> Self {
        Self::ArenaExhausted { arena, limit }
    }
}
