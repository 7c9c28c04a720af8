//! The explicit runtime context owning the arena tables.
//!
//! A [`Runtime`] holds the three arenas (pairs, symbols, env frames) and
//! the canonical nil constant. There is no process-wide registry: every
//! operation takes the context it works against, several runtimes can
//! coexist in one process, and tests build throwaway instances freely.

use crate::arena::Arena;
use crate::cells::{EnvFrame, PairCell, SymbolCell};
use mote_core::value::{ENV_INDEX_LIMIT, PAIR_INDEX_LIMIT, SYMBOL_INDEX_LIMIT};
use mote_core::{EnvRef, MoteError, MoteResult, PairRef, Raw, SymbolRef, Value};
use std::fmt;
use std::sync::Arc;

/// Per-arena slot counts, as reported by [`Runtime::stats`].
///
/// Counts are table sizes: reserved slots and each supplier's one pre-built
/// unclaimed slot are included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuntimeStats {
    /// Pair table size.
    pub pairs: usize,
    /// Symbol table size.
    pub symbols: usize,
    /// Env table size.
    pub envs: usize,
}

/// A complete, independent instance of the value store.
pub struct Runtime {
    pairs: Arena<PairCell>,
    symbols: Arena<SymbolCell>,
    envs: Arena<EnvFrame>,
    nil: Value,
}

impl Runtime {
    /// Build a fresh runtime: three empty arenas, with pair slot 0 reserved
    /// as the nil cell.
    ///
    /// # Panics
    ///
    /// Aborts if the nil invariant does not hold at startup: nil must be
    /// the pair Value addressing arena index 0.
    #[must_use]
    pub fn new() -> Self {
        let pairs = Arena::with_reserved("pairs", PAIR_INDEX_LIMIT, 1);
        let symbols = Arena::new("symbols", SYMBOL_INDEX_LIMIT);
        let envs = Arena::new("envs", ENV_INDEX_LIMIT);

        let nil = Value::NIL;
        assert!(
            nil.is_pair() && nil.as_pair().index() == 0,
            "nil must be pair index 0"
        );

        log::debug!("runtime initialized, nil at pair index 0");
        Self {
            pairs,
            symbols,
            envs,
            nil,
        }
    }

    /// The canonical empty list.
    #[inline]
    #[must_use]
    pub const fn nil(&self) -> Value {
        self.nil
    }

    // =========================================================================
    // Pairs
    // =========================================================================

    /// Allocate a cons cell holding `car` and `cdr`.
    pub fn new_pair(&self, car: Value, cdr: Value) -> Value {
        let index = self.pairs.allocate();
        self.pairs.with_mut(index, |cell| {
            cell.car = car;
            cell.cdr = cdr;
        });
        PairRef::from_index(index).value()
    }

    /// First field of a pair Value.
    ///
    /// # Panics
    ///
    /// Aborts with a wrong-kind violation if `v` is not a pair.
    #[must_use]
    pub fn car(&self, v: Value) -> Value {
        let p = v.as_pair();
        self.pairs.with(p.index(), |cell| cell.car)
    }

    /// Second field of a pair Value.
    ///
    /// # Panics
    ///
    /// Aborts with a wrong-kind violation if `v` is not a pair.
    #[must_use]
    pub fn cdr(&self, v: Value) -> Value {
        let p = v.as_pair();
        self.pairs.with(p.index(), |cell| cell.cdr)
    }

    /// Build a proper list of inline integers, right to left.
    #[must_use]
    pub fn int_list(&self, ints: &[Raw]) -> Value {
        ints.iter()
            .rev()
            .fold(self.nil, |rest, &i| self.new_pair(Value::int(i), rest))
    }

    // =========================================================================
    // Symbols
    // =========================================================================

    /// Allocate a symbol with the given name.
    ///
    /// Names are not deduplicated: calling this twice with the same name
    /// yields two distinct symbols. Identity is the arena index.
    pub fn new_symbol(&self, name: &str) -> Value {
        let index = self.symbols.allocate();
        let shared: Arc<str> = Arc::from(name);
        self.symbols.with_mut(index, |cell| cell.name = shared);
        SymbolRef::from_index(index).value()
    }

    /// The name a symbol Value was created with.
    ///
    /// # Panics
    ///
    /// Aborts with a wrong-kind violation if `v` is not a symbol.
    #[must_use]
    pub fn symbol_name(&self, v: Value) -> Arc<str> {
        let s = v.as_symbol();
        self.symbols.with(s.index(), |cell| Arc::clone(&cell.name))
    }

    // =========================================================================
    // Environments
    // =========================================================================

    /// Allocate a fresh, empty binding frame.
    pub fn new_env(&self) -> Value {
        let index = self.envs.allocate();
        EnvRef::from_index(index).value()
    }

    /// Insert or overwrite the binding for `sym` in `env`.
    ///
    /// # Panics
    ///
    /// Aborts with a wrong-kind violation if `env` is not an environment
    /// or `sym` is not a symbol.
    pub fn env_set(&self, env: Value, sym: Value, value: Value) {
        let e = env.as_env();
        let s = sym.as_symbol();
        self.envs.with_mut(e.index(), |frame| frame.set(s, value));
    }

    /// Look up the binding for `sym` in `env`.
    ///
    /// # Errors
    ///
    /// `WrongKind` if `env` or `sym` has the wrong tag; `UnboundSymbol`,
    /// naming the symbol, if the frame holds no binding for it.
    pub fn env_try_get(&self, env: Value, sym: Value) -> MoteResult<Value> {
        let e = env.try_as_env()?;
        let s = sym.try_as_symbol()?;
        self.envs.with(e.index(), |frame| frame.get(s)).ok_or_else(|| {
            let name = self.symbols.with(s.index(), |cell| cell.name.to_string());
            MoteError::unbound(name)
        })
    }

    /// Look up the binding for `sym` in `env`.
    ///
    /// # Panics
    ///
    /// Aborts with an unbound-symbol violation naming the symbol if the
    /// frame holds no binding, or a wrong-kind violation on bad tags.
    #[must_use]
    pub fn env_get(&self, env: Value, sym: Value) -> Value {
        match self.env_try_get(env, sym) {
            Ok(value) => value,
            Err(e) => panic!("{e}"),
        }
    }

    // =========================================================================
    // Comparison
    // =========================================================================

    /// Structural equality.
    ///
    /// Pairs compare by their fields, recursively; everything else compares
    /// as `==` does: integers by value, symbols, booleans, singletons, and
    /// environments by identity. Nil only equals nil.
    #[must_use]
    pub fn equal(&self, a: Value, b: Value) -> bool {
        if a == b {
            return true;
        }
        if a.tag() != b.tag() {
            return false;
        }
        if a.is_pair() {
            if a.is_nil() || b.is_nil() {
                return false;
            }
            self.equal(self.car(a), self.car(b)) && self.equal(self.cdr(a), self.cdr(b))
        } else {
            false
        }
    }

    // =========================================================================
    // Introspection
    // =========================================================================

    /// Current per-arena slot counts.
    #[must_use]
    pub fn stats(&self) -> RuntimeStats {
        RuntimeStats {
            pairs: self.pairs.len(),
            symbols: self.symbols.len(),
            envs: self.envs.len(),
        }
    }
}

impl Default for Runtime {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Runtime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stats = self.stats();
        f.debug_struct("Runtime")
            .field("pairs", &stats.pairs)
            .field("symbols", &stats.symbols)
            .field("envs", &stats.envs)
            .finish()
    }
}

// =============================================================================
// Tests
// =============================================================================
