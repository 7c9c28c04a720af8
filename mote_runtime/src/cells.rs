//! Slot layouts for the three arena tables.

use mote_core::{SymbolRef, Value};
use rustc_hash::FxHashMap;
use std::sync::Arc;

/// A cons cell: two Values, arena-allocated.
///
/// Fresh cells hold nil in both fields, which keeps the reserved nil cell
/// at pair index 0 self-consistent: its car and cdr are nil too.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairCell {
    /// First field.
    pub car: Value,
    /// Second field.
    pub cdr: Value,
}

impl Default for PairCell {
    fn default() -> Self {
        Self {
            car: Value::NIL,
            cdr: Value::NIL,
        }
    }
}

/// An interned-name cell. Identity is the arena index, not the name; the
/// table happily stores the same name at two indices.
#[derive(Debug, Clone)]
pub struct SymbolCell {
    /// The symbol's spelling.
    pub name: Arc<str>,
}

impl Default for SymbolCell {
    fn default() -> Self {
        Self {
            name: Arc::from(""),
        }
    }
}

/// A single binding frame: symbol to Value, keys unique.
///
/// There is no parent-frame link; chained lexical scoping is a layer this
/// core does not provide.
#[derive(Debug, Clone, Default)]
pub struct EnvFrame {
    bindings: FxHashMap<SymbolRef, Value>,
}

impl EnvFrame {
    /// Look up a binding.
    #[must_use]
    pub fn get(&self, symbol: SymbolRef) -> Option<Value> {
        self.bindings.get(&symbol).copied()
    }

    /// Insert or overwrite the binding for `symbol`.
    pub fn set(&mut self, symbol: SymbolRef, value: Value) {
        self.bindings.insert(symbol, value);
    }

    /// Number of bindings in the frame.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Check whether the frame holds no bindings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_cell_defaults_to_nil_fields() {
        let cell = PairCell::default();
        assert!(cell.car.is_nil());
        assert!(cell.cdr.is_nil());
    }

    #[test]
    fn test_symbol_cell_defaults_to_empty_name() {
        assert_eq!(&*SymbolCell::default().name, "");
    }

    #[test]
    fn test_env_frame_set_then_get() {
        let mut frame = EnvFrame::default();
        let sym = SymbolRef::from_index(0);
        assert_eq!(frame.get(sym), None);

        frame.set(sym, Value::int(5));
        assert_eq!(frame.get(sym), Some(Value::int(5)));
        assert_eq!(frame.len(), 1);
    }

    #[test]
    fn test_env_frame_overwrite_keeps_keys_unique() {
        let mut frame = EnvFrame::default();
        let sym = SymbolRef::from_index(3);
        frame.set(sym, Value::int(1));
        frame.set(sym, Value::int(2));
        assert_eq!(frame.get(sym), Some(Value::int(2)));
        assert_eq!(frame.len(), 1);
    }
}
