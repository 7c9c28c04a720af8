//! Textual rendering of Values against a runtime context.
//!
//! Rendering needs the arena tables (a pair Value is just an index), so it
//! lives here rather than on `Value` itself. Output follows the reader
//! syntax: `()` for the empty list, `(a b c)` for proper lists, `(a b . c)`
//! for improper ones, `#t`/`#f`/`#ignore`/`#inert` for the sundry
//! constants.

use crate::runtime::Runtime;
use mote_core::{SundryKind, Tag, Value};
use std::fmt::Write;

impl Runtime {
    /// Render a Value to its textual form.
    #[must_use]
    pub fn render(&self, value: Value) -> String {
        let mut out = String::new();
        self.render_value(&mut out, value);
        out
    }

    fn render_value(&self, out: &mut String, value: Value) {
        match value.tag() {
            Tag::Int => {
                let _ = write!(out, "{}", value.as_int());
            }
            Tag::Pair => {
                out.push('(');
                self.render_list_contents(out, value);
                out.push(')');
            }
            Tag::Symbol => out.push_str(&self.symbol_name(value)),
            Tag::Sundry => match value.sundry_kind() {
                Some(SundryKind::Boolean) => {
                    out.push_str(if value.as_boolean() { "#t" } else { "#f" });
                }
                Some(SundryKind::Singleton) => out.push_str(value.as_singleton().name()),
                Some(SundryKind::Env) => {
                    let _ = write!(out, "#[env {}]", value.as_env().index());
                }
                None => {
                    let _ = write!(out, "#[sundry {:#06x}]", value.to_bits());
                }
            },
        }
    }

    /// Render the innards of a list; the caller owns the enclosing parens.
    fn render_list_contents(&self, out: &mut String, pair: Value) {
        if pair.is_nil() {
            return;
        }
        self.render_value(out, self.car(pair));
        let rest = self.cdr(pair);
        if rest.is_nil() {
            return;
        }
        if rest.is_pair() {
            out.push(' ');
            self.render_list_contents(out, rest);
        } else {
            out.push_str(" . ");
            self.render_value(out, rest);
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_integers() {
        let rt = Runtime::new();
        assert_eq!(rt.render(Value::int(0)), "0");
        assert_eq!(rt.render(Value::int(42)), "42");
        assert_eq!(rt.render(Value::int(-7)), "-7");
    }

    #[test]
    fn test_render_empty_list() {
        let rt = Runtime::new();
        assert_eq!(rt.render(rt.nil()), "()");
        assert_eq!(rt.render(rt.int_list(&[])), "()");
    }

    #[test]
    fn test_render_proper_list() {
        let rt = Runtime::new();
        assert_eq!(rt.render(rt.int_list(&[1, 2, 3])), "(1 2 3)");
        assert_eq!(rt.render(rt.int_list(&[5])), "(5)");
    }

    #[test]
    fn test_render_improper_pair() {
        let rt = Runtime::new();
        let dotted = rt.new_pair(Value::int(1), Value::int(2));
        assert_eq!(rt.render(dotted), "(1 . 2)");
    }

    #[test]
    fn test_render_improper_list_tail() {
        let rt = Runtime::new();
        let tail = rt.new_pair(Value::int(2), Value::int(3));
        let list = rt.new_pair(Value::int(1), tail);
        assert_eq!(rt.render(list), "(1 2 . 3)");
    }

    #[test]
    fn test_render_nested_lists() {
        let rt = Runtime::new();
        let inner = rt.int_list(&[2, 3]);
        let list = rt.new_pair(Value::int(1), rt.new_pair(inner, rt.new_pair(Value::int(4), rt.nil())));
        assert_eq!(rt.render(list), "(1 (2 3) 4)");
    }

    #[test]
    fn test_render_nil_inside_list() {
        let rt = Runtime::new();
        let list = rt.new_pair(rt.nil(), rt.nil());
        assert_eq!(rt.render(list), "(())");
    }

    #[test]
    fn test_render_symbols() {
        let rt = Runtime::new();
        let sym = rt.new_symbol("lambda");
        assert_eq!(rt.render(sym), "lambda");

        let list = rt.new_pair(sym, rt.new_pair(Value::int(1), rt.nil()));
        assert_eq!(rt.render(list), "(lambda 1)");
    }

    #[test]
    fn test_render_sundry_constants() {
        let rt = Runtime::new();
        assert_eq!(rt.render(Value::TRUE), "#t");
        assert_eq!(rt.render(Value::FALSE), "#f");
        assert_eq!(rt.render(Value::IGNORE), "#ignore");
        assert_eq!(rt.render(Value::INERT), "#inert");
    }

    #[test]
    fn test_render_env_reference() {
        let rt = Runtime::new();
        let env = rt.new_env();
        assert_eq!(rt.render(env), "#[env 0]");
    }
}
