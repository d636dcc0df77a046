//! The canonical YAML marshaler.

use crate::emit::escape_string;
use crate::fieldpath::{list_child, map_child, named_child, PathFilter};
use crate::sort::KeyOrder;
use crate::value::{Map, Value};
use std::fmt::Write;

/// Marshaler emits a document tree as canonical YAML text.
///
/// Mapping keys are emitted in [`KeyOrder`] order, children are filtered
/// through a [`PathFilter`] by path, nesting indents by 2 spaces per level,
/// and scalar strings go through [`escape_string`]. The output is a pure
/// function of the tree and the configuration.
#[derive(Debug)]
pub struct Marshaler<'a> {
    order: &'a KeyOrder,
    filter: &'a PathFilter,
    quote_strings: bool,
    array_indent_plus_2: bool,
}

impl<'a> Marshaler<'a> {
    pub fn new(order: &'a KeyOrder, filter: &'a PathFilter) -> Self {
        Marshaler {
            order,
            filter,
            quote_strings: false,
            array_indent_plus_2: false,
        }
    }

    /// Quote every scalar string in the output.
    pub fn quote_strings(mut self, on: bool) -> Self {
        self.quote_strings = on;
        self
    }

    /// Indent sequence dashes an extra 2 spaces.
    pub fn array_indent_plus_2(mut self, on: bool) -> Self {
        self.array_indent_plus_2 = on;
        self
    }

    /// Emits the tree as YAML text. Every emitted line ends in a newline.
    pub fn marshal(&self, value: &Value) -> String {
        let mut out = String::new();
        self.emit(&mut out, 0, "", false, value);
        out
    }

    fn emit(&self, out: &mut String, level: i32, path: &str, in_sequence: bool, value: &Value) {
        match value {
            Value::Null => out.push_str("null\n"),
            Value::Bool(b) => {
                writeln!(out, "{}", b).ok();
            }
            Value::Int(i) => {
                writeln!(out, "{}", i).ok();
            }
            Value::Float(f) => {
                writeln!(out, "{}", f).ok();
            }
            Value::String(s) => {
                writeln!(out, "{}", escape_string(s, self.quote_strings)).ok();
            }
            Value::Map(m) => self.emit_map(out, level, path, in_sequence, m),
            Value::List(items) => self.emit_list(out, level, path, items),
        }
    }

    fn emit_map(&self, out: &mut String, level: i32, path: &str, in_sequence: bool, map: &Map) {
        if map.is_empty() {
            writeln!(out, "{}{{}}", indent(level)).ok();
            return;
        }

        let mut emitted = 0;
        for (key, child) in self.order.sorted_entries(map) {
            let child_path = map_child(path, key);
            if !self.filter.admits(&child_path) {
                continue;
            }
            // The first key emitted directly under a sequence element
            // continues the `- ` line.
            let prefix = if in_sequence && emitted == 0 {
                String::new()
            } else {
                indent(level)
            };
            match child {
                Value::Map(_) | Value::List(_) => {
                    writeln!(out, "{}{}:", prefix, key).ok();
                }
                _ => {
                    write!(out, "{}{}: ", prefix, key).ok();
                }
            }
            self.emit(out, level + 2, &child_path, false, child);
            emitted += 1;
        }
    }

    fn emit_list(&self, out: &mut String, level: i32, path: &str, items: &[Value]) {
        if items.is_empty() {
            writeln!(out, "{}[]", indent(level)).ok();
            return;
        }

        let offset = if self.array_indent_plus_2 { 2 } else { 0 };
        for (i, item) in items.iter().enumerate() {
            let child_path = match item.as_map().and_then(Map::name) {
                Some(name) => named_child(path, "name", name),
                None => list_child(path, i),
            };
            if !self.filter.admits(&child_path) {
                continue;
            }
            write!(out, "{}- ", indent(level - 2 + offset)).ok();
            self.emit(out, level + offset, &child_path, true, item);
        }
    }
}

fn indent(level: i32) -> String {
    " ".repeat(level.max(0) as usize)
}
