//! Type describer
//!
//! Renders a [`TypeDesc`] as a type expression. Nested occurrences of named
//! types collapse to their declared name; the outermost type is always
//! expanded.

use crate::describe::format::indent;
use crate::describe::Describer;
use crate::model::{FuncSig, Shape, TypeDesc};

/// Declared names that never replace their expansion
const RESERVED_NAMES: [&str; 3] = ["bool", "int", "string"];

impl Describer {
    /// Printable declared name of `ty`, if it should stand in for the expansion
    pub(crate) fn type_name(&self, ty: &TypeDesc) -> Option<String> {
        let name = ty.name.as_ref()?;
        if name.name.is_empty() {
            return None;
        }
        if name.namespace.is_empty() || name.namespace == self.config.namespace {
            if RESERVED_NAMES.contains(&name.name.as_str()) {
                return None;
            }
            return Some(name.name.clone());
        }
        Some(format!("{}.{}", name.namespace, name.name))
    }

    pub(crate) fn write_type(
        &self,
        out: &mut String,
        ty: &TypeDesc,
        level: usize,
        prefer_name: bool,
    ) {
        if prefer_name {
            if let Some(name) = self.type_name(ty) {
                out.push_str(&name);
                return;
            }
        }

        match &ty.shape {
            Shape::Scalar(kind) => out.push_str(kind.keyword()),
            Shape::Array { len, elem } => {
                out.push_str(&format!("[{}]", len));
                self.write_type(out, elem, level + 1, true);
            }
            Shape::Chan { dir, elem } => {
                out.push_str(dir.keyword());
                out.push(' ');
                self.write_type(out, elem, level + 1, true);
            }
            Shape::Func(sig) => {
                out.push_str("func ");
                self.write_signature(out, sig, level);
            }
            Shape::Interface { methods } => {
                out.push_str("interface");
                if methods.is_empty() {
                    out.push_str("{}");
                    return;
                }
                out.push_str(" {\n");
                let inner = indent(&self.config.indent, level + 1);
                for method in methods {
                    out.push_str(&inner);
                    out.push_str(&method.name);
                    match &method.ty.shape {
                        Shape::Func(sig) => self.write_signature(out, sig, level + 1),
                        _ => {
                            out.push(' ');
                            self.write_type(out, &method.ty, level + 1, true);
                        }
                    }
                    out.push('\n');
                }
                out.push_str(&indent(&self.config.indent, level));
                out.push('}');
            }
            Shape::Map { key, value } => {
                out.push_str("map[");
                self.write_type(out, key, level + 1, true);
                out.push(']');
                self.write_type(out, value, level + 1, true);
            }
            Shape::Pointer { elem } => {
                out.push('*');
                self.write_type(out, elem, level + 1, true);
            }
            Shape::Slice { elem } => {
                out.push_str("[]");
                self.write_type(out, elem, level + 1, true);
            }
            Shape::Struct { fields } => {
                out.push_str("struct");
                if fields.is_empty() {
                    out.push_str("{}");
                    return;
                }
                out.push_str(" {\n");
                let inner = indent(&self.config.indent, level + 1);
                for field in fields {
                    out.push_str(&inner);
                    if !field.anonymous {
                        out.push_str(&field.name);
                        out.push(' ');
                    }
                    self.write_type(out, &field.ty, level + 1, true);
                    if let Some(tag) = field.tag.as_deref().filter(|t| !t.is_empty()) {
                        out.push_str(&format!(" `{}`", tag));
                    }
                    out.push('\n');
                }
                out.push_str(&indent(&self.config.indent, level));
                out.push('}');
            }
            Shape::UnsafePointer => out.push_str("unsafe.Pointer"),
            Shape::Unknown { kind } => {
                out.push_str(&format!("type of unknown kind {}", kind));
            }
            Shape::Deferred { .. } => self.write_type(out, &ty.resolve(), level, prefer_name),
        }
    }

    /// `(P1, P2)` followed by ` R` or ` (R1, R2)` when there are results
    pub(crate) fn write_signature(&self, out: &mut String, sig: &FuncSig, level: usize) {
        out.push('(');
        for (i, param) in sig.params.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            self.write_type(out, param, level + 1, true);
        }
        out.push(')');

        if sig.results.is_empty() {
            return;
        }
        out.push(' ');
        let grouped = sig.results.len() > 1;
        if grouped {
            out.push('(');
        }
        for (i, result) in sig.results.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            self.write_type(out, result, level + 1, true);
        }
        if grouped {
            out.push(')');
        }
    }
}
