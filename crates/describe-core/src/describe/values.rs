//! Value describer
//!
//! Renders a (type, data) pair as a literal-like expression. Composite
//! members are rendered against the member types recorded in the enclosing
//! descriptor. Every combination renders: payloads that do not fit their
//! shape become a `<bad KIND value>` diagnostic.

use describe_core_types::sensitive::REDACTED;

use crate::describe::format::{format_complex, format_f32, format_f64, indent};
use crate::describe::ordering::sorted_entries;
use crate::describe::Describer;
use crate::model::{Data, Field, Kind, Shape, TypeDesc, Visibility};

/// Rendering of a back-reference produced by cycle-aware capture
pub const CYCLE_MARKER: &str = "<cycle>";

impl Describer {
    pub(crate) fn write_value(&self, out: &mut String, ty: &TypeDesc, data: &Data, level: usize) {
        match data {
            Data::Redacted => {
                out.push_str(REDACTED);
                return;
            }
            Data::Cycle => {
                out.push_str(CYCLE_MARKER);
                return;
            }
            _ => {}
        }

        match &ty.shape {
            Shape::Scalar(kind) => self.write_scalar(out, ty, *kind, data),
            Shape::Array { elem, .. } | Shape::Slice { elem } => match data {
                Data::List(items) => self.write_list(out, ty, elem, items, level),
                Data::Nil => self.write_list(out, ty, elem, &[], level),
                _ => write_bad_value(out, ty.kind()),
            },
            Shape::Chan { .. } => {
                let cap = match data {
                    Data::Chan { cap } => *cap,
                    Data::Nil => 0,
                    _ => return write_bad_value(out, ty.kind()),
                };
                out.push_str("make(");
                self.write_type(out, ty, level, true);
                if cap > 0 {
                    out.push_str(&format!(", {})", cap));
                } else {
                    out.push(')');
                }
            }
            Shape::Func(sig) => match data {
                Data::Func(identity) => {
                    out.push_str("func ");
                    self.write_signature(out, sig, level);
                    let label = self.registry.get_or_create(*identity);
                    out.push_str(&format!(" {{func{}}}", label));
                }
                Data::Nil => out.push_str("nil"),
                _ => write_bad_value(out, ty.kind()),
            },
            Shape::Interface { .. } => {
                // Only the static type is described; a held dynamic value is not unwrapped.
                self.write_type(out, ty, level, true);
                out.push_str("{}");
            }
            Shape::Map { key, value } => match data {
                Data::Map(entries) => self.write_map(out, ty, key, value, entries, level),
                Data::Nil => self.write_map(out, ty, key, value, &[], level),
                _ => write_bad_value(out, ty.kind()),
            },
            Shape::Pointer { elem } => match data {
                Data::Pointer(target) => {
                    out.push('&');
                    self.write_value(out, elem, target, level + 1);
                }
                Data::Nil => out.push_str("nil"),
                _ => write_bad_value(out, ty.kind()),
            },
            Shape::Struct { fields } => match data {
                Data::Struct(items) if items.len() == fields.len() => {
                    self.write_struct(out, ty, fields, items, level)
                }
                _ => write_bad_value(out, ty.kind()),
            },
            Shape::UnsafePointer => match data {
                Data::UnsafePointer(addr) => out.push_str(&format!("unsafe_pointer({:x})", addr)),
                Data::Nil => out.push_str("unsafe_pointer(0)"),
                _ => write_bad_value(out, ty.kind()),
            },
            Shape::Unknown { kind } => {
                out.push_str(&format!("type of unknown kind {}", kind));
            }
            Shape::Deferred { .. } => self.write_value(out, &ty.resolve(), data, level),
        }
    }

    fn write_scalar(&self, out: &mut String, ty: &TypeDesc, kind: Kind, data: &Data) {
        let Some(literal) = scalar_literal(kind, data) else {
            return write_bad_value(out, kind);
        };

        let name = self.type_name(ty);
        match (kind, name) {
            (Kind::Bool | Kind::Int | Kind::String, None) => out.push_str(&literal),
            (_, Some(name)) => out.push_str(&format!("{}({})", name, literal)),
            (_, None) => out.push_str(&format!("{}({})", kind.keyword(), literal)),
        }
    }

    fn write_list(
        &self,
        out: &mut String,
        ty: &TypeDesc,
        elem: &TypeDesc,
        items: &[Data],
        level: usize,
    ) {
        self.write_type(out, ty, level, true);
        if items.is_empty() {
            out.push_str("{}");
            return;
        }

        out.push_str("{\n");
        let inner = indent(&self.config.indent, level + 1);
        for item in items {
            out.push_str(&inner);
            self.write_value(out, elem, item, level + 1);
            out.push_str(",\n");
        }
        out.push_str(&indent(&self.config.indent, level));
        out.push('}');
    }

    fn write_map(
        &self,
        out: &mut String,
        ty: &TypeDesc,
        key_ty: &TypeDesc,
        value_ty: &TypeDesc,
        entries: &[(Data, Data)],
        level: usize,
    ) {
        self.write_type(out, ty, level, true);
        if entries.is_empty() {
            out.push_str("{}");
            return;
        }

        out.push_str("{\n");
        let inner = indent(&self.config.indent, level + 1);
        let sorted = sorted_entries(key_ty.kind(), entries, |key| {
            let mut text = String::new();
            self.write_value(&mut text, key_ty, key, level + 1);
            text
        });
        for (key, value) in sorted {
            out.push_str(&inner);
            self.write_value(out, key_ty, key, level + 1);
            out.push_str(": ");
            self.write_value(out, value_ty, value, level + 1);
            out.push_str(",\n");
        }
        out.push_str(&indent(&self.config.indent, level));
        out.push('}');
    }

    fn write_struct(
        &self,
        out: &mut String,
        ty: &TypeDesc,
        fields: &[Field],
        items: &[Data],
        level: usize,
    ) {
        self.write_type(out, ty, level, true);
        out.push_str("{\n");

        let inner = indent(&self.config.indent, level + 1);
        for (field, item) in fields.iter().zip(items) {
            out.push_str(&inner);
            if !field.anonymous {
                match &field.visibility {
                    Visibility::Private { scope }
                        if !scope.is_empty() && *scope != self.config.namespace =>
                    {
                        out.push_str(&format!("{}.{}: ", scope, field.name));
                    }
                    _ => out.push_str(&format!("{}: ", field.name)),
                }
            }
            if field.visibility.is_public() {
                self.write_value(out, &field.ty, item, level + 1);
            } else {
                out.push_str(REDACTED);
            }
            out.push_str(",\n");
        }

        out.push_str(&indent(&self.config.indent, level));
        out.push('}');
    }
}

/// Bare literal for a scalar payload, or None when the payload does not fit
fn scalar_literal(kind: Kind, data: &Data) -> Option<String> {
    let literal = match (kind, data) {
        (Kind::Bool, Data::Bool(b)) => b.to_string(),
        (k, Data::Int(i)) if k.is_signed() => i.to_string(),
        (k, Data::Uint(u)) if k.is_unsigned() => u.to_string(),
        (Kind::Float32, Data::Float(f)) => format_f32(*f as f32),
        (Kind::Float64, Data::Float(f)) => format_f64(*f),
        (Kind::Complex64, Data::Complex(re, im)) => format_complex(
            format_f32(*re as f32),
            format_f32(*im as f32),
            *im == 0.0,
        ),
        (Kind::Complex128, Data::Complex(re, im)) => {
            format_complex(format_f64(*re), format_f64(*im), *im == 0.0)
        }
        (Kind::String, Data::Str(s)) => format!("\"{}\"", s),
        _ => return None,
    };
    Some(literal)
}

fn write_bad_value(out: &mut String, kind: Kind) {
    out.push_str(&format!("<bad {} value>", kind.keyword()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Value, Visibility};

    fn render(ty: TypeDesc, data: Data) -> String {
        Describer::default().describe_value(&Value::new(ty, data))
    }

    #[test]
    fn test_named_bool_int_string_wrap() {
        assert_eq!(render(TypeDesc::int().named("", "Foo"), Data::Int(1)), "Foo(1)");
        assert_eq!(render(TypeDesc::int(), Data::Int(1)), "1");
        assert_eq!(render(TypeDesc::bool(), Data::Bool(false)), "false");
    }

    #[test]
    fn test_sized_numbers_always_wrap() {
        assert_eq!(render(TypeDesc::scalar(Kind::Uint16), Data::Uint(1)), "uint16(1)");
        assert_eq!(
            render(TypeDesc::scalar(Kind::Float64).named("units", "Meters"), Data::Float(2.5)),
            "units.Meters(2.5)"
        );
        assert_eq!(
            render(TypeDesc::scalar(Kind::Complex128), Data::Complex(1.2, 1.3)),
            "complex128(1.2+1.3i)"
        );
        assert_eq!(
            render(TypeDesc::scalar(Kind::Complex64), Data::Complex(1.2f32 as f64, 0.0)),
            "complex64(1.2)"
        );
    }

    #[test]
    fn test_mismatched_payload_is_diagnostic() {
        assert_eq!(render(TypeDesc::scalar(Kind::Int8), Data::Str("x".into())), "<bad int8 value>");
        assert_eq!(
            render(
                TypeDesc::structure(vec![Field::new("A", TypeDesc::int())]),
                Data::Struct(vec![])
            ),
            "<bad struct value>"
        );
    }

    #[test]
    fn test_pointer_contents_indent_from_next_level() {
        let obj = TypeDesc::structure(vec![Field::new("Field", TypeDesc::int())]).named("", "Obj");
        assert_eq!(
            render(
                TypeDesc::pointer(obj),
                Data::Pointer(Box::new(Data::Struct(vec![Data::Int(3)])))
            ),
            "&Obj{\n\t\tField: 3,\n\t}"
        );
        assert_eq!(render(TypeDesc::pointer(TypeDesc::int()), Data::Nil), "nil");
    }

    #[test]
    fn test_private_field_in_foreign_scope_is_qualified() {
        let ty = TypeDesc::structure(vec![
            Field::new("secret", TypeDesc::int()).with_visibility(Visibility::private("vault"))
        ]);
        assert_eq!(
            render(ty, Data::Struct(vec![Data::Int(42)])),
            "struct {\n\tsecret int\n}{\n\tvault.secret: ...,\n}"
        );
    }

    #[test]
    fn test_empty_struct_still_opens_block() {
        assert_eq!(
            render(TypeDesc::structure(vec![]), Data::Struct(vec![])),
            "struct{}{\n}"
        );
    }

    #[test]
    fn test_chan_and_unsafe_pointer() {
        let chan = TypeDesc::chan(crate::model::ChanDir::Both, TypeDesc::int());
        assert_eq!(render(chan.clone(), Data::Chan { cap: 5 }), "make(chan int, 5)");
        assert_eq!(render(chan, Data::Chan { cap: 0 }), "make(chan int)");
        assert_eq!(
            render(TypeDesc::unsafe_pointer(), Data::UnsafePointer(0xff)),
            "unsafe_pointer(ff)"
        );
    }

    #[test]
    fn test_interface_payload_is_not_unwrapped() {
        let held = Value::new(TypeDesc::int(), Data::Int(9));
        assert_eq!(
            render(TypeDesc::interface(vec![]), Data::Interface(Some(Box::new(held)))),
            "interface{}{}"
        );
    }

    #[test]
    fn test_redacted_and_cycle_markers() {
        assert_eq!(render(TypeDesc::string(), Data::Redacted), "...");
        assert_eq!(
            render(TypeDesc::pointer(TypeDesc::int()), Data::Pointer(Box::new(Data::Cycle))),
            "&<cycle>"
        );
    }

    #[test]
    fn test_nil_value() {
        assert_eq!(Describer::default().describe_value(&Value::nil()), "nil");
    }
}
