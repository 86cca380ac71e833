//! Type descriptors
//!
//! A [`TypeDesc`] is a closed, tagged description of a type: an optional
//! declared name plus a [`Shape`]. Nested descriptors are shared through
//! `Arc` so element types can be reused across containers.

use std::sync::Arc;

use super::kind::{ChanDir, Kind};

/// Declared name of a type, qualified by its namespace
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeName {
    pub namespace: String,
    pub name: String,
}

impl TypeName {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
        }
    }
}

/// Visibility of a struct field
///
/// Private fields carry the namespace that owns them; their values are never
/// rendered.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Visibility {
    Public,
    Private { scope: String },
}

impl Visibility {
    pub fn private(scope: impl Into<String>) -> Self {
        Visibility::Private {
            scope: scope.into(),
        }
    }

    pub fn is_public(&self) -> bool {
        matches!(self, Visibility::Public)
    }
}

/// A struct field
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: String,
    pub ty: Arc<TypeDesc>,
    pub tag: Option<String>,
    pub visibility: Visibility,
    pub anonymous: bool,
}

impl Field {
    /// Create a public, named, untagged field
    pub fn new(name: impl Into<String>, ty: TypeDesc) -> Self {
        Self {
            name: name.into(),
            ty: Arc::new(ty),
            tag: None,
            visibility: Visibility::Public,
            anonymous: false,
        }
    }

    /// Create an anonymous (embedded) field; the type's declared name is its name
    pub fn embedded(ty: TypeDesc) -> Self {
        let name = ty
            .name
            .as_ref()
            .map(|n| n.name.clone())
            .unwrap_or_default();
        Self {
            name,
            ty: Arc::new(ty),
            tag: None,
            visibility: Visibility::Public,
            anonymous: true,
        }
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }
}

/// An interface method
#[derive(Debug, Clone, PartialEq)]
pub struct Method {
    pub name: String,
    pub ty: Arc<TypeDesc>,
}

impl Method {
    pub fn new(name: impl Into<String>, ty: TypeDesc) -> Self {
        Self {
            name: name.into(),
            ty: Arc::new(ty),
        }
    }
}

/// Parameter and result types of a callable
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FuncSig {
    pub params: Vec<Arc<TypeDesc>>,
    pub results: Vec<Arc<TypeDesc>>,
}

impl FuncSig {
    pub fn new(params: Vec<TypeDesc>, results: Vec<TypeDesc>) -> Self {
        Self {
            params: params.into_iter().map(Arc::new).collect(),
            results: results.into_iter().map(Arc::new).collect(),
        }
    }
}

/// Structure of a type, one variant per kind family
#[derive(Debug, Clone)]
pub enum Shape {
    /// Any scalar kind (bool, integers, floats, complex, string)
    Scalar(Kind),
    Array {
        len: usize,
        elem: Arc<TypeDesc>,
    },
    Slice {
        elem: Arc<TypeDesc>,
    },
    Map {
        key: Arc<TypeDesc>,
        value: Arc<TypeDesc>,
    },
    Pointer {
        elem: Arc<TypeDesc>,
    },
    Func(FuncSig),
    Interface {
        methods: Vec<Method>,
    },
    Struct {
        fields: Vec<Field>,
    },
    Chan {
        dir: ChanDir,
        elem: Arc<TypeDesc>,
    },
    UnsafePointer,
    /// A kind this model does not know; rendered as a diagnostic
    Unknown {
        kind: String,
    },
    /// Reference to a type still under construction, built on demand
    ///
    /// Breaks the descriptor recursion of self-referential types. The kind
    /// is recorded up front so asking for it never builds the type.
    Deferred {
        kind: Kind,
        build: fn() -> TypeDesc,
    },
}

impl PartialEq for Shape {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Shape::Scalar(a), Shape::Scalar(b)) => a == b,
            (Shape::Array { len: la, elem: ea }, Shape::Array { len: lb, elem: eb }) => {
                la == lb && ea == eb
            }
            (Shape::Slice { elem: a }, Shape::Slice { elem: b }) => a == b,
            (Shape::Map { key: ka, value: va }, Shape::Map { key: kb, value: vb }) => {
                ka == kb && va == vb
            }
            (Shape::Pointer { elem: a }, Shape::Pointer { elem: b }) => a == b,
            (Shape::Func(a), Shape::Func(b)) => a == b,
            (Shape::Interface { methods: a }, Shape::Interface { methods: b }) => a == b,
            (Shape::Struct { fields: a }, Shape::Struct { fields: b }) => a == b,
            (Shape::Chan { dir: da, elem: ea }, Shape::Chan { dir: db, elem: eb }) => {
                da == db && ea == eb
            }
            (Shape::UnsafePointer, Shape::UnsafePointer) => true,
            (Shape::Unknown { kind: a }, Shape::Unknown { kind: b }) => a == b,
            // Deferred shapes carry no structure of their own; the enclosing
            // names tell them apart.
            (Shape::Deferred { kind: a, .. }, Shape::Deferred { kind: b, .. }) => a == b,
            _ => false,
        }
    }
}

impl Shape {
    pub fn kind(&self) -> Kind {
        match self {
            Shape::Scalar(kind) => *kind,
            Shape::Array { .. } => Kind::Array,
            Shape::Slice { .. } => Kind::Slice,
            Shape::Map { .. } => Kind::Map,
            Shape::Pointer { .. } => Kind::Pointer,
            Shape::Func(_) => Kind::Func,
            Shape::Interface { .. } => Kind::Interface,
            Shape::Struct { .. } => Kind::Struct,
            Shape::Chan { .. } => Kind::Chan,
            Shape::UnsafePointer => Kind::UnsafePointer,
            Shape::Unknown { .. } => Kind::Invalid,
            Shape::Deferred { kind, .. } => *kind,
        }
    }
}

/// Descriptor of a type: optional declared name plus its shape
#[derive(Debug, Clone, PartialEq)]
pub struct TypeDesc {
    pub name: Option<TypeName>,
    pub shape: Shape,
}

impl TypeDesc {
    pub fn new(shape: Shape) -> Self {
        Self { name: None, shape }
    }

    /// Attach a declared name; an empty name leaves the type unnamed
    pub fn named(mut self, namespace: impl Into<String>, name: impl Into<String>) -> Self {
        let name = name.into();
        self.name = if name.is_empty() {
            None
        } else {
            Some(TypeName::new(namespace, name))
        };
        self
    }

    pub fn kind(&self) -> Kind {
        self.shape.kind()
    }

    pub fn scalar(kind: Kind) -> Self {
        if kind.is_scalar() {
            Self::new(Shape::Scalar(kind))
        } else {
            Self::unknown(kind.keyword())
        }
    }

    pub fn bool() -> Self {
        Self::scalar(Kind::Bool)
    }

    pub fn int() -> Self {
        Self::scalar(Kind::Int)
    }

    pub fn string() -> Self {
        Self::scalar(Kind::String)
    }

    pub fn array(len: usize, elem: TypeDesc) -> Self {
        Self::new(Shape::Array {
            len,
            elem: Arc::new(elem),
        })
    }

    pub fn slice(elem: TypeDesc) -> Self {
        Self::new(Shape::Slice {
            elem: Arc::new(elem),
        })
    }

    pub fn map(key: TypeDesc, value: TypeDesc) -> Self {
        Self::new(Shape::Map {
            key: Arc::new(key),
            value: Arc::new(value),
        })
    }

    pub fn pointer(elem: TypeDesc) -> Self {
        Self::new(Shape::Pointer {
            elem: Arc::new(elem),
        })
    }

    pub fn func(params: Vec<TypeDesc>, results: Vec<TypeDesc>) -> Self {
        Self::new(Shape::Func(FuncSig::new(params, results)))
    }

    pub fn interface(methods: Vec<Method>) -> Self {
        Self::new(Shape::Interface { methods })
    }

    pub fn structure(fields: Vec<Field>) -> Self {
        Self::new(Shape::Struct { fields })
    }

    pub fn chan(dir: ChanDir, elem: TypeDesc) -> Self {
        Self::new(Shape::Chan {
            dir,
            elem: Arc::new(elem),
        })
    }

    pub fn unsafe_pointer() -> Self {
        Self::new(Shape::UnsafePointer)
    }

    pub fn unknown(kind: impl Into<String>) -> Self {
        Self::new(Shape::Unknown { kind: kind.into() })
    }

    /// A type of `kind` whose descriptor is built by `build` when needed
    pub fn deferred(kind: Kind, build: fn() -> TypeDesc) -> Self {
        Self::new(Shape::Deferred { kind, build })
    }

    /// The descriptor itself, or the resolved one if it is deferred
    pub fn resolve(&self) -> std::borrow::Cow<'_, TypeDesc> {
        match &self.shape {
            Shape::Deferred { build, .. } => {
                let mut resolved = build();
                if resolved.name.is_none() {
                    resolved.name = self.name.clone();
                }
                std::borrow::Cow::Owned(resolved)
            }
            _ => std::borrow::Cow::Borrowed(self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_name_leaves_type_unnamed() {
        let ty = TypeDesc::int().named("pkg", "");
        assert!(ty.name.is_none());
    }

    #[test]
    fn test_scalar_rejects_composite_kind() {
        let ty = TypeDesc::scalar(Kind::Map);
        assert_eq!(ty.kind(), Kind::Invalid);
    }

    #[test]
    fn test_embedded_field_takes_type_name() {
        let obj = TypeDesc::structure(vec![Field::new("Field", TypeDesc::int())]).named("", "Obj");
        let field = Field::embedded(obj);
        assert!(field.anonymous);
        assert_eq!(field.name, "Obj");
    }

    #[test]
    fn test_deferred_resolves_on_demand() {
        fn node() -> TypeDesc {
            TypeDesc::structure(vec![Field::new("Val", TypeDesc::int())]).named("", "Node")
        }
        let ty = TypeDesc::deferred(Kind::Struct, node).named("", "Node");
        assert_eq!(ty.kind(), Kind::Struct);
        assert_eq!(*ty.resolve(), node());
    }

    #[test]
    fn test_deferred_kind_does_not_build() {
        fn unbuildable() -> TypeDesc {
            panic!("descriptor built while only the kind was asked for")
        }
        let ty = TypeDesc::deferred(Kind::Struct, unbuildable).named("", "Link");
        assert_eq!(ty.kind(), Kind::Struct);
        assert_eq!(ty, TypeDesc::deferred(Kind::Struct, unbuildable).named("", "Link"));
    }
}
