use std::sync::Arc;

use super::type_desc::TypeDesc;

/// Dynamic payload of a value
///
/// Composite payloads hold their members' data in order; member types come
/// from the enclosing [`TypeDesc`] (element type, key/value types, field
/// types), so a payload is always interpreted against a descriptor.
#[derive(Debug, Clone, PartialEq)]
pub enum Data {
    /// Absent value: nil pointer, nil func, nil slice or map
    Nil,
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    Complex(f64, f64),
    Str(String),
    /// Array or slice elements
    List(Vec<Data>),
    /// Map entries in storage order
    Map(Vec<(Data, Data)>),
    /// Pointee of a non-nil pointer
    Pointer(Box<Data>),
    /// Callable, identified by an opaque address-derived key
    Func(usize),
    /// Interface holding an optional dynamic value; the describer never unwraps it
    Interface(Option<Box<Value>>),
    /// Field data in declaration order
    Struct(Vec<Data>),
    Chan {
        cap: usize,
    },
    UnsafePointer(usize),
    /// Back-reference to a pointee already on the capture path
    Cycle,
    /// Content withheld from rendering
    Redacted,
}

impl Data {
    /// Short name of the payload variant, used in diagnostics
    pub fn variant_name(&self) -> &'static str {
        match self {
            Data::Nil => "nil",
            Data::Bool(_) => "bool",
            Data::Int(_) => "int",
            Data::Uint(_) => "uint",
            Data::Float(_) => "float",
            Data::Complex(_, _) => "complex",
            Data::Str(_) => "string",
            Data::List(_) => "list",
            Data::Map(_) => "map",
            Data::Pointer(_) => "pointer",
            Data::Func(_) => "func",
            Data::Interface(_) => "interface",
            Data::Struct(_) => "struct",
            Data::Chan { .. } => "chan",
            Data::UnsafePointer(_) => "unsafe_pointer",
            Data::Cycle => "cycle",
            Data::Redacted => "redacted",
        }
    }
}

/// A value paired with its type; a missing type is the nil value
#[derive(Debug, Clone, PartialEq)]
pub struct Value {
    pub ty: Option<Arc<TypeDesc>>,
    pub data: Data,
}

impl Value {
    pub fn new(ty: TypeDesc, data: Data) -> Self {
        Self {
            ty: Some(Arc::new(ty)),
            data,
        }
    }

    pub fn from_shared(ty: Arc<TypeDesc>, data: Data) -> Self {
        Self { ty: Some(ty), data }
    }

    pub fn nil() -> Self {
        Self {
            ty: None,
            data: Data::Nil,
        }
    }

    pub fn is_nil(&self) -> bool {
        self.ty.is_none()
    }
}

/// Complex number with real and imaginary parts
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Complex<T> {
    pub re: T,
    pub im: T,
}

impl<T> Complex<T> {
    pub fn new(re: T, im: T) -> Self {
        Self { re, im }
    }
}

/// Complex number with `f32` parts
pub type Complex64 = Complex<f32>;

/// Complex number with `f64` parts
pub type Complex128 = Complex<f64>;
