//! `Describe` for standard library types
//!
//! Mapping:
//! - `isize`/`usize` are `int`/`uint`; sized integers and floats keep their width
//! - `str`/`String` are `string`; `[T]`/`Vec<T>` are slices; `[T; N]` arrays
//! - `&T`/`&mut T`/`RefCell<T>` are transparent; references share the cycle guard
//! - `Box`/`Rc`/`Arc` are pointers; `Option<T>` is a nullable pointer to `T`,
//!   or `T` itself when `T` is already nullable
//! - `fn` pointers are callables; raw pointers are unsafe pointers
//! - `mpsc` endpoints are channels; `dyn Any`/`dyn Error` are interfaces

use std::any::Any;
use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::error::Error;
use std::rc::Rc;
use std::sync::mpsc::{Receiver, Sender, SyncSender};
use std::sync::Arc;

use describe_core_types::Sensitive;

use super::{Capture, Describe};
use crate::model::{ChanDir, Complex, Data, Kind, Method, TypeDesc};

impl Describe for bool {
    fn type_desc() -> TypeDesc {
        TypeDesc::bool()
    }

    fn capture(&self, _cx: &mut Capture) -> Data {
        Data::Bool(*self)
    }
}

macro_rules! describe_signed {
    ($($ty:ty => $kind:ident),* $(,)?) => {
        $(
            impl Describe for $ty {
                fn type_desc() -> TypeDesc {
                    TypeDesc::scalar(Kind::$kind)
                }

                fn capture(&self, _cx: &mut Capture) -> Data {
                    Data::Int(*self as i64)
                }
            }
        )*
    };
}

macro_rules! describe_unsigned {
    ($($ty:ty => $kind:ident),* $(,)?) => {
        $(
            impl Describe for $ty {
                fn type_desc() -> TypeDesc {
                    TypeDesc::scalar(Kind::$kind)
                }

                fn capture(&self, _cx: &mut Capture) -> Data {
                    Data::Uint(*self as u64)
                }
            }
        )*
    };
}

describe_signed!(isize => Int, i8 => Int8, i16 => Int16, i32 => Int32, i64 => Int64);
describe_unsigned!(usize => Uint, u8 => Uint8, u16 => Uint16, u32 => Uint32, u64 => Uint64);

impl Describe for f32 {
    fn type_desc() -> TypeDesc {
        TypeDesc::scalar(Kind::Float32)
    }

    fn capture(&self, _cx: &mut Capture) -> Data {
        Data::Float(f64::from(*self))
    }
}

impl Describe for f64 {
    fn type_desc() -> TypeDesc {
        TypeDesc::scalar(Kind::Float64)
    }

    fn capture(&self, _cx: &mut Capture) -> Data {
        Data::Float(*self)
    }
}

impl Describe for Complex<f32> {
    fn type_desc() -> TypeDesc {
        TypeDesc::scalar(Kind::Complex64)
    }

    fn capture(&self, _cx: &mut Capture) -> Data {
        Data::Complex(f64::from(self.re), f64::from(self.im))
    }
}

impl Describe for Complex<f64> {
    fn type_desc() -> TypeDesc {
        TypeDesc::scalar(Kind::Complex128)
    }

    fn capture(&self, _cx: &mut Capture) -> Data {
        Data::Complex(self.re, self.im)
    }
}

impl Describe for str {
    fn type_desc() -> TypeDesc {
        TypeDesc::string()
    }

    fn capture(&self, _cx: &mut Capture) -> Data {
        Data::Str(self.to_string())
    }
}

impl Describe for String {
    fn type_desc() -> TypeDesc {
        TypeDesc::string()
    }

    fn capture(&self, _cx: &mut Capture) -> Data {
        Data::Str(self.clone())
    }
}

impl<T: Describe> Describe for [T] {
    fn type_desc() -> TypeDesc {
        TypeDesc::slice(T::type_desc())
    }

    fn capture(&self, cx: &mut Capture) -> Data {
        Data::List(self.iter().map(|item| item.capture(cx)).collect())
    }
}

impl<T: Describe> Describe for Vec<T> {
    fn type_desc() -> TypeDesc {
        TypeDesc::slice(T::type_desc())
    }

    fn capture(&self, cx: &mut Capture) -> Data {
        self.as_slice().capture(cx)
    }
}

impl<T: Describe, const N: usize> Describe for [T; N] {
    fn type_desc() -> TypeDesc {
        TypeDesc::array(N, T::type_desc())
    }

    fn capture(&self, cx: &mut Capture) -> Data {
        self.as_slice().capture(cx)
    }
}

impl<T: Describe + ?Sized> Describe for &T {
    fn type_desc() -> TypeDesc {
        T::type_desc()
    }

    fn capture(&self, cx: &mut Capture) -> Data {
        cx.reference(&**self)
    }
}

impl<T: Describe + ?Sized> Describe for &mut T {
    fn type_desc() -> TypeDesc {
        T::type_desc()
    }

    fn capture(&self, cx: &mut Capture) -> Data {
        cx.reference(&**self)
    }
}

impl<T: Describe + ?Sized> Describe for RefCell<T> {
    fn type_desc() -> TypeDesc {
        T::type_desc()
    }

    fn capture(&self, cx: &mut Capture) -> Data {
        match self.try_borrow() {
            Ok(inner) => inner.capture(cx),
            // Mutably borrowed elsewhere: the contents cannot be read.
            Err(_) => Data::Redacted,
        }
    }
}

macro_rules! describe_pointer {
    ($($ptr:ident),*) => {
        $(
            impl<T: Describe + ?Sized> Describe for $ptr<T> {
                fn type_desc() -> TypeDesc {
                    TypeDesc::pointer(T::type_desc())
                }

                fn capture(&self, cx: &mut Capture) -> Data {
                    cx.pointer(&**self)
                }
            }
        )*
    };
}

describe_pointer!(Box, Rc, Arc);

/// Kinds whose values can already be nil
fn is_nullable(kind: Kind) -> bool {
    matches!(
        kind,
        Kind::Pointer
            | Kind::Func
            | Kind::Map
            | Kind::Slice
            | Kind::Chan
            | Kind::Interface
            | Kind::UnsafePointer
    )
}

impl<T: Describe> Describe for Option<T> {
    fn type_desc() -> TypeDesc {
        let inner = T::type_desc();
        if is_nullable(inner.kind()) {
            inner
        } else {
            TypeDesc::pointer(inner)
        }
    }

    fn capture(&self, cx: &mut Capture) -> Data {
        let Some(inner) = self else {
            return Data::Nil;
        };
        let data = inner.capture(cx);
        if is_nullable(T::type_desc().kind()) {
            data
        } else {
            Data::Pointer(Box::new(data))
        }
    }
}

impl<K: Describe, V: Describe, S> Describe for HashMap<K, V, S> {
    fn type_desc() -> TypeDesc {
        TypeDesc::map(K::type_desc(), V::type_desc())
    }

    fn capture(&self, cx: &mut Capture) -> Data {
        Data::Map(
            self.iter()
                .map(|(k, v)| (k.capture(cx), v.capture(cx)))
                .collect(),
        )
    }
}

impl<K: Describe, V: Describe> Describe for BTreeMap<K, V> {
    fn type_desc() -> TypeDesc {
        TypeDesc::map(K::type_desc(), V::type_desc())
    }

    fn capture(&self, cx: &mut Capture) -> Data {
        Data::Map(
            self.iter()
                .map(|(k, v)| (k.capture(cx), v.capture(cx)))
                .collect(),
        )
    }
}

macro_rules! describe_fn {
    ($($param:ident),*) => {
        impl<$($param: Describe,)*> Describe for fn($($param),*) {
            fn type_desc() -> TypeDesc {
                TypeDesc::func(vec![$($param::type_desc()),*], vec![])
            }

            fn capture(&self, _cx: &mut Capture) -> Data {
                Data::Func(*self as usize)
            }
        }

        impl<$($param: Describe,)* R: Describe> Describe for fn($($param),*) -> R {
            fn type_desc() -> TypeDesc {
                TypeDesc::func(vec![$($param::type_desc()),*], vec![R::type_desc()])
            }

            fn capture(&self, _cx: &mut Capture) -> Data {
                Data::Func(*self as usize)
            }
        }

        impl<$($param: Describe,)* R1: Describe, R2: Describe> Describe
            for fn($($param),*) -> (R1, R2)
        {
            fn type_desc() -> TypeDesc {
                TypeDesc::func(
                    vec![$($param::type_desc()),*],
                    vec![R1::type_desc(), R2::type_desc()],
                )
            }

            fn capture(&self, _cx: &mut Capture) -> Data {
                Data::Func(*self as usize)
            }
        }
    };
}

describe_fn!();
describe_fn!(A);
describe_fn!(A, B);
describe_fn!(A, B, C);

impl<T> Describe for *const T {
    fn type_desc() -> TypeDesc {
        TypeDesc::unsafe_pointer()
    }

    fn capture(&self, _cx: &mut Capture) -> Data {
        Data::UnsafePointer(*self as usize)
    }
}

impl<T> Describe for *mut T {
    fn type_desc() -> TypeDesc {
        TypeDesc::unsafe_pointer()
    }

    fn capture(&self, _cx: &mut Capture) -> Data {
        Data::UnsafePointer(*self as usize)
    }
}

impl<T: Describe> Describe for Sender<T> {
    fn type_desc() -> TypeDesc {
        TypeDesc::chan(ChanDir::Send, T::type_desc())
    }

    fn capture(&self, _cx: &mut Capture) -> Data {
        Data::Chan { cap: 0 }
    }
}

impl<T: Describe> Describe for SyncSender<T> {
    fn type_desc() -> TypeDesc {
        TypeDesc::chan(ChanDir::Send, T::type_desc())
    }

    fn capture(&self, _cx: &mut Capture) -> Data {
        Data::Chan { cap: 0 }
    }
}

impl<T: Describe> Describe for Receiver<T> {
    fn type_desc() -> TypeDesc {
        TypeDesc::chan(ChanDir::Recv, T::type_desc())
    }

    fn capture(&self, _cx: &mut Capture) -> Data {
        Data::Chan { cap: 0 }
    }
}

fn error_interface() -> TypeDesc {
    TypeDesc::interface(vec![Method::new(
        "to_string",
        TypeDesc::func(vec![], vec![TypeDesc::string()]),
    )])
    .named("", "error")
}

macro_rules! describe_interface {
    ($($obj:ty => $desc:expr),* $(,)?) => {
        $(
            impl Describe for $obj {
                fn type_desc() -> TypeDesc {
                    $desc
                }

                fn capture(&self, _cx: &mut Capture) -> Data {
                    Data::Interface(None)
                }
            }
        )*
    };
}

describe_interface!(
    dyn Any => TypeDesc::interface(vec![]),
    dyn Any + Send => TypeDesc::interface(vec![]),
    dyn Any + Send + Sync => TypeDesc::interface(vec![]),
    dyn Error => error_interface(),
    dyn Error + Send + Sync => error_interface(),
);

impl<T: Describe> Describe for Sensitive<T> {
    fn type_desc() -> TypeDesc {
        T::type_desc()
    }

    fn capture(&self, _cx: &mut Capture) -> Data {
        Data::Redacted
    }
}
