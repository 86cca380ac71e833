//! Capturing native values into the descriptor model
//!
//! [`Describe`] is implemented for the standard scalar, container, pointer
//! and callable types; user structs and named newtypes get it through the
//! [`describe_struct!`](crate::describe_struct) and
//! [`describe_named!`](crate::describe_named) macros.

mod impls;
pub mod macros;

use std::collections::HashSet;

use crate::model::{Data, TypeDesc};

/// A type that can describe itself
pub trait Describe {
    /// Descriptor of the type itself, independent of any instance
    fn type_desc() -> TypeDesc;

    /// Payload of this instance
    fn capture(&self, cx: &mut Capture) -> Data;
}

/// State carried through one capture walk
///
/// Tracks the pointees and referents on the active path so a graph that
/// leads back onto itself yields a [`Data::Cycle`] marker instead of
/// recursing forever.
#[derive(Debug, Default)]
pub struct Capture {
    active: HashSet<(usize, &'static str)>,
    cycles: Vec<&'static str>,
}

impl Capture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture the pointee of a pointer-like value
    pub fn pointer<T: Describe + ?Sized>(&mut self, target: &T) -> Data {
        Data::Pointer(Box::new(self.reference(target)))
    }

    /// Capture the target of a transparent reference
    ///
    /// Yields [`Data::Cycle`] when `target` is already on the active path.
    pub fn reference<T: Describe + ?Sized>(&mut self, target: &T) -> Data {
        let key = (
            target as *const T as *const () as usize,
            std::any::type_name::<T>(),
        );
        if !self.active.insert(key) {
            tracing::debug!(type_name = key.1, "pointer cycle replaced by marker");
            self.cycles.push(key.1);
            return Data::Cycle;
        }

        let inner = target.capture(self);
        self.active.remove(&key);
        inner
    }

    /// Type names of the pointees where a cycle was cut, in encounter order
    pub fn cycles(&self) -> &[&'static str] {
        &self.cycles
    }

    pub fn has_cycles(&self) -> bool {
        !self.cycles.is_empty()
    }
}

#[doc(hidden)]
pub mod __private {
    use std::cell::RefCell;
    use std::collections::HashSet;

    use super::Describe;
    use crate::model::{Field, Kind, TypeDesc, Visibility};

    thread_local! {
        static BUILDING: RefCell<HashSet<&'static str>> = RefCell::new(HashSet::new());
    }

    struct Building(&'static str);

    impl Drop for Building {
        fn drop(&mut self) {
            BUILDING.with(|set| set.borrow_mut().remove(self.0));
        }
    }

    /// Descriptor of a struct field, inferred from an accessor closure
    pub fn field_type<S, T>(_accessor: impl for<'a> Fn(&'a S) -> &'a T) -> TypeDesc
    where
        T: Describe + ?Sized,
    {
        T::type_desc()
    }

    pub fn struct_field(
        name: &str,
        ty: TypeDesc,
        public: bool,
        scope: &str,
        tag: Option<&str>,
    ) -> Field {
        let visibility = if public {
            Visibility::Public
        } else {
            Visibility::private(scope)
        };
        let field = Field::new(name, ty).with_visibility(visibility);
        match tag {
            Some(tag) => field.with_tag(tag),
            None => field,
        }
    }

    /// Build the descriptor of `T`, or a deferred reference to it when `T`
    /// is already being built further up the stack
    pub fn recursive_type<T>(
        namespace: &str,
        name: &str,
        kind: Kind,
        expand: impl FnOnce() -> TypeDesc,
    ) -> TypeDesc
    where
        T: Describe + ?Sized,
    {
        let key = std::any::type_name::<T>();
        if !BUILDING.with(|set| set.borrow_mut().insert(key)) {
            return TypeDesc::deferred(kind, T::type_desc).named(namespace, name);
        }
        let _building = Building(key);
        expand()
    }
}
