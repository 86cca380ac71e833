//! Macros deriving [`Describe`](crate::Describe) for user types

/// Implement [`Describe`](crate::Describe) for a struct with named fields
///
/// Every listed field must itself implement `Describe`. Fields declared
/// `pub` are public; any other visibility makes the field private to the
/// type's namespace, so its value renders as `...`. A field may carry a raw
/// tag with `#[tag = "..."]`.
///
/// ```
/// use describe_core::{describe_struct, Describer};
///
/// struct Point {
///     x: isize,
///     y: isize,
/// }
///
/// describe_struct!(Point as "Point" in "geo" {
///     pub x,
///     pub y,
/// });
///
/// let describer = Describer::default();
/// assert_eq!(
///     describer.describe(&Point { x: 1, y: 2 }),
///     "geo.Point{\n\tx: 1,\n\ty: 2,\n}"
/// );
/// ```
#[macro_export]
macro_rules! describe_struct {
    (@impl $ty:ty, $ns:expr, $name:expr, {
        $( $(#[tag = $tag:literal])? $vis:vis $field:ident ),* $(,)?
    }) => {
        impl $crate::Describe for $ty {
            fn type_desc() -> $crate::model::TypeDesc {
                let kind = $crate::model::Kind::Struct;
                $crate::capture::__private::recursive_type::<Self>($ns, $name, kind, || {
                    $crate::model::TypeDesc::structure(vec![
                        $(
                            $crate::capture::__private::struct_field(
                                stringify!($field),
                                $crate::capture::__private::field_type(|s: &$ty| &s.$field),
                                stringify!($vis) == "pub",
                                $ns,
                                None::<&'static str> $( .or(Some($tag)) )?,
                            )
                        ),*
                    ])
                    .named($ns, $name)
                })
            }

            #[allow(unused_variables)]
            fn capture(&self, cx: &mut $crate::Capture) -> $crate::model::Data {
                $crate::model::Data::Struct(vec![
                    $(
                        if stringify!($vis) == "pub" {
                            $crate::Describe::capture(&self.$field, cx)
                        } else {
                            $crate::model::Data::Redacted
                        }
                    ),*
                ])
            }
        }
    };
    ($ty:ty as $name:literal in $ns:literal { $($fields:tt)* }) => {
        $crate::describe_struct!(@impl $ty, $ns, $name, { $($fields)* });
    };
    ($ty:ty as $name:literal { $($fields:tt)* }) => {
        $crate::describe_struct!(@impl $ty, "", $name, { $($fields)* });
    };
    ($ty:ty { $($fields:tt)* }) => {
        $crate::describe_struct!(@impl $ty, "", stringify!($ty), { $($fields)* });
    };
}

/// Implement [`Describe`](crate::Describe) for a tuple newtype as a named type
///
/// The newtype takes the shape of its inner type under its own name.
///
/// ```
/// use describe_core::{describe_named, Describer};
///
/// struct Meters(f64);
/// describe_named!(Meters(f64) as "Meters" in "units");
///
/// assert_eq!(Describer::default().describe(&Meters(2.5)), "units.Meters(2.5)");
/// ```
#[macro_export]
macro_rules! describe_named {
    (@impl $ty:ident, $inner:ty, $ns:expr, $name:expr) => {
        impl $crate::Describe for $ty {
            fn type_desc() -> $crate::model::TypeDesc {
                <$inner as $crate::Describe>::type_desc().named($ns, $name)
            }

            fn capture(&self, cx: &mut $crate::Capture) -> $crate::model::Data {
                $crate::Describe::capture(&self.0, cx)
            }
        }
    };
    ($ty:ident($inner:ty) as $name:literal in $ns:literal) => {
        $crate::describe_named!(@impl $ty, $inner, $ns, $name);
    };
    ($ty:ident($inner:ty) as $name:literal) => {
        $crate::describe_named!(@impl $ty, $inner, "", $name);
    };
    ($ty:ident($inner:ty)) => {
        $crate::describe_named!(@impl $ty, $inner, "", stringify!($ty));
    };
}
