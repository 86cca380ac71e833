pub mod kind;
pub mod type_desc;
pub mod value;

pub use kind::{ChanDir, Kind};
pub use type_desc::{Field, FuncSig, Method, Shape, TypeDesc, TypeName, Visibility};
pub use value::{Complex, Complex128, Complex64, Data, Value};
