//! Canonical descriptions of types and values.
//!
//! ## Entry points
//!
//! ```
//! use describe_core::Describer;
//!
//! let describer = Describer::default();
//! assert_eq!(describer.describe(&vec![1isize, 2]), "[]int{\n\t1,\n\t2,\n}");
//! assert_eq!(describer.describe_type_of::<Vec<i8>>(), "[]int8");
//! ```
//!
//! ## Guarantees
//!
//! - **Totality**: every type and payload renders; nothing here returns an error
//!   except the opt-in strict cycle check of [`Describer::try_describe`].
//! - **Determinism**: map entries are emitted in key order, never storage order.
//! - **Stable labels**: callables are labelled `{funcN}` in first-seen order for
//!   the lifetime of the describer's registry, shared by all its clones.

pub mod format;
pub mod ordering;
pub mod types;
pub mod values;

use std::sync::Arc;

use crate::capture::{Capture, Describe};
use crate::config::{CyclePolicy, DescribeConfig};
use crate::errors::{DescribeError, Result};
use crate::model::{TypeDesc, Value};
use crate::registry::IdentityRegistry;

/// Describer context: rendering settings plus the identity registry
#[derive(Debug, Clone, Default)]
pub struct Describer {
    pub(crate) config: DescribeConfig,
    pub(crate) registry: Arc<IdentityRegistry>,
}

impl Describer {
    /// Create a describer with its own, fresh registry
    pub fn new(config: DescribeConfig) -> Self {
        Self::with_registry(config, Arc::new(IdentityRegistry::new()))
    }

    /// Create a describer that labels callables through a shared registry
    pub fn with_registry(config: DescribeConfig, registry: Arc<IdentityRegistry>) -> Self {
        Self { config, registry }
    }

    pub fn config(&self) -> &DescribeConfig {
        &self.config
    }

    pub fn registry(&self) -> &Arc<IdentityRegistry> {
        &self.registry
    }

    /// Render a type expression; the outermost type is always expanded
    pub fn describe_type(&self, ty: &TypeDesc) -> String {
        let mut out = String::new();
        self.write_type(&mut out, ty, 0, false);
        out
    }

    /// Render the type expression of `T`
    pub fn describe_type_of<T: Describe + ?Sized>(&self) -> String {
        self.describe_type(&T::type_desc())
    }

    /// Render a value built by hand or by [`Describer::capture`]
    pub fn describe_value(&self, value: &Value) -> String {
        let mut out = String::new();
        match &value.ty {
            Some(ty) => self.write_value(&mut out, ty, &value.data, 0),
            None => out.push_str("nil"),
        }
        out
    }

    /// Capture a native value into the descriptor model
    pub fn capture<T: Describe + ?Sized>(&self, value: &T) -> (Value, Capture) {
        let mut cx = Capture::new();
        let data = cx.reference(value);
        (Value::new(T::type_desc(), data), cx)
    }

    /// Capture and render a native value
    ///
    /// Pointer cycles render as `<cycle>` whatever the configured policy.
    pub fn describe<T: Describe + ?Sized>(&self, value: &T) -> String {
        let (value, _) = self.capture(value);
        self.describe_value(&value)
    }

    /// Capture and render a native value, honouring the cycle policy
    ///
    /// # Errors
    ///
    /// Returns `DescribeError::CycleDetected` when the policy is
    /// [`CyclePolicy::Error`] and the value graph leads back onto itself.
    pub fn try_describe<T: Describe + ?Sized>(&self, value: &T) -> Result<String> {
        let (value, cx) = self.capture(value);
        if self.config.cycle_policy == CyclePolicy::Error {
            if let Some(type_name) = cx.cycles().first() {
                return Err(DescribeError::CycleDetected {
                    type_name: type_name.to_string(),
                });
            }
        }
        Ok(self.describe_value(&value))
    }
}

/// Render a type expression with default settings
pub fn describe_type(ty: &TypeDesc) -> String {
    Describer::default().describe_type(ty)
}
