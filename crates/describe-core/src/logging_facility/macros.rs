//! Operation logging macros
//!
//! Each macro emits the canonical `component`, `op` and `event` fields; extra
//! `tracing` fields may follow.

/// Log the start of an operation
///
/// ```
/// # use describe_core::log_op_start;
/// log_op_start!("compare");
/// log_op_start!("load_config", path = "describe.toml");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = describe_core_types::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = describe_core_types::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// ```
/// # use describe_core::log_op_end;
/// log_op_end!("compare", duration_ms = 3, equal = true);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = describe_core_types::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = describe_core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log an operation that ended in a [`DescribeError`](crate::DescribeError)
///
/// ```
/// # use describe_core::{log_op_error, errors::invalid_config};
/// let err = invalid_config("indent must not be empty");
/// log_op_error!("load_config", err, duration_ms = 1);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        let err: &$crate::errors::DescribeError = &$err;
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = describe_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?err.kind(),
            err.code = err.code(),
            error = %err,
        );
    }};
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        let err: &$crate::errors::DescribeError = &$err;
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = describe_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?err.kind(),
            err.code = err.code(),
            error = %err,
            $($field)*
        );
    }};
}
