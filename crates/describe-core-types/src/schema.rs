//! Canonical schema constants for structured logging
//!
//! These constants keep the field keys and event names emitted by the
//! describer, comparator and diff renderer consistent.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Comparison outcome
pub const FIELD_EQUAL: &str = "equal";
pub const FIELD_GOT_LEN: &str = "got_len";
pub const FIELD_WANT_LEN: &str = "want_len";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";

// Canonical operation names
pub const OP_COMPARE: &str = "compare";
pub const OP_RENDER_DIFF: &str = "render_diff";
pub const OP_LOAD_CONFIG: &str = "load_config";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants_accessibility() {
        assert!(!FIELD_COMPONENT.is_empty());
        assert!(!FIELD_OP.is_empty());
        assert!(!FIELD_EQUAL.is_empty());
        assert!(!EVENT_START.is_empty());
        assert!(!EVENT_END.is_empty());
        assert!(!EVENT_END_ERROR.is_empty());
    }

    #[test]
    fn test_event_names_are_distinct() {
        assert_ne!(EVENT_START, EVENT_END);
        assert_ne!(EVENT_START, EVENT_END_ERROR);
        assert_ne!(EVENT_END, EVENT_END_ERROR);
    }

    #[test]
    fn test_op_names_are_distinct() {
        assert_ne!(OP_COMPARE, OP_RENDER_DIFF);
        assert_ne!(OP_COMPARE, OP_LOAD_CONFIG);
    }
}
