//! Describe Diff - context diffs for mismatched descriptions
//!
//! [`ContextDiff`] implements [`describe_core::DiffRenderer`] and is the
//! renderer normally plugged into a [`describe_core::Comparator`]:
//!
//! ```
//! use describe_core::{Comparator, Describer};
//! use describe_diff::ContextDiff;
//!
//! let comparator = Comparator::new(Describer::default())
//!     .with_diff_sink(ContextDiff::default(), std::io::sink());
//! assert!(!comparator.compare("x", "y"));
//! ```

pub mod config;
pub mod context;
pub mod matcher;

pub use config::{parse_diff_config_file, parse_diff_config_str, DiffConfig};
pub use context::{split_lines, ContextDiff};
pub use matcher::{Match, OpCode, OpTag, SequenceMatcher};

#[doc(hidden)]
pub use describe_core as __describe_core;

/// Assert that two values describe identically
///
/// On failure the panic message carries a context diff of the two
/// descriptions, headed `Got` / `Want`.
///
/// ```
/// use describe_diff::assert_described_eq;
///
/// assert_described_eq!(vec![1isize, 2], vec![1isize, 2]);
/// ```
///
/// ```should_panic
/// use describe_diff::assert_described_eq;
///
/// assert_described_eq!(1u8, 2u8);
/// ```
#[macro_export]
macro_rules! assert_described_eq {
    ($got:expr, $want:expr $(,)?) => {{
        let comparison = $crate::__describe_core::Comparator::default().check(&$got, &$want);
        if !comparison.equal {
            panic!(
                "described values differ\n{}",
                $crate::ContextDiff::default().render_to_string(&comparison.got, &comparison.want)
            );
        }
    }};
}
