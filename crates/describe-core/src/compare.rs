//! Comparator
//!
//! Two values are equal exactly when their canonical descriptions are equal.
//! On a mismatch the comparator hands both descriptions to an injected
//! [`DiffRenderer`] together with an output sink.

use std::fmt;
use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};
use std::time::Instant;

use describe_core_types::schema::{OP_COMPARE, OP_RENDER_DIFF};

use crate::capture::Describe;
use crate::describe::Describer;
use crate::model::Value;
use crate::{log_op_end, log_op_start};

/// Renders the difference between two descriptions onto a sink
///
/// Implemented for any matching closure:
///
/// ```
/// use describe_core::{Comparator, Describer};
///
/// let comparator = Comparator::new(Describer::default()).with_diff_sink(
///     |out: &mut dyn std::io::Write, got: &str, want: &str| writeln!(out, "{} != {}", got, want),
///     std::io::sink(),
/// );
/// assert!(!comparator.compare(&1isize, &2isize));
/// ```
pub trait DiffRenderer: Send + Sync {
    /// # Errors
    ///
    /// Returns any error raised while writing to `out`.
    fn render(&self, out: &mut dyn Write, got: &str, want: &str) -> io::Result<()>;
}

impl<F> DiffRenderer for F
where
    F: Fn(&mut dyn Write, &str, &str) -> io::Result<()> + Send + Sync,
{
    fn render(&self, out: &mut dyn Write, got: &str, want: &str) -> io::Result<()> {
        self(out, got, want)
    }
}

struct DiffHook {
    renderer: Box<dyn DiffRenderer>,
    sink: Mutex<Box<dyn Write + Send>>,
}

/// Outcome of one comparison, with both descriptions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    pub equal: bool,
    pub got: String,
    pub want: String,
}

/// Compares values through their descriptions
pub struct Comparator {
    describer: Describer,
    diff: Option<DiffHook>,
}

impl fmt::Debug for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Comparator")
            .field("describer", &self.describer)
            .field("diff", &self.diff.is_some())
            .finish()
    }
}

impl Default for Comparator {
    fn default() -> Self {
        Self::new(Describer::default())
    }
}

impl Comparator {
    /// A comparator that reports nothing on mismatch
    pub fn new(describer: Describer) -> Self {
        Self {
            describer,
            diff: None,
        }
    }

    /// Render mismatches with `renderer` onto stderr
    pub fn with_diff(self, renderer: impl DiffRenderer + 'static) -> Self {
        self.with_diff_sink(renderer, io::stderr())
    }

    /// Render mismatches with `renderer` onto `sink`
    pub fn with_diff_sink(
        mut self,
        renderer: impl DiffRenderer + 'static,
        sink: impl Write + Send + 'static,
    ) -> Self {
        self.diff = Some(DiffHook {
            renderer: Box::new(renderer),
            sink: Mutex::new(Box::new(sink)),
        });
        self
    }

    pub fn describer(&self) -> &Describer {
        &self.describer
    }

    /// True when both values describe identically
    pub fn compare<A, B>(&self, got: &A, want: &B) -> bool
    where
        A: Describe + ?Sized,
        B: Describe + ?Sized,
    {
        self.check(got, want).equal
    }

    /// Compare two native values and keep both descriptions
    pub fn check<A, B>(&self, got: &A, want: &B) -> Comparison
    where
        A: Describe + ?Sized,
        B: Describe + ?Sized,
    {
        let start = Instant::now();
        log_op_start!(OP_COMPARE);
        let got = self.describer.describe(got);
        let want = self.describer.describe(want);
        self.finish(start, got, want)
    }

    pub fn compare_values(&self, got: &Value, want: &Value) -> bool {
        self.check_values(got, want).equal
    }

    /// Compare two captured or hand-built values
    pub fn check_values(&self, got: &Value, want: &Value) -> Comparison {
        let start = Instant::now();
        log_op_start!(OP_COMPARE);
        let got = self.describer.describe_value(got);
        let want = self.describer.describe_value(want);
        self.finish(start, got, want)
    }

    fn finish(&self, start: Instant, got: String, want: String) -> Comparison {
        let equal = got == want;
        if !equal {
            self.render_diff(&got, &want);
        }
        log_op_end!(
            OP_COMPARE,
            duration_ms = start.elapsed().as_millis() as u64,
            equal = equal,
            got_len = got.len(),
            want_len = want.len()
        );
        Comparison { equal, got, want }
    }

    fn render_diff(&self, got: &str, want: &str) {
        let Some(hook) = &self.diff else {
            return;
        };
        let mut sink = hook.sink.lock().unwrap_or_else(PoisonError::into_inner);
        let result = hook
            .renderer
            .render(&mut **sink, got, want)
            .and_then(|()| sink.flush());
        if let Err(err) = result {
            tracing::warn!(op = OP_RENDER_DIFF, error = %err, "diff rendering failed");
        }
    }
}
