//! Context diff renderer
//!
//! Output layout, for texts split after each newline:
//!
//! ```text
//! *** Got
//! --- Want
//! ***************
//! *** 1,3 ****
//!   unchanged
//! ! changed
//! - deleted
//! --- 1,3 ----
//!   unchanged
//! ! changed
//! + inserted
//! ```
//!
//! Identical texts produce no output at all.

use std::io::{self, Write};
use std::time::Instant;

use describe_core::errors::Result;
use describe_core::{log_op_end, log_op_start, DiffRenderer};
use describe_core_types::schema::OP_RENDER_DIFF;

use crate::config::DiffConfig;
use crate::matcher::{OpCode, OpTag, SequenceMatcher};

/// Split after every newline; the last piece always gets a trailing newline
pub fn split_lines(text: &str) -> Vec<String> {
    let mut lines: Vec<String> = text.split_inclusive('\n').map(str::to_string).collect();
    match lines.last_mut() {
        Some(last) if !text.ends_with('\n') => last.push('\n'),
        _ => lines.push("\n".to_string()),
    }
    lines
}

/// `start+1` or `start+1,stop` in 1-based line numbers
fn format_range(start: usize, stop: usize) -> String {
    let length = stop - start;
    let mut beginning = start + 1;
    if length == 0 {
        beginning -= 1;
    }
    if length <= 1 {
        return beginning.to_string();
    }
    format!("{},{}", beginning, beginning + length - 1)
}

/// Renders mismatches as a context diff
#[derive(Debug, Clone, Default)]
pub struct ContextDiff {
    config: DiffConfig,
}

impl ContextDiff {
    /// # Errors
    ///
    /// Returns `DescribeError::InvalidConfig` when `config` fails
    /// [`DiffConfig::validate`].
    pub fn new(config: DiffConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &DiffConfig {
        &self.config
    }

    /// Diff of `got` against `want` as a string
    pub fn render_to_string(&self, got: &str, want: &str) -> String {
        let a = split_lines(got);
        let b = split_lines(want);
        let groups = SequenceMatcher::new(&a, &b).grouped_opcodes(self.config.context);

        let mut out = String::new();
        for (index, group) in groups.iter().enumerate() {
            if index == 0 {
                out.push_str(&format!("*** {}\n", self.config.from_label));
                out.push_str(&format!("--- {}\n", self.config.to_label));
            }
            write_hunk(&mut out, group, &a, &b);
        }
        out.replace('\t', &self.config.tab_replacement)
    }

    /// Write the diff of `got` against `want` to `out`
    ///
    /// # Errors
    ///
    /// Returns any error raised while writing to `out`.
    pub fn write_diff(&self, out: &mut dyn Write, got: &str, want: &str) -> io::Result<()> {
        let start = Instant::now();
        log_op_start!(OP_RENDER_DIFF);
        let text = self.render_to_string(got, want);
        out.write_all(text.as_bytes())?;
        log_op_end!(
            OP_RENDER_DIFF,
            duration_ms = start.elapsed().as_millis() as u64,
            bytes = text.len()
        );
        Ok(())
    }
}

impl DiffRenderer for ContextDiff {
    fn render(&self, out: &mut dyn Write, got: &str, want: &str) -> io::Result<()> {
        self.write_diff(out, got, want)
    }
}

fn write_hunk(out: &mut String, group: &[OpCode], a: &[String], b: &[String]) {
    let (Some(first), Some(last)) = (group.first(), group.last()) else {
        return;
    };
    out.push_str("***************\n");

    out.push_str(&format!("*** {} ****\n", format_range(first.i1, last.i2)));
    if group
        .iter()
        .any(|c| matches!(c.tag, OpTag::Replace | OpTag::Delete))
    {
        for code in group.iter().filter(|c| c.tag != OpTag::Insert) {
            for line in &a[code.i1..code.i2] {
                out.push_str(code.tag.prefix());
                out.push_str(line);
            }
        }
    }

    out.push_str(&format!("--- {} ----\n", format_range(first.j1, last.j2)));
    if group
        .iter()
        .any(|c| matches!(c.tag, OpTag::Replace | OpTag::Insert))
    {
        for code in group.iter().filter(|c| c.tag != OpTag::Delete) {
            for line in &b[code.j1..code.j2] {
                out.push_str(code.tag.prefix());
                out.push_str(line);
            }
        }
    }
}
