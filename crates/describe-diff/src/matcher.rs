//! Line sequence matching
//!
//! Finds the longest contiguous matching block, then recurses on the pieces
//! to its left and right. Lines that occur in more than 1% of a long target
//! sequence (200 lines or more) are treated as too common to anchor a match.

use std::collections::HashMap;

/// Minimum target length at which popular lines are ignored
const AUTOJUNK_MIN_LEN: usize = 200;

/// `a[a..a+size] == b[b..b+size]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    pub a: usize,
    pub b: usize,
    pub size: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpTag {
    Equal,
    Replace,
    Delete,
    Insert,
}

impl OpTag {
    /// Two-character line prefix used by the context format
    pub fn prefix(&self) -> &'static str {
        match self {
            OpTag::Equal => "  ",
            OpTag::Replace => "! ",
            OpTag::Delete => "- ",
            OpTag::Insert => "+ ",
        }
    }
}

/// Edit turning `a[i1..i2]` into `b[j1..j2]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpCode {
    pub tag: OpTag,
    pub i1: usize,
    pub i2: usize,
    pub j1: usize,
    pub j2: usize,
}

impl OpCode {
    fn new(tag: OpTag, i1: usize, i2: usize, j1: usize, j2: usize) -> Self {
        Self { tag, i1, i2, j1, j2 }
    }
}

/// Matcher over two line sequences
#[derive(Debug)]
pub struct SequenceMatcher<'a> {
    a: &'a [String],
    b: &'a [String],
    b2j: HashMap<&'a str, Vec<usize>>,
}

impl<'a> SequenceMatcher<'a> {
    pub fn new(a: &'a [String], b: &'a [String]) -> Self {
        let mut b2j: HashMap<&'a str, Vec<usize>> = HashMap::new();
        for (j, line) in b.iter().enumerate() {
            b2j.entry(line.as_str()).or_default().push(j);
        }

        if b.len() >= AUTOJUNK_MIN_LEN {
            let limit = b.len() / 100 + 1;
            b2j.retain(|_, indices| indices.len() <= limit);
        }

        Self { a, b, b2j }
    }

    /// Longest matching block in `a[alo..ahi]` and `b[blo..bhi]`
    ///
    /// Ties go to the block starting earliest in `a`, then earliest in `b`.
    pub fn find_longest_match(&self, alo: usize, ahi: usize, blo: usize, bhi: usize) -> Match {
        let (mut best_i, mut best_j, mut best_size) = (alo, blo, 0);

        let mut j2len: HashMap<usize, usize> = HashMap::new();
        for i in alo..ahi {
            let mut next_j2len = HashMap::new();
            if let Some(indices) = self.b2j.get(self.a[i].as_str()) {
                for &j in indices {
                    if j < blo {
                        continue;
                    }
                    if j >= bhi {
                        break;
                    }
                    let k = j
                        .checked_sub(1)
                        .and_then(|prev| j2len.get(&prev))
                        .copied()
                        .unwrap_or(0)
                        + 1;
                    next_j2len.insert(j, k);
                    if k > best_size {
                        best_i = i + 1 - k;
                        best_j = j + 1 - k;
                        best_size = k;
                    }
                }
            }
            j2len = next_j2len;
        }

        // Popular lines never seed a match but may still extend one.
        while best_i > alo && best_j > blo && self.a[best_i - 1] == self.b[best_j - 1] {
            best_i -= 1;
            best_j -= 1;
            best_size += 1;
        }
        while best_i + best_size < ahi
            && best_j + best_size < bhi
            && self.a[best_i + best_size] == self.b[best_j + best_size]
        {
            best_size += 1;
        }

        Match {
            a: best_i,
            b: best_j,
            size: best_size,
        }
    }

    /// Non-adjacent matching blocks in order, ending with a `size == 0` sentinel
    pub fn matching_blocks(&self) -> Vec<Match> {
        let mut matched = Vec::new();
        let mut queue = vec![(0, self.a.len(), 0, self.b.len())];
        while let Some((alo, ahi, blo, bhi)) = queue.pop() {
            let m = self.find_longest_match(alo, ahi, blo, bhi);
            if m.size == 0 {
                continue;
            }
            matched.push(m);
            if alo < m.a && blo < m.b {
                queue.push((alo, m.a, blo, m.b));
            }
            if m.a + m.size < ahi && m.b + m.size < bhi {
                queue.push((m.a + m.size, ahi, m.b + m.size, bhi));
            }
        }
        matched.sort_by_key(|m| (m.a, m.b));

        let mut blocks = Vec::with_capacity(matched.len() + 1);
        let mut current = Match { a: 0, b: 0, size: 0 };
        for m in matched {
            if current.a + current.size == m.a && current.b + current.size == m.b {
                current.size += m.size;
            } else {
                if current.size > 0 {
                    blocks.push(current);
                }
                current = m;
            }
        }
        if current.size > 0 {
            blocks.push(current);
        }
        blocks.push(Match {
            a: self.a.len(),
            b: self.b.len(),
            size: 0,
        });
        blocks
    }

    /// Edits turning `a` into `b`
    pub fn opcodes(&self) -> Vec<OpCode> {
        let mut codes = Vec::new();
        let (mut i, mut j) = (0, 0);
        for m in self.matching_blocks() {
            let tag = if i < m.a && j < m.b {
                Some(OpTag::Replace)
            } else if i < m.a {
                Some(OpTag::Delete)
            } else if j < m.b {
                Some(OpTag::Insert)
            } else {
                None
            };
            if let Some(tag) = tag {
                codes.push(OpCode::new(tag, i, m.a, j, m.b));
            }
            i = m.a + m.size;
            j = m.b + m.size;
            if m.size > 0 {
                codes.push(OpCode::new(OpTag::Equal, m.a, i, m.b, j));
            }
        }
        codes
    }

    /// Edits clustered into hunks with up to `context` lines of surrounding
    /// equal lines; identical inputs yield no hunks
    pub fn grouped_opcodes(&self, context: usize) -> Vec<Vec<OpCode>> {
        let mut codes = self.opcodes();
        if codes.is_empty() {
            codes.push(OpCode::new(OpTag::Equal, 0, 1, 0, 1));
        }

        if let Some(first) = codes.first_mut() {
            if first.tag == OpTag::Equal {
                first.i1 = first.i1.max(first.i2.saturating_sub(context));
                first.j1 = first.j1.max(first.j2.saturating_sub(context));
            }
        }
        if let Some(last) = codes.last_mut() {
            if last.tag == OpTag::Equal {
                last.i2 = last.i2.min(last.i1 + context);
                last.j2 = last.j2.min(last.j1 + context);
            }
        }

        let span = context * 2;
        let mut groups = Vec::new();
        let mut group = Vec::new();
        for code in codes {
            let OpCode {
                tag,
                mut i1,
                i2,
                mut j1,
                j2,
            } = code;
            if tag == OpTag::Equal && i2 - i1 > span {
                group.push(OpCode::new(tag, i1, i2.min(i1 + context), j1, j2.min(j1 + context)));
                groups.push(std::mem::take(&mut group));
                i1 = i1.max(i2.saturating_sub(context));
                j1 = j1.max(j2.saturating_sub(context));
            }
            group.push(OpCode::new(tag, i1, i2, j1, j2));
        }
        let only_equal = group.len() == 1 && group[0].tag == OpTag::Equal;
        if !group.is_empty() && !only_equal {
            groups.push(group);
        }
        groups
    }
}
