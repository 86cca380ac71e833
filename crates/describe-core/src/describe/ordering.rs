//! Map key ordering
//!
//! String keys sort lexicographically; signed, unsigned and float keys sort
//! numerically. Keys of any other kind sort by their rendered text, which is
//! deterministic but not part of the output contract.

use std::cmp::Ordering;

use crate::model::{Data, Kind};

enum SortKey<'a> {
    Str(&'a str),
    Int(i64),
    Uint(u64),
    Float(f64),
    Text(String),
}

impl SortKey<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortKey::Str(a), SortKey::Str(b)) => a.cmp(b),
            (SortKey::Int(a), SortKey::Int(b)) => a.cmp(b),
            (SortKey::Uint(a), SortKey::Uint(b)) => a.cmp(b),
            (SortKey::Float(a), SortKey::Float(b)) => a.total_cmp(b),
            (SortKey::Text(a), SortKey::Text(b)) => a.cmp(b),
            _ => Ordering::Equal,
        }
    }
}

fn typed_key(kind: Kind, data: &Data) -> Option<SortKey<'_>> {
    match data {
        Data::Str(s) if kind == Kind::String => Some(SortKey::Str(s)),
        Data::Int(i) if kind.is_signed() => Some(SortKey::Int(*i)),
        Data::Uint(u) if kind.is_unsigned() => Some(SortKey::Uint(*u)),
        Data::Float(f) if kind.is_float() => Some(SortKey::Float(*f)),
        _ => None,
    }
}

/// Order map entries by key
///
/// `render_key` is only called when the key kind has no natural order (or a
/// key payload does not match its kind), so every entry gets a comparable
/// sort key of the same variant. The sort is stable.
pub fn sorted_entries<'a, F>(
    key_kind: Kind,
    entries: &'a [(Data, Data)],
    render_key: F,
) -> Vec<&'a (Data, Data)>
where
    F: Fn(&Data) -> String,
{
    let typed: Option<Vec<SortKey<'a>>> = entries
        .iter()
        .map(|(key, _)| typed_key(key_kind, key))
        .collect();

    let keys = match typed {
        Some(keys) => keys,
        None => entries
            .iter()
            .map(|(key, _)| SortKey::Text(render_key(key)))
            .collect(),
    };

    let mut order: Vec<usize> = (0..entries.len()).collect();
    order.sort_by(|a, b| keys[*a].cmp(&keys[*b]));
    order.into_iter().map(|i| &entries[i]).collect()
}
