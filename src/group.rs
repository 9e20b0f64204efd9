//! Collapsing shard-suffixed table names into logical groups.

use std::collections::{BTreeMap, btree_map::Entry};

use regex::Regex;

use crate::meta::Column;

/// A logical table: one or more physical tables sharing a name stem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableGroup {
    /// Logical name, the shared stem.
    pub name: String,
    /// Table comment of the representative, may be empty.
    pub comment: String,
    /// Columns of the representative, in definition order.
    pub columns: Vec<Column>,
    /// Literal `CREATE TABLE` statement of the representative.
    pub create_sql: String,
    /// The physical table all metadata is fetched from: the first one
    /// encountered for this stem. Later members never replace it.
    pub real_name: String,
    /// Number of physical tables collapsed into this group.
    pub count: usize,
}

impl TableGroup {
    fn new(name: String, real_name: String) -> Self {
        Self {
            name,
            comment: String::new(),
            columns: Vec::new(),
            create_sql: String::new(),
            real_name,
            count: 1,
        }
    }
}

/// Group physical table names by their stem.
///
/// With `strip_shard_suffix` set, a trailing run of digits with an optional
/// leading underscore is removed (`orders_2023` and `events7` become `orders`
/// and `events`); otherwise every name is its own group. The map is keyed by
/// logical name, so iteration is lexicographic and rendering is deterministic.
pub fn group_tables(names: &[String], strip_shard_suffix: bool) -> BTreeMap<String, TableGroup> {
    let suffix = Regex::new(r"_?\d+$").expect("valid regex");

    let mut groups = BTreeMap::new();
    for name in names {
        let logical = if strip_shard_suffix {
            suffix.replace(name, "").into_owned()
        } else {
            name.clone()
        };

        match groups.entry(logical) {
            Entry::Vacant(entry) => {
                let stem = entry.key().clone();
                entry.insert(TableGroup::new(stem, name.clone()));
            }
            Entry::Occupied(mut entry) => entry.get_mut().count += 1,
        }
    }
    groups
}
