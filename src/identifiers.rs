use crate::types::{ColumnKind, ColumnMeta};

/// Convert a raw column name to a javascript-usable identifier.
///
/// Foreign-key columns get an `Id`/`Ids` suffix; many-relation names are
/// assumed to already end in a pluralizing character, which is dropped
/// before the suffix. On an empty cleaned name the drop is a no-op.
pub fn clean_column_name(column: &ColumnMeta) -> String {
    let lowered = column.column_name.to_lowercase();
    let camel: String = lowered.split(' ').map(uppercase_first_char).collect();
    let mut cleaned = strip_disallowed(&camel);

    match column.kind {
        ColumnKind::Plain => cleaned,
        ColumnKind::ForeignKeySingle => {
            cleaned.push_str("Id");
            cleaned
        }
        ColumnKind::ForeignKeyMany => {
            cleaned.pop();
            cleaned.push_str("Ids");
            cleaned
        }
    }
}

/// Convert a raw table name to a javascript-usable identifier. Case is
/// left untouched.
pub fn clean_table_name(name: &str) -> String {
    name.chars()
        .filter(|&c| !matches!(c, '(' | ')') && !c.is_whitespace())
        .collect()
}

// Names already ending in 's' pass through unchanged; no other
// pluralization patterns are handled.
pub fn pluralize(name: &str) -> String {
    if name.ends_with('s') {
        name.to_string()
    } else {
        format!("{}s", name)
    }
}

pub fn uppercase_first_char(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn lowercase_first_char(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn strip_disallowed(s: &str) -> String {
    s.chars()
        .filter(|&c| !matches!(c, '(' | ')' | '"' | '\'' | '?') && !c.is_whitespace())
        .collect()
}
