#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnKind {
    Plain,
    ForeignKeySingle,
    ForeignKeyMany,
}

impl ColumnKind {
    /// Classify a raw type tag. Decided once when the descriptor is built,
    /// never re-parsed during name cleaning.
    pub fn from_type_tag(tag: Option<&str>) -> Self {
        match tag {
            Some(tag) if tag.contains("foreignKey") => {
                if tag.contains("many") {
                    ColumnKind::ForeignKeyMany
                } else {
                    ColumnKind::ForeignKeySingle
                }
            }
            _ => ColumnKind::Plain,
        }
    }
}

#[derive(Clone, Debug)]
pub struct ColumnMeta {
    pub column_name: String,         // raw display string
    pub column_type: Option<String>, // raw free-form tag, None for flat columns
    pub kind: ColumnKind,
}

impl ColumnMeta {
    pub fn new(column_name: String, column_type: Option<String>) -> Self {
        let kind = ColumnKind::from_type_tag(column_type.as_deref());

        Self {
            column_name,
            column_type,
            kind,
        }
    }

    pub fn plain(column_name: &str) -> Self {
        Self::new(column_name.to_string(), None)
    }
}
