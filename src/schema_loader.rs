use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde_derive::Deserialize;

use crate::types::{ColumnMeta, TableMeta};

#[derive(Debug, Deserialize)]
pub struct SchemaDescription {
    pub tables: Vec<TableDescription>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableDescription {
    pub name: String,
    pub columns: Vec<ColumnDescription>,
    #[serde(default)]
    pub lookup_fields: Vec<String>,
}

/// A column in the schema description. Both source shapes land here: the
/// object form carrying a type tag and the flat form that is just a name.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ColumnDescription {
    Detailed {
        name: String,
        #[serde(rename = "type")]
        column_type: String,
    },
    Flat(String),
}

impl From<ColumnDescription> for ColumnMeta {
    fn from(description: ColumnDescription) -> Self {
        match description {
            ColumnDescription::Detailed { name, column_type } => {
                ColumnMeta::new(name, Some(column_type))
            }
            ColumnDescription::Flat(name) => ColumnMeta::new(name, None),
        }
    }
}

impl From<TableDescription> for TableMeta {
    fn from(description: TableDescription) -> Self {
        TableMeta {
            table_name: description.name,
            columns: description
                .columns
                .into_iter()
                .map(ColumnMeta::from)
                .collect(),
            lookup_fields: description.lookup_fields,
        }
    }
}

pub fn parse_schema(raw: &str) -> Result<Vec<TableMeta>> {
    let description: SchemaDescription =
        serde_json::from_str(raw).context("malformed schema description")?;

    Ok(description.tables.into_iter().map(TableMeta::from).collect())
}

pub fn load_schema(path: &Path) -> Result<Vec<TableMeta>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read schema description {}", path.display()))?;

    parse_schema(&raw)
}
