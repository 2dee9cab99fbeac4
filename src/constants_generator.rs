use std::fs;
use std::path::Path;

use anyhow::Result;

use crate::identifiers::{clean_column_name, clean_table_name, lowercase_first_char};
use crate::types::{ColumnMeta, TableMeta};

pub const TABLE_HEADER: &str = "/*\n    THIS IS A GENERATED FILE\n    Changes might be overwritten in the future, edit with caution!\n*/\n\nexport const Tables = {\n";

pub const COLUMNS_HEADER: &str = "\nexport const Columns = {\n";

pub const GENERAL_CONSTANTS_FOOTER: &str = "};\n";

/// One `Tables` entry mapping the cleaned identifier to the raw name.
pub fn table_constant(table_name: &str) -> String {
    let clean_name = clean_table_name(table_name);

    format!("\t{}: '{}',\n", clean_name, table_name)
}

/// One `Columns` block per table, keyed by the raw table name so it can be
/// indexed through the `Tables` constants. Column input order is preserved.
pub fn column_constant(table_name: &str, columns: &[ColumnMeta]) -> String {
    let mut result = format!("\t\"{}\": {{\n", table_name);

    for column in columns {
        // Lowercase the clean name so it follows javascript conventions
        let clean_name = lowercase_first_char(&clean_column_name(column));

        result.push_str(&format!(
            "\t\t{}: {{name:`{}`, type:`{}`}},\n",
            clean_name,
            column.column_name,
            column.column_type.as_deref().unwrap_or("")
        ));
    }

    result.push_str("\t},\n");
    result
}

pub fn generate_schema_file(tables: &[TableMeta]) -> String {
    let mut result = String::from(TABLE_HEADER);

    for table in tables {
        result.push_str(&table_constant(&table.table_name));
    }
    result.push_str(GENERAL_CONSTANTS_FOOTER);

    result.push_str(COLUMNS_HEADER);
    for table in tables {
        result.push_str(&column_constant(&table.table_name, &table.columns));
    }
    result.push_str(GENERAL_CONSTANTS_FOOTER);

    result
}

pub fn write_schema_file(dir: &Path, tables: &[TableMeta]) -> Result<()> {
    fs::write(dir.join("schema.js"), generate_schema_file(tables))?;

    Ok(())
}
