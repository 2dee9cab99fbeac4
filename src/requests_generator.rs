use std::fs;
use std::path::Path;

use anyhow::Result;

use crate::identifiers::{clean_column_name, clean_table_name, lowercase_first_char, pluralize};
use crate::types::{ColumnMeta, TableMeta};

pub const REQUEST_HEADER: &str = r"/* eslint no-restricted-imports: 0 */

/*
  THIS IS A GENERATED FILE
  Changes might be overwritten in the future, edit with caution!

  Wrapper functions around functions in airtable.js that interact with Airtable, designed
  to provide basic functionality

  If you're adding a new function: make sure you add a corresponding test (at least 1) for it in request.spec.js

*/

import { Tables, Columns } from './schema';
import {
  createRecord,
  updateRecord,
  getAllRecords,
  getRecordsByAttribute,
  getRecordById,
  deleteRecord
} from './airtable';
";

pub const CREATE_RECORDS_HEADER: &str = "\n  /*\n ******* CREATE RECORDS *******\n */\n";
pub const READ_RECORDS_HEADER: &str = "\n  /*\n ******* READ RECORDS *******\n */\n";
pub const UPDATE_RECORDS_HEADER: &str = "\n  /*\n ******* UPDATE RECORDS *******\n */\n";
pub const DELETE_RECORDS_HEADER: &str = "\n  /*\n ******* DELETE RECORDS *******\n */\n";

pub fn create_record(table_name: &str) -> String {
    format!(
        "\nexport const create{table} = async record => {{ \n    return createRecord(Tables.{table}, record)\n}};\n",
        table = table_name
    )
}

/// The read block for one table: get-by-id, get-by-ids (an Airtable `OR`
/// formula over record ids), get-all, then one get-by-field accessor per
/// lookup field in input order.
pub fn read_record(table_name: &str, lookup_fields: &[String]) -> String {
    let plural = pluralize(table_name);

    let mut result = format!(
        "\nexport const get{table}ById = async id => {{ \n  return getRecordById(Tables.{table}, id);\n}};\n",
        table = table_name
    );

    result.push_str(&format!(
        "\nexport const get{plural}ByIds = async ids => {{\n  const formula = `OR(${{ids.reduce((f, id) => `${{f}} {{ID}}='${{id}}',`, '')}} 1 < 0)`;\n  return getAllRecords(Tables.{table}, formula)\n}}\n",
        table = table_name,
        plural = plural
    ));

    result.push_str(&format!(
        "\nexport const getAll{plural} = async (filterByFormula = '', sort = []) => {{ \n  return getAllRecords(Tables.{table}, filterByFormula, sort);\n}};\n",
        table = table_name,
        plural = plural
    ));

    for field in lookup_fields {
        let clean_name = clean_column_name(&ColumnMeta::plain(field));

        result.push_str(&format!(
            "\nexport const get{plural}By{field} = async (value, sort = []) => {{ \n    return getRecordsByAttribute(Tables.{table}, Columns[Tables.{table}].{accessor}.name, value, sort);\n}};\n",
            table = table_name,
            plural = plural,
            field = clean_name,
            accessor = lowercase_first_char(&clean_name)
        ));
    }

    result
}

pub fn update_record(table_name: &str) -> String {
    format!(
        "\nexport const update{table} = async (id, recordUpdates) => {{ \n  return updateRecord(Tables.{table}, id, recordUpdates);\n}};\n",
        table = table_name
    )
}

pub fn delete_record(table_name: &str) -> String {
    format!(
        "\nexport const delete{table} = async id => {{ \n    return deleteRecord(Tables.{table}, id);\n}};",
        table = table_name
    )
}

/// Assemble the whole request wrapper file, section by section. Table order
/// follows the input sequence.
pub fn generate_request_file(tables: &[TableMeta]) -> String {
    let mut result = String::from(REQUEST_HEADER);

    result.push_str(CREATE_RECORDS_HEADER);
    for table in tables {
        result.push_str(&create_record(&clean_table_name(&table.table_name)));
    }

    result.push_str(READ_RECORDS_HEADER);
    for table in tables {
        result.push_str(&read_record(
            &clean_table_name(&table.table_name),
            &table.lookup_fields,
        ));
    }

    result.push_str(UPDATE_RECORDS_HEADER);
    for table in tables {
        result.push_str(&update_record(&clean_table_name(&table.table_name)));
    }

    result.push_str(DELETE_RECORDS_HEADER);
    for table in tables {
        result.push_str(&delete_record(&clean_table_name(&table.table_name)));
    }

    result
}

pub fn write_request_file(dir: &Path, tables: &[TableMeta]) -> Result<()> {
    fs::write(dir.join("request.js"), generate_request_file(tables))?;

    Ok(())
}
