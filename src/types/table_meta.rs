use super::column_meta::ColumnMeta;

#[derive(Clone, Debug)]
pub struct TableMeta {
    pub table_name: String, // raw display string
    pub columns: Vec<ColumnMeta>,
    pub lookup_fields: Vec<String>,
}
