/// Integration test for full schema + request generation

use airtable_schema_generator::constants_generator::generate_schema_file;
use airtable_schema_generator::requests_generator::generate_request_file;
use airtable_schema_generator::schema_loader::parse_schema;

const DESCRIPTION: &str = r#"{
    "tables": [
        {
            "name": "User",
            "columns": [
                {"name": "First Name", "type": "text"},
                {"name": "Email Address", "type": "email"},
                {"name": "Assignees", "type": "foreignKey, many"},
                "Notes"
            ],
            "lookupFields": ["Email Address"]
        },
        {
            "name": "Project Tasks",
            "columns": [
                {"name": "Task Name", "type": "text"},
                {"name": "Owner", "type": "foreignKey"}
            ]
        }
    ]
}"#;

#[test]
fn generates_the_schema_constants_file() {
    let tables = parse_schema(DESCRIPTION).unwrap();

    let schema_js = generate_schema_file(&tables);

    // Tables constants map cleaned identifiers to raw names
    assert!(schema_js.contains("export const Tables = {"));
    assert!(schema_js.contains("\tUser: 'User',\n"));
    assert!(schema_js.contains("\tProjectTasks: 'Project Tasks',\n"));

    // Columns constants are keyed by raw table name, entries by cleaned name
    assert!(schema_js.contains("export const Columns = {"));
    assert!(schema_js.contains("\t\"Project Tasks\": {\n"));
    assert!(schema_js.contains("\t\tfirstName: {name:`First Name`, type:`text`},\n"));
    assert!(schema_js.contains("\t\tassigneeIds: {name:`Assignees`, type:`foreignKey, many`},\n"));
    assert!(schema_js.contains("\t\townerId: {name:`Owner`, type:`foreignKey`},\n"));
    assert!(schema_js.contains("\t\tnotes: {name:`Notes`, type:``},\n"));

    // Tables block closes before the Columns block opens
    let tables_open = schema_js.find("export const Tables").unwrap();
    let columns_open = schema_js.find("export const Columns").unwrap();
    assert!(tables_open < columns_open);
}

#[test]
fn generates_the_request_wrapper_file() {
    let tables = parse_schema(DESCRIPTION).unwrap();

    let request_js = generate_request_file(&tables);

    assert!(request_js.starts_with("/* eslint no-restricted-imports: 0 */"));
    assert!(request_js.contains("} from './airtable';"));

    // Section banners come in create/read/update/delete order
    let create = request_js.find("******* CREATE RECORDS *******").unwrap();
    let read = request_js.find("******* READ RECORDS *******").unwrap();
    let update = request_js.find("******* UPDATE RECORDS *******").unwrap();
    let delete = request_js.find("******* DELETE RECORDS *******").unwrap();
    assert!(create < read);
    assert!(read < update);
    assert!(update < delete);

    // One wrapper per table and operation, on cleaned table names
    assert!(request_js.contains("export const createUser = async record =>"));
    assert!(request_js.contains("export const createProjectTasks = async record =>"));
    assert!(request_js.contains("export const getUserById = async id =>"));
    assert!(request_js.contains("export const getAllProjectTasks = async (filterByFormula = '', sort = []) =>"));
    assert!(request_js.contains("export const updateProjectTasks = async (id, recordUpdates) =>"));
    assert!(request_js.contains("export const deleteUser = async id =>"));

    // Lookup accessor only for the table that declares a lookup field
    assert!(request_js.contains("export const getUsersByEmailAddress"));
    assert!(request_js.contains("Columns[Tables.User].emailAddress.name"));
    assert!(!request_js.contains("getRecordsByAttribute(Tables.ProjectTasks"));

    // Wrappers call through to the backend operations
    assert!(request_js.contains("return createRecord(Tables.User, record)"));
    assert!(request_js.contains("return getRecordById(Tables.ProjectTasks, id);"));
    assert!(request_js.contains("return updateRecord(Tables.User, id, recordUpdates);"));
    assert!(request_js.contains("return deleteRecord(Tables.ProjectTasks, id);"));
}

#[test]
fn table_order_is_stable_across_sections() {
    let tables = parse_schema(DESCRIPTION).unwrap();

    let request_js = generate_request_file(&tables);

    let create_user = request_js.find("createUser").unwrap();
    let create_tasks = request_js.find("createProjectTasks").unwrap();
    let update_user = request_js.find("updateUser").unwrap();
    let update_tasks = request_js.find("updateProjectTasks").unwrap();
    assert!(create_user < create_tasks);
    assert!(update_user < update_tasks);
}
