use airtable_schema_generator::{
    config::GeneratorConfig, constants_generator::write_schema_file,
    requests_generator::write_request_file, schema_loader::load_schema,
};
use anyhow::Result;
use std::path::Path;
use std::{env, fs};

fn main() -> Result<()> {
    let arguments: Vec<String> = env::args().collect();

    let default_path: String = "codegen.toml".into();
    let path: &String = arguments.get(1).unwrap_or(&default_path);

    let config = GeneratorConfig::from_file(Path::new(path))?;

    println!("Reading schema description: {}", config.schema_path.display());
    let tables = load_schema(&config.schema_path)?;

    fs::create_dir_all(&config.output_folder)?;

    println!(
        "Writing schema.js and request.js to: {}",
        config.output_folder.display()
    );
    write_schema_file(&config.output_folder, &tables)?;
    write_request_file(&config.output_folder, &tables)?;

    Ok(())
}
