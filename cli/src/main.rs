use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};

use peerwire::describe_schema;
use peerwire_compiler::error::CodingError;
use peerwire_compiler::{coding_file_name, compile_schema, generate_coding};

#[derive(Parser)]
#[command(name = "peerwire")]
#[command(about = "Generate, check, or describe wire coding from .wire schemas", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the coding module for one type from the schema in a directory
    Gen {
        /// Target type name
        #[arg(short = 't', long = "type")]
        type_name: String,

        /// Directory holding the schema source and receiving the generated
        /// file (defaults to the working directory)
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },

    /// Parse and classify a schema, reporting the types it defines
    Check {
        /// Input `.wire` file
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Dump the classified schema as JSON
    Describe {
        /// Input `.wire` file
        #[arg(short, long)]
        input: PathBuf,

        /// Output `.json` file (if omitted, prints to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<(), CodingError> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Gen { type_name, dir } => {
            let dir = dir.clone().unwrap_or_else(|| PathBuf::from("."));
            let schema_path = locate_schema(&dir)?;
            let text = fs::read_to_string(&schema_path).map_err(CodingError::Io)?;
            let descriptors = compile_schema(&text)?;
            let descriptor = descriptors
                .iter()
                .find(|d| d.type_name == *type_name)
                .ok_or_else(|| CodingError::TypeNotFound(type_name.clone()))?;
            // Generate fully in memory before touching the filesystem, so a
            // failed run never leaves a partial artifact behind.
            let code = generate_coding(descriptor);
            let out_path = dir.join(coding_file_name(type_name));
            fs::write(&out_path, &code).map_err(CodingError::Io)?;
            println!("Generated {} → {}", type_name, out_path.display());
            Ok(())
        }

        Commands::Check { input } => {
            let text = fs::read_to_string(input).map_err(CodingError::Io)?;
            let descriptors = compile_schema(&text)?;
            println!("{}: {} types", input.display(), descriptors.len());
            for descriptor in &descriptors {
                println!(
                    "  {} ({} fields)",
                    descriptor.type_name,
                    descriptor.fields.len()
                );
            }
            Ok(())
        }

        Commands::Describe { input, output } => {
            let text = fs::read_to_string(input).map_err(CodingError::Io)?;
            let json = describe_schema(&text)?;
            if let Some(out_path) = output {
                fs::write(out_path, &json).map_err(CodingError::Io)?;
                println!("Schema description written to {}", out_path.display());
            } else {
                println!("{}", json);
            }
            Ok(())
        }
    }
}

/// Find the schema source for a generation run: the directory must hold
/// exactly one `.wire` file.
fn locate_schema(dir: &Path) -> Result<PathBuf, CodingError> {
    let mut found = Vec::new();
    for entry in fs::read_dir(dir).map_err(CodingError::Io)? {
        let entry = entry.map_err(CodingError::Io)?;
        let path = entry.path();
        if path.extension().map_or(false, |ext| ext == "wire") {
            found.push(path);
        }
    }
    if found.len() != 1 {
        return Err(CodingError::AmbiguousSchemaSource {
            dir: dir.display().to_string(),
            found: found.len(),
        });
    }
    Ok(found.remove(0))
}
