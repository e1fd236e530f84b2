use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::path::PathBuf;

use brine_zod::{compile_schema, parse_schema, wrap_module, GenerateOptions, ModuleKind, ZodGenError};

#[derive(Parser)]
#[command(name = "bzod")]
#[command(about = "Generate zod validators from JSON Schema", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate zod code from a JSON Schema file
    Gen {
        /// Input `.json` schema file
        #[arg(short, long)]
        input: PathBuf,

        /// Output `.js` / `.ts` file (if omitted, prints to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Module format of the generated code
        #[arg(short, long, value_enum, default_value_t = ModuleArg::None)]
        module: ModuleArg,

        /// Name to bind the generated schema to
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Parse a JSON Schema file and report its root type
    Check {
        /// Input `.json` schema file
        #[arg(short, long)]
        input: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ModuleArg {
    None,
    Esm,
    Cjs,
}

impl From<ModuleArg> for ModuleKind {
    fn from(arg: ModuleArg) -> Self {
        match arg {
            ModuleArg::None => ModuleKind::Plain,
            ModuleArg::Esm  => ModuleKind::Esm,
            ModuleArg::Cjs  => ModuleKind::Cjs,
        }
    }
}

fn main() -> Result<(), ZodGenError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Gen { input, output, module, name } => {
            let text = fs::read_to_string(input).map_err(ZodGenError::Io)?;
            let (schema, expr) = compile_schema(&text)?;
            tracing::info!(input = %input.display(), kind = schema.kind(), "compiled schema");

            let options = GenerateOptions {
                module: (*module).into(),
                name:   name.clone(),
            };
            let code = wrap_module(&expr.to_string(), &options)?;

            if let Some(out_path) = output {
                fs::write(out_path, &code).map_err(ZodGenError::Io)?;
                println!("Generated zod code written to {}", out_path.display());
            } else {
                println!("{}", code);
            }
            Ok(())
        }

        Commands::Check { input } => {
            let text = fs::read_to_string(input).map_err(ZodGenError::Io)?;
            let schema = parse_schema(&text)?;
            println!("{}: {} schema", input.display(), schema.kind());
            Ok(())
        }
    }
}
