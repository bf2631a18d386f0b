//! # etp CLI
//!
//! Command-line interface for rendering receipt templates.
//!
//! ## Usage
//!
//! ```bash
//! # Render a template with JSON data straight to the printer device
//! etp render --model TM-T88IV --data order.json --output /dev/usb/lp0 receipt.tmpl
//!
//! # Preview the text only, without any printer commands
//! etp render --suppress-commands --data order.json receipt.tmpl
//!
//! # List the commands a template can use
//! etp commands --model TM-T88IV
//!
//! # List supported models
//! etp models
//! ```

use clap::{Parser, Subcommand};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use serde_json::Value;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use etp::{CodePage, EtpError, Renderer, printer};

/// etp - ESC/POS template printer
#[derive(Parser, Debug)]
#[command(name = "etp")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log render steps to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render a template into printer bytes
    Render {
        /// Template file
        template: PathBuf,

        /// Printer model (omit for baseline commands only)
        #[arg(long, short, default_value = "")]
        model: String,

        /// JSON file with the template data
        #[arg(long, short, value_name = "FILE")]
        data: Option<PathBuf>,

        /// Output file or device (defaults to stdout)
        #[arg(long, short, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Render text only, without printer commands or the init prologue
        #[arg(long)]
        suppress_commands: bool,

        /// Printer code page
        #[arg(long, default_value = "pc852")]
        code_page: CodePage,
    },

    /// List the commands available to templates
    Commands {
        /// Printer model (omit for baseline commands only)
        #[arg(long, short, default_value = "")]
        model: String,

        /// Print the listing as JSON
        #[arg(long)]
        json: bool,
    },

    /// List supported printer models
    Models,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(command: Commands) -> Result<(), EtpError> {
    match command {
        Commands::Render {
            template,
            model,
            data,
            output,
            suppress_commands,
            code_page,
        } => {
            let source = fs::read(&template)?;
            let name = template.display().to_string();
            let renderer = Renderer::new(&model, source)?
                .name(name)
                .suppress_commands(suppress_commands)
                .code_page(code_page);

            let data = match data {
                Some(path) => load_data(&path)?,
                None => Value::Null,
            };

            // Render fully before touching the output
            let bytes = renderer.render(&data)?;
            match output {
                Some(path) => {
                    debug!(path = %path.display(), bytes = bytes.len(), "writing output");
                    fs::write(path, &bytes)?;
                }
                None => {
                    let mut stdout = io::stdout().lock();
                    stdout.write_all(&bytes)?;
                    stdout.flush()?;
                }
            }
        }
        Commands::Commands { model, json } => {
            let renderer = Renderer::new(&model, "")?;
            let listing = renderer.commands().describe();
            if json {
                let text = serde_json::to_string_pretty(&listing)
                    .map_err(|e| EtpError::Data(e.to_string()))?;
                println!("{}", text);
            } else {
                for info in listing {
                    println!("{}{}", info.name, info.signature);
                    for line in info.description.lines() {
                        println!("    {}", line.trim_start());
                    }
                }
            }
        }
        Commands::Models => {
            println!("Available models:");
            for id in printer::models() {
                println!("  {}", id);
            }
        }
    }

    Ok(())
}

/// Load template data from a JSON file
fn load_data(path: &PathBuf) -> Result<Value, EtpError> {
    let text = fs::read_to_string(path)?;
    serde_json::from_str(&text)
        .map_err(|e| EtpError::Data(format!("{}: {}", path.display(), e)))
}
