//! Publication-page CLI.
//!
//! `bibpage convert` turns a BibTeX file into a CSL-JSON data file;
//! `bibpage update` regenerates the publications section of an HTML page
//! from that data file.

use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;
use std::process;

use bibpage_core::{io, title_case, BiblatexConverter, BibliographyConverter};
use bibpage_renderer::update_page_from_files;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a BibTeX file to a CSL-JSON data file
    Convert {
        /// Path to the BibTeX source file
        input: PathBuf,

        /// Path for the CSL-JSON output
        output: PathBuf,

        /// Normalize title capitalization (title case, minor words lowered)
        #[arg(long)]
        title_case: bool,
    },
    /// Regenerate the publications section of an HTML page
    Update {
        /// Path to the HTML document
        html: PathBuf,

        /// Path to the CSL-JSON data file
        data: PathBuf,
    },
}

fn main() {
    // try_parse so usage errors exit 1; clap's default exit would be 2.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            process::exit(if e.use_stderr() { 1 } else { 0 });
        }
    };

    match cli.command {
        Commands::Convert {
            input,
            output,
            title_case: apply_title_case,
        } => {
            if !input.exists() {
                eprintln!("Error: input file '{}' not found", input.display());
                process::exit(1);
            }

            let source = match fs::read_to_string(&input) {
                Ok(content) => content,
                Err(e) => {
                    eprintln!("Error reading {}: {}", input.display(), e);
                    process::exit(1);
                }
            };

            let mut bibliography = match BiblatexConverter.convert(&source) {
                Ok(b) => b,
                Err(e) => {
                    eprintln!("{}", e);
                    process::exit(1);
                }
            };

            if apply_title_case {
                for reference in &mut bibliography {
                    if let Some(title) = reference.title.take() {
                        reference.title = Some(title_case(&title));
                    }
                }
            }

            if let Err(e) = io::save_bibliography(&output, &bibliography) {
                eprintln!("Error writing {}: {}", output.display(), e);
                process::exit(1);
            }

            println!(
                "Successfully converted {} to {}",
                input.display(),
                output.display()
            );
        }
        Commands::Update { html, data } => match update_page_from_files(&html, &data) {
            Ok(update) => {
                println!("Publications updated successfully!");
                println!("Backup saved to: {}", update.backup_path.display());
            }
            Err(e) => {
                eprintln!("{}", e);
                process::exit(1);
            }
        },
    }
}
