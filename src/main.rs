mod deliver;
mod error;
mod filename;
mod parser;
mod pipeline;
mod record;
mod render;
mod settings;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use deliver::{ConsoleNotifier, Delivery, FileDelivery, StdoutDelivery};
use pipeline::{PageSource, Pipeline};
use settings::Settings;

#[derive(Parser)]
#[command(
    name = "job_saver",
    about = "Save a LinkedIn, Greenhouse or Lever job posting as Markdown"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract the posting from a saved page and write it as a Markdown file
    Save {
        /// Address of the page the snapshot was taken from
        #[arg(short, long)]
        url: String,
        /// HTML snapshot of the page ("-" or omitted reads stdin)
        #[arg(long)]
        html: Option<PathBuf>,
        /// Output folder (default: $JOBSAVE_OUT_DIR or staging/manual-saves)
        #[arg(short, long)]
        out_dir: Option<PathBuf>,
        /// Replace an existing file instead of numbering a new one
        #[arg(long)]
        overwrite: bool,
        /// Write the Markdown to stdout instead of a file
        #[arg(long)]
        stdout: bool,
        /// Print the extracted record as JSON after saving
        #[arg(long, conflicts_with = "stdout")]
        print_record: bool,
    },
    /// Show which platform an address belongs to
    Detect {
        #[arg(short, long)]
        url: String,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Save {
            url,
            html,
            out_dir,
            overwrite,
            stdout,
            print_record,
        } => {
            let settings = Settings::load().context("Failed to load JOBSAVE_* settings")?;

            let source = match html {
                Some(path) if path.as_os_str() != "-" => PageSource::File(path),
                _ => PageSource::Stdin,
            };

            let delivery: Box<dyn Delivery> = if stdout {
                Box::new(StdoutDelivery)
            } else {
                Box::new(FileDelivery::new(
                    out_dir.unwrap_or(settings.out_dir),
                    overwrite || settings.overwrite,
                ))
            };

            let notifier = ConsoleNotifier;
            let pipeline = Pipeline::new(delivery.as_ref(), &notifier);
            // The notifier has already told the user what went wrong.
            let Ok(saved) = pipeline.run(&url, &source) else {
                std::process::exit(1);
            };

            if print_record {
                println!("{}", serde_json::to_string_pretty(&saved.record)?);
            }
            Ok(())
        }
        Commands::Detect { url } => match parser::detect::detect(&url) {
            Ok(platform) => {
                println!("{}", platform);
                Ok(())
            }
            Err(e) => {
                eprintln!("{}", e.user_message());
                std::process::exit(1);
            }
        },
    }
}
