use std::path::PathBuf;
use terramap::{classify_image, reencode_image, Preview, TerminalPreview};
use tracing::{info, Level};

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};

#[cfg(not(debug_assertions))]
const DEFAULT_DEBUG_LEVEL: u8 = 1;
#[cfg(debug_assertions)]
const DEFAULT_DEBUG_LEVEL: u8 = 99;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Turn debugging information on
    #[arg(short, long, default_value_t = DEFAULT_DEBUG_LEVEL, action = clap::ArgAction::Count)]
    verbosity: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// classifies a color map image into a terrain label bitmap
    #[command(name = "classify")]
    ImageToLabels {
        /// The source map image
        img_file: PathBuf,

        /// The output file name
        output: Option<PathBuf>,

        /// Render the label grid in the terminal after classification
        #[arg(short, long)]
        preview: bool,
    },

    /// re-encodes an image into the container format implied by the output extension
    #[command(name = "convert")]
    Reencode {
        /// The source image
        img_file: PathBuf,

        /// The output file name
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let level = match cli.verbosity {
        0 => Level::ERROR,
        1 => Level::WARN,
        2 => Level::INFO,
        3 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_file(true)
        .with_line_number(true)
        .init();

    match cli.command {
        Commands::ImageToLabels {
            img_file,
            output,
            preview,
        } => {
            let output = match output {
                Some(o) => o,
                None => {
                    let mut output = PathBuf::new();
                    let Some(dir) = img_file.parent() else {
                        bail!("Invalid img file");
                    };
                    let Some(Some(filename)) = img_file.file_stem().map(|os| os.to_str()) else {
                        bail!("Invalid img file");
                    };
                    let suffix = "bmp";
                    output.push(dir);
                    output.push(format!("{}.{}", filename, suffix));
                    info!("output name: {}", output.display());
                    output
                }
            };
            let terminal = TerminalPreview;
            let preview = preview.then_some(&terminal as &dyn Preview);
            classify_image(&img_file, &output, preview)?;
        }
        Commands::Reencode { img_file, output } => {
            reencode_image(&img_file, &output)?;
        }
    }
    Ok(())
}
