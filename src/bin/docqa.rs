//! CLI binary for docqa.
//!
//! A thin shim over the library crate that maps CLI flags to `QaConfig`
//! and prints the answer.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use docqa::{answer_from_image, answer_from_pdf, logging, LogConfig, QaConfig};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "docqa",
    version,
    about = "Ask questions about a PDF or an image using local Ollama models"
)]
struct Cli {
    /// Base URL of the local Ollama server.
    #[arg(long, env = "OLLAMA_BASE_URL", default_value = docqa::DEFAULT_BASE_URL, global = true)]
    base_url: String,

    /// Model identifier for PDF questions.
    #[arg(long, env = "DOCQA_PDF_MODEL", default_value = docqa::DEFAULT_PDF_MODEL, global = true)]
    pdf_model: String,

    /// Model identifier for image questions.
    #[arg(long, env = "DOCQA_IMAGE_MODEL", default_value = docqa::DEFAULT_IMAGE_MODEL, global = true)]
    image_model: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Answer a question about a PDF document.
    Pdf {
        /// Path to the PDF file.
        file: PathBuf,
        /// Question about the document.
        question: String,
    },
    /// Answer a question about an image (PNG or JPEG).
    Image {
        /// Path to the image file.
        file: PathBuf,
        /// Question about the image.
        question: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(&LogConfig::from_env()).context("failed to set up logging")?;
    tracing::info!("Application started.");

    let config = QaConfig::builder()
        .base_url(&cli.base_url)
        .pdf_model(&cli.pdf_model)
        .image_model(&cli.image_model)
        .build()
        .context("invalid configuration")?;

    let answer = match cli.command {
        Command::Pdf { file, question } => answer_from_pdf(&file, &question, &config).await,
        Command::Image { file, question } => {
            let img = image::open(&file)
                .with_context(|| format!("failed to open image '{}'", file.display()))?
                .to_rgb8();
            answer_from_image(&img, &question, &config).await
        }
    };

    println!("{answer}");
    Ok(())
}
