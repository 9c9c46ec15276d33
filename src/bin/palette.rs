//! Command-line interface for pixel_palette
//!
//! Extracts a palette from an image file and prints it as text or JSON.

use anyhow::{bail, Result};
use clap::Parser;
use std::path::PathBuf;

use pixel_palette::{constants, extract_palette, image_loader};

#[derive(Parser)]
#[command(name = "palette", about = "Extract a color palette from an image")]
struct Args {
    /// Image file (PNG, JPG, or WEBP)
    image: PathBuf,

    /// Number of swatches to extract (clamped to 3-12)
    #[arg(short, long, default_value_t = constants::palette::DEFAULT_SWATCH_COUNT)]
    count: usize,

    /// Print the palette as a JSON array
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(ext) = args.image.extension().and_then(|e| e.to_str()) {
        if !image_loader::is_supported_extension(ext) {
            bail!(
                "Unsupported file type \".{}\". Supported: {}",
                ext,
                image_loader::supported_extensions().join(", ")
            );
        }
    }

    match extract_palette(&args.image, args.count) {
        Ok(palette) => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(&palette)?);
            } else {
                for swatch in &palette {
                    let [r, g, b] = swatch.rgb();
                    println!("{}  rgb({}, {}, {})", swatch.hex(), r, g, b);
                }
            }
            Ok(())
        }
        Err(error) => {
            eprintln!("Extraction failed: {}", error);
            eprintln!("Suggestion: {}", error.user_message());
            std::process::exit(1);
        }
    }
}
