use std::path::Path;

use anyhow::{Context, Result};
use libterra::{convert, Classifier, LabelGrid};
use tracing::{debug, info, instrument};

pub use libterra::Preview;

#[instrument(skip(preview))]
pub fn classify_image(
    img_file: &Path,
    output_name: &Path,
    preview: Option<&dyn Preview>,
) -> Result<()> {
    let img = image::open(img_file)
        .with_context(|| format!("failed to decode {}", img_file.display()))?;
    debug!("decoded {}x{} source image", img.width(), img.height());

    let grid = Classifier::builder()
        .maybe_preview(preview)
        .build()
        .classify(&img);

    info!("writing label bitmap to {}", output_name.display());
    grid.into_file(output_name)?;
    info!(
        "Successfully wrote label bitmap to {}",
        output_name.display()
    );
    Ok(())
}

#[instrument]
pub fn reencode_image(img_file: &Path, output_name: &Path) -> Result<()> {
    convert::reencode(img_file, output_name)?;
    info!(
        "Successfully re-encoded {} to {}",
        img_file.display(),
        output_name.display()
    );
    Ok(())
}

/// Renders a label grid as terrain glyphs on stdout, one row per line
///
/// meadow `.`, forest `^`, food `#`, water `~`
pub struct TerminalPreview;

const GLYPHS: [char; 4] = ['.', '^', '#', '~'];

impl Preview for TerminalPreview {
    fn show(&self, grid: &LabelGrid) {
        let mut rendered =
            String::with_capacity((grid.width() as usize + 1) * grid.height() as usize);
        for y in 0..grid.height() {
            if let Some(row) = grid.row(y) {
                rendered.extend(
                    row.iter()
                        .map(|&l| GLYPHS.get(l as usize).copied().unwrap_or(' ')),
                );
            }
            rendered.push('\n');
        }
        print!("{rendered}");
    }
}
