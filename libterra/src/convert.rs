use crate::error::Error;
use image::{DynamicImage, ImageReader};
use std::path::Path;
use tracing::{debug, info};

/// Decodes `input` and re-encodes it into the container format implied by
/// `output`'s extension
///
/// The input format is guessed from the file content. The image is normalized
/// to 8-bit RGB before saving (alpha is dropped); no other pixel values are
/// altered.
///
/// # Errors
///
/// Returns [`Error::Io`] if the input cannot be opened, [`Error::Decode`] if it
/// cannot be decoded, and [`Error::Encode`] if the output cannot be written or
/// its extension does not name a supported format. No output file is created on
/// decode failure.
pub fn reencode(input: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<(), Error> {
    let (input, output) = (input.as_ref(), output.as_ref());
    let img = ImageReader::open(input)?
        .with_guessed_format()?
        .decode()
        .map_err(Error::Decode)?;
    debug!(
        "decoded {}x{} image from {}",
        img.width(),
        img.height(),
        input.display()
    );
    let rgb = DynamicImage::ImageRgb8(img.into_rgb8());
    rgb.save(output).map_err(Error::Encode)?;
    info!("re-encoded image written to {}", output.display());
    Ok(())
}
