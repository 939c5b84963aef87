use crate::{grid::LabelGrid, terrain::Terrain};
use bon::Builder;
use image::DynamicImage;
use tracing::debug;

/// Render hook invoked with a finished [`LabelGrid`] for visual inspection
///
/// The classifier calls this synchronously, once per classification, before
/// the grid is returned. Implementations decide how (or whether) to display
/// anything; classification output never depends on it.
pub trait Preview {
    /// Displays the grid
    fn show(&self, grid: &LabelGrid);
}

/// Classifies color map images into terrain [`LabelGrid`]s
///
/// Classification matches each pixel bit-exactly against the fixed
/// [`PALETTE`](crate::terrain::PALETTE), first match wins, with
/// [`Terrain::Meadow`] as the fallback.
#[derive(Builder)]
pub struct Classifier<'a> {
    /// Optional preview hook, invoked with the finished grid
    preview: Option<&'a dyn Preview>,
}

impl Classifier<'_> {
    /// Classifies a source image into a [`LabelGrid`] of the same dimensions
    ///
    /// The image is normalized to 8-bit RGB first; alpha channels and other
    /// color modes are converted away before matching.
    #[must_use]
    pub fn classify(&self, img: &DynamicImage) -> LabelGrid {
        let rgb = img.to_rgb8();
        let (width, height) = rgb.dimensions();
        let labels = rgb
            .pixels()
            .map(|p| Terrain::classify(p.0).label())
            .collect();
        let grid = LabelGrid::from_raw(width, height, labels);
        debug!("classified {width}x{height} source image");
        if let Some(preview) = self.preview {
            preview.show(&grid);
        }
        grid
    }
}
