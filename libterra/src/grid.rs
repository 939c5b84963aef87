use crate::{error::Error, terrain::Terrain};
use image::{codecs::bmp::BmpEncoder, ExtendedColorType, ImageReader};
use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Seek, Write},
    path::Path,
};
use tracing::{debug, info};

/// Single-channel raster classifying each source pixel into a terrain label
///
/// Labels are stored row-major, one byte per pixel, and always hold a valid
/// [`Terrain`] discriminant. Dimensions always equal the source image the grid
/// was classified from.
#[derive(Debug, Clone, Eq, PartialEq, PartialOrd, Ord)]
pub struct LabelGrid {
    /// The width of the grid
    width: u32,
    /// The height of the grid
    height: u32,
    /// Terrain labels, row-major
    labels: Vec<u8>,
}

impl LabelGrid {
    /// Creates a new [`LabelGrid`] from a raw label buffer
    ///
    /// # Errors
    ///
    /// Returns [`Error::MismatchDimensions`] if the buffer length is not
    /// `width * height`, and [`Error::InvalidLabel`] if any value does not map
    /// to a [`Terrain`] class.
    pub fn new(width: u32, height: u32, labels: Vec<u8>) -> Result<Self, Error> {
        if labels.len() != width as usize * height as usize {
            return Err(Error::MismatchDimensions {
                width,
                height,
                label_count: labels.len(),
            });
        }
        if let Some(&value) = labels.iter().find(|&&l| Terrain::from_repr(l).is_none()) {
            return Err(Error::InvalidLabel { value });
        }
        Ok(Self {
            width,
            height,
            labels,
        })
    }

    /// Internal constructor for buffers the classifier already validated
    pub(crate) fn from_raw(width: u32, height: u32, labels: Vec<u8>) -> Self {
        debug_assert_eq!(width as usize * height as usize, labels.len());
        Self {
            width,
            height,
            labels,
        }
    }

    /// Creates an all-[`Terrain::Meadow`] grid
    #[must_use]
    pub fn empty(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            labels: vec![0; width as usize * height as usize],
        }
    }

    /// Returns the width of the grid
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Returns the height of the grid
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Returns the raw label values of the grid
    #[must_use]
    pub fn labels(&self) -> &[u8] {
        &self.labels
    }

    /// Returns the terrain at `(x, y)`, or [`None`] outside the grid
    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> Option<Terrain> {
        if x < self.width && y < self.height {
            Terrain::from_repr(self.labels[(y * self.width + x) as usize])
        } else {
            None
        }
    }

    /// Returns an entire row of labels, or [`None`] outside the grid
    #[must_use]
    pub fn row(&self, y: u32) -> Option<&[u8]> {
        if y < self.height {
            let start = y as usize * self.width as usize;
            Some(&self.labels[start..start + self.width as usize])
        } else {
            None
        }
    }

    /// Returns an iterator over the representative colors of the labels
    /// (defined by [`Terrain::color`]), row-major
    pub fn as_color_iter(&self) -> impl Iterator<Item = [u8; 3]> + '_ {
        self.labels
            .iter()
            .map(|&l| Terrain::from_repr(l).unwrap_or(Terrain::Meadow).color())
    }

    /// Tries to read a [`Self`] from a buffer holding an encoded label bitmap
    ///
    /// Any format the codec can decode to 8-bit grayscale is accepted; the
    /// grayscale value of each pixel is taken as its label.
    ///
    /// # Errors
    ///
    /// This function errors if the buffer cannot be decoded, or if any decoded
    /// value does not map to a [`Terrain`] class.
    pub fn from_reader(r: impl BufRead + Seek) -> Result<Self, Error> {
        let img = ImageReader::new(r)
            .with_guessed_format()?
            .decode()
            .map_err(Error::Decode)?;
        let luma = img.into_luma8();
        let (width, height) = luma.dimensions();
        debug!("decoded {width}x{height} label bitmap");
        Self::new(width, height, luma.into_raw())
    }

    /// Tries to read [`Self`] from a provided file path
    ///
    /// # Errors
    ///
    /// This function will error if the file cannot be opened or if it contains
    /// invalid data. See [`Self::from_reader`] for potential errors
    pub fn from_file<P: AsRef<Path>>(filename: P) -> Result<Self, Error> {
        let file = File::open(filename)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Encodes the grid as an 8-bit indexed bitmap into the provided writer
    ///
    /// Labels are written one byte per pixel with a grayscale palette, so the
    /// file decodes back to the same label values.
    ///
    /// # Errors
    ///
    /// This will error if the underlying writer fails
    pub fn write_to(&self, w: &mut (impl Write + Seek)) -> Result<(), Error> {
        BmpEncoder::new(w)
            .encode(&self.labels, self.width, self.height, ExtendedColorType::L8)
            .map_err(Error::Encode)
    }

    /// Attempts to encode and save [`Self`] as a bitmap file at the provided path
    ///
    /// # Errors
    ///
    /// This will error if unable to open and/or write to the provided filename
    pub fn into_file(self, filename: impl AsRef<Path>) -> Result<(), Error> {
        let f = File::options()
            .create(true)
            .write(true)
            .truncate(true)
            .open(filename)?;
        let mut f = BufWriter::new(f);
        self.write_to(&mut f)?;
        f.flush()?;
        info!("Finished writing label bitmap to file");
        Ok(())
    }
}
