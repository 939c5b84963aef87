use thiserror::Error;

#[derive(Error, Debug)]
#[non_exhaustive]
/// Possible `libterra` errors
pub enum Error {
    /// Error returned if the source image cannot be decoded
    #[error("failed to decode source image")]
    Decode(#[source] image::ImageError),
    /// Error returned if the output image cannot be encoded
    #[error("failed to encode output image")]
    Encode(#[source] image::ImageError),
    /// Error returned for underlying i/o failures (missing or unreadable files)
    #[error("i/o error")]
    Io(#[from] std::io::Error),
    /// Error returned if a label buffer does not match the grid
    /// width/height it was built for
    #[error("label buffer length {label_count} does not match a {width}x{height} grid")]
    MismatchDimensions {
        /// grid width
        width: u32,
        /// grid height
        height: u32,
        /// length of the provided label buffer
        label_count: usize,
    },
    /// Error returned if a stored label value falls outside the terrain range
    #[error("label {value} does not map to a terrain class")]
    InvalidLabel {
        /// the offending label value
        value: u8,
    },
}
