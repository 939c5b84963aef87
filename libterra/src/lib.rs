//! # libterra
//!
//!
//! This library provides datatypes and i/o functionality for terrain label maps:
//! single-channel rasters that classify every pixel of a color map image into a
//! small set of terrain categories (meadow, forest, food, water).
//!
//! Label maps are stored as 8-bit indexed bitmaps (BMP), one label byte per pixel,
//! so downstream consumers can read them back as plain `u8` grids without carrying
//! a color palette around.
//!
//! ### Usage
//!
//! The primary use case for this library is classifying a color map image into a
//! [`LabelGrid`] and persisting it as a label bitmap.
//!
//! ```no_run
//! use libterra::Classifier;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let img = image::open("meadow_map.png")?;
//!     let grid = Classifier::builder().build().classify(&img);
//!     grid.into_file("meadow_map.bmp")?;
//!     Ok(())
//! }
//! ```
//!
//! Reading a label bitmap back works the same way in reverse:
//!
//! ```no_run
//! use libterra::{LabelGrid, Terrain};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let grid = LabelGrid::from_file("meadow_map.bmp")?;
//!     assert_eq!(grid.get(0, 0), Some(Terrain::Meadow));
//!     Ok(())
//! }
//! ```
//!
//! The second, smaller job of this crate is [`convert::reencode`], which decodes
//! an image, normalizes it to RGB, and re-encodes it into the container format
//! implied by the output path's extension. No pixel values are altered beyond
//! dropping alpha.

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    missing_docs
)]

mod error;

/// Module containing the color classifier
pub mod classify;
/// Module containing the image format re-encoder
pub mod convert;
/// Module containing the label grid and its bitmap i/o
pub mod grid;
/// Module containing the terrain palette
pub mod terrain;

pub use classify::{Classifier, Preview};
pub use error::Error;
pub use grid::LabelGrid;
pub use terrain::Terrain;
