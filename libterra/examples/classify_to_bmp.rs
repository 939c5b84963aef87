//! Classifies a color map image into a terrain label bitmap.
//!
//! Usage: `cargo run --example classify_to_bmp <input> <output>`

use libterra::Classifier;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let input = args.next().ok_or("missing input path")?;
    let output = args.next().ok_or("missing output path")?;

    let img = image::open(input)?;
    let grid = Classifier::builder().build().classify(&img);
    grid.into_file(output)?;
    Ok(())
}
