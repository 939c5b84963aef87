use std::fs;

use image::{DynamicImage, Rgb, RgbImage, Rgba, RgbaImage};
use libterra::{convert, Classifier, LabelGrid};
use mktemp::Temp;

/// 2x2 map covering all three palette colors plus an unclassified pixel
fn sample_map() -> RgbImage {
    let mut img = RgbImage::new(2, 2);
    img.put_pixel(0, 0, Rgb([0, 80, 0]));
    img.put_pixel(1, 0, Rgb([255, 50, 0]));
    img.put_pixel(0, 1, Rgb([0, 90, 255]));
    img.put_pixel(1, 1, Rgb([10, 10, 10]));
    img
}

#[test]
fn classify_and_reload_label_bitmap() -> anyhow::Result<()> {
    let img = DynamicImage::ImageRgb8(sample_map());
    let grid = Classifier::builder().build().classify(&img);
    assert_eq!(grid.labels(), &[1, 2, 3, 0]);

    let tmp_bmp = Temp::new_file()?;
    grid.clone().into_file(&tmp_bmp)?;

    let reloaded = LabelGrid::from_file(&tmp_bmp)?;
    assert_eq!(grid, reloaded);
    Ok(())
}

#[test]
fn classification_output_is_deterministic() -> anyhow::Result<()> {
    let img = DynamicImage::ImageRgb8(sample_map());
    let classifier = Classifier::builder().build();

    let tmp_a = Temp::new_file()?;
    let tmp_b = Temp::new_file()?;
    classifier.classify(&img).into_file(&tmp_a)?;
    classifier.classify(&img).into_file(&tmp_b)?;

    // byte-identical output files across runs
    let hash_a = sha256::try_digest(&tmp_a)?;
    let hash_b = sha256::try_digest(&tmp_b)?;
    assert_eq!(hash_a, hash_b);
    Ok(())
}

#[test]
fn classifying_a_decoded_source_image_from_disk() -> anyhow::Result<()> {
    let dir = Temp::new_dir()?;
    let src = dir.join("map.png");
    sample_map().save(&src)?;

    let img = image::open(&src)?;
    let grid = Classifier::builder().build().classify(&img);
    assert_eq!((grid.width(), grid.height()), (2, 2));
    assert_eq!(grid.labels(), &[1, 2, 3, 0]);
    Ok(())
}

#[test]
fn reencode_round_trip_preserves_pixels() -> anyhow::Result<()> {
    let dir = Temp::new_dir()?;
    let src = dir.join("map.png");
    let out = dir.join("map.bmp");
    let img = sample_map();
    img.save(&src)?;

    convert::reencode(&src, &out)?;

    let round = image::open(&out)?.into_rgb8();
    assert_eq!(img, round);
    Ok(())
}

#[test]
fn reencode_normalizes_alpha_to_rgb() -> anyhow::Result<()> {
    let dir = Temp::new_dir()?;
    let src = dir.join("map.png");
    let out = dir.join("map_rgb.png");

    let mut rgba = RgbaImage::new(2, 1);
    rgba.put_pixel(0, 0, Rgba([0, 80, 0, 128]));
    rgba.put_pixel(1, 0, Rgba([255, 50, 0, 0]));
    rgba.save(&src)?;

    convert::reencode(&src, &out)?;

    let round = image::open(&out)?;
    let rgb = round.as_rgb8().expect("output should be plain RGB");
    assert_eq!(rgb.get_pixel(0, 0), &Rgb([0, 80, 0]));
    assert_eq!(rgb.get_pixel(1, 0), &Rgb([255, 50, 0]));
    Ok(())
}

#[test]
fn unsupported_input_creates_no_output() -> anyhow::Result<()> {
    let dir = Temp::new_dir()?;
    let src = dir.join("not_an_image.txt");
    let out = dir.join("out.png");
    fs::write(&src, "definitely not raster data")?;

    assert!(convert::reencode(&src, &out).is_err());
    assert!(!out.exists());
    Ok(())
}

#[test]
fn missing_input_creates_no_output() -> anyhow::Result<()> {
    let dir = Temp::new_dir()?;
    let src = dir.join("does_not_exist.png");
    let out = dir.join("out.png");

    assert!(convert::reencode(&src, &out).is_err());
    assert!(!out.exists());
    Ok(())
}
