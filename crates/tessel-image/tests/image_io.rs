use std::path::{Path, PathBuf};

use tessel_core::Vec3;
use tessel_image::{Image, ImageError, RawPixels};
use tessel_test_utils::{gradient_image, MockCodec};

#[test]
fn read_converts_bytes_to_unit_floats() {
    let codec = MockCodec::new();
    codec.insert(
        "in.png",
        RawPixels::new(2, 1, vec![0, 51, 255, 255, 0, 102]),
    );
    let image = Image::read("in.png", false, &codec).unwrap();
    assert_eq!((image.height(), image.width()), (1, 2));
    assert_eq!(image[(0, 0)], Vec3::new(0.0, 0.2, 1.0));
    assert_eq!(image[(0, 1)], Vec3::new(1.0, 0.0, 0.4));
    assert!(!image.is_flipped());
}

#[test]
fn missing_file_reports_path() {
    let codec = MockCodec::new();
    let err = Image::read("nope.png", false, &codec).unwrap_err();
    assert!(matches!(err, ImageError::Load { .. }));
    assert_eq!(err.path(), Some(Path::new("nope.png")));
    assert!(err.to_string().contains("nope.png"));
}

#[test]
fn failed_load_leaves_image_unchanged() {
    let codec = MockCodec::new();
    codec.insert("a.png", gradient_image(2, 2));
    let mut image = Image::read("a.png", true, &codec).unwrap();
    let before = image.clone();
    assert!(image.load("missing.png", false, &codec).is_err());
    assert_eq!(image, before);
    assert!(image.is_flipped());
}

#[test]
fn malformed_buffer_is_rejected() {
    let codec = MockCodec::new();
    codec.insert("bad.png", RawPixels::new(2, 2, vec![0; 5]));
    let err = Image::read("bad.png", false, &codec).unwrap_err();
    assert_eq!(
        err,
        ImageError::Malformed {
            expected: 12,
            actual: 5
        }
    );
}

#[test]
fn load_reshapes_existing_image() {
    let codec = MockCodec::new();
    codec.insert("small.png", gradient_image(2, 3));
    let mut image = Image::with_size(10, 10);
    image.load("small.png", false, &codec).unwrap();
    assert_eq!((image.height(), image.width()), (2, 3));
    assert!(image.pixels().rows().all(|r| r.len() == 3));
}

#[test]
fn write_roundtrips_bytes() {
    let codec = MockCodec::new();
    let source = gradient_image(4, 3);
    codec.insert("in.png", source.clone());
    let image = Image::read("in.png", false, &codec).unwrap();
    image.write("out.png", &codec).unwrap();
    assert_eq!(codec.file("out.png"), Some(source));
}

#[test]
fn flip_on_load_is_mirrored_on_write() {
    let codec = MockCodec::new();
    let source = gradient_image(3, 2);
    codec.insert("in.png", source.clone());

    let image = Image::read("in.png", true, &codec).unwrap();
    assert!(image.is_flipped());
    // Bottom file row (red = 255) is now row 0.
    assert_eq!(image[(0, 0)].x, 1.0);
    assert_eq!(image[(2, 0)].x, 0.0);

    image.write("out.png", &codec).unwrap();
    assert_eq!(codec.writes(), vec![(PathBuf::from("out.png"), true)]);
    assert_eq!(codec.file("out.png"), Some(source));
}

#[test]
fn write_clamps_out_of_range_channels() {
    let codec = MockCodec::new();
    let mut image = Image::with_size(1, 1);
    image[(0, 0)] = Vec3::new(-1.0, 2.0, 0.5);
    image.write("clamped.png", &codec).unwrap();
    assert_eq!(codec.file("clamped.png").unwrap().data, vec![0, 255, 128]);
}

#[test]
fn save_failure_is_surfaced() {
    let codec = MockCodec::new();
    codec.fail_saves_to("locked.png");
    let err = Image::with_size(1, 1)
        .write("locked.png", &codec)
        .unwrap_err();
    assert!(matches!(err, ImageError::Save { .. }));
    assert!(codec.writes().is_empty());
}

#[test]
fn codec_can_be_used_as_trait_object() {
    let codec = MockCodec::new();
    codec.insert("dyn.png", gradient_image(1, 1));
    let dyn_codec: &dyn tessel_image::ImageCodec = &codec;
    let image = Image::read("dyn.png", false, dyn_codec).unwrap();
    assert_eq!(image.width(), 1);
}
