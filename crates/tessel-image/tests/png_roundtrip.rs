use tessel_core::Vec3;
use tessel_image::{Image, ImageCodec, ImageError, PngCodec};
use tessel_test_utils::gradient_image;

#[test]
fn png_encode_then_decode_preserves_pixels() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gradient.png");
    let source = gradient_image(5, 4);

    PngCodec.encode(&path, &source, false).unwrap();
    let decoded = PngCodec.decode(&path, false).unwrap();
    assert_eq!(decoded, source);
}

#[test]
fn png_flip_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("flipped.png");
    let source = gradient_image(3, 3);

    PngCodec.encode(&path, &source, true).unwrap();
    let mut stored = PngCodec.decode(&path, false).unwrap();
    stored.flip_vertical();
    assert_eq!(stored, source);
    assert_eq!(PngCodec.decode(&path, true).unwrap(), source);
}

#[test]
fn image_save_and_open() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("image.png");

    let mut image = Image::with_size(2, 2);
    image[(0, 0)] = Vec3::new(1.0, 0.0, 0.0);
    image[(1, 1)] = Vec3::new(0.0, 1.0, 0.0);
    image.save(&path).unwrap();

    let reopened = Image::open(&path, false).unwrap();
    assert_eq!(reopened, image);
}

#[test]
fn opening_missing_png_fails_with_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.png");
    let err = Image::open(&path, false).unwrap_err();
    assert!(matches!(err, ImageError::Load { .. }));
    assert_eq!(err.path(), Some(path.as_path()));
}

#[test]
fn png_encode_rejects_malformed_buffer() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.png");
    let mut pixels = gradient_image(2, 2);
    pixels.data.pop();
    let err = PngCodec.encode(&path, &pixels, false).unwrap_err();
    assert!(matches!(err, ImageError::Malformed { .. }));
}
