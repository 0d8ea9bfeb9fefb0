//! Generate a random-colour image, save it as PNG, load it back flipped and
//! save it again, timing each step.
//!
//! Usage: `cargo run --example noise_image -- [output_dir]`
//! Set `TESSEL_SEED` for a reproducible image and `RUST_LOG=debug` for logs.

use std::error::Error;
use std::path::PathBuf;

use tessel_image::Image;
use tessel_support::{random, to_bits, Timer};
use tracing::info;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let out_dir = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(std::env::temp_dir);

    let mut timer = Timer::new();

    let height = random::integer(32usize, 128);
    let width = random::integer(32usize, 128);
    let mut image = Image::with_size(height, width);
    random::with_shared(|sampler| {
        for pixel in image.pixels_mut().cells_mut() {
            *pixel = sampler.real3_uniform(0.0, 1.0);
        }
    });
    info!(height, width, elapsed = timer.elapsed_time(), "generated");

    let original = out_dir.join("tessel_noise.png");
    image.save(&original)?;
    info!(path = %original.display(), elapsed = timer.elapsed_time(), "saved");

    timer.pause();
    let flipped = Image::open(&original, true)?;
    timer.unpause();
    let copy = out_dir.join("tessel_noise_copy.png");
    flipped.save(&copy)?;

    println!("wrote {} and {}", original.display(), copy.display());
    println!("first red channel bits: {}", to_bits(flipped[(0, 0)].x));
    println!("elapsed (excluding reload): {:.3}s", timer.elapsed_time());
    Ok(())
}
