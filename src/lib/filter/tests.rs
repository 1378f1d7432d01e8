//! Tests for the filter bank.

use image::{Rgb, RgbImage};
use rand::{self, RngCore, SeedableRng};
use rand::rngs::StdRng;
use spectral::prelude::*;

use super::{apply, apply_with_rng, fade, gaussian_kernel, luma, sepia, Filter, FilterError};


/// Image with a horizontal gradient in red and a vertical one in green.
fn gradient(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x * 255 / width) as u8, (y * 255 / height) as u8, 0x40])
    })
}

/// Source of "randomness" that only ever yields zeroes.
struct Zeroes;

impl RngCore for Zeroes {
    fn next_u32(&mut self) -> u32 { 0 }
    fn next_u64(&mut self) -> u64 { 0 }
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for b in dest.iter_mut() {
            *b = 0;
        }
    }
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}


#[test]
fn parse_english_names() {
    assert_that!("grayscale".parse::<Filter>()).is_ok().is_equal_to(Filter::Grayscale);
    assert_that!("BLUR".parse::<Filter>()).is_ok().is_equal_to(Filter::Blur);
    assert_that!("Edge Detect".parse::<Filter>()).is_ok().is_equal_to(Filter::EdgeDetect);
    assert_that!("edge-detect".parse::<Filter>()).is_ok().is_equal_to(Filter::EdgeDetect);
    assert_that!(" vintage ".parse::<Filter>()).is_ok().is_equal_to(Filter::Vintage);
}

#[test]
fn parse_labels() {
    for filter in Filter::iter_variants() {
        assert_that!(filter.label().parse::<Filter>()).is_ok().is_equal_to(filter);
    }
    assert_that!("виділення країв".parse::<Filter>()).is_ok().is_equal_to(Filter::EdgeDetect);
}

#[test]
fn parse_unknown() {
    assert_that!("Flarp".parse::<Filter>())
        .is_err().is_equal_to(FilterError::Unknown("Flarp".into()));
    assert_that!("".parse::<Filter>()).is_err();
}

#[test]
fn dimensions_preserved() {
    let img = gradient(23, 17);
    let mut rng = StdRng::seed_from_u64(42);
    for filter in Filter::iter_variants() {
        let result = apply_with_rng(&img, filter, &mut rng).unwrap();
        assert_eq!(img.dimensions(), result.dimensions(), "filter {} changed size", filter);
    }
}

#[test]
fn empty_image() {
    for filter in Filter::iter_variants() {
        assert_that!(apply(&RgbImage::new(0, 5), filter))
            .is_err().is_equal_to(FilterError::EmptyImage);
    }
}

#[test]
fn invert_twice_is_identity() {
    let img = gradient(16, 16);
    let once = apply(&img, Filter::Invert).unwrap();
    assert_ne!(img, once);
    assert_eq!(Rgb([0xff - img[(3, 4)][0], 0xff - img[(3, 4)][1], 0xff - 0x40]), once[(3, 4)]);
    assert_eq!(img, apply(&once, Filter::Invert).unwrap());
}

#[test]
fn grayscale_channels_equal() {
    let result = apply(&gradient(10, 10), Filter::Grayscale).unwrap();
    assert!(result.pixels().all(|p| p[0] == p[1] && p[1] == p[2]));
}

#[test]
fn grayscale_luma_weights() {
    assert_eq!(76, luma(Rgb([0xff, 0, 0]))[0]);
    assert_eq!(150, luma(Rgb([0, 0xff, 0]))[0]);
    assert_eq!(29, luma(Rgb([0, 0, 0xff]))[0]);
    assert_eq!(0xff, luma(Rgb([0xff, 0xff, 0xff]))[0]);

    let img = RgbImage::from_pixel(3, 3, Rgb([0xff, 0, 0]));
    let result = apply(&img, Filter::Grayscale).unwrap();
    assert!(result.pixels().all(|p| *p == Rgb([76, 76, 76])));
}

#[test]
fn edge_detect_is_binary() {
    let mut img = RgbImage::from_pixel(20, 20, Rgb([0, 0, 0]));
    for y in 0..20 {
        for x in 10..20 {
            img.put_pixel(x, y, Rgb([0xff, 0xff, 0xff]));
        }
    }
    let result = apply(&img, Filter::EdgeDetect).unwrap();
    assert!(result.pixels().all(|p| p[0] == p[1] && p[1] == p[2] && (p[0] == 0 || p[0] == 0xff)));
    assert!(result.pixels().any(|p| p[0] == 0xff));
}

#[test]
fn blur_keeps_flat_image() {
    let img = RgbImage::from_pixel(20, 20, Rgb([100, 150, 200]));
    let result = apply(&img, Filter::Blur).unwrap();
    for p in result.pixels() {
        for (&actual, &expected) in p.0.iter().zip(&[100u8, 150, 200]) {
            assert!((actual as i32 - expected as i32).abs() <= 1);
        }
    }
}

#[test]
fn sharpen_keeps_flat_image() {
    let img = RgbImage::from_pixel(8, 8, Rgb([10, 20, 30]));
    assert_eq!(img, apply(&img, Filter::Sharpen).unwrap());
}

#[test]
fn sepia_clamps() {
    assert_eq!(Rgb([0xff, 0xff, 0xef]), sepia(Rgb([0xff, 0xff, 0xff])));
    assert_eq!(Rgb([0, 0, 0]), sepia(Rgb([0, 0, 0])));
    assert_eq!(Rgb([100, 89, 69]), sepia(Rgb([0, 0xff / 2 + 3, 0])));
}

#[test]
fn sepia_weighs_blue_most() {
    assert_eq!(Rgb([19, 17, 13]), sepia(Rgb([100, 0, 0])));
    assert_eq!(Rgb([39, 35, 27]), sepia(Rgb([0, 0, 100])));
}

#[test]
fn vintage_is_deterministic_with_seeded_rng() {
    let img = gradient(12, 9);
    let first = apply_with_rng(&img, Filter::Vintage, &mut StdRng::seed_from_u64(7)).unwrap();
    let second = apply_with_rng(&img, Filter::Vintage, &mut StdRng::seed_from_u64(7)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn vintage_fades_colors() {
    // Pure blue (hue 240, full saturation) becomes hue 192 at 60% saturation.
    let img = RgbImage::from_pixel(6, 6, Rgb([0, 0, 0xff]));
    let faded = fade(&img, &mut Zeroes);
    assert!(faded.pixels().all(|p| *p == Rgb([102, 224, 255])));

    let result = apply_with_rng(&img, Filter::Vintage, &mut Zeroes).unwrap();
    for p in result.pixels() {
        for (&actual, &expected) in p.0.iter().zip(&[102u8, 224, 255]) {
            assert!((actual as i32 - expected as i32).abs() <= 1);
        }
    }
}

#[test]
fn vintage_noise_is_bounded() {
    let img = RgbImage::from_pixel(16, 16, Rgb([0xc0, 0x20, 0x20]));
    let base = fade(&img, &mut Zeroes);
    let noisy = fade(&img, &mut StdRng::seed_from_u64(11));
    assert_ne!(base, noisy);
    for (b, n) in base.pixels().zip(noisy.pixels()) {
        for (&b, &n) in b.0.iter().zip(&n.0) {
            assert!(n >= b, "noise made a channel darker: {} < {}", n, b);
            assert!((n as u32) < b as u32 + 50, "noise out of range: {} vs {}", n, b);
        }
    }
}

#[test]
fn kernel_is_normalized() {
    for &size in &[3, 15] {
        let kernel = gaussian_kernel(size);
        assert_eq!(size, kernel.len());
        let sum: f32 = kernel.iter().sum();
        assert!((sum - 1.0).abs() < 1e-5);
        assert!(kernel[size / 2] > kernel[0]);
    }
}
