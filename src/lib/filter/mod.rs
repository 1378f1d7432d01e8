//! Module implementing the bank of image filters.

#![allow(missing_docs)]  // Because IterVariants! produces undocumented methods.

mod hsv;
#[cfg(test)]
mod tests;


use std::error;
use std::fmt;
use std::str::FromStr;

use image::{imageops, DynamicImage, GrayImage, Luma, Rgb, RgbImage};
use imageproc::{edges, map};
use imageproc::filter::{filter3x3, separable_filter_equal};
use rand::{self, Rng};

use self::hsv::Hsv;


/// Size of the kernel used by the Blur filter.
const BLUR_KERNEL_SIZE: usize = 15;
/// Size of the kernel used to smooth the Vintage filter's noise.
const SMOOTH_KERNEL_SIZE: usize = 3;
/// Kernel of the Sharpen filter.
const SHARPEN_KERNEL: [i32; 9] = [-1, -1, -1,
                                  -1,  9, -1,
                                  -1, -1, -1];
/// Rows of the sepia color matrix, giving (R, G, B) of the result.
/// Coefficients of the red & blue input channels are deliberately swapped
/// against the textbook matrix.
const SEPIA_MATRIX: [[f32; 3]; 3] = [[0.189, 0.769, 0.393],
                                     [0.168, 0.686, 0.349],
                                     [0.131, 0.534, 0.272]];
/// BT.601 luma weights of the (R, G, B) channels.
const LUMA_WEIGHTS: [f32; 3] = [0.299, 0.587, 0.114];
/// Hysteresis thresholds of the Edge Detect filter.
const CANNY_LOW_THRESHOLD: f32 = 100.0;
const CANNY_HIGH_THRESHOLD: f32 = 200.0;
/// Scaling of HSV components in the Vintage filter.
const VINTAGE_HUE_FACTOR: f32 = 0.8;
const VINTAGE_SATURATION_FACTOR: f32 = 0.6;
/// Exclusive upper bound of the noise added by the Vintage filter.
const VINTAGE_NOISE_MAX: u8 = 50;


macro_attr! {
    /// Filter that can be applied to the whole image.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, IterVariants!(Filters))]
    pub enum Filter {
        Grayscale,
        Blur,
        Sharpen,
        Sepia,
        EdgeDetect,
        Invert,
        Vintage,
    }
}

impl Filter {
    /// English name of the filter.
    pub fn name(&self) -> &'static str {
        match *self {
            Filter::Grayscale => "Grayscale",
            Filter::Blur => "Blur",
            Filter::Sharpen => "Sharpen",
            Filter::Sepia => "Sepia",
            Filter::EdgeDetect => "EdgeDetect",
            Filter::Invert => "Invert",
            Filter::Vintage => "Vintage",
        }
    }

    /// Label of the filter as shown to users.
    pub fn label(&self) -> &'static str {
        match *self {
            Filter::Grayscale => "Чорно-білий",
            Filter::Blur => "Розмиття",
            Filter::Sharpen => "Різкість",
            Filter::Sepia => "Сепія",
            Filter::EdgeDetect => "Виділення країв",
            Filter::Invert => "Негатив",
            Filter::Vintage => "Вінтаж",
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{}", self.name())
    }
}

impl FromStr for Filter {
    type Err = FilterError;

    /// Parse the filter from its English name or its label.
    /// Case, as well as spaces, dashes & underscores in English names, don't matter.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        let compact: String = key.chars()
            .filter(|&c| !(c.is_whitespace() || c == '-' || c == '_'))
            .collect();
        Filter::iter_variants()
            .find(|f| f.name().to_lowercase() == compact || f.label().to_lowercase() == key)
            .ok_or_else(|| FilterError::Unknown(s.to_owned()))
    }
}


/// Apply the filter to given image, returning a new image of the same size.
#[inline]
pub fn apply(img: &RgbImage, filter: Filter) -> Result<RgbImage, FilterError> {
    apply_with_rng(img, filter, &mut rand::thread_rng())
}

/// Apply the filter to given image, using the provided source of randomness
/// for filters which need one.
pub fn apply_with_rng<R: Rng + ?Sized>(img: &RgbImage, filter: Filter,
                                       rng: &mut R) -> Result<RgbImage, FilterError> {
    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return Err(FilterError::EmptyImage);
    }
    debug!("Applying filter {} to {}x{} image", filter, width, height);

    let result = match filter {
        Filter::Grayscale => expand_gray(map::map_colors(img, luma)),
        Filter::Blur => gaussian_blur(img, BLUR_KERNEL_SIZE),
        Filter::Sharpen => filter3x3::<_, i32, u8>(img, &SHARPEN_KERNEL),
        Filter::Sepia => map::map_colors(img, sepia),
        Filter::EdgeDetect => {
            let gray: GrayImage = map::map_colors(img, luma);
            expand_gray(edges::canny(&gray, CANNY_LOW_THRESHOLD, CANNY_HIGH_THRESHOLD))
        }
        Filter::Invert => {
            let mut result = img.clone();
            imageops::invert(&mut result);
            result
        }
        Filter::Vintage => vintage(img, rng),
    };

    trace!("Filter {} applied", filter);
    Ok(result)
}


/// Expand a single channel image back to three identical channels.
fn expand_gray(img: GrayImage) -> RgbImage {
    DynamicImage::ImageLuma8(img).into_rgb8()
}

/// Gaussian blur with a square kernel of given size.
/// Sigma is derived from the kernel size.
fn gaussian_blur(img: &RgbImage, kernel_size: usize) -> RgbImage {
    separable_filter_equal(img, &gaussian_kernel(kernel_size))
}

/// Normalized, one dimensional Gaussian kernel of given (odd) size.
fn gaussian_kernel(size: usize) -> Vec<f32> {
    let sigma = 0.3 * ((size as f32 - 1.0) * 0.5 - 1.0) + 0.8;
    let center = (size / 2) as f32;
    let weights: Vec<f32> = (0..size)
        .map(|i| {
            let d = i as f32 - center;
            (-(d * d) / (2.0 * sigma * sigma)).exp()
        })
        .collect();
    let sum: f32 = weights.iter().sum();
    weights.into_iter().map(|w| w / sum).collect()
}

fn luma(pixel: Rgb<u8>) -> Luma<u8> {
    let value: f32 = pixel.0.iter().zip(&LUMA_WEIGHTS).map(|(&c, w)| c as f32 * w).sum();
    Luma([value.round().max(0.0).min(255.0) as u8])
}

fn sepia(pixel: Rgb<u8>) -> Rgb<u8> {
    let channel = |row: &[f32; 3]| {
        let value = row[0] * pixel[0] as f32 + row[1] * pixel[1] as f32 + row[2] * pixel[2] as f32;
        value.round().max(0.0).min(255.0) as u8
    };
    Rgb([channel(&SEPIA_MATRIX[0]), channel(&SEPIA_MATRIX[1]), channel(&SEPIA_MATRIX[2])])
}

fn vintage<R: Rng + ?Sized>(img: &RgbImage, rng: &mut R) -> RgbImage {
    gaussian_blur(&fade(img, rng), SMOOTH_KERNEL_SIZE)
}

/// Faded colors of the Vintage filter with noise added, before smoothing.
fn fade<R: Rng + ?Sized>(img: &RgbImage, rng: &mut R) -> RgbImage {
    let mut result = map::map_colors(img, |pixel| {
        let hsv = Hsv::from(pixel);
        Rgb::from(Hsv{
            hue: hsv.hue * VINTAGE_HUE_FACTOR,
            saturation: hsv.saturation * VINTAGE_SATURATION_FACTOR,
            value: hsv.value,
        })
    });
    for pixel in result.pixels_mut() {
        for channel in pixel.0.iter_mut() {
            *channel = channel.saturating_add(rng.gen_range(0..VINTAGE_NOISE_MAX));
        }
    }
    result
}


/// Error that may occur when applying a filter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FilterError {
    /// Filter name that isn't recognized.
    Unknown(String),
    /// Image has no pixels.
    EmptyImage,
}

impl error::Error for FilterError {
    fn description(&self) -> &str { "filter error" }
}

impl fmt::Display for FilterError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            FilterError::Unknown(ref f) => write!(fmt, "unknown filter `{}`", f),
            FilterError::EmptyImage => write!(fmt, "cannot filter an empty image"),
        }
    }
}
