//! Image filter kinds and their transforms.
//!
//! Each non-grayscale kind maps to a fixed convolution kernel (divisor and
//! additive offset semantics, matching the classic 3x3/5x5 enhancement
//! kernels). Grayscale is a luminance conversion that preserves dimensions;
//! every other kind bounds the image to [`MAX_DIMENSION`] per side before
//! convolving.

use std::fmt;
use std::str::FromStr;

use image::{DynamicImage, Rgb, RgbImage};

use crate::error::{Error, Result};

/// Maximum width/height of a convolved output image, in pixels.
pub const MAX_DIMENSION: u32 = 500;

/// The closed set of supported image filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKind {
    Blur,
    Contour,
    Detail,
    EdgeEnhance,
    Emboss,
    Sharpen,
    Smooth,
    Grayscale,
}

impl FilterKind {
    /// All supported kinds, in form-display order.
    pub const ALL: [FilterKind; 8] = [
        FilterKind::Blur,
        FilterKind::Contour,
        FilterKind::Detail,
        FilterKind::EdgeEnhance,
        FilterKind::Emboss,
        FilterKind::Sharpen,
        FilterKind::Smooth,
        FilterKind::Grayscale,
    ];

    /// Canonical name, used in form values and derived file names.
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterKind::Blur => "blur",
            FilterKind::Contour => "contour",
            FilterKind::Detail => "detail",
            FilterKind::EdgeEnhance => "edge-enhance",
            FilterKind::Emboss => "emboss",
            FilterKind::Sharpen => "sharpen",
            FilterKind::Smooth => "smooth",
            FilterKind::Grayscale => "grayscale",
        }
    }

    /// The convolution kernel for this kind, or `None` for grayscale.
    fn kernel(&self) -> Option<&'static Kernel> {
        match self {
            FilterKind::Blur => Some(&BLUR),
            FilterKind::Contour => Some(&CONTOUR),
            FilterKind::Detail => Some(&DETAIL),
            FilterKind::EdgeEnhance => Some(&EDGE_ENHANCE),
            FilterKind::Emboss => Some(&EMBOSS),
            FilterKind::Sharpen => Some(&SHARPEN),
            FilterKind::Smooth => Some(&SMOOTH),
            FilterKind::Grayscale => None,
        }
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterKind {
    type Err = Error;

    /// Parse a filter name. Case-insensitive; a space is accepted in place
    /// of the hyphen ("edge enhance"). Anything outside the fixed set is an
    /// explicit [`Error::UnknownFilter`], never a silent no-op.
    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_lowercase().replace(' ', "-");
        FilterKind::ALL
            .iter()
            .find(|kind| kind.as_str() == normalized)
            .copied()
            .ok_or_else(|| Error::UnknownFilter(s.trim().to_string()))
    }
}

/// A fixed convolution kernel with divisor and offset semantics: each output
/// channel is `sum(coeffs * window) / scale + offset`, clamped to [0, 255].
struct Kernel {
    /// Kernel width/height (odd).
    size: u32,
    scale: f32,
    offset: f32,
    coeffs: &'static [f32],
}

static BLUR: Kernel = Kernel {
    size: 5,
    scale: 16.0,
    offset: 0.0,
    coeffs: &[
        1.0, 1.0, 1.0, 1.0, 1.0,
        1.0, 0.0, 0.0, 0.0, 1.0,
        1.0, 0.0, 0.0, 0.0, 1.0,
        1.0, 0.0, 0.0, 0.0, 1.0,
        1.0, 1.0, 1.0, 1.0, 1.0,
    ],
};

static CONTOUR: Kernel = Kernel {
    size: 3,
    scale: 1.0,
    offset: 255.0,
    coeffs: &[
        -1.0, -1.0, -1.0,
        -1.0,  8.0, -1.0,
        -1.0, -1.0, -1.0,
    ],
};

static DETAIL: Kernel = Kernel {
    size: 3,
    scale: 6.0,
    offset: 0.0,
    coeffs: &[
         0.0, -1.0,  0.0,
        -1.0, 10.0, -1.0,
         0.0, -1.0,  0.0,
    ],
};

static EDGE_ENHANCE: Kernel = Kernel {
    size: 3,
    scale: 2.0,
    offset: 0.0,
    coeffs: &[
        -1.0, -1.0, -1.0,
        -1.0, 10.0, -1.0,
        -1.0, -1.0, -1.0,
    ],
};

static EMBOSS: Kernel = Kernel {
    size: 3,
    scale: 1.0,
    offset: 128.0,
    coeffs: &[
        -1.0, 0.0, 0.0,
         0.0, 1.0, 0.0,
         0.0, 0.0, 0.0,
    ],
};

static SHARPEN: Kernel = Kernel {
    size: 3,
    scale: 16.0,
    offset: 0.0,
    coeffs: &[
        -2.0, -2.0, -2.0,
        -2.0, 32.0, -2.0,
        -2.0, -2.0, -2.0,
    ],
};

static SMOOTH: Kernel = Kernel {
    size: 3,
    scale: 13.0,
    offset: 0.0,
    coeffs: &[
        1.0, 1.0, 1.0,
        1.0, 5.0, 1.0,
        1.0, 1.0, 1.0,
    ],
};

/// Apply a filter to a decoded image, returning the transformed image.
///
/// Grayscale preserves dimensions; all other kinds bound the image to
/// [`MAX_DIMENSION`] per side first.
pub fn apply(img: &DynamicImage, kind: FilterKind) -> DynamicImage {
    match kind.kernel() {
        None => DynamicImage::ImageLuma8(img.to_luma8()),
        Some(kernel) => {
            let bounded = if img.width() > MAX_DIMENSION || img.height() > MAX_DIMENSION {
                img.thumbnail(MAX_DIMENSION, MAX_DIMENSION)
            } else {
                img.clone()
            };
            DynamicImage::ImageRgb8(convolve(&bounded.to_rgb8(), kernel))
        }
    }
}

/// Convolve an RGB image with a kernel, sampling edge-clamped neighbors.
fn convolve(img: &RgbImage, kernel: &Kernel) -> RgbImage {
    let (width, height) = img.dimensions();
    let half = (kernel.size / 2) as i64;

    let mut out = RgbImage::new(width, height);
    for (x, y, pixel) in out.enumerate_pixels_mut() {
        let mut acc = [0.0f32; 3];
        for ky in 0..kernel.size {
            for kx in 0..kernel.size {
                let coeff = kernel.coeffs[(ky * kernel.size + kx) as usize];
                if coeff == 0.0 {
                    continue;
                }
                let sx = (x as i64 + kx as i64 - half).clamp(0, width as i64 - 1) as u32;
                let sy = (y as i64 + ky as i64 - half).clamp(0, height as i64 - 1) as u32;
                let sample = img.get_pixel(sx, sy);
                for c in 0..3 {
                    acc[c] += coeff * sample[c] as f32;
                }
            }
        }
        *pixel = Rgb([
            (acc[0] / kernel.scale + kernel.offset).clamp(0.0, 255.0) as u8,
            (acc[1] / kernel.scale + kernel.offset).clamp(0.0, 255.0) as u8,
            (acc[2] / kernel.scale + kernel.offset).clamp(0.0, 255.0) as u8,
        ]);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid_image(width: u32, height: u32, value: u8) -> DynamicImage {
        let mut img = RgbImage::new(width, height);
        for pixel in img.pixels_mut() {
            *pixel = Rgb([value, value, value]);
        }
        DynamicImage::ImageRgb8(img)
    }

    #[test]
    fn parse_all_canonical_names() {
        for kind in FilterKind::ALL {
            assert_eq!(kind.as_str().parse::<FilterKind>().unwrap(), kind);
        }
    }

    #[test]
    fn parse_accepts_space_and_case() {
        assert_eq!(
            "edge enhance".parse::<FilterKind>().unwrap(),
            FilterKind::EdgeEnhance
        );
        assert_eq!("Sharpen".parse::<FilterKind>().unwrap(), FilterKind::Sharpen);
        assert_eq!(" blur ".parse::<FilterKind>().unwrap(), FilterKind::Blur);
    }

    #[test]
    fn parse_unknown_is_explicit_error() {
        let err = "sepia".parse::<FilterKind>().unwrap_err();
        assert!(matches!(err, Error::UnknownFilter(ref name) if name == "sepia"));
    }

    #[test]
    fn every_non_grayscale_kind_has_a_kernel() {
        for kind in FilterKind::ALL {
            match kind {
                FilterKind::Grayscale => assert!(kind.kernel().is_none()),
                _ => {
                    let kernel = kind.kernel().unwrap();
                    assert_eq!(
                        kernel.coeffs.len(),
                        (kernel.size * kernel.size) as usize
                    );
                }
            }
        }
    }

    #[test]
    fn grayscale_preserves_dimensions() {
        let img = solid_image(800, 600, 120);
        let out = apply(&img, FilterKind::Grayscale);
        assert_eq!((out.width(), out.height()), (800, 600));
    }

    #[test]
    fn grayscale_output_is_single_channel() {
        let mut img = RgbImage::new(4, 4);
        for (x, y, pixel) in img.enumerate_pixels_mut() {
            *pixel = Rgb([(x * 60) as u8, (y * 40) as u8, 200]);
        }
        let out = apply(&DynamicImage::ImageRgb8(img), FilterKind::Grayscale);

        // Expanding back to RGB must give equal channels everywhere.
        for pixel in out.to_rgb8().pixels() {
            assert_eq!(pixel[0], pixel[1]);
            assert_eq!(pixel[1], pixel[2]);
        }
    }

    #[test]
    fn convolved_output_is_bounded() {
        let img = solid_image(1200, 800, 90);
        for kind in FilterKind::ALL {
            if kind == FilterKind::Grayscale {
                continue;
            }
            let out = apply(&img, kind);
            assert!(
                out.width() <= MAX_DIMENSION && out.height() <= MAX_DIMENSION,
                "{kind} exceeded bound: {}x{}",
                out.width(),
                out.height()
            );
        }
    }

    #[test]
    fn small_images_are_not_upscaled() {
        let img = solid_image(40, 30, 90);
        let out = apply(&img, FilterKind::Sharpen);
        assert_eq!((out.width(), out.height()), (40, 30));
    }

    #[test]
    fn smooth_keeps_solid_color() {
        // A normalized kernel over a uniform image must reproduce the input.
        let img = solid_image(16, 16, 77);
        let out = apply(&img, FilterKind::Smooth).to_rgb8();
        for pixel in out.pixels() {
            assert_eq!(*pixel, Rgb([77, 77, 77]));
        }
    }

    #[test]
    fn contour_of_uniform_image_is_white() {
        // Uniform input has no edges; the offset pushes everything to 255.
        let img = solid_image(8, 8, 200);
        let out = apply(&img, FilterKind::Contour).to_rgb8();
        for pixel in out.pixels() {
            assert_eq!(*pixel, Rgb([255, 255, 255]));
        }
    }

    #[test]
    fn emboss_of_uniform_image_is_mid_gray() {
        // -1 and +1 cancel on uniform input, leaving only the 128 offset.
        let img = solid_image(8, 8, 60);
        let out = apply(&img, FilterKind::Emboss).to_rgb8();
        for pixel in out.pixels() {
            assert_eq!(*pixel, Rgb([128, 128, 128]));
        }
    }
}
