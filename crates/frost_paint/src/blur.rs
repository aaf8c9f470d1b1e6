//! Separable gaussian backdrop filter
//!
//! A [`BlurFilter`] owns its precomputed horizontal and vertical kernels, which
//! is what makes it worth caching: building the kernels is the expensive part,
//! applying them is a plain two-pass convolution.

use smallvec::SmallVec;

use crate::error::{PaintError, Result};

/// How samples outside the source image are resolved
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TileMode {
    /// Repeat the nearest edge pixel
    #[default]
    Clamp,
    /// Wrap around to the opposite edge
    Repeat,
    /// Reflect back into the image
    Mirror,
    /// Treat everything outside the image as transparent
    Decal,
}

impl TileMode {
    fn resolve(self, index: i64, len: i64) -> Option<usize> {
        let resolved = match self {
            TileMode::Clamp => index.clamp(0, len - 1),
            TileMode::Repeat => index.rem_euclid(len),
            TileMode::Mirror => {
                let m = index.rem_euclid(2 * len);
                if m < len {
                    m
                } else {
                    2 * len - 1 - m
                }
            }
            TileMode::Decal => {
                if index < 0 || index >= len {
                    return None;
                }
                index
            }
        };
        Some(resolved as usize)
    }
}

/// Largest sigma a kernel is built for; larger requests are clamped.
///
/// At this sigma the kernel has `2 * 192 + 1` taps per axis.
pub const MAX_SIGMA: f32 = 64.0;

/// Normalized 1D gaussian weights, centre tap in the middle
type Kernel = SmallVec<[f32; 32]>;

fn gaussian_kernel(sigma: f32) -> Kernel {
    if !sigma.is_finite() || sigma <= 0.0 {
        let mut identity = Kernel::new();
        identity.push(1.0);
        return identity;
    }

    let sigma = sigma.min(MAX_SIGMA);
    let radius = (sigma * 3.0).ceil() as i32;
    let denom = 2.0 * sigma * sigma;
    let mut weights: Kernel = (-radius..=radius)
        .map(|i| {
            let x = i as f32;
            (-x * x / denom).exp()
        })
        .collect();
    let sum: f32 = weights.iter().sum();
    for w in weights.iter_mut() {
        *w /= sum;
    }
    weights
}

/// Gaussian blur with independent horizontal and vertical sigma
#[derive(Clone, Debug, PartialEq)]
pub struct BlurFilter {
    sigma_x: f32,
    sigma_y: f32,
    tile_mode: TileMode,
    kernel_x: Kernel,
    kernel_y: Kernel,
}

impl BlurFilter {
    pub fn new(sigma_x: f32, sigma_y: f32, tile_mode: TileMode) -> Self {
        Self {
            sigma_x,
            sigma_y,
            tile_mode,
            kernel_x: gaussian_kernel(sigma_x),
            kernel_y: gaussian_kernel(sigma_y),
        }
    }

    pub fn sigma_x(&self) -> f32 {
        self.sigma_x
    }

    pub fn sigma_y(&self) -> f32 {
        self.sigma_y
    }

    pub fn tile_mode(&self) -> TileMode {
        self.tile_mode
    }

    /// Number of taps on each side of the centre, per axis
    pub fn kernel_radius(&self) -> (usize, usize) {
        (self.kernel_x.len() / 2, self.kernel_y.len() / 2)
    }

    /// Whether applying this filter leaves every image unchanged
    pub fn is_identity(&self) -> bool {
        self.kernel_x.len() == 1 && self.kernel_y.len() == 1
    }

    /// Blur a straight RGBA8 image and return the result
    pub fn apply(&self, src: &[u8], width: u32, height: u32) -> Result<Vec<u8>> {
        let expected = check_rgba8(src, width, height)?;
        if self.is_identity() {
            return Ok(src.to_vec());
        }

        let (w, h) = (width as usize, height as usize);
        let input: Vec<f32> = src.iter().map(|&v| v as f32).collect();
        let mut tmp = vec![0.0f32; expected];
        let mut out = vec![0.0f32; expected];

        // Horizontal pass
        let radius = (self.kernel_x.len() / 2) as i64;
        for y in 0..h {
            for x in 0..w {
                let mut acc = [0.0f32; 4];
                for (ki, &kw) in self.kernel_x.iter().enumerate() {
                    let sx = x as i64 + ki as i64 - radius;
                    let Some(sx) = self.tile_mode.resolve(sx, w as i64) else {
                        continue;
                    };
                    let idx = (y * w + sx) * 4;
                    for c in 0..4 {
                        acc[c] += kw * input[idx + c];
                    }
                }
                let idx = (y * w + x) * 4;
                tmp[idx..idx + 4].copy_from_slice(&acc);
            }
        }

        // Vertical pass
        let radius = (self.kernel_y.len() / 2) as i64;
        for y in 0..h {
            for x in 0..w {
                let mut acc = [0.0f32; 4];
                for (ki, &kw) in self.kernel_y.iter().enumerate() {
                    let sy = y as i64 + ki as i64 - radius;
                    let Some(sy) = self.tile_mode.resolve(sy, h as i64) else {
                        continue;
                    };
                    let idx = (sy * w + x) * 4;
                    for c in 0..4 {
                        acc[c] += kw * tmp[idx + c];
                    }
                }
                let idx = (y * w + x) * 4;
                out[idx..idx + 4].copy_from_slice(&acc);
            }
        }

        Ok(out
            .into_iter()
            .map(|v| v.round().clamp(0.0, 255.0) as u8)
            .collect())
    }
}

/// Check that `src` holds exactly `width * height` RGBA8 pixels; returns the byte length
pub fn check_rgba8(src: &[u8], width: u32, height: u32) -> Result<usize> {
    if width == 0 || height == 0 {
        return Err(PaintError::EmptyImage { width, height });
    }
    let expected = (width as usize) * (height as usize) * 4;
    if src.len() != expected {
        return Err(PaintError::BufferSize {
            width,
            height,
            expected,
            actual: src.len(),
        });
    }
    Ok(expected)
}
