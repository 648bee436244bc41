//! ASCII-art rendering of pi digits over a reference image.
//!
//! The image is reduced to a grid of cells, one per output character.
//! Cells over dark pixels (light ones when inverted) receive the next digit
//! of pi in row-major order; all other cells become spaces.

use std::path::Path;

use image::imageops::{self, FilterType};
use image::GrayImage;

use picalc_core::digits::DigitString;

/// Luma values below this are dark.
const DARK_THRESHOLD: u8 = 128;

/// Errors raised while preparing or filling a canvas.
#[derive(Debug, thiserror::Error)]
pub enum ArtError {
    /// The source image could not be opened or decoded.
    #[error("cannot load source image: {0}")]
    Image(#[from] image::ImageError),

    /// Width or height is zero.
    #[error("invalid art size {width}x{height}")]
    InvalidSize { width: u32, height: u32 },

    /// The digit string does not match the number of digit cells.
    #[error("canvas needs {expected} digits, got {actual}")]
    DigitCount { expected: usize, actual: usize },
}

/// Grid of cells marking where digits go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    cells: Vec<bool>,
}

impl Canvas {
    /// Load `path`, scale it to the art size and threshold it.
    pub fn load(
        path: &Path,
        width: u32,
        height: u32,
        keep_aspect_ratio: bool,
        inverted: bool,
    ) -> Result<Self, ArtError> {
        let image = image::open(path)?.to_luma8();
        let (width, height) = target_size(image.dimensions(), width, height, keep_aspect_ratio)?;
        let scaled = imageops::resize(&image, width, height, FilterType::Lanczos3);
        tracing::debug!(
            path = %path.display(),
            width,
            height,
            "source image scaled"
        );
        Ok(Self::from_pixels(&scaled, inverted))
    }

    /// Threshold an image that already has the art size.
    #[must_use]
    pub fn from_pixels(image: &GrayImage, inverted: bool) -> Self {
        let (width, height) = image.dimensions();
        let cells = image
            .pixels()
            .map(|pixel| (pixel.0[0] < DARK_THRESHOLD) != inverted)
            .collect();
        Self {
            width,
            height,
            cells,
        }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of digit cells, which is the precision to compute.
    #[must_use]
    pub fn digits_needed(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// Fill the digit cells row by row.
    ///
    /// Rows without any digit are dropped. `digits` must hold exactly
    /// [`digits_needed`](Self::digits_needed) digits.
    pub fn render(&self, digits: &DigitString) -> Result<String, ArtError> {
        let expected = self.digits_needed();
        if digits.len() != expected {
            return Err(ArtError::DigitCount {
                expected,
                actual: digits.len(),
            });
        }

        let mut source = digits.as_str().chars();
        let rows: Vec<String> = self
            .cells
            .chunks(self.width as usize)
            .filter(|row| row.iter().any(|&cell| cell))
            .map(|row| {
                row.iter()
                    .map(|&cell| {
                        if cell {
                            source.next().unwrap_or(' ')
                        } else {
                            ' '
                        }
                    })
                    .collect()
            })
            .collect();
        Ok(rows.join("\n"))
    }
}

/// Art size for an image of `dimensions`.
///
/// With `keep_aspect_ratio` the height follows the image proportions at the
/// requested width, otherwise the requested size is used as is.
pub fn target_size(
    dimensions: (u32, u32),
    width: u32,
    height: u32,
    keep_aspect_ratio: bool,
) -> Result<(u32, u32), ArtError> {
    let (image_width, image_height) = dimensions;
    let height = if keep_aspect_ratio && image_width > 0 {
        let scaled = u64::from(width) * u64::from(image_height) / u64::from(image_width);
        u32::try_from(scaled).unwrap_or(u32::MAX).max(1)
    } else {
        height
    };
    if width == 0 || height == 0 {
        return Err(ArtError::InvalidSize { width, height });
    }
    Ok((width, height))
}
