//! Software RGBA framebuffer
//!
//! `PixelSurface` rasterizes fills into an 8-bit RGBA buffer. A pixel is
//! covered when its center lies inside the rectangle; fills are clipped to
//! the surface and composited source-over.

use crate::color::Color;
use crate::error::{Result, SurfaceError};
use crate::geometry::{Rect, Size};
use crate::surface::Surface;
use std::path::Path;

const BYTES_PER_PIXEL: usize = 4;

/// Largest backing buffer a surface may allocate (256 MiB)
pub const MAX_BUFFER_BYTES: usize = 256 * 1024 * 1024;

#[derive(Clone, Debug)]
pub struct PixelSurface {
    width: u32,
    height: u32,
    data: Vec<u8>,
    fill_color: Color,
}

impl PixelSurface {
    /// Create a transparent surface of the given pixel dimensions
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let len = (width as usize)
            .checked_mul(height as usize)
            .and_then(|pixels| pixels.checked_mul(BYTES_PER_PIXEL))
            .filter(|&len| len > 0 && len <= MAX_BUFFER_BYTES)
            .ok_or(SurfaceError::InvalidDimensions {
                width: width as f32,
                height: height as f32,
            })?;
        Ok(Self {
            width,
            height,
            data: vec![0; len],
            fill_color: Color::BLACK,
        })
    }

    /// Create a surface covering a logical size, rounded to whole pixels
    pub fn from_size(size: Size) -> Result<Self> {
        let valid = size.width.is_finite()
            && size.height.is_finite()
            && size.width >= 1.0
            && size.height >= 1.0
            && size.width <= u32::MAX as f32
            && size.height <= u32::MAX as f32;
        if !valid {
            return Err(SurfaceError::InvalidDimensions {
                width: size.width,
                height: size.height,
            });
        }
        Self::new(size.width.round() as u32, size.height.round() as u32)
    }

    /// Wrap an existing RGBA8 buffer
    pub fn from_rgba8(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let mut surface = Self::new(width, height)?;
        if data.len() != surface.data.len() {
            return Err(SurfaceError::BufferSize {
                expected: surface.data.len(),
                actual: data.len(),
            });
        }
        surface.data = data;
        Ok(surface)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn size(&self) -> Size {
        Size::new(self.width as f32, self.height as f32)
    }

    /// Raw RGBA8 bytes, row-major
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// RGBA8 value at a pixel, `None` outside the surface
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = self.offset(x, y);
        Some([
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ])
    }

    /// Write the surface to a PNG file
    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let image = image::RgbaImage::from_raw(self.width, self.height, self.data.clone())
            .ok_or(SurfaceError::BufferSize {
                expected: self.width as usize * self.height as usize * BYTES_PER_PIXEL,
                actual: self.data.len(),
            })?;
        image.save_with_format(path, image::ImageFormat::Png)?;
        tracing::debug!(
            "PixelSurface: wrote {}x{} frame to {}",
            self.width,
            self.height,
            path.display()
        );
        Ok(())
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL
    }

    fn blend(dst: &mut [u8], src: [u8; 4]) {
        match src[3] {
            255 => dst.copy_from_slice(&src),
            0 => {}
            a => {
                let a = a as u32;
                let inv = 255 - a;
                for c in 0..3 {
                    dst[c] = ((src[c] as u32 * a + dst[c] as u32 * inv + 127) / 255) as u8;
                }
                dst[3] = (a + (dst[3] as u32 * inv + 127) / 255) as u8;
            }
        }
    }
}

impl Surface for PixelSurface {
    fn set_fill_color(&mut self, color: Color) {
        self.fill_color = color;
    }

    fn fill_color(&self) -> Color {
        self.fill_color
    }

    fn fill_rect(&mut self, rect: Rect) {
        let Some(clipped) = rect.intersect(&self.size().to_rect()) else {
            return;
        };

        let x_start = clipped.x().round() as u32;
        let y_start = clipped.y().round() as u32;
        let x_end = (clipped.max_x().round() as u32).min(self.width);
        let y_end = (clipped.max_y().round() as u32).min(self.height);

        let src = self.fill_color.to_rgba8();
        for y in y_start..y_end {
            for x in x_start..x_end {
                let i = self.offset(x, y);
                Self::blend(&mut self.data[i..i + BYTES_PER_PIXEL], src);
            }
        }
    }
}
