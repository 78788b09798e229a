//! Structs and functions for handling textures.
//!
//! The module provides the [`Texture`] struct which is a CPU representation of a GPU texture.

use std::{path::Path, sync::Arc};

use glow::HasContext;
use image::{DynamicImage, RgbaImage, imageops};

/// Prepares decoded pixels for upload.
///
/// Only 8-bit images with an alpha channel are accepted; gray+alpha is
/// expanded to RGBA. Rows are flipped so that the first
/// pixel is the lower left corner, which is where OpenGL expects it.
pub fn texture_pixels(image: DynamicImage) -> Result<RgbaImage, String> {
    match image {
        DynamicImage::ImageRgba8(rgba) => Ok(imageops::flip_vertical(&rgba)),
        DynamicImage::ImageLumaA8(gray) => Ok(imageops::flip_vertical(
            &DynamicImage::ImageLumaA8(gray).to_rgba8(),
        )),
        _ => Err("texture must be an NRGBA image".to_string()),
    }
}

/// Represents a texture stored on the GPU side.
pub struct Texture {
    gl: Arc<glow::Context>,
    id: glow::Texture,
    width: u32,
    height: u32,
}

impl Texture {
    /// Loads a PNG file into a new texture.
    pub fn from_png(gl: &Arc<glow::Context>, path: impl AsRef<Path>) -> Result<Self, String> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| format!("{}: {}", path.display(), e))?;
        let image = image::load_from_memory_with_format(&bytes, image::ImageFormat::Png)
            .map_err(|e| format!("{}: {}", path.display(), e))?;
        let pixels = texture_pixels(image).map_err(|e| format!("{}: {}", path.display(), e))?;
        log::debug!(
            "loaded {} ({}x{})",
            path.display(),
            pixels.width(),
            pixels.height()
        );
        Self::new(gl, &pixels)
    }

    /// Creates a new texture from already prepared RGBA pixels.
    pub fn new(gl: &Arc<glow::Context>, pixels: &RgbaImage) -> Result<Self, String> {
        let (width, height) = pixels.dimensions();
        unsafe {
            let texture = gl.create_texture()?;
            gl.bind_texture(glow::TEXTURE_2D, Some(texture));
            gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_MAG_FILTER,
                glow::LINEAR as i32,
            );
            gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_MIN_FILTER,
                glow::LINEAR as i32,
            );
            gl.tex_image_2d(
                glow::TEXTURE_2D,
                0,
                glow::RGBA as i32,
                width as i32,
                height as i32,
                0,
                glow::RGBA,
                glow::UNSIGNED_BYTE,
                glow::PixelUnpackData::Slice(Some(pixels.as_raw().as_slice())),
            );
            gl.bind_texture(glow::TEXTURE_2D, None);

            Ok(Self {
                gl: Arc::clone(gl),
                id: texture,
                width,
                height,
            })
        }
    }

    /// Returns the width of the texture.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the height of the texture.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Binds the texture to the specified texture unit.
    pub fn bind(&self, unit: u32) {
        unsafe {
            self.gl.active_texture(glow::TEXTURE0 + unit);
            self.gl.bind_texture(glow::TEXTURE_2D, Some(self.id));
        }
    }
}

impl Drop for Texture {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_texture(self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use image::{GrayAlphaImage, LumaA, Rgb, RgbImage, Rgba};

    use super::*;

    #[test]
    fn test_rows_are_flipped() {
        let mut img = RgbaImage::new(2, 3);
        for (x, y, pixel) in img.enumerate_pixels_mut() {
            *pixel = Rgba([x as u8, y as u8, 0, 255]);
        }

        let flipped = texture_pixels(DynamicImage::ImageRgba8(img)).unwrap();
        assert_eq!(flipped.dimensions(), (2, 3));
        assert_eq!(*flipped.get_pixel(0, 0), Rgba([0, 2, 0, 255]));
        assert_eq!(*flipped.get_pixel(1, 0), Rgba([1, 2, 0, 255]));
        assert_eq!(*flipped.get_pixel(1, 2), Rgba([1, 0, 0, 255]));
    }

    #[test]
    fn test_raw_layout_is_bottom_row_first() {
        let mut img = RgbaImage::new(1, 2);
        img.put_pixel(0, 0, Rgba([10, 20, 30, 40]));
        img.put_pixel(0, 1, Rgba([50, 60, 70, 80]));

        let flipped = texture_pixels(DynamicImage::ImageRgba8(img)).unwrap();
        assert_eq!(flipped.as_raw().as_slice(), &[50, 60, 70, 80, 10, 20, 30, 40]);
    }

    #[test]
    fn test_non_rgba_is_rejected() {
        let img = RgbImage::from_pixel(4, 4, Rgb([1, 2, 3]));
        let err = texture_pixels(DynamicImage::ImageRgb8(img)).unwrap_err();
        assert_eq!(err, "texture must be an NRGBA image");
    }

    #[test]
    fn test_gray_alpha_png_is_expanded() {
        let mut img = GrayAlphaImage::new(2, 2);
        img.put_pixel(0, 0, LumaA([10, 255]));
        img.put_pixel(1, 0, LumaA([20, 128]));
        img.put_pixel(0, 1, LumaA([30, 64]));
        img.put_pixel(1, 1, LumaA([40, 0]));
        let mut png = Vec::new();
        DynamicImage::ImageLumaA8(img)
            .write_to(&mut std::io::Cursor::new(&mut png), image::ImageFormat::Png)
            .unwrap();

        let decoded = image::load_from_memory_with_format(&png, image::ImageFormat::Png).unwrap();
        assert!(matches!(decoded, DynamicImage::ImageLumaA8(_)));

        let pixels = texture_pixels(decoded).unwrap();
        assert_eq!(pixels.dimensions(), (2, 2));
        assert_eq!(*pixels.get_pixel(0, 0), Rgba([30, 30, 30, 64]));
        assert_eq!(*pixels.get_pixel(1, 0), Rgba([40, 40, 40, 0]));
        assert_eq!(*pixels.get_pixel(0, 1), Rgba([10, 10, 10, 255]));
        assert_eq!(*pixels.get_pixel(1, 1), Rgba([20, 20, 20, 128]));
    }

    #[test]
    fn test_png_round_trip_keeps_rgba() {
        let img = RgbaImage::from_pixel(3, 2, Rgba([255, 0, 0, 128]));
        let mut png = Vec::new();
        DynamicImage::ImageRgba8(img)
            .write_to(&mut std::io::Cursor::new(&mut png), image::ImageFormat::Png)
            .unwrap();

        let decoded = image::load_from_memory_with_format(&png, image::ImageFormat::Png).unwrap();
        let pixels = texture_pixels(decoded).unwrap();
        assert_eq!(pixels.dimensions(), (3, 2));
        assert!(pixels.pixels().all(|p| *p == Rgba([255, 0, 0, 128])));
    }
}
