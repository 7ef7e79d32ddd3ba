//! Texture loading facade
//!
//! Decodes an image file (PNG) into an RGBA8 2D texture with repeat wrapping
//! and linear-mipmap filtering. Decode failures are fatal: nothing is ever
//! uploaded from a bad image.

use std::path::Path;

use glow::HasContext as _;
use thiserror::Error;

/// Texture loading errors
#[derive(Error, Debug)]
pub enum TextureError {
    #[error("failed to load texture image {path}: {source}")]
    Load {
        path: String,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to allocate GPU texture: {0}")]
    Allocation(String),
}

pub type TextureResult<T> = Result<T, TextureError>;

/// GPU 2D texture handle
pub struct Texture {
    handle: glow::NativeTexture,
    width: u32,
    height: u32,
}

impl Texture {
    /// Decode an image file and upload it as a mipmapped RGBA8 texture.
    pub fn from_file(gl: &glow::Context, path: &Path) -> TextureResult<Self> {
        let img = image::open(path)
            .map_err(|source| TextureError::Load {
                path: path.display().to_string(),
                source,
            })?
            .to_rgba8();
        let (width, height) = img.dimensions();

        let handle = unsafe { gl.create_texture() }.map_err(TextureError::Allocation)?;
        unsafe {
            gl.bind_texture(glow::TEXTURE_2D, Some(handle));
            gl.tex_image_2d(
                glow::TEXTURE_2D,
                0,
                glow::RGBA as i32,
                width as i32,
                height as i32,
                0,
                glow::RGBA,
                glow::UNSIGNED_BYTE,
                glow::PixelUnpackData::Slice(Some(img.as_raw().as_slice())),
            );
            gl.generate_mipmap(glow::TEXTURE_2D);
            gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_WRAP_S, glow::REPEAT as i32);
            gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_WRAP_T, glow::REPEAT as i32);
            gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_MIN_FILTER,
                glow::LINEAR_MIPMAP_LINEAR as i32,
            );
            gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_MAG_FILTER,
                glow::LINEAR as i32,
            );
            gl.bind_texture(glow::TEXTURE_2D, None);
        }

        log::debug!("loaded {width}x{height} texture from {}", path.display());

        Ok(Self {
            handle,
            width,
            height,
        })
    }

    /// Bind as the current 2D texture; the binding persists until the next
    /// bind call
    pub fn bind(&self, gl: &glow::Context) {
        unsafe { gl.bind_texture(glow::TEXTURE_2D, Some(self.handle)) };
    }

    /// Texture width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Texture height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Release the GPU texture
    pub fn destroy(&self, gl: &glow::Context) {
        unsafe { gl.delete_texture(self.handle) };
    }
}
