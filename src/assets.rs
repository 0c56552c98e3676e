//! Sprite image loading
//!
//! Decodes the two bunny avatars and the carrot and scales each to a
//! `SPRITE_PIXELS` square. A sprite that fails to load is reported on the
//! error stream and left absent: gameplay proceeds unaffected, only the
//! renderer degrades.

use std::path::Path;

use image::imageops::FilterType;
use image::RgbaImage;

use crate::consts::SPRITE_PIXELS;

/// A decoded sprite, scaled to `SPRITE_PIXELS` x `SPRITE_PIXELS` RGBA
#[derive(Debug, Clone)]
pub struct Sprite {
    pub pixels: RgbaImage,
}

impl Sprite {
    /// Decode one image file and scale it to the shared sprite size
    ///
    /// Returns `None` after logging if the file is missing or undecodable.
    pub fn load(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();
        match image::open(path) {
            Ok(img) => {
                let size = SPRITE_PIXELS as u32;
                let scaled = img.resize_exact(size, size, FilterType::Triangle);
                Some(Self {
                    pixels: scaled.to_rgba8(),
                })
            }
            Err(err) => {
                log::error!("Failed to load image '{}': {err}", path.display());
                None
            }
        }
    }
}

/// The three sprites the renderer draws
#[derive(Debug, Clone, Default)]
pub struct SpriteSet {
    pub bunny1: Option<Sprite>,
    pub bunny2: Option<Sprite>,
    pub carrot: Option<Sprite>,
}

impl SpriteSet {
    /// Load all sprites from a directory; absent files only degrade visuals
    pub fn load_from(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            bunny1: Sprite::load(dir.join("bunny.jpg")),
            bunny2: Sprite::load(dir.join("bunny2.jpg")),
            carrot: Sprite::load(dir.join("carrot.gif")),
        }
    }

    /// Whether every sprite decoded successfully
    pub fn is_complete(&self) -> bool {
        self.bunny1.is_some() && self.bunny2.is_some() && self.carrot.is_some()
    }
}
