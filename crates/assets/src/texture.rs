use image::imageops::FilterType;

use crate::sources::TextureSlot;

/// Decoded RGBA8 pixels, row-major, top row first.
#[derive(Clone, PartialEq, Eq)]
pub struct Texture {
    pub source: String,
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl std::fmt::Debug for Texture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Texture")
            .field("source", &self.source)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.rgba.len())
            .finish()
    }
}

impl Texture {
    pub fn decode(source: impl Into<String>, bytes: &[u8]) -> Result<Self, image::ImageError> {
        let img = image::load_from_memory(bytes)?.to_rgba8();
        let (width, height) = img.dimensions();
        Ok(Self {
            source: source.into(),
            width,
            height,
            rgba: img.into_raw(),
        })
    }

    /// A single-color texture, e.g. a neutral stand-in for an unused map.
    pub fn solid(source: impl Into<String>, width: u32, height: u32, rgba: [u8; 4]) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        let rgba = rgba
            .iter()
            .copied()
            .cycle()
            .take(width as usize * height as usize * 4)
            .collect();
        Self {
            source: source.into(),
            width,
            height,
            rgba,
        }
    }

    /// Downscale (preserving aspect) so neither side exceeds `max_dim`.
    ///
    /// WebGL2 adapters commonly cap 2D textures at 2048 texels while the day
    /// maps ship larger.
    pub fn fit_within(self, max_dim: u32) -> Self {
        let max_dim = max_dim.max(1);
        if self.width <= max_dim && self.height <= max_dim {
            return self;
        }
        let scale = max_dim as f64 / self.width.max(self.height) as f64;
        let width = ((self.width as f64 * scale).round() as u32).clamp(1, max_dim);
        let height = ((self.height as f64 * scale).round() as u32).clamp(1, max_dim);

        let Some(img) = image::RgbaImage::from_raw(self.width, self.height, self.rgba.clone())
        else {
            tracing::warn!(source = %self.source, "texture buffer size mismatch, not resizing");
            return self;
        };
        let resized = image::imageops::resize(&img, width, height, FilterType::Triangle);
        Self {
            source: self.source,
            width,
            height,
            rgba: resized.into_raw(),
        }
    }
}

/// All three planet maps; only constructed when every slot loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureSet {
    pub color: Texture,
    pub bump: Texture,
    pub specular: Texture,
}

impl TextureSet {
    pub fn get(&self, slot: TextureSlot) -> &Texture {
        match slot {
            TextureSlot::Color => &self.color,
            TextureSlot::Bump => &self.bump,
            TextureSlot::Specular => &self.specular,
        }
    }

    pub fn byte_len(&self) -> usize {
        TextureSlot::ALL
            .iter()
            .map(|slot| self.get(*slot).rgba.len())
            .sum()
    }
}
