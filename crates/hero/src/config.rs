use assets::TextureSources;

#[derive(Debug, Clone, PartialEq)]
pub struct HeroConfig {
    pub textures: TextureSources,
    /// Idle spin per rendered frame, radians.
    pub rotation_step: f64,
    pub max_pixel_ratio: f64,
    /// sRGB RGBA; alpha 0 lets the page background show through.
    pub clear_color: [f64; 4],
    /// Textures larger than this are downscaled before upload.
    pub max_texture_dim: u32,
}

impl Default for HeroConfig {
    fn default() -> Self {
        let grey = 0xf5 as f64 / 255.0;
        Self {
            textures: TextureSources::default(),
            rotation_step: 0.002,
            max_pixel_ratio: 2.0,
            clear_color: [grey, grey, grey, 0.0],
            max_texture_dim: 2048,
        }
    }
}

impl HeroConfig {
    /// Device pixel ratio capped to `max_pixel_ratio`; unusable input gives 1.
    pub fn pixel_ratio(&self, device_ratio: f64) -> f64 {
        if !device_ratio.is_finite() || device_ratio <= 0.0 {
            return 1.0;
        }
        device_ratio.min(self.max_pixel_ratio.max(1.0))
    }
}
