/// The three maps the planet material needs.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TextureSlot {
    Color,
    Bump,
    Specular,
}

impl TextureSlot {
    pub const ALL: [TextureSlot; 3] = [TextureSlot::Color, TextureSlot::Bump, TextureSlot::Specular];

    pub fn as_str(self) -> &'static str {
        match self {
            TextureSlot::Color => "color",
            TextureSlot::Bump => "bump",
            TextureSlot::Specular => "specular",
        }
    }
}

impl std::fmt::Display for TextureSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureSources {
    pub color: String,
    pub bump: String,
    pub specular: String,
}

impl Default for TextureSources {
    /// Assets served next to the page; no third-party CDN.
    fn default() -> Self {
        Self::under("/textures")
    }
}

impl TextureSources {
    /// The standard file names under a base path or URL.
    pub fn under(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            color: format!("{base}/earth_daymap.jpg"),
            bump: format!("{base}/earth_normal_map.jpg"),
            specular: format!("{base}/earth_specular_map.jpg"),
        }
    }

    pub fn get(&self, slot: TextureSlot) -> &str {
        match slot {
            TextureSlot::Color => &self.color,
            TextureSlot::Bump => &self.bump,
            TextureSlot::Specular => &self.specular,
        }
    }
}
