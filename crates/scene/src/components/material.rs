use foundation::math::clamp01;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// `0xRRGGBB`
    pub fn from_hex(hex: u32) -> Self {
        let channel = |shift: u32| ((hex >> shift) & 0xff) as f32 / 255.0;
        Self::new(channel(16), channel(8), channel(0))
    }

    pub fn scaled(self, s: f32) -> [f32; 3] {
        [self.r * s, self.g * s, self.b * s]
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

/// Which faces rasterize.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FaceSide {
    Front,
    /// Inside of a closed shell only; used for the atmosphere glow.
    Back,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Shading {
    /// Blinn-Phong lit.
    Phong { specular: Rgb, shininess: f32 },
    /// Unlit flat color.
    Basic,
}

/// Planet surface maps. Presence means the color/bump/specular textures are
/// bound; the maps themselves live on the GPU side.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SurfaceMaps {
    pub bump_scale: f32,
    /// UV size of one bump-map texel, used as the height sampling offset.
    pub bump_texel: [f32; 2],
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Material {
    pub color: Rgb,
    pub shading: Shading,
    pub side: FaceSide,
    pub maps: Option<SurfaceMaps>,
    transparent: bool,
    opacity: f64,
}

impl Material {
    pub fn phong(color: Rgb, specular: Rgb, shininess: f32) -> Self {
        Self {
            color,
            shading: Shading::Phong {
                specular,
                shininess,
            },
            side: FaceSide::Front,
            maps: None,
            transparent: false,
            opacity: 1.0,
        }
    }

    pub fn basic(color: Rgb) -> Self {
        Self {
            color,
            shading: Shading::Basic,
            side: FaceSide::Front,
            maps: None,
            transparent: false,
            opacity: 1.0,
        }
    }

    pub fn with_maps(mut self, maps: SurfaceMaps) -> Self {
        self.maps = Some(maps);
        self
    }

    pub fn with_side(mut self, side: FaceSide) -> Self {
        self.side = side;
        self
    }

    pub fn translucent(mut self, opacity: f64) -> Self {
        self.transparent = true;
        self.opacity = clamp01(opacity);
        self
    }

    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    /// Stored clamped to `[0, 1]`.
    pub fn set_opacity(&mut self, opacity: f64) {
        self.opacity = clamp01(opacity);
    }

    pub fn is_transparent(&self) -> bool {
        self.transparent
    }

    /// Transparency is one-way: once blended, a material stays blended for
    /// the rest of the session.
    pub fn enable_transparency(&mut self) {
        self.transparent = true;
    }
}
