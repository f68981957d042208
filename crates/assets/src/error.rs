use crate::sources::TextureSlot;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextureLoadCause {
    Fetch(String),
    Decode(String),
}

/// One of the three maps could not be loaded; the whole set is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureLoadError {
    pub slot: TextureSlot,
    pub path: String,
    pub cause: TextureLoadCause,
}

impl TextureLoadError {
    pub fn fetch(slot: TextureSlot, path: &str, msg: impl Into<String>) -> Self {
        Self {
            slot,
            path: path.to_string(),
            cause: TextureLoadCause::Fetch(msg.into()),
        }
    }

    pub fn decode(slot: TextureSlot, path: &str, msg: impl Into<String>) -> Self {
        Self {
            slot,
            path: path.to_string(),
            cause: TextureLoadCause::Decode(msg.into()),
        }
    }
}

impl std::fmt::Display for TextureLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.cause {
            TextureLoadCause::Fetch(msg) => {
                write!(f, "failed to fetch {} texture {}: {msg}", self.slot, self.path)
            }
            TextureLoadCause::Decode(msg) => {
                write!(f, "failed to decode {} texture {}: {msg}", self.slot, self.path)
            }
        }
    }
}

impl std::error::Error for TextureLoadError {}
