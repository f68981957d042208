/// Texture loading progress for one session. `Ready` and `Failed` are final.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready,
    Failed(String),
}

impl LoadState {
    pub fn is_settled(&self) -> bool {
        !matches!(self, LoadState::Loading)
    }
}

/// What the host shows over the canvas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeroStatus {
    /// Not mounted yet, or waiting to scroll into view.
    Placeholder,
    Loading,
    Ready,
    Failed(String),
}

impl HeroStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            HeroStatus::Placeholder => "placeholder",
            HeroStatus::Loading => "loading",
            HeroStatus::Ready => "ready",
            HeroStatus::Failed(_) => "failed",
        }
    }

    pub fn failure(&self) -> Option<&str> {
        match self {
            HeroStatus::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}

impl std::fmt::Display for HeroStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HeroStatus::Failed(msg) => write!(f, "failed: {msg}"),
            other => f.write_str(other.as_str()),
        }
    }
}
