use assets::TextureLoadError;

#[derive(Debug, Clone, PartialEq)]
pub enum HeroError {
    /// No drawable context, backend creation failed, or a listener could not
    /// be registered.
    Initialization(String),
    TextureLoad(TextureLoadError),
    Render(String),
}

impl HeroError {
    pub fn init(msg: impl Into<String>) -> Self {
        HeroError::Initialization(msg.into())
    }

    /// Short text suitable for the on-page error box.
    pub fn user_message(&self) -> &'static str {
        match self {
            HeroError::Initialization(_) => "failed to initialize scene",
            HeroError::TextureLoad(_) => "failed to load textures",
            HeroError::Render(_) => "failed to render scene",
        }
    }
}

impl std::fmt::Display for HeroError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HeroError::Initialization(msg) => write!(f, "initialization failed: {msg}"),
            HeroError::TextureLoad(err) => write!(f, "{err}"),
            HeroError::Render(msg) => write!(f, "render failed: {msg}"),
        }
    }
}

impl std::error::Error for HeroError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HeroError::TextureLoad(err) => Some(err),
            _ => None,
        }
    }
}

impl From<TextureLoadError> for HeroError {
    fn from(err: TextureLoadError) -> Self {
        HeroError::TextureLoad(err)
    }
}
