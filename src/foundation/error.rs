pub type PlaceholderResult<T> = Result<T, PlaceholderError>;

#[derive(thiserror::Error, Debug)]
pub enum PlaceholderError {
    #[error("missing dimension: {0}")]
    MissingDimension(String),

    #[error("invalid size: {0}")]
    InvalidSize(String),

    #[error("invalid ratio: {0}")]
    InvalidRatio(String),

    #[error("invalid color: {0}")]
    InvalidColor(String),

    #[error("render error: {0}")]
    Render(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PlaceholderError {
    pub fn missing_dimension(msg: impl Into<String>) -> Self {
        Self::MissingDimension(msg.into())
    }

    pub fn invalid_size(msg: impl Into<String>) -> Self {
        Self::InvalidSize(msg.into())
    }

    pub fn invalid_ratio(msg: impl Into<String>) -> Self {
        Self::InvalidRatio(msg.into())
    }

    pub fn invalid_color(msg: impl Into<String>) -> Self {
        Self::InvalidColor(msg.into())
    }

    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// True for errors caused by user input, as opposed to I/O or rendering failures.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::MissingDimension(_)
                | Self::InvalidSize(_)
                | Self::InvalidRatio(_)
                | Self::InvalidColor(_)
        )
    }
}
