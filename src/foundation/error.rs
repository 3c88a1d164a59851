pub type StardriftResult<T> = Result<T, StardriftError>;

#[derive(thiserror::Error, Debug)]
pub enum StardriftError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("sample error: {0}")]
    Sample(String),

    #[error("stage error: {0}")]
    Stage(String),

    #[error("serialization error: {0}")]
    Serde(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StardriftError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn sample(msg: impl Into<String>) -> Self {
        Self::Sample(msg.into())
    }

    pub fn stage(msg: impl Into<String>) -> Self {
        Self::Stage(msg.into())
    }

    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}
