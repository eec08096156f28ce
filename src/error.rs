use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    /// Compiling, deriving or evaluating the user expression failed.
    #[error("invalid expression `{source_text}`: {reason}")]
    InvalidExpression { source_text: String, reason: String },

    /// The formula typesetting collaborator rejected its input.
    #[error("formula typesetting failed: {0}")]
    Typeset(String),
}

impl ChartError {
    #[must_use]
    pub fn invalid_expression(source_text: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidExpression {
            source_text: source_text.into(),
            reason: reason.into(),
        }
    }
}
