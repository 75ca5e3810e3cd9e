use thiserror::Error;

/// Everything that can go wrong while building or applying security headers.
///
/// None of these are transient: each one points at a configuration or
/// programming mistake and is returned to the caller as-is.
#[derive(Error, Debug)]
pub enum SecureError {
    #[error("invalid value {value} for directive `{directive}`: must be a non-negative integer")]
    InvalidDirectiveValue { directive: &'static str, value: i64 },

    #[error("Unknown preset: {0}")]
    UnknownPreset(String),

    #[error("response type `{0}` does not support setting headers")]
    UnsupportedResponseType(&'static str),

    #[error("response type `{0}` has an asynchronous header setter; use apply_headers_async")]
    SynchronousContextViolation(&'static str),

    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Config(#[from] toml::de::Error),
}
