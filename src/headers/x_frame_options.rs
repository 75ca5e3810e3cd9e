//! `X-Frame-Options` builder.
//!
//! Superseded by the CSP `frame-ancestors` directive in modern browsers but
//! still honoured by older ones.

use crate::headers::{HeaderSpec, SecureHeader};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XFrameOptions {
    value: String,
}

impl Default for XFrameOptions {
    fn default() -> Self {
        Self {
            value: HeaderSpec::X_FRAME_OPTIONS.default_value.to_string(),
        }
    }
}

impl XFrameOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, value: &str) -> &mut Self {
        self.value = value.to_string();
        self
    }

    pub fn clear(&mut self) -> &mut Self {
        *self = Self::default();
        self
    }

    pub fn deny(&mut self) -> &mut Self {
        self.set("DENY")
    }

    pub fn sameorigin(&mut self) -> &mut Self {
        self.set("SAMEORIGIN")
    }
}

impl SecureHeader for XFrameOptions {
    fn header_name(&self) -> &str {
        HeaderSpec::X_FRAME_OPTIONS.name
    }

    fn header_value(&self) -> String {
        self.value.clone()
    }
}
