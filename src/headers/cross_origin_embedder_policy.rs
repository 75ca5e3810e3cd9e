//! `Cross-Origin-Embedder-Policy` builder. Holds a single value.
//!
//! The default, `require-corp`, blocks cross-origin resources that do not
//! opt in through CORP or CORS, which can break third-party embeds.

use crate::headers::{HeaderSpec, SecureHeader};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrossOriginEmbedderPolicy {
    value: String,
}

impl Default for CrossOriginEmbedderPolicy {
    fn default() -> Self {
        Self {
            value: HeaderSpec::CROSS_ORIGIN_EMBEDDER_POLICY.default_value.to_string(),
        }
    }
}

impl CrossOriginEmbedderPolicy {
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

    pub fn unsafe_none(&mut self) -> &mut Self {
        self.set("unsafe-none")
    }

    pub fn require_corp(&mut self) -> &mut Self {
        self.set("require-corp")
    }

    pub fn credentialless(&mut self) -> &mut Self {
        self.set("credentialless")
    }
}

impl SecureHeader for CrossOriginEmbedderPolicy {
    fn header_name(&self) -> &str {
        HeaderSpec::CROSS_ORIGIN_EMBEDDER_POLICY.name
    }

    fn header_value(&self) -> String {
        self.value.clone()
    }
}
