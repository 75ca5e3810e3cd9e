//! `Cross-Origin-Opener-Policy` builder. Holds a single value.

use crate::headers::{HeaderSpec, SecureHeader};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrossOriginOpenerPolicy {
    value: String,
}

impl Default for CrossOriginOpenerPolicy {
    fn default() -> Self {
        Self {
            value: HeaderSpec::CROSS_ORIGIN_OPENER_POLICY.default_value.to_string(),
        }
    }
}

impl CrossOriginOpenerPolicy {
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

    pub fn same_origin_allow_popups(&mut self) -> &mut Self {
        self.set("same-origin-allow-popups")
    }

    pub fn same_origin(&mut self) -> &mut Self {
        self.set("same-origin")
    }
}

impl SecureHeader for CrossOriginOpenerPolicy {
    fn header_name(&self) -> &str {
        HeaderSpec::CROSS_ORIGIN_OPENER_POLICY.name
    }

    fn header_value(&self) -> String {
        self.value.clone()
    }
}
