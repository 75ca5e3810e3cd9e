//! `Cache-Control` builder.
//!
//! Directives are comma separated and de-duplicated, so calling
//! [`CacheControl::no_store`] twice only emits `no-store` once.

use crate::error::SecureError;
use crate::headers::directives::DirectiveList;
use crate::headers::validator::Validator;
use crate::headers::{HeaderSpec, SecureHeader};

const SEPARATOR: &str = ", ";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheControl {
    directives: DirectiveList,
}

impl CacheControl {
    pub fn new() -> Self {
        Self::default()
    }

    fn build(&mut self, directive: String) -> &mut Self {
        self.directives.push_unique(directive);
        self
    }

    fn build_seconds(
        &mut self,
        directive: &'static str,
        seconds: i64,
    ) -> Result<&mut Self, SecureError> {
        let seconds = Validator::non_negative(directive, seconds)?;
        Ok(self.build(format!("{}={}", directive, seconds)))
    }

    /// Replaces every directive with a literal value.
    pub fn set(&mut self, value: &str) -> &mut Self {
        self.directives.replace(value);
        self
    }

    pub fn clear(&mut self) -> &mut Self {
        self.directives.clear();
        self
    }

    pub fn immutable(&mut self) -> &mut Self {
        self.build("immutable".to_string())
    }

    pub fn max_age(&mut self, seconds: i64) -> Result<&mut Self, SecureError> {
        self.build_seconds("max-age", seconds)
    }

    pub fn must_revalidate(&mut self) -> &mut Self {
        self.build("must-revalidate".to_string())
    }

    pub fn must_understand(&mut self) -> &mut Self {
        self.build("must-understand".to_string())
    }

    pub fn no_cache(&mut self) -> &mut Self {
        self.build("no-cache".to_string())
    }

    pub fn no_store(&mut self) -> &mut Self {
        self.build("no-store".to_string())
    }

    pub fn no_transform(&mut self) -> &mut Self {
        self.build("no-transform".to_string())
    }

    pub fn private(&mut self) -> &mut Self {
        self.build("private".to_string())
    }

    pub fn proxy_revalidate(&mut self) -> &mut Self {
        self.build("proxy-revalidate".to_string())
    }

    pub fn public(&mut self) -> &mut Self {
        self.build("public".to_string())
    }

    /// Shared-cache lifetime, overrides `max-age` for proxies and CDNs.
    pub fn s_maxage(&mut self, seconds: i64) -> Result<&mut Self, SecureError> {
        self.build_seconds("s-maxage", seconds)
    }

    pub fn stale_if_error(&mut self, seconds: i64) -> Result<&mut Self, SecureError> {
        self.build_seconds("stale-if-error", seconds)
    }

    pub fn stale_while_revalidate(&mut self, seconds: i64) -> Result<&mut Self, SecureError> {
        self.build_seconds("stale-while-revalidate", seconds)
    }
}

impl SecureHeader for CacheControl {
    fn header_name(&self) -> &str {
        HeaderSpec::CACHE_CONTROL.name
    }

    fn header_value(&self) -> String {
        self.directives
            .render(SEPARATOR, HeaderSpec::CACHE_CONTROL.default_value)
    }
}
