//! `Strict-Transport-Security` builder.

use crate::error::SecureError;
use crate::headers::directives::DirectiveList;
use crate::headers::validator::Validator;
use crate::headers::{HeaderSpec, SecureHeader};

const SEPARATOR: &str = "; ";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StrictTransportSecurity {
    directives: DirectiveList,
}

impl StrictTransportSecurity {
    pub fn new() -> Self {
        Self::default()
    }

    fn build(&mut self, directive: String) -> &mut Self {
        self.directives.push_unique(directive);
        self
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

    pub fn max_age(&mut self, seconds: i64) -> Result<&mut Self, SecureError> {
        let seconds = Validator::non_negative("max-age", seconds)?;
        Ok(self.build(format!("max-age={}", seconds)))
    }

    pub fn include_subdomains(&mut self) -> &mut Self {
        self.build("includeSubDomains".to_string())
    }

    /// Opts into browser preload lists. Requires `max-age` of at least one
    /// year and `includeSubDomains` to be accepted by the lists.
    pub fn preload(&mut self) -> &mut Self {
        self.build("preload".to_string())
    }
}

impl SecureHeader for StrictTransportSecurity {
    fn header_name(&self) -> &str {
        HeaderSpec::STRICT_TRANSPORT_SECURITY.name
    }

    fn header_value(&self) -> String {
        self.directives
            .render(SEPARATOR, HeaderSpec::STRICT_TRANSPORT_SECURITY.default_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_value() {
        assert_eq!(StrictTransportSecurity::new().header_value(), "max-age=31536000");
    }

    #[test]
    fn full_policy() {
        let mut hsts = StrictTransportSecurity::new();
        hsts.max_age(63072000).unwrap().include_subdomains().preload();
        assert_eq!(hsts.header_value(), "max-age=63072000; includeSubDomains; preload");
    }

    #[test]
    fn keyword_casing() {
        let mut hsts = StrictTransportSecurity::new();
        hsts.include_subdomains();
        assert_eq!(hsts.header_value(), "includeSubDomains");
    }

    #[test]
    fn zero_max_age_is_valid() {
        let mut hsts = StrictTransportSecurity::new();
        hsts.max_age(0).unwrap();
        assert_eq!(hsts.header_value(), "max-age=0");
    }

    #[test]
    fn negative_max_age_rejected() {
        let mut hsts = StrictTransportSecurity::new();
        let err = hsts.max_age(-1).unwrap_err();
        assert!(matches!(err, SecureError::InvalidDirectiveValue { value: -1, .. }));
    }

    #[test]
    fn duplicates_dropped() {
        let mut hsts = StrictTransportSecurity::new();
        hsts.preload().preload().include_subdomains();
        assert_eq!(hsts.header_value(), "preload; includeSubDomains");
    }

    #[test]
    fn clear_reverts_to_default() {
        let mut hsts = StrictTransportSecurity::new();
        hsts.set("max-age=10").clear();
        assert_eq!(hsts.header_value(), StrictTransportSecurity::new().header_value());
    }
}
