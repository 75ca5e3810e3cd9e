//! `Referrer-Policy` builder.
//!
//! Several policies may be listed as a fallback chain; browsers use the
//! last one they understand. Repeated policies are dropped.

use crate::headers::directives::DirectiveList;
use crate::headers::{HeaderSpec, SecureHeader};

const SEPARATOR: &str = ", ";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferrerPolicy {
    directives: DirectiveList,
}

impl ReferrerPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    fn build(&mut self, policy: &str) -> &mut Self {
        self.directives.push_unique(policy.to_string());
        self
    }

    /// Replaces every policy with a literal value.
    pub fn set(&mut self, value: &str) -> &mut Self {
        self.directives.replace(value);
        self
    }

    pub fn clear(&mut self) -> &mut Self {
        self.directives.clear();
        self
    }

    pub fn no_referrer(&mut self) -> &mut Self {
        self.build("no-referrer")
    }

    pub fn no_referrer_when_downgrade(&mut self) -> &mut Self {
        self.build("no-referrer-when-downgrade")
    }

    pub fn origin(&mut self) -> &mut Self {
        self.build("origin")
    }

    pub fn origin_when_cross_origin(&mut self) -> &mut Self {
        self.build("origin-when-cross-origin")
    }

    pub fn same_origin(&mut self) -> &mut Self {
        self.build("same-origin")
    }

    pub fn strict_origin(&mut self) -> &mut Self {
        self.build("strict-origin")
    }

    pub fn strict_origin_when_cross_origin(&mut self) -> &mut Self {
        self.build("strict-origin-when-cross-origin")
    }

    pub fn unsafe_url(&mut self) -> &mut Self {
        self.build("unsafe-url")
    }
}

impl SecureHeader for ReferrerPolicy {
    fn header_name(&self) -> &str {
        HeaderSpec::REFERRER_POLICY.name
    }

    fn header_value(&self) -> String {
        self.directives
            .render(SEPARATOR, HeaderSpec::REFERRER_POLICY.default_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_value() {
        assert_eq!(ReferrerPolicy::new().header_value(), "strict-origin-when-cross-origin");
    }

    #[test]
    fn single_policies() {
        let cases: [(fn(&mut ReferrerPolicy) -> &mut ReferrerPolicy, &str); 8] = [
            (ReferrerPolicy::no_referrer, "no-referrer"),
            (ReferrerPolicy::no_referrer_when_downgrade, "no-referrer-when-downgrade"),
            (ReferrerPolicy::origin, "origin"),
            (ReferrerPolicy::origin_when_cross_origin, "origin-when-cross-origin"),
            (ReferrerPolicy::same_origin, "same-origin"),
            (ReferrerPolicy::strict_origin, "strict-origin"),
            (ReferrerPolicy::strict_origin_when_cross_origin, "strict-origin-when-cross-origin"),
            (ReferrerPolicy::unsafe_url, "unsafe-url"),
        ];

        for (apply, expected) in cases {
            let mut policy = ReferrerPolicy::new();
            apply(&mut policy);
            assert_eq!(policy.header_value(), expected);
        }
    }

    #[test]
    fn fallback_chain_without_duplicates() {
        let mut policy = ReferrerPolicy::new();
        policy.no_referrer().strict_origin_when_cross_origin().no_referrer();
        assert_eq!(policy.header_value(), "no-referrer, strict-origin-when-cross-origin");
    }

    #[test]
    fn set_then_clear() {
        let mut policy = ReferrerPolicy::new();
        policy.set("custom-policy");
        assert_eq!(policy.header_value(), "custom-policy");

        policy.clear();
        assert_eq!(policy.header_value(), "strict-origin-when-cross-origin");
    }
}
