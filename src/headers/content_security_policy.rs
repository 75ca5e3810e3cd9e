//! `Content-Security-Policy` builder.
//!
//! Directives render as `name source source ...` and are joined with `"; "`.
//! Unlike the idempotent headers, directives are appended as given: calling
//! [`ContentSecurityPolicy::script_src`] twice produces two `script-src`
//! entries. Call [`ContentSecurityPolicy::clear`] first to replace a policy.

use crate::headers::directives::{DirectiveList, spaced};
use crate::headers::{HeaderSpec, SecureHeader};

const SEPARATOR: &str = "; ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentSecurityPolicy {
    header: HeaderSpec,
    directives: DirectiveList,
}

impl Default for ContentSecurityPolicy {
    fn default() -> Self {
        Self {
            header: HeaderSpec::CONTENT_SECURITY_POLICY,
            directives: DirectiveList::new(),
        }
    }
}

impl ContentSecurityPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Formats a nonce source expression, `'nonce-<value>'`, for use in
    /// `script-src` or `style-src`.
    pub fn nonce(value: &str) -> String {
        format!("'nonce-{}'", value)
    }

    /// Replaces every directive with a literal policy string.
    pub fn set(&mut self, value: &str) -> &mut Self {
        self.directives.replace(value);
        self
    }

    pub fn clear(&mut self) -> &mut Self {
        self.directives.clear();
        self
    }

    /// Emits the policy as `Content-Security-Policy-Report-Only`.
    /// Directives are left untouched.
    pub fn report_only(&mut self) -> &mut Self {
        self.header = HeaderSpec::CONTENT_SECURITY_POLICY_REPORT_ONLY;
        self
    }

    pub fn is_report_only(&self) -> bool {
        self.header == HeaderSpec::CONTENT_SECURITY_POLICY_REPORT_ONLY
    }

    /// Appends an arbitrary directive, for anything without a named method.
    pub fn custom_directive(&mut self, directive: &str, sources: &[&str]) -> &mut Self {
        self.directives.push(spaced(directive, sources));
        self
    }

    pub fn base_uri(&mut self, sources: &[&str]) -> &mut Self {
        self.custom_directive("base-uri", sources)
    }

    pub fn child_src(&mut self, sources: &[&str]) -> &mut Self {
        self.custom_directive("child-src", sources)
    }

    pub fn connect_src(&mut self, sources: &[&str]) -> &mut Self {
        self.custom_directive("connect-src", sources)
    }

    pub fn default_src(&mut self, sources: &[&str]) -> &mut Self {
        self.custom_directive("default-src", sources)
    }

    pub fn font_src(&mut self, sources: &[&str]) -> &mut Self {
        self.custom_directive("font-src", sources)
    }

    pub fn form_action(&mut self, sources: &[&str]) -> &mut Self {
        self.custom_directive("form-action", sources)
    }

    pub fn frame_ancestors(&mut self, sources: &[&str]) -> &mut Self {
        self.custom_directive("frame-ancestors", sources)
    }

    pub fn frame_src(&mut self, sources: &[&str]) -> &mut Self {
        self.custom_directive("frame-src", sources)
    }

    pub fn img_src(&mut self, sources: &[&str]) -> &mut Self {
        self.custom_directive("img-src", sources)
    }

    pub fn manifest_src(&mut self, sources: &[&str]) -> &mut Self {
        self.custom_directive("manifest-src", sources)
    }

    pub fn media_src(&mut self, sources: &[&str]) -> &mut Self {
        self.custom_directive("media-src", sources)
    }

    pub fn object_src(&mut self, sources: &[&str]) -> &mut Self {
        self.custom_directive("object-src", sources)
    }

    /// Names a reporting endpoint group declared in a `Reporting-Endpoints` header.
    pub fn report_to(&mut self, groups: &[&str]) -> &mut Self {
        self.custom_directive("report-to", groups)
    }

    pub fn report_uri(&mut self, uris: &[&str]) -> &mut Self {
        self.custom_directive("report-uri", uris)
    }

    /// With no values this is the most restrictive sandbox.
    pub fn sandbox(&mut self, values: &[&str]) -> &mut Self {
        self.custom_directive("sandbox", values)
    }

    pub fn script_src(&mut self, sources: &[&str]) -> &mut Self {
        self.custom_directive("script-src", sources)
    }

    pub fn style_src(&mut self, sources: &[&str]) -> &mut Self {
        self.custom_directive("style-src", sources)
    }

    pub fn upgrade_insecure_requests(&mut self) -> &mut Self {
        self.custom_directive("upgrade-insecure-requests", &[])
    }

    pub fn worker_src(&mut self, sources: &[&str]) -> &mut Self {
        self.custom_directive("worker-src", sources)
    }
}

impl SecureHeader for ContentSecurityPolicy {
    fn header_name(&self) -> &str {
        self.header.name
    }

    fn header_value(&self) -> String {
        self.directives.render(SEPARATOR, self.header.default_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_value() {
        let csp = ContentSecurityPolicy::new();
        assert_eq!(csp.header_name(), "Content-Security-Policy");
        assert_eq!(
            csp.header_value(),
            "default-src 'self'; script-src 'self'; style-src 'self'; object-src 'none'"
        );
    }

    #[test]
    fn call_order_is_kept() {
        let mut csp = ContentSecurityPolicy::new();
        csp.default_src(&["'self'"]).img_src(&["'self'", "cdn.example.com"]);
        assert_eq!(csp.header_value(), "default-src 'self'; img-src 'self' cdn.example.com");

        let mut reversed = ContentSecurityPolicy::new();
        reversed.img_src(&["'self'", "cdn.example.com"]).default_src(&["'self'"]);
        assert_eq!(reversed.header_value(), "img-src 'self' cdn.example.com; default-src 'self'");
    }

    #[test]
    fn repeated_directive_is_appended_not_replaced() {
        let mut csp = ContentSecurityPolicy::new();
        csp.script_src(&["'self'"])
            .style_src(&["'self'"])
            .script_src(&["https://cdn.example.com"]);
        assert_eq!(
            csp.header_value(),
            "script-src 'self'; style-src 'self'; script-src https://cdn.example.com"
        );
    }

    #[test]
    fn bare_directives() {
        let mut csp = ContentSecurityPolicy::new();
        csp.upgrade_insecure_requests()
            .sandbox(&[])
            .custom_directive("block-all-mixed-content", &[]);
        assert_eq!(
            csp.header_value(),
            "upgrade-insecure-requests; sandbox; block-all-mixed-content"
        );
    }

    #[test]
    fn nonce_formatting() {
        let nonce = ContentSecurityPolicy::nonce("r4nd0m");
        assert_eq!(nonce, "'nonce-r4nd0m'");

        let mut csp = ContentSecurityPolicy::new();
        csp.script_src(&["'self'", nonce.as_str()]);
        assert_eq!(csp.header_value(), "script-src 'self' 'nonce-r4nd0m'");
    }

    #[test]
    fn report_only_switches_name_only() {
        let mut csp = ContentSecurityPolicy::new();
        csp.default_src(&["'none'"]).report_to(&["csp-endpoint"]);
        let before = csp.header_value();

        csp.report_only();
        assert!(csp.is_report_only());
        assert_eq!(csp.header_name(), "Content-Security-Policy-Report-Only");
        assert_eq!(csp.header_value(), before);
    }

    #[test]
    fn set_and_clear() {
        let mut csp = ContentSecurityPolicy::new();
        csp.frame_ancestors(&["'none'"]).set("default-src 'none'");
        assert_eq!(csp.header_value(), "default-src 'none'");

        csp.clear();
        assert_eq!(csp.header_value(), ContentSecurityPolicy::new().header_value());
    }

    #[test]
    fn full_vocabulary() {
        let mut csp = ContentSecurityPolicy::new();
        csp.base_uri(&["'self'"])
            .child_src(&["'none'"])
            .connect_src(&["'self'", "wss://api.example.com"])
            .font_src(&["fonts.gstatic.com"])
            .form_action(&["'self'"])
            .frame_src(&["youtube.com"])
            .manifest_src(&["'self'"])
            .media_src(&["media.example.com"])
            .object_src(&["'none'"])
            .report_uri(&["/csp-report"])
            .worker_src(&["'self'", "blob:"]);
        assert_eq!(
            csp.header_value(),
            "base-uri 'self'; child-src 'none'; connect-src 'self' wss://api.example.com; \
             font-src fonts.gstatic.com; form-action 'self'; frame-src youtube.com; \
             manifest-src 'self'; media-src media.example.com; object-src 'none'; \
             report-uri /csp-report; worker-src 'self' blob:"
        );
    }
}
