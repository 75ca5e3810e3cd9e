//! Security header builders.
//!
//! Each header kind has its own builder that accumulates directives and
//! renders exactly one header value. Builders are configured through
//! `&mut self` mutators returning `&mut Self`, so calls chain:
//!
//! ```
//! use secure_headers::headers::{ContentSecurityPolicy, SecureHeader};
//!
//! let mut csp = ContentSecurityPolicy::new();
//! csp.default_src(&["'self'"]).img_src(&["'self'", "cdn.example.com"]);
//! assert_eq!(csp.header_value(), "default-src 'self'; img-src 'self' cdn.example.com");
//! ```
//!
//! A builder with no directives renders its [`HeaderSpec`] default.

/// Implements `Display` as the `name: value` diagnostic line.
macro_rules! impl_header_display {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl std::fmt::Display for $ty {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    use $crate::headers::SecureHeader;
                    write!(f, "{}: {}", self.header_name(), self.header_value())
                }
            }
        )+
    };
}

pub mod cache_control;
pub mod content_security_policy;
pub mod cross_origin_embedder_policy;
pub mod cross_origin_opener_policy;
pub mod custom_header;
pub mod directives;
pub mod permissions_policy;
pub mod referrer_policy;
pub mod server;
pub mod strict_transport_security;
pub mod validator;
pub mod x_content_type_options;
pub mod x_frame_options;

pub use cache_control::CacheControl;
pub use content_security_policy::ContentSecurityPolicy;
pub use cross_origin_embedder_policy::CrossOriginEmbedderPolicy;
pub use cross_origin_opener_policy::CrossOriginOpenerPolicy;
pub use custom_header::CustomHeader;
pub use permissions_policy::PermissionsPolicy;
pub use referrer_policy::ReferrerPolicy;
pub use server::Server;
pub use strict_transport_security::StrictTransportSecurity;
pub use x_content_type_options::XContentTypeOptions;
pub use x_frame_options::XFrameOptions;

impl_header_display!(
    CacheControl,
    ContentSecurityPolicy,
    CrossOriginEmbedderPolicy,
    CrossOriginOpenerPolicy,
    CustomHeader,
    PermissionsPolicy,
    ReferrerPolicy,
    Server,
    StrictTransportSecurity,
    XContentTypeOptions,
    XFrameOptions,
);

/// A header that can be rendered to a single `name: value` pair.
pub trait SecureHeader {
    fn header_name(&self) -> &str;

    /// Renders the current value. Never fails.
    fn header_value(&self) -> String;
}

/// Canonical wire name and default value of a well-known header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderSpec {
    pub name: &'static str,
    pub default_value: &'static str,
}

impl HeaderSpec {
    pub const CACHE_CONTROL: HeaderSpec = HeaderSpec {
        name: "Cache-Control",
        default_value: "no-store",
    };

    pub const CONTENT_SECURITY_POLICY: HeaderSpec = HeaderSpec {
        name: "Content-Security-Policy",
        default_value: "default-src 'self'; script-src 'self'; style-src 'self'; object-src 'none'",
    };

    /// Same default as [`HeaderSpec::CONTENT_SECURITY_POLICY`], only the name differs.
    pub const CONTENT_SECURITY_POLICY_REPORT_ONLY: HeaderSpec = HeaderSpec {
        name: "Content-Security-Policy-Report-Only",
        default_value: HeaderSpec::CONTENT_SECURITY_POLICY.default_value,
    };

    pub const CROSS_ORIGIN_EMBEDDER_POLICY: HeaderSpec = HeaderSpec {
        name: "Cross-Origin-Embedder-Policy",
        default_value: "require-corp",
    };

    pub const CROSS_ORIGIN_OPENER_POLICY: HeaderSpec = HeaderSpec {
        name: "Cross-Origin-Opener-Policy",
        default_value: "same-origin",
    };

    pub const PERMISSIONS_POLICY: HeaderSpec = HeaderSpec {
        name: "Permissions-Policy",
        default_value: "geolocation=(), microphone=(), camera=()",
    };

    pub const REFERRER_POLICY: HeaderSpec = HeaderSpec {
        name: "Referrer-Policy",
        default_value: "strict-origin-when-cross-origin",
    };

    // Empty on purpose: hides the server implementation.
    pub const SERVER: HeaderSpec = HeaderSpec {
        name: "Server",
        default_value: "",
    };

    pub const STRICT_TRANSPORT_SECURITY: HeaderSpec = HeaderSpec {
        name: "Strict-Transport-Security",
        default_value: "max-age=31536000",
    };

    pub const X_CONTENT_TYPE_OPTIONS: HeaderSpec = HeaderSpec {
        name: "X-Content-Type-Options",
        default_value: "nosniff",
    };

    pub const X_FRAME_OPTIONS: HeaderSpec = HeaderSpec {
        name: "X-Frame-Options",
        default_value: "SAMEORIGIN",
    };
}
