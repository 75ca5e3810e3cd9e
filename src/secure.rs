//! The [`Secure`] aggregator.
//!
//! `Secure` owns the headers a caller chose to emit and renders them into an
//! ordered `name -> value` map. Emission order is fixed by slot, not by the
//! order fields were filled in:
//!
//! ```text
//! Cache-Control
//! Cross-Origin-Embedder-Policy
//! Cross-Origin-Opener-Policy
//! Content-Security-Policy (or -Report-Only)
//! Strict-Transport-Security
//! Permissions-Policy
//! Referrer-Policy
//! Server
//! X-Content-Type-Options
//! X-Frame-Options
//! custom headers, in the order given
//! ```
//!
//! The rendered map is computed on first access and kept for the lifetime
//! of the aggregator. Mutating a member through [`Secure::headers_list_mut`]
//! afterwards does NOT refresh it; build a new `Secure` instead.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use once_cell::sync::OnceCell;
use tracing::debug;

use crate::error::SecureError;
use crate::headers::{
    CacheControl, ContentSecurityPolicy, CrossOriginEmbedderPolicy, CrossOriginOpenerPolicy,
    CustomHeader, PermissionsPolicy, ReferrerPolicy, SecureHeader, Server,
    StrictTransportSecurity, XContentTypeOptions, XFrameOptions,
};

/// One configured member of a [`Secure`] aggregator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SecurityHeader {
    CacheControl(CacheControl),
    CrossOriginEmbedderPolicy(CrossOriginEmbedderPolicy),
    CrossOriginOpenerPolicy(CrossOriginOpenerPolicy),
    ContentSecurityPolicy(ContentSecurityPolicy),
    StrictTransportSecurity(StrictTransportSecurity),
    PermissionsPolicy(PermissionsPolicy),
    ReferrerPolicy(ReferrerPolicy),
    Server(Server),
    XContentTypeOptions(XContentTypeOptions),
    XFrameOptions(XFrameOptions),
    Custom(CustomHeader),
}

impl SecurityHeader {
    fn as_header(&self) -> &dyn SecureHeader {
        match self {
            SecurityHeader::CacheControl(h) => h,
            SecurityHeader::CrossOriginEmbedderPolicy(h) => h,
            SecurityHeader::CrossOriginOpenerPolicy(h) => h,
            SecurityHeader::ContentSecurityPolicy(h) => h,
            SecurityHeader::StrictTransportSecurity(h) => h,
            SecurityHeader::PermissionsPolicy(h) => h,
            SecurityHeader::ReferrerPolicy(h) => h,
            SecurityHeader::Server(h) => h,
            SecurityHeader::XContentTypeOptions(h) => h,
            SecurityHeader::XFrameOptions(h) => h,
            SecurityHeader::Custom(h) => h,
        }
    }
}

impl SecureHeader for SecurityHeader {
    fn header_name(&self) -> &str {
        self.as_header().header_name()
    }

    fn header_value(&self) -> String {
        self.as_header().header_value()
    }
}

impl fmt::Display for SecurityHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.header_name(), self.header_value())
    }
}

/// The header slots of a [`Secure`] aggregator. Only `Some` slots and the
/// entries of `custom` are emitted; nothing is filled in implicitly.
#[derive(Debug, Clone, Default)]
pub struct SecureOptions {
    pub cache: Option<CacheControl>,
    pub coep: Option<CrossOriginEmbedderPolicy>,
    pub coop: Option<CrossOriginOpenerPolicy>,
    pub csp: Option<ContentSecurityPolicy>,
    pub hsts: Option<StrictTransportSecurity>,
    pub permissions: Option<PermissionsPolicy>,
    pub referrer: Option<ReferrerPolicy>,
    pub server: Option<Server>,
    pub xcto: Option<XContentTypeOptions>,
    pub xfo: Option<XFrameOptions>,
    pub custom: Vec<CustomHeader>,
}

impl SecureOptions {
    fn into_headers(self) -> Vec<SecurityHeader> {
        let well_known = [
            self.cache.map(SecurityHeader::CacheControl),
            self.coep.map(SecurityHeader::CrossOriginEmbedderPolicy),
            self.coop.map(SecurityHeader::CrossOriginOpenerPolicy),
            self.csp.map(SecurityHeader::ContentSecurityPolicy),
            self.hsts.map(SecurityHeader::StrictTransportSecurity),
            self.permissions.map(SecurityHeader::PermissionsPolicy),
            self.referrer.map(SecurityHeader::ReferrerPolicy),
            self.server.map(SecurityHeader::Server),
            self.xcto.map(SecurityHeader::XContentTypeOptions),
            self.xfo.map(SecurityHeader::XFrameOptions),
        ];

        well_known
            .into_iter()
            .flatten()
            .chain(self.custom.into_iter().map(SecurityHeader::Custom))
            .collect()
    }

    /// Options behind [`Secure::with_default_headers`].
    pub fn recommended() -> Self {
        let mut hsts = StrictTransportSecurity::new();
        hsts.set("max-age=31536000").include_subdomains();
        let mut xfo = XFrameOptions::new();
        xfo.deny();

        Self {
            cache: Some(CacheControl::new()),
            coop: Some(CrossOriginOpenerPolicy::new()),
            csp: Some(ContentSecurityPolicy::new()),
            hsts: Some(hsts),
            permissions: Some(PermissionsPolicy::new()),
            referrer: Some(ReferrerPolicy::new()),
            server: Some(Server::new()),
            xcto: Some(XContentTypeOptions::new()),
            xfo: Some(xfo),
            ..Self::default()
        }
    }

    /// Options behind [`Secure::from_preset`].
    pub fn preset(preset: Preset) -> Self {
        match preset {
            Preset::Basic => {
                let mut hsts = StrictTransportSecurity::new();
                hsts.set("max-age=63072000");

                Self {
                    cache: Some(CacheControl::new()),
                    hsts: Some(hsts),
                    referrer: Some(ReferrerPolicy::new()),
                    server: Some(Server::new()),
                    xcto: Some(XContentTypeOptions::new()),
                    xfo: Some(XFrameOptions::new()),
                    ..Self::default()
                }
            }
            Preset::Strict => {
                let mut csp = ContentSecurityPolicy::new();
                csp.default_src(&["'self'"])
                    .script_src(&["'self'"])
                    .style_src(&["'self'"])
                    .object_src(&["'none'"])
                    .base_uri(&["'none'"])
                    .frame_ancestors(&["'none'"]);

                let mut hsts = StrictTransportSecurity::new();
                hsts.set("max-age=63072000").include_subdomains().preload();

                let mut referrer = ReferrerPolicy::new();
                referrer.no_referrer();

                let mut xfo = XFrameOptions::new();
                xfo.deny();

                Self {
                    cache: Some(CacheControl::new()),
                    coep: Some(CrossOriginEmbedderPolicy::new()),
                    coop: Some(CrossOriginOpenerPolicy::new()),
                    csp: Some(csp),
                    hsts: Some(hsts),
                    permissions: Some(PermissionsPolicy::new()),
                    referrer: Some(referrer),
                    server: Some(Server::new()),
                    xcto: Some(XContentTypeOptions::new()),
                    xfo: Some(xfo),
                    custom: Vec::new(),
                }
            }
        }
    }
}

/// Named header bundles. The set is closed: any other name is rejected
/// with [`SecureError::UnknownPreset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    Basic,
    Strict,
}

impl FromStr for Preset {
    type Err = SecureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "basic" => Ok(Preset::Basic),
            "strict" => Ok(Preset::Strict),
            _ => Err(SecureError::UnknownPreset(s.to_string())),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Preset::Basic => write!(f, "basic"),
            Preset::Strict => write!(f, "strict"),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Secure {
    headers_list: Vec<SecurityHeader>,
    rendered: OnceCell<IndexMap<String, String>>,
}

impl Secure {
    pub fn new(options: SecureOptions) -> Self {
        Self {
            headers_list: options.into_headers(),
            rendered: OnceCell::new(),
        }
    }

    /// A general-purpose set of headers:
    ///
    /// | header | value |
    /// |---|---|
    /// | Cache-Control | `no-store` |
    /// | Cross-Origin-Opener-Policy | `same-origin` |
    /// | Content-Security-Policy | `default-src 'self'; script-src 'self'; style-src 'self'; object-src 'none'` |
    /// | Strict-Transport-Security | `max-age=31536000; includeSubDomains` |
    /// | Permissions-Policy | `geolocation=(), microphone=(), camera=()` |
    /// | Referrer-Policy | `strict-origin-when-cross-origin` |
    /// | Server | empty |
    /// | X-Content-Type-Options | `nosniff` |
    /// | X-Frame-Options | `DENY` |
    pub fn with_default_headers() -> Self {
        Self::new(SecureOptions::recommended())
    }

    pub fn from_preset(preset: Preset) -> Self {
        Self::new(SecureOptions::preset(preset))
    }

    /// Parses `name` as a [`Preset`] and builds it.
    pub fn from_preset_name(name: &str) -> Result<Self, SecureError> {
        Ok(Self::from_preset(name.parse()?))
    }

    /// Rendered `name -> value` map in emission order.
    ///
    /// Rendered once; later calls return the cached map even if a member was
    /// mutated in between. A header name used twice keeps its first
    /// position and its last value.
    pub fn headers(&self) -> &IndexMap<String, String> {
        self.rendered.get_or_init(|| {
            let rendered: IndexMap<String, String> = self
                .headers_list
                .iter()
                .map(|header| (header.header_name().to_string(), header.header_value()))
                .collect();
            debug!(count = rendered.len(), "rendered security headers");
            rendered
        })
    }

    pub fn is_rendered(&self) -> bool {
        self.rendered.get().is_some()
    }

    pub fn headers_list(&self) -> &[SecurityHeader] {
        &self.headers_list
    }

    /// Mutable access to the members. Does not invalidate a map already
    /// returned by [`Secure::headers`].
    pub fn headers_list_mut(&mut self) -> &mut [SecurityHeader] {
        &mut self.headers_list
    }

    /// Number of distinct headers emitted.
    pub fn len(&self) -> usize {
        self.headers().len()
    }

    pub fn is_empty(&self) -> bool {
        self.headers_list.is_empty()
    }
}

impl fmt::Display for Secure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (name, value)) in self.headers().iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}: {}", name, value)?;
        }
        Ok(())
    }
}
