//! TOML configuration for a [`Secure`] header set.
//!
//! ```toml
//! preset = "strict"              # "basic", "strict" or "default"; omit for none
//! server = "edge"                # literal override of one slot
//! content_security_policy = "default-src 'self'"
//! csp_report_only = true
//!
//! [[custom]]
//! name = "X-Robots-Tag"
//! value = "noindex"
//! ```
//!
//! A literal override installs its slot even when the preset leaves it out,
//! and replaces the preset value when it does not.

use std::path::Path;

use serde::Deserialize;
use tracing::warn;

use crate::error::SecureError;
use crate::headers::{
    CacheControl, ContentSecurityPolicy, CrossOriginEmbedderPolicy, CrossOriginOpenerPolicy,
    CustomHeader, PermissionsPolicy, ReferrerPolicy, Server, StrictTransportSecurity,
    XContentTypeOptions, XFrameOptions,
};
use crate::secure::{Secure, SecureOptions};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SecureConfig {
    pub preset: Option<String>,
    pub csp_report_only: bool,

    pub cache_control: Option<String>,
    pub cross_origin_embedder_policy: Option<String>,
    pub cross_origin_opener_policy: Option<String>,
    pub content_security_policy: Option<String>,
    pub strict_transport_security: Option<String>,
    pub permissions_policy: Option<String>,
    pub referrer_policy: Option<String>,
    pub server: Option<String>,
    pub x_content_type_options: Option<String>,
    pub x_frame_options: Option<String>,

    pub custom: Vec<CustomHeaderConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CustomHeaderConfig {
    pub name: String,
    pub value: String,
}

impl SecureConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, SecureError> {
        Ok(toml::from_str::<SecureConfig>(content)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SecureError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Like [`SecureConfig::from_file`], but logs the failure and falls back
    /// to the default (empty) config.
    pub fn from_file_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::from_file(path) {
            Ok(config) => config,
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "failed to load security header config, falling back to default"
                );
                SecureConfig::default()
            }
        }
    }

    /// Builds the aggregator: preset first, then literal overrides, then
    /// the report-only switch and custom headers.
    pub fn build(&self) -> Result<Secure, SecureError> {
        let mut options = match self.preset.as_deref() {
            None => SecureOptions::default(),
            Some(name) if name.eq_ignore_ascii_case("default") => SecureOptions::recommended(),
            Some(name) => SecureOptions::preset(name.parse()?),
        };

        override_slot(&mut options.cache, self.cache_control.as_deref(), CacheControl::set);
        override_slot(
            &mut options.coep,
            self.cross_origin_embedder_policy.as_deref(),
            CrossOriginEmbedderPolicy::set,
        );
        override_slot(
            &mut options.coop,
            self.cross_origin_opener_policy.as_deref(),
            CrossOriginOpenerPolicy::set,
        );
        override_slot(
            &mut options.csp,
            self.content_security_policy.as_deref(),
            ContentSecurityPolicy::set,
        );
        override_slot(
            &mut options.hsts,
            self.strict_transport_security.as_deref(),
            StrictTransportSecurity::set,
        );
        override_slot(
            &mut options.permissions,
            self.permissions_policy.as_deref(),
            PermissionsPolicy::set,
        );
        override_slot(&mut options.referrer, self.referrer_policy.as_deref(), ReferrerPolicy::set);
        override_slot(&mut options.server, self.server.as_deref(), Server::set);
        override_slot(
            &mut options.xcto,
            self.x_content_type_options.as_deref(),
            XContentTypeOptions::set,
        );
        override_slot(&mut options.xfo, self.x_frame_options.as_deref(), XFrameOptions::set);

        if self.csp_report_only {
            if let Some(csp) = options.csp.as_mut() {
                csp.report_only();
            }
        }

        options.custom.extend(
            self.custom
                .iter()
                .map(|header| CustomHeader::new(&header.name, &header.value)),
        );

        Ok(Secure::new(options))
    }
}

fn override_slot<T: Default>(
    slot: &mut Option<T>,
    value: Option<&str>,
    set: for<'a, 'b> fn(&'a mut T, &'b str) -> &'a mut T,
) {
    if let Some(value) = value {
        let mut header = T::default();
        set(&mut header, value);
        *slot = Some(header);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_builds_empty_aggregator() {
        let config = SecureConfig::from_toml_str("").unwrap();
        assert_eq!(config, SecureConfig::default());
        assert!(config.build().unwrap().is_empty());
    }

    #[test]
    fn preset_names() {
        for (name, hsts) in [
            ("basic", "max-age=63072000"),
            ("Strict", "max-age=63072000; includeSubDomains; preload"),
            ("default", "max-age=31536000; includeSubDomains"),
        ] {
            let config = SecureConfig {
                preset: Some(name.to_string()),
                ..SecureConfig::default()
            };
            let secure = config.build().unwrap();
            assert_eq!(secure.headers()["Strict-Transport-Security"], hsts);
        }
    }

    #[test]
    fn unknown_preset_rejected() {
        let config = SecureConfig::from_toml_str("preset = \"lenient\"").unwrap();
        assert!(matches!(
            config.build(),
            Err(SecureError::UnknownPreset(name)) if name == "lenient"
        ));
    }

    #[test]
    fn unknown_field_rejected() {
        let err = SecureConfig::from_toml_str("x_xss_protection = \"0\"").unwrap_err();
        assert!(matches!(err, SecureError::Config(_)));
    }

    #[test]
    fn override_replaces_preset_value_in_place() {
        let config = SecureConfig::from_toml_str(
            r#"
            preset = "basic"
            x_frame_options = "DENY"
            "#,
        )
        .unwrap();
        let secure = config.build().unwrap();

        let names: Vec<&str> = secure.headers().keys().map(String::as_str).collect();
        assert_eq!(
            names,
            [
                "Cache-Control",
                "Strict-Transport-Security",
                "Referrer-Policy",
                "Server",
                "X-Content-Type-Options",
                "X-Frame-Options",
            ]
        );
        assert_eq!(secure.headers()["X-Frame-Options"], "DENY");
    }

    #[test]
    fn override_adds_missing_slot_and_report_only() {
        let config = SecureConfig::from_toml_str(
            r#"
            content_security_policy = "default-src 'none'; img-src 'self'"
            csp_report_only = true

            [[custom]]
            name = "X-Robots-Tag"
            value = "noindex"

            [[custom]]
            name = "X-Build"
            value = "42"
            "#,
        )
        .unwrap();
        let secure = config.build().unwrap();

        assert_eq!(
            secure.to_string(),
            "Content-Security-Policy-Report-Only: default-src 'none'; img-src 'self'\n\
             X-Robots-Tag: noindex\n\
             X-Build: 42"
        );
    }

    #[test]
    fn every_slot_takes_a_literal_override() {
        let config = SecureConfig::from_toml_str(
            r#"
            cache_control = "no-cache"
            cross_origin_embedder_policy = "credentialless"
            cross_origin_opener_policy = "unsafe-none"
            content_security_policy = "default-src 'none'"
            strict_transport_security = "max-age=60"
            permissions_policy = "camera=(self)"
            referrer_policy = "no-referrer"
            server = "edge"
            x_content_type_options = "nosniff"
            x_frame_options = "DENY"
            "#,
        )
        .unwrap();
        let secure = config.build().unwrap();

        let pairs: Vec<(&str, &str)> = secure
            .headers()
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
            .collect();
        assert_eq!(
            pairs,
            [
                ("Cache-Control", "no-cache"),
                ("Cross-Origin-Embedder-Policy", "credentialless"),
                ("Cross-Origin-Opener-Policy", "unsafe-none"),
                ("Content-Security-Policy", "default-src 'none'"),
                ("Strict-Transport-Security", "max-age=60"),
                ("Permissions-Policy", "camera=(self)"),
                ("Referrer-Policy", "no-referrer"),
                ("Server", "edge"),
                ("X-Content-Type-Options", "nosniff"),
                ("X-Frame-Options", "DENY"),
            ]
        );
    }

    #[test]
    fn report_only_without_csp_is_ignored() {
        let config = SecureConfig {
            csp_report_only: true,
            server: Some("edge".to_string()),
            ..SecureConfig::default()
        };
        assert_eq!(config.build().unwrap().to_string(), "Server: edge");
    }

    #[test]
    fn missing_file_falls_back_to_default() {
        let config = SecureConfig::from_file_or_default("/nonexistent/secure-headers.toml");
        assert_eq!(config, SecureConfig::default());
        assert!(matches!(
            SecureConfig::from_file("/nonexistent/secure-headers.toml"),
            Err(SecureError::Io(_))
        ));
    }
}
