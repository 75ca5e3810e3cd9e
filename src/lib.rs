//! Security response headers for any HTTP stack.
//!
//! Build one builder per header kind, collect them in a [`Secure`]
//! aggregator, then apply the rendered set to a response through the
//! [`ResponseLike`] adapter trait.
//!
//! ```
//! use secure_headers::{Secure, SecureOptions};
//! use secure_headers::headers::{ContentSecurityPolicy, StrictTransportSecurity};
//!
//! let mut csp = ContentSecurityPolicy::new();
//! csp.default_src(&["'self'"]).img_src(&["'self'", "cdn.example.com"]);
//!
//! let mut hsts = StrictTransportSecurity::new();
//! hsts.max_age(31536000)?.include_subdomains();
//!
//! let secure = Secure::new(SecureOptions {
//!     csp: Some(csp),
//!     hsts: Some(hsts),
//!     ..SecureOptions::default()
//! });
//!
//! assert_eq!(
//!     secure.to_string(),
//!     "Content-Security-Policy: default-src 'self'; img-src 'self' cdn.example.com\n\
//!      Strict-Transport-Security: max-age=31536000; includeSubDomains"
//! );
//! # Ok::<(), secure_headers::SecureError>(())
//! ```

pub mod config;
pub mod error;
pub mod headers;
pub mod http;
pub mod secure;

pub use config::SecureConfig;
pub use error::SecureError;
pub use http::{HttpResponse, ResponseLike};
pub use secure::{Preset, Secure, SecureOptions, SecurityHeader};
