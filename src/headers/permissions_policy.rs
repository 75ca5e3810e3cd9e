//! `Permissions-Policy` builder.
//!
//! Every directive renders as `feature=(allowlist)`. An empty allowlist is
//! meaningful: `geolocation=()` disables the feature everywhere.
//!
//! ```
//! use secure_headers::headers::{PermissionsPolicy, SecureHeader};
//!
//! let mut policy = PermissionsPolicy::new();
//! policy.geolocation(&["self", "\"https://maps.example.com\""]).camera(&[]);
//! assert_eq!(
//!     policy.header_value(),
//!     "geolocation=(self \"https://maps.example.com\"), camera=()"
//! );
//! ```

use crate::headers::directives::{DirectiveList, parenthesized};
use crate::headers::{HeaderSpec, SecureHeader};

const SEPARATOR: &str = ", ";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PermissionsPolicy {
    directives: DirectiveList,
}

impl PermissionsPolicy {
    pub fn new() -> Self {
        Self::default()
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

    /// Appends `feature=(allowlist)` for any feature without a named method.
    pub fn add_directive(&mut self, feature: &str, allowlist: &[&str]) -> &mut Self {
        self.directives.push(parenthesized(feature, allowlist));
        self
    }

    pub fn accelerometer(&mut self, allowlist: &[&str]) -> &mut Self {
        self.add_directive("accelerometer", allowlist)
    }

    pub fn ambient_light_sensor(&mut self, allowlist: &[&str]) -> &mut Self {
        self.add_directive("ambient-light-sensor", allowlist)
    }

    pub fn autoplay(&mut self, allowlist: &[&str]) -> &mut Self {
        self.add_directive("autoplay", allowlist)
    }

    pub fn battery(&mut self, allowlist: &[&str]) -> &mut Self {
        self.add_directive("battery", allowlist)
    }

    pub fn camera(&mut self, allowlist: &[&str]) -> &mut Self {
        self.add_directive("camera", allowlist)
    }

    pub fn clipboard_read(&mut self, allowlist: &[&str]) -> &mut Self {
        self.add_directive("clipboard-read", allowlist)
    }

    pub fn clipboard_write(&mut self, allowlist: &[&str]) -> &mut Self {
        self.add_directive("clipboard-write", allowlist)
    }

    pub fn cross_origin_isolated(&mut self, allowlist: &[&str]) -> &mut Self {
        self.add_directive("cross-origin-isolated", allowlist)
    }

    pub fn display_capture(&mut self, allowlist: &[&str]) -> &mut Self {
        self.add_directive("display-capture", allowlist)
    }

    pub fn document_domain(&mut self, allowlist: &[&str]) -> &mut Self {
        self.add_directive("document-domain", allowlist)
    }

    pub fn encrypted_media(&mut self, allowlist: &[&str]) -> &mut Self {
        self.add_directive("encrypted-media", allowlist)
    }

    pub fn execution_while_not_rendered(&mut self, allowlist: &[&str]) -> &mut Self {
        self.add_directive("execution-while-not-rendered", allowlist)
    }

    pub fn execution_while_out_of_viewport(&mut self, allowlist: &[&str]) -> &mut Self {
        self.add_directive("execution-while-out-of-viewport", allowlist)
    }

    pub fn fullscreen(&mut self, allowlist: &[&str]) -> &mut Self {
        self.add_directive("fullscreen", allowlist)
    }

    pub fn gamepad(&mut self, allowlist: &[&str]) -> &mut Self {
        self.add_directive("gamepad", allowlist)
    }

    pub fn geolocation(&mut self, allowlist: &[&str]) -> &mut Self {
        self.add_directive("geolocation", allowlist)
    }

    pub fn gyroscope(&mut self, allowlist: &[&str]) -> &mut Self {
        self.add_directive("gyroscope", allowlist)
    }

    pub fn magnetometer(&mut self, allowlist: &[&str]) -> &mut Self {
        self.add_directive("magnetometer", allowlist)
    }

    pub fn microphone(&mut self, allowlist: &[&str]) -> &mut Self {
        self.add_directive("microphone", allowlist)
    }

    pub fn midi(&mut self, allowlist: &[&str]) -> &mut Self {
        self.add_directive("midi", allowlist)
    }

    pub fn navigation_override(&mut self, allowlist: &[&str]) -> &mut Self {
        self.add_directive("navigation-override", allowlist)
    }

    pub fn payment(&mut self, allowlist: &[&str]) -> &mut Self {
        self.add_directive("payment", allowlist)
    }

    pub fn picture_in_picture(&mut self, allowlist: &[&str]) -> &mut Self {
        self.add_directive("picture-in-picture", allowlist)
    }

    pub fn publickey_credentials_get(&mut self, allowlist: &[&str]) -> &mut Self {
        self.add_directive("publickey-credentials-get", allowlist)
    }

    pub fn screen_wake_lock(&mut self, allowlist: &[&str]) -> &mut Self {
        self.add_directive("screen-wake-lock", allowlist)
    }

    pub fn speaker_selection(&mut self, allowlist: &[&str]) -> &mut Self {
        self.add_directive("speaker-selection", allowlist)
    }

    pub fn sync_xhr(&mut self, allowlist: &[&str]) -> &mut Self {
        self.add_directive("sync-xhr", allowlist)
    }

    pub fn usb(&mut self, allowlist: &[&str]) -> &mut Self {
        self.add_directive("usb", allowlist)
    }

    pub fn web_share(&mut self, allowlist: &[&str]) -> &mut Self {
        self.add_directive("web-share", allowlist)
    }

    pub fn xr_spatial_tracking(&mut self, allowlist: &[&str]) -> &mut Self {
        self.add_directive("xr-spatial-tracking", allowlist)
    }
}

impl SecureHeader for PermissionsPolicy {
    fn header_name(&self) -> &str {
        HeaderSpec::PERMISSIONS_POLICY.name
    }

    fn header_value(&self) -> String {
        self.directives
            .render(SEPARATOR, HeaderSpec::PERMISSIONS_POLICY.default_value)
    }
}
