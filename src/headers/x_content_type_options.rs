use crate::headers::{HeaderSpec, SecureHeader};

/// `X-Content-Type-Options`. `nosniff` is the only standard value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XContentTypeOptions {
    value: String,
}

impl Default for XContentTypeOptions {
    fn default() -> Self {
        Self {
            value: HeaderSpec::X_CONTENT_TYPE_OPTIONS.default_value.to_string(),
        }
    }
}

impl XContentTypeOptions {
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

    pub fn nosniff(&mut self) -> &mut Self {
        self.set("nosniff")
    }
}

impl SecureHeader for XContentTypeOptions {
    fn header_name(&self) -> &str {
        HeaderSpec::X_CONTENT_TYPE_OPTIONS.name
    }

    fn header_value(&self) -> String {
        self.value.clone()
    }
}
