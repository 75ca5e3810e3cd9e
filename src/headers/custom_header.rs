use crate::headers::SecureHeader;

/// Any header not covered by a dedicated builder. The name and value are
/// passed through as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomHeader {
    name: String,
    value: String,
}

impl CustomHeader {
    pub fn new(name: &str, value: &str) -> Self {
        Self {
            name: name.to_string(),
            value: value.to_string(),
        }
    }

    pub fn set(&mut self, value: &str) -> &mut Self {
        self.value = value.to_string();
        self
    }
}

impl SecureHeader for CustomHeader {
    fn header_name(&self) -> &str {
        &self.name
    }

    fn header_value(&self) -> String {
        self.value.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pass_through() {
        let header = CustomHeader::new("X-Custom-Header", "CustomValue");
        assert_eq!(header.header_name(), "X-Custom-Header");
        assert_eq!(header.header_value(), "CustomValue");
    }

    #[test]
    fn set_replaces_value() {
        let mut header = CustomHeader::new("X-Request-Origin", "edge");
        header.set("origin");
        assert_eq!(header.to_string(), "X-Request-Origin: origin");
    }
}
