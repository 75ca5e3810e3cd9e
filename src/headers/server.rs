use crate::headers::{HeaderSpec, SecureHeader};

/// `Server` header. Defaults to an empty value so the response does not
/// advertise the server implementation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Server {
    value: String,
}

impl Default for Server {
    fn default() -> Self {
        Self {
            value: HeaderSpec::SERVER.default_value.to_string(),
        }
    }
}

impl Server {
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
}

impl SecureHeader for Server {
    fn header_name(&self) -> &str {
        HeaderSpec::SERVER.name
    }

    fn header_value(&self) -> String {
        self.value.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty() {
        assert_eq!(Server::new().header_value(), "");
    }

    #[test]
    fn set_and_clear() {
        let mut server = Server::new();
        server.set("CustomServer");
        assert_eq!(server.header_value(), "CustomServer");

        server.clear();
        assert_eq!(server.header_value(), "");
    }
}
