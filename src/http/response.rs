use crate::http::apply::{HeaderMap, ResponseLike};
use crate::http::headers::HttpHeaders;

/// Common response headers a caller may set by kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseHeader {
    ContentLength,
    ContentType,
}

/// Minimal response value: ordered headers plus a body. Exposes its headers
/// as a mapping, so security headers are written straight into it.
#[derive(Debug, Clone, Default)]
pub struct HttpResponse {
    pub headers: HttpHeaders,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new() -> Self {
        Self {
            headers: HttpHeaders::new(),
            body: Vec::new(),
        }
    }

    pub fn set_header(&mut self, h: ResponseHeader, value: &str) {
        let name = match h {
            ResponseHeader::ContentType => "Content-Type",
            ResponseHeader::ContentLength => "Content-Length",
        };

        self.headers.set_raw(name, value);
    }

    /// Sets the body and a matching `Content-Length`.
    pub fn with_body(mut self, content_type: &str, body: Vec<u8>) -> Self {
        self.set_header(ResponseHeader::ContentType, content_type);
        self.set_header(ResponseHeader::ContentLength, &body.len().to_string());
        self.body = body;
        self
    }

    /// Header block as written on the wire, terminated by an empty line.
    pub fn build_headers(&self) -> String {
        // <header_name>: <header_value>\r\n
        // ...
        // \r\n
        format!("{}\r\n", self.headers.stringify())
    }
}

impl ResponseLike for HttpResponse {
    fn headers_mut(&mut self) -> Option<&mut dyn HeaderMap> {
        Some(&mut self.headers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::secure::Secure;

    #[test]
    fn security_headers_follow_existing_ones() {
        let mut res = HttpResponse::new().with_body("text/html", b"<h1>ok</h1>".to_vec());
        Secure::from_preset(crate::secure::Preset::Basic)
            .apply_headers(&mut res)
            .unwrap();

        assert_eq!(
            res.build_headers(),
            "Content-Type: text/html\r\n\
             Content-Length: 11\r\n\
             Cache-Control: no-store\r\n\
             Strict-Transport-Security: max-age=63072000\r\n\
             Referrer-Policy: strict-origin-when-cross-origin\r\n\
             Server: \r\n\
             X-Content-Type-Options: nosniff\r\n\
             X-Frame-Options: SAMEORIGIN\r\n\
             \r\n"
        );
    }
}
