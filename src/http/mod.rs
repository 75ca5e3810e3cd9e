//! Response side of the crate: applying a [`Secure`](crate::secure::Secure)
//! header set to arbitrary response types, plus a small ordered header map
//! and response value that can be used directly.

pub mod apply;
pub mod headers;
pub mod response;

pub use apply::{AsyncSetHeader, HeaderMap, HeaderSetter, ResponseLike, SetHeader};
pub use headers::HttpHeaders;
pub use response::{HttpResponse, ResponseHeader};
