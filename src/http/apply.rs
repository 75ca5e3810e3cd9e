//! Writing a [`Secure`] header set onto a response.
//!
//! The applier never knows the concrete response type. A response describes
//! how it accepts headers by implementing [`ResponseLike`], which exposes
//! at most two capabilities, resolved in this order:
//!
//! 1. a mutable header mapping ([`HeaderMap`]), written with plain inserts;
//! 2. a per-header setter, either synchronous ([`SetHeader`]) or
//!    asynchronous ([`AsyncSetHeader`]).
//!
//! A response exposing neither is rejected with
//! [`SecureError::UnsupportedResponseType`].
//!
//! Headers are written one at a time in emission order. If an asynchronous
//! setter is dropped mid-way the response is left with a prefix of the
//! headers; running the application again writes the full set.

use std::any::type_name;
use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::error::SecureError;
use crate::http::headers::HttpHeaders;
use crate::secure::Secure;

/// Mapping capability: a header store that can be written by name.
pub trait HeaderMap: Send {
    /// Inserts or overwrites `name`.
    fn insert_header(&mut self, name: &str, value: &str);
}

impl HeaderMap for IndexMap<String, String> {
    fn insert_header(&mut self, name: &str, value: &str) {
        self.insert(name.to_string(), value.to_string());
    }
}

impl HeaderMap for HashMap<String, String> {
    fn insert_header(&mut self, name: &str, value: &str) {
        self.insert(name.to_string(), value.to_string());
    }
}

impl HeaderMap for BTreeMap<String, String> {
    fn insert_header(&mut self, name: &str, value: &str) {
        self.insert(name.to_string(), value.to_string());
    }
}

impl HeaderMap for HttpHeaders {
    fn insert_header(&mut self, name: &str, value: &str) {
        self.set_raw(name, value);
    }
}

/// Setter capability, completing immediately.
pub trait SetHeader: Send {
    fn set_header(&mut self, name: &str, value: &str);
}

/// Setter capability that has to be awaited.
#[async_trait]
pub trait AsyncSetHeader: Send {
    async fn set_header(&mut self, name: &str, value: &str);
}

pub enum HeaderSetter<'a> {
    Sync(&'a mut dyn SetHeader),
    Async(&'a mut dyn AsyncSetHeader),
}

/// Adapts a concrete response type to the applier.
///
/// Implement whichever accessor matches the type; the other keeps its
/// `None` default. When both return `Some`, the mapping wins.
pub trait ResponseLike {
    fn headers_mut(&mut self) -> Option<&mut dyn HeaderMap> {
        None
    }

    fn header_setter(&mut self) -> Option<HeaderSetter<'_>> {
        None
    }
}

enum Target<'a> {
    Mapping(&'a mut dyn HeaderMap),
    Setter(HeaderSetter<'a>),
}

fn resolve<R: ResponseLike + ?Sized>(response: &mut R) -> Result<Target<'_>, SecureError> {
    let unsupported = || SecureError::UnsupportedResponseType(type_name::<R>());

    if response.headers_mut().is_some() {
        return response.headers_mut().map(Target::Mapping).ok_or_else(unsupported);
    }

    response
        .header_setter()
        .map(Target::Setter)
        .ok_or_else(unsupported)
}

fn write_mapping(headers: &IndexMap<String, String>, map: &mut dyn HeaderMap) {
    for (name, value) in headers {
        trace!(header = %name, "writing security header into mapping");
        map.insert_header(name, value);
    }
}

impl Secure {
    /// Writes every header onto `response`.
    ///
    /// Fails with [`SecureError::SynchronousContextViolation`] when the
    /// response only offers an asynchronous setter; nothing is written in
    /// that case. Use [`Secure::apply_headers_async`] for such responses.
    pub fn apply_headers<R: ResponseLike + ?Sized>(
        &self,
        response: &mut R,
    ) -> Result<(), SecureError> {
        let headers = self.headers();

        match resolve(response)? {
            Target::Mapping(map) => {
                debug!(count = headers.len(), strategy = "mapping", "applying security headers");
                write_mapping(headers, map);
            }
            Target::Setter(HeaderSetter::Sync(setter)) => {
                debug!(count = headers.len(), strategy = "setter", "applying security headers");
                for (name, value) in headers {
                    trace!(header = %name, "calling header setter");
                    setter.set_header(name, value);
                }
            }
            Target::Setter(HeaderSetter::Async(_)) => {
                return Err(SecureError::SynchronousContextViolation(type_name::<R>()));
            }
        }

        Ok(())
    }

    /// Writes every header onto `response`, awaiting an asynchronous setter
    /// once per header, strictly in sequence.
    ///
    /// The future is `Send` whenever `R` is, so it can be spawned on a
    /// multi-threaded executor.
    pub async fn apply_headers_async<R: ResponseLike + Send + ?Sized>(
        &self,
        response: &mut R,
    ) -> Result<(), SecureError> {
        let headers = self.headers();

        match resolve(response)? {
            Target::Mapping(map) => {
                debug!(count = headers.len(), strategy = "mapping", "applying security headers");
                write_mapping(headers, map);
            }
            Target::Setter(HeaderSetter::Sync(setter)) => {
                debug!(count = headers.len(), strategy = "setter", "applying security headers");
                for (name, value) in headers {
                    trace!(header = %name, "calling header setter");
                    setter.set_header(name, value);
                }
            }
            Target::Setter(HeaderSetter::Async(setter)) => {
                debug!(
                    count = headers.len(),
                    strategy = "async setter",
                    "applying security headers"
                );
                for (name, value) in headers {
                    trace!(header = %name, "awaiting header setter");
                    setter.set_header(name, value).await;
                }
            }
        }

        Ok(())
    }
}
