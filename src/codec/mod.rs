//! Body codecs for handlers that declare a `Content-Encoding`.
//!
//! The dispatcher only writes the header; handlers encode their own body.

pub mod gzip;

pub use gzip::{unzip_it, zip_it, DEFAULT_LEVEL};
