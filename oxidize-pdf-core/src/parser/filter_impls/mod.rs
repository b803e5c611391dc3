//! PDF stream filter implementations
//!
//! This module contains implementations of various PDF stream filters
//! according to ISO 32000-1:2008 Section 7.4

pub mod ccitt;
pub mod dct;
pub mod jbig2;

pub use ccitt::decode_ccitt;
pub use dct::{decode_dct, parse_jpeg_info, JpegColorSpace, JpegInfo};
pub use jbig2::decode_jbig2;
