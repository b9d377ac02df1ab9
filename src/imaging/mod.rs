//! Image header decoding.
//!
//! Only what the header says is read: width, height and container format.
//! Pixel data is never decoded.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Format sniffing** | `image::ImageReader::with_guessed_format` |
//! | **Dimensions** | `image::ImageReader::into_dimensions` |
//!
//! The module is split into:
//! - **Backend**: [`HeaderDecoder`] trait, [`ImageHeader`], [`DecodeError`]
//! - **Rust backend**: [`RustBackend`], the `image`-crate implementation

pub mod backend;
pub mod rust_backend;

pub use backend::{DecodeError, HeaderDecoder, ImageHeader};
pub use rust_backend::RustBackend;
