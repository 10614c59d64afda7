//! Crop image diagnosis adapter for KrishiSahay.
//!
//! One image in, one formatted diagnosis text out. The provider answers
//! non-plant images with an explanatory reply itself, so the only local
//! validation is the MIME-type guard at the caller boundary.

pub mod client;
pub mod error;

pub use client::{encode_image, is_supported_image, VisionClient};
pub use error::VisionError;
