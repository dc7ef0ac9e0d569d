//! Common utilities for the boxwood bridge.
//!
//! This crate provides shared infrastructure used by the view tree and the
//! host glue:
//! - **Geometry** - rectangle clipping math shared by every paint path
//! - **Image Data** - decoded RGBA pixel buffers for replaced content
//! - **Warning System** - deduplicated colored terminal output

pub mod geometry;
pub mod image;
pub mod warning;
