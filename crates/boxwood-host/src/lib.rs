//! Host-side glue for the boxwood bridge.
//!
//! # Scope
//!
//! This crate provides:
//! - **Bridge Kit** - entry point tying a caller-supplied analyzer to a
//!   document model
//! - **Document Model** - in-memory offset-addressed document storing view
//!   specs
//! - **View Factory** - constructs the view tree from analyzer output
//! - **Rasterizer** - executes recorded surface commands to a pixel buffer
//!
//! # Not Provided
//!
//! A concrete layout engine (the analyzer is injected), widget toolkit
//! bindings, and image decoding all remain with the embedding application.

pub mod document;
pub mod factory;
pub mod kit;
pub mod rasterizer;

pub use boxwood_common as common;

pub use document::InMemoryDocument;
pub use factory::ViewFactory;
pub use kit::BridgeKit;
pub use rasterizer::Rasterizer;
