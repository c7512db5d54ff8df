//! Rendering strategies for structured log fields.
//!
//! Every strategy maps a [`RenderContext`] and a [`FieldValue`] to display
//! text. Strategies never fail: malformed input degrades to a defined fallback
//! so one bad field cannot abort rendering of the rest of a log line.

pub mod config;
pub mod context;
pub mod decode;
pub mod error;
pub mod registry;
pub mod renderer;
pub mod strategies;

pub use config::RenderConfig;
pub use context::RenderContext;
pub use decode::{decode, decode_or_default, describe, field_or_default};
pub use error::{Error, Result};
pub use registry::FieldRenderers;
pub use renderer::{RenderFn, Renderer};
pub use strategies::*;

pub use jl_types::{ErrorRecord, ExceptionRecord, ExtraRecord, FieldValue};
