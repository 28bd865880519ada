//! Render backends. Each turns a projected [`Document`] into a displayable artifact.
//!
//! The projection never depends on a backend. `AppState` holds an
//! `Arc<dyn RenderBackend>` chosen at startup.

pub mod text;

use thiserror::Error;

use crate::projection::Document;

pub use text::PlainTextRenderer;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Failed to write output: {0}")]
    Format(#[from] std::fmt::Error),
}

/// Output of a render backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument {
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

pub trait RenderBackend: Send + Sync {
    /// Short backend name, for logs.
    fn name(&self) -> &'static str;

    fn render(&self, document: &Document) -> Result<RenderedDocument, RenderError>;
}
