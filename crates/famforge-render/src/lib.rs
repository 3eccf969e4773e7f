//! Rendering collaborator for Famforge documents.
//!
//! Exposes the minimal four-operation [`DocumentRenderer`] contract and a
//! paginated PDF implementation built on `lopdf`. Page geometry, font
//! choice, and wrapping live entirely in this crate; callers only emit
//! titled sections and wrapped text blocks.

pub mod atomic;
pub mod errors;
pub mod pdf;
pub mod renderer;

pub use atomic::write_bytes_atomic;
pub use errors::RenderError;
pub use pdf::PdfRenderer;
pub use renderer::DocumentRenderer;
