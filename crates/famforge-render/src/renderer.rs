use std::path::{Path, PathBuf};

use crate::errors::RenderError;

/// Minimal contract between the document assembler and the renderer.
///
/// A renderer is reusable: `begin_document` starts a fresh document and
/// `finalize` persists it, after which a new document may be started.
/// `finalize` is atomic from the caller's perspective: either the whole
/// document lands at the requested path or nothing is written.
pub trait DocumentRenderer {
    /// Start a new paginated document with a running header.
    fn begin_document(&mut self, header: &str) -> Result<(), RenderError>;

    /// Append a titled section heading.
    fn section_title(&mut self, title: &str) -> Result<(), RenderError>;

    /// Append a wrapped text block.
    fn body_block(&mut self, body: &str) -> Result<(), RenderError>;

    /// Persist the document and return the written location.
    fn finalize(&mut self, path: &Path) -> Result<PathBuf, RenderError>;
}
