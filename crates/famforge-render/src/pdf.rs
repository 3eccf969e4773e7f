//! Paginated PDF renderer built on `lopdf`.
//!
//! A4 pages, Helvetica base fonts, a bold running header on every page,
//! bold section headings, and naive width-estimate word wrapping for body
//! text. The content model is deliberately small: each page is a list of
//! text operations, assembled into a pages tree at finalize time.

use std::path::{Path, PathBuf};

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, Stream, StringFormat};
use tracing::debug;

use crate::atomic::write_bytes_atomic;
use crate::errors::RenderError;
use crate::renderer::DocumentRenderer;

const PAGE_WIDTH: f32 = 595.0;
const PAGE_HEIGHT: f32 = 842.0;
const MARGIN: f32 = 48.0;

const HEADER_SIZE: f32 = 14.0;
const TITLE_SIZE: f32 = 12.0;
const BODY_SIZE: f32 = 10.0;

const TITLE_LINE_HEIGHT: f32 = 18.0;
const BODY_LINE_HEIGHT: f32 = 13.0;
const BLOCK_GAP: f32 = 8.0;

const FONT_REGULAR: &str = "F1";
const FONT_BOLD: &str = "F2";

/// Average glyph width as a fraction of the font size. Helvetica body
/// text averages close to half an em, which is plenty for wrapping
/// labelled record lines.
const CHAR_WIDTH_RATIO: f32 = 0.5;

/// Reusable PDF renderer; one document in flight at a time.
#[derive(Debug, Default)]
pub struct PdfRenderer {
    state: Option<DocumentState>,
}

#[derive(Debug)]
struct DocumentState {
    header: String,
    pages: Vec<Vec<Operation>>,
    cursor_y: f32,
}

impl PdfRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    fn state_mut(&mut self, op: &'static str) -> Result<&mut DocumentState, RenderError> {
        self.state.as_mut().ok_or(RenderError::NoDocument(op))
    }

    fn render_to_bytes(&mut self) -> Result<Vec<u8>, RenderError> {
        let state = self
            .state
            .take()
            .ok_or(RenderError::NoDocument("finalize"))?;

        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let font_regular = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
        });
        let font_bold = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica-Bold",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! {
                FONT_REGULAR => font_regular,
                FONT_BOLD => font_bold,
            },
        });

        let page_count = state.pages.len();
        let mut kids = Vec::with_capacity(page_count);
        for operations in state.pages {
            let content = Content { operations };
            let encoded = content
                .encode()
                .map_err(|err| RenderError::Encode(err.to_string()))?;
            let content_id = doc.add_object(Stream::new(Dictionary::new(), encoded));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            kids.push(Object::Reference(page_id));
        }

        let pages = dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => page_count as i64,
            "Resources" => resources_id,
            "MediaBox" => vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Integer(595),
                Object::Integer(842),
            ],
        };
        doc.objects.insert(pages_id, Object::Dictionary(pages));

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes)
            .map_err(|err| RenderError::Persist(err.to_string()))?;

        debug!(pages = page_count, bytes = bytes.len(), "document serialized");
        Ok(bytes)
    }
}

impl DocumentRenderer for PdfRenderer {
    fn begin_document(&mut self, header: &str) -> Result<(), RenderError> {
        let mut state = DocumentState {
            header: header.to_string(),
            pages: Vec::new(),
            cursor_y: 0.0,
        };
        state.new_page();
        self.state = Some(state);
        Ok(())
    }

    fn section_title(&mut self, title: &str) -> Result<(), RenderError> {
        let state = self.state_mut("section_title")?;
        state.ensure_room(TITLE_LINE_HEIGHT);
        state.text_line(FONT_BOLD, TITLE_SIZE, MARGIN, title);
        state.cursor_y -= TITLE_LINE_HEIGHT;
        Ok(())
    }

    fn body_block(&mut self, body: &str) -> Result<(), RenderError> {
        let state = self.state_mut("body_block")?;
        let limit = max_chars(BODY_SIZE);
        for line in body.lines() {
            for wrapped in wrap_line(line, limit) {
                state.ensure_room(BODY_LINE_HEIGHT);
                state.text_line(FONT_REGULAR, BODY_SIZE, MARGIN, &wrapped);
                state.cursor_y -= BODY_LINE_HEIGHT;
            }
        }
        state.cursor_y -= BLOCK_GAP;
        Ok(())
    }

    fn finalize(&mut self, path: &Path) -> Result<PathBuf, RenderError> {
        let bytes = self.render_to_bytes()?;
        write_bytes_atomic(path, &bytes)?;
        Ok(path.to_path_buf())
    }
}

impl DocumentState {
    fn new_page(&mut self) {
        let mut operations = Vec::new();
        let header_width = self.header.len() as f32 * HEADER_SIZE * CHAR_WIDTH_RATIO;
        let header_x = ((PAGE_WIDTH - header_width) / 2.0).max(MARGIN);
        let header_y = PAGE_HEIGHT - MARGIN;
        push_text(&mut operations, FONT_BOLD, HEADER_SIZE, header_x, header_y, &self.header);
        self.pages.push(operations);
        self.cursor_y = header_y - 2.0 * TITLE_LINE_HEIGHT;
    }

    fn ensure_room(&mut self, line_height: f32) {
        if self.cursor_y - line_height < MARGIN {
            self.new_page();
        }
    }

    fn text_line(&mut self, font: &str, size: f32, x: f32, text: &str) {
        let y = self.cursor_y;
        let page = self
            .pages
            .last_mut()
            .expect("a page always exists after new_page");
        push_text(page, font, size, x, y, text);
    }
}

fn push_text(
    operations: &mut Vec<Operation>,
    font: &str,
    size: f32,
    x: f32,
    y: f32,
    text: &str,
) {
    operations.push(Operation::new("BT", vec![]));
    operations.push(Operation::new(
        "Tf",
        vec![Object::Name(font.as_bytes().to_vec()), size.into()],
    ));
    operations.push(Operation::new("Td", vec![x.into(), y.into()]));
    operations.push(Operation::new(
        "Tj",
        vec![Object::String(
            text.as_bytes().to_vec(),
            StringFormat::Literal,
        )],
    ));
    operations.push(Operation::new("ET", vec![]));
}

fn max_chars(size: f32) -> usize {
    (((PAGE_WIDTH - 2.0 * MARGIN) / (size * CHAR_WIDTH_RATIO)) as usize).max(1)
}

/// Greedy word wrap on an estimated character budget. Words longer than
/// the budget land on their own line rather than being split.
fn wrap_line(line: &str, limit: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in line.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.len() + 1 + word.len() <= limit {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}
