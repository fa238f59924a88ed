//! Notice PDF export
//!
//! Renders a processed issue (the four sections plus metadata) to an A4 PDF
//! with naive word wrapping and multi-page flow. Layout internals belong to
//! the printpdf library; this module only places wrapped text lines.

use jurify_common::{Error, Result};
use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 18.0;
const LINE_HEIGHT_MM: f32 = 5.2;
const BODY_SIZE: f32 = 10.0;
const HEADER_SIZE: f32 = 12.0;
const TITLE_SIZE: f32 = 16.0;
/// Characters per wrapped line at the body size
const WRAP_WIDTH: usize = 95;

/// Content of one exported document
#[derive(Debug, Clone)]
pub struct NoticeDocument {
    pub title: String,
    pub issue: String,
    pub language: String,
    pub created_at: String,
    /// (section label, section text), in render order
    pub sections: Vec<(String, String)>,
}

/// Write the document to `path` as a PDF
pub fn write_notice_pdf(notice: &NoticeDocument, path: &Path) -> Result<()> {
    let (doc, page, layer) = PdfDocument::new(
        notice.title.as_str(),
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "content",
    );

    let body_font = builtin_font(&doc, BuiltinFont::Helvetica)?;
    let header_font = builtin_font(&doc, BuiltinFont::HelveticaBold)?;

    let mut writer = PageWriter {
        doc: &doc,
        layer: doc.get_page(page).get_layer(layer),
        y: PAGE_HEIGHT_MM - MARGIN_MM,
    };

    writer.line(&notice.title, &header_font, TITLE_SIZE);
    writer.line(
        &format!("{} — {}", notice.created_at, notice.language),
        &body_font,
        BODY_SIZE,
    );
    writer.blank();

    for line in wrap_text(&notice.issue, WRAP_WIDTH) {
        writer.line(&line, &body_font, BODY_SIZE);
    }

    for (label, text) in &notice.sections {
        writer.blank();
        writer.line(label, &header_font, HEADER_SIZE);
        for line in wrap_text(text, WRAP_WIDTH) {
            writer.line(&line, &body_font, BODY_SIZE);
        }
    }

    // save() consumes the document; the page cursor's borrow must end first
    drop(writer);

    let file = File::create(path)?;
    doc.save(&mut BufWriter::new(file))
        .map_err(|e| Error::Internal(format!("Failed to write PDF: {}", e)))?;

    tracing::info!(path = %path.display(), "Notice exported");
    Ok(())
}

fn builtin_font(doc: &PdfDocumentReference, font: BuiltinFont) -> Result<IndirectFontRef> {
    doc.add_builtin_font(font)
        .map_err(|e| Error::Internal(format!("Failed to load PDF font: {}", e)))
}

/// Cursor over the current page; adds pages as text flows past the margin
struct PageWriter<'a> {
    doc: &'a PdfDocumentReference,
    layer: printpdf::PdfLayerReference,
    y: f32,
}

impl PageWriter<'_> {
    fn line(&mut self, text: &str, font: &IndirectFontRef, size: f32) {
        if self.y < MARGIN_MM + LINE_HEIGHT_MM {
            let (page, layer) =
                self.doc
                    .add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "content");
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.y = PAGE_HEIGHT_MM - MARGIN_MM;
        }

        self.layer
            .use_text(text, size, Mm(MARGIN_MM), Mm(self.y), font);
        self.y -= LINE_HEIGHT_MM;
    }

    fn blank(&mut self) {
        self.y -= LINE_HEIGHT_MM;
    }
}

/// Word-wrap text to at most `width` characters per line
///
/// Paragraph breaks are preserved; words longer than the width are
/// hard-split.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.lines() {
        if paragraph.trim().is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            let word_len = word.chars().count();

            if word_len > width {
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                }
                let chars: Vec<char> = word.chars().collect();
                for piece in chars.chunks(width) {
                    lines.push(piece.iter().collect());
                }
                continue;
            }

            let current_len = current.chars().count();
            if current.is_empty() {
                current = word.to_string();
            } else if current_len + 1 + word_len <= width {
                current.push(' ');
                current.push_str(word);
            } else {
                lines.push(std::mem::take(&mut current));
                current = word.to_string();
            }
        }

        if !current.is_empty() {
            lines.push(current);
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_short_line_unchanged() {
        assert_eq!(wrap_text("hello world", 20), vec!["hello world"]);
    }

    #[test]
    fn test_wrap_respects_width() {
        let text = "one two three four five six seven eight nine ten";
        for line in wrap_text(text, 15) {
            assert!(line.chars().count() <= 15, "line too long: {:?}", line);
        }
    }

    #[test]
    fn test_wrap_preserves_paragraph_breaks() {
        let lines = wrap_text("first paragraph\n\nsecond paragraph", 40);
        assert_eq!(
            lines,
            vec!["first paragraph", "", "second paragraph"]
        );
    }

    #[test]
    fn test_wrap_hard_splits_long_words() {
        let word = "x".repeat(25);
        let lines = wrap_text(&word, 10);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].len(), 10);
        assert_eq!(lines[2].len(), 5);
    }

    #[test]
    fn test_wrap_no_lost_words() {
        let text = "the quick brown fox jumps over the lazy dog";
        let rejoined = wrap_text(text, 12).join(" ");
        assert_eq!(rejoined, text);
    }

    #[test]
    fn test_write_notice_pdf_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notice.pdf");

        let notice = NoticeDocument {
            title: "JuriFy Legal Notice".to_string(),
            issue: "My landlord has refused to return my security deposit.".to_string(),
            language: "English".to_string(),
            created_at: "2025-11-02".to_string(),
            sections: vec![
                ("YOUR RIGHTS".to_string(), "You are entitled to...".to_string()),
                (
                    "FORMAL NOTICE FORMAT".to_string(),
                    "NOTICE OF CLAIM\n\nTo whom it may concern...".to_string(),
                ),
            ],
        };

        write_notice_pdf(&notice, &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_long_notice_flows_to_multiple_pages() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("long.pdf");

        let body = "This line repeats to overflow a single A4 page. ".repeat(200);
        let notice = NoticeDocument {
            title: "Long Notice".to_string(),
            issue: "overflow test".to_string(),
            language: "English".to_string(),
            created_at: "2025-11-02".to_string(),
            sections: vec![("FORMAL NOTICE FORMAT".to_string(), body)],
        };

        write_notice_pdf(&notice, &path).unwrap();
        assert!(path.exists());
    }
}
