//! Page extraction functionality
//!
//! This module provides functionality to extract individual pages or ranges of pages
//! from PDF documents. It builds upon the split module but provides a more focused
//! API specifically for page extraction use cases.

use super::{OperationError, OperationResult, PageRange};
use crate::parser::{ContentOperation, ContentParser, ParsedPage, PdfDocument, PdfReader};
use crate::{Document, Page};
use std::fs::File;
use std::path::Path;

/// Options for page extraction
#[derive(Debug, Clone)]
pub struct PageExtractionOptions {
    /// Whether to preserve document metadata
    pub preserve_metadata: bool,
    /// Whether to preserve annotations
    pub preserve_annotations: bool,
    /// Whether to preserve form fields
    pub preserve_forms: bool,
    /// Whether to optimize the extracted pages
    pub optimize: bool,
}

impl Default for PageExtractionOptions {
    fn default() -> Self {
        Self {
            preserve_metadata: true,
            preserve_annotations: true,
            preserve_forms: false,
            optimize: false,
        }
    }
}

/// Page extractor for extracting pages from PDF documents
pub struct PageExtractor {
    document: PdfDocument<File>,
    options: PageExtractionOptions,
}

impl PageExtractor {
    /// Create a new page extractor
    pub fn new(document: PdfDocument<File>) -> Self {
        Self {
            document,
            options: PageExtractionOptions::default(),
        }
    }

    /// Create a new page extractor with custom options
    pub fn with_options(document: PdfDocument<File>, options: PageExtractionOptions) -> Self {
        Self { document, options }
    }

    /// Extract a single page to a new document
    pub fn extract_page(&mut self, page_index: usize) -> OperationResult<Document> {
        let total_pages =
            self.document
                .page_count()
                .map_err(|e| OperationError::ParseError(e.to_string()))? as usize;

        if page_index >= total_pages {
            return Err(OperationError::PageIndexOutOfBounds(
                page_index,
                total_pages,
            ));
        }

        let mut doc = self.create_document()?;
        let parsed_page = self
            .document
            .get_page(page_index as u32)
            .map_err(|e| OperationError::ParseError(e.to_string()))?;

        let page = self.convert_page(&parsed_page)?;
        doc.add_page(page);

        Ok(doc)
    }

    /// Extract multiple pages to a new document
    pub fn extract_pages(&mut self, page_indices: &[usize]) -> OperationResult<Document> {
        let total_pages =
            self.document
                .page_count()
                .map_err(|e| OperationError::ParseError(e.to_string()))? as usize;

        // Validate all indices first
        for &idx in page_indices {
            if idx >= total_pages {
                return Err(OperationError::PageIndexOutOfBounds(idx, total_pages));
            }
        }

        if page_indices.is_empty() {
            return Err(OperationError::NoPagesToProcess);
        }

        let mut doc = self.create_document()?;

        for &page_idx in page_indices {
            let parsed_page = self
                .document
                .get_page(page_idx as u32)
                .map_err(|e| OperationError::ParseError(e.to_string()))?;

            let page = self.convert_page(&parsed_page)?;
            doc.add_page(page);
        }

        Ok(doc)
    }

    /// Extract a range of pages to a new document
    pub fn extract_page_range(&mut self, range: &PageRange) -> OperationResult<Document> {
        let total_pages =
            self.document
                .page_count()
                .map_err(|e| OperationError::ParseError(e.to_string()))? as usize;

        let indices = range.get_indices(total_pages)?;
        self.extract_pages(&indices)
    }

    /// Create a new document with metadata if preservation is enabled
    fn create_document(&self) -> OperationResult<Document> {
        let mut doc = Document::new();

        if self.options.preserve_metadata {
            if let Ok(metadata) = self.document.metadata() {
                if let Some(title) = metadata.title {
                    doc.set_title(&title);
                }
                if let Some(author) = metadata.author {
                    doc.set_author(&author);
                }
                if let Some(subject) = metadata.subject {
                    doc.set_subject(&subject);
                }
                if let Some(keywords) = metadata.keywords {
                    doc.set_keywords(&keywords);
                }
                // creator and producer are not available in Document API yet
                // if let Some(creator) = metadata.creator {
                //     doc.set_creator(&creator);
                // }
                // if let Some(producer) = metadata.producer {
                //     doc.set_producer(&producer);
                // }
            }
        }

        Ok(doc)
    }

    /// Convert a parsed page to a new page
    fn convert_page(&mut self, parsed_page: &ParsedPage) -> OperationResult<Page> {
        // Create new page with same dimensions
        let width = parsed_page.width();
        let height = parsed_page.height();
        let mut page = Page::new(width, height);

        // Apply rotation if needed
        if parsed_page.rotation != 0 {
            // TODO: Implement rotation in Page when available
            // For now, we just note it in a comment
        }

        // Get content streams
        let content_streams = self
            .document
            .get_page_content_streams(parsed_page)
            .map_err(|e| OperationError::ParseError(e.to_string()))?;

        // Parse and process content streams
        let mut has_content = false;
        for stream_data in &content_streams {
            match ContentParser::parse_content(stream_data) {
                Ok(operators) => {
                    self.process_operators(&mut page, &operators)?;
                    has_content = true;
                }
                Err(e) => {
                    // Log warning but continue with other streams
                    eprintln!("Warning: Failed to parse content stream: {e}");
                }
            }
        }

        // Handle annotations if preservation is enabled
        if self.options.preserve_annotations {
            // TODO: Extract and preserve annotations when annotation support is added
        }

        // Handle form fields if preservation is enabled
        if self.options.preserve_forms {
            // TODO: Extract and preserve form fields when form support is added
        }

        // If no content was successfully processed, add a placeholder
        if !has_content {
            page.text()
                .set_font(crate::text::Font::Helvetica, 10.0)
                .at(50.0, height - 50.0)
                .write("[Page extracted]")
                .map_err(OperationError::PdfError)?;
        }

        Ok(page)
    }

    /// Process content operators to recreate page content
    fn process_operators(
        &self,
        page: &mut Page,
        operators: &[ContentOperation],
    ) -> OperationResult<()> {
        // This is a simplified implementation that handles basic text and graphics
        // A full implementation would handle all PDF operators

        let mut text_object = false;
        let mut current_font = crate::text::Font::Helvetica;
        let mut current_font_size = 12.0;
        let mut current_x = 0.0;
        let mut current_y = 0.0;

        for operator in operators {
            match operator {
                ContentOperation::BeginText => {
                    text_object = true;
                }
                ContentOperation::EndText => {
                    text_object = false;
                }
                ContentOperation::SetFont(name, size) => {
                    current_font = self.map_font_name(name);
                    current_font_size = *size;
                }
                ContentOperation::MoveText(x, y) => {
                    current_x = *x;
                    current_y = *y;
                }
                ContentOperation::ShowText(text) => {
                    if text_object {
                        if let Ok(text_str) = String::from_utf8(text.clone()) {
                            page.text()
                                .set_font(current_font.clone(), current_font_size as f64)
                                .at(current_x as f64, current_y as f64)
                                .write(&text_str)
                                .map_err(OperationError::PdfError)?;
                        }
                    }
                }
                ContentOperation::MoveTo(x, y) => {
                    page.graphics().move_to(*x as f64, *y as f64);
                }
                ContentOperation::LineTo(x, y) => {
                    page.graphics().line_to(*x as f64, *y as f64);
                }
                ContentOperation::Rectangle(x, y, w, h) => {
                    page.graphics()
                        .rectangle(*x as f64, *y as f64, *w as f64, *h as f64);
                }
                ContentOperation::Stroke => {
                    page.graphics().stroke();
                }
                ContentOperation::Fill => {
                    page.graphics().fill();
                }
                ContentOperation::SetStrokingRGB(r, g, b) => {
                    page.graphics()
                        .set_stroke_color(crate::Color::rgb(*r as f64, *g as f64, *b as f64));
                }
                ContentOperation::SetNonStrokingRGB(r, g, b) => {
                    page.graphics()
                        .set_fill_color(crate::Color::rgb(*r as f64, *g as f64, *b as f64));
                }
                ContentOperation::SetLineWidth(width) => {
                    page.graphics().set_line_width(*width as f64);
                }
                _ => {
                    // Other operators not yet implemented
                }
            }
        }

        Ok(())
    }

    /// Map PDF font names to our font enum
    fn map_font_name(&self, name: &str) -> crate::text::Font {
        match name {
            "Times-Roman" => crate::text::Font::TimesRoman,
            "Times-Bold" => crate::text::Font::TimesBold,
            "Times-Italic" => crate::text::Font::TimesItalic,
            "Times-BoldItalic" => crate::text::Font::TimesBoldItalic,
            "Helvetica-Bold" => crate::text::Font::HelveticaBold,
            "Helvetica-Oblique" => crate::text::Font::HelveticaOblique,
            "Helvetica-BoldOblique" => crate::text::Font::HelveticaBoldOblique,
            "Courier" => crate::text::Font::Courier,
            "Courier-Bold" => crate::text::Font::CourierBold,
            "Courier-Oblique" => crate::text::Font::CourierOblique,
            "Courier-BoldOblique" => crate::text::Font::CourierBoldOblique,
            _ => crate::text::Font::Helvetica, // Default fallback
        }
    }
}

/// Extract a single page from a PDF file to a new document
pub fn extract_page<P: AsRef<Path>>(input_path: P, page_index: usize) -> OperationResult<Document> {
    let reader =
        PdfReader::open(input_path).map_err(|e| OperationError::ParseError(e.to_string()))?;
    let document = PdfDocument::new(reader);
    let mut extractor = PageExtractor::new(document);
    extractor.extract_page(page_index)
}

/// Extract multiple pages from a PDF file to a new document
pub fn extract_pages<P: AsRef<Path>>(
    input_path: P,
    page_indices: &[usize],
) -> OperationResult<Document> {
    let reader =
        PdfReader::open(input_path).map_err(|e| OperationError::ParseError(e.to_string()))?;
    let document = PdfDocument::new(reader);
    let mut extractor = PageExtractor::new(document);
    extractor.extract_pages(page_indices)
}

/// Extract a page range from a PDF file to a new document
pub fn extract_page_range<P: AsRef<Path>>(
    input_path: P,
    range: &PageRange,
) -> OperationResult<Document> {
    let reader =
        PdfReader::open(input_path).map_err(|e| OperationError::ParseError(e.to_string()))?;
    let document = PdfDocument::new(reader);
    let mut extractor = PageExtractor::new(document);
    extractor.extract_page_range(range)
}

/// Extract a single page from a PDF file and save it
pub fn extract_page_to_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input_path: P,
    page_index: usize,
    output_path: Q,
) -> OperationResult<()> {
    let mut doc = extract_page(input_path, page_index)?;
    doc.save(output_path).map_err(OperationError::PdfError)
}

/// Extract multiple pages from a PDF file and save them
pub fn extract_pages_to_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input_path: P,
    page_indices: &[usize],
    output_path: Q,
) -> OperationResult<()> {
    let mut doc = extract_pages(input_path, page_indices)?;
    doc.save(output_path).map_err(OperationError::PdfError)
}

/// Extract a page range from a PDF file and save it
pub fn extract_page_range_to_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input_path: P,
    range: &PageRange,
    output_path: Q,
) -> OperationResult<()> {
    let mut doc = extract_page_range(input_path, range)?;
    doc.save(output_path).map_err(OperationError::PdfError)
}
