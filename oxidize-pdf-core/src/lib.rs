//! # oxidize-pdf
//!
//! A comprehensive, pure Rust PDF library for generation, parsing, and manipulation with zero external PDF dependencies.
//!
//! ## Features
//!
//! - **PDF Generation**: Create multi-page documents with text, graphics, and images
//! - **PDF Parsing**: Complete parser supporting rendering and content extraction
//! - **PDF Operations**: Split, merge, rotate, and extract pages
//! - **Text Extraction**: Extract text with position and formatting information
//! - **Image Extraction**: Extract images in JPEG, PNG, and TIFF formats
//! - **Font Embedding**: TrueType and OpenType font embedding with subsetting support (v1.1.6+)
//! - **Page Analysis**: Detect scanned vs text content with intelligent classification
//! - **OCR Integration**: Pluggable OCR support with Tesseract for processing scanned documents (v0.1.3+)
//! - **Resource Access**: Work with fonts, images, and other PDF resources
//! - **Pure Rust**: No C dependencies or external libraries
//! - **100% Native**: Complete PDF implementation from scratch
//!
//! ## Quick Start
//!
//! ### Creating PDFs
//!
//! ```rust
//! use oxidize_pdf::{Document, Page, Font, Color, Result};
//!
//! # fn main() -> Result<()> {
//! // Create a new document
//! let mut doc = Document::new();
//! doc.set_title("My PDF");
//!
//! // Create a page
//! let mut page = Page::a4();
//!
//! // Add text
//! page.text()
//!     .set_font(Font::Helvetica, 24.0)
//!     .at(50.0, 700.0)
//!     .write("Hello, PDF!")?;
//!
//! // Add graphics
//! page.graphics()
//!     .set_fill_color(Color::rgb(0.0, 0.5, 1.0))
//!     .circle(300.0, 400.0, 50.0)
//!     .fill();
//!
//! // Save the document
//! doc.add_page(page);
//! doc.save("output.pdf")?;
//! # Ok(())
//! # }
//! ```
//!
//! ### Parsing PDFs
//!
//! ```rust,no_run
//! use oxidize_pdf::parser::{PdfDocument, PdfReader};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Open and parse a PDF
//! let reader = PdfReader::open("document.pdf")?;
//! let document = PdfDocument::new(reader);
//!
//! // Get document information
//! println!("Pages: {}", document.page_count()?);
//! println!("Version: {}", document.version()?);
//!
//! // Process pages
//! for i in 0..document.page_count()? {
//!     let page = document.get_page(i)?;
//!     println!("Page {} size: {}x{} points", i+1, page.width(), page.height());
//! }
//!
//! // Extract text
//! let text_pages = document.extract_text()?;
//! for (i, page_text) in text_pages.iter().enumerate() {
//!     println!("Page {} text: {}", i+1, page_text.text);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! ### Generation Modules
//! - [`document`] - PDF document creation and management
//! - [`page`] - Page creation and layout
//! - [`graphics`] - Vector graphics and images
//! - [`text`] - Text rendering and flow
//! - [`writer`] - Low-level PDF writing
//!
//! ### Parsing Modules
//! - [`parser`] - Complete PDF parsing and reading
//!   - [`parser::PdfDocument`] - High-level document interface
//!   - [`parser::ParsedPage`] - Page representation with resources
//!   - [`parser::ContentParser`] - Content stream parsing
//!   - [`parser::PdfObject`] - Low-level PDF objects
//!
//! ### Manipulation Modules
//! - [`operations`] - PDF manipulation (split, merge, rotate, extract images)
//! - [`operations::page_analysis`] - Page content analysis and scanned page detection
//! - [`text::extraction`] - Text extraction with positioning
//!
//! ### OCR Modules (v0.1.3+)
//! - [`text::ocr`] - OCR trait system and types
//! - [`text::tesseract_provider`] - Tesseract OCR provider (requires `ocr-tesseract` feature)
//! - [`text::ocr`] - OCR integration for scanned documents
//!
//! ## Examples
//!
//! ### Content Stream Processing
//!
//! ```rust,no_run
//! use oxidize_pdf::parser::{PdfDocument, PdfReader};
//! use oxidize_pdf::parser::content::{ContentParser, ContentOperation};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let reader = PdfReader::open("document.pdf")?;
//! let document = PdfDocument::new(reader);
//! let page = document.get_page(0)?;
//!
//! // Get and parse content streams
//! let streams = page.content_streams_with_document(&document)?;
//! for stream in streams {
//!     let operations = ContentParser::parse(&stream)?;
//!     
//!     for op in operations {
//!         match op {
//!             ContentOperation::ShowText(text) => {
//!                 println!("Text: {:?}", String::from_utf8_lossy(&text));
//!             }
//!             ContentOperation::SetFont(name, size) => {
//!                 println!("Font: {} at {} pt", name, size);
//!             }
//!             ContentOperation::MoveTo(x, y) => {
//!                 println!("Move to ({}, {})", x, y);
//!             }
//!             _ => {} // Handle other operations
//!         }
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ### Resource Access
//!
//! ```rust,no_run
//! use oxidize_pdf::parser::{PdfDocument, PdfReader};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let reader = PdfReader::open("document.pdf")?;
//! let document = PdfDocument::new(reader);
//! let page = document.get_page(0)?;
//!
//! // Access page resources
//! if let Some(resources) = page.get_resources() {
//!     // Check fonts
//!     if let Some(fonts) = resources.get("Font").and_then(|f| f.as_dict()) {
//!         for (name, _) in &fonts.0 {
//!             println!("Font resource: {}", name.as_str());
//!         }
//!     }
//!     
//!     // Check images/XObjects
//!     if let Some(xobjects) = resources.get("XObject").and_then(|x| x.as_dict()) {
//!         for (name, _) in &xobjects.0 {
//!             println!("XObject resource: {}", name.as_str());
//!         }
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod actions;
pub mod annotations;
pub mod batch;
pub mod compression;
pub mod document;
pub mod encryption;
pub mod error;
pub mod fonts;
pub mod forms;
pub mod geometry;
pub mod graphics;
pub mod layout;
pub mod memory;
pub mod objects;
pub mod operations;
pub mod page;
pub mod page_forms;
pub mod page_labels;
pub mod page_lists;
pub mod page_tables;
pub mod parser;
pub mod recovery;
pub mod redaction;
pub mod streaming;
pub mod structure;
pub mod template_model;
pub mod text;
pub mod writer;

#[cfg(feature = "semantic")]
pub mod semantic;

// Re-export generation types
pub use document::{CompliancePreferences, Document, DocumentMetadata};
pub use error::{OxidizePdfError, PdfError, Result};
pub use geometry::{Point, Rectangle};
pub use graphics::{
    Color, GraphicsContext, Image, ImageColorSpace, ImageFormat, SvgTranslationError,
    SvgTranslator,
};
pub use layout::{CancellationToken, ContentArea, PageCursor, PageEvent};
pub use page::{Margins, Page};
pub use page_lists::{ListStyle, ListType, PageLists};
pub use page_tables::{PageTables, TableStyle};
pub use template_model::{generate, Bookmark, Cell, Config, CustomFontEntry, Element,
    Footer, GeneratorOptions, ImageElement, PageSize, Row, SecurityConfig, SignatureConfig,
    SpacerElement, TableElement, Template, TitleBlock};
pub use text::{
    measure_text,
    split_into_words,
    AdvancedTable,
    AdvancedTableCell,
    AdvancedTableOptions,
    AlternatingRowColors,
    BorderLine,
    BorderStyle as TableBorderStyle,
    BulletStyle,
    CellContent,
    CellPadding,
    ColumnDefinition,
    ColumnWidth,
    Font,
    FontFamily,
    FragmentType,
    HeaderStyle,
    ImagePreprocessing,
    LineStyle,
    ListElement,
    ListOptions,
    MockOcrProvider,
    OcrEngine,
    OcrError,
    OcrOptions,
    OcrProcessingResult,
    OcrProvider,
    OcrResult,
    OcrTextFragment,
    // List exports
    OrderedList,
    OrderedListStyle,
    // Table exports
    Table,
    TableCell,
    TableOptions,
    TableRow,
    TextAlign,
    TextContext,
    TextFlowContext,
    UnorderedList,
    VerticalAlign,
};

// Re-export font embedding types
pub use text::fonts::embedding::{
    EmbeddedFontData, EmbeddingOptions, EncodingDifference, FontDescriptor, FontEmbedder,
    FontEncoding, FontFlags, FontMetrics, FontType,
};

// Re-export parsing types
pub use parser::{
    ContentOperation, ContentParser, DocumentMetadata as ParsedDocumentMetadata, ParseOptions,
    ParsedPage, PdfArray, PdfDictionary, PdfDocument, PdfName, PdfObject, PdfReader, PdfStream,
    PdfString,
};

// Re-export operations
pub use operations::{merge_pdfs, rotate_pdf_pages, split_pdf};

// Re-export memory optimization types
pub use memory::{LazyDocument, MemoryOptions, StreamProcessor, StreamingOptions};

// Re-export streaming types
pub use streaming::{
    process_in_chunks, stream_text, ChunkOptions, ChunkProcessor, ChunkType, ContentChunk,
    IncrementalParser, ParseEvent, StreamingDocument, StreamingOptions as StreamOptions,
    StreamingPage, TextChunk, TextStreamOptions, TextStreamer,
};

// Re-export batch processing types
pub use batch::{
    batch_merge_pdfs, batch_process_files, batch_split_pdfs, BatchJob, BatchOptions,
    BatchProcessor, BatchProgress, BatchResult, BatchSummary, JobResult, JobStatus, JobType,
    ProgressCallback, ProgressInfo,
};

// Re-export recovery types
pub use recovery::{
    analyze_corruption, detect_corruption, quick_recover, repair_document, validate_pdf,
    CorruptionReport, CorruptionType, ObjectScanner, PartialRecovery, PdfRecovery, RecoveredPage,
    RecoveryOptions, RepairResult, RepairStrategy, ScanResult, ValidationError, ValidationResult,
};

// Re-export structure types
pub use structure::{
    Destination, DestinationType, NameTree, NameTreeNode, NamedDestinations, OutlineBuilder,
    OutlineItem, OutlineTree, PageDestination, PageTree, PageTreeBuilder, PageTreeNode, StructElem,
    StructKid, TaggedStructureTree,
};

// Re-export redaction engine types
pub use redaction::{
    InspectReport, PageCapability, PageCapabilityKind, PageDimensions, RedactionError,
    RedactionMode, RedactionOutcome, RedactionRect, RedactionReport, RedactionRequest, Redactor,
    TextOccurrence, TextSearchCriterion,
};

// Re-export form-filling types
pub use forms::{FillError, FillReport, FormFiller, SkippedCompressedField, XfdfDocument, XfdfError};

// Re-export action types
pub use actions::{
    Action, ActionDictionary, ActionType, GoToAction, LaunchAction, LaunchParameters, NamedAction,
    RemoteGoToAction, StandardNamedAction, UriAction, UriActionFlags,
};

// Re-export page label types
pub use page_labels::{PageLabel, PageLabelBuilder, PageLabelRange, PageLabelStyle, PageLabelTree};

/// Current version of oxidize-pdf
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Scanned page analysis and OCR example
///
/// ```rust,no_run
/// use oxidize_pdf::operations::page_analysis::{PageContentAnalyzer, PageType};
/// use oxidize_pdf::text::{MockOcrProvider, OcrOptions};
/// use oxidize_pdf::parser::PdfReader;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let document = PdfReader::open_document("scanned.pdf")?;
/// let analyzer = PageContentAnalyzer::new(document);
///
/// // Analyze pages for scanned content
/// let analyses = analyzer.analyze_document()?;
/// for analysis in analyses {
///     match analysis.page_type {
///         PageType::Scanned => {
///             println!("Page {} is scanned - applying OCR", analysis.page_number);
///             
///             // Process with OCR
///             let ocr_provider = MockOcrProvider::new();
///             let ocr_result = analyzer.extract_text_from_scanned_page(
///                 analysis.page_number,
///                 &ocr_provider
///             )?;
///             
///             println!("OCR extracted: {}", ocr_result.text);
///             println!("Confidence: {:.1}%", ocr_result.confidence * 100.0);
///         }
///         PageType::Text => println!("Page {} has vector text", analysis.page_number),
///         PageType::Mixed => println!("Page {} has mixed content", analysis.page_number),
///     }
/// }
/// # Ok(())
/// # }
/// ```
///
/// ### Font Embedding
///
/// ```rust,no_run
/// use oxidize_pdf::{FontEmbedder, EmbeddingOptions, Document, Page, Font};
/// use std::collections::HashSet;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// // Create font embedder
/// let mut embedder = FontEmbedder::new();
///
/// // Define used glyphs (example with basic ASCII)
/// let mut used_glyphs = HashSet::new();
/// used_glyphs.insert(65); // 'A'
/// used_glyphs.insert(66); // 'B'
/// used_glyphs.insert(67); // 'C'
///
/// // Configure embedding options
/// let options = EmbeddingOptions {
///     subset: true,                    // Create font subset
///     compress_font_streams: true,     // Compress font data
///     ..Default::default()
/// };
///
/// // Load font data (example - you'd load actual TrueType data)
/// let font_data = std::fs::read("path/to/font.ttf")?;
///
/// // Embed the font
/// let font_name = embedder.embed_truetype_font(&font_data, &used_glyphs, &options)?;
/// println!("Embedded font as: {}", font_name);
///
/// // Generate PDF dictionary for the embedded font
/// let font_dict = embedder.generate_font_dictionary(&font_name)?;
/// println!("Font dictionary generated successfully");
/// # Ok(())
/// # }
/// ```
///
/// Supported PDF versions
pub mod pdf_version {
    /// PDF 1.0 - 1.7 are fully supported
    pub const SUPPORTED_VERSIONS: &[&str] =
        &["1.0", "1.1", "1.2", "1.3", "1.4", "1.5", "1.6", "1.7"];
    /// PDF 2.0 support is planned
    pub const PLANNED_VERSIONS: &[&str] = &["2.0"];
}
