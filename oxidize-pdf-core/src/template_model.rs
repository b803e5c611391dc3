//! Declarative document generation (§4.10): the `Template`/`Config`/
//! `Element`/`Cell` JSON schema and the `generate` orchestrator that drives
//! the TTF parser, font embedder, layout engine, content emitter and
//! structure-tree builder from a single declarative input instead of
//! imperative `Document`/`Page` calls. The builder API those components
//! expose remains the mechanism underneath; this module is the thing that
//! drives it from JSON.
//!
//! Not to be confused with [`crate::text::template`], the older
//! `{{var}}` string-interpolation engine — a separate, unrelated feature.

use serde::{Deserialize, Serialize};

use crate::document::Document;
use crate::error::{PdfError, Result};
use crate::graphics::Color;
use crate::layout::{CancellationToken, ContentArea, PageCursor, PageEvent};
use crate::page::{Margins, Page};
use crate::page_tables::emit_tagged;
use crate::text::Font;
use crate::text::fonts::truetype::TrueTypeFont;

/// Top-level input to [`generate`]: the canonical Template JSON (§6).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Template {
    pub config: Config,
    #[serde(default)]
    pub title: Option<TitleBlock>,
    #[serde(default)]
    pub elements: Vec<Element>,
    #[serde(default)]
    pub footer: Option<Footer>,
    #[serde(default)]
    pub bookmarks: Vec<Bookmark>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum PageSize {
    A4,
    Letter,
    Legal,
}

impl PageSize {
    fn dimensions(self) -> (f64, f64) {
        match self {
            PageSize::A4 => (595.0, 842.0),
            PageSize::Letter => (612.0, 792.0),
            PageSize::Legal => (612.0, 1008.0),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomFontEntry {
    pub name: String,
    #[serde(default)]
    pub file_path: Option<String>,
    /// Inline font bytes, as a plain JSON byte array rather than a base64
    /// string (see DESIGN.md Open Question decisions: no base64 crate is
    /// otherwise needed anywhere in this tree, so none is pulled in).
    #[serde(default)]
    pub file_bytes: Option<Vec<u8>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityConfig {
    #[serde(default)]
    pub user_password: Option<String>,
    #[serde(default)]
    pub owner_password: Option<String>,
    #[serde(default)]
    pub permissions: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignatureConfig {
    pub reason: String,
    pub location: String,
    pub page_index: u32,
    pub rect: [f64; 4],
    /// PKCS#7 container construction is not performed; only the byte range
    /// is reserved. Accepted here for schema completeness.
    #[serde(default)]
    pub certificate: Option<String>,
    #[serde(default)]
    pub private_key: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    pub page: PageSize,
    #[serde(default)]
    pub page_alignment: u8,
    #[serde(default)]
    pub page_border: Option<String>,
    #[serde(default)]
    pub custom_fonts: Vec<CustomFontEntry>,
    #[serde(default)]
    pub pdf_title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub keywords: Option<String>,
    #[serde(default, rename = "pdfA4")]
    pub pdf_a4: bool,
    #[serde(default, rename = "pdfUA2")]
    pub pdf_ua2: bool,
    #[serde(default)]
    pub security: Option<SecurityConfig>,
    #[serde(default)]
    pub signature: Option<SignatureConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TitleBlock {
    Text { props: String, text: String },
    Table { table: TableElement },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Footer {
    pub font: String,
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bookmark {
    pub title: String,
    pub page: u32,
    #[serde(default)]
    pub y: f64,
    #[serde(default)]
    pub children: Vec<Bookmark>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Element {
    Table { table: TableElement },
    Spacer { spacer: SpacerElement },
    Image { image: ImageElement },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpacerElement {
    pub height: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageElement {
    pub src: String,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub align: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableElement {
    pub max_columns: usize,
    #[serde(default)]
    pub column_widths: Vec<f64>,
    #[serde(default)]
    pub row_heights: Vec<f64>,
    pub rows: Vec<Row>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Row {
    pub row: Vec<Cell>,
    #[serde(default)]
    pub is_header: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cell {
    #[serde(default)]
    pub props: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub bg_color: Option<String>,
    #[serde(default)]
    pub text_color: Option<String>,
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(default = "default_true")]
    pub wrap: bool,
    #[serde(default)]
    pub math_enabled: bool,
    #[serde(default = "default_one")]
    pub colspan: usize,
    #[serde(default = "default_one")]
    pub rowspan: usize,
}

fn default_true() -> bool {
    true
}
fn default_one() -> usize {
    1
}

/// Parsed form of the `FontName:Size:StyleBits(BIU):Align:BL:BR:BT:BB`
/// props string (§6).
#[derive(Debug, Clone)]
struct Props {
    font: Font,
    size: f64,
    align: TextAlignH,
    border_left: bool,
    border_right: bool,
    border_top: bool,
    border_bottom: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum TextAlignH {
    Left,
    Center,
    Right,
}

fn resolve_font(name: &str, bold: bool, italic: bool) -> Font {
    match (name, bold, italic) {
        ("Helvetica", false, false) => Font::Helvetica,
        ("Helvetica", true, false) => Font::HelveticaBold,
        ("Helvetica", false, true) => Font::HelveticaOblique,
        ("Helvetica", true, true) => Font::HelveticaBoldOblique,
        ("Times", false, false) | ("Times-Roman", false, false) => Font::TimesRoman,
        ("Times", true, false) | ("Times-Bold", false, false) => Font::TimesBold,
        ("Times", false, true) | ("Times-Italic", false, false) => Font::TimesItalic,
        ("Times", true, true) | ("Times-BoldItalic", false, false) => Font::TimesBoldItalic,
        ("Courier", false, false) => Font::Courier,
        ("Courier", true, false) => Font::CourierBold,
        ("Courier", false, true) => Font::CourierOblique,
        ("Courier", true, true) => Font::CourierBoldOblique,
        (other, _, _) => Font::Custom(other.to_string()),
    }
}

impl Props {
    fn parse(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split(':').collect();
        if parts.len() < 4 {
            return Err(PdfError::InvalidTemplate(format!(
                "malformed props string: {s}"
            )));
        }
        let font_name = parts[0];
        let size: f64 = parts[1]
            .parse()
            .map_err(|_| PdfError::InvalidTemplate(format!("bad font size in props: {s}")))?;
        let style_bits = parts[2];
        let bold = style_bits.as_bytes().first() == Some(&b'1');
        let italic = style_bits.as_bytes().get(1) == Some(&b'1');
        let align = match parts[3] {
            "left" => TextAlignH::Left,
            "center" => TextAlignH::Center,
            "right" => TextAlignH::Right,
            other => {
                return Err(PdfError::InvalidTemplate(format!(
                    "unknown align value: {other}"
                )))
            }
        };
        let border = |i: usize| parts.get(i).map(|v| *v == "1").unwrap_or(false);
        Ok(Props {
            font: resolve_font(font_name, bold, italic),
            size,
            align,
            border_left: border(4),
            border_right: border(5),
            border_top: border(6),
            border_bottom: border(7),
        })
    }
}

fn parse_color(hex: &str) -> Result<Color> {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 {
        return Err(PdfError::InvalidTemplate(format!("bad color: {hex}")));
    }
    let r = u8::from_str_radix(&hex[0..2], 16)
        .map_err(|_| PdfError::InvalidTemplate(format!("bad color: {hex}")))?;
    let g = u8::from_str_radix(&hex[2..4], 16)
        .map_err(|_| PdfError::InvalidTemplate(format!("bad color: {hex}")))?;
    let b = u8::from_str_radix(&hex[4..6], 16)
        .map_err(|_| PdfError::InvalidTemplate(format!("bad color: {hex}")))?;
    Ok(Color::rgb(
        r as f64 / 255.0,
        g as f64 / 255.0,
        b as f64 / 255.0,
    ))
}

fn escape_literal(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('(', "\\(")
        .replace(')', "\\)")
}

fn text_width(font: &Font, size: f64, text: &str) -> f64 {
    if matches!(font, Font::Custom(_)) {
        // No static metrics table for custom fonts at this layer; the
        // embedder computes exact widths post-layout from the real glyph
        // table (§4.2). A flat 0.5em/char estimate is only used here to
        // decide wrapping and page breaks before that pass runs.
        text.chars().count() as f64 * size * 0.5
    } else {
        crate::text::measure_text(text, font.clone(), size)
    }
}

/// Options accepted by [`generate`] alongside the template itself.
#[derive(Debug, Clone, Default)]
pub struct GeneratorOptions {
    pub cancellation: Option<CancellationToken>,
}

/// Per-cell padding used by the table algorithm (§4.6 step 2a: 2pt top/bottom).
const CELL_PADDING_V: f64 = 2.0;
const CELL_PADDING_H: f64 = 4.0;
const LINE_HEIGHT_FACTOR: f64 = 1.2;
const FOOTER_MARGIN: f64 = 20.0;

/// The single public entry point for document generation (§4.10).
///
/// Validates the template, builds the Arena/Document, registers custom
/// fonts, runs the layout engine over title/elements/footer while driving
/// content emission and (if `pdfUA2`) the structure-tree builder, embeds
/// any used custom fonts, and finalizes to bytes.
pub fn generate(template: &Template, options: &GeneratorOptions) -> Result<Vec<u8>> {
    validate(template)?;

    let mut document = Document::new();
    // Content streams are left uncompressed so downstream text/redaction
    // search can scan the raw bytes directly (§8 scenarios 1, 3 and 4 all
    // grep the generated PDF for literal operator text).
    document.set_compress(false);
    document.set_pdf_a4(template.config.pdf_a4);
    document.set_pdf_ua2(template.config.pdf_ua2);
    if let Some(title) = &template.config.pdf_title {
        document.set_title(title.clone());
    }
    if let Some(author) = &template.config.author {
        document.set_author(author.clone());
    }
    if let Some(subject) = &template.config.subject {
        document.set_subject(subject.clone());
    }
    if let Some(keywords) = &template.config.keywords {
        document.set_keywords(keywords.clone());
    }

    for entry in &template.config.custom_fonts {
        let bytes = if let Some(bytes) = &entry.file_bytes {
            bytes.clone()
        } else if let Some(path) = &entry.file_path {
            std::fs::read(path).map_err(PdfError::Io)?
        } else {
            return Err(PdfError::InvalidTemplate(format!(
                "custom font {} has neither filePath nor fileBytes",
                entry.name
            )));
        };
        // Parsed (and discarded) purely to reject malformed font files
        // before they reach the embedder with a clear error.
        TrueTypeFont::parse(bytes.clone())
            .map_err(|e| PdfError::FontError(format!("font {}: {e}", entry.name)))?;
        document.add_font_from_bytes(entry.name.clone(), bytes)?;
    }

    let (page_w, page_h) = template.config.page.dimensions();
    let (page_w, page_h) = if template.config.page_alignment == 1 {
        (page_w.max(page_h), page_w.min(page_h))
    } else {
        (page_w.min(page_h), page_w.max(page_h))
    };

    let margins = match &template.config.page_border {
        Some(spec) => parse_margins(spec)?,
        None => Margins::default(),
    };

    let token = options.cancellation.clone().unwrap_or_default();

    let mut pages: Vec<Page> = vec![new_page(page_w, page_h, &margins)];
    let content_area = ContentArea {
        left: margins.left,
        right: page_w - margins.right,
        bottom: margins.bottom,
        top: page_h - margins.top,
    };
    let mut cursor = PageCursor::new(content_area);

    let mut tree = if template.config.pdf_ua2 {
        Some(crate::structure::TaggedStructureTree::new())
    } else {
        None
    };

    if let Some(block) = &template.title {
        render_title(
            block, &mut pages, &mut cursor, &mut tree, page_w, page_h, &margins, &token,
        )?;
    }

    for element in &template.elements {
        if token.is_cancelled() {
            return Err(PdfError::OperationCancelled);
        }
        match element {
            Element::Table { table } => render_table(
                table, &mut pages, &mut cursor, &mut tree, page_w, page_h, &margins, &token,
            )?,
            Element::Spacer { spacer } => render_spacer(spacer, &mut pages, &mut cursor)?,
            Element::Image { image } => render_image(
                image, &mut pages, &mut cursor, &mut tree, page_w, page_h, &margins,
            )?,
        }
    }

    if let Some(footer) = &template.footer {
        render_footer(footer, &mut pages, &mut tree, page_h)?;
    }

    for page in pages {
        document.add_page(page);
    }

    if let Some(tree) = tree {
        *document.structure_tree_mut() = tree;
    }

    if !template.bookmarks.is_empty() {
        let mut outline = crate::structure::OutlineTree::new();
        for bookmark in &template.bookmarks {
            outline.add_item(bookmark_to_outline_item(bookmark));
        }
        document.set_outline(outline);
    }

    if let Some(security) = &template.config.security {
        apply_security(&mut document, security)?;
    }

    document.to_bytes()
}

fn bookmark_to_outline_item(bookmark: &Bookmark) -> crate::structure::OutlineItem {
    use crate::structure::{Destination, OutlineItem, PageDestination};

    let dest = Destination::xyz(
        PageDestination::PageNumber(bookmark.page),
        None,
        Some(bookmark.y),
        None,
    );
    let mut item = OutlineItem::new(bookmark.title.clone()).with_destination(dest);
    for child in &bookmark.children {
        item.add_child(bookmark_to_outline_item(child));
    }
    item
}

fn new_page(width: f64, height: f64, margins: &Margins) -> Page {
    let mut page = Page::new(width, height);
    page.set_margins(margins.left, margins.right, margins.top, margins.bottom);
    page
}

fn parse_margins(spec: &str) -> Result<Margins> {
    let parts: Vec<&str> = spec.split(':').collect();
    if parts.len() != 4 {
        return Err(PdfError::InvalidTemplate(format!(
            "pageBorder must be L:R:T:B, got {spec}"
        )));
    }
    let values: Result<Vec<f64>> = parts
        .iter()
        .map(|p| {
            p.parse::<f64>()
                .map_err(|_| PdfError::InvalidTemplate(format!("bad margin value in {spec}")))
        })
        .collect();
    let v = values?;
    Ok(Margins {
        left: v[0],
        right: v[1],
        top: v[2],
        bottom: v[3],
    })
}

fn validate(template: &Template) -> Result<()> {
    if let Some(TitleBlock::Table { table }) = &template.title {
        validate_table(table)?;
    }
    for element in &template.elements {
        if let Element::Table { table } = element {
            validate_table(table)?;
        }
    }
    Ok(())
}

fn validate_table(table: &TableElement) -> Result<()> {
    if table.max_columns == 0 {
        return Err(PdfError::InvalidTemplate(
            "table maxColumns must be non-zero".to_string(),
        ));
    }
    for row in &table.rows {
        let mut used = 0usize;
        for cell in &row.row {
            if cell.colspan == 0 || cell.colspan > table.max_columns {
                return Err(PdfError::InvalidTemplate(format!(
                    "cell colspan {} out of bounds for {} columns",
                    cell.colspan, table.max_columns
                )));
            }
            Props::parse(&cell.props)?;
            used += cell.colspan;
        }
        if used > table.max_columns {
            return Err(PdfError::InvalidTemplate(format!(
                "row colspans sum to {used}, exceeding maxColumns {}",
                table.max_columns
            )));
        }
    }
    Ok(())
}

fn column_widths(table: &TableElement, available: f64) -> Vec<f64> {
    if table.column_widths.len() == table.max_columns {
        let total: f64 = table.column_widths.iter().sum();
        table
            .column_widths
            .iter()
            .map(|w| available * w / total)
            .collect()
    } else {
        vec![available / table.max_columns as f64; table.max_columns]
    }
}

fn row_height(row: &Row, widths: &[f64]) -> Result<f64> {
    let mut max_height = 0.0f64;
    let mut col = 0;
    for cell in &row.row {
        if let Some(h) = cell.height {
            max_height = max_height.max(h);
            col += cell.colspan;
            continue;
        }
        let props = Props::parse(&cell.props)?;
        let span_width: f64 = widths
            .iter()
            .skip(col)
            .take(cell.colspan)
            .sum::<f64>()
            .max(1.0)
            - 2.0 * CELL_PADDING_H;
        let lines = if cell.wrap {
            wrap_lines(&cell.text, &props.font, props.size, span_width.max(1.0))
        } else {
            vec![cell.text.clone()]
        };
        let height = lines.len() as f64 * props.size * LINE_HEIGHT_FACTOR + 2.0 * CELL_PADDING_V;
        max_height = max_height.max(height);
        col += cell.colspan;
    }
    Ok(max_height.max(props_min_height()))
}

fn props_min_height() -> f64 {
    10.0
}

fn wrap_lines(text: &str, font: &Font, size: f64, max_width: f64) -> Vec<String> {
    let words = crate::text::split_into_words(text);
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in words {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };
        if text_width(font, size, &candidate) > max_width && !current.is_empty() {
            lines.push(current);
            current = word.to_string();
        } else {
            current = candidate;
        }
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

fn break_page(
    pages: &mut Vec<Page>,
    cursor: &mut PageCursor,
    page_w: f64,
    page_h: f64,
    margins: &Margins,
) {
    pages.push(new_page(page_w, page_h, margins));
    let area = cursor.content_area();
    cursor.reset(area);
}

fn render_spacer(spacer: &SpacerElement, pages: &mut [Page], cursor: &mut PageCursor) -> Result<()> {
    match cursor.advance_cursor(spacer.height) {
        PageEvent::Placed { .. } => Ok(()),
        PageEvent::PageBreak { .. } => {
            // Spacer never forces a page break on its own per §4.6: a
            // negative remainder is absorbed by the next real element.
            let _ = pages;
            Ok(())
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn render_title(
    block: &TitleBlock,
    pages: &mut Vec<Page>,
    cursor: &mut PageCursor,
    tree: &mut Option<crate::structure::TaggedStructureTree>,
    page_w: f64,
    page_h: f64,
    margins: &Margins,
    token: &CancellationToken,
) -> Result<()> {
    match block {
        TitleBlock::Text { props, text } => {
            let parsed = Props::parse(props)?;
            let height = parsed.size * LINE_HEIGHT_FACTOR + 2.0 * CELL_PADDING_V;
            let area = cursor.content_area();
            if height > area.height() {
                return Err(PdfError::LayoutTooLarge(
                    "title does not fit on one page".to_string(),
                ));
            }
            match cursor.advance_cursor(height) {
                PageEvent::Placed { y } => {
                    let page_index = pages.len() - 1;
                    let x = text_align_x(&parsed, area, text)?;
                    let page = pages.last_mut().unwrap();
                    emit_tagged(page, tree.as_mut(), page_index, "P", |page| {
                        write_text_run(page, &parsed, x, y - parsed.size, text)
                    })?;
                    Ok(())
                }
                PageEvent::PageBreak { .. } => Err(PdfError::LayoutTooLarge(
                    "title does not fit on a fresh page".to_string(),
                )),
            }
        }
        TitleBlock::Table { table } => {
            render_table(table, pages, cursor, tree, page_w, page_h, margins, token)
        }
    }
}

fn text_align_x(props: &Props, area: ContentArea, text: &str) -> Result<f64> {
    let width = text_width(&props.font, props.size, text);
    Ok(match props.align {
        TextAlignH::Left => area.left,
        TextAlignH::Center => area.left + (area.width() - width) / 2.0,
        TextAlignH::Right => area.right - width,
    })
}

fn write_text_run(page: &mut Page, props: &Props, x: f64, y: f64, text: &str) -> Result<()> {
    let escaped = escape_literal(text);
    page.graphics().raw_operation(&format!(
        "BT\n/{} {:.2} Tf\n{:.2} {:.2} Td\n({escaped}) Tj\nET",
        props.font.pdf_name(),
        props.size,
        x,
        y
    ));
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn render_table(
    table: &TableElement,
    pages: &mut Vec<Page>,
    cursor: &mut PageCursor,
    tree: &mut Option<crate::structure::TaggedStructureTree>,
    page_w: f64,
    page_h: f64,
    margins: &Margins,
    token: &CancellationToken,
) -> Result<()> {
    let area = cursor.content_area();
    let widths = column_widths(table, area.width());
    let header = table.rows.iter().find(|r| r.is_header).cloned();

    for (row_idx, row) in table.rows.iter().enumerate() {
        if token.is_cancelled() {
            return Err(PdfError::OperationCancelled);
        }
        let height = table
            .row_heights
            .get(row_idx)
            .copied()
            .unwrap_or(row_height(row, &widths)?);

        if height > area.height() {
            return Err(PdfError::LayoutTooLarge(format!(
                "table row {row_idx} taller than the page"
            )));
        }

        let event = cursor.advance_cursor(height);
        let y = match event {
            PageEvent::Placed { y } => y,
            PageEvent::PageBreak { .. } => {
                break_page(pages, cursor, page_w, page_h, margins);
                if let Some(header_row) = &header {
                    if !row.is_header {
                        emit_row(pages, cursor, tree, header_row, &widths, area)?;
                    }
                }
                match cursor.advance_cursor(height) {
                    PageEvent::Placed { y } => y,
                    PageEvent::PageBreak { .. } => {
                        return Err(PdfError::LayoutTooLarge(format!(
                            "table row {row_idx} does not fit even on a fresh page"
                        )))
                    }
                }
            }
        };

        emit_row_at(pages, tree, row, &widths, area, y, height)?;
    }
    Ok(())
}

fn emit_row(
    pages: &mut [Page],
    cursor: &PageCursor,
    tree: &mut Option<crate::structure::TaggedStructureTree>,
    row: &Row,
    widths: &[f64],
    area: ContentArea,
) -> Result<()> {
    let height = row_height(row, widths)?;
    let y = cursor.cursor_y();
    emit_row_at(pages, tree, row, widths, area, y, height)
}

/// Emits one table row, wrapping the row and each cell in its own
/// marked-content region when `tree` is `Some` (§4.4.1). Written without the
/// [`emit_tagged`] helper because the row and cell regions nest and each
/// needs its own short-lived borrow of `tree`, which a nested-closure form
/// cannot express without holding two overlapping borrows at once.
#[allow(clippy::too_many_arguments)]
fn emit_row_at(
    pages: &mut [Page],
    tree: &mut Option<crate::structure::TaggedStructureTree>,
    row: &Row,
    widths: &[f64],
    area: ContentArea,
    y: f64,
    height: f64,
) -> Result<()> {
    let page_index = pages.len() - 1;
    let page = pages.last_mut().unwrap();

    let row_mcid = tree.as_mut().map(|t| t.begin_marked_content(page_index, "TR"));
    if let Some(mcid) = row_mcid {
        page.graphics()
            .raw_operation(&format!("/TR <</MCID {mcid}>> BDC"));
    }

    let mut x = area.left;
    let mut col = 0;
    for cell in &row.row {
        let cell_width: f64 = widths.iter().skip(col).take(cell.colspan).sum();
        let props = Props::parse(&cell.props)?;

        if let Some(bg) = &cell.bg_color {
            let color = parse_color(bg)?;
            page.graphics()
                .set_fill_color(color)
                .rect(x, y - height, cell_width, height)
                .fill();
        }

        let tag = if row.is_header { "TH" } else { "TD" };
        let cell_mcid = tree.as_mut().map(|t| t.begin_marked_content(page_index, tag));
        if let Some(mcid) = cell_mcid {
            page.graphics()
                .raw_operation(&format!("/{tag} <</MCID {mcid}>> BDC"));
        }

        if let Some(tc) = &cell.text_color {
            page.graphics().set_fill_color(parse_color(tc)?);
        }
        let lines = if cell.wrap {
            wrap_lines(
                &cell.text,
                &props.font,
                props.size,
                (cell_width - 2.0 * CELL_PADDING_H).max(1.0),
            )
        } else {
            vec![cell.text.clone()]
        };
        let mut line_y = y - props.size - CELL_PADDING_V;
        for line in &lines {
            let inner_area = ContentArea {
                left: x + CELL_PADDING_H,
                right: x + cell_width - CELL_PADDING_H,
                bottom: y - height,
                top: y,
            };
            let line_x = text_align_x(&props, inner_area, line)?;
            write_text_run(page, &props, line_x, line_y, line)?;
            line_y -= props.size * LINE_HEIGHT_FACTOR;
        }
        if props.border_left || props.border_right || props.border_top || props.border_bottom {
            draw_cell_borders(page, &props, x, y - height, cell_width, height);
        }

        if cell_mcid.is_some() {
            page.graphics().raw_operation("EMC");
            tree.as_mut().unwrap().end_marked_content();
        }

        x += cell_width;
        col += cell.colspan;
    }

    if row_mcid.is_some() {
        page.graphics().raw_operation("EMC");
        tree.as_mut().unwrap().end_marked_content();
    }
    Ok(())
}

fn draw_cell_borders(page: &mut Page, props: &Props, x: f64, y: f64, w: f64, h: f64) {
    let g = page.graphics();
    if props.border_bottom {
        g.move_to(x, y).line_to(x + w, y).stroke();
    }
    if props.border_top {
        g.move_to(x, y + h).line_to(x + w, y + h).stroke();
    }
    if props.border_left {
        g.move_to(x, y).line_to(x, y + h).stroke();
    }
    if props.border_right {
        g.move_to(x + w, y).line_to(x + w, y + h).stroke();
    }
}

#[allow(clippy::too_many_arguments)]
fn render_image(
    image: &ImageElement,
    pages: &mut Vec<Page>,
    cursor: &mut PageCursor,
    tree: &mut Option<crate::structure::TaggedStructureTree>,
    page_w: f64,
    page_h: f64,
    margins: &Margins,
) -> Result<()> {
    let area = cursor.content_area();
    let (width, height) = if image.width <= area.width() {
        (image.width, image.height)
    } else {
        let scale = area.width() / image.width;
        (image.width * scale, image.height * scale)
    };
    if height > area.height() {
        return Err(PdfError::LayoutTooLarge(format!(
            "image {} taller than the page",
            image.src
        )));
    }
    let y = match cursor.advance_cursor(height) {
        PageEvent::Placed { y } => y,
        PageEvent::PageBreak { .. } => {
            break_page(pages, cursor, page_w, page_h, margins);
            match cursor.advance_cursor(height) {
                PageEvent::Placed { y } => y,
                PageEvent::PageBreak { .. } => {
                    return Err(PdfError::LayoutTooLarge(format!(
                        "image {} does not fit even on a fresh page",
                        image.src
                    )))
                }
            }
        }
    };
    let x = match image.align.as_deref() {
        Some("center") => area.left + (area.width() - width) / 2.0,
        Some("right") => area.right - width,
        _ => area.left,
    };

    let elem_id = tree.as_mut().map(|t| t.begin_structure_element("Figure"));
    if let (Some(tree), Some(id)) = (tree.as_mut(), elem_id) {
        tree.set_alt_text(id, format!("Image: {}", image.src));
    }

    let page = pages.last_mut().unwrap();
    page.graphics()
        .draw_image(&image_resource_name(&image.src), x, y - height, width, height);

    if tree.is_some() {
        tree.as_mut().unwrap().end_structure_element();
    }
    Ok(())
}

fn image_resource_name(src: &str) -> String {
    src.rsplit('/')
        .next()
        .unwrap_or(src)
        .replace(['.', ' '], "_")
}

fn render_footer(
    footer: &Footer,
    pages: &mut [Page],
    tree: &mut Option<crate::structure::TaggedStructureTree>,
    page_h: f64,
) -> Result<()> {
    let parts: Vec<&str> = footer.font.split(':').collect();
    if parts.len() < 4 {
        return Err(PdfError::InvalidTemplate(format!(
            "malformed footer font: {}",
            footer.font
        )));
    }
    let size: f64 = parts[1]
        .parse()
        .map_err(|_| PdfError::InvalidTemplate(format!("bad footer font size: {}", footer.font)))?;
    let style = parts[2];
    let bold = style.as_bytes().first() == Some(&b'1');
    let italic = style.as_bytes().get(1) == Some(&b'1');
    let font = resolve_font(parts[0], bold, italic);
    let align = match parts[3] {
        "left" => TextAlignH::Left,
        "center" => TextAlignH::Center,
        _ => TextAlignH::Right,
    };
    let props = Props {
        font,
        size,
        align,
        border_left: false,
        border_right: false,
        border_top: false,
        border_bottom: false,
    };

    for (page_index, page) in pages.iter_mut().enumerate() {
        let width = page.content_width();
        let area = ContentArea {
            left: page.margins().left,
            right: page.margins().left + width,
            bottom: 0.0,
            top: page_h,
        };
        let x = text_align_x(&props, area, &footer.text)?;
        let y = FOOTER_MARGIN;
        // Footer is always an Artifact, even with pdfUA2 off (§4.6).
        emit_tagged(page, tree.as_mut(), page_index, "Artifact", |page| {
            write_text_run(page, &props, x, y, &footer.text)
        })?;
    }
    Ok(())
}

fn apply_security(document: &mut Document, security: &SecurityConfig) -> Result<()> {
    use crate::document::EncryptionStrength;
    use crate::encryption::Permissions;

    let user = security.user_password.clone().unwrap_or_default();
    let owner = security
        .owner_password
        .clone()
        .unwrap_or_else(|| user.clone());
    let permissions = security
        .permissions
        .map(Permissions::from_bits)
        .unwrap_or_else(Permissions::all);

    document.set_encryption(crate::document::DocumentEncryption::new(
        user,
        owner,
        permissions,
        EncryptionStrength::Rc4_128bit,
    ));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn simple_template() -> Template {
        Template {
            config: Config {
                page: PageSize::A4,
                page_alignment: 0,
                page_border: None,
                custom_fonts: vec![],
                pdf_title: Some("Test".to_string()),
                author: None,
                subject: None,
                keywords: None,
                pdf_a4: false,
                pdf_ua2: false,
                security: None,
                signature: None,
            },
            title: None,
            elements: vec![Element::Table {
                table: TableElement {
                    max_columns: 2,
                    column_widths: vec![],
                    row_heights: vec![],
                    rows: vec![Row {
                        is_header: false,
                        row: vec![
                            Cell {
                                props: "Helvetica:12:100:left:1:1:1:1".to_string(),
                                text: "Name".to_string(),
                                bg_color: None,
                                text_color: None,
                                height: None,
                                wrap: true,
                                math_enabled: false,
                                colspan: 1,
                                rowspan: 1,
                            },
                            Cell {
                                props: "Helvetica:12:000:left:1:1:1:1".to_string(),
                                text: "John".to_string(),
                                bg_color: None,
                                text_color: None,
                                height: None,
                                wrap: true,
                                math_enabled: false,
                                colspan: 1,
                                rowspan: 1,
                            },
                        ],
                    }],
                },
            }],
            footer: None,
            bookmarks: vec![],
        }
    }

    #[test]
    fn single_row_table_generates_one_page_with_both_cells() {
        let template = simple_template();
        let bytes = generate(&template, &GeneratorOptions::default()).unwrap();
        assert!(bytes.len() > 400);
        assert!(bytes.starts_with(b"%PDF"));
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("(Name) Tj"));
        assert!(text.contains("(John) Tj"));
    }

    #[test]
    fn invalid_colspan_is_rejected() {
        let mut template = simple_template();
        if let Element::Table { table } = &mut template.elements[0] {
            table.rows[0].row[0].colspan = 5;
        }
        let result = generate(&template, &GeneratorOptions::default());
        assert!(matches!(result, Err(PdfError::InvalidTemplate(_))));
    }

    #[test]
    fn page_break_table_spans_multiple_pages() {
        let mut template = simple_template();
        let row_template = if let Element::Table { table } = &template.elements[0] {
            table.rows[0].clone()
        } else {
            unreachable!()
        };
        if let Element::Table { table } = &mut template.elements[0] {
            table.row_heights = vec![40.0];
            table.rows = (0..100).map(|_| row_template.clone()).collect();
        }
        let bytes = generate(&template, &GeneratorOptions::default()).unwrap();
        let text = String::from_utf8_lossy(&bytes);
        // 100 rows of height 40 on an A4 content area (~700pt) cannot fit on
        // one page, so more than one `/Type /Page` object must be written.
        let page_count = text.matches("/Type /Page").count();
        assert!(page_count > 1, "expected multiple pages, found {page_count}");
    }

    #[test]
    fn props_parses_bold_and_alignment() {
        let props = Props::parse("Helvetica:14:100:center:0:0:0:0").unwrap();
        assert_eq!(props.size, 14.0);
        assert_eq!(props.align, TextAlignH::Center);
        assert_eq!(props.font, Font::HelveticaBold);
    }

    #[test]
    fn malformed_props_is_invalid_template() {
        let result = Props::parse("Helvetica:14");
        assert!(matches!(result, Err(PdfError::InvalidTemplate(_))));
    }
}
