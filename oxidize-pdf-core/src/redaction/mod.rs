//! Redaction: locates text by position or content and removes it, either by
//! painting an opaque overlay (`visual_allowed`) or by additionally erasing
//! the underlying text-show operators (`secure_required`).
//!
//! Reading (page dimensions, text positions, capability detection) goes
//! through the existing [`crate::parser`] object model. Writing does not —
//! like [`crate::forms::FormFiller`], redaction patches the original bytes
//! in place: it locates the target content-stream object by its PDF object
//! number, rewrites its payload, and appends a fresh xref/trailer. This
//! avoids re-serializing the whole document (and so preserves everything
//! the redactor doesn't touch) at the cost of only supporting the common
//! case of a page with a single `/Contents` stream reference.

use crate::compression::{compress, decompress};
use crate::parser::content::{ContentOperation, ContentParser, TextElement};
use crate::parser::document::PdfDocument;
use crate::parser::objects::PdfObject;
use crate::parser::reader::PdfReader;
use crate::parser::ParseError;
use crate::text::{ExtractedText, ExtractionOptions, TextExtractor};
use regex::bytes::Regex;
use serde::Serialize;
use std::io::Cursor;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RedactionError {
    #[error("failed to parse PDF: {0}")]
    Parse(#[from] ParseError),
    #[error("page {0} does not exist")]
    PageNotFound(u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RedactionMode {
    VisualAllowed,
    SecureRequired,
}

/// A rectangle to redact, in PDF user space of the target page.
#[derive(Debug, Clone, Copy, Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RedactionRect {
    pub page_num: u32, // 1-based
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl RedactionRect {
    fn intersects(&self, x: f64, y: f64, w: f64, h: f64) -> bool {
        let (ax0, ay0, ax1, ay1) = (self.x, self.y, self.x + self.width, self.y + self.height);
        let (bx0, by0, bx1, by1) = (x, y, x + w, y + h);
        ax0 < bx1 && bx0 < ax1 && ay0 < by1 && by0 < ay1
    }
}

/// A located text fragment, as returned by `extract_text_positions`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextOccurrence {
    pub page_num: u32,
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PageCapabilityKind {
    Text,
    ImageOnly,
    Mixed,
    Unknown,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageCapability {
    pub page_num: u32,
    #[serde(rename = "type")]
    pub kind: PageCapabilityKind,
    pub has_text: bool,
    pub has_image: bool,
    pub ocr_enabled: bool,
    pub note: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RedactionOutcome {
    Secure,
    VisualOnly,
    Failed,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RedactionReport {
    pub mode: RedactionMode,
    pub security_outcome: RedactionOutcome,
    pub applied_secure: bool,
    pub applied_visual: bool,
    pub generated_rects: usize,
    pub applied_rectangles: usize,
    pub matched_text_count: usize,
    pub capabilities: Vec<PageCapability>,
    pub unsupported_pages: Vec<u32>,
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageDimensions {
    pub page_num: u32,
    pub width: f64,
    pub height: f64,
}

/// A single text-search criterion for a [`RedactionRequest`] (§4.8): every
/// fragment containing `text` is redacted, optionally restricted to one page.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextSearchCriterion {
    pub text: String,
    #[serde(default)]
    pub page_num: Option<u32>,
}

/// Wire schema for a redaction request (§6.1, §8 scenario 4): either explicit
/// rectangles, text searches, or both. `apply_redactions` is driven from the
/// rects this resolves to, not from this type directly.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RedactionRequest {
    pub mode: RedactionMode,
    #[serde(default)]
    pub rects: Vec<RedactionRect>,
    #[serde(default)]
    pub text_search: Vec<TextSearchCriterion>,
    #[serde(default)]
    pub ocr_enabled: bool,
}

/// Combined `inspect` output (§6.1): page dimensions plus per-page redaction
/// capability, in one JSON payload.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InspectReport {
    pub total_pages: usize,
    pub pages: Vec<PageDimensions>,
    pub capabilities: Vec<PageCapability>,
}

pub struct Redactor;

impl Redactor {
    pub fn page_info(pdf: &[u8]) -> Result<Vec<PageDimensions>, RedactionError> {
        let document = open(pdf)?;
        let count = document.page_count()?;
        let mut pages = Vec::with_capacity(count as usize);
        for i in 0..count {
            let page = document.get_page(i)?;
            pages.push(PageDimensions {
                page_num: i + 1,
                width: page.width(),
                height: page.height(),
            });
        }
        Ok(pages)
    }

    pub fn extract_text_positions(
        pdf: &[u8],
        page_num: u32,
    ) -> Result<Vec<TextOccurrence>, RedactionError> {
        let document = open(pdf)?;
        if page_num == 0 || page_num > document.page_count()? {
            return Err(RedactionError::PageNotFound(page_num));
        }
        let extractor = TextExtractor::with_options(ExtractionOptions {
            preserve_layout: true,
            ..Default::default()
        });
        let extracted: ExtractedText = extractor.extract_from_page(&document, page_num - 1)?;
        Ok(extracted
            .fragments
            .into_iter()
            .map(|f| TextOccurrence {
                page_num,
                text: f.text,
                x: f.x,
                y: f.y,
                width: f.width,
                height: f.height,
            })
            .collect())
    }

    pub fn find_text_occurrences(
        pdf: &[u8],
        text: &str,
    ) -> Result<Vec<RedactionRect>, RedactionError> {
        let document = open(pdf)?;
        let count = document.page_count()?;
        let extractor = TextExtractor::with_options(ExtractionOptions {
            preserve_layout: true,
            ..Default::default()
        });
        let mut rects = Vec::new();
        for i in 0..count {
            let extracted = extractor.extract_from_page(&document, i)?;
            for fragment in extracted.fragments {
                if fragment.text.contains(text) {
                    rects.push(RedactionRect {
                        page_num: i + 1,
                        x: fragment.x,
                        y: fragment.y,
                        width: fragment.width,
                        height: fragment.height,
                    });
                }
            }
        }
        Ok(rects)
    }

    /// Reports each page's redaction capability without writing anything.
    pub fn page_capabilities(
        pdf: &[u8],
        ocr_enabled: bool,
    ) -> Result<Vec<PageCapability>, RedactionError> {
        let document = open(pdf)?;
        let count = document.page_count()?;
        let mut capabilities = Vec::with_capacity(count as usize);
        for i in 0..count {
            let page = document.get_page(i)?;
            let has_text = !document
                .get_page_content_streams(&page)?
                .iter()
                .all(|s| !contains_text_show_operator(s));
            let has_image = page_has_image_xobject(&document, &page)?;
            let kind = match (has_text, has_image) {
                (true, true) => PageCapabilityKind::Mixed,
                (true, false) => PageCapabilityKind::Text,
                (false, true) => PageCapabilityKind::ImageOnly,
                (false, false) => PageCapabilityKind::Unknown,
            };
            capabilities.push(PageCapability {
                page_num: i + 1,
                kind,
                has_text,
                has_image,
                ocr_enabled,
                note: None,
            });
        }
        Ok(capabilities)
    }

    pub fn apply_redactions(
        pdf: &[u8],
        rects: &[RedactionRect],
        mode: RedactionMode,
        ocr_enabled: bool,
    ) -> Result<(Vec<u8>, RedactionReport), RedactionError> {
        let capabilities = Self::page_capabilities(pdf, ocr_enabled)?;
        let mut bytes = pdf.to_vec();
        let mut warnings = Vec::new();
        let mut unsupported_pages = Vec::new();
        let mut applied_rectangles = 0usize;
        let mut applied_secure = false;
        let mut applied_visual = false;

        let document = open(pdf)?;
        let page_count = document.page_count()?;
        let mut next_object_id = highest_object_id(&bytes) + 1;

        for page_num in 1..=page_count {
            let page_rects: Vec<&RedactionRect> = rects
                .iter()
                .filter(|r| r.page_num == page_num)
                .collect();
            if page_rects.is_empty() {
                continue;
            }
            let capability = capabilities
                .iter()
                .find(|c| c.page_num == page_num)
                .expect("capability computed for every page");

            if mode == RedactionMode::SecureRequired
                && capability.kind == PageCapabilityKind::ImageOnly
                && !ocr_enabled
            {
                unsupported_pages.push(page_num);
                warnings.push(format!(
                    "page {page_num} is image-only with OCR disabled; cannot guarantee secure redaction"
                ));
                continue;
            }

            let page = document.get_page(page_num - 1)?;

            if mode == RedactionMode::SecureRequired {
                match rewrite_content_stream_secure(&bytes, &page, &page_rects) {
                    Ok(Some(patched)) => {
                        bytes = patched;
                        applied_secure = true;
                    }
                    Ok(None) => {
                        warnings.push(format!(
                            "page {page_num} has multiple content streams; falling back to visual-only coverage"
                        ));
                    }
                    Err(e) => {
                        warnings.push(format!(
                            "page {page_num} secure rewrite failed ({e}); falling back to visual-only coverage"
                        ));
                    }
                }
            }

            let overlay = build_overlay_stream(&page_rects);
            let ap_id = next_object_id;
            next_object_id += 1;
            let object = format!(
                "{ap_id} 0 obj\n<< /Length {len} >>\nstream\n{overlay}\nendstream\nendobj\n",
                len = overlay.len()
            );
            append_object(&mut bytes, object.as_bytes());
            add_content_reference(&mut bytes, page.obj_ref.0, ap_id);
            applied_visual = true;
            applied_rectangles += page_rects.len();
        }

        let final_bytes = rebuild_xref(&bytes).unwrap_or(bytes);

        let security_outcome = if mode == RedactionMode::SecureRequired {
            if !unsupported_pages.is_empty() {
                RedactionOutcome::Failed
            } else if applied_secure {
                RedactionOutcome::Secure
            } else {
                RedactionOutcome::VisualOnly
            }
        } else {
            RedactionOutcome::VisualOnly
        };

        let report = RedactionReport {
            mode,
            security_outcome,
            applied_secure,
            applied_visual,
            generated_rects: rects.len(),
            applied_rectangles,
            matched_text_count: rects.len(),
            capabilities,
            unsupported_pages,
            warnings,
        };
        Ok((final_bytes, report))
    }

    /// Resolves a [`RedactionRequest`]'s explicit rects and text searches into
    /// one flat rect list, then applies it. Text searches run against the
    /// whole document; a search restricted to `pageNum` is filtered after
    /// matching since `find_text_occurrences` itself is document-wide.
    pub fn apply_request(
        pdf: &[u8],
        request: &RedactionRequest,
    ) -> Result<(Vec<u8>, RedactionReport), RedactionError> {
        let mut rects = request.rects.clone();
        for criterion in &request.text_search {
            let found = Self::find_text_occurrences(pdf, &criterion.text)?;
            rects.extend(found.into_iter().filter(|r| match criterion.page_num {
                Some(p) => p == r.page_num,
                None => true,
            }));
        }
        Self::apply_redactions(pdf, &rects, request.mode, request.ocr_enabled)
    }

    pub fn inspect(pdf: &[u8], ocr_enabled: bool) -> Result<InspectReport, RedactionError> {
        let pages = Self::page_info(pdf)?;
        let capabilities = Self::page_capabilities(pdf, ocr_enabled)?;
        Ok(InspectReport {
            total_pages: pages.len(),
            pages,
            capabilities,
        })
    }
}

fn open(pdf: &[u8]) -> Result<PdfDocument<Cursor<Vec<u8>>>, RedactionError> {
    let reader = PdfReader::new(Cursor::new(pdf.to_vec()))?;
    Ok(PdfDocument::new(reader))
}

fn contains_text_show_operator(stream: &[u8]) -> bool {
    ContentParser::parse_content(stream)
        .map(|ops| {
            ops.iter().any(|op| {
                matches!(
                    op,
                    ContentOperation::ShowText(_)
                        | ContentOperation::ShowTextArray(_)
                        | ContentOperation::NextLineShowText(_)
                        | ContentOperation::SetSpacingNextLineShowText(_, _, _)
                )
            })
        })
        .unwrap_or(false)
}

fn page_has_image_xobject(
    document: &PdfDocument<Cursor<Vec<u8>>>,
    page: &crate::parser::ParsedPage,
) -> Result<bool, RedactionError> {
    let Some(resources) = document.get_page_resources(page)? else {
        return Ok(false);
    };
    let Some(PdfObject::Dictionary(xobjects)) = resources.get("XObject").map(|o| {
        document
            .resolve(o)
            .unwrap_or_else(|_| PdfObject::Dictionary(crate::parser::objects::PdfDictionary::new()))
    }) else {
        return Ok(false);
    };
    for (_, value) in xobjects.0.iter() {
        if let Ok(PdfObject::Stream(stream)) = document.resolve(value) {
            if let Some(PdfObject::Name(name)) = stream.dict.get("Subtype") {
                if name.0 == "Image" {
                    return Ok(true);
                }
            }
        }
    }
    Ok(false)
}

fn build_overlay_stream(rects: &[&RedactionRect]) -> String {
    let mut out = String::from("q\n0 g\n0 G\n");
    for r in rects {
        out.push_str(&format!(
            "{:.2} {:.2} {:.2} {:.2} re f\n",
            r.x, r.y, r.width, r.height
        ));
    }
    out.push_str("Q");
    out
}

/// Attempts to rewrite the page's single content stream, dropping any
/// text-show operator whose bounding box intersects a redaction rect.
/// Returns `Ok(None)` when the page has more than one content stream (not
/// currently supported for secure rewriting).
fn rewrite_content_stream_secure(
    bytes: &[u8],
    page: &crate::parser::ParsedPage,
    rects: &[&RedactionRect],
) -> Result<Option<Vec<u8>>, RedactionError> {
    let contents = match page.dict.get("Contents") {
        Some(PdfObject::Reference(n, g)) => (*n, *g),
        _ => return Ok(None),
    };

    let Some((obj_start, obj_end)) = find_object_span(bytes, contents.0) else {
        return Ok(None);
    };
    let Some((dict_start, dict_end)) = find_dict_in_range(bytes, obj_start, obj_end) else {
        return Ok(None);
    };
    let Some(stream_start) = find_bytes(bytes, dict_end, b"stream") else {
        return Ok(None);
    };
    let mut payload_start = stream_start + b"stream".len();
    if bytes.get(payload_start) == Some(&b'\r') {
        payload_start += 1;
    }
    if bytes.get(payload_start) == Some(&b'\n') {
        payload_start += 1;
    }
    let Some(endstream_pos) = find_bytes(bytes, payload_start, b"endstream") else {
        return Ok(None);
    };
    let payload = &bytes[payload_start..endstream_pos];

    let dict_bytes = &bytes[dict_start..dict_end];
    let is_flate = Regex::new(r"/Filter\s*/FlateDecode")
        .unwrap()
        .is_match(dict_bytes);
    let decoded = if is_flate {
        decompress(payload).map_err(|_| ParseError::InvalidXRef)?
    } else {
        payload.to_vec()
    };

    let ops = ContentParser::parse_content(&decoded)?;
    let rewritten = drop_redacted_text_ops(&ops, rects);
    let new_payload = if is_flate {
        compress(&rewritten).map_err(|_| ParseError::InvalidXRef)?
    } else {
        rewritten
    };

    let mut out = bytes.to_vec();
    out.splice(payload_start..endstream_pos, new_payload.iter().copied());

    let length_re = Regex::new(r"/Length\s+\d+").unwrap();
    let new_length = new_payload.len();
    if let Some(m) = length_re.find(&out[dict_start..dict_end]) {
        let abs_start = dict_start + m.start();
        let abs_end = dict_start + m.end();
        out.splice(
            abs_start..abs_end,
            format!("/Length {new_length}").into_bytes(),
        );
    }

    Ok(Some(out))
}

#[derive(Debug, Default, Clone, Copy)]
struct SimpleTextState {
    tx: f64,
    ty: f64,
    font_size: f64,
}

fn drop_redacted_text_ops(ops: &[ContentOperation], rects: &[&RedactionRect]) -> Vec<u8> {
    let mut out = Vec::new();
    let mut state = SimpleTextState::default();

    for op in ops {
        match op {
            ContentOperation::SetTextMatrix(_, _, _, _, e, f) => {
                state.tx = *e as f64;
                state.ty = *f as f64;
            }
            ContentOperation::MoveText(dx, dy) | ContentOperation::MoveTextSetLeading(dx, dy) => {
                state.tx += *dx as f64;
                state.ty += *dy as f64;
            }
            ContentOperation::SetFont(_, size) => {
                state.font_size = *size as f64;
            }
            ContentOperation::BeginText => {
                state.tx = 0.0;
                state.ty = 0.0;
            }
            _ => {}
        }

        let bbox = match op {
            ContentOperation::ShowText(text) => {
                Some(text_bbox(text.len(), state.tx, state.ty, state.font_size))
            }
            ContentOperation::ShowTextArray(items) => {
                let len: usize = items
                    .iter()
                    .map(|i| match i {
                        TextElement::Text(t) => t.len(),
                        TextElement::Spacing(_) => 0,
                    })
                    .sum();
                Some(text_bbox(len, state.tx, state.ty, state.font_size))
            }
            ContentOperation::NextLineShowText(text) => {
                Some(text_bbox(text.len(), state.tx, state.ty, state.font_size))
            }
            ContentOperation::SetSpacingNextLineShowText(_, _, text) => {
                Some(text_bbox(text.len(), state.tx, state.ty, state.font_size))
            }
            _ => None,
        };

        if let Some((x, y, w, h)) = bbox {
            if rects.iter().any(|r| r.intersects(x, y, w, h)) {
                continue;
            }
        }

        out.extend_from_slice(&format_operation(op));
        out.push(b'\n');
    }
    out
}

fn text_bbox(char_count: usize, tx: f64, ty: f64, font_size: f64) -> (f64, f64, f64, f64) {
    (tx, ty, font_size * 0.5 * char_count as f64, font_size.max(1.0))
}

fn format_operation(op: &ContentOperation) -> Vec<u8> {
    use ContentOperation::*;
    let s = match op {
        BeginText => "BT".to_string(),
        EndText => "ET".to_string(),
        SetCharSpacing(v) => format!("{v} Tc"),
        SetWordSpacing(v) => format!("{v} Tw"),
        SetHorizontalScaling(v) => format!("{v} Tz"),
        SetLeading(v) => format!("{v} TL"),
        SetFont(name, size) => format!("/{name} {size} Tf"),
        SetTextRenderMode(v) => format!("{v} Tr"),
        SetTextRise(v) => format!("{v} Ts"),
        MoveText(x, y) => format!("{x} {y} Td"),
        MoveTextSetLeading(x, y) => format!("{x} {y} TD"),
        SetTextMatrix(a, b, c, d, e, f) => format!("{a} {b} {c} {d} {e} {f} Tm"),
        NextLine => "T*".to_string(),
        ShowText(text) => format!("({}) Tj", escape_literal(text)),
        ShowTextArray(items) => {
            let mut parts = String::from("[");
            for item in items {
                match item {
                    TextElement::Text(t) => parts.push_str(&format!("({})", escape_literal(t))),
                    TextElement::Spacing(n) => parts.push_str(&format!("{n}")),
                }
                parts.push(' ');
            }
            parts.push_str("] TJ");
            parts
        }
        NextLineShowText(text) => format!("({}) '", escape_literal(text)),
        SetSpacingNextLineShowText(aw, ac, text) => {
            format!("{aw} {ac} ({}) \"", escape_literal(text))
        }
        SaveGraphicsState => "q".to_string(),
        RestoreGraphicsState => "Q".to_string(),
        SetTransformMatrix(a, b, c, d, e, f) => format!("{a} {b} {c} {d} {e} {f} cm"),
        SetLineWidth(v) => format!("{v} w"),
        SetLineCap(v) => format!("{v} J"),
        SetLineJoin(v) => format!("{v} j"),
        SetMiterLimit(v) => format!("{v} M"),
        SetDashPattern(arr, phase) => {
            let nums: Vec<String> = arr.iter().map(|n| n.to_string()).collect();
            format!("[{}] {phase} d", nums.join(" "))
        }
        SetIntent(name) => format!("/{name} ri"),
        SetFlatness(v) => format!("{v} i"),
        SetGraphicsStateParams(name) => format!("/{name} gs"),
        MoveTo(x, y) => format!("{x} {y} m"),
        LineTo(x, y) => format!("{x} {y} l"),
        CurveTo(a, b, c, d, e, f) => format!("{a} {b} {c} {d} {e} {f} c"),
        CurveToV(a, b, c, d) => format!("{a} {b} {c} {d} v"),
        CurveToY(a, b, c, d) => format!("{a} {b} {c} {d} y"),
        ClosePath => "h".to_string(),
        Rectangle(x, y, w, h) => format!("{x} {y} {w} {h} re"),
        Stroke => "S".to_string(),
        CloseStroke => "s".to_string(),
        Fill => "f".to_string(),
        FillEvenOdd => "f*".to_string(),
        FillStroke => "B".to_string(),
        FillStrokeEvenOdd => "B*".to_string(),
        CloseFillStroke => "b".to_string(),
        CloseFillStrokeEvenOdd => "b*".to_string(),
        EndPath => "n".to_string(),
        Clip => "W".to_string(),
        ClipEvenOdd => "W*".to_string(),
        SetStrokingColorSpace(name) => format!("/{name} CS"),
        SetNonStrokingColorSpace(name) => format!("/{name} cs"),
        SetStrokingColor(vals) => operands(vals, "SC"),
        SetNonStrokingColor(vals) => operands(vals, "sc"),
        SetStrokingGray(v) => format!("{v} G"),
        SetNonStrokingGray(v) => format!("{v} g"),
        SetStrokingRGB(r, g, b) => format!("{r} {g} {b} RG"),
        SetNonStrokingRGB(r, g, b) => format!("{r} {g} {b} rg"),
        SetStrokingCMYK(c, m, y, k) => format!("{c} {m} {y} {k} K"),
        SetNonStrokingCMYK(c, m, y, k) => format!("{c} {m} {y} {k} k"),
        ShadingFill(name) => format!("/{name} sh"),
        BeginInlineImage => "BI".to_string(),
        InlineImageData(_) => String::new(),
        PaintXObject(name) => format!("/{name} Do"),
        BeginMarkedContent(tag) => format!("/{tag} BMC"),
        BeginMarkedContentWithProps(tag, _) => format!("/{tag} BDC"),
        EndMarkedContent => "EMC".to_string(),
        DefineMarkedContentPoint(tag) => format!("/{tag} MP"),
        DefineMarkedContentPointWithProps(tag, _) => format!("/{tag} DP"),
        BeginCompatibility => "BX".to_string(),
        EndCompatibility => "EX".to_string(),
    };
    s.into_bytes()
}

fn operands(vals: &[f32], op: &str) -> String {
    let nums: Vec<String> = vals.iter().map(|v| v.to_string()).collect();
    format!("{} {op}", nums.join(" "))
}

fn escape_literal(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    for &b in bytes {
        match b {
            b'\\' => out.push_str("\\\\"),
            b'(' => out.push_str("\\("),
            b')' => out.push_str("\\)"),
            _ => out.push(b as char),
        }
    }
    out
}

fn find_bytes(data: &[u8], from: usize, needle: &[u8]) -> Option<usize> {
    data[from..]
        .windows(needle.len())
        .position(|w| w == needle)
        .map(|p| p + from)
}

fn find_object_span(data: &[u8], obj_id: u32) -> Option<(usize, usize)> {
    let pattern = format!(r"(?:^|[^0-9]){obj_id}\s+\d+\s+obj");
    let re = Regex::new(&pattern).ok()?;
    let m = re.find(data)?;
    let start = data[m.start()..m.end()]
        .iter()
        .position(|&b| b.is_ascii_digit())
        .map(|p| m.start() + p)?;
    let end = find_bytes(data, start, b"endobj").unwrap_or(data.len());
    Some((start, end))
}

fn find_dict_in_range(data: &[u8], start: usize, end: usize) -> Option<(usize, usize)> {
    let open = find_bytes(data, start, b"<<")?;
    if open >= end {
        return None;
    }
    let mut depth = 0i32;
    let mut i = open;
    while i + 1 < end {
        if &data[i..i + 2] == b"<<" {
            depth += 1;
            i += 2;
            continue;
        }
        if &data[i..i + 2] == b">>" {
            depth -= 1;
            i += 2;
            if depth == 0 {
                return Some((open, i));
            }
            continue;
        }
        i += 1;
    }
    None
}

/// Appends a new `/Contents` entry to a page dictionary, converting a
/// single stream reference into an array if needed.
fn add_content_reference(bytes: &mut Vec<u8>, page_obj_id: u32, new_obj_id: u32) {
    let Some((obj_start, obj_end)) = find_object_span(bytes, page_obj_id) else {
        return;
    };
    let Some((dict_start, dict_end)) = find_dict_in_range(bytes, obj_start, obj_end) else {
        return;
    };
    let dict = bytes[dict_start..dict_end].to_vec();
    let contents_re = Regex::new(r"/Contents\s+(\d+)\s+(\d+)\s+R").unwrap();
    if let Some(m) = contents_re.captures(&dict) {
        let whole = m.get(0).unwrap();
        let n = std::str::from_utf8(m.get(1).unwrap().as_bytes())
            .unwrap()
            .to_string();
        let g = std::str::from_utf8(m.get(2).unwrap().as_bytes())
            .unwrap()
            .to_string();
        let replacement = format!("/Contents [{n} {g} R {new_obj_id} 0 R]");
        let abs_start = dict_start + whole.start();
        let abs_end = dict_start + whole.end();
        bytes.splice(abs_start..abs_end, replacement.into_bytes());
        return;
    }
    let contents_arr_re = Regex::new(r"/Contents\s*\[([^\]]*)\]").unwrap();
    if let Some(m) = contents_arr_re.captures(&dict) {
        let whole = m.get(0).unwrap();
        let inner = String::from_utf8_lossy(m.get(1).unwrap().as_bytes()).into_owned();
        let replacement = format!("/Contents [{inner} {new_obj_id} 0 R]");
        let abs_start = dict_start + whole.start();
        let abs_end = dict_start + whole.end();
        bytes.splice(abs_start..abs_end, replacement.into_bytes());
    }
}

fn append_object(bytes: &mut Vec<u8>, object_bytes: &[u8]) {
    if !bytes.ends_with(b"\n") {
        bytes.push(b'\n');
    }
    bytes.extend_from_slice(object_bytes);
}

fn highest_object_id(data: &[u8]) -> u32 {
    let re = Regex::new(r"(\d+)\s+\d+\s+obj").unwrap();
    re.captures_iter(data)
        .filter_map(|c| {
            std::str::from_utf8(c.get(1).unwrap().as_bytes())
                .ok()?
                .parse()
                .ok()
        })
        .max()
        .unwrap_or(0)
}

fn rebuild_xref(data: &[u8]) -> Option<Vec<u8>> {
    let root_re = Regex::new(r"/Root\s+(\d+)\s+\d+\s+R").unwrap();
    let root_id: u64 = root_re
        .captures_iter(data)
        .last()
        .and_then(|c| std::str::from_utf8(c.get(1)?.as_bytes()).ok()?.parse().ok())?;

    let xref_re = Regex::new(r"\bxref\b").unwrap();
    let body_end = xref_re.find_iter(data).last().map(|m| m.start()).unwrap_or(data.len());
    let mut out = data[..body_end].to_vec();
    if !out.ends_with(b"\n") {
        out.push(b'\n');
    }

    let obj_re = Regex::new(r"(\d+)\s+(\d+)\s+obj").unwrap();
    let mut offsets: Vec<(u64, u64)> = obj_re
        .captures_iter(&out)
        .filter_map(|c| {
            let m = c.get(0)?;
            let num: u64 = std::str::from_utf8(c.get(1)?.as_bytes()).ok()?.parse().ok()?;
            Some((num, m.start() as u64))
        })
        .collect();
    if offsets.is_empty() {
        return None;
    }
    offsets.sort_by_key(|(n, _)| *n);
    offsets.dedup_by_key(|(n, _)| *n);
    let max_num = offsets.iter().map(|(n, _)| *n).max()?;

    let xref_start = out.len();
    out.extend_from_slice(b"xref\n");
    out.extend_from_slice(format!("0 {}\n", max_num + 1).as_bytes());
    out.extend_from_slice(b"0000000000 65535 f \n");
    for num in 1..=max_num {
        match offsets.iter().find(|(n, _)| *n == num) {
            Some((_, offset)) => out.extend_from_slice(format!("{offset:010} 00000 n \n").as_bytes()),
            None => out.extend_from_slice(b"0000000000 00000 f \n"),
        }
    }
    out.extend_from_slice(b"trailer\n");
    out.extend_from_slice(format!("<< /Size {} /Root {root_id} 0 R >>\n", max_num + 1).as_bytes());
    out.extend_from_slice(b"startxref\n");
    out.extend_from_slice(format!("{xref_start}\n").as_bytes());
    out.extend_from_slice(b"%%EOF\n");
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_pdf_with_text() -> Vec<u8> {
        let content = b"BT /F1 12 Tf 10 700 Td (Confidential 2024) Tj ET";
        let body = format!(
            concat!(
                "%PDF-1.7\n",
                "1 0 obj\n<< /Type /Catalog /Pages 2 0 R >>\nendobj\n",
                "2 0 obj\n<< /Type /Pages /Kids [3 0 R] /Count 1 >>\nendobj\n",
                "3 0 obj\n<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] /Contents 4 0 R /Resources << /Font << /F1 5 0 R >> >> >>\nendobj\n",
                "4 0 obj\n<< /Length {len} >>\nstream\n{content}\nendstream\nendobj\n",
                "5 0 obj\n<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>\nendobj\n",
                "trailer\n<< /Size 6 /Root 1 0 R >>\n%%EOF\n",
            ),
            len = content.len(),
            content = std::str::from_utf8(content).unwrap(),
        );
        body.into_bytes()
    }

    #[test]
    fn page_info_reads_media_box() {
        let pdf = sample_pdf_with_text();
        let pages = Redactor::page_info(&pdf).unwrap();
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].width, 612.0);
        assert_eq!(pages[0].height, 792.0);
    }

    #[test]
    fn finds_text_occurrence_by_content() {
        let pdf = sample_pdf_with_text();
        let rects = Redactor::find_text_occurrences(&pdf, "Confidential").unwrap();
        assert_eq!(rects.len(), 1);
        assert_eq!(rects[0].page_num, 1);
    }

    #[test]
    fn visual_redaction_appends_overlay_and_reports_applied() {
        let pdf = sample_pdf_with_text();
        let rects = vec![RedactionRect {
            page_num: 1,
            x: 10.0,
            y: 695.0,
            width: 150.0,
            height: 15.0,
        }];
        let (out, report) =
            Redactor::apply_redactions(&pdf, &rects, RedactionMode::VisualAllowed, false).unwrap();
        assert!(report.applied_visual);
        assert_eq!(report.security_outcome, RedactionOutcome::VisualOnly);
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("re f"));
    }

    #[test]
    fn rect_intersection_is_symmetric_and_correct() {
        let r = RedactionRect {
            page_num: 1,
            x: 0.0,
            y: 0.0,
            width: 10.0,
            height: 10.0,
        };
        assert!(r.intersects(5.0, 5.0, 2.0, 2.0));
        assert!(!r.intersects(20.0, 20.0, 2.0, 2.0));
    }
}
