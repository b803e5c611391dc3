//! Translates a restricted SVG subset into PDF content-stream operators
//! suitable for a Form XObject: `rect`, `line`, `circle`, `path` (`M L H V C
//! Q Z` and lowercase relative variants), `<g>`/`<defs>`/`<use>`, `transform`
//! attributes, and named/hex/`rgb()` fill and stroke colors.
//!
//! The SVG viewBox is mapped into the unit square via
//! `cm 1/w 0 0 -1/h 0 1` so the SVG Y axis (down) flips to PDF's Y axis
//! (up); callers then place the resulting Form XObject on a page with their
//! own `cm` + `Do`.

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;
use std::collections::HashMap;
use std::fmt::Write as _;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SvgTranslationError {
    #[error("malformed SVG XML: {0}")]
    Xml(#[from] quick_xml::Error),
    #[error("malformed SVG XML: {0}")]
    Utf8(#[from] std::str::Utf8Error),
    #[error("<svg> root element is missing a viewBox or width/height")]
    MissingDimensions,
    #[error("unsupported path command: {0}")]
    UnsupportedPathCommand(char),
}

#[derive(Debug, Clone, Copy)]
pub struct Rgb(pub f64, pub f64, pub f64);

#[derive(Debug, Clone, Copy)]
#[allow(dead_code)]
struct Style {
    fill: Option<Rgb>,
    stroke: Option<Rgb>,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            fill: Some(Rgb(0.0, 0.0, 0.0)), // SVG default fill is black, not none
            stroke: None,
        }
    }
}

/// Translates restricted SVG documents into a PDF Form XObject's content
/// stream bytes.
pub struct SvgTranslator;

/// The result of translating one SVG document.
pub struct TranslatedSvg {
    /// Content-stream operators, ready to be wrapped in a Form XObject.
    pub content: Vec<u8>,
    /// The viewBox width and height, used for the Form XObject's `/BBox`.
    pub width: f64,
    pub height: f64,
}

impl SvgTranslator {
    pub fn translate(svg: &[u8]) -> Result<TranslatedSvg, SvgTranslationError> {
        let mut reader = Reader::from_reader(svg);
        reader.config_mut().trim_text(true);

        let mut buf = Vec::new();
        let mut out = String::new();
        let mut dims: Option<(f64, f64, f64, f64)> = None; // min_x, min_y, w, h
        let mut style_stack: Vec<Style> = vec![Style::default()];
        let mut group_depth = 0usize;
        let mut in_defs = false;
        let mut defs: HashMap<String, BytesStart<'static>> = HashMap::new();

        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Start(e) | Event::Empty(e) => {
                    let name = local_name(&e)?;
                    match name.as_str() {
                        "svg" => dims = Some(parse_view_box(&e)?),
                        "defs" => {
                            in_defs = true;
                        }
                        "g" => {
                            group_depth += 1;
                            let mut style = *style_stack.last().unwrap();
                            apply_style_attrs(&e, &mut style)?;
                            style_stack.push(style);
                            if let Some(transform) = attr(&e, "transform")? {
                                out.push_str("q\n");
                                write_transform(&mut out, &transform);
                            } else {
                                out.push_str("q\n");
                            }
                        }
                        "rect" if !in_defs => {
                            let style = *style_stack.last().unwrap();
                            emit_rect(&mut out, &e, style)?;
                        }
                        "line" if !in_defs => {
                            let style = *style_stack.last().unwrap();
                            emit_line(&mut out, &e, style)?;
                        }
                        "circle" if !in_defs => {
                            let style = *style_stack.last().unwrap();
                            emit_circle(&mut out, &e, style)?;
                        }
                        "path" if !in_defs => {
                            let style = *style_stack.last().unwrap();
                            emit_path(&mut out, &e, style)?;
                        }
                        "use" if !in_defs => {
                            if let Some(href) = attr(&e, "href")?.or(attr(&e, "xlink:href")?) {
                                let id = href.trim_start_matches('#').to_string();
                                if let Some(def) = defs.get(&id).cloned() {
                                    let style = *style_stack.last().unwrap();
                                    emit_shape_by_name(&mut out, &def, style)?;
                                }
                            }
                        }
                        _ if in_defs => {
                            if let Some(id) = attr(&e, "id")? {
                                defs.insert(id, e.to_owned().into_owned());
                            }
                        }
                        _ => {}
                    }
                }
                Event::End(e) => {
                    let name = std::str::from_utf8(e.name().as_ref())?.to_string();
                    match name.as_str() {
                        "g" => {
                            if group_depth > 0 {
                                group_depth -= 1;
                                style_stack.pop();
                                out.push_str("Q\n");
                            }
                        }
                        "defs" => in_defs = false,
                        _ => {}
                    }
                }
                Event::Eof => break,
                _ => {}
            }
            buf.clear();
        }

        let (_min_x, _min_y, w, h) = dims.ok_or(SvgTranslationError::MissingDimensions)?;
        Ok(TranslatedSvg {
            content: out.into_bytes(),
            width: w,
            height: h,
        })
    }
}

fn local_name(e: &BytesStart) -> Result<String, SvgTranslationError> {
    Ok(std::str::from_utf8(e.name().as_ref())?.to_string())
}

fn attr(e: &BytesStart, key: &str) -> Result<Option<String>, SvgTranslationError> {
    for a in e.attributes().flatten() {
        if a.key.as_ref() == key.as_bytes() {
            return Ok(Some(a.unescape_value()?.into_owned()));
        }
    }
    Ok(None)
}

fn attr_f64(e: &BytesStart, key: &str, default: f64) -> Result<f64, SvgTranslationError> {
    Ok(attr(e, key)?
        .and_then(|v| v.parse().ok())
        .unwrap_or(default))
}

fn parse_view_box(e: &BytesStart) -> Result<(f64, f64, f64, f64), SvgTranslationError> {
    if let Some(vb) = attr(e, "viewBox")? {
        let parts: Vec<f64> = vb
            .split_whitespace()
            .filter_map(|p| p.parse().ok())
            .collect();
        if parts.len() == 4 {
            return Ok((parts[0], parts[1], parts[2], parts[3]));
        }
    }
    let w = attr_f64(e, "width", 0.0)?;
    let h = attr_f64(e, "height", 0.0)?;
    if w > 0.0 && h > 0.0 {
        Ok((0.0, 0.0, w, h))
    } else {
        Err(SvgTranslationError::MissingDimensions)
    }
}

fn apply_style_attrs(e: &BytesStart, style: &mut Style) -> Result<(), SvgTranslationError> {
    if let Some(fill) = attr(e, "fill")? {
        style.fill = parse_color(&fill);
    }
    if let Some(stroke) = attr(e, "stroke")? {
        style.stroke = parse_color(&stroke);
    }
    Ok(())
}

fn write_transform(out: &mut String, transform: &str) {
    if let Some(inner) = transform
        .trim()
        .strip_prefix("matrix(")
        .and_then(|s| s.strip_suffix(')'))
    {
        let vals: Vec<f64> = inner.split(',').filter_map(|v| v.trim().parse().ok()).collect();
        if vals.len() == 6 {
            let _ = writeln!(
                out,
                "{} {} {} {} {} {} cm",
                vals[0], vals[1], vals[2], vals[3], vals[4], vals[5]
            );
            return;
        }
    }
    if let Some(inner) = transform
        .trim()
        .strip_prefix("translate(")
        .and_then(|s| s.strip_suffix(')'))
    {
        let vals: Vec<f64> = inner
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|s| !s.is_empty())
            .filter_map(|v| v.parse().ok())
            .collect();
        let (tx, ty) = (vals.first().copied().unwrap_or(0.0), vals.get(1).copied().unwrap_or(0.0));
        let _ = writeln!(out, "1 0 0 1 {tx} {ty} cm");
    }
}

fn emit_style_ops(out: &mut String, style: Style) -> bool {
    let mut will_fill = false;
    if let Some(Rgb(r, g, b)) = style.fill {
        let _ = writeln!(out, "{r:.3} {g:.3} {b:.3} rg");
        will_fill = true;
    }
    if let Some(Rgb(r, g, b)) = style.stroke {
        let _ = writeln!(out, "{r:.3} {g:.3} {b:.3} RG");
    }
    will_fill
}

fn paint_op(style: Style) -> &'static str {
    match (style.fill.is_some(), style.stroke.is_some()) {
        (true, true) => "B",
        (true, false) => "f",
        (false, true) => "S",
        (false, false) => "n",
    }
}

fn emit_rect(out: &mut String, e: &BytesStart, style: Style) -> Result<(), SvgTranslationError> {
    let x = attr_f64(e, "x", 0.0)?;
    let y = attr_f64(e, "y", 0.0)?;
    let w = attr_f64(e, "width", 0.0)?;
    let h = attr_f64(e, "height", 0.0)?;
    out.push_str("q\n");
    emit_style_ops(out, style);
    let _ = writeln!(out, "{x} {y} {w} {h} re");
    let _ = writeln!(out, "{}", paint_op(style));
    out.push_str("Q\n");
    Ok(())
}

fn emit_line(out: &mut String, e: &BytesStart, style: Style) -> Result<(), SvgTranslationError> {
    let x1 = attr_f64(e, "x1", 0.0)?;
    let y1 = attr_f64(e, "y1", 0.0)?;
    let x2 = attr_f64(e, "x2", 0.0)?;
    let y2 = attr_f64(e, "y2", 0.0)?;
    out.push_str("q\n");
    emit_style_ops(out, style);
    let _ = writeln!(out, "{x1} {y1} m");
    let _ = writeln!(out, "{x2} {y2} l");
    out.push_str("S\n");
    out.push_str("Q\n");
    Ok(())
}

fn emit_circle(out: &mut String, e: &BytesStart, style: Style) -> Result<(), SvgTranslationError> {
    let cx = attr_f64(e, "cx", 0.0)?;
    let cy = attr_f64(e, "cy", 0.0)?;
    let r = attr_f64(e, "r", 0.0)?;
    const K: f64 = 0.552284749831;
    out.push_str("q\n");
    emit_style_ops(out, style);
    let _ = writeln!(out, "{} {cy} m", cx + r);
    let _ = writeln!(out, "{} {} {} {} {cx} {}", cx + r, cy + K * r, cx + K * r, cy + r, cy + r);
    let _ = writeln!(out, "{} {} {} {} {} {cy}", cx - K * r, cy + r, cx - r, cy + K * r, cx - r);
    let _ = writeln!(out, "{} {} {} {} {cx} {}", cx - r, cy - K * r, cx - K * r, cy - r, cy - r);
    let _ = writeln!(out, "{} {} {} {} {} {cy}", cx + K * r, cy - r, cx + r, cy - K * r, cx + r);
    out.push_str("h\n");
    let _ = writeln!(out, "{}", paint_op(style));
    out.push_str("Q\n");
    Ok(())
}

fn emit_path(out: &mut String, e: &BytesStart, style: Style) -> Result<(), SvgTranslationError> {
    let Some(d) = attr(e, "d")? else { return Ok(()) };
    out.push_str("q\n");
    emit_style_ops(out, style);
    translate_path(out, &d)?;
    let _ = writeln!(out, "{}", paint_op(style));
    out.push_str("Q\n");
    Ok(())
}

fn emit_shape_by_name(
    out: &mut String,
    e: &BytesStart,
    style: Style,
) -> Result<(), SvgTranslationError> {
    match local_name(e)?.as_str() {
        "rect" => emit_rect(out, e, style),
        "circle" => emit_circle(out, e, style),
        "line" => emit_line(out, e, style),
        "path" => emit_path(out, e, style),
        _ => Ok(()),
    }
}

/// Tokenizes and translates an SVG path `d` attribute into PDF path
/// operators, converting quadratic Beziers to cubic via the 2/3
/// control-point rule.
fn translate_path(out: &mut String, d: &str) -> Result<(), SvgTranslationError> {
    let tokens = tokenize_path(d);
    let mut i = 0;
    let (mut cur_x, mut cur_y) = (0.0, 0.0);
    let (mut start_x, mut start_y) = (0.0, 0.0);
    let mut current_cmd = ' ';

    while i < tokens.len() {
        let tok = &tokens[i];
        let cmd = if let Ok(_) = tok.parse::<f64>() {
            current_cmd
        } else {
            current_cmd = tok.chars().next().unwrap();
            i += 1;
            current_cmd
        };
        let relative = cmd.is_lowercase();

        macro_rules! next_f {
            () => {{
                let v: f64 = tokens[i].parse().unwrap_or(0.0);
                i += 1;
                v
            }};
        }

        match cmd.to_ascii_uppercase() {
            'M' => {
                let mut x = next_f!();
                let mut y = next_f!();
                if relative {
                    x += cur_x;
                    y += cur_y;
                }
                cur_x = x;
                cur_y = y;
                start_x = x;
                start_y = y;
                let _ = writeln!(out, "{x} {y} m");
                current_cmd = if relative { 'l' } else { 'L' };
            }
            'L' => {
                let mut x = next_f!();
                let mut y = next_f!();
                if relative {
                    x += cur_x;
                    y += cur_y;
                }
                cur_x = x;
                cur_y = y;
                let _ = writeln!(out, "{x} {y} l");
            }
            'H' => {
                let mut x = next_f!();
                if relative {
                    x += cur_x;
                }
                cur_x = x;
                let _ = writeln!(out, "{x} {cur_y} l");
            }
            'V' => {
                let mut y = next_f!();
                if relative {
                    y += cur_y;
                }
                cur_y = y;
                let _ = writeln!(out, "{cur_x} {y} l");
            }
            'C' => {
                let mut x1 = next_f!();
                let mut y1 = next_f!();
                let mut x2 = next_f!();
                let mut y2 = next_f!();
                let mut x = next_f!();
                let mut y = next_f!();
                if relative {
                    x1 += cur_x;
                    y1 += cur_y;
                    x2 += cur_x;
                    y2 += cur_y;
                    x += cur_x;
                    y += cur_y;
                }
                let _ = writeln!(out, "{x1} {y1} {x2} {y2} {x} {y} c");
                cur_x = x;
                cur_y = y;
            }
            'Q' => {
                let mut qx = next_f!();
                let mut qy = next_f!();
                let mut x = next_f!();
                let mut y = next_f!();
                if relative {
                    qx += cur_x;
                    qy += cur_y;
                    x += cur_x;
                    y += cur_y;
                }
                let cp1x = cur_x + 2.0 / 3.0 * (qx - cur_x);
                let cp1y = cur_y + 2.0 / 3.0 * (qy - cur_y);
                let cp2x = x + 2.0 / 3.0 * (qx - x);
                let cp2y = y + 2.0 / 3.0 * (qy - y);
                let _ = writeln!(out, "{cp1x} {cp1y} {cp2x} {cp2y} {x} {y} c");
                cur_x = x;
                cur_y = y;
            }
            'Z' => {
                out.push_str("h\n");
                cur_x = start_x;
                cur_y = start_y;
            }
            other => return Err(SvgTranslationError::UnsupportedPathCommand(other)),
        }
    }
    Ok(())
}

fn tokenize_path(d: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    for ch in d.chars() {
        if ch.is_ascii_alphabetic() {
            if !current.is_empty() {
                tokens.push(current.clone());
                current.clear();
            }
            tokens.push(ch.to_string());
        } else if ch == ',' || ch.is_whitespace() {
            if !current.is_empty() {
                tokens.push(current.clone());
                current.clear();
            }
        } else if ch == '-' && !current.is_empty() && !current.ends_with('e') {
            tokens.push(current.clone());
            current.clear();
            current.push(ch);
        } else {
            current.push(ch);
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}

/// Parses `none`, the 16 HTML-standard color names plus `orange`, `#RGB`,
/// `#RRGGBB`, or `rgb(r, g, b)` (0-255 or percentages). Returns `None` for
/// `"none"` and unrecognized input.
fn parse_color(value: &str) -> Option<Rgb> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("none") {
        return None;
    }
    if let Some(hex) = value.strip_prefix('#') {
        return parse_hex_color(hex);
    }
    if let Some(inner) = value
        .strip_prefix("rgb(")
        .and_then(|s| s.strip_suffix(')'))
    {
        let parts: Vec<&str> = inner.split(',').map(|s| s.trim()).collect();
        if parts.len() == 3 {
            let component = |s: &str| -> Option<f64> {
                if let Some(pct) = s.strip_suffix('%') {
                    Some(pct.parse::<f64>().ok()? / 100.0)
                } else {
                    Some(s.parse::<f64>().ok()? / 255.0)
                }
            };
            return Some(Rgb(
                component(parts[0])?,
                component(parts[1])?,
                component(parts[2])?,
            ));
        }
        return None;
    }
    named_color(value)
}

fn parse_hex_color(hex: &str) -> Option<Rgb> {
    let expand = |c: char| -> Option<u8> {
        let v = c.to_digit(16)? as u8;
        Some(v * 16 + v)
    };
    match hex.len() {
        3 => {
            let mut chars = hex.chars();
            let r = expand(chars.next()?)?;
            let g = expand(chars.next()?)?;
            let b = expand(chars.next()?)?;
            Some(Rgb(r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0))
        }
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Rgb(r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0))
        }
        _ => None,
    }
}

fn named_color(name: &str) -> Option<Rgb> {
    let rgb = match name.to_ascii_lowercase().as_str() {
        "black" => (0, 0, 0),
        "silver" => (192, 192, 192),
        "gray" | "grey" => (128, 128, 128),
        "white" => (255, 255, 255),
        "maroon" => (128, 0, 0),
        "red" => (255, 0, 0),
        "purple" => (128, 0, 128),
        "fuchsia" => (255, 0, 255),
        "green" => (0, 128, 0),
        "lime" => (0, 255, 0),
        "olive" => (128, 128, 0),
        "yellow" => (255, 255, 0),
        "navy" => (0, 0, 128),
        "blue" => (0, 0, 255),
        "teal" => (0, 128, 128),
        "aqua" => (0, 255, 255),
        "orange" => (255, 165, 0),
        _ => return None,
    };
    Some(Rgb(
        rgb.0 as f64 / 255.0,
        rgb.1 as f64 / 255.0,
        rgb.2 as f64 / 255.0,
    ))
}

/// Builds the `cm` matrix mapping an SVG viewBox of size `w x h` into the
/// unit square, flipping the Y axis.
pub fn viewbox_to_unit_square_matrix(w: f64, h: f64) -> [f64; 6] {
    [1.0 / w, 0.0, 0.0, -1.0 / h, 0.0, 1.0]
}
