//! AcroForm filler: populates form field values from an [`XfdfDocument`] by
//! editing an existing PDF's bytes in place, then rebuilds the xref table.
//!
//! Unlike the rest of this crate, which builds PDFs from an [`crate::objects`]
//! arena, the filler never parses the input into an object graph. It scans
//! raw bytes for `/T (name)` occurrences, locates the enclosing widget
//! dictionary with a depth-balanced bracket scan (skipping over literal and
//! hex strings), and patches `/V`/`/AS`/`/AP` in place or inserts them. New
//! objects (appearance streams) are appended after the original body, and a
//! fresh classic xref + trailer is emitted at the end — incremental update
//! is deliberately not used, per the note in the accompanying design record.

use crate::forms::xfdf::XfdfDocument;
use regex::bytes::Regex;
use serde::Serialize;
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FillError {
    #[error("could not locate /Root in the original trailer")]
    MissingRoot,
    #[error("xref rebuild failed: object headers could not be found after editing")]
    MalformedPdf,
}

/// One widget the filler could not patch because it lives inside a
/// compressed object stream (`/Type /ObjStm`), which this filler does not
/// decompress and rewrite.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkippedCompressedField {
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FillReport {
    pub filled: Vec<String>,
    pub skipped_compressed: Vec<SkippedCompressedField>,
}

pub struct FormFiller;

impl FormFiller {
    /// Fills `pdf` in place with values from `xfdf`, returning the new PDF
    /// bytes and a report of what was filled or skipped.
    pub fn fill(pdf: &[u8], xfdf: &XfdfDocument) -> Result<(Vec<u8>, FillReport), FillError> {
        let mut bytes = pdf.to_vec();
        let mut report = FillReport::default();
        let mut next_object_id = highest_object_id(&bytes) + 1;

        // Process matches back-to-front so earlier byte offsets stay valid
        // as later ones are rewritten.
        let mut matches: Vec<(usize, usize, String)> = find_t_occurrences(&bytes);
        matches.sort_by(|a, b| b.0.cmp(&a.0));

        let mut seen = HashSet::new();
        for (t_start, _t_end, name) in matches {
            if !seen.insert((t_start, name.clone())) {
                continue;
            }
            let Some(value) = xfdf.get(&name) else {
                continue;
            };

            let Some((dict_start, dict_end)) = find_enclosing_dict(&bytes, t_start) else {
                continue;
            };
            if is_inside_object_stream(&bytes, dict_start) {
                report.skipped_compressed.push(SkippedCompressedField {
                    name: name.clone(),
                });
                continue;
            }

            let mut dict_body = bytes[dict_start + 2..dict_end - 2].to_vec();
            let ft = extract_name_value(&dict_body, "FT");

            if ft.as_deref() == Some("Btn") {
                let checked = matches!(value.to_ascii_lowercase().as_str(), "yes" | "true" | "1");
                let state = if checked { "Yes" } else { "Off" };
                set_name_field(&mut dict_body, "V", state);
                set_name_field(&mut dict_body, "AS", state);
            } else {
                let escaped = escape_pdf_literal(value);
                set_string_field(&mut dict_body, "V", &escaped);

                let rect = extract_rect(&dict_body).unwrap_or([0.0, 0.0, 100.0, 20.0]);
                let (font_name, mut font_size) = extract_da_font(&dict_body);
                let quadding = extract_integer_value(&dict_body, "Q").unwrap_or(0);
                let width = rect[2] - rect[0];
                let height = rect[3] - rect[1];

                let text_width_at = |size: f64| size * 0.6 * value.chars().count() as f64;
                if text_width_at(font_size) > width - 6.0 {
                    font_size = ((width - 6.0) / (0.6 * value.chars().count().max(1) as f64))
                        .max(8.0);
                }
                let text_width = text_width_at(font_size);
                let tx = match quadding {
                    1 => (width - text_width) / 2.0,
                    2 => width - text_width - 3.0,
                    _ => 3.0,
                };
                let ty = (height - font_size) / 2.0 + 2.0;

                remove_subdict_field(&mut dict_body, "AP");

                let ap_stream = format!(
                    "q\n0 0 {width:.2} {height:.2} re W n\n1 1 1 rg 0 0 {width:.2} {height:.2} re f\nBT 0 0 0 rg /{font_name} {font_size:.2} Tf {tx:.2} {ty:.2} Td ({escaped}) Tj ET\nQ",
                );
                let ap_id = next_object_id;
                next_object_id += 1;
                let ap_object = format!(
                    "{ap_id} 0 obj\n<< /Type /XObject /Subtype /Form /BBox [0 0 {width:.2} {height:.2}] /Resources << /Font << /{font_name} << /Type /Font /Subtype /Type1 /BaseFont /Helvetica >> >> >> /Length {len} >>\nstream\n{ap_stream}\nendstream\nendobj\n",
                    len = ap_stream.len()
                );
                append_object(&mut bytes, ap_object.as_bytes());

                set_reference_field(&mut dict_body, "AP", "N", ap_id);
            }

            let new_dict = [b"<<", dict_body.as_slice(), b">>"].concat();
            bytes.splice(dict_start..dict_end, new_dict);
            report.filled.push(name);
        }

        ensure_need_appearances_false(&mut bytes);
        let final_bytes = rebuild_xref(&bytes)?;
        Ok((final_bytes, report))
    }
}

fn find_t_occurrences(data: &[u8]) -> Vec<(usize, usize, String)> {
    let re = Regex::new(r"/T\s*\(((?:[^()\\]|\\.)*)\)").unwrap();
    re.captures_iter(data)
        .filter_map(|caps| {
            let m = caps.get(0)?;
            let name_bytes = caps.get(1)?.as_bytes();
            let name = String::from_utf8_lossy(&unescape_pdf_literal(name_bytes)).into_owned();
            Some((m.start(), m.end(), name))
        })
        .collect()
}

/// Scans backward from `pos` for the start of the enclosing object (an
/// `N G obj` header), then forward through that object's body with a
/// depth-balanced `<<`/`>>` scan (skipping literal and hex strings) to find
/// the innermost dictionary span containing `pos`.
fn find_enclosing_dict(data: &[u8], pos: usize) -> Option<(usize, usize)> {
    let obj_re = Regex::new(r"\d+\s+\d+\s+obj").unwrap();
    let obj_start = obj_re
        .find_iter(&data[..pos])
        .last()
        .map(|m| m.start())?;

    let endobj_re = Regex::new(r"endobj").unwrap();
    let obj_end = endobj_re
        .find(&data[obj_start..])
        .map(|m| obj_start + m.start())
        .unwrap_or(data.len());

    let mut stack: Vec<usize> = Vec::new();
    let mut best: Option<(usize, usize)> = None;
    let mut i = obj_start;
    while i + 1 < obj_end {
        match data[i] {
            b'(' => {
                i = skip_literal_string(data, i);
                continue;
            }
            b'<' if data.get(i + 1) == Some(&b'<') => {
                stack.push(i);
                i += 2;
                continue;
            }
            b'>' if data.get(i + 1) == Some(&b'>') => {
                if let Some(start) = stack.pop() {
                    let end = i + 2;
                    if start <= pos && pos < end {
                        best = Some((start, end));
                    }
                }
                i += 2;
                continue;
            }
            b'<' => {
                i = skip_hex_string(data, i);
                continue;
            }
            _ => {}
        }
        i += 1;
    }
    best
}

fn skip_literal_string(data: &[u8], start: usize) -> usize {
    let mut i = start + 1;
    let mut depth = 1;
    while i < data.len() && depth > 0 {
        match data[i] {
            b'\\' => i += 2,
            b'(' => {
                depth += 1;
                i += 1;
            }
            b')' => {
                depth -= 1;
                i += 1;
            }
            _ => i += 1,
        }
    }
    i
}

fn skip_hex_string(data: &[u8], start: usize) -> usize {
    let mut i = start + 1;
    while i < data.len() && data[i] != b'>' {
        i += 1;
    }
    i + 1
}

fn is_inside_object_stream(data: &[u8], dict_start: usize) -> bool {
    let window_start = dict_start.saturating_sub(40);
    let window = &data[window_start..dict_start];
    let text = String::from_utf8_lossy(window);
    text.contains("ObjStm")
}

fn extract_name_value(dict: &[u8], key: &str) -> Option<String> {
    let pattern = format!(r"/{key}\s*/([A-Za-z0-9]+)");
    let re = Regex::new(&pattern).ok()?;
    let caps = re.captures(dict)?;
    Some(String::from_utf8_lossy(caps.get(1)?.as_bytes()).into_owned())
}

fn extract_integer_value(dict: &[u8], key: &str) -> Option<i64> {
    let pattern = format!(r"/{key}\s+(-?\d+)");
    let re = Regex::new(&pattern).ok()?;
    let caps = re.captures(dict)?;
    std::str::from_utf8(caps.get(1)?.as_bytes())
        .ok()?
        .parse()
        .ok()
}

fn extract_rect(dict: &[u8]) -> Option<[f64; 4]> {
    let re = Regex::new(r"/Rect\s*\[\s*([-\d.]+)\s+([-\d.]+)\s+([-\d.]+)\s+([-\d.]+)\s*\]").ok()?;
    let caps = re.captures(dict)?;
    let mut vals = [0.0; 4];
    for i in 0..4 {
        vals[i] = std::str::from_utf8(caps.get(i + 1)?.as_bytes())
            .ok()?
            .parse()
            .ok()?;
    }
    Some(vals)
}

/// Parses the `/Tf <name> <size>` operator out of a widget's `/DA` string.
fn extract_da_font(dict: &[u8]) -> (String, f64) {
    let re = Regex::new(r"/DA\s*\(([^)]*)\)").unwrap();
    let Some(caps) = re.captures(dict) else {
        return ("Helv".to_string(), 12.0);
    };
    let da = String::from_utf8_lossy(caps.get(1).unwrap().as_bytes()).into_owned();
    let tf_re = Regex::new(r"/(\S+)\s+([\d.]+)\s+Tf").unwrap();
    match tf_re.captures(da.as_bytes()) {
        Some(caps) => {
            let name = String::from_utf8_lossy(caps.get(1).unwrap().as_bytes()).into_owned();
            let size: f64 = std::str::from_utf8(caps.get(2).unwrap().as_bytes())
                .unwrap()
                .parse()
                .unwrap_or(12.0);
            (name, size)
        }
        None => ("Helv".to_string(), 12.0),
    }
}

fn set_name_field(dict: &mut Vec<u8>, key: &str, value: &str) {
    let pattern = format!(r"/{key}\s*/[A-Za-z0-9]+");
    let re = Regex::new(&pattern).unwrap();
    let replacement = format!("/{key} /{value}");
    if re.is_match(dict) {
        *dict = re.replace(dict, replacement.as_bytes()).into_owned();
    } else {
        dict.extend_from_slice(format!(" {replacement}").as_bytes());
    }
}

fn set_string_field(dict: &mut Vec<u8>, key: &str, escaped_value: &str) {
    let pattern = format!(r"/{key}\s*\(((?:[^()\\]|\\.)*)\)");
    let re = Regex::new(&pattern).unwrap();
    let replacement = format!("/{key} ({escaped_value})");
    if re.is_match(dict) {
        *dict = re.replace(dict, replacement.as_bytes()).into_owned();
    } else {
        dict.extend_from_slice(format!(" {replacement}").as_bytes());
    }
}

fn set_reference_field(dict: &mut Vec<u8>, key: &str, subkey: &str, obj_id: u64) {
    let replacement = format!("/{key} << /{subkey} {obj_id} 0 R >>");
    dict.extend_from_slice(format!(" {replacement}").as_bytes());
}

fn remove_subdict_field(dict: &mut Vec<u8>, key: &str) {
    let pattern = format!(r"/{key}\s*<<(?:[^<>]|<[^<]|>[^>])*>>");
    if let Ok(re) = Regex::new(&pattern) {
        *dict = re.replace(dict, &b""[..]).into_owned();
    }
}

fn ensure_need_appearances_false(bytes: &mut Vec<u8>) {
    let re = Regex::new(r"/AcroForm\s*<<").unwrap();
    if let Some(m) = re.find(bytes) {
        let insert_at = m.end();
        let has_flag = Regex::new(r"/NeedAppearances")
            .unwrap()
            .is_match(&bytes[m.start()..(m.start() + 500).min(bytes.len())]);
        if !has_flag {
            let insertion = b" /NeedAppearances false".to_vec();
            bytes.splice(insert_at..insert_at, insertion);
        }
    }
}

fn append_object(bytes: &mut Vec<u8>, object_bytes: &[u8]) {
    if !bytes.ends_with(b"\n") {
        bytes.push(b'\n');
    }
    bytes.extend_from_slice(object_bytes);
}

fn highest_object_id(data: &[u8]) -> u64 {
    let re = Regex::new(r"(\d+)\s+\d+\s+obj").unwrap();
    re.captures_iter(data)
        .filter_map(|c| std::str::from_utf8(c.get(1).unwrap().as_bytes()).ok()?.parse().ok())
        .max()
        .unwrap_or(0)
}

fn escape_pdf_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '(' => out.push_str("\\("),
            ')' => out.push_str("\\)"),
            _ => out.push(ch),
        }
    }
    out
}

fn unescape_pdf_literal(bytes: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'\\' && i + 1 < bytes.len() {
            out.push(bytes[i + 1]);
            i += 2;
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }
    out
}

/// Rebuilds a classic xref table and trailer from scratch by scanning for
/// every `N 0 obj` header, preserving the original `/Root` reference.
fn rebuild_xref(data: &[u8]) -> Result<Vec<u8>, FillError> {
    let root_id = find_original_root(data).ok_or(FillError::MissingRoot)?;

    let body_end = find_last_xref_start(data).unwrap_or(data.len());
    let mut out = data[..body_end].to_vec();
    if !out.ends_with(b"\n") {
        out.push(b'\n');
    }

    let obj_re = Regex::new(r"(\d+)\s+(\d+)\s+obj").unwrap();
    let mut offsets: Vec<(u64, u64)> = Vec::new();
    for caps in obj_re.captures_iter(&out) {
        let m = caps.get(0).unwrap();
        let num: u64 = std::str::from_utf8(caps.get(1).unwrap().as_bytes())
            .unwrap()
            .parse()
            .map_err(|_| FillError::MalformedPdf)?;
        offsets.push((num, m.start() as u64));
    }
    if offsets.is_empty() {
        return Err(FillError::MalformedPdf);
    }
    offsets.sort_by_key(|(num, _)| *num);
    offsets.dedup_by_key(|(num, _)| *num);

    let max_num = offsets.iter().map(|(n, _)| *n).max().unwrap_or(0);
    let xref_start = out.len();
    out.extend_from_slice(b"xref\n");
    out.extend_from_slice(format!("0 {}\n", max_num + 1).as_bytes());
    out.extend_from_slice(b"0000000000 65535 f \n");
    for num in 1..=max_num {
        match offsets.iter().find(|(n, _)| *n == num) {
            Some((_, offset)) => {
                out.extend_from_slice(format!("{offset:010} 00000 n \n").as_bytes());
            }
            None => out.extend_from_slice(b"0000000000 00000 f \n"),
        }
    }

    out.extend_from_slice(b"trailer\n");
    out.extend_from_slice(
        format!("<< /Size {} /Root {} 0 R >>\n", max_num + 1, root_id).as_bytes(),
    );
    out.extend_from_slice(b"startxref\n");
    out.extend_from_slice(format!("{xref_start}\n").as_bytes());
    out.extend_from_slice(b"%%EOF\n");

    Ok(out)
}

fn find_original_root(data: &[u8]) -> Option<u64> {
    let re = Regex::new(r"/Root\s+(\d+)\s+\d+\s+R").unwrap();
    let m = re.captures_iter(data).last()?;
    std::str::from_utf8(m.get(1)?.as_bytes()).ok()?.parse().ok()
}

fn find_last_xref_start(data: &[u8]) -> Option<usize> {
    let re = Regex::new(r"\bxref\b").unwrap();
    re.find_iter(data).last().map(|m| m.start())
}
