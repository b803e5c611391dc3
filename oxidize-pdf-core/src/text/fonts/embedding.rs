//! Font embedding for PDF generation according to ISO 32000-1 Section 9.8
//!
//! This module provides complete font embedding capabilities including:
//! - TrueType font embedding with subsetting
//! - Font descriptor generation  
//! - Character encoding mappings
//! - CID font support for complex scripts

use crate::error::{PdfError, Result};
use crate::objects::{Dictionary, Object, ObjectId};
use crate::text::fonts::truetype::TrueTypeFont;
use std::collections::{HashMap, HashSet};

/// Font type enumeration for embedding
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FontType {
    /// TrueType font
    TrueType,
    /// Type 0 font (composite/CID)
    Type0,
}

/// Font encoding types for embedding
#[derive(Debug, Clone, PartialEq)]
pub enum FontEncoding {
    /// Standard encoding
    StandardEncoding,
    /// MacRoman encoding
    MacRomanEncoding,
    /// WinAnsi encoding
    WinAnsiEncoding,
    /// Custom encoding with differences
    Custom(Vec<EncodingDifference>),
    /// Identity encoding for CID fonts
    Identity,
}

/// Encoding difference entry
#[derive(Debug, Clone, PartialEq)]
pub struct EncodingDifference {
    /// Starting character code
    pub code: u8,
    /// Glyph names for consecutive character codes
    pub names: Vec<String>,
}

/// Font flags for font descriptor
#[derive(Debug, Clone, Copy, Default)]
pub struct FontFlags {
    /// All glyphs have the same width
    pub fixed_pitch: bool,
    /// Glyphs have serifs
    pub serif: bool,
    /// Font uses symbolic character set
    pub symbolic: bool,
    /// Font is a script font
    pub script: bool,
    /// Font uses Adobe standard Latin character set
    pub non_symbolic: bool,
    /// Glyphs resemble cursive handwriting
    pub italic: bool,
    /// All glyphs have dominant vertical strokes
    pub all_cap: bool,
    /// Font is a small-cap font
    pub small_cap: bool,
    /// Font weight is bold or black
    pub force_bold: bool,
}

impl FontFlags {
    /// Convert to PDF font flags integer
    pub fn to_flags(&self) -> u32 {
        let mut flags = 0u32;
        if self.fixed_pitch {
            flags |= 1 << 0;
        }
        if self.serif {
            flags |= 1 << 1;
        }
        if self.symbolic {
            flags |= 1 << 2;
        }
        if self.script {
            flags |= 1 << 3;
        }
        if self.non_symbolic {
            flags |= 1 << 5;
        }
        if self.italic {
            flags |= 1 << 6;
        }
        if self.all_cap {
            flags |= 1 << 16;
        }
        if self.small_cap {
            flags |= 1 << 17;
        }
        if self.force_bold {
            flags |= 1 << 18;
        }
        flags
    }
}

/// Font descriptor for PDF embedding
#[derive(Debug, Clone)]
pub struct FontDescriptor {
    /// Font name
    pub font_name: String,
    /// Font flags
    pub flags: FontFlags,
    /// Font bounding box [llx, lly, urx, ury]
    pub bbox: [i32; 4],
    /// Italic angle in degrees
    pub italic_angle: f64,
    /// Maximum height above baseline
    pub ascent: i32,
    /// Maximum depth below baseline (negative)
    pub descent: i32,
    /// Height of capital letters
    pub cap_height: i32,
    /// Thickness of dominant vertical stems
    pub stem_v: i32,
    /// Thickness of dominant horizontal stems
    pub stem_h: i32,
    /// Average character width
    pub avg_width: i32,
    /// Maximum character width
    pub max_width: i32,
    /// Width for missing characters
    pub missing_width: i32,
    /// Font file reference (if embedded)
    pub font_file: Option<ObjectId>,
}

/// Font metrics for embedded fonts
#[derive(Debug, Clone)]
pub struct FontMetrics {
    /// Maximum height above baseline
    pub ascent: i32,
    /// Maximum depth below baseline (negative)
    pub descent: i32,
    /// Height of capital letters
    pub cap_height: i32,
    /// Height of lowercase letters
    pub x_height: i32,
    /// Thickness of dominant vertical stems
    pub stem_v: i32,
    /// Thickness of dominant horizontal stems
    pub stem_h: i32,
    /// Average character width
    pub avg_width: i32,
    /// Maximum character width
    pub max_width: i32,
    /// Width for missing characters
    pub missing_width: i32,
}

/// PDF font embedding manager
#[derive(Debug)]
pub struct FontEmbedder {
    /// Font data cache
    embedded_fonts: HashMap<String, EmbeddedFontData>,
    /// Next font ID
    next_font_id: u32,
}

/// Embedded font data for PDF generation
#[derive(Debug, Clone)]
pub struct EmbeddedFontData {
    /// Font name in PDF
    pub pdf_name: String,
    /// Font type
    pub font_type: FontType,
    /// Font descriptor object
    pub descriptor: FontDescriptor,
    /// Font program data (subset or full)
    pub font_program: Vec<u8>,
    /// Character mappings
    pub encoding: FontEncoding,
    /// Font metrics
    pub metrics: FontMetrics,
    /// Subset glyph set (if subsetted)
    pub subset_glyphs: Option<HashSet<u16>>,
    /// Unicode mappings for ToUnicode CMap
    pub unicode_mappings: HashMap<u16, String>,
}

/// Font embedding options
#[derive(Debug, Clone)]
pub struct EmbeddingOptions {
    /// Whether to subset the font
    pub subset: bool,
    /// Maximum number of glyphs in subset
    pub max_subset_size: Option<usize>,
    /// Whether to compress font streams
    pub compress_font_streams: bool,
    /// Whether to embed font license info
    pub embed_license_info: bool,
}

impl Default for EmbeddingOptions {
    fn default() -> Self {
        Self {
            subset: true,
            max_subset_size: Some(256),
            compress_font_streams: true,
            embed_license_info: false,
        }
    }
}

impl FontEmbedder {
    /// Create a new font embedder
    pub fn new() -> Self {
        Self {
            embedded_fonts: HashMap::new(),
            next_font_id: 1,
        }
    }

    /// Embed a TrueType font with optional subsetting
    pub fn embed_truetype_font(
        &mut self,
        font_data: &[u8],
        used_glyphs: &HashSet<u16>,
        options: &EmbeddingOptions,
    ) -> Result<String> {
        // Parse the TrueType font
        let font = TrueTypeFont::from_data(font_data)
            .map_err(|e| PdfError::FontError(format!("Failed to parse font: {e}")))?;

        // Generate unique font name
        let font_name = format!("ABCDEF+Font{next_id}", next_id = self.next_font_id);
        self.next_font_id += 1;

        // Determine if we should subset
        let should_subset =
            options.subset && used_glyphs.len() < options.max_subset_size.unwrap_or(256);

        // Create font program (subset or full)
        let font_program = if should_subset {
            font.create_subset(used_glyphs)
                .map_err(|e| PdfError::FontError(format!("Failed to create subset: {e}")))?
        } else {
            font_data.to_vec()
        };

        // Extract font metrics
        let metrics = self.extract_font_metrics(&font)?;

        // Create font descriptor
        let descriptor = self.create_font_descriptor(&font, &font_name)?;

        // Create character encoding
        let encoding = self.create_encoding_for_font(&font, used_glyphs)?;

        // Create Unicode mappings for ToUnicode CMap
        let unicode_mappings = self.create_unicode_mappings(&font, used_glyphs)?;

        // Store embedded font data
        let embedded_font = EmbeddedFontData {
            pdf_name: font_name.clone(),
            font_type: FontType::TrueType,
            descriptor,
            font_program,
            encoding,
            metrics,
            subset_glyphs: if should_subset {
                Some(used_glyphs.clone())
            } else {
                None
            },
            unicode_mappings,
        };

        self.embedded_fonts.insert(font_name.clone(), embedded_font);
        Ok(font_name)
    }

    /// Create a Type0 (CID) font for complex scripts
    pub fn embed_cid_font(
        &mut self,
        font_data: &[u8],
        used_chars: &HashSet<u32>,
        _cmap_name: &str,
        options: &EmbeddingOptions,
    ) -> Result<String> {
        // Parse the font
        let font = TrueTypeFont::from_data(font_data)
            .map_err(|e| PdfError::FontError(format!("Failed to parse font: {e}")))?;

        // Generate unique font name
        let font_name = format!("ABCDEF+CIDFont{next_id}", next_id = self.next_font_id);
        self.next_font_id += 1;

        // Convert character codes to glyph indices
        let used_glyphs = self.chars_to_glyphs(&font, used_chars)?;

        // Create subset if requested
        let font_program = if options.subset {
            font.create_subset(&used_glyphs)
                .map_err(|e| PdfError::FontError(format!("Failed to create subset: {e}")))?
        } else {
            font_data.to_vec()
        };

        // Extract metrics
        let metrics = self.extract_font_metrics(&font)?;

        // Create CID font descriptor
        let descriptor = self.create_cid_font_descriptor(&font, &font_name)?;

        // Create Identity encoding for CID fonts
        let encoding = FontEncoding::Identity;

        // Create Unicode mappings
        let unicode_mappings = self.create_cid_unicode_mappings(&font, used_chars)?;

        let embedded_font = EmbeddedFontData {
            pdf_name: font_name.clone(),
            font_type: FontType::Type0,
            descriptor,
            font_program,
            encoding,
            metrics,
            subset_glyphs: Some(used_glyphs),
            unicode_mappings,
        };

        self.embedded_fonts.insert(font_name.clone(), embedded_font);
        Ok(font_name)
    }

    /// Generate PDF font dictionary for embedded font
    pub fn generate_font_dictionary(&self, font_name: &str) -> Result<Dictionary> {
        let font_data = self
            .embedded_fonts
            .get(font_name)
            .ok_or_else(|| PdfError::FontError(format!("Font {font_name} not found")))?;

        match font_data.font_type {
            FontType::TrueType => self.generate_truetype_dictionary(font_data),
            FontType::Type0 => self.generate_type0_dictionary(font_data),
            // _ => Err(PdfError::FontError("Unsupported font type for embedding".to_string())),
        }
    }

    /// Generate TrueType font dictionary
    fn generate_truetype_dictionary(&self, font_data: &EmbeddedFontData) -> Result<Dictionary> {
        let mut font_dict = Dictionary::new();

        // Basic font properties
        font_dict.set("Type", Object::Name("Font".to_string()));
        font_dict.set("Subtype", Object::Name("TrueType".to_string()));
        font_dict.set("BaseFont", Object::Name(font_data.pdf_name.clone()));

        // Font descriptor reference (would be resolved during PDF generation)
        font_dict.set("FontDescriptor", Object::Reference(ObjectId::new(0, 0))); // Placeholder

        // Encoding
        match &font_data.encoding {
            FontEncoding::WinAnsiEncoding => {
                font_dict.set("Encoding", Object::Name("WinAnsiEncoding".to_string()));
            }
            FontEncoding::MacRomanEncoding => {
                font_dict.set("Encoding", Object::Name("MacRomanEncoding".to_string()));
            }
            FontEncoding::StandardEncoding => {
                font_dict.set("Encoding", Object::Name("StandardEncoding".to_string()));
            }
            FontEncoding::Custom(differences) => {
                let mut encoding_dict = Dictionary::new();
                encoding_dict.set("Type", Object::Name("Encoding".to_string()));
                encoding_dict.set("BaseEncoding", Object::Name("WinAnsiEncoding".to_string()));

                // Add differences array
                let mut diff_array = Vec::new();
                for diff in differences {
                    diff_array.push(Object::Integer(diff.code as i64));
                    for name in &diff.names {
                        diff_array.push(Object::Name(name.clone()));
                    }
                }
                encoding_dict.set("Differences", Object::Array(diff_array));
                font_dict.set("Encoding", Object::Dictionary(encoding_dict));
            }
            _ => {}
        }

        // First and last character codes
        font_dict.set("FirstChar", Object::Integer(32));
        font_dict.set("LastChar", Object::Integer(255));

        // Character widths (simplified - would need actual glyph widths)
        let widths: Vec<Object> = (32..=255)
            .map(|_| Object::Integer(500)) // Default width
            .collect();
        font_dict.set("Widths", Object::Array(widths));

        Ok(font_dict)
    }

    /// Generate Type0 (CID) font dictionary
    fn generate_type0_dictionary(&self, font_data: &EmbeddedFontData) -> Result<Dictionary> {
        let mut font_dict = Dictionary::new();

        // Type0 font properties
        font_dict.set("Type", Object::Name("Font".to_string()));
        font_dict.set("Subtype", Object::Name("Type0".to_string()));
        font_dict.set("BaseFont", Object::Name(font_data.pdf_name.clone()));

        // Encoding (CMap)
        font_dict.set("Encoding", Object::Name("Identity-H".to_string()));

        // DescendantFonts array (would contain CIDFont reference)
        font_dict.set(
            "DescendantFonts",
            Object::Array(vec![
                Object::Reference(ObjectId::new(0, 0)), // Placeholder for CIDFont reference
            ]),
        );

        // ToUnicode CMap reference (if needed)
        if !font_data.unicode_mappings.is_empty() {
            font_dict.set("ToUnicode", Object::Reference(ObjectId::new(0, 0))); // Placeholder
        }

        Ok(font_dict)
    }

    /// Generate font descriptor dictionary
    pub fn generate_font_descriptor(&self, font_name: &str) -> Result<Dictionary> {
        let font_data = self
            .embedded_fonts
            .get(font_name)
            .ok_or_else(|| PdfError::FontError(format!("Font {font_name} not found")))?;

        let mut desc_dict = Dictionary::new();

        desc_dict.set("Type", Object::Name("FontDescriptor".to_string()));
        desc_dict.set("FontName", Object::Name(font_data.pdf_name.clone()));

        // Font flags
        desc_dict.set(
            "Flags",
            Object::Integer(font_data.descriptor.flags.to_flags() as i64),
        );

        // Font metrics
        desc_dict.set("Ascent", Object::Integer(font_data.metrics.ascent as i64));
        desc_dict.set("Descent", Object::Integer(font_data.metrics.descent as i64));
        desc_dict.set(
            "CapHeight",
            Object::Integer(font_data.metrics.cap_height as i64),
        );
        desc_dict.set(
            "ItalicAngle",
            Object::Real(font_data.descriptor.italic_angle),
        );
        desc_dict.set("StemV", Object::Integer(font_data.descriptor.stem_v as i64));

        // Font bounding box
        let bbox = vec![
            Object::Integer(font_data.descriptor.bbox[0] as i64),
            Object::Integer(font_data.descriptor.bbox[1] as i64),
            Object::Integer(font_data.descriptor.bbox[2] as i64),
            Object::Integer(font_data.descriptor.bbox[3] as i64),
        ];
        desc_dict.set("FontBBox", Object::Array(bbox));

        // Font file reference (would be set during PDF generation)
        match font_data.font_type {
            FontType::TrueType => {
                desc_dict.set("FontFile2", Object::Reference(ObjectId::new(0, 0)));
                // Placeholder
            }
            FontType::Type0 => {
                desc_dict.set("FontFile2", Object::Reference(ObjectId::new(0, 0)));
                // Placeholder
            }
        }

        Ok(desc_dict)
    }

    /// Generate ToUnicode CMap stream
    pub fn generate_tounicode_cmap(&self, font_name: &str) -> Result<String> {
        let font_data = self
            .embedded_fonts
            .get(font_name)
            .ok_or_else(|| PdfError::FontError(format!("Font {font_name} not found")))?;

        if font_data.unicode_mappings.is_empty() {
            return Err(PdfError::FontError(
                "No Unicode mappings available".to_string(),
            ));
        }

        let mut cmap_content = String::new();

        // CMap header
        cmap_content.push_str("/CIDInit /ProcSet findresource begin\n");
        cmap_content.push_str("12 dict begin\n");
        cmap_content.push_str("begincmap\n");
        cmap_content.push_str("/CIDSystemInfo\n");
        cmap_content.push_str("<<\n");
        cmap_content.push_str("/Registry (Adobe)\n");
        cmap_content.push_str("/Ordering (UCS)\n");
        cmap_content.push_str("/Supplement 0\n");
        cmap_content.push_str(">> def\n");
        cmap_content.push_str("/CMapName /Adobe-Identity-UCS def\n");
        cmap_content.push_str("/CMapType 2 def\n");
        cmap_content.push_str("1 begincodespacerange\n");
        cmap_content.push_str("<0000> <FFFF>\n");
        cmap_content.push_str("endcodespacerange\n");

        // Unicode mappings
        cmap_content.push_str(&format!(
            "{} beginbfchar\n",
            font_data.unicode_mappings.len()
        ));
        for (glyph_id, unicode_string) in &font_data.unicode_mappings {
            cmap_content.push_str(&format!(
                "<{:04X}> <{}>\n",
                glyph_id,
                unicode_string
                    .chars()
                    .map(|c| format!("{c:04X}", c = c as u32))
                    .collect::<String>()
            ));
        }
        cmap_content.push_str("endbfchar\n");

        // CMap footer
        cmap_content.push_str("endcmap\n");
        cmap_content.push_str("CMapName currentdict /CMap defineresource pop\n");
        cmap_content.push_str("end\n");
        cmap_content.push_str("end\n");

        Ok(cmap_content)
    }

    /// Get all embedded fonts
    pub fn embedded_fonts(&self) -> &HashMap<String, EmbeddedFontData> {
        &self.embedded_fonts
    }

    /// Extract font metrics from TrueType font tables (`hhea`/`OS/2`/`post`,
    /// see `TrueTypeFont::font_metrics`), scaled to 1000 units per em.
    fn extract_font_metrics(&self, font: &TrueTypeFont) -> Result<FontMetrics> {
        let tm = font
            .font_metrics()
            .map_err(|e| PdfError::FontError(format!("Failed to read font metrics: {e}")))?;
        let upm = font.units_per_em.max(1) as f64;
        let scale = |v: i16| (v as f64 * 1000.0 / upm).round() as i32;
        let (avg_width, max_width) = font.width_stats();

        Ok(FontMetrics {
            ascent: scale(tm.ascender),
            descent: scale(tm.descender),
            cap_height: scale(tm.cap_height),
            x_height: scale(tm.x_height),
            stem_v: tm.stem_v,
            stem_h: (tm.stem_v / 2).max(1),
            avg_width,
            max_width,
            missing_width: avg_width,
        })
    }

    /// Create font descriptor from TrueType font tables.
    fn create_font_descriptor(
        &self,
        font: &TrueTypeFont,
        font_name: &str,
    ) -> Result<FontDescriptor> {
        let tm = font
            .font_metrics()
            .map_err(|e| PdfError::FontError(format!("Failed to read font metrics: {e}")))?;
        let upm = font.units_per_em.max(1) as f64;
        let scale = |v: i16| (v as f64 * 1000.0 / upm).round() as i32;
        let (avg_width, max_width) = font.width_stats();
        let bbox = [
            scale(font.bbox[0]),
            scale(font.bbox[1]),
            scale(font.bbox[2]),
            scale(font.bbox[3]),
        ];

        Ok(FontDescriptor {
            font_name: font_name.to_string(),
            flags: FontFlags {
                non_symbolic: true,
                fixed_pitch: tm.is_fixed_pitch,
                italic: tm.italic_angle != 0.0,
                ..Default::default()
            },
            bbox,
            italic_angle: tm.italic_angle,
            ascent: scale(tm.ascender),
            descent: scale(tm.descender),
            cap_height: scale(tm.cap_height),
            stem_v: tm.stem_v,
            stem_h: (tm.stem_v / 2).max(1),
            avg_width,
            max_width,
            missing_width: avg_width,
            font_file: None,
        })
    }

    /// Create CID font descriptor
    fn create_cid_font_descriptor(
        &self,
        font: &TrueTypeFont,
        font_name: &str,
    ) -> Result<FontDescriptor> {
        // Similar to create_font_descriptor but for CID fonts
        self.create_font_descriptor(font, font_name)
    }

    /// Create encoding for font
    fn create_encoding_for_font(
        &self,
        _font: &TrueTypeFont,
        _used_glyphs: &HashSet<u16>,
    ) -> Result<FontEncoding> {
        // For now, return WinAnsi encoding
        // In a full implementation, this would analyze the font and create appropriate encoding
        Ok(FontEncoding::WinAnsiEncoding)
    }

    /// Create Unicode mappings for simple fonts from the font's own reverse
    /// cmap (glyph ID -> codepoint), not an ASCII-only assumption.
    fn create_unicode_mappings(
        &self,
        font: &TrueTypeFont,
        used_glyphs: &HashSet<u16>,
    ) -> Result<HashMap<u16, String>> {
        let reverse = font.reverse_cmap();
        let mut mappings = HashMap::new();

        for glyph_id in used_glyphs {
            if let Some(&codepoint) = reverse.get(glyph_id) {
                if let Some(unicode_char) = char::from_u32(codepoint) {
                    mappings.insert(*glyph_id, unicode_char.to_string());
                }
            }
        }

        Ok(mappings)
    }

    /// Create Unicode mappings for CID fonts, keyed by the glyph ID each
    /// character maps to via the font's cmap (§4.1 step 7).
    fn create_cid_unicode_mappings(
        &self,
        font: &TrueTypeFont,
        used_chars: &HashSet<u32>,
    ) -> Result<HashMap<u16, String>> {
        let mut mappings = HashMap::new();

        for &char_code in used_chars {
            if let Some(unicode_char) = char::from_u32(char_code) {
                let glyph_id = font.char_to_glyph(unicode_char);
                mappings.insert(glyph_id, unicode_char.to_string());
            }
        }

        Ok(mappings)
    }

    /// Convert character codes to glyph indices using the font's cmap.
    fn chars_to_glyphs(&self, font: &TrueTypeFont, chars: &HashSet<u32>) -> Result<HashSet<u16>> {
        let mut glyphs = HashSet::new();

        // Always include glyph 0 (missing glyph)
        glyphs.insert(0);

        for &char_code in chars {
            if let Some(c) = char::from_u32(char_code) {
                glyphs.insert(font.char_to_glyph(c));
            }
        }

        Ok(glyphs)
    }

    /// Builds the compact `/W` width array for a CIDFontType2 descendant
    /// font: `[ firstGid [w w w ...] firstGid2 [w w ...] ... ]`, grouping
    /// consecutive glyph IDs into a single run (§4.2).
    fn build_width_array(font: &TrueTypeFont, glyphs: &HashSet<u16>) -> Vec<Object> {
        let upm = font.units_per_em.max(1) as f64;
        let mut sorted: Vec<u16> = glyphs.iter().copied().collect();
        sorted.sort_unstable();

        let mut entries = Vec::new();
        let mut i = 0;
        while i < sorted.len() {
            let first_gid = sorted[i];
            let mut run_widths = Vec::new();
            let mut j = i;
            while j < sorted.len() && sorted[j] == first_gid + (j - i) as u16 {
                let width = font
                    .get_glyph_metrics(sorted[j])
                    .map(|(advance, _lsb)| (advance as f64 * 1000.0 / upm).round() as i64)
                    .unwrap_or(0);
                run_widths.push(Object::Integer(width));
                j += 1;
            }
            entries.push(Object::Integer(first_gid as i64));
            entries.push(Object::Array(run_widths));
            i = j;
        }
        entries
    }

    /// Generate the CIDFontType2 descendant font dictionary for a Type0 font,
    /// including the compact `/W` width array (§4.2).
    pub fn generate_cid_font_dictionary(
        &self,
        font_name: &str,
        font: &TrueTypeFont,
    ) -> Result<Dictionary> {
        let font_data = self
            .embedded_fonts
            .get(font_name)
            .ok_or_else(|| PdfError::FontError(format!("Font {font_name} not found")))?;

        let mut cid_dict = Dictionary::new();
        cid_dict.set("Type", Object::Name("Font".to_string()));
        cid_dict.set("Subtype", Object::Name("CIDFontType2".to_string()));
        cid_dict.set("BaseFont", Object::Name(font_data.pdf_name.clone()));

        let mut cid_system_info = Dictionary::new();
        cid_system_info.set("Registry", Object::String("Adobe".to_string()));
        cid_system_info.set("Ordering", Object::String("Identity".to_string()));
        cid_system_info.set("Supplement", Object::Integer(0));
        cid_dict.set("CIDSystemInfo", Object::Dictionary(cid_system_info));

        cid_dict.set("FontDescriptor", Object::Reference(ObjectId::new(0, 0)));
        cid_dict.set("CIDToGIDMap", Object::Name("Identity".to_string()));

        if let Some(glyphs) = &font_data.subset_glyphs {
            cid_dict.set("W", Object::Array(Self::build_width_array(font, glyphs)));
        } else {
            let all_glyphs = font.get_all_glyph_indices();
            cid_dict.set("W", Object::Array(Self::build_width_array(font, &all_glyphs)));
        }

        Ok(cid_dict)
    }
}

impl Default for FontEmbedder {
    fn default() -> Self {
        Self::new()
    }
}
