//! Font embedding functionality for PDF generation

use super::Font;
use crate::objects::{Dictionary, Object, ObjectId};
use crate::Result;

/// Font embedding options
#[derive(Debug, Clone)]
pub struct EmbeddingOptions {
    /// Whether to subset the font (only include used glyphs)
    pub subset: bool,
    /// Whether to compress the font data
    pub compress: bool,
    /// Font encoding to use
    pub encoding: FontEncoding,
}

impl Default for EmbeddingOptions {
    fn default() -> Self {
        EmbeddingOptions {
            subset: true,
            compress: true,
            encoding: FontEncoding::WinAnsiEncoding,
        }
    }
}

/// Font encoding options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontEncoding {
    /// Windows ANSI encoding (CP1252)
    WinAnsiEncoding,
    /// Mac Roman encoding
    MacRomanEncoding,
    /// Standard PDF encoding
    StandardEncoding,
    /// Identity encoding for CID fonts
    IdentityH,
}

impl FontEncoding {
    /// Get the encoding name for PDF
    pub fn name(&self) -> &'static str {
        match self {
            FontEncoding::WinAnsiEncoding => "WinAnsiEncoding",
            FontEncoding::MacRomanEncoding => "MacRomanEncoding",
            FontEncoding::StandardEncoding => "StandardEncoding",
            FontEncoding::IdentityH => "Identity-H",
        }
    }
}

/// Font embedder for creating PDF font objects
pub struct FontEmbedder<'a> {
    font: &'a Font,
    options: EmbeddingOptions,
    used_chars: Vec<char>,
}

impl<'a> FontEmbedder<'a> {
    /// Create a new font embedder
    pub fn new(font: &'a Font, options: EmbeddingOptions) -> Self {
        FontEmbedder {
            font,
            options,
            used_chars: Vec::new(),
        }
    }

    /// Add characters that will be used with this font
    pub fn add_used_chars(&mut self, text: &str) {
        for ch in text.chars() {
            if !self.used_chars.contains(&ch) {
                self.used_chars.push(ch);
            }
        }
    }

    /// Create the font dictionary for embedding
    pub fn create_font_dict(
        &self,
        descriptor_id: ObjectId,
        to_unicode_id: Option<ObjectId>,
    ) -> Dictionary {
        let mut dict = Dictionary::new();

        // Type and Subtype
        dict.set("Type", Object::Name("Font".into()));

        // Determine font type based on encoding
        if self.options.encoding == FontEncoding::IdentityH {
            // Type 0 (composite) font for Unicode support
            self.create_type0_font_dict(&mut dict, descriptor_id, to_unicode_id);
        } else {
            // Type 1 or TrueType font
            self.create_simple_font_dict(&mut dict, descriptor_id, to_unicode_id);
        }

        dict
    }

    /// Create a Type 0 (composite) font dictionary
    fn create_type0_font_dict(
        &self,
        dict: &mut Dictionary,
        descriptor_id: ObjectId,
        to_unicode_id: Option<ObjectId>,
    ) {
        dict.set("Subtype", Object::Name("Type0".into()));
        dict.set("BaseFont", Object::Name(self.font.postscript_name().into()));
        dict.set(
            "Encoding",
            Object::Name(self.options.encoding.name().into()),
        );

        // DescendantFonts array with CIDFont
        let cid_font_dict = self.create_cid_font_dict(descriptor_id);
        dict.set(
            "DescendantFonts",
            Object::Array(vec![Object::Dictionary(cid_font_dict)]),
        );

        if let Some(to_unicode) = to_unicode_id {
            dict.set("ToUnicode", Object::Reference(to_unicode));
        }
    }

    /// Create a CIDFont dictionary
    fn create_cid_font_dict(&self, descriptor_id: ObjectId) -> Dictionary {
        let mut dict = Dictionary::new();

        dict.set("Type", Object::Name("Font".into()));
        dict.set("Subtype", Object::Name("CIDFontType2".into()));
        dict.set("BaseFont", Object::Name(self.font.postscript_name().into()));

        // CIDSystemInfo
        let mut cid_system_info = Dictionary::new();
        cid_system_info.set("Registry", Object::String("Adobe".into()));
        cid_system_info.set("Ordering", Object::String("Identity".into()));
        cid_system_info.set("Supplement", Object::Integer(0));
        dict.set("CIDSystemInfo", Object::Dictionary(cid_system_info));

        dict.set("FontDescriptor", Object::Reference(descriptor_id));

        // Default width
        dict.set("DW", Object::Integer(1000));

        // Width array (simplified - all glyphs use default width)
        // TODO: Implement actual glyph widths
        dict.set("W", Object::Array(vec![]));

        dict
    }

    /// Create a simple font dictionary (Type1/TrueType)
    fn create_simple_font_dict(
        &self,
        dict: &mut Dictionary,
        descriptor_id: ObjectId,
        to_unicode_id: Option<ObjectId>,
    ) {
        dict.set("Subtype", Object::Name("TrueType".into()));
        dict.set("BaseFont", Object::Name(self.font.postscript_name().into()));
        dict.set(
            "Encoding",
            Object::Name(self.options.encoding.name().into()),
        );

        dict.set("FontDescriptor", Object::Reference(descriptor_id));

        // FirstChar and LastChar
        let (first_char, last_char) = self.get_char_range();
        dict.set("FirstChar", Object::Integer(first_char as i64));
        dict.set("LastChar", Object::Integer(last_char as i64));

        // Widths array
        let widths = self.create_widths_array(first_char, last_char);
        dict.set("Widths", Object::Array(widths));

        if let Some(to_unicode) = to_unicode_id {
            dict.set("ToUnicode", Object::Reference(to_unicode));
        }
    }

    /// Get the range of characters used
    fn get_char_range(&self) -> (u8, u8) {
        if self.used_chars.is_empty() {
            return (32, 126); // Default ASCII range
        }

        let mut min = 255;
        let mut max = 0;

        for &ch in &self.used_chars {
            if ch as u32 <= 255 {
                let byte = ch as u8;
                if byte < min {
                    min = byte;
                }
                if byte > max {
                    max = byte;
                }
            }
        }

        (min, max)
    }

    /// Create widths array for the font
    fn create_widths_array(&self, first_char: u8, last_char: u8) -> Vec<Object> {
        let mut widths = Vec::new();

        for ch in first_char..=last_char {
            if let Some(width) = self.font.glyph_mapping.get_char_width(char::from(ch)) {
                // Convert from font units to PDF units (1/1000)
                let pdf_width = (width as f64 * 1000.0) / self.font.metrics.units_per_em as f64;
                widths.push(Object::Integer(pdf_width as i64));
            } else {
                // Default width for missing glyphs
                widths.push(Object::Integer(600));
            }
        }

        widths
    }

    /// Create ToUnicode CMap for text extraction
    pub fn create_to_unicode_cmap(&self) -> Vec<u8> {
        let mut cmap = String::new();

        // CMap header
        cmap.push_str("/CIDInit /ProcSet findresource begin\n");
        cmap.push_str("12 dict begin\n");
        cmap.push_str("begincmap\n");
        cmap.push_str("/CIDSystemInfo\n");
        cmap.push_str("<< /Registry (Adobe)\n");
        cmap.push_str("   /Ordering (UCS)\n");
        cmap.push_str("   /Supplement 0\n");
        cmap.push_str(">> def\n");
        cmap.push_str("/CMapName /Adobe-Identity-UCS def\n");
        cmap.push_str("/CMapType 2 def\n");
        cmap.push_str("1 begincodespacerange\n");
        cmap.push_str("<0000> <FFFF>\n");
        cmap.push_str("endcodespacerange\n");

        // Character mappings
        let mut mappings = Vec::new();
        for &ch in &self.used_chars {
            if let Some(glyph) = self.font.glyph_mapping.char_to_glyph(ch) {
                mappings.push((glyph, ch));
            }
        }

        if !mappings.is_empty() {
            cmap.push_str(&format!("{} beginbfchar\n", mappings.len()));
            for (glyph, ch) in mappings {
                cmap.push_str(&format!("<{:04X}> <{:04X}>\n", glyph, ch as u32));
            }
            cmap.push_str("endbfchar\n");
        }

        // CMap footer
        cmap.push_str("endcmap\n");
        cmap.push_str("CMapName currentdict /CMap defineresource pop\n");
        cmap.push_str("end\n");
        cmap.push_str("end\n");

        cmap.into_bytes()
    }

    /// Get the font data for embedding
    pub fn get_font_data(&self) -> Result<Vec<u8>> {
        if self.options.subset {
            // TODO: Implement font subsetting
            Ok(self.font.data.clone())
        } else {
            Ok(self.font.data.clone())
        }
    }
}
