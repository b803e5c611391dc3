/// PDF font encoding types
///
/// Specifies how text characters are encoded in the PDF document.
/// Different encodings support different character sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontEncoding {
    /// WinAnsiEncoding - Windows ANSI encoding (CP1252)
    /// Supports Western European characters, most common for standard fonts
    WinAnsiEncoding,
    /// MacRomanEncoding - Apple Macintosh Roman encoding
    /// Legacy encoding for Macintosh systems
    MacRomanEncoding,
    /// StandardEncoding - Adobe Standard encoding
    /// Basic ASCII plus some additional characters
    StandardEncoding,
    /// MacExpertEncoding - Macintosh Expert encoding
    /// For expert typography with additional symbols
    MacExpertEncoding,
    /// Custom encoding specified by name
    /// Use this for custom or non-standard encodings
    Custom(&'static str),
}

impl FontEncoding {
    /// Get the PDF name for this encoding
    pub fn pdf_name(&self) -> &'static str {
        match self {
            FontEncoding::WinAnsiEncoding => "WinAnsiEncoding",
            FontEncoding::MacRomanEncoding => "MacRomanEncoding",
            FontEncoding::StandardEncoding => "StandardEncoding",
            FontEncoding::MacExpertEncoding => "MacExpertEncoding",
            FontEncoding::Custom(name) => name,
        }
    }

    /// Get the recommended encoding for a specific font
    /// Returns None if the font doesn't typically need explicit encoding
    pub fn recommended_for_font(font: &Font) -> Option<Self> {
        match font {
            // Text fonts typically use WinAnsiEncoding for broad compatibility
            Font::Helvetica
            | Font::HelveticaBold
            | Font::HelveticaOblique
            | Font::HelveticaBoldOblique
            | Font::TimesRoman
            | Font::TimesBold
            | Font::TimesItalic
            | Font::TimesBoldItalic
            | Font::Courier
            | Font::CourierBold
            | Font::CourierOblique
            | Font::CourierBoldOblique => Some(FontEncoding::WinAnsiEncoding),
            // Symbol fonts don't use text encodings
            Font::Symbol | Font::ZapfDingbats => None,
            // Custom fonts typically use Identity-H for full Unicode support
            Font::Custom(_) => Some(FontEncoding::Custom("Identity-H")),
        }
    }
}

/// A font with optional encoding specification
///
/// This allows specifying encoding for fonts when needed, while maintaining
/// backward compatibility with the simple Font enum.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FontWithEncoding {
    /// The font to use
    pub font: Font,
    /// Optional encoding specification
    /// If None, no encoding will be set in the PDF (reader's default)
    pub encoding: Option<FontEncoding>,
}

impl FontWithEncoding {
    /// Create a new font with encoding
    pub fn new(font: Font, encoding: Option<FontEncoding>) -> Self {
        Self { font, encoding }
    }

    /// Create a font with recommended encoding
    pub fn with_recommended_encoding(font: Font) -> Self {
        Self {
            font: font.clone(),
            encoding: FontEncoding::recommended_for_font(&font),
        }
    }

    /// Create a font with specific encoding
    pub fn with_encoding(font: Font, encoding: FontEncoding) -> Self {
        Self {
            font,
            encoding: Some(encoding),
        }
    }

    /// Create a font without encoding (reader's default)
    pub fn without_encoding(font: Font) -> Self {
        Self {
            font,
            encoding: None,
        }
    }
}

// Implement From trait for easy conversion
impl From<Font> for FontWithEncoding {
    fn from(font: Font) -> Self {
        Self::without_encoding(font)
    }
}

/// PDF fonts - either standard Type 1 fonts or custom fonts.
///
/// Standard fonts are guaranteed to be available in all PDF readers
/// and don't need to be embedded. Custom fonts must be loaded and embedded.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Font {
    // Standard 14 PDF fonts
    /// Helvetica (sans-serif)
    Helvetica,
    /// Helvetica Bold
    HelveticaBold,
    /// Helvetica Oblique (italic)
    HelveticaOblique,
    /// Helvetica Bold Oblique
    HelveticaBoldOblique,
    /// Times Roman (serif)
    TimesRoman,
    /// Times Bold
    TimesBold,
    /// Times Italic
    TimesItalic,
    /// Times Bold Italic
    TimesBoldItalic,
    /// Courier (monospace)
    Courier,
    /// Courier Bold
    CourierBold,
    /// Courier Oblique
    CourierOblique,
    /// Courier Bold Oblique
    CourierBoldOblique,
    /// Symbol font (mathematical symbols)
    Symbol,
    /// ZapfDingbats (decorative symbols)
    ZapfDingbats,
    /// Custom font loaded from file or bytes
    Custom(String),
}

impl Font {
    /// Get the PDF name for this font
    pub fn pdf_name(&self) -> String {
        match self {
            Font::Helvetica => "Helvetica".to_string(),
            Font::HelveticaBold => "Helvetica-Bold".to_string(),
            Font::HelveticaOblique => "Helvetica-Oblique".to_string(),
            Font::HelveticaBoldOblique => "Helvetica-BoldOblique".to_string(),
            Font::TimesRoman => "Times-Roman".to_string(),
            Font::TimesBold => "Times-Bold".to_string(),
            Font::TimesItalic => "Times-Italic".to_string(),
            Font::TimesBoldItalic => "Times-BoldItalic".to_string(),
            Font::Courier => "Courier".to_string(),
            Font::CourierBold => "Courier-Bold".to_string(),
            Font::CourierOblique => "Courier-Oblique".to_string(),
            Font::CourierBoldOblique => "Courier-BoldOblique".to_string(),
            Font::Symbol => "Symbol".to_string(),
            Font::ZapfDingbats => "ZapfDingbats".to_string(),
            Font::Custom(name) => name.clone(),
        }
    }

    /// Check if this font is symbolic (doesn't use text encodings)
    pub fn is_symbolic(&self) -> bool {
        matches!(self, Font::Symbol | Font::ZapfDingbats)
    }

    /// Create this font with a specific encoding
    pub fn with_encoding(self, encoding: FontEncoding) -> FontWithEncoding {
        FontWithEncoding::with_encoding(self, encoding)
    }

    /// Create this font with recommended encoding
    pub fn with_recommended_encoding(self) -> FontWithEncoding {
        FontWithEncoding::with_recommended_encoding(self)
    }

    /// Create this font without explicit encoding
    pub fn without_encoding(self) -> FontWithEncoding {
        FontWithEncoding::without_encoding(self)
    }
    
    /// Check if this is a custom font
    pub fn is_custom(&self) -> bool {
        matches!(self, Font::Custom(_))
    }
    
    /// Create a custom font reference
    pub fn custom(name: impl Into<String>) -> Self {
        Font::Custom(name.into())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FontFamily {
    Helvetica,
    Times,
    Courier,
}

impl FontFamily {
    pub fn regular(self) -> Font {
        match self {
            FontFamily::Helvetica => Font::Helvetica,
            FontFamily::Times => Font::TimesRoman,
            FontFamily::Courier => Font::Courier,
        }
    }

    pub fn bold(self) -> Font {
        match self {
            FontFamily::Helvetica => Font::HelveticaBold,
            FontFamily::Times => Font::TimesBold,
            FontFamily::Courier => Font::CourierBold,
        }
    }

    pub fn italic(self) -> Font {
        match self {
            FontFamily::Helvetica => Font::HelveticaOblique,
            FontFamily::Times => Font::TimesItalic,
            FontFamily::Courier => Font::CourierOblique,
        }
    }

    pub fn bold_italic(self) -> Font {
        match self {
            FontFamily::Helvetica => Font::HelveticaBoldOblique,
            FontFamily::Times => Font::TimesBoldItalic,
            FontFamily::Courier => Font::CourierBoldOblique,
        }
    }
}
