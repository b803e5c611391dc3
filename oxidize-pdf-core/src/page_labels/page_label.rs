//! Page label definitions according to ISO 32000-1

use crate::objects::{Dictionary, Object};

/// Page label numbering style
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PageLabelStyle {
    /// Decimal arabic numerals (1, 2, 3, ...)
    DecimalArabic,
    /// Uppercase roman numerals (I, II, III, IV, ...)
    UppercaseRoman,
    /// Lowercase roman numerals (i, ii, iii, iv, ...)
    LowercaseRoman,
    /// Uppercase letters (A, B, C, ... AA, BB, ...)
    UppercaseLetters,
    /// Lowercase letters (a, b, c, ... aa, bb, ...)
    LowercaseLetters,
    /// No page numbers (labels consist only of prefix)
    None,
}

impl PageLabelStyle {
    /// Convert to PDF name
    pub fn to_pdf_name(&self) -> Option<&'static str> {
        match self {
            PageLabelStyle::DecimalArabic => Some("D"),
            PageLabelStyle::UppercaseRoman => Some("r"),
            PageLabelStyle::LowercaseRoman => Some("R"),
            PageLabelStyle::UppercaseLetters => Some("A"),
            PageLabelStyle::LowercaseLetters => Some("a"),
            PageLabelStyle::None => None,
        }
    }

    /// Format a page number in this style
    pub fn format(&self, number: u32) -> String {
        match self {
            PageLabelStyle::DecimalArabic => number.to_string(),
            PageLabelStyle::UppercaseRoman => to_roman(number).to_uppercase(),
            PageLabelStyle::LowercaseRoman => to_roman(number),
            PageLabelStyle::UppercaseLetters => to_letters(number, true),
            PageLabelStyle::LowercaseLetters => to_letters(number, false),
            PageLabelStyle::None => String::new(),
        }
    }
}

/// Page label for a range of pages
#[derive(Debug, Clone)]
pub struct PageLabel {
    /// Numbering style
    pub style: PageLabelStyle,
    /// Label prefix (e.g., "Chapter " for "Chapter 1")
    pub prefix: Option<String>,
    /// First value of the numeric portion (default 1)
    pub start: u32,
}

impl PageLabel {
    /// Create a new page label
    pub fn new(style: PageLabelStyle) -> Self {
        Self {
            style,
            prefix: None,
            start: 1,
        }
    }

    /// Create decimal arabic label (1, 2, 3, ...)
    pub fn decimal() -> Self {
        Self::new(PageLabelStyle::DecimalArabic)
    }

    /// Create uppercase roman label (I, II, III, ...)
    pub fn roman_uppercase() -> Self {
        Self::new(PageLabelStyle::UppercaseRoman)
    }

    /// Create lowercase roman label (i, ii, iii, ...)
    pub fn roman_lowercase() -> Self {
        Self::new(PageLabelStyle::LowercaseRoman)
    }

    /// Create uppercase letter label (A, B, C, ...)
    pub fn letters_uppercase() -> Self {
        Self::new(PageLabelStyle::UppercaseLetters)
    }

    /// Create lowercase letter label (a, b, c, ...)
    pub fn letters_lowercase() -> Self {
        Self::new(PageLabelStyle::LowercaseLetters)
    }

    /// Create label with no numbers (prefix only)
    pub fn prefix_only(prefix: impl Into<String>) -> Self {
        Self {
            style: PageLabelStyle::None,
            prefix: Some(prefix.into()),
            start: 1,
        }
    }

    /// Set label prefix
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Set starting number
    pub fn starting_at(mut self, start: u32) -> Self {
        self.start = start;
        self
    }

    /// Format a page label for a given offset
    pub fn format_label(&self, offset: u32) -> String {
        let mut label = String::new();

        if let Some(prefix) = &self.prefix {
            label.push_str(prefix);
        }

        if self.style != PageLabelStyle::None {
            let number = self.start + offset;
            label.push_str(&self.style.format(number));
        }

        label
    }

    /// Convert to PDF dictionary
    pub fn to_dict(&self) -> Dictionary {
        let mut dict = Dictionary::new();

        if let Some(type_name) = self.style.to_pdf_name() {
            dict.set("Type", Object::Name(type_name.to_string()));
        }

        if let Some(prefix) = &self.prefix {
            dict.set("P", Object::String(prefix.clone()));
        }

        if self.start != 1 {
            dict.set("St", Object::Integer(self.start as i64));
        }

        dict
    }
}

/// Page label range - associates a page label with a starting page
#[derive(Debug, Clone)]
pub struct PageLabelRange {
    /// Starting page index (0-based)
    pub start_page: u32,
    /// Page label for this range
    pub label: PageLabel,
}

impl PageLabelRange {
    /// Create a new page label range
    pub fn new(start_page: u32, label: PageLabel) -> Self {
        Self { start_page, label }
    }
}

/// Convert number to roman numerals
fn to_roman(mut num: u32) -> String {
    if num == 0 {
        return String::new();
    }

    let values = [
        (1000, "m"),
        (900, "cm"),
        (500, "d"),
        (400, "cd"),
        (100, "c"),
        (90, "xc"),
        (50, "l"),
        (40, "xl"),
        (10, "x"),
        (9, "ix"),
        (5, "v"),
        (4, "iv"),
        (1, "i"),
    ];

    let mut result = String::new();

    for (value, numeral) in values.iter() {
        while num >= *value {
            result.push_str(numeral);
            num -= value;
        }
    }

    result
}

/// Convert number to letters (A, B, ... Z, AA, AB, ...)
fn to_letters(num: u32, uppercase: bool) -> String {
    if num == 0 {
        return String::new();
    }

    let mut result = String::new();
    let mut n = num;

    while n > 0 {
        let remainder = ((n - 1) % 26) as u8;
        let letter = if uppercase {
            (b'A' + remainder) as char
        } else {
            (b'a' + remainder) as char
        };
        result.insert(0, letter);
        n = (n - 1) / 26;
    }

    result
}
