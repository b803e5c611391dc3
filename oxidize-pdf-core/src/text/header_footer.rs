//! Header and footer support for PDF pages.
//!
//! This module provides functionality for adding headers and footers to PDF pages,
//! including support for dynamic placeholders like page numbers.

use crate::text::{Font, TextAlign};
use chrono::Local;
use std::collections::HashMap;

/// Position for headers and footers on a page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HeaderFooterPosition {
    /// Header at the top of the page
    Header,
    /// Footer at the bottom of the page
    Footer,
}

/// Configuration options for headers and footers.
#[derive(Debug, Clone)]
pub struct HeaderFooterOptions {
    /// Font to use for the header/footer text
    pub font: Font,
    /// Font size in points
    pub font_size: f64,
    /// Text alignment
    pub alignment: TextAlign,
    /// Vertical offset from page edge in points
    pub margin: f64,
    /// Whether to include page numbers
    pub show_page_numbers: bool,
    /// Custom date format (if None, uses default)
    pub date_format: Option<String>,
}

impl Default for HeaderFooterOptions {
    fn default() -> Self {
        Self {
            font: Font::Helvetica,
            font_size: 10.0,
            alignment: TextAlign::Center,
            margin: 36.0, // 0.5 inch
            show_page_numbers: true,
            date_format: None,
        }
    }
}

/// A header or footer that can be added to PDF pages.
#[derive(Debug, Clone)]
pub struct HeaderFooter {
    /// The position of this header/footer
    position: HeaderFooterPosition,
    /// The content template with optional placeholders
    content: String,
    /// Configuration options
    options: HeaderFooterOptions,
}

impl HeaderFooter {
    /// Creates a new header with the given content.
    ///
    /// # Example
    ///
    /// ```rust
    /// use oxidize_pdf::text::{HeaderFooter, HeaderFooterOptions};
    ///
    /// let header = HeaderFooter::new_header("Annual Report {{year}}");
    /// ```
    pub fn new_header(content: impl Into<String>) -> Self {
        Self {
            position: HeaderFooterPosition::Header,
            content: content.into(),
            options: HeaderFooterOptions::default(),
        }
    }

    /// Creates a new footer with the given content.
    ///
    /// # Example
    ///
    /// ```rust
    /// use oxidize_pdf::text::{HeaderFooter, HeaderFooterOptions};
    ///
    /// let footer = HeaderFooter::new_footer("Page {{page_number}} of {{total_pages}}");
    /// ```
    pub fn new_footer(content: impl Into<String>) -> Self {
        Self {
            position: HeaderFooterPosition::Footer,
            content: content.into(),
            options: HeaderFooterOptions::default(),
        }
    }

    /// Sets the options for this header/footer.
    pub fn with_options(mut self, options: HeaderFooterOptions) -> Self {
        self.options = options;
        self
    }

    /// Sets the font for this header/footer.
    pub fn with_font(mut self, font: Font, size: f64) -> Self {
        self.options.font = font;
        self.options.font_size = size;
        self
    }

    /// Sets the text alignment.
    pub fn with_alignment(mut self, alignment: TextAlign) -> Self {
        self.options.alignment = alignment;
        self
    }

    /// Sets the margin from the page edge.
    pub fn with_margin(mut self, margin: f64) -> Self {
        self.options.margin = margin;
        self
    }

    /// Gets the position of this header/footer.
    pub fn position(&self) -> HeaderFooterPosition {
        self.position
    }

    /// Gets the content template.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Gets the options.
    pub fn options(&self) -> &HeaderFooterOptions {
        &self.options
    }

    /// Renders the header/footer content with placeholder substitution.
    ///
    /// Available placeholders:
    /// - `{{page_number}}` - Current page number
    /// - `{{total_pages}}` - Total number of pages
    /// - `{{date}}` - Current date
    /// - `{{time}}` - Current time
    /// - `{{datetime}}` - Current date and time
    /// - `{{year}}` - Current year
    /// - `{{month}}` - Current month
    /// - `{{day}}` - Current day
    pub fn render(
        &self,
        page_number: usize,
        total_pages: usize,
        custom_values: Option<&HashMap<String, String>>,
    ) -> String {
        let mut result = self.content.clone();

        // Replace standard placeholders
        result = result.replace("{{page_number}}", &page_number.to_string());
        result = result.replace("{{total_pages}}", &total_pages.to_string());

        // Date/time placeholders
        let now = Local::now();
        result = result.replace("{{year}}", &now.format("%Y").to_string());
        result = result.replace("{{month}}", &now.format("%B").to_string());
        result = result.replace("{{day}}", &now.format("%d").to_string());

        if let Some(date_format) = &self.options.date_format {
            result = result.replace("{{date}}", &now.format(date_format).to_string());
        } else {
            result = result.replace("{{date}}", &now.format("%Y-%m-%d").to_string());
        }

        result = result.replace("{{time}}", &now.format("%H:%M:%S").to_string());
        result = result.replace("{{datetime}}", &now.format("%Y-%m-%d %H:%M:%S").to_string());

        // Replace custom values if provided
        if let Some(custom) = custom_values {
            for (key, value) in custom {
                result = result.replace(&format!("{{{{{key}}}}}"), value);
            }
        }

        result
    }

    /// Calculates the Y position for rendering based on page height and position.
    pub fn calculate_y_position(&self, page_height: f64) -> f64 {
        match self.position {
            HeaderFooterPosition::Header => page_height - self.options.margin,
            HeaderFooterPosition::Footer => self.options.margin,
        }
    }

    /// Calculates the X position for rendering based on page width and alignment.
    pub fn calculate_x_position(&self, page_width: f64, text_width: f64) -> f64 {
        match self.options.alignment {
            TextAlign::Left => self.options.margin,
            TextAlign::Center => (page_width - text_width) / 2.0,
            TextAlign::Right => page_width - self.options.margin - text_width,
            TextAlign::Justified => self.options.margin, // Justified acts as left for single line
        }
    }
}
