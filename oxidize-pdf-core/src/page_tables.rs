//! Page extension for table rendering
//!
//! This module provides traits and implementations to easily add tables to PDF pages.

use crate::error::PdfError;
use crate::graphics::Color;
use crate::page::Page;
use crate::structure::TaggedStructureTree;
use crate::text::{
    AdvancedTable, AdvancedTableCell, AdvancedTableOptions, AlternatingRowColors, BorderStyle,
    CellPadding, ColumnDefinition, ColumnWidth, Table, TableOptions,
};

/// Wraps `emit` in a `/tag <</MCID n>> BDC ... EMC` marked-content region on
/// `page_index`, registering the region with `tree` so its MCID is owned by
/// exactly one structure element (§4.4.1). No-op passthrough when `tree` is
/// `None` (tagging disabled).
pub fn emit_tagged<F>(
    page: &mut Page,
    tree: Option<&mut TaggedStructureTree>,
    page_index: usize,
    tag: &str,
    emit: F,
) -> Result<(), PdfError>
where
    F: FnOnce(&mut Page) -> Result<(), PdfError>,
{
    match tree {
        Some(tree) => {
            let mcid = tree.begin_marked_content(page_index, tag);
            page.graphics()
                .raw_operation(&format!("/{tag} <</MCID {mcid}>> BDC"));
            let result = emit(page);
            page.graphics().raw_operation("EMC");
            tree.end_marked_content();
            result
        }
        None => emit(page),
    }
}

/// Extension trait for adding tables to pages
pub trait PageTables {
    /// Add a simple table to the page
    fn add_simple_table(&mut self, table: &Table, x: f64, y: f64) -> Result<&mut Self, PdfError>;

    /// Add an advanced table to the page
    fn add_advanced_table(
        &mut self,
        table: &AdvancedTable,
        x: f64,
        y: f64,
        available_width: f64,
    ) -> Result<&mut Self, PdfError>;

    /// Create and add a quick table with equal columns
    fn add_quick_table(
        &mut self,
        data: Vec<Vec<String>>,
        x: f64,
        y: f64,
        width: f64,
        options: Option<TableOptions>,
    ) -> Result<&mut Self, PdfError>;

    /// Create and add an advanced table with custom styling
    fn add_styled_table(
        &mut self,
        headers: Vec<String>,
        data: Vec<Vec<String>>,
        x: f64,
        y: f64,
        width: f64,
        style: TableStyle,
    ) -> Result<&mut Self, PdfError>;

    /// Same as [`add_simple_table`](Self::add_simple_table), but wraps the
    /// whole table in a single `Table`-tagged marked-content region when
    /// `tree` is `Some` (§4.4.1).
    fn add_simple_table_tagged(
        &mut self,
        table: &Table,
        x: f64,
        y: f64,
        tree: Option<&mut TaggedStructureTree>,
        page_index: usize,
    ) -> Result<&mut Self, PdfError>;
}

/// Predefined table styles
#[derive(Debug, Clone)]
pub struct TableStyle {
    /// Border style
    pub borders: BorderStyle,
    /// Cell padding
    pub padding: CellPadding,
    /// Header background color
    pub header_background: Option<Color>,
    /// Header text color
    pub header_text_color: Option<Color>,
    /// Alternating row colors
    pub alternating_rows: Option<AlternatingRowColors>,
    /// Default font size
    pub font_size: f64,
}

impl TableStyle {
    /// Create a minimal table style (no borders)
    pub fn minimal() -> Self {
        Self {
            borders: BorderStyle::none(),
            padding: CellPadding::uniform(5.0),
            header_background: None,
            header_text_color: None,
            alternating_rows: None,
            font_size: 10.0,
        }
    }

    /// Create a simple table style with borders
    pub fn simple() -> Self {
        Self {
            borders: BorderStyle::default(),
            padding: CellPadding::uniform(5.0),
            header_background: None,
            header_text_color: None,
            alternating_rows: None,
            font_size: 10.0,
        }
    }

    /// Create a professional table style
    pub fn professional() -> Self {
        Self {
            borders: BorderStyle::horizontal_only(1.0, Color::gray(0.7)),
            padding: CellPadding::symmetric(8.0, 6.0),
            header_background: Some(Color::gray(0.1)),
            header_text_color: Some(Color::white()),
            alternating_rows: Some(AlternatingRowColors {
                even_color: Color::white(),
                odd_color: Color::gray(0.95),
                include_header: false,
            }),
            font_size: 10.0,
        }
    }

    /// Create a colorful table style
    pub fn colorful() -> Self {
        Self {
            borders: BorderStyle::default(),
            padding: CellPadding::uniform(6.0),
            header_background: Some(Color::rgb(0.2, 0.4, 0.8)),
            header_text_color: Some(Color::white()),
            alternating_rows: Some(AlternatingRowColors {
                even_color: Color::rgb(0.95, 0.95, 1.0),
                odd_color: Color::white(),
                include_header: false,
            }),
            font_size: 10.0,
        }
    }
}

impl PageTables for Page {
    fn add_simple_table(&mut self, table: &Table, x: f64, y: f64) -> Result<&mut Self, PdfError> {
        let mut table_clone = table.clone();
        table_clone.set_position(x, y);
        table_clone.render(self.graphics())?;
        Ok(self)
    }

    fn add_advanced_table(
        &mut self,
        table: &AdvancedTable,
        x: f64,
        y: f64,
        available_width: f64,
    ) -> Result<&mut Self, PdfError> {
        let mut table_clone = table.clone();
        table_clone.set_position(x, y);
        table_clone.render(self.graphics(), available_width)?;
        Ok(self)
    }

    fn add_quick_table(
        &mut self,
        data: Vec<Vec<String>>,
        x: f64,
        y: f64,
        width: f64,
        options: Option<TableOptions>,
    ) -> Result<&mut Self, PdfError> {
        if data.is_empty() {
            return Ok(self);
        }

        let num_columns = data[0].len();
        let mut table = Table::with_equal_columns(num_columns, width);

        if let Some(opts) = options {
            table.set_options(opts);
        }

        for row in data {
            table.add_row(row)?;
        }

        self.add_simple_table(&table, x, y)
    }

    fn add_styled_table(
        &mut self,
        headers: Vec<String>,
        data: Vec<Vec<String>>,
        x: f64,
        y: f64,
        width: f64,
        style: TableStyle,
    ) -> Result<&mut Self, PdfError> {
        let num_columns = headers.len();
        if num_columns == 0 {
            return Ok(self);
        }

        // Create columns with equal width
        let columns: Vec<ColumnDefinition> = (0..num_columns)
            .map(|_| ColumnDefinition {
                width: ColumnWidth::Fixed(width / num_columns as f64),
                default_align: crate::text::TextAlign::Left,
                min_width: None,
                max_width: None,
            })
            .collect();

        let mut table = AdvancedTable::new(columns);

        // Apply style
        let options = AdvancedTableOptions {
            border_style: style.borders,
            cell_padding: style.padding,
            font_size: style.font_size,
            alternating_rows: style.alternating_rows,
            ..Default::default()
        };
        table.set_options(options);

        // Add header row
        let header_cells: Vec<AdvancedTableCell> = headers
            .into_iter()
            .map(|text| {
                let mut cell =
                    AdvancedTableCell::text(text).with_align(crate::text::TextAlign::Center);

                if let Some(bg) = style.header_background {
                    cell = cell.with_background(bg);
                }
                if let Some(color) = style.header_text_color {
                    cell = cell.with_text_color(color);
                }

                cell
            })
            .collect();

        table.add_header_row(header_cells)?;

        // Add data rows
        for row_data in data {
            table.add_text_row(row_data)?;
        }

        self.add_advanced_table(&table, x, y, width)
    }

    fn add_simple_table_tagged(
        &mut self,
        table: &Table,
        x: f64,
        y: f64,
        tree: Option<&mut TaggedStructureTree>,
        page_index: usize,
    ) -> Result<&mut Self, PdfError> {
        let mut table_clone = table.clone();
        table_clone.set_position(x, y);
        emit_tagged(self, tree, page_index, "Table", |page| {
            table_clone.render(page.graphics())
        })?;
        Ok(self)
    }
}
