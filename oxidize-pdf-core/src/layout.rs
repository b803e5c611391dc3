//! Pagination state machine shared by the layout/orchestration code.
//!
//! `PageCursor` tracks where the next element lands within the current
//! page's content area and reports whether the caller needs to start a
//! fresh page before placing it. It does not own page content itself; the
//! caller seals the current page and allocates a new one on `PageBreak`,
//! then retries the placement that triggered the break.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Result of advancing the cursor by the height of an element about to be
/// placed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PageEvent {
    /// The element fits in the remaining space of the current page at `y`.
    Placed { y: f64 },
    /// The element does not fit; the caller must seal the current page,
    /// start page `new_page_index`, and retry.
    PageBreak { new_page_index: u32 },
}

/// A page's content area, in PDF user-space units (origin bottom-left).
#[derive(Debug, Clone, Copy)]
pub struct ContentArea {
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
    pub top: f64,
}

impl ContentArea {
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.top - self.bottom
    }
}

/// Cooperative cancellation flag shared between the orchestrator and the
/// layout/filler/redaction passes it drives (§5 concurrency model).
#[derive(Debug, Clone, Default)]
pub struct CancellationToken(Arc<AtomicBool>);

impl CancellationToken {
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(false)))
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Explicit pagination state machine (§4.6.1). Owns the current page's
/// content area, cursor position, and page index; `advance_cursor` is the
/// only way callers move it forward.
#[derive(Debug, Clone)]
pub struct PageCursor {
    content_area: ContentArea,
    cursor_y: f64,
    page_index: u32,
}

impl PageCursor {
    pub fn new(content_area: ContentArea) -> Self {
        Self {
            cursor_y: content_area.top,
            content_area,
            page_index: 0,
        }
    }

    pub fn page_index(&self) -> u32 {
        self.page_index
    }

    pub fn cursor_y(&self) -> f64 {
        self.cursor_y
    }

    pub fn content_area(&self) -> ContentArea {
        self.content_area
    }

    /// Space left between the cursor and the bottom of the content area.
    pub fn remaining(&self) -> f64 {
        self.cursor_y - self.content_area.bottom
    }

    /// Attempts to place an element of `height` at the current cursor. If
    /// it fits, advances the cursor and returns `Placed`. If it does not,
    /// returns `PageBreak` without mutating the cursor beyond resetting it
    /// to the top of a fresh page and bumping the page index — the caller
    /// retries the same placement against the new page.
    pub fn advance_cursor(&mut self, height: f64) -> PageEvent {
        if self.remaining() >= height {
            let y = self.cursor_y;
            self.cursor_y -= height;
            return PageEvent::Placed { y };
        }
        self.page_index += 1;
        self.cursor_y = self.content_area.top;
        PageEvent::PageBreak {
            new_page_index: self.page_index,
        }
    }

    /// Resets the cursor to the top of the current page without bumping
    /// the page index, used when a fresh content area (e.g. a different
    /// page size) replaces the current one mid-document.
    pub fn reset(&mut self, content_area: ContentArea) {
        self.content_area = content_area;
        self.cursor_y = content_area.top;
    }
}
