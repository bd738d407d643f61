//! Paginated canvas layout: greedy word wrap over fixed-size pages.
//!
//! Produces positioned words only; `render::pdf` turns them into PDF operators. Layout is
//! pure f32 arithmetic in a fixed order, so identical input, geometry and metrics always
//! yield identical pages.
//!
//! Coordinates are PDF points with the origin at the bottom-left corner.

use serde::Serialize;

use crate::render::emphasis::render_line;
use crate::render::font_metrics::FontMetrics;

/// Page size, margin and vertical rhythm for the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PageGeometry {
    pub width: f32,
    pub height: f32,
    pub margin: f32,
    /// Drop after a wrapped or finished line.
    pub line_spacing: f32,
    /// Drop for an empty input line.
    pub blank_line_spacing: f32,
}

impl PageGeometry {
    /// US Letter, 40pt margins, 10pt line spacing.
    pub fn letter() -> Self {
        Self {
            width: 612.0,
            height: 792.0,
            margin: 40.0,
            line_spacing: 10.0,
            blank_line_spacing: 10.0,
        }
    }

    fn top(&self) -> f32 {
        self.height - self.margin
    }

    fn right_edge(&self) -> f32 {
        self.width - self.margin
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::letter()
    }
}

/// One word drawn at `(x, y)` (baseline start).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedWord {
    pub x: f32,
    pub y: f32,
    pub text: String,
    pub bold: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Page {
    pub words: Vec<PlacedWord>,
}

struct Cursor<'a> {
    geometry: &'a PageGeometry,
    x: f32,
    y: f32,
    current: Page,
    pages: Vec<Page>,
}

impl<'a> Cursor<'a> {
    fn new(geometry: &'a PageGeometry) -> Self {
        Self {
            geometry,
            x: geometry.margin,
            y: geometry.top(),
            current: Page::default(),
            pages: Vec::new(),
        }
    }

    /// Moves down by `dy`, starting a new page once the cursor drops below the margin.
    fn advance(&mut self, dy: f32) {
        self.y -= dy;
        if self.y < self.geometry.margin {
            self.pages.push(std::mem::take(&mut self.current));
            self.y = self.geometry.top();
        }
    }

    fn carriage_return(&mut self) {
        self.x = self.geometry.margin;
    }

    fn place(&mut self, word: &str, bold: bool, width: f32) {
        // Wrap before any word that would cross the right margin, even at the line start.
        if self.x + width > self.geometry.right_edge() {
            self.carriage_return();
            self.advance(self.geometry.line_spacing);
        }
        self.current.words.push(PlacedWord {
            x: self.x,
            y: self.y,
            text: word.to_string(),
            bold,
        });
        self.x += width;
    }

    /// Emits the last page. A page is only emitted empty when the whole document is empty.
    fn finish(mut self) -> Vec<Page> {
        if !self.current.words.is_empty() || self.pages.is_empty() {
            self.pages.push(self.current);
        }
        self.pages
    }
}

/// Lays out lines of `**bold**`-marked text onto pages.
///
/// Each line is trimmed. Empty lines only move the cursor down by `blank_line_spacing`.
pub fn render_paginated_canvas<I, S>(
    lines: I,
    geometry: &PageGeometry,
    metrics: &FontMetrics,
) -> Vec<Page>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut cursor = Cursor::new(geometry);

    for line in lines {
        let line = line.as_ref().trim();
        if line.is_empty() {
            cursor.advance(geometry.blank_line_spacing);
            continue;
        }

        cursor.carriage_return();
        for span in render_line(line) {
            for word in span.text.split_whitespace() {
                let width = metrics.word_width(word, span.bold);
                cursor.place(word, span.bold, width);
            }
        }
        cursor.advance(geometry.line_spacing);
    }

    cursor.finish()
}

/// Trims the whole document, then lays out its lines.
pub fn layout_text(text: &str, geometry: &PageGeometry, metrics: &FontMetrics) -> Vec<Page> {
    render_paginated_canvas(text.trim().split('\n'), geometry, metrics)
}
