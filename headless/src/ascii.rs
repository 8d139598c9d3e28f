//! Text rendering of a frame, one character per grid cell

use game_core::{Color, Surface};

pub struct AsciiSurface {
    cols: usize,
    rows: usize,
    cell: f32,
    cells: Vec<char>,
}

impl AsciiSurface {
    pub fn new(width: f32, height: f32, cell: f32) -> Self {
        let cols = (width / cell).ceil().max(1.0) as usize;
        let rows = (height / cell).ceil().max(1.0) as usize;
        Self {
            cols,
            rows,
            cell,
            cells: vec![' '; cols * rows],
        }
    }

    fn glyph(color: Color) -> char {
        match color {
            Color::White => '#',
            Color::LightGrey => ':',
        }
    }

    /// Cell range covered by `[start, start + len)` pixels, clipped to `limit`
    fn span(&self, start: f32, len: f32, limit: usize) -> std::ops::Range<usize> {
        let from = (start / self.cell).floor().max(0.0) as usize;
        let to = ((start + len) / self.cell).ceil().max(0.0) as usize;
        from.min(limit)..to.min(limit)
    }

    pub fn render(&self) -> String {
        self.cells
            .chunks(self.cols)
            .map(|row| row.iter().collect::<String>().trim_end().to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Surface for AsciiSurface {
    fn clear(&mut self) {
        self.cells.fill(' ');
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        let glyph = Self::glyph(color);
        for row in self.span(y, h, self.rows) {
            for col in self.span(x, w, self.cols) {
                self.cells[row * self.cols + col] = glyph;
            }
        }
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, _font: &str, _color: Color) {
        // y is the text baseline
        let row = ((y / self.cell).floor() as usize).saturating_sub(1);
        let col = (x / self.cell).floor() as usize;
        if row >= self.rows {
            return;
        }
        for (i, ch) in text.chars().enumerate() {
            if col + i < self.cols {
                self.cells[row * self.cols + col + i] = ch;
            }
        }
    }
}
