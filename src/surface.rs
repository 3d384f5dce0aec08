// Copyright (c) 2026 rezky_nightky

use std::io::{self, Write};

use crossterm::{
    cursor,
    style::{Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};

use crate::palette::{Palette, Tier};

/// The character and color buffers for one terminal, sized once at
/// startup and redrawn whole every frame.
///
/// `glyphs` and `tiers` are parallel row-major buffers of identical
/// length; every cell holds exactly one glyph and one tier.
pub struct Surface {
    columns: u16,
    lines: u16,
    glyphs: Vec<char>,
    tiers: Vec<Tier>,
    palette: Palette,
}

impl Surface {
    pub fn new(columns: u16, lines: u16, palette: Palette) -> Self {
        let len = columns as usize * lines as usize;
        Self {
            columns,
            lines,
            glyphs: vec![' '; len],
            tiers: vec![Tier::Blank; len],
            palette,
        }
    }

    pub fn columns(&self) -> u16 {
        self.columns
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Reset every cell to a blank glyph and the reset color tag.
    pub fn clear(&mut self) {
        self.glyphs.fill(' ');
        self.tiers.fill(Tier::Blank);
    }

    fn index(&self, row: u16, col: u16) -> Option<usize> {
        if row >= self.lines || col >= self.columns {
            return None;
        }
        Some(row as usize * self.columns as usize + col as usize)
    }

    /// Write one cell. Callers clip to the buffer; anything out of range
    /// is ignored.
    pub fn set_cell(&mut self, row: u16, col: u16, glyph: char, tier: Tier) {
        if let Some(i) = self.index(row, col) {
            self.glyphs[i] = glyph;
            self.tiers[i] = tier;
        }
    }

    #[allow(dead_code)]
    pub fn glyph_at(&self, row: u16, col: u16) -> Option<char> {
        self.index(row, col).map(|i| self.glyphs[i])
    }

    #[allow(dead_code)]
    pub fn tier_at(&self, row: u16, col: u16) -> Option<Tier> {
        self.index(row, col).map(|i| self.tiers[i])
    }

    /// Emit the whole frame in place: cursor home, then every cell as
    /// color code + glyph. Each line ends with a style reset so colors
    /// never bleed, and every line except the last gets a newline.
    pub fn render<W: Write>(&self, w: &mut W) -> io::Result<()> {
        w.queue(cursor::MoveTo(0, 0))?;
        for row in 0..self.lines {
            for col in 0..self.columns {
                let i = row as usize * self.columns as usize + col as usize;
                match self.palette.color(self.tiers[i]) {
                    Some(color) => w.queue(SetForegroundColor(color))?,
                    None => w.queue(ResetColor)?,
                };
                w.queue(Print(self.glyphs[i]))?;
            }
            w.queue(ResetColor)?;
            if row + 1 < self.lines {
                w.queue(Print('\n'))?;
            }
        }
        w.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::build_palette;
    use crate::runtime::{ColorMode, ColorScheme};

    fn make_surface(columns: u16, lines: u16) -> Surface {
        let palette = build_palette(ColorScheme::Green, ColorMode::Color256);
        Surface::new(columns, lines, palette)
    }

    /// Drop escape sequences, keep what the user would see.
    fn visible(line: &str) -> String {
        let mut out = String::new();
        let mut chars = line.chars();
        while let Some(ch) = chars.next() {
            if ch == '\x1b' {
                for t in chars.by_ref() {
                    if t.is_ascii_alphabetic() {
                        break;
                    }
                }
                continue;
            }
            out.push(ch);
        }
        out
    }

    #[test]
    fn buffers_share_one_shape() {
        let s = make_surface(10, 5);
        for row in 0..5 {
            for col in 0..10 {
                assert!(s.glyph_at(row, col).is_some());
                assert!(s.tier_at(row, col).is_some());
            }
        }
        assert_eq!(s.glyph_at(5, 0), None);
        assert_eq!(s.tier_at(0, 10), None);
    }

    #[test]
    fn clear_covers_every_cell() {
        let mut s = make_surface(4, 3);
        for row in 0..3 {
            for col in 0..4 {
                s.set_cell(row, col, 'X', Tier::Bright);
            }
        }
        s.clear();
        for row in 0..3 {
            for col in 0..4 {
                assert_eq!(s.glyph_at(row, col), Some(' '));
                assert_eq!(s.tier_at(row, col), Some(Tier::Blank));
            }
        }
    }

    #[test]
    fn out_of_range_writes_are_ignored() {
        let mut s = make_surface(4, 3);
        s.set_cell(3, 0, 'X', Tier::Bright);
        s.set_cell(0, 4, 'X', Tier::Bright);
        for row in 0..3 {
            for col in 0..4 {
                assert_eq!(s.glyph_at(row, col), Some(' '));
            }
        }
    }

    #[test]
    fn render_homes_the_cursor_and_shapes_the_frame() {
        let mut s = make_surface(10, 5);
        s.set_cell(0, 0, 'A', Tier::Bright);
        s.set_cell(4, 9, 'Z', Tier::Dim);

        let mut out: Vec<u8> = Vec::new();
        s.render(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("\x1b[1;1H"));

        let rows: Vec<&str> = text.split('\n').collect();
        assert_eq!(rows.len(), 5);
        for row in &rows {
            assert!(row.ends_with("\x1b[0m"));
            assert_eq!(visible(row).chars().count(), 10);
        }
    }

    #[test]
    fn render_tags_every_cell_with_its_tier_color() {
        let mut s = make_surface(3, 1);
        s.set_cell(0, 1, 'M', Tier::Bright);

        let mut out: Vec<u8> = Vec::new();
        s.render(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        // 256-color green theme: bright tier is ansi 46.
        assert!(text.contains("\x1b[38;5;46mM"));
    }
}
