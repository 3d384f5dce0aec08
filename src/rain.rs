// Copyright (c) 2026 rezky_nightky

use rand::{
    distr::{Distribution, Uniform},
    rngs::StdRng,
};

use crate::palette::Tier;
use crate::surface::Surface;

const SPEED_LOW: f32 = 0.5;
const SPEED_HIGH: f32 = 1.5;
const TRAIL_LOW: u16 = 5;
const TRAIL_HIGH: u16 = 25;

/// One falling column: head position, fall-rate multiplier, and how many
/// rows behind the head stay lit.
#[derive(Clone, Copy, Debug)]
pub struct ColumnState {
    drop_position: u32,
    speed: f32,
    trail_length: u16,
}

impl ColumnState {
    /// How many frames pass between head advances. Slow columns skip
    /// more frames: speed 0.5 -> every 4th frame, speed 1.5 -> every
    /// frame.
    pub fn skip_interval(&self) -> u64 {
        ((2.0 / self.speed) as u64).max(1)
    }

    #[allow(dead_code)]
    pub fn drop_position(&self) -> u32 {
        self.drop_position
    }

    #[allow(dead_code)]
    pub fn speed(&self) -> f32 {
        self.speed
    }

    #[allow(dead_code)]
    pub fn trail_length(&self) -> u16 {
        self.trail_length
    }
}

/// Color tier for a trail cell `offset` rows behind the head. The alert
/// override paints the whole trail in the alert color; only the exit
/// screen uses it.
pub fn tier_for_offset(offset: u16, error_mode: bool) -> Tier {
    if error_mode {
        Tier::Alert
    } else if offset == 0 {
        Tier::Bright
    } else if offset < 3 {
        Tier::Mid
    } else {
        Tier::Dim
    }
}

/// Drives every column of the rain one tick at a time. Column resets and
/// per-cell glyph choice both draw from the one injected rng, so a fixed
/// seed replays the exact same frames.
pub struct Rain {
    lines: u16,
    columns: Vec<ColumnState>,
    glyphs: Vec<char>,
    error_mode: bool,
    rng: StdRng,
    rand_speed: Uniform<f32>,
    rand_trail: Uniform<u16>,
    rand_glyph: Uniform<usize>,
}

impl Rain {
    pub fn new(
        columns: u16,
        lines: u16,
        glyphs: Vec<char>,
        error_mode: bool,
        mut rng: StdRng,
    ) -> Self {
        let mut glyphs = glyphs;
        if glyphs.is_empty() {
            glyphs.push('0');
            glyphs.push('1');
        }

        let rand_speed = Uniform::new_inclusive(SPEED_LOW, SPEED_HIGH).expect("valid range");
        let rand_trail = Uniform::new_inclusive(TRAIL_LOW, TRAIL_HIGH).expect("valid range");
        let rand_glyph = Uniform::new_inclusive(0, glyphs.len() - 1).expect("valid range");

        let mut states = Vec::with_capacity(columns as usize);
        for _ in 0..columns {
            states.push(ColumnState {
                drop_position: 0,
                speed: rand_speed.sample(&mut rng),
                trail_length: rand_trail.sample(&mut rng),
            });
        }

        Self {
            lines,
            columns: states,
            glyphs,
            error_mode,
            rng,
            rand_speed,
            rand_trail,
            rand_glyph,
        }
    }

    #[allow(dead_code)]
    pub fn columns(&self) -> &[ColumnState] {
        &self.columns
    }

    pub fn set_error_mode(&mut self, on: bool) {
        self.error_mode = on;
    }

    /// Advance one column by one tick and paint its trail into the
    /// surface.
    pub fn advance_column(&mut self, col: u16, frame: u64, surface: &mut Surface) {
        let i = col as usize;

        if frame % self.columns[i].skip_interval() == 0 {
            self.columns[i].drop_position += 1;
        }

        // Trail fully below the bottom edge: restart from the top with a
        // fresh speed and length.
        if self.columns[i].drop_position > self.lines as u32 + self.columns[i].trail_length as u32 {
            self.columns[i].drop_position = 0;
            self.columns[i].speed = self.rand_speed.sample(&mut self.rng);
            self.columns[i].trail_length = self.rand_trail.sample(&mut self.rng);
        }

        let drop = self.columns[i].drop_position;
        let trail = self.columns[i].trail_length;
        for offset in 0..trail {
            let Some(row) = drop.checked_sub(offset as u32) else {
                break;
            };
            if row >= self.lines as u32 {
                continue;
            }
            let glyph = self.glyphs[self.rand_glyph.sample(&mut self.rng)];
            surface.set_cell(
                row as u16,
                col,
                glyph,
                tier_for_offset(offset, self.error_mode),
            );
        }
    }

    /// One simulation tick across every column, in ascending column
    /// order so a fixed seed reproduces the frame exactly.
    pub fn advance_all(&mut self, frame: u64, surface: &mut Surface) {
        for col in 0..self.columns.len() as u16 {
            self.advance_column(col, frame, surface);
        }
    }
}
