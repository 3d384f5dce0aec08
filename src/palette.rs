// Copyright (c) 2026 rezky_nightky

use crossterm::style::Color;

use crate::runtime::{ColorMode, ColorScheme};

/// Color class of one cell. The simulator writes tiers; the palette maps
/// them to concrete colors at render time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tier {
    Blank,
    Dim,
    Mid,
    Bright,
    Alert,
}

/// The four foreground tiers of one theme. `None` renders as the plain
/// terminal foreground (mono mode, and every `Tier::Blank` cell).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub dim: Option<Color>,
    pub mid: Option<Color>,
    pub bright: Option<Color>,
    pub alert: Option<Color>,
}

impl Palette {
    pub fn color(&self, tier: Tier) -> Option<Color> {
        match tier {
            Tier::Blank => None,
            Tier::Dim => self.dim,
            Tier::Mid => self.mid,
            Tier::Bright => self.bright,
            Tier::Alert => self.alert,
        }
    }
}

const MONO: Palette = Palette {
    dim: None,
    mid: None,
    bright: None,
    alert: None,
};

fn from_ansi(list: [u8; 4]) -> Palette {
    let [dim, mid, bright, alert] = list;
    Palette {
        dim: Some(Color::AnsiValue(dim)),
        mid: Some(Color::AnsiValue(mid)),
        bright: Some(Color::AnsiValue(bright)),
        alert: Some(Color::AnsiValue(alert)),
    }
}

fn from_rgb(list: [(u8, u8, u8); 4]) -> Palette {
    let rgb = |(r, g, b)| Some(Color::Rgb { r, g, b });
    let [dim, mid, bright, alert] = list;
    Palette {
        dim: rgb(dim),
        mid: rgb(mid),
        bright: rgb(bright),
        alert: rgb(alert),
    }
}

pub fn build_palette(scheme: ColorScheme, mode: ColorMode) -> Palette {
    if mode == ColorMode::Mono {
        return MONO;
    }

    // Tier order: [dim, mid, bright, alert].
    match scheme {
        ColorScheme::Green => match mode {
            ColorMode::TrueColor => from_rgb([
                (0, 95, 0),
                (0, 215, 0),
                (95, 255, 135),
                (255, 85, 85),
            ]),
            _ => from_ansi([22, 40, 46, 196]),
        },
        ColorScheme::Gold => match mode {
            ColorMode::TrueColor => from_rgb([
                (95, 75, 0),
                (215, 175, 0),
                (255, 230, 120),
                (255, 85, 85),
            ]),
            _ => from_ansi([94, 178, 228, 196]),
        },
        ColorScheme::Red => match mode {
            ColorMode::TrueColor => from_rgb([
                (95, 0, 0),
                (215, 0, 0),
                (255, 135, 135),
                (255, 255, 255),
            ]),
            _ => from_ansi([52, 160, 217, 231]),
        },
        ColorScheme::Blue => match mode {
            ColorMode::TrueColor => from_rgb([
                (0, 0, 135),
                (0, 95, 255),
                (135, 175, 255),
                (255, 85, 85),
            ]),
            _ => from_ansi([18, 27, 111, 196]),
        },
        ColorScheme::Cyan => match mode {
            ColorMode::TrueColor => from_rgb([
                (0, 95, 95),
                (0, 175, 215),
                (135, 255, 255),
                (255, 85, 85),
            ]),
            _ => from_ansi([24, 38, 123, 196]),
        },
        ColorScheme::Purple => match mode {
            ColorMode::TrueColor => from_rgb([
                (95, 0, 135),
                (135, 95, 255),
                (215, 175, 255),
                (255, 85, 85),
            ]),
            _ => from_ansi([54, 99, 183, 196]),
        },
        ColorScheme::Gray => match mode {
            ColorMode::TrueColor => from_rgb([
                (88, 88, 88),
                (168, 168, 168),
                (255, 255, 255),
                (255, 85, 85),
            ]),
            _ => from_ansi([240, 248, 231, 196]),
        },
        ColorScheme::Snow => match mode {
            ColorMode::TrueColor => from_rgb([
                (100, 120, 140),
                (175, 215, 255),
                (255, 255, 255),
                (255, 85, 85),
            ]),
            _ => from_ansi([67, 153, 231, 196]),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mono_mode_carries_no_color() {
        for scheme in [ColorScheme::Green, ColorScheme::Red, ColorScheme::Snow] {
            let p = build_palette(scheme, ColorMode::Mono);
            assert_eq!(p.color(Tier::Dim), None);
            assert_eq!(p.color(Tier::Mid), None);
            assert_eq!(p.color(Tier::Bright), None);
            assert_eq!(p.color(Tier::Alert), None);
        }
    }

    #[test]
    fn blank_tier_is_always_colorless() {
        let p = build_palette(ColorScheme::Green, ColorMode::TrueColor);
        assert_eq!(p.color(Tier::Blank), None);
    }

    #[test]
    fn colored_modes_keep_the_tiers_distinct() {
        for mode in [ColorMode::Color256, ColorMode::TrueColor] {
            let p = build_palette(ColorScheme::Green, mode);
            assert_ne!(p.color(Tier::Dim), p.color(Tier::Mid));
            assert_ne!(p.color(Tier::Mid), p.color(Tier::Bright));
            assert_ne!(p.color(Tier::Bright), p.color(Tier::Alert));
        }
    }
}
