// Copyright (c) 2026 rezky_nightky

use std::io::IsTerminal;
use std::time::Duration;

use clap::Parser;

use crate::palette::Palette;

/// Resolved animation parameters. `error_mode` is off for normal
/// animation; the exit screen flips it to repaint the final frame in the
/// alert color.
#[derive(Clone, Debug)]
pub struct EffectConfig {
    pub error_mode: bool,
    pub tick: Duration,
    pub glyphs: Vec<char>,
    pub palette: Palette,
}

pub fn color_enabled_stdout() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if matches!(std::env::var("CLICOLOR").ok().as_deref(), Some("0")) {
        return false;
    }
    std::io::stdout().is_terminal()
}

#[derive(Parser, Debug, Clone)]
#[command(name = "downpour", version, disable_version_flag = true)]
pub struct Args {
    #[arg(
        short = 'c',
        long = "color",
        default_value = "green",
        help_heading = "APPEARANCE",
        help = "Color theme (see --list-colors)"
    )]
    pub color: String,

    #[arg(
        long = "colormode",
        help_heading = "APPEARANCE",
        help = "Force color mode (0=mono, 8=256-color, 24=truecolor); auto-detected otherwise"
    )]
    pub colormode: Option<u8>,

    #[arg(
        long = "charset",
        default_value = "auto",
        help_heading = "APPEARANCE",
        help = "Charset preset (see --list-charsets)"
    )]
    pub charset: String,

    #[arg(
        long = "glyphs",
        help_heading = "APPEARANCE",
        help = "Literal glyph override, e.g. --glyphs \"01\" (advanced)"
    )]
    pub glyphs: Option<String>,

    #[arg(
        short = 't',
        long = "tick-ms",
        default_value_t = 50,
        help_heading = "PERFORMANCE",
        help = "Frame tick in milliseconds (min 1 max 1000)"
    )]
    pub tick_ms: u64,

    #[arg(
        long = "seed",
        help_heading = "GENERAL",
        help = "Seed the random stream for a reproducible run"
    )]
    pub seed: Option<u64>,

    #[arg(
        long = "no-banner",
        help_heading = "GENERAL",
        help = "Skip the intro and exit banners"
    )]
    pub no_banner: bool,

    #[arg(
        long = "list-charsets",
        help_heading = "HELP",
        help = "List available charset presets and exit"
    )]
    pub list_charsets: bool,

    #[arg(
        long = "list-colors",
        help_heading = "HELP",
        help = "List available color themes and exit"
    )]
    pub list_colors: bool,

    #[arg(
        long = "version",
        short = 'v',
        help_heading = "HELP",
        help = "Print version and exit"
    )]
    pub version: bool,

    #[arg(
        long = "info",
        short = 'i',
        help_heading = "HELP",
        help = "Print version info and exit"
    )]
    pub info: bool,
}

pub fn print_list_charsets() {
    if color_enabled_stdout() {
        println!("\x1b[1;36mAVAILABLE CHARSET PRESETS:\x1b[0m");
    } else {
        println!("AVAILABLE CHARSET PRESETS:");
    }
    println!();
    println!("VALUE        DESCRIPTION");
    println!("auto         Auto-select (ascii when LANG is non-UTF, otherwise matrix)");
    println!("matrix       Katakana + digits + symbols");
    println!("ascii        Letters + digits + punctuation");
    println!("english      Letters only");
    println!("digits       Digits only (aliases: dec, decimal)");
    println!("punc         Punctuation only");
    println!("binary       0 and 1 (aliases: bin, 01)");
    println!("hex          0-9 and A-F (alias: hexadecimal)");
    println!("katakana     Half-width katakana");
    println!("greek        Greek");
    println!("cyrillic     Cyrillic");
    println!("symbols      The classic rain punctuation");
}

pub fn print_list_colors() {
    if color_enabled_stdout() {
        println!("\x1b[1;36mAVAILABLE COLOR THEMES:\x1b[0m");
    } else {
        println!("AVAILABLE COLOR THEMES:");
    }
    println!();
    println!("VALUE        DESCRIPTION");
    println!("green        The classic green rain");
    println!("gold         Amber monitor");
    println!("red          Red alert");
    println!("blue         Deep blue");
    println!("cyan         Ice cyan");
    println!("purple       Violet haze");
    println!("gray         Grayscale (alias: grey)");
    println!("snow         Cold white-blue");
}
