// Copyright (c) 2026 rezky_nightky

mod animation;
mod banner;
mod charset;
mod config;
mod palette;
mod rain;
mod runtime;
mod surface;
mod terminal;

use std::env;
use std::io;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Duration;

#[cfg(windows)]
use std::sync::atomic::Ordering;

use clap::builder::styling::{AnsiColor as ClapAnsiColor, Color as ClapColor};
use clap::builder::styling::{Effects as ClapEffects, Style as ClapStyle};
use clap::builder::Styles as ClapStyles;
use clap::{CommandFactory, FromArgMatches};
use rand::{rngs::StdRng, SeedableRng};

#[cfg(unix)]
use signal_hook::consts::{SIGHUP, SIGINT, SIGTERM};
#[cfg(unix)]
use signal_hook::flag;

use crate::animation::{AnimationLoop, LoopConfig};
use crate::charset::{build_glyphs, charset_from_str};
use crate::config::{print_list_charsets, print_list_colors, Args, EffectConfig};
use crate::palette::build_palette;
use crate::rain::Rain;
use crate::runtime::{ColorMode, ColorScheme};
use crate::surface::Surface;
use crate::terminal::{detect_size, restore_terminal_best_effort};

fn build_info() -> &'static str {
    env!("DOWNPOUR_BUILD")
}

fn clap_styles() -> ClapStyles {
    ClapStyles::styled()
        .header(
            ClapStyle::new()
                .effects(ClapEffects::BOLD)
                .fg_color(Some(ClapColor::Ansi(ClapAnsiColor::Cyan))),
        )
        .usage(
            ClapStyle::new()
                .effects(ClapEffects::BOLD)
                .fg_color(Some(ClapColor::Ansi(ClapAnsiColor::Green))),
        )
        .literal(ClapStyle::new().fg_color(Some(ClapColor::Ansi(ClapAnsiColor::Yellow))))
        .placeholder(ClapStyle::new().fg_color(Some(ClapColor::Ansi(ClapAnsiColor::Magenta))))
}

fn require_u64_range(name: &str, v: u64, min: u64, max: u64) -> u64 {
    if v < min || v > max {
        eprintln!("failed to apply {} {} (min {} max {})", name, v, min, max);
        std::process::exit(1);
    }
    v
}

fn default_to_ascii() -> bool {
    let lang = env::var("LANG").unwrap_or_default();
    !lang.to_ascii_uppercase().contains("UTF")
}

fn detect_color_mode_auto() -> ColorMode {
    let colorterm = env::var("COLORTERM")
        .unwrap_or_default()
        .to_ascii_lowercase();
    if colorterm.contains("truecolor") || colorterm.contains("24bit") {
        return ColorMode::TrueColor;
    }

    let term = env::var("TERM").unwrap_or_default().to_ascii_lowercase();
    if term == "dumb" {
        return ColorMode::Mono;
    }

    ColorMode::Color256
}

fn detect_color_mode(args: &Args) -> ColorMode {
    if let Some(m) = args.colormode {
        return match m {
            0 => ColorMode::Mono,
            8 => ColorMode::Color256,
            24 => ColorMode::TrueColor,
            _ => {
                eprintln!("invalid --colormode: {} (allowed: 0,8,24)", m);
                std::process::exit(1);
            }
        };
    }

    detect_color_mode_auto()
}

fn parse_color_scheme(s: &str) -> Result<ColorScheme, String> {
    match s.trim().to_ascii_lowercase().as_str() {
        "green" => Ok(ColorScheme::Green),
        "gold" | "amber" => Ok(ColorScheme::Gold),
        "red" => Ok(ColorScheme::Red),
        "blue" => Ok(ColorScheme::Blue),
        "cyan" => Ok(ColorScheme::Cyan),
        "purple" => Ok(ColorScheme::Purple),
        "gray" | "grey" => Ok(ColorScheme::Gray),
        "snow" => Ok(ColorScheme::Snow),
        _ => Err(format!("invalid color: {} (see --list-colors)", s)),
    }
}

fn main() -> io::Result<()> {
    std::panic::set_hook(Box::new(|info| {
        restore_terminal_best_effort();
        eprintln!("{}", info);
    }));

    let shutdown = Arc::new(AtomicBool::new(false));

    #[cfg(unix)]
    {
        for sig in [SIGINT, SIGTERM, SIGHUP] {
            if let Err(e) = flag::register(sig, Arc::clone(&shutdown)) {
                eprintln!("failed to install signal handler: {}", e);
            }
        }
    }

    #[cfg(windows)]
    {
        let requested = Arc::clone(&shutdown);
        if let Err(e) = ctrlc::set_handler(move || {
            requested.store(true, Ordering::SeqCst);
        }) {
            eprintln!("failed to install Ctrl-C handler: {}", e);
        }
    }

    let cmd = Args::command().styles(clap_styles());
    let matches = cmd.get_matches();
    let args = Args::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    if args.list_charsets {
        print_list_charsets();
        return Ok(());
    }

    if args.list_colors {
        print_list_colors();
        return Ok(());
    }

    if args.version {
        println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    if args.info {
        println!("Version: v{}", env!("CARGO_PKG_VERSION"));
        println!("Build: {}", build_info());
        println!("Copyright: (c) 2026 {}", env!("CARGO_PKG_AUTHORS"));
        println!("License: {}", env!("CARGO_PKG_LICENSE"));
        println!("Source: {}", env!("CARGO_PKG_REPOSITORY"));
        return Ok(());
    }

    let tick_ms = require_u64_range("--tick-ms", args.tick_ms, 1, 1000);
    let color_mode = detect_color_mode(&args);

    let scheme = match parse_color_scheme(&args.color) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    let def_ascii = default_to_ascii();
    let glyphs = match &args.glyphs {
        Some(spec) => {
            let list: Vec<char> = spec.chars().collect();
            if list.is_empty() {
                eprintln!("--glyphs: empty glyph set");
                std::process::exit(1);
            }
            list
        }
        None => {
            let cs = match charset_from_str(&args.charset, def_ascii) {
                Ok(c) => c,
                Err(e) => {
                    eprintln!("{}", e);
                    std::process::exit(1);
                }
            };
            build_glyphs(cs, def_ascii)
        }
    };

    let cfg = EffectConfig {
        error_mode: false,
        tick: Duration::from_millis(tick_ms),
        glyphs,
        palette: build_palette(scheme, color_mode),
    };

    let (columns, lines) = detect_size();

    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let EffectConfig {
        error_mode,
        tick,
        glyphs,
        palette,
    } = cfg;

    let surface = Surface::new(columns, lines, palette);
    let rain = Rain::new(columns, lines, glyphs, error_mode, rng);
    let loop_cfg = LoopConfig {
        tick,
        banner: !args.no_banner,
        ..LoopConfig::default()
    };

    let mut animation = AnimationLoop::new(surface, rain, loop_cfg, shutdown, io::stdout());
    match animation.run() {
        Ok(()) => Ok(()),
        Err(e) => {
            // Broken pipe and friends: fatal, but leave the cursor
            // visible on the way out.
            restore_terminal_best_effort();
            Err(e)
        }
    }
}
