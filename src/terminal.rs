// Copyright (c) 2026 rezky_nightky

use std::io::{stdout, Write};

use crossterm::{
    cursor,
    style::{Attribute, ResetColor, SetAttribute},
    terminal, ExecutableCommand,
};

pub const DEFAULT_COLUMNS: u16 = 80;
pub const DEFAULT_LINES: u16 = 24;

/// Query the hosting terminal's dimensions. Headless or otherwise
/// size-less environments silently get the classic 80x24.
pub fn detect_size() -> (u16, u16) {
    match terminal::size() {
        Ok((columns, lines)) if columns > 0 && lines > 0 => (columns, lines),
        _ => (DEFAULT_COLUMNS, DEFAULT_LINES),
    }
}

/// Put the terminal back in a usable state no matter what happened.
/// Called from the panic hook and from fatal output-error paths; the
/// normal shutdown sequence restores the cursor itself.
pub fn restore_terminal_best_effort() {
    let mut out = stdout();
    let _ = out.execute(SetAttribute(Attribute::Reset));
    let _ = out.execute(ResetColor);
    let _ = out.execute(cursor::Show);
    let _ = out.flush();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_size_never_reports_a_degenerate_terminal() {
        let (columns, lines) = detect_size();
        assert!(columns > 0);
        assert!(lines > 0);
    }
}
