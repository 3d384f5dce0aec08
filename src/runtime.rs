// Copyright (c) 2026 rezky_nightky

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorMode {
    Mono,
    Color256,
    TrueColor,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorScheme {
    Green,
    Gold,
    Red,
    Blue,
    Cyan,
    Purple,
    Gray,
    Snow,
}

/// Lifecycle of the animation loop. `Terminated` is reached only through
/// the shutdown flag; the loop has no other exit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    Idle,
    Running,
    Terminated,
}
