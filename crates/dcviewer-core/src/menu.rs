use std::fmt;

use crate::stretch::StretchTransform;

/// Commands the host window exposes in its menu bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuCommand {
    Open,
    DisplayHeader,
    Exit,
    Scale(StretchTransform),
    License,
    About,
}

/// What the host should do after a command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

impl MenuCommand {
    pub const FILE: &[Self] = &[Self::Open, Self::DisplayHeader, Self::Exit];
    pub const SCALE: &[Self] = &[
        Self::Scale(StretchTransform::Linear),
        Self::Scale(StretchTransform::Logarithmic),
        Self::Scale(StretchTransform::SquareRoot),
    ];
    pub const HELP: &[Self] = &[Self::License, Self::About];
}

impl fmt::Display for MenuCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open => write!(f, "Open FITS file"),
            Self::DisplayHeader => write!(f, "Display Header"),
            Self::Exit => write!(f, "Exit"),
            Self::Scale(t) => write!(f, "{} scale", t.label()),
            Self::License => write!(f, "License"),
            Self::About => write!(f, "About"),
        }
    }
}
