//! Default palette and parameters for every mode
//!
//! Selecting a mode resets the palette, the parameters and the layer
//! visibility to the values in this table.

use crate::palette::{Color, Palette};
use crate::pattern::layer::LayerVisibility;
use crate::pattern::mode::Mode;
use crate::pattern::params::PatternParameters;

/// Defaults applied when a mode is selected
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preset {
    /// Default palette
    pub palette: Palette,
    /// Default pattern parameters
    pub params: PatternParameters,
    /// Default visibility (every layer shown)
    pub visibility: LayerVisibility,
}

const fn entry(colors: [u32; 4], params: PatternParameters) -> Preset {
    Preset {
        palette: Palette::new(
            Color::from_rgb_u32(colors[0]),
            Color::from_rgb_u32(colors[1]),
            Color::from_rgb_u32(colors[2]),
            Color::from_rgb_u32(colors[3]),
        ),
        params,
        visibility: LayerVisibility::all(),
    }
}

/// Preset table, one entry per mode
pub const fn preset(mode: Mode) -> Preset {
    match mode {
        Mode::TigerStripe => entry(
            [0xC3B091, 0x384A20, 0x6F4E37, 0x101010],
            PatternParameters::new(7.0, 80.0, 15.0, 2.0, [3, 5, 3]),
        ),
        Mode::Woodland => entry(
            [0xB0A182, 0x3F4533, 0x4A3224, 0x121212],
            PatternParameters::new(10.0, 120.0, 7.0, 1.0, [6, 4, 2]),
        ),
        Mode::Flecktarn => entry(
            [0x586243, 0x6D5F44, 0x3B422E, 0x181A16],
            PatternParameters::new(15.0, 66.0, 13.0, 25.0, [5, 3, 1]),
        ),
        Mode::ChocolateChip => entry(
            [0xFFFFFF, 0x8B4513, 0x000000, 0xD2B48C],
            PatternParameters::new(60.0, 0.0, 1.0, 0.0, [6, 5, 1]),
        ),
        Mode::Dpm => entry(
            [0xC8B682, 0x575E40, 0x6F482F, 0x151515],
            PatternParameters::new(25.0, 22.0, 0.0, 1.1, [4, 4, 1]),
        ),
        Mode::BrushStroke => entry(
            [0xE0D6AA, 0x788055, 0x8B4513, 0x402518],
            PatternParameters::new(25.0, 40.0, 10.0, 25.0, [6, 5, 4]),
        ),
        Mode::Lizard => entry(
            [0xE2D3A7, 0x4B5F3E, 0x8C583A, 0x3E4435],
            PatternParameters::new(20.0, 30.0, 12.0, 35.0, [6, 5, 2]),
        ),
        Mode::Puzzle => entry(
            [0xD8CBA0, 0x607045, 0x805040, 0x202020],
            PatternParameters::new(35.0, 10.0, 1.0, 0.0, [7, 6, 5]),
        ),
        Mode::Kryptek => entry(
            [0x2B2B2B, 0x4B5320, 0x707850, 0x050505],
            PatternParameters::new(100.0, 200.0, 6.0, 0.0, [5, 5, 5]),
        ),
    }
}

/// Every mode paired with its preset, in menu order
pub fn presets() -> impl Iterator<Item = (Mode, Preset)> {
    Mode::ALL.into_iter().map(|mode| (mode, preset(mode)))
}

impl Mode {
    /// Preset defaults for this mode
    pub const fn preset(self) -> Preset {
        preset(self)
    }
}
