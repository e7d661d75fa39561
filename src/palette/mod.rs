//! Colours, palettes and the per-mode preset table

/// `#RRGGBB` colours and four-role palettes
pub mod color;
/// Default palette and parameters for every mode
pub mod presets;

pub use color::{Color, Palette, PaletteRole};
pub use presets::Preset;
