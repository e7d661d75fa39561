//! Non-base pattern layers and their visibility

use clap::ValueEnum;
use std::fmt;

/// One of the three optional colour layers painted over the base
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, ValueEnum)]
pub enum Layer {
    /// First layer, usually the largest coverage
    #[value(name = "layer1")]
    First,
    /// Second layer
    #[value(name = "layer2")]
    Second,
    /// Third layer, usually the darkest accent
    #[value(name = "layer3")]
    Third,
}

impl Layer {
    /// All layers in palette order
    pub const ALL: [Self; 3] = [Self::First, Self::Second, Self::Third];

    /// Zero-based position in palette order
    pub const fn index(self) -> usize {
        match self {
            Self::First => 0,
            Self::Second => 1,
            Self::Third => 2,
        }
    }

    /// Name used on the command line and in palette assignments
    pub const fn name(self) -> &'static str {
        match self {
            Self::First => "layer1",
            Self::Second => "layer2",
            Self::Third => "layer3",
        }
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-layer visibility flags
///
/// Hidden layers are skipped at paint time only; their masks are still
/// computed, so hiding a layer never changes what the other layers paint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerVisibility {
    visible: [bool; 3],
}

impl Default for LayerVisibility {
    fn default() -> Self {
        Self::all()
    }
}

impl LayerVisibility {
    /// Every layer visible
    pub const fn all() -> Self {
        Self {
            visible: [true; 3],
        }
    }

    /// Every layer hidden, leaving only the base colour
    pub const fn none() -> Self {
        Self {
            visible: [false; 3],
        }
    }

    /// Check if `layer` is painted
    pub fn is_visible(&self, layer: Layer) -> bool {
        self.visible.get(layer.index()).copied().unwrap_or(false)
    }

    /// Show or hide `layer`
    pub fn set(&mut self, layer: Layer, visible: bool) {
        if let Some(flag) = self.visible.get_mut(layer.index()) {
            *flag = visible;
        }
    }

    /// Copy with `layer` hidden
    #[must_use]
    pub fn hiding(mut self, layer: Layer) -> Self {
        self.set(layer, false);
        self
    }
}
