//! Named camouflage modes

use crate::pattern::Algorithm;
use crate::pattern::blob::Turbulence;
use clap::ValueEnum;
use std::fmt;
use std::str::FromStr;

/// Camouflage style selector
///
/// Each mode pairs one of the eight pattern algorithms with its own preset
/// palette and parameters. Woodland and Puzzle share the blob routine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, ValueEnum)]
pub enum Mode {
    /// Directional banded stripes
    TigerStripe,
    /// Correlated four-colour blobs
    Woodland,
    /// Dotted transitions between soft regions
    Flecktarn,
    /// Blobs with nested dark chips
    ChocolateChip,
    /// Soft regions with stippled edges
    Dpm,
    /// Elongated brush strokes with bristle texture
    BrushStroke,
    /// Scratches over blobs over a skin texture
    Lizard,
    /// Blobs with a fixed, gentle turbulence
    Puzzle,
    /// Polygonal wave-interference web
    #[default]
    Kryptek,
}

impl Mode {
    /// Every mode in menu order
    pub const ALL: [Self; 9] = [
        Self::TigerStripe,
        Self::Woodland,
        Self::Flecktarn,
        Self::ChocolateChip,
        Self::Dpm,
        Self::BrushStroke,
        Self::Lizard,
        Self::Puzzle,
        Self::Kryptek,
    ];

    /// Pattern algorithm that renders this mode
    pub const fn algorithm(self) -> Algorithm {
        match self {
            Self::TigerStripe => Algorithm::BandedWave,
            Self::Woodland => Algorithm::BlobFamily(Turbulence::FromFeatB),
            Self::Puzzle => Algorithm::BlobFamily(Turbulence::Fixed(0.5)),
            Self::Flecktarn => Algorithm::DotMaskedRegion,
            Self::ChocolateChip => Algorithm::NestedChip,
            Self::Dpm => Algorithm::RegionalStipple,
            Self::BrushStroke => Algorithm::DirectionalStroke,
            Self::Lizard => Algorithm::CascadedScratch,
            Self::Kryptek => Algorithm::PolygonalInterference,
        }
    }

    /// Kebab-case identifier used on the command line and in file names
    pub const fn name(self) -> &'static str {
        match self {
            Self::TigerStripe => "tiger-stripe",
            Self::Woodland => "woodland",
            Self::Flecktarn => "flecktarn",
            Self::ChocolateChip => "chocolate-chip",
            Self::Dpm => "dpm",
            Self::BrushStroke => "brush-stroke",
            Self::Lizard => "lizard",
            Self::Puzzle => "puzzle",
            Self::Kryptek => "kryptek",
        }
    }

    /// Human-readable title
    pub const fn title(self) -> &'static str {
        match self {
            Self::TigerStripe => "Tiger Stripe Inspired",
            Self::Woodland => "M81 Woodland Inspired",
            Self::Flecktarn => "Flecktarn Inspired",
            Self::ChocolateChip => "Chocolate Chip Inspired",
            Self::Dpm => "British DPM Inspired",
            Self::BrushStroke => "British Brush Stroke Inspired",
            Self::Lizard => "Lizard Inspired",
            Self::Puzzle => "Puzzle Inspired",
            Self::Kryptek => "Kryptek Inspired",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mode {
    type Err = crate::io::error::CamoError;

    fn from_str(s: &str) -> crate::io::error::Result<Self> {
        <Self as ValueEnum>::from_str(s.trim(), true).map_err(|reason| {
            crate::io::error::invalid_parameter("mode", &s, &reason)
        })
    }
}
