//! `#RRGGBB` colours and four-role palettes

use crate::io::error::{CamoError, Result};
use crate::pattern::layer::Layer;
use rand::Rng;
use rand::seq::SliceRandom;
use std::fmt;
use std::str::FromStr;

/// Opaque 8-bit RGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Color {
    /// Create a colour from its channels
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a colour from a packed `0xRRGGBB` value
    pub const fn from_rgb_u32(packed: u32) -> Self {
        Self {
            r: (packed >> 16) as u8,
            g: (packed >> 8) as u8,
            b: packed as u8,
        }
    }

    /// Parse a `#RRGGBB` string, hex digits in either case
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a `#` followed by exactly six
    /// hex digits
    pub fn from_hex(value: &str) -> Result<Self> {
        let invalid = |reason: &str| CamoError::InvalidColor {
            value: value.to_string(),
            reason: reason.to_string(),
        };

        let digits = value
            .strip_prefix('#')
            .ok_or_else(|| invalid("expected a leading '#'"))?;
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid("expected exactly six hex digits"));
        }

        let packed = u32::from_str_radix(digits, 16).map_err(|e| invalid(&e.to_string()))?;
        Ok(Self::from_rgb_u32(packed))
    }

    /// Serialize as lowercase `#rrggbb`
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Uniformly random colour
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new(rng.random(), rng.random(), rng.random())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = CamoError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl From<Color> for image::Rgb<u8> {
    fn from(color: Color) -> Self {
        Self([color.r, color.g, color.b])
    }
}

/// Role of a colour within a palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaletteRole {
    /// Background the canvas is cleared to
    Base,
    /// Colour painted by one of the pattern layers
    Layer(Layer),
}

impl PaletteRole {
    /// All roles in palette order
    pub const ALL: [Self; 4] = [
        Self::Base,
        Self::Layer(Layer::First),
        Self::Layer(Layer::Second),
        Self::Layer(Layer::Third),
    ];

    /// Role name as used in colour assignments (`base`, `layer1`, ...)
    pub const fn name(self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::Layer(layer) => layer.name(),
        }
    }
}

impl fmt::Display for PaletteRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PaletteRole {
    type Err = CamoError;

    fn from_str(s: &str) -> Result<Self> {
        let lowered = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|role| role.name() == lowered)
            .ok_or_else(|| {
                crate::io::error::invalid_parameter(
                    "role",
                    &s,
                    &"expected one of base, layer1, layer2, layer3",
                )
            })
    }
}

/// Base colour plus one colour per pattern layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Background colour
    pub base: Color,
    /// Colours painted by layers 1 to 3
    pub layers: [Color; 3],
}

impl Palette {
    /// Create a palette from its four colours
    pub const fn new(base: Color, layer1: Color, layer2: Color, layer3: Color) -> Self {
        Self {
            base,
            layers: [layer1, layer2, layer3],
        }
    }

    /// Colour painted by `layer`
    pub const fn layer(&self, layer: Layer) -> Color {
        match layer {
            Layer::First => self.layers[0],
            Layer::Second => self.layers[1],
            Layer::Third => self.layers[2],
        }
    }

    /// Colour assigned to `role`
    pub const fn get(&self, role: PaletteRole) -> Color {
        match role {
            PaletteRole::Base => self.base,
            PaletteRole::Layer(layer) => self.layer(layer),
        }
    }

    /// Assign `color` to `role`
    pub fn set(&mut self, role: PaletteRole, color: Color) {
        match role {
            PaletteRole::Base => self.base = color,
            PaletteRole::Layer(layer) => {
                if let Some(slot) = self.layers.get_mut(layer.index()) {
                    *slot = color;
                }
            }
        }
    }

    /// Replace the colour of `role` with a random one
    pub fn randomize<R: Rng + ?Sized>(&mut self, role: PaletteRole, rng: &mut R) {
        self.set(role, Color::random(rng));
    }

    /// Randomly permute the four colours across the roles
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let mut colors = PaletteRole::ALL.map(|role| self.get(role));
        colors.shuffle(rng);
        for (role, color) in PaletteRole::ALL.into_iter().zip(colors) {
            self.set(role, color);
        }
    }
}
