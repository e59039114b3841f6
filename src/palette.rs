use serde::{Deserialize, Serialize};

use crate::error::IconError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// 解析 `#RRGGBB` 形式的颜色, 大小写均可
    pub fn from_hex(value: &str) -> Result<Self, IconError> {
        let invalid = || IconError::InvalidColor(value.to_string());
        let hex = value.strip_prefix('#').ok_or_else(invalid)?;
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    pub fn channels(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl TryFrom<String> for Color {
    type Error = IconError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub background: Color,
    pub primary: Color,
    pub secondary: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            // #1A1A1A
            background: Color::new(0x1A, 0x1A, 0x1A),
            // #4A90E2
            primary: Color::new(0x4A, 0x90, 0xE2),
            // #FFFFFF
            secondary: Color::new(0xFF, 0xFF, 0xFF),
        }
    }
}

impl Palette {
    pub fn colors(&self) -> [Color; 3] {
        [self.background, self.primary, self.secondary]
    }

    pub fn contains(&self, color: Color) -> bool {
        self.colors().contains(&color)
    }
}
