use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::{error::IconError, palette::Palette};

pub const BITMAP_SIZES: [u32; 8] = [72, 96, 128, 144, 152, 192, 384, 512];
pub const VECTOR_SIZES: [u32; 2] = [192, 512];

/// 一次生成过程使用的全部常量, 创建后不再修改
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub palette: Palette,
    pub bitmap_sizes: Vec<u32>,
    pub vector_sizes: Vec<u32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            bitmap_sizes: BITMAP_SIZES.to_vec(),
            vector_sizes: VECTOR_SIZES.to_vec(),
        }
    }
}

impl Config {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), IconError> {
        match self.bitmap_sizes.iter().chain(&self.vector_sizes).find(|&&s| s == 0) {
            Some(&size) => Err(IconError::InvalidSize(size)),
            None => Ok(()),
        }
    }
}
