use anyhow::Result;
use log::debug;
use std::{
    fs,
    path::{Path, PathBuf},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Png,
    Svg,
}

impl Format {
    pub fn extension(&self) -> &'static str {
        match self {
            Format::Png => "png",
            Format::Svg => "svg",
        }
    }
}

/// 渲染好的单个图标, 写出后即丢弃
#[derive(Debug, Clone)]
pub struct Asset {
    pub size: u32,
    pub format: Format,
    pub bytes: Vec<u8>,
}

impl Asset {
    pub fn file_name(&self) -> String {
        file_name(self.size, self.format)
    }
}

pub fn file_name(size: u32, format: Format) -> String {
    format!("icon-{size}.{}", format.extension())
}

/// 图标的写出边界
pub trait AssetSink {
    fn write(&mut self, file_name: &str, bytes: &[u8]) -> Result<PathBuf>;
}

/// 写入目录, 已有同名文件直接覆盖
#[derive(Debug)]
pub struct DirSink {
    dir: PathBuf,
}

impl DirSink {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }
}

impl AssetSink for DirSink {
    fn write(&mut self, file_name: &str, bytes: &[u8]) -> Result<PathBuf> {
        let path = self.dir.join(file_name);
        fs::write(&path, bytes)?;
        debug!("wrote {} ({} bytes)", path.display(), bytes.len());
        Ok(path)
    }
}

#[derive(Debug, Default)]
pub struct MemorySink {
    pub files: Vec<(String, Vec<u8>)>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn names(&self) -> Vec<&str> {
        self.files.iter().map(|(name, _)| name.as_str()).collect()
    }

    pub fn get(&self, file_name: &str) -> Option<&[u8]> {
        self.files
            .iter()
            .find(|(name, _)| name == file_name)
            .map(|(_, bytes)| bytes.as_slice())
    }
}

impl AssetSink for MemorySink {
    fn write(&mut self, file_name: &str, bytes: &[u8]) -> Result<PathBuf> {
        match self.files.iter_mut().find(|(name, _)| name == file_name) {
            Some((_, existing)) => *existing = bytes.to_vec(),
            None => self.files.push((file_name.to_string(), bytes.to_vec())),
        }
        Ok(PathBuf::from(file_name))
    }
}
