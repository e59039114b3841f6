use anyhow::Result;
use log::{debug, info};
use std::{io::Write, path::PathBuf};

use crate::{
    capability::Strategy,
    config::Config,
    output::{Asset, AssetSink, Format},
    palette::Palette,
    vector,
};

pub const SUMMARY_LINE: &str = "🎨 PWA icons created successfully!";
pub const FALLBACK_WARNING: &str = "⚠️  Bitmap rendering unavailable. Creating SVG icons instead...";

#[cfg(feature = "bitmap")]
pub fn bitmap_asset(size: u32, palette: &Palette) -> Result<Asset> {
    let img = crate::bitmap::render_bitmap(size, palette)?;
    Ok(Asset {
        size,
        format: Format::Png,
        bytes: crate::bitmap::encode_png(&img)?,
    })
}

pub fn vector_asset(size: u32, palette: &Palette) -> Result<Asset> {
    Ok(Asset {
        size,
        format: Format::Svg,
        bytes: vector::render_svg(size, palette)?.into_bytes(),
    })
}

/// 逐个尺寸渲染并写出 PNG, 出错立即返回, 已写出的文件保留
#[cfg(feature = "bitmap")]
pub fn render_bitmap_icons(
    config: &Config,
    sink: &mut dyn AssetSink,
    out: &mut dyn Write,
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(config.bitmap_sizes.len());
    for &size in &config.bitmap_sizes {
        let asset = bitmap_asset(size, &config.palette)?;
        written.push(emit(&asset, sink, out)?);
    }

    writeln!(out)?;
    writeln!(out, "{SUMMARY_LINE}")?;
    info!("generated {} bitmap icons", written.len());
    Ok(written)
}

pub fn render_vector_icons(
    config: &Config,
    sink: &mut dyn AssetSink,
    out: &mut dyn Write,
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(config.vector_sizes.len());
    for &size in &config.vector_sizes {
        let asset = vector_asset(size, &config.palette)?;
        written.push(emit(&asset, sink, out)?);
    }

    info!("generated {} vector icons", written.len());
    Ok(written)
}

pub fn run(
    config: &Config,
    strategy: Strategy,
    sink: &mut dyn AssetSink,
    out: &mut dyn Write,
) -> Result<Vec<PathBuf>> {
    config.validate()?;
    debug!("rendering with {strategy:?}");

    match strategy {
        #[cfg(feature = "bitmap")]
        Strategy::Bitmap => render_bitmap_icons(config, sink, out),
        #[cfg(not(feature = "bitmap"))]
        Strategy::Bitmap => {
            log::warn!("bitmap strategy requested without the bitmap feature");
            fallback(config, sink, out)
        },
        Strategy::Vector => fallback(config, sink, out),
    }
}

fn fallback(
    config: &Config,
    sink: &mut dyn AssetSink,
    out: &mut dyn Write,
) -> Result<Vec<PathBuf>> {
    writeln!(out, "{FALLBACK_WARNING}")?;
    render_vector_icons(config, sink, out)
}

fn emit(asset: &Asset, sink: &mut dyn AssetSink, out: &mut dyn Write) -> Result<PathBuf> {
    let name = asset.file_name();
    let path = sink.write(&name, &asset.bytes)?;
    writeln!(out, "✅ Created: {name}")?;
    Ok(path)
}
