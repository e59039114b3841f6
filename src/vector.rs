use anyhow::Result;

use crate::{error::IconError, geometry::Logo, palette::Palette};

pub fn render_svg(size: u32, palette: &Palette) -> Result<String> {
    if size == 0 {
        return Err(IconError::InvalidSize(size).into());
    }

    let logo = Logo::for_size(size);
    let c = logo.center;
    let bg = palette.background.to_hex();
    let [(x1, y1), (x2, y2), (x3, y3)] = logo.play_vertices();

    Ok(format!(
        r#"<svg width="{size}" height="{size}" viewBox="0 0 {size} {size}" fill="none" xmlns="http://www.w3.org/2000/svg">
  <rect width="{size}" height="{size}" rx="{rx}" fill="{bg}"/>
  <circle cx="{c}" cy="{c}" r="{outer}" fill="{primary}"/>
  <circle cx="{c}" cy="{c}" r="{inner}" fill="{secondary}"/>
  <path d="M{x1} {y1}L{x2} {y2}L{x3} {y3}Z" fill="{bg}"/>
</svg>
"#,
        rx = size / 4,
        outer = logo.outer_radius,
        inner = size / 4,
        primary = palette.primary.to_hex(),
        secondary = palette.secondary.to_hex(),
    ))
}
