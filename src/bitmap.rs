use anyhow::Result;
use image::{ImageFormat, Rgb, RgbImage};
use log::debug;
use std::io::Cursor;

use crate::{
    error::IconError,
    geometry::{Logo, Point},
    palette::{Color, Palette},
};

/// 按像素整数坐标采样, 不做抗锯齿, 输出只含调色板里的三种颜色
pub fn render_bitmap(size: u32, palette: &Palette) -> Result<RgbImage> {
    if size == 0 {
        return Err(IconError::InvalidSize(size).into());
    }

    let logo = Logo::for_size(size);
    let outer = logo.outer_circle();
    let inner = logo.inner_circle();
    let play = logo.play_triangle();
    debug!("render {size}px bitmap: {logo:?}");

    let img = RgbImage::from_fn(size, size, |x, y| {
        let p = Point::new(x as f32, y as f32);
        let color = if play.contains(p) {
            palette.background
        } else if inner.contains(p) {
            palette.secondary
        } else if outer.contains(p) {
            palette.primary
        } else {
            palette.background
        };
        pixel(color)
    });

    Ok(img)
}

pub fn encode_png(img: &RgbImage) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(|e| IconError::Encode(e.to_string()))?;
    Ok(bytes)
}

#[inline]
fn pixel(color: Color) -> Rgb<u8> {
    Rgb(color.channels())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BITMAP_SIZES;

    fn color_at(img: &RgbImage, x: u32, y: u32) -> Color {
        let [r, g, b] = img.get_pixel(x, y).0;
        Color::new(r, g, b)
    }

    #[test]
    fn every_size_is_square_and_uses_only_palette_colors() {
        let palette = Palette::default();
        for size in BITMAP_SIZES {
            let img = render_bitmap(size, &palette).unwrap();
            assert_eq!(img.dimensions(), (size, size));
            for p in img.pixels() {
                let [r, g, b] = p.0;
                assert!(palette.contains(Color::new(r, g, b)), "{size}px: {p:?}");
            }
        }
    }

    #[test]
    fn outer_circle_radius_and_center() {
        let palette = Palette::default();
        for size in BITMAP_SIZES {
            let img = render_bitmap(size, &palette).unwrap();
            let c = size / 2;
            let r = size / 3;
            // 上下左右四个方向的边缘
            assert_eq!(color_at(&img, c + r, c), palette.primary, "{size}px right");
            assert_eq!(color_at(&img, c - r, c), palette.primary, "{size}px left");
            assert_eq!(color_at(&img, c, c + r), palette.primary, "{size}px bottom");
            assert_eq!(color_at(&img, c, c - r), palette.primary, "{size}px top");
            assert_eq!(color_at(&img, c + r + 1, c), palette.background);
            assert_eq!(color_at(&img, c, c - r - 1), palette.background);
            assert_eq!(color_at(&img, 0, 0), palette.background);
        }
    }

    #[test]
    fn inner_circle_radius() {
        let palette = Palette::default();
        for size in BITMAP_SIZES {
            let img = render_bitmap(size, &palette).unwrap();
            let c = size / 2;
            let inner = (size / 3) as f32 * 0.8;
            let edge = inner.floor() as u32;
            assert_eq!(color_at(&img, c + edge, c), palette.secondary, "{size}px");
            assert_eq!(color_at(&img, c, c + edge), palette.secondary, "{size}px");
            assert_eq!(color_at(&img, c + edge + 1, c), palette.primary, "{size}px");
        }
    }

    #[test]
    fn play_glyph_is_cut_out() {
        let palette = Palette::default();
        let img = render_bitmap(512, &palette).unwrap();
        // 三角形重心
        assert_eq!(color_at(&img, 247, 256), palette.background);
        assert_eq!(color_at(&img, 228, 200), palette.background);
        assert_eq!(color_at(&img, 284, 256), palette.background);
        assert_eq!(color_at(&img, 285, 256), palette.secondary);
        assert_eq!(color_at(&img, 227, 256), palette.secondary);
    }

    #[test]
    fn rendering_is_deterministic() {
        let palette = Palette::default();
        let a = encode_png(&render_bitmap(96, &palette).unwrap()).unwrap();
        let b = encode_png(&render_bitmap(96, &palette).unwrap()).unwrap();
        assert_eq!(a, b);
        assert_eq!(&a[1..4], b"PNG");
    }

    #[test]
    fn zero_size_fails() {
        assert!(render_bitmap(0, &Palette::default()).is_err());
    }
}
