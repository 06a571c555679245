// src/assets.rs

use crate::constants::ICON_SIZE;
use crate::errors::{HarnessError, HarnessResult};
use egui::{FontData, FontDefinitions, FontFamily};
use std::fs;
use std::path::Path;
use winit::window::Icon;

const FONT_NAME: &str = "harness";

/// Leading tags of TrueType, OpenType and font collection files.
const FONT_MAGIC: [[u8; 4]; 4] = [*b"\x00\x01\x00\x00", *b"OTTO", *b"true", *b"ttcf"];

/// Checks the font file header so a bad file fails at startup rather than
/// on the first frame.
pub fn check_font_bytes(bytes: &[u8]) -> Result<(), String> {
    match bytes.get(..4) {
        None => Err("file is too short to be a font".to_string()),
        Some(tag) if FONT_MAGIC.iter().any(|magic| magic == tag) => Ok(()),
        Some(tag) => Err(format!("unrecognized font header {:02x?}", tag)),
    }
}

/// Loads a font file and makes it the first choice for all text.
pub fn load_fonts(path: &Path) -> HarnessResult<FontDefinitions> {
    let bytes = fs::read(path).map_err(|e| HarnessError::asset_error(path, e.to_string()))?;
    check_font_bytes(&bytes).map_err(|message| HarnessError::asset_error(path, message))?;

    let mut fonts = FontDefinitions::default();
    fonts
        .font_data
        .insert(FONT_NAME.to_string(), FontData::from_owned(bytes));
    for family in [FontFamily::Proportional, FontFamily::Monospace] {
        fonts
            .families
            .entry(family)
            .or_default()
            .insert(0, FONT_NAME.to_string());
    }

    log::info!("Loaded font {}", path.display());
    Ok(fonts)
}

/// RGBA pixels of the window icon: a red disc on a transparent square.
pub fn icon_pixels(size: u32) -> Vec<u8> {
    let radius = size as f32 / 2.0;
    let mut rgba = Vec::with_capacity((size * size * 4) as usize);
    for y in 0..size {
        for x in 0..size {
            let dx = x as f32 + 0.5 - radius;
            let dy = y as f32 + 0.5 - radius;
            let inside = dx * dx + dy * dy <= radius * radius;
            let pixel: [u8; 4] = if inside {
                [220, 30, 30, 255]
            } else {
                [0, 0, 0, 0]
            };
            rgba.extend_from_slice(&pixel);
        }
    }
    rgba
}

pub fn window_icon() -> HarnessResult<Icon> {
    Ok(Icon::from_rgba(icon_pixels(ICON_SIZE), ICON_SIZE, ICON_SIZE)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn font_headers() {
        assert!(check_font_bytes(b"\x00\x01\x00\x00rest").is_ok());
        assert!(check_font_bytes(b"OTTOrest").is_ok());
        assert!(check_font_bytes(b"PNG\x0d").is_err());
        assert!(check_font_bytes(b"ab").is_err());
    }

    #[test]
    fn missing_font_is_an_asset_error() {
        let dir = tempdir().unwrap();
        let err = load_fonts(&dir.path().join("sansation.ttf")).unwrap_err();
        assert!(matches!(err, HarnessError::Asset { .. }));
    }

    #[test]
    fn non_font_file_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("font.ttf");
        fs::write(&path, "hello world").unwrap();
        assert!(matches!(
            load_fonts(&path),
            Err(HarnessError::Asset { .. })
        ));
    }

    #[test]
    fn loaded_font_is_preferred() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("font.ttf");
        fs::write(&path, b"\x00\x01\x00\x00 not really glyphs").unwrap();
        let fonts = load_fonts(&path).unwrap();
        assert_eq!(fonts.families[&FontFamily::Proportional][0], FONT_NAME);
        assert!(fonts.font_data.contains_key(FONT_NAME));
    }

    #[test]
    fn icon_is_square_rgba() {
        let pixels = icon_pixels(8);
        assert_eq!(pixels.len(), 8 * 8 * 4);
        // corner transparent, centre opaque
        assert_eq!(pixels[3], 0);
        let centre = (4 * 8 + 4) * 4;
        assert_eq!(pixels[centre + 3], 255);
        assert!(window_icon().is_ok());
    }
}
