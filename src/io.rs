//! PNG export and the generation pipeline: photo validation, filename
//! derivation, canvas encode and the browser download affordance.

use base64::{Engine as _, engine::general_purpose};
use image::GenericImageView;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlAnchorElement, HtmlCanvasElement};

use crate::assets::{self, AssetSet};
use crate::error::{PosterError, Result};
use crate::layout::POSTER_SIZE;
use crate::render;
use crate::types::{AttendeeInfo, PhotoInfo};

pub const EVENT_PREFIX: &str = "PUG_Summit_2026";
pub const FALLBACK_STEM: &str = "Attendee";

/// Decodes an uploaded photo data URL far enough to know it is a real image,
/// returning its pixel dimensions.
pub fn decode_photo(data_url: &str) -> Result<PhotoInfo> {
    let (header, payload) = data_url
        .split_once(',')
        .ok_or_else(|| PosterError::InvalidPhoto("not a data URL".to_string()))?;
    if !header.starts_with("data:image/") || !header.ends_with(";base64") {
        return Err(PosterError::InvalidPhoto(format!("unsupported header {}", header)));
    }
    let bytes = general_purpose::STANDARD
        .decode(payload)
        .map_err(|e| PosterError::InvalidPhoto(format!("base64: {}", e)))?;
    let img = image::load_from_memory(&bytes)
        .map_err(|e| PosterError::InvalidPhoto(e.to_string()))?;
    let (width, height) = img.dimensions();
    Ok(PhotoInfo { width, height })
}

/// `PUG_Summit_2026_<name>.png`, with whitespace runs collapsed to single
/// underscores and a fallback stem for blank names.
pub fn poster_filename(name: &str) -> String {
    let stem = name.split_whitespace().collect::<Vec<_>>().join("_");
    if stem.is_empty() {
        format!("{}_{}.png", EVENT_PREFIX, FALLBACK_STEM)
    } else {
        format!("{}_{}.png", EVENT_PREFIX, stem)
    }
}

/// Encodes the finished canvas as a PNG data URL. An empty result (as from a
/// zero-sized or tainted canvas) is an error, never saved.
pub fn encode_png(canvas: &HtmlCanvasElement) -> Result<String> {
    let data_url = canvas
        .to_data_url_with_type("image/png")
        .map_err(PosterError::canvas)?;
    match data_url.split_once(',') {
        Some((header, payload)) if header.starts_with("data:image/png") && !payload.is_empty() => {
            Ok(data_url)
        }
        _ => Err(PosterError::Encode("canvas produced no image data".to_string())),
    }
}

/// Anchor-element download pattern; the hosting page never sees the file.
pub fn save_png(data_url: &str, filename: &str) -> Result<()> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| PosterError::Canvas("no document".to_string()))?;
    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(PosterError::canvas)?
        .dyn_into()
        .map_err(|_| PosterError::Canvas("anchor element unavailable".to_string()))?;
    anchor.set_download(filename);
    anchor.set_href(data_url);
    anchor.click();
    Ok(())
}

/// The full generation flow: size the canvas, load the photo (fatal on
/// failure) and the decorative set (each failure non-fatal), draw, encode,
/// save. Returns the saved filename. Nothing is saved unless every drawing
/// step succeeded.
pub async fn run_pipeline(canvas: &HtmlCanvasElement, info: &AttendeeInfo) -> Result<String> {
    canvas.set_width(POSTER_SIZE as u32);
    canvas.set_height(POSTER_SIZE as u32);
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(PosterError::canvas)?
        .ok_or_else(|| PosterError::Canvas("2d context unavailable".to_string()))?
        .dyn_into()
        .map_err(|_| PosterError::Canvas("2d context unavailable".to_string()))?;

    let photo = assets::load_image(&info.photo_data_url)
        .await
        .map_err(|e| PosterError::PhotoLoad(e.to_string()))?;
    let decorative = AssetSet::load_decorative().await;

    render::draw_poster(&ctx, info, &photo, &decorative)?;

    let data_url = encode_png(canvas)?;
    let filename = poster_filename(&info.name);
    save_png(&data_url, &filename)?;
    Ok(filename)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, ImageOutputFormat, RgbaImage};
    use std::io::Cursor;

    fn photo_data_url(width: u32, height: u32) -> String {
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(
            width,
            height,
            image::Rgba([18, 113, 115, 255]),
        ));
        let mut png_bytes: Vec<u8> = Vec::new();
        img.write_to(&mut Cursor::new(&mut png_bytes), ImageOutputFormat::Png)
            .unwrap();
        format!(
            "data:image/png;base64,{}",
            general_purpose::STANDARD.encode(&png_bytes)
        )
    }

    #[test]
    fn decode_photo_returns_dimensions() {
        let info = decode_photo(&photo_data_url(3, 2)).unwrap();
        assert_eq!(info, PhotoInfo { width: 3, height: 2 });
    }

    #[test]
    fn decode_photo_rejects_plain_strings() {
        assert!(matches!(
            decode_photo("hello"),
            Err(PosterError::InvalidPhoto(_))
        ));
    }

    #[test]
    fn decode_photo_rejects_non_image_payloads() {
        let payload = general_purpose::STANDARD.encode(b"not an image");
        let url = format!("data:image/png;base64,{}", payload);
        assert!(matches!(
            decode_photo(&url),
            Err(PosterError::InvalidPhoto(_))
        ));
    }

    #[test]
    fn decode_photo_rejects_text_data_urls() {
        assert!(matches!(
            decode_photo("data:text/plain;base64,aGk="),
            Err(PosterError::InvalidPhoto(_))
        ));
    }

    #[test]
    fn filename_replaces_spaces_with_underscores() {
        assert_eq!(poster_filename("Jai Deep"), "PUG_Summit_2026_Jai_Deep.png");
    }

    #[test]
    fn filename_collapses_whitespace_runs() {
        assert_eq!(
            poster_filename("  Jai   Deep \t Kumar "),
            "PUG_Summit_2026_Jai_Deep_Kumar.png"
        );
    }

    #[test]
    fn filename_falls_back_for_blank_names() {
        assert_eq!(poster_filename(""), "PUG_Summit_2026_Attendee.png");
        assert_eq!(poster_filename("   "), "PUG_Summit_2026_Attendee.png");
    }
}
