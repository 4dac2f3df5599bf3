//! Decorative image assets and async loading. Every asset here is cosmetic:
//! a failed load is logged and the poster is rendered without that element.

use std::collections::HashMap;

use js_sys::Promise;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlImageElement;

use crate::error::{PosterError, Result};

pub struct AssetSlot {
    pub key: &'static str,
    pub path: &'static str,
}

/// Fixed relative paths resolved by the hosting page.
pub const DECORATIVE_ASSETS: &[AssetSlot] = &[
    AssetSlot { key: "badge_logo", path: "/PUG_vertical.jpg" },
    AssetSlot { key: "sponsor_dynamics", path: "/1dynamics1.jpg" },
    AssetSlot { key: "sponsor_mazik", path: "/mazik.jpg" },
    AssetSlot { key: "community_logo", path: "/logo-header.png" },
];

/// The decorative images that actually loaded, keyed by slot name.
pub struct AssetSet {
    images: HashMap<&'static str, HtmlImageElement>,
}

impl AssetSet {
    /// Loads every decorative asset in order. Individual failures leave the
    /// slot empty so the renderer skips that element.
    pub async fn load_decorative() -> AssetSet {
        let mut images = HashMap::new();
        for slot in DECORATIVE_ASSETS {
            match load_image(slot.path).await {
                Ok(img) => {
                    images.insert(slot.key, img);
                }
                Err(err) => log::warn!("{}; poster will omit {}", err, slot.key),
            }
        }
        AssetSet { images }
    }

    pub fn get(&self, key: &str) -> Option<&HtmlImageElement> {
        self.images.get(key)
    }
}

/// Loads one image, suspending until its onload or onerror fires. No timeout:
/// a stalled load stalls the generation.
pub async fn load_image(src: &str) -> Result<HtmlImageElement> {
    let img = HtmlImageElement::new()
        .map_err(|e| PosterError::AssetLoad(format!("{:?}", e)))?;
    img.set_cross_origin(Some("anonymous"));

    let promise = Promise::new(&mut |resolve, reject| {
        let onload = Closure::once_into_js(move |_: JsValue| {
            let _ = resolve.call0(&JsValue::NULL);
        });
        img.set_onload(Some(onload.unchecked_ref()));
        let onerror = Closure::once_into_js(move |_: JsValue| {
            let _ = reject.call0(&JsValue::NULL);
        });
        img.set_onerror(Some(onerror.unchecked_ref()));
    });
    img.set_src(src);

    JsFuture::from(promise)
        .await
        .map_err(|_| PosterError::AssetLoad(describe_src(src)))?;
    Ok(img)
}

/// Data URLs are megabytes long; keep them out of error messages.
fn describe_src(src: &str) -> String {
    match src.split_once(',') {
        Some((header, _)) if src.starts_with("data:") => header.to_string(),
        _ => src.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_keys_are_unique() {
        for (i, a) in DECORATIVE_ASSETS.iter().enumerate() {
            for b in &DECORATIVE_ASSETS[i + 1..] {
                assert_ne!(a.key, b.key);
                assert_ne!(a.path, b.path);
            }
        }
    }

    #[test]
    fn describe_src_truncates_data_urls() {
        assert_eq!(describe_src("data:image/png;base64,AAAA"), "data:image/png;base64");
        assert_eq!(describe_src("/logo-header.png"), "/logo-header.png");
    }
}
