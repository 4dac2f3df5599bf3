//! Fixed poster geometry. Everything the renderer draws is positioned by the
//! constants here, so the output is fully determined by the form state and
//! whichever decorative assets loaded.

use crate::types::{Dot, GradientStop, LogoSlot};

/// Output resolution, 1:1 aspect ratio.
pub const POSTER_SIZE: f64 = 1080.0;

/// Diagonal background gradient, top-left blue to bottom-right pink.
pub const BACKGROUND_STOPS: &[GradientStop] = &[
    GradientStop { offset: 0.0, color: "#0033cc" },
    GradientStop { offset: 0.15, color: "#1a237e" },
    GradientStop { offset: 0.3, color: "#311b92" },
    GradientStop { offset: 0.45, color: "#4a148c" },
    GradientStop { offset: 0.55, color: "#6a1b9a" },
    GradientStop { offset: 0.65, color: "#8e24aa" },
    GradientStop { offset: 0.75, color: "#ab47bc" },
    GradientStop { offset: 0.85, color: "#c71585" },
    GradientStop { offset: 0.95, color: "#e91e63" },
    GradientStop { offset: 1.0, color: "#ff1493" },
];

/// Large circles bleeding off the bottom-left and top-right corners.
pub const CORNER_CIRCLES: &[Dot] = &[
    Dot { x: -100.0, y: POSTER_SIZE + 100.0, radius: 400.0, color: "#c71585" },
    Dot { x: POSTER_SIZE + 100.0, y: -100.0, radius: 350.0, color: "#0033cc" },
];
pub const CORNER_CIRCLE_ALPHA: f64 = 0.1;

pub const ACCENT_DOTS: &[Dot] = &[
    Dot { x: 950.0, y: 200.0, radius: 10.0, color: "#ff1493" },
    Dot { x: 1000.0, y: 380.0, radius: 6.0, color: "#00d4ff" },
    Dot { x: 1030.0, y: 550.0, radius: 8.0, color: "#ffb73c" },
    Dot { x: 920.0, y: 450.0, radius: 5.0, color: "#4ba7aa" },
    Dot { x: 980.0, y: 700.0, radius: 7.0, color: "#ef5350" },
];

// Top-left summit badge: white rounded box, logo and two-line wordmark.
pub const BADGE_X: f64 = 36.0;
pub const BADGE_Y: f64 = 36.0;
pub const BADGE_WIDTH: f64 = 310.0;
pub const BADGE_HEIGHT: f64 = 100.0;
pub const BADGE_RADIUS: f64 = 16.0;
pub const BADGE_LOGO_INSET: f64 = 16.0;
pub const BADGE_LOGO_SIZE: f64 = 68.0;
pub const BADGE_LINE1: &str = "PAKISTAN";
pub const BADGE_LINE2: &str = "UG SUMMIT";

// Circular attendee photo and its rings.
pub const PHOTO_CENTER_X: f64 = 200.0;
pub const PHOTO_CENTER_Y: f64 = 420.0;
pub const PHOTO_RADIUS: f64 = 145.0;
pub const PHOTO_OUTER_RING_OFFSET: f64 = 12.0;
pub const PHOTO_ACCENT_RING_OFFSET: f64 = 6.0;
pub const PHOTO_BORDER_WIDTH: f64 = 8.0;
/// The photo itself is clipped inside the white border.
pub const PHOTO_CLIP_RADIUS: f64 = PHOTO_RADIUS - 8.0;

pub const OUTER_RING_STOPS: &[GradientStop] = &[
    GradientStop { offset: 0.0, color: "rgba(0, 51, 204, 0.5)" },
    GradientStop { offset: 0.33, color: "rgba(75, 0, 130, 0.5)" },
    GradientStop { offset: 0.66, color: "rgba(199, 21, 133, 0.5)" },
    GradientStop { offset: 1.0, color: "rgba(255, 20, 147, 0.5)" },
];

// ATTENDEE ribbon under the photo.
pub const RIBBON_WIDTH: f64 = 140.0;
pub const RIBBON_HEIGHT: f64 = 36.0;
pub const RIBBON_RADIUS: f64 = 8.0;
pub const RIBBON_GAP: f64 = 10.0;
pub const RIBBON_LABEL: &str = "ATTENDEE";

// Attendee text block to the right of the photo.
pub const DETAILS_X: f64 = 380.0;
pub const DETAILS_Y: f64 = 350.0;
pub const DESIGNATION_OFFSET: f64 = 50.0;
pub const COMPANY_OFFSET: f64 = 90.0;

pub const NAME_PLACEHOLDER: &str = "Your Name";
pub const DESIGNATION_PLACEHOLDER: &str = "Your Designation";

// "I will be attending" section.
pub const ATTENDING_CENTER_X: f64 = 540.0;
pub const ATTENDING_Y: f64 = 580.0;
pub const ATTENDING_PANEL_X: f64 = 40.0;
pub const ATTENDING_PANEL_WIDTH: f64 = 1000.0;
pub const ATTENDING_PANEL_HEIGHT: f64 = 180.0;
pub const ATTENDING_PANEL_RADIUS: f64 = 20.0;
pub const ATTENDING_LINE: &str = "I will be attending";
pub const EVENT_NAME: &str = "Pakistan User Group";
pub const EVENT_EDITION: &str = "Summit 2026";

// Event details row.
pub const EVENT_DETAILS_Y: f64 = 820.0;
pub const EVENT_TILE_SIZE: f64 = 60.0;
pub const EVENT_TILE_RADIUS: f64 = 12.0;
pub const DATE_TILE_X: f64 = 120.0;
pub const DATE_TEXT_X: f64 = 200.0;
pub const VENUE_TILE_X: f64 = 550.0;
pub const VENUE_TEXT_X: f64 = 630.0;
pub const EVENT_DAY: &str = "Saturday";
pub const EVENT_DATE: &str = "10th January 2026";
pub const EVENT_VENUE_LINE1: &str = "Innovista Indus, DHA";
pub const EVENT_VENUE_LINE2: &str = "Library Karachi";
pub const DATE_ICON: &str = "\u{1F4C5}";
pub const VENUE_ICON: &str = "\u{1F4CD}";

// White footer band with sponsor and community logos.
pub const FOOTER_Y: f64 = 925.0;
pub const FOOTER_HEIGHT: f64 = 155.0;
pub const FOOTER_DIVIDER_X: f64 = 460.0;
pub const FOOTER_LOGOS: &[LogoSlot] = &[
    LogoSlot { key: "sponsor_dynamics", x: 80.0, width: 120.0, height: 50.0 },
    LogoSlot { key: "sponsor_mazik", x: 250.0, width: 140.0, height: 55.0 },
];
pub const COMMUNITY_LOGO_X: f64 = 490.0;
pub const COMMUNITY_LOGO_SIZE: f64 = 70.0;
pub const COMMUNITY_TEXT_X: f64 = 575.0;
pub const COMMUNITY_LINE1: &str = "PAKISTAN";
pub const COMMUNITY_LINE2: &str = "USER GROUP";
pub const COMMUNITY_TAGLINE: &str = "Microsoft Tech Community";

/// Cover-crop an image into a square target: scale by the larger of the two
/// axis ratios so the frame is always fully covered, then center the overflow.
/// Returns the draw size and the top-left offset relative to the frame center.
pub fn cover_fit(img_width: f64, img_height: f64, target: f64) -> (f64, f64, f64, f64) {
    let scale = (target / img_width).max(target / img_height);
    let width = img_width * scale;
    let height = img_height * scale;
    (width, height, -width / 2.0, -height / 2.0)
}

pub fn display_name(name: &str) -> &str {
    if name.trim().is_empty() { NAME_PLACEHOLDER } else { name }
}

pub fn display_designation(designation: &str) -> &str {
    if designation.trim().is_empty() { DESIGNATION_PLACEHOLDER } else { designation }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill_ratios(img_w: f64, img_h: f64) -> (f64, f64) {
        let target = PHOTO_CLIP_RADIUS * 2.0;
        let (w, h, _, _) = cover_fit(img_w, img_h, target);
        (w / target, h / target)
    }

    #[test]
    fn cover_fit_fills_frame_for_wide_photos() {
        let (rx, ry) = fill_ratios(4000.0, 1000.0);
        assert!(rx >= 1.0 && ry >= 1.0);
        assert!((ry - 1.0).abs() < 1e-9); // short axis exactly covers
    }

    #[test]
    fn cover_fit_fills_frame_for_tall_photos() {
        let (rx, ry) = fill_ratios(600.0, 2400.0);
        assert!(rx >= 1.0 && ry >= 1.0);
        assert!((rx - 1.0).abs() < 1e-9);
    }

    #[test]
    fn cover_fit_square_photo_matches_frame_exactly() {
        let (w, h, dx, dy) = cover_fit(512.0, 512.0, 274.0);
        assert_eq!((w, h), (274.0, 274.0));
        assert_eq!((dx, dy), (-137.0, -137.0));
    }

    #[test]
    fn cover_fit_is_centered() {
        let (w, h, dx, dy) = cover_fit(300.0, 100.0, 200.0);
        assert!((dx + w / 2.0).abs() < 1e-9);
        assert!((dy + h / 2.0).abs() < 1e-9);
    }

    #[test]
    fn background_stops_are_ordered_and_in_range() {
        let mut prev = -1.0;
        for stop in BACKGROUND_STOPS {
            assert!(stop.offset > prev);
            assert!((0.0..=1.0).contains(&stop.offset));
            prev = stop.offset;
        }
        assert_eq!(BACKGROUND_STOPS.first().unwrap().offset, 0.0);
        assert_eq!(BACKGROUND_STOPS.last().unwrap().offset, 1.0);
    }

    #[test]
    fn placeholders_substitute_blank_fields() {
        assert_eq!(display_name(""), NAME_PLACEHOLDER);
        assert_eq!(display_name("   "), NAME_PLACEHOLDER);
        assert_eq!(display_name("Jai Deep"), "Jai Deep");
        assert_eq!(display_designation("\t\n"), DESIGNATION_PLACEHOLDER);
        assert_eq!(display_designation("DevOps Engineer"), "DevOps Engineer");
    }

    #[test]
    fn footer_logos_sit_inside_the_band() {
        for slot in FOOTER_LOGOS {
            assert!(slot.height < FOOTER_HEIGHT);
            assert!(slot.x + slot.width < FOOTER_DIVIDER_X);
        }
    }
}
