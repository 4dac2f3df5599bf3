use serde::{Serialize, Deserialize};

/// Snapshot of the form at generate time. `company` is optional and an
/// absent value suppresses the company line on the poster.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct AttendeeInfo {
    pub name: String,
    pub designation: String,
    pub company: Option<String>,
    pub photo_data_url: String,
}

/// Pixel dimensions of the uploaded photo, taken when the data URL is decoded.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub struct PhotoInfo {
    pub width: u32,
    pub height: u32,
}

#[derive(Clone, Copy, Debug)]
pub struct GradientStop {
    pub offset: f64, // 0.0 to 1.0
    pub color: &'static str,
}

/// A filled circle at a fixed position (background circles and accent dots).
#[derive(Clone, Copy, Debug)]
pub struct Dot {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub color: &'static str,
}

/// A decorative logo slot in the footer band, keyed into the asset set.
#[derive(Clone, Copy, Debug)]
pub struct LogoSlot {
    pub key: &'static str,
    pub x: f64,
    pub width: f64,
    pub height: f64,
}
