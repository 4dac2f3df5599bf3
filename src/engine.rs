use std::cell::Cell;
use std::rc::Rc;

use log::{error, info};
use serde::{Serialize, Deserialize};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlCanvasElement;

use crate::error::{PosterError, Result};
use crate::io;
use crate::types::{AttendeeInfo, PhotoInfo};

/// Form state holder and entry point for poster generation. The JS layer
/// pushes field edits in and calls `generate` with its hidden canvas.
#[wasm_bindgen]
pub struct PosterEngine {
    name: String,
    designation: String,
    company: String,
    photo: Option<(String, PhotoInfo)>,
    busy: Rc<Cell<bool>>,
}

/// JS-facing snapshot of the form, photo dimensions included.
#[derive(Serialize)]
struct FormSnapshot<'a> {
    name: &'a str,
    designation: &'a str,
    company: &'a str,
    photo: Option<PhotoInfo>,
    busy: bool,
}

#[derive(Deserialize)]
struct FormFields {
    name: String,
    designation: String,
    #[serde(default)]
    company: Option<String>,
}

#[wasm_bindgen]
impl PosterEngine {
    #[wasm_bindgen(constructor)]
    pub fn new() -> PosterEngine {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        PosterEngine {
            name: String::new(),
            designation: String::new(),
            company: String::new(),
            photo: None,
            busy: Rc::new(Cell::new(false)),
        }
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    pub fn set_designation(&mut self, designation: &str) {
        self.designation = designation.to_string();
    }

    pub fn set_company(&mut self, company: &str) {
        self.company = company.to_string();
    }

    /// Bulk setter for the three text fields, e.g. from a form submit event.
    pub fn set_form(&mut self, form: JsValue) -> std::result::Result<(), JsValue> {
        let fields: FormFields = serde_wasm_bindgen::from_value(form)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.name = fields.name;
        self.designation = fields.designation;
        self.company = fields.company.unwrap_or_default();
        Ok(())
    }

    /// Stores the uploaded photo after proving the data URL decodes to a real
    /// image, so a corrupt upload fails here instead of mid-generation.
    pub fn set_photo(&mut self, data_url: &str) -> std::result::Result<(), JsValue> {
        let info = io::decode_photo(data_url)?;
        self.photo = Some((data_url.to_string(), info));
        Ok(())
    }

    pub fn clear_photo(&mut self) {
        self.photo = None;
    }

    /// Whether generation may be attempted: name and designation non-empty
    /// after trimming, photo present. Whitespace-only input does not count.
    pub fn is_ready(&self) -> bool {
        !self.name.trim().is_empty() && !self.designation.trim().is_empty() && self.photo.is_some()
    }

    pub fn is_busy(&self) -> bool {
        self.busy.get()
    }

    pub fn get_form_json(&self) -> String {
        let snapshot = FormSnapshot {
            name: &self.name,
            designation: &self.designation,
            company: &self.company,
            photo: self.photo.as_ref().map(|(_, info)| *info),
            busy: self.busy.get(),
        };
        serde_json::to_string(&snapshot).unwrap_or_else(|_| "{}".to_string())
    }

    /// Kicks off poster generation on the given canvas. At most one generation
    /// runs at a time; overlapping calls are rejected rather than queued. On
    /// failure the user gets a single alert and nothing is saved; the form
    /// stays usable and the action can be retried.
    pub fn generate(&mut self, canvas: HtmlCanvasElement) -> std::result::Result<(), JsValue> {
        if self.busy.get() {
            return Err(PosterError::Busy.into());
        }
        let attendee = self.attendee_info()?;

        self.busy.set(true);
        let busy = Rc::clone(&self.busy);
        spawn_local(async move {
            info!("generating poster for {}", attendee.name);
            match io::run_pipeline(&canvas, &attendee).await {
                Ok(filename) => info!("poster saved as {}", filename),
                Err(err) => {
                    error!("poster generation failed: {}", err);
                    if let Some(window) = web_sys::window() {
                        let _ = window
                            .alert_with_message("Error generating poster. Please try again.");
                    }
                }
            }
            busy.set(false);
        });
        Ok(())
    }
}

impl PosterEngine {
    /// Validated owned snapshot for the render pipeline. A blank company is
    /// mapped to `None` so the poster omits that line.
    pub fn attendee_info(&self) -> Result<AttendeeInfo> {
        if self.name.trim().is_empty() {
            return Err(PosterError::MissingInput("name"));
        }
        if self.designation.trim().is_empty() {
            return Err(PosterError::MissingInput("designation"));
        }
        let (photo_data_url, _) = self
            .photo
            .clone()
            .ok_or(PosterError::MissingInput("photo"))?;

        let company = Some(self.company.trim())
            .filter(|c| !c.is_empty())
            .map(str::to_string);
        Ok(AttendeeInfo {
            name: self.name.clone(),
            designation: self.designation.clone(),
            company,
            photo_data_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Plain construction, skipping the constructor's logger install.
    fn engine() -> PosterEngine {
        PosterEngine {
            name: String::new(),
            designation: String::new(),
            company: String::new(),
            photo: None,
            busy: Rc::new(Cell::new(false)),
        }
    }

    fn with_photo(mut e: PosterEngine) -> PosterEngine {
        e.photo = Some((
            "data:image/png;base64,unused".to_string(),
            PhotoInfo { width: 4, height: 4 },
        ));
        e
    }

    #[test]
    fn ready_requires_all_three_inputs() {
        let mut e = engine();
        assert!(!e.is_ready());
        e.set_name("Jai Deep");
        e.set_designation("DevOps Engineer");
        assert!(!e.is_ready()); // photo still missing
        let e = with_photo(e);
        assert!(e.is_ready());
    }

    #[test]
    fn whitespace_only_fields_are_not_ready() {
        let mut e = engine();
        e.set_name("   ");
        e.set_designation("\t");
        let e = with_photo(e);
        assert!(!e.is_ready());
        assert!(matches!(
            e.attendee_info(),
            Err(PosterError::MissingInput("name"))
        ));
    }

    #[test]
    fn attendee_info_reports_first_missing_field() {
        let mut e = with_photo(engine());
        e.set_name("Jai Deep");
        assert!(matches!(
            e.attendee_info(),
            Err(PosterError::MissingInput("designation"))
        ));
        e.set_designation("DevOps Engineer");
        e.photo = None;
        assert!(matches!(
            e.attendee_info(),
            Err(PosterError::MissingInput("photo"))
        ));
    }

    #[test]
    fn blank_company_becomes_none() {
        let mut e = with_photo(engine());
        e.set_name("Jai Deep");
        e.set_designation("DevOps Engineer");
        e.set_company("   ");
        assert_eq!(e.attendee_info().unwrap().company, None);
        e.set_company("Geeks of Kolachi");
        assert_eq!(
            e.attendee_info().unwrap().company.as_deref(),
            Some("Geeks of Kolachi")
        );
    }

    #[test]
    fn company_is_never_required() {
        let mut e = with_photo(engine());
        e.set_name("Jai Deep");
        e.set_designation("DevOps Engineer");
        assert!(e.is_ready());
        assert!(e.attendee_info().is_ok());
    }

    #[test]
    fn form_json_reflects_photo_dimensions() {
        let mut e = with_photo(engine());
        e.set_name("Jai Deep");
        let json = e.get_form_json();
        assert!(json.contains("\"width\":4"));
        assert!(json.contains("\"busy\":false"));
    }
}
