pub mod error;
pub mod types;
pub mod layout;
pub mod engine;
pub mod assets;
pub mod render;
pub mod io;

pub use engine::PosterEngine;
pub use error::{PosterError, Result};
pub use types::*;
