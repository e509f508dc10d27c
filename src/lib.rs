pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::{CsvEntrySource, PdfCanvas};
pub use config::{CliConfig, PageGeometry, SheetConfig};
pub use crate::core::engine::LabelEngine;
pub use utils::error::{LabelError, Result};
