pub mod sheet_toml;

use clap::Parser;
use serde::{Deserialize, Serialize};

use crate::config::sheet_toml::SheetToml;
use crate::utils::error::{LabelError, Result};
use crate::utils::validation::{self, Validate};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "slot-labels")]
#[command(about = "Render schedule CSV rows as printable time-slot label sheets")]
pub struct CliConfig {
    /// Schedule CSV with name,start,end,day,color rows
    #[arg(long, default_value = "label_pages.csv")]
    pub input: String,

    /// Output PDF path
    #[arg(long, default_value = "labels_output.pdf")]
    pub output: String,

    /// Minutes between consecutive labels
    #[arg(long, default_value = "1")]
    pub step_minutes: u32,

    /// Optional TOML sheet layout file
    #[arg(long)]
    pub sheet: Option<String>,

    /// Draw page numbers and cell coordinates for layout debugging
    #[arg(long)]
    pub debug_overlay: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Effective sheet configuration: built-in defaults, then CLI flags,
    /// then the TOML layout file when one is given.
    pub fn sheet_config(&self) -> Result<SheetConfig> {
        let mut sheet = SheetConfig {
            step_minutes: self.step_minutes,
            debug_overlay: self.debug_overlay,
            ..SheetConfig::default()
        };
        if let Some(path) = &self.sheet {
            sheet = SheetToml::from_file(path)?.fold_into(sheet);
        }
        sheet.validate()?;
        Ok(sheet)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("input", &self.input)?;
        validation::validate_path("output", &self.output)?;
        validation::validate_min_u32("step_minutes", self.step_minutes, 1)?;
        Ok(())
    }
}

/// Physical layout of one label sheet. All lengths are millimetres.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageGeometry {
    pub page_width: f32,
    pub page_height: f32,
    pub label_width: f32,
    pub label_height: f32,
    pub margin_x: f32,
    pub margin_y: f32,
    pub columns: u32,
    pub rows_total: u32,
    pub header_rows: u32,
}

impl Default for PageGeometry {
    /// An A4 sheet of 38 x 21.2 mm labels, 5 columns by 13 rows, with the
    /// top row reserved for the header band.
    fn default() -> Self {
        Self {
            page_width: 210.0,
            page_height: 297.0,
            label_width: 38.0,
            label_height: 21.2,
            margin_x: 10.0,
            margin_y: 10.0,
            columns: 5,
            rows_total: 13,
            header_rows: 1,
        }
    }
}

impl PageGeometry {
    pub fn usable_rows(&self) -> u32 {
        self.rows_total.saturating_sub(self.header_rows)
    }

    /// Maximum labels per page.
    pub fn capacity(&self) -> u32 {
        self.columns * self.usable_rows()
    }

    /// Top-left corner of a label cell. The extra label height offsets the
    /// header band, so row 0 sits directly under it.
    pub fn cell_top_left(&self, row: u32, column: u32) -> (f32, f32) {
        let x = self.margin_x + column as f32 * self.label_width;
        let y = self.page_height - self.margin_y - self.label_height * (row as f32 + 1.0);
        (x, y)
    }

    /// Horizontal center of the label grid.
    pub fn grid_center_x(&self) -> f32 {
        self.margin_x + self.columns as f32 * self.label_width / 2.0
    }
}

impl Validate for PageGeometry {
    fn validate(&self) -> Result<()> {
        validation::validate_positive_dimension("page.width_mm", self.page_width)?;
        validation::validate_positive_dimension("page.height_mm", self.page_height)?;
        validation::validate_positive_dimension("page.label_width_mm", self.label_width)?;
        validation::validate_positive_dimension("page.label_height_mm", self.label_height)?;
        validation::validate_non_negative_dimension("page.margin_x_mm", self.margin_x)?;
        validation::validate_non_negative_dimension("page.margin_y_mm", self.margin_y)?;
        validation::validate_min_u32("page.columns", self.columns, 1)?;
        validation::validate_min_u32("page.rows_total", self.rows_total, self.header_rows + 1)?;

        let grid_width = self.margin_x + self.columns as f32 * self.label_width;
        if grid_width > self.page_width {
            return Err(LabelError::InvalidConfigValueError {
                field: "page.columns".to_string(),
                value: self.columns.to_string(),
                reason: format!(
                    "Label grid is {:.1} mm wide but the page is only {:.1} mm",
                    grid_width, self.page_width
                ),
            });
        }
        let grid_height = self.margin_y + self.rows_total as f32 * self.label_height;
        if grid_height > self.page_height {
            return Err(LabelError::InvalidConfigValueError {
                field: "page.rows_total".to_string(),
                value: self.rows_total.to_string(),
                reason: format!(
                    "Label grid is {:.1} mm tall but the page is only {:.1} mm",
                    grid_height, self.page_height
                ),
            });
        }
        Ok(())
    }
}

/// Everything the layout engine needs, fixed for the whole run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetConfig {
    pub geometry: PageGeometry,
    pub step_minutes: u32,
    pub debug_overlay: bool,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            geometry: PageGeometry::default(),
            step_minutes: 1,
            debug_overlay: false,
        }
    }
}

impl Validate for SheetConfig {
    fn validate(&self) -> Result<()> {
        self.geometry.validate()?;
        validation::validate_min_u32("labels.step_minutes", self.step_minutes, 1)?;
        Ok(())
    }
}
