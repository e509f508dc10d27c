use crate::config::SheetConfig;
use crate::utils::error::{LabelError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Sheet layout file. Every field is optional; anything omitted keeps the
/// built-in defaults (or the CLI values for step and overlay).
///
/// ```toml
/// [page]
/// label_width_mm = 38.0
/// label_height_mm = 21.2
/// columns = 5
/// rows_total = 13
///
/// [labels]
/// step_minutes = 5
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SheetToml {
    pub page: Option<PageTable>,
    pub labels: Option<LabelsTable>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageTable {
    pub width_mm: Option<f32>,
    pub height_mm: Option<f32>,
    pub label_width_mm: Option<f32>,
    pub label_height_mm: Option<f32>,
    pub margin_x_mm: Option<f32>,
    pub margin_y_mm: Option<f32>,
    pub columns: Option<u32>,
    pub rows_total: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LabelsTable {
    pub step_minutes: Option<u32>,
    pub debug_overlay: Option<bool>,
}

impl SheetToml {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(LabelError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content);

        toml::from_str(&processed).map_err(|e| LabelError::InvalidConfigValueError {
            field: "sheet".to_string(),
            value: String::new(),
            reason: format!("TOML parsing error: {}", e),
        })
    }

    /// Replace ${VAR_NAME} references with environment values, leaving
    /// unknown names in place.
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }

    /// Overlay the provided fields onto `base`. The header row count is not
    /// configurable; the band is always exactly one row.
    pub fn fold_into(self, mut base: SheetConfig) -> SheetConfig {
        if let Some(page) = self.page {
            let g = &mut base.geometry;
            if let Some(v) = page.width_mm {
                g.page_width = v;
            }
            if let Some(v) = page.height_mm {
                g.page_height = v;
            }
            if let Some(v) = page.label_width_mm {
                g.label_width = v;
            }
            if let Some(v) = page.label_height_mm {
                g.label_height = v;
            }
            if let Some(v) = page.margin_x_mm {
                g.margin_x = v;
            }
            if let Some(v) = page.margin_y_mm {
                g.margin_y = v;
            }
            if let Some(v) = page.columns {
                g.columns = v;
            }
            if let Some(v) = page.rows_total {
                g.rows_total = v;
            }
        }
        if let Some(labels) = self.labels {
            if let Some(v) = labels.step_minutes {
                base.step_minutes = v;
            }
            if let Some(v) = labels.debug_overlay {
                base.debug_overlay = v;
            }
        }
        base
    }
}
