pub mod color;
pub mod engine;
pub mod grid;
pub mod label;
pub mod paginate;
pub mod slots;

pub use crate::domain::model::{GridPosition, ResolvedColor, ScheduleEntry};
pub use crate::domain::ports::{Canvas, EntrySource};
pub use crate::utils::error::Result;
pub use engine::LabelEngine;
