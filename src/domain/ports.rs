use crate::domain::model::{FontStyle, ResolvedColor, ScheduleEntry};
use crate::utils::error::Result;

/// Upstream producer of schedule entries.
pub trait EntrySource {
    fn entries(&self) -> Result<Vec<ScheduleEntry>>;
}

/// Page-oriented drawing backend. Coordinates are millimetres from the
/// page's bottom-left corner, font sizes are points. The document itself is
/// opened by the implementation's constructor; `finish` is the only point at
/// which output becomes durable.
pub trait Canvas {
    fn set_color(&mut self, color: ResolvedColor);
    fn text_left(&mut self, x: f32, y: f32, style: FontStyle, size: f32, text: &str);
    fn text_centered(&mut self, x: f32, y: f32, style: FontStyle, size: f32, text: &str);
    fn text_right(&mut self, x: f32, y: f32, style: FontStyle, size: f32, text: &str);
    fn new_page(&mut self);
    fn finish(self) -> Result<String>
    where
        Self: Sized;
}
