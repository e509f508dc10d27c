use crate::config::SheetConfig;
use crate::core::{color, label, slots};
use crate::domain::model::{GridPosition, ScheduleEntry};
use crate::domain::ports::Canvas;

/// Drives header emission and label placement across entries.
///
/// Every entry starts on a fresh page, even when the previous entry left its
/// last page partially filled. Within an entry, a new page with the header
/// re-emitted begins whenever the running slot index rolls over the page
/// capacity.
pub struct Paginator<'a, C: Canvas> {
    canvas: &'a mut C,
    sheet: &'a SheetConfig,
    pages: u32,
}

impl<'a, C: Canvas> Paginator<'a, C> {
    pub fn new(canvas: &'a mut C, sheet: &'a SheetConfig) -> Self {
        Self {
            canvas,
            sheet,
            pages: 0,
        }
    }

    /// Number of pages opened so far.
    pub fn pages(&self) -> u32 {
        self.pages
    }

    /// Lay out one entry. A window that expands to zero slots still gets its
    /// header page.
    pub fn render_entry(&mut self, entry: &ScheduleEntry) {
        let geometry = &self.sheet.geometry;
        let capacity = geometry.capacity();
        let color = color::resolve(&entry.color);

        // The document opens on a blank first page; every entry after the
        // first gets its own.
        if self.pages > 0 {
            self.canvas.new_page();
        }
        self.pages += 1;
        label::draw_header(
            self.canvas,
            geometry,
            entry,
            color,
            self.pages,
            self.sheet.debug_overlay,
        );

        let mut placed = 0usize;
        for (i, slot) in slots::expand(entry.start, entry.end, self.sheet.step_minutes).enumerate()
        {
            let position = GridPosition::locate(i, capacity, geometry.columns);
            if position.first_of_new_page {
                self.canvas.new_page();
                self.pages += 1;
                label::draw_header(
                    self.canvas,
                    geometry,
                    entry,
                    color,
                    self.pages,
                    self.sheet.debug_overlay,
                );
            }
            let origin = geometry.cell_top_left(position.row, position.column);
            label::draw_label(
                self.canvas,
                geometry,
                origin,
                &slot,
                entry,
                color,
                position,
                self.sheet.debug_overlay,
            );
            placed += 1;
        }

        tracing::debug!("Placed {} labels for '{}'", placed, entry.name);
    }
}
