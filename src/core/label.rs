use crate::config::PageGeometry;
use crate::domain::model::{FontStyle, GridPosition, ResolvedColor, ScheduleEntry};
use crate::domain::ports::Canvas;

// Font sizes in points.
const HEADER_FONT_SIZE: f32 = 25.0;
const TIME_FONT_SIZE: f32 = 25.0;
const DETAIL_FONT_SIZE: f32 = 10.0;
const OVERLAY_FONT_SIZE: f32 = 8.0;
const CELL_TAG_FONT_SIZE: f32 = 6.0;

// Inner label padding and baseline tweaks, in mm.
const PADDING: f32 = 3.0;
const TIME_BASELINE_DROP: f32 = 1.8;
const HEADER_BASELINE_RISE: f32 = 2.5;

const OVERLAY_GRAY: ResolvedColor = ResolvedColor {
    r: 0.5,
    g: 0.5,
    b: 0.5,
};

/// Draw the header band: the entry name centered over the label grid, inside
/// the reserved top row. The page number only appears with the debug
/// overlay; it never moves anything.
pub fn draw_header<C: Canvas>(
    canvas: &mut C,
    geometry: &PageGeometry,
    entry: &ScheduleEntry,
    color: ResolvedColor,
    page_number: u32,
    overlay: bool,
) {
    canvas.set_color(color);
    let y = geometry.page_height - geometry.margin_y - geometry.label_height + HEADER_BASELINE_RISE;
    canvas.text_centered(
        geometry.grid_center_x(),
        y,
        FontStyle::Bold,
        HEADER_FONT_SIZE,
        &entry.name,
    );

    if overlay {
        canvas.text_right(
            geometry.page_width - geometry.margin_x,
            geometry.margin_y / 2.0,
            FontStyle::Regular,
            OVERLAY_FONT_SIZE,
            &format!("Page {}", page_number),
        );
    }
}

/// Draw one label cell: entry name top-left, the time slot large and
/// centered, the day bottom-right, stacked in thirds of the label height.
pub fn draw_label<C: Canvas>(
    canvas: &mut C,
    geometry: &PageGeometry,
    origin: (f32, f32),
    time_text: &str,
    entry: &ScheduleEntry,
    color: ResolvedColor,
    position: GridPosition,
    overlay: bool,
) {
    let (x, y) = origin;
    let third = geometry.label_height / 3.0;
    let base = y - geometry.label_height + PADDING;

    canvas.set_color(color);

    canvas.text_left(
        x + PADDING,
        base + 2.0 * third,
        FontStyle::Regular,
        DETAIL_FONT_SIZE,
        &entry.name,
    );
    canvas.text_centered(
        x + geometry.label_width / 2.0,
        base + third - TIME_BASELINE_DROP,
        FontStyle::Bold,
        TIME_FONT_SIZE,
        time_text,
    );
    canvas.text_right(
        x + geometry.label_width - PADDING,
        base,
        FontStyle::Regular,
        DETAIL_FONT_SIZE,
        &entry.day,
    );

    if overlay {
        canvas.set_color(OVERLAY_GRAY);
        canvas.text_left(
            x + 2.0,
            y - geometry.label_height + 2.0,
            FontStyle::Regular,
            CELL_TAG_FONT_SIZE,
            &format!("R{} C{}", position.row, position.column),
        );
        canvas.set_color(color);
    }
}
