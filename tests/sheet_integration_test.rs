use slot_labels::core::{Canvas, EntrySource};
use slot_labels::domain::model::{FontStyle, ResolvedColor};
use slot_labels::{CsvEntrySource, LabelEngine, LabelError, PdfCanvas, SheetConfig};
use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_schedule(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("schedule.csv");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(content.as_bytes()).unwrap();
    path
}

#[test]
fn end_to_end_csv_to_pdf() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_schedule(
        &temp_dir,
        "Class,Start,End,Day,Color\n\
         Yoga,09:00,09:05,Mon,#00FF00\n\
         Pilates,10:00,10:02,Tue,#0000FF\n",
    );
    let output = temp_dir.path().join("labels.pdf");

    let sheet = SheetConfig::default();
    let source = CsvEntrySource::new(&input);
    let canvas = PdfCanvas::new(&output, &sheet.geometry).unwrap();
    let engine = LabelEngine::new(source, canvas, sheet);

    let result = engine.run();
    assert!(result.is_ok());
    assert_eq!(result.unwrap(), output.display().to_string());

    let bytes = std::fs::read(&output).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
    assert!(!bytes.is_empty());
}

#[test]
fn malformed_rows_are_skipped_and_the_rest_render() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_schedule(
        &temp_dir,
        "Yoga,09:00,09:05,Mon,#00FF00\n\
         Broken,09:00\n\
         Pilates,10:00,10:02,Tue,#0000FF\n",
    );

    let source = CsvEntrySource::new(&input);
    let entries = source.entries().unwrap();
    assert_eq!(entries.len(), 2);

    let output = temp_dir.path().join("labels.pdf");
    let sheet = SheetConfig::default();
    let canvas = PdfCanvas::new(&output, &sheet.geometry).unwrap();
    let engine = LabelEngine::new(CsvEntrySource::new(&input), canvas, sheet);
    assert!(engine.run().is_ok());
    assert!(output.exists());
}

#[test]
fn unparseable_time_aborts_without_writing_output() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_schedule(&temp_dir, "Yoga,nine,09:05,Mon,#00FF00\n");
    let output = temp_dir.path().join("labels.pdf");

    let sheet = SheetConfig::default();
    let source = CsvEntrySource::new(&input);
    let canvas = PdfCanvas::new(&output, &sheet.geometry).unwrap();
    let engine = LabelEngine::new(source, canvas, sheet);

    let err = engine.run().unwrap_err();
    assert!(matches!(err, LabelError::TimeParseError { .. }));

    // flush never ran, so the fatal error left no file behind
    assert!(!output.exists());
}

/// Counts canvas operations so page behavior can be asserted on a real
/// CSV-driven run without parsing PDF internals.
#[derive(Default)]
struct CountingCanvas {
    pages: u32,
    texts: u32,
    colors: Vec<ResolvedColor>,
}

impl Canvas for CountingCanvas {
    fn set_color(&mut self, color: ResolvedColor) {
        self.colors.push(color);
    }

    fn text_left(&mut self, _x: f32, _y: f32, _style: FontStyle, _size: f32, _text: &str) {
        self.texts += 1;
    }

    fn text_centered(&mut self, _x: f32, _y: f32, _style: FontStyle, _size: f32, _text: &str) {
        self.texts += 1;
    }

    fn text_right(&mut self, _x: f32, _y: f32, _style: FontStyle, _size: f32, _text: &str) {
        self.texts += 1;
    }

    fn new_page(&mut self) {
        self.pages += 1;
    }

    fn finish(self) -> slot_labels::Result<String> {
        Ok(format!("pages={} texts={}", self.pages + 1, self.texts))
    }
}

#[test]
fn entry_larger_than_one_page_spills_onto_a_second() {
    let temp_dir = TempDir::new().unwrap();
    // 09:00..10:14 is 75 slots at one-minute steps, capacity is 60
    let input = write_schedule(&temp_dir, "Sprint,09:00,10:14,Sat,#FF0000\n");

    let sheet = SheetConfig::default();
    let source = CsvEntrySource::new(&input);
    let engine = LabelEngine::new(source, CountingCanvas::default(), sheet);

    let summary = engine.run().unwrap();
    // one header + 75 labels of three lines each, across two pages
    assert_eq!(summary, format!("pages=2 texts={}", 2 + 75 * 3));
}

#[test]
fn entry_color_reaches_the_canvas() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_schedule(&temp_dir, "Yoga,09:00,09:00,Mon,#00FF00\n");

    let sheet = SheetConfig::default();
    let mut engine_canvas = CountingCanvas::default();
    let source = CsvEntrySource::new(&input);
    let entries = source.entries().unwrap();

    let mut paginator =
        slot_labels::core::paginate::Paginator::new(&mut engine_canvas, &sheet);
    for entry in &entries {
        paginator.render_entry(entry);
    }

    assert!(engine_canvas.colors.contains(&ResolvedColor {
        r: 0.0,
        g: 1.0,
        b: 0.0
    }));
}
