use crate::config::SheetConfig;
use crate::core::paginate::Paginator;
use crate::domain::ports::{Canvas, EntrySource};
use crate::utils::error::Result;

/// Top-level driver: pulls all entries from the source, lays them out
/// through the paginator, then finalizes the document.
pub struct LabelEngine<S: EntrySource, C: Canvas> {
    source: S,
    canvas: C,
    sheet: SheetConfig,
}

impl<S: EntrySource, C: Canvas> LabelEngine<S, C> {
    pub fn new(source: S, canvas: C, sheet: SheetConfig) -> Self {
        Self {
            source,
            canvas,
            sheet,
        }
    }

    pub fn run(mut self) -> Result<String> {
        println!("Reading schedule entries...");
        let entries = self.source.entries()?;
        println!("Loaded {} entries", entries.len());

        println!("Laying out labels...");
        let mut paginator = Paginator::new(&mut self.canvas, &self.sheet);
        for entry in &entries {
            paginator.render_entry(entry);
        }
        let pages = paginator.pages();
        println!("Rendered {} pages", pages);

        println!("Writing document...");
        let output_path = self.canvas.finish()?;
        println!("Output saved to: {}", output_path);

        Ok(output_path)
    }
}
