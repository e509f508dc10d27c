use clap::Parser;
use slot_labels::utils::{logger, validation::Validate};
use slot_labels::{CliConfig, CsvEntrySource, LabelEngine, PdfCanvas};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting slot-labels");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let sheet = config.sheet_config()?;

    let source = CsvEntrySource::new(&config.input);
    let canvas = PdfCanvas::new(&config.output, &sheet.geometry)?;
    let engine = LabelEngine::new(source, canvas, sheet);

    match engine.run() {
        Ok(output_path) => {
            tracing::info!("✅ Label sheet generated successfully!");
            println!("✅ Label sheet generated successfully!");
            println!("📁 Output saved to: {}", output_path);
        }
        Err(e) => {
            tracing::error!("❌ Label generation failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
