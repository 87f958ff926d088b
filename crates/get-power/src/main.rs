mod bootstrap;

use anyhow::Result;
use power_core::settings::{OutputFormat, Settings};
use power_data::reader::load_dump;
use power_report::{render_json, render_text};

fn main() -> Result<()> {
    let settings = Settings::load();

    bootstrap::setup_logging(&settings.log_level)?;

    tracing::info!("get-power v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        "File: {}, Prefix: '{}', Top: {}, Format: {}",
        settings.file.display(),
        settings.prefix,
        settings.topn,
        settings.format
    );

    bootstrap::ensure_dump_exists(&settings.file)?;
    let format = settings.output_format()?;

    let (report, stats) = load_dump(&settings.file, &settings.prefix)?;
    tracing::info!(
        "{} of {} data rows matched '{}'",
        stats.matched,
        stats.data_rows,
        settings.prefix
    );
    if stats.data_rows == 0 {
        tracing::warn!(
            "No data rows found in {}; is it a report_power dump?",
            settings.file.display()
        );
    }

    let source_label = settings.file.display().to_string();
    let output = match format {
        OutputFormat::Text => render_text(&report, &settings.prefix, &source_label, settings.topn),
        OutputFormat::Json => {
            let mut json = render_json(&report, &settings.prefix, &source_label, settings.topn)?;
            json.push('\n');
            json
        }
    };
    print!("{}", output);

    Ok(())
}
