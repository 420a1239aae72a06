use anyhow::Result;
use tracing::info;

use qti_cli::pipeline::{ConvertOptions, convert};
use qti_cli::report::write_report;
use qti_cli::types::ConversionResult;
use qti_model::TextMode;

use crate::cli::Cli;

pub fn run_convert(cli: &Cli) -> Result<ConversionResult> {
    let options = ConvertOptions {
        input: cli.input.clone(),
        output_dir: cli.output_dir.clone(),
        text_mode: if cli.raw_text {
            TextMode::Raw
        } else {
            TextMode::Escaped
        },
        dry_run: cli.dry_run,
    };
    let result = convert(&options)?;
    if let Some(path) = &cli.report {
        write_report(&result, path)?;
        info!(path = %path.display(), "run report written");
    }
    Ok(result)
}
