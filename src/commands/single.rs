//! Handler for the `single` command.

use anyhow::Context;
use mdextract_lib::extract::SingleExtractor;
use mdextract_lib::output::{self, OutputTarget};
use mdextract_lib::parallel::FileParallelProcessor;

use super::{GlobalOptions, Outcome, resolve_settings};
use crate::cli_types::SingleArgs;

/// Extract every input and write the concatenation once, in argument order.
pub fn handle_single(args: &SingleArgs, global: &GlobalOptions) -> anyhow::Result<Outcome> {
    let settings = resolve_settings(global, &args.filter)?;
    let extractor = SingleExtractor::new(settings.options);

    let parts = FileParallelProcessor::with_default_config()
        .process_files(&args.filter.files, |path| extractor.extract_from_file(path))?;
    let content = parts.concat();

    let target = OutputTarget::parse(&args.output);
    output::write_single(&target, &content, settings.write_mode, settings.file_mode)
        .with_context(|| format!("Failed to write extracted code to {}", args.output))?;

    log::debug!(
        "Extracted {} bytes from {} file(s)",
        content.len(),
        args.filter.files.len()
    );

    Ok(Outcome::from_extracted(!content.is_empty(), args.filter.fail_on_empty))
}
