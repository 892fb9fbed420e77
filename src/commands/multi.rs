//! Handler for the `multi` command.

use mdextract_lib::extract::{FileMap, MultiExtractor, merge_file_maps};
use mdextract_lib::output;
use mdextract_lib::parallel::FileParallelProcessor;

use super::{GlobalOptions, Outcome, resolve_settings};
use crate::cli_types::MultiArgs;

/// Extract every input, fold the results in argument order, then write one file per path.
///
/// All inputs are extracted before anything is written, so an unreadable
/// input leaves the destination files untouched.
pub fn handle_multi(args: &MultiArgs, global: &GlobalOptions) -> anyhow::Result<Outcome> {
    let settings = resolve_settings(global, &args.filter)?;
    let extractor = MultiExtractor::new(settings.options);

    let maps = FileParallelProcessor::with_default_config()
        .process_files(&args.filter.files, |path| extractor.extract_from_file(path))?;

    let mut files = FileMap::new();
    for map in maps {
        merge_file_maps(&mut files, map);
    }

    let written = output::write_file_map(&files, settings.write_mode, settings.file_mode)?;
    log::debug!("Wrote {written} file(s) from {} input(s)", args.filter.files.len());

    Ok(Outcome::from_extracted(written > 0, args.filter.fail_on_empty))
}
