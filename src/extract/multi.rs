use super::{ExtractError, ExtractOptions, read_document};
use crate::tags::split_file_tag;
use indexmap::IndexMap;
use std::path::Path;

/// Destination path to accumulated content, in first-encounter order.
pub type FileMap = IndexMap<String, String>;

/// Routes accepted code blocks to files named by their `file=<path>` tag.
///
/// Blocks without a file tag are skipped before filtering. The `file=` tags
/// themselves never take part in filtering. Blocks routed to the same path are
/// appended in document order.
#[derive(Debug, Clone, Default)]
pub struct MultiExtractor {
    options: ExtractOptions,
}

impl MultiExtractor {
    pub fn new(options: ExtractOptions) -> Self {
        Self { options }
    }

    pub fn extract(&self, content: &str) -> FileMap {
        let mut files = FileMap::new();
        let filter = &self.options.filter;

        self.options
            .walker()
            .walk(content, &mut |tags: &[&str], literal: &str| {
                let (file, other_tags) = split_file_tag(tags);
                let Some(file) = file else {
                    return;
                };

                if !filter.accept(&other_tags) {
                    log::debug!("[multi] skipping block for {file} tagged {other_tags:?}");
                    return;
                }

                files.entry(file.to_string()).or_default().push_str(literal);
            });

        files
    }

    pub fn extract_from_file(&self, path: &Path) -> Result<FileMap, ExtractError> {
        let content = read_document(path)?;
        Ok(self.extract(&content))
    }
}

/// Append every entry of `from` onto `into`, keeping first-seen key order.
pub fn merge_file_maps(into: &mut FileMap, from: FileMap) {
    for (file, content) in from {
        into.entry(file).or_default().push_str(&content);
    }
}
