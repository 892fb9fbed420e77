use super::{ExtractError, ExtractOptions, read_document};
use std::path::Path;

/// Concatenates the literal content of every accepted code block.
///
/// Blocks are joined in document order with no separator: each block already
/// ends with whatever newline its source had.
#[derive(Debug, Clone, Default)]
pub struct SingleExtractor {
    options: ExtractOptions,
}

impl SingleExtractor {
    pub fn new(options: ExtractOptions) -> Self {
        Self { options }
    }

    pub fn extract(&self, content: &str) -> String {
        let mut output = String::new();
        let filter = &self.options.filter;

        self.options
            .walker()
            .walk(content, &mut |tags: &[&str], literal: &str| {
                if filter.accept(tags) {
                    output.push_str(literal);
                } else {
                    log::debug!("[single] skipping block tagged {tags:?}");
                }
            });

        output
    }

    pub fn extract_from_file(&self, path: &Path) -> Result<String, ExtractError> {
        let content = read_document(path)?;
        Ok(self.extract(&content))
    }
}
