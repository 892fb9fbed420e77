//!
//! Tag-based acceptance of code blocks.

/// Decides which code blocks are extracted, based only on their tags.
///
/// A block is accepted when it carries every required tag and none of the
/// excluded tags. Exclusion wins when a tag is both required and excluded.
/// Matching is exact: `ci` does not match `citation`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagFilter {
    required: Vec<String>,
    excluded: Vec<String>,
}

impl TagFilter {
    pub fn new<R, E>(required: R, excluded: E) -> Self
    where
        R: IntoIterator,
        R::Item: Into<String>,
        E: IntoIterator,
        E::Item: Into<String>,
    {
        Self {
            required: required.into_iter().map(Into::into).collect(),
            excluded: excluded.into_iter().map(Into::into).collect(),
        }
    }

    pub fn required(&self) -> &[String] {
        &self.required
    }

    pub fn excluded(&self) -> &[String] {
        &self.excluded
    }

    pub fn accept(&self, tags: &[&str]) -> bool {
        let has = |wanted: &String| tags.iter().any(|tag| *tag == wanted.as_str());

        if !self.required.iter().all(has) {
            return false;
        }

        !self.excluded.iter().any(has)
    }
}
