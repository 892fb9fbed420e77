//!
//! Tag parsing for fenced code block info strings.
//!
//! An info string such as `go file=main.go ci` is split on single space
//! characters into an ordered tag sequence. Tabs and newlines are trimmed from
//! the edges of each token but do not split a token on their own, so
//! `go\tci` stays one tag while `go \tci` becomes `["go", "ci"]`.

/// Prefix of the reserved tag that routes a block to an output file.
pub const FILE_TAG_PREFIX: &str = "file=";

/// Split an info string into its ordered, non-empty tags.
pub fn parse_tags(info: &str) -> Vec<&str> {
    info.split(' ').map(str::trim).filter(|tag| !tag.is_empty()).collect()
}

/// Separate the reserved `file=` tags from the rest of a tag sequence.
///
/// Returns the value of the last `file=` tag (later tags override earlier
/// ones) together with the remaining tags in their original order. An empty
/// value is reported as no destination.
pub fn split_file_tag<'a>(tags: &[&'a str]) -> (Option<&'a str>, Vec<&'a str>) {
    let mut file = None;
    let mut other_tags = Vec::with_capacity(tags.len());

    for &tag in tags {
        match tag.strip_prefix(FILE_TAG_PREFIX) {
            Some(path) => file = Some(path),
            None => other_tags.push(tag),
        }
    }

    (file.filter(|path| !path.is_empty()), other_tags)
}
