//!
//! Comment-aware traversal of Markdown documents.
//!
//! The document is parsed with pulldown-cmark and reduced to the two block
//! kinds extraction cares about: code blocks and HTML blocks. HTML comments
//! are unwrapped and their interior is parsed again as Markdown, so code
//! blocks hidden inside `<!-- ... -->` (including nested comments) are
//! reported in the same stream as top-level blocks.

use crate::tags::parse_tags;
use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag, TagEnd};

const COMMENT_OPEN: &str = "<!--";
const COMMENT_CLOSE: &str = "-->";

/// A block-level node the walker inspects. Every other node kind is dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Fenced or indented code block. Indented blocks have an empty info string.
    Code { info: String, literal: String },
    /// Raw HTML block, possibly an HTML comment.
    Html { literal: String },
}

fn parser_options() -> Options {
    Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_GFM
}

/// Parse a Markdown fragment into its code and HTML blocks, in document order.
pub fn parse_blocks(content: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut current: Option<Block> = None;

    for event in Parser::new_ext(content, parser_options()) {
        match event {
            Event::Start(Tag::CodeBlock(kind)) => {
                let info = match kind {
                    CodeBlockKind::Fenced(info) => info.into_string(),
                    CodeBlockKind::Indented => String::new(),
                };
                current = Some(Block::Code {
                    info,
                    literal: String::new(),
                });
            }
            Event::Start(Tag::HtmlBlock) => {
                current = Some(Block::Html {
                    literal: String::new(),
                });
            }
            Event::Text(text) | Event::Html(text) => {
                if let Some(Block::Code { literal, .. } | Block::Html { literal }) = current.as_mut() {
                    literal.push_str(&text);
                }
            }
            Event::End(TagEnd::CodeBlock | TagEnd::HtmlBlock) => {
                if let Some(block) = current.take() {
                    blocks.push(block);
                }
            }
            _ => {}
        }
    }

    blocks
}

/// Strip one leading `<!--` and one trailing `-->` from an HTML block.
///
/// Either delimiter may be missing (unclosed comments are common at the end
/// of a document). Returns `None` when neither is present, since the text is
/// then not a comment and re-parsing it would yield the same HTML block.
pub fn comment_interior(literal: &str) -> Option<&str> {
    let trimmed = literal.trim();
    let opened = trimmed.strip_prefix(COMMENT_OPEN);
    let body = opened.unwrap_or(trimmed);
    let closed = body.strip_suffix(COMMENT_CLOSE);

    if opened.is_none() && closed.is_none() {
        return None;
    }

    Some(closed.unwrap_or(body))
}

/// Receives every code block found by [`CommentWalker::walk`], in document order.
pub trait BlockVisitor {
    fn visit_code_block(&mut self, tags: &[&str], literal: &str);
}

impl<F> BlockVisitor for F
where
    F: FnMut(&[&str], &str),
{
    fn visit_code_block(&mut self, tags: &[&str], literal: &str) {
        self(tags, literal)
    }
}

/// Failure of a nested branch. Never escapes [`CommentWalker::walk`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WalkError {
    #[error("HTML comments nested deeper than {max_depth} levels")]
    NestingTooDeep { max_depth: usize },
}

/// Depth-first walker that unwraps HTML comments.
///
/// Nesting is unbounded unless a maximum depth is set. The walk keeps its own
/// stack of pending fragments, so deep nesting costs heap, not call stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentWalker {
    include_comments: bool,
    max_depth: Option<usize>,
}

impl Default for CommentWalker {
    fn default() -> Self {
        Self {
            include_comments: true,
            max_depth: None,
        }
    }
}

impl CommentWalker {
    pub fn new(include_comments: bool, max_depth: Option<usize>) -> Self {
        Self {
            include_comments,
            max_depth,
        }
    }

    /// Walk `content`, handing each code block's tags and literal to `visitor`.
    ///
    /// A comment's interior is visited before the blocks that follow the
    /// comment. A branch nested past the maximum depth is logged and
    /// skipped; its siblings and ancestors are still visited.
    pub fn walk(&self, content: &str, visitor: &mut dyn BlockVisitor) {
        let mut pending = vec![(0usize, parse_blocks(content).into_iter())];

        while let Some((depth, blocks)) = pending.last_mut() {
            let depth = *depth;
            let Some(block) = blocks.next() else {
                pending.pop();
                continue;
            };

            match block {
                Block::Code { info, literal } => {
                    let tags = parse_tags(&info);
                    log::trace!("[walker] depth {depth}: code block {tags:?}");
                    visitor.visit_code_block(&tags, &literal);
                }
                Block::Html { literal } => {
                    if !self.include_comments {
                        continue;
                    }
                    let Some(interior) = comment_interior(&literal) else {
                        log::trace!("[walker] depth {depth}: HTML block is not a comment");
                        continue;
                    };
                    if let Err(e) = self.check_depth(depth + 1) {
                        log::warn!("Skipping nested HTML comment: {e}");
                        continue;
                    }
                    pending.push((depth + 1, parse_blocks(interior).into_iter()));
                }
            }
        }
    }

    fn check_depth(&self, depth: usize) -> Result<(), WalkError> {
        match self.max_depth {
            Some(max_depth) if depth > max_depth => Err(WalkError::NestingTooDeep { max_depth }),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn collect(walker: &CommentWalker, content: &str) -> Vec<(Vec<String>, String)> {
        let mut found = Vec::new();
        walker.walk(content, &mut |tags: &[&str], literal: &str| {
            found.push((tags.iter().map(|t| t.to_string()).collect(), literal.to_string()));
        });
        found
    }

    fn literals(walker: &CommentWalker, content: &str) -> Vec<String> {
        collect(walker, content).into_iter().map(|(_, literal)| literal).collect()
    }

    #[test]
    fn test_parse_blocks_kinds() {
        let content = "# Title\n\nSome text\n\n```go ci\nfmt.Println()\n```\n\n    indented\n\n<div>\nhtml\n</div>\n";
        let blocks = parse_blocks(content);
        assert_eq!(
            blocks,
            vec![
                Block::Code {
                    info: "go ci".to_string(),
                    literal: "fmt.Println()\n".to_string(),
                },
                Block::Code {
                    info: String::new(),
                    literal: "indented\n".to_string(),
                },
                Block::Html {
                    literal: "<div>\nhtml\n</div>\n".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_parse_blocks_nested_containers() {
        let content = "- item\n\n  ```sh\n  echo list\n  ```\n\n> ```sh\n> echo quote\n> ```\n";
        let blocks = parse_blocks(content);
        assert_eq!(blocks.len(), 2);
        assert_eq!(
            blocks[0],
            Block::Code {
                info: "sh".to_string(),
                literal: "echo list\n".to_string()
            }
        );
        assert_eq!(
            blocks[1],
            Block::Code {
                info: "sh".to_string(),
                literal: "echo quote\n".to_string()
            }
        );
    }

    #[test]
    fn test_parse_blocks_tilde_fence_and_empty_block() {
        let blocks = parse_blocks("~~~yaml\nkey: value\n~~~\n\n```\n```\n");
        assert_eq!(
            blocks,
            vec![
                Block::Code {
                    info: "yaml".to_string(),
                    literal: "key: value\n".to_string(),
                },
                Block::Code {
                    info: String::new(),
                    literal: String::new(),
                },
            ]
        );
    }

    #[test]
    fn test_inline_html_comment_is_ignored() {
        assert!(parse_blocks("Some text <!-- inline --> more text\n").is_empty());
    }

    #[test]
    fn test_comment_interior() {
        assert_eq!(comment_interior("<!-- x -->\n"), Some(" x "));
        assert_eq!(comment_interior("<!--\ncode\n"), Some("\ncode"));
        assert_eq!(comment_interior("<div>\n-->"), Some("<div>\n"));
        assert_eq!(comment_interior("<!---->"), Some(""));
        assert_eq!(comment_interior("<div>\n</div>\n"), None);
    }

    #[test]
    fn test_walk_comment_block() {
        let content = "Some text\n<!--\n```bash\ncode block inside comment\n```\n-->";
        let found = collect(&CommentWalker::default(), content);
        assert_eq!(
            found,
            vec![(vec!["bash".to_string()], "code block inside comment\n".to_string())]
        );
    }

    #[test]
    fn test_walk_excluding_comments() {
        let content = "```go\ntop\n```\n\n<!--\n```go\nhidden\n```\n-->\n";
        let walker = CommentWalker::new(false, None);
        assert_eq!(literals(&walker, content), vec!["top\n"]);
    }

    #[test]
    fn test_walk_nested_comments_in_order() {
        let content = "<!--\n```go\nouter\n```\n<!--\n```go\ninner\n```\n-->\n-->\n```go\nafter\n```\n";
        assert_eq!(
            literals(&CommentWalker::default(), content),
            vec!["outer\n", "inner\n", "after\n"]
        );
    }

    #[test]
    fn test_walk_unclosed_comment_is_scanned() {
        let content = "```go\nbefore\n```\n\n<!--\n```go\nunclosed\n```\n";
        assert_eq!(
            literals(&CommentWalker::default(), content),
            vec!["before\n", "unclosed\n"]
        );
    }

    #[test]
    fn test_walk_non_comment_html_terminates() {
        let content = "<div>\n\n```go\ninside div\n```\n\n</div>\n";
        assert_eq!(literals(&CommentWalker::default(), content), vec!["inside div\n"]);
    }

    #[test]
    fn test_walk_depth_limit_skips_only_deep_branch() {
        let content = "<!--\n```go\nlevel one\n```\n<!--\n```go\nlevel two\n```\n-->\n-->\n\n```go\nsibling\n```\n";

        let shallow = CommentWalker::new(true, Some(1));
        assert_eq!(literals(&shallow, content), vec!["level one\n", "sibling\n"]);

        let none = CommentWalker::new(true, Some(0));
        assert_eq!(literals(&none, content), vec!["sibling\n"]);
    }

    fn wrap(doc: &str) -> String {
        format!("<!--\n{doc}-->\n")
    }

    fn wrap_n(doc: &str, levels: usize) -> String {
        let mut wrapped = doc.to_string();
        for _ in 0..levels {
            wrapped = wrap(&wrapped);
        }
        wrapped
    }

    #[test]
    fn test_walk_deep_nesting_has_no_default_limit() {
        let doc = "```go ci\ndeep\n```\n";
        let walker = CommentWalker::default();
        assert_eq!(literals(&walker, &wrap_n(doc, 65)), vec!["deep\n"]);
        assert_eq!(literals(&walker, &wrap_n(doc, 3000)), vec!["deep\n"]);
    }

    #[test]
    fn test_walk_deep_nesting_keeps_document_order() {
        let mut doc = String::from("```\nlast\n```\n");
        for i in (0..2000).rev() {
            doc = format!("<!--\n```\n{i}\n```\n{doc}-->\n");
        }
        doc.push_str("```\nafter\n```\n");

        let found = literals(&CommentWalker::default(), &doc);
        assert_eq!(found.len(), 2002);
        assert_eq!(found[0], "0\n");
        assert_eq!(found[1999], "1999\n");
        assert_eq!(found[2000], "last\n");
        assert_eq!(found[2001], "after\n");
    }

    fn block_strategy() -> impl Strategy<Value = Vec<(Vec<String>, Vec<String>)>> {
        prop::collection::vec(
            (
                prop::collection::vec("[a-z]{1,4}", 0..4),
                prop::collection::vec("[a-z]{0,8}", 1..4),
            ),
            0..5,
        )
    }

    fn render(blocks: &[(Vec<String>, Vec<String>)]) -> String {
        let mut doc = String::new();
        for (tags, lines) in blocks {
            doc.push_str(&format!("```{}\n", tags.join(" ")));
            for line in lines {
                doc.push_str(line);
                doc.push('\n');
            }
            doc.push_str("```\n\n");
        }
        doc
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_nesting_is_flattened(blocks in block_strategy(), levels in prop_oneof![0usize..4, 60usize..130]) {
            let doc = render(&blocks);
            let wrapped = wrap_n(&doc, levels);

            let walker = CommentWalker::default();
            prop_assert_eq!(collect(&walker, &wrapped), collect(&walker, &doc));
        }
    }
}
