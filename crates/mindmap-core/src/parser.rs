//! Indented outline text -> [`Tree`].
//!
//! One node per non-blank line. Nesting is inferred from leading
//! whitespace relative to the lines above, so indentation widths do not
//! need to be uniform. A line holding only `""` is a node with empty
//! content.

use crate::diagnostics::Diagnostic;
use crate::model::{NodeId, EMPTY_CONTENT_MARKER};
use crate::tree::Tree;

#[cfg(test)]
mod tests;

pub const DEFAULT_TAB_WIDTH: usize = 4;

pub struct ParsedOutline {
    pub tree: Tree,
    pub diagnostics: Vec<Diagnostic>,
}

#[derive(Debug, Clone)]
pub struct OutlineParser {
    tab_width: usize,
}

/// Parses `text` with the default tab width.
pub fn parse_outline(text: &str, root_label: Option<&str>) -> ParsedOutline {
    OutlineParser::new().parse(text, root_label)
}

struct OutlineLine<'t> {
    number: usize,
    indent: usize,
    content: &'t str,
}

impl OutlineParser {
    pub fn new() -> Self {
        Self {
            tab_width: DEFAULT_TAB_WIDTH,
        }
    }

    pub fn with_tab_width(mut self, tab_width: usize) -> Self {
        self.tab_width = tab_width;
        self
    }

    pub fn parse(&self, text: &str, root_label: Option<&str>) -> ParsedOutline {
        let lines: Vec<OutlineLine> = text
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(index, line)| OutlineLine {
                number: index + 1,
                indent: self.indent_of(line),
                content: match line.trim() {
                    EMPTY_CONTENT_MARKER => "",
                    content => content,
                },
            })
            .collect();

        let mut tree = Tree::with_root_label(root_label);
        let mut diagnostics = Vec::new();

        // A lone top-level line is the root itself unless a label was forced
        let mut body = lines.as_slice();
        if root_label.is_none() && Self::has_single_top_level(&lines) {
            if let Some((first, rest)) = lines.split_first() {
                tree.set_root_label(first.content);
                body = rest;
            }
        }

        // (indent, node); the root frame sits below any real indentation
        let mut stack: Vec<(Option<usize>, NodeId)> = vec![(None, tree.root())];

        for line in body {
            while let Some((Some(indent), _)) = stack.last() {
                if *indent >= line.indent {
                    stack.pop();
                } else {
                    break;
                }
            }

            let parent = stack.last().map(|(_, id)| *id).unwrap_or(tree.root());
            if Self::has_sibling_with_content(&tree, parent, line.content) {
                log::warn!(
                    "Duplicate content {:?} on line {}",
                    line.content,
                    line.number
                );
                diagnostics.push(Diagnostic::warning(
                    format!("Duplicate content: {}", line.content),
                    Some(line.number),
                ));
            }

            let node = tree.add_child(parent, line.content);
            stack.push((Some(line.indent), node));
        }

        ParsedOutline { tree, diagnostics }
    }

    fn indent_of(&self, line: &str) -> usize {
        line.chars()
            .take_while(|c| c.is_whitespace())
            .map(|c| if c == '\t' { self.tab_width } else { 1 })
            .sum()
    }

    /// True when exactly one line sits at the outermost indentation and it
    /// comes first, i.e. every other line nests under it.
    fn has_single_top_level(lines: &[OutlineLine]) -> bool {
        let Some(first) = lines.first() else {
            return false;
        };
        lines[1..].iter().all(|line| line.indent > first.indent)
    }

    fn has_sibling_with_content(tree: &Tree, parent: NodeId, content: &str) -> bool {
        tree.children(parent)
            .iter()
            .any(|sibling| tree[*sibling].content == content)
    }
}

impl Default for OutlineParser {
    fn default() -> Self {
        Self::new()
    }
}
