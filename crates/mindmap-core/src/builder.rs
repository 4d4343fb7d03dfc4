use serde::{Deserialize, Serialize};

use crate::diagnostics::{Diagnostic, DiagnosticSeverity};
use crate::tree::Tree;
use crate::utils::note_snippet;

#[cfg(test)]
mod tests;

/// Maximum number of characters of note text attached as a leaf
pub const NOTE_TEXT_LENGTH_LIMIT: usize = 80;

pub const DECK_SEPARATOR: &str = "::";
pub const DEFAULT_TAG_SEPARATOR: &str = "::";

/// Source of all known flat paths (tags, deck names, note keys)
pub trait PathSource {
    fn all_paths(&self) -> Vec<String>;
}

/// Source of short texts belonging to a path.
/// `path` is a prefix query: texts of everything at or below it match.
pub trait TextLookup {
    fn lookup(&self, query: &str, path: &str) -> Vec<String>;
}

impl PathSource for Vec<String> {
    fn all_paths(&self) -> Vec<String> {
        self.clone()
    }
}

impl<const N: usize> PathSource for [&str; N] {
    fn all_paths(&self) -> Vec<String> {
        self.iter().map(|p| p.to_string()).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MindmapKind {
    #[default]
    Tag,
    Deck,
}

impl std::str::FromStr for MindmapKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tag" | "tags" => Ok(MindmapKind::Tag),
            "deck" | "decks" => Ok(MindmapKind::Deck),
            other => Err(format!("unknown mindmap kind '{other}', expected 'tag' or 'deck'")),
        }
    }
}

impl MindmapKind {
    /// Name used when querying the text lookup
    pub fn query(self) -> &'static str {
        match self {
            MindmapKind::Tag => "tag",
            MindmapKind::Deck => "deck",
        }
    }
}

/// Everything that distinguishes one kind of path mindmap from another
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceConfig {
    pub separator: String,
    #[serde(default)]
    pub prefix: Option<String>,
    pub query: String,
    #[serde(default = "default_true")]
    pub include_notes: bool,
    #[serde(default)]
    pub root_label: Option<String>,
}

fn default_true() -> bool {
    true
}

impl SourceConfig {
    pub fn for_kind(kind: MindmapKind, tag_separator: &str) -> Self {
        let separator = match kind {
            MindmapKind::Tag => tag_separator,
            MindmapKind::Deck => DECK_SEPARATOR,
        };
        Self {
            separator: separator.to_string(),
            prefix: None,
            query: kind.query().to_string(),
            include_notes: true,
            root_label: None,
        }
    }

    pub fn tags() -> Self {
        Self::for_kind(MindmapKind::Tag, DEFAULT_TAG_SEPARATOR)
    }

    pub fn decks() -> Self {
        Self::for_kind(MindmapKind::Deck, DECK_SEPARATOR)
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    pub fn with_include_notes(mut self, include_notes: bool) -> Self {
        self.include_notes = include_notes;
        self
    }

    pub fn with_root_label(mut self, label: impl Into<String>) -> Self {
        self.root_label = Some(label.into());
        self
    }

    fn prefix_parts(&self) -> Vec<&str> {
        match self.prefix.as_deref() {
            Some(prefix) if !prefix.is_empty() => split(prefix, &self.separator),
            _ => Vec::new(),
        }
    }

    /// Paths are kept when every position shared with the prefix agrees
    pub fn matches_prefix(&self, path: &str) -> bool {
        let prefix = self.prefix_parts();
        split(path, &self.separator)
            .iter()
            .zip(prefix.iter())
            .all(|(a, b)| a == b)
    }

    /// Parts of `path` below the prefix
    pub fn strip_prefix<'p>(&self, path: &'p str) -> Vec<&'p str> {
        let depth = self.prefix_parts().len();
        split(path, &self.separator).into_iter().skip(depth).collect()
    }
}

fn split<'s>(value: &'s str, separator: &str) -> Vec<&'s str> {
    if separator.is_empty() {
        return vec![value];
    }
    value.split(separator).collect()
}

pub struct BuiltMindmap {
    pub tree: Tree,
    pub diagnostics: Vec<Diagnostic>,
}

/// Builds a path mindmap from a [`PathSource`] and optional [`TextLookup`].
pub struct MindmapBuilder<'a> {
    config: SourceConfig,
    paths: &'a dyn PathSource,
    texts: Option<&'a dyn TextLookup>,
}

impl<'a> MindmapBuilder<'a> {
    pub fn new(config: SourceConfig, paths: &'a dyn PathSource) -> Self {
        Self {
            config,
            paths,
            texts: None,
        }
    }

    pub fn with_text_lookup(mut self, texts: &'a dyn TextLookup) -> Self {
        self.texts = Some(texts);
        self
    }

    /// Known paths that pass the prefix filter, in source order
    pub fn paths(&self) -> Vec<String> {
        self.paths
            .all_paths()
            .into_iter()
            .filter(|path| self.config.matches_prefix(path))
            .collect()
    }

    pub fn build(&self) -> BuiltMindmap {
        let mut tree = Tree::with_root_label(self.config.root_label.as_deref());
        let mut diagnostics = Vec::new();
        let paths = self.paths();

        if paths.is_empty() {
            if let Some(prefix) = &self.config.prefix {
                diagnostics.push(Diagnostic {
                    severity: DiagnosticSeverity::Info,
                    message: format!("No path matches prefix '{prefix}'"),
                    line: None,
                });
            }
        }

        for path in &paths {
            tree.insert_parts(self.config.strip_prefix(path));
        }

        if let (true, Some(texts)) = (self.config.include_notes, self.texts) {
            for path in &paths {
                let snippets: Vec<String> = texts
                    .lookup(&self.config.query, path)
                    .iter()
                    .filter_map(|text| note_snippet(text, NOTE_TEXT_LENGTH_LIMIT))
                    .collect();
                if snippets.is_empty() {
                    continue;
                }

                let leaf = tree.insert_parts(self.config.strip_prefix(path));
                for snippet in snippets {
                    tree.get_or_create_child(leaf, &snippet);
                }
            }
        }

        log::debug!(
            "Built {} mindmap from {} paths: {} nodes",
            self.config.query,
            paths.len(),
            tree.len()
        );

        BuiltMindmap { tree, diagnostics }
    }
}
