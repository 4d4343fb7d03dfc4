//! A directory of markdown notes acting as the host collection.
//!
//! Note hierarchy comes from file names (`bio.cell.md` -> `bio.cell`),
//! tags from the `tags` frontmatter field.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use mindmap_core::{MindmapKind, PathSource, SourceConfig, SourceSettings, TextLookup};

use crate::error::RenderError;
use crate::markdown::parse_note;
use crate::vfs::{read_utf8, FileSystem};

/// Separator of hierarchical note keys in file names
pub const NOTE_KEY_SEPARATOR: &str = ".";

#[derive(Debug, Clone)]
pub struct VaultNote {
    pub key: String,
    pub path: PathBuf,
    pub tags: Vec<String>,
    pub text: String,
}

pub struct Vault {
    root: PathBuf,
    notes: Vec<VaultNote>,
}

impl Vault {
    pub fn load(root: &Path, fs: &dyn FileSystem) -> Result<Self, RenderError> {
        let mut notes = Vec::new();

        for path in fs.list_files(root, "md") {
            let content = read_utf8(fs, &path)?;
            let parsed = parse_note(&content);
            let Some(key) = path.file_stem().map(|s| s.to_string_lossy().to_string()) else {
                continue;
            };

            notes.push(VaultNote {
                key,
                path,
                tags: parsed.tags,
                text: parsed.text,
            });
        }

        log::debug!("Loaded {} notes from {:?}", notes.len(), root);

        Ok(Self {
            root: root.to_path_buf(),
            notes,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn notes(&self) -> &[VaultNote] {
        &self.notes
    }

    /// Paths and texts of this vault seen as the given kind of mindmap
    pub fn source(&self, kind: MindmapKind) -> VaultSource<'_> {
        VaultSource { vault: self, kind }
    }
}

pub struct VaultSource<'v> {
    vault: &'v Vault,
    kind: MindmapKind,
}

impl VaultSource<'_> {
    /// Builder settings for this source; deck hierarchies use the note key
    /// separator, tags keep the configured one.
    pub fn source_config(&self, settings: &SourceSettings) -> SourceConfig {
        let settings = SourceSettings {
            kind: self.kind,
            ..settings.clone()
        };
        let mut config = settings.source_config();
        if self.kind == MindmapKind::Deck {
            config.separator = NOTE_KEY_SEPARATOR.to_string();
        }
        config
    }

    fn matches(&self, note: &VaultNote, path: &str) -> bool {
        match self.kind {
            MindmapKind::Deck => note.key.starts_with(path),
            MindmapKind::Tag => note.tags.iter().any(|tag| tag.starts_with(path)),
        }
    }
}

impl PathSource for VaultSource<'_> {
    fn all_paths(&self) -> Vec<String> {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut paths: Vec<String> = Vec::new();
        for note in self.vault.notes() {
            let candidates = match self.kind {
                MindmapKind::Deck => std::slice::from_ref(&note.key),
                MindmapKind::Tag => note.tags.as_slice(),
            };
            for candidate in candidates {
                if seen.insert(candidate.as_str()) {
                    paths.push(candidate.clone());
                }
            }
        }
        paths
    }
}

impl TextLookup for VaultSource<'_> {
    fn lookup(&self, query: &str, path: &str) -> Vec<String> {
        if query != self.kind.query() {
            log::warn!("Lookup for '{query}' on a {} source", self.kind.query());
        }
        self.vault
            .notes()
            .iter()
            .filter(|note| self.matches(note, path))
            .map(|note| note.text.clone())
            .collect()
    }
}
