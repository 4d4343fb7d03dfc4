use serde::{Deserialize, Serialize};

use crate::builder::{MindmapKind, SourceConfig, DEFAULT_TAG_SEPARATOR};
use crate::parser::DEFAULT_TAB_WIDTH;
use crate::theme::{Palette, Theme};

/// Top-level configuration for mindmap rendering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MindmapConfig {
    #[serde(default)]
    pub mindmap: SourceSettings,
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub outline: OutlineConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Which paths end up in a path mindmap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceSettings {
    #[serde(default)]
    pub kind: MindmapKind,
    /// Separator for tag paths; decks always use `::`
    #[serde(default = "default_tag_separator")]
    pub tag_separator: String,
    #[serde(default)]
    pub prefix: Option<String>,
    /// Attach note texts as leaves
    #[serde(default = "default_true")]
    pub include_notes: bool,
    #[serde(default)]
    pub root_label: Option<String>,
}

/// Layout engine and look
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Graphviz program to invoke
    #[serde(default = "default_engine")]
    pub engine: String,
    #[serde(default)]
    pub palette: Palette,
    /// Overrides `palette` when present
    #[serde(default)]
    pub custom_theme: Option<CustomTheme>,
    /// Output format; derived from the output file extension when unset
    #[serde(default)]
    pub format: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomTheme {
    pub background: String,
    pub label: String,
    pub edge_colors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutlineConfig {
    #[serde(default = "default_tab_width")]
    pub tab_width: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Whether to print structural warnings after building a tree
    #[serde(default = "default_true")]
    pub show_diagnostics: bool,
}

fn default_true() -> bool {
    true
}

fn default_tag_separator() -> String {
    DEFAULT_TAG_SEPARATOR.to_string()
}

fn default_engine() -> String {
    "twopi".to_string()
}

fn default_tab_width() -> usize {
    DEFAULT_TAB_WIDTH
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            kind: MindmapKind::default(),
            tag_separator: default_tag_separator(),
            prefix: None,
            include_notes: true,
            root_label: None,
        }
    }
}

impl SourceSettings {
    pub fn source_config(&self) -> SourceConfig {
        let mut config = SourceConfig::for_kind(self.kind, &self.tag_separator)
            .with_include_notes(self.include_notes);
        config.prefix = self.prefix.clone();
        config.root_label = self.root_label.clone();
        config
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            engine: default_engine(),
            palette: Palette::default(),
            custom_theme: None,
            format: None,
        }
    }
}

impl Default for OutlineConfig {
    fn default() -> Self {
        Self {
            tab_width: default_tab_width(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            show_diagnostics: true,
        }
    }
}

impl Default for MindmapConfig {
    fn default() -> Self {
        Self {
            mindmap: SourceSettings::default(),
            render: RenderConfig::default(),
            outline: OutlineConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl MindmapConfig {
    /// Parse config from YAML content
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    /// Serialize to YAML
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }

    pub fn source_config(&self) -> SourceConfig {
        self.mindmap.source_config()
    }

    pub fn theme(&self) -> Theme {
        match &self.render.custom_theme {
            Some(custom) => {
                let colors: Vec<&str> = custom.edge_colors.iter().map(String::as_str).collect();
                Theme::new(&custom.background, &custom.label, &colors)
            }
            None => Theme::from_palette(self.render.palette),
        }
    }
}
