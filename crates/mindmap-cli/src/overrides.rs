//! Command-line flags that take precedence over `mindmap.yaml`.

use clap::Args;

use mindmap_core::{MindmapConfig, Palette, SourceConfig};

#[derive(Debug, Clone, Default, Args)]
pub struct Overrides {
    /// Color palette (bright, dark-solarized)
    #[arg(long, global = true)]
    pub palette: Option<Palette>,

    /// Graphviz layout program
    #[arg(long, global = true)]
    pub engine: Option<String>,

    /// Rendered format (svg, png, pdf, jpg, gif)
    #[arg(long, global = true)]
    pub format: Option<String>,

    /// Only keep paths under this prefix
    #[arg(long, global = true)]
    pub prefix: Option<String>,

    /// Path separator
    #[arg(long, global = true)]
    pub separator: Option<String>,

    /// Don't attach note texts as leaves
    #[arg(long, global = true)]
    pub no_notes: bool,

    /// Label of the central node
    #[arg(long, global = true)]
    pub root_label: Option<String>,
}

impl Overrides {
    /// A palette flag also discards any custom theme from the config.
    pub fn apply(&self, config: &mut MindmapConfig) {
        if let Some(palette) = self.palette {
            config.render.palette = palette;
            config.render.custom_theme = None;
        }
        if let Some(engine) = &self.engine {
            config.render.engine = engine.clone();
        }
        if let Some(format) = &self.format {
            config.render.format = Some(format.clone());
        }
        if let Some(prefix) = &self.prefix {
            config.mindmap.prefix = Some(prefix.clone());
        }
        if self.no_notes {
            config.mindmap.include_notes = false;
        }
        if let Some(label) = &self.root_label {
            config.mindmap.root_label = Some(label.clone());
        }
    }

    /// The separator flag wins over whatever the source kind picked.
    pub fn apply_separator(&self, mut source: SourceConfig) -> SourceConfig {
        if let Some(separator) = &self.separator {
            source.separator = separator.clone();
        }
        source
    }
}
