//! mindmap - radial mindmaps from delimited paths, note vaults and outlines
//!
//! Usage: mindmap [OPTIONS] <command>

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use mindmap_cli::error::RenderError;
use mindmap_cli::render::{resolve_format, Renderer};
use mindmap_cli::vault::Vault;
use mindmap_cli::vfs::{read_utf8, PhysicalFileSystem};
use mindmap_cli::{read_path_list, Overrides};
use mindmap_core::emit::dot::to_dot_string;
use mindmap_core::{
    emit, Diagnostic, MindmapBuilder, MindmapConfig, MindmapKind, OutlineParser, Tree,
};

const DEFAULT_CONFIG_FILE: &str = "mindmap.yaml";
const DEFAULT_OUTPUT: &str = "mindmap.svg";

#[derive(Parser)]
#[command(name = "mindmap", version)]
#[command(about = "Radial mindmaps from delimited paths, note vaults and outlines")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Config file (defaults to ./mindmap.yaml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output file; stdout for --emit when omitted
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    /// Write the graph description instead of rendering it
    #[arg(long, global = true, value_enum)]
    emit: Option<EmitFormat>,

    #[command(flatten)]
    overrides: Overrides,
}

#[derive(Subcommand)]
enum Command {
    /// Mindmap of a list of delimited paths, one per line
    Paths {
        /// Path list; stdin when omitted
        file: Option<PathBuf>,
    },

    /// Mindmap of the note hierarchy or tags of a markdown vault
    Vault {
        dir: PathBuf,
        /// tag or deck
        #[arg(long)]
        kind: Option<MindmapKind>,
    },

    /// Mindmap of an indented outline
    Outline {
        file: PathBuf,
        /// Columns a tab counts for
        #[arg(long)]
        tab_width: Option<usize>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum EmitFormat {
    Dot,
    Json,
    Outline,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let mut config = load_config(cli.config.as_deref())?;
    cli.overrides.apply(&mut config);

    let fs = PhysicalFileSystem;
    let (tree, diagnostics) = match &cli.command {
        Command::Paths { file } => {
            let text = match file {
                Some(path) => read_utf8(&fs, path)?,
                None => read_stdin()?,
            };
            let paths = read_path_list(&text);
            let source = cli.overrides.apply_separator(config.source_config());
            let built = MindmapBuilder::new(source, &paths).build();
            (built.tree, built.diagnostics)
        }
        Command::Vault { dir, kind } => {
            let kind = kind.unwrap_or(config.mindmap.kind);
            let vault = Vault::load(dir, &fs)
                .with_context(|| format!("failed to load vault {}", dir.display()))?;
            eprintln!("📝 Loaded {} notes", vault.notes().len());

            let source = vault.source(kind);
            let source_config = cli
                .overrides
                .apply_separator(source.source_config(&config.mindmap));
            let built = MindmapBuilder::new(source_config, &source)
                .with_text_lookup(&source)
                .build();
            (built.tree, built.diagnostics)
        }
        Command::Outline { file, tab_width } => {
            let text = read_utf8(&fs, file)?;
            let parser =
                OutlineParser::new().with_tab_width(tab_width.unwrap_or(config.outline.tab_width));
            let parsed = parser.parse(&text, config.mindmap.root_label.as_deref());
            (parsed.tree, parsed.diagnostics)
        }
    };

    if config.logging.show_diagnostics {
        report(&diagnostics);
    }

    match cli.emit {
        Some(format) => write_description(&tree, &config, format, cli.output.as_deref()),
        None => {
            let output = cli
                .output
                .clone()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));
            render(&tree, &config, &output)
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<MindmapConfig> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => {
            let default = PathBuf::from(DEFAULT_CONFIG_FILE);
            if !default.exists() {
                return Ok(MindmapConfig::default());
            }
            default
        }
    };

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    MindmapConfig::from_yaml(&content)
        .with_context(|| format!("invalid config {}", path.display()))
}

fn read_stdin() -> Result<String, RenderError> {
    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .map_err(|err| match err.kind() {
            std::io::ErrorKind::InvalidData => RenderError::Encoding {
                path: PathBuf::from("<stdin>"),
            },
            _ => RenderError::Io(err),
        })?;
    Ok(text)
}

fn report(diagnostics: &[Diagnostic]) {
    for diagnostic in diagnostics {
        eprintln!("⚠️  {}", diagnostic);
    }
}

fn write_description(
    tree: &Tree,
    config: &MindmapConfig,
    format: EmitFormat,
    output: Option<&Path>,
) -> Result<()> {
    let text = match format {
        EmitFormat::Dot => to_dot_string(&emit(tree, &config.theme())),
        EmitFormat::Json => emit(tree, &config.theme()).to_json_pretty()?,
        EmitFormat::Outline => tree.to_outline(2),
    };

    match output {
        Some(path) => std::fs::write(path, text)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => std::io::stdout().write_all(text.as_bytes())?,
    }
    Ok(())
}

fn render(tree: &Tree, config: &MindmapConfig, output: &Path) -> Result<()> {
    let format = resolve_format(config.render.format.as_deref(), output)?;
    let dot = to_dot_string(&emit(tree, &config.theme()));

    let renderer = Renderer::graphviz(&config.render.engine, &format);
    renderer
        .render_to_file(&dot, output)
        .with_context(|| format!("failed to render {}", output.display()))?;

    eprintln!("✅ Mindmap written to {} ({} nodes)", output.display(), tree.len());
    Ok(())
}
