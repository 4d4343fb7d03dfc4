//! Mindmap Core Library
//!
//! Path tree, outline parser, tree metrics, themes and graph emission.
//! No process or rendering dependencies, pure logic only.
//!

pub mod analysis;
pub mod builder;
mod config;
pub mod diagnostics;
pub mod emit;
pub mod model;
pub mod parser;
pub mod theme;
pub mod tree;
pub mod utils;

pub use analysis::TreeMetrics;
pub use builder::{
    BuiltMindmap, MindmapBuilder, MindmapKind, PathSource, SourceConfig, TextLookup,
};
pub use config::{
    CustomTheme, LoggingConfig, MindmapConfig, OutlineConfig, RenderConfig, SourceSettings,
};
pub use diagnostics::{Diagnostic, DiagnosticSeverity};
pub use emit::{emit, Declaration, GraphDescription};
pub use model::{Node, NodeId, ROOT_DEFAULT_NAME};
pub use parser::{parse_outline, OutlineParser, ParsedOutline};
pub use theme::{Palette, Theme};
pub use tree::Tree;
