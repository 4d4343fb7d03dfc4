//! Mindmap CLI Library
//!
//! Input sources, markdown vault loading and the layout engine bridge
//! used by the `mindmap` binary.

pub mod error;
mod markdown;
pub mod overrides;
pub mod render;
pub mod vault;
pub mod vfs;

pub use error::RenderError;
pub use overrides::Overrides;
pub use render::Renderer;
pub use vault::{Vault, VaultSource};

/// One path per line; surrounding whitespace and blank lines are dropped.
pub fn read_path_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
