//! Mapping from tree structure to declarative Graphviz styles.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::analysis::TreeMetrics;
use crate::model::{BranchId, NodeId};
use crate::tree::Tree;

pub const SOLARIZED_BG_COLOR: &str = "#012b37";

/// Flat UI "defo" palette
pub const BRIGHT_EDGE_COLORS: [&str; 9] = [
    "#f1c40f", "#e67e22", "#8e44ad", "#e74c3c", "#2980b9", "#c0392b", "#1abc9c", "#27ae60",
    "#95a5a6",
];

/// Solarized accent colors
pub const SOLARIZED_EDGE_COLORS: [&str; 9] = [
    "#b58900", "#cb4b16", "#6c71c4", "#dc323f", "#268bd2", "#d33682", "#2aa198", "#859900",
    "#939393",
];

const FONT_NAME: &str = "arial";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Palette {
    #[default]
    Bright,
    DarkSolarized,
}

impl FromStr for Palette {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bright" => Ok(Palette::Bright),
            "dark-solarized" | "darksolarized" => Ok(Palette::DarkSolarized),
            other => Err(format!(
                "unknown palette '{other}', expected 'bright' or 'dark-solarized'"
            )),
        }
    }
}

impl fmt::Display for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Palette::Bright => f.write_str("bright"),
            Palette::DarkSolarized => f.write_str("dark-solarized"),
        }
    }
}

/// Graph-level attributes for a radial layout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphStyle {
    pub layout: String,
    pub overlap: String,
    pub splines: String,
    pub fontname: String,
    pub bgcolor: String,
    pub outputorder: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeStyle {
    pub group: Option<BranchId>,
    pub shape: String,
    pub label: String,
    pub fontcolor: String,
    pub fontsize: usize,
    pub fontname: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeStyle {
    pub color: String,
    pub dir: String,
    pub penwidth: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub graph_style: GraphStyle,
    pub label_color: String,
    pub edge_colors: Vec<String>,
}

impl Theme {
    /// `edge_colors` must not be empty; an empty list falls back to the
    /// label color.
    pub fn new(bg_color: &str, label_color: &str, edge_colors: &[&str]) -> Self {
        let mut edge_colors: Vec<String> = edge_colors.iter().map(|c| c.to_string()).collect();
        if edge_colors.is_empty() {
            edge_colors.push(label_color.to_string());
        }

        Self {
            graph_style: GraphStyle {
                layout: "twopi".to_string(),
                overlap: "false".to_string(),
                splines: "curved".to_string(),
                fontname: FONT_NAME.to_string(),
                bgcolor: bg_color.to_string(),
                outputorder: "edgesfirst".to_string(),
            },
            label_color: label_color.to_string(),
            edge_colors,
        }
    }

    pub fn bright() -> Self {
        Self::new("white", "black", &BRIGHT_EDGE_COLORS)
    }

    pub fn dark_solarized() -> Self {
        Self::new(SOLARIZED_BG_COLOR, "white", &SOLARIZED_EDGE_COLORS)
    }

    pub fn from_palette(palette: Palette) -> Self {
        match palette {
            Palette::Bright => Self::bright(),
            Palette::DarkSolarized => Self::dark_solarized(),
        }
    }

    /// Colors repeat cyclically once branches outnumber the palette
    pub fn edge_color(&self, branch_id: BranchId) -> &str {
        &self.edge_colors[branch_id % self.edge_colors.len()]
    }

    pub fn edge_style(&self, dest: NodeId, metrics: &TreeMetrics) -> EdgeStyle {
        let depth = metrics.depth(dest);
        EdgeStyle {
            color: self.edge_color(metrics.branch_id(dest).unwrap_or(0)).to_string(),
            dir: "none".to_string(),
            penwidth: 2 * (2 + metrics.height().saturating_sub(depth)),
        }
    }

    pub fn node_style(&self, tree: &Tree, node: NodeId, metrics: &TreeMetrics) -> NodeStyle {
        let vertex = &tree[node];
        let label = if vertex.is_unlabelled() {
            String::new()
        } else {
            vertex.content.trim().to_string()
        };

        NodeStyle {
            group: metrics.branch_id(node),
            shape: "plaintext".to_string(),
            label,
            fontcolor: self.label_color.clone(),
            fontsize: 2 * (16 + metrics.height().saturating_sub(metrics.depth(node))),
            // not inherited from the graph by the engine
            fontname: self.graph_style.fontname.clone(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::bright()
    }
}

impl From<Palette> for Theme {
    fn from(palette: Palette) -> Self {
        Self::from_palette(palette)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (Tree, TreeMetrics) {
        let mut tree = Tree::new();
        tree.insert("a::b::c", "::");
        tree.insert("x", "::");
        let metrics = TreeMetrics::compute(&tree);
        (tree, metrics)
    }

    #[test]
    fn test_edge_color_wraps_cyclically() {
        let theme = Theme::bright();
        let k = theme.edge_colors.len();
        for b in 0..(3 * k) {
            assert_eq!(theme.edge_color(b), BRIGHT_EDGE_COLORS[b % k]);
        }
        assert_eq!(theme.edge_color(k), theme.edge_color(0));
    }

    #[test]
    fn test_edge_style_tapers_with_depth() {
        let (tree, metrics) = sample();
        let theme = Theme::dark_solarized();
        let a = tree.child_by_key(tree.root(), "a").unwrap();
        let b = tree.child_by_key(a, "b").unwrap();
        let c = tree.child_by_key(b, "c").unwrap();

        let near = theme.edge_style(a, &metrics);
        let far = theme.edge_style(c, &metrics);
        assert_eq!(metrics.height(), 3);
        assert_eq!(near.penwidth, 2 * (2 + 3 - 1));
        assert_eq!(far.penwidth, 4);
        assert_eq!(near.dir, "none");
        assert_eq!(near.color, SOLARIZED_EDGE_COLORS[0]);

        let x = tree.child_by_key(tree.root(), "x").unwrap();
        assert_eq!(theme.edge_style(x, &metrics).color, SOLARIZED_EDGE_COLORS[1]);
    }

    #[test]
    fn test_sizes_stay_positive() {
        let (tree, metrics) = sample();
        let theme = Theme::bright();
        for id in tree.iter() {
            let node = theme.node_style(&tree, id, &metrics);
            assert!(node.fontsize >= 32);
            if tree.parent(id).is_some() {
                assert!(theme.edge_style(id, &metrics).penwidth >= 4);
            }
        }

        let root_only = Tree::new();
        let flat = TreeMetrics::compute(&root_only);
        let style = theme.node_style(&root_only, root_only.root(), &flat);
        assert_eq!(style.fontsize, 32);
    }

    #[test]
    fn test_root_sentinel_label_is_suppressed() {
        let (tree, metrics) = sample();
        for theme in [Theme::bright(), Theme::dark_solarized()] {
            let style = theme.node_style(&tree, tree.root(), &metrics);
            assert_eq!(style.label, "");
            assert_eq!(style.group, None);
        }
    }

    #[test]
    fn test_node_style_trims_label() {
        let mut tree = Tree::with_root_label(Some("  Topic  "));
        let child = tree.add_child(tree.root(), "  spaced out ");
        let metrics = TreeMetrics::compute(&tree);
        let theme = Theme::bright();

        assert_eq!(theme.node_style(&tree, tree.root(), &metrics).label, "Topic");
        let style = theme.node_style(&tree, child, &metrics);
        assert_eq!(style.label, "spaced out");
        assert_eq!(style.group, Some(0));
        assert_eq!(style.shape, "plaintext");
        assert_eq!(style.fontcolor, "black");
        assert_eq!(style.fontsize, 2 * 16);
    }

    #[test]
    fn test_palette_from_str() {
        assert_eq!("bright".parse::<Palette>(), Ok(Palette::Bright));
        assert_eq!("dark-solarized".parse::<Palette>(), Ok(Palette::DarkSolarized));
        assert!("neon".parse::<Palette>().is_err());
        assert_eq!(Theme::from(Palette::DarkSolarized).graph_style.bgcolor, SOLARIZED_BG_COLOR);
    }

    #[test]
    fn test_empty_edge_colors_fall_back_to_label_color() {
        let theme = Theme::new("white", "black", &[]);
        assert_eq!(theme.edge_color(7), "black");
    }
}
