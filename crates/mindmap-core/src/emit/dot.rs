//! Graphviz DOT serialization of a [`GraphDescription`].

use std::io::{self, Write};

use super::{Declaration, GraphDescription};
use crate::model::NodeId;
use crate::theme::{EdgeStyle, GraphStyle, NodeStyle};

const KEYWORDS: [&str; 6] = ["node", "edge", "graph", "digraph", "subgraph", "strict"];

/// Returns `id` unchanged when DOT accepts it bare, otherwise a double-quoted
/// string with `"` and `\` escaped. Anything containing `:` is quoted since
/// the engine would read it as a port.
pub fn quote_id(id: &str) -> String {
    if is_plain_id(id) || is_numeral(id) {
        return id.to_string();
    }

    let mut quoted = String::with_capacity(id.len() + 2);
    quoted.push('"');
    for c in id.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => {}
            _ => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}

fn is_plain_id(id: &str) -> bool {
    let mut chars = id.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !(first.is_ascii_alphabetic() || first == '_') {
        return false;
    }
    if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return false;
    }
    !KEYWORDS.iter().any(|kw| kw.eq_ignore_ascii_case(id))
}

fn is_numeral(id: &str) -> bool {
    let digits = id.strip_prefix('-').unwrap_or(id);
    if digits.is_empty() || digits == "." {
        return false;
    }
    let mut seen_dot = false;
    for c in digits.chars() {
        match c {
            '0'..='9' => {}
            '.' if !seen_dot => seen_dot = true,
            _ => return false,
        }
    }
    true
}

/// Identifier a node is referenced by. Derived from its arena index so
/// nodes with equal content stay distinct.
pub fn node_ref(id: NodeId) -> String {
    format!("n{}", id.index())
}

fn write_attributes<W: Write>(writer: &mut W, attributes: &[(&str, String)]) -> io::Result<()> {
    let rendered: Vec<String> = attributes
        .iter()
        .map(|(name, value)| format!("{name}={}", quote_id(value)))
        .collect();
    write!(writer, "[{}]", rendered.join(", "))
}

fn graph_attributes(style: &GraphStyle, root: NodeId) -> Vec<(&'static str, String)> {
    vec![
        ("layout", style.layout.clone()),
        ("overlap", style.overlap.clone()),
        ("splines", style.splines.clone()),
        ("fontname", style.fontname.clone()),
        ("bgcolor", style.bgcolor.clone()),
        ("outputorder", style.outputorder.clone()),
        ("root", node_ref(root)),
        ("charset", "UTF-8".to_string()),
    ]
}

fn node_attributes(style: &NodeStyle) -> Vec<(&'static str, String)> {
    let mut attributes = Vec::with_capacity(6);
    if let Some(group) = style.group {
        attributes.push(("group", group.to_string()));
    }
    attributes.extend([
        ("shape", style.shape.clone()),
        ("label", style.label.clone()),
        ("fontcolor", style.fontcolor.clone()),
        ("fontsize", style.fontsize.to_string()),
        ("fontname", style.fontname.clone()),
    ]);
    attributes
}

fn edge_attributes(style: &EdgeStyle) -> Vec<(&'static str, String)> {
    vec![
        ("color", style.color.clone()),
        ("dir", style.dir.clone()),
        ("penwidth", style.penwidth.to_string()),
    ]
}

/// Writes `description` as a `digraph`. Declarations keep their order.
pub fn write_dot<W: Write>(description: &GraphDescription, writer: &mut W) -> io::Result<()> {
    writeln!(writer, "digraph G {{")?;
    write!(writer, "\tgraph ")?;
    write_attributes(writer, &graph_attributes(&description.graph, description.root))?;
    writeln!(writer, ";")?;

    for declaration in &description.declarations {
        match declaration {
            Declaration::Node { id, style } => {
                write!(writer, "\t{} ", quote_id(&node_ref(*id)))?;
                write_attributes(writer, &node_attributes(style))?;
            }
            Declaration::Edge { from, to, style } => {
                write!(
                    writer,
                    "\t{} -> {} ",
                    quote_id(&node_ref(*from)),
                    quote_id(&node_ref(*to))
                )?;
                write_attributes(writer, &edge_attributes(style))?;
            }
        }
        writeln!(writer, ";")?;
    }

    writeln!(writer, "}}")?;
    writer.flush()
}

pub fn to_dot_string(description: &GraphDescription) -> String {
    let mut buffer = Vec::new();
    // writing into a Vec cannot fail
    if write_dot(description, &mut buffer).is_err() {
        return String::new();
    }
    String::from_utf8_lossy(&buffer).into_owned()
}
