use pulldown_cmark::{Event, MetadataBlockKind, Options, Parser, Tag, TagEnd};

pub(crate) struct ParsedNote {
    pub tags: Vec<String>,
    /// Plain text of the body, block boundaries turned into spaces
    pub text: String,
}

pub(crate) fn parse_note(text: &str) -> ParsedNote {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);
    options.insert(Options::ENABLE_YAML_STYLE_METADATA_BLOCKS);

    let parser = Parser::new_ext(text, options);

    let mut frontmatter = None;
    let mut in_frontmatter = false;
    let mut frontmatter_content = String::new();
    let mut body = String::new();

    for event in parser {
        match event {
            Event::Start(Tag::MetadataBlock(MetadataBlockKind::YamlStyle)) => {
                in_frontmatter = true;
            }
            Event::End(TagEnd::MetadataBlock(MetadataBlockKind::YamlStyle)) => {
                in_frontmatter = false;
                if let Ok(json) = serde_yaml::from_str::<serde_json::Value>(&frontmatter_content) {
                    frontmatter = Some(json);
                }
            }
            Event::Text(cow_str) | Event::Code(cow_str) => {
                if in_frontmatter {
                    frontmatter_content.push_str(&cow_str);
                } else {
                    body.push_str(&cow_str);
                }
            }
            Event::SoftBreak
            | Event::HardBreak
            | Event::End(TagEnd::Paragraph)
            | Event::End(TagEnd::Heading(..))
            | Event::End(TagEnd::Item)
            | Event::End(TagEnd::TableCell) => {
                if !in_frontmatter {
                    body.push(' ');
                }
            }
            _ => {}
        }
    }

    let tags = frontmatter.as_ref().map(tags_of).unwrap_or_default();

    ParsedNote {
        tags,
        text: body.split_whitespace().collect::<Vec<_>>().join(" "),
    }
}

/// `tags: a b` and `tags: [a, b]` are both accepted
fn tags_of(frontmatter: &serde_json::Value) -> Vec<String> {
    match frontmatter.get("tags") {
        Some(serde_json::Value::String(tags)) => {
            tags.split_whitespace().map(str::to_string).collect()
        }
        Some(serde_json::Value::Array(tags)) => tags
            .iter()
            .filter_map(|tag| tag.as_str())
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}
