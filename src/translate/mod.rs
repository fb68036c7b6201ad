//! SVG markup → JSX markup translation.
//!
//! This is the core of the tool. The optimized SVG text is parsed with
//! `roxmltree` and walked depth-first; every element becomes one JSX element
//! with translated prop names. The walk also records which tags it emitted so
//! the renderer can import exactly the native components a file uses.
//!
//! ## Node Handling
//!
//! | Input node | Output |
//! |---|---|
//! | Element in the SVG namespace (or none) | JSX element; self-closing when it has no rendered children |
//! | Element in another namespace (`sodipodi:namedview`, ...) | Dropped with its subtree |
//! | Text | Whitespace runs collapsed and trimmed; a space next to a sibling element is kept as `{" "}` |
//! | Whitespace-only text | Dropped, except between two children of `<text>`/`<tspan>`/`<textPath>` |
//! | Comment, processing instruction | Dropped |
//! | `xmlns`, `xmlns:*` declarations | Dropped |
//! | Attribute in the xlink / xml namespace | Prefix folded into the prop name (`xlinkHref`) |
//! | Attribute in any other namespace | Dropped |
//!
//! ## Platforms
//!
//! On the web, element names are kept verbatim (`linearGradient` stays
//! `linearGradient`; React DOM is case-sensitive about SVG tags). On native,
//! every element goes through the react-native-svg table in [`native`]; an
//! element without a component is an [`TranslateError::UnsupportedTag`]
//! rather than being silently dropped.

pub mod attributes;
pub mod native;

use crate::types::Platform;
use indexmap::IndexSet;
use roxmltree::{Document, Node, NodeType, ParsingOptions};
use std::fmt::Write as _;
use thiserror::Error;

pub const SVG_NS: &str = "http://www.w3.org/2000/svg";
pub const XLINK_NS: &str = "http://www.w3.org/1999/xlink";
pub const XML_NS: &str = "http://www.w3.org/XML/1998/namespace";

const INDENT: &str = "  ";

/// A space JSX keeps across a line break.
const JSX_SPACE: &str = "{\" \"}";

#[derive(Error, Debug)]
pub enum TranslateError {
    #[error("unparsable input: {0}")]
    Unparsable(#[from] roxmltree::Error),
    #[error("<{0}> has no react-native-svg equivalent")]
    UnsupportedTag(String),
}

/// Options that shape the translated markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranslateOptions {
    pub platform: Platform,
    /// Append `{...props}` to the root element.
    pub spread_props: bool,
}

impl Default for TranslateOptions {
    fn default() -> Self {
        Self {
            platform: Platform::Web,
            spread_props: true,
        }
    }
}

/// Translated markup and the distinct tags it contains, in first-use order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub markup: String,
    pub used_tags: IndexSet<String>,
}

/// Translate an SVG document into JSX markup.
///
/// The markup starts at column zero with two-space indentation per level and
/// has no trailing newline.
pub fn translate(svg: &str, options: &TranslateOptions) -> Result<Translation, TranslateError> {
    let parsing = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let doc = Document::parse_with_options(svg, parsing)?;

    let mut writer = MarkupWriter {
        options,
        out: String::new(),
        used_tags: IndexSet::new(),
    };
    writer.element(doc.root_element(), 0, true)?;

    let markup = writer.out.trim_end().to_string();
    Ok(Translation {
        markup,
        used_tags: writer.used_tags,
    })
}

struct MarkupWriter<'a> {
    options: &'a TranslateOptions,
    out: String,
    used_tags: IndexSet<String>,
}

impl MarkupWriter<'_> {
    fn element(&mut self, node: Node, depth: usize, is_root: bool) -> Result<(), TranslateError> {
        let tag = self.tag_name(node)?;
        self.used_tags.insert(tag.clone());

        let mut open = format!("<{tag}");
        for prop in props(node) {
            open.push(' ');
            open.push_str(&prop);
        }
        if is_root && self.options.spread_props {
            open.push_str(" {...props}");
        }

        let text_content = matches!(node.tag_name().name(), "text" | "tspan" | "textPath");
        let mut children: Vec<Node> = node
            .children()
            .filter(|c| is_rendered(*c) || (text_content && c.is_text()))
            .collect();
        while children.first().is_some_and(is_blank) {
            children.remove(0);
        }
        while children.last().is_some_and(is_blank) {
            children.pop();
        }
        let pad = INDENT.repeat(depth);

        if children.is_empty() {
            let _ = writeln!(self.out, "{pad}{open} />");
            return Ok(());
        }

        let _ = writeln!(self.out, "{pad}{open}>");
        let last = children.len() - 1;
        for (i, child) in children.iter().enumerate() {
            if child.is_element() {
                self.element(*child, depth + 1, false)?;
            } else if let Some(text) = child.text() {
                let line = text_line(text, i > 0, i < last);
                let _ = writeln!(self.out, "{}{}", INDENT.repeat(depth + 1), line);
            }
        }
        let _ = writeln!(self.out, "{pad}</{tag}>");
        Ok(())
    }

    fn tag_name(&self, node: Node) -> Result<String, TranslateError> {
        let name = node.tag_name().name();
        match self.options.platform {
            Platform::Web => Ok(name.to_string()),
            Platform::Native => native::component_for(name)
                .map(str::to_string)
                .ok_or_else(|| TranslateError::UnsupportedTag(name.to_string())),
        }
    }
}

/// Whether a child node produces any output.
fn is_rendered(node: Node) -> bool {
    match node.node_type() {
        NodeType::Element => {
            let ns = node.tag_name().namespace();
            let svg = ns.is_none() || ns == Some(SVG_NS);
            if !svg {
                tracing::debug!(
                    "dropping foreign element <{}> ({})",
                    node.tag_name().name(),
                    ns.unwrap_or_default()
                );
            }
            svg
        }
        NodeType::Text => node.text().is_some_and(|t| !t.trim().is_empty()),
        _ => false,
    }
}

fn is_blank(node: &Node) -> bool {
    node.is_text() && node.text().is_none_or(|t| t.trim().is_empty())
}

/// One line of JSX children for a text node.
///
/// JSX drops whitespace that touches a line break, so a space separating the
/// text from a neighbouring element is written as an explicit `{" "}`.
fn text_line(text: &str, has_prev: bool, has_next: bool) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.is_empty() {
        return JSX_SPACE.to_string();
    }

    let mut line = String::new();
    if has_prev && text.starts_with(char::is_whitespace) {
        line.push_str(JSX_SPACE);
    }
    line.push_str(&text_literal(&words.join(" ")));
    if has_next && text.ends_with(char::is_whitespace) {
        line.push_str(JSX_SPACE);
    }
    line
}

/// Translated `name=value` props of an element, in source order.
fn props(node: Node) -> Vec<String> {
    let mut out = Vec::new();
    for attr in node.attributes() {
        let name = match attr.namespace() {
            None => attr.name().to_string(),
            Some(XLINK_NS) => format!("xlink:{}", attr.name()),
            Some(XML_NS) => format!("xml:{}", attr.name()),
            Some(_) => continue,
        };

        if name == "style" {
            if let Some(style) = attributes::style_object(attr.value()) {
                out.push(format!("style={style}"));
            }
            continue;
        }

        out.push(format!(
            "{}={}",
            attributes::prop_name(&name),
            attributes::prop_value(attr.value())
        ));
    }
    out
}

/// Text as JSX children: verbatim when safe, else a string expression.
fn text_literal(text: &str) -> String {
    if text.contains(['{', '}', '<', '>', '&']) {
        format!("{{{}}}", attributes::js_string(text))
    } else {
        text.to_string()
    }
}
