use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::CurriculumNode;

/// [`CurriculumNode`] backed by a `roxmltree` element.
#[derive(Debug, Clone, Copy)]
pub struct XmlNode<'a, 'input> {
    node: roxmltree::Node<'a, 'input>,
}

impl<'a, 'input> XmlNode<'a, 'input> {
    pub fn new(node: roxmltree::Node<'a, 'input>) -> Self {
        Self { node }
    }
}

impl<'a, 'input> CurriculumNode for XmlNode<'a, 'input> {
    fn tag(&self) -> &str {
        self.node.tag_name().name()
    }

    fn child(&self, tag: &str) -> Option<Self> {
        self.node
            .children()
            .find(|n| n.is_element() && n.tag_name().name() == tag)
            .map(XmlNode::new)
    }

    fn children(&self, tag: &str) -> Vec<Self> {
        self.node
            .children()
            .filter(|n| n.is_element() && n.tag_name().name() == tag)
            .map(XmlNode::new)
            .collect()
    }

    fn attr(&self, name: &str) -> Option<&str> {
        self.node.attribute(name)
    }
}

/// Text of a curriculum export, ready to be parsed.
///
/// Lattes exports are usually ISO-8859-1. Input that is not valid UTF-8 is
/// decoded as Latin-1, which maps every byte to the code point of the same
/// value.
#[derive(Debug, Clone)]
pub struct CurriculumDocument {
    source: PathBuf,
    text: String,
}

impl CurriculumDocument {
    /// Read a curriculum export from disk.
    pub fn open(path: &Path) -> Result<Self> {
        let bytes = fs::read(path)
            .with_context(|| format!("Failed to read curriculum at {}", path.display()))?;
        Ok(Self::from_bytes(path, bytes))
    }

    pub fn from_bytes(source: impl Into<PathBuf>, bytes: Vec<u8>) -> Self {
        let text = if declared_encoding(&bytes).is_some_and(|e| is_latin1(&e)) {
            decode_latin1(&bytes)
        } else {
            match String::from_utf8(bytes) {
                Ok(text) => text,
                Err(e) => decode_latin1(e.as_bytes()),
            }
        };
        Self {
            source: source.into(),
            text,
        }
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Parse the document into a navigable tree.
    pub fn parse(&self) -> Result<roxmltree::Document<'_>> {
        let options = roxmltree::ParsingOptions {
            allow_dtd: true,
            ..roxmltree::ParsingOptions::default()
        };
        roxmltree::Document::parse_with_options(&self.text, options)
            .with_context(|| format!("Failed to parse curriculum XML in {}", self.source.display()))
    }
}

fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

fn is_latin1(encoding: &str) -> bool {
    matches!(
        encoding.to_ascii_uppercase().as_str(),
        "ISO-8859-1" | "ISO8859-1" | "ISO_8859-1" | "LATIN1" | "LATIN-1" | "L1"
    )
}

/// `encoding` pseudo-attribute of the XML declaration, if any.
fn declared_encoding(bytes: &[u8]) -> Option<String> {
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
    if !bytes.starts_with(b"<?xml") {
        return None;
    }
    let end = bytes.windows(2).position(|w| w == b"?>")?;
    let declaration = std::str::from_utf8(&bytes[..end]).ok()?;
    let rest = &declaration[declaration.find("encoding")? + "encoding".len()..];
    let rest = rest.trim_start().strip_prefix('=')?.trim_start();
    let quote = rest.chars().next().filter(|c| *c == '"' || *c == '\'')?;
    let value = &rest[1..];
    let close = value.find(quote)?;
    Some(value[..close].trim().to_string())
}
