pub mod tags;
pub mod xml;

pub use xml::{CurriculumDocument, XmlNode};

use serde::Serialize;

use crate::error::ScoreError;

/// Read-only navigation over a curriculum document.
///
/// Lookups only consider direct element children, in document order. The
/// scoring engine is written against this trait and never against a concrete
/// document type, so any tree that can answer these three questions can be
/// scored.
pub trait CurriculumNode: Sized {
    /// Element name of this node.
    fn tag(&self) -> &str;

    /// First direct child element with the given tag.
    fn child(&self, tag: &str) -> Option<Self>;

    /// All direct child elements with the given tag.
    fn children(&self, tag: &str) -> Vec<Self>;

    /// Attribute value, if the attribute is present (it may be empty).
    fn attr(&self, name: &str) -> Option<&str>;
}

/// The researcher a curriculum belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Owner {
    pub identifier: String,
    pub full_name: String,
}

impl Owner {
    /// Extract the owner from the record root.
    ///
    /// Both the unique identifier and the full name are required; a record
    /// without them cannot be scored at all.
    pub fn from_record<N: CurriculumNode>(root: &N) -> Result<Self, ScoreError> {
        let identifier = root
            .attr(tags::IDENTIFIER)
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .ok_or(ScoreError::MissingIdentifier)?
            .to_string();

        let full_name = root
            .child(tags::GENERAL_DATA)
            .and_then(|general| {
                general
                    .attr(tags::FULL_NAME)
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                    .map(str::to_string)
            })
            .ok_or(ScoreError::MissingFullName)?;

        Ok(Owner {
            identifier,
            full_name,
        })
    }
}
