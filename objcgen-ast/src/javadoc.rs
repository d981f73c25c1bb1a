//! Structured documentation comments.

use serde::{Deserialize, Serialize};

/// A documentation comment: an ordered list of tags.
///
/// The leading description, if any, is a tag without a name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Javadoc {
    pub tags: Vec<TagElement>,
}

impl Javadoc {
    pub fn new(tags: impl IntoIterator<Item = TagElement>) -> Self {
        Self {
            tags: tags.into_iter().collect(),
        }
    }

    /// A comment holding only a description.
    pub fn description(text: impl Into<String>) -> Self {
        Self::new([TagElement::description([DocFragment::text(text)])])
    }

    pub fn tag(mut self, tag: TagElement) -> Self {
        self.tags.push(tag);
        self
    }
}

/// One documentation tag.
///
/// `name` keeps the tool spelling including the leading `@` (`@param`,
/// `@code`); `None` marks the description section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagElement {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub fragments: Vec<DocFragment>,
}

impl TagElement {
    pub fn new(name: impl Into<String>, fragments: impl IntoIterator<Item = DocFragment>) -> Self {
        Self {
            name: Some(name.into()),
            fragments: fragments.into_iter().collect(),
        }
    }

    pub fn description(fragments: impl IntoIterator<Item = DocFragment>) -> Self {
        Self {
            name: None,
            fragments: fragments.into_iter().collect(),
        }
    }

    pub fn is_description(&self) -> bool {
        self.name.is_none()
    }
}

/// A piece of a tag's content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocFragment {
    /// Literal text.
    Text(String),
    /// An inline tag such as `{@code ...}`.
    Tag(TagElement),
    /// Any other node (a name or member reference), kept as its source text.
    Reference(String),
}

impl DocFragment {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    pub fn reference(text: impl Into<String>) -> Self {
        Self::Reference(text.into())
    }
}

impl From<TagElement> for DocFragment {
    fn from(tag: TagElement) -> Self {
        Self::Tag(tag)
    }
}
