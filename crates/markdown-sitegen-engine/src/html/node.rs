use crate::error::{ContainerFault, MarkdownError};

/// Elements that render without content or closing tag.
pub const VOID_ELEMENTS: &[&str] = &["br", "hr", "img"];

/// Containers that render as an empty element when they have no children.
pub const EMPTY_CONTAINERS: &[&str] = &["blockquote", "code"];

/// HTML attributes in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes(Vec<(String, String)>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `name`, keeping its original position if it was already present.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.0.iter_mut().find(|(n, _)| *n == name) {
            Some((_, v)) => *v = value,
            None => self.0.push((name, value)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Renders as ` name="value"` pairs. Values are not escaped.
    pub fn to_html(&self) -> String {
        self.iter()
            .map(|(name, value)| format!(" {name}=\"{value}\""))
            .collect()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attributes = Attributes::new();
        for (name, value) in iter {
            attributes.insert(name, value);
        }
        attributes
    }
}

/// A node of the rendered HTML tree.
///
/// A leaf holds content directly and has no children; a container holds only
/// children. Containers own their children, so the tree has no sharing and
/// no cycles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    Leaf {
        /// `None` renders the raw value with no wrapping element.
        tag: Option<String>,
        value: String,
        attributes: Attributes,
    },
    Container {
        tag: String,
        children: Vec<HtmlNode>,
        attributes: Attributes,
    },
}

impl HtmlNode {
    /// An untagged leaf: raw text.
    pub fn text(value: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: None,
            value: value.into(),
            attributes: Attributes::new(),
        }
    }

    pub fn leaf(tag: impl Into<String>, value: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: Some(tag.into()),
            value: value.into(),
            attributes: Attributes::new(),
        }
    }

    pub fn container(tag: impl Into<String>, children: Vec<HtmlNode>) -> Self {
        HtmlNode::Container {
            tag: tag.into(),
            children,
            attributes: Attributes::new(),
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        match &mut self {
            HtmlNode::Leaf { attributes, .. } | HtmlNode::Container { attributes, .. } => {
                attributes.insert(name, value)
            }
        }
        self
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf { tag, .. } => tag.as_deref(),
            HtmlNode::Container { tag, .. } => Some(tag),
        }
    }

    pub fn value(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf { value, .. } => Some(value),
            HtmlNode::Container { .. } => None,
        }
    }

    /// Children of a container; empty for a leaf.
    pub fn children(&self) -> &[HtmlNode] {
        match self {
            HtmlNode::Leaf { .. } => &[],
            HtmlNode::Container { children, .. } => children,
        }
    }

    pub fn attributes(&self) -> &Attributes {
        match self {
            HtmlNode::Leaf { attributes, .. } | HtmlNode::Container { attributes, .. } => {
                attributes
            }
        }
    }

    /// Renders this node and its descendants depth-first.
    ///
    /// # Errors
    /// - [`MarkdownError::MissingValue`] for a non-void leaf with an empty value
    /// - [`MarkdownError::InvalidContainer`] for a container with an empty tag,
    ///   or with no children unless it is one of [`EMPTY_CONTAINERS`]
    pub fn render(&self) -> Result<String, MarkdownError> {
        let mut out = String::new();
        self.render_into(&mut out)?;
        Ok(out)
    }

    fn render_into(&self, out: &mut String) -> Result<(), MarkdownError> {
        match self {
            HtmlNode::Leaf {
                tag,
                value,
                attributes,
            } => match tag.as_deref() {
                Some(tag) if VOID_ELEMENTS.contains(&tag) => {
                    out.push_str(&format!("<{tag}{}>", attributes.to_html()));
                }
                _ if value.is_empty() => {
                    return Err(MarkdownError::MissingValue { tag: tag.clone() });
                }
                None => out.push_str(value),
                Some(tag) => {
                    out.push_str(&format!("<{tag}{}>{value}</{tag}>", attributes.to_html()));
                }
            },
            HtmlNode::Container {
                tag,
                children,
                attributes,
            } => {
                if tag.is_empty() {
                    return Err(MarkdownError::InvalidContainer(ContainerFault::NoTag));
                }
                if children.is_empty() && !EMPTY_CONTAINERS.contains(&tag.as_str()) {
                    return Err(MarkdownError::InvalidContainer(ContainerFault::NoChildren));
                }
                out.push_str(&format!("<{tag}{}>", attributes.to_html()));
                for child in children {
                    child.render_into(out)?;
                }
                out.push_str(&format!("</{tag}>"));
            }
        }
        Ok(())
    }
}
