//! Truncated excerpts of XML nodes for diagnostics.
//!
//! This module provides [`ElementRef`], a borrowed handle on the text of a
//! schema or instance node, and [`render_excerpt`], which turns that text into
//! a bounded, display-ready excerpt.

/// Default number of lines kept when an error renders an element excerpt.
pub const MAX_EXCERPT_LINES: usize = 20;

/// A non-owning reference to a node of a schema or instance document.
///
/// The handle borrows the serialized text of the node; the document must
/// outlive every error that refers to it. Build one from a [`roxmltree::Node`]
/// or directly from XML source text.
///
/// # Example
///
/// ```rust
/// use xmlschema_errors::ElementRef;
///
/// let doc = roxmltree::Document::parse("<root><item>1</item></root>").unwrap();
/// let item = doc.root_element().first_element_child().unwrap();
///
/// let elem = ElementRef::from(item);
/// assert_eq!(elem.source(), "<item>1</item>");
/// assert_eq!(elem.tag_name(), Some("item"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementRef<'a> {
    source: &'a str,
    tag: Option<&'a str>,
}

impl<'a> ElementRef<'a> {
    /// Creates a reference from raw XML text, with no known tag name.
    pub fn from_source(source: &'a str) -> Self {
        Self { source, tag: None }
    }

    /// Returns the serialized text of the node.
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Returns the local tag name, if the reference was built from an element node.
    pub fn tag_name(&self) -> Option<&'a str> {
        self.tag
    }

    /// Returns the number of lines of the node's text.
    pub fn line_count(&self) -> usize {
        self.source.lines().count()
    }
}

impl<'a, 'input: 'a> From<roxmltree::Node<'a, 'input>> for ElementRef<'a> {
    fn from(node: roxmltree::Node<'a, 'input>) -> Self {
        let text: &'input str = node.document().input_text();
        let tag = if node.is_element() {
            Some(node.tag_name().name())
        } else {
            None
        };

        Self {
            source: text.get(node.range()).unwrap_or_default(),
            tag,
        }
    }
}

impl<'a> From<&'a str> for ElementRef<'a> {
    fn from(source: &'a str) -> Self {
        Self::from_source(source)
    }
}

impl<'a> From<&'a String> for ElementRef<'a> {
    fn from(source: &'a String) -> Self {
        Self::from_source(source.as_str())
    }
}

/// Options controlling how an excerpt is rendered.
///
/// The defaults match what errors use: no indent, at most
/// [`MAX_EXCERPT_LINES`] lines, tabs expanded to four spaces.
///
/// # Example
///
/// ```rust
/// use xmlschema_errors::ExcerptOptions;
///
/// let options = ExcerptOptions::new()
///     .with_indent("    ")
///     .with_max_lines(5)
///     .with_spaces_for_tab(2);
///
/// assert_eq!(options.max_lines(), Some(5));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExcerptOptions {
    indent: String,
    max_lines: Option<usize>,
    spaces_for_tab: usize,
}

impl ExcerptOptions {
    /// Creates the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the prefix written before every rendered line.
    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    /// Caps the excerpt at `max_lines` lines of the original text.
    pub fn with_max_lines(mut self, max_lines: usize) -> Self {
        self.max_lines = Some(max_lines);
        self
    }

    /// Removes the line cap so the whole node is rendered.
    pub fn unbounded(mut self) -> Self {
        self.max_lines = None;
        self
    }

    /// Sets how many spaces replace a tab. Zero keeps tabs as they are.
    pub fn with_spaces_for_tab(mut self, spaces: usize) -> Self {
        self.spaces_for_tab = spaces;
        self
    }

    /// Returns the line prefix.
    pub fn indent(&self) -> &str {
        &self.indent
    }

    /// Returns the line cap, if any.
    pub fn max_lines(&self) -> Option<usize> {
        self.max_lines
    }

    /// Returns the tab width.
    pub fn spaces_for_tab(&self) -> usize {
        self.spaces_for_tab
    }
}

impl Default for ExcerptOptions {
    fn default() -> Self {
        Self {
            indent: String::new(),
            max_lines: Some(MAX_EXCERPT_LINES),
            spaces_for_tab: 4,
        }
    }
}

/// Renders the text of `elem` as a bounded excerpt.
///
/// Trailing blank lines are dropped. A node within the line cap comes back
/// unmodified (apart from `indent` and tab expansion). A longer node keeps its
/// first `max_lines` lines followed by an ellipsis line and its closing line,
/// re-indented by two spaces, however few lines were cut.
///
/// # Example
///
/// ```rust
/// use xmlschema_errors::{render_excerpt, ElementRef, ExcerptOptions};
///
/// let xml = "<list>\n  <a/>\n  <b/>\n  <c/>\n  <d/>\n  <e/>\n</list>";
/// let excerpt = render_excerpt(ElementRef::from(xml), &ExcerptOptions::new().with_max_lines(3));
///
/// assert_eq!(excerpt, "<list>\n  <a/>\n  <b/>\n    ...\n  </list>");
/// ```
pub fn render_excerpt(elem: ElementRef<'_>, options: &ExcerptOptions) -> String {
    let mut lines: Vec<&str> = elem.source().lines().collect();
    while lines.last().is_some_and(|line| line.trim().is_empty()) {
        lines.pop();
    }
    if lines.is_empty() {
        return String::new();
    }

    let indent = options.indent();
    let kept = match options.max_lines() {
        Some(max) if lines.len() > max => max,
        _ => lines.len(),
    };

    let mut text = lines[..kept]
        .iter()
        .map(|line| format!("{indent}{line}"))
        .collect::<Vec<_>>()
        .join("\n");

    if let Some(closing) = lines[kept..].last() {
        text.push_str(&format!("\n{indent}    ...\n{indent}  {}", closing.trim()));
    }

    match options.spaces_for_tab() {
        0 => text,
        spaces => text.replace('\t', &" ".repeat(spaces)),
    }
}
