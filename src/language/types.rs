//! Types representing the Abstract Syntax Tree of an Org document, as handed
//! over by a parser. The writer only ever borrows these.

use serde::{Deserialize, Serialize};

#[derive(Clone, Eq, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub footnotes: Footnotes,
}

/// Footnote definitions collected while parsing, in the order they were
/// first encountered.
#[derive(Clone, Eq, Debug, PartialEq, Serialize, Deserialize)]
pub struct Footnotes {
    #[serde(default = "default_footnotes_title")]
    pub title: String,
    #[serde(default)]
    pub definitions: Vec<FootnoteDefinition>,
}

fn default_footnotes_title() -> String {
    "Footnotes".to_string()
}

impl Default for Footnotes {
    fn default() -> Self {
        Footnotes {
            title: default_footnotes_title(),
            definitions: Vec::new(),
        }
    }
}

impl Footnotes {
    /// The definitions which belong in the trailing footnote section; inline
    /// definitions are written where they are referenced instead.
    pub fn sectioned(&self) -> impl Iterator<Item = &FootnoteDefinition> {
        self.definitions
            .iter()
            .filter(|definition| !definition.inline)
    }
}

/// Every kind of element an Org document can contain. Adding a variant here
/// means adding its renderer to the writer; the compiler will insist.
#[derive(Clone, Eq, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Node {
    Headline(Headline),
    Block(Block),
    List(List),
    ListItem(ListItem),
    Table(Table),
    TableHeader(TableHeader),
    TableRow(TableRow),
    TableSeparator(TableSeparator),
    Paragraph(Paragraph),
    Emphasis(Emphasis),
    LineBreak(LineBreak),
    ExplicitLineBreak,
    RegularLink(RegularLink),
    FootnoteLink(FootnoteLink),
    FootnoteDefinition(FootnoteDefinition),
    NodeWithMeta(NodeWithMeta),
    Comment(Comment),
    Keyword(Keyword),
    Text(Text),
    HorizontalRule,
}

// structural elements

#[derive(Clone, Eq, Debug, PartialEq, Serialize, Deserialize)]
pub struct Headline {
    pub level: usize,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default)]
    pub title: Vec<Node>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub children: Vec<Node>,
}

#[derive(Clone, Eq, Debug, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub name: String,
    #[serde(default)]
    pub parameters: Vec<String>,
    #[serde(default)]
    pub children: Vec<Node>,
}

impl Block {
    /// Blocks whose content is kept verbatim rather than being parsed as
    /// markup.
    pub fn is_raw(&self) -> bool {
        const RAW: [&str; 3] = ["SRC", "EXAMPLE", "EXPORT"];

        RAW.iter()
            .any(|kind| kind.eq_ignore_ascii_case(&self.name))
    }
}

#[derive(Clone, Eq, Debug, PartialEq, Serialize, Deserialize)]
pub struct List {
    #[serde(default)]
    pub items: Vec<ListItem>,
}

#[derive(Clone, Eq, Debug, PartialEq, Serialize, Deserialize)]
pub struct ListItem {
    pub bullet: String,
    #[serde(default)]
    pub children: Vec<Node>,
}

#[derive(Clone, Eq, Debug, PartialEq, Serialize, Deserialize)]
pub struct Table {
    #[serde(default)]
    pub header: Option<TableHeader>,
    /// Rows, possibly interleaved with separator lines.
    #[serde(default)]
    pub rows: Vec<Node>,
}

#[derive(Clone, Eq, Debug, PartialEq, Serialize, Deserialize)]
pub struct TableHeader {
    pub columns: Vec<Vec<Node>>,
    #[serde(default)]
    pub separator: Option<TableSeparator>,
}

#[derive(Clone, Eq, Debug, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    pub columns: Vec<Vec<Node>>,
}

#[derive(Clone, Eq, Debug, PartialEq, Serialize, Deserialize)]
pub struct TableSeparator {
    pub content: String,
}

#[derive(Clone, Eq, Debug, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    #[serde(default)]
    pub children: Vec<Node>,
}

impl Paragraph {
    /// A paragraph with nothing in it stands for a bare empty line.
    pub fn is_empty_line(&self) -> bool {
        self.children
            .is_empty()
    }
}

#[derive(Clone, Eq, Debug, PartialEq, Serialize, Deserialize)]
pub struct FootnoteDefinition {
    pub name: String,
    #[serde(default)]
    pub inline: bool,
    #[serde(default)]
    pub children: Vec<Node>,
}

#[derive(Clone, Eq, Debug, PartialEq, Serialize, Deserialize)]
pub struct NodeWithMeta {
    pub node: Box<Node>,
    #[serde(default)]
    pub meta: Metadata,
}

#[derive(Clone, Eq, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(default)]
    pub caption: Vec<Vec<Node>>,
    /// Each entry is a flat list alternating key, value, key, value.
    #[serde(default)]
    pub html_attributes: Vec<Vec<String>>,
}

#[derive(Clone, Eq, Debug, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub content: String,
}

#[derive(Clone, Eq, Debug, PartialEq, Serialize, Deserialize)]
pub struct Keyword {
    pub key: String,
    pub value: String,
}

// inline content

#[derive(Clone, Eq, Debug, PartialEq, Serialize, Deserialize)]
pub struct Text {
    pub content: String,
}

#[derive(Clone, Copy, Eq, Debug, PartialEq, Serialize, Deserialize)]
pub enum EmphasisKind {
    #[serde(rename = "_")]
    Underline,
    #[serde(rename = "*")]
    Bold,
    #[serde(rename = "/")]
    Italic,
    #[serde(rename = "+")]
    StrikeThrough,
    #[serde(rename = "~")]
    Code,
    #[serde(rename = "=")]
    Verbatim,
    #[serde(rename = "_{}")]
    Subscript,
    #[serde(rename = "^{}")]
    Superscript,
}

#[derive(Clone, Eq, Debug, PartialEq, Serialize, Deserialize)]
pub struct Emphasis {
    pub kind: EmphasisKind,
    #[serde(default)]
    pub content: Vec<Node>,
}

#[derive(Clone, Eq, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineBreak {
    pub count: usize,
}

#[derive(Clone, Eq, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegularLink {
    pub url: String,
    #[serde(default)]
    pub auto_link: bool,
    #[serde(default)]
    pub description: Option<Vec<Node>>,
}

#[derive(Clone, Eq, Debug, PartialEq, Serialize, Deserialize)]
pub struct FootnoteLink {
    pub name: String,
    #[serde(default)]
    pub definition: Option<Box<FootnoteDefinition>>,
}
