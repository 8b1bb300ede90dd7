//! Writer turning an Org document tree back into canonical source text

use std::fmt;

use tracing::debug;

use crate::language::*;

/// Column at which trailing headline tags are right-aligned, unless told
/// otherwise. Matches the default of Emacs's `org-tags-column`.
pub const TAGS_COLUMN: usize = 77;

/// Accumulates rendered source text. Carries the current indentation prefix
/// (added in front of continuation lines of nested content) and the column
/// headline tags are aligned to.
#[derive(Debug)]
pub struct Writer {
    buffer: String,
    indent: String,
    tags_column: usize,
}

impl Default for Writer {
    fn default() -> Self {
        Writer::new()
    }
}

impl Writer {
    pub fn new() -> Writer {
        Writer::with_tags_column(TAGS_COLUMN)
    }

    pub fn with_tags_column(tags_column: usize) -> Writer {
        Writer {
            buffer: String::new(),
            indent: String::new(),
            tags_column,
        }
    }

    /// A fresh writer sharing this one's configuration but with an empty
    /// buffer, for when we need what a subtree renders to as a String rather
    /// than having it go straight into the output.
    fn subwriter(&self) -> Writer {
        Writer {
            buffer: String::new(),
            indent: self
                .indent
                .clone(),
            tags_column: self.tags_column,
        }
    }

    fn append_str(&mut self, text: &str) {
        self.buffer
            .push_str(text);
    }

    fn append_indent(&mut self) {
        self.buffer
            .push_str(&self.indent);
    }

    /// The text written so far.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Consume the writer, returning the text written.
    pub fn finish(self) -> String {
        self.buffer
    }

    /// Render a whole document: preamble, body, then the footnote section.
    pub fn write_document(&mut self, document: &Document) {
        debug!(
            "Writing {} nodes, {} footnote definitions",
            document
                .nodes
                .len(),
            document
                .footnotes
                .definitions
                .len()
        );

        self.before(document);
        self.write_nodes(&document.nodes);
        self.after(document);
    }

    // Nothing precedes the body in canonical Org source.
    fn before(&mut self, _document: &Document) {}

    fn after(&mut self, document: &Document) {
        self.write_footnotes(&document.footnotes);
    }

    pub fn write_nodes(&mut self, nodes: &[Node]) {
        for node in nodes {
            self.write_node(node);
        }
    }

    pub fn write_node(&mut self, node: &Node) {
        match node {
            Node::Comment(comment) => self.write_comment(comment),
            Node::Keyword(keyword) => self.write_keyword(keyword),
            Node::NodeWithMeta(node) => self.write_node_with_meta(node),
            Node::Headline(headline) => self.write_headline(headline),
            Node::Block(block) => self.write_block(block),

            Node::FootnoteDefinition(definition) => self.write_footnote_definition(definition),

            Node::List(list) => self.write_list(list),
            Node::ListItem(item) => self.write_list_item(item),

            Node::Table(table) => self.write_table(table),
            Node::TableHeader(header) => self.write_table_header(header),
            Node::TableRow(row) => self.write_table_row(row),
            Node::TableSeparator(separator) => self.write_table_separator(separator),

            Node::Paragraph(paragraph) => self.write_paragraph(paragraph),
            Node::HorizontalRule => self.write_horizontal_rule(),
            Node::Text(text) => self.write_text(text),
            Node::Emphasis(emphasis) => self.write_emphasis(emphasis),
            Node::LineBreak(line_break) => self.write_line_break(line_break),
            Node::ExplicitLineBreak => self.write_explicit_line_break(),
            Node::RegularLink(link) => self.write_regular_link(link),
            Node::FootnoteLink(link) => self.write_footnote_link(link),
        }
    }

    fn write_headline(&mut self, headline: &Headline) {
        // The title is rendered on its own so we know its length before
        // working out where the tags go.
        let mut sub = self.subwriter();
        sub.append_str(&"*".repeat(headline.level));
        if let Some(status) = &headline.status {
            sub.append_str(" ");
            sub.append_str(status);
        }
        if let Some(priority) = &headline.priority {
            sub.append_str(" [#");
            sub.append_str(priority);
            sub.append_str("]");
        }
        sub.append_str(" ");
        sub.write_nodes(&headline.title);
        let title = sub.finish();

        self.append_str(&title);
        if !headline
            .tags
            .is_empty()
        {
            let tags = format!(":{}:", headline.tags.join(":"));
            let used = tags
                .chars()
                .count()
                + title
                    .chars()
                    .count();

            if self.tags_column > used {
                self.append_str(&" ".repeat(self.tags_column - used));
            } else {
                self.append_str(" ");
            }
            self.append_str(&tags);
        }
        self.append_str("\n");

        if !headline
            .children
            .is_empty()
        {
            self.append_indent();
        }
        self.write_nodes(&headline.children);
    }

    fn write_block(&mut self, block: &Block) {
        self.append_indent();
        self.append_str("#+BEGIN_");
        self.append_str(&block.name);
        if !block
            .parameters
            .is_empty()
        {
            self.append_str(" ");
            self.append_str(&block.parameters.join(" "));
        }
        self.append_str("\n");

        if block.is_raw() {
            // Content is copied line by line, never dispatched, so that
            // anything which looks like markup stays exactly as written.
            let content = match block
                .children
                .as_slice()
            {
                [Node::Text(text)] => &text.content,
                other => panic!(
                    "Raw block {} must contain a single Text node, found {:?}",
                    block.name, other
                ),
            };
            for line in content.split('\n') {
                self.append_indent();
                self.append_str(line);
                self.append_str("\n");
            }
        } else {
            self.write_nodes(&block.children);
        }

        self.append_indent();
        self.append_str("#+END_");
        self.append_str(&block.name);
        self.append_str("\n");
    }

    fn write_footnotes(&mut self, footnotes: &Footnotes) {
        if footnotes
            .definitions
            .is_empty()
        {
            return;
        }

        self.append_str("* ");
        self.append_str(&footnotes.title);
        self.append_str("\n");

        // inline definitions were already written where they were referenced
        for definition in footnotes.sectioned() {
            self.write_footnote_definition(definition);
        }
    }

    fn write_footnote_definition(&mut self, definition: &FootnoteDefinition) {
        self.append_str("[fn:");
        self.append_str(&definition.name);
        self.append_str("]");

        let starts_with_empty_line = matches!(
            definition
                .children
                .first(),
            Some(Node::Paragraph(paragraph)) if paragraph.is_empty_line()
        );
        if !starts_with_empty_line {
            self.append_str(" ");
        }
        self.write_nodes(&definition.children);
    }

    fn write_paragraph(&mut self, paragraph: &Paragraph) {
        self.write_nodes(&paragraph.children);
        self.append_str("\n");
    }

    fn write_keyword(&mut self, keyword: &Keyword) {
        self.append_indent();
        self.append_str("#+");
        self.append_str(&keyword.key);
        self.append_str(": ");
        self.append_str(&keyword.value);
        self.append_str("\n");
    }

    fn write_node_with_meta(&mut self, node: &NodeWithMeta) {
        for caption in &node
            .meta
            .caption
        {
            self.append_str("#+CAPTION: ");
            self.write_nodes(caption);
            self.append_str("\n");
        }

        for attributes in &node
            .meta
            .html_attributes
        {
            self.append_str("#+ATTR_HTML:");
            // a trailing key without a value is dropped
            for pair in attributes.chunks_exact(2) {
                self.append_str(" ");
                self.append_str(&pair[0]);
                self.append_str(" ");
                if pair[1].contains(|c: char| c == ' ' || c == '\t') {
                    self.append_str("\"");
                    self.append_str(&pair[1]);
                    self.append_str("\"");
                } else {
                    self.append_str(&pair[1]);
                }
            }
            self.append_str("\n");
        }

        self.write_node(&node.node);
    }

    fn write_comment(&mut self, comment: &Comment) {
        self.append_indent();
        self.append_str("#");
        self.append_str(&comment.content);
        self.append_str("\n");
    }

    fn write_list(&mut self, list: &List) {
        for item in &list.items {
            self.write_list_item(item);
        }
    }

    fn write_list_item(&mut self, item: &ListItem) {
        self.append_indent();
        self.append_str(&item.bullet);
        self.append_str(" ");

        // Content continues aligned under the text following the bullet,
        // not under the bullet itself.
        let mut sub = self.subwriter();
        sub.indent
            .push_str(&" ".repeat(
                item.bullet
                    .chars()
                    .count()
                    + 1,
            ));
        sub.write_nodes(&item.children);

        // The first line was already indented when we wrote the bullet.
        let body = sub.as_str();
        let body = body
            .strip_prefix(sub.indent.as_str())
            .unwrap_or(body);
        self.append_str(body);
    }

    fn write_table(&mut self, table: &Table) {
        if let Some(header) = &table.header {
            self.write_table_header(header);
        }
        self.write_nodes(&table.rows);
    }

    fn write_table_header(&mut self, header: &TableHeader) {
        self.write_table_columns(&header.columns);
        if let Some(separator) = &header.separator {
            self.write_table_separator(separator);
        }
    }

    fn write_table_row(&mut self, row: &TableRow) {
        self.write_table_columns(&row.columns);
    }

    fn write_table_separator(&mut self, separator: &TableSeparator) {
        self.append_indent();
        self.append_str(&separator.content);
        self.append_str("\n");
    }

    // Cells are not padded out to a common width.
    fn write_table_columns(&mut self, columns: &[Vec<Node>]) {
        self.append_indent();
        self.append_str("| ");
        for (i, column) in columns
            .iter()
            .enumerate()
        {
            self.write_nodes(column);
            self.append_str(" |");
            if i < columns.len() - 1 {
                self.append_str(" ");
            }
        }
        self.append_str("\n");
    }

    fn write_horizontal_rule(&mut self) {
        self.append_indent();
        self.append_str("-----\n");
    }

    fn write_text(&mut self, text: &Text) {
        self.append_str(&text.content);
    }

    fn write_emphasis(&mut self, emphasis: &Emphasis) {
        let (left, right) = borders(emphasis.kind);
        self.append_str(left);
        self.write_nodes(&emphasis.content);
        self.append_str(right);
    }

    fn write_line_break(&mut self, line_break: &LineBreak) {
        for _ in 0..line_break.count {
            self.append_str("\n");
            self.append_indent();
        }
    }

    fn write_explicit_line_break(&mut self) {
        self.append_str("\\\\\n");
        self.append_indent();
    }

    fn write_footnote_link(&mut self, link: &FootnoteLink) {
        self.append_str("[fn:");
        self.append_str(&link.name);
        if let Some(definition) = &link.definition {
            self.append_str(":");
            match definition
                .children
                .first()
            {
                Some(Node::Paragraph(paragraph)) => self.write_nodes(&paragraph.children),
                Some(other) => panic!(
                    "Inline footnote {} must begin with a Paragraph, found {:?}",
                    definition.name, other
                ),
                None => {}
            }
        }
        self.append_str("]");
    }

    fn write_regular_link(&mut self, link: &RegularLink) {
        if link.auto_link {
            self.append_str(&link.url);
            return;
        }

        match &link.description {
            None => {
                self.append_str("[[");
                self.append_str(&link.url);
                self.append_str("]]");
            }
            Some(description) => {
                let mut sub = self.subwriter();
                sub.write_nodes(description);
                let description = sub.finish();

                self.append_str("[[");
                self.append_str(&link.url);
                self.append_str("][");
                self.append_str(&description);
                self.append_str("]]");
            }
        }
    }
}

impl fmt::Display for Writer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.buffer)
    }
}

/// Opening and closing markers for each kind of emphasis.
pub fn borders(kind: EmphasisKind) -> (&'static str, &'static str) {
    match kind {
        EmphasisKind::Underline => ("_", "_"),
        EmphasisKind::Bold => ("*", "*"),
        EmphasisKind::Italic => ("/", "/"),
        EmphasisKind::StrikeThrough => ("+", "+"),
        EmphasisKind::Code => ("~", "~"),
        EmphasisKind::Verbatim => ("=", "="),
        EmphasisKind::Subscript => ("_{", "}"),
        EmphasisKind::Superscript => ("^{", "}"),
    }
}
