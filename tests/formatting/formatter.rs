#[cfg(test)]
mod verify {
    use orgfmt::formatting::*;
    use orgfmt::language::*;

    fn trim(text: &str) -> &str {
        let head = text.trim_start_matches('\n');
        let tail = head.trim_end_matches(' ');
        tail
    }

    fn text(content: &str) -> Node {
        Node::Text(Text {
            content: content.to_string(),
        })
    }

    fn paragraph(children: Vec<Node>) -> Node {
        Node::Paragraph(Paragraph { children })
    }

    fn document(nodes: Vec<Node>) -> Document {
        Document {
            nodes,
            footnotes: Footnotes::default(),
        }
    }

    #[test]
    fn headlines_and_children() {
        let document = document(vec![
            Node::Headline(Headline {
                level: 1,
                status: Some("DONE".to_string()),
                priority: None,
                title: vec![text("Chapter one")],
                tags: vec![],
                children: vec![
                    paragraph(vec![text("Opening.")]),
                    Node::Headline(Headline {
                        level: 2,
                        status: None,
                        priority: Some("B".to_string()),
                        title: vec![text("Section")],
                        tags: vec![],
                        children: vec![],
                    }),
                ],
            }),
            Node::Headline(Headline {
                level: 1,
                status: None,
                priority: None,
                title: vec![text("Chapter two")],
                tags: vec![],
                children: vec![],
            }),
        ]);

        let result = render(&document, TAGS_COLUMN);
        assert_eq!(
            result,
            trim(
                r#"
* DONE Chapter one
Opening.
** [#B] Section
* Chapter two
"#
            )
        );
    }

    #[test]
    fn tags_alignment() {
        let headline = |tags: Vec<&str>| {
            document(vec![Node::Headline(Headline {
                level: 1,
                status: None,
                priority: None,
                title: vec![text("Foo")],
                tags: tags
                    .into_iter()
                    .map(String::from)
                    .collect(),
                children: vec![],
            })])
        };

        // right edge of the tags lands on the configured column
        let result = render(&headline(vec!["a", "b"]), 30);
        assert_eq!(result, "* Foo                    :a:b:\n");
        assert_eq!(
            result
                .trim_end()
                .len(),
            30
        );

        // no room left, so the tags just follow the title
        let result = render(&headline(vec!["a", "b"]), 10);
        assert_eq!(result, "* Foo :a:b:\n");

        let result = render(&headline(vec![]), 10);
        assert_eq!(result, "* Foo\n");

        // and with the default column
        let result = render(&headline(vec!["work"]), TAGS_COLUMN);
        assert_eq!(
            result
                .trim_end()
                .len(),
            77
        );
        assert!(result.ends_with(" :work:\n"));
    }

    #[test]
    fn empty_title() {
        let document = document(vec![Node::Headline(Headline {
            level: 3,
            status: None,
            priority: None,
            title: vec![],
            tags: vec![],
            children: vec![],
        })]);

        let result = render(&document, TAGS_COLUMN);
        assert_eq!(result, "*** \n");
    }

    #[test]
    fn list_under_headline() {
        let document = document(vec![Node::Headline(Headline {
            level: 1,
            status: None,
            priority: None,
            title: vec![text("Steps")],
            tags: vec![],
            children: vec![Node::List(List {
                items: vec![
                    ListItem {
                        bullet: "1.".to_string(),
                        children: vec![paragraph(vec![
                            text("Preheat the oven"),
                            Node::LineBreak(LineBreak { count: 1 }),
                            text("to 200 degrees."),
                        ])],
                    },
                    ListItem {
                        bullet: "2.".to_string(),
                        children: vec![paragraph(vec![text("Bake.")])],
                    },
                ],
            })],
        })]);

        let result = render(&document, TAGS_COLUMN);
        assert_eq!(
            result,
            trim(
                r#"
* Steps
1. Preheat the oven
   to 200 degrees.
2. Bake.
"#
            )
        );
    }

    #[test]
    fn list_item_blank_lines() {
        let mut output = Writer::new();
        output.write_node(&Node::ListItem(ListItem {
            bullet: "-".to_string(),
            children: vec![paragraph(vec![
                text("one"),
                Node::LineBreak(LineBreak { count: 2 }),
                text("two"),
            ])],
        }));
        assert_eq!(output.finish(), "- one\n  \n  two\n");
    }

    #[test]
    fn table_spacing() {
        let mut output = Writer::new();
        output.write_node(&Node::TableRow(TableRow {
            columns: vec![vec![text("a")], vec![text("bb")]],
        }));
        assert_eq!(output.finish(), "| a | bb |\n");

        let mut output = Writer::new();
        output.write_node(&Node::TableHeader(TableHeader {
            columns: vec![vec![text("k")], vec![text("v")]],
            separator: Some(TableSeparator {
                content: "|---+---|".to_string(),
            }),
        }));
        assert_eq!(output.finish(), "| k | v |\n|---+---|\n");
    }

    #[test]
    fn raw_block_fidelity() {
        let document = document(vec![Node::Block(Block {
            name: "SRC".to_string(),
            parameters: vec!["org".to_string()],
            children: vec![text("* Not a headline\n#+END_SRC\n  indented")],
        })]);

        let result = render(&document, TAGS_COLUMN);
        assert_eq!(
            result,
            trim(
                r#"
#+BEGIN_SRC org
* Not a headline
#+END_SRC
  indented
#+END_SRC
"#
            )
        );
    }

    #[test]
    fn footnotes_inline_and_section() {
        let inline = FootnoteDefinition {
            name: "aside".to_string(),
            inline: true,
            children: vec![paragraph(vec![text("briefly")])],
        };
        let block = FootnoteDefinition {
            name: "1".to_string(),
            inline: false,
            children: vec![paragraph(vec![text("At length.")])],
        };

        let document = Document {
            nodes: vec![paragraph(vec![
                text("Said"),
                Node::FootnoteLink(FootnoteLink {
                    name: "aside".to_string(),
                    definition: Some(Box::new(inline.clone())),
                }),
                text(" and done"),
                Node::FootnoteLink(FootnoteLink {
                    name: "1".to_string(),
                    definition: None,
                }),
                text("."),
            ])],
            footnotes: Footnotes {
                title: "Footnotes".to_string(),
                definitions: vec![inline, block],
            },
        };

        let result = render(&document, TAGS_COLUMN);
        assert_eq!(
            result,
            trim(
                r#"
Said[fn:aside:briefly] and done[fn:1].
* Footnotes
[fn:1] At length.
"#
            )
        );
        assert_eq!(
            result
                .matches("briefly")
                .count(),
            1
        );
    }

    #[test]
    fn footnote_section_only_inline() {
        // a section heading is still written when every definition is inline
        let document = Document {
            nodes: vec![],
            footnotes: Footnotes {
                title: "Footnotes".to_string(),
                definitions: vec![FootnoteDefinition {
                    name: "x".to_string(),
                    inline: true,
                    children: vec![paragraph(vec![text("y")])],
                }],
            },
        };

        let result = render(&document, TAGS_COLUMN);
        assert_eq!(result, "* Footnotes\n");
    }

    #[test]
    fn decoded_document() {
        let content = r#"
{
    "nodes": [
        {"type": "Keyword", "key": "AUTHOR", "value": "Someone"},
        {
            "type": "Paragraph",
            "children": [
                {"type": "Text", "content": "See "},
                {"type": "RegularLink", "url": "https://orgmode.org", "description": [
                    {"type": "Emphasis", "kind": "~", "content": [{"type": "Text", "content": "org"}]}
                ]},
                {"type": "Text", "content": " and x"},
                {"type": "Emphasis", "kind": "^{}", "content": [{"type": "Text", "content": "2"}]}
            ]
        }
    ]
}
        "#;

        let document: Document = serde_json::from_str(content).unwrap();
        let result = render(&document, TAGS_COLUMN);
        assert_eq!(
            result,
            trim(
                r#"
#+AUTHOR: Someone
See [[https://orgmode.org][~org~]] and x^{2}
"#
            )
        );
    }
}
