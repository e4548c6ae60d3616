// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-file HTML report wrapping the demo SVGs.

use crate::svg::escape_xml;

#[derive(Debug)]
pub(crate) struct HtmlSection {
    pub(crate) title: String,
    pub(crate) notes: Vec<String>,
    pub(crate) svg: String,
}

impl HtmlSection {
    pub(crate) fn new(title: &str, svg: String) -> Self {
        Self {
            title: title.to_string(),
            notes: Vec::new(),
            svg,
        }
    }

    pub(crate) fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }
}

pub(crate) fn render_report(title: &str, sections: &[HtmlSection]) -> String {
    let mut out = String::new();
    out.push_str("<!doctype html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str(&format!("<title>{}</title>\n", escape_xml(title)));
    out.push_str(
        "<style>body{font-family:sans-serif;margin:2em}section{margin-bottom:2em}\
         .notes{color:#555;font-size:0.9em}</style>\n",
    );
    out.push_str("</head>\n<body>\n");
    out.push_str(&format!("<h1>{}</h1>\n", escape_xml(title)));
    for section in sections {
        out.push_str("<section>\n");
        out.push_str(&format!("<h2>{}</h2>\n", escape_xml(&section.title)));
        if !section.notes.is_empty() {
            out.push_str("<ul class=\"notes\">\n");
            for note in &section.notes {
                out.push_str(&format!("<li>{}</li>\n", escape_xml(note)));
            }
            out.push_str("</ul>\n");
        }
        out.push_str(&section.svg);
        out.push_str("</section>\n");
    }
    out.push_str("</body>\n</html>\n");
    out
}
