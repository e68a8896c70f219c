//! DOCX decoding via docx-rs.
//!
//! Only top-level body paragraphs are read. Table cells, headers and footers are
//! skipped, and empty paragraphs keep their place as blank lines.

use std::path::Path;

use docx_rs::{DocumentChild, Paragraph, ParagraphChild, RunChild};

pub(super) fn extract(path: &Path) -> Result<String, String> {
    let content = std::fs::read(path).map_err(|e| e.to_string())?;
    let docx = docx_rs::read_docx(&content).map_err(|e| e.to_string())?;

    let paragraphs: Vec<String> = docx
        .document
        .children
        .iter()
        .filter_map(|child| match child {
            DocumentChild::Paragraph(p) => Some(paragraph_text(p)),
            _ => None,
        })
        .collect();

    Ok(paragraphs.join("\n").trim().to_string())
}

fn paragraph_text(p: &Paragraph) -> String {
    let mut text = String::new();
    push_children(&p.children, &mut text);
    text
}

fn push_children(children: &[ParagraphChild], text: &mut String) {
    for child in children {
        match child {
            ParagraphChild::Run(r) => {
                for run_child in &r.children {
                    match run_child {
                        RunChild::Text(t) => text.push_str(&t.text),
                        RunChild::Tab(_) => text.push('\t'),
                        RunChild::Break(_) => text.push('\n'),
                        _ => {}
                    }
                }
            }
            ParagraphChild::Hyperlink(h) => push_children(&h.children, text),
            _ => {}
        }
    }
}

/// Builds an in-memory DOCX with one paragraph per entry.
#[cfg(test)]
pub(crate) fn sample_docx(paragraphs: &[&str]) -> Vec<u8> {
    use docx_rs::{Docx, Run};

    let docx = paragraphs.iter().fold(Docx::new(), |docx, line| {
        docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(*line)))
    });
    let mut buf = std::io::Cursor::new(Vec::new());
    docx.build().pack(&mut buf).unwrap();
    buf.into_inner()
}
