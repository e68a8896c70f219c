//! PDF decoding via pdf-extract.

use std::path::Path;

/// Decodes the staged PDF page by page. Pages without a text layer contribute
/// nothing rather than failing the whole document.
pub(super) fn extract(path: &Path) -> Result<String, String> {
    let pages = pdf_extract::extract_text_by_pages(path).map_err(|e| e.to_string())?;
    Ok(join_pages(pages))
}

fn join_pages(pages: impl IntoIterator<Item = String>) -> String {
    pages.into_iter().collect::<String>().trim().to_string()
}

/// Builds a minimal PDF with one Helvetica text line per page. An empty entry
/// produces a page whose content stream draws nothing.
#[cfg(test)]
pub(crate) fn sample_pdf(pages: &[&str]) -> Vec<u8> {
    let page_count = pages.len();
    // 1: catalog, 2: page tree, 3: font, then a (page, contents) pair per page.
    let page_id = |i: usize| 4 + 2 * i;
    let mut objects = vec![
        "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
        format!(
            "<< /Type /Pages /Kids [{}] /Count {page_count} >>",
            (0..page_count)
                .map(|i| format!("{} 0 R", page_id(i)))
                .collect::<Vec<_>>()
                .join(" ")
        ),
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>"
            .to_string(),
    ];
    for (i, line) in pages.iter().enumerate() {
        let content = if line.is_empty() {
            String::new()
        } else {
            format!("BT /F1 12 Tf 72 720 Td ({line}) Tj ET")
        };
        objects.push(format!(
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
             /Resources << /Font << /F1 3 0 R >> >> /Contents {} 0 R >>",
            page_id(i) + 1
        ));
        objects.push(format!(
            "<< /Length {} >>\nstream\n{content}\nendstream",
            content.len()
        ));
    }

    let mut pdf = b"%PDF-1.4\n".to_vec();
    let mut offsets = Vec::with_capacity(objects.len());
    for (i, body) in objects.iter().enumerate() {
        offsets.push(pdf.len());
        pdf.extend_from_slice(format!("{} 0 obj\n{body}\nendobj\n", i + 1).as_bytes());
    }
    let xref_offset = pdf.len();
    let mut xref = format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1);
    for offset in offsets {
        xref.push_str(&format!("{offset:010} 00000 n \n"));
    }
    pdf.extend_from_slice(xref.as_bytes());
    pdf.extend_from_slice(
        format!(
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_offset}\n%%EOF\n",
            objects.len() + 1
        )
        .as_bytes(),
    );
    pdf
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(bytes: &[u8]) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".pdf").tempfile().unwrap();
        file.write_all(bytes).unwrap();
        file
    }

    #[test]
    fn test_sample_pdf_decodes_page_by_page_with_blank_middle_page() {
        let file = write_temp(&sample_pdf(&[
            "Education: State University",
            "",
            "Experience: Acme Corp",
        ]));
        let pages = pdf_extract::extract_text_by_pages(file.path()).unwrap();
        assert_eq!(pages.len(), 3);
        assert!(pages[0].contains("Education: State University"));
        assert!(pages[1].trim().is_empty());
        assert!(pages[2].contains("Experience: Acme Corp"));
    }

    #[test]
    fn test_extract_concatenates_pages_in_order_and_trims() {
        let file = write_temp(&sample_pdf(&[
            "Education: State University",
            "",
            "Experience: Acme Corp",
        ]));
        let text = extract(file.path()).unwrap();

        assert_eq!(text, text.trim());
        let education = text.find("Education: State University").unwrap();
        let experience = text.find("Experience: Acme Corp").unwrap();
        assert!(education < experience);
    }

    #[test]
    fn test_join_pages_concatenates_without_separator() {
        let pages = vec!["Jane Doe\n".to_string(), "Experience\n".to_string()];
        assert_eq!(join_pages(pages), "Jane Doe\nExperience");
    }

    #[test]
    fn test_blank_pages_contribute_nothing() {
        let pages = vec![
            String::new(),
            "  Skills: Rust  ".to_string(),
            String::new(),
        ];
        assert_eq!(join_pages(pages), "Skills: Rust");
    }

    #[test]
    fn test_no_pages_yields_empty_text() {
        assert_eq!(join_pages(Vec::new()), "");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(extract(&dir.path().join("missing.pdf")).is_err());
    }
}
