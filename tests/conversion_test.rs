//! End-to-end conversion against generated .docx fixtures.

use std::fs::File;
use std::path::PathBuf;

use docx_rs::{Docx, Paragraph, Run, Table, TableCell, TableRow};
use tempfile::TempDir;

use docmd::convert::{ContentSource, convert_file};
use docmd::error::Error;

fn text_paragraph(text: &str) -> Paragraph {
    Paragraph::new().add_run(Run::new().add_text(text))
}

fn cell(text: &str) -> TableCell {
    TableCell::new().add_paragraph(text_paragraph(text))
}

fn write_docx(dir: &TempDir, name: &str, docx: Docx) -> PathBuf {
    let path = dir.path().join(name);
    let mut file = File::create(&path).expect("create fixture");
    docx.build().pack(&mut file).expect("pack fixture");
    path
}

#[test]
fn converts_structured_document_to_markdown_file() {
    let dir = TempDir::new().unwrap();

    let docx = Docx::new()
        .add_paragraph(
            Paragraph::new()
                .style("Heading1")
                .add_run(Run::new().add_text("Introduction")),
        )
        .add_paragraph(text_paragraph("A plain paragraph of body text."))
        .add_paragraph(text_paragraph("• first bullet"))
        .add_table(
            Table::new(vec![])
                .add_row(TableRow::new(vec![cell("Name"), cell("Status")]))
                .add_row(TableRow::new(vec![cell("Login"), cell("Done")])),
        );
    let input = write_docx(&dir, "requirements.docx", docx);

    let conversion = convert_file(&input, None)
        .expect("conversion should succeed")
        .expect("document has content");

    assert_eq!(conversion.source, ContentSource::Structured);
    assert_eq!(conversion.output_path, dir.path().join("requirements.md"));

    let markdown = std::fs::read_to_string(&conversion.output_path).unwrap();
    assert!(markdown.contains("# Introduction"), "got:\n{markdown}");
    assert!(markdown.contains("A plain paragraph of body text."));
    assert!(markdown.contains("- first bullet"));
    assert!(markdown.contains("| Name | Status |"));
    assert!(markdown.contains("| ---- | ------ |"));
    assert!(markdown.contains("| Login | Done |"));
}

#[test]
fn explicit_output_path_is_honored_and_overwritten() {
    let dir = TempDir::new().unwrap();
    let docx = Docx::new().add_paragraph(text_paragraph("Hello there."));
    let input = write_docx(&dir, "note.docx", docx);

    let output = dir.path().join("custom.md");
    std::fs::write(&output, "stale content").unwrap();

    convert_file(&input, Some(&output))
        .expect("conversion should succeed")
        .expect("document has content");

    let markdown = std::fs::read_to_string(&output).unwrap();
    assert!(!markdown.contains("stale content"));
    assert!(markdown.contains("Hello there."));
}

#[test]
fn heading_styles_survive_the_round_trip() {
    let dir = TempDir::new().unwrap();
    let docx = Docx::new()
        .add_paragraph(
            Paragraph::new()
                .style("Heading2")
                .add_run(Run::new().add_text("Scope")),
        )
        .add_paragraph(text_paragraph("Details follow."));
    let input = write_docx(&dir, "scoped.docx", docx);

    let conversion = convert_file(&input, None).unwrap().unwrap();
    let markdown = std::fs::read_to_string(conversion.output_path).unwrap();
    assert!(markdown.contains("## Scope"), "got:\n{markdown}");
}

#[test]
fn missing_input_fails_without_writing() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("ghost.docx");

    let err = convert_file(&input, None).unwrap_err();
    assert!(matches!(err, Error::InputNotFound(_)));
    assert!(!dir.path().join("ghost.md").exists());
}

#[test]
fn empty_document_reports_failure_and_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let input = write_docx(&dir, "empty.docx", Docx::new());

    let result = convert_file(&input, None).expect("terminal errors only");
    assert!(result.is_none());
    assert!(!dir.path().join("empty.md").exists());
}

#[test]
fn non_docx_input_is_rejected() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("notes.txt");
    std::fs::write(&input, "plain text").unwrap();

    // Structured load and every archive-based strategy refuse the file,
    // so the conversion reports total failure rather than erroring
    let result = convert_file(&input, None).expect("failures recover into None");
    assert!(result.is_none());
    assert!(!dir.path().join("notes.md").exists());
}
