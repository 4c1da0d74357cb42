//! Integration tests for successful merges.

use pdfmerge::config::MergeRequest;
use pdfmerge::io::LopdfCodec;
use pdfmerge::merge::{MergeObserver, Merger, merge_pdfs};
use pdfmerge::output::Report;
use pdfmerge::FileDetail;
use serde_json::Value;
use std::path::Path;

use crate::common::{page_contents, page_count, temp_dir, write_pdf};

#[test]
fn test_merge_two_pdfs_sums_pages() {
    let dir = temp_dir();
    let a = write_pdf(dir.path(), "a.pdf", 3);
    let b = write_pdf(dir.path(), "b.pdf", 2);
    let output = dir.path().join("merged.pdf");

    let result = merge_pdfs(&MergeRequest::new([&a, &b], &output)).unwrap();

    assert!(result.success);
    assert_eq!(result.total_pages, 5);
    assert_eq!(result.files_processed, 2);
    assert!(result.output_size_bytes > 0);
    assert_eq!(page_count(&output), 5);

    let names: Vec<&str> = result
        .file_details
        .iter()
        .map(|d| d.filename.as_str())
        .collect();
    assert_eq!(names, ["a.pdf", "b.pdf"]);
    assert_eq!(result.file_details[0].page_count, 3);
    assert_eq!(result.file_details[1].page_count, 2);
}

#[test]
fn test_merge_preserves_order_and_content() {
    let dir = temp_dir();
    let a = write_pdf(dir.path(), "first.pdf", 2);
    let b = write_pdf(dir.path(), "second.pdf", 2);
    let output = dir.path().join("merged.pdf");

    merge_pdfs(&MergeRequest::new([&b, &a], &output)).unwrap();

    let mut expected = page_contents(&b);
    expected.extend(page_contents(&a));
    assert_eq!(page_contents(&output), expected);
}

#[test]
fn test_merge_three_single_page_pdfs() {
    let dir = temp_dir();
    let inputs: Vec<_> = ["one.pdf", "two.pdf", "three.pdf"]
        .iter()
        .map(|name| write_pdf(dir.path(), name, 1))
        .collect();
    let output = dir.path().join("merged.pdf");

    let result = merge_pdfs(&MergeRequest::new(&inputs, &output)).unwrap();

    assert_eq!(result.total_pages, 3);
    assert_eq!(result.files_processed, 3);
    assert_eq!(result.file_details.len(), 3);
    assert_eq!(result.file_details[0].filename, "one.pdf");
    assert_eq!(result.file_details[1].filename, "two.pdf");
    assert_eq!(result.file_details[2].filename, "three.pdf");
    assert!(result.note.contains("3 PDF files"));
}

#[test]
fn test_merge_reports_input_sizes() {
    let dir = temp_dir();
    let a = write_pdf(dir.path(), "a.pdf", 1);
    let b = write_pdf(dir.path(), "b.pdf", 4);
    let output = dir.path().join("merged.pdf");

    let result = merge_pdfs(&MergeRequest::new([&a, &b], &output)).unwrap();

    assert_eq!(
        result.file_details[0].size_bytes,
        std::fs::metadata(&a).unwrap().len()
    );
    assert_eq!(
        result.file_details[1].size_bytes,
        std::fs::metadata(&b).unwrap().len()
    );
    assert_eq!(
        result.output_size_bytes,
        std::fs::metadata(&output).unwrap().len()
    );
    assert_eq!(result.output_path, output.display().to_string());
}

#[test]
fn test_merge_same_file_twice() {
    let dir = temp_dir();
    let a = write_pdf(dir.path(), "a.pdf", 2);
    let output = dir.path().join("merged.pdf");

    let result = merge_pdfs(&MergeRequest::new([&a, &a], &output)).unwrap();

    assert_eq!(result.total_pages, 4);
    let contents = page_contents(&output);
    assert_eq!(contents[0..2], contents[2..4]);
}

#[test]
fn test_uppercase_extension_accepted() {
    let dir = temp_dir();
    let a = write_pdf(dir.path(), "UPPER.PDF", 1);
    let b = write_pdf(dir.path(), "lower.pdf", 1);
    let output = dir.path().join("merged.pdf");

    let result = merge_pdfs(&MergeRequest::new([&a, &b], &output)).unwrap();
    assert_eq!(result.total_pages, 2);
}

#[test]
fn test_rerun_produces_same_pages() {
    let dir = temp_dir();
    let a = write_pdf(dir.path(), "a.pdf", 2);
    let b = write_pdf(dir.path(), "b.pdf", 3);
    let output = dir.path().join("merged.pdf");
    let request = MergeRequest::new([&a, &b], &output);

    let first = merge_pdfs(&request).unwrap();
    let first_contents = page_contents(&output);

    let second = merge_pdfs(&request).unwrap();
    let second_contents = page_contents(&output);

    assert_eq!(first.total_pages, second.total_pages);
    assert_eq!(first.file_details, second.file_details);
    assert_eq!(first_contents, second_contents);
}

#[test]
fn test_merged_output_can_be_merged_again() {
    let dir = temp_dir();
    let a = write_pdf(dir.path(), "a.pdf", 1);
    let b = write_pdf(dir.path(), "b.pdf", 1);
    let c = write_pdf(dir.path(), "c.pdf", 2);
    let ab = dir.path().join("ab.pdf");
    let abc = dir.path().join("abc.pdf");

    merge_pdfs(&MergeRequest::new([&a, &b], &ab)).unwrap();
    let result = merge_pdfs(&MergeRequest::new([&ab, &c], &abc)).unwrap();

    assert_eq!(result.total_pages, 4);
    let mut expected = page_contents(&a);
    expected.extend(page_contents(&b));
    expected.extend(page_contents(&c));
    assert_eq!(page_contents(&abc), expected);
}

#[test]
fn test_output_in_new_directory() {
    let dir = temp_dir();
    let a = write_pdf(dir.path(), "a.pdf", 1);
    let b = write_pdf(dir.path(), "b.pdf", 1);
    let output = dir.path().join("out").join("nested").join("merged.pdf");

    merge_pdfs(&MergeRequest::new([&a, &b], &output)).unwrap();
    assert!(output.exists());
}

#[test]
fn test_report_json_shape() {
    let dir = temp_dir();
    let a = write_pdf(dir.path(), "a.pdf", 1);
    let b = write_pdf(dir.path(), "b.pdf", 2);
    let output = dir.path().join("merged.pdf");

    let report = Report::from_outcome(merge_pdfs(&MergeRequest::new([&a, &b], &output)));
    assert_eq!(report.exit_code(), 0);

    let value: Value = serde_json::from_str(&report.to_json()).unwrap();
    let mut keys: Vec<&str> = value
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    keys.sort_unstable();
    assert_eq!(
        keys,
        [
            "fileDetails",
            "filesProcessed",
            "method",
            "note",
            "outputPath",
            "outputSize",
            "processingTime",
            "success",
            "totalPages",
        ]
    );
    assert_eq!(value["fileDetails"][1]["pages"], 2);
    assert!(value["fileDetails"][0]["size"].as_u64().unwrap() > 0);
}

#[derive(Default)]
struct Progress {
    started: Vec<String>,
    finished: Vec<FileDetail>,
    completed: bool,
}

impl MergeObserver for Progress {
    fn on_file_start(&mut self, _index: usize, _total: usize, path: &Path) {
        self.started.push(path.display().to_string());
    }

    fn on_file_done(&mut self, _index: usize, _total: usize, detail: &FileDetail) {
        self.finished.push(detail.clone());
    }

    fn on_complete(&mut self, _result: &pdfmerge::MergeResult) {
        self.completed = true;
    }
}

#[test]
fn test_observer_reports_each_file() {
    let dir = temp_dir();
    let a = write_pdf(dir.path(), "a.pdf", 1);
    let b = write_pdf(dir.path(), "b.pdf", 2);
    let output = dir.path().join("merged.pdf");

    let mut progress = Progress::default();
    let result = Merger::with_observer(LopdfCodec::new(), &mut progress)
        .merge(&MergeRequest::new([&a, &b], &output))
        .unwrap();

    assert_eq!(
        progress.started,
        [a.display().to_string(), b.display().to_string()]
    );
    assert_eq!(progress.finished, result.file_details);
    assert!(progress.completed);
}
