use std::fs;
use std::path::PathBuf;

use crate::errors::CatalogError;
use crate::model::{Prompt, TaskId};
use crate::{parse_catalog, parse_catalog_file};

fn fixture_path(path: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/data")
        .join(path)
}

fn fixture(path: &str) -> String {
    let full_path = fixture_path(path);
    fs::read_to_string(&full_path)
        .unwrap_or_else(|err| panic!("failed to read fixture {}: {}", full_path.display(), err))
}

#[test]
fn parses_prompts_in_document_order() {
    let content = fixture("prompts_v0.1.md");
    let prompts = parse_catalog(&content);

    assert_eq!(prompts.len(), 7);
    assert_eq!(
        prompts[0],
        Prompt::new(TaskId::new("T1"), 1, "A cat wearing a hat walks across a lawn.")
    );
    assert_eq!(
        prompts[1],
        Prompt::new(TaskId::new("T1"), 2, "Two people shake hands at sunset.")
    );
    assert_eq!(
        prompts[3],
        Prompt::new(TaskId::new("T2"), 1, "A robot waves at the camera.")
    );
    assert_eq!(
        prompts[5],
        Prompt::new(TaskId::new("T3"), 1, "A flag ripples in steady wind.")
    );
}

#[test]
fn section_scope_extends_to_the_next_heading() {
    let content = fixture("prompts_v0.1.md");
    let prompts = parse_catalog(&content);

    let t2: Vec<&Prompt> = prompts
        .iter()
        .filter(|prompt| prompt.task_id == TaskId::new("T2"))
        .collect();
    assert_eq!(t2.len(), 2);
    assert_eq!(t2[1].prompt_id, 2);
    assert_eq!(t2[1].text, "The same robot picks up a coffee cup.");
}

#[test]
fn heading_without_task_code_falls_back_to_sentinel() {
    let content = fixture("prompts_v0.1.md");
    let prompts = parse_catalog(&content);

    let last = prompts.last().expect("fixture has prompts");
    assert_eq!(last.task_id, TaskId::unresolved());
    assert!(!last.task_id.is_resolved());
}

#[test]
fn prompts_before_any_heading_use_the_sentinel() {
    let prompts = parse_catalog("1) Orphan prompt\n## T1 — Later\n1) Owned prompt\n");

    assert_eq!(prompts.len(), 2);
    assert_eq!(prompts[0].task_id.as_str(), "T?");
    assert_eq!(prompts[1].task_id.as_str(), "T1");
}

#[test]
fn lowercase_task_codes_are_not_recognized() {
    let prompts = parse_catalog("## t1 — lowercase heading\n1) A prompt\n");
    assert_eq!(prompts[0].task_id, TaskId::unresolved());
}

#[test]
fn task_code_stops_at_a_word_boundary() {
    let prompts = parse_catalog("## T12abc suffix\n1) A prompt\n");
    assert_eq!(prompts[0].task_id, TaskId::unresolved());

    let prompts = parse_catalog("## T12 — fine\n1) A prompt\n");
    assert_eq!(prompts[0].task_id, TaskId::new("T12"));
}

#[test]
fn deeper_headings_do_not_start_sections() {
    let prompts = parse_catalog("## T1 — Real\n### T2 — Subsection\n1) Still T1\n");

    assert_eq!(prompts.len(), 1);
    assert_eq!(prompts[0].task_id, TaskId::new("T1"));
}

#[test]
fn prompt_line_requires_whitespace_after_the_paren() {
    let prompts = parse_catalog("## T1 — X\n1)no gap\n2) has gap\n");

    assert_eq!(prompts.len(), 1);
    assert_eq!(prompts[0].prompt_id, 2);
}

#[test]
fn non_matching_lines_are_ignored() {
    let content = "## T1 — X\nprose line\n\n- bullet\n1) kept\n2 missing paren\n";
    let prompts = parse_catalog(content);

    assert_eq!(prompts.len(), 1);
    assert_eq!(prompts[0].text, "kept");
}

#[test]
fn duplicate_prompt_ids_are_preserved() {
    let prompts = parse_catalog("## T1 — X\n1) first\n1) second\n");

    assert_eq!(prompts.len(), 2);
    assert_eq!(prompts[0].prompt_id, prompts[1].prompt_id);
    assert_ne!(prompts[0].text, prompts[1].text);
}

#[test]
fn surrounding_whitespace_is_trimmed() {
    let prompts = parse_catalog("  ## T1 — padded\n   3)   padded text   \n");
    assert_eq!(prompts[0], Prompt::new(TaskId::new("T1"), 3, "padded text"));
}

#[test]
fn missing_file_reports_source_not_found() {
    let err = parse_catalog_file(&fixture_path("does_not_exist.md"))
        .expect_err("missing file must not parse");

    match err {
        CatalogError::SourceNotFound { path } => {
            assert!(path.ends_with("does_not_exist.md"));
        }
        other => panic!("expected SourceNotFound error, got {other:?}"),
    }
}

#[test]
fn promptless_file_reports_no_prompts() {
    let err = parse_catalog_file(&fixture_path("no_prompts.md"))
        .expect_err("promptless catalog must not parse");

    match err {
        CatalogError::NoPrompts { .. } => {}
        other => panic!("expected NoPrompts error, got {other:?}"),
    }
}

#[test]
fn parse_catalog_file_reads_the_fixture() {
    let prompts = parse_catalog_file(&fixture_path("prompts_v0.1.md")).expect("fixture parses");
    assert_eq!(prompts.len(), 7);
}
