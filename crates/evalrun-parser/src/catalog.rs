use std::fs;
use std::path::Path;

use crate::errors::CatalogError;
use crate::model::{Prompt, TaskId};

/// Scan catalog text for section headings and numbered prompt lines.
///
/// A single `current_task` accumulator is threaded through the scan: each
/// prompt belongs to the most recently seen section heading, or `T?` when
/// none precedes it. A heading line never emits a prompt, and lines matching
/// neither shape are ignored. Emission order is document order; duplicate
/// prompt ids are preserved.
pub fn parse_catalog(content: &str) -> Vec<Prompt> {
    let mut prompts = Vec::new();
    let mut current_task = TaskId::unresolved();

    for raw in content.lines() {
        let line = raw.trim();

        if let Some(heading) = match_section_heading(line) {
            current_task = TaskId::from_heading(heading);
            continue;
        }

        if let Some((prompt_id, text)) = match_prompt_line(line) {
            prompts.push(Prompt::new(current_task.clone(), prompt_id, text));
        }
    }

    prompts
}

/// Read and scan the catalog at `path`.
///
/// Fails with [`CatalogError::SourceNotFound`] when the path does not exist
/// and [`CatalogError::NoPrompts`] when the scan yields nothing.
pub fn parse_catalog_file(path: &Path) -> Result<Vec<Prompt>, CatalogError> {
    if !path.exists() {
        return Err(CatalogError::SourceNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path).map_err(|source| CatalogError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let prompts = parse_catalog(&content);
    if prompts.is_empty() {
        return Err(CatalogError::NoPrompts {
            path: path.to_path_buf(),
        });
    }

    Ok(prompts)
}

/// `## <heading>`: exactly two '#' characters, whitespace, then the heading.
fn match_section_heading(line: &str) -> Option<&str> {
    let rest = line.strip_prefix("##")?;
    let heading = rest.trim_start();
    if heading.len() == rest.len() || heading.is_empty() {
        return None;
    }
    Some(heading)
}

/// `<digits>) <text>`: the prompt id, a closing paren, whitespace, then text.
fn match_prompt_line(line: &str) -> Option<(u32, &str)> {
    let digits_end = line
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(line.len());
    if digits_end == 0 {
        return None;
    }

    let rest = line[digits_end..].strip_prefix(')')?;
    let text = rest.trim_start();
    if text.len() == rest.len() || text.is_empty() {
        return None;
    }

    let prompt_id = line[..digits_end].parse().ok()?;
    Some((prompt_id, text))
}
