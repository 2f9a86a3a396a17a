use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("prompts file not found: {}", .path.display())]
    SourceNotFound { path: PathBuf },

    #[error("failed to read prompts file {}: {}", .path.display(), .source)]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "no prompts parsed from {}; ensure prompts are formatted like '1) ...' under '## T1 ...' sections",
        .path.display()
    )]
    NoPrompts { path: PathBuf },
}
