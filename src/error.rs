use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("creating output directory failed")]
    CreateOutputDir(#[source] io::Error),
    #[error("reading settings failed")]
    ReadSettings(#[source] io::Error),
    #[error("parsing settings failed")]
    ParseSettings(#[from] serde_json::Error),
    #[error("could not run {tool}")]
    RunTool {
        tool: String,
        #[source]
        source: io::Error,
    },
    #[error("{shader}: sokol-shdc failed with exit code {code}")]
    CompileFailed { shader: String, code: i32 },
}

impl Error {
    /// Exit code for the whole process. A compile failure propagates the
    /// tool's own exit code, everything else exits 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::CompileFailed { code, .. } => *code,
            _ => 1,
        }
    }
}
