use std::{
    env::consts::EXE_SUFFIX,
    path::{Path, PathBuf},
    process::Command,
};

use crate::error::Error;

/// Outcome of one external tool invocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunStatus {
    Success,
    Failed(i32),
}

/// The collaborator that actually spawns external tools. The test runner only
/// sees this seam.
pub trait ToolRunner {
    fn run(
        &mut self,
        cfg_name: &str,
        tool: &str,
        args: &[String],
        cwd: &Path,
    ) -> Result<RunStatus, Error>;
}

/// Runs tools out of the fips deploy directory of the project under test,
/// `{workspace}/fips-deploy/{proj}/{cfg}/`, where the workspace is the parent
/// of the fips directory.
pub struct ProjectRunner {
    fips_dir: PathBuf,
    proj_dir: PathBuf,
}

impl ProjectRunner {
    pub fn new(fips_dir: PathBuf, proj_dir: PathBuf) -> Self {
        Self { fips_dir, proj_dir }
    }

    fn tool_path(&self, cfg_name: &str, tool: &str) -> PathBuf {
        let proj_name = self
            .proj_dir
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.fips_dir
            .parent()
            .unwrap_or_else(|| self.fips_dir.as_path())
            .join("fips-deploy")
            .join(proj_name)
            .join(cfg_name)
            .join(format!("{}{}", tool, EXE_SUFFIX))
    }
}

impl ToolRunner for ProjectRunner {
    fn run(
        &mut self,
        cfg_name: &str,
        tool: &str,
        args: &[String],
        cwd: &Path,
    ) -> Result<RunStatus, Error> {
        let status = Command::new(self.tool_path(cfg_name, tool))
            .args(args)
            .current_dir(cwd)
            .status()
            .map_err(|source| Error::RunTool {
                tool: tool.to_owned(),
                source,
            })?;
        match status.code() {
            Some(0) => Ok(RunStatus::Success),
            Some(code) => Ok(RunStatus::Failed(code)),
            // terminated by a signal
            None => Ok(RunStatus::Failed(1)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tool_path_follows_the_deploy_layout() {
        let runner = ProjectRunner::new(
            PathBuf::from("/workspace/fips"),
            PathBuf::from("/workspace/sokol-shdc"),
        );
        assert_eq!(
            runner.tool_path("linux-make-debug", "sokol-shdc"),
            PathBuf::from(format!(
                "/workspace/fips-deploy/sokol-shdc/linux-make-debug/sokol-shdc{}",
                EXE_SUFFIX
            ))
        );
    }
}
