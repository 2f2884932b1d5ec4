use std::{
    fs::create_dir_all,
    path::{Path, PathBuf},
};

use log::info;

use crate::{
    catalog::SHADERS,
    error::Error,
    project::{RunStatus, ToolRunner},
    settings,
};

pub const TOOL: &str = "sokol-shdc";
pub const SLANG: &str = "glsl300es:glsl430:hlsl4:metal_macos:metal_ios:metal_sim";

const YELLOW: &str = "\x1b[93m";
const DEF: &str = "\x1b[39m";

/// One sokol-shdc run over a single catalog entry.
pub struct CompileInvocation {
    pub input: String,
    pub output: PathBuf,
    pub slang: &'static str,
    pub byte_code: bool,
    pub cwd: PathBuf,
}

impl CompileInvocation {
    pub fn new(proj_dir: &Path, out_path: &Path, shader: &str) -> Self {
        Self {
            input: shader.to_owned(),
            output: out_path.join(format!("{}.h", shader)),
            slang: SLANG,
            byte_code: true,
            cwd: proj_dir.join("test"),
        }
    }

    pub fn args(&self) -> Vec<String> {
        let mut args = vec![
            "-i".to_owned(),
            self.input.clone(),
            "-o".to_owned(),
            self.output.to_string_lossy().into_owned(),
            "-l".to_owned(),
            self.slang.to_owned(),
        ];
        if self.byte_code {
            args.push("-b".to_owned());
        }
        args
    }
}

/// Compile every catalog entry, stopping at the first failure.
pub fn run<R: ToolRunner>(runner: &mut R, proj_dir: &Path, cfg: Option<&str>) -> Result<(), Error> {
    run_catalog(runner, proj_dir, cfg, SHADERS)
}

fn run_catalog<R: ToolRunner>(
    runner: &mut R,
    proj_dir: &Path,
    cfg: Option<&str>,
    shaders: &[&str],
) -> Result<(), Error> {
    let cfg_name = match cfg {
        Some(cfg_name) => cfg_name.to_owned(),
        None => settings::get_config(proj_dir)?,
    };
    let out_path = proj_dir.join("test").join("out");
    create_dir_all(&out_path).map_err(Error::CreateOutputDir)?;
    create_dir_all(out_path.join("sapp")).map_err(Error::CreateOutputDir)?;
    for shader in shaders {
        compile_one(runner, proj_dir, &cfg_name, &out_path, shader)?;
    }
    Ok(())
}

fn compile_one<R: ToolRunner>(
    runner: &mut R,
    proj_dir: &Path,
    cfg_name: &str,
    out_path: &Path,
    shader: &str,
) -> Result<(), Error> {
    let invocation = CompileInvocation::new(proj_dir, out_path, shader);
    info!("==> {} => {}:", invocation.input, invocation.output.display());
    match runner.run(cfg_name, TOOL, &invocation.args(), &invocation.cwd)? {
        RunStatus::Success => Ok(()),
        RunStatus::Failed(code) => Err(Error::CompileFailed {
            shader: shader.to_owned(),
            code,
        }),
    }
}

pub fn help() -> String {
    format!(
        "{}run_tests [cfg]\n{}    run shader compilation tests",
        YELLOW, DEF
    )
}
