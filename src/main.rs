use std::{env::current_dir, path::PathBuf, process::exit};

use log::{error, LevelFilter};
use structopt::StructOpt;

use crate::project::ProjectRunner;

mod catalog;
mod error;
mod project;
mod runner;
mod settings;

/// run shader compilation tests
#[derive(StructOpt)]
#[structopt(name = "run_tests", usage = "run_tests [cfg]")]
struct Opt {
    /// build configuration used to locate sokol-shdc ("help" prints usage)
    cfg: Option<String>,
    /// location of the fips build tool, defaults to ../fips
    #[structopt(long, parse(from_os_str))]
    fips_dir: Option<PathBuf>,
    /// location of the project under test, defaults to the current directory
    #[structopt(long, parse(from_os_str))]
    proj_dir: Option<PathBuf>,
}

fn main() {
    env_logger::builder()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();
    let opt = Opt::from_args();
    if opt.cfg.as_deref() == Some("help") {
        println!("{}", runner::help());
        return;
    }
    let proj_dir = opt.proj_dir.unwrap_or_else(|| current_dir().unwrap());
    let fips_dir = match opt.fips_dir {
        Some(fips_dir) => fips_dir,
        None => proj_dir
            .parent()
            .unwrap_or_else(|| proj_dir.as_path())
            .join("fips"),
    };
    let mut project = ProjectRunner::new(fips_dir, proj_dir.clone());
    if let Err(error) = runner::run(&mut project, &proj_dir, opt.cfg.as_deref()) {
        error!("{}", error);
        exit(error.exit_code());
    }
}
