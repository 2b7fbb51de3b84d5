use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

#[fixture]
pub fn working_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

pub fn run_filediff_command(current_dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("filediff").expect("Failed to find filediff binary");
    cmd.current_dir(current_dir);

    // keep the caller's settings file and environment out of the run
    cmd.env("HOME", current_dir);
    cmd.env_remove("FILEDIFF_CONFIG");
    cmd.env_remove("FILEDIFF_COLOR");

    for arg in args {
        cmd.arg(arg);
    }

    cmd
}
