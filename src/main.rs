use anyhow::Result;
use clap::Parser;
use filediff::areas::session::Session;
use filediff::artifacts::settings::Settings;
use filediff::artifacts::styles::Styles;
use is_terminal::IsTerminal;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "filediff",
    version = "0.1.0",
    about = "Takes two files and displays their differences",
    long_about = "FileDiff takes two files and displays their differences. \
    Files are compared line by line, strictly by position: removed lines are \
    shown before added lines within each changed block.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(value_name = "FILE", help = "The two files to compare")]
    files: Vec<String>,
    #[arg(
        long,
        value_name = "PATH",
        help = "Settings file (default is $HOME/.filediff.yaml)"
    )]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings = Settings::load(cli.config.as_deref())?;
    let styles = Styles::new(settings.color && std::io::stdout().is_terminal());

    let pwd = std::env::current_dir()?;
    let mut session = Session::new(
        &pwd.to_string_lossy(),
        styles,
        Box::new(std::io::stdout()),
    )?;

    match cli.files.as_slice() {
        [file1, file2] => session.diff(file1, file2)?,
        _ => session.usage()?,
    }

    Ok(())
}
