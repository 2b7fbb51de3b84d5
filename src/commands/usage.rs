use crate::areas::session::Session;
use std::io::Write;

impl Session {
    /// One-shot usage example, shown for any argument count other than two.
    pub fn usage(&mut self) -> anyhow::Result<()> {
        writeln!(self.writer())?;
        writeln!(
            self.writer(),
            "{}",
            self.styles().header("--- FileDiff Usage Example ---")
        )?;
        writeln!(self.writer())?;
        writeln!(
            self.writer(),
            "{} {} {}",
            self.styles().command("filediff"),
            self.styles().added("file1.css"),
            self.styles().removed("file2.css"),
        )?;
        writeln!(self.writer())?;

        Ok(())
    }
}
