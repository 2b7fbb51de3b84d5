use crate::areas::session::Session;
use crate::artifacts::diff::positional_diff::{DiffResult, DiffSegment, PositionalDiff};
use std::io::Write;
use std::path::Path;

impl Session {
    pub fn diff(&mut self, file1: &str, file2: &str) -> anyhow::Result<()> {
        let lines1 = self.workspace().read_lines(Path::new(file1))?;
        let lines2 = self.workspace().read_lines(Path::new(file2))?;

        let result = PositionalDiff::new(&lines1, &lines2).compare();

        self.print_report(&result, file1, file2)
    }

    fn print_report(
        &self,
        result: &DiffResult<String>,
        file1: &str,
        file2: &str,
    ) -> anyhow::Result<()> {
        if result.files_are_equal {
            writeln!(self.writer(), "File contents are the same.")?;
            return Ok(());
        }

        writeln!(self.writer())?;
        writeln!(
            self.writer(),
            "{}",
            self.styles()
                .header(&format!("Differences between {file1} and {file2}"))
        )?;
        writeln!(self.writer())?;

        for segment in &result.segments {
            match segment {
                DiffSegment::Unchanged { line } => {
                    writeln!(self.writer(), "{}", self.styles().unchanged(&format!("  {line}")))?;
                }
                DiffSegment::Changed { removed, added } => {
                    self.print_changed_segment(removed, added)?;
                }
            }
        }

        writeln!(self.writer())?;

        Ok(())
    }

    // Removed lines always precede added lines within a block.
    fn print_changed_segment(&self, removed: &[String], added: &[String]) -> anyhow::Result<()> {
        for line in removed {
            writeln!(self.writer(), "{}", self.styles().removed(&format!("- {line}")))?;
        }

        for line in added {
            writeln!(self.writer(), "{}", self.styles().added(&format!("+ {line}")))?;
        }

        Ok(())
    }
}
