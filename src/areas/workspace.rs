use anyhow::Context;
use std::path::Path;

pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads a file into newline-stripped lines. Relative paths are
    /// resolved against the workspace root, absolute paths pass through.
    pub fn read_lines(&self, file_path: &Path) -> anyhow::Result<Vec<String>> {
        let file_path = self.path.join(file_path);

        let content = std::fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))?;

        Ok(content.lines().map(str::to_owned).collect())
    }
}
