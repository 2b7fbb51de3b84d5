use crate::areas::workspace::Workspace;
use crate::artifacts::styles::Styles;
use std::cell::{RefCell, RefMut};
use std::path::Path;

/// One invocation of the tool: the workspace it reads from, the styling
/// it renders with, and the writer its report goes to.
pub struct Session {
    path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    workspace: Workspace,
    styles: Styles,
}

impl Session {
    pub fn new(
        path: &str,
        styles: Styles,
        writer: Box<dyn std::io::Write>,
    ) -> anyhow::Result<Self> {
        let path = Path::new(path).canonicalize()?;
        let workspace = Workspace::new(path.clone().into_boxed_path());

        Ok(Session {
            path: path.into_boxed_path(),
            writer: RefCell::new(writer),
            workspace,
            styles,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn writer(&self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn styles(&self) -> &Styles {
        &self.styles
    }
}
