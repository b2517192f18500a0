//! Print documents spooled to disk and opened with a viewer command

use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};
use std::thread::JoinHandle;

use freehold_core::order::ports::{DocumentExporter, PrintDocument};
use freehold_core::ExportError;
use freehold_domain::utils::text::slugify;
use tracing::{debug, info, warn};

/// Writes the HTML document into `dir` and, when a viewer command is
/// configured, launches it with the file path as its only argument.
///
/// A missing or failing viewer is the headless equivalent of a blocked
/// pop-up and is reported as [`ExportError::WindowBlocked`].
#[derive(Debug, Clone)]
pub struct PrintSpoolExporter {
    dir: PathBuf,
    command: Option<String>,
}

impl PrintSpoolExporter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into(), command: None }
    }

    pub fn with_command(mut self, command: Option<String>) -> Self {
        self.command = command.filter(|c| !c.trim().is_empty());
        self
    }

    fn spool(&self, document: &PrintDocument) -> Result<PathBuf, ExportError> {
        let target = self.dir.join(format!("{}.html", slugify(&document.title)));
        std::fs::create_dir_all(&self.dir)
            .and_then(|()| std::fs::write(&target, document.html.as_bytes()))
            .map_err(|err| ExportError::Delivery(format!("{}: {err}", target.display())))?;
        Ok(target)
    }

    /// Start the viewer and reap it on a background thread once it exits.
    fn open(
        &self,
        command: &str,
        path: &Path,
    ) -> Result<JoinHandle<Option<ExitStatus>>, ExportError> {
        let mut child = Command::new(command)
            .arg(path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|err| {
                warn!(command, error = %err, "print viewer could not be started");
                ExportError::WindowBlocked(format!("{command}: {err}"))
            })?;

        let command = command.to_string();
        std::thread::Builder::new()
            .name("print-viewer".into())
            .spawn(move || match child.wait() {
                Ok(status) => {
                    debug!(%command, %status, "print viewer exited");
                    Some(status)
                }
                Err(err) => {
                    warn!(%command, error = %err, "print viewer could not be waited on");
                    None
                }
            })
            .map_err(|err| ExportError::Delivery(format!("print viewer thread: {err}")))
    }
}

impl DocumentExporter for PrintSpoolExporter {
    fn open_for_print(&self, document: PrintDocument) -> Result<(), ExportError> {
        let path = self.spool(&document)?;
        info!(path = %path.display(), "print document spooled");

        match &self.command {
            Some(command) => self.open(command, &path).map(drop),
            None => Ok(()),
        }
    }
}
