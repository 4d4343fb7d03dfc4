//! Hands a DOT description to an external layout engine.

use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::Path;
use std::process::{Command, Stdio};

use tempfile::{Builder, NamedTempFile};

use crate::error::RenderError;

pub const DEFAULT_FORMAT: &str = "svg";

const SUPPORTED_FORMATS: &[&str] = &["svg", "png", "pdf", "jpg", "jpeg", "gif"];

/// Picks the output format: explicit setting first, then the file extension.
pub fn resolve_format(configured: Option<&str>, output: &Path) -> Result<String, RenderError> {
    let format = match configured {
        Some(format) => format.to_lowercase(),
        None => match output.extension() {
            Some(ext) => ext.to_string_lossy().to_lowercase(),
            None => DEFAULT_FORMAT.to_string(),
        },
    };

    if SUPPORTED_FORMATS.contains(&format.as_str()) {
        Ok(format)
    } else {
        Err(RenderError::UnsupportedFormat(format))
    }
}

/// An engine program plus its arguments. DOT goes in on stdin, the rendered
/// document comes out on stdout.
#[derive(Debug, Clone)]
pub struct Renderer {
    engine: String,
    args: Vec<String>,
}

impl Renderer {
    pub fn new(engine: impl Into<String>) -> Self {
        Self {
            engine: engine.into(),
            args: Vec::new(),
        }
    }

    /// A Graphviz program (`twopi`, `dot`, ...) producing `format`
    pub fn graphviz(engine: impl Into<String>, format: &str) -> Self {
        Self::new(engine).with_arg(format!("-T{format}"))
    }

    pub fn with_arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn engine(&self) -> &str {
        &self.engine
    }

    /// Renders into `output`. The file only appears once the engine succeeded.
    pub fn render_to_file(&self, dot: &str, output: &Path) -> Result<(), RenderError> {
        let dir = match output.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let temp = output_file(dir, output)?;
        let mut errors = tempfile::tempfile()?;

        log::info!("Running {} {:?} -> {:?}", self.engine, self.args, output);

        let mut child = Command::new(&self.engine)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::from(temp.reopen()?))
            .stderr(Stdio::from(errors.try_clone()?))
            .spawn()
            .map_err(|source| RenderError::EngineUnavailable {
                engine: self.engine.clone(),
                source,
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            // An engine that exits early closes the pipe; its status tells why.
            match stdin.write_all(dot.as_bytes()) {
                Err(err) if err.kind() != io::ErrorKind::BrokenPipe => return Err(err.into()),
                _ => {}
            }
        }

        let status = child.wait()?;
        if !status.success() {
            let mut stderr = Vec::new();
            errors.seek(SeekFrom::Start(0))?;
            errors.read_to_end(&mut stderr)?;
            return Err(RenderError::EngineFailed {
                engine: self.engine.clone(),
                status,
                stderr: String::from_utf8_lossy(&stderr).trim().to_string(),
            });
        }

        temp.persist(output).map_err(|err| RenderError::Io(err.error))?;
        Ok(())
    }
}

/// Temp file next to `output` that ends up with the permissions a plainly
/// created file would get, or those of the file it replaces.
fn output_file(dir: &Path, output: &Path) -> io::Result<NamedTempFile> {
    let mut builder = Builder::new();
    builder.prefix(".mindmap-");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        // subject to the umask, like File::create
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }
    let temp = builder.tempfile_in(dir)?;

    if let Ok(existing) = std::fs::metadata(output) {
        temp.as_file().set_permissions(existing.permissions())?;
    }
    Ok(temp)
}
