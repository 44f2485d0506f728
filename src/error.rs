use std::path::PathBuf;

#[derive(Debug)]
pub enum BacklogError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Yaml(yaml_rust2::ScanError),
    /// Well-formed YAML that does not describe a catalog.
    Catalog(String),
    Logger(log::SetLoggerError),
}

impl std::fmt::Display for BacklogError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read {}: {source}", path.display())
            }
            Self::Yaml(e) => write!(f, "malformed YAML: {e}"),
            Self::Catalog(msg) => write!(f, "invalid catalog: {msg}"),
            Self::Logger(e) => write!(f, "failed to initialize logger: {e}"),
        }
    }
}

impl std::error::Error for BacklogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Yaml(e) => Some(e),
            Self::Logger(e) => Some(e),
            Self::Catalog(_) => None,
        }
    }
}

impl From<yaml_rust2::ScanError> for BacklogError {
    fn from(e: yaml_rust2::ScanError) -> Self {
        Self::Yaml(e)
    }
}

impl From<log::SetLoggerError> for BacklogError {
    fn from(e: log::SetLoggerError) -> Self {
        Self::Logger(e)
    }
}
