use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),

    #[error("config io error: {0}")]
    IoError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PrismError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("shell error: {0}")]
    Shell(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("fov out of range".into());
        assert_eq!(err.to_string(), "config validation error: fov out of range");

        let err = ConfigError::IoError("permission denied".into());
        assert_eq!(err.to_string(), "config io error: permission denied");
    }

    #[test]
    fn prism_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: PrismError = config_err.into();
        assert!(matches!(err, PrismError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn prism_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: PrismError = io_err.into();
        assert!(matches!(err, PrismError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }

    #[test]
    fn prism_error_shell_display() {
        let err = PrismError::Shell("event loop already running".into());
        assert_eq!(err.to_string(), "shell error: event loop already running");
    }
}
