use thiserror::Error;

/// Core error types for NetSketch
#[derive(Debug, Error)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML serialization/deserialization failed
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Export requested with no segments and no rules
    #[error("No data to export")]
    NoData,

    /// No XDG data directory could be resolved for this user
    #[error("Data directory not available")]
    DataDirUnavailable,
}

impl Error {
    /// Short message suitable for a notification banner
    pub fn user_message(&self) -> String {
        match self {
            Error::NoData => "No data to export".to_string(),
            Error::Io(e) if e.kind() == std::io::ErrorKind::StorageFull => {
                "Disk full: free up space and try again".to_string()
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_data_message() {
        assert_eq!(Error::NoData.user_message(), "No data to export");
    }

    #[test]
    fn test_data_dir_message() {
        assert_eq!(
            Error::DataDirUnavailable.user_message(),
            "Data directory not available"
        );
    }

    #[test]
    fn test_storage_full_translation() {
        let err = Error::Io(std::io::Error::new(
            std::io::ErrorKind::StorageFull,
            "no space left on device",
        ));
        assert!(err.user_message().contains("Disk full"));
    }
}
