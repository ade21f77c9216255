use crate::error::DeployError;
use std::io;
use std::path::PathBuf;

/// Reads template documents from a local templates directory. The body is
/// passed to the service verbatim, never parsed or validated here.
#[derive(Debug, Clone)]
pub struct TemplateStore {
    directory: PathBuf,
}

impl TemplateStore {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        TemplateStore {
            directory: directory.into(),
        }
    }

    /// Read the raw body of the named template from `<directory>/<name>.yaml`
    pub fn load(&self, name: &str) -> Result<String, DeployError> {
        let path = self.directory.join(format!("{}.yaml", name));
        std::fs::read_to_string(&path).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                DeployError::TemplateNotFound(path.display().to_string())
            } else {
                DeployError::Io(e)
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_load_returns_raw_body() {
        let dir = tempfile::tempdir().unwrap();
        let body = "AWSTemplateFormatVersion: '2010-09-09'\n";
        fs::write(dir.path().join("warehouse.yaml"), body).unwrap();

        let store = TemplateStore::new(dir.path());
        assert_eq!(store.load("warehouse").unwrap(), body);
    }

    #[test]
    fn test_load_missing_template() {
        let dir = tempfile::tempdir().unwrap();
        let store = TemplateStore::new(dir.path());

        match store.load("warehouse") {
            Err(DeployError::TemplateNotFound(path)) => {
                assert!(path.ends_with("warehouse.yaml"));
            }
            other => panic!("expected TemplateNotFound, got {:?}", other),
        }
    }
}
