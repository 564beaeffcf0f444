//! Command line configuration.

use anyhow::{Result, bail};
use clap::Parser;
use std::path::PathBuf;

/// Command line configuration for Inkpost.
#[derive(Debug, Clone, Parser)]
#[command(name = "inkpost", version, about, long_about = None)]
pub struct Config {
    /// Post store file (JSON)
    #[arg(short, long, default_value = "posts.json")]
    pub store: PathBuf,

    /// Output directory
    #[arg(short, long, default_value = "dist")]
    pub output: PathBuf,

    /// Blog title
    #[arg(long)]
    pub title: Option<String>,

    /// Open the generated site in a browser
    #[arg(long)]
    pub open: bool,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the store path exists but is not a file.
    pub fn validate(&self) -> Result<()> {
        if self.store.exists() && !self.store.is_file() {
            bail!("Post store is not a file: {}", self.store.display());
        }

        Ok(())
    }

    /// Returns the blog title from configuration or the default.
    pub fn blog_title(&self) -> String {
        self.title.clone().unwrap_or_else(|| "My Blog".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn config_with(store: PathBuf, title: Option<String>) -> Config {
        Config {
            store,
            output: PathBuf::from("dist"),
            title,
            open: false,
        }
    }

    #[test]
    fn test_blog_title_explicit() {
        // Arrange
        let config = config_with(PathBuf::from("posts.json"), Some("Field Notes".to_string()));

        // Act & Assert
        assert_eq!(config.blog_title(), "Field Notes");
    }

    #[test]
    fn test_blog_title_default() {
        let config = config_with(PathBuf::from("posts.json"), None);
        assert_eq!(config.blog_title(), "My Blog");
    }

    #[test]
    fn test_validate_missing_store_is_ok() {
        // Arrange: a store that does not exist yet is a valid first run
        let dir = TempDir::new().expect("Should create temp dir");
        let config = config_with(dir.path().join("posts.json"), None);

        // Act & Assert
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_directory_store_rejected() {
        // Arrange
        let dir = TempDir::new().expect("Should create temp dir");
        let config = config_with(dir.path().to_path_buf(), None);

        // Act
        let result = config.validate();

        // Assert
        assert!(result.is_err(), "Directory store path should be rejected");
    }
}
