use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration as file {0:?} does not exist")]
    BadFilePath(PathBuf),
    #[error("Config failed due to IO error: {0}")]
    IOError(#[from] std::io::Error),
    #[error("Config failed to parse YAML: {0}")]
    ParsingError(#[from] serde_yaml::Error),
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Could not open run catalog because file {0:?} does not exist")]
    BadFilePath(PathBuf),
    #[error("Run catalog failed due to IO error: {0}")]
    IOError(#[from] std::io::Error),
    #[error("Run catalog failed to parse CSV: {0}")]
    ParsingError(#[from] csv::Error),
    #[error("Run catalog {0:?} contains no runs")]
    EmptyCatalog(PathBuf),
}

#[derive(Debug, Error)]
pub enum TableWriteError {
    #[error("Table writer failed due to IO error: {0}")]
    IOError(#[from] std::io::Error),
    #[error("Table writer failed to emit CSV: {0}")]
    CsvError(#[from] csv::Error),
}

#[derive(Debug, Error)]
pub enum ProcessorError {
    #[error("Processor failed due to Config error: {0}")]
    ConfigError(#[from] ConfigError),
    #[error("Processor failed due to Catalog error: {0}")]
    CatalogError(#[from] CatalogError),
    #[error("Processor failed due to TableWrite error: {0}")]
    TableError(#[from] TableWriteError),
}
