use thiserror::Error;

/// Failures that can reach the core. Asset loading is the only source.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AssetError {
    #[error("image `{url}` failed to load")]
    LoadFailed { url: String },
}
