use crate::config::Config;
use crate::error::MenuSheetError;
use crate::error::ResultMessage;
use std::fs;
use std::path::Path;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;
use tracing::info;
use tracing::warn;
use url::Url;

/// Fallback file used when the configuration names none.
pub const DEFAULT_FALLBACK: &str = "config/fallback_data.csv";

const FETCH_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("No data from remote source: '{0}'")]
    RemoteNoDataError(String),

    #[error("Remote source '{0}' answered with HTTP {1}")]
    RemoteStatusError(String, u16),

    #[error("Invalid file URL: '{0}'")]
    FileUrlError(String),
}

/// Text of the menu sheet and where it came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceText {
    pub text: String,
    /// True when the remote source failed and the local copy was read instead
    pub used_fallback: bool,
}

/// Where to read the published menu sheet from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuSource {
    /// Remote URL or local path of the primary source
    pub url: Option<String>,
    /// Local copy read when the primary source is absent or fails
    pub fallback: PathBuf,
}

impl MenuSource {
    /// Source named by the `urls` section of the configuration.
    pub fn from_config(config: &Config) -> Self {
        MenuSource {
            url: config.urls.menu.to_owned(),
            fallback: config
                .urls
                .fallback
                .to_owned()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_FALLBACK)),
        }
    }

    /// Reads the sheet text, falling back to the local copy when the primary source fails.
    pub fn read(&self) -> Result<SourceText, MenuSheetError> {
        if let Some(location) = &self.url {
            match read_location(location) {
                Ok(bytes) => {
                    info!(source = %location, bytes = bytes.len(), "menu source read");
                    return Ok(SourceText {
                        text: decode(&bytes),
                        used_fallback: false,
                    });
                }
                Err(e) => warn!(source = %location, error = %e, "menu source failed, using fallback"),
            }
        }
        let bytes = read_file(&self.fallback)?;
        info!(fallback = %self.fallback.display(), bytes = bytes.len(), "fallback source read");
        Ok(SourceText {
            text: decode(&bytes),
            used_fallback: self.url.is_some(),
        })
    }
}

/// Checks if a location is fetched over HTTP rather than read from disk.
pub fn is_remote_url(location: &str) -> bool {
    Url::parse(location)
        .map(|url| matches!(url.scheme(), "http" | "https"))
        .unwrap_or(false)
}

/// Decodes UTF-8 bytes, dropping a byte order mark. Invalid sequences become U+FFFD.
pub fn decode(bytes: &[u8]) -> String {
    let (text, _) = encoding_rs::UTF_8.decode_with_bom_removal(bytes);
    text.into_owned()
}

fn read_location(location: &str) -> Result<Vec<u8>, MenuSheetError> {
    if is_remote_url(location) {
        return fetch(location);
    }
    match Url::parse(location) {
        Ok(url) if url.scheme() == "file" => {
            let path = url
                .to_file_path()
                .map_err(|_| SourceError::FileUrlError(location.to_owned()))?;
            read_file(&path)
        }
        _ => read_file(Path::new(location)),
    }
}

fn read_file(path: &Path) -> Result<Vec<u8>, MenuSheetError> {
    let bytes = fs::read(path).map_err(MenuSheetError::from);
    bytes.with_prefix(&path.display().to_string())
}

fn fetch(url: &str) -> Result<Vec<u8>, MenuSheetError> {
    let client = reqwest::blocking::Client::builder().timeout(FETCH_TIMEOUT).build()?;
    let response = client.get(url).send()?;
    let status = response.status();
    if !status.is_success() {
        Err(SourceError::RemoteStatusError(url.to_owned(), status.as_u16()))?;
    }
    let bytes = response.bytes()?;
    if bytes.is_empty() {
        Err(SourceError::RemoteNoDataError(url.to_owned()))?;
    }
    Ok(bytes.to_vec())
}
