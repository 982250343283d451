//! Loading the content document.
//!
//! The document location comes from the `json_url` setting. `http://` and
//! `https://` locations are fetched with cache-bypass headers; anything else is
//! a filesystem path, relative to the template's directory.

use reqwest::Client;
use reqwest::header::{CACHE_CONTROL, HeaderMap, HeaderValue, PRAGMA};
use serde_json::Value;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while loading the content document.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoadError {
	/// The request could not be sent or its body could not be read.
	#[error("request to {url} failed: {source}")]
	Http {
		url: String,
		#[source]
		source: reqwest::Error,
	},

	/// The server answered with a non-success status.
	#[error("HTTP {status} from {url}")]
	Status {
		url: String,
		status: reqwest::StatusCode,
	},

	/// The file could not be read.
	#[error("failed to read {}: {source}", .path.display())]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	/// The body is not valid JSON.
	#[error("invalid JSON in {location}: {source}")]
	Json {
		location: String,
		#[source]
		source: serde_json::Error,
	},
}

/// Where the content document lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSource {
	Remote(reqwest::Url),
	File(PathBuf),
}

impl DocumentSource {
	/// Interprets a configured location.
	///
	/// `http(s)` URLs stay remote. Other locations are paths; relative ones
	/// are joined onto `base_dir`.
	pub fn parse(location: &str, base_dir: Option<&Path>) -> Self {
		if let Ok(url) = reqwest::Url::parse(location)
			&& matches!(url.scheme(), "http" | "https")
		{
			return Self::Remote(url);
		}
		let path = Path::new(location);
		match base_dir {
			Some(base) if path.is_relative() => Self::File(base.join(path)),
			_ => Self::File(path.to_path_buf()),
		}
	}

	/// Human-readable location, for logs and errors.
	pub fn location(&self) -> String {
		match self {
			Self::Remote(url) => url.to_string(),
			Self::File(path) => path.display().to_string(),
		}
	}
}

impl std::fmt::Display for DocumentSource {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.location())
	}
}

/// Loads content documents over HTTP or from disk.
#[derive(Debug, Clone, Default)]
pub struct DocumentLoader {
	client: Client,
}

impl DocumentLoader {
	pub fn new() -> Self {
		Self::default()
	}

	/// Uses an existing HTTP client.
	pub fn with_client(client: Client) -> Self {
		Self { client }
	}

	/// Loads and parses the document at `source`.
	pub async fn load(&self, source: &DocumentSource) -> Result<Value, LoadError> {
		debug!(source = %source, "loading content document");
		let document = match source {
			DocumentSource::Remote(url) => self.fetch(url).await?,
			DocumentSource::File(path) => read_file(path).await?,
		};
		info!(source = %source, "content document loaded");
		Ok(document)
	}

	async fn fetch(&self, url: &reqwest::Url) -> Result<Value, LoadError> {
		let http_error = |source: reqwest::Error| LoadError::Http {
			url: url.to_string(),
			source,
		};

		let response = self
			.client
			.get(url.clone())
			.headers(no_cache_headers())
			.send()
			.await
			.map_err(http_error)?;

		let status = response.status();
		if !status.is_success() {
			return Err(LoadError::Status {
				url: url.to_string(),
				status,
			});
		}

		let body = response.bytes().await.map_err(http_error)?;
		serde_json::from_slice(&body).map_err(|source| LoadError::Json {
			location: url.to_string(),
			source,
		})
	}
}

/// Headers asking every cache on the way to revalidate.
fn no_cache_headers() -> HeaderMap {
	let mut headers = HeaderMap::new();
	headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-cache"));
	headers.insert(PRAGMA, HeaderValue::from_static("no-cache"));
	headers
}

async fn read_file(path: &Path) -> Result<Value, LoadError> {
	let contents = tokio::fs::read(path).await.map_err(|source| LoadError::Io {
		path: path.to_path_buf(),
		source,
	})?;
	serde_json::from_slice(&contents).map_err(|source| LoadError::Json {
		location: path.display().to_string(),
		source,
	})
}

/// Loads the document at `location` with a default loader.
pub async fn load_document(location: &str, base_dir: Option<&Path>) -> Result<Value, LoadError> {
	DocumentLoader::new()
		.load(&DocumentSource::parse(location, base_dir))
		.await
}
