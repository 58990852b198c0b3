use std::path::PathBuf;

use super::errors::ScoutError;

/// Where the catalog and offers files live: an HTTP base URL or a
/// local directory. Resource names are fixed either way.
#[derive(Debug, Clone)]
pub enum DataSource {
    Remote { base: String },
    Local { dir: PathBuf },
}

impl DataSource {
    pub fn from_setting(value: &str) -> Self {
        let value = value.trim();
        if value.starts_with("http://") || value.starts_with("https://") {
            DataSource::Remote { base: value.trim_end_matches('/').to_string() }
        } else {
            DataSource::Local { dir: PathBuf::from(value) }
        }
    }

    pub async fn fetch(&self, resource: &str) -> Result<Vec<u8>, ScoutError> {
        match self {
            DataSource::Remote { base } => {
                let url = format!("{}/{}", base, resource);
                let response = reqwest::Client::new().get(&url).send().await?;

                if !response.status().is_success() {
                    return Err(ScoutError::Custom(format!(
                        "HTTP error {} from {}",
                        response.status(),
                        url
                    )));
                }

                Ok(response.bytes().await?.to_vec())
            }
            DataSource::Local { dir } => Ok(tokio::fs::read(dir.join(resource)).await?),
        }
    }
}
