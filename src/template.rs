// src/template.rs
use reqwest::{blocking::Client, header::USER_AGENT};

use crate::{
    error::{Error, Result},
    ui,
};

pub const DEFAULT_API_URL: &str = "https://www.toptal.com/developers/gitignore/api";
const CLIENT_USER_AGENT: &str = "Mozilla/5.0 (compatible; GitignoreGenerator/1.0)";

/// Something that can turn template names into the raw template text.
pub trait TemplateSource {
    fn download(&self, names: &[String]) -> Result<String>;
}

pub struct HttpTemplateSource {
    client: Client,
    api_url: String,
}

impl HttpTemplateSource {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_url: api_url.into(),
        }
    }

    pub fn url_for(&self, names: &[String]) -> String {
        format!("{}/{}", self.api_url.trim_end_matches('/'), names.join(","))
    }
}

impl TemplateSource for HttpTemplateSource {
    fn download(&self, names: &[String]) -> Result<String> {
        let url = self.url_for(names);
        log::info!("fetching templates from {url}");

        let response = self
            .client
            .get(&url)
            .header(USER_AGENT, CLIENT_USER_AGENT)
            .send()
            .map_err(|e| Error::Fetch(format!("request failed: {e}")))?;
        if !response.status().is_success() {
            return Err(Error::Fetch(format!(
                "upstream returned status {}",
                response.status()
            )));
        }
        response
            .text()
            .map_err(|e| Error::Fetch(format!("failed to read body: {e}")))
    }
}

/// Splits template text into lines, dropping trailing whitespace on each.
pub fn template_lines(body: &str) -> Vec<String> {
    body.trim()
        .lines()
        .map(|line| line.trim_end().to_string())
        .collect()
}

/// Fetches the named templates. Any failure is reported and yields no lines,
/// so generation carries on with the defaults.
pub fn fetch_template(source: &dyn TemplateSource, names: &[String]) -> Vec<String> {
    if names.is_empty() {
        return Vec::new();
    }

    match source.download(names) {
        Ok(body) => {
            let lines = template_lines(&body);
            log::debug!("template {} gave {} lines", names.join(","), lines.len());
            lines
        }
        Err(e) => {
            log::debug!("template fetch for {} failed", names.join(","));
            ui::error(&e.to_string());
            Vec::new()
        }
    }
}
