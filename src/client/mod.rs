pub mod types;

use crate::Config;
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::BTreeMap;
use std::time::Duration;
use thiserror::Error;
use types::*;

pub const DEFAULT_BASE_URL: &str = "https://grammarpro.onrender.com";

const API_PREFIX: &str = "/api/grammar";

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Request to {endpoint} failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Service returned HTTP {status} for {endpoint}")]
    Status { endpoint: String, status: u16 },

    #[error("Malformed response from {endpoint}: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Invalid client configuration: {0}")]
    Build(#[source] reqwest::Error),
}

/// Operations offered by the remote analysis service.
pub trait GrammarService {
    fn check(&self, text: &str) -> Result<CheckResponse, ClientError>;

    fn auto_fix(&self, text: &str) -> Result<AutoFixResponse, ClientError>;

    fn pdf_report(
        &self,
        text: &str,
        insights: Option<&DocumentInsights>,
        suggestions: &BTreeMap<String, Vec<String>>,
    ) -> Result<Vec<u8>, ClientError>;

    fn paraphrase(&self, text: &str, style: ParaphraseStyle)
        -> Result<ParaphraseResponse, ClientError>;

    fn citations(&self, text: &str, style: CitationStyle)
        -> Result<CitationsResponse, ClientError>;

    fn detect_ai(&self, text: &str) -> Result<AiDetectionResponse, ClientError>;

    fn essay_help(&self, text: &str, kind: EssayHelpType)
        -> Result<EssayHelpResponse, ClientError>;

    fn ai_rewrite(&self, text: &str, style: RewriteStyle) -> Result<RewriteResponse, ClientError>;

    fn adjust_tone(&self, text: &str, tone: Tone) -> Result<ToneAdjustResponse, ClientError>;

    fn generate_email(&self, prompt: &str, kind: EmailType)
        -> Result<EmailResponse, ClientError>;
}

/// Blocking HTTP client for the analysis service.
pub struct GrammarClient {
    http: Client,
    base_url: String,
}

impl GrammarClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("gramchk/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ClientError::Build)?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, ClientError> {
        Self::new(&config.server, Duration::from_secs(config.timeout_secs))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}{}/{}", self.base_url, API_PREFIX, endpoint)
    }

    fn send<B: Serialize>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<reqwest::blocking::Response, ClientError> {
        let url = self.endpoint_url(endpoint);
        log::debug!("POST {}", url);

        let response = self
            .http
            .post(&url)
            .json(body)
            .send()
            .map_err(|source| ClientError::Transport {
                endpoint: endpoint.to_string(),
                source,
            })?;

        let status = response.status();
        log::debug!("{} -> HTTP {}", endpoint, status);
        if !status.is_success() {
            return Err(ClientError::Status {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response)
    }

    fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        self.send(endpoint, body)?
            .json()
            .map_err(|source| ClientError::Decode {
                endpoint: endpoint.to_string(),
                source,
            })
    }
}

impl GrammarService for GrammarClient {
    fn check(&self, text: &str) -> Result<CheckResponse, ClientError> {
        self.post_json("check", &TextRequest { text })
    }

    fn auto_fix(&self, text: &str) -> Result<AutoFixResponse, ClientError> {
        self.post_json("auto_fix", &TextRequest { text })
    }

    fn pdf_report(
        &self,
        text: &str,
        insights: Option<&DocumentInsights>,
        suggestions: &BTreeMap<String, Vec<String>>,
    ) -> Result<Vec<u8>, ClientError> {
        let body = ReportRequest {
            text,
            insights,
            suggestions,
        };
        let bytes = self
            .send("pdf_report", &body)?
            .bytes()
            .map_err(|source| ClientError::Decode {
                endpoint: "pdf_report".to_string(),
                source,
            })?;
        Ok(bytes.to_vec())
    }

    fn paraphrase(
        &self,
        text: &str,
        style: ParaphraseStyle,
    ) -> Result<ParaphraseResponse, ClientError> {
        self.post_json("paraphrase", &StyledRequest { text, style })
    }

    fn citations(
        &self,
        text: &str,
        style: CitationStyle,
    ) -> Result<CitationsResponse, ClientError> {
        self.post_json("citations", &StyledRequest { text, style })
    }

    fn detect_ai(&self, text: &str) -> Result<AiDetectionResponse, ClientError> {
        self.post_json("ai_detector", &TextRequest { text })
    }

    fn essay_help(
        &self,
        text: &str,
        kind: EssayHelpType,
    ) -> Result<EssayHelpResponse, ClientError> {
        self.post_json("essay_helper", &EssayRequest { text, kind })
    }

    fn ai_rewrite(&self, text: &str, style: RewriteStyle) -> Result<RewriteResponse, ClientError> {
        self.post_json("ai_rewrite", &StyledRequest { text, style })
    }

    fn adjust_tone(&self, text: &str, tone: Tone) -> Result<ToneAdjustResponse, ClientError> {
        self.post_json("tone_adjust", &ToneRequest { text, tone })
    }

    fn generate_email(&self, prompt: &str, kind: EmailType) -> Result<EmailResponse, ClientError> {
        self.post_json("email_generate", &EmailRequest { prompt, kind })
    }
}
