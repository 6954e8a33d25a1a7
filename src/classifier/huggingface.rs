use std::time::Duration;

use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{CANDIDATE_LABELS, Classifier, UNCATEGORIZED};

/// HuggingFace router endpoint for zero-shot classification.
const API_URL: &str =
    "https://router.huggingface.co/hf-inference/models/facebook/bart-large-mnli";

/// Hard cap on a single classification call. Exceeding it is a failure;
/// nothing here retries.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

/// Zero-shot classifier backed by the HuggingFace inference router.
///
/// Holds a pooled HTTP client — construct once per process and reuse
/// across invocations.
pub struct HuggingFaceClassifier {
    client: reqwest::Client,
    api_key: String,
}

impl HuggingFaceClassifier {
    pub fn new(api_key: String) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self { client, api_key })
    }

    /// Pick the category out of a raw response body.
    ///
    /// The router has served two shapes for this model over time, so both
    /// are tried in order before giving up; anything else (including an
    /// empty ranking) lands on [`UNCATEGORIZED`].
    fn category_from(body: &str) -> String {
        let top = serde_json::from_str::<ZeroShotResponse>(body)
            .ok()
            .and_then(|response| response.top_label().map(str::to_string));
        top.unwrap_or_else(|| UNCATEGORIZED.to_string())
    }
}

#[async_trait]
impl Classifier for HuggingFaceClassifier {
    async fn classify(&self, description: &str) -> Result<String> {
        let request = ApiRequest {
            inputs: description,
            parameters: Parameters {
                candidate_labels: &CANDIDATE_LABELS,
            },
        };

        let resp = self
            .client
            .post(API_URL)
            .header("authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await
            .context("classification request failed")?;

        let status = resp.status();
        if !status.is_success() {
            // The upstream error body is the most useful message we have.
            let body = resp.text().await.unwrap_or_default();
            if body.trim().is_empty() {
                bail!("HuggingFace API error ({status})");
            }
            bail!("{}", body.trim());
        }

        let body = resp
            .text()
            .await
            .context("failed to read classification response")?;

        Ok(Self::category_from(&body))
    }
}

// --- API types ---

#[derive(Serialize)]
struct ApiRequest<'a> {
    inputs: &'a str,
    parameters: Parameters<'a>,
}

#[derive(Serialize)]
struct Parameters<'a> {
    candidate_labels: &'a [&'a str],
}

/// Either a single ranked result or a batch of per-input results.
/// Variants are tried top to bottom.
#[derive(Deserialize)]
#[serde(untagged)]
enum ZeroShotResponse {
    Ranked(Ranking),
    Batch(Vec<Ranking>),
}

#[derive(Deserialize)]
struct Ranking {
    /// Labels ordered best-first.
    #[serde(default)]
    labels: Vec<String>,
}

impl ZeroShotResponse {
    fn top_label(&self) -> Option<&str> {
        match self {
            Self::Ranked(ranking) => ranking.labels.first(),
            Self::Batch(batch) => batch.first().and_then(|ranking| ranking.labels.first()),
        }
        .map(String::as_str)
    }
}
