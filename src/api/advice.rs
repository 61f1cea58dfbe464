use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::prelude::*;

const ENDPOINT: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent";

/// Gemini text-generation client.
pub struct Api {
    client: Client,
    api_key: String,
}

impl Api {
    pub fn new(api_key: String) -> Result<Self> {
        let client =
            Client::builder().user_agent("packrat").timeout(Duration::from_secs(10)).build()?;
        Ok(Self { client, api_key })
    }

    #[instrument(skip_all)]
    pub async fn generate(&self, prompt: &str) -> Result<String> {
        #[derive(Serialize)]
        struct Request<'a> {
            contents: [Content<'a>; 1],
        }

        #[derive(Serialize)]
        struct Content<'a> {
            parts: [Part<'a>; 1],
        }

        #[derive(Serialize)]
        struct Part<'a> {
            text: &'a str,
        }

        info!("asking for advice…");
        let request = Request { contents: [Content { parts: [Part { text: prompt }] }] };
        self.client
            .post(ENDPOINT)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json::<Response>()
            .await
            .context("failed to deserialize the advice response")?
            .into_text()
            .context("the advice response contains no text")
    }
}

#[derive(Deserialize)]
struct Response {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

impl Response {
    fn into_text(self) -> Option<String> {
        let candidate = self.candidates.into_iter().next()?;
        let text: String = candidate.content.parts.into_iter().map(|part| part.text).collect();
        (!text.is_empty()).then_some(text)
    }
}

#[derive(Deserialize)]
struct Candidate {
    content: Content,
}

#[derive(Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Deserialize)]
struct Part {
    text: String,
}
