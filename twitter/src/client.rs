use crate::schema::{ErrorResponse, Tweet, TweetResponse};
use crate::sign::{Credentials, Signer};
use crate::{Error, Result};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use url::Url;

const BASE_URL: &str = "https://api.twitter.com";

pub struct Client {
    client: reqwest::Client,
    signer: Signer,
}

impl Client {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            client: reqwest::Client::new(),
            signer: Signer::new(credentials),
        }
    }

    /// Creates a new tweet with the given text and returns it.
    pub async fn create_tweet(&self, text: &str) -> Result<Tweet> {
        let response: TweetResponse = self.post("/2/tweets", json!({ "text": text })).await?;
        Ok(response.data)
    }

    async fn post<T: DeserializeOwned>(&self, path: &str, body: Value) -> Result<T> {
        let url = Url::parse(&format!("{BASE_URL}{path}"))?;
        let headers = self.signer.generate_headers(Method::POST.as_str(), &url)?;

        let response = self
            .client
            .post(url)
            .headers(headers)
            .json(&body)
            .send()
            .await?;
        let status = response.status();

        if status.is_success() {
            Ok(response.json().await?)
        } else {
            let text = response.text().await?;
            Err(Error::Api {
                status,
                detail: ErrorResponse::detail_from(&text),
            })
        }
    }
}
