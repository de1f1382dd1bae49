use crate::error::Error;
use crate::Result;
use base64::engine::general_purpose;
use base64::Engine as _;
use hmac::{Hmac, Mac};
use rand::distributions::Alphanumeric;
use rand::Rng;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use sha1::Sha1;
use std::env;
use std::time::{SystemTime, UNIX_EPOCH};
use url::{Position, Url};

type HmacSha1 = Hmac<Sha1>;

const NONCE_LEN: usize = 32;
const SIGNATURE_METHOD: &str = "HMAC-SHA1";
const OAUTH_VERSION: &str = "1.0";

/// OAuth 1.0a user-context credentials of the posting account.
#[derive(Clone, Debug)]
pub struct Credentials {
    pub consumer_key: String,
    pub consumer_secret: String,
    pub access_token: String,
    pub access_token_secret: String,
}

impl Credentials {
    /// Reads the four credential values from the environment.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            consumer_key: env_var("TWITTER_CONSUMER_KEY")?,
            consumer_secret: env_var("TWITTER_CONSUMER_SECRET")?,
            access_token: env_var("TWITTER_ACCESS_TOKEN")?,
            access_token_secret: env_var("TWITTER_ACCESS_TOKEN_SECRET")?,
        })
    }
}

fn env_var(name: &str) -> Result<String> {
    env::var(name).map_err(|_| Error::Config(format!("{name} not found in environment")))
}

pub struct Signer {
    credentials: Credentials,
}

impl Signer {
    pub fn new(credentials: Credentials) -> Self {
        Self { credentials }
    }

    /// Builds the `Authorization` header for a request.
    ///
    /// The signature covers the oauth parameters and the URL's query
    /// parameters; a JSON body is not part of the base string.
    pub fn generate_headers(&self, method: &str, url: &Url) -> Result<HeaderMap> {
        let nonce: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(NONCE_LEN)
            .map(char::from)
            .collect();
        let timestamp = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs();

        self.headers_with(method, url, &nonce, timestamp)
    }

    fn headers_with(
        &self,
        method: &str,
        url: &Url,
        nonce: &str,
        timestamp: u64,
    ) -> Result<HeaderMap> {
        let timestamp = timestamp.to_string();
        let oauth_params = [
            ("oauth_consumer_key", self.credentials.consumer_key.as_str()),
            ("oauth_nonce", nonce),
            ("oauth_signature_method", SIGNATURE_METHOD),
            ("oauth_timestamp", timestamp.as_str()),
            ("oauth_token", self.credentials.access_token.as_str()),
            ("oauth_version", OAUTH_VERSION),
        ]
        .map(|(key, value)| (key.to_owned(), value.to_owned()));

        let signature = self.sign(method, url, &oauth_params);

        let authorization = oauth_params
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
            .chain([("oauth_signature", signature.as_str())])
            .map(|(key, value)| format!(r#"{}="{}""#, percent_encode(key), percent_encode(value)))
            .collect::<Vec<_>>()
            .join(", ");

        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("OAuth {authorization}"))?,
        );

        Ok(headers)
    }

    fn sign(&self, method: &str, url: &Url, oauth_params: &[(String, String)]) -> String {
        // Step 1: percent-encode every parameter and sort the encoded
        // pairs by byte order.
        let mut params: Vec<(String, String)> = url
            .query_pairs()
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .chain(oauth_params.iter().cloned())
            .map(|(key, value)| (percent_encode(&key), percent_encode(&value)))
            .collect();
        params.sort();

        let parameter_string = params
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>()
            .join("&");

        // Step 2: build the signature base string from the method, the
        // base URL (no query, no fragment) and the parameter string.
        let base_string = format!(
            "{}&{}&{}",
            method.to_uppercase(),
            percent_encode(&url[..Position::AfterPath]),
            percent_encode(&parameter_string),
        );

        // Step 3: HMAC-SHA1 under the combined secrets, base64-encoded.
        let signing_key = format!(
            "{}&{}",
            percent_encode(&self.credentials.consumer_secret),
            percent_encode(&self.credentials.access_token_secret),
        );

        let mut mac =
            HmacSha1::new_from_slice(signing_key.as_bytes()).expect("HMAC can take key of any size");
        mac.update(base_string.as_bytes());

        general_purpose::STANDARD.encode(mac.finalize().into_bytes())
    }
}

/// RFC 3986 percent-encoding, the only flavor OAuth 1.0a accepts.
fn percent_encode(input: &str) -> String {
    urlencoding::encode(input).into_owned()
}
