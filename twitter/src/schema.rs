use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub(crate) struct TweetResponse {
    pub data: Tweet,
}

/// The created tweet, as returned by `POST /2/tweets`.
#[derive(Deserialize, Debug)]
pub struct Tweet {
    pub id: String,
    pub text: String,
}

/// Error payload of the API: `{"errors": [{"detail": ...}]}` on request
/// errors, a top-level `detail` on some auth and rate-limit responses.
#[derive(Deserialize, Debug, Default)]
pub(crate) struct ErrorResponse {
    #[serde(default)]
    errors: Vec<ApiError>,
    detail: Option<String>,
}

#[derive(Deserialize, Debug)]
struct ApiError {
    detail: Option<String>,
}

impl ErrorResponse {
    /// Pulls the human-readable detail out of an error body, falling
    /// back to the raw text when the body isn't structured.
    pub fn detail_from(body: &str) -> String {
        serde_json::from_str::<ErrorResponse>(body)
            .ok()
            .and_then(|response| {
                response
                    .errors
                    .into_iter()
                    .find_map(|error| error.detail)
                    .or(response.detail)
            })
            .unwrap_or_else(|| body.to_owned())
    }
}
