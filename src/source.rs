use std::future::Future;

use reqwest::{StatusCode, Url, header::ACCEPT};
use tracing::{debug, warn};

use crate::{Error, Event, Result};

pub const DEFAULT_API_URL: &str = "https://api.github.com";

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Produces the batch of events to format for a user.
///
/// Implementations report the outcome distinctly: the decoded events, or
/// one of [`Error::NotFound`], [`Error::Network`], [`Error::UnexpectedStatus`]
/// and [`Error::Decode`]. Any error stops the invocation before dispatch.
///
/// As with other traits in this crate, implement `fetch` as a plain `async fn`.
pub trait EventSource {
    fn fetch(&self, user: &str) -> impl Future<Output = Result<Vec<Event>>> + Send;
}

/// Reads the public events feed of the GitHub REST API.
#[derive(Debug, Clone)]
pub struct GitHubSource {
    client: reqwest::Client,
    api_url: Url,
    token: Option<String>,
}

impl GitHubSource {
    /// Create a source for the API rooted at `api_url`
    /// (e.g. [`DEFAULT_API_URL`] or a GitHub Enterprise endpoint).
    pub fn new(api_url: &str) -> Result<Self> {
        let api_url = Url::parse(api_url)
            .map_err(|e| Error::InvalidConfig(format!("bad API url '{api_url}': {e}")))?;
        if api_url.cannot_be_a_base() {
            return Err(Error::InvalidConfig(format!(
                "API url '{api_url}' can't have a path"
            )));
        }
        let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            client,
            api_url,
            token: None,
        })
    }

    /// Authenticate requests with a personal access token.
    pub fn with_token<S: Into<String>>(mut self, token: S) -> Self {
        self.token = Some(token.into());
        self
    }

    /// `{api_url}/users/{user}/events`, with `user` percent-encoded.
    pub fn events_url(&self, user: &str) -> Url {
        let mut url = self.api_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(["users", user, "events"]);
        }
        url
    }
}

impl EventSource for GitHubSource {
    async fn fetch(&self, user: &str) -> Result<Vec<Event>> {
        let url = self.events_url(user);
        debug!(url = %url, "Fetching activity feed");

        let mut request = self
            .client
            .get(url)
            .header(ACCEPT, "application/vnd.github+json");
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        check_status(response.status(), user)?;

        let body = response.bytes().await?;
        let events = decode_events(&body)?;
        debug!(count = events.len(), bytes = body.len(), "Decoded activity feed");
        Ok(events)
    }
}

/// Map a response status onto the feed outcome: only `200 OK` carries events.
pub fn check_status(status: StatusCode, user: &str) -> Result<()> {
    if status == StatusCode::NOT_FOUND {
        return Err(Error::NotFound(user.to_string()));
    }
    if status != StatusCode::OK {
        warn!(status = %status, user, "Activity feed returned unexpected status");
        return Err(Error::UnexpectedStatus(status));
    }
    Ok(())
}

/// Decode a feed response body: a JSON array of event records.
pub fn decode_events(body: &[u8]) -> Result<Vec<Event>> {
    Ok(serde_json::from_slice(body)?)
}

/// Serves a fixed batch, regardless of the user asked for.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    events: Vec<Event>,
}

impl StaticSource {
    pub fn new(events: Vec<Event>) -> Self {
        Self { events }
    }
}

impl EventSource for StaticSource {
    async fn fetch(&self, _user: &str) -> Result<Vec<Event>> {
        Ok(self.events.clone())
    }
}
