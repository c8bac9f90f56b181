use serde::Deserialize;
use serde::de::IgnoredAny;

use crate::Label;

/// Kind of a feed record.
///
/// The set is closed: any type string the feed sends that isn't one of the
/// recognized ones becomes [`EventKind::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Label)]
pub enum EventKind {
    Push,
    Watch,
    Issues,
    Fork,
    Other,
}

impl EventKind {
    /// Map a feed `type` string onto a kind. Matching is exact.
    pub fn from_type(type_name: &str) -> Self {
        match type_name {
            "PushEvent" => EventKind::Push,
            "WatchEvent" => EventKind::Watch,
            "IssuesEvent" => EventKind::Issues,
            "ForkEvent" => EventKind::Fork,
            _ => EventKind::Other,
        }
    }
}

impl From<&str> for EventKind {
    fn from(type_name: &str) -> Self {
        EventKind::from_type(type_name)
    }
}

/// A single decoded activity record.
///
/// `commit_count` is only meaningful for [`EventKind::Push`] and `action`
/// only for [`EventKind::Issues`]; for other kinds they are carried but ignored.
///
/// Events are decoded straight from the feed JSON:
///
/// ```rust
/// use gh_activity::{Event, EventKind};
///
/// let json = r#"{"type":"WatchEvent","repo":{"name":"foo/bar"},"payload":{"action":"started"}}"#;
/// let event: Event = serde_json::from_str(json).unwrap();
/// assert_eq!(event.kind(), EventKind::Watch);
/// assert_eq!(event.repo_name(), "foo/bar");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawEvent")]
pub struct Event {
    kind: EventKind,
    repo_name: String,
    commit_count: usize,
    action: String,
}

impl Event {
    pub fn new<N>(kind: EventKind, repo_name: N) -> Self
    where
        N: Into<String>,
    {
        Self {
            kind,
            repo_name: repo_name.into(),
            commit_count: 0,
            action: String::new(),
        }
    }

    pub fn push<N: Into<String>>(repo_name: N, commit_count: usize) -> Self {
        Event::new(EventKind::Push, repo_name).with_commit_count(commit_count)
    }

    pub fn watch<N: Into<String>>(repo_name: N) -> Self {
        Event::new(EventKind::Watch, repo_name)
    }

    pub fn fork<N: Into<String>>(repo_name: N) -> Self {
        Event::new(EventKind::Fork, repo_name)
    }

    pub fn issues<N: Into<String>, A: Into<String>>(repo_name: N, action: A) -> Self {
        Event::new(EventKind::Issues, repo_name).with_action(action)
    }

    pub fn other<N: Into<String>>(repo_name: N) -> Self {
        Event::new(EventKind::Other, repo_name)
    }

    pub fn with_commit_count(mut self, commit_count: usize) -> Self {
        self.commit_count = commit_count;
        self
    }

    pub fn with_action<A: Into<String>>(mut self, action: A) -> Self {
        self.action = action.into();
        self
    }

    #[inline]
    pub fn kind(&self) -> EventKind {
        self.kind
    }

    #[inline]
    pub fn repo_name(&self) -> &str {
        &self.repo_name
    }

    #[inline]
    pub fn commit_count(&self) -> usize {
        self.commit_count
    }

    #[inline]
    pub fn action(&self) -> &str {
        &self.action
    }
}

#[derive(Deserialize)]
struct RawEvent {
    #[serde(rename = "type")]
    type_name: String,
    repo: RawRepo,
    #[serde(default)]
    payload: Option<RawPayload>,
}

#[derive(Deserialize)]
struct RawRepo {
    name: String,
}

#[derive(Default, Deserialize)]
struct RawPayload {
    #[serde(default)]
    action: Option<String>,
    #[serde(default)]
    commits: Option<Vec<IgnoredAny>>,
}

impl From<RawEvent> for Event {
    fn from(raw: RawEvent) -> Self {
        let payload = raw.payload.unwrap_or_default();
        Event {
            kind: EventKind::from_type(&raw.type_name),
            repo_name: raw.repo.name,
            commit_count: payload.commits.map_or(0, |commits| commits.len()),
            action: payload.action.unwrap_or_default(),
        }
    }
}
