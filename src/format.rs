use std::fmt;

use crate::{Event, EventKind, Palette, Tone};

/// A run of text inside a [`FormattedLine`], optionally highlighted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    text: String,
    tone: Option<Tone>,
}

impl Span {
    pub fn plain<S: Into<String>>(text: S) -> Self {
        Self {
            text: text.into(),
            tone: None,
        }
    }

    pub fn toned<S: Into<String>>(text: S, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone: Some(tone),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tone(&self) -> Option<Tone> {
        self.tone
    }
}

/// A finished display line.
///
/// `Display` renders the plain text; [`FormattedLine::paint`] applies a
/// [`Palette`] to the highlighted spans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedLine {
    spans: Vec<Span>,
}

impl FormattedLine {
    pub fn new(spans: Vec<Span>) -> Self {
        Self { spans }
    }

    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// Render with ANSI colors for every toned span.
    pub fn paint(&self, palette: &Palette) -> String {
        self.spans
            .iter()
            .map(|span| match span.tone {
                Some(tone) => palette.color(tone).paint(span.text.as_str()).to_string(),
                None => span.text.clone(),
            })
            .collect()
    }
}

impl fmt::Display for FormattedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.spans
            .iter()
            .try_for_each(|span| f.write_str(&span.text))
    }
}

/// Classify an event and format its display line.
///
/// Returns `None` for events that produce no output: pushes without
/// commits, issue events without an action, and every [`EventKind::Other`].
/// The function is pure, so workers call it concurrently without coordination.
///
/// ```rust
/// use gh_activity::{Event, format_event};
///
/// let line = format_event(&Event::issues("foo/bar", "opened")).unwrap();
/// assert_eq!(line.to_string(), "Opened an issue in foo/bar");
/// assert!(format_event(&Event::push("foo/bar", 0)).is_none());
/// ```
pub fn format_event(event: &Event) -> Option<FormattedLine> {
    let repo = event.repo_name();
    let spans = match event.kind() {
        EventKind::Push => {
            if event.commit_count() == 0 {
                return None;
            }
            vec![
                Span::plain("Pushed "),
                Span::toned(format!("{} commits", event.commit_count()), Tone::Count),
                Span::plain(format!(" to {repo}")),
            ]
        }
        EventKind::Watch => vec![
            Span::toned("Starred", Tone::Positive),
            Span::plain(format!(" {repo}")),
        ],
        EventKind::Fork => vec![
            Span::toned("Forked", Tone::Positive),
            Span::plain(format!(" {repo}")),
        ],
        EventKind::Issues => {
            if event.action().is_empty() {
                return None;
            }
            vec![
                Span::toned(capitalize(event.action()), Tone::Issue),
                Span::plain(format!(" an issue in {repo}")),
            ]
        }
        EventKind::Other => return None,
    };
    Some(FormattedLine::new(spans))
}

/// Uppercase the first character, leaving the rest untouched.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(event: Event) -> Option<String> {
        format_event(&event).map(|line| line.to_string())
    }

    #[test]
    fn test_push() {
        assert_eq!(
            text(Event::push("r", 3)).as_deref(),
            Some("Pushed 3 commits to r")
        );
        assert_eq!(
            text(Event::push("foo/bar", 1)).as_deref(),
            Some("Pushed 1 commits to foo/bar")
        );
        assert_eq!(text(Event::push("r", 0)), None);
    }

    #[test]
    fn test_watch_and_fork() {
        assert_eq!(text(Event::watch("foo/bar")).as_deref(), Some("Starred foo/bar"));
        assert_eq!(text(Event::fork("foo/bar")).as_deref(), Some("Forked foo/bar"));
    }

    #[test]
    fn test_issues() {
        assert_eq!(
            text(Event::issues("foo/bar", "opened")).as_deref(),
            Some("Opened an issue in foo/bar")
        );
        assert_eq!(
            text(Event::issues("foo/bar", "reOpened")).as_deref(),
            Some("ReOpened an issue in foo/bar")
        );
        assert_eq!(text(Event::issues("foo/bar", "")), None);
    }

    #[test]
    fn test_payload_of_inactive_kind_is_ignored() {
        let watch = Event::watch("foo/bar")
            .with_commit_count(5)
            .with_action("closed");
        assert_eq!(text(watch).as_deref(), Some("Starred foo/bar"));

        let push = Event::push("foo/bar", 2).with_action("closed");
        assert_eq!(text(push).as_deref(), Some("Pushed 2 commits to foo/bar"));
    }

    #[test]
    fn test_other_never_produces_output() {
        assert_eq!(text(Event::other("foo/bar")), None);
        let loaded = Event::other("foo/bar")
            .with_commit_count(9)
            .with_action("opened");
        assert_eq!(text(loaded), None);
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("opened"), "Opened");
        assert_eq!(capitalize("Closed"), "Closed");
        assert_eq!(capitalize("x"), "X");
        assert_eq!(capitalize("ßig"), "SSig");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_paint_wraps_only_toned_span() {
        let palette = Palette::default();
        let line = format_event(&Event::watch("foo/bar")).unwrap();
        let painted = line.paint(&palette);
        let expected = format!("{} foo/bar", palette.positive.paint("Starred"));
        assert_eq!(painted, expected);
        assert!(!line.to_string().contains('\u{1b}'));
    }

    #[test]
    fn test_spans_carry_tones() {
        let line = format_event(&Event::push("r", 2)).unwrap();
        let toned: Vec<_> = line
            .spans()
            .iter()
            .filter_map(|span| span.tone().map(|tone| (span.text(), tone)))
            .collect();
        assert_eq!(toned, vec![("2 commits", Tone::Count)]);
    }
}
