//! ScoreApp webhook decoding.
//!
//! A webhook body looks like `{"event_name": "...", "data": {...}}` where `data`
//! is vendor-defined. Only the fields needed for the upsert are interpreted;
//! the whole body is kept as `raw_payload`.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde_json::{Map, Value};

use crate::constants::FACEBOOK_ID_QUESTION;
use crate::error::PayloadError;
use crate::json_utils::{field_text, json_scalar_text};
use crate::user_response::QuizResult;

/// Webhook event types that lead to a storage write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    QuizFinished,
    LeadSignedUp,
}

impl EventKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::QuizFinished => "QUIZ_FINISHED",
            Self::LeadSignedUp => "LEAD_SIGNED_UP",
        }
    }
}

impl std::str::FromStr for EventKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "QUIZ_FINISHED" => Ok(Self::QuizFinished),
            "LEAD_SIGNED_UP" => Ok(Self::LeadSignedUp),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A decoded webhook delivery.
#[derive(Debug, Clone, PartialEq)]
pub enum WebhookEvent {
    /// Event type we do not act on. Acknowledged without touching storage.
    Ignored { event_name: Option<String> },
    /// Event that must be merged into `user_responses`.
    Tracked { kind: EventKind, result: QuizResult },
}

impl WebhookEvent {
    /// Decode a webhook body.
    ///
    /// Unknown event names short-circuit before any other field is inspected.
    pub fn from_payload(body: Map<String, Value>) -> Result<Self, PayloadError> {
        let event_name = body.get("event_name").and_then(json_scalar_text);
        let Some(kind) = event_name.as_deref().and_then(|n| n.parse::<EventKind>().ok()) else {
            return Ok(Self::Ignored { event_name });
        };

        let empty = Map::new();
        let data = body.get("data").and_then(Value::as_object).unwrap_or(&empty);

        let facebook_id = extract_facebook_id(data).ok_or(PayloadError::MissingFacebookId)?;

        let (result_url, finished_at) = match kind {
            EventKind::QuizFinished => {
                let finished_at = match data.get("finished_at") {
                    None | Some(Value::Null) => None,
                    Some(Value::String(raw)) => Some(parse_finished_at(raw)?),
                    Some(other) => return Err(PayloadError::InvalidTimestamp(other.to_string())),
                };
                (field_text(data, "result_url"), finished_at)
            },
            EventKind::LeadSignedUp => (None, None),
        };
        let quiz_id = field_text(data, "id");

        Ok(Self::Tracked {
            kind,
            result: QuizResult {
                facebook_id,
                raw_payload: Value::Object(body),
                quiz_id,
                result_url,
                finished_at,
            },
        })
    }
}

/// Find the Facebook ID among `data.lead_form_questions`.
///
/// The first question whose text lowercases to `"facebook id"` and has at least
/// one answer decides the result; matching questions without answers are skipped.
/// Empty answers count as missing.
#[must_use]
pub fn extract_facebook_id(data: &Map<String, Value>) -> Option<String> {
    let questions = data.get("lead_form_questions").and_then(Value::as_array)?;
    for question in questions {
        let text = question.get("question").and_then(Value::as_str).unwrap_or_default();
        if text.to_lowercase() != FACEBOOK_ID_QUESTION {
            continue;
        }
        let Some(first) = question.get("answers").and_then(Value::as_array).and_then(|a| a.first())
        else {
            continue;
        };
        return first
            .get("answer")
            .and_then(json_scalar_text)
            .filter(|answer| !answer.is_empty());
    }
    None
}

/// Parse ScoreApp's `finished_at` the way a PostgreSQL `TIMESTAMP` column reads it.
///
/// Accepts a date with optional time (`T` or space separator, minute or second
/// precision, optional fraction). A trailing zone (`Z`, `+HH`, `+HHMM`,
/// `+HH:MM`) is discarded and the wall-clock time kept as written.
pub fn parse_finished_at(raw: &str) -> Result<NaiveDateTime, PayloadError> {
    let trimmed = raw.trim();
    let local = strip_zone(trimmed);
    if let Ok(date) = NaiveDate::parse_from_str(local, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN));
    }
    [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M",
    ]
    .iter()
    .find_map(|fmt| NaiveDateTime::parse_from_str(local, fmt).ok())
    .ok_or_else(|| PayloadError::InvalidTimestamp(trimmed.to_owned()))
}

/// Drop a trailing UTC designator or numeric offset from the time part.
fn strip_zone(raw: &str) -> &str {
    let Some(time) = raw.get(DATE_LEN..) else {
        return raw;
    };
    if let Some(rest) = time.strip_suffix(['Z', 'z']) {
        return &raw[..DATE_LEN + rest.len()];
    }
    match time.rfind(['+', '-']) {
        Some(pos)
            if time[pos + 1..].len() >= 2
                && time[pos + 1..].bytes().all(|b| b.is_ascii_digit() || b == b':') =>
        {
            raw[..DATE_LEN + pos].trim_end()
        },
        _ => raw,
    }
}

const DATE_LEN: usize = "YYYY-MM-DD".len();
