//! # Fan and auth wire models
//!
//! Bodies for the auth, fan profile and follow services. Field names follow the
//! collaborators' JSON (`access_token` is snake case, follow bodies are camel case).

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

/// Username/password pair for `POST /users/register` and `POST /auth/login`.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

/// Response of `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
}

/// A fan profile; only the id matters to the client.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FanProfile {
    pub id: i64,
}

/// Body of `POST /fan`.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct NewFan {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl NewFan {
    /// Profile for `credentials` with a placeholder `<username>@<domain>` email.
    pub fn placeholder(credentials: &Credentials, email_domain: &str) -> Self {
        Self {
            name: credentials.username.clone(),
            email: format!("{}@{}", credentials.username, email_domain),
            password: credentials.password.clone(),
        }
    }
}

impl std::fmt::Debug for NewFan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewFan")
            .field("name", &self.name)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

/// Body of `POST /fan/follow` and `POST /fan/unfollow`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowRequest {
    pub fan_id: i64,
    pub celebrity_id: i64,
}

/// One entry of `GET /fan/{fanId}/dashboard`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowedCelebrity {
    pub celebrity_id: i64,
    pub celebrity_name: String,
    #[serde(default, deserialize_with = "de_followed_at")]
    pub followed_at: FollowedAt,
}

impl FollowedCelebrity {
    /// Calendar date the follow was recorded, `YYYY-MM-DD`.
    pub fn followed_on(&self) -> String {
        match &self.followed_at {
            FollowedAt::At(at) => at.format("%Y-%m-%d").to_string(),
            FollowedAt::Unparsed(text) => text.clone(),
            FollowedAt::Unknown => "unknown date".to_string(),
        }
    }
}

/// When a follow was recorded.
///
/// The dashboard service is not consistent about timestamp formats, so one odd
/// entry must not fail the whole list. Accepted, in order:
///
/// | Input | Result |
/// |-------|--------|
/// | RFC 3339 (`2025-03-14T09:26:53Z`, `+05:30`, ...) | `At` |
/// | naive `2025-03-14T09:26:53` or `2025-03-14 09:26:53[.fff]` | `At`, read as UTC |
/// | date only `2025-03-14` | `At`, midnight UTC |
/// | epoch milliseconds (number) | `At` |
/// | any other text | `Unparsed`, shown as is |
/// | `null`, missing or any other JSON value | `Unknown` |
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FollowedAt {
    At(DateTime<Utc>),
    Unparsed(String),
    #[default]
    Unknown,
}

impl FollowedAt {
    pub fn parse(text: &str) -> Self {
        let text = text.trim();
        if let Ok(at) = DateTime::parse_from_rfc3339(text) {
            return FollowedAt::At(at.with_timezone(&Utc));
        }
        if let Ok(at) = DateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S%.f%#z") {
            return FollowedAt::At(at.with_timezone(&Utc));
        }
        for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
            if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
                return FollowedAt::At(naive.and_utc());
            }
        }
        let midnight = NaiveDate::parse_from_str(text, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0));
        match midnight {
            Some(naive) => FollowedAt::At(naive.and_utc()),
            None => FollowedAt::Unparsed(text.to_string()),
        }
    }
}

impl fmt::Display for FollowedAt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FollowedAt::At(at) => write!(f, "{}", at.to_rfc3339()),
            FollowedAt::Unparsed(text) => f.write_str(text),
            FollowedAt::Unknown => Ok(()),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTimestamp {
    Millis(i64),
    Text(String),
    Other(IgnoredAny),
}

fn de_followed_at<'de, D: Deserializer<'de>>(deserializer: D) -> Result<FollowedAt, D::Error> {
    Ok(match Option::<RawTimestamp>::deserialize(deserializer)? {
        Some(RawTimestamp::Text(text)) => FollowedAt::parse(&text),
        Some(RawTimestamp::Millis(ms)) => DateTime::from_timestamp_millis(ms)
            .map(FollowedAt::At)
            .unwrap_or_else(|| FollowedAt::Unparsed(ms.to_string())),
        Some(RawTimestamp::Other(_)) | None => FollowedAt::Unknown,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_follow_request_is_camel_case() {
        let json = serde_json::to_value(FollowRequest {
            fan_id: 4,
            celebrity_id: 9,
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({ "fanId": 4, "celebrityId": 9 }));
    }

    #[test]
    fn test_followed_celebrity_decodes() {
        let items: Vec<FollowedCelebrity> = serde_json::from_str(
            r#"[{"celebrityId":3,"celebrityName":"Asha","followedAt":"2025-03-14T09:26:53.000Z"}]"#,
        )
        .unwrap();
        assert_eq!(items[0].celebrity_id, 3);
        assert_eq!(items[0].followed_on(), "2025-03-14");
    }

    #[test]
    fn test_dashboard_tolerates_mixed_timestamps() {
        let items: Vec<FollowedCelebrity> = serde_json::from_str(
            r#"[
                {"celebrityId":1,"celebrityName":"Asha","followedAt":"2025-03-14T09:26:53.000Z"},
                {"celebrityId":2,"celebrityName":"Ravi","followedAt":"2025-03-15 09:26:53"},
                {"celebrityId":3,"celebrityName":"Meera","followedAt":"2025-03-16T23:10:00"},
                {"celebrityId":4,"celebrityName":"Kabir","followedAt":null},
                {"celebrityId":5,"celebrityName":"Zoya","followedAt":"last tuesday"},
                {"celebrityId":6,"celebrityName":"Dev","followedAt":1742030813000},
                {"celebrityId":7,"celebrityName":"Noor"},
                {"celebrityId":8,"celebrityName":"Tara","followedAt":false}
            ]"#,
        )
        .unwrap();

        let dates: Vec<String> = items.iter().map(|f| f.followed_on()).collect();
        assert_eq!(
            dates,
            vec![
                "2025-03-14",
                "2025-03-15",
                "2025-03-16",
                "unknown date",
                "last tuesday",
                "2025-03-15",
                "unknown date",
                "unknown date",
            ]
        );
        assert_eq!(items[4].followed_at, FollowedAt::Unparsed("last tuesday".into()));
        assert_eq!(items[6].followed_at, FollowedAt::Unknown);
    }

    #[test]
    fn test_offset_timestamps_convert_to_utc() {
        assert_eq!(
            FollowedAt::parse("2025-03-14T23:30:00-05:00"),
            FollowedAt::parse("2025-03-15T04:30:00Z")
        );
        assert_eq!(
            FollowedAt::parse("2025-03-15 04:30:00+00"),
            FollowedAt::parse("2025-03-15T04:30:00Z")
        );
        assert_eq!(
            FollowedAt::parse("2025-03-15"),
            FollowedAt::parse("2025-03-15T00:00:00Z")
        );
    }

    #[test]
    fn test_placeholder_fan_email() {
        let creds = Credentials {
            username: "asha".into(),
            password: "pw".into(),
        };
        let fan = NewFan::placeholder(&creds, "fanmail.com");
        assert_eq!(fan.name, "asha");
        assert_eq!(fan.email, "asha@fanmail.com");
        assert_eq!(fan.password, "pw");
    }

    #[test]
    fn test_debug_hides_passwords() {
        let creds = Credentials {
            username: "asha".into(),
            password: "hunter2".into(),
        };
        assert!(!format!("{creds:?}").contains("hunter2"));
        assert!(!format!("{:?}", NewFan::placeholder(&creds, "x.y")).contains("hunter2"));
    }
}
