//! # Celebrity wire models
//!
//! | Struct | Direction | Endpoint |
//! |--------|-----------|----------|
//! | [`Celebrity`] | response | `GET /celebrities`, `GET /celebrities/{id}`, `POST /celebrities` |
//! | [`NewCelebrity`] | request | `POST /celebrities` |
//! | [`SuggestionQuery`] / [`SuggestionResponse`] | request / response | `POST /openrouter/celebrity-suggestions` |
//! | [`CelebritySuggestion`] | response item | AI suggestions, used only to pre-fill the signup form |
//!
//! The listing service sends `fanbase` as a string while the detail service sends
//! a number, so [`Celebrity`] accepts both and normalises to `u64`.

use serde::{Deserialize, Deserializer, Serialize};

/// A celebrity record as served by the listing/detail services.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Celebrity {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub country: String,
    #[serde(default, deserialize_with = "de_fanbase")]
    pub fanbase: u64,
    #[serde(default)]
    pub instagram: String,
    #[serde(default)]
    pub genre: Option<String>,
}

/// Body of a celebrity creation request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewCelebrity {
    pub name: String,
    pub category: String,
    pub country: String,
    pub instagram: String,
    pub fanbase: u64,
    pub genre: String,
}

/// One AI-generated profile suggestion.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CelebritySuggestion {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub instagram: Option<String>,
    /// Fanbase as display text; numbers are rendered, zero and null are dropped.
    #[serde(default, deserialize_with = "de_fanbase_text")]
    pub fanbase: Option<String>,
    #[serde(default)]
    pub genre: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SuggestionQuery {
    pub query: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SuggestionResponse {
    #[serde(default)]
    pub suggestions: Vec<CelebritySuggestion>,
}

/// Coerce free-form fanbase input to a count.
///
/// Blank, non-numeric, negative and non-finite input all become `0`, and
/// decimals are truncated toward zero (`"12.9"` is `12`). The signup form's
/// numeric input with `min = 1000` keeps such values from being entered there.
pub fn parse_fanbase(text: &str) -> u64 {
    text.trim().parse::<f64>().map(count_from_f64).unwrap_or(0)
}

fn count_from_f64(n: f64) -> u64 {
    if n.is_finite() && n > 0.0 {
        n as u64
    } else {
        0
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawFanbase {
    Number(f64),
    Text(String),
}

fn de_fanbase<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    Ok(match Option::<RawFanbase>::deserialize(deserializer)? {
        Some(RawFanbase::Number(n)) => count_from_f64(n),
        Some(RawFanbase::Text(s)) => parse_fanbase(&s),
        None => 0,
    })
}

fn de_fanbase_text<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    Ok(match Option::<RawFanbase>::deserialize(deserializer)? {
        Some(RawFanbase::Number(n)) if n == 0.0 || !n.is_finite() => None,
        Some(RawFanbase::Number(n)) if n.fract() == 0.0 => Some(format!("{}", n as i64)),
        Some(RawFanbase::Number(n)) => Some(n.to_string()),
        Some(RawFanbase::Text(s)) if s.is_empty() => None,
        Some(RawFanbase::Text(s)) => Some(s),
        None => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fanbase() {
        assert_eq!(parse_fanbase(""), 0);
        assert_eq!(parse_fanbase("   "), 0);
        assert_eq!(parse_fanbase("lots"), 0);
        assert_eq!(parse_fanbase("-5"), 0);
        assert_eq!(parse_fanbase(" 1500 "), 1500);
        assert_eq!(parse_fanbase("12.9"), 12);
        assert_eq!(parse_fanbase("1e3"), 1000);
    }

    #[test]
    fn test_celebrity_accepts_string_and_number_fanbase() {
        let listed: Celebrity = serde_json::from_str(
            r#"{"id":1,"name":"Asha","category":"Singer","country":"India","fanbase":"25000","instagram":"https://instagram.com/asha"}"#,
        )
        .unwrap();
        assert_eq!(listed.fanbase, 25000);
        assert!(listed.genre.is_none());

        let detail: Celebrity = serde_json::from_str(
            r#"{"id":1,"name":"Asha","category":"Singer","country":"India","fanbase":25000,"instagram":"","genre":"Pop"}"#,
        )
        .unwrap();
        assert_eq!(detail.fanbase, 25000);
        assert_eq!(detail.genre.as_deref(), Some("Pop"));
    }

    #[test]
    fn test_celebrity_tolerates_missing_fields() {
        let c: Celebrity =
            serde_json::from_str(r#"{"id":3,"name":"Ravi","fanbase":null}"#).unwrap();
        assert_eq!(c.fanbase, 0);
        assert_eq!(c.category, "");
        assert_eq!(c.instagram, "");
    }

    #[test]
    fn test_new_celebrity_body() {
        let body = NewCelebrity {
            name: "Asha".into(),
            category: "Singer".into(),
            country: "India".into(),
            instagram: String::new(),
            fanbase: 0,
            genre: String::new(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["fanbase"], serde_json::json!(0));
        assert_eq!(json["name"], "Asha");
    }

    #[test]
    fn test_suggestion_fanbase_text() {
        let response: SuggestionResponse = serde_json::from_str(
            r#"{"suggestions":[
                {"name":"A","category":"Singer","country":"India","fanbase":1200000},
                {"name":"B","category":"Actor","country":"USA","fanbase":"2M"},
                {"name":"C","category":"Speaker","country":"UK","fanbase":0},
                {"name":"D","category":"Singer","country":"Canada"}
            ]}"#,
        )
        .unwrap();
        let texts: Vec<_> = response
            .suggestions
            .iter()
            .map(|s| s.fanbase.clone())
            .collect();
        assert_eq!(
            texts,
            vec![Some("1200000".to_string()), Some("2M".to_string()), None, None]
        );
    }

    #[test]
    fn test_missing_suggestions_is_empty() {
        let response: SuggestionResponse = serde_json::from_str("{}").unwrap();
        assert!(response.suggestions.is_empty());
    }
}
