//! Single celebrity page and its profile document download.

use api::{Backend, Celebrity};
use store::{AuthSession, KeyValueStore};

use super::{Phase, StepExt, ViewError};

pub const NOT_FOUND: &str = "Celebrity not found.";
pub const DOWNLOADING: &str = "Generating PDF...";
pub const LOGIN_TO_DOWNLOAD: &str = "You must be logged in to download the PDF";

/// `1234567` → `"1,234,567"`.
pub fn format_fanbase(count: u64) -> String {
    let digits = count.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Text shown in place of the download action, if the visitor cannot use it.
pub fn download_notice(authenticated: bool) -> Option<&'static str> {
    (!authenticated).then_some(LOGIN_TO_DOWNLOAD)
}

pub fn document_file_name(name: &str) -> String {
    format!("{name}_profile.pdf")
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DetailState {
    pub celebrity: Option<Celebrity>,
    pub phase: Phase,
    pub download: Phase,
    pub error: Option<String>,
}

impl DetailState {
    /// Settled without a record and without an error.
    pub fn is_missing(&self) -> bool {
        self.phase == Phase::Settled && self.celebrity.is_none() && self.error.is_none()
    }

    pub fn settle_load(&mut self, result: Result<Option<Celebrity>, ViewError>) {
        self.phase.settle();
        match result {
            Ok(celebrity) => {
                self.celebrity = celebrity;
                self.error = None;
            }
            Err(e) => self.error = Some(e.message()),
        }
    }

    pub fn settle_download(&mut self, result: Result<(), ViewError>) {
        self.download.settle();
        match result {
            Ok(()) => self.error = None,
            Err(e) => self.error = Some(e.message()),
        }
    }
}

/// Fetch one record; `Ok(None)` when the service answers 404.
pub async fn load<B: Backend>(backend: &B, id: i64) -> Result<Option<Celebrity>, ViewError> {
    match backend.get_celebrity(id).await {
        Ok(celebrity) => Ok(Some(celebrity)),
        Err(e) if e.is_not_found() => Ok(None),
        Err(e) => Err(e).or_explain("Failed to fetch celebrity profile"),
    }
}

/// Fetch the profile document with the session token and hand it to `save`.
///
/// Without a token nothing is requested.
pub async fn download<B, S, F>(
    backend: &B,
    session: &AuthSession<S>,
    celebrity_name: &str,
    save: F,
) -> Result<(), ViewError>
where
    B: Backend,
    S: KeyValueStore,
    F: FnOnce(&str, &[u8]) -> Result<(), String>,
{
    let token = session
        .token()
        .ok_or(ViewError::NotAuthenticated(LOGIN_TO_DOWNLOAD))?;
    let bytes = backend
        .celebrity_document(&token, celebrity_name)
        .await
        .or_explain("Failed to generate PDF")?;
    save(&document_file_name(celebrity_name), &bytes).map_err(|e| {
        tracing::warn!("saving document failed: {e}");
        ViewError::Save(e)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::fake::{celebrity, Call, FakeBackend};
    use api::ApiError;
    use std::cell::RefCell;
    use store::MemoryStore;

    #[test]
    fn test_format_fanbase() {
        assert_eq!(format_fanbase(0), "0");
        assert_eq!(format_fanbase(999), "999");
        assert_eq!(format_fanbase(1000), "1,000");
        assert_eq!(format_fanbase(1234567), "1,234,567");
        assert_eq!(format_fanbase(100000), "100,000");
    }

    #[test]
    fn test_document_file_name() {
        assert_eq!(document_file_name("Asha Bhosle"), "Asha Bhosle_profile.pdf");
    }

    #[tokio::test]
    async fn test_load_found() {
        let backend =
            FakeBackend::new().with_celebrities(vec![celebrity(7, "Asha", "Singer", "India")]);
        let mut state = DetailState::default();
        state.phase.begin();
        state.settle_load(load(&backend, 7).await);

        assert_eq!(state.celebrity.as_ref().map(|c| c.id), Some(7));
        assert!(!state.is_missing());
        assert_eq!(backend.calls(), vec![Call::GetCelebrity(7)]);
    }

    #[tokio::test]
    async fn test_load_404_is_missing_not_error() {
        let backend = FakeBackend::new();
        let mut state = DetailState::default();
        state.settle_load(load(&backend, 9).await);

        assert!(state.is_missing());
        assert!(state.error.is_none());
    }

    #[tokio::test]
    async fn test_load_failure_uses_fallback() {
        let backend = FakeBackend::new().failing(
            "get_celebrity",
            ApiError::Status {
                status: 500,
                message: None,
            },
        );
        let mut state = DetailState::default();
        state.settle_load(load(&backend, 9).await);

        assert_eq!(
            state.error.as_deref(),
            Some("Failed to fetch celebrity profile")
        );
        assert!(!state.is_missing());
    }

    #[test]
    fn test_anonymous_visitor_sees_notice_instead_of_download() {
        assert_eq!(download_notice(false), Some(LOGIN_TO_DOWNLOAD));
        assert_eq!(download_notice(true), None);
    }

    #[tokio::test]
    async fn test_download_requires_token() {
        let backend = FakeBackend::new();
        let session = AuthSession::hydrate(MemoryStore::new());
        let saved = RefCell::new(None::<String>);

        let result = download(&backend, &session, "Asha", |name, _| {
            *saved.borrow_mut() = Some(name.to_string());
            Ok(())
        })
        .await;

        assert_eq!(
            result.unwrap_err().message(),
            "You must be logged in to download the PDF"
        );
        assert!(backend.calls().is_empty());
        assert!(saved.borrow().is_none());
    }

    #[tokio::test]
    async fn test_download_saves_with_profile_name() {
        let backend = FakeBackend::new();
        let session = AuthSession::hydrate(MemoryStore::new());
        session.login("riya", "tok");
        let saved = RefCell::new(None::<(String, Vec<u8>)>);

        download(&backend, &session, "Asha", |name, bytes| {
            *saved.borrow_mut() = Some((name.to_string(), bytes.to_vec()));
            Ok(())
        })
        .await
        .unwrap();

        assert_eq!(
            backend.calls(),
            vec![Call::Document {
                token: "tok".into(),
                name: "Asha".into()
            }]
        );
        let (name, bytes) = saved.into_inner().unwrap();
        assert_eq!(name, "Asha_profile.pdf");
        assert_eq!(bytes, b"%PDF-1.7");
    }

    #[tokio::test]
    async fn test_download_failures() {
        let session = AuthSession::hydrate(MemoryStore::new());
        session.login("riya", "tok");

        let backend =
            FakeBackend::new().failing("celebrity_document", ApiError::Network("x".into()));
        let err = download(&backend, &session, "Asha", |_, _| Ok(()))
            .await
            .unwrap_err();
        assert_eq!(err.message(), "Failed to generate PDF");

        let backend = FakeBackend::new();
        let mut state = DetailState::default();
        state.download.begin();
        state.settle_download(
            download(&backend, &session, "Asha", |_, _| Err("disk full".into())).await,
        );
        assert_eq!(
            state.error.as_deref(),
            Some("Failed to save document: disk full")
        );
        assert!(!state.download.is_pending());
    }
}
