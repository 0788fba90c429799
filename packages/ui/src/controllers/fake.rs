//! Scripted [`Backend`] for controller tests.

use std::cell::RefCell;
use std::collections::HashMap;

use api::models::{Celebrity, CelebritySuggestion, Credentials, FanProfile, FollowedCelebrity, NewCelebrity, NewFan};
use api::{ApiError, Backend};

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    ListCelebrities,
    GetCelebrity(i64),
    CreateCelebrity(NewCelebrity),
    Suggest(String),
    Register(String),
    Login(String),
    CurrentFan(String),
    CreateFan { token: String, email: String },
    Follow(i64, i64),
    Unfollow(i64, i64),
    Dashboard(i64),
    Document { token: String, name: String },
}

pub struct FakeBackend {
    calls: RefCell<Vec<Call>>,
    failures: HashMap<&'static str, ApiError>,
    pub celebrities: Vec<Celebrity>,
    pub suggestions: Vec<CelebritySuggestion>,
    pub followed: Vec<FollowedCelebrity>,
    pub token: String,
    pub fan_id: i64,
    pub document: Vec<u8>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            failures: HashMap::new(),
            celebrities: Vec::new(),
            suggestions: Vec::new(),
            followed: Vec::new(),
            token: "t-1".to_string(),
            fan_id: 42,
            document: b"%PDF-1.7".to_vec(),
        }
    }

    /// Make operation `op` (the `Backend` method name) fail with `error`.
    pub fn failing(mut self, op: &'static str, error: ApiError) -> Self {
        self.failures.insert(op, error);
        self
    }

    pub fn with_celebrities(mut self, celebrities: Vec<Celebrity>) -> Self {
        self.celebrities = celebrities;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn record(&self, op: &'static str, call: Call) -> Result<(), ApiError> {
        self.calls.borrow_mut().push(call);
        match self.failures.get(op) {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

pub fn celebrity(id: i64, name: &str, category: &str, country: &str) -> Celebrity {
    Celebrity {
        id,
        name: name.to_string(),
        category: category.to_string(),
        country: country.to_string(),
        fanbase: 1000,
        instagram: String::new(),
        genre: None,
    }
}

impl Backend for FakeBackend {
    async fn list_celebrities(&self) -> Result<Vec<Celebrity>, ApiError> {
        self.record("list_celebrities", Call::ListCelebrities)?;
        Ok(self.celebrities.clone())
    }

    async fn get_celebrity(&self, id: i64) -> Result<Celebrity, ApiError> {
        self.record("get_celebrity", Call::GetCelebrity(id))?;
        self.celebrities
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or(ApiError::NotFound { message: None })
    }

    async fn create_celebrity(&self, celebrity: &NewCelebrity) -> Result<Celebrity, ApiError> {
        self.record("create_celebrity", Call::CreateCelebrity(celebrity.clone()))?;
        Ok(Celebrity {
            id: 100,
            name: celebrity.name.clone(),
            category: celebrity.category.clone(),
            country: celebrity.country.clone(),
            fanbase: celebrity.fanbase,
            instagram: celebrity.instagram.clone(),
            genre: Some(celebrity.genre.clone()),
        })
    }

    async fn suggest_celebrities(&self, query: &str) -> Result<Vec<CelebritySuggestion>, ApiError> {
        self.record("suggest_celebrities", Call::Suggest(query.to_string()))?;
        Ok(self.suggestions.clone())
    }

    async fn register_user(&self, credentials: &Credentials) -> Result<(), ApiError> {
        self.record("register_user", Call::Register(credentials.username.clone()))
    }

    async fn login(&self, credentials: &Credentials) -> Result<String, ApiError> {
        self.record("login", Call::Login(credentials.username.clone()))?;
        Ok(self.token.clone())
    }

    async fn current_fan(&self, token: &str) -> Result<FanProfile, ApiError> {
        self.record("current_fan", Call::CurrentFan(token.to_string()))?;
        Ok(FanProfile { id: self.fan_id })
    }

    async fn create_fan(&self, token: &str, fan: &NewFan) -> Result<FanProfile, ApiError> {
        self.record(
            "create_fan",
            Call::CreateFan {
                token: token.to_string(),
                email: fan.email.clone(),
            },
        )?;
        Ok(FanProfile { id: self.fan_id })
    }

    async fn follow(&self, fan_id: i64, celebrity_id: i64) -> Result<(), ApiError> {
        self.record("follow", Call::Follow(fan_id, celebrity_id))
    }

    async fn unfollow(&self, fan_id: i64, celebrity_id: i64) -> Result<(), ApiError> {
        self.record("unfollow", Call::Unfollow(fan_id, celebrity_id))
    }

    async fn dashboard(&self, fan_id: i64) -> Result<Vec<FollowedCelebrity>, ApiError> {
        self.record("dashboard", Call::Dashboard(fan_id))?;
        Ok(self.followed.clone())
    }

    async fn celebrity_document(&self, token: &str, name: &str) -> Result<Vec<u8>, ApiError> {
        self.record(
            "celebrity_document",
            Call::Document {
                token: token.to_string(),
                name: name.to_string(),
            },
        )?;
        Ok(self.document.clone())
    }
}
