//! Celebrity onboarding form with AI-assisted pre-fill.

use api::models::parse_fanbase;
use api::{Backend, Celebrity, CelebritySuggestion, NewCelebrity};

use super::{require, Phase, StepExt, ViewError};

/// Raw form input; every field is free text until submit.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SignupForm {
    pub name: String,
    pub category: String,
    pub country: String,
    pub instagram: String,
    pub fanbase: String,
    pub genre: String,
}

impl SignupForm {
    /// Overwrite all six fields from a suggestion.
    pub fn apply_suggestion(&mut self, suggestion: &CelebritySuggestion) {
        self.name = suggestion.name.clone();
        self.category = suggestion.category.clone();
        self.country = suggestion.country.clone();
        self.instagram = suggestion.instagram.clone().unwrap_or_default();
        self.fanbase = suggestion.fanbase.clone().unwrap_or_default();
        self.genre = suggestion.genre.clone().unwrap_or_default();
    }

    pub fn validate(&self) -> Result<(), ViewError> {
        require(&self.name, "Name")?;
        require(&self.category, "Category")?;
        require(&self.country, "Country")?;
        Ok(())
    }

    /// Creation body; fanbase goes through [`parse_fanbase`], so blank,
    /// unparseable and negative input becomes `0` and decimals are truncated.
    pub fn to_new_celebrity(&self) -> NewCelebrity {
        NewCelebrity {
            name: self.name.clone(),
            category: self.category.clone(),
            country: self.country.clone(),
            instagram: self.instagram.clone(),
            fanbase: parse_fanbase(&self.fanbase),
            genre: self.genre.clone(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SignupState {
    pub intro: String,
    pub form: SignupForm,
    pub suggestions: Vec<CelebritySuggestion>,
    pub suggesting: Phase,
    pub submitting: Phase,
    pub message: Option<String>,
    pub error: Option<String>,
}

impl SignupState {
    pub fn settle_suggestions(&mut self, result: Result<Vec<CelebritySuggestion>, ViewError>) {
        self.suggesting.settle();
        match result {
            Ok(suggestions) => {
                self.suggestions = suggestions;
                self.error = None;
            }
            Err(e) => self.error = Some(e.message()),
        }
    }

    /// Fill the form from suggestion `index` and clear the list.
    pub fn select(&mut self, index: usize) {
        if let Some(suggestion) = self.suggestions.get(index) {
            self.form.apply_suggestion(suggestion);
            self.suggestions.clear();
        }
    }

    /// A successful submit resets the form and the intro text.
    pub fn settle_submit(&mut self, result: Result<Celebrity, ViewError>) {
        self.submitting.settle();
        match result {
            Ok(created) => {
                tracing::info!("onboarded celebrity {} ({})", created.name, created.id);
                self.form = SignupForm::default();
                self.intro.clear();
                self.error = None;
                self.message = Some("Celebrity onboarded successfully!".to_string());
            }
            Err(e) => {
                self.message = None;
                self.error = Some(e.message());
            }
        }
    }
}

/// Ask the suggestion service about `intro`. Blank input returns no suggestions
/// without a request.
pub async fn fetch_suggestions<B: Backend>(
    backend: &B,
    intro: &str,
) -> Result<Vec<CelebritySuggestion>, ViewError> {
    let intro = intro.trim();
    if intro.is_empty() {
        return Ok(Vec::new());
    }
    backend
        .suggest_celebrities(intro)
        .await
        .or_explain("Failed to fetch suggestions")
}

pub async fn submit<B: Backend>(backend: &B, form: &SignupForm) -> Result<Celebrity, ViewError> {
    form.validate()?;
    backend
        .create_celebrity(&form.to_new_celebrity())
        .await
        .or_explain("Failed to onboard celebrity")
}
