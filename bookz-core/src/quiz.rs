//! Link to the separately deployed quiz application

use crate::config::Mode;

/// Path of the quiz entry point below the deployment base
pub const QUIZ_PATH: &str = "/quiz-app/index.html";

/// Deployment base path used in production
pub const PRODUCTION_BASE: &str = "/bookz";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizLink {
    base: String,
}

impl QuizLink {
    pub fn for_mode(mode: Mode) -> Self {
        let base = match mode {
            Mode::Production => PRODUCTION_BASE,
            Mode::Development => "",
        };
        Self {
            base: base.to_string(),
        }
    }

    /// URL opened in a new browsing context
    pub fn url(&self) -> String {
        format!("{}{}", self.base, QUIZ_PATH)
    }
}
