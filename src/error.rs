use std::{fmt::Display, io};

use glob::{GlobError, PatternError};

#[derive(Debug)]
pub enum Error {
    Fetch(reqwest::Error),
    Glob(GlobError),
    Io(io::Error),
    Json(serde_json::Error),
    Pattern(PatternError),
    Render(handlebars::RenderError),
    Template(Box<handlebars::TemplateError>),
    Toml(toml::de::Error),
    Watch(notify::Error),
    WebSocket(tungstenite::Error),
}

impl Error {
    pub fn template(error: handlebars::TemplateError) -> Self {
        Error::Template(Box::new(error))
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
