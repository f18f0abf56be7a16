// SPDX-FileCopyrightText: 2022 Harish Rajagopal <harish.rajagopals@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Custom error definitions
use minify_html::Error as MinifyHtmlError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MinificationError {
    /// Error minifying HTML
    #[error("Error minifying HTML: {0:?}")]
    Html(MinifyHtmlError),
    /// The minified HTML wasn't valid UTF-8
    #[error("Minified HTML is not UTF-8")]
    Utf8,
}

impl From<MinifyHtmlError> for MinificationError {
    fn from(err: MinifyHtmlError) -> Self {
        Self::Html(err)
    }
}

#[derive(Error, Debug)]
/// All errors raised while rendering forum pages
pub enum AppError {
    /// Errors in building HTML templates
    #[error("Error building HTML template: {0}")]
    Template(#[from] askama::Error),
    /// Errors in reading configuration from the environment
    #[error("Invalid configuration: {0}")]
    Config(String),
    /// The comment adjacency doesn't describe a forest
    #[error("Malformed comment thread: {0}")]
    MalformedThread(String),
    /// The comment thread nests deeper than allowed
    #[error("Comment thread nests deeper than {0} levels")]
    ThreadTooDeep(usize),
    /// Errors in reading thread dumps
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Errors in parsing thread dumps
    #[error("Error parsing JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// Errors in minifying HTML
    #[error("Minification error: {0}")]
    Minify(#[from] MinificationError),
    /// Errors in looking up data referenced by the caller
    #[error("{0}")]
    NotFound(String),
}

/// Convenient alias for results with rendering errors
pub type AppResult<T> = Result<T, AppError>;
