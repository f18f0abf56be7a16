// SPDX-FileCopyrightText: 2022 Harish Rajagopal <harish.rajagopals@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Small formatting helpers used throughout the forum pages
use std::fmt;

use askama::Template;
use html_escape::encode_double_quoted_attribute;
use rand::{thread_rng, Rng};
use sha2::{Digest, Sha256};
use url::form_urlencoded::Serializer;

use crate::constants::{
    ADMIN_MARKER, GRAVATAR_BASE_URL, GRAVATAR_DEFAULT, MEMBER_MARKER, MODERATOR_MARKER,
};
use crate::errors::AppResult;
use crate::models::{Post, Role, User};
use crate::templates::UserLinkTemplate;

/// A random number padded with spaces, for busting caches of static URLs.
pub fn rand_num() -> String {
    let value: f64 = thread_rng().gen();
    format!(" {value:.6} ")
}

/// Return the "active" CSS class if both names match, ignoring case.
///
/// Missing names are treated as empty.
pub fn active(x: Option<&str>, y: Option<&str>) -> &'static str {
    let (x, y) = (x.unwrap_or_default(), y.unwrap_or_default());
    if x.to_lowercase() == y.to_lowercase() {
        "active"
    } else {
        ""
    }
}

/// CSS class for a post's row in a listing
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum BoxClass {
    Accepted,
    Answered,
    Commented,
    Unanswered,
}

impl BoxClass {
    pub fn for_post(post: &Post) -> Self {
        if post.has_accepted {
            Self::Accepted
        } else if post.reply_count > 0 {
            Self::Answered
        } else if post.comment_count > 0 {
            Self::Commented
        } else {
            Self::Unanswered
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Accepted => "accepted",
            Self::Answered => "answered",
            Self::Commented => "commented",
            Self::Unanswered => "unanswered",
        }
    }
}

impl fmt::Display for BoxClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The flair shown next to a user's name, as HTML entities.
pub fn flair_marker(role: Role) -> &'static str {
    match role {
        Role::Admin => ADMIN_MARKER,
        Role::Moderator => MODERATOR_MARKER,
        Role::Member => MEMBER_MARKER,
    }
}

/// Render a link to the user's profile along with their flair.
pub fn userlink(user: &User) -> AppResult<String> {
    let html = UserLinkTemplate {
        id: user.id,
        name: &user.name,
        marker: flair_marker(user.role),
    }
    .render()?;
    Ok(html)
}

/// Build the Gravatar URL for an email.
///
/// Gravatar hashes the trimmed, lower-cased address.
///
/// # Arguments
/// * `email` - The user's email address
/// * `size` - The image size in pixels
pub fn gravatar_url(email: &str, size: u32) -> String {
    let hash = Sha256::digest(email.trim().to_lowercase().as_bytes());
    let query = Serializer::new(String::new())
        .append_pair("s", &size.to_string())
        .append_pair("d", GRAVATAR_DEFAULT)
        .finish();
    format!("{GRAVATAR_BASE_URL}{hash:x}?{query}")
}

/// Render the avatar image for a user.
pub fn gravatar(user: &User, size: u32) -> String {
    format!(
        r#"<img src="{}" alt="gravatar for {}"/>"#,
        encode_double_quoted_attribute(&gravatar_url(&user.email, size)),
        encode_double_quoted_attribute(&user.name),
    )
}
