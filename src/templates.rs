// SPDX-FileCopyrightText: 2022 Harish Rajagopal <harish.rajagopals@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Contains structs for HTML templates
use askama::Template;

use crate::models::PostId;

/// The template for the body of a single comment
#[derive(Template, Debug)]
#[template(path = "comment.html")]
pub struct CommentTemplate<'a> {
    /// The ID of the comment
    pub id: PostId,
    /// The comment text, escaped on render
    pub body: &'a str,
    /// Pre-rendered avatar image markup
    pub avatar: &'a str,
    /// Pre-rendered link to the author with their flair
    pub userlink: &'a str,
    /// The last action on the comment and how long ago it was
    pub time_ago: &'a str,

    /// Whether to show an edit link
    pub can_edit: bool,
    /// Whether to show the reply form
    pub can_reply: bool,
    /// Anti-forgery token for the reply form
    pub csrf_token: &'a str,
}

/// The template for a link to a user's profile
#[derive(Template, Debug)]
#[template(path = "userlink.html")]
pub struct UserLinkTemplate<'a> {
    /// The ID of the user
    pub id: i64,
    /// The display name of the user
    pub name: &'a str,
    /// Flair marker, as HTML entities
    pub marker: &'a str,
}
