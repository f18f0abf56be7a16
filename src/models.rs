// SPDX-FileCopyrightText: 2022 Harish Rajagopal <harish.rajagopals@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Data handed to the helpers by the surrounding application
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type PostId = i64;

#[derive(Deserialize, Serialize, PartialEq, Eq, Debug, Clone, Copy, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Moderator,
    #[default]
    Member,
}

impl Role {
    /// Whether this role may edit posts written by others.
    pub fn is_staff(self) -> bool {
        matches!(self, Self::Admin | Self::Moderator)
    }
}

#[derive(Deserialize, Serialize, PartialEq, Eq, Debug, Clone)]
pub struct User {
    pub id: i64,
    /// The display name
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: Role,
}

/// The most recent action taken on a post
#[derive(Deserialize, Serialize, PartialEq, Eq, Debug, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum UpdateType {
    Created,
    Edited,
    Answered,
    Commented,
    Accepted,
}

impl fmt::Display for UpdateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Created => "created",
            Self::Edited => "edited",
            Self::Answered => "answered",
            Self::Commented => "commented",
            Self::Accepted => "accepted",
        })
    }
}

#[derive(Deserialize, Serialize, PartialEq, Eq, Debug, Clone)]
pub struct Post {
    pub id: PostId,
    /// The post this one replies to, or its own ID for a top-level post
    pub parent_id: PostId,
    pub author: User,
    pub body: String,
    /// When the post was last touched
    pub lastedit_date: DateTime<Utc>,
    pub update_type: UpdateType,
    #[serde(default)]
    pub has_accepted: bool,
    #[serde(default)]
    pub reply_count: u32,
    #[serde(default)]
    pub comment_count: u32,
}

/// A node in a comment forest.
pub trait ThreadNode {
    type Id: Eq + Hash + fmt::Debug;

    fn id(&self) -> &Self::Id;

    /// The ID of the node this one hangs under.
    ///
    /// Roots of the forest return their own ID.
    fn parent_id(&self) -> &Self::Id;
}

impl ThreadNode for Post {
    type Id = PostId;

    fn id(&self) -> &PostId {
        &self.id
    }

    fn parent_id(&self) -> &PostId {
        &self.parent_id
    }
}

/// Ordered direct children of each node, keyed by the parent's ID.
///
/// IDs without an entry are leaves.
pub type Adjacency<N> = HashMap<<N as ThreadNode>::Id, Vec<N>>;

/// Group nodes under their parents, keeping the input order within each group.
///
/// Roots (nodes that are their own parent) aren't listed as anyone's child.
pub fn build_adjacency<N, I>(nodes: I) -> Adjacency<N>
where
    N: ThreadNode,
    N::Id: Clone,
    I: IntoIterator<Item = N>,
{
    let mut adjacency: Adjacency<N> = HashMap::new();
    for node in nodes {
        if node.parent_id() == node.id() {
            continue;
        }
        adjacency
            .entry(node.parent_id().clone())
            .or_default()
            .push(node);
    }
    adjacency
}

/// Per-request data shared by every comment in a thread
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    /// The signed-in user, if any
    pub viewer: Option<User>,
    /// Anti-forgery token to embed in forms
    pub csrf_token: String,
}

impl RenderContext {
    pub fn new(viewer: User, csrf_token: String) -> Self {
        Self {
            viewer: Some(viewer),
            csrf_token,
        }
    }

    /// Context for a visitor who isn't signed in.
    pub fn anonymous(csrf_token: String) -> Self {
        Self {
            viewer: None,
            csrf_token,
        }
    }

    /// Whether the viewer may edit the given post.
    pub fn can_edit(&self, post: &Post) -> bool {
        self.viewer
            .as_ref()
            .is_some_and(|viewer| viewer.id == post.author.id || viewer.role.is_staff())
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::{post, user};
    use super::*;

    use test_case::test_case;

    #[test]
    /// Test that grouping keeps the input order and skips roots.
    fn test_build_adjacency() {
        let adjacency = build_adjacency(vec![post(1, 1), post(3, 1), post(2, 1), post(4, 3)]);

        assert_eq!(adjacency.len(), 2);
        let top: Vec<_> = adjacency[&1].iter().map(|p| p.id).collect();
        assert_eq!(top, vec![3, 2]);
        let nested: Vec<_> = adjacency[&3].iter().map(|p| p.id).collect();
        assert_eq!(nested, vec![4]);
        assert!(!adjacency.contains_key(&2));
    }

    #[test_case(None, false; "anonymous")]
    #[test_case(Some(user(10, Role::Member)), true; "author")]
    #[test_case(Some(user(99, Role::Member)), false; "other member")]
    #[test_case(Some(user(99, Role::Moderator)), true; "moderator")]
    #[test_case(Some(user(99, Role::Admin)), true; "admin")]
    /// Test who is allowed to edit a post.
    fn test_can_edit(viewer: Option<User>, expected: bool) {
        let ctx = RenderContext {
            viewer,
            csrf_token: String::new(),
        };
        assert_eq!(ctx.can_edit(&post(1, 1)), expected);
    }

    #[test]
    /// Test that posts deserialize with defaults for the optional counters.
    fn test_post_deserialize() {
        let json = r#"{
            "id": 2,
            "parent_id": 1,
            "author": {"id": 5, "name": "Ann", "email": "ann@example.org", "role": "moderator"},
            "body": "Hello",
            "lastedit_date": "2021-06-01T12:00:00Z",
            "update_type": "edited"
        }"#;
        let post: Post = serde_json::from_str(json).expect("Couldn't parse post");
        assert_eq!(post.author.role, Role::Moderator);
        assert_eq!(post.update_type, UpdateType::Edited);
        assert_eq!(post.reply_count, 0);
        assert!(!post.has_accepted);
    }
}
