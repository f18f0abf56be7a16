// SPDX-FileCopyrightText: 2022 Harish Rajagopal <harish.rajagopals@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Presentation helpers for forum and Q&A pages
//!
//! The main entry point is [`ThreadRenderer`], which nests the comments under a post. The
//! remaining helpers format the bits shown around each post.
pub mod config;
pub mod constants;
pub mod datetime;
pub mod errors;
pub mod logging;
pub mod models;
pub mod preview;
pub mod renderer;
pub mod tags;
mod templates;
pub mod tree;

pub use crate::config::RenderConfig;
pub use crate::errors::{AppError, AppResult};
pub use crate::models::{build_adjacency, Adjacency, Post, RenderContext, ThreadNode, User};
pub use crate::renderer::{CachedTemplate, CommentRenderer, NodeRenderer, TemplateLoader};
pub use crate::tree::ThreadRenderer;
