// SPDX-FileCopyrightText: 2022 Harish Rajagopal <harish.rajagopals@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Offline rendering of thread dumps
use std::fs;
use std::path::Path;

use minify_html::{copy as minify, Cfg};
use tracing::{debug, info};

use crate::config::RenderConfig;
use crate::errors::{AppError, AppResult, MinificationError};
use crate::models::{build_adjacency, Post, PostId, RenderContext};
use crate::renderer::{CachedTemplate, CommentRenderer};
use crate::tree::ThreadRenderer;

/// Options for rendering a thread dump
#[derive(Debug, Clone)]
pub struct PreviewOptions {
    /// The post whose replies are rendered
    pub root: PostId,
    /// The ID of the author to view the thread as, if any
    pub viewer: Option<i64>,
    /// Anti-forgery token to embed in reply forms
    pub csrf_token: String,
    /// Whether to minify the rendered HTML
    pub minify: bool,
    pub config: RenderConfig,
}

/// Read a JSON array of posts.
pub fn load_posts(path: &Path) -> AppResult<Vec<Post>> {
    let text = fs::read_to_string(path)?;
    let posts: Vec<Post> = serde_json::from_str(&text)?;
    debug!("Loaded {} posts from {}", posts.len(), path.display());
    Ok(posts)
}

/// Minify a rendered HTML fragment.
pub fn minify_fragment(html: &str) -> AppResult<String> {
    let cfg = Cfg {
        minify_js: false,
        minify_css: false,
    };
    let bytes = minify(html.as_bytes(), &cfg).map_err(MinificationError::from)?;
    String::from_utf8(bytes).map_err(|_| MinificationError::Utf8.into())
}

/// Build the render context for viewing the thread as one of its authors.
fn viewer_context(posts: &[Post], options: &PreviewOptions) -> AppResult<RenderContext> {
    let token = options.csrf_token.clone();
    let Some(viewer_id) = options.viewer else {
        return Ok(RenderContext::anonymous(token));
    };
    match posts.iter().find(|post| post.author.id == viewer_id) {
        Some(post) => Ok(RenderContext::new(post.author.clone(), token)),
        None => Err(AppError::NotFound(format!(
            "No author with ID {viewer_id} in the thread"
        ))),
    }
}

/// Render the replies under the requested root of a thread dump.
pub fn render_posts(posts: Vec<Post>, options: &PreviewOptions) -> AppResult<String> {
    let ctx = viewer_context(&posts, options)?;
    let adjacency = build_adjacency(posts);

    let avatar_size = options.config.avatar_size;
    let template = CachedTemplate::new(
        move || -> AppResult<_> { Ok(CommentRenderer::new(avatar_size)) },
        options.config.debug,
    )?;
    let threads = ThreadRenderer::new(template, options.config.max_depth);

    let html = threads.render_thread(&options.root, &adjacency, &ctx)?;
    info!("Rendered thread under post {} ({}B)", options.root, html.len());

    if options.minify {
        minify_fragment(&html)
    } else {
        Ok(html)
    }
}

/// Render the replies under the requested root of the thread dump at the given path.
pub fn render_file(path: &Path, options: &PreviewOptions) -> AppResult<String> {
    render_posts(load_posts(path)?, options)
}
