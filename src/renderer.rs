// SPDX-FileCopyrightText: 2022 Harish Rajagopal <harish.rajagopals@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Renderers for the HTML of a single comment
use std::cell::RefCell;
use std::rc::Rc;

use askama::Template;
#[cfg(test)]
use mockall::automock;
use tracing::info;

use crate::datetime::{action_time_ago, curr_datetime};
use crate::errors::AppResult;
use crate::models::{Post, RenderContext};
use crate::tags::{gravatar, userlink};
use crate::templates::CommentTemplate;

/// Something that turns one node of a thread into HTML.
///
/// The thread renderer only supplies the nesting; everything inside a comment block comes from
/// here.
pub trait NodeRenderer<N> {
    /// Render a single node, without any of its children.
    fn render_node(&self, node: &N, ctx: &RenderContext) -> AppResult<String>;

    /// Hook that runs once before each thread is rendered.
    fn prepare(&self) -> AppResult<()> {
        Ok(())
    }
}

impl<N, F> NodeRenderer<N> for F
where
    F: Fn(&N, &RenderContext) -> AppResult<String>,
{
    fn render_node(&self, node: &N, ctx: &RenderContext) -> AppResult<String> {
        self(node, ctx)
    }
}

/// Renders posts through the comment template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentRenderer {
    /// Avatar size (in pixels)
    avatar_size: u32,
}

impl CommentRenderer {
    pub fn new(avatar_size: u32) -> Self {
        Self { avatar_size }
    }
}

impl NodeRenderer<Post> for CommentRenderer {
    fn render_node(&self, post: &Post, ctx: &RenderContext) -> AppResult<String> {
        let avatar = gravatar(&post.author, self.avatar_size);
        let userlink = userlink(&post.author)?;
        let time_ago = action_time_ago(post, curr_datetime());

        let html = CommentTemplate {
            id: post.id,
            body: &post.body,
            avatar: &avatar,
            userlink: &userlink,
            time_ago: &time_ago,
            can_edit: ctx.can_edit(post),
            can_reply: ctx.viewer.is_some(),
            csrf_token: &ctx.csrf_token,
        }
        .render()?;
        Ok(html)
    }
}

/// Source of fresh node renderers.
#[cfg_attr(test, automock(type Output = CommentRenderer;))]
pub trait TemplateLoader {
    type Output;

    fn load(&self) -> AppResult<Self::Output>;
}

impl<F, R> TemplateLoader for F
where
    F: Fn() -> AppResult<R>,
{
    type Output = R;

    fn load(&self) -> AppResult<R> {
        self()
    }
}

/// A node renderer loaded once and kept around.
///
/// In development mode the renderer is loaded afresh before every thread, so that changes show
/// up without a restart. Otherwise a stale renderer is acceptable.
pub struct CachedTemplate<L: TemplateLoader> {
    loader: L,
    reload: bool,
    // Handed out as an `Rc` so that a reload never overlaps a borrow held by a render.
    current: RefCell<Rc<L::Output>>,
}

impl<L: TemplateLoader> CachedTemplate<L> {
    /// Load the renderer for the first time.
    ///
    /// # Arguments
    /// * `loader` - Where the renderer comes from
    /// * `reload` - Whether to reload the renderer before every thread
    pub fn new(loader: L, reload: bool) -> AppResult<Self> {
        let current = RefCell::new(Rc::new(loader.load()?));
        Ok(Self {
            loader,
            reload,
            current,
        })
    }

    fn current(&self) -> Rc<L::Output> {
        Rc::clone(&self.current.borrow())
    }
}

impl<N, L> NodeRenderer<N> for CachedTemplate<L>
where
    L: TemplateLoader,
    L::Output: NodeRenderer<N>,
{
    fn render_node(&self, node: &N, ctx: &RenderContext) -> AppResult<String> {
        self.current().render_node(node, ctx)
    }

    fn prepare(&self) -> AppResult<()> {
        if self.reload {
            info!("Reloading the comment template");
            let fresh = Rc::new(self.loader.load()?);
            *self.current.borrow_mut() = fresh;
        }
        self.current().prepare()
    }
}
