// SPDX-FileCopyrightText: 2022 Harish Rajagopal <harish.rajagopals@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Render a comment thread dump to HTML
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;

use forum_tags::constants::DEFAULT_LOG_FILTER;
use forum_tags::logging::{init as init_logging, render_span};
use forum_tags::models::PostId;
use forum_tags::preview::{render_file, PreviewOptions};
use forum_tags::{AppResult, RenderConfig};

#[derive(Parser, Debug)]
#[command(name = "forum-tags-preview")]
#[command(version, about = "Render the comments under a post to HTML", long_about = None)]
struct Cli {
    /// JSON file with an array of posts
    #[arg(value_name = "THREAD")]
    input: PathBuf,

    /// ID of the post whose replies are rendered
    #[arg(short, long)]
    root: PostId,

    /// View the thread as the author with this user ID
    #[arg(long)]
    viewer: Option<i64>,

    /// Anti-forgery token for reply forms
    #[arg(long, default_value = "")]
    csrf_token: String,

    /// Reload the comment template before each thread
    #[arg(long)]
    debug: bool,

    /// Maximum comment nesting depth
    #[arg(long)]
    max_depth: Option<usize>,

    /// Avatar size in pixels
    #[arg(long)]
    avatar_size: Option<u32>,

    /// Minify the rendered HTML
    #[arg(short, long)]
    minify: bool,
}

fn preview(cli: Cli) -> AppResult<String> {
    let mut config = RenderConfig::from_env()?;
    config.debug |= cli.debug;
    if let Some(max_depth) = cli.max_depth {
        config.max_depth = max_depth;
    }
    if let Some(avatar_size) = cli.avatar_size {
        config.avatar_size = avatar_size;
    }

    let options = PreviewOptions {
        root: cli.root,
        viewer: cli.viewer,
        csrf_token: cli.csrf_token,
        minify: cli.minify,
        config,
    };
    render_span().in_scope(|| render_file(&cli.input, &options))
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let _guard = init_logging(DEFAULT_LOG_FILTER);

    match preview(cli) {
        Ok(html) => {
            println!("{html}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("Couldn't render thread: {err}");
            ExitCode::FAILURE
        }
    }
}
