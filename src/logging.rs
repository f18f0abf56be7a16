// SPDX-FileCopyrightText: 2022 Harish Rajagopal <harish.rajagopals@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Log setup for binaries built on the forum helpers
use tracing::{info_span, Span};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

/// Install the global log subscriber, writing to stderr off the rendering thread.
///
/// `RUST_LOG` takes precedence over the given default filter. The returned guard must be held
/// until exit, otherwise buffered log lines are lost.
///
/// # Arguments
/// * `default_filter` - The filter directives to use when `RUST_LOG` isn't set
pub fn init(default_filter: &str) -> WorkerGuard {
    let (writer, guard) = tracing_appender::non_blocking(std::io::stderr());
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .init();
    guard
}

/// Create a span encapsulating all log events of one render.
///
/// The span carries a unique ID, which is used to distinguish log events of different renders.
pub fn render_span() -> Span {
    info_span!("render", id = %Uuid::new_v4())
}
