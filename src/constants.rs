// SPDX-FileCopyrightText: 2022 Harish Rajagopal <harish.rajagopals@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! All constants used by the forum helpers

// ==================================================
// Comment threads
// ==================================================
/// Opening markup for each comment block in a thread
pub const INDENT_OPEN: &str = r#"<div class="indent">"#;
/// Closing markup for each comment block in a thread
pub const INDENT_CLOSE: &str = "</div>";
/// Separator between the lines of a rendered thread
pub const LINE_SEP: &str = "\n";
/// Default limit on how deeply comments may nest
pub const MAX_THREAD_DEPTH: usize = 64;

// ==================================================
// Avatars
// ==================================================
/// URL prefix for Gravatar images
pub const GRAVATAR_BASE_URL: &str = "https://www.gravatar.com/avatar/";
/// Default avatar size (in pixels)
pub const AVATAR_SIZE: u32 = 80;
/// Fallback image style for emails without a Gravatar
pub const GRAVATAR_DEFAULT: &str = "identicon";

// ==================================================
// Flair markers
// ==================================================
pub const ADMIN_MARKER: &str = "&diams;&diams;";
pub const MODERATOR_MARKER: &str = "&diams;";
pub const MEMBER_MARKER: &str = "&bull;";

// ==================================================
// Environment variables
// ==================================================
/// Whether to reload templates before every thread render
pub const DEBUG_VAR: &str = "FORUM_TAGS_DEBUG";
/// Override for `MAX_THREAD_DEPTH`
pub const MAX_DEPTH_VAR: &str = "FORUM_TAGS_MAX_DEPTH";
/// Override for `AVATAR_SIZE`
pub const AVATAR_SIZE_VAR: &str = "FORUM_TAGS_AVATAR_SIZE";
/// Default log filter when `RUST_LOG` isn't set
pub const DEFAULT_LOG_FILTER: &str = "info";
