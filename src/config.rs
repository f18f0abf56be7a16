// SPDX-FileCopyrightText: 2022 Harish Rajagopal <harish.rajagopals@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Rendering options read from the environment
use std::env;
use std::str::FromStr;

use crate::constants::{AVATAR_SIZE, AVATAR_SIZE_VAR, DEBUG_VAR, MAX_DEPTH_VAR, MAX_THREAD_DEPTH};
use crate::errors::{AppError, AppResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    /// Whether to reload the comment template before every thread
    pub debug: bool,
    /// How deeply comments may nest
    pub max_depth: usize,
    /// Avatar size (in pixels)
    pub avatar_size: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            debug: false,
            max_depth: MAX_THREAD_DEPTH,
            avatar_size: AVATAR_SIZE,
        }
    }
}

/// Parse an optional setting, falling back to a default when it's unset.
fn parse_var<T: FromStr>(name: &str, value: Option<String>, default: T) -> AppResult<T> {
    match value {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| AppError::Config(format!("{name} has invalid value {value:?}"))),
        None => Ok(default),
    }
}

/// Parse a boolean flag, accepting the usual spellings.
fn parse_flag(name: &str, value: Option<String>) -> AppResult<bool> {
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(false),
        Some(value) => match value.to_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => Err(AppError::Config(format!("{name} has invalid value {value:?}"))),
        },
    }
}

impl RenderConfig {
    /// Read the config from the environment, using defaults for unset variables.
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Read the config through the given variable lookup.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let max_depth = parse_var(MAX_DEPTH_VAR, lookup(MAX_DEPTH_VAR), MAX_THREAD_DEPTH)?;
        if max_depth == 0 {
            return Err(AppError::Config(format!("{MAX_DEPTH_VAR} must be positive")));
        }

        Ok(Self {
            debug: parse_flag(DEBUG_VAR, lookup(DEBUG_VAR))?,
            max_depth,
            avatar_size: parse_var(AVATAR_SIZE_VAR, lookup(AVATAR_SIZE_VAR), AVATAR_SIZE)?,
        })
    }
}
