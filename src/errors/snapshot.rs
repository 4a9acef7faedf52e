// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use thiserror::Error;

use super::{ConfigError, EqualityError};

/// Errors from comparing two snapshot files.
#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("Unknown snapshot kind '{0}'")]
    UnknownKind(String),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Equality(#[from] EqualityError),
}
