// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

/// Default bound on message nesting, root included
pub const DEFAULT_MAX_DEPTH: usize = 64;
/// Smallest usable bound: the root message alone
pub const MIN_MAX_DEPTH: usize = 1;
