// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

// Gateway option messages, grouped by API version
pub mod v1;
