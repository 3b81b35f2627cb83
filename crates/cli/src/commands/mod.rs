// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod dispatch;
pub mod extract;
pub mod rules;
pub mod validate;
