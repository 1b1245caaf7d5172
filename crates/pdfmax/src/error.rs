// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// Errors reported by [`crate::pdf_max`]
#[derive(Clone, Debug, PartialEq, Error)]
pub enum PdfMaxError {
    #[error("component list is empty")]
    Empty,

    #[error("significance must be in (0, 1], got {0}")]
    Significance(f64),

    #[error("component {index} is invalid: mu = {mu}, sigma = {sigma}")]
    Component { index: usize, mu: f64, sigma: f64 },

    #[error("evaluation produced a non-finite result")]
    NonFinite,
}
