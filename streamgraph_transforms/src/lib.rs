// Copyright 2025 the Streamgraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stream graph transforms.
//!
//! This crate holds the numeric core of a stream graph:
//! - a [`FrequencyMatrix`] (category name -> one value per pivot) and its [`Pivots`],
//! - [`order_categories`], which puts the fastest-growing category at the bottom of the stack,
//! - [`stack_series`], which turns the matrix into cumulative `(lower, upper)` bands.
//!
//! Everything here is a pure function of its inputs and is recomputed on every redraw.
//! Malformed input is rejected with an [`InvalidInputError`] instead of producing `NaN`
//! geometry downstream.

#![no_std]

extern crate alloc;

mod error;
mod matrix;
mod order;
mod pivots;
mod stack;

pub use error::InvalidInputError;
pub use matrix::FrequencyMatrix;
pub use order::{OrderedCategories, order_categories};
pub use pivots::Pivots;
pub use stack::{Band, BandPoint, StackedSeries, stack_series};
