// Copyright 2025 the Streamgraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Retained mark scene for stream graphs.
//!
//! Chart code generates a full set of [`Mark`]s per redraw and hands them to
//! [`Scene::tick`], which diffs them against what is currently retained:
//! - marks that are new produce [`MarkDiff::Enter`],
//! - marks whose payload, z-index, opacity or visibility changed produce [`MarkDiff::Update`],
//! - marks that were not re-emitted produce [`MarkDiff::Exit`].
//!
//! Renderers (an SVG writer, a GPU scene, a DOM binding) apply the diffs. Interaction code can
//! also patch individual marks through [`Scene::update`] without regenerating the whole set.

#![no_std]

extern crate alloc;

mod mark;
mod scene;

pub use mark::{Mark, MarkId, MarkPayload, PathMark, TextAnchor, TextBaseline, TextMark};
pub use scene::{MarkDiff, Scene};
