// Copyright 2025 the Streamgraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Retained scene and mark diffing.

extern crate alloc;

use alloc::boxed::Box;
use alloc::vec::Vec;

use hashbrown::HashMap;
use hashbrown::hash_map::Entry;
use kurbo::Rect;

use crate::mark::{Mark, MarkId};

/// A change to apply to a renderer's retained state.
#[derive(Clone, Debug, PartialEq)]
pub enum MarkDiff {
    /// A mark appeared.
    Enter {
        /// Mark id.
        id: MarkId,
        /// Paint order.
        z_index: i32,
        /// Geometric bounds, if known.
        bounds: Option<Rect>,
        /// The new mark.
        new: Box<Mark>,
    },
    /// A retained mark changed.
    Update {
        /// Mark id.
        id: MarkId,
        /// Previous paint order.
        old_z_index: i32,
        /// New paint order.
        new_z_index: i32,
        /// Geometric bounds of the new mark, if known.
        bounds: Option<Rect>,
        /// The new mark.
        new: Box<Mark>,
    },
    /// A retained mark was removed.
    Exit {
        /// Mark id.
        id: MarkId,
        /// Geometric bounds of the removed mark, if known.
        bounds: Option<Rect>,
    },
}

impl MarkDiff {
    /// The id of the mark this diff applies to.
    pub fn id(&self) -> MarkId {
        match self {
            Self::Enter { id, .. } | Self::Update { id, .. } | Self::Exit { id, .. } => *id,
        }
    }
}

/// The set of marks currently drawn.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    marks: HashMap<MarkId, Mark>,
}

impl Scene {
    /// Creates an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of retained marks.
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    /// Whether the scene retains no marks.
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Looks up a retained mark.
    pub fn get(&self, id: MarkId) -> Option<&Mark> {
        self.marks.get(&id)
    }

    /// Returns retained marks in paint order (`(z_index, id)`).
    pub fn marks_in_paint_order(&self) -> Vec<&Mark> {
        let mut out: Vec<&Mark> = self.marks.values().collect();
        out.sort_by_key(|m| (m.z_index, m.id));
        out
    }

    /// Replaces the retained set with `marks`.
    ///
    /// Diffs are returned with enters/updates in `marks` order, followed by exits in id order.
    /// Marks that are re-emitted unchanged produce no diff. If `marks` contains duplicate ids,
    /// the last one wins.
    pub fn tick(&mut self, marks: Vec<Mark>) -> Vec<MarkDiff> {
        let mut diffs = Vec::new();
        let mut next: HashMap<MarkId, Mark> = HashMap::with_capacity(marks.len());

        for mark in marks {
            let id = mark.id;
            match self.marks.remove(&id).or_else(|| next.remove(&id)) {
                Some(old) if old == mark => {}
                Some(old) => diffs.push(update_diff(&old, &mark)),
                None => diffs.push(enter_diff(&mark)),
            }
            next.insert(id, mark);
        }

        let mut exits: Vec<Mark> = self.marks.drain().map(|(_, m)| m).collect();
        exits.sort_by_key(|m| m.id);
        diffs.extend(exits.iter().map(exit_diff));

        self.marks = next;
        diffs
    }

    /// Inserts or replaces a single mark.
    ///
    /// Returns `None` if an identical mark was already retained.
    pub fn insert(&mut self, mark: Mark) -> Option<MarkDiff> {
        match self.marks.entry(mark.id) {
            Entry::Occupied(mut e) => {
                if *e.get() == mark {
                    return None;
                }
                let diff = update_diff(e.get(), &mark);
                e.insert(mark);
                Some(diff)
            }
            Entry::Vacant(e) => {
                let diff = enter_diff(&mark);
                e.insert(mark);
                Some(diff)
            }
        }
    }

    /// Applies `f` to a retained mark.
    ///
    /// Returns an update diff if the mark exists and `f` changed it.
    pub fn update(&mut self, id: MarkId, f: impl FnOnce(&mut Mark)) -> Option<MarkDiff> {
        let mark = self.marks.get_mut(&id)?;
        let before = mark.clone();
        f(mark);
        mark.id = id;
        if *mark == before {
            None
        } else {
            Some(update_diff(&before, mark))
        }
    }

    /// Removes every mark matching `pred`, returning exit diffs in id order.
    pub fn remove_where(&mut self, mut pred: impl FnMut(&Mark) -> bool) -> Vec<MarkDiff> {
        let mut removed: Vec<Mark> = self.marks.extract_if(|_, m| pred(m)).map(|(_, m)| m).collect();
        removed.sort_by_key(|m| m.id);
        removed.iter().map(exit_diff).collect()
    }

    /// Removes every mark.
    pub fn clear(&mut self) -> Vec<MarkDiff> {
        self.remove_where(|_| true)
    }
}

fn enter_diff(mark: &Mark) -> MarkDiff {
    MarkDiff::Enter {
        id: mark.id,
        z_index: mark.z_index,
        bounds: mark.bounds(),
        new: Box::new(mark.clone()),
    }
}

fn update_diff(old: &Mark, new: &Mark) -> MarkDiff {
    MarkDiff::Update {
        id: new.id,
        old_z_index: old.z_index,
        new_z_index: new.z_index,
        bounds: new.bounds(),
        new: Box::new(new.clone()),
    }
}

fn exit_diff(mark: &Mark) -> MarkDiff {
    MarkDiff::Exit {
        id: mark.id,
        bounds: mark.bounds(),
    }
}
