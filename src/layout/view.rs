//! View hierarchy
//!
//! Views live in an arena owned by the [`LayoutEngine`](super::LayoutEngine)
//! and are addressed by [`ViewId`] handles. The tree records superview links
//! and each view's frame; whether that frame is turned into constraints is
//! controlled by the per-view `translates_frame` flag.

use std::fmt;

use super::types::BoundingBox;

/// Handle to a view in a [`ViewTree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ViewId(pub(crate) usize);

impl ViewId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "view#{}", self.0)
    }
}

/// A rectangular view
#[derive(Debug, Clone)]
pub struct View {
    pub id: ViewId,
    pub name: String,
    /// Frame in superview coordinates
    pub frame: BoundingBox,
    pub superview: Option<ViewId>,
    pub subviews: Vec<ViewId>,
    /// When set, the frame is translated into required constraints
    pub translates_frame: bool,
}

/// Arena of views
#[derive(Debug, Clone, Default)]
pub struct ViewTree {
    views: Vec<View>,
}

impl ViewTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a detached view
    pub fn insert(&mut self, name: impl Into<String>, frame: BoundingBox) -> ViewId {
        let id = ViewId(self.views.len());
        self.views.push(View {
            id,
            name: name.into(),
            frame,
            superview: None,
            subviews: Vec::new(),
            translates_frame: true,
        });
        id
    }

    pub fn get(&self, id: ViewId) -> Option<&View> {
        self.views.get(id.0)
    }

    pub fn get_mut(&mut self, id: ViewId) -> Option<&mut View> {
        self.views.get_mut(id.0)
    }

    pub fn contains(&self, id: ViewId) -> bool {
        id.0 < self.views.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &View> {
        self.views.iter()
    }

    pub fn superview(&self, id: ViewId) -> Option<ViewId> {
        self.get(id).and_then(|v| v.superview)
    }

    /// Whether `ancestor` is `id` or appears in its superview chain
    pub fn is_ancestor(&self, ancestor: ViewId, id: ViewId) -> bool {
        let mut current = Some(id);
        while let Some(view) = current {
            if view == ancestor {
                return true;
            }
            current = self.superview(view);
        }
        false
    }

    /// Link `child` under `parent`, detaching it from any previous superview.
    ///
    /// Callers check both ids and reject cycles beforehand.
    pub(crate) fn attach(&mut self, parent: ViewId, child: ViewId) {
        self.detach(child);
        if let Some(view) = self.get_mut(child) {
            view.superview = Some(parent);
        }
        if let Some(view) = self.get_mut(parent) {
            view.subviews.push(child);
        }
    }

    /// Unlink `child` from its superview; returns the former superview
    pub(crate) fn detach(&mut self, child: ViewId) -> Option<ViewId> {
        let parent = self.get_mut(child)?.superview.take()?;
        if let Some(view) = self.get_mut(parent) {
            view.subviews.retain(|id| *id != child);
        }
        Some(parent)
    }
}
