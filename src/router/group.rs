use super::Router;
use crate::path;

use std::ops::{Deref, DerefMut};

/// Attributes applied to every route registered inside a group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupAttributes {
    pub prefix: Option<String>,
}

impl GroupAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: Some(prefix.into()),
        }
    }
}

impl From<&str> for GroupAttributes {
    fn from(prefix: &str) -> Self {
        Self::with_prefix(prefix)
    }
}

impl From<String> for GroupAttributes {
    fn from(prefix: String) -> Self {
        Self::with_prefix(prefix)
    }
}

/// How prefixes of nested groups combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PrefixMode {
    /// Every enclosing prefix applies, outermost first.
    #[default]
    Nested,
    /// Only the innermost group's prefix applies.
    Innermost,
}

#[derive(Debug, Default)]
pub(super) struct GroupStack {
    frames: Vec<GroupAttributes>,
    mode: PrefixMode,
}

impl GroupStack {
    pub(super) fn new(mode: PrefixMode) -> Self {
        Self {
            frames: Vec::new(),
            mode,
        }
    }

    pub(super) fn mode(&self) -> PrefixMode {
        self.mode
    }

    pub(super) fn depth(&self) -> usize {
        self.frames.len()
    }

    pub(super) fn current_prefix(&self) -> String {
        match self.mode {
            PrefixMode::Nested => self
                .frames
                .iter()
                .filter_map(|f| f.prefix.as_deref())
                .fold(String::new(), |acc, p| path::join(&acc, p)),
            PrefixMode::Innermost => self
                .frames
                .last()
                .and_then(|f| f.prefix.as_deref())
                .map(path::normalize)
                .unwrap_or_default(),
        }
    }
}

/// Keeps a group frame pushed for as long as it lives.
///
/// The frame is popped on drop, so a panicking or failing group body can not
/// leak its prefix into later registrations.
pub(super) struct GroupGuard<'r, R> {
    router: &'r mut Router<R>,
}

impl<'r, R> GroupGuard<'r, R> {
    pub(super) fn enter(router: &'r mut Router<R>, attributes: GroupAttributes) -> Self {
        router.groups.frames.push(attributes);
        Self { router }
    }
}

impl<R> Drop for GroupGuard<'_, R> {
    fn drop(&mut self) {
        self.router.groups.frames.pop();
    }
}

impl<R> Deref for GroupGuard<'_, R> {
    type Target = Router<R>;
    fn deref(&self) -> &Router<R> {
        self.router
    }
}

impl<R> DerefMut for GroupGuard<'_, R> {
    fn deref_mut(&mut self) -> &mut Router<R> {
        self.router
    }
}

#[test]
fn group_prefix_modes() {
    let mut stack = GroupStack::new(PrefixMode::Nested);
    assert_eq!(stack.current_prefix(), "");

    stack.frames.push(GroupAttributes::with_prefix("/admin/"));
    stack.frames.push(GroupAttributes::new());
    stack.frames.push(GroupAttributes::with_prefix("users"));
    assert_eq!(stack.current_prefix(), "admin/users");

    stack.mode = PrefixMode::Innermost;
    assert_eq!(stack.current_prefix(), "users");

    stack.frames.push(GroupAttributes::new());
    assert_eq!(stack.current_prefix(), "");
    assert_eq!(stack.depth(), 4);
}
