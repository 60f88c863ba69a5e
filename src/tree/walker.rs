//! Depth-first, pre-order traversal of cabinet trees.
//!
//! Each node is yielded before its own children; siblings keep their stored
//! order. Traversal keeps an explicit stack of sibling iterators instead of
//! recursing, so tree depth is bounded only by memory.

use crate::folder::FolderNode;
use std::iter::FusedIterator;
use std::slice;

/// Iterator over every node reachable from a children slice.
///
/// Created by [`flatten`]. Every call to `flatten` starts a fresh traversal.
#[derive(Debug, Clone)]
pub struct Flatten<'a> {
    inner: Walk<'a>,
}

impl<'a> Iterator for Flatten<'a> {
    type Item = &'a FolderNode;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, node)| node)
    }
}

impl FusedIterator for Flatten<'_> {}

/// Iterator yielding `(depth, node)` pairs in pre-order. Top-level children have depth 0.
#[derive(Debug, Clone)]
pub struct Walk<'a> {
    stack: Vec<slice::Iter<'a, FolderNode>>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = (usize, &'a FolderNode);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let depth = self.stack.len().checked_sub(1)?;
            let siblings = self.stack.last_mut()?;
            match siblings.next() {
                Some(node) => {
                    if let Some(children) = node.children() {
                        if !children.is_empty() {
                            self.stack.push(children.iter());
                        }
                    }
                    return Some((depth, node));
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

impl FusedIterator for Walk<'_> {}

/// Flatten `children` and all their descendants into a single pre-order sequence.
pub fn flatten(children: &[FolderNode]) -> Flatten<'_> {
    Flatten {
        inner: walk(children),
    }
}

/// Like [`flatten`], but also reports how deep each node sits.
pub fn walk(children: &[FolderNode]) -> Walk<'_> {
    Walk {
        stack: vec![children.iter()],
    }
}
