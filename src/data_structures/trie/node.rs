//! Node implementation for the key trie.
//!
//! Each node exclusively owns its children, so dropping a node drops its
//! whole subtree. Every operation here is a plain recursive walk; bounding
//! the depth is the caller's job.

use fnv::FnvBuildHasher;
use hashbrown::HashMap;

/// Child table keyed by the next byte of the key.
pub(crate) type Children = HashMap<u8, TrieNode, FnvBuildHasher>;

/// A node in the key trie.
///
/// A node is reached by consuming some byte sequence from the root. It is
/// terminal when that sequence is itself a stored key.
#[derive(Debug, Default, Clone)]
pub struct TrieNode {
    /// Map of next byte to child node
    pub(crate) children: Children,

    /// Whether the path to this node is a stored key
    pub(crate) terminal: bool,
}

impl TrieNode {
    /// Creates a new empty trie node.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether this node marks the end of a stored key.
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// A node with no children that is not terminal carries no information
    /// and must not stay attached to the tree.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty() && !self.terminal
    }

    /// Marks `key` as stored below this node, creating nodes along the way.
    ///
    /// Returns `true` if the terminal flag flipped from unset to set.
    pub(crate) fn insert(&mut self, key: &[u8]) -> bool {
        match key.split_first() {
            None => !std::mem::replace(&mut self.terminal, true),
            Some((byte, rest)) => self.children.entry(*byte).or_default().insert(rest),
        }
    }

    /// Clears `key` below this node and prunes children left empty on the
    /// way back up.
    ///
    /// Returns `true` if the terminal flag flipped from set to unset.
    pub(crate) fn remove(&mut self, key: &[u8]) -> bool {
        match key.split_first() {
            None => std::mem::replace(&mut self.terminal, false),
            Some((byte, rest)) => {
                let Some(child) = self.children.get_mut(byte) else {
                    return false;
                };

                let changed = child.remove(rest);
                if changed && child.is_empty() {
                    self.children.remove(byte);
                }

                changed
            }
        }
    }

    /// Follows `path` from this node, returning the node it ends at.
    pub(crate) fn descend(&self, path: &[u8]) -> Option<&TrieNode> {
        path.iter()
            .try_fold(self, |node, byte| node.children.get(byte))
    }

    /// Number of stored keys in this subtree, including this node.
    pub fn size(&self) -> usize {
        usize::from(self.terminal) + self.children.values().map(TrieNode::size).sum::<usize>()
    }

    /// Number of nodes below this one.
    pub(crate) fn descendants(&self) -> usize {
        self.children
            .values()
            .map(|child| 1 + child.descendants())
            .sum()
    }

    /// Depth-first collection of every key in this subtree.
    ///
    /// `path` holds the bytes that lead to this node and is restored before
    /// returning.
    pub(crate) fn collect_keys(&self, path: &mut Vec<u8>, out: &mut Vec<Vec<u8>>) {
        if self.terminal {
            out.push(path.clone());
        }

        for (byte, child) in &self.children {
            path.push(*byte);
            child.collect_keys(path, out);
            path.pop();
        }
    }
}
