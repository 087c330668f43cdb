//! Digit-indexed prefix tree over the registered code set
//!
//! Arena-based layout: nodes live in a flat vector and reference their
//! children by index. This keeps node identity stable across lookups and
//! avoids the allocation overhead of nested per-node maps.

use alloc::vec::Vec;

use crate::{HsnError, Result};

/// Identifier of a node in the trie arena
pub type NodeId = u32;

/// Children per node, one slot per decimal digit
pub const FANOUT: usize = 10;

#[derive(Debug, Clone)]
struct TrieNode {
    children: [Option<NodeId>; FANOUT],
    /// Marks the end of a complete registered code
    terminal: bool,
}

impl TrieNode {
    const fn new() -> Self {
        Self {
            children: [None; FANOUT],
            terminal: false,
        }
    }
}

/// Prefix tree keyed by decimal digits with a per-node completion flag
///
/// The root node represents the empty prefix. A code is registered when the
/// node reached by following its digits carries the terminal flag.
#[derive(Debug, Clone)]
pub struct DigitTrie {
    nodes: Vec<TrieNode>,
    code_count: usize,
}

impl DigitTrie {
    /// Root node, representing the empty prefix
    pub const ROOT: NodeId = 0;

    /// Create an empty trie containing only the root
    pub fn new() -> Self {
        let mut nodes = Vec::new();
        nodes.push(TrieNode::new());
        Self {
            nodes,
            code_count: 0,
        }
    }

    /// Insert a digit-only code and mark its final node complete.
    ///
    /// Returns the terminal node's identifier. Rejects empty input and any
    /// non-digit character before touching the arena, so a failed insert
    /// leaves the trie unchanged.
    pub fn insert(&mut self, code: &str) -> Result<NodeId> {
        if code.is_empty() || !code.bytes().all(|b| b.is_ascii_digit()) {
            return Err(HsnError::NonDigit);
        }

        let mut node = Self::ROOT;
        for byte in code.bytes() {
            let digit = (byte - b'0') as usize;
            node = match self.nodes[node as usize].children[digit] {
                Some(child) => child,
                None => {
                    let child = self.nodes.len() as NodeId;
                    self.nodes.push(TrieNode::new());
                    self.nodes[node as usize].children[digit] = Some(child);
                    child
                }
            };
        }

        let last = &mut self.nodes[node as usize];
        if !last.terminal {
            last.terminal = true;
            self.code_count += 1;
        }
        Ok(node)
    }

    /// Child of `node` along `digit`, if that edge exists
    pub fn child(&self, node: NodeId, digit: char) -> Option<NodeId> {
        let digit = digit.to_digit(10)? as usize;
        self.nodes.get(node as usize)?.children[digit]
    }

    /// Whether `node` terminates a complete registered code
    pub fn is_terminal(&self, node: NodeId) -> bool {
        self.nodes
            .get(node as usize)
            .map_or(false, |n| n.terminal)
    }

    /// Follow `prefix` from the root, returning the node it ends on
    pub fn walk(&self, prefix: &str) -> Option<NodeId> {
        let mut node = Self::ROOT;
        for ch in prefix.chars() {
            node = self.child(node, ch)?;
        }
        Some(node)
    }

    /// Whether `code` has a complete path ending in a terminal node
    pub fn contains(&self, code: &str) -> bool {
        self.walk(code).map_or(false, |node| self.is_terminal(node))
    }

    /// Number of distinct codes marked complete
    pub fn code_count(&self) -> usize {
        self.code_count
    }

    /// Number of allocated nodes, including the root
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

impl Default for DigitTrie {
    fn default() -> Self {
        Self::new()
    }
}
