//! Code table generation
//!
//! Walks the prefix-code tree depth-first, recording the root-to-leaf path of
//! every symbol: `0` for a left descent, `1` for a right descent. Codes are
//! prefix-free by construction since every code is a distinct leaf path.

use crate::tree::{HuffmanNode, HuffmanTree};
use std::collections::HashMap;

/// Symbol-to-code mapping and its inverse
///
/// Produced from a [`HuffmanTree`]; every leaf receives a non-empty code. A
/// bare-leaf tree (single distinct symbol) gets the one-bit code `0`, since a
/// zero-length code could not be distinguished during decode.
#[derive(Debug, Clone, Default)]
pub struct CodeTable {
    codes: HashMap<u8, Vec<bool>>,
    symbols: HashMap<Vec<bool>, u8>,
    max_code_length: usize,
}

impl CodeTable {
    /// Generate the code table for a tree
    pub fn from_tree(tree: &HuffmanTree) -> Self {
        let mut table = CodeTable::default();
        match tree.root() {
            // single-symbol tree still needs a one-bit code
            HuffmanNode::Leaf { symbol, .. } => table.record(*symbol, vec![false]),
            root @ HuffmanNode::Internal { .. } => table.walk(root, Vec::new()),
        }
        table
    }

    fn walk(&mut self, node: &HuffmanNode, path: Vec<bool>) {
        match node {
            HuffmanNode::Leaf { symbol, .. } => self.record(*symbol, path),
            HuffmanNode::Internal { left, right, .. } => {
                let mut left_path = path.clone();
                left_path.push(false);
                self.walk(left, left_path);

                let mut right_path = path;
                right_path.push(true);
                self.walk(right, right_path);
            }
        }
    }

    fn record(&mut self, symbol: u8, code: Vec<bool>) {
        self.max_code_length = self.max_code_length.max(code.len());
        self.symbols.insert(code.clone(), symbol);
        self.codes.insert(symbol, code);
    }

    /// Get the code assigned to a symbol
    pub fn code(&self, symbol: u8) -> Option<&[bool]> {
        self.codes.get(&symbol).map(Vec::as_slice)
    }

    /// Resolve a full code back to its symbol
    pub fn symbol(&self, code: &[bool]) -> Option<u8> {
        self.symbols.get(code).copied()
    }

    /// Get the number of coded symbols
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Get the length of the longest code
    pub fn max_code_length(&self) -> usize {
        self.max_code_length
    }

    /// Iterate over `(symbol, code)` pairs in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (u8, &[bool])> + '_ {
        self.codes.iter().map(|(&s, code)| (s, code.as_slice()))
    }
}
