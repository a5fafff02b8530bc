use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt;
use std::hash::Hash;

use bitvec::prelude::*;

use crate::code_table::{Bits, CodeTable};
use crate::error::{CodeError, Result};
use crate::frequency::FrequencyTable;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node<S> {
    Leaf {
        symbol: S,
        weight: usize,
    },
    /// `right` is `None` only in the root synthesized over a lone leaf, see
    /// [`CodingTree::build`].
    Internal {
        weight: usize,
        left: Box<Node<S>>,
        right: Option<Box<Node<S>>>,
    },
}

impl<S> Node<S> {
    pub fn weight(&self) -> usize {
        match self {
            Node::Leaf { weight, .. } | Node::Internal { weight, .. } => *weight,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    /// Child reached by `bit`: `false` goes left, `true` goes right.
    pub fn child(&self, bit: bool) -> Option<&Node<S>> {
        match self {
            Node::Leaf { .. } => None,
            Node::Internal { left, right, .. } => {
                if bit {
                    right.as_deref()
                } else {
                    Some(left)
                }
            }
        }
    }

    fn merge(left: Self, right: Self) -> Self {
        Node::Internal {
            weight: left.weight() + right.weight(),
            left: Box::new(left),
            right: Some(Box::new(right)),
        }
    }
}

// Queue entry. `seq` is the insertion number: leaves in first-appearance
// order, then merged nodes in creation order.
struct Pending<S> {
    weight: usize,
    seq: usize,
    node: Node<S>,
}

impl<S> PartialEq for Pending<S> {
    fn eq(&self, other: &Self) -> bool {
        self.weight == other.weight && self.seq == other.seq
    }
}

impl<S> Eq for Pending<S> {}

impl<S> Ord for Pending<S> {
    // BinaryHeap is a max-heap, so lowest (weight, seq) must compare greatest.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<S> PartialOrd for Pending<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Binary coding tree with symbols at the leaves. The root is always an
/// internal node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodingTree<S> {
    root: Node<S>,
}

impl<S: Eq + Hash + Clone> CodingTree<S> {
    /// Greedy lowest-weight-pair merge. Ties go to the node that entered the
    /// queue first, and the first node popped becomes the left child.
    ///
    /// A table with a single symbol yields a root whose only child is that
    /// symbol's leaf on the left, giving it the codeword `0`.
    pub fn build(freq: &FrequencyTable<S>) -> Result<Self> {
        let mut pqueue = BinaryHeap::with_capacity(freq.len());
        let mut seq = 0;
        for (symbol, weight) in freq.iter() {
            pqueue.push(Pending {
                weight,
                seq,
                node: Node::Leaf {
                    symbol: symbol.clone(),
                    weight,
                },
            });
            seq += 1;
        }

        while pqueue.len() > 1 {
            let (Some(ln), Some(rn)) = (pqueue.pop(), pqueue.pop()) else {
                unreachable!("queue holds at least two nodes");
            };
            let node = Node::merge(ln.node, rn.node);
            pqueue.push(Pending {
                weight: node.weight(),
                seq,
                node,
            });
            seq += 1;
        }

        let Some(last) = pqueue.pop() else {
            return Err(CodeError::InvalidInput);
        };
        let root = match last.node {
            leaf @ Node::Leaf { .. } => Node::Internal {
                weight: leaf.weight(),
                left: Box::new(leaf),
                right: None,
            },
            internal => internal,
        };

        tracing::debug!(
            symbols = freq.len(),
            weight = root.weight(),
            "built coding tree"
        );
        Ok(Self { root })
    }

    pub fn code_table(&self) -> CodeTable<S> {
        CodeTable::derive(self)
    }

    /// Walks the tree one bit at a time, emitting a symbol at every leaf and
    /// restarting from the root.
    pub fn decode(&self, bits: &BitSlice<u8, Msb0>) -> Result<Vec<S>> {
        let mut decoded = Vec::new();
        let mut cursor = &self.root;
        let mut dangling = 0;

        for (position, bit) in bits.iter().by_vals().enumerate() {
            let Some(next) = cursor.child(bit) else {
                return Err(CodeError::InvalidCode { position });
            };
            cursor = next;
            dangling += 1;

            if let Node::Leaf { symbol, .. } = cursor {
                decoded.push(symbol.clone());
                cursor = &self.root;
                dangling = 0;
            }
        }

        if dangling != 0 {
            return Err(CodeError::TruncatedInput {
                consumed: bits.len(),
                dangling,
            });
        }

        tracing::trace!(bits = bits.len(), symbols = decoded.len(), "decoded");
        Ok(decoded)
    }
}

impl<S> CodingTree<S> {
    pub fn root(&self) -> &Node<S> {
        &self.root
    }

    /// Weight of the root, equal to the length of the counted input.
    pub fn weight(&self) -> usize {
        self.root.weight()
    }

    pub fn leaf_count(&self) -> usize {
        self.nodes().filter(|(node, _)| node.is_leaf()).count()
    }

    /// Length of the longest codeword.
    pub fn depth(&self) -> usize {
        self.nodes()
            .filter(|(node, _)| node.is_leaf())
            .map(|(_, depth)| depth)
            .max()
            .unwrap_or(0)
    }

    /// Pre-order, left before right, paired with the depth of each node.
    fn nodes(&self) -> impl Iterator<Item = (&Node<S>, usize)> {
        let mut stack = vec![(&self.root, 0)];
        std::iter::from_fn(move || {
            let (node, depth) = stack.pop()?;
            if let Node::Internal { left, right, .. } = node {
                if let Some(right) = right {
                    stack.push((&**right, depth + 1));
                }
                stack.push((&**left, depth + 1));
            }
            Some((node, depth))
        })
    }
}

impl<S: fmt::Debug> fmt::Display for CodingTree<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut stack = vec![(&self.root, 0, "root")];
        while let Some((node, depth, label)) = stack.pop() {
            let indent = "  ".repeat(depth);
            match node {
                Node::Leaf { symbol, weight } => {
                    writeln!(f, "{indent}{label}-> Leaf: {symbol:?} [weight: {weight}]")?
                }
                Node::Internal {
                    weight,
                    left,
                    right,
                } => {
                    writeln!(f, "{indent}{label}-> Internal [weight: {weight}]")?;
                    if let Some(right) = right {
                        stack.push((&**right, depth + 1, "R"));
                    }
                    stack.push((&**left, depth + 1, "L"));
                }
            }
        }
        Ok(())
    }
}

/// A coding tree together with the code table derived from it.
#[derive(Debug, Clone)]
pub struct HuffmanCode<S> {
    tree: CodingTree<S>,
    table: CodeTable<S>,
}

impl<S: Eq + Hash + Clone> HuffmanCode<S> {
    pub fn new(input: &[S]) -> Result<Self> {
        let freq = FrequencyTable::from_symbols(input.iter().cloned());
        Self::from_frequencies(&freq)
    }

    pub fn from_frequencies(freq: &FrequencyTable<S>) -> Result<Self> {
        let tree = CodingTree::build(freq)?;
        let table = tree.code_table();
        Ok(Self { tree, table })
    }

    pub fn tree(&self) -> &CodingTree<S> {
        &self.tree
    }

    pub fn table(&self) -> &CodeTable<S> {
        &self.table
    }

    pub fn into_parts(self) -> (CodingTree<S>, CodeTable<S>) {
        (self.tree, self.table)
    }

    pub fn encode(&self, input: &[S]) -> Result<Bits> {
        self.table.encode(input)
    }

    pub fn decode(&self, bits: &BitSlice<u8, Msb0>) -> Result<Vec<S>> {
        self.tree.decode(bits)
    }
}

impl HuffmanCode<char> {
    pub fn from_text(text: &str) -> Result<Self> {
        Self::from_frequencies(&FrequencyTable::from_text(text))
    }

    pub fn encode_text(&self, text: &str) -> Result<Bits> {
        self.table.encode(&text.chars().collect::<Vec<_>>())
    }

    pub fn decode_text(&self, bits: &BitSlice<u8, Msb0>) -> Result<String> {
        Ok(self.tree.decode(bits)?.into_iter().collect())
    }
}
