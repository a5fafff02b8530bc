use std::collections::HashMap;
use std::hash::Hash;

use bitvec::prelude::*;

use crate::error::{CodeError, Result};
use crate::frequency::FrequencyTable;
use crate::huffman::{CodingTree, Node};

/// Packed, MSB-first bit sequence.
pub type Bits = BitVec<u8, Msb0>;

/// Symbol to codeword mapping, one entry per leaf of the tree it was
/// derived from.
#[derive(Debug, Clone)]
pub struct CodeTable<S> {
    entries: Vec<(S, Bits)>,
    index: HashMap<S, usize>,
}

// `index` is derived from `entries`.
impl<S: PartialEq> PartialEq for CodeTable<S> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<S: Eq> Eq for CodeTable<S> {}

impl<S: Eq + Hash + Clone> CodeTable<S> {
    /// Depth-first walk appending `0` for every left edge and `1` for every
    /// right edge. Leaves are recorded left before right.
    pub fn derive(tree: &CodingTree<S>) -> Self {
        let mut entries = Vec::new();
        let mut index = HashMap::new();
        let mut stack = vec![(tree.root(), Bits::new())];

        while let Some((node, code)) = stack.pop() {
            match node {
                Node::Leaf { symbol, .. } => {
                    index.insert(symbol.clone(), entries.len());
                    entries.push((symbol.clone(), code));
                }
                Node::Internal { left, right, .. } => {
                    if let Some(right) = right {
                        let mut rcode = code.clone();
                        rcode.push(true);
                        stack.push((&**right, rcode));
                    }
                    let mut lcode = code;
                    lcode.push(false);
                    stack.push((&**left, lcode));
                }
            }
        }

        Self { entries, index }
    }

    pub fn get(&self, symbol: &S) -> Option<&BitSlice<u8, Msb0>> {
        self.index
            .get(symbol)
            .map(|&i| self.entries[i].1.as_bitslice())
    }

    pub fn contains(&self, symbol: &S) -> bool {
        self.index.contains_key(symbol)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&S, &BitSlice<u8, Msb0>)> {
        self.entries
            .iter()
            .map(|(symbol, code)| (symbol, code.as_bitslice()))
    }

    /// Concatenates the codeword of every symbol of `input`, in order.
    pub fn encode(&self, input: &[S]) -> Result<Bits> {
        let mut encoded = Bits::new();
        for (position, symbol) in input.iter().enumerate() {
            let Some(code) = self.get(symbol) else {
                return Err(CodeError::UnknownSymbol { position });
            };
            encoded.extend_from_bitslice(code);
        }

        tracing::trace!(symbols = input.len(), bits = encoded.len(), "encoded");
        Ok(encoded)
    }

    /// Bit length of encoding an input with these frequencies. Symbols
    /// without a codeword contribute nothing.
    pub fn encoded_len(&self, freq: &FrequencyTable<S>) -> usize {
        freq.iter()
            .filter_map(|(symbol, count)| self.get(symbol).map(|code| code.len() * count))
            .sum()
    }
}

/// Renders bits as a string of `0` and `1`.
pub fn bits_to_string(bits: &BitSlice<u8, Msb0>) -> String {
    bits.iter()
        .by_vals()
        .map(|bit| if bit { '1' } else { '0' })
        .collect()
}

pub fn parse_bits(text: &str) -> Result<Bits> {
    text.chars()
        .enumerate()
        .map(|(position, found)| match found {
            '0' => Ok(false),
            '1' => Ok(true),
            _ => Err(CodeError::InvalidDigit { position, found }),
        })
        .collect()
}
