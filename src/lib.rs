//! Frequency-driven prefix-free binary codes.
//!
//! ```
//! let input: Vec<char> = "abracadabra".chars().collect();
//! let (tree, table) = huffcode::build_code(&input)?;
//! let bits = huffcode::encode(&input, &table)?;
//! assert_eq!(bits.len(), 23);
//! assert_eq!(huffcode::decode(&tree, &bits)?, input);
//! # Ok::<(), huffcode::CodeError>(())
//! ```

pub mod code_table;
pub mod error;
pub mod frequency;
pub mod huffman;

use std::hash::Hash;

use bitvec::prelude::*;

pub use code_table::{Bits, CodeTable, bits_to_string, parse_bits};
pub use error::{CodeError, Result};
pub use frequency::FrequencyTable;
pub use huffman::{CodingTree, HuffmanCode, Node};

/// Counts `input` and builds its coding tree and code table. Fails with
/// [`CodeError::InvalidInput`] when `input` is empty.
pub fn build_code<S: Eq + Hash + Clone>(input: &[S]) -> Result<(CodingTree<S>, CodeTable<S>)> {
    Ok(HuffmanCode::new(input)?.into_parts())
}

pub fn encode<S: Eq + Hash + Clone>(input: &[S], table: &CodeTable<S>) -> Result<Bits> {
    table.encode(input)
}

pub fn decode<S: Eq + Hash + Clone>(tree: &CodingTree<S>, bits: &BitSlice<u8, Msb0>) -> Result<Vec<S>> {
    tree.decode(bits)
}
