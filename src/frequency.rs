use std::collections::HashMap;
use std::hash::Hash;

/// Occurrence counts per symbol.
///
/// Entries are kept in order of first appearance, which is what the tree
/// builder uses to break ties between equal weights.
#[derive(Debug, Clone)]
pub struct FrequencyTable<S> {
    entries: Vec<(S, usize)>,
    index: HashMap<S, usize>,
}

// `index` is derived from `entries`.
impl<S: PartialEq> PartialEq for FrequencyTable<S> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<S: Eq> Eq for FrequencyTable<S> {}

impl<S: Eq + Hash + Clone> FrequencyTable<S> {
    pub fn from_symbols<I>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
    {
        let mut table = Self {
            entries: Vec::new(),
            index: HashMap::new(),
        };
        for symbol in symbols {
            table.add(symbol, 1);
        }
        table
    }

    pub fn get(&self, symbol: &S) -> Option<usize> {
        self.index.get(symbol).map(|&i| self.entries[i].1)
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts, i.e. the length of the counted input.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&S, usize)> {
        self.entries.iter().map(|(symbol, count)| (symbol, *count))
    }

    /// Sums counts per symbol. Symbols new to `self` are appended in the
    /// order `other` first saw them.
    pub fn merge(mut self, other: Self) -> Self {
        for (symbol, count) in other.entries {
            self.add(symbol, count);
        }
        self
    }

    fn add(&mut self, symbol: S, count: usize) {
        match self.index.get(&symbol) {
            Some(&i) => self.entries[i].1 += count,
            None => {
                self.index.insert(symbol.clone(), self.entries.len());
                self.entries.push((symbol, count));
            }
        }
    }
}

impl FrequencyTable<char> {
    pub fn from_text(text: &str) -> Self {
        Self::from_symbols(text.chars())
    }
}

impl<S: Eq + Hash + Clone> FromIterator<S> for FrequencyTable<S> {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_symbols(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_abracadabra() {
        let freq = FrequencyTable::from_text("abracadabra");
        let counted: Vec<(char, usize)> = freq.iter().map(|(&c, n)| (c, n)).collect();
        assert_eq!(
            counted,
            vec![('a', 5), ('b', 2), ('r', 2), ('c', 1), ('d', 1)]
        );
        assert_eq!(freq.total(), 11);
        assert_eq!(freq.get(&'z'), None);
    }

    #[test]
    fn empty_input_gives_empty_table() {
        let freq = FrequencyTable::from_text("");
        assert!(freq.is_empty());
        assert_eq!(freq.total(), 0);
    }

    #[test]
    fn merge_sums_counts_and_keeps_order() {
        let left = FrequencyTable::from_text("abca");
        let right = FrequencyTable::from_text("dcc");
        let merged = left.merge(right);

        let counted: Vec<(char, usize)> = merged.iter().map(|(&c, n)| (c, n)).collect();
        assert_eq!(counted, vec![('a', 2), ('b', 1), ('c', 3), ('d', 1)]);
        assert_eq!(merged, FrequencyTable::from_text("abcadcc"));
    }

    #[test]
    fn merge_is_associative() {
        let parts = ["hello", " wor", "ld!"];
        let a = FrequencyTable::from_text(parts[0]);
        let b = FrequencyTable::from_text(parts[1]);
        let c = FrequencyTable::from_text(parts[2]);

        let left = a.clone().merge(b.clone()).merge(c.clone());
        let right = a.merge(b.merge(c));
        assert_eq!(left, right);
    }

    #[test]
    fn collects_from_iterator() {
        let freq: FrequencyTable<u8> = b"xyzzy".iter().copied().collect();
        assert_eq!(freq.get(&b'y'), Some(2));
        assert_eq!(freq.get(&b'z'), Some(2));
        assert_eq!(freq.len(), 3);
    }
}
