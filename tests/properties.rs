use huffcode::{FrequencyTable, build_code, decode, encode};
use proptest::prelude::*;

proptest! {
    #[test]
    fn round_trip_bytes(input in proptest::collection::vec(any::<u8>(), 1..512)) {
        let (tree, table) = build_code(&input).unwrap();
        let bits = encode(&input, &table).unwrap();
        prop_assert_eq!(decode(&tree, &bits).unwrap(), input);
    }

    #[test]
    fn round_trip_small_alphabet(text in "[a-e]{1,128}") {
        let input: Vec<char> = text.chars().collect();
        let (tree, table) = build_code(&input).unwrap();
        let bits = encode(&input, &table).unwrap();
        prop_assert_eq!(decode(&tree, &bits).unwrap(), input);
    }

    #[test]
    fn codewords_are_prefix_free(input in proptest::collection::vec(0u8..32, 1..256)) {
        let (_, table) = build_code(&input).unwrap();
        let codes: Vec<_> = table.iter().map(|(_, code)| code.to_bitvec()).collect();
        for (i, a) in codes.iter().enumerate() {
            prop_assert!(!a.is_empty());
            for (j, b) in codes.iter().enumerate() {
                if i != j && a.len() <= b.len() {
                    prop_assert_ne!(&b[..a.len()], a.as_bitslice());
                }
            }
        }
    }

    #[test]
    fn root_weight_is_input_length(input in proptest::collection::vec(0u8..16, 1..256)) {
        let (tree, table) = build_code(&input).unwrap();
        let freq = FrequencyTable::from_symbols(input.iter().copied());
        prop_assert_eq!(tree.weight(), input.len());
        prop_assert_eq!(freq.total(), input.len());
        prop_assert_eq!(tree.leaf_count(), freq.len());
        prop_assert_eq!(table.len(), freq.len());
    }

    #[test]
    fn more_frequent_symbols_never_get_longer_codes(
        input in proptest::collection::vec(0u8..24, 1..512),
    ) {
        let (_, table) = build_code(&input).unwrap();
        let freq = FrequencyTable::from_symbols(input.iter().copied());
        for (a, fa) in freq.iter() {
            for (b, fb) in freq.iter() {
                if fa > fb {
                    let la = table.get(a).unwrap().len();
                    let lb = table.get(b).unwrap().len();
                    prop_assert!(la <= lb, "freq {fa} got {la} bits, freq {fb} got {lb} bits");
                }
            }
        }
    }

    #[test]
    fn same_input_same_code(input in proptest::collection::vec(0u8..8, 1..128)) {
        let first = build_code(&input).unwrap();
        let second = build_code(&input).unwrap();
        prop_assert_eq!(first.1, second.1);
        prop_assert_eq!(first.0, second.0);
    }
}
