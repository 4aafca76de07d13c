use anagrams::{signature, AnagramIndex};
use proptest::prelude::*;

proptest! {
    #[test]
    fn signature_is_permutation_invariant(
        (orig, shuffled) in proptest::collection::vec(any::<char>(), 0..16)
            .prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle()))
    ) {
        let a: String = orig.into_iter().collect();
        let b: String = shuffled.into_iter().collect();
        prop_assert_eq!(signature(&a), signature(&b));
    }

    #[test]
    fn every_word_in_its_own_lookup(words in proptest::collection::vec("[a-zA-Z]{1,8}", 0..50)) {
        let index = AnagramIndex::from_words(words.clone());
        for w in &words {
            prop_assert!(index.lookup(w).iter().any(|m| m == w));
        }
    }

    #[test]
    fn group_sizes_sum_to_input_len(words in proptest::collection::vec("[a-zA-Z]{0,6}", 0..50)) {
        let index = AnagramIndex::from_words(words.clone());
        let total: usize = index.groups().map(|(_, g)| g.len()).sum();
        prop_assert_eq!(total, words.len());
        prop_assert_eq!(index.word_count(), words.len());
    }

    // Short alphabet so distinct words collide into shared groups often.
    #[test]
    fn groups_are_exactly_signature_classes(words in proptest::collection::vec("[a-c]{1,3}", 0..30)) {
        let index = AnagramIndex::from_words(words.clone());
        for a in &words {
            for b in &words {
                let same_signature = signature(a) == signature(b);
                let grouped_together = index.lookup(a).contains(b);
                prop_assert_eq!(same_signature, grouped_together);
            }
        }
    }
}
