use super::*;

use proptest::prelude::*;
use proptest_derive::Arbitrary;
use std::collections::BTreeSet;

fn validate_trie(trie: &Trie, words: &WordList) {
    let issues = trie.verify_integrity(words);
    assert!(issues.is_empty(), "integrity issues: {issues:#?}");
}

// Four letters keep shared prefixes and duplicates frequent.
fn word_strategy() -> impl Strategy<Value = String> {
    "[a-d]{1,6}"
}

fn prefix_strategy() -> impl Strategy<Value = String> {
    "[a-e]{0,4}"
}

#[derive(Clone, Debug, Arbitrary)]
enum Op {
    #[proptest(weight = 3)]
    Push(#[proptest(strategy = "word_strategy()")] String),
    Complete(#[proptest(strategy = "prefix_strategy()")] String),
}

fn model_complete(model: &[String], prefix: &str) -> Option<BTreeSet<String>> {
    let found: BTreeSet<String> = model
        .iter()
        .filter(|w| w.starts_with(prefix))
        .cloned()
        .collect();
    (!found.is_empty()).then_some(found)
}

fn trie_complete(trie: &Trie, words: &WordList, prefix: &str) -> Option<BTreeSet<String>> {
    let found = trie.complete_words(words, prefix)?;
    let set: BTreeSet<String> = found.iter().map(|w| w.to_string()).collect();
    assert_eq!(set.len(), found.len(), "a word was reported twice");
    Some(set)
}

fn build(raw: &[String]) -> (WordList, Trie) {
    let words = WordList::from_words(raw, Alphabet::Lowercase).unwrap();
    let trie = Trie::build(&words, &Config::default())
        .unwrap()
        .unwrap_or_default();
    (words, trie)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        max_shrink_iters: 10_000,
        .. ProptestConfig::default()
    })]

    #[test]
    fn prop_equivalence(ops in prop::collection::vec(any::<Op>(), 0..=300)) {
        let mut index = Index::new(Vec::<String>::new(), Config::default()).unwrap();
        let mut model: Vec<String> = Vec::new();

        for op in ops {
            match op {
                Op::Push(word) => {
                    index.push(&word).unwrap();
                    model.push(word);
                }
                Op::Complete(prefix) => {
                    let got = trie_complete(index.trie(), index.words(), &prefix);
                    prop_assert_eq!(got, model_complete(&model, &prefix));
                }
            }
        }

        let distinct: BTreeSet<&String> = model.iter().collect();
        prop_assert_eq!(index.len(), distinct.len());
        validate_trie(index.trie(), index.words());
    }

    #[test]
    fn prop_round_trip(raw in prop::collection::vec(word_strategy(), 1..=120)) {
        let (words, trie) = build(&raw);
        validate_trie(&trie, &words);

        for (id, word) in words.iter() {
            let found = trie.complete(&words, word).unwrap();
            let exact: Vec<_> = found
                .iter()
                .filter(|c| words.get(c.word) == Some(word))
                .collect();
            prop_assert_eq!(exact.len(), 1);
            let spelled = trie.spell(&words, exact[0].node);
            prop_assert_eq!(spelled.as_deref(), Some(word));
            prop_assert_eq!(trie.locate(id), Some(exact[0].node));
            prop_assert!(trie.contains(&words, word));
        }
    }

    #[test]
    fn prop_prefix_monotonicity(
        raw in prop::collection::vec(word_strategy(), 1..=80),
        p1 in prefix_strategy(),
        tail in prefix_strategy(),
    ) {
        let (words, trie) = build(&raw);
        let p2 = format!("{p1}{tail}");
        let wide = trie_complete(&trie, &words, &p1).unwrap_or_default();
        let narrow = trie_complete(&trie, &words, &p2).unwrap_or_default();
        prop_assert!(narrow.is_subset(&wide), "{:?} not within {:?}", narrow, wide);
    }

    #[test]
    fn prop_order_does_not_change_answers(
        raw in prop::collection::vec(word_strategy(), 1..=80),
        prefixes in prop::collection::vec(prefix_strategy(), 1..=20),
    ) {
        let (fwd_words, fwd) = build(&raw);
        let reversed: Vec<String> = raw.iter().rev().cloned().collect();
        let (rev_words, rev) = build(&reversed);
        validate_trie(&rev, &rev_words);

        for prefix in &prefixes {
            prop_assert_eq!(
                trie_complete(&fwd, &fwd_words, prefix),
                trie_complete(&rev, &rev_words, prefix)
            );
        }
    }
}
