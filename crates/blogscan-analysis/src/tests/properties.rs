//! Property-based tests for the analysis pipeline.

use proptest::prelude::*;

use crate::{
    Document, FrequencyTable, StopWords, TopN, WordFilter, WordFrequencyAnalyzer, normalize,
    top_words,
};

fn word() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z]{1,8}",
        "[0-9]{1,4}",
        Just("the".to_string()),
        Just("and".to_string()),
        Just("with".to_string()),
    ]
}

fn article_text() -> impl Strategy<Value = String> {
    prop::collection::vec((word(), "[ ,.!?;:\\-]{1,3}"), 0..40).prop_map(|parts| {
        parts
            .into_iter()
            .map(|(w, sep)| format!("{w}{sep}"))
            .collect::<String>()
    })
}

proptest! {
    #[test]
    fn normalize_is_idempotent(s in any::<String>()) {
        let once = normalize(&s);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn normalized_text_has_only_word_chars_and_single_spaces(s in any::<String>()) {
        let out = normalize(&s);
        prop_assert!(out.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == ' '));
        prop_assert!(!out.contains("  "));
        prop_assert_eq!(out.trim(), out.as_str());
    }

    #[test]
    fn filtered_words_never_contain_noise(text in article_text()) {
        let filter = WordFilter::default();
        let stop = StopWords::english();
        for w in filter.extract_words(&normalize(&text)) {
            prop_assert!(w.len() >= 3, "short word {}", w);
            prop_assert!(!stop.contains(&w), "stop word {}", w);
            prop_assert!(!w.chars().all(|c| c.is_ascii_digit()), "numeric word {}", w);
        }
    }

    #[test]
    fn combined_frequency_is_sum_of_documents(texts in prop::collection::vec(article_text(), 0..6)) {
        let docs = texts
            .iter()
            .enumerate()
            .map(|(i, t)| Document::new(i + 1).with_text(t.clone()))
            .collect();
        let batch = WordFrequencyAnalyzer::default().analyze_batch(docs, TopN::default());

        for (w, count) in batch.combined_frequency.iter() {
            let sum: usize = batch
                .articles
                .iter()
                .map(|d| d.analysis.as_ref().map_or(0, |a| a.frequency.get(w)))
                .sum();
            prop_assert_eq!(count, sum);
        }
        for doc in &batch.articles {
            let analysis = doc.analysis.as_ref().unwrap();
            for (w, _) in analysis.frequency.iter() {
                prop_assert!(batch.combined_frequency.contains(w));
            }
        }
    }

    #[test]
    fn ranking_is_sorted_bounded_and_faithful(
        tokens in prop::collection::vec("[a-e]{3}", 0..60),
        n in 0usize..10,
    ) {
        let table = FrequencyTable::from_tokens(tokens);
        let ranked = top_words(&table, n);

        prop_assert_eq!(ranked.len(), n.min(table.len()));
        for pair in ranked.windows(2) {
            prop_assert!(pair[0].count >= pair[1].count);
        }
        for r in &ranked {
            prop_assert_eq!(table.get(&r.word), r.count);
        }
    }

    #[test]
    fn negative_top_counts_are_rejected(n in i64::MIN..0) {
        prop_assert!(TopN::try_from(n).is_err());
    }
}
