use lazy_static::lazy_static;
use regex::Regex;
use unidecode::unidecode;

use crate::data::models::Word;

lazy_static! {
    static ref PUNCTUATION_RE: Regex = Regex::new(r"[.,;:!?¿؟]").unwrap();
}

pub struct SearchEngine;

impl SearchEngine {
    /// Order candidate rows by relevance to `query`. Candidates come from a
    /// LIKE prefilter, so nothing is dropped here; weak matches just sink to
    /// the bottom.
    pub fn rank(query: &str, words: Vec<Word>) -> Vec<Word> {
        let normalized = Self::normalize(query);

        let mut scored: Vec<(Word, f32)> = words
            .into_iter()
            .map(|word| {
                let score = Self::best_score(&normalized, &word);
                (word, score)
            })
            .collect();

        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap());
        scored.into_iter().map(|(word, _)| word).collect()
    }

    /// Best similarity across headword, diacritic-stripped headword and both
    /// glosses.
    pub fn best_score(normalized_query: &str, word: &Word) -> f32 {
        let mut options = vec![
            Self::normalize(&word.burushaski),
            Self::strip_diacritics(&word.burushaski),
            Self::normalize(&word.english),
        ];
        if let Some(urdu) = &word.urdu {
            options.push(urdu.clone());
        }

        options
            .iter()
            .map(|option| Self::similarity(normalized_query, option))
            .fold(0.0, f32::max)
    }

    fn normalize(text: &str) -> String {
        PUNCTUATION_RE.replace_all(&text.to_lowercase(), "").to_string()
    }

    /// Burushaski orthography leans on diacritics (ć, ṣ, ṭ). Reducing to
    /// plain ASCII lets "co" find "ćo".
    pub fn strip_diacritics(text: &str) -> String {
        unidecode(text)
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || c.is_ascii_whitespace())
            .collect()
    }

    pub fn similarity(a: &str, b: &str) -> f32 {
        if a.is_empty() || b.is_empty() {
            return 0.0;
        }

        if a == b {
            return 1.0;
        }

        // Check for partial matches with higher weight
        if b.contains(a) {
            let ratio = a.len() as f32 / b.len() as f32;
            return 0.6 + (ratio * 0.4);
        }

        // Check for reverse partial match
        if a.contains(b) {
            let ratio = b.len() as f32 / a.len() as f32;
            return 0.5 + (ratio * 0.3);
        }

        // Calculate Jaro-Winkler similarity for better partial matching
        let jaro_winkler = strsim::jaro_winkler(a, b);
        if jaro_winkler > 0.85 {
            return jaro_winkler as f32;
        }

        // Length-based similarity as fallback
        let len_sim = 1.0 - ((a.len() as f32 - b.len() as f32).abs() / (a.len() + b.len()) as f32);
        len_sim * 0.3
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn word(burushaski: &str, english: &str, urdu: Option<&str>) -> Word {
        Word {
            id: 0,
            burushaski: burushaski.to_string(),
            english: english.to_string(),
            urdu: urdu.map(str::to_string),
            word_class: None,
            dialect: "hunza".to_string(),
            pronunciation_ipa: None,
            audio_file: None,
            example_sentence: None,
            example_translation: None,
            notes: None,
            verified: false,
            created_at: NaiveDateTime::default(),
        }
    }

    #[test]
    fn exact_match_scores_highest() {
        assert_eq!(SearchEngine::similarity("water", "water"), 1.0);
        assert!(SearchEngine::similarity("water", "water buffalo") < 1.0);
    }

    #[test]
    fn exact_headword_ranks_first() {
        let ranked = SearchEngine::rank(
            "ćo",
            vec![
                word("harís", "bread", None),
                word("ćhomár", "iron pot", None),
                word("ćo", "water", None),
            ],
        );
        assert_eq!(ranked[0].burushaski, "ćo");
    }

    #[test]
    fn diacritic_stripped_query_finds_headword() {
        let target = word("ćo", "water", None);
        let score = SearchEngine::best_score("co", &target);
        assert_eq!(score, 1.0);
    }

    #[test]
    fn rank_keeps_weak_candidates() {
        // A LIKE prefilter already decided these are matches; ranking must
        // not drop any of them.
        let ranked = SearchEngine::rank(
            "a",
            vec![word("harís", "bread", None), word("áa", "yes", None)],
        );
        assert_eq!(ranked.len(), 2);
    }

    #[test]
    fn punctuation_is_ignored() {
        let target = word("be bila?", "How are you?", None);
        let score = SearchEngine::best_score("how are you", &target);
        assert_eq!(score, 1.0);
    }
}
