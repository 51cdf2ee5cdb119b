use diesel::prelude::*;

use crate::data::models::{Phrase, TranslationResponse, TranslationSuggestion, Word};
use crate::data::repositories::{PhraseRepository, WordRepository};
use crate::features::search::SearchEngine;

/// Characters that only occur in romanized Burushaski.
const BURUSHASKI_CHARS: [char; 10] = ['ć', 'ṣ', 'ṭ', 'ẓ', 'ś', 'ŋ', 'é', 'í', 'ó', 'ú'];

const MAX_NGRAM: usize = 5;
const SUGGESTION_LIMIT: usize = 5;
const SUGGESTION_CANDIDATES: i64 = 25;

/// Hybrid translator: exact phrase match, then n-gram segmentation, then
/// single-word lookup, then word-by-word, then fuzzy suggestions.
pub struct Translator<'a> {
    conn: &'a mut SqliteConnection,
}

impl<'a> Translator<'a> {
    pub fn new(conn: &'a mut SqliteConnection) -> Self {
        Self { conn }
    }

    pub fn translate(
        &mut self,
        text: &str,
        source_lang: &str,
    ) -> Result<TranslationResponse, diesel::result::Error> {
        let text = text.trim().to_lowercase();

        let source_lang = if source_lang == "auto" {
            self.detect_language(&text)?
        } else {
            source_lang.to_string()
        };
        let target_lang = opposite(&source_lang);

        if let Some(mut result) = self.phrase_lookup(&text, &source_lang, &target_lang)? {
            result.method = "phrase_match".to_string();
            result.confidence = 0.95;
            return Ok(result);
        }

        if let Some(mut result) = self.ngram_translate(&text, &source_lang, &target_lang)? {
            result.method = "ngram_phrase_match".to_string();
            result.confidence = 0.92;
            return Ok(result);
        }

        if let Some(mut result) = self.dictionary_lookup(&text, &source_lang, &target_lang)? {
            result.method = "dictionary".to_string();
            result.confidence = 0.90;
            return Ok(result);
        }

        if let Some(mut result) = self.word_by_word(&text, &source_lang, &target_lang)? {
            result.method = "word_by_word".to_string();
            result.confidence = 0.70;
            return Ok(result);
        }

        let suggestions = self.fuzzy_suggestions(&text, &source_lang)?;
        let mut result = TranslationResponse::not_found(&text, &source_lang, &target_lang);
        if suggestions.is_empty() {
            result.message =
                Some("Translation not found. This word is not in our dictionary yet.".to_string());
        } else {
            result.method = "suggestions".to_string();
            result.message = Some("No exact match found. Did you mean one of these?".to_string());
            result.suggestions = Some(suggestions);
        }
        Ok(result)
    }

    pub fn batch_translate(
        &mut self,
        texts: &[String],
        source_lang: &str,
    ) -> Result<Vec<TranslationResponse>, diesel::result::Error> {
        texts
            .iter()
            .map(|text| self.translate(text, source_lang))
            .collect()
    }

    fn detect_language(&mut self, text: &str) -> Result<String, diesel::result::Error> {
        if text.chars().any(|c| BURUSHASKI_CHARS.contains(&c)) {
            return Ok("burushaski".to_string());
        }

        if WordRepository::find_by_burushaski(self.conn, text)?.is_some() {
            return Ok("burushaski".to_string());
        }

        Ok("english".to_string())
    }

    fn phrase_lookup(
        &mut self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<Option<TranslationResponse>, diesel::result::Error> {
        let phrase = PhraseRepository::find_exact(self.conn, text, source_lang)?;
        Ok(phrase.map(|phrase| phrase_response(phrase, text, source_lang, target_lang)))
    }

    /// Longest-span segmentation: at each position try the longest phrase
    /// match first, fall back to single-word lookups, and bracket unknown
    /// tokens. Succeeds when at least one token matched.
    fn ngram_translate(
        &mut self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<Option<TranslationResponse>, diesel::result::Error> {
        let tokens: Vec<&str> = text.split_whitespace().collect();
        if tokens.is_empty() {
            return Ok(None);
        }

        let max_n = MAX_NGRAM.min(tokens.len());
        let mut out_tokens = Vec::new();
        let mut words_found = 0;
        let mut i = 0;

        while i < tokens.len() {
            let mut matched = false;

            for n in (1..=max_n).rev() {
                if i + n > tokens.len() {
                    continue;
                }
                let chunk = tokens[i..i + n].join(" ");

                if let Some(phrase) = PhraseRepository::find_exact(self.conn, &chunk, source_lang)? {
                    out_tokens.push(translated_side(&phrase, source_lang));
                    words_found += n;
                    i += n;
                    matched = true;
                    break;
                }

                if n == 1 {
                    if let Some(word) = self.word_lookup(&chunk, source_lang)? {
                        out_tokens.push(word_side(&word, source_lang));
                        words_found += 1;
                        i += 1;
                        matched = true;
                        break;
                    }
                }
            }

            if !matched {
                out_tokens.push(format!("[{}]", tokens[i]));
                i += 1;
            }
        }

        if words_found == 0 {
            return Ok(None);
        }

        let mut result = TranslationResponse::not_found(text, source_lang, target_lang);
        result.translation = Some(out_tokens.join(" "));
        result.words_found = Some(words_found);
        result.total_words = Some(tokens.len());
        result.note = Some(
            "N-gram phrase-based translation. Grammar may be approximate. \
             Unknown tokens in [brackets]."
                .to_string(),
        );
        Ok(Some(result))
    }

    fn dictionary_lookup(
        &mut self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<Option<TranslationResponse>, diesel::result::Error> {
        let word = self.word_lookup(text, source_lang)?;
        Ok(word.map(|word| word_response(word, text, source_lang, target_lang)))
    }

    /// Per-token lookup, only accepted when at least half the tokens matched.
    fn word_by_word(
        &mut self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<Option<TranslationResponse>, diesel::result::Error> {
        let tokens: Vec<&str> = text.split_whitespace().collect();
        if tokens.len() <= 1 {
            return Ok(None);
        }

        let mut translations = Vec::new();
        let mut found_count = 0;

        for token in &tokens {
            let clean = token.trim_matches(|c: char| ".,!?;:".contains(c));
            match self.word_lookup(clean, source_lang)? {
                Some(word) => {
                    translations.push(word_side(&word, source_lang));
                    found_count += 1;
                }
                None => translations.push(format!("[{}]", clean)),
            }
        }

        if found_count * 2 < tokens.len() {
            return Ok(None);
        }

        let mut result = TranslationResponse::not_found(text, source_lang, target_lang);
        result.translation = Some(translations.join(" "));
        result.words_found = Some(found_count);
        result.total_words = Some(tokens.len());
        result.note = Some(
            "Word-by-word translation. Grammar may not be perfect. \
             Words in [brackets] not found."
                .to_string(),
        );
        Ok(Some(result))
    }

    /// Substring candidates ranked by similarity to the input.
    fn fuzzy_suggestions(
        &mut self,
        text: &str,
        source_lang: &str,
    ) -> Result<Vec<TranslationSuggestion>, diesel::result::Error> {
        let candidates = WordRepository::fuzzy_candidates(
            self.conn,
            text,
            source_lang,
            SUGGESTION_CANDIDATES,
        )?;

        let mut scored: Vec<(Word, f32)> = candidates
            .into_iter()
            .map(|word| {
                let side = if source_lang == "burushaski" {
                    word.burushaski.to_lowercase()
                } else {
                    word.english.to_lowercase()
                };
                let score = SearchEngine::similarity(text, &side);
                (word, score)
            })
            .collect();
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap());

        Ok(scored
            .into_iter()
            .take(SUGGESTION_LIMIT)
            .map(|(word, _)| TranslationSuggestion {
                burushaski: word.burushaski,
                english: word.english,
                pronunciation: word.pronunciation_ipa,
            })
            .collect())
    }

    fn word_lookup(
        &mut self,
        text: &str,
        source_lang: &str,
    ) -> Result<Option<Word>, diesel::result::Error> {
        if source_lang == "burushaski" {
            WordRepository::find_by_burushaski(self.conn, text)
        } else {
            WordRepository::find_by_english(self.conn, text)
        }
    }
}

fn opposite(source_lang: &str) -> String {
    if source_lang == "burushaski" {
        "english".to_string()
    } else {
        "burushaski".to_string()
    }
}

fn translated_side(phrase: &Phrase, source_lang: &str) -> String {
    if source_lang == "burushaski" {
        phrase.english.clone()
    } else {
        phrase.burushaski.clone()
    }
}

fn word_side(word: &Word, source_lang: &str) -> String {
    if source_lang == "burushaski" {
        word.english.clone()
    } else {
        word.burushaski.clone()
    }
}

fn phrase_response(
    phrase: Phrase,
    text: &str,
    source_lang: &str,
    target_lang: &str,
) -> TranslationResponse {
    let mut result = TranslationResponse::not_found(text, source_lang, target_lang);
    result.translation = Some(translated_side(&phrase, source_lang));
    result.urdu = phrase.urdu;
    result.audio = phrase.audio_file;
    result
}

fn word_response(
    word: Word,
    text: &str,
    source_lang: &str,
    target_lang: &str,
) -> TranslationResponse {
    let translation = word_side(&word, source_lang);
    let mut result = TranslationResponse::not_found(text, source_lang, target_lang);
    result.translation = Some(translation);
    result.urdu = word.urdu;
    result.pronunciation = word.pronunciation_ipa;
    result.word_class = word.word_class;
    result.example = word.example_sentence;
    result.example_translation = word.example_translation;
    result.audio = word.audio_file;
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::models::{NewPhrase, NewWord};
    use crate::db;

    fn test_conn() -> SqliteConnection {
        let mut conn = SqliteConnection::establish(":memory:").expect("in-memory sqlite");
        db::init_schema(&mut conn).unwrap();

        let words = [
            ("haq", "good", "اچھا", "hɑq"),
            ("mir", "man", "آدمی", "mir"),
            ("duṣ", "two", "دو", "duʂ"),
        ];
        for (burushaski, english, urdu, ipa) in words {
            WordRepository::create(
                &mut conn,
                &NewWord {
                    burushaski: burushaski.to_string(),
                    english: english.to_string(),
                    urdu: Some(urdu.to_string()),
                    word_class: None,
                    dialect: "hunza".to_string(),
                    pronunciation_ipa: Some(ipa.to_string()),
                    audio_file: None,
                    example_sentence: None,
                    example_translation: None,
                    notes: None,
                },
            )
            .unwrap();
        }

        PhraseRepository::create(
            &mut conn,
            &NewPhrase {
                burushaski: "haq mir".to_string(),
                english: "good man".to_string(),
                urdu: Some("اچھا آدمی".to_string()),
                context: Some("greeting".to_string()),
                formality: Some("casual".to_string()),
                dialect: "hunza".to_string(),
                usage_notes: None,
            },
        )
        .unwrap();

        conn
    }

    #[test]
    fn translates_burushaski_word() {
        let mut conn = test_conn();
        let result = Translator::new(&mut conn)
            .translate("haq", "burushaski")
            .unwrap();

        assert_eq!(result.translation.as_deref(), Some("good"));
        assert_eq!(result.source_language, "burushaski");
        assert_eq!(result.target_language, "english");
        assert!(result.confidence >= 0.9);
    }

    #[test]
    fn translates_english_word() {
        let mut conn = test_conn();
        let result = Translator::new(&mut conn)
            .translate("good", "english")
            .unwrap();

        assert_eq!(result.translation.as_deref(), Some("haq"));
        assert_eq!(result.target_language, "burushaski");
        assert!(result.confidence >= 0.9);
    }

    #[test]
    fn exact_phrase_wins_over_word_lookups() {
        let mut conn = test_conn();
        let result = Translator::new(&mut conn)
            .translate("haq mir", "burushaski")
            .unwrap();

        assert_eq!(result.translation.as_deref(), Some("good man"));
        assert_eq!(result.method, "phrase_match");
        assert_eq!(result.confidence, 0.95);
    }

    #[test]
    fn ngram_segments_phrase_plus_word() {
        let mut conn = test_conn();
        let result = Translator::new(&mut conn)
            .translate("haq mir duṣ", "burushaski")
            .unwrap();

        // "haq mir" matches the phrase table, "duṣ" the words table.
        assert_eq!(result.translation.as_deref(), Some("good man two"));
        assert_eq!(result.method, "ngram_phrase_match");
        assert_eq!(result.words_found, Some(3));
        assert_eq!(result.total_words, Some(3));
    }

    #[test]
    fn unknown_tokens_are_bracketed() {
        let mut conn = test_conn();
        let result = Translator::new(&mut conn)
            .translate("mir zzz", "burushaski")
            .unwrap();

        assert_eq!(result.translation.as_deref(), Some("man [zzz]"));
        assert_eq!(result.words_found, Some(1));
        assert_eq!(result.total_words, Some(2));
    }

    #[test]
    fn unknown_word_yields_suggestions_or_none() {
        let mut conn = test_conn();
        let result = Translator::new(&mut conn)
            .translate("xyzabc", "burushaski")
            .unwrap();

        assert!(result.translation.is_none());
        assert!(result.method == "suggestions" || result.method == "none");
        assert!(result.message.is_some());
    }

    #[test]
    fn partial_input_gets_fuzzy_suggestions() {
        let mut conn = test_conn();
        let result = Translator::new(&mut conn)
            .translate("ha", "burushaski")
            .unwrap();

        assert!(result.translation.is_none());
        assert_eq!(result.method, "suggestions");
        assert_eq!(result.confidence, 0.0);
        let suggestions = result.suggestions.unwrap();
        assert!(suggestions.iter().any(|s| s.burushaski == "haq"));
    }

    #[test]
    fn detects_burushaski_from_special_characters() {
        let mut conn = test_conn();
        let lang = Translator::new(&mut conn).detect_language("duṣ").unwrap();
        assert_eq!(lang, "burushaski");
    }

    #[test]
    fn detects_burushaski_from_dictionary_hit() {
        let mut conn = test_conn();
        let lang = Translator::new(&mut conn).detect_language("haq").unwrap();
        assert_eq!(lang, "burushaski");
    }

    #[test]
    fn defaults_to_english() {
        let mut conn = test_conn();
        let lang = Translator::new(&mut conn).detect_language("hello").unwrap();
        assert_eq!(lang, "english");
    }

    #[test]
    fn input_is_trimmed_and_lowercased() {
        let mut conn = test_conn();

        let result = Translator::new(&mut conn)
            .translate("  haq  ", "burushaski")
            .unwrap();
        assert_eq!(result.translation.as_deref(), Some("good"));

        let result = Translator::new(&mut conn)
            .translate("HAQ", "burushaski")
            .unwrap();
        assert_eq!(result.translation.as_deref(), Some("good"));
    }

    #[test]
    fn batch_translates_in_order() {
        let mut conn = test_conn();
        let texts = vec![
            "haq".to_string(),
            "mir".to_string(),
            "duṣ".to_string(),
        ];
        let results = Translator::new(&mut conn)
            .batch_translate(&texts, "burushaski")
            .unwrap();

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].translation.as_deref(), Some("good"));
        assert_eq!(results[1].translation.as_deref(), Some("man"));
        assert_eq!(results[2].translation.as_deref(), Some("two"));
    }
}
