pub mod dictionary_models;
pub mod error_models;
pub mod phrase_models;
pub mod translate_models;
pub mod word_models;

pub use dictionary_models::{
    ByHeadwordParams, CountParams, CountResponse, DialectCounts, DictionaryStats, SearchParams,
    SuggestParams, SuggestResponse, SuggestionEntry,
};
pub use error_models::ApiError;
pub use phrase_models::{NewPhrase, Phrase};
pub use translate_models::{
    BatchTranslationRequest, BatchTranslationResponse, ExamplesParams, ExamplesResponse,
    PhraseExample, QuickParams, TranslationRequest, TranslationResponse, TranslationSuggestion,
    SOURCE_LANGS,
};
pub use word_models::{NewWord, Word, DIALECTS, WORD_CLASSES};
