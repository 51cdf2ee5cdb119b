pub mod phrase;
pub mod word;

pub use phrase::PhraseRepository;
pub use word::WordRepository;
