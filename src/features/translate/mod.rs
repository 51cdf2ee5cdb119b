pub mod engine;

pub use engine::Translator;
