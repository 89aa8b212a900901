pub mod inference;

pub use inference::IInferenceProvider;
