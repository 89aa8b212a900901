mod dataset_error;
pub mod error_code;
mod grapewatch_error;
mod inference_error;

pub use dataset_error::DatasetError;
pub use error_code::GrapewatchErrorCode;
pub use grapewatch_error::{GrapewatchError, GrapewatchResult};
pub use inference_error::InferenceError;
