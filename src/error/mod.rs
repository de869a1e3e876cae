mod sdk_error;

pub use sdk_error::{ErrorDetails, SdkError, SdkResult};
