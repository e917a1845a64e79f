//! Application services for IAM callback resolution.

mod resource_callback;

pub use resource_callback::{
    ResourceCallbackError, ResourceCallbackResult, ResourceCallbackService, ResourceDirectories,
    TOKEN_TICKET_FAIL,
};
