//! Domain model for IAM instance callbacks.
//!
//! Callback requests, pagination, resource kinds and the response
//! envelopes returned to the authorization system. Downstream record
//! shapes live in [`records`] so adapters and services share one
//! definition.

mod error;
mod method;
mod page;
pub mod records;
mod request;
mod resource_type;
mod response;

pub use error::ParseResourceTypeError;
pub use method::CallbackMethod;
pub use page::{DEFAULT_PAGE_LIMIT, PageInfo};
pub use request::{CallbackFilter, CallbackRequest, ParentRef};
pub use resource_type::ResourceType;
pub use response::{
    CallbackResponse, EMPTY_RESULT_MESSAGE, FetchInstanceInfoResponse, InstanceInfo,
    ListInstanceResponse, PagedData, SUCCESS_CODE,
};
