pub mod error;
pub mod fetch;
pub mod header;
pub mod method;
pub mod net;
pub mod request;
pub mod response;

pub use error::FetchError;
pub use fetch::{Fetcher, MAX_ATTEMPTS};
pub use header::{Authorization, ContentEncoding, ContentType, Header};
pub use method::Method;
pub use request::REQUEST_TIMEOUT;
pub use response::{Response, STATUS_NO_CONNECTION, STATUS_NO_STATUS, TextEncoding};
pub use url::Url;
