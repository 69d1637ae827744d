//! Reply status codes of the Portable Interceptor request/reply protocol.
//!
//! Every completed invocation carries one [`ReplyStatus`] describing how it
//! concluded. The set of statuses is closed: decoding a value outside it
//! fails with [`ReplyStatusError::UnknownReplyStatus`].

#[macro_use]
mod schema;

pub mod error;
pub mod format;
pub mod reply_status;
pub mod wire;

pub use error::{ReplyStatusError, Result};
pub use reply_status::{Outcome, ReplyStatus, value};
