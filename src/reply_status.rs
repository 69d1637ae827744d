use std::fmt;
use std::str::FromStr;

use tracing::{debug, trace};

use crate::error::{ReplyStatusError, Result};

// Values from the PortableInterceptor IDL, `typedef short ReplyStatus`.
reply_statuses! {
    /// The call returned normally. Observed at `receive_reply`.
    Successful = 0 => SUCCESSFUL, Reply;
    /// The call raised a system exception.
    SystemException = 1 => SYSTEM_EXCEPTION, Exception;
    /// The call raised a user (IDL-declared) exception.
    UserException = 2 => USER_EXCEPTION, Exception;
    /// The target object answered with a forward reference; the request is
    /// reissued at the new location.
    LocationForward = 3 => LOCATION_FORWARD, Other;
    /// The transport asked for the request to be retried.
    TransportRetry = 4 => TRANSPORT_RETRY, Other;
    /// The outcome cannot be determined, e.g. a deferred-synchronous reply
    /// that was never retrieved.
    Unknown = 5 => UNKNOWN, Other;
}

impl ReplyStatus {
    /// The 16-bit wire value of this status.
    pub const fn encode(self) -> i16 {
        self as i16
    }

    /// Map a wire value back to its status.
    ///
    /// Values outside the known set fail with
    /// [`ReplyStatusError::UnknownReplyStatus`]; there is no fallback variant.
    pub fn decode(value: i16) -> Result<Self> {
        match Self::from_value(value) {
            Some(status) => {
                trace!(value, status = %status, "decoded reply status");
                Ok(status)
            }
            None => {
                debug!(value, "rejected unknown reply status");
                Err(ReplyStatusError::UnknownReplyStatus(value))
            }
        }
    }

    pub const fn is_successful(self) -> bool {
        matches!(self, Self::Successful)
    }

    pub const fn is_exception(self) -> bool {
        matches!(self.outcome(), Outcome::Exception)
    }
}

impl From<ReplyStatus> for i16 {
    fn from(status: ReplyStatus) -> Self {
        status.encode()
    }
}

impl TryFrom<i16> for ReplyStatus {
    type Error = ReplyStatusError;

    fn try_from(value: i16) -> Result<Self> {
        Self::decode(value)
    }
}

impl FromStr for ReplyStatus {
    type Err = ReplyStatusError;

    /// Parse a canonical name, ignoring case and accepting `-` for `_`.
    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().replace('-', "_");
        Self::ALL
            .iter()
            .copied()
            .find(|status| status.name().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| ReplyStatusError::InvalidReplyStatusName(s.to_string()))
    }
}

impl fmt::Display for ReplyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome class of a reply status, keyed by the client-side interception
/// point that observes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// A normal reply.
    Reply,
    /// A system or user exception.
    Exception,
    /// Anything else: forwards, retries, undetermined outcomes.
    Other,
}

impl Outcome {
    pub const fn interception_point(self) -> &'static str {
        match self {
            Self::Reply => "receive_reply",
            Self::Exception => "receive_exception",
            Self::Other => "receive_other",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reply => write!(f, "reply"),
            Self::Exception => write!(f, "exception"),
            Self::Other => write!(f, "other"),
        }
    }
}
