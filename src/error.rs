use thiserror::Error;

/// Errors raised while decoding or rendering reply statuses.
#[derive(Debug, Error)]
pub enum ReplyStatusError {
    /// The integer matches no known reply status.
    #[error("unknown reply status: {0}")]
    UnknownReplyStatus(i16),

    #[error("invalid reply status name '{0}'")]
    InvalidReplyStatusName(String),

    /// Input ended before a complete wire value.
    #[error("truncated reply status: need {needed} octets, have {available}")]
    Truncated { needed: usize, available: usize },

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T, E = ReplyStatusError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_reply_status_message_names_the_value() {
        let err = ReplyStatusError::UnknownReplyStatus(255);
        assert_eq!(err.to_string(), "unknown reply status: 255");
    }

    #[test]
    fn truncated_message_reports_both_lengths() {
        let err = ReplyStatusError::Truncated {
            needed: 2,
            available: 1,
        };
        assert_eq!(
            err.to_string(),
            "truncated reply status: need 2 octets, have 1"
        );
    }
}
