//! CDR encoding of a reply status: a `short` in the stream's byte order.
//!
//! Alignment padding is left to the caller.

use crate::error::{ReplyStatusError, Result};
use crate::reply_status::ReplyStatus;

/// Octets occupied by one encoded reply status.
pub const REPLY_STATUS_LEN: usize = 2;

/// Byte order of a CDR stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ByteOrder {
    #[default]
    Big,
    Little,
}

impl ByteOrder {
    /// Read the CDR byte-order flag: bit 0 clear is big endian, set is little endian.
    pub const fn from_flag(flag: u8) -> Self {
        if flag & 1 == 0 {
            Self::Big
        } else {
            Self::Little
        }
    }

    pub const fn flag(self) -> u8 {
        match self {
            Self::Big => 0,
            Self::Little => 1,
        }
    }
}

/// Append the encoded `status` to `out`.
pub fn write_reply_status(status: ReplyStatus, order: ByteOrder, out: &mut Vec<u8>) {
    let raw = status.encode();
    let bytes = match order {
        ByteOrder::Big => raw.to_be_bytes(),
        ByteOrder::Little => raw.to_le_bytes(),
    };
    out.extend_from_slice(&bytes);
}

/// Decode one reply status from the front of `input`, returning it with the
/// unread remainder.
pub fn read_reply_status(input: &[u8], order: ByteOrder) -> Result<(ReplyStatus, &[u8])> {
    let Some((head, rest)) = input.split_first_chunk::<REPLY_STATUS_LEN>() else {
        return Err(ReplyStatusError::Truncated {
            needed: REPLY_STATUS_LEN,
            available: input.len(),
        });
    };
    let raw = match order {
        ByteOrder::Big => i16::from_be_bytes(*head),
        ByteOrder::Little => i16::from_le_bytes(*head),
    };
    Ok((ReplyStatus::decode(raw)?, rest))
}
