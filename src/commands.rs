use replystatus::format::{self, OutputFormat};
use replystatus::wire::{self, ByteOrder};
use replystatus::{ReplyStatus, ReplyStatusError};
use tracing::debug;

use crate::exit_codes;

/// Map a library error to the process exit code.
pub fn exit_code_for(err: &ReplyStatusError) -> i32 {
    match err {
        ReplyStatusError::UnknownReplyStatus(_) => exit_codes::UNKNOWN_STATUS,
        ReplyStatusError::InvalidReplyStatusName(_) | ReplyStatusError::Truncated { .. } => {
            exit_codes::USAGE_ERROR
        }
        ReplyStatusError::Yaml(_) => exit_codes::RUNTIME_ERROR,
    }
}

fn fail(err: &ReplyStatusError) -> i32 {
    eprintln!("replystatus: {err}");
    exit_code_for(err)
}

/// Parse a string of hex digit pairs into octets.
pub fn parse_hex_octets(hex: &str) -> Result<Vec<u8>, String> {
    let hex = hex.trim();
    let hex = hex
        .strip_prefix("0x")
        .or_else(|| hex.strip_prefix("0X"))
        .unwrap_or(hex);
    if hex.len() % 2 != 0 {
        return Err(format!("Invalid hex '{hex}': odd number of digits"));
    }
    (0..hex.len())
        .step_by(2)
        .map(|i| {
            hex.get(i..i + 2)
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
                .ok_or_else(|| format!("Invalid hex '{hex}': bad digit pair at offset {i}"))
        })
        .collect()
}

/// `replystatus list`
pub fn run_list(output: OutputFormat) -> i32 {
    debug!(format = %output, "listing reply statuses");
    match output.render(&format::all_entries()) {
        Ok(out) => {
            println!("{}", out.trim_end());
            exit_codes::SUCCESS
        }
        Err(e) => fail(&e),
    }
}

/// `replystatus encode <NAME>`
pub fn run_encode(name: &str) -> i32 {
    match name.parse::<ReplyStatus>() {
        Ok(status) => {
            println!("{}", status.encode());
            exit_codes::SUCCESS
        }
        Err(e) => fail(&e),
    }
}

/// `replystatus decode <VALUE>`
pub fn run_decode(value: i16) -> i32 {
    match ReplyStatus::decode(value) {
        Ok(status) => {
            println!("{status}");
            exit_codes::SUCCESS
        }
        Err(e) => fail(&e),
    }
}

/// `replystatus decode-bytes <HEX>`
pub fn run_decode_bytes(hex: &str, little_endian: bool) -> i32 {
    let octets = match parse_hex_octets(hex) {
        Ok(octets) => octets,
        Err(msg) => {
            eprintln!("replystatus: {msg}");
            return exit_codes::USAGE_ERROR;
        }
    };
    let order = if little_endian {
        ByteOrder::Little
    } else {
        ByteOrder::Big
    };
    match wire::read_reply_status(&octets, order) {
        Ok((status, rest)) => {
            if !rest.is_empty() {
                debug!(trailing = rest.len(), "ignoring octets after reply status");
            }
            println!("{status}");
            exit_codes::SUCCESS
        }
        Err(e) => fail(&e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- parse_hex_octets ---

    #[test]
    fn parse_hex_plain() {
        assert_eq!(parse_hex_octets("0003").unwrap(), vec![0x00, 0x03]);
    }

    #[test]
    fn parse_hex_with_prefix_and_uppercase() {
        assert_eq!(parse_hex_octets("0xFF00").unwrap(), vec![0xFF, 0x00]);
    }

    #[test]
    fn parse_hex_empty_is_empty() {
        assert!(parse_hex_octets("").unwrap().is_empty());
    }

    #[test]
    fn parse_hex_odd_length_is_err() {
        assert!(parse_hex_octets("003").is_err());
    }

    #[test]
    fn parse_hex_bad_digit_is_err() {
        assert!(parse_hex_octets("00zz").is_err());
        assert!(parse_hex_octets("é0").is_err());
    }

    // --- exit_code_for ---

    #[test]
    fn unknown_status_maps_to_its_exit_code() {
        let err = ReplyStatusError::UnknownReplyStatus(255);
        assert_eq!(exit_code_for(&err), exit_codes::UNKNOWN_STATUS);
    }

    #[test]
    fn bad_input_maps_to_usage_error() {
        let name = ReplyStatusError::InvalidReplyStatusName("x".to_string());
        assert_eq!(exit_code_for(&name), exit_codes::USAGE_ERROR);
        let short = ReplyStatusError::Truncated {
            needed: 2,
            available: 0,
        };
        assert_eq!(exit_code_for(&short), exit_codes::USAGE_ERROR);
    }

    // --- run_* ---

    #[test]
    fn run_decode_known_and_unknown() {
        assert_eq!(run_decode(0), exit_codes::SUCCESS);
        assert_eq!(run_decode(255), exit_codes::UNKNOWN_STATUS);
    }

    #[test]
    fn run_encode_known_and_unknown() {
        assert_eq!(run_encode("successful"), exit_codes::SUCCESS);
        assert_eq!(run_encode("nope"), exit_codes::USAGE_ERROR);
    }

    #[test]
    fn run_decode_bytes_paths() {
        assert_eq!(run_decode_bytes("0001", false), exit_codes::SUCCESS);
        assert_eq!(run_decode_bytes("0100", true), exit_codes::SUCCESS);
        assert_eq!(run_decode_bytes("00", false), exit_codes::USAGE_ERROR);
        assert_eq!(run_decode_bytes("00ff", false), exit_codes::UNKNOWN_STATUS);
        assert_eq!(run_decode_bytes("xyz", false), exit_codes::USAGE_ERROR);
    }
}
