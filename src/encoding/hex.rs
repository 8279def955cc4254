use crate::error::{HashError, Result};

/// Turn a slice of bytes into a lowercase hex encoded string
/// ```
/// use cryptohash::encoding::{Encodable, to_hex};
/// assert_eq!(to_hex([0x12, 0x34, 0x56, 0x78]), "12345678");
/// assert_eq!([0x12, 0x34, 0x56, 0x78].encode_hex(), "12345678");
/// ```
pub fn to_hex(input: impl AsRef<[u8]>) -> String {
    let input = input.as_ref();
    let mut out = String::with_capacity(input.len() * 2);
    push_hex(&mut out, input);
    out
}

/// Like [`to_hex`], but reports a failed allocation instead of aborting
pub fn try_to_hex(input: impl AsRef<[u8]>) -> Result<String> {
    let input = input.as_ref();
    let mut out = String::new();
    out.try_reserve_exact(input.len() * 2)
        .map_err(|_| HashError::AllocationFailure)?;
    push_hex(&mut out, input);
    Ok(out)
}

fn push_hex(out: &mut String, input: &[u8]) {
    out.extend(input.iter().copied().flat_map(b2h).map(char::from));
}

/// Convert a byte into a pair of bytes representing its hex value
fn b2h(h: u8) -> [u8; 2] {
    #[rustfmt::skip]
    const TABLE: [u8; 16] = [
        b'0', b'1', b'2', b'3',
        b'4', b'5', b'6', b'7',
        b'8', b'9', b'a', b'b',
        b'c', b'd', b'e', b'f',
    ];

    let hi = TABLE[(h >> 4) as usize];
    let lo = TABLE[(h & 0b1111) as usize];
    [hi, lo]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_b2h() {
        for h in u8::MIN..=u8::MAX {
            let s = format!("{h:02x}").into_bytes();
            assert_eq!(b2h(h), [s[0], s[1]]);
        }
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(
            to_hex([0x62, 0x65, 0x61, 0x6e, 0x73]),
            "6265616e73".to_owned()
        );
    }

    #[test]
    fn test_to_hex_empty() {
        assert_eq!(to_hex(b""), "");
    }

    #[test]
    fn test_try_to_hex_matches_to_hex() {
        let input: Vec<u8> = (0..=255).collect();
        assert_eq!(try_to_hex(&input).unwrap(), to_hex(&input));
    }

    #[test]
    fn test_to_hex_matches_hex_crate() {
        let input = b"\x00\x7f\x80\xff digest";
        assert_eq!(to_hex(input), ::hex::encode(input));
    }
}
