mod hex;

pub use hex::{to_hex, try_to_hex};

/// Trait allowing us to use .encode_hex to format digests
pub trait Encodable {
    fn encode_hex(&self) -> String;
}

impl Encodable for [u8] {
    fn encode_hex(&self) -> String {
        to_hex(self)
    }
}
