use hmac::{Hmac, Mac};
use sha2::Sha512;
use subtle::ConstantTimeEq;

type HmacSha512 = Hmac<Sha512>;

pub const SIGNATURE_HEADER: &str = "x-paystack-signature";

/// HMAC-SHA512 over the exact raw body bytes, hex-encoded, compared in
/// constant time against the header value. Returns false on any mismatch.
pub fn verify_signature(raw_body: &[u8], header_signature: &str, secret: &str) -> bool {
    let Ok(mut mac) = HmacSha512::new_from_slice(secret.as_bytes()) else {
        return false;
    };
    mac.update(raw_body);
    let expected = hex::encode(mac.finalize().into_bytes());

    expected.as_bytes().ct_eq(header_signature.as_bytes()).into()
}

pub fn sign(raw_body: &[u8], secret: &str) -> String {
    let mut mac = HmacSha512::new_from_slice(secret.as_bytes()).expect("hmac accepts any key size");
    mac.update(raw_body);
    hex::encode(mac.finalize().into_bytes())
}
