//! ASN.1 DER header handling for RSA public keys.
//!
//! OpenSSL and most other tooling exchange RSA public keys as an X.509
//! `SubjectPublicKeyInfo` structure: an outer SEQUENCE holding the fixed
//! `rsaEncryption` AlgorithmIdentifier and a BIT STRING whose payload is the
//! PKCS#1 `RSAPublicKey` SEQUENCE. The native provider only deals in the
//! inner PKCS#1 bytes, so this module adds the header on the way out and
//! strips it on the way in.
//!
//! Only this one fixed shape is recognized; this is not a general ASN.1
//! parser.

/// DER encoding of the `rsaEncryption` AlgorithmIdentifier:
/// a SEQUENCE of OID 1.2.840.113549.1.1.1 and NULL parameters.
const ALGORITHM_IDENTIFIER: [u8; 15] = [
    0x30, 0x0d, // SEQUENCE, 13 bytes
    0x06, 0x09, 0x2a, 0x86, 0x48, 0x86, 0xf7, 0x0d, 0x01, 0x01, 0x01, // OID rsaEncryption
    0x05, 0x00, // NULL
];

const TAG_SEQUENCE: u8 = 0x30;
const TAG_BIT_STRING: u8 = 0x03;

/// Appends a DER length field using the minimal short or long form.
fn push_length(out: &mut Vec<u8>, len: usize) {
    if len < 0x80 {
        out.push(len as u8);
    } else {
        let bytes = len.to_be_bytes();
        let skip = bytes.iter().take_while(|&&b| b == 0).count();
        out.push(0x80 | (bytes.len() - skip) as u8);
        out.extend_from_slice(&bytes[skip..]);
    }
}

/// Reads a DER length field, returning the length and the number of bytes
/// the field itself occupies.
fn read_length(data: &[u8]) -> Option<(usize, usize)> {
    let first = *data.first()?;
    if first < 0x80 {
        return Some((first as usize, 1));
    }
    let count = (first & 0x7f) as usize;
    if count == 0 || count > core::mem::size_of::<usize>() || data.len() < 1 + count {
        return None;
    }
    let mut len = 0usize;
    for &b in &data[1..1 + count] {
        len = (len << 8) | b as usize;
    }
    Some((len, 1 + count))
}

/// Wraps a raw PKCS#1 RSA public key in the `SubjectPublicKeyInfo` header.
///
/// Deterministic and infallible: the output is the outer SEQUENCE holding
/// the fixed AlgorithmIdentifier and a BIT STRING of `0x00` (no unused
/// bits) followed by `raw`.
pub fn wrap_public_key(raw: &[u8]) -> Vec<u8> {
    let mut body = Vec::with_capacity(raw.len() + 24);
    body.extend_from_slice(&ALGORITHM_IDENTIFIER);
    body.push(TAG_BIT_STRING);
    push_length(&mut body, raw.len() + 1);
    body.push(0x00);
    body.extend_from_slice(raw);

    let mut out = Vec::with_capacity(body.len() + 8);
    out.push(TAG_SEQUENCE);
    push_length(&mut out, body.len());
    out.extend_from_slice(&body);
    out
}

/// Strips the `SubjectPublicKeyInfo` header from `data` if it carries one.
///
/// Input that does not match the expected shape at any step — foreign key
/// formats, already-unwrapped PKCS#1 keys, truncated or malformed data —
/// is returned unchanged rather than treated as an error. Ambiguous input
/// is never rejected on this path.
pub fn unwrap_public_key_if_present(data: &[u8]) -> &[u8] {
    strip_header(data).unwrap_or(data)
}

fn strip_header(data: &[u8]) -> Option<&[u8]> {
    // Outer SEQUENCE tag and length.
    let rest = data.strip_prefix(&[TAG_SEQUENCE])?;
    let (_, consumed) = read_length(rest)?;
    let rest = rest.get(consumed..)?;

    // The 15 AlgorithmIdentifier bytes must match exactly.
    let rest = rest.strip_prefix(&ALGORITHM_IDENTIFIER[..])?;

    // BIT STRING tag, length, and the no-unused-bits separator.
    let rest = rest.strip_prefix(&[TAG_BIT_STRING])?;
    let (_, consumed) = read_length(rest)?;
    let rest = rest.get(consumed..)?;
    rest.strip_prefix(&[0x00])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_produces_the_expected_bytes() {
        // Three payload bytes keep every length in short form.
        let raw = [0x02, 0x01, 0x05];
        let wrapped = wrap_public_key(&raw);
        assert_eq!(
            wrapped,
            [
                0x30, 0x15, // SEQUENCE, 21 bytes
                0x30, 0x0d, 0x06, 0x09, 0x2a, 0x86, 0x48, 0x86, 0xf7, 0x0d, 0x01, 0x01,
                0x01, 0x05, 0x00, // AlgorithmIdentifier
                0x03, 0x04, // BIT STRING, 4 bytes
                0x00, // no unused bits
                0x02, 0x01, 0x05,
            ]
        );
    }

    #[test]
    fn wrap_uses_long_form_lengths_above_127() {
        let raw = vec![0xab; 200];
        let wrapped = wrap_public_key(&raw);
        // 219-byte body needs a one-byte long form length.
        assert_eq!(&wrapped[..3], &[0x30, 0x81, 0xdb][..]);
        // BIT STRING of 201 bytes, right after the AlgorithmIdentifier.
        assert_eq!(&wrapped[18..21], &[0x03, 0x81, 0xc9][..]);
        assert_eq!(unwrap_public_key_if_present(&wrapped), raw.as_slice());
    }

    #[test]
    fn wrap_unwrap_round_trips() {
        for len in [0usize, 1, 3, 127, 128, 255, 256, 270, 1000] {
            let raw: Vec<u8> = (0..len).map(|i| i as u8).collect();
            let wrapped = wrap_public_key(&raw);
            assert_eq!(wrapped.len(), raw.len() + 1 + header_overhead(&wrapped));
            assert_eq!(unwrap_public_key_if_present(&wrapped), raw.as_slice());
        }
    }

    // Everything in the wrapped form that is not payload or separator.
    fn header_overhead(wrapped: &[u8]) -> usize {
        let (_, outer) = read_length(&wrapped[1..]).unwrap();
        let bits_at = 1 + outer + ALGORITHM_IDENTIFIER.len();
        let (_, bits) = read_length(&wrapped[bits_at + 1..]).unwrap();
        1 + outer + ALGORITHM_IDENTIFIER.len() + 1 + bits
    }

    #[test]
    fn foreign_input_passes_through_unchanged() {
        // Not a SEQUENCE at all.
        assert_eq!(unwrap_public_key_if_present(b"hello"), b"hello");
        // Empty input.
        assert_eq!(unwrap_public_key_if_present(&[]), &[] as &[u8]);
        // SEQUENCE, but the AlgorithmIdentifier does not match (a PKCS#1
        // key starts with an INTEGER here).
        let pkcs1ish = [0x30, 0x06, 0x02, 0x01, 0x00, 0x02, 0x01, 0x03];
        assert_eq!(unwrap_public_key_if_present(&pkcs1ish), &pkcs1ish[..]);
        // Truncated right after the outer header.
        let truncated = [0x30, 0x82, 0x01];
        assert_eq!(unwrap_public_key_if_present(&truncated), &truncated[..]);
        // Correct prefix but a missing separator byte.
        let mut bad = wrap_public_key(&[0x01, 0x02]);
        let sep = bad.len() - 3;
        bad[sep] = 0xff;
        assert_eq!(unwrap_public_key_if_present(&bad), bad.as_slice());
    }

    #[test]
    fn unwrap_is_idempotent() {
        let raw = [0x02, 0x03, 0x01, 0x00, 0x01];
        let wrapped = wrap_public_key(&raw);
        let once = unwrap_public_key_if_present(&wrapped);
        assert_eq!(unwrap_public_key_if_present(once), once);
    }

    #[test]
    fn read_length_rejects_reserved_and_oversized_forms() {
        // 0x80 alone is the indefinite form, which DER forbids.
        assert_eq!(read_length(&[0x80, 0x01]), None);
        // More length bytes than usize can hold.
        assert_eq!(read_length(&[0x89, 1, 1, 1, 1, 1, 1, 1, 1, 1]), None);
        assert_eq!(read_length(&[0x7f]), Some((127, 1)));
        assert_eq!(read_length(&[0x82, 0x01, 0x0f]), Some((271, 3)));
    }
}
