//! Best-effort, non-cryptographic fingerprints for cache keys and article
//! identity. Stable for identical input across runs; collision-tolerant.

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// FNV-1a over the raw bytes.
pub fn fingerprint(input: &str) -> u64 {
    let mut hash = FNV_OFFSET;
    for byte in input.bytes() {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

/// Fingerprint rendered in base 36, the form used inside cache keys.
pub fn fingerprint_str(input: &str) -> String {
    to_base36(fingerprint(input))
}

/// Derive the article id from its canonical source URL. A pure function of
/// the URL, so the same article resolves to the same cache entries across
/// fetch cycles.
pub fn article_id(original_url: &str) -> String {
    fingerprint_str(original_url)
}

fn to_base36(mut value: u64) -> String {
    const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if value == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while value > 0 {
        out.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    out.reverse();
    String::from_utf8(out).expect("base36 digits are ascii")
}
