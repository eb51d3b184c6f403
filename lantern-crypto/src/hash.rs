/// BLAKE3 in key-derivation mode, keyed by `context`.
pub fn blake3_hash_domain(context: &str, data: &[u8]) -> [u8; 32] {
    let mut hasher = blake3::Hasher::new_derive_key(context);
    hasher.update(data);
    *hasher.finalize().as_bytes()
}
