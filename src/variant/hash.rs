///
/// FNV-1a 64-bit hash.
///
/// This is the one hash the variant selector uses. It is deterministic across
/// platforms, compilers and process restarts, and cheap enough to run once per
/// page slot. It is not collision resistant and is never used for anything
/// security related.
///
/// Replacing it reassigns the variant of every existing page.
///
/// Reference: Fowler–Noll–Vo hash, FNV-1a variant (64-bit, prime = 0x100000001b3)
///
#[must_use]
#[allow(clippy::unreadable_literal)]
pub const fn fnv1a_64(bytes: &[u8]) -> u64 {
    let mut hash = 0xcbf29ce484222325u64;
    let mut i = 0;

    while i < bytes.len() {
        hash ^= bytes[i] as u64;
        hash = hash.wrapping_mul(0x100000001b3);
        i += 1;
    }

    hash
}
