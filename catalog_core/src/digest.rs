use std::hash::{DefaultHasher, Hash, Hasher};

pub type DigestOutput = u64;

/// A value that can be summarized into a digest, so that derived data can be
/// cached against the exact version of the value it was computed from.
pub trait Digestible {
    fn digest(&self) -> DigestOutput;
}

/// Digests any hashable value with the standard hasher. The output is only
/// stable within a single process.
pub fn hash_digest<T: Hash + ?Sized>(value: &T) -> DigestOutput {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}
