use sha2::Digest;

/// Derive an id for a block which didn't come with one.
///
/// The id is the first 16 bytes of the SHA-256 of the store name and the
/// position of the block (its index at every level of nesting), formatted as
/// a UUID. Ids are therefore unique within a document and stable across runs.
pub(super) fn derive(store_name: &str, path: &[usize]) -> String {
    let mut hasher = sha2::Sha256::new();
    hasher.update(store_name.as_bytes());
    for index in path {
        hasher.update((*index as u64).to_be_bytes());
    }
    let digest = hasher.finalize();
    let mut bytes = [0u8; 16];
    bytes.copy_from_slice(&digest[..16]);
    uuid::Uuid::from_bytes(bytes).to_string()
}
