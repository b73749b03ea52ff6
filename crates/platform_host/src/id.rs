//! Best-effort unique id generation for single-process use.

use uuid::Uuid;

use crate::time::unix_time_ms_now;

/// Prefix used when callers have no better one.
pub const DEFAULT_ID_PREFIX: &str = "id";

const SUFFIX_LEN: usize = 7;
const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Returns `"{prefix}_{unix_ms}_{suffix}"` with a 7-character random base-36 suffix.
///
/// Collisions are not prevented, only made unlikely; ids are not suitable across processes or
/// devices.
pub fn uid(prefix: &str) -> String {
    format!("{prefix}_{}_{}", unix_time_ms_now(), random_suffix())
}

fn random_suffix() -> String {
    let mut bits = Uuid::new_v4().as_u128();
    let mut suffix = String::with_capacity(SUFFIX_LEN);
    for _ in 0..SUFFIX_LEN {
        suffix.push(BASE36[(bits % 36) as usize] as char);
        bits /= 36;
    }
    suffix
}
