//! Item Identifiers
//!
//! Short random alphanumeric ids. Collisions are not checked; at 36^8
//! possible values they are left to chance.

use rand::Rng;

/// Characters an id is drawn from
pub const ALPHANUM: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Default id length
pub const DEFAULT_ID_LENGTH: usize = 8;

/// Generate a random id of `len` characters from [`ALPHANUM`]
pub fn generate_id<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    (0..len)
        .map(|_| ALPHANUM[rng.gen_range(0..ALPHANUM.len())] as char)
        .collect()
}
