use soroban_sdk::{Env, String};

use crate::types::Error;

const MIN_IDENTIFIER_LEN: u32 = 3;
const MAX_IDENTIFIER_LEN: u32 = 64;

/// Validate and lowercase a username or email address.
///
/// Identifiers must be 3 to 64 bytes of ASCII drawn from
/// `[A-Za-z0-9 . _ - @ +]`. The returned copy is fully lowercased so that
/// lookups are case-insensitive.
pub fn normalize_identifier(env: &Env, identifier: &String) -> Result<String, Error> {
    let len = identifier.len();
    if !(MIN_IDENTIFIER_LEN..=MAX_IDENTIFIER_LEN).contains(&len) {
        return Err(Error::InvalidIdentifier);
    }

    let mut buf = [0u8; MAX_IDENTIFIER_LEN as usize];
    identifier.copy_into_slice(&mut buf[..len as usize]);

    for b in buf[..len as usize].iter_mut() {
        let valid_char =
            b.is_ascii_alphanumeric() || matches!(*b, b'.' | b'_' | b'-' | b'@' | b'+');
        if !valid_char {
            return Err(Error::InvalidIdentifier);
        }
        *b = b.to_ascii_lowercase();
    }

    let normalized =
        core::str::from_utf8(&buf[..len as usize]).map_err(|_| Error::InvalidIdentifier)?;
    Ok(String::from_str(env, normalized))
}
