// UUID утилиты

use uuid::{Uuid, Variant};

const HYPHENATED_LEN: usize = 36;
const HYPHEN_OFFSETS: [usize; 4] = [8, 13, 18, 23];

pub fn generate_v4() -> String {
    Uuid::new_v4().to_string()
}

/// Parses only the canonical 8-4-4-4-12 form. `Uuid::try_parse` also
/// accepts braced, URN and simple forms, so the shape is checked first.
fn parse_hyphenated(uuid_str: &str) -> Option<Uuid> {
    let bytes = uuid_str.as_bytes();
    if bytes.len() != HYPHENATED_LEN {
        return None;
    }

    let shape_ok = bytes.iter().enumerate().all(|(i, b)| {
        if HYPHEN_OFFSETS.contains(&i) {
            *b == b'-'
        } else {
            b.is_ascii_hexdigit()
        }
    });
    if !shape_ok {
        return None;
    }

    Uuid::try_parse(uuid_str).ok()
}

fn is_max(uuid: &Uuid) -> bool {
    uuid.as_u128() == u128::MAX
}

/// Well-formed UUID: nil, max, or an RFC 4122 variant with version 1..=8.
pub fn is_valid(uuid_str: &str) -> bool {
    match parse_hyphenated(uuid_str) {
        Some(uuid) if uuid.is_nil() || is_max(&uuid) => true,
        Some(uuid) => {
            uuid.get_variant() == Variant::RFC4122 && (1..=8).contains(&uuid.get_version_num())
        }
        None => false,
    }
}

/// Version nibble of a string accepted by [`is_valid`].
pub fn version(uuid_str: &str) -> Option<usize> {
    if !is_valid(uuid_str) {
        return None;
    }
    parse_hyphenated(uuid_str).map(|uuid| uuid.get_version_num())
}
