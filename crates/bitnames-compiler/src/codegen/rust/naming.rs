//! Identifiers for generated items.

use super::Emitter;

impl Emitter {
    /// Prefix for a type's generated items: `_DAY_OF_WEEK` for `DayOfWeek`.
    ///
    /// Distinct types that map to the same prefix get a numeric suffix.
    pub(super) fn item_prefix(&mut self, type_name: &str) -> String {
        let base = format!("_{}", to_screaming_snake_case(type_name));
        let mut prefix = base.clone();
        let mut n = 2;
        while !self.used_prefixes.insert(prefix.clone()) {
            prefix = format!("{base}_{n}");
            n += 1;
        }
        prefix
    }
}

/// `HTTPFlags` -> `HTTP_FLAGS`, `fileMode` -> `FILE_MODE`.
pub(super) fn to_screaming_snake_case(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut result = String::with_capacity(s.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c == '_' {
            if !result.is_empty() && !result.ends_with('_') {
                result.push('_');
            }
            continue;
        }
        if c.is_uppercase() && i > 0 && !result.ends_with('_') {
            let prev = chars[i - 1];
            let next_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev.is_lowercase() || prev.is_ascii_digit() || (prev.is_uppercase() && next_lower)
            {
                result.push('_');
            }
        }
        result.extend(c.to_uppercase());
    }

    result
}
