//! Display masking for protected health information.
//!
//! Masking is a presentation convenience for shared screens, not an access-control boundary:
//! the unmasked value is still present in the host's data.

const MASK: char = '•';

/// Masks every alphanumeric character except the last `visible` ones, keeping separators.
///
/// `mask_identifier("123-45-6789", 4)` renders `•••-••-6789`.
pub fn mask_identifier(value: &str, visible: usize) -> String {
    let total = value.chars().filter(|ch| ch.is_alphanumeric()).count();
    let hidden = total.saturating_sub(visible);
    let mut seen = 0usize;
    value
        .chars()
        .map(|ch| {
            if !ch.is_alphanumeric() {
                return ch;
            }
            seen += 1;
            if seen <= hidden {
                MASK
            } else {
                ch
            }
        })
        .collect()
}

/// Keeps the first letter of each word and masks the rest.
pub fn mask_name(name: &str) -> String {
    name.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => std::iter::once(first)
                    .chain(chars.map(|_| MASK))
                    .collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn identifiers_keep_separators_and_tail() {
        assert_eq!(mask_identifier("123-45-6789", 4), "•••-••-6789");
        assert_eq!(mask_identifier("MRN-00412345", 4), "•••-••••2345");
        assert_eq!(mask_identifier("42", 4), "42");
        assert_eq!(mask_identifier("", 4), "");
    }

    #[test]
    fn names_keep_leading_letters() {
        assert_eq!(mask_name("Ada  Okafor"), "A•• O•••••");
        assert_eq!(mask_name(""), "");
    }
}
