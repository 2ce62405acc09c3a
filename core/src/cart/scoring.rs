use domcart_common::domain::Domain;

/// Ranks a domain: suffix weight minus the length of its leftmost label.
///
/// `.com` beats `.app` beats `.xyz`; within a suffix, shorter wins.
pub fn score(domain: &Domain) -> i64 {
    domain.tld().weight() - domain.name_label().chars().count() as i64
}
