//! # Domain Model
//!
//! A [`Domain`] is a bare hostname that passed [`validate`]. It is always stored
//! lowercase, so two inputs differing only in case are the same domain.
//!
//! Validation rules, first failure wins:
//! 1. No scheme separator (`://`) and no path separator (`/`).
//! 2. Ends with one of the suffixes in [`Tld::ALL`].
//! 3. Matches the hostname grammar: dot-separated labels of 1-63 alphanumeric
//!    characters with inner hyphens only, ending in an allowed suffix.
//!
//! Input is lowercased (ASCII only) before rules 2 and 3 run, so `MySite.APP`
//! is accepted and becomes `mysite.app`. Non-ASCII letters are never folded and
//! fail the grammar.
//!
//! Callers adding to a cart trim surrounding whitespace before validating, so
//! `" padded.com"` is accepted there while [`validate`] itself rejects it.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

static HOSTNAME_RE: OnceLock<Regex> = OnceLock::new();

fn hostname_re() -> &'static Regex {
    HOSTNAME_RE.get_or_init(|| {
        Regex::new(
            r"^[a-z0-9]([a-z0-9-]{0,61}[a-z0-9])?(\.[a-z0-9]([a-z0-9-]{0,61}[a-z0-9])?)*\.(com|xyz|app)$",
        )
        .expect("hostname pattern is a valid regex")
    })
}

/// Top-level suffixes a cart accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tld {
    Com,
    Xyz,
    App,
}

impl Tld {
    pub const ALL: [Tld; 3] = [Tld::Com, Tld::Xyz, Tld::App];

    pub fn suffix(self) -> &'static str {
        match self {
            Tld::Com => ".com",
            Tld::Xyz => ".xyz",
            Tld::App => ".app",
        }
    }

    /// Base score used when trimming a cart down to its best entries.
    pub fn weight(self) -> i64 {
        match self {
            Tld::Com => 300,
            Tld::App => 200,
            Tld::Xyz => 100,
        }
    }

    fn of(lowercase: &str) -> Option<Tld> {
        Tld::ALL
            .into_iter()
            .find(|tld| lowercase.ends_with(tld.suffix()))
    }

    fn allowed_list() -> String {
        Tld::ALL
            .iter()
            .map(|tld| tld.suffix())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Tld {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidDomain {
    #[error("Domain should be bare (e.g., example.com)")]
    NotBare,
    #[error("Domain must end with one of: {allowed}")]
    UnsupportedTld { allowed: String },
    #[error("Invalid domain format")]
    Malformed,
}

/// Checks `input` against the domain rules without building a [`Domain`].
pub fn validate(input: &str) -> Result<(), InvalidDomain> {
    normalize(input).map(|_| ())
}

fn normalize(input: &str) -> Result<(String, Tld), InvalidDomain> {
    if input.contains("://") || input.contains('/') {
        return Err(InvalidDomain::NotBare);
    }

    let lower = input.to_ascii_lowercase();
    let Some(tld) = Tld::of(&lower) else {
        return Err(InvalidDomain::UnsupportedTld {
            allowed: Tld::allowed_list(),
        });
    };

    if !hostname_re().is_match(&lower) {
        return Err(InvalidDomain::Malformed);
    }

    Ok((lower, tld))
}

/// A validated, lowercase bare hostname.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Domain {
    name: String,
    tld: Tld,
}

impl Domain {
    pub fn parse(input: &str) -> Result<Self, InvalidDomain> {
        let (name, tld) = normalize(input)?;
        Ok(Self { name, tld })
    }

    pub fn as_str(&self) -> &str {
        &self.name
    }

    pub fn tld(&self) -> Tld {
        self.tld
    }

    /// The leftmost label, `blog` for `blog.shop.com`.
    pub fn name_label(&self) -> &str {
        self.name.split('.').next().unwrap_or(&self.name)
    }
}

impl FromStr for Domain {
    type Err = InvalidDomain;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Domain::parse(s)
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl AsRef<str> for Domain {
    fn as_ref(&self) -> &str {
        &self.name
    }
}
