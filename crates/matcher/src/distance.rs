use std::fmt;

use serde::{Deserialize, Serialize};

/// Coarse proximity of a hospital to the caller.
///
/// Variants are declared nearest first, so the derived `Ord` is
/// `Close < Medium < Far`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceTier {
    Close,
    Medium,
    Far,
}

impl DistanceTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            DistanceTier::Close => "close",
            DistanceTier::Medium => "medium",
            DistanceTier::Far => "far",
        }
    }

    /// Approximate distance shown to users.
    pub fn label(&self) -> &'static str {
        match self {
            DistanceTier::Close => "< 5 miles",
            DistanceTier::Medium => "5-15 miles",
            DistanceTier::Far => "15+ miles",
        }
    }
}

impl fmt::Display for DistanceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Buckets a hospital's location relative to the caller.
///
/// The search engine only sees tiers, so a geocoding implementation can
/// replace [`ZipPrefixClassifier`] without touching ranking or search.
pub trait DistanceClassifier: Send + Sync {
    fn classify(&self, user_zip: &str, hospital_zip: &str) -> DistanceTier;
}

/// ZIP-prefix proxy for distance: same 3-digit prefix is `Close`, same
/// 2-digit prefix is `Medium`, anything else is `Far`.
///
/// This is not geographic distance. ZIP prefixes roughly follow postal
/// sectional centers, which is close enough for ordering results.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZipPrefixClassifier;

impl DistanceClassifier for ZipPrefixClassifier {
    fn classify(&self, user_zip: &str, hospital_zip: &str) -> DistanceTier {
        if prefix(user_zip, 3) == prefix(hospital_zip, 3) {
            DistanceTier::Close
        } else if prefix(user_zip, 2) == prefix(hospital_zip, 2) {
            DistanceTier::Medium
        } else {
            DistanceTier::Far
        }
    }
}

/// First `n` characters, or the whole string when it is shorter.
fn prefix(zip: &str, n: usize) -> &str {
    match zip.char_indices().nth(n) {
        Some((end, _)) => &zip[..end],
        None => zip,
    }
}

/// `true` for exactly five ASCII digits.
pub fn is_valid_zip(zip: &str) -> bool {
    zip.len() == 5 && zip.bytes().all(|b| b.is_ascii_digit())
}
