//! Synthetic identities: full name, passport and SNILS.

use medsynth_model::Identity;
use rand::Rng;
use rand::seq::IndexedRandom;

use crate::names::NameGenerator;

/// Plausible passport issuing-region codes.
const REGION_CODES: [u32; 8] = [40, 45, 50, 77, 78, 59, 47, 66];
const FIRST_ISSUE_YEAR: u32 = 2007;
const LAST_ISSUE_YEAR: u32 = 2025;

/// Check digits for the nine main SNILS digits, rendered as two characters.
///
/// Digits are weighted 9 down to 1. Sums below 100 are used as-is, 100 and
/// 101 give `00`, larger sums are reduced modulo 101 (a remainder of 100
/// also gives `00`).
pub fn snils_check_digits(digits: &[u8; 9]) -> String {
    let total: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, d)| u32::from(*d) * (9 - i as u32))
        .sum();
    let check = match total {
        0..100 => total,
        100 | 101 => 0,
        _ => match total % 101 {
            100 => 0,
            rem => rem,
        },
    };
    format!("{check:02}")
}

/// Checks a `NNNNNNNNN CC` string against its recomputed check digits.
pub fn validate_snils(value: &str) -> bool {
    let Some((main, check)) = value.trim().split_once(' ') else {
        return false;
    };
    if main.len() != 9 || check.len() != 2 || !check.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    let mut digits = [0u8; 9];
    for (slot, byte) in digits.iter_mut().zip(main.bytes()) {
        if !byte.is_ascii_digit() {
            return false;
        }
        *slot = byte - b'0';
    }
    snils_check_digits(&digits) == check
}

fn random_passport<R: Rng + ?Sized>(rng: &mut R) -> String {
    let region = REGION_CODES.choose(rng).copied().unwrap_or(REGION_CODES[0]);
    let year = rng.random_range(FIRST_ISSUE_YEAR..=LAST_ISSUE_YEAR);
    let number: u32 = rng.random_range(100_000..=999_999);
    format!("{region:02}{:02} {number:06}", year % 100)
}

fn random_snils<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut digits = [0u8; 9];
    for digit in &mut digits {
        *digit = rng.random_range(0..=9);
    }
    let main: String = digits.iter().map(|d| char::from(b'0' + d)).collect();
    format!("{main} {}", snils_check_digits(&digits))
}

/// Builds `count` independent identities.
pub fn synthesize_identities<N, R>(count: usize, names: &N, rng: &mut R) -> Vec<Identity>
where
    N: NameGenerator,
    R: Rng + ?Sized,
{
    (0..count)
        .map(|_| {
            let full_name = names.full_name(rng);
            let passport = random_passport(rng);
            let snils = random_snils(rng);
            Identity {
                full_name,
                passport,
                snils,
            }
        })
        .collect()
}
