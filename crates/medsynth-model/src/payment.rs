//! Payment networks and issuing banks known to the card generator.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentNetwork {
    Mir,
    Mastercard,
    Visa,
}

impl PaymentNetwork {
    pub const ALL: [PaymentNetwork; 3] = [Self::Mir, Self::Visa, Self::Mastercard];

    /// Resolves a network name; anything unrecognised is treated as VISA.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_uppercase().as_str() {
            "MIR" => Self::Mir,
            "MASTERCARD" => Self::Mastercard,
            _ => Self::Visa,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mir => "MIR",
            Self::Mastercard => "MASTERCARD",
            Self::Visa => "VISA",
        }
    }
}

impl fmt::Display for PaymentNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Issuing banks. Only three carry their own issuer prefixes; the rest
/// share each network's default range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IssuingBank {
    Gazprombank,
    MtsBank,
    Sberbank,
    Tinkoff,
    Vtb,
    Other,
}

impl IssuingBank {
    pub const KNOWN: [IssuingBank; 5] = [
        Self::Gazprombank,
        Self::MtsBank,
        Self::Sberbank,
        Self::Tinkoff,
        Self::Vtb,
    ];

    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_uppercase().as_str() {
            "GAZPROMBANK" => Self::Gazprombank,
            "MTS BANK" => Self::MtsBank,
            "SBERBANK OF RUSSIA" => Self::Sberbank,
            "TINKOFF BANK" => Self::Tinkoff,
            "VTB BANK" => Self::Vtb,
            _ => Self::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gazprombank => "GAZPROMBANK",
            Self::MtsBank => "MTS BANK",
            Self::Sberbank => "SBERBANK OF RUSSIA",
            Self::Tinkoff => "TINKOFF BANK",
            Self::Vtb => "VTB BANK",
            Self::Other => "OTHER",
        }
    }
}

impl fmt::Display for IssuingBank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
