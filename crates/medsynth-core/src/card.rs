//! Payment card numbers with network- and bank-specific issuer prefixes.

use medsynth_model::{IssuingBank, PaymentNetwork};
use rand::Rng;

/// A row of the issuer-prefix table. `bank: None` is the network default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IssuerPrefix {
    pub network: PaymentNetwork,
    pub bank: Option<IssuingBank>,
    pub prefix: &'static str,
}

const fn row(
    network: PaymentNetwork,
    bank: Option<IssuingBank>,
    prefix: &'static str,
) -> IssuerPrefix {
    IssuerPrefix {
        network,
        bank,
        prefix,
    }
}

pub const ISSUER_TABLE: [IssuerPrefix; 12] = [
    row(PaymentNetwork::Mir, Some(IssuingBank::Sberbank), "2202 20"),
    row(PaymentNetwork::Mir, Some(IssuingBank::Tinkoff), "2200 70"),
    row(PaymentNetwork::Mir, Some(IssuingBank::Vtb), "2200 40"),
    row(PaymentNetwork::Mir, None, "2200 56"),
    row(PaymentNetwork::Mastercard, Some(IssuingBank::Sberbank), "5228 60"),
    row(PaymentNetwork::Mastercard, Some(IssuingBank::Tinkoff), "5389 94"),
    row(PaymentNetwork::Mastercard, Some(IssuingBank::Vtb), "5211 94"),
    row(PaymentNetwork::Mastercard, None, "5112 23"),
    row(PaymentNetwork::Visa, Some(IssuingBank::Sberbank), "4039 33"),
    row(PaymentNetwork::Visa, Some(IssuingBank::Tinkoff), "4377 73"),
    row(PaymentNetwork::Visa, Some(IssuingBank::Vtb), "4986 29"),
    row(PaymentNetwork::Visa, None, "4306 43"),
];

/// Six-digit issuer prefix, grouped as `NNNN NN`.
///
/// Banks without their own range use the network default.
pub fn issuer_prefix(network: PaymentNetwork, bank: IssuingBank) -> &'static str {
    let mut default = "";
    for entry in ISSUER_TABLE.iter().filter(|e| e.network == network) {
        match entry.bank {
            Some(own) if own == bank => return entry.prefix,
            None => default = entry.prefix,
            Some(_) => {}
        }
    }
    default
}

/// `<prefix><2 digits> <4 digits> <4 digits>`, e.g. `2202 2047 1234 5678`.
pub fn generate_card_number<R: Rng + ?Sized>(
    network: PaymentNetwork,
    bank: IssuingBank,
    rng: &mut R,
) -> String {
    let prefix = issuer_prefix(network, bank);
    let tail: u32 = rng.random_range(10..=99);
    let second: u32 = rng.random_range(1000..=9999);
    let third: u32 = rng.random_range(1000..=9999);
    format!("{prefix}{tail} {second} {third}")
}
