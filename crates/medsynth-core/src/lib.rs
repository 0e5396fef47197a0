//! Record-synthesis engine for fictitious medical visits.
//!
//! Every operation takes its random source explicitly so runs can be
//! seeded and reproduced.
//!
//! # Example
//!
//! ```ignore
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use medsynth_core::{DatasetGenerator, GenerationInput, VisitClock};
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let generator = DatasetGenerator::new(GenerationInput {
//!     catalog: &catalog,
//!     seasonality: &seasonality,
//!     identities: &identities,
//!     bank_weights: &banks,
//!     payment_weights: &networks,
//!     clock: &VisitClock::default(),
//! })?;
//! let records = generator.generate(100, &mut rng)?;
//! ```

pub mod analyses;
pub mod card;
pub mod clock;
pub mod dataset;
pub mod error;
pub mod identity;
pub mod names;
pub mod specialist;
pub mod symptoms;

pub use analyses::{choose_analyses, price_analyses};
pub use card::{ISSUER_TABLE, IssuerPrefix, generate_card_number, issuer_prefix};
pub use clock::{VisitClock, format_timestamp, parse_time_of_day};
pub use dataset::{
    DatasetGenerator, GeneratedVisit, GenerationInput, PaymentDraw, generate_dataset,
};
pub use error::{GenerationError, Result};
pub use identity::{snils_check_digits, synthesize_identities, validate_snils};
pub use names::NameGenerator;
pub use specialist::{SpecialistSelector, select_specialist};
pub use symptoms::{apply_seasonality, choose_symptoms};
