pub mod catalog;
pub mod error;
pub mod identity;
pub mod names;
pub mod payment;
pub mod record;
pub mod seasonality;
pub mod weights;

pub use catalog::{AnalysisPrice, SpecialistCatalog};
pub use error::{ConfigError, Result};
pub use identity::Identity;
pub use names::{Gender, NameEntry, NameTables};
pub use payment::{IssuingBank, PaymentNetwork};
pub use record::{VISIT_RECORD_HEADER, VisitRecord};
pub use seasonality::{MONTHS, SeasonalityIndex};
pub use weights::WeightMap;
