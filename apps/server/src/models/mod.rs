//! Persistent record types.
//!
//! Each module declares its table (and optionally its EMR module key) and
//! exposes a `register` function. [`register_all`] is called once at startup.

pub mod allergies;
pub mod appointment_template;
pub mod billkey;
pub mod facility;
pub mod modules;
pub mod patient;
pub mod patient_address;
pub mod patient_emr;
pub mod patient_ids;
pub mod pharmacy;
pub mod physician;
pub mod projections;

pub use allergies::{AllergyRecord, ALLERGY_ACTIVE, TABLE_ALLERGIES};
pub use appointment_template::{AppointmentTemplateRecord, TABLE_APPOINTMENT_TEMPLATE};
pub use billkey::{BillkeyRecord, TABLE_BILLKEY};
pub use facility::{FacilityRecord, TABLE_FACILITY};
pub use modules::{ModuleMetadataRecord, TABLE_MODULES};
pub use patient::{PatientRecord, TABLE_PATIENT};
pub use patient_address::{PatientAddressRecord, TABLE_PATIENT_ADDRESS};
pub use patient_emr::{PatientEmrRecord, TABLE_PATIENT_EMR};
pub use patient_ids::{PatientIdRecord, TABLE_PATIENT_ID};
pub use pharmacy::{PharmacyRecord, TABLE_PHARMACY};
pub use physician::{PhysicianRecord, TABLE_PHYSICIAN};
pub use projections::{EmrAttachment, PatientInformation, PatientSearchResult};

use crate::schema::Registry;

/// Register every record type and module.
pub fn register_all(registry: &mut Registry) {
    patient::register(registry);
    patient_address::register(registry);
    patient_ids::register(registry);
    patient_emr::register(registry);
    modules::register(registry);
    allergies::register(registry);
    appointment_template::register(registry);
    billkey::register(registry);
    physician::register(registry);
    facility::register(registry);
    pharmacy::register(registry);
}
