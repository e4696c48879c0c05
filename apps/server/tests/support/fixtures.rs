use chrono::{NaiveDate, TimeZone, Utc};
use freemed::models::{EmrAttachment, PatientInformation, PatientSearchResult};

use super::InMemoryStore;

pub fn patient_smith() -> PatientSearchResult {
    PatientSearchResult {
        last_name: "Smith".into(),
        first_name: "Jane".into(),
        middle_name: Some("Q".into()),
        patient_id: "SMJA0001".into(),
        age: 45,
        date_of_birth: NaiveDate::from_ymd_opt(1981, 3, 14).unwrap(),
        id: 1,
    }
}

pub fn smith_information() -> PatientInformation {
    PatientInformation {
        patient_name: "Smith, Jane Q".into(),
        patient_id: "SMJA0001".into(),
        date_of_birth: NaiveDate::from_ymd_opt(1981, 3, 14).unwrap(),
        language: Some("en".into()),
        date_of_birth_mdy: "03/14/1981".into(),
        age: "45 years".into(),
        address_line_1: Some("1 Main St".into()),
        address_line_2: None,
        city: Some("Springfield".into()),
        state: Some("IL".into()),
        postal: Some("62701".into()),
        csz: Some("Springfield, IL 62701".into()),
        hasallergy: true,
        pcp: Some("Jones, Pat".into()),
        facility: None,
        pharmacy: None,
    }
}

pub fn allergy_attachment(patient: i64, oid: i64) -> EmrAttachment {
    EmrAttachment {
        patient,
        module: "allergies".into(),
        oid,
        annotation: None,
        summary: Some("Penicillin".into()),
        stamp: Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap(),
        date_mdy: "05/01/2024".into(),
        module_name: "Allergies".into(),
        module_namespace: "Allergies".into(),
        locked: 0,
        id: oid + 100,
    }
}

pub fn seeded_store() -> InMemoryStore {
    InMemoryStore {
        patients: vec![patient_smith()],
        information: vec![(1, smith_information())],
        attachments: vec![allergy_attachment(1, 10), allergy_attachment(2, 11)],
        ..Default::default()
    }
}
