//! PostgreSQL implementation of [`PatientStore`].

use async_trait::async_trait;
use sqlx::{postgres::PgRow, PgPool, Row};

use super::search::{BindValue, PatientSearchQuery};
use super::traits::PatientStore;
use crate::models::{
    EmrAttachment, PatientInformation, PatientSearchResult, ALLERGY_ACTIVE, TABLE_ALLERGIES,
    TABLE_FACILITY, TABLE_MODULES, TABLE_PATIENT, TABLE_PATIENT_ADDRESS, TABLE_PATIENT_EMR,
    TABLE_PHARMACY, TABLE_PHYSICIAN,
};
use crate::schema::quote_ident;
use crate::Result;

#[derive(Clone)]
pub struct PostgresPatientStore {
    pool: PgPool,
}

impl PostgresPatientStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn information_sql() -> String {
    format!(
        r#"
        SELECT
            p.ptlname || ', ' || p.ptfname || COALESCE(' ' || p.ptmname, '') AS patient_name,
            p.ptid AS patient_id,
            p.ptdob AS date_of_birth,
            p.ptprimarylanguage AS language,
            to_char(p.ptdob, 'MM/DD/YYYY') AS date_of_birth_mdy,
            CASE WHEN age(p.ptdob) >= INTERVAL '2 years'
                THEN date_part('year', age(p.ptdob))::bigint || ' years'
                ELSE (date_part('year', age(p.ptdob)) * 12 + date_part('month', age(p.ptdob)))::bigint || ' months'
            END AS age,
            pa.line1 AS address_line_1,
            pa.line2 AS address_line_2,
            pa.city AS city,
            pa.stpr AS state,
            pa.postal AS postal,
            pa.city || ', ' || pa.stpr || ' ' || pa.postal AS csz,
            EXISTS (
                SELECT 1 FROM {allergies} al WHERE al.patient = p.id AND al.active = $2
            ) AS hasallergy,
            phy.phylname || ', ' || phy.phyfname || COALESCE(' ' || phy.phymname, '') AS pcp,
            fac.psrname || ' (' || fac.psrcity || ', ' || fac.psrstate || ')' AS facility,
            ph.phname || ' (' || ph.phcity || ', ' || ph.phstate || ')' AS pharmacy
        FROM {patient} p
        LEFT OUTER JOIN {address} pa ON pa.patient = p.id AND pa.active = TRUE
        LEFT OUTER JOIN {physician} phy ON phy.id = p.ptpcp
        LEFT OUTER JOIN {facility} fac ON fac.id = p.ptprimaryfacility
        LEFT OUTER JOIN {pharmacy} ph ON ph.id = p.ptpharmacy
        WHERE p.id = $1
        ORDER BY pa.id
        LIMIT 1
        "#,
        allergies = quote_ident(TABLE_ALLERGIES),
        patient = quote_ident(TABLE_PATIENT),
        address = quote_ident(TABLE_PATIENT_ADDRESS),
        physician = quote_ident(TABLE_PHYSICIAN),
        facility = quote_ident(TABLE_FACILITY),
        pharmacy = quote_ident(TABLE_PHARMACY),
    )
}

fn attachments_sql(with_module: bool) -> String {
    let module_filter = if with_module { " AND p.module = $2" } else { "" };
    format!(
        r#"
        SELECT
            p.patient AS patient,
            p.module AS module,
            p.oid AS oid,
            p.annotation AS annotation,
            p.summary AS summary,
            p.stamp AS stamp,
            to_char(p.stamp, 'MM/DD/YYYY') AS date_mdy,
            m.module_name AS module_name,
            m.module_class AS module_namespace,
            p.locked AS locked,
            p.id AS id
        FROM {emr} p
        LEFT OUTER JOIN {modules} m ON m.module_table = p.module
        WHERE p.patient = $1{module_filter} AND m.module_hidden = FALSE
        ORDER BY p.stamp DESC, p.id
        "#,
        emr = quote_ident(TABLE_PATIENT_EMR),
        modules = quote_ident(TABLE_MODULES),
        module_filter = module_filter,
    )
}

fn search_row(row: &PgRow) -> std::result::Result<PatientSearchResult, sqlx::Error> {
    Ok(PatientSearchResult {
        last_name: row.try_get("last_name")?,
        first_name: row.try_get("first_name")?,
        middle_name: row.try_get("middle_name")?,
        patient_id: row.try_get("patient_id")?,
        age: row.try_get("age")?,
        date_of_birth: row.try_get("date_of_birth")?,
        id: row.try_get("id")?,
    })
}

fn information_row(row: &PgRow) -> std::result::Result<PatientInformation, sqlx::Error> {
    Ok(PatientInformation {
        patient_name: row.try_get("patient_name")?,
        patient_id: row.try_get("patient_id")?,
        date_of_birth: row.try_get("date_of_birth")?,
        language: row.try_get("language")?,
        date_of_birth_mdy: row.try_get("date_of_birth_mdy")?,
        age: row.try_get("age")?,
        address_line_1: row.try_get("address_line_1")?,
        address_line_2: row.try_get("address_line_2")?,
        city: row.try_get("city")?,
        state: row.try_get("state")?,
        postal: row.try_get("postal")?,
        csz: row.try_get("csz")?,
        hasallergy: row.try_get("hasallergy")?,
        pcp: row.try_get("pcp")?,
        facility: row.try_get("facility")?,
        pharmacy: row.try_get("pharmacy")?,
    })
}

fn attachment_row(row: &PgRow) -> std::result::Result<EmrAttachment, sqlx::Error> {
    Ok(EmrAttachment {
        patient: row.try_get("patient")?,
        module: row.try_get("module")?,
        oid: row.try_get("oid")?,
        annotation: row.try_get("annotation")?,
        summary: row.try_get("summary")?,
        stamp: row.try_get("stamp")?,
        date_mdy: row.try_get("date_mdy")?,
        module_name: row.try_get("module_name")?,
        module_namespace: row.try_get("module_namespace")?,
        locked: row.try_get("locked")?,
        id: row.try_get("id")?,
    })
}

#[async_trait]
impl PatientStore for PostgresPatientStore {
    async fn search(&self, query: &PatientSearchQuery) -> Result<Vec<PatientSearchResult>> {
        let (sql, bind_values) = query.build_sql();

        let mut query_builder = sqlx::query(&sql);
        for value in bind_values {
            query_builder = match value {
                BindValue::Text(v) => query_builder.bind(v),
                BindValue::Int(v) => query_builder.bind(v),
            };
        }

        let rows = query_builder.fetch_all(&self.pool).await?;
        let results = rows
            .iter()
            .map(search_row)
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(results)
    }

    async fn information(&self, patient: i64) -> Result<Option<PatientInformation>> {
        let row = sqlx::query(&information_sql())
            .bind(patient)
            .bind(ALLERGY_ACTIVE)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => Ok(Some(information_row(&row)?)),
            None => Ok(None),
        }
    }

    async fn attachments(
        &self,
        patient: i64,
        module: Option<&str>,
    ) -> Result<Vec<EmrAttachment>> {
        let sql = attachments_sql(module.is_some());
        let mut query = sqlx::query(&sql).bind(patient);
        if let Some(module) = module {
            query = query.bind(module);
        }

        let rows = query.fetch_all(&self.pool).await?;
        let attachments = rows
            .iter()
            .map(attachment_row)
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(attachments)
    }
}
