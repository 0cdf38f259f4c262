//! Row types for the reference tables.
//!
//! Fields are snake_case to match the columns; the serialized form is
//! camelCase, which is also the vocabulary callers use for `columns`.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;
use sqlx::FromRow;

/// A row type exposed over the bus.
pub trait Entity: Serialize {
    /// Display name used in not-found messages.
    const NAME: &'static str;

    /// Serialized column names, in table order.
    const COLUMNS: &'static [&'static str];
}

/// Serializers for `NUMERIC(_, 2)` columns.
///
/// The decoded `Decimal` does not always carry the column scale (a stored
/// `0.00` comes back as `0`), so values are rescaled before being written
/// out as strings.
mod numeric2 {
    use rust_decimal::Decimal;
    use serde::Serializer;

    const SCALE: u32 = 2;

    pub(super) fn to_fixed(value: &Decimal) -> String {
        let mut value = *value;
        value.rescale(SCALE);
        value.to_string()
    }

    pub fn serialize<S: Serializer>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&to_fixed(value))
    }

    pub fn serialize_option<S: Serializer>(
        value: &Option<Decimal>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(value) => serializer.serialize_str(&to_fixed(value)),
            None => serializer.serialize_none(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: i32,
    pub from: i32,
    pub to: i32,
    pub name: String,
    #[serde(serialize_with = "numeric2::serialize")]
    pub percentage: Decimal,
}

impl Entity for Category {
    const NAME: &'static str = "Category";
    const COLUMNS: &'static [&'static str] = &["id", "from", "to", "name", "percentage"];
}

#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct City {
    pub id: i32,
    pub name: String,
    pub first_shortened: String,
    pub second_shortened: String,
    pub third_shortened: String,
    pub to_bank: Option<String>,
    #[serde(serialize_with = "numeric2::serialize_option")]
    pub latitude: Option<Decimal>,
    #[serde(serialize_with = "numeric2::serialize_option")]
    pub longitude: Option<Decimal>,
    pub company_address: String,
    pub phone_prefix: i32,
    pub company_phones: Value,
    pub company_cellphones: Value,
}

impl Entity for City {
    const NAME: &'static str = "City";
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "name",
        "firstShortened",
        "secondShortened",
        "thirdShortened",
        "toBank",
        "latitude",
        "longitude",
        "companyAddress",
        "phonePrefix",
        "companyPhones",
        "companyCellphones",
    ];
}

#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Hierarchy {
    pub id: i32,
    pub code: String,
    pub name: String,
}

impl Entity for Hierarchy {
    const NAME: &'static str = "Hierarchy";
    const COLUMNS: &'static [&'static str] = &["id", "code", "name"];
}

#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Degree {
    pub id: i32,
    pub hierarchy_id: i32,
    pub code: String,
    pub name: String,
    pub shortened: String,
    pub correlative: Option<i32>,
    pub is_active: bool,
}

impl Entity for Degree {
    const NAME: &'static str = "Degree";
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "hierarchyId",
        "code",
        "name",
        "shortened",
        "correlative",
        "isActive",
    ];
}

#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Kinship {
    pub id: i32,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Entity for Kinship {
    const NAME: &'static str = "Kinship";
    const COLUMNS: &'static [&'static str] = &["id", "name", "createdAt", "updatedAt", "deletedAt"];
}

#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Breakdown {
    pub id: i32,
    pub code: i32,
    pub name: String,
}

impl Entity for Breakdown {
    const NAME: &'static str = "Breakdown";
    const COLUMNS: &'static [&'static str] = &["id", "code", "name"];
}

#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Unit {
    pub id: i32,
    pub breakdown_id: i32,
    pub district: String,
    pub code: i32,
    pub name: String,
    pub shortened: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Entity for Unit {
    const NAME: &'static str = "Unit";
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "breakdownId",
        "district",
        "code",
        "name",
        "shortened",
        "createdAt",
        "updatedAt",
    ];
}

#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Module {
    pub id: i32,
    pub name: String,
    pub display_name: String,
    pub description: String,
    pub shortened: String,
    pub url_prod: Option<String>,
    pub url_dev: Option<String>,
    pub url_manual: Option<String>,
    pub url_test: Option<String>,
}

impl Entity for Module {
    const NAME: &'static str = "Module";
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "name",
        "displayName",
        "description",
        "shortened",
        "urlProd",
        "urlDev",
        "urlManual",
        "urlTest",
    ];
}

#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ProcedureType {
    pub id: i32,
    pub module_id: i32,
    pub name: String,
    pub second_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Entity for ProcedureType {
    const NAME: &'static str = "ProcedureType";
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "moduleId",
        "name",
        "secondName",
        "createdAt",
        "updatedAt",
        "deletedAt",
    ];
}

#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ProcedureModality {
    pub id: i32,
    pub procedure_type_id: i32,
    pub name: String,
    pub shortened: String,
    pub is_valid: bool,
}

impl Entity for ProcedureModality {
    const NAME: &'static str = "ProcedureModality";
    const COLUMNS: &'static [&'static str] =
        &["id", "procedureTypeId", "name", "shortened", "isValid"];
}

#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ProcedureRequirement {
    pub id: i32,
    pub procedure_modality_id: i32,
    pub procedure_document_id: i32,
    pub number: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Entity for ProcedureRequirement {
    const NAME: &'static str = "ProcedureRequirement";
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "procedureModalityId",
        "procedureDocumentId",
        "number",
        "createdAt",
        "updatedAt",
        "deletedAt",
    ];
}

#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ProcedureDocument {
    pub id: i32,
    pub name: String,
    pub shortened: Option<String>,
    pub expire_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Entity for ProcedureDocument {
    const NAME: &'static str = "ProcedureDocument";
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "name",
        "shortened",
        "expireDate",
        "createdAt",
        "updatedAt",
    ];
}

#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct FinancialEntity {
    pub id: i32,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Entity for FinancialEntity {
    const NAME: &'static str = "FinancialEntity";
    const COLUMNS: &'static [&'static str] = &["id", "name", "createdAt", "updatedAt"];
}

#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct PensionEntity {
    pub id: i32,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub entity_type: String,
    pub name: String,
    pub is_active: bool,
}

impl Entity for PensionEntity {
    const NAME: &'static str = "PensionEntity";
    const COLUMNS: &'static [&'static str] = &["id", "type", "name", "isActive"];
}

#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct FileDossier {
    pub id: i64,
    pub name: String,
    pub shortened: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Entity for FileDossier {
    const NAME: &'static str = "FileDossier";
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "name",
        "shortened",
        "createdAt",
        "updatedAt",
        "deletedAt",
    ];
}

#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct RetirementFundAverage {
    pub id: i64,
    pub degree_id: i64,
    pub category_id: i64,
    pub retirement_fund_average: f64,
    pub is_active: bool,
}

impl Entity for RetirementFundAverage {
    const NAME: &'static str = "RetirementFundAverage";
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "degreeId",
        "categoryId",
        "retirementFundAverage",
        "isActive",
    ];
}

/// Document reference required by a module's procedures.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct DocumentSummary {
    pub id: i32,
    pub name: String,
}
