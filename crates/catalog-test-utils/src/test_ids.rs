//! Fixed ids of the seeded reference data.
//!
//! Ids are inserted explicitly so tests can name rows without looking them up.

// Categories
pub const CATEGORY_BASE: i64 = 1;
pub const CATEGORY_SENIOR: i64 = 2;

// Cities
pub const CITY_LA_PAZ: i64 = 1;
pub const CITY_ORURO: i64 = 2;

// Hierarchies and degrees
pub const HIERARCHY_GENERALS: i64 = 1;
pub const HIERARCHY_OFFICERS: i64 = 2;
pub const HIERARCHY_EMPTY: i64 = 3;
pub const DEGREE_GENERAL: i64 = 1;
pub const DEGREE_COLONEL: i64 = 2;
pub const DEGREE_MAJOR: i64 = 3;

// Kinships (KINSHIP_DELETED is soft deleted)
pub const KINSHIP_SPOUSE: i64 = 1;
pub const KINSHIP_CHILD: i64 = 2;
pub const KINSHIP_DELETED: i64 = 3;

// Breakdowns and units
pub const BREAKDOWN_COMMAND: i64 = 1;
pub const BREAKDOWN_EMPTY: i64 = 2;
pub const UNIT_HEADQUARTERS: i64 = 1;
pub const UNIT_DISTRICT: i64 = 2;

// Procedure documents
pub const DOCUMENT_ID_CARD: i64 = 1;
pub const DOCUMENT_MEMORIAL: i64 = 2;
/// Has no abbreviation (NULL).
pub const DOCUMENT_BIRTH_CERTIFICATE: i64 = 3;
/// Has an empty abbreviation.
pub const DOCUMENT_PAYSLIP: i64 = 4;

// Modules, procedure types, modalities and requirements
pub const MODULE_COMPLEMENT: i64 = 1;
pub const MODULE_LOANS: i64 = 2;
/// Module without procedure types.
pub const MODULE_EMPTY: i64 = 3;
pub const MISSING_MODULE: i64 = 99;

pub const PROCEDURE_TYPE_RETIREMENT: i64 = 1;
/// Soft deleted, belongs to `MODULE_COMPLEMENT`.
pub const PROCEDURE_TYPE_DELETED: i64 = 2;
pub const PROCEDURE_TYPE_LOAN: i64 = 3;

pub const MODALITY_AGE: i64 = 1;
pub const MODALITY_DISABILITY: i64 = 2;
/// Belongs to the deleted procedure type.
pub const MODALITY_ORPHANED: i64 = 3;
pub const MODALITY_LOAN: i64 = 4;

pub const REQUIREMENT_AGE_ID_CARD: i64 = 1;
pub const REQUIREMENT_AGE_MEMORIAL: i64 = 2;
pub const REQUIREMENT_DISABILITY_ID_CARD: i64 = 3;
/// Soft deleted, asks for the birth certificate.
pub const REQUIREMENT_DELETED: i64 = 4;

// Financial and pension entities (PENSION_ENTITY_INACTIVE has is_active = false)
pub const FINANCIAL_ENTITY_BANK: i64 = 1;
pub const FINANCIAL_ENTITY_COOPERATIVE: i64 = 2;
pub const PENSION_ENTITY_AFP: i64 = 1;
pub const PENSION_ENTITY_INACTIVE: i64 = 2;

// File dossiers (FILE_DOSSIER_DELETED is soft deleted)
pub const FILE_DOSSIER_PERSONAL: i64 = 1;
pub const FILE_DOSSIER_CONTRIBUTIONS: i64 = 2;
pub const FILE_DOSSIER_DELETED: i64 = 3;

// Retirement fund averages (RFA_INACTIVE has is_active = false)
pub const RFA_GENERAL_BASE: i64 = 1;
pub const RFA_GENERAL_SENIOR: i64 = 2;
pub const RFA_INACTIVE: i64 = 3;

/// An id no table uses.
pub const UNKNOWN_ID: i64 = 9999;
