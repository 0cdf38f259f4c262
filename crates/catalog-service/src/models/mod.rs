//! Data models for the Catalog Service.

pub mod entities;

pub use entities::{
    Breakdown, Category, City, Degree, DocumentSummary, Entity, FileDossier, FinancialEntity,
    Hierarchy, Kinship, Module, PensionEntity, ProcedureDocument, ProcedureModality,
    ProcedureRequirement, ProcedureType, RetirementFundAverage, Unit,
};

use serde::Serialize;

/// Envelope wrapping retirement fund average results.
///
/// `service_status` is false when the lookup itself failed; callers treat
/// that as "no data available" rather than as an error.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceEnvelope<T> {
    pub data: T,
    pub service_status: bool,
}

impl<T> ServiceEnvelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            data,
            service_status: true,
        }
    }

    pub fn failed(data: T) -> Self {
        Self {
            data,
            service_status: false,
        }
    }
}

/// Response of `modules.findDocuments`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentsResponse {
    /// "success" or "error".
    pub status: &'static str,
    pub message: &'static str,
    pub data: Vec<DocumentSummary>,
}

/// Readiness probe response.
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    /// "ready" or "not_ready".
    pub status: &'static str,

    /// Database connectivity: "healthy" or "unhealthy".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<&'static str>,

    /// Bus connectivity: "connected", "disconnected" or "disabled".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bus: Option<&'static str>,

    /// Generic error message (no infrastructure details).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
