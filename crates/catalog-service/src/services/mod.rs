//! Service layer for the Catalog Service.
//!
//! Services sit between handlers and repositories. They resolve column
//! projections, load relations, reshape rows and apply the not-found policy.
//! Every result is returned as a JSON value ready for the reply packet.

pub mod projection;
pub mod relations;

pub mod categories;
pub mod cities;
pub mod degrees;
pub mod file_dossiers;
pub mod financial_entities;
pub mod kinships;
pub mod modules;
pub mod pension_entities;
pub mod procedure_documents;
pub mod retirement_fund_averages;
pub mod units;

pub use categories::CategoriesService;
pub use cities::CitiesService;
pub use degrees::DegreesService;
pub use file_dossiers::FileDossiersService;
pub use financial_entities::FinancialEntitiesService;
pub use kinships::KinshipsService;
pub use modules::ModulesService;
pub use pension_entities::PensionEntitiesService;
pub use procedure_documents::ProcedureDocumentsService;
pub use retirement_fund_averages::RetirementFundAveragesService;
pub use units::UnitsService;
