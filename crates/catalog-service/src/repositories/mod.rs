//! Repository layer for the Catalog Service.
//!
//! One repository per table. All queries are parameterized and ordered by
//! primary key.

pub mod lookup;

pub mod breakdowns;
pub mod categories;
pub mod cities;
pub mod degrees;
pub mod file_dossiers;
pub mod financial_entities;
pub mod hierarchies;
pub mod kinships;
pub mod modules;
pub mod pension_entities;
pub mod procedure_documents;
pub mod procedure_modalities;
pub mod procedure_requirements;
pub mod procedure_types;
pub mod retirement_fund_averages;
pub mod units;

pub use breakdowns::BreakdownsRepository;
pub use categories::CategoriesRepository;
pub use cities::CitiesRepository;
pub use degrees::DegreesRepository;
pub use file_dossiers::FileDossiersRepository;
pub use financial_entities::FinancialEntitiesRepository;
pub use hierarchies::HierarchiesRepository;
pub use kinships::KinshipsRepository;
pub use modules::ModulesRepository;
pub use pension_entities::PensionEntitiesRepository;
pub use procedure_documents::ProcedureDocumentsRepository;
pub use procedure_modalities::ProcedureModalitiesRepository;
pub use procedure_requirements::ProcedureRequirementsRepository;
pub use procedure_types::ProcedureTypesRepository;
pub use retirement_fund_averages::RetirementFundAveragesRepository;
pub use units::UnitsRepository;
