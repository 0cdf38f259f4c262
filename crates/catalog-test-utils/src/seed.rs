//! Reference data set for integration tests.
//!
//! Besides ordinary rows the set contains rows that must stay invisible:
//! soft-deleted kinships, procedure types, requirements and file dossiers,
//! plus an inactive retirement fund average.

use sqlx::PgPool;

const SEED_SQL: &str = r#"
INSERT INTO categories (id, "from", "to", name, percentage) VALUES
    (1, 0, 4, '0%', 0.00),
    (2, 5, 9, '15%', 15.50);

INSERT INTO cities (id, name, first_shortened, second_shortened, third_shortened, to_bank,
                    latitude, longitude, company_address, phone_prefix, company_phones,
                    company_cellphones) VALUES
    (1, 'La Paz', 'LP', 'LPZ', 'L.P.', 'LPZ01', -16.50, -68.10, 'Av. 6 de Agosto 2354', 2,
     '["2440000", "2440001"]', '["70000000"]'),
    (2, 'Oruro', 'OR', 'ORU', 'OR.', NULL, NULL, NULL, 'Calle Bolivar 100', 2, '[]', '[]');

INSERT INTO hierarchies (id, code, name) VALUES
    (1, '01', 'Generales'),
    (2, '02', 'Jefes'),
    (3, '03', 'Sin grados');

INSERT INTO degrees (id, hierarchy_id, code, name, shortened, correlative, is_active) VALUES
    (1, 1, '0101', 'General', 'GRAL.', 1, true),
    (2, 2, '0201', 'Coronel', 'CNL.', 2, true),
    (3, 2, '0202', 'Mayor', 'MY.', NULL, false);

INSERT INTO kinships (id, name, created_at, updated_at, deleted_at) VALUES
    (1, 'Esposa', '2024-01-01T00:00:00Z', '2024-01-01T00:00:00Z', NULL),
    (2, 'Hijo', '2024-01-01T00:00:00Z', '2024-01-01T00:00:00Z', NULL),
    (3, 'Ahijado', '2024-01-01T00:00:00Z', '2024-01-01T00:00:00Z', '2024-06-01T00:00:00Z');

INSERT INTO breakdowns (id, code, name) VALUES
    (1, 10, 'Comando General'),
    (2, 20, 'Sin unidades');

INSERT INTO units (id, breakdown_id, district, code, name, shortened, created_at, updated_at) VALUES
    (1, 1, 'La Paz', 101, 'Comando General', 'CMDO.', '2024-01-01T00:00:00Z', '2024-01-01T00:00:00Z'),
    (2, 1, 'Oruro', 102, 'Comando Departamental', 'CMDO. DPTAL.', '2024-01-01T00:00:00Z', '2024-01-01T00:00:00Z');

INSERT INTO procedure_documents (id, name, shortened, expire_date, created_at, updated_at) VALUES
    (1, 'Cedula de identidad', 'CI', NULL, '2024-01-01T00:00:00Z', '2024-01-01T00:00:00Z'),
    (2, 'Memorial', 'MEM', NULL, '2024-01-01T00:00:00Z', '2024-01-01T00:00:00Z'),
    (3, 'Certificado de nacimiento', NULL, NULL, '2024-01-01T00:00:00Z', '2024-01-01T00:00:00Z'),
    (4, 'Boleta de pago', '', '2030-12-31T00:00:00Z', '2024-01-01T00:00:00Z', '2024-01-01T00:00:00Z');

INSERT INTO modules (id, name, display_name, description, shortened, url_prod, url_dev,
                     url_manual, url_test) VALUES
    (1, 'complementary_economic', 'Complemento Economico', 'Pago del complemento', 'CE',
     'https://ce.example.org', NULL, NULL, NULL),
    (2, 'loans', 'Prestamos', 'Prestamos a afiliados', 'PRE', NULL, NULL, NULL, NULL),
    (3, 'archive', 'Archivo', 'Sin tramites', 'ARC', NULL, NULL, NULL, NULL);

INSERT INTO procedure_types (id, module_id, name, second_name, created_at, updated_at, deleted_at) VALUES
    (1, 1, 'Jubilacion', 'Vejez', '2024-01-01T00:00:00Z', '2024-01-01T00:00:00Z', NULL),
    (2, 1, 'Tramite retirado', NULL, '2024-01-01T00:00:00Z', '2024-01-01T00:00:00Z', '2024-03-01T00:00:00Z'),
    (3, 2, 'Prestamo regular', NULL, '2024-01-01T00:00:00Z', '2024-01-01T00:00:00Z', NULL);

INSERT INTO procedure_modalities (id, procedure_type_id, name, shortened, is_valid) VALUES
    (1, 1, 'Por edad', 'EDAD', true),
    (2, 1, 'Por invalidez', 'INV', true),
    (3, 2, 'Modalidad huerfana', 'HUE', false),
    (4, 3, 'Prestamo estacional', 'EST', true);

INSERT INTO procedure_requirements (id, procedure_modality_id, procedure_document_id, number,
                                    created_at, updated_at, deleted_at) VALUES
    (1, 1, 1, 1, '2024-01-01T00:00:00Z', '2024-01-01T00:00:00Z', NULL),
    (2, 1, 2, 2, '2024-01-01T00:00:00Z', '2024-01-01T00:00:00Z', NULL),
    (3, 2, 1, 1, '2024-01-01T00:00:00Z', '2024-01-01T00:00:00Z', NULL),
    (4, 2, 3, 2, '2024-01-01T00:00:00Z', '2024-01-01T00:00:00Z', '2024-05-01T00:00:00Z'),
    (5, 3, 4, 1, '2024-01-01T00:00:00Z', '2024-01-01T00:00:00Z', NULL),
    (6, 4, 2, 1, '2024-01-01T00:00:00Z', '2024-01-01T00:00:00Z', NULL);

INSERT INTO financial_entities (id, name, created_at, updated_at) VALUES
    (1, 'Banco Union', '2024-01-01T00:00:00Z', '2024-01-01T00:00:00Z'),
    (2, 'Cooperativa San Martin', '2024-01-01T00:00:00Z', '2024-01-01T00:00:00Z');

INSERT INTO pension_entities (id, type, name, is_active) VALUES
    (1, 'AFP', 'Futuro de Bolivia', true),
    (2, 'AFP', 'Prevision', false);

INSERT INTO file_dossiers (id, name, shortened, created_at, updated_at, deleted_at) VALUES
    (1, 'Expediente personal', 'EXP', '2024-01-01T00:00:00Z', '2024-01-01T00:00:00Z', NULL),
    (2, 'Aportes', 'APO', '2024-01-01T00:00:00Z', '2024-01-01T00:00:00Z', NULL),
    (3, 'Expediente anulado', 'ANU', '2024-01-01T00:00:00Z', '2024-01-01T00:00:00Z', '2024-02-01T00:00:00Z');

INSERT INTO retirement_fund_averages (id, degree_id, category_id, retirement_fund_average, is_active) VALUES
    (1, 1, 1, 1500.5, true),
    (2, 1, 2, 1800.0, true),
    (3, 2, 1, 999.0, false);
"#;

/// Insert the reference data set.
///
/// # Example
/// ```rust,ignore
/// #[sqlx::test(migrations = "../../migrations")]
/// async fn test_lookup(pool: PgPool) -> Result<()> {
///     seed_catalog(&pool).await?;
///     // ...
/// }
/// ```
pub async fn seed_catalog(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(SEED_SQL).execute(pool).await?;
    Ok(())
}
