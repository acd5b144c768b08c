//! tc-project: cycle definition files, validation and the runner.

pub mod runner;
pub mod schema;
pub mod validate;

pub use runner::{build_model, run_cycle};
pub use schema::*;
pub use validate::{ValidationError, validate_cycle};

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Model error: {0}")]
    Eos(#[from] tc_eos::EosError),

    #[error("Cycle error: {0}")]
    Cycle(#[from] tc_cycle::CycleError),

    #[error("Report error: {0}")]
    Report(#[from] tc_report::ReportError),
}

pub fn load_yaml(path: &std::path::Path) -> ProjectResult<CycleDef> {
    let content = std::fs::read_to_string(path)?;
    let def: CycleDef = serde_yaml::from_str(&content)?;
    validate_cycle(&def)?;
    Ok(def)
}

pub fn save_yaml(path: &std::path::Path, def: &CycleDef) -> ProjectResult<()> {
    validate_cycle(def)?;
    let content = serde_yaml::to_string(def)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &std::path::Path) -> ProjectResult<CycleDef> {
    let content = std::fs::read_to_string(path)?;
    let def: CycleDef = serde_json::from_str(&content)?;
    validate_cycle(&def)?;
    Ok(def)
}

pub fn save_json(path: &std::path::Path, def: &CycleDef) -> ProjectResult<()> {
    validate_cycle(def)?;
    let content = serde_json::to_string_pretty(def)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Load by extension: `.json` as JSON, anything else as YAML.
pub fn load(path: &std::path::Path) -> ProjectResult<CycleDef> {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => load_json(path),
        _ => load_yaml(path),
    }
}
