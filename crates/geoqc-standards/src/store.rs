//! Loading and saving project files.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use tracing::{debug, info};

use geoqc_model::ProjectDefinition;

use crate::error::{Result, StandardsError};

/// Environment variable naming the project file when `--project` is absent.
pub const PROJECT_ENV_VAR: &str = "GEOQC_PROJECT";

/// Conventional extension of project files.
pub const PROJECT_FILE_EXTENSION: &str = "pgs";

/// New project with a single empty default category.
pub fn create_project(project_name: impl Into<String>, now: DateTime<Local>) -> ProjectDefinition {
    let project = ProjectDefinition::new(project_name, now);
    debug!(project = %project.project_name, "created project");
    project
}

/// Pick the project file: an explicit path wins, then `GEOQC_PROJECT`.
pub fn resolve_project_path(explicit: Option<&Path>) -> Result<PathBuf> {
    let from_env = std::env::var(PROJECT_ENV_VAR).ok();
    project_path_from(explicit, from_env.as_deref())
}

/// Pick the project path from an explicit argument or the environment value.
pub fn project_path_from(explicit: Option<&Path>, from_env: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }
    match from_env.map(str::trim) {
        Some(value) if !value.is_empty() => Ok(PathBuf::from(value)),
        _ => Err(StandardsError::NoProject {
            var: PROJECT_ENV_VAR,
        }),
    }
}

/// Read a project file and check that its table ids are unique.
pub fn load_project(path: &Path) -> Result<ProjectDefinition> {
    let text = fs::read_to_string(path).map_err(|source| StandardsError::io(path, source))?;
    let project: ProjectDefinition =
        serde_json::from_str(&text).map_err(|source| StandardsError::Json {
            path: path.to_path_buf(),
            source,
        })?;
    project.validate_ids()?;
    info!(
        project = %project.project_name,
        path = %path.display(),
        tables = project.tables().count(),
        "loaded project"
    );
    Ok(project)
}

/// Write a project as pretty-printed JSON, replacing any existing file.
pub fn save_project(project: &ProjectDefinition, path: &Path) -> Result<()> {
    let mut text = serde_json::to_string_pretty(project).map_err(StandardsError::Serialize)?;
    text.push('\n');
    fs::write(path, text).map_err(|source| StandardsError::io(path, source))?;
    info!(
        project = %project.project_name,
        path = %path.display(),
        "saved project"
    );
    Ok(())
}
