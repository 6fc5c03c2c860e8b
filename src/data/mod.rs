//! Read-only JSON data store for projects, skills and education
//!
//! Each query re-reads the file from disk. A missing or malformed file is
//! logged and treated as empty data; handlers never see an error.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

/// A portfolio project record
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub featured: bool,

    /// Additional fields (links, images, dates) passed through to views
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// Contents of projects.json
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ProjectsFile {
    projects: Vec<Project>,
}

/// Contents of education.json
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationData {
    pub education: Vec<Value>,
    pub certifications: Vec<Value>,
    pub objectives: Vec<String>,
}

/// Contents of skills.json
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct SkillsFile {
    skills: Vec<Value>,
}

/// Loads structured site data from a directory of JSON files
#[derive(Clone)]
pub struct DataStore {
    data_dir: PathBuf,
}

impl DataStore {
    /// Create a data store rooted at the given directory
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
        }
    }

    /// All projects, in file order
    pub fn projects(&self) -> Vec<Project> {
        self.load::<ProjectsFile>("projects.json").projects
    }

    /// All skill records
    pub fn skills(&self) -> Vec<Value> {
        self.load::<SkillsFile>("skills.json").skills
    }

    /// Education, certifications and objectives
    pub fn education(&self) -> EducationData {
        self.load("education.json")
    }

    /// Raw JSON contents of a data file, for the API endpoints. Errors
    /// degrade to an empty object.
    pub fn raw(&self, filename: &str) -> Value {
        self.read(filename)
            .unwrap_or_else(|| Value::Object(Default::default()))
    }

    fn load<T: Default + for<'de> Deserialize<'de>>(&self, filename: &str) -> T {
        match self.read(filename) {
            Some(value) => match serde_json::from_value(value) {
                Ok(data) => data,
                Err(e) => {
                    tracing::error!("Unexpected shape in data file {}: {}", filename, e);
                    T::default()
                }
            },
            None => T::default(),
        }
    }

    fn read(&self, filename: &str) -> Option<Value> {
        let path = self.data_dir.join(filename);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                tracing::error!("Data file not found: {:?}: {}", path, e);
                return None;
            }
        };
        match serde_json::from_str(&content) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::error!("Invalid JSON in data file {:?}: {}", path, e);
                None
            }
        }
    }
}

/// Split projects into (featured, other), preserving file order
pub fn partition_featured(projects: Vec<Project>) -> (Vec<Project>, Vec<Project>) {
    projects.into_iter().partition(|p| p.featured)
}

/// Find a project by slug
pub fn find_by_slug<'a>(projects: &'a [Project], slug: &str) -> Option<&'a Project> {
    projects.iter().find(|p| p.slug == slug)
}

/// Up to `limit` projects sharing at least one tag with the given project
pub fn related_projects(projects: &[Project], to: &Project, limit: usize) -> Vec<Project> {
    projects
        .iter()
        .filter(|p| p.slug != to.slug && p.tags.iter().any(|t| to.tags.contains(t)))
        .take(limit)
        .cloned()
        .collect()
}

/// Sorted, deduplicated union of all tags
pub fn unique_tags<'a, I>(tag_lists: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a Vec<String>>,
{
    let set: BTreeSet<&String> = tag_lists.into_iter().flatten().collect();
    set.into_iter().cloned().collect()
}
