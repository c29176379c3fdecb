use crate::core::{Pet, PetStore};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use std::fs;
use std::path::{Path, PathBuf};

/// Pretty-printed JSON array on the local filesystem. Each save rewrites the file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PetStore for JsonFileStore {
    fn load(&self) -> Result<Vec<Pet>> {
        if !self.path.exists() {
            tracing::debug!("No data file at {}, starting empty", self.path.display());
            return Ok(Vec::new());
        }

        let data = fs::read_to_string(&self.path)?;
        let pets: Vec<Pet> = serde_json::from_str(&data)?;
        for pet in &pets {
            pet.validate()?;
        }
        Ok(pets)
    }

    fn save(&self, pets: &[Pet]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(pets)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}
