//! In-memory type catalog.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use codemeta_core::{
    application::{ApplicationError, ports::ModelTypesLocator},
    domain::ProjectType,
    error::CodemetaResult,
};

/// Thread-safe in-memory pool of project types.
///
/// Clones share the same pool.
#[derive(Clone, Default)]
pub struct InMemoryCatalog {
    inner: Arc<RwLock<Vec<ProjectType>>>,
}

impl InMemoryCatalog {
    /// Create a new empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_types(types: impl IntoIterator<Item = ProjectType>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(types.into_iter().collect())),
        }
    }

    /// Add a type, replacing any type with the same full name.
    pub fn insert(&self, ty: ProjectType) -> CodemetaResult<()> {
        let mut inner = self.write()?;
        let full_name = ty.full_name();

        match inner.iter_mut().find(|t| t.full_name() == full_name) {
            Some(existing) => *existing = ty,
            None => inner.push(ty),
        }
        Ok(())
    }

    /// Exact, case-sensitive lookup by full name.
    pub fn find(&self, full_name: &str) -> CodemetaResult<Option<ProjectType>> {
        let inner = self.read()?;
        Ok(inner.iter().find(|t| t.full_name() == full_name).cloned())
    }

    pub fn len(&self) -> CodemetaResult<usize> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> CodemetaResult<bool> {
        Ok(self.read()?.is_empty())
    }

    fn read(&self) -> CodemetaResult<RwLockReadGuard<'_, Vec<ProjectType>>> {
        self.inner.read().map_err(|_| lock_poisoned())
    }

    fn write(&self) -> CodemetaResult<RwLockWriteGuard<'_, Vec<ProjectType>>> {
        self.inner.write().map_err(|_| lock_poisoned())
    }
}

fn lock_poisoned() -> codemeta_core::error::CodemetaError {
    ApplicationError::CatalogUnavailable {
        reason: "type catalog lock poisoned".into(),
    }
    .into()
}

impl ModelTypesLocator for InMemoryCatalog {
    fn all_types(&self) -> CodemetaResult<Vec<ProjectType>> {
        Ok(self.read()?.clone())
    }
}
