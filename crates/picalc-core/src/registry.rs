//! Formula registry.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::agm::GaussLegendre;
use crate::bbp::BaileyBorweinPlouffe;
use crate::formula::{Formula, PiError, PiFormula};
use crate::machin::Machin;

/// Named formulas in registration order.
///
/// Built once at startup and only read afterwards.
#[derive(Default)]
pub struct Registry {
    entries: Vec<(String, Arc<dyn Formula>)>,
    index: HashMap<String, usize>,
}

impl Registry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the built-in formulas: `bbp`, `machin`, `agm`.
    pub fn builtin() -> Result<Self, PiError> {
        let mut registry = Self::new();
        registry.register(
            "bbp",
            Arc::new(PiFormula::new(Arc::new(BaileyBorweinPlouffe::new()))),
        )?;
        registry.register("machin", Arc::new(PiFormula::new(Arc::new(Machin::new()))))?;
        registry.register(
            "agm",
            Arc::new(PiFormula::new(Arc::new(GaussLegendre::new()))),
        )?;
        Ok(registry)
    }

    /// Add a formula under a unique name.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        formula: Arc<dyn Formula>,
    ) -> Result<(), PiError> {
        let name = name.into();
        if self.index.contains_key(&name) {
            return Err(PiError::DuplicateName(name));
        }
        self.index.insert(name.clone(), self.entries.len());
        self.entries.push((name, formula));
        Ok(())
    }

    /// Look up a formula by name.
    pub fn get(&self, name: &str) -> Result<Arc<dyn Formula>, PiError> {
        self.index
            .get(name)
            .map(|&i| Arc::clone(&self.entries[i].1))
            .ok_or_else(|| PiError::UnknownFormula(name.to_string()))
    }

    /// All registered names, in registration order.
    #[must_use]
    pub fn list_names(&self) -> Vec<&str> {
        self.entries.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// Registered `(name, formula)` pairs, in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Arc<dyn Formula>)> {
        self.entries.iter().map(|(name, f)| (name.as_str(), f))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("names", &self.list_names())
            .finish()
    }
}
