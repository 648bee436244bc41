//! Formula selection logic.

use std::sync::Arc;

use picalc_core::formula::{Formula, PiError};
use picalc_core::registry::Registry;

use crate::request::FormulaSelector;

/// Get the `(name, formula)` pairs a selector refers to.
pub fn get_formulas_to_run(
    selector: &FormulaSelector,
    registry: &Registry,
) -> Result<Vec<(String, Arc<dyn Formula>)>, PiError> {
    match selector {
        FormulaSelector::All => Ok(registry
            .iter()
            .map(|(name, formula)| (name.to_string(), Arc::clone(formula)))
            .collect()),
        FormulaSelector::Single(name) => {
            let formula = registry.get(name)?;
            Ok(vec![(name.clone(), formula)])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_all() {
        let registry = Registry::builtin().unwrap();
        let formulas = get_formulas_to_run(&FormulaSelector::All, &registry).unwrap();
        let names: Vec<&str> = formulas.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, vec!["bbp", "machin", "agm"]);
    }

    #[test]
    fn select_single() {
        let registry = Registry::builtin().unwrap();
        let formulas =
            get_formulas_to_run(&FormulaSelector::Single("machin".into()), &registry).unwrap();
        assert_eq!(formulas.len(), 1);
        assert_eq!(formulas[0].0, "machin");
        assert_eq!(formulas[0].1.name(), "Machin");
    }

    #[test]
    fn select_unknown() {
        let registry = Registry::builtin().unwrap();
        let result = get_formulas_to_run(&FormulaSelector::Single("unknown".into()), &registry);
        assert_eq!(result.err(), Some(PiError::UnknownFormula("unknown".into())));
    }

    #[test]
    fn select_all_from_empty_registry() {
        let registry = Registry::new();
        assert!(get_formulas_to_run(&FormulaSelector::All, &registry)
            .unwrap()
            .is_empty());
    }
}
