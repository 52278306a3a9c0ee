use crate::core::io::store::{ConformerStore, StoreError};
use std::collections::HashMap;
use tracing::debug;

/// Locator of the minimum-energy conformer in a store.
///
/// Ties resolve to the first occurrence in store order (stable argmin); an
/// empty store yields `None`, never a default locator.
pub fn min_energy_locator(store: &dyn ConformerStore) -> Result<Option<String>, StoreError> {
    let locators = store.locators()?;
    let mut best: Option<(String, f64)> = None;
    for locator in locators {
        let energy = store.energy(&locator)?;
        match &best {
            Some((_, lowest)) if energy >= *lowest => {}
            _ => best = Some((locator, energy)),
        }
    }
    Ok(best.map(|(locator, _)| locator))
}

/// Reference energy of one reagent: the stored energy of its minimum-energy
/// conformer, or `None` when the species has no stored conformer.
pub fn reference_energy(store: &dyn ConformerStore) -> Result<Option<f64>, StoreError> {
    match min_energy_locator(store)? {
        Some(locator) => store.energy(&locator).map(Some),
        None => Ok(None),
    }
}

/// Reaction energy: sum of product reference energies minus sum of reactant
/// reference energies.
///
/// Each reagent is identified by a species key so that a reagent appearing on
/// both sides is read from its store once; the memo is constructed fresh per
/// invocation and owned by this call, never shared process-wide. `None` when
/// any reagent has no stored conformer.
pub fn reaction_energy(
    reactants: &[(&str, &dyn ConformerStore)],
    products: &[(&str, &dyn ConformerStore)],
) -> Result<Option<f64>, StoreError> {
    let mut memo: HashMap<String, f64> = HashMap::new();
    let Some(rct_sum) = reagent_energy_sum(reactants, &mut memo)? else {
        return Ok(None);
    };
    let Some(prd_sum) = reagent_energy_sum(products, &mut memo)? else {
        return Ok(None);
    };
    Ok(Some(prd_sum - rct_sum))
}

fn reagent_energy_sum(
    reagents: &[(&str, &dyn ConformerStore)],
    memo: &mut HashMap<String, f64>,
) -> Result<Option<f64>, StoreError> {
    let mut total = 0.0;
    for (key, store) in reagents {
        let energy = match memo.get(*key) {
            Some(&energy) => energy,
            None => match reference_energy(*store)? {
                Some(energy) => {
                    memo.insert((*key).to_owned(), energy);
                    energy
                }
                None => {
                    debug!(species = key, "no stored conformer for reagent");
                    return Ok(None);
                }
            },
        };
        total += energy;
    }
    Ok(Some(total))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::io::store::MemoryStore;

    fn store(rows: &[(&str, f64)]) -> MemoryStore {
        let mut store = MemoryStore::new();
        for (loc, ene) in rows {
            store.insert(*loc, *ene);
        }
        store
    }

    #[test]
    fn stable_argmin_over_energies() {
        let store = store(&[("a", 3.0), ("b", 1.0), ("c", 1.0), ("d", 2.0)]);
        assert_eq!(min_energy_locator(&store).unwrap().as_deref(), Some("b"));
    }

    #[test]
    fn empty_store_yields_no_locator() {
        let store = MemoryStore::new();
        assert_eq!(min_energy_locator(&store).unwrap(), None);
        assert_eq!(reference_energy(&store).unwrap(), None);
    }

    #[test]
    fn reaction_energy_is_products_minus_reactants() {
        let rct1 = store(&[("c1", -2.0), ("c2", -2.5)]);
        let rct2 = store(&[("c1", -1.0)]);
        let prd1 = store(&[("c1", -4.0)]);
        let ene = reaction_energy(
            &[("rct1", &rct1), ("rct2", &rct2)],
            &[("prd1", &prd1)],
        )
        .unwrap();
        // -4.0 - (-2.5 + -1.0)
        assert_eq!(ene, Some(-0.5));
    }

    #[test]
    fn missing_reagent_conformers_propagate_as_none() {
        let rct = store(&[("c1", -2.0)]);
        let prd = MemoryStore::new();
        assert_eq!(
            reaction_energy(&[("rct", &rct)], &[("prd", &prd)]).unwrap(),
            None
        );
    }
}
