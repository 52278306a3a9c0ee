use crate::cli::EnergyArgs;
use crate::error::Result;
use std::path::PathBuf;
use torsa::core::io::store::{ConformerStore, FsConformerStore};
use torsa::workflows;
use tracing::info;

pub fn run(args: EnergyArgs) -> Result<()> {
    let rct_stores = open_all(&args.reactants)?;
    let prd_stores = open_all(&args.products)?;

    let rcts: Vec<(&str, &dyn ConformerStore)> = pair(&args.reactants, &rct_stores);
    let prds: Vec<(&str, &dyn ConformerStore)> = pair(&args.products, &prd_stores);

    info!(
        nreactants = rcts.len(),
        nproducts = prds.len(),
        "computing reaction energy"
    );
    match workflows::reaction_energy(&rcts, &prds)? {
        Some(energy) => println!("Reaction energy: {:.8}", energy),
        None => println!("Reaction energy unavailable: a reagent has no stored conformer."),
    }
    Ok(())
}

fn open_all(paths: &[PathBuf]) -> Result<Vec<FsConformerStore>> {
    paths
        .iter()
        .map(|path| Ok(FsConformerStore::open(path)?))
        .collect()
}

fn pair<'a>(
    paths: &'a [PathBuf],
    stores: &'a [FsConformerStore],
) -> Vec<(&'a str, &'a dyn ConformerStore)> {
    paths
        .iter()
        .zip(stores)
        .map(|(path, store)| {
            let key = path.to_str().unwrap_or("reagent");
            (key, store as &dyn ConformerStore)
        })
        .collect()
}
