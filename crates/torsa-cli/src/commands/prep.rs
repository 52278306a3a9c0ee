use crate::cli::PrepArgs;
use crate::error::Result;
use crate::input::InputDoc;
use indicatif::{ProgressBar, ProgressStyle};
use torsa::core::io::store::{ConformerStore, FsConformerStore, MemoryStore};
use torsa::engine::grid;
use torsa::engine::reduction::GraphMethylDetector;
use torsa::workflows;
use tracing::info;

pub fn run(args: PrepArgs) -> Result<()> {
    info!("Loading input document from {:?}", &args.input);
    let doc = InputDoc::load(&args.input)?;
    let zma = doc.zmatrix()?;

    let store: Box<dyn ConformerStore> = match &args.store {
        Some(path) => {
            info!("Opening conformer store at {:?}", path);
            Box::new(FsConformerStore::open(path)?)
        }
        None => Box::new(MemoryStore::new()),
    };

    let prep = workflows::prepare_rotors(
        &zma,
        &doc.species,
        store.as_ref(),
        doc.scan.model,
        doc.scan.increment,
        &doc.ts,
        &GraphMethylDetector,
    )?;

    if prep.is_empty() {
        println!("No torsions to scan for this species.");
        return Ok(());
    }

    if let Some(source) = &prep.source {
        println!("Torsion names resolved from: {}", source);
    }
    if let Some(locator) = &prep.min_locator {
        println!("Minimum-energy conformer: {}", locator);
    }

    for ((group, grid), sym_nums) in prep
        .groups
        .iter()
        .zip(&prep.grids)
        .zip(&prep.sym_nums)
    {
        let npoints: usize = grid.iter().map(Vec::len).product();
        println!(
            "Rotor {} ({}D): {} grid points, symmetry {:?}",
            group,
            group.len(),
            npoints,
            sym_nums
        );
        for (name, values) in group.iter().zip(grid) {
            let degrees: Vec<f64> = values.iter().map(|v| v.to_degrees().round()).collect();
            println!("  {} -> {:?} deg", name, degrees);
        }

        if args.expand {
            expand(group.to_string(), grid)?;
        }
    }

    Ok(())
}

/// Enumerates every grid point of one rotor group behind a progress bar, the
/// way the external scan driver will walk it.
fn expand(label: String, grid: &grid::TorsGrid) -> Result<()> {
    let (points, values) = grid::expand_grid(grid)?;
    let pb = ProgressBar::new(points.len() as u64).with_style(
        ProgressStyle::with_template("{msg} [{bar:30}] {pos}/{len}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    pb.set_message(label);
    for (point, value) in points.iter().zip(&values) {
        let degrees: Vec<f64> = value.iter().map(|v| v.to_degrees().round()).collect();
        pb.println(format!("    {:?} = {:?} deg", point, degrees));
        pb.inc(1);
    }
    pb.finish_and_clear();
    Ok(())
}
