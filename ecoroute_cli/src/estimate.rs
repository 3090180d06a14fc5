use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use clap::Args;
use ecoroute_emissions::json::types::{JsonEmissionsRequest, JsonEmissionsResponse, JsonVehicle};
use rayon::prelude::*;
use tracing::{error, info};

use crate::{file_utils::json_inputs, table::print_estimate};

#[derive(Args)]
pub struct EstimateArgs {
    /// A request file, or a folder searched recursively for .json request files
    #[arg(short = 'i', long)]
    input: PathBuf,

    /// Print the JSON response instead of a table
    #[arg(long)]
    json: bool,
}

fn estimate_file(path: &Path) -> anyhow::Result<(JsonVehicle, JsonEmissionsResponse)> {
    let f = File::open(path)?;
    let request: JsonEmissionsRequest = serde_json::from_reader(BufReader::new(f))?;
    let response = request.estimate()?;

    Ok((request.vehicle, response))
}

pub fn run(args: EstimateArgs) -> anyhow::Result<()> {
    let paths = json_inputs(&args.input)?;
    info!("Estimating {} request file(s)", paths.len());

    let results: Vec<_> = paths
        .into_par_iter()
        .map(|path| {
            let result = estimate_file(&path);
            (path, result)
        })
        .collect();

    let total = results.len();
    let mut failed = 0;

    for (path, result) in results {
        match result {
            Ok((vehicle, response)) => {
                if total > 1 {
                    println!("{}", path.display());
                }
                print_estimate(&vehicle, &response, args.json)?;
            }
            Err(err) => {
                failed += 1;
                error!("{}: {:#}", path.display(), err);
            }
        }
    }

    if failed > 0 {
        anyhow::bail!("{} of {} request file(s) could not be estimated", failed, total);
    }

    Ok(())
}
