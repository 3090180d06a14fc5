use clap::Args;
use ecoroute_emissions::{
    json::types::{JsonEmissionsResponse, JsonVehicle},
    problem::{
        engine_type::EngineType, route_segment::RouteSegment, vehicle_category::VehicleCategory,
    },
    saved::route_estimate::estimate_routes,
};

use crate::{parsers, table::print_estimate};

#[derive(Args)]
pub struct EstimateSegmentsArgs {
    /// A route alternative as <meters>,<duration>, e.g. 10000,20m. Repeat for
    /// every alternative, in preference order.
    #[arg(short, long = "route", value_parser = parsers::parse_route_segment)]
    routes: Vec<RouteSegment>,

    /// Pickup Truck, SUV or Sedan
    #[arg(short, long, default_value = "Sedan")]
    category: VehicleCategory,

    /// gas, diesel, hybrid or ev
    #[arg(short, long, default_value = "gas")]
    engine: EngineType,

    /// Print the JSON response instead of a table
    #[arg(long)]
    json: bool,
}

pub fn run(args: EstimateSegmentsArgs) -> anyhow::Result<()> {
    let estimate = estimate_routes(&args.routes, args.category, args.engine);
    let vehicle = JsonVehicle {
        category: args.category,
        engine: args.engine,
    };

    print_estimate(&vehicle, &JsonEmissionsResponse::from(&estimate), args.json)?;

    Ok(())
}
