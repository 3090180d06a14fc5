use clap::{Args, ValueEnum};
use ecoroute_emissions::{
    json::types::{JsonEmissionsResponse, JsonVehicle},
    problem::{engine_type::EngineType, vehicle_category::VehicleCategory},
    saved::route_estimate::estimate_routes,
};
use ecoroute_route_providers::{
    graphhopper_api::GraphHopperProfile, mapbox_api::MapboxProfile, route_client::RouteClient,
    route_provider::RouteProvider,
};
use tracing::info;

use crate::{parsers, table::print_estimate};

#[derive(Clone, Copy, ValueEnum)]
pub enum ProviderArg {
    Mapbox,
    Graphhopper,
    Osrm,
}

impl ProviderArg {
    fn provider(self, traffic: bool) -> RouteProvider {
        match self {
            ProviderArg::Mapbox => RouteProvider::Mapbox {
                profile: if traffic {
                    MapboxProfile::DrivingTraffic
                } else {
                    MapboxProfile::Driving
                },
            },
            ProviderArg::Graphhopper => RouteProvider::GraphHopperApi {
                gh_profile: GraphHopperProfile::Car,
            },
            ProviderArg::Osrm => RouteProvider::Osrm {
                profile: String::from("driving"),
            },
        }
    }
}

#[derive(Args)]
pub struct RouteArgs {
    /// Origin as <longitude>,<latitude>
    #[arg(long, value_parser = parsers::parse_point, allow_hyphen_values = true)]
    from: geo_types::Point,

    /// Destination as <longitude>,<latitude>
    #[arg(long, value_parser = parsers::parse_point, allow_hyphen_values = true)]
    to: geo_types::Point,

    #[arg(short, long, value_enum, default_value_t = ProviderArg::Mapbox)]
    provider: ProviderArg,

    /// Use live traffic (Mapbox only)
    #[arg(long)]
    traffic: bool,

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

pub async fn run(args: RouteArgs) -> anyhow::Result<()> {
    let client = RouteClient::default();
    let provider = args.provider.provider(args.traffic);

    let alternatives = client.fetch_routes(args.from, args.to, &provider).await?;
    info!(
        "{} returned {} route alternative(s)",
        provider.name(),
        alternatives.len()
    );

    let estimate = estimate_routes(&alternatives.to_segments()?, args.category, args.engine);
    let vehicle = JsonVehicle {
        category: args.category,
        engine: args.engine,
    };

    print_estimate(&vehicle, &JsonEmissionsResponse::from(&estimate), args.json)?;

    Ok(())
}
