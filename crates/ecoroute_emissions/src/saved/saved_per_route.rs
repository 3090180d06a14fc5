use crate::{
    emission::co2::co2_for,
    problem::{
        engine_type::EngineType, kilograms::Kilograms, route_segment::RouteSegment,
        vehicle_category::VehicleCategory,
    },
    saved::{SAVED_DECIMALS, baseline::worst_emission},
};

/// CO₂ saved on each route alternative by a vehicle of the given `category`
/// and `engine`, in the order of `routes`.
///
/// * `Ev`: the gas-engine emission of the route.
/// * `Hybrid`: gas-engine emission minus hybrid emission on the same route.
///   Not clamped.
/// * `Gas`/`Diesel`: emission of the worst alternative in `routes` minus the
///   emission of the route, both under `engine`. The worst route reports zero,
///   and so does a lone route.
///
/// Every value is rounded half away from zero to [`SAVED_DECIMALS`] places.
pub fn saved_per_route(
    routes: &[RouteSegment],
    category: VehicleCategory,
    engine: EngineType,
) -> Vec<Kilograms> {
    match engine {
        EngineType::Ev => routes
            .iter()
            .map(|route| round_saved(co2_for(EngineType::Gas, route, category)))
            .collect(),
        EngineType::Hybrid => routes
            .iter()
            .map(|route| {
                let gas = co2_for(EngineType::Gas, route, category);
                let hybrid = co2_for(EngineType::Hybrid, route, category);
                round_saved(gas - hybrid)
            })
            .collect(),
        EngineType::Gas | EngineType::Diesel => {
            let actual: Vec<Kilograms> = routes
                .iter()
                .map(|route| co2_for(engine, route, category))
                .collect();
            let worst = worst_emission(actual.iter().copied());

            actual
                .into_iter()
                .map(|emission| round_saved(worst - emission))
                .collect()
        }
    }
}

#[inline(always)]
fn round_saved(kilograms: Kilograms) -> Kilograms {
    kilograms.round_to_decimals(SAVED_DECIMALS)
}
