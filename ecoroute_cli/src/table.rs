use comfy_table::{Cell, CellAlignment, ContentArrangement, Table, presets::UTF8_FULL};
use ecoroute_emissions::{
    emission::{co2::emission_factor, speed_band::SpeedBand},
    json::types::{JsonBaseline, JsonEmissionsResponse, JsonVehicle},
    problem::kmh::Kmh,
};

fn baseline_label(baseline: &JsonBaseline) -> String {
    match baseline {
        JsonBaseline::GasEquivalent => "gas equivalent (EV)".to_string(),
        JsonBaseline::GasOnSameRoute => "gas on the same route (hybrid)".to_string(),
        JsonBaseline::WorstAlternative { worst_kg } => {
            format!("worst alternative ({worst_kg:.3} kg)")
        }
    }
}

fn speed_band_label(band: SpeedBand) -> &'static str {
    match band {
        SpeedBand::Low => "city",
        SpeedBand::Neutral => "mixed",
        SpeedBand::High => "highway",
    }
}

pub fn render_estimate(vehicle: &JsonVehicle, response: &JsonEmissionsResponse) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            "Route",
            "Distance",
            "Duration",
            "Avg speed",
            "Band",
            "kg CO₂/km",
            "Emitted",
            "Saved",
        ]);

    for route in &response.routes {
        let speed = Kmh::new(route.average_speed_kmh);
        let marker = if response.greenest_route == Some(route.index) {
            " *"
        } else {
            ""
        };

        table.add_row(vec![
            Cell::new(format!("{}{}", route.index + 1, marker)),
            Cell::new(format!("{:.1} km", route.distance / 1000.0))
                .set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.0} min", route.duration / 60.0))
                .set_alignment(CellAlignment::Right),
            Cell::new(speed.to_string()).set_alignment(CellAlignment::Right),
            Cell::new(speed_band_label(SpeedBand::from_speed(speed))),
            Cell::new(format!(
                "{:.3}",
                emission_factor(vehicle.engine, vehicle.category, speed)
            ))
            .set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.3} kg", route.emitted_kg)).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.3} kg", route.saved_kg)).set_alignment(CellAlignment::Right),
        ]);
    }

    format!(
        "{} / {}, baseline: {}\n{}",
        vehicle.category,
        vehicle.engine,
        baseline_label(&response.baseline),
        table
    )
}

pub fn print_estimate(
    vehicle: &JsonVehicle,
    response: &JsonEmissionsResponse,
    json: bool,
) -> Result<(), serde_json::Error> {
    if json {
        println!("{}", serde_json::to_string_pretty(response)?);
    } else {
        println!("{}", render_estimate(vehicle, response));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use ecoroute_emissions::{
        json::types::{JsonEmissionsRequest, JsonRoute},
        problem::{engine_type::EngineType, vehicle_category::VehicleCategory},
    };

    use super::*;

    #[test]
    fn test_render_estimate() {
        let vehicle = JsonVehicle {
            category: VehicleCategory::Sedan,
            engine: EngineType::Gas,
        };
        let request = JsonEmissionsRequest {
            routes: vec![
                JsonRoute {
                    distance: 10_000.0,
                    duration: 1200.0,
                },
                JsonRoute {
                    distance: 10_000.0,
                    duration: 2400.0,
                },
            ],
            vehicle,
        };

        let rendered = render_estimate(&vehicle, &request.estimate().unwrap());

        assert!(rendered.starts_with("Sedan / gas, baseline: worst alternative (2.898 kg)"));
        assert!(rendered.contains("1 *"));
        assert!(rendered.contains("0.378 kg"));
        assert!(rendered.contains("city"));
        assert!(rendered.contains("20 min"));
    }
}
