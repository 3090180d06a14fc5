use serde::Serialize;
use tracing::trace;

use crate::{
    emission::co2::co2_for,
    problem::{
        engine_type::EngineType, kilograms::Kilograms, route_segment::RouteSegment,
        vehicle_category::VehicleCategory,
    },
    saved::{
        SAVED_DECIMALS,
        baseline::{Baseline, baseline_for},
        saved_per_route::saved_per_route,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RouteEstimate {
    /// Position of the route in the input
    pub index: usize,
    pub segment: RouteSegment,
    /// Emission under the vehicle's own engine, rounded like `saved`
    pub emitted: Kilograms,
    pub saved: Kilograms,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutesEstimate {
    pub baseline: Baseline,
    pub routes: Vec<RouteEstimate>,
}

impl RoutesEstimate {
    /// The route with the lowest emission. Ties go to the earliest route so the
    /// route source's own preference order is kept.
    pub fn greenest_route(&self) -> Option<&RouteEstimate> {
        greenest_route(&self.routes)
    }

    pub fn total_saved(&self) -> Kilograms {
        self.routes.iter().map(|route| route.saved).sum()
    }
}

pub fn estimate_routes(
    routes: &[RouteSegment],
    category: VehicleCategory,
    engine: EngineType,
) -> RoutesEstimate {
    let baseline = baseline_for(routes, category, engine);
    let saved = saved_per_route(routes, category, engine);

    trace!(
        ?baseline,
        %category,
        %engine,
        routes = routes.len(),
        "estimated saved CO2 per route"
    );

    let routes = routes
        .iter()
        .zip(saved)
        .enumerate()
        .map(|(index, (segment, saved))| RouteEstimate {
            index,
            segment: *segment,
            emitted: co2_for(engine, segment, category).round_to_decimals(SAVED_DECIMALS),
            saved,
        })
        .collect();

    RoutesEstimate { baseline, routes }
}

pub fn greenest_route(estimates: &[RouteEstimate]) -> Option<&RouteEstimate> {
    estimates.iter().fold(None, |best, estimate| match best {
        Some(best) if best.emitted <= estimate.emitted => Some(best),
        _ => Some(estimate),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::segment;

    #[test]
    fn test_estimate_routes() {
        let routes = [segment(10_000.0, 1200.0), segment(10_000.0, 2400.0)];
        let estimate = estimate_routes(&routes, VehicleCategory::Sedan, EngineType::Gas);

        assert_eq!(estimate.routes.len(), 2);
        assert_eq!(estimate.routes[0].index, 0);
        assert_eq!(estimate.routes[0].emitted, Kilograms::new(2.52));
        assert_eq!(estimate.routes[0].saved, Kilograms::new(0.378));
        assert_eq!(estimate.routes[1].index, 1);
        assert_eq!(estimate.routes[1].emitted, Kilograms::new(2.898));
        assert_eq!(estimate.routes[1].saved, Kilograms::ZERO);
        assert_eq!(estimate.routes[1].segment, routes[1]);

        assert!(matches!(
            estimate.baseline,
            Baseline::WorstAlternative { .. }
        ));
        assert_eq!(estimate.greenest_route().map(|r| r.index), Some(0));
        assert_eq!(estimate.total_saved(), Kilograms::new(0.378));
    }

    #[test]
    fn test_ev_emits_nothing() {
        let routes = [segment(10_000.0, 1200.0), segment(15_000.0, 1200.0)];
        let estimate = estimate_routes(&routes, VehicleCategory::Suv, EngineType::Ev);

        assert!(estimate.routes.iter().all(|r| r.emitted == Kilograms::ZERO));
        assert_eq!(estimate.baseline, Baseline::GasEquivalent);
        // every route ties at zero, the first one wins
        assert_eq!(estimate.greenest_route().map(|r| r.index), Some(0));
    }

    #[test]
    fn test_greenest_route_keeps_earliest_on_ties() {
        let routes = [
            segment(30_000.0, 1800.0),
            segment(12_000.0, 900.0),
            segment(12_000.0, 900.0),
        ];
        let estimate = estimate_routes(&routes, VehicleCategory::Sedan, EngineType::Diesel);
        assert_eq!(estimate.greenest_route().map(|r| r.index), Some(1));
    }

    #[test]
    fn test_empty() {
        let estimate = estimate_routes(&[], VehicleCategory::Sedan, EngineType::Hybrid);
        assert!(estimate.routes.is_empty());
        assert!(estimate.greenest_route().is_none());
        assert_eq!(estimate.total_saved(), Kilograms::ZERO);
    }
}
