use ecoroute_emissions::problem::{meters::Meters, route_segment::RouteSegment};
use jiff::SpanRelativeTo;

pub fn parse_duration(input: &str) -> Result<jiff::SignedDuration, String> {
    if let Ok(duration) = input.parse::<jiff::SignedDuration>() {
        return Ok(duration);
    }

    if let Ok(duration) = input
        .parse::<jiff::Span>()
        .and_then(|span| span.to_duration(SpanRelativeTo::days_are_24_hours()))
    {
        return Ok(duration);
    }

    if let Ok(seconds) = input.parse::<f64>() {
        return jiff::SignedDuration::try_from_secs_f64(seconds).map_err(|err| err.to_string());
    }

    Err(String::from("Invalid duration"))
}

/// `<meters>,<duration>`, e.g. `10000,20m` or `10000,1200`.
pub fn parse_route_segment(input: &str) -> Result<RouteSegment, String> {
    let (distance, duration) = input
        .split_once(',')
        .ok_or_else(|| format!("Expected <meters>,<duration>, got '{input}'"))?;

    let distance = distance
        .trim()
        .parse::<f64>()
        .map_err(|_| format!("Invalid distance '{distance}'"))?;

    if !distance.is_finite() || distance < 0.0 {
        return Err(format!("Distance must be non-negative, got {distance}"));
    }

    let duration = parse_duration(duration.trim())?;

    Ok(RouteSegment::from_duration(Meters::new(distance), duration))
}

/// `<longitude>,<latitude>`
pub fn parse_point(input: &str) -> Result<geo_types::Point, String> {
    let (lon, lat) = input
        .split_once(',')
        .ok_or_else(|| format!("Expected <longitude>,<latitude>, got '{input}'"))?;

    let lon = lon
        .trim()
        .parse::<f64>()
        .map_err(|_| format!("Invalid longitude '{lon}'"))?;
    let lat = lat
        .trim()
        .parse::<f64>()
        .map_err(|_| format!("Invalid latitude '{lat}'"))?;

    if !(-180.0..=180.0).contains(&lon) || !(-90.0..=90.0).contains(&lat) {
        return Err(format!("Coordinates out of range: {lon},{lat}"));
    }

    Ok(geo_types::Point::new(lon, lat))
}
