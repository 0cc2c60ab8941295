//! # JSON Renderer
//!
//! The wire shape a web front end consumes.
//!
//! Points travel as `[x, y]` arrays. The response carries both algorithm
//! results under `closest_pair_bruteforce` / `closest_pair_dnc`, with the
//! elapsed times alongside in fractional milliseconds.

use serde::Serialize;

use crate::core::{AlgorithmReport, Point};
use crate::ports::{Render, RenderError, RenderResult, Scene};

/// One algorithm's result on the wire
#[derive(Serialize)]
struct PairBody {
    pair: [[f64; 2]; 2],
    distance: f64,
}

impl From<&AlgorithmReport> for PairBody {
    fn from(report: &AlgorithmReport) -> Self {
        Self {
            pair: [
                [report.pair[0].x, report.pair[0].y],
                [report.pair[1].x, report.pair[1].y],
            ],
            distance: report.distance,
        }
    }
}

/// The combined closest-pair response
#[derive(Serialize)]
struct ClosestPairResponse {
    closest_pair_bruteforce: PairBody,
    closest_pair_dnc: PairBody,
    time_bruteforce: f64,
    time_dnc: f64,
}

/// Renders a scene as the JSON response body
#[derive(Clone, Copy, Debug, Default)]
pub struct JsonRender;

impl Render for JsonRender {
    fn render(&self, scene: &Scene) -> RenderResult<String> {
        let response = ClosestPairResponse {
            closest_pair_bruteforce: PairBody::from(&scene.report.brute_force),
            closest_pair_dnc: PairBody::from(&scene.report.divide_and_conquer),
            time_bruteforce: scene.report.brute_force.elapsed_ms,
            time_dnc: scene.report.divide_and_conquer.elapsed_ms,
        };
        serde_json::to_string_pretty(&response).map_err(|e| RenderError::Encode(e.to_string()))
    }

    fn name(&self) -> &'static str {
        "json"
    }
}

/// Serialize a point set as the generation payload (`[[x, y], ...]`)
pub fn points_payload(points: &[Point]) -> RenderResult<String> {
    let wire: Vec<[f64; 2]> = points.iter().map(|p| [p.x, p.y]).collect();
    serde_json::to_string(&wire).map_err(|e| RenderError::Encode(e.to_string()))
}

/// Parse a point set from the generation payload shape
pub fn parse_points(payload: &str) -> serde_json::Result<Vec<Point>> {
    let wire: Vec<[f64; 2]> = serde_json::from_str(payload)?;
    Ok(wire.into_iter().map(|[x, y]| Point::new(x, y)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::race::Race;

    fn sample_scene() -> Scene {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(3.0, 4.0),
            Point::new(100.0, 100.0),
        ];
        let report = Race::new().run(&points).unwrap();
        Scene::new(points, report)
    }

    #[test]
    fn test_response_shape() {
        let body = JsonRender.render(&sample_scene()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&body).unwrap();

        assert!(parsed["closest_pair_bruteforce"]["pair"].is_array());
        assert!(parsed["closest_pair_dnc"]["pair"].is_array());
        assert_eq!(
            parsed["closest_pair_bruteforce"]["distance"].as_f64(),
            Some(5.0)
        );
        assert_eq!(parsed["closest_pair_dnc"]["distance"].as_f64(), Some(5.0));
        assert!(parsed["time_bruteforce"].as_f64().is_some());
        assert!(parsed["time_dnc"].as_f64().is_some());
    }

    #[test]
    fn test_points_payload_round_trip() {
        let points = vec![Point::new(20.0, 30.5), Point::new(770.0, 570.0)];
        let payload = points_payload(&points).unwrap();
        assert_eq!(payload, "[[20.0,30.5],[770.0,570.0]]");

        let parsed = parse_points(&payload).unwrap();
        assert_eq!(parsed, points);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_points("not json").is_err());
        assert!(parse_points("[[1.0]]").is_err());
    }
}
