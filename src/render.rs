//! Output formats for finished selections.
//!
//! Coordinates are printed with 6 fractional digits, independent of the
//! 5-digit precision used for dedup.

use crate::batch::SpeciesSelection;
use crate::config::Config;
use std::fmt;

/// Fractional digits used when printing coordinates.
pub const DISPLAY_PRECISION: usize = 6;

/// A Dart map literal of `LatLng` lists, one entry per species.
///
/// ```text
/// // Auto-generated coordinate suggestions based on GBIF occurrences
/// // Priority: Manaus > Amazonas > catch-all fallback
/// static final Map<String, List<LatLng>> gbifLocations = {
///   'Carollia perspicillata': [  // Manaus, catch-all (2 records)
///     LatLng(-3.000000, -59.800000),
///     LatLng(-10.000000, -55.000000),
///   ],
/// };
/// ```
#[derive(Debug, Clone, Copy)]
pub struct DartMap<'a> {
    config: &'a Config,
    selections: &'a [SpeciesSelection],
}

impl<'a> DartMap<'a> {
    pub fn new(config: &'a Config, selections: &'a [SpeciesSelection]) -> Self {
        Self { config, selections }
    }

    fn priority_line(&self) -> String {
        let mut labels: Vec<&str> = self.config.regions.iter().map(|r| r.name()).collect();
        let fallback = format!("{} fallback", self.config.catch_all_label);
        labels.push(&fallback);
        labels.join(" > ")
    }
}

impl fmt::Display for DartMap<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "// Auto-generated coordinate suggestions based on GBIF occurrences"
        )?;
        writeln!(f, "// Priority: {}", self.priority_line())?;
        writeln!(
            f,
            "static final Map<String, List<LatLng>> {} = {{",
            self.config.map_name
        )?;

        for selection in self.selections {
            let result = &selection.result;
            let count = format!("({} records)", result.len());
            let annotation = if result.contributors.is_empty() {
                count
            } else {
                format!("{} {}", result.contributor_label(), count)
            };
            writeln!(
                f,
                "  '{}': [  // {}",
                dart_escape(&selection.species),
                annotation
            )?;
            for pick in &result.picks {
                writeln!(
                    f,
                    "    LatLng({:.prec$}, {:.prec$}),",
                    pick.coordinate.lat,
                    pick.coordinate.lon,
                    prec = DISPLAY_PRECISION
                )?;
            }
            writeln!(f, "  ],")?;
        }

        writeln!(f, "}};")
    }
}

// Escape for a single-quoted Dart string literal.
fn dart_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '$' => out.push_str("\\$"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.push_str(&format!("\\u{{{:x}}}", c as u32)),
            _ => out.push(c),
        }
    }
    out
}

/// Render selections as a Dart map literal.
pub fn dart_map(config: &Config, selections: &[SpeciesSelection]) -> String {
    DartMap::new(config, selections).to_string()
}

/// Render selections as a GeoJSON FeatureCollection of points.
///
/// Each feature carries `species`, `rank` (position in that species'
/// selection), `source` (bucket that supplied it) and `sources` (all
/// contributors for the species).
#[cfg(feature = "geojson")]
pub fn feature_collection(selections: &[SpeciesSelection]) -> geojson::FeatureCollection {
    use geojson::{Feature, FeatureCollection, Geometry, JsonObject, JsonValue, Value};

    let features = selections
        .iter()
        .flat_map(|selection| {
            let sources: Vec<JsonValue> = selection
                .result
                .contributors
                .iter()
                .map(|c| JsonValue::from(c.as_str()))
                .collect();
            selection
                .result
                .picks
                .iter()
                .enumerate()
                .map(move |(rank, pick)| {
                    let mut properties = JsonObject::new();
                    properties.insert("species".into(), selection.species.as_str().into());
                    properties.insert("rank".into(), rank.into());
                    properties.insert("source".into(), pick.source.as_str().into());
                    properties.insert("sources".into(), JsonValue::Array(sources.clone()));

                    let point = pick.coordinate.to_point();
                    Feature {
                        bbox: None,
                        geometry: Some(Geometry::new(Value::Point(vec![point.x(), point.y()]))),
                        id: None,
                        properties: Some(properties),
                        foreign_members: None,
                    }
                })
        })
        .collect();

    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compute::cascade::{SelectedCoordinate, SelectionResult};
    use roostmap_types::coord::Coordinate;
    use roostmap_types::region::Region;

    fn pick(lat: f64, lon: f64, source: &str) -> SelectedCoordinate {
        SelectedCoordinate {
            coordinate: Coordinate::new(lat, lon),
            source: source.to_string(),
        }
    }

    fn selections() -> Vec<SpeciesSelection> {
        vec![
            SpeciesSelection {
                species: "Carollia perspicillata".into(),
                result: SelectionResult {
                    picks: vec![pick(-3.0, -59.8, "Manaus"), pick(-10.0, -55.0, "catch-all")],
                    contributors: vec!["Manaus".into(), "catch-all".into()],
                },
            },
            SpeciesSelection {
                species: "Anoura caudifer".into(),
                result: SelectionResult::default(),
            },
        ]
    }

    fn config() -> Config {
        Config::default()
            .with_region(Region::new("Manaus", -3.4, -2.8, -60.2, -59.4))
            .with_region(Region::new("Amazonas", -6.5, 0.5, -66.5, -56.0))
    }

    #[test]
    fn test_dart_map_layout() {
        let expected = "\
// Auto-generated coordinate suggestions based on GBIF occurrences
// Priority: Manaus > Amazonas > catch-all fallback
static final Map<String, List<LatLng>> gbifLocations = {
  'Carollia perspicillata': [  // Manaus, catch-all (2 records)
    LatLng(-3.000000, -59.800000),
    LatLng(-10.000000, -55.000000),
  ],
  'Anoura caudifer': [  // (0 records)
  ],
};
";
        assert_eq!(dart_map(&config(), &selections()), expected);
    }

    #[test]
    fn test_dart_map_six_digit_rounding() {
        let selections = vec![SpeciesSelection {
            species: "x".into(),
            result: SelectionResult {
                picks: vec![pick(-3.1234567, 59.9999999, "catch-all")],
                contributors: vec!["catch-all".into()],
            },
        }];
        let out = dart_map(&Config::default(), &selections);
        assert!(out.contains("    LatLng(-3.123457, 60.000000),\n"));
        assert!(out.contains("// Priority: catch-all fallback\n"));
    }

    #[test]
    fn test_dart_escape() {
        assert_eq!(dart_escape("O'Brien's $bat"), "O\\'Brien\\'s \\$bat");
        assert_eq!(dart_escape("a\r\nb\tc"), "a\\r\\nb\\tc");
        assert_eq!(dart_escape("x\u{7}y\u{85}"), "x\\u{7}y\\u{85}");
    }

    #[cfg(feature = "geojson")]
    #[test]
    fn test_feature_collection() {
        let collection = feature_collection(&selections());
        assert_eq!(collection.features.len(), 2);

        let first = &collection.features[0];
        let geometry = first.geometry.as_ref().unwrap();
        assert_eq!(geometry.value, geojson::Value::Point(vec![-59.8, -3.0]));

        let props = first.properties.as_ref().unwrap();
        assert_eq!(props["species"], "Carollia perspicillata");
        assert_eq!(props["rank"], 0);
        assert_eq!(props["source"], "Manaus");
        assert_eq!(props["sources"], serde_json::json!(["Manaus", "catch-all"]));
        assert_eq!(collection.features[1].properties.as_ref().unwrap()["rank"], 1);
    }
}
