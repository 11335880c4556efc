//! World outline geometry for the country map.

use ahash::AHashMap;
use geo::Centroid;
use geo_types::{Geometry, Polygon};
use tracing::info;
use ts_data::DataError;

/// One named region: exterior rings in lon/lat plus a precomputed centroid
/// for bubble placement.
pub struct CountryShape {
    pub name: String,
    pub rings: Vec<Vec<[f64; 2]>>,
    pub centroid: [f64; 2],
}

/// Named-region polygons from the boundary dataset. The core only ever
/// matches the country rollup's keys against these names.
pub struct WorldOutline {
    countries: Vec<CountryShape>,
    by_name: AHashMap<String, usize>,
}

impl WorldOutline {
    /// Parse a GeoJSON feature collection. Features without a usable name
    /// or polygon geometry are skipped; a structurally broken file is an
    /// error (fatal at load, like the catalog itself).
    pub fn from_geojson(text: &str) -> Result<Self, DataError> {
        let geojson: geojson::GeoJson = text
            .parse()
            .map_err(|e: geojson::Error| DataError::Boundary(e.to_string()))?;

        let collection = match geojson {
            geojson::GeoJson::FeatureCollection(fc) => fc,
            _ => {
                return Err(DataError::Boundary(
                    "expected a GeoJSON feature collection".to_owned(),
                ))
            }
        };

        let mut countries = Vec::new();
        for feature in collection.features {
            let Some(geometry) = feature.geometry else {
                continue;
            };
            let Some(name) = feature
                .properties
                .as_ref()
                .and_then(|props| props.get("name").or_else(|| props.get("NAME")))
                .and_then(|value| value.as_str())
                .map(str::to_owned)
            else {
                continue;
            };

            let geometry = Geometry::<f64>::try_from(geometry.value)
                .map_err(|e| DataError::Boundary(e.to_string()))?;
            let (rings, centroid) = match geometry {
                Geometry::Polygon(polygon) => {
                    let centroid = polygon.centroid();
                    (vec![exterior_ring(&polygon)], centroid)
                }
                Geometry::MultiPolygon(multi) => {
                    let centroid = multi.centroid();
                    (multi.iter().map(exterior_ring).collect(), centroid)
                }
                _ => continue,
            };
            let Some(centroid) = centroid else {
                continue;
            };

            countries.push(CountryShape {
                name,
                rings,
                centroid: [centroid.x(), centroid.y()],
            });
        }

        let by_name = countries
            .iter()
            .enumerate()
            .map(|(index, country)| (country.name.clone(), index))
            .collect();

        info!(countries = countries.len(), "world outline parsed");
        Ok(Self { countries, by_name })
    }

    pub fn countries(&self) -> &[CountryShape] {
        &self.countries
    }

    pub fn get(&self, name: &str) -> Option<&CountryShape> {
        self.by_name.get(name).map(|&index| &self.countries[index])
    }
}

fn exterior_ring(polygon: &Polygon<f64>) -> Vec<[f64; 2]> {
    polygon.exterior().coords().map(|c| [c.x, c.y]).collect()
}
