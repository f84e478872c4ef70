//! Reference list of municipalities.
//!
//! # Format
//! ```json
//! [
//!   { "name": "Porto Alegre", "lat": -30.0346, "lng": -51.2177 },
//!   { "name": "Pelotas", "lat": -31.7654, "lng": -52.3376 }
//! ]
//! ```

use crate::error::{CatalogError, Result};
use crate::normalize::normalize;
use crate::types::Entity;
use std::collections::HashSet;

/// Immutable, validated list of entities.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entities: Vec<Entity>,
}

impl Catalog {
    /// Catalog with no entities. Every guess resolves to nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse and validate a JSON array of entities.
    pub fn from_json(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::empty());
        }

        let entities: Vec<Entity> = serde_json::from_str(content)?;
        Self::from_entities(entities)
    }

    /// Validate entities: non-blank names, coordinates in range, names unique
    /// after normalization.
    pub fn from_entities(entities: Vec<Entity>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(entities.len());

        for (index, entity) in entities.iter().enumerate() {
            let key = normalize(&entity.name);
            if key.is_empty() {
                return Err(CatalogError::EmptyName { index });
            }

            if !valid_coordinate(entity.lat, entity.lng) {
                return Err(CatalogError::InvalidCoordinate {
                    name: entity.name.clone(),
                    lat: entity.lat,
                    lng: entity.lng,
                });
            }

            if !seen.insert(key) {
                return Err(CatalogError::DuplicateName {
                    name: entity.name.clone(),
                    index,
                });
            }
        }

        Ok(Self { entities })
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

fn valid_coordinate(lat: f64, lng: f64) -> bool {
    lat.is_finite()
        && lng.is_finite()
        && (-90.0..=90.0).contains(&lat)
        && (-180.0..=180.0).contains(&lng)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_entities_in_order() {
        let json = r#"[
            {"name": "Porto Alegre", "lat": -30.0346, "lng": -51.2177},
            {"name": "Pelotas", "lat": -31.7654, "lng": -52.3376}
        ]"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.entities()[0].name, "Porto Alegre");
        assert_eq!(catalog.entities()[1].name, "Pelotas");
        assert_eq!(catalog.entities()[1].lat, -31.7654);
    }

    #[test]
    fn blank_content_is_empty_catalog() {
        assert!(Catalog::from_json("  ").unwrap().is_empty());
        assert!(Catalog::from_json("[]").unwrap().is_empty());
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            Catalog::from_json("{not json"),
            Err(CatalogError::Json(_))
        ));
    }

    #[test]
    fn rejects_blank_name() {
        let result = Catalog::from_entities(vec![
            Entity::new("Canoas", -29.92, -51.18),
            Entity::new("  ", -29.0, -51.0),
        ]);
        assert!(matches!(result, Err(CatalogError::EmptyName { index: 1 })));
    }

    #[test]
    fn rejects_out_of_range_coordinate() {
        let result = Catalog::from_entities(vec![Entity::new("Canoas", -129.92, -51.18)]);
        assert!(matches!(result, Err(CatalogError::InvalidCoordinate { .. })));

        let result = Catalog::from_entities(vec![Entity::new("Canoas", f64::NAN, -51.18)]);
        assert!(matches!(result, Err(CatalogError::InvalidCoordinate { .. })));
    }

    #[test]
    fn rejects_names_equal_after_normalization() {
        let result = Catalog::from_entities(vec![
            Entity::new("Ijuí", -28.38, -53.91),
            Entity::new("IJUI", -28.38, -53.91),
        ]);
        match result {
            Err(CatalogError::DuplicateName { name, index }) => {
                assert_eq!(name, "IJUI");
                assert_eq!(index, 1);
            }
            other => panic!("expected duplicate error, got {other:?}"),
        }
    }
}
