//! Find the municipality a guess refers to.

use crate::matching::{MatchKind, MatchPolicy};
use crate::normalize::normalize;
use crate::types::Entity;

/// Best candidate for a guess.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution<'a> {
    pub entity: &'a Entity,
    /// 0 for an exact match.
    pub distance: usize,
}

/// Resolve a guess against `entities` with the default tolerance rules.
pub fn resolve<'a>(guess: &str, entities: &'a [Entity]) -> Option<Resolution<'a>> {
    MatchPolicy::default().resolve(guess, entities)
}

impl MatchPolicy {
    /// Resolve a raw guess.
    ///
    /// The first exact match wins outright. Otherwise the fuzzy candidate with
    /// the smallest distance wins, and on ties the one listed first.
    pub fn resolve<'a>(&self, guess: &str, entities: &'a [Entity]) -> Option<Resolution<'a>> {
        let guess = normalize(guess);
        if guess.is_empty() {
            return None;
        }

        let mut best: Option<Resolution<'a>> = None;

        for entity in entities {
            let name = normalize(&entity.name);
            match self.classify(&guess, &name) {
                MatchKind::Exact => {
                    return Some(Resolution {
                        entity,
                        distance: 0,
                    })
                }
                MatchKind::Fuzzy(distance) => {
                    if best.map_or(true, |b| distance < b.distance) {
                        best = Some(Resolution { entity, distance });
                    }
                }
                MatchKind::NoMatch => {}
            }
        }

        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn entities(names: &[&str]) -> Vec<Entity> {
        names
            .iter()
            .map(|name| Entity::new(*name, -30.0, -53.0))
            .collect()
    }

    fn resolved_name<'a>(guess: &str, list: &'a [Entity]) -> Option<&'a str> {
        resolve(guess, list).map(|r| r.entity.name.as_str())
    }

    #[test]
    fn exact_match_ignores_case_and_accents() {
        let list = entities(&["Porto Alegre", "São Borja"]);
        assert_eq!(resolved_name("  sao BORJA ", &list), Some("São Borja"));
        assert_eq!(resolve("sao borja", &list).map(|r| r.distance), Some(0));
    }

    #[test]
    fn exact_match_beats_earlier_fuzzy_candidate() {
        let list = entities(&["Pelotaz", "Pelotas"]);
        assert_eq!(resolved_name("pelotas", &list), Some("Pelotas"));
    }

    #[test]
    fn first_exact_wins_among_duplicates() {
        let list = vec![
            Entity::new("Bom Jesus", -28.66, -50.43),
            Entity::new("Bom Jesus", 0.0, 0.0),
        ];
        let resolution = resolve("bom jesus", &list).unwrap();
        assert_eq!(resolution.entity.lat, -28.66);
    }

    #[test]
    fn short_guess_requires_exact_match() {
        let list = entities(&["Iju"]);
        assert_eq!(resolved_name("ij", &list), None);
        assert_eq!(resolved_name("iu", &list), None);
        assert_eq!(resolved_name("iju", &list), Some("Iju"));
    }

    #[test]
    fn short_name_tolerance_is_one() {
        let list = entities(&["Porto", "Uruguaiana"]);
        assert_eq!(resolved_name("porta", &list), Some("Porto"));
        assert_eq!(resolved_name("purta", &list), None);
    }

    #[test]
    fn long_name_tolerance_is_two() {
        let list = entities(&["Porto", "Uruguaiana"]);
        assert_eq!(resolved_name("uruguaina", &list), Some("Uruguaiana"));
        assert_eq!(resolved_name("urugiana", &list), Some("Uruguaiana"));
        assert_eq!(resolved_name("urugana", &list), None);
    }

    #[test]
    fn closest_fuzzy_candidate_wins() {
        // "canela" is 2 away from "candelaa", 1 away from "canelas"
        let list = entities(&["Candelaa", "Canelas"]);
        let resolution = resolve("canela", &list).unwrap();
        assert_eq!(resolution.entity.name, "Canelas");
        assert_eq!(resolution.distance, 1);
    }

    #[test]
    fn first_seen_wins_fuzzy_ties() {
        let list = entities(&["Alvorada", "Alvorado"]);
        let resolution = resolve("alvoradu", &list).unwrap();
        assert_eq!(resolution.entity.name, "Alvorada");
        assert_eq!(resolution.distance, 1);
    }

    #[test]
    fn blank_guess_and_empty_list_yield_nothing() {
        let list = entities(&["Porto"]);
        assert_eq!(resolved_name("   ", &list), None);
        assert_eq!(resolved_name("porto", &[]), None);
    }

    #[test]
    fn custom_policy_is_respected() {
        let strict = MatchPolicy {
            short_tolerance: 0,
            long_tolerance: 0,
            ..MatchPolicy::default()
        };
        let list = entities(&["Uruguaiana"]);
        assert!(strict.resolve("uruguaina", &list).is_none());
        assert!(strict.resolve("Uruguaiana", &list).is_some());
    }
}
