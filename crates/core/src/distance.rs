use std::collections::HashMap;

use crate::config::DistanceConfig;

/// Resolves shipment distance: an explicit positive distance always wins,
/// then the static city-pair table, then the configured fallback.
///
/// The table is directional. (A, B) and (B, A) are distinct keys and only
/// the populated direction resolves; the reverse falls back. Symmetrizing
/// would change observable prices, so lookups stay as-is.
pub struct DistanceResolver {
    pairs: HashMap<(String, String), f64>,
    fallback_km: f64,
}

impl DistanceResolver {
    pub fn new(pairs: HashMap<(String, String), f64>, fallback_km: f64) -> Self {
        Self { pairs, fallback_km }
    }

    pub fn from_config(config: &DistanceConfig) -> Self {
        let pairs = config
            .pairs
            .iter()
            .map(|pair| ((pair.origin.clone(), pair.destination.clone()), pair.km))
            .collect();
        Self::new(pairs, config.fallback_km)
    }

    pub fn resolve(&self, origin: &str, destination: &str, explicit_km: Option<f64>) -> f64 {
        if let Some(km) = explicit_km {
            if km > 0.0 {
                return km;
            }
        }
        self.pairs
            .get(&(origin.to_string(), destination.to_string()))
            .copied()
            .unwrap_or(self.fallback_km)
    }
}

#[cfg(test)]
mod tests {
    use crate::config::DistanceConfig;

    use super::DistanceResolver;

    fn resolver() -> DistanceResolver {
        DistanceResolver::from_config(&DistanceConfig::default())
    }

    #[test]
    fn explicit_distance_wins_over_table() {
        let resolver = resolver();
        assert_eq!(resolver.resolve("Nigha", "Varanasi", Some(512.5)), 512.5);
    }

    #[test]
    fn known_pair_resolves_from_table() {
        let resolver = resolver();
        assert_eq!(resolver.resolve("Nigha", "Varanasi", None), 310.0);
        assert_eq!(resolver.resolve("Nigha", "Lucknow", None), 430.0);
    }

    #[test]
    fn reverse_direction_is_a_distinct_key() {
        // Only Nigha -> Varanasi is populated; the reverse leg falls back.
        let resolver = resolver();
        assert_eq!(resolver.resolve("Varanasi", "Nigha", None), 400.0);
    }

    #[test]
    fn unknown_pair_uses_fallback() {
        let resolver = resolver();
        assert_eq!(resolver.resolve("X", "Y", None), 400.0);
    }
}
