//! Point-of-interest catalog.
//!
//! The built-in catalog covers the Geneva -> Athens demo route. It is built
//! once per process and never mutated afterwards.

use std::sync::OnceLock;

use crate::models::{GeoPoint, Poi, PoiCategory, Side};
use crate::spatial::haversine_distance_km;

/// Read-only collection of POIs.
#[derive(Debug, Clone, Default)]
pub struct PoiCatalog {
    pois: Vec<Poi>,
}

impl PoiCatalog {
    pub fn new(pois: Vec<Poi>) -> Self {
        Self { pois }
    }

    /// The process-wide built-in catalog.
    pub fn builtin() -> &'static PoiCatalog {
        static CATALOG: OnceLock<PoiCatalog> = OnceLock::new();
        CATALOG.get_or_init(|| PoiCatalog::new(builtin_pois()))
    }

    pub fn as_slice(&self) -> &[Poi] {
        &self.pois
    }

    pub fn iter(&self) -> impl Iterator<Item = &Poi> {
        self.pois.iter()
    }

    pub fn len(&self) -> usize {
        self.pois.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pois.is_empty()
    }

    pub fn find(&self, name: &str) -> Option<&Poi> {
        self.pois.iter().find(|p| p.name == name)
    }

    /// POIs whose preferred viewing side is `side`.
    pub fn by_side(&self, side: Side) -> Vec<&Poi> {
        self.pois.iter().filter(|p| p.preferred_side == side).collect()
    }

    pub fn by_category(&self, category: PoiCategory) -> Vec<&Poi> {
        self.pois.iter().filter(|p| p.category == category).collect()
    }

    /// POIs within `range_km` great-circle distance of `point`.
    pub fn in_range(&self, point: &GeoPoint, range_km: f64) -> Vec<&Poi> {
        self.pois
            .iter()
            .filter(|p| haversine_distance_km(point, &p.location) <= range_km)
            .collect()
    }
}

impl FromIterator<Poi> for PoiCatalog {
    fn from_iter<T: IntoIterator<Item = Poi>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[allow(clippy::too_many_arguments)]
fn poi(
    name: &str,
    description: &str,
    link: &str,
    lat: f64,
    lon: f64,
    altitude_m: f64,
    preferred_side: Side,
    category: PoiCategory,
) -> Poi {
    Poi {
        name: name.to_string(),
        description: description.to_string(),
        link: link.to_string(),
        location: GeoPoint::new(lat, lon).with_altitude(altitude_m),
        altitude_m,
        preferred_side,
        category,
        image_url: None,
    }
}

fn builtin_pois() -> Vec<Poi> {
    vec![
        poi(
            "Crêt de la Neige",
            "Point culminant du Jura, vue sur le Léman.",
            "https://fr.wikipedia.org/wiki/Cr%C3%AAt_de_la_Neige",
            46.2967,
            5.9442,
            1720.0,
            Side::Left,
            PoiCategory::Mountain,
        ),
        poi(
            "Lac Léman",
            "Le plus grand lac alpin d'Europe.",
            "https://fr.wikipedia.org/wiki/L%C3%A9man",
            46.4542,
            6.6028,
            372.0,
            Side::Left,
            PoiCategory::Water,
        ),
        poi(
            "Mont Salève",
            "Le balcon de Genève.",
            "https://fr.wikipedia.org/wiki/Le_Sal%C3%A8ve",
            46.1367,
            6.1806,
            1379.0,
            Side::Left,
            PoiCategory::Mountain,
        ),
        poi(
            "Mont Blanc",
            "Plus haut sommet des Alpes.",
            "https://fr.wikipedia.org/wiki/Mont_Blanc",
            45.8326,
            6.8652,
            4808.0,
            Side::Right,
            PoiCategory::Mountain,
        ),
        poi(
            "Vallée de l'Arve",
            "Vallée glaciaire de Haute-Savoie.",
            "https://fr.wikipedia.org/wiki/Vall%C3%A9e_de_l%27Arve",
            46.0500,
            6.6000,
            1000.0,
            Side::Right,
            PoiCategory::Valley,
        ),
        poi(
            "Chamonix",
            "Station de montagne au pied du Mont Blanc.",
            "https://fr.wikipedia.org/wiki/Chamonix",
            45.9237,
            6.8694,
            1035.0,
            Side::Right,
            PoiCategory::City,
        ),
        poi(
            "Dolomites (Marmolada)",
            "Massif alpin célèbre.",
            "https://fr.wikipedia.org/wiki/Marmolada",
            46.4333,
            11.8667,
            3343.0,
            Side::Left,
            PoiCategory::Mountain,
        ),
        poi(
            "Lac de Garde",
            "Le plus grand lac d'Italie.",
            "https://fr.wikipedia.org/wiki/Lac_de_Garde",
            45.6500,
            10.6667,
            65.0,
            Side::Left,
            PoiCategory::Water,
        ),
        poi(
            "Massif de Brenta",
            "Alpes italiennes.",
            "https://fr.wikipedia.org/wiki/Groupe_de_Brenta",
            46.1833,
            10.9000,
            3155.0,
            Side::Left,
            PoiCategory::Mountain,
        ),
        poi(
            "Plaine du Pô",
            "Grande plaine fertile.",
            "https://fr.wikipedia.org/wiki/Plaine_du_P%C3%B4",
            45.0000,
            10.0000,
            100.0,
            Side::Right,
            PoiCategory::Nature,
        ),
        poi(
            "Vérone",
            "Ville célèbre pour Roméo et Juliette.",
            "https://fr.wikipedia.org/wiki/V%C3%A9rone",
            45.4386,
            10.9928,
            59.0,
            Side::Right,
            PoiCategory::City,
        ),
        poi(
            "Mantoue",
            "Ville d'art en Lombardie.",
            "https://fr.wikipedia.org/wiki/Mantoue",
            45.1564,
            10.7914,
            19.0,
            Side::Right,
            PoiCategory::City,
        ),
        poi(
            "Côte adriatique",
            "Plages et ville de Ravenne.",
            "https://fr.wikipedia.org/wiki/Ravenne",
            44.4184,
            12.2035,
            4.0,
            Side::Left,
            PoiCategory::Beach,
        ),
        poi(
            "Venise",
            "Ville sur l'eau.",
            "https://fr.wikipedia.org/wiki/Venise",
            45.4408,
            12.3155,
            1.0,
            Side::Left,
            PoiCategory::City,
        ),
        poi(
            "Delta du Pô",
            "Zone humide protégée.",
            "https://fr.wikipedia.org/wiki/Delta_du_P%C3%B4",
            44.9500,
            12.3667,
            0.0,
            Side::Left,
            PoiCategory::Nature,
        ),
        poi(
            "Côte dalmate",
            "Côte croate et îles.",
            "https://fr.wikipedia.org/wiki/C%C3%B4te_dalmate",
            44.8000,
            15.0000,
            0.0,
            Side::Right,
            PoiCategory::Beach,
        ),
        poi(
            "Dubrovnik",
            "Ville fortifiée UNESCO.",
            "https://fr.wikipedia.org/wiki/Dubrovnik",
            42.6507,
            18.0944,
            3.0,
            Side::Right,
            PoiCategory::Historic,
        ),
        poi(
            "Archipel des Kornati",
            "Parc national croate.",
            "https://fr.wikipedia.org/wiki/Parc_national_des_Kornati",
            43.8200,
            15.3300,
            0.0,
            Side::Right,
            PoiCategory::Archipelago,
        ),
        poi(
            "Massif de Llogara",
            "Montagnes du sud de l'Albanie.",
            "https://fr.wikipedia.org/wiki/Parc_national_de_Llogara",
            40.2047,
            19.6125,
            2017.0,
            Side::Left,
            PoiCategory::Mountain,
        ),
        poi(
            "Vallée de la Vjosa",
            "Rivière sauvage d'Albanie.",
            "https://fr.wikipedia.org/wiki/Vjosa",
            40.1000,
            20.0000,
            200.0,
            Side::Left,
            PoiCategory::Valley,
        ),
        poi(
            "Parc national de Butrint",
            "Site archéologique.",
            "https://fr.wikipedia.org/wiki/Butrint",
            39.7458,
            20.0208,
            0.0,
            Side::Left,
            PoiCategory::Park,
        ),
        poi(
            "Îles Ioniennes",
            "Archipel grec.",
            "https://fr.wikipedia.org/wiki/%C3%8Eles_Ioniennes",
            39.6243,
            19.9217,
            0.0,
            Side::Right,
            PoiCategory::Archipelago,
        ),
        poi(
            "Golfe de Patras",
            "Golfe de la mer Ionienne.",
            "https://fr.wikipedia.org/wiki/Golfe_de_Patras",
            38.3333,
            21.7333,
            0.0,
            Side::Right,
            PoiCategory::Water,
        ),
        poi(
            "Côtes de l'Épire",
            "Région côtière montagneuse.",
            "https://fr.wikipedia.org/wiki/%C3%89pire_(p%C3%A9riphr%C3%A9rie)",
            39.2000,
            20.6000,
            500.0,
            Side::Right,
            PoiCategory::Nature,
        ),
        poi(
            "Golfe Saronique",
            "Golfe maritime au sud d'Athènes.",
            "https://fr.wikipedia.org/wiki/Golfe_Saronique",
            37.8000,
            23.4000,
            0.0,
            Side::Left,
            PoiCategory::Water,
        ),
        poi(
            "Mont Hymette",
            "Montagne au sud-est d'Athènes.",
            "https://fr.wikipedia.org/wiki/Hymette",
            37.9333,
            23.8167,
            1026.0,
            Side::Left,
            PoiCategory::Mountain,
        ),
        poi(
            "Port du Pirée",
            "Principal port d'Athènes.",
            "https://fr.wikipedia.org/wiki/Le_Pir%C3%A9e",
            37.9421,
            23.6465,
            0.0,
            Side::Left,
            PoiCategory::Port,
        ),
        poi(
            "Acropole et Parthénon",
            "Site antique emblématique.",
            "https://fr.wikipedia.org/wiki/Acropole_d%27Ath%C3%A8nes",
            37.9715,
            23.7267,
            156.0,
            Side::Right,
            PoiCategory::Historic,
        ),
        poi(
            "Quartier de Plaka",
            "Quartier historique d'Athènes.",
            "https://fr.wikipedia.org/wiki/Pl%C3%A1ka",
            37.9747,
            23.7283,
            100.0,
            Side::Right,
            PoiCategory::District,
        ),
        poi(
            "Mont Lycabette",
            "Colline dominant Athènes.",
            "https://fr.wikipedia.org/wiki/Mont_Lycabette",
            37.9908,
            23.7439,
            277.0,
            Side::Right,
            PoiCategory::Hill,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_is_shared() {
        let a = PoiCatalog::builtin();
        let b = PoiCatalog::builtin();
        assert!(std::ptr::eq(a, b));
        assert_eq!(a.len(), 30);
    }

    #[test]
    fn builtin_catalog_is_split_between_sides() {
        let catalog = PoiCatalog::builtin();
        let left = catalog.by_side(Side::Left).len();
        let right = catalog.by_side(Side::Right).len();
        assert_eq!(left + right, catalog.len());
        assert_eq!(left, 15);
    }

    #[test]
    fn acropolis_entry() {
        let acropolis = PoiCatalog::builtin().find("Acropole et Parthénon").unwrap();
        assert_eq!(acropolis.altitude_m, 156.0);
        assert_eq!(acropolis.category, PoiCategory::Historic);
        assert_eq!(acropolis.preferred_side, Side::Right);
    }

    #[test]
    fn filters_by_category() {
        let mountains = PoiCatalog::builtin().by_category(PoiCategory::Mountain);
        assert!(mountains.iter().any(|p| p.name == "Mont Blanc"));
        assert!(mountains.iter().all(|p| p.category == PoiCategory::Mountain));
    }

    #[test]
    fn range_query_around_athens() {
        let athens = GeoPoint::new(37.9715, 23.7267);
        let near = PoiCatalog::builtin().in_range(&athens, 50.0);
        let names: Vec<_> = near.iter().map(|p| p.name.as_str()).collect();
        assert!(names.contains(&"Mont Lycabette"));
        assert!(!names.contains(&"Mont Blanc"));
    }

    #[test]
    fn custom_catalog_from_iterator() {
        let catalog: PoiCatalog = PoiCatalog::builtin()
            .iter()
            .filter(|p| p.category == PoiCategory::City)
            .cloned()
            .collect();
        assert!(!catalog.is_empty());
        assert!(catalog.find("Venise").is_some());
    }
}
