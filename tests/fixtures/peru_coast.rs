//! Real Peruvian coast ports and offshore fishing grounds.
//!
//! Port coordinates match the working harbors between Paita and Ilo.
//! Ground positions sit offshore of the shelf break, inside typical
//! anchoveta range of their nearest port.

/// A named port with coordinates.
#[derive(Debug, Clone)]
pub struct Port {
    pub id: &'static str,
    pub name: &'static str,
    pub lat: f64,
    pub lon: f64,
}

impl Port {
    pub const fn new(id: &'static str, name: &'static str, lat: f64, lon: f64) -> Self {
        Self { id, name, lat, lon }
    }
}

/// An offshore ground with an estimated biomass.
#[derive(Debug, Clone)]
pub struct Ground {
    pub id: &'static str,
    pub lat: f64,
    pub lon: f64,
    pub tons: f64,
}

impl Ground {
    pub const fn new(id: &'static str, lat: f64, lon: f64, tons: f64) -> Self {
        Self { id, lat, lon, tons }
    }
}

// ============================================================================
// Ports (north to south)
// ============================================================================

pub const PORTS: &[Port] = &[
    Port::new("PAITA", "Paita", -5.09, -81.11),
    Port::new("BAYOVAR", "Bayóvar", -5.83, -81.05),
    Port::new("MALABRIGO", "Malabrigo", -7.70, -79.43),
    Port::new("COISHCO", "Coishco", -9.02, -78.61),
    Port::new("CHIMBOTE", "Chimbote", -9.08, -78.59),
    Port::new("SAMANCO", "Samanco", -9.25, -78.50),
    Port::new("SUPE", "Supe", -10.80, -77.70),
    Port::new("VEGUETA", "Végueta", -11.02, -77.64),
    Port::new("CHANCAY", "Chancay", -11.56, -77.27),
    Port::new("CALLAO", "Callao", -12.05, -77.15),
    Port::new("TAMBO DE MORA", "Tambo de Mora", -13.40, -76.10),
    Port::new("PISCO", "Pisco", -13.70, -76.20),
    Port::new("MATARANI", "Matarani", -17.00, -72.10),
    Port::new("ILO", "Ilo", -17.64, -71.34),
];

// ============================================================================
// Northern grounds (Paita - Malabrigo)
// ============================================================================

pub const NORTH_GROUNDS: &[Ground] = &[
    Ground::new("N-101", -5.32, -81.65, 310.0),
    Ground::new("N-102", -5.78, -81.82, 140.0),
    Ground::new("N-103", -6.40, -81.30, 220.0),
    Ground::new("N-104", -7.05, -80.70, 95.0),
    Ground::new("N-105", -7.52, -80.15, 180.0),
    Ground::new("N-106", -7.95, -79.90, 260.0),
];

// ============================================================================
// Central grounds (Chimbote - Pisco), the densest stretch
// ============================================================================

pub const CENTRAL_GROUNDS: &[Ground] = &[
    Ground::new("C-201", -8.90, -79.30, 420.0),
    Ground::new("C-202", -9.15, -79.05, 150.0),
    Ground::new("C-203", -9.48, -79.42, 330.0),
    Ground::new("C-204", -9.86, -78.95, 75.0),
    Ground::new("C-205", -10.35, -78.60, 240.0),
    Ground::new("C-206", -10.95, -78.35, 190.0),
    Ground::new("C-207", -11.48, -77.95, 280.0),
    Ground::new("C-208", -12.10, -77.80, 360.0),
    Ground::new("C-209", -12.66, -77.45, 120.0),
    Ground::new("C-210", -13.35, -76.85, 210.0),
];

// ============================================================================
// Southern grounds (Matarani - Ilo)
// ============================================================================

pub const SOUTH_GROUNDS: &[Ground] = &[
    Ground::new("S-301", -16.70, -72.90, 170.0),
    Ground::new("S-302", -17.20, -72.60, 230.0),
    Ground::new("S-303", -17.75, -71.95, 130.0),
];

/// All grounds, north to south.
pub fn all_grounds() -> Vec<Ground> {
    NORTH_GROUNDS
        .iter()
        .chain(CENTRAL_GROUNDS)
        .chain(SOUTH_GROUNDS)
        .cloned()
        .collect()
}
