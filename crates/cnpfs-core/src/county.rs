//! # County Table
//!
//! The `JJ` field is the county (judet) of registration. Codes 01-46 cover
//! the historical counties, Bucharest and its six sectors; 51 and 52 were
//! added later for Calarasi and Giurgiu. Codes 47-50 are unassigned.

use serde::Serialize;

/// Code and name of every county, in code order.
pub const COUNTIES: [(u8, &str); 48] = [
    (1, "Alba"),
    (2, "Arad"),
    (3, "Arges"),
    (4, "Bacau"),
    (5, "Bihor"),
    (6, "Bistrita-Nasaud"),
    (7, "Botosani"),
    (8, "Brasov"),
    (9, "Braila"),
    (10, "Buzau"),
    (11, "Caras-Severin"),
    (12, "Cluj"),
    (13, "Constanta"),
    (14, "Covasna"),
    (15, "Dambovita"),
    (16, "Dolj"),
    (17, "Galati"),
    (18, "Gorj"),
    (19, "Harghita"),
    (20, "Hunedoara"),
    (21, "Ialomita"),
    (22, "Iasi"),
    (23, "Ilfov"),
    (24, "Maramures"),
    (25, "Mehedinti"),
    (26, "Mures"),
    (27, "Neamt"),
    (28, "Olt"),
    (29, "Prahova"),
    (30, "Satu Mare"),
    (31, "Salaj"),
    (32, "Sibiu"),
    (33, "Suceava"),
    (34, "Teleorman"),
    (35, "Timis"),
    (36, "Tulcea"),
    (37, "Vaslui"),
    (38, "Valcea"),
    (39, "Vrancea"),
    (40, "Bucuresti"),
    (41, "Bucuresti, sector 1"),
    (42, "Bucuresti, sector 2"),
    (43, "Bucuresti, sector 3"),
    (44, "Bucuresti, sector 4"),
    (45, "Bucuresti, sector 5"),
    (46, "Bucuresti, sector 6"),
    (51, "Calarasi"),
    (52, "Giurgiu"),
];

/// A county of registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct County {
    code: u8,
    name: &'static str,
}

impl County {
    /// Look up a county by its numeric code.
    pub fn from_code(code: u8) -> Option<Self> {
        COUNTIES
            .iter()
            .find(|(c, _)| *c == code)
            .map(|&(code, name)| Self { code, name })
    }

    /// Look up a county by its exact name.
    pub fn from_name(name: &str) -> Option<Self> {
        COUNTIES
            .iter()
            .find(|(_, n)| *n == name)
            .map(|&(code, name)| Self { code, name })
    }

    /// All counties in code order.
    pub fn all() -> impl Iterator<Item = County> {
        COUNTIES.iter().map(|&(code, name)| Self { code, name })
    }

    /// The numeric `JJ` code.
    pub fn code(&self) -> u8 {
        self.code
    }

    /// The county name.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl std::fmt::Display for County {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name)
    }
}
