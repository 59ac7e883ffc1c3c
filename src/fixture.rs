//! Seed roster used when no remote backend is configured.

use crate::hero::Hero;

/// (id, name) pairs of the seed roster
pub const MOCK_HEROES: &[(u32, &str)] = &[
    (1, "Windstorm"),
    (11, "Mr. Nice"),
    (12, "Narco"),
    (13, "Bombasto"),
    (14, "Celeritas"),
    (15, "Magneta"),
    (16, "RubberMan"),
    (17, "Dynama"),
    (18, "Dr IQ"),
    (19, "Magma"),
    (20, "Tornado"),
];

/// Build owned heroes from the seed roster
pub fn mock_heroes() -> Vec<Hero> {
    MOCK_HEROES
        .iter()
        .map(|(id, name)| Hero::new(*id, *name))
        .collect()
}
