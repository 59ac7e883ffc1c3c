//! Hero Entity
//!
//! The single managed record: a server-assigned identifier and a mutable
//! display name.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Hero identifier (assigned by the backend)
pub type HeroId = u32;

/// A hero record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    pub id: HeroId,
    pub name: String,
}

impl Hero {
    pub fn new(id: HeroId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl fmt::Display for Hero {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.id, self.name)
    }
}

/// Body of a create request. The backend assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewHero {
    pub name: String,
}

impl NewHero {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Either a bare identifier or a full hero.
///
/// Delete accepts both forms; the id is resolved before any remote call
/// is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeroRef {
    Id(HeroId),
    Hero(Hero),
}

impl HeroRef {
    pub fn id(&self) -> HeroId {
        match self {
            HeroRef::Id(id) => *id,
            HeroRef::Hero(hero) => hero.id,
        }
    }
}

impl From<HeroId> for HeroRef {
    fn from(id: HeroId) -> Self {
        HeroRef::Id(id)
    }
}

impl From<Hero> for HeroRef {
    fn from(hero: Hero) -> Self {
        HeroRef::Hero(hero)
    }
}

impl From<&Hero> for HeroRef {
    fn from(hero: &Hero) -> Self {
        HeroRef::Hero(hero.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hero_json_shape() {
        let hero = Hero::new(1, "Windstorm");
        let json = serde_json::to_string(&hero).unwrap();
        assert_eq!(json, r#"{"id":1,"name":"Windstorm"}"#);
    }

    #[test]
    fn test_new_hero_has_no_id() {
        let json = serde_json::to_value(NewHero::new("Zeta")).unwrap();
        assert!(json.get("id").is_none());
        assert_eq!(json["name"], "Zeta");
    }

    #[test]
    fn test_hero_ref_resolves_same_id() {
        let hero = Hero::new(13, "Bombasto");
        assert_eq!(HeroRef::from(13).id(), 13);
        assert_eq!(HeroRef::from(&hero).id(), 13);
        assert_eq!(HeroRef::from(hero).id(), 13);
    }
}
