use crate::config::loader::ConfigError;
use std::fs;

const METROVALENCIA_STOPS: &[&str] = &[
    "Aeroport",
    "Alameda",
    "Alboraia Palmaret",
    "Alboraia Peris Aragó",
    "Alginet",
    "Amistat-Casa de Salut",
    "Àngel Guimerà",
    "Aragó",
    "Avinguda del Cid",
    "Ayora",
    "Bailén",
    "Benimaclet",
    "Benimàmet",
    "Bétera",
    "Burjassot",
    "Burjassot-Godella",
    "Campanar",
    "Canterería",
    "Castelló",
    "Colón",
    "Empalme",
    "Faitanar",
    "Facultats-Manuel Broseta",
    "Foios",
    "Godella",
    "Horta Vella",
    "Jesús",
    "L'Alcúdia",
    "La Cadena",
    "La Canyada",
    "La Pobla de Vallbona",
    "Les Carolines-Fira",
    "Llíria",
    "Machado",
    "Manises",
    "Marítim",
    "Masies",
    "Meliana",
    "Mislata",
    "Mislata-Almassil",
    "Montesol",
    "Museros",
    "Nou d'Octubre",
    "Paiporta",
    "Parc Científic",
    "Paterna",
    "Patraix",
    "Picanya",
    "Plaça d'Espanya",
    "Quart de Poblet",
    "Rafelbunyol",
    "Rocafort",
    "Safranar",
    "Sant Isidre",
    "Santa Bàrbara",
    "Seminari-CEU",
    "Torrent",
    "Torrent Avinguda",
    "Túria",
    "Xàtiva",
];

/// Canonical station names offered by the client picker.
#[derive(Debug, Clone)]
pub struct Stations {
    names: Vec<String>,
}

impl Stations {
    pub fn builtin() -> Stations {
        Stations {
            names: METROVALENCIA_STOPS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Loads a YAML sequence of station names.
    pub fn from_file(path: &str) -> Result<Stations, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let names: Vec<String> = serde_yaml::from_str(&contents)?;
        Ok(Stations { names })
    }

    pub fn load(path: Option<&str>) -> Result<Stations, ConfigError> {
        match path {
            Some(path) => Stations::from_file(path),
            None => Ok(Stations::builtin()),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }
}
