use serde::{Deserialize, Serialize};

/// The neighborhood groupings used to filter theaters geographically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Quartier {
    /// Rive gauche
    #[serde(rename = "rg")]
    Rg,
    /// Rive droite
    #[serde(rename = "rd")]
    Rd,
    /// Extramuros
    #[serde(rename = "em")]
    Em,
}

const RIVE_GAUCHE_ZIPCODES: &[&str] = &["75005", "75006", "75007", "75013", "75014", "75015"];

impl Quartier {
    pub fn all() -> Vec<Quartier> {
        vec![Quartier::Rg, Quartier::Rd, Quartier::Em]
    }

    /// Left-bank arrondissements are rive gauche, the rest of Paris is rive
    /// droite, any non-Paris zipcode is extramuros.
    pub fn from_zipcode(zipcode: &str) -> Quartier {
        if RIVE_GAUCHE_ZIPCODES.contains(&zipcode) {
            Quartier::Rg
        } else if zipcode.starts_with("75") {
            Quartier::Rd
        } else {
            Quartier::Em
        }
    }

    pub fn from_code(code: &str) -> Option<Quartier> {
        match code {
            "rg" => Some(Quartier::Rg),
            "rd" => Some(Quartier::Rd),
            "em" => Some(Quartier::Em),
            _ => None,
        }
    }
}
