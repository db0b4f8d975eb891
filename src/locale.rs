//! Site language, passed explicitly to whatever needs to pick a localized field.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Es,
    En,
}

impl Language {
    /// Pick the value for this language from a Spanish/English pair.
    pub fn select<'a, T: ?Sized>(&self, es: &'a T, en: &'a T) -> &'a T {
        match self {
            Language::Es => es,
            Language::En => en,
        }
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "es" => Ok(Language::Es),
            "en" => Ok(Language::En),
            other => Err(format!("Unknown language '{}' (expected 'es' or 'en')", other)),
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.select("es", "en"))
    }
}
