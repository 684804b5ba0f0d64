//! Excuse corpus and random selection.
//!
//! The backend's excuse endpoint picks uniformly from a fixed corpus,
//! keyed by language. Unknown languages fall back to English.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Supported excuse languages.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Language {
    /// English.
    #[default]
    En,
    /// Spanish.
    Es,
}

const ENGLISH: [&str; 20] = [
    "My dog chewed the charging cable.",
    "Aliens abducted my computer.",
    "I accidentally submitted my grocery list instead.",
    "There was a power outage and my brain went with it.",
    "My younger sibling turned my homework into a paper airplane.",
    "ChatGPT wrote it, but it was too perfect and got flagged.",
    "The WiFi ghost deleted my files again.",
    "I opened my code, and it had mysteriously turned into a love letter.",
    "I finished it, but it’s on my other laptop... the imaginary one.",
    "I was testing time travel and overshot the deadline.",
    "I was updating my code, but GitHub went on strike.",
    "The app crashed right after I pressed 'submit'.",
    "I misunderstood the timezone and submitted yesterday in another country.",
    "My cat walked across the keyboard and introduced 27 bugs.",
    "I outsourced it to my cousin, but he outsourced it to his dog.",
    "The file was too advanced and scared my computer into shutting down.",
    "There was a cosmic ray event and it flipped all my bits.",
    "The file is stuck in a quantum state and can’t be observed.",
    "My hard drive is now a coaster after a coffee spill.",
    "I wrote it all on a napkin, but the wind had other plans.",
];

const SPANISH: [&str; 20] = [
    "Mi perro mordió el cable del cargador.",
    "Unos alienígenas secuestraron mi computadora.",
    "Accidentalmente entregué mi lista del supermercado.",
    "Hubo un corte de luz y mi cerebro se fue con él.",
    "Mi hermanito convirtió mi tarea en un avión de papel.",
    "Lo escribió ChatGPT, pero era tan perfecto que lo rechazaron.",
    "El fantasma del WiFi borró mis archivos otra vez.",
    "Abrí mi código y misteriosamente se había convertido en una carta de amor.",
    "Lo terminé, pero está en mi otra laptop... la imaginaria.",
    "Estaba probando viajes en el tiempo y pasé la fecha de entrega.",
    "Estaba actualizando mi código, pero GitHub se declaró en huelga.",
    "La app se colgó justo después de apretar 'enviar'.",
    "Confundí la zona horaria y lo entregué ayer, pero en otro país.",
    "Mi gato caminó sobre el teclado y metió 27 bugs.",
    "Se lo pasé a mi primo, pero él se lo pasó a su perro.",
    "El archivo era tan avanzado que mi computadora se apagó por miedo.",
    "Hubo una tormenta cósmica y todos mis bits se invirtieron.",
    "El archivo está en un estado cuántico y no puede ser observado.",
    "Mi disco duro ahora es un posavasos después de un derrame de café.",
    "Escribí todo en una servilleta, pero el viento tenía otros planes.",
];

/// Returns the full corpus for a language.
pub fn corpus(language: Language) -> &'static [&'static str] {
    match language {
        Language::En => &ENGLISH,
        Language::Es => &SPANISH,
    }
}

/// Picks a uniformly random excuse in the given language.
#[instrument]
pub fn random_excuse(language: Language) -> &'static str {
    let excuses = corpus(language);
    let mut rng = rand::thread_rng();
    excuses[rng.gen_range(0..excuses.len())]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corpus_sizes_match() {
        assert_eq!(corpus(Language::En).len(), corpus(Language::Es).len());
    }

    #[test]
    fn test_random_excuse_comes_from_corpus() {
        for _ in 0..50 {
            let excuse = random_excuse(Language::Es);
            assert!(corpus(Language::Es).contains(&excuse));
        }
    }

    #[test]
    fn test_language_parsing() {
        assert_eq!("en".parse::<Language>().unwrap(), Language::En);
        assert_eq!("es".parse::<Language>().unwrap(), Language::Es);
        assert!("fr".parse::<Language>().is_err());
        assert_eq!(Language::default(), Language::En);
    }

    #[test]
    fn test_language_round_trips_through_display() {
        assert_eq!(Language::Es.to_string(), "es");
        assert_eq!(Language::En.to_string(), "en");
    }
}
