// src/noyau/entrees.rs
//
// Tables fixes : identifiant de bouton / touche clavier -> jeton.
// Tout ce qui n’est pas reconnu donne None (ignoré en silence par l’adaptateur).

use super::jetons::Jeton;

const CHIFFRES_EN_LETTRES: [&str; 10] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

/// Identifiant de bouton (clic) -> jeton.
pub fn jeton_depuis_id(id: &str) -> Option<Jeton> {
    if let Some(d) = CHIFFRES_EN_LETTRES.iter().position(|&nom| nom == id) {
        return Some(Jeton::Chiffre(d as u8));
    }
    match id {
        // l’icône du bouton retour se compose de plusieurs éléments cliquables
        "backspace-svg" | "backspace-path-1" | "backspace-path-2" => Some(Jeton::Retour),
        // les chiffres se cliquent par leur nom, pas par "0".."9"
        _ if id.len() == 1 => None,
        _ => id.parse().ok(),
    }
}

/// Nom de touche clavier -> identifiant de bouton.
pub fn id_depuis_touche(touche: &str) -> Option<&'static str> {
    let id = match touche {
        "0" | "1" | "2" | "3" | "4" | "5" | "6" | "7" | "8" | "9" => {
            let d = touche.parse::<usize>().ok()?;
            CHIFFRES_EN_LETTRES[d]
        }
        "+" => "add",
        "-" => "subtract",
        "*" | "x" => "multiply",
        "/" | "÷" => "divide",
        "c" | "C" => "clear",
        "Backspace" => "backspace",
        "." => "decimal",
        "=" | "Enter" => "equals",
        "%" => "percent",
        "s" => "sign",
        _ => return None,
    };
    Some(id)
}

/// Touche clavier -> jeton (via l’identifiant du bouton correspondant).
pub fn jeton_depuis_touche(touche: &str) -> Option<Jeton> {
    id_depuis_touche(touche).and_then(jeton_depuis_id)
}
