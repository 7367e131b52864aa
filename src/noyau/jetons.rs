// src/noyau/jetons.rs
//
// Vocabulaire des jetons saisis + éléments de la séquence stockée.
//
// Deux niveaux distincts :
// - Jeton   : ce que l’utilisateur tape (chiffre, opérateur, =, C, ...)
// - Element : forme sérialisée “à plat” de l’expression ( ( neg 5 ) % + 3 ...)

use std::fmt;
use std::str::FromStr;

use super::erreur::{ErreurCalcul, ErreurNoyau};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
}

impl Operateur {
    /// Symbole interne stocké dans la séquence.
    pub fn symbole(self) -> char {
        match self {
            Operateur::Plus => '+',
            Operateur::Moins => '-',
            Operateur::Fois => '*',
            Operateur::Divise => '/',
        }
    }

    /// Glyphe affiché (÷ et × à la place de / et *).
    pub fn glyphe(self) -> char {
        match self {
            Operateur::Plus => '+',
            Operateur::Moins => '-',
            Operateur::Fois => '×',
            Operateur::Divise => '÷',
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Jeton {
    /// Chiffre 0..=9 (au-delà : jeton incorrect, refusé par apply_token).
    Chiffre(u8),
    Point,
    Op(Operateur),
    Signe,
    Pourcent,
    Retour,
    Effacer,
    Egal,
}

/// Noms “canoniques” des jetons (identifiants de boutons).
impl FromStr for Jeton {
    type Err = ErreurNoyau;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let j = match s {
            "decimal" => Jeton::Point,
            "sign" => Jeton::Signe,
            "add" => Jeton::Op(Operateur::Plus),
            "subtract" => Jeton::Op(Operateur::Moins),
            "multiply" => Jeton::Op(Operateur::Fois),
            "divide" => Jeton::Op(Operateur::Divise),
            "backspace" => Jeton::Retour,
            "clear" => Jeton::Effacer,
            "equals" => Jeton::Egal,
            "percent" => Jeton::Pourcent,
            _ => match s.as_bytes() {
                [c] if c.is_ascii_digit() => Jeton::Chiffre(c - b'0'),
                _ => return Err(ErreurNoyau::JetonIncorrect(s.to_string())),
            },
        };
        Ok(j)
    }
}

impl fmt::Display for Jeton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Jeton::Chiffre(d) => write!(f, "{d}"),
            Jeton::Point => f.write_str("decimal"),
            Jeton::Op(Operateur::Plus) => f.write_str("add"),
            Jeton::Op(Operateur::Moins) => f.write_str("subtract"),
            Jeton::Op(Operateur::Fois) => f.write_str("multiply"),
            Jeton::Op(Operateur::Divise) => f.write_str("divide"),
            Jeton::Signe => f.write_str("sign"),
            Jeton::Pourcent => f.write_str("percent"),
            Jeton::Retour => f.write_str("backspace"),
            Jeton::Effacer => f.write_str("clear"),
            Jeton::Egal => f.write_str("equals"),
        }
    }
}

/// Élément de la séquence à plat.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Element {
    Chiffre(u8),
    Point,
    ParOuvrante,
    Neg,
    ParFermante,
    Pourcent,
    Op(Operateur),
    /// Message réservé : seul élément de la séquence quand il est présent.
    Erreur(ErreurCalcul),
}

/// Forme texte interne (debug) : une entrée par élément, séparées par des espaces.
pub fn format_elements(elements: &[Element]) -> String {
    let mut out = Vec::with_capacity(elements.len());
    for e in elements {
        let s = match e {
            Element::Chiffre(d) => d.to_string(),
            Element::Point => ".".to_string(),
            Element::ParOuvrante => "(".to_string(),
            Element::Neg => "neg".to_string(),
            Element::ParFermante => ")".to_string(),
            Element::Pourcent => "%".to_string(),
            Element::Op(op) => op.symbole().to_string(),
            Element::Erreur(err) => err.to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
