//! Noyau de la calculatrice à jetons
//!
//! Organisation interne :
//! - jetons.rs      : vocabulaire des jetons + éléments de la séquence à plat
//! - operande.rs    : opérande structuré (chiffres, négatif, %)
//! - etat.rs        : état immuable + dernière opération
//! - regles.rs      : admissibilité d’un jeton
//! - transitions.rs : (état, jeton) -> nouvel état
//! - arith.rs       : + - × ÷ bornés par l’entier sûr
//! - format.rs      : affichage (arrondi à 4 chiffres, glyphes)
//! - entrees.rs     : tables bouton/touche -> jeton
//! - erreur.rs      : erreurs affichées + erreur fatale

pub mod arith;
pub mod entrees;
pub mod erreur;
pub mod etat;
pub mod format;
pub mod jetons;
pub mod operande;
pub mod regles;
pub mod transitions;

#[cfg(test)]
mod tests_proprietes;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use format::{render, render_derniere_operation};
pub use regles::is_allowed;
pub use transitions::apply_token;
