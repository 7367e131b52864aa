// src/noyau/erreur.rs
//
// Deux familles d’erreurs, à ne pas confondre :
// - ErreurCalcul : affichée à l’écran (la séquence devient le message réservé).
// - ErreurNoyau  : défaut de l’adaptateur (jeton hors vocabulaire), jamais avalée.

use thiserror::Error;

/// Erreurs “utilisateur” produites par `=` : le texte `Display` est la chaîne
/// réservée qui remplace la séquence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ErreurCalcul {
    #[error("div by 0? bruh.")]
    DivisionParZero,

    #[error("Input exceeds limit")]
    EntreeHorsLimite,

    #[error("Result exceeds limit")]
    ResultatHorsLimite,
}

/// Erreur fatale du noyau : l’adaptateur a transmis un jeton inconnu.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErreurNoyau {
    #[error("Trying to process an improper token: {0:?}")]
    JetonIncorrect(String),
}
