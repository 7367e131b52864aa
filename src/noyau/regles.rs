// src/noyau/regles.rs
//
// Règles d’admissibilité : un jeton peut-il s’appliquer à l’état courant ?
// Prédicats purs ; les transitions supposent qu’ils ont été consultés.

use super::etat::EtatCalc;
use super::jetons::Jeton;

/* ------------------------ Prédicats élémentaires ------------------------ */

fn sequence_presente(etat: &EtatCalc) -> bool {
    !etat.est_vide()
}

fn pas_d_erreur(etat: &EtatCalc) -> bool {
    etat.erreur().is_none()
}

fn dernier_pas_operateur(etat: &EtatCalc) -> bool {
    etat.expression().is_none_or(|e| !e.finit_par_operateur())
}

fn operande_actif_pas_zero(etat: &EtatCalc) -> bool {
    etat.expression().is_none_or(|e| !e.active().est_zero_litteral())
}

/// Si le dernier élément est l’opérateur, l’opérande qui le précède ne doit
/// pas déjà finir par %.
fn dernier_operande_pas_pourcent(etat: &EtatCalc) -> bool {
    match etat.expression() {
        Some(e) if e.finit_par_operateur() => !e.lhs.pourcent,
        _ => true,
    }
}

fn dernier_est_pourcent(etat: &EtatCalc) -> bool {
    etat.expression().is_some_and(|e| e.active().pourcent)
}

/// LHS opérateur RHS, les deux côtés lisibles comme nombres.
fn expression_complete(etat: &EtatCalc) -> bool {
    etat.expression().is_some_and(|e| {
        e.op.is_some() && e.lhs.valeur().is_some() && e.rhs.valeur().is_some()
    })
}

/* ------------------------ Règles par jeton ------------------------ */

fn point_autorise(etat: &EtatCalc) -> bool {
    etat.expression().is_none_or(|e| !e.active().a_point())
}

/// ± : en plus des conditions de saisie, refusé sur un message d’erreur.
/// Rien ne s’enchaîne sur une erreur, ± pas plus qu’un opérateur ou `=`.
fn signe_autorise(etat: &EtatCalc) -> bool {
    sequence_presente(etat)
        && pas_d_erreur(etat)
        && operande_actif_pas_zero(etat)
        && dernier_pas_operateur(etat)
}

fn pourcent_autorise(etat: &EtatCalc) -> bool {
    pas_d_erreur(etat) && dernier_operande_pas_pourcent(etat) && dernier_pas_operateur(etat)
}

fn egal_autorise(etat: &EtatCalc) -> bool {
    sequence_presente(etat)
        && pas_d_erreur(etat)
        && (etat.derniere_operation.is_some()
            || expression_complete(etat)
            || dernier_est_pourcent(etat))
}

/// Point d’entrée : le jeton est-il admissible dans cet état ?
pub fn is_allowed(etat: &EtatCalc, jeton: Jeton) -> bool {
    match jeton {
        Jeton::Chiffre(_) => true,
        Jeton::Point => point_autorise(etat),
        Jeton::Signe => signe_autorise(etat),
        Jeton::Op(_) => pas_d_erreur(etat),
        Jeton::Retour | Jeton::Effacer => sequence_presente(etat),
        Jeton::Pourcent => pourcent_autorise(etat),
        Jeton::Egal => egal_autorise(etat),
    }
}
