//! Propriétés attendues du noyau, scénario par scénario.
//!
//! Chaque scénario passe par is_allowed avant apply_token, comme l’adaptateur.

use super::erreur::ErreurCalcul;
use super::etat::EtatCalc;
use super::jetons::{Jeton, Operateur};
use super::{apply_token, is_allowed, render, render_derniere_operation};

use Jeton::*;
const PLUS: Jeton = Op(Operateur::Plus);
const FOIS: Jeton = Op(Operateur::Fois);
const DIV: Jeton = Op(Operateur::Divise);

fn saisir(etat: &EtatCalc, j: Jeton) -> EtatCalc {
    assert!(is_allowed(etat, j), "jeton {j} refusé dans {etat:?}");
    apply_token(etat, j).unwrap_or_else(|e| panic!("{j}: {e}"))
}

fn jouer(jetons: &[Jeton]) -> EtatCalc {
    jetons
        .iter()
        .fold(EtatCalc::default(), |etat, j| saisir(&etat, *j))
}

#[test]
fn chiffre_puis_retour_redonne_initial() {
    let e = jouer(&[Chiffre(5), Retour]);
    assert_eq!(e, EtatCalc::default());
}

#[test]
fn effacer_est_idempotent() {
    let une = saisir(&jouer(&[Chiffre(5), PLUS, Chiffre(3)]), Effacer);
    let deux = apply_token(&une, Effacer).unwrap();
    assert_eq!(une, deux);
    assert_eq!(une, EtatCalc::default());
    // sur séquence vide, Effacer n’est même plus proposé
    assert!(!is_allowed(&une, Effacer));
}

#[test]
fn egal_enchaine_la_derniere_operation() {
    let e = jouer(&[Chiffre(5), PLUS, Chiffre(3), Egal]);
    assert_eq!(render(&e), "8");
    let e = saisir(&e, Egal);
    assert_eq!(render(&e), "11");
    assert_eq!(render_derniere_operation(&e).as_deref(), Some("8 + 3 ="));
}

#[test]
fn division_par_zero() {
    let e = jouer(&[Chiffre(5), DIV, Chiffre(0), Egal]);
    assert_eq!(render(&e), ErreurCalcul::DivisionParZero.to_string());
    assert!(!is_allowed(&e, PLUS));

    assert!(is_allowed(&e, Chiffre(7)));
    let e = saisir(&e, Chiffre(7));
    assert_eq!(render(&e), "7");
    assert_eq!(e.elements().len(), 1);
}

#[test]
fn signe_puis_retour_vide_tout() {
    let e = jouer(&[Chiffre(5), Signe]);
    assert_eq!(render(&e), "(-5)");
    let e = saisir(&e, Retour);
    assert!(e.est_vide());
    assert_eq!(render(&e), "0");
}

#[test]
fn pourcent_du_rhs() {
    let e = jouer(&[Chiffre(5), FOIS, Chiffre(2), Pourcent]);
    assert_eq!(render(&e), "5 × 2%");
    let e = saisir(&e, Egal);
    assert_eq!(render(&e), "0.1");
}

#[test]
fn arrondi_d_affichage_sans_perte() {
    // 1/3 affiché 0.3333, mais ×3 redonne exactement 1
    let e = jouer(&[Chiffre(1), DIV, Chiffre(3), Egal]);
    assert_eq!(render(&e), "0.3333");
    let e = jouer(&[Chiffre(1), DIV, Chiffre(3), Egal, FOIS]);
    assert_eq!(render(&e), "0.3333 × ");
    let e = saisir(&e, Chiffre(3));
    let e = saisir(&e, Egal);
    assert_eq!(render(&e), "1");
}

#[test]
fn operateur_efface_la_memoire_d_egal() {
    let e = jouer(&[Chiffre(5), PLUS, Chiffre(3), Egal]);
    assert!(e.derniere_operation.is_some());
    let e = saisir(&e, FOIS);
    assert!(e.derniere_operation.is_none());
    assert!(!is_allowed(&e, Egal));
}

#[test]
fn resultat_hors_limite_bloque_l_enchainement() {
    let mut jetons = vec![Chiffre(9); 7];
    jetons.push(FOIS);
    jetons.extend(vec![Chiffre(9); 7]);
    jetons.push(Egal);
    let e = jouer(&jetons);
    // 9999999² < 2^53 : encore un résultat
    assert_eq!(render(&e), "99999980000001");
    let e = saisir(&e, Egal);
    assert_eq!(render(&e), "Result exceeds limit");
    assert!(!is_allowed(&e, Egal));
    assert!(!is_allowed(&e, Pourcent));
}

#[test]
fn saisie_complete_negative_decimale() {
    let e = jouer(&[
        Chiffre(1),
        Chiffre(2),
        Point,
        Chiffre(5),
        Signe,
        Op(Operateur::Moins),
        Chiffre(2),
        Signe,
    ]);
    assert_eq!(render(&e), "(-12.5) - (-2)");
    let e = saisir(&e, Egal);
    assert_eq!(render(&e), "(-10.5)");
}

#[test]
fn retour_jusqu_au_vide_oublie_le_resultat() {
    let e = jouer(&[Chiffre(5), PLUS, Chiffre(3), Egal]);
    assert_eq!(render(&e), "8");
    let e = saisir(&e, Retour);
    assert_eq!(e, EtatCalc::default());
    assert_eq!(render_derniere_operation(&e), None);
    // plus de « + 3 » à rejouer : 2 = est refusé comme au démarrage
    let e = saisir(&e, Chiffre(2));
    assert!(!is_allowed(&e, Egal));
}
