// src/noyau/transitions.rs
//
// Transitions (état, jeton) -> nouvel état.
//
// Contrat :
// - Fonctions pures : l’état reçu n’est jamais modifié, on travaille sur une copie.
// - Pas de validation ici : regles::is_allowed décide en amont.
// - Seul cas d’échec : chiffre hors 0..=9 (jeton incorrect, fatal).

use super::arith::appliquer;
use super::erreur::ErreurNoyau;
use super::etat::{DerniereOperation, EtatCalc, Expression, Sequence};
use super::format::{arrondir_chiffres, CHIFFRES_AFFICHAGE};
use super::jetons::{Jeton, Operateur};
use super::operande::Operande;

/* ------------------------ Helpers ------------------------ */

/// Expression de travail : une erreur affichée compte comme une séquence vide.
fn expression_de(etat: &EtatCalc) -> Expression {
    etat.expression().cloned().unwrap_or_default()
}

fn avec_expression(etat: &EtatCalc, expr: Expression) -> EtatCalc {
    EtatCalc {
        sequence: Sequence::Expr(expr),
        ..etat.clone()
    }
}

/// Le LHS affiché est périmé (résultat ou erreur) : la saisie repart de zéro.
fn saisie_perimee(etat: &EtatCalc) -> bool {
    match etat.expression() {
        None => true,
        Some(e) => e.op.is_none() && etat.lhs_est_resultat,
    }
}

/// (lhs, op, rhs) à évaluer pour `=`, None si rien n’est résoluble.
fn resoudre_operation(etat: &EtatCalc) -> Option<(Operande, Operateur, Operande)> {
    let expr = etat.expression()?;
    match expr.op {
        Some(op) => Some((expr.lhs.clone(), op, expr.rhs.clone())),
        None if expr.lhs.pourcent => Some((
            expr.lhs.sans_pourcent(),
            Operateur::Divise,
            Operande::depuis_chiffres("100"),
        )),
        None => etat
            .derniere_operation
            .as_ref()
            .map(|d| (expr.lhs.clone(), d.op, d.rhs.clone())),
    }
}

/* ------------------------ Transitions ------------------------ */

fn chiffre(etat: &EtatCalc, d: u8) -> Result<EtatCalc, ErreurNoyau> {
    let c = char::from_digit(u32::from(d), 10)
        .ok_or_else(|| ErreurNoyau::JetonIncorrect(d.to_string()))?;

    if saisie_perimee(etat) {
        let expr = Expression {
            lhs: Operande::depuis_chiffres(&c.to_string()),
            ..Expression::default()
        };
        return Ok(EtatCalc {
            lhs_est_resultat: false,
            ..avec_expression(etat, expr)
        });
    }

    let mut expr = expression_de(etat);
    expr.active_mut().pousser(c);
    Ok(avec_expression(etat, expr))
}

fn point(etat: &EtatCalc) -> EtatCalc {
    let (mut expr, lhs_est_resultat) = if saisie_perimee(etat) {
        (Expression::default(), false)
    } else {
        (expression_de(etat), etat.lhs_est_resultat)
    };

    let active = expr.active_mut();
    if !active.chiffres.ends_with(|c: char| c.is_ascii_digit()) {
        active.pousser('0');
    }
    active.pousser('.');

    EtatCalc {
        lhs_est_resultat,
        ..avec_expression(etat, expr)
    }
}

fn signe(etat: &EtatCalc) -> EtatCalc {
    let Some(e) = etat.expression() else {
        return etat.clone();
    };
    let mut expr = e.clone();
    expr.active_mut().basculer_signe();
    avec_expression(etat, expr)
}

fn operateur(etat: &EtatCalc, op: Operateur) -> EtatCalc {
    let Some(e) = etat.expression() else {
        return etat.clone();
    };

    let mut base = etat.clone();
    let mut expr = e.clone();

    if expr.op.is_some() && !expr.rhs.est_vide() {
        // second opérateur : on évalue d’abord l’expression en attente
        if expr.rhs.valeur().is_some() {
            base = egal(etat);
            match base.expression() {
                Some(r) => expr = r.clone(),
                None => return base, // erreur : l’opérateur est abandonné
            }
        } else {
            log::debug!("RHS illisible abandonné avant opérateur {:?}", op);
            expr.rhs = Operande::default();
        }
    } else if expr.est_vide() {
        expr.lhs = Operande::depuis_chiffres("0");
    }

    expr.op = Some(op);
    expr.rhs = Operande::default();

    EtatCalc {
        derniere_operation: None,
        ..avec_expression(&base, expr)
    }
}

fn retour(etat: &EtatCalc) -> EtatCalc {
    let Some(e) = etat.expression() else {
        // effacer le message d’erreur = repartir de l’état initial
        return EtatCalc::default();
    };
    let mut expr = e.clone();

    if expr.finit_par_operateur() {
        expr.op = None;
        return avec_expression(etat, expr);
    }

    // arrondi visible : on efface le dernier chiffre MONTRÉ, pas un chiffre caché
    if expr.op.is_none() && etat.lhs_est_resultat && expr.lhs.a_point() {
        expr.lhs.chiffres = arrondir_chiffres(&expr.lhs.chiffres, CHIFFRES_AFFICHAGE);
    }

    let active = expr.active_mut();
    if active.chiffres.pop().is_none() {
        // pas de chiffre : on retire le marqueur le plus extérieur
        if active.pourcent {
            active.pourcent = false;
        } else {
            active.negatif = false;
        }
    }
    if active.chiffres.is_empty() {
        // enveloppe ( neg ) vide => supprimée, % orphelin aussi
        active.negatif = false;
        active.pourcent = false;
    }

    // tout effacé : plus de résultat ni de mémoire d’égal
    if expr.est_vide() {
        return EtatCalc::default();
    }

    avec_expression(etat, expr)
}

fn pourcent(etat: &EtatCalc) -> EtatCalc {
    let Some(e) = etat.expression() else {
        return etat.clone();
    };
    let mut expr = e.clone();

    if expr.est_vide() {
        expr.lhs = Operande::depuis_chiffres("0");
    }

    if expr.active().pourcent {
        expr.active_mut().pourcent = false;
    } else if expr.finit_par_operateur() {
        // % remplace l’opérateur en attente : pourcentage du LHS
        expr.op = None;
        expr.lhs.pourcent = true;
    } else {
        expr.active_mut().pourcent = true;
    }

    avec_expression(etat, expr)
}

fn egal(etat: &EtatCalc) -> EtatCalc {
    let Some((lhs, op, rhs)) = resoudre_operation(etat) else {
        log::warn!("= sans opération résoluble, état inchangé");
        return etat.clone();
    };
    let (Some(a), Some(b)) = (lhs.valeur(), rhs.valeur()) else {
        log::warn!("= avec opérande illisible, état inchangé");
        return etat.clone();
    };

    match appliquer(op, a, b) {
        Ok(v) => {
            log::debug!("{a} {} {b} = {v}", op.symbole());
            EtatCalc {
                sequence: Sequence::Expr(Expression {
                    lhs: Operande::depuis_nombre(v),
                    ..Expression::default()
                }),
                derniere_operation: Some(DerniereOperation { lhs, op, rhs }),
                lhs_est_resultat: true,
            }
        }
        Err(err) => {
            log::debug!("{a} {} {b} : {err}", op.symbole());
            EtatCalc {
                sequence: Sequence::Erreur(err),
                derniere_operation: None,
                lhs_est_resultat: true,
            }
        }
    }
}

/// Point d’entrée : applique un jeton (déjà jugé admissible) et rend le nouvel état.
pub fn apply_token(etat: &EtatCalc, jeton: Jeton) -> Result<EtatCalc, ErreurNoyau> {
    let suivant = match jeton {
        Jeton::Chiffre(d) => chiffre(etat, d)?,
        Jeton::Point => point(etat),
        Jeton::Signe => signe(etat),
        Jeton::Op(op) => operateur(etat, op),
        Jeton::Retour => retour(etat),
        Jeton::Effacer => EtatCalc::default(),
        Jeton::Pourcent => pourcent(etat),
        Jeton::Egal => egal(etat),
    };
    Ok(suivant)
}
