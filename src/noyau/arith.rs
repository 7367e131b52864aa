// src/noyau/arith.rs
//
// Arithmétique flottante (f64) bornée par l’entier “sûr” (2^53 - 1).
// Ordre des contrôles : division par zéro, puis entrées, puis résultat.

use super::erreur::ErreurCalcul;
use super::jetons::Operateur;

/// Plus grand entier représentable exactement en f64.
pub const LIMITE_SURE: f64 = 9_007_199_254_740_991.0;

fn est_sur(v: f64) -> bool {
    (-LIMITE_SURE..=LIMITE_SURE).contains(&v)
}

pub fn add(lhs: f64, rhs: f64) -> f64 {
    lhs + rhs
}

pub fn subtract(lhs: f64, rhs: f64) -> f64 {
    lhs - rhs
}

pub fn multiply(lhs: f64, rhs: f64) -> f64 {
    lhs * rhs
}

pub fn divide(lhs: f64, rhs: f64) -> Result<f64, ErreurCalcul> {
    if rhs == 0.0 {
        return Err(ErreurCalcul::DivisionParZero);
    }
    Ok(lhs / rhs)
}

/// Applique `op` puis vérifie les bornes.
pub fn appliquer(op: Operateur, lhs: f64, rhs: f64) -> Result<f64, ErreurCalcul> {
    let brut = match op {
        Operateur::Plus => add(lhs, rhs),
        Operateur::Moins => subtract(lhs, rhs),
        Operateur::Fois => multiply(lhs, rhs),
        Operateur::Divise => divide(lhs, rhs)?,
    };

    if !est_sur(lhs) || !est_sur(rhs) {
        return Err(ErreurCalcul::EntreeHorsLimite);
    }
    if !est_sur(brut) {
        return Err(ErreurCalcul::ResultatHorsLimite);
    }
    Ok(brut)
}
