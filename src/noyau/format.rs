// src/noyau/format.rs
//
// Affichage : état -> texte. Ne modifie jamais la séquence stockée.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, Zero};

use super::etat::{DerniereOperation, EtatCalc, Expression};
use super::jetons::Element;
use super::operande::Operande;

/// Chiffres après la virgule montrés pour un résultat.
pub const CHIFFRES_AFFICHAGE: usize = 4;

/* ------------------------ Arrondi décimal exact ------------------------ */

fn pow10(n: usize) -> BigInt {
    BigInt::from(10).pow(n as u32)
}

/// Texte décimal non signé -> rationnel exact (None si illisible).
fn chiffres_vers_rationnel(chiffres: &str) -> Option<BigRational> {
    let (ent, frac) = chiffres.split_once('.').unwrap_or((chiffres, ""));
    let tout = format!("{ent}{frac}");
    if tout.is_empty() {
        return None;
    }
    let n = BigInt::parse_bytes(tout.as_bytes(), 10)?;
    Some(BigRational::new(n, pow10(frac.len())))
}

/// Arrondit un texte décimal non signé à `precision` chiffres (demi vers le haut),
/// sans zéros de fin : "8.66666" -> "8.6667", "2.00001" -> "2".
/// Un point final déjà saisi ("3.") n’a rien à arrondir et reste visible.
pub fn arrondir_chiffres(chiffres: &str, precision: usize) -> String {
    if chiffres.ends_with('.') {
        return chiffres.to_string();
    }
    let Some(r) = chiffres_vers_rationnel(chiffres) else {
        return chiffres.to_string();
    };

    let echelle = pow10(precision);
    let scaled = (r * BigRational::from_integer(echelle.clone()))
        .round()
        .to_integer()
        .abs();

    let ent = &scaled / &echelle;
    let reste = &scaled % &echelle;
    if reste.is_zero() {
        return ent.to_string();
    }

    let mut frac = reste.to_str_radix(10);
    while frac.len() < precision {
        frac.insert(0, '0');
    }
    let frac = frac.trim_end_matches('0');
    format!("{ent}.{frac}")
}

/* ------------------------ Rendu ------------------------ */

fn glyphe(e: &Element) -> String {
    match e {
        Element::Chiffre(d) => d.to_string(),
        Element::Point => ".".to_string(),
        Element::ParOuvrante => "(".to_string(),
        Element::Neg => "-".to_string(),
        Element::ParFermante => ")".to_string(),
        Element::Pourcent => "%".to_string(),
        Element::Op(op) => format!(" {} ", op.glyphe()),
        Element::Erreur(err) => err.to_string(),
    }
}

fn joindre(elements: &[Element]) -> String {
    elements.iter().map(glyphe).collect()
}

/// Copie d’affichage du LHS : arrondi si c’est un résultat décimal.
fn lhs_affiche(lhs: &Operande, est_resultat: bool) -> Operande {
    if est_resultat && lhs.a_point() {
        Operande {
            chiffres: arrondir_chiffres(&lhs.chiffres, CHIFFRES_AFFICHAGE),
            ..lhs.clone()
        }
    } else {
        lhs.clone()
    }
}

/// Point d’entrée : texte à afficher pour l’état courant.
pub fn render(etat: &EtatCalc) -> String {
    let Some(expr) = etat.expression() else {
        // message réservé, affiché tel quel
        return joindre(&etat.elements());
    };
    if expr.est_vide() {
        return "0".to_string();
    }

    let affiche = Expression {
        lhs: lhs_affiche(&expr.lhs, etat.lhs_est_resultat),
        ..expr.clone()
    };
    joindre(&affiche.elements())
}

/// Ligne “dernière opération” : `5 + 3 =`, None si rien à rejouer.
pub fn render_derniere_operation(etat: &EtatCalc) -> Option<String> {
    let DerniereOperation { lhs, op, rhs } = etat.derniere_operation.as_ref()?;
    let mut elements = lhs_affiche(lhs, lhs.a_point()).elements();
    elements.push(Element::Op(*op));
    elements.extend(rhs.elements());
    Some(format!("{} =", joindre(&elements)))
}
