//! Tests fuzz safe : marches aléatoires de jetons sur le noyau.
//!
//! But : marteler règles + transitions + affichage sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - nombre de pas borné
//! - budget temps global
//! - invariants vérifiés après CHAQUE jeton accepté

use std::time::{Duration, Instant};

use super::etat::EtatCalc;
use super::jetons::{Element, Jeton, Operateur};
use super::{apply_token, is_allowed, render};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération de jetons ------------------------ */

fn gen_jeton(rng: &mut Rng) -> Jeton {
    match rng.pick(19) {
        d @ 0..=9 => Jeton::Chiffre(d as u8),
        10 => Jeton::Point,
        11 => Jeton::Op(Operateur::Plus),
        12 => Jeton::Op(Operateur::Moins),
        13 => Jeton::Op(Operateur::Fois),
        14 => Jeton::Op(Operateur::Divise),
        15 => Jeton::Signe,
        16 => Jeton::Pourcent,
        17 => Jeton::Retour,
        _ => {
            // Effacer rare : sinon la séquence reste trop courte
            if rng.pick(4) == 0 {
                Jeton::Effacer
            } else {
                Jeton::Egal
            }
        }
    }
}

/* ------------------------ Invariants ------------------------ */

fn check_invariants(etat: &EtatCalc, contexte: &str) {
    let el = etat.elements();

    // séquence vide <=> état initial
    if etat.est_vide() {
        assert_eq!(*etat, EtatCalc::default(), "{contexte}: vide mais pas initial");
    }

    // au plus un opérateur
    let nb_op = el.iter().filter(|e| matches!(e, Element::Op(_))).count();
    assert!(nb_op <= 1, "{contexte}: {nb_op} opérateurs");

    // opérateur présent => pas de dernière opération mémorisée
    if nb_op == 1 {
        assert!(
            etat.derniere_operation.is_none(),
            "{contexte}: dernière opération avec opérateur en attente"
        );
    }

    // erreur => seul élément
    if el.iter().any(|e| matches!(e, Element::Erreur(_))) {
        assert_eq!(el.len(), 1, "{contexte}: erreur non isolée");
    }

    for operande in el.split(|e| matches!(e, Element::Op(_))) {
        // un point au plus par opérande
        let points = operande.iter().filter(|e| **e == Element::Point).count();
        assert!(points <= 1, "{contexte}: {points} points");

        // % uniquement en dernière position
        if let Some(i) = operande.iter().position(|e| *e == Element::Pourcent) {
            assert_eq!(i + 1, operande.len(), "{contexte}: % pas en dernier");
        }

        // enveloppe négative : ( neg ... ) complète, jamais vide
        if operande.first() == Some(&Element::ParOuvrante) {
            assert_eq!(operande.get(1), Some(&Element::Neg), "{contexte}");
            let fin = operande
                .iter()
                .rposition(|e| *e == Element::ParFermante)
                .unwrap_or_else(|| panic!("{contexte}: ) manquante"));
            assert!(fin >= 3, "{contexte}: enveloppe vide ou mal formée");
        }
    }

    // l’affichage ne panique pas et n’est jamais vide
    assert!(!render(etat).is_empty(), "{contexte}: affichage vide");
}

fn marche(seed: u64, pas: usize, max: Duration) -> (EtatCalc, usize) {
    let t0 = Instant::now();
    let mut rng = Rng::new(seed);
    let mut etat = EtatCalc::default();
    let mut acceptes = 0usize;

    for i in 0..pas {
        budget(t0, max);

        let j = gen_jeton(&mut rng);
        if !is_allowed(&etat, j) {
            continue;
        }
        let avant = etat.clone();
        etat = apply_token(&etat, j).unwrap_or_else(|e| panic!("pas {i}: {j}: {e}"));
        acceptes += 1;

        let contexte = format!("seed={seed:#x} pas={i} jeton={j} avant={:?}", avant);
        check_invariants(&etat, &contexte);
    }

    (etat, acceptes)
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_invariants_apres_chaque_jeton() {
    for seed in [0xC0FFEE_u64, 0xBADC0DE, 0x5EED, 42] {
        let (_etat, acceptes) = marche(seed, 3000, Duration::from_secs(5));
        assert!(acceptes > 1000, "trop peu de jetons acceptés: {acceptes}");
    }
}

#[test]
fn fuzz_safe_determinisme() {
    let (a, _) = marche(0xABCDEF, 1500, Duration::from_secs(5));
    let (b, _) = marche(0xABCDEF, 1500, Duration::from_secs(5));
    assert_eq!(a, b);
    assert_eq!(render(&a), render(&b));
}

#[test]
fn fuzz_safe_jetons_refuses_sont_inoffensifs() {
    // apply_token sans passer par les règles : jamais de panique, invariants tenus
    let t0 = Instant::now();
    let max = Duration::from_secs(5);
    let mut rng = Rng::new(0xFEED);
    let mut etat = EtatCalc::default();

    for i in 0..2000 {
        budget(t0, max);
        let j = gen_jeton(&mut rng);
        etat = apply_token(&etat, j).unwrap_or_else(|e| panic!("pas {i}: {j}: {e}"));
        let el = etat.elements();
        assert!(el.iter().filter(|e| matches!(e, Element::Op(_))).count() <= 1);
        let _ = render(&etat);
    }
}
