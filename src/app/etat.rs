//! src/app/etat.rs
//!
//! État UI (sans vue) : le contrôleur qui possède l’état courant du noyau.
//!
//! Rôle : recevoir des jetons (clic, clavier), consulter les règles, appliquer
//! la transition, puis recalculer les textes affichés.
//!
//! Contrats :
//! - Un seul propriétaire de l’état courant : pas de variable globale.
//! - L’état est remplacé d’un bloc après chaque jeton accepté.
//! - Jeton incorrect = défaut de l’adaptateur : remonté, jamais avalé.

use crate::noyau::entrees::{jeton_depuis_id, jeton_depuis_touche};
use crate::noyau::erreur::ErreurNoyau;
use crate::noyau::etat::EtatCalc;
use crate::noyau::jetons::{format_elements, Jeton};
use crate::noyau::{apply_token, is_allowed, render, render_derniere_operation};

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- état du noyau ---
    etat: EtatCalc,

    // --- sorties ---
    pub affichage: String,  // texte principal
    pub historique: String, // “5 + 3 =” (vide si rien à rejouer)
    pub erreur: String,     // défaut d’adaptateur (jeton incorrect)
}

impl Default for AppCalc {
    fn default() -> Self {
        let etat = EtatCalc::default();
        Self {
            affichage: render(&etat),
            historique: String::new(),
            erreur: String::new(),
            etat,
        }
    }
}

impl AppCalc {
    /// Applique un jeton s’il est admissible.
    /// Ok(false) : refusé par les règles (état inchangé).
    pub fn saisir(&mut self, jeton: Jeton) -> Result<bool, ErreurNoyau> {
        if !is_allowed(&self.etat, jeton) {
            log::debug!("jeton {jeton} refusé");
            return Ok(false);
        }

        self.etat = apply_token(&self.etat, jeton)?;
        self.rafraichir();
        log::debug!("jeton {jeton} -> {:?}", self.affichage);
        log::trace!("séquence: {}", format_elements(&self.etat.elements()));
        Ok(true)
    }

    /// Clic sur un bouton identifié par son id ; id inconnu => ignoré.
    pub fn clic(&mut self, id: &str) {
        match jeton_depuis_id(id) {
            Some(j) => self.saisir_ou_signaler(j),
            None => log::debug!("id de bouton ignoré: {id:?}"),
        }
    }

    /// Touche clavier (nom de touche) ; touche inconnue => ignorée.
    pub fn touche(&mut self, nom: &str) {
        match jeton_depuis_touche(nom) {
            Some(j) => self.saisir_ou_signaler(j),
            None => log::trace!("touche ignorée: {nom:?}"),
        }
    }

    /// Échap : comme le bouton C.
    pub fn clear_entree(&mut self) {
        self.saisir_ou_signaler(Jeton::Effacer);
    }

    fn saisir_ou_signaler(&mut self, jeton: Jeton) {
        if let Err(e) = self.saisir(jeton) {
            log::error!("{e}");
            self.erreur = e.to_string();
        }
    }

    fn rafraichir(&mut self) {
        self.affichage = render(&self.etat);
        self.historique = render_derniere_operation(&self.etat).unwrap_or_default();
        self.erreur.clear();
    }
}
