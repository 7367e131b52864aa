// src/app.rs
//
// Calculatrice — module App (racine)
// ----------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
// - Router le clavier vers la table des touches (noyau::entrees)

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

/// Nom de touche “à la DOM” pour les touches non textuelles utiles.
fn nom_touche(key: egui::Key) -> Option<&'static str> {
    match key {
        egui::Key::Enter => Some("Enter"),
        egui::Key::Backspace => Some("Backspace"),
        _ => None,
    }
}

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Clavier : texte tapé (chiffres, + - * x / ÷ . = % c s) + Enter/Backspace.
        // ESC = effacer (comme bouton "C").
        let events = ctx.input(|i| i.events.clone());
        for event in events {
            match event {
                egui::Event::Text(texte) => {
                    for c in texte.chars() {
                        self.touche(c.encode_utf8(&mut [0u8; 4]));
                    }
                }
                egui::Event::Key {
                    key, pressed: true, ..
                } => {
                    if key == egui::Key::Escape {
                        self.clear_entree();
                    } else if let Some(nom) = nom_touche(key) {
                        self.touche(nom);
                    }
                }
                _ => {}
            }
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }
}
