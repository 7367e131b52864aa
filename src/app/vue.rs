// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Pavé de boutons identifiés par un id (table fixe côté noyau)
// - Affichage : ligne “dernière opération” + texte principal
//
// Note :
// - Le clavier est routé dans app.rs (événements globaux), pas ici.

use eframe::egui;

use super::etat::AppCalc;

/// Pavé : (libellé, id du bouton), ligne par ligne.
const PAVE: [[(&str, &str); 4]; 5] = [
    [("C", "clear"), ("±", "sign"), ("%", "percent"), ("÷", "divide")],
    [("7", "seven"), ("8", "eight"), ("9", "nine"), ("×", "multiply")],
    [("4", "four"), ("5", "five"), ("6", "six"), ("-", "subtract")],
    [("1", "one"), ("2", "two"), ("3", "three"), ("+", "add")],
    [("0", "zero"), (".", "decimal"), ("⌫", "backspace"), ("=", "equals")],
];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        ui.heading("Calculatrice");
        ui.add_space(6.0);

        self.ui_affichage(ui);

        ui.add_space(8.0);
        ui.separator();
        ui.add_space(8.0);

        self.ui_pave(ui);

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    fn ui_affichage(&mut self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                    // ligne du haut : toujours présente (hauteur stable)
                    let haut = if self.historique.is_empty() {
                        " "
                    } else {
                        self.historique.as_str()
                    };
                    ui.label(egui::RichText::new(haut).monospace().weak());
                    ui.label(egui::RichText::new(&self.affichage).monospace().size(32.0));
                });
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in PAVE {
                    for (label, id) in ligne {
                        self.bouton(ui, label, id);
                    }
                    ui.end_row();
                }
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, label: &str, id: &str) {
        let resp = ui.add_sized([72.0, 48.0], egui::Button::new(label));
        if resp.clicked() {
            self.clic(id);
        }
    }
}
