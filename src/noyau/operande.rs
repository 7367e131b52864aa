// src/noyau/operande.rs
//
// Opérande structuré : chiffres (texte décimal) + négatif + pourcent.
// La forme à plat “( neg chiffres ) %” n’existe qu’à la sérialisation.

use super::jetons::Element;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Operande {
    /// Chiffres 0-9 et au plus un '.', sans signe.
    pub chiffres: String,
    pub negatif: bool,
    pub pourcent: bool,
}

impl Operande {
    pub fn depuis_chiffres(chiffres: &str) -> Self {
        Self {
            chiffres: chiffres.to_string(),
            ..Self::default()
        }
    }

    /// Aucun élément (ni chiffre, ni enveloppe négative, ni %).
    pub fn est_vide(&self) -> bool {
        self.chiffres.is_empty() && !self.negatif && !self.pourcent
    }

    /// L’opérande “0” tout seul (pas de signe possible dessus).
    pub fn est_zero_litteral(&self) -> bool {
        self.chiffres == "0" && !self.negatif && !self.pourcent
    }

    pub fn a_point(&self) -> bool {
        self.chiffres.contains('.')
    }

    /// Ajoute un caractère aux chiffres ; `)` et `%` restent à l’extérieur
    /// puisqu’ils ne sont produits qu’à la sérialisation.
    pub fn pousser(&mut self, c: char) {
        self.chiffres.push(c);
    }

    pub fn basculer_signe(&mut self) {
        self.negatif = !self.negatif;
    }

    /// Copie sans le suffixe %.
    pub fn sans_pourcent(&self) -> Self {
        Self {
            pourcent: false,
            ..self.clone()
        }
    }

    /// Valeur numérique : enveloppe négative => négation, % => /100.
    /// None si aucun chiffre (opérande incomplet).
    pub fn valeur(&self) -> Option<f64> {
        let texte = self.chiffres.strip_suffix('.').unwrap_or(&self.chiffres);
        if texte.is_empty() || texte == "." {
            return None;
        }
        let mut v: f64 = texte.parse().ok()?;
        if self.negatif {
            v = -v;
        }
        if self.pourcent {
            v /= 100.0;
        }
        Some(v)
    }

    /// Sérialisation canonique d’un résultat numérique.
    ///
    /// `f64` s’affiche sans exposant en Rust : le texte ne contient que des
    /// chiffres et au plus un point.
    pub fn depuis_nombre(v: f64) -> Self {
        Self {
            chiffres: format!("{}", v.abs()),
            negatif: v < 0.0,
            pourcent: false,
        }
    }

    /// Forme à plat : `(` `neg` chiffres `)` puis `%`.
    pub fn elements(&self) -> Vec<Element> {
        let mut out = Vec::with_capacity(self.chiffres.len() + 4);
        if self.negatif {
            out.push(Element::ParOuvrante);
            out.push(Element::Neg);
        }
        for c in self.chiffres.chars() {
            match c {
                '.' => out.push(Element::Point),
                _ => {
                    if let Some(d) = c.to_digit(10) {
                        out.push(Element::Chiffre(d as u8));
                    }
                }
            }
        }
        if self.negatif {
            out.push(Element::ParFermante);
        }
        if self.pourcent {
            out.push(Element::Pourcent);
        }
        out
    }
}
