// src/noyau/etat.rs
//
// État du noyau (valeur immuable : chaque jeton accepté produit un nouvel état).
//
// Grammaire : LHS [opérateur [RHS]] — au plus un opérateur à tout instant.
// Une erreur remplace toute l’expression par un message réservé.

use super::erreur::ErreurCalcul;
use super::jetons::{Element, Operateur};
use super::operande::Operande;

/// Expression à deux opérandes, un opérateur en attente au plus.
///
/// Invariant : `op == None` => `rhs` vide.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Expression {
    pub lhs: Operande,
    pub op: Option<Operateur>,
    pub rhs: Operande,
}

impl Expression {
    pub fn est_vide(&self) -> bool {
        self.lhs.est_vide() && self.op.is_none() && self.rhs.est_vide()
    }

    /// Opérande qui reçoit la saisie : RHS si un opérateur est présent.
    pub fn active(&self) -> &Operande {
        if self.op.is_some() {
            &self.rhs
        } else {
            &self.lhs
        }
    }

    pub fn active_mut(&mut self) -> &mut Operande {
        if self.op.is_some() {
            &mut self.rhs
        } else {
            &mut self.lhs
        }
    }

    /// Le dernier élément à plat est l’opérateur (RHS pas encore commencé).
    pub fn finit_par_operateur(&self) -> bool {
        self.op.is_some() && self.rhs.est_vide()
    }

    pub fn elements(&self) -> Vec<Element> {
        let mut out = self.lhs.elements();
        if let Some(op) = self.op {
            out.push(Element::Op(op));
            out.extend(self.rhs.elements());
        }
        out
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Sequence {
    Expr(Expression),
    Erreur(ErreurCalcul),
}

impl Default for Sequence {
    fn default() -> Self {
        Sequence::Expr(Expression::default())
    }
}

/// Dernière opération appliquée par `=` (rejouée par un `=` suivant).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DerniereOperation {
    pub lhs: Operande,
    pub op: Operateur,
    pub rhs: Operande,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EtatCalc {
    pub sequence: Sequence,
    pub derniere_operation: Option<DerniereOperation>,
    /// LHS = sortie d’une évaluation (la prochaine saisie le remplace).
    pub lhs_est_resultat: bool,
}

impl EtatCalc {
    /// Séquence vide <=> état initial / effacé.
    pub fn est_vide(&self) -> bool {
        match &self.sequence {
            Sequence::Expr(e) => e.est_vide(),
            Sequence::Erreur(_) => false,
        }
    }

    pub fn erreur(&self) -> Option<ErreurCalcul> {
        match self.sequence {
            Sequence::Erreur(e) => Some(e),
            Sequence::Expr(_) => None,
        }
    }

    pub fn expression(&self) -> Option<&Expression> {
        match &self.sequence {
            Sequence::Expr(e) => Some(e),
            Sequence::Erreur(_) => None,
        }
    }

    /// Sérialisation à plat de la séquence.
    pub fn elements(&self) -> Vec<Element> {
        match &self.sequence {
            Sequence::Expr(e) => e.elements(),
            Sequence::Erreur(err) => vec![Element::Erreur(*err)],
        }
    }
}
