// src/view_models.rs

/// Tramo cualitativo del resultado final, según el porcentaje de aciertos.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResultTier {
    Alto,  // >= 80 %
    Medio, // >= 60 %
    Bajo,
}

/// Datos de la pantalla de resultados.
#[derive(Clone, Copy, Debug)]
pub struct ResultsInfo {
    pub score: u32,
    pub total: usize,
}

impl ResultsInfo {
    pub fn percentage(&self) -> f32 {
        if self.total == 0 {
            return 0.0;
        }
        self.score as f32 / self.total as f32 * 100.0
    }

    pub fn tier(&self) -> ResultTier {
        let pct = self.percentage();
        if pct >= 80.0 {
            ResultTier::Alto
        } else if pct >= 60.0 {
            ResultTier::Medio
        } else {
            ResultTier::Bajo
        }
    }

    /// Valoración que acompaña al porcentaje en la pantalla final.
    pub fn evaluation(&self) -> &'static str {
        match self.tier() {
            ResultTier::Alto => {
                "¡Excelente! Estás bien protegido frente a ataques de \
                 ingeniería social. ¡Sigue así!"
            }
            ResultTier::Medio => {
                "¡Bien! Tienes una base sólida, pero quedan áreas por \
                 mejorar. Te recomendamos repasar el material."
            }
            ResultTier::Bajo => {
                "Necesitas reforzar seriamente tus hábitos de seguridad: \
                 hoy por hoy eres vulnerable a la ingeniería social."
            }
        }
    }

    pub fn label(&self) -> String {
        format!("Aciertos: {} de {}", self.score, self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn el_porcentaje_se_calcula_sobre_el_total() {
        let info = ResultsInfo { score: 3, total: 4 };
        assert_eq!(info.percentage(), 75.0);
    }

    #[test]
    fn total_cero_no_divide_por_cero() {
        let info = ResultsInfo { score: 0, total: 0 };
        assert_eq!(info.percentage(), 0.0);
        assert_eq!(info.tier(), ResultTier::Bajo);
    }

    #[test]
    fn los_tramos_cortan_en_80_y_60() {
        let alto = ResultsInfo { score: 8, total: 10 };
        let medio = ResultsInfo { score: 6, total: 10 };
        let bajo = ResultsInfo { score: 5, total: 10 };
        assert_eq!(alto.tier(), ResultTier::Alto);
        assert_eq!(medio.tier(), ResultTier::Medio);
        assert_eq!(bajo.tier(), ResultTier::Bajo);
    }

    #[test]
    fn pleno_de_aciertos_es_tramo_alto() {
        let info = ResultsInfo { score: 2, total: 2 };
        assert_eq!(info.percentage(), 100.0);
        assert_eq!(info.tier(), ResultTier::Alto);
    }
}
