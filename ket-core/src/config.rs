//! Configuração da simulação

use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

use crate::error::KetResult;

/// Tolerância padrão para verificação de norma unitária
pub const DEFAULT_NORM_TOLERANCE: f64 = 1e-10;

/// Tolerância padrão para verificação de unitariedade
pub const DEFAULT_UNITARITY_TOLERANCE: f64 = 1e-10;

/// Parte imaginária abaixo disso é omitida na leitura da base
pub const DEFAULT_READOUT_TOLERANCE: f64 = 1e-12;

/// Limite padrão de qubits (operadores densos são O(4^n))
pub const DEFAULT_MAX_QUBITS: usize = 16;

/// Configuração do simulador
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Desvio máximo aceito da norma 1.0
    pub norm_tolerance: f64,
    /// Desvio máximo aceito de U·U† = I
    pub unitarity_tolerance: f64,
    /// Limite da parte imaginária na leitura `amp*|bits>`
    pub readout_tolerance: f64,
    /// Número máximo de qubits num registrador
    pub max_qubits: usize,
    /// Discretização de ângulos: passos de 2π/resolution (None = contínuo)
    pub angle_resolution: Option<u32>,
    /// Normalizar vetores explícitos em vez de rejeitá-los
    pub auto_normalize: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            norm_tolerance: DEFAULT_NORM_TOLERANCE,
            unitarity_tolerance: DEFAULT_UNITARITY_TOLERANCE,
            readout_tolerance: DEFAULT_READOUT_TOLERANCE,
            max_qubits: DEFAULT_MAX_QUBITS,
            angle_resolution: None,
            auto_normalize: false,
        }
    }
}

impl SimConfig {
    /// Cria configuração padrão
    pub fn new() -> Self {
        Self::default()
    }

    /// Define a resolução angular
    pub fn with_angle_resolution(mut self, resolution: u32) -> Self {
        self.angle_resolution = Some(resolution);
        self
    }

    /// Ativa normalização automática de vetores
    pub fn with_auto_normalize(mut self, enabled: bool) -> Self {
        self.auto_normalize = enabled;
        self
    }

    /// Define o limite de qubits
    pub fn with_max_qubits(mut self, max_qubits: usize) -> Self {
        self.max_qubits = max_qubits;
        self
    }

    /// Ajusta um ângulo à grade definida por `angle_resolution`
    pub fn quantize_angle(&self, angle: f64) -> f64 {
        match self.angle_resolution {
            Some(resolution) if resolution > 0 => {
                let step = TAU / f64::from(resolution);
                (angle / step).round() * step
            }
            _ => angle,
        }
    }

    /// Carrega configuração de JSON; campos ausentes usam o padrão
    pub fn from_json(json: &str) -> KetResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializa para JSON
    pub fn to_json(&self) -> KetResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_default_config() {
        let config = SimConfig::default();
        assert_eq!(config.max_qubits, 16);
        assert_eq!(config.readout_tolerance, 1e-12);
        assert!(config.angle_resolution.is_none());
        assert!(!config.auto_normalize);
    }

    #[test]
    fn test_quantize_continuous() {
        let config = SimConfig::default();
        assert_eq!(config.quantize_angle(0.123), 0.123);
    }

    #[test]
    fn test_quantize_with_resolution() {
        let config = SimConfig::default().with_angle_resolution(4);
        // passos de π/2
        assert!((config.quantize_angle(1.5) - PI / 2.0).abs() < 1e-12);
        assert!((config.quantize_angle(0.7)).abs() < 1e-12);
        assert!((config.quantize_angle(3.0) - PI).abs() < 1e-12);
    }

    #[test]
    fn test_zero_resolution_is_continuous() {
        let config = SimConfig::default().with_angle_resolution(0);
        assert_eq!(config.quantize_angle(0.5), 0.5);
    }

    #[test]
    fn test_json_partial() {
        let config = SimConfig::from_json(r#"{"max_qubits": 8}"#).unwrap();
        assert_eq!(config.max_qubits, 8);
        assert_eq!(config.norm_tolerance, DEFAULT_NORM_TOLERANCE);
    }

    #[test]
    fn test_json_invalid() {
        assert!(SimConfig::from_json("{ not json").is_err());
    }
}
