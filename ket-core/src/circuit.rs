//! # Circuit — Sequência ordenada de portas
//!
//! Cada passo é `{qubit_in, qubit_out, gate}`. A ordem dos passos é a ordem
//! de execução e de renderização.
//!
//! ## Modelos de execução
//!
//! - [`Circuit::run`]: simulação conjunta num [`Register`]. Passos com
//!   `qubit_out != qubit_in` aplicam a porta em `qubit_in` controlada por
//!   `qubit_out`; é assim que o QFT produz emaranhamento.
//! - [`Circuit::simulate`]: replay independente por qubit. Só aceita passos
//!   locais de 1 qubit; qualquer outro passo é rejeitado antes de mutar estado.
//!
//! ```text
//! q0 ─[H]─[R2]─[R3]──────────────
//!          │    │
//! q1 ──────●────┼───[H]─[R2]─────
//!               │        │
//! q2 ───────────●────────●───[H]─
//! ```

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

use crate::error::{KetError, KetResult};
use crate::gates::{Gate, QuantumGate};
use crate::qubit::Qubit;
use crate::register::Register;

/// Passo do circuito
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircuitStep {
    /// Qubit lido e transformado
    pub qubit_in: usize,
    /// Qubit terminal do fan-out (igual a `qubit_in` para portas locais)
    pub qubit_out: usize,
    /// Porta compartilhada
    pub gate: Arc<Gate>,
}

impl CircuitStep {
    /// Cria passo com porta compartilhada
    pub fn new(qubit_in: usize, qubit_out: usize, gate: Arc<Gate>) -> Self {
        Self {
            qubit_in,
            qubit_out,
            gate,
        }
    }

    /// Passo local: `qubit_out == qubit_in`
    pub fn local(qubit: usize, gate: Gate) -> Self {
        Self::new(qubit, qubit, Arc::new(gate))
    }

    /// Passo controlado: porta em `target`, controle em `control`
    pub fn controlled(target: usize, control: usize, gate: Gate) -> Self {
        Self::new(target, control, Arc::new(gate))
    }

    /// O passo atua apenas em `qubit_in`?
    pub fn is_local(&self) -> bool {
        self.qubit_in == self.qubit_out
    }

    /// Maior índice de qubit tocado pelo passo
    fn highest_qubit(&self) -> usize {
        let span_end = self.qubit_in.saturating_add(self.gate.num_qubits() - 1);
        span_end.max(self.qubit_out)
    }

    /// Confere se o passo cabe num registrador de `size` qubits
    fn validate(&self, size: usize) -> KetResult<()> {
        let gate_qubits = self.gate.num_qubits();
        if self.qubit_in >= size {
            return Err(KetError::QubitOutOfRange {
                index: self.qubit_in,
                size,
            });
        }
        let span_end = self
            .qubit_in
            .checked_add(gate_qubits)
            .filter(|&end| end <= size)
            .ok_or(KetError::GateTooWide {
                gate_qubits,
                target: self.qubit_in,
                size,
            })?;
        if self.is_local() {
            return Ok(());
        }
        if self.qubit_out >= size {
            return Err(KetError::QubitOutOfRange {
                index: self.qubit_out,
                size,
            });
        }
        if (self.qubit_in..span_end).contains(&self.qubit_out) {
            return Err(KetError::SameControlTarget(self.qubit_out));
        }
        Ok(())
    }
}

/// Circuito quântico
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Circuit {
    steps: Vec<CircuitStep>,
}

impl Circuit {
    /// Cria circuito a partir de uma sequência ordenada de passos
    pub fn new(steps: Vec<CircuitStep>) -> Self {
        Self { steps }
    }

    /// Acrescenta um passo (builder)
    pub fn with_step(mut self, step: CircuitStep) -> Self {
        self.steps.push(step);
        self
    }

    /// QFT de `n` qubits sem as trocas finais
    ///
    /// Para cada qubit `j`: H em `j`, depois `R_{k}` em `j` controlado por
    /// `j + k - 1`, para `k = 2..=n - j`.
    pub fn qft(n: usize) -> Self {
        let hadamard = Arc::new(Gate::Hadamard);
        let mut steps = Vec::with_capacity(n * (n + 1) / 2);
        for target in 0..n {
            steps.push(CircuitStep::new(target, target, Arc::clone(&hadamard)));
            for control in target + 1..n {
                let k = (control - target + 1) as u32;
                steps.push(CircuitStep::controlled(target, control, Gate::controlled_r(k)));
            }
        }
        Self { steps }
    }

    /// Passos em ordem de execução
    pub fn steps(&self) -> &[CircuitStep] {
        &self.steps
    }

    /// Número de passos
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Circuito vazio?
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Número de qubits referenciados (maior índice + 1)
    pub fn num_qubits(&self) -> usize {
        self.steps
            .iter()
            .map(|step| step.highest_qubit().saturating_add(1))
            .max()
            .unwrap_or(0)
    }

    /// Replay independente por qubit, in-place
    ///
    /// Cada passo aplica sua porta em `qubits[qubit_in]`. Não há estado
    /// conjunto, logo só passos locais de 1 qubit são aceitos.
    ///
    /// # Errors
    ///
    /// - [`KetError::NonLocalStep`] para passos controlados ou portas de 2 qubits
    /// - [`KetError::QubitOutOfRange`] se `qubit_in` não existir
    ///
    /// A validação ocorre antes de qualquer mutação.
    pub fn simulate(&self, qubits: &mut [Qubit]) -> KetResult<()> {
        for (step_index, step) in self.steps.iter().enumerate() {
            if !step.is_local() || step.gate.num_qubits() != 1 {
                return Err(KetError::NonLocalStep { step: step_index });
            }
            if step.qubit_in >= qubits.len() {
                return Err(KetError::QubitOutOfRange {
                    index: step.qubit_in,
                    size: qubits.len(),
                });
            }
        }

        for step in &self.steps {
            qubits[step.qubit_in].apply_gate(step.gate.as_ref())?;
        }
        debug!(steps = self.steps.len(), qubits = qubits.len(), "simulated per-qubit circuit");
        Ok(())
    }

    /// Simulação conjunta no registrador, in-place
    ///
    /// # Errors
    ///
    /// - [`KetError::QubitOutOfRange`] / [`KetError::GateTooWide`] se algum
    ///   passo não couber no registrador
    /// - [`KetError::SameControlTarget`] se o controle cair no alcance da porta
    ///
    /// Todos os passos são validados antes de qualquer mutação.
    pub fn run(&self, register: &mut Register) -> KetResult<()> {
        for step in &self.steps {
            step.validate(register.size())?;
        }

        for step in &self.steps {
            if step.is_local() {
                register.execute_gate(step.gate.as_ref(), step.qubit_in)?;
            } else {
                register.execute_controlled(step.gate.as_ref(), step.qubit_out, step.qubit_in)?;
            }
        }
        debug!(steps = self.steps.len(), size = register.size(), "ran circuit on register");
        Ok(())
    }

    /// Monta o estado produto dos qubits e executa o circuito sobre ele
    pub fn simulate_joint(&self, qubits: &[Qubit]) -> KetResult<Register> {
        let mut register = Register::from_qubits(qubits)?;
        self.run(&mut register)?;
        Ok(register)
    }

    /// Serializa para JSON
    pub fn to_json(&self) -> KetResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Carrega de JSON
    pub fn from_json(json: &str) -> KetResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl FromIterator<CircuitStep> for Circuit {
    fn from_iter<I: IntoIterator<Item = CircuitStep>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
