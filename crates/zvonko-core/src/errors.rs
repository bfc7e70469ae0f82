// crates/zvonko-core/src/errors.rs
use thiserror::Error;

use crate::ports::ProviderError;

/// Error genérico del núcleo de zvonko.
///
/// Las capas superiores (CLI, futuros front-ends) deberían mapear este error
/// a mensajes de usuario o logs. El filtrado y los agregados nunca lo
/// producen: son funciones totales.
#[derive(Debug, Error)]
pub enum CoreError {
  #[error("provider error: {0}")]
  Provider(#[from] ProviderError),
}
