pub mod dto;
pub mod error;
pub mod model;
pub mod profile;
pub mod service;

pub use dto::{SynthesisRequest, SynthesisResponse};
pub use error::TtsServiceError;
pub use model::{SynthesisCommand, SynthesizedAudio};
pub use profile::{DeploymentProfile, NumericEncoding, SynthesisLimits};
pub use service::{TtsService, TtsServiceApi};
