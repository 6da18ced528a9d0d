pub mod catalog_repository;
pub mod minimax_tts_repository;
pub mod tts_repository;

pub use catalog_repository::HardcodedCatalogRepository;
pub use minimax_tts_repository::MinimaxTtsRepository;
pub use tts_repository::{TtsRepository, UpstreamError};
