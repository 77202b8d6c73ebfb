pub mod directory;
pub mod geo;
pub mod ranking;
pub mod scoring;

pub use directory::DoctorDirectory;
pub use ranking::RankingService;
