pub mod festivo;

pub use festivo::FestivoClient;
