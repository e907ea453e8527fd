pub mod enrich;
pub mod generate;
