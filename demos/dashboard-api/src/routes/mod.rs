pub mod cryptos;
pub mod report;
