pub mod models;
pub mod storage;
pub mod watchlist;
