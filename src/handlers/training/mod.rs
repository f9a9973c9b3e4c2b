pub mod export;
pub mod training_handler;
