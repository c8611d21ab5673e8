mod config;
mod dice;
mod resolve;
