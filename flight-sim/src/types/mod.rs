pub mod airport;

pub mod flight_status;

pub mod sim_error;

pub mod flight;

pub mod simulation;

pub mod filter;

pub mod generator;
