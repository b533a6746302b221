// Baseline reconciliation
pub mod baseline;

// Fleet inspection
pub mod devices;
pub mod software;
