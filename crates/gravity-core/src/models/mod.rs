// ABOUTME: Domain models for body-metrics tracking
// ABOUTME: Re-exports measurement records, weight series, and user profiles

/// Measurement records and weight series
pub mod measurement;

/// User profiles and trend window selection
pub mod profile;

pub use measurement::{BodyComponent, Measurement, MeasurementSeries, WeightSample};
pub use profile::{validate_target_weight, NewUser, TrendWindow, UserProfile};
