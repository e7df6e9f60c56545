// Pure lap-time statistics over recorded sessions.

use crate::session::{LAP_COUNT, Session, SessionStore, VehicleCategory};

/// Arithmetic mean of a single session's lap times.
pub fn average_lap(session: &Session) -> f64 {
    session.lap_times_s.iter().sum::<f64>() / LAP_COUNT as f64
}

/// Mean lap time across every lap of every stored session, not the mean of
/// per-session averages. Returns 0 for an empty store.
pub fn overall_average(store: &SessionStore) -> f64 {
    if store.is_empty() {
        return 0.;
    }
    let total: f64 = store.iter().flat_map(|s| s.lap_times_s.iter()).sum();
    total / (store.count() * LAP_COUNT) as f64
}

/// Nominal lap time in seconds for a vehicle category, used to seed
/// synthetic lap times in the CLI.
pub fn base_lap_time(vehicle: VehicleCategory) -> f64 {
    match vehicle {
        VehicleCategory::Gt3 => 95.0,
        VehicleCategory::Formula => 70.0,
        VehicleCategory::Rally => 120.0,
    }
}
