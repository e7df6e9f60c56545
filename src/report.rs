use std::{
    fs::File,
    io::{BufWriter, Write},
    path::PathBuf,
};

use crate::{errors::PitwallError, session::SessionStore, stats};

// Pit-board layout: left-aligned columns, average lap to 2 decimal places.
const DRIVER_COL_WIDTH: usize = 15;
const TRACK_COL_WIDTH: usize = 15;
const VEHICLE_COL_WIDTH: usize = 10;
const AVG_LAP_COL_WIDTH: usize = 12;

/// Writes the fixed-width session report, one row per stored session.
pub fn write_report(file: &PathBuf, store: &SessionStore) -> Result<(), PitwallError> {
    let report_file = File::create(file).map_err(|e| PitwallError::ReportIOError { source: e })?;
    let mut report_writer = BufWriter::new(report_file);

    writeln!(
        report_writer,
        "{:<dw$}{:<tw$}{:<vw$}{:<aw$}",
        "Driver",
        "Track",
        "Vehicle",
        "Avg Lap",
        dw = DRIVER_COL_WIDTH,
        tw = TRACK_COL_WIDTH,
        vw = VEHICLE_COL_WIDTH,
        aw = AVG_LAP_COL_WIDTH,
    )
    .map_err(|e| PitwallError::ReportIOError { source: e })?;

    for session in store.iter() {
        writeln!(
            report_writer,
            "{:<dw$}{:<tw$}{:<vw$}{:<aw$.2}",
            session.driver_name,
            session.track_name,
            session.vehicle.label(),
            stats::average_lap(session),
            dw = DRIVER_COL_WIDTH,
            tw = TRACK_COL_WIDTH,
            vw = VEHICLE_COL_WIDTH,
            aw = AVG_LAP_COL_WIDTH,
        )
        .map_err(|e| PitwallError::ReportIOError { source: e })?;
    }

    report_writer
        .flush()
        .map_err(|e| PitwallError::ReportIOError { source: e })?;
    Ok(())
}

/// Dumps the stored sessions as JSON lines, one session per line.
pub fn write_session_log(file: &PathBuf, store: &SessionStore) -> Result<(), PitwallError> {
    let log_file = File::create(file).map_err(|e| PitwallError::SessionLogIOError { source: e })?;
    let mut log_writer = BufWriter::new(log_file);
    for session in store.iter() {
        let line = serde_json::to_string(session)
            .map_err(|e| PitwallError::SessionSerializeError { source: e })?;
        writeln!(log_writer, "{}", line)
            .map_err(|e| PitwallError::SessionLogIOError { source: e })?;
    }
    log_writer
        .flush()
        .map_err(|e| PitwallError::SessionLogIOError { source: e })?;
    Ok(())
}
