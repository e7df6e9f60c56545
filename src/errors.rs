// Error types for pitwall

use snafu::Snafu;
use std::io;

#[derive(Debug, Snafu)]
pub enum PitwallError {
    // Errors while collecting user input
    #[snafu(display("Invalid vehicle choice '{choice}', expected a number between 1 and 3"))]
    InvalidVehicleChoice { choice: String },
    #[snafu(display("Invalid lap times: {reason}"))]
    InvalidLapTimes { reason: String },
    #[snafu(display("Error reading user input"))]
    PromptIOError { source: io::Error },

    // Errors for the report writer
    #[snafu(display("Error writing report file"))]
    ReportIOError { source: io::Error },

    // Errors for the session log writer
    #[snafu(display("Error writing session log file"))]
    SessionLogIOError { source: io::Error },
    #[snafu(display("Error serializing session"))]
    SessionSerializeError { source: serde_json::Error },
}
