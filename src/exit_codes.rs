//! Custom exit codes for the NRM CLI client
//!
//! This module defines specific exit codes for different error conditions
//! to make scripting and automation easier.

/// Custom exit codes for nrmcli
///
/// These codes follow the BSD sysexits.h conventions where possible:
/// - 0: Success
/// - 64-78: Standard exit codes from sysexits.h
/// - 100+: Custom application-specific codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NrmExitCode {
    /// Success (0) - Command completed successfully
    Success = 0,

    /// Command line usage error (64) - User input error
    UsageError = 64,

    /// Data format error (65) - Input data was incorrect
    DataError = 65,

    /// Addressee unknown (67) - User or resource not found
    NotFound = 67,

    /// Internal software error (70) - Unexpected application error
    SoftwareError = 70,

    /// Configuration error (78) - Application configuration issue
    ConfigError = 78,

    /// Network error (101) - Connection or communication issues
    NetworkError = 101,

    /// API error (102) - Remote API returned an error
    ApiError = 102,
}

impl NrmExitCode {
    /// Convert to numeric exit code
    pub fn code(&self) -> i32 {
        *self as i32
    }

    /// Get descriptive message for the exit code
    pub fn message(&self) -> &'static str {
        match self {
            NrmExitCode::Success => "Success",
            NrmExitCode::UsageError => "Command line usage error",
            NrmExitCode::DataError => "Data format error",
            NrmExitCode::NotFound => "Resource not found",
            NrmExitCode::SoftwareError => "Internal software error",
            NrmExitCode::ConfigError => "Configuration error",
            NrmExitCode::NetworkError => "Network communication error",
            NrmExitCode::ApiError => "Remote API error",
        }
    }
}

impl From<NrmExitCode> for i32 {
    fn from(code: NrmExitCode) -> Self {
        code.code()
    }
}
