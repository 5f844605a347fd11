use anyhow::Error;
use roster_config::ConfigError;
use roster_core::{CoreError, RecordError};
use roster_fetch::FetchError;
use roster_store::{StoreError, StoreErrorKind};
use std::process::ExitCode;

pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_NOT_FOUND: u8 = 2;
pub const EXIT_INVALID_INPUT: u8 = 3;

pub fn report_error(err: &Error, verbose: bool) {
    if verbose {
        eprintln!("error: {:#}", err);
    } else {
        eprintln!("error: {}", err);
    }
}

pub fn exit_code_for(err: &Error) -> ExitCode {
    for cause in err.chain() {
        if let Some(fetch_err) = cause.downcast_ref::<FetchError>() {
            return ExitCode::from(fetch_exit_code(fetch_err));
        }
        if let Some(store_err) = cause.downcast_ref::<StoreError>() {
            return ExitCode::from(store_exit_code(store_err));
        }
        if let Some(config_err) = cause.downcast_ref::<ConfigError>() {
            return ExitCode::from(config_exit_code(config_err));
        }
        if let Some(_record_err) = cause.downcast_ref::<RecordError>() {
            return ExitCode::from(EXIT_INVALID_INPUT);
        }
        if let Some(_core_err) = cause.downcast_ref::<CoreError>() {
            return ExitCode::from(EXIT_INVALID_INPUT);
        }
    }
    ExitCode::from(EXIT_FAILURE)
}

fn fetch_exit_code(err: &FetchError) -> u8 {
    match err {
        FetchError::Store(store_err) => store_exit_code(store_err),
        FetchError::Url(_) | FetchError::UnsupportedScheme(_) => EXIT_INVALID_INPUT,
        FetchError::Status { .. } | FetchError::Transport(_) | FetchError::Decode(_) => {
            EXIT_FAILURE
        }
    }
}

fn store_exit_code(err: &StoreError) -> u8 {
    match err.kind() {
        StoreErrorKind::MissingInput => EXIT_NOT_FOUND,
        StoreErrorKind::Parse | StoreErrorKind::NotAnArray | StoreErrorKind::InvalidPath => {
            EXIT_INVALID_INPUT
        }
        StoreErrorKind::Io | StoreErrorKind::Encode => EXIT_FAILURE,
    }
}

fn config_exit_code(err: &ConfigError) -> u8 {
    match err {
        ConfigError::MissingHomeDir => EXIT_FAILURE,
        ConfigError::MissingConfigFile(_) => EXIT_NOT_FOUND,
        ConfigError::InvalidConfigPath(_)
        | ConfigError::InvalidSourceUrl(_)
        | ConfigError::InvalidPath { .. }
        | ConfigError::InvalidUserAgent
        | ConfigError::Read { .. }
        | ConfigError::Parse { .. } => EXIT_INVALID_INPUT,
    }
}
