use std::fmt;
use std::fmt::Formatter;
use crate::manager_solar_resource::errors::ResourceError;

/// Startup failures the service cannot recover from, such as a missing
/// or malformed configuration file or a failed socket bind
#[derive(Debug)]
pub struct UnrecoverableError(pub String);
impl fmt::Display for UnrecoverableError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "UnrecoverableError: {}", self.0)
    }
}
impl From<&str> for UnrecoverableError {
    fn from(e: &str) -> Self { UnrecoverableError(e.to_string()) }
}
impl From<std::io::Error> for UnrecoverableError {
    fn from(e: std::io::Error) -> Self { UnrecoverableError(e.to_string()) }
}
impl From<serde_json::Error> for UnrecoverableError {
    fn from(e: serde_json::Error) -> Self { UnrecoverableError(e.to_string()) }
}
impl From<ResourceError> for UnrecoverableError {
    fn from(e: ResourceError) -> Self { UnrecoverableError(e.to_string()) }
}
