use std::fmt;
use std::fmt::Formatter;

#[derive(Debug)]
pub struct ResourceError(pub String);
impl fmt::Display for ResourceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "ResourceError: {}", self.0)
    }
}
impl From<&str> for ResourceError {
    fn from(e: &str) -> Self { ResourceError(e.to_string()) }
}
impl From<reqwest::Error> for ResourceError {
    fn from(e: reqwest::Error) -> Self { ResourceError(e.to_string()) }
}
impl From<serde_json::Error> for ResourceError {
    fn from(e: serde_json::Error) -> Self { ResourceError(e.to_string()) }
}
impl From<std::io::Error> for ResourceError {
    fn from(e: std::io::Error) -> Self { ResourceError(e.to_string()) }
}
