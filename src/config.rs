/// Configuration constants for the application
pub struct Config;

impl Config {
    /// Base URL of the advice backend
    pub const BACKEND_URL: &'static str = "http://127.0.0.1:5000";

    /// Path of the advice query endpoint
    pub const QUERY_PATH: &'static str = "/query";

    /// Message shown when a request fails without a backend-provided reason
    pub const GENERIC_FAILURE_MESSAGE: &'static str = "Failed to get advice. Please try again.";
}
