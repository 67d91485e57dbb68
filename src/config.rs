/// Runtime configuration resolved once at startup and carried in the
/// shared app state. Core logic never reads environment variables
/// directly.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// When enabled the generated OTP is echoed back in the
    /// `request_otp` response for demo/test setups without an SMS
    /// gateway. Must never be enabled on a production deployment.
    pub otp_demo_mode: bool,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let otp_demo_mode = std::env::var("OTP_DEMO_MODE")
            .map(|val| val == "1" || val.eq_ignore_ascii_case("true"))
            .unwrap_or(false);
        Self { otp_demo_mode }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_mode_defaults_to_off() {
        std::env::remove_var("OTP_DEMO_MODE");
        let config = AppConfig::from_env();
        assert_eq!(config.otp_demo_mode, false);
    }
}
