use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::intake::IntakeSettings;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub twilio: TwilioConfig,
    pub intake: IntakeConfig,
    pub logging: LoggingConfig,
}

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub bind_address: String,
    pub port: u16,
    pub graceful_shutdown_secs: u64,
}

#[derive(Clone, Debug)]
pub struct TwilioConfig {
    pub account_sid: Option<String>,
    pub auth_token: Option<SecretString>,
    pub whatsapp_number: Option<String>,
}

#[derive(Clone, Debug)]
pub struct IntakeConfig {
    pub brand_name: String,
    pub max_attempts: u8,
}

#[derive(Clone, Debug)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

#[derive(Clone, Debug, Default)]
pub struct ConfigOverrides {
    pub bind_address: Option<String>,
    pub port: Option<u16>,
    pub log_level: Option<String>,
    pub brand_name: Option<String>,
    pub max_attempts: Option<u8>,
    pub twilio_account_sid: Option<String>,
    pub twilio_auth_token: Option<String>,
    pub twilio_whatsapp_number: Option<String>,
}

#[derive(Clone, Debug, Default)]
pub struct LoadOptions {
    pub config_path: Option<PathBuf>,
    pub require_file: bool,
    pub overrides: ConfigOverrides,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file `{path}`: {source}")]
    ReadFile { path: PathBuf, source: std::io::Error },
    #[error("could not parse config file `{path}`: {source}")]
    ParseFile { path: PathBuf, source: toml::de::Error },
    #[error("required config file was not found: `{0}`")]
    MissingConfigFile(PathBuf),
    #[error("environment variable interpolation failed for `{var}`")]
    MissingEnvInterpolation { var: String },
    #[error("unterminated environment interpolation expression")]
    UnterminatedInterpolation,
    #[error("invalid environment override for `{key}`: `{value}`")]
    InvalidEnvOverride { key: String, value: String },
    #[error("configuration validation failed: {0}")]
    Validation(String),
}

impl Default for AppConfig {
    fn default() -> Self {
        let intake = IntakeSettings::default();
        Self {
            server: ServerConfig {
                bind_address: "127.0.0.1".to_string(),
                port: 5000,
                graceful_shutdown_secs: 15,
            },
            twilio: TwilioConfig { account_sid: None, auth_token: None, whatsapp_number: None },
            intake: IntakeConfig {
                brand_name: intake.brand_name,
                max_attempts: intake.max_attempts,
            },
            logging: LoggingConfig { level: "info".to_string(), format: LogFormat::Compact },
        }
    }
}

fn secret_value(value: String) -> SecretString {
    value.into()
}

impl std::str::FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "compact" => Ok(Self::Compact),
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(ConfigError::Validation(format!(
                "unsupported log format `{other}` (expected compact|pretty|json)"
            ))),
        }
    }
}

impl IntakeConfig {
    pub fn settings(&self) -> IntakeSettings {
        IntakeSettings { brand_name: self.brand_name.clone(), max_attempts: self.max_attempts }
    }
}

impl AppConfig {
    pub fn load(options: LoadOptions) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        let maybe_path = resolve_config_path(options.config_path.as_deref());

        if let Some(path) = maybe_path {
            let patch = read_patch(&path)?;
            config.apply_patch(patch);
        } else if options.require_file {
            let expected = options.config_path.unwrap_or_else(|| PathBuf::from("fridgefix.toml"));
            return Err(ConfigError::MissingConfigFile(expected));
        }

        config.apply_env_overrides()?;
        config.apply_overrides(options.overrides);
        config.validate()?;

        Ok(config)
    }

    fn apply_patch(&mut self, patch: ConfigPatch) {
        if let Some(server) = patch.server {
            if let Some(bind_address) = server.bind_address {
                self.server.bind_address = bind_address;
            }
            if let Some(port) = server.port {
                self.server.port = port;
            }
            if let Some(graceful_shutdown_secs) = server.graceful_shutdown_secs {
                self.server.graceful_shutdown_secs = graceful_shutdown_secs;
            }
        }

        if let Some(twilio) = patch.twilio {
            if let Some(account_sid) = twilio.account_sid {
                self.twilio.account_sid = Some(account_sid);
            }
            if let Some(twilio_auth_token_value) = twilio.auth_token {
                self.twilio.auth_token = Some(secret_value(twilio_auth_token_value));
            }
            if let Some(whatsapp_number) = twilio.whatsapp_number {
                self.twilio.whatsapp_number = Some(whatsapp_number);
            }
        }

        if let Some(intake) = patch.intake {
            if let Some(brand_name) = intake.brand_name {
                self.intake.brand_name = brand_name;
            }
            if let Some(max_attempts) = intake.max_attempts {
                self.intake.max_attempts = max_attempts;
            }
        }

        if let Some(logging) = patch.logging {
            if let Some(level) = logging.level {
                self.logging.level = level;
            }
            if let Some(format) = logging.format {
                self.logging.format = format;
            }
        }
    }

    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Some(value) = read_env("FRIDGEFIX_SERVER_BIND_ADDRESS") {
            self.server.bind_address = value;
        }
        if let Some(value) = read_env("FRIDGEFIX_SERVER_PORT") {
            self.server.port = parse_u16("FRIDGEFIX_SERVER_PORT", &value)?;
        }
        if let Some(value) = read_env("FRIDGEFIX_SERVER_GRACEFUL_SHUTDOWN_SECS") {
            self.server.graceful_shutdown_secs =
                parse_u64("FRIDGEFIX_SERVER_GRACEFUL_SHUTDOWN_SECS", &value)?;
        }

        let account_sid =
            read_env("FRIDGEFIX_TWILIO_ACCOUNT_SID").or_else(|| read_env("TWILIO_ACCOUNT_SID"));
        if let Some(value) = account_sid {
            self.twilio.account_sid = Some(value);
        }
        let auth_token =
            read_env("FRIDGEFIX_TWILIO_AUTH_TOKEN").or_else(|| read_env("TWILIO_AUTH_TOKEN"));
        if let Some(value) = auth_token {
            self.twilio.auth_token = Some(secret_value(value));
        }
        let whatsapp_number = read_env("FRIDGEFIX_TWILIO_WHATSAPP_NUMBER")
            .or_else(|| read_env("TWILIO_WHATSAPP_NUMBER"));
        if let Some(value) = whatsapp_number {
            self.twilio.whatsapp_number = Some(value);
        }

        if let Some(value) = read_env("FRIDGEFIX_INTAKE_BRAND_NAME") {
            self.intake.brand_name = value;
        }
        if let Some(value) = read_env("FRIDGEFIX_INTAKE_MAX_ATTEMPTS") {
            self.intake.max_attempts = parse_u8("FRIDGEFIX_INTAKE_MAX_ATTEMPTS", &value)?;
        }

        let log_level =
            read_env("FRIDGEFIX_LOGGING_LEVEL").or_else(|| read_env("FRIDGEFIX_LOG_LEVEL"));
        if let Some(value) = log_level {
            self.logging.level = value;
        }
        let log_format =
            read_env("FRIDGEFIX_LOGGING_FORMAT").or_else(|| read_env("FRIDGEFIX_LOG_FORMAT"));
        if let Some(value) = log_format {
            self.logging.format = value.parse()?;
        }

        Ok(())
    }

    fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        if let Some(bind_address) = overrides.bind_address {
            self.server.bind_address = bind_address;
        }
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if let Some(log_level) = overrides.log_level {
            self.logging.level = log_level;
        }
        if let Some(brand_name) = overrides.brand_name {
            self.intake.brand_name = brand_name;
        }
        if let Some(max_attempts) = overrides.max_attempts {
            self.intake.max_attempts = max_attempts;
        }
        if let Some(account_sid) = overrides.twilio_account_sid {
            self.twilio.account_sid = Some(account_sid);
        }
        if let Some(twilio_auth_token) = overrides.twilio_auth_token {
            self.twilio.auth_token = Some(secret_value(twilio_auth_token));
        }
        if let Some(whatsapp_number) = overrides.twilio_whatsapp_number {
            self.twilio.whatsapp_number = Some(whatsapp_number);
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_server(&self.server)?;
        validate_twilio(&self.twilio)?;
        validate_intake(&self.intake)?;
        validate_logging(&self.logging)?;
        Ok(())
    }
}

fn resolve_config_path(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        return path.exists().then_some(path.to_path_buf());
    }

    [PathBuf::from("fridgefix.toml"), PathBuf::from("config/fridgefix.toml")]
        .into_iter()
        .find(|path| path.exists())
}

fn read_patch(path: &Path) -> Result<ConfigPatch, ConfigError> {
    let raw = fs::read_to_string(path)
        .map_err(|source| ConfigError::ReadFile { path: path.to_path_buf(), source })?;

    let interpolated = interpolate_env_vars(&raw)?;
    toml::from_str::<ConfigPatch>(&interpolated)
        .map_err(|source| ConfigError::ParseFile { path: path.to_path_buf(), source })
}

fn interpolate_env_vars(input: &str) -> Result<String, ConfigError> {
    let mut output = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '$' && matches!(chars.peek(), Some('{')) {
            chars.next();
            let mut key = String::new();

            loop {
                match chars.next() {
                    Some('}') => break,
                    Some(next) => key.push(next),
                    None => return Err(ConfigError::UnterminatedInterpolation),
                }
            }

            let value = env::var(&key)
                .map_err(|_| ConfigError::MissingEnvInterpolation { var: key.clone() })?;
            output.push_str(&value);
            continue;
        }

        output.push(ch);
    }

    Ok(output)
}

fn validate_server(server: &ServerConfig) -> Result<(), ConfigError> {
    if server.bind_address.trim().is_empty() {
        return Err(ConfigError::Validation("server.bind_address must not be empty".to_string()));
    }

    if server.port == 0 {
        return Err(ConfigError::Validation("server.port must be greater than zero".to_string()));
    }

    if server.graceful_shutdown_secs == 0 {
        return Err(ConfigError::Validation(
            "server.graceful_shutdown_secs must be greater than zero".to_string(),
        ));
    }

    Ok(())
}

fn validate_twilio(twilio: &TwilioConfig) -> Result<(), ConfigError> {
    if let Some(account_sid) = &twilio.account_sid {
        if !account_sid.starts_with("AC") {
            return Err(ConfigError::Validation(
                "twilio.account_sid must start with `AC`. Find it on the Twilio console dashboard"
                    .to_string(),
            ));
        }

        let missing_token = twilio
            .auth_token
            .as_ref()
            .map(|value| value.expose_secret().trim().is_empty())
            .unwrap_or(true);
        if missing_token {
            return Err(ConfigError::Validation(
                "twilio.auth_token is required when twilio.account_sid is set".to_string(),
            ));
        }
    }

    if let Some(number) = &twilio.whatsapp_number {
        if !number.starts_with("whatsapp:+") && !number.starts_with('+') {
            return Err(ConfigError::Validation(
                "twilio.whatsapp_number must look like `whatsapp:+14155238886` or `+14155238886`"
                    .to_string(),
            ));
        }
    }

    Ok(())
}

fn validate_intake(intake: &IntakeConfig) -> Result<(), ConfigError> {
    if intake.brand_name.trim().is_empty() {
        return Err(ConfigError::Validation("intake.brand_name must not be empty".to_string()));
    }

    if intake.max_attempts == 0 || intake.max_attempts > 10 {
        return Err(ConfigError::Validation(
            "intake.max_attempts must be in range 1..=10".to_string(),
        ));
    }

    Ok(())
}

fn validate_logging(logging: &LoggingConfig) -> Result<(), ConfigError> {
    let level = logging.level.trim().to_ascii_lowercase();
    match level.as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
        _ => Err(ConfigError::Validation(
            "logging.level must be one of trace|debug|info|warn|error".to_string(),
        )),
    }
}

fn read_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn parse_u8(key: &str, value: &str) -> Result<u8, ConfigError> {
    value.parse::<u8>().map_err(|_| ConfigError::InvalidEnvOverride {
        key: key.to_string(),
        value: value.to_string(),
    })
}

fn parse_u16(key: &str, value: &str) -> Result<u16, ConfigError> {
    value.parse::<u16>().map_err(|_| ConfigError::InvalidEnvOverride {
        key: key.to_string(),
        value: value.to_string(),
    })
}

fn parse_u64(key: &str, value: &str) -> Result<u64, ConfigError> {
    value.parse::<u64>().map_err(|_| ConfigError::InvalidEnvOverride {
        key: key.to_string(),
        value: value.to_string(),
    })
}

#[derive(Debug, Default, Deserialize)]
struct ConfigPatch {
    server: Option<ServerPatch>,
    twilio: Option<TwilioPatch>,
    intake: Option<IntakePatch>,
    logging: Option<LoggingPatch>,
}

#[derive(Debug, Default, Deserialize)]
struct ServerPatch {
    bind_address: Option<String>,
    port: Option<u16>,
    graceful_shutdown_secs: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
struct TwilioPatch {
    account_sid: Option<String>,
    auth_token: Option<String>,
    whatsapp_number: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct IntakePatch {
    brand_name: Option<String>,
    max_attempts: Option<u8>,
}

#[derive(Debug, Default, Deserialize)]
struct LoggingPatch {
    level: Option<String>,
    format: Option<LogFormat>,
}

#[cfg(test)]
mod tests {
    use std::env;
    use std::fs;
    use std::io;
    use std::sync::{Mutex, OnceLock};

    use secrecy::ExposeSecret;
    use tempfile::TempDir;

    use super::{AppConfig, ConfigError, ConfigOverrides, LoadOptions, LogFormat};

    static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

    fn env_lock() -> &'static Mutex<()> {
        ENV_LOCK.get_or_init(|| Mutex::new(()))
    }

    fn clear_vars(vars: &[&str]) {
        for var in vars {
            env::remove_var(var);
        }
    }

    fn ensure(condition: bool, message: &'static str) -> Result<(), String> {
        if condition {
            Ok(())
        } else {
            Err(message.to_string())
        }
    }

    #[test]
    fn defaults_are_valid_without_any_file() -> Result<(), String> {
        let _guard = env_lock().lock().map_err(|_| "env lock is poisoned".to_string())?;

        let config = AppConfig::load(LoadOptions::default())
            .map_err(|err| format!("config load failed: {err}"))?;

        ensure(config.server.port == 5000, "default port should be 5000")?;
        ensure(config.intake.max_attempts == 3, "default lockout threshold should be 3")?;
        ensure(config.intake.brand_name == "FridgeFix", "default brand should be FridgeFix")?;
        ensure(config.twilio.account_sid.is_none(), "twilio credentials are optional")?;
        ensure(
            matches!(config.logging.format, LogFormat::Compact),
            "default logging format should be compact",
        )
    }

    #[test]
    fn missing_required_file_is_reported() -> Result<(), String> {
        let _guard = env_lock().lock().map_err(|_| "env lock is poisoned".to_string())?;
        let dir = TempDir::new().map_err(|err: io::Error| err.to_string())?;

        let result = AppConfig::load(LoadOptions {
            config_path: Some(dir.path().join("absent.toml")),
            require_file: true,
            ..LoadOptions::default()
        });

        ensure(
            matches!(result, Err(ConfigError::MissingConfigFile(_))),
            "missing file should fail when required",
        )
    }

    #[test]
    fn file_load_supports_env_interpolation() -> Result<(), String> {
        let _guard = env_lock().lock().map_err(|_| "env lock is poisoned".to_string())?;

        env::set_var("TEST_TWILIO_SID", "AC0123456789");
        env::set_var("TEST_TWILIO_TOKEN", "token-from-env");

        let result = (|| -> Result<(), String> {
            let dir = TempDir::new().map_err(|err: io::Error| err.to_string())?;
            let path = dir.path().join("fridgefix.toml");
            fs::write(
                &path,
                r#"
[twilio]
account_sid = "${TEST_TWILIO_SID}"
auth_token = "${TEST_TWILIO_TOKEN}"
whatsapp_number = "whatsapp:+14155238886"

[intake]
brand_name = "CoolCare"
"#,
            )
            .map_err(|err| err.to_string())?;

            let config =
                AppConfig::load(LoadOptions { config_path: Some(path), ..LoadOptions::default() })
                    .map_err(|err| format!("config load failed: {err}"))?;

            ensure(
                config.twilio.account_sid.as_deref() == Some("AC0123456789"),
                "account sid should be interpolated from environment",
            )?;
            ensure(
                config
                    .twilio
                    .auth_token
                    .as_ref()
                    .is_some_and(|token| token.expose_secret() == "token-from-env"),
                "auth token should be interpolated from environment",
            )?;
            ensure(config.intake.brand_name == "CoolCare", "brand should come from the file")?;
            ensure(
                config.intake.settings().brand_name == "CoolCare",
                "intake settings should carry the configured brand",
            )
        })();

        clear_vars(&["TEST_TWILIO_SID", "TEST_TWILIO_TOKEN"]);
        result
    }

    #[test]
    fn unterminated_interpolation_is_rejected() -> Result<(), String> {
        let _guard = env_lock().lock().map_err(|_| "env lock is poisoned".to_string())?;
        let dir = TempDir::new().map_err(|err: io::Error| err.to_string())?;
        let path = dir.path().join("fridgefix.toml");
        fs::write(&path, "[intake]\nbrand_name = \"${BRAND\"\n").map_err(|err| err.to_string())?;

        let result =
            AppConfig::load(LoadOptions { config_path: Some(path), ..LoadOptions::default() });

        ensure(
            matches!(result, Err(ConfigError::UnterminatedInterpolation)),
            "unterminated interpolation should fail",
        )
    }

    #[test]
    fn bare_twilio_env_names_are_supported() -> Result<(), String> {
        let _guard = env_lock().lock().map_err(|_| "env lock is poisoned".to_string())?;

        env::set_var("TWILIO_ACCOUNT_SID", "ACbare");
        env::set_var("TWILIO_AUTH_TOKEN", "bare-token");
        env::set_var("FRIDGEFIX_LOG_LEVEL", "warn");
        env::set_var("FRIDGEFIX_LOG_FORMAT", "json");

        let result = (|| -> Result<(), String> {
            let config = AppConfig::load(LoadOptions::default())
                .map_err(|err| format!("config load failed: {err}"))?;

            ensure(
                config.twilio.account_sid.as_deref() == Some("ACbare"),
                "bare TWILIO_ACCOUNT_SID should be honoured",
            )?;
            ensure(config.logging.level == "warn", "log level alias should be honoured")?;
            ensure(
                matches!(config.logging.format, LogFormat::Json),
                "log format alias should be honoured",
            )
        })();

        clear_vars(&[
            "TWILIO_ACCOUNT_SID",
            "TWILIO_AUTH_TOKEN",
            "FRIDGEFIX_LOG_LEVEL",
            "FRIDGEFIX_LOG_FORMAT",
        ]);
        result
    }

    #[test]
    fn precedence_defaults_file_env_overrides() -> Result<(), String> {
        let _guard = env_lock().lock().map_err(|_| "env lock is poisoned".to_string())?;

        env::set_var("FRIDGEFIX_SERVER_PORT", "7000");
        env::set_var("FRIDGEFIX_INTAKE_BRAND_NAME", "EnvBrand");

        let result = (|| -> Result<(), String> {
            let dir = TempDir::new().map_err(|err: io::Error| err.to_string())?;
            let path = dir.path().join("fridgefix.toml");
            fs::write(
                &path,
                r#"
[server]
port = 6000
bind_address = "0.0.0.0"

[intake]
brand_name = "FileBrand"
max_attempts = 5

[logging]
level = "warn"
"#,
            )
            .map_err(|err| err.to_string())?;

            let config = AppConfig::load(LoadOptions {
                config_path: Some(path),
                overrides: ConfigOverrides {
                    port: Some(8000),
                    log_level: Some("debug".to_string()),
                    ..ConfigOverrides::default()
                },
                ..LoadOptions::default()
            })
            .map_err(|err| format!("config load failed: {err}"))?;

            ensure(config.server.port == 8000, "override port should win")?;
            ensure(config.server.bind_address == "0.0.0.0", "file bind address should apply")?;
            ensure(config.intake.brand_name == "EnvBrand", "env brand should win over file")?;
            ensure(config.intake.max_attempts == 5, "file max attempts should apply")?;
            ensure(config.logging.level == "debug", "overridden log level should be debug")
        })();

        clear_vars(&["FRIDGEFIX_SERVER_PORT", "FRIDGEFIX_INTAKE_BRAND_NAME"]);
        result
    }

    #[test]
    fn invalid_env_number_is_reported_with_key() -> Result<(), String> {
        let _guard = env_lock().lock().map_err(|_| "env lock is poisoned".to_string())?;

        env::set_var("FRIDGEFIX_INTAKE_MAX_ATTEMPTS", "many");
        let result = AppConfig::load(LoadOptions::default());
        clear_vars(&["FRIDGEFIX_INTAKE_MAX_ATTEMPTS"]);

        ensure(
            matches!(
                result,
                Err(ConfigError::InvalidEnvOverride { ref key, .. })
                    if key == "FRIDGEFIX_INTAKE_MAX_ATTEMPTS"
            ),
            "bad numeric override should name its key",
        )
    }

    #[test]
    fn validation_fails_fast_with_actionable_error() -> Result<(), String> {
        let _guard = env_lock().lock().map_err(|_| "env lock is poisoned".to_string())?;

        let cases = [
            (
                ConfigOverrides {
                    twilio_account_sid: Some("XX123".to_string()),
                    twilio_auth_token: Some("token".to_string()),
                    ..ConfigOverrides::default()
                },
                "twilio.account_sid",
            ),
            (
                ConfigOverrides {
                    twilio_account_sid: Some("AC123".to_string()),
                    ..ConfigOverrides::default()
                },
                "twilio.auth_token",
            ),
            (
                ConfigOverrides {
                    twilio_whatsapp_number: Some("14155238886".to_string()),
                    ..ConfigOverrides::default()
                },
                "twilio.whatsapp_number",
            ),
            (
                ConfigOverrides { max_attempts: Some(0), ..ConfigOverrides::default() },
                "intake.max_attempts",
            ),
            (
                ConfigOverrides { brand_name: Some("  ".to_string()), ..ConfigOverrides::default() },
                "intake.brand_name",
            ),
            (ConfigOverrides { port: Some(0), ..ConfigOverrides::default() }, "server.port"),
            (
                ConfigOverrides { log_level: Some("loud".to_string()), ..ConfigOverrides::default() },
                "logging.level",
            ),
        ];

        for (overrides, key) in cases {
            let error = match AppConfig::load(LoadOptions { overrides, ..LoadOptions::default() }) {
                Ok(_) => return Err(format!("expected validation failure mentioning {key}")),
                Err(error) => error,
            };
            let has_message =
                matches!(error, ConfigError::Validation(ref message) if message.contains(key));
            if !has_message {
                return Err(format!("validation failure should mention {key}, got {error}"));
            }
        }
        Ok(())
    }

    #[test]
    fn secret_values_are_not_leaked_by_debug() -> Result<(), String> {
        let _guard = env_lock().lock().map_err(|_| "env lock is poisoned".to_string())?;

        let config = AppConfig::load(LoadOptions {
            overrides: ConfigOverrides {
                twilio_account_sid: Some("AC42".to_string()),
                twilio_auth_token: Some("super-secret-token".to_string()),
                ..ConfigOverrides::default()
            },
            ..LoadOptions::default()
        })
        .map_err(|err| format!("config load failed: {err}"))?;
        let debug = format!("{config:?}");

        ensure(!debug.contains("super-secret-token"), "debug output should not contain auth token")
    }
}
