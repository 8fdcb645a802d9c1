/// Generates the default `config.toml` contents with explanatory comments.
///
/// This is used by `grip init` to create a starter config file that
/// users can immediately edit.
pub fn generate_config() -> String {
    r##"# Grip configuration
# Location: ~/.config/grip/config.toml

[gestures]
# Hold these keys and move the mouse to drag the window under the cursor.
# Available keys: "ctrl", "cmd", "alt" (option), "shift".
# The combination must match exactly: extra or missing keys do nothing.
drag = ["ctrl", "cmd"]
# Hold these keys and move the mouse to resize the window under the cursor.
resize = ["ctrl", "cmd", "alt"]

[logging]
# Enable file logging to ~/.config/grip/logs/grip.log.
enabled = false
# Minimum log level: "debug", "info", "warn", or "error".
level = "info"
# Maximum log file size in MB before rotation.
max_file_mb = 10
"##
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_template_parses_as_valid_config() {
        // Arrange
        let toml_str = generate_config();

        // Act
        let result: Result<crate::Config, _> = toml::from_str(&toml_str);

        // Assert
        assert!(
            result.is_ok(),
            "config template is not valid TOML: {result:?}"
        );
    }

    #[test]
    fn config_template_matches_default_values() {
        // Arrange
        let toml_str = generate_config();

        // Act
        let mut config: crate::Config = toml::from_str(&toml_str).unwrap();
        config.validate();

        // Assert
        let defaults = crate::Config::default();
        assert_eq!(config.gestures, defaults.gestures);
        assert_eq!(config.logging.enabled, defaults.logging.enabled);
        assert_eq!(config.logging.level, defaults.logging.level);
        assert_eq!(config.logging.max_file_mb, defaults.logging.max_file_mb);
    }
}
