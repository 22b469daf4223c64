use std::str::FromStr;
use std::time;

use envconfig::Envconfig;

#[derive(Envconfig, Clone)]
pub struct Config {
    /// Collector endpoint receiving event payloads.
    #[envconfig(default = "http://127.0.0.1:3000/i/v0/e")]
    pub collect_endpoint: String,

    #[envconfig(default = "5000")]
    pub request_timeout: EnvMsDuration,

    /// Log events instead of delivering them.
    #[envconfig(default = "false")]
    pub print_sink: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct EnvMsDuration(pub time::Duration);

#[derive(Debug, PartialEq, Eq)]
pub struct ParseEnvMsDurationError;

impl FromStr for EnvMsDuration {
    type Err = ParseEnvMsDurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let ms = s.parse::<u64>().map_err(|_| ParseEnvMsDurationError)?;

        Ok(EnvMsDuration(time::Duration::from_millis(ms)))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use envconfig::Envconfig;

    use super::Config;

    #[test]
    fn defaults_point_at_the_local_collector() {
        let config = Config::init_from_hashmap(&HashMap::new()).unwrap();

        assert_eq!(config.collect_endpoint, "http://127.0.0.1:3000/i/v0/e");
        assert_eq!(config.request_timeout.0.as_millis(), 5000);
        assert!(!config.print_sink);
    }

    #[test]
    fn timeout_is_read_as_milliseconds() {
        let env = HashMap::from([(String::from("REQUEST_TIMEOUT"), String::from("250"))]);
        let config = Config::init_from_hashmap(&env).unwrap();

        assert_eq!(config.request_timeout.0.as_millis(), 250);
    }
}
