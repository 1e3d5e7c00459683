use std::env;

const DEFAULT_JUDGE0_BASE_URL: &str = "https://judge0-ce.p.rapidapi.com";
const DEFAULT_JUDGE0_HOST: &str = "judge0-ce.p.rapidapi.com";

#[derive(Debug, Clone, serde::Deserialize)]
pub struct Config {
    pub database_url: String,
    pub redis_url: String,
    pub judge0_api_key: String,
    pub judge0_base_url: String,
    pub judge0_host: String,
    pub snippets_cache_ttl_secs: u64,
    pub server_host: String,
    pub server_port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, env::VarError> {
        dotenv::dotenv().ok();

        Self::from_vars(|key| env::var(key))
    }

    fn from_vars<F>(var: F) -> Result<Self, env::VarError>
    where
        F: Fn(&str) -> Result<String, env::VarError>,
    {
        // 可选变量缺失时使用默认值
        let optional = |key: &str, default: &str| var(key).unwrap_or_else(|_| default.to_string());

        Ok(Config {
            database_url: var("DATABASE_URL")?,
            redis_url: var("REDIS_URL")?,
            judge0_api_key: var("JUDGE0_API_KEY")?,
            judge0_base_url: optional("JUDGE0_BASE_URL", DEFAULT_JUDGE0_BASE_URL),
            judge0_host: optional("JUDGE0_HOST", DEFAULT_JUDGE0_HOST),
            snippets_cache_ttl_secs: optional("SNIPPETS_CACHE_TTL", "3600")
                .parse()
                .unwrap_or(3600),
            server_host: optional("SERVER_HOST", "0.0.0.0"),
            server_port: optional("SERVER_PORT", "3001").parse().unwrap_or(3001),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &HashMap<&str, &str>) -> impl Fn(&str) -> Result<String, env::VarError> {
        move |key| {
            vars.get(key)
                .map(|v| v.to_string())
                .ok_or(env::VarError::NotPresent)
        }
    }

    fn required() -> HashMap<&'static str, &'static str> {
        HashMap::from([
            ("DATABASE_URL", "postgres://localhost/snippets"),
            ("REDIS_URL", "redis://localhost"),
            ("JUDGE0_API_KEY", "secret"),
        ])
    }

    #[test]
    fn test_defaults_applied() {
        let vars = required();
        let config = Config::from_vars(lookup(&vars)).unwrap();

        assert_eq!(config.judge0_base_url, DEFAULT_JUDGE0_BASE_URL);
        assert_eq!(config.judge0_host, DEFAULT_JUDGE0_HOST);
        assert_eq!(config.snippets_cache_ttl_secs, 3600);
        assert_eq!(config.server_host, "0.0.0.0");
        assert_eq!(config.server_port, 3001);
    }

    #[test]
    fn test_missing_required_var() {
        let mut vars = required();
        vars.remove("JUDGE0_API_KEY");

        assert!(Config::from_vars(lookup(&vars)).is_err());
    }

    #[test]
    fn test_overrides_and_bad_numbers() {
        let mut vars = required();
        vars.insert("SERVER_PORT", "8080");
        vars.insert("SNIPPETS_CACHE_TTL", "not-a-number");
        vars.insert("JUDGE0_BASE_URL", "http://127.0.0.1:2358");

        let config = Config::from_vars(lookup(&vars)).unwrap();
        assert_eq!(config.server_port, 8080);
        assert_eq!(config.snippets_cache_ttl_secs, 3600);
        assert_eq!(config.judge0_base_url, "http://127.0.0.1:2358");
    }
}
