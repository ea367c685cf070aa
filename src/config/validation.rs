use crate::config::types::{Config, CrawlerConfig, RankSettings, UserAgentConfig};
use crate::url::parse_absolute_url;
use crate::ConfigError;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    if let Some(seed) = &config.seed {
        validate_seed(seed)?;
    }
    validate_crawler_config(&config.crawler)?;
    validate_rank_settings(&config.rank)?;
    validate_user_agent_config(&config.user_agent)?;
    Ok(())
}

/// Validates a seed URL: absolute, http or https, with a host
pub fn validate_seed(seed: &str) -> Result<(), ConfigError> {
    parse_absolute_url(seed)
        .map(|_| ())
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid seed URL '{}': {}", seed, e)))
}

/// Validates crawler configuration
fn validate_crawler_config(config: &CrawlerConfig) -> Result<(), ConfigError> {
    if config.link_budget < 1 {
        return Err(ConfigError::Validation(format!(
            "link_budget must be >= 1, got {}",
            config.link_budget
        )));
    }

    if config.worker_pool_width < 1 || config.worker_pool_width > 100 {
        return Err(ConfigError::Validation(format!(
            "worker_pool_width must be between 1 and 100, got {}",
            config.worker_pool_width
        )));
    }

    if config.fetch_timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "fetch_timeout_secs must be >= 1, got {}",
            config.fetch_timeout_secs
        )));
    }

    Ok(())
}

/// Validates PageRank solver settings
fn validate_rank_settings(config: &RankSettings) -> Result<(), ConfigError> {
    if !config.convergence_delta.is_finite() || config.convergence_delta <= 0.0 {
        return Err(ConfigError::Validation(format!(
            "convergence_delta must be a positive number, got {}",
            config.convergence_delta
        )));
    }

    if config.max_iterations < 1 {
        return Err(ConfigError::Validation(format!(
            "max_iterations must be >= 1, got {}",
            config.max_iterations
        )));
    }

    if let Some(damping) = config.damping_factor {
        if !(damping > 0.0 && damping < 1.0) {
            return Err(ConfigError::Validation(format!(
                "damping_factor must be strictly between 0 and 1, got {}",
                damping
            )));
        }
    }

    Ok(())
}

/// Validates user agent configuration
fn validate_user_agent_config(config: &UserAgentConfig) -> Result<(), ConfigError> {
    // Validate crawler name: non-empty, alphanumeric + hyphens only
    if config.crawler_name.is_empty() {
        return Err(ConfigError::Validation(
            "crawler_name cannot be empty".to_string(),
        ));
    }

    if !config
        .crawler_name
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-')
    {
        return Err(ConfigError::Validation(format!(
            "crawler_name must contain only alphanumeric characters and hyphens, got '{}'",
            config.crawler_name
        )));
    }

    if config.robots_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "robots_agent cannot be empty".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate(&Config::default()).is_ok());
    }

    #[test]
    fn test_validate_seed() {
        assert!(validate_seed("https://example.com/").is_ok());
        assert!(validate_seed("http://127.0.0.1:8080/start").is_ok());

        assert!(validate_seed("").is_err());
        assert!(validate_seed("/relative/path").is_err());
        assert!(validate_seed("ftp://example.com/").is_err());
        assert!(validate_seed("mailto:someone@example.com").is_err());
    }

    #[test]
    fn test_zero_budget_rejected() {
        let mut config = Config::default();
        config.crawler.link_budget = 0;
        assert!(matches!(validate(&config), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_worker_pool_width_bounds() {
        let mut config = Config::default();
        config.crawler.worker_pool_width = 101;
        assert!(validate(&config).is_err());
        config.crawler.worker_pool_width = 1;
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_convergence_delta_must_be_positive() {
        let mut config = Config::default();
        config.rank.convergence_delta = 0.0;
        assert!(validate(&config).is_err());
        config.rank.convergence_delta = f64::NAN;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_damping_factor_range() {
        let mut config = Config::default();
        config.rank.damping_factor = Some(0.85);
        assert!(validate(&config).is_ok());
        config.rank.damping_factor = Some(1.0);
        assert!(validate(&config).is_err());
        config.rank.damping_factor = Some(0.0);
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_crawler_name_characters() {
        let mut config = Config::default();
        config.user_agent.crawler_name = "Ripple Rank".to_string();
        assert!(validate(&config).is_err());
        config.user_agent.crawler_name = "Ripple-Rank".to_string();
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_blank_robots_agent_rejected() {
        let mut config = Config::default();
        config.user_agent.robots_agent = "  ".to_string();
        assert!(validate(&config).is_err());
    }
}
