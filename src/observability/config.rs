use std::env;

#[derive(Clone)]
pub(crate) struct ServiceContext {
    pub(crate) service_name: String,
    pub(crate) environment: String,
    pub(crate) component: String,
}

#[derive(Clone)]
pub(crate) struct ObservabilityConfig {
    pub(crate) service_context: ServiceContext,
    /// Filter directives from `RUST_LOG`, if set.
    pub(crate) log_directives: Option<String>,
    /// Warnings captured during config parsing so they can be logged after tracing is initialized.
    pub(crate) warnings: Vec<String>,
}

impl ObservabilityConfig {
    pub(crate) fn from_env(component: &str) -> Self {
        Self::from_lookup(component, |key| env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(component: &str, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let component = component.trim().to_string();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let service_name = non_empty("SERVICE_NAME").unwrap_or_else(|| component.clone());
        let environment = non_empty("STAGE").unwrap_or_else(|| "unknown".to_string());

        Self {
            service_context: ServiceContext {
                service_name,
                environment,
                component,
            },
            log_directives: non_empty("RUST_LOG"),
            warnings: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_name_defaults_to_component() {
        let config = ObservabilityConfig::from_lookup(" recharge-portal ", |_| None);

        assert_eq!(config.service_context.service_name, "recharge-portal");
        assert_eq!(config.service_context.component, "recharge-portal");
        assert_eq!(config.service_context.environment, "unknown");
        assert!(config.log_directives.is_none());
    }

    #[test]
    fn blank_values_are_ignored() {
        let config = ObservabilityConfig::from_lookup("api", |key| match key {
            "SERVICE_NAME" => Some("  ".to_string()),
            "STAGE" => Some("production".to_string()),
            "RUST_LOG" => Some("debug".to_string()),
            _ => None,
        });

        assert_eq!(config.service_context.service_name, "api");
        assert_eq!(config.service_context.environment, "production");
        assert_eq!(config.log_directives.as_deref(), Some("debug"));
    }
}
