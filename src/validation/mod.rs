pub(crate) mod dashboard_config_validation;
pub(crate) mod validation_utils;
