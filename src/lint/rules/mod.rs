//! Built-in lint rules.
//!
//! This module contains all the built-in validation rules that come with envdoctor.

pub mod duplicate_key;
pub mod empty_value;
pub mod framework;
pub mod missing_keys;
pub mod node_env;
pub mod placeholder;
pub mod port;
pub mod public_exposure;
pub mod url_format;
pub mod value_format;
pub mod weak_secret;

pub use duplicate_key::DuplicateKeyRule;
pub use empty_value::EmptyValueRule;
pub use framework::{DatabaseUrlMissingRule, NextAuthSecretRule};
pub use missing_keys::{MissingNodeEnvRule, StripeKeyPairRule};
pub use node_env::NodeEnvValueRule;
pub use placeholder::PlaceholderValueRule;
pub use port::PortRangeRule;
pub use public_exposure::PublicSecretExposureRule;
pub use url_format::UrlFormatRule;
pub use value_format::{BooleanFormatRule, JsonFormatRule, NumericFormatRule};
pub use weak_secret::WeakSecretRule;
