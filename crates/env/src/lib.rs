use std::{env::var, str::FromStr, sync::Arc};

use dates::{range::DateRange, HistoryView};
use dotenv::dotenv;
use eyre::{eyre, Error};
use history::{group::MissingTimestampPolicy, HistoryConfig};
use log::info;

#[derive(Clone)]
pub struct Env(Arc<EnvInner>);

#[derive(Clone)]
pub struct EnvInner {
    view: HistoryView,
    policy: MissingTimestampPolicy,
    range: DateRange,
}

impl Env {
    pub fn view(&self) -> HistoryView {
        self.0.view
    }

    pub fn policy(&self) -> MissingTimestampPolicy {
        self.0.policy
    }

    pub fn range(&self) -> DateRange {
        self.0.range
    }

    pub fn history_config(&self) -> HistoryConfig {
        HistoryConfig {
            view: self.0.view,
            policy: self.0.policy,
        }
    }

    /// Loads `.env` if present, then reads the process environment.
    pub fn load() -> Result<Env, Error> {
        if let Err(err) = dotenv() {
            info!("Failed to load .env file: {}", err);
        }
        Env::from_lookup(|key| var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Env, Error> {
        Ok(Env(Arc::new(EnvInner {
            view: parse_var(&lookup, "HISTORY_VIEW")?.unwrap_or_default(),
            policy: parse_var(&lookup, "MISSING_TIMESTAMP_POLICY")?.unwrap_or_default(),
            range: parse_var(&lookup, "HISTORY_RANGE")?.unwrap_or_default(),
        })))
    }
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<Option<T>, Error>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(value) if !value.trim().is_empty() => value
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|err| eyre!("{} has invalid value {:?}: {}", key, value, err)),
        _ => Ok(None),
    }
}
