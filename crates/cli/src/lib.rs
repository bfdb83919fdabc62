use std::path::Path;
use std::sync::Arc;

use anyhow::{anyhow, Result};
use common::config::MappingConfig;
use common::AppError;
use engine::{Predictor, UserProfile};
use mapping::{MappingStore, Platform};
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// One platform, or every platform when `platform` is `None`.
    Predict {
        profile: String,
        platform: Option<Platform>,
    },
    Examples {
        platform: Platform,
        category: String,
    },
    Platforms,
}

pub const USAGE: &str = "usage:
  adsight <profile.json> [platform]
  adsight predict <profile.json> [platform]
  adsight examples <platform> <category-id>
  adsight platforms";

pub fn parse_args<I, S>(args: I) -> Result<Command>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let args: Vec<String> = args.into_iter().map(|a| a.as_ref().to_string()).collect();
    let mut parts = args.iter().map(String::as_str);
    match parts.next() {
        Some("predict") => {
            let profile = parts
                .next()
                .ok_or_else(|| anyhow!("missing profile path\n{USAGE}"))?;
            predict(profile, parts)
        }
        Some("examples") => {
            let platform = parts
                .next()
                .ok_or_else(|| anyhow!("missing platform\n{USAGE}"))?
                .parse()?;
            let category = parts
                .next()
                .ok_or_else(|| anyhow!("missing category id\n{USAGE}"))?;
            Ok(Command::Examples {
                platform,
                category: category.to_string(),
            })
        }
        Some("platforms") => Ok(Command::Platforms),
        Some(profile) => predict(profile, parts),
        None => Err(anyhow!(USAGE)),
    }
}

fn predict<'a>(profile: &str, mut rest: impl Iterator<Item = &'a str>) -> Result<Command> {
    let platform = rest.next().map(str::parse::<Platform>).transpose()?;
    if let Some(extra) = rest.next() {
        return Err(anyhow!("unexpected argument {extra}\n{USAGE}"));
    }
    Ok(Command::Predict {
        profile: profile.to_string(),
        platform,
    })
}

pub fn load_store(config: &MappingConfig) -> common::Result<Arc<MappingStore>> {
    let store = match &config.path {
        Some(path) => MappingStore::from_path(path).map_err(AppError::mapping)?,
        None => MappingStore::builtin().map_err(AppError::mapping)?,
    };
    info!(
        version = store.version().unwrap_or("unversioned"),
        fingerprint = %store.fingerprint(),
        "mapping dataset ready"
    );
    Ok(Arc::new(store))
}

pub fn load_profile<P: AsRef<Path>>(path: P) -> common::Result<UserProfile> {
    let raw = std::fs::read_to_string(path.as_ref()).map_err(AppError::profile)?;
    serde_json::from_str(&raw).map_err(AppError::profile)
}

/// Executes a command and returns the pretty JSON to print.
pub fn execute(predictor: &Predictor, command: &Command) -> Result<String> {
    let output = match command {
        Command::Predict { profile, platform } => {
            let profile = load_profile(profile)?;
            match platform {
                Some(platform) => {
                    serde_json::to_string_pretty(&predictor.generate_predictions(&profile, *platform)?)?
                }
                None => serde_json::to_string_pretty(&predictor.generate_all_predictions(&profile))?,
            }
        }
        Command::Examples { platform, category } => {
            serde_json::to_string_pretty(predictor.ad_examples(*platform, category))?
        }
        Command::Platforms => {
            let names: serde_json::Map<String, serde_json::Value> = predictor
                .store()
                .platforms()
                .filter_map(|platform| {
                    predictor
                        .platform_info(platform)
                        .map(|info| (platform.to_string(), info.name.clone().into()))
                })
                .collect();
            serde_json::to_string_pretty(&names)?
        }
    };
    Ok(output)
}
