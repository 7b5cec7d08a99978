use std::fs;
use std::path::PathBuf;

use codesnip_config::Config;
use serde::{Deserialize, Serialize};

fn codesnip_root() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("codesnip")
}

fn profiles_dir() -> PathBuf {
    codesnip_root().join("profiles")
}

/// Represents a user profile
#[derive(Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub value: Config,
}

/// Initialize user config folders and main profile if missing
pub fn init_user_config() -> anyhow::Result<()> {
    fs::create_dir_all(profiles_dir())?;

    let main_profile = profiles_dir().join("main.json");

    if !main_profile.exists() {
        let profile = Profile {
            name: "main".into(),
            value: Config::new(),
        };
        fs::write(&main_profile, serde_json::to_string_pretty(&profile)?)?;
        tracing::info!("Created main profile at {}", main_profile.display());
    }

    Ok(())
}

/// Load a user profile by name, falling back to main and then to built-in
/// defaults (environment-seeded) so a fresh checkout runs without assets.
pub fn load_user_profile(name: &str) -> Config {
    let profile_file = profiles_dir().join(format!("{name}.json"));

    match read_profile(&profile_file) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Profile {name} not loadable ({e}), trying main profile");
            let main_file = profiles_dir().join("main.json");
            read_profile(&main_file).unwrap_or_else(|e| {
                tracing::warn!("main profile not loadable ({e}), using defaults");
                Config::new()
            })
        }
    }
}

fn read_profile(path: &PathBuf) -> anyhow::Result<Config> {
    let data = fs::read_to_string(path)?;
    let profile: Profile = serde_json::from_str(&data)?;
    Ok(profile.value)
}

/// Add a new profile cloned from main (or built-in defaults if main missing)
pub fn add_profile_from_default(new_name: &str) -> anyhow::Result<PathBuf> {
    let default_config = load_user_profile("main");
    let profile = Profile {
        name: new_name.into(),
        value: default_config,
    };
    let file = profiles_dir().join(format!("{new_name}.json"));
    fs::write(&file, serde_json::to_string_pretty(&profile)?)?;
    tracing::info!("Created new profile: {new_name}");
    Ok(file)
}
