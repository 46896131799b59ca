//! Persistence gateway for the user profile.
//!
//! The entire user state is one JSON document stored under a single fixed
//! key (`profile.json` in the workspace root). Saves always rewrite the
//! whole document; loads that find nothing usable fall back to an empty
//! default profile instead of surfacing an error.

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use crate::config;
use crate::models::UserProfile;

/// File name acting as the fixed storage key.
pub const PROFILE_FILE_NAME: &str = "profile.json";

/// File-backed gateway reading and writing the single profile blob.
#[derive(Debug, Clone)]
pub struct ProfileStorage {
    root: PathBuf,
}

impl ProfileStorage {
    /// Gateway rooted at the standard workspace directory.
    pub fn open() -> Result<Self> {
        Ok(Self {
            root: config::workspace_root()?,
        })
    }

    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn profile_path(&self) -> PathBuf {
        self.root.join(PROFILE_FILE_NAME)
    }

    /// Reads the stored profile, or returns the empty default when the
    /// blob is absent or unreadable.
    ///
    /// Decode failures are recovered silently (warn log only); onboarding
    /// repopulates the name on an empty profile. Optional fields missing
    /// from older blobs load with their documented defaults.
    pub fn load(&self) -> UserProfile {
        let path = self.profile_path();
        let data = match fs::read(&path) {
            Ok(data) => data,
            Err(err) => {
                if path.exists() {
                    log::warn!("Failed reading profile {:?}: {}", path, err);
                }
                return UserProfile::default();
            }
        };
        match serde_json::from_slice(&data) {
            Ok(profile) => profile,
            Err(err) => {
                log::warn!(
                    "Stored profile {:?} could not be parsed, starting empty: {}",
                    path,
                    err
                );
                UserProfile::default()
            }
        }
    }

    /// Serializes the full profile and overwrites the stored blob.
    pub fn save(&self, profile: &UserProfile) -> Result<()> {
        let path = self.profile_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed creating profile directory {:?}", parent))?;
        }
        let payload = serde_json::to_vec_pretty(profile)
            .with_context(|| format!("Failed serializing profile {:?}", path))?;
        fs::write(&path, payload).with_context(|| format!("Failed writing profile {:?}", path))?;
        Ok(())
    }
}
