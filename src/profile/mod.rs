//! Account, profile, and purse lookups against the Mojang and Hypixel APIs.

use crate::error::ProfileError;
use serde_json::Value;

pub const MOJANG_PROFILE_URL: &str = "https://api.mojang.com/users/profiles/minecraft";
pub const HYPIXEL_API_URL: &str = "https://api.hypixel.net";

/// A Skyblock profile as offered in the selection menu.
#[derive(Debug, Clone)]
pub struct ProfileSummary {
    pub profile_id: String,
    pub cute_name: String,
    /// Whether this is the profile the player currently has active in game.
    pub selected: bool,
    /// Uuids of every member of the profile (co-op profiles have several).
    pub member_uuids: Vec<String>,
}

/// Blocking client for username, profile, and purse resolution.
pub struct ProfileClient {
    http: reqwest::blocking::Client,
    api_key: String,
    mojang_url: String,
    hypixel_url: String,
}

impl ProfileClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::blocking::Client::new(),
            api_key: api_key.into(),
            mojang_url: MOJANG_PROFILE_URL.to_string(),
            hypixel_url: HYPIXEL_API_URL.to_string(),
        }
    }

    /// Resolves a Minecraft display name to the account uuid via Mojang.
    pub fn resolve_uuid(&self, username: &str) -> Result<String, ProfileError> {
        let url = format!("{}/{}", self.mojang_url, username);
        let response = self.http.get(&url).send()?;
        if !response.status().is_success() {
            return Err(ProfileError::UnknownUsername(username.to_string()));
        }
        let body: Value = response.json()?;
        body.get("id")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| ProfileError::UnknownUsername(username.to_string()))
    }

    /// Fetches every Skyblock profile the account is a member of.
    pub fn fetch_profiles(&self, uuid: &str) -> Result<Vec<ProfileSummary>, ProfileError> {
        let url = format!("{}/v2/skyblock/profiles?uuid={}", self.hypixel_url, uuid);
        let response = self.http.get(&url).header("API-Key", &self.api_key).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(ProfileError::Status {
                code: status.as_u16(),
            });
        }
        let body: Value = response.json()?;
        let profiles = match body.get("profiles").and_then(Value::as_array) {
            Some(profiles) => profiles,
            None => return Err(ProfileError::NoProfiles(uuid.to_string())),
        };

        let summaries: Vec<ProfileSummary> = profiles
            .iter()
            .filter_map(|profile| {
                Some(ProfileSummary {
                    profile_id: profile.get("profile_id")?.as_str()?.to_string(),
                    cute_name: profile
                        .get("cute_name")
                        .and_then(Value::as_str)
                        .unwrap_or("Unnamed")
                        .to_string(),
                    selected: profile
                        .get("selected")
                        .and_then(Value::as_bool)
                        .unwrap_or(false),
                    member_uuids: profile
                        .get("members")
                        .and_then(Value::as_object)
                        .map(|members| members.keys().cloned().collect())
                        .unwrap_or_default(),
                })
            })
            .collect();

        if summaries.is_empty() {
            return Err(ProfileError::NoProfiles(uuid.to_string()));
        }
        Ok(summaries)
    }

    /// Fetches the member's current purse balance in whole coins.
    ///
    /// A member without a readable purse field resolves to 0 with a warning
    /// rather than an error, so an affordability check can still run.
    pub fn fetch_purse(&self, profile_id: &str, member_uuid: &str) -> Result<u64, ProfileError> {
        let url = format!(
            "{}/v2/skyblock/profile?profile={}",
            self.hypixel_url, profile_id
        );
        let response = self.http.get(&url).header("API-Key", &self.api_key).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(ProfileError::Status {
                code: status.as_u16(),
            });
        }
        let body: Value = response.json()?;
        let member = body
            .get("profile")
            .and_then(|profile| profile.get("members"))
            .and_then(|members| members.get(member_uuid));

        match member.and_then(purse_from_member) {
            Some(purse) => Ok(purse),
            None => {
                log::warn!("Could not find coin purse for member {}", member_uuid);
                Ok(0)
            }
        }
    }
}

/// Extracts the coin purse from a member payload, floored to whole coins.
///
/// Accepts both the current `currencies.coin_purse` shape and the legacy
/// top-level `coin_purse` field; older profiles still answer in the latter.
pub fn purse_from_member(member: &Value) -> Option<u64> {
    let coins = member
        .get("currencies")
        .and_then(|currencies| currencies.get("coin_purse"))
        .or_else(|| member.get("coin_purse"))?
        .as_f64()?;
    Some(coins.floor() as u64)
}
