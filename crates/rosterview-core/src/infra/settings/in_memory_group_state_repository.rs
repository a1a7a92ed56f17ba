// rosterview/rosterview-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashMap;

use anyhow::Result;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::domain::settings::models::GroupState;
use crate::domain::settings::repos::GroupStateRepository;
use crate::domain::shared::models::ProfileId;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct GroupStateRecord {
    profile: ProfileId,
    key: String,
    #[serde(flatten)]
    state: GroupState,
}

/// Keeps group states in memory. The contents can be exported to and restored from JSON so
/// that a host application can persist them wherever it likes.
#[derive(Default)]
pub struct InMemoryGroupStateRepository {
    states: RwLock<HashMap<(ProfileId, String), GroupState>>,
}

impl InMemoryGroupStateRepository {
    pub fn from_json(json: &str) -> Result<Self> {
        let records = serde_json::from_str::<Vec<GroupStateRecord>>(json)?;
        let states = records
            .into_iter()
            .map(|record| ((record.profile, record.key), record.state))
            .collect();
        Ok(InMemoryGroupStateRepository {
            states: RwLock::new(states),
        })
    }

    /// Serializes all records, sorted by profile and key.
    pub fn to_json(&self) -> Result<String> {
        let mut records = self
            .states
            .read()
            .iter()
            .map(|((profile, key), state)| GroupStateRecord {
                profile: profile.clone(),
                key: key.clone(),
                state: *state,
            })
            .collect::<Vec<_>>();
        records.sort_by(|lhs, rhs| {
            (lhs.profile.as_str(), lhs.key.as_str()).cmp(&(rhs.profile.as_str(), rhs.key.as_str()))
        });
        Ok(serde_json::to_string(&records)?)
    }
}

impl GroupStateRepository for InMemoryGroupStateRepository {
    fn get(&self, profile: &ProfileId, key: &str) -> Result<Option<GroupState>> {
        Ok(self
            .states
            .read()
            .get(&(profile.clone(), key.to_string()))
            .copied())
    }

    fn set(&self, profile: &ProfileId, key: &str, state: GroupState) -> Result<()> {
        self.states
            .write()
            .insert((profile.clone(), key.to_string()), state);
        Ok(())
    }
}
