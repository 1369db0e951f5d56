use thiserror::Error;

use crate::record::NpcId;

#[derive(Error, Debug)]
pub enum Error {
    #[error("ScriptDex error: {0}")]
    ScriptDex(#[from] scriptdex::Error),

    #[error("invalid record for NPC {npc_id}: {source}")]
    InvalidRecord {
        npc_id: NpcId,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid NPC id '{0}': expected an unsigned integer")]
    InvalidNpcId(String),

    #[error("NPC table must map ids to records, found {0}")]
    InvalidTable(String),
}

pub type Result<T> = std::result::Result<T, Error>;
