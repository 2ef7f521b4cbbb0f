use serde::{Deserialize, Serialize};

use super::{Proc, ProcKind};

/// Reflection snapshot of a proc, for tooling and debuggers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcInfo {
    pub kind: ProcKindInfo,
    pub name: String,
    pub arity: i64,
    pub lambda: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receiver: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcKindInfo {
    Block,
    Lambda,
    Method,
}

impl ProcInfo {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl Proc {
    pub fn describe(&self) -> ProcInfo {
        let (kind, name, receiver, owner) = match self.kind() {
            ProcKind::Block => (ProcKindInfo::Block, self.name().to_string(), None, None),
            ProcKind::Lambda => (ProcKindInfo::Lambda, self.name().to_string(), None, None),
            ProcKind::Method(binding) => (
                ProcKindInfo::Method,
                binding.name.to_string(),
                Some(binding.receiver.to_string()),
                Some(binding.owner().to_string()),
            ),
        };
        ProcInfo {
            kind,
            name,
            arity: self.arity(),
            lambda: self.is_lambda(),
            receiver,
            owner,
        }
    }
}
