use serde::Serialize;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase", tag = "type")]
pub enum Request {
    Meta,
    SpotMeta,
}
