use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Acknowledgment without payload, `{"type": "default"}`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", tag = "type")]
pub enum SuccessResponse {
    Default,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", tag = "status", content = "response")]
pub enum Response<T = SuccessResponse> {
    Ok(T),
    Err(String),
}

pub type UpdateLeverageResponse = Response<SuccessResponse>;

impl<T> Response<T> {
    pub fn into_result(self) -> Result<T> {
        match self {
            Response::Ok(data) => Ok(data),
            Response::Err(err) => Err(Error::Api(err)),
        }
    }
}
