use serde::Deserialize;

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub name: String,
    pub sz_decimals: u32,
    pub max_leverage: u32,
    #[serde(default)]
    pub only_isolated: bool,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Universe {
    pub universe: Vec<Asset>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct SpotUniverse {
    pub index: u32,
    pub name: String,
    pub tokens: (u32, u32),
}
impl SpotUniverse {
    pub fn base_id(&self) -> u32 {
        self.tokens.0
    }
    pub fn quote_id(&self) -> u32 {
        self.tokens.1
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SpotToken {
    pub index: u32,
    pub name: String,
    pub sz_decimals: u32,
    pub wei_decimals: u32,
}

#[derive(Deserialize, Debug, Clone)]
pub struct SpotMetaTokenUniverse {
    pub tokens: Vec<SpotToken>,
    pub universe: Vec<SpotUniverse>,
}

impl SpotMetaTokenUniverse {
    pub fn token(&self, index: u32) -> Option<&SpotToken> {
        self.tokens.iter().find(|x| x.index == index)
    }
}
