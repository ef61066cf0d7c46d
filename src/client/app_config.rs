use crate::client_defaults::API_V2;
use crate::error::Error;
use crate::models::{AppConfig, AppConfigPost};
use crate::rest::{ResourcePath, RestClient};

const COMPONENT: &str = "app_config";

pub struct AppConfigs<'a> {
    rest: &'a RestClient,
}

impl<'a> AppConfigs<'a> {
    pub fn new(rest: &'a RestClient) -> Self {
        Self { rest }
    }

    pub fn get(&self) -> Result<AppConfig, Error> {
        self.rest.read_data(&ResourcePath::new(API_V2, COMPONENT))
    }

    pub fn update(&self, config: &AppConfigPost) -> Result<AppConfig, Error> {
        self.rest
            .update_data(&ResourcePath::new(API_V2, COMPONENT), config)
    }
}
