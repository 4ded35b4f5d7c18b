use std::sync::Arc;

use crate::api::Client;

/// Shared state handed from provider configuration to every resource and data source
#[derive(Clone, Debug)]
pub struct NetboxProviderData {
    pub client: Arc<Client>,
}

impl NetboxProviderData {
    pub fn new(client: Client) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}
