mod config;
mod error;
mod fetch;
mod utils;


use std::sync::Arc;

pub use config::Config;
pub use error::*;
pub use fetch::UnreadBatch;

use crate::utils::prompt;

pub struct TelegramFetcher {
    client: grammers_client::Client,
    api_hash: String,
    // need to store to keep session alive
    #[allow(unused)]
    handle: grammers_mtsender::SenderPoolHandle,
}

impl TelegramFetcher {
    pub fn new(config: &Config) -> FetchResult<Self> {
        let session = Arc::new(grammers_session::storages::SqliteSession::open(
            &config.session_file,
        )?);
        let sender_pool = grammers_mtsender::SenderPool::new(Arc::clone(&session), config.api_id);
        let client = grammers_client::client::Client::new(&sender_pool);

        let grammers_mtsender::SenderPool {
            runner,
            updates: _updates,
            handle,
        } = sender_pool;

        tokio::spawn(runner.run());

        Ok(TelegramFetcher {
            client,
            handle,
            api_hash: config.api_hash.clone(),
        })
    }

    pub async fn authorize(&self) -> FetchResult<()> {
        tracing::info!("Checking authorization status...");

        if self.client.is_authorized().await? {
            self.log_credentials().await?;
            return Ok(());
        }

        tracing::info!("Not authorized, starting sign-in flow...");

        let phone = prompt("Enter your phone number (e.g., +1234567890): ")?;
        let token = self
            .client
            .request_login_code(&phone, &self.api_hash)
            .await?;

        let code = prompt("Enter the code you received: ")?;

        let signed_in = self.client.sign_in(&token, &code).await;

        match signed_in {
            Ok(_user) => {
                tracing::info!("Signed in successfully!");
            }
            Err(grammers_client::SignInError::PasswordRequired(password_token)) => {
                let password = prompt("2FA is enabled. Enter your password: ")?;
                self.client
                    .check_password(password_token, password.trim())
                    .await?;
                tracing::info!("Signed in with 2FA!");
            }
            Err(e) => return Err(e.into()),
        }

        self.log_credentials().await?;

        Ok(())
    }

    async fn log_credentials(&self) -> FetchResult<()> {
        let me = self.client.get_me().await?;
        tracing::info!(
            "Logged in as: {} (ID: {})",
            me.username().unwrap_or("N/A"),
            me.bare_id()
        );
        Ok(())
    }

    /// Resolve a chat reference: an `@handle` (or bare handle) goes through
    /// username resolution, a numeric id (including the `-100…` supergroup
    /// form) is looked up among the account's dialogs.
    pub async fn resolve_chat(&self, chat_ref: &str) -> FetchResult<grammers_client::types::Peer> {
        let chat_ref = chat_ref.trim();

        if let Ok(id) = chat_ref.parse::<i64>() {
            return self.find_dialog_peer(fetch::bare_chat_id(id)).await;
        }

        let handle = chat_ref.trim_start_matches('@');
        match self.client.resolve_username(handle).await? {
            Some(peer) => Ok(peer),
            None => Err(FetchError::ChatNotFound(chat_ref.to_string())),
        }
    }

    async fn find_dialog_peer(&self, bare_id: i64) -> FetchResult<grammers_client::types::Peer> {
        let mut dialogs = self.client.iter_dialogs();

        while let Some(dialog) = dialogs.next().await? {
            let peer = dialog.peer();
            if peer.id().bare_id() == bare_id {
                return Ok(peer.clone());
            }
        }

        Err(FetchError::ChatNotFound(bare_id.to_string()))
    }
}
