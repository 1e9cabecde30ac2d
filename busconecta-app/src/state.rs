use anyhow::Context;
use busconecta_booking::repository::ReservationStore;
use busconecta_core::account::{SessionStore, UserStore};
use busconecta_core::kv::KeyValueStore;
use busconecta_core::payment::{PaymentProvider, SimulatedGateway};
use busconecta_store::app_config::{AccountRules, Config, PaymentConfig, StorageConfig};
use busconecta_store::{JsonFileKv, KvReservationLedger, KvSession, KvUserDirectory, MemoryKv};
use std::sync::Arc;
use std::time::Duration;

/// Shared wiring handed to every screen service.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserStore>,
    pub session: Arc<dyn SessionStore>,
    pub ledger: Arc<dyn ReservationStore>,
    pub payments: Arc<dyn PaymentProvider>,
    pub config: Config,
}

impl AppState {
    /// Durable wiring: layered configuration, on-device JSON store and the
    /// configured fixed-delay gateway.
    pub fn bootstrap() -> anyhow::Result<Self> {
        let config = Config::load().context("loading configuration")?;
        tracing::info!("storage file: {}", config.storage.path);

        let kv: Arc<dyn KeyValueStore> = Arc::new(JsonFileKv::new(&config.storage.path));
        let payments = Arc::new(SimulatedGateway::new(Duration::from_secs(
            config.payment.delay_seconds,
        )));
        Ok(Self::with_store(kv, payments, config))
    }

    /// Wiring over an explicit store and provider.
    pub fn with_store(
        kv: Arc<dyn KeyValueStore>,
        payments: Arc<dyn PaymentProvider>,
        config: Config,
    ) -> Self {
        Self {
            users: Arc::new(KvUserDirectory::new(kv.clone())),
            session: Arc::new(KvSession::new(kv.clone())),
            ledger: Arc::new(KvReservationLedger::new(kv)),
            payments,
            config,
        }
    }

    /// Ephemeral wiring: in-memory store and an instant gateway. Used by
    /// tests and previews.
    pub fn ephemeral() -> Self {
        let config = Config {
            storage: StorageConfig {
                path: "unused".to_string(),
            },
            payment: PaymentConfig { delay_seconds: 0 },
            account: AccountRules {
                min_password_length: 6,
            },
        };
        Self::with_store(
            Arc::new(MemoryKv::new()),
            Arc::new(SimulatedGateway::instant()),
            config,
        )
    }
}
