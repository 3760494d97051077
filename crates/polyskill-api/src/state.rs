//! Application state shared across HTTP handlers.

use std::sync::Arc;
use std::time::Duration;

use polyskill_core::dialog::DialogEngine;
use polyskill_infra::config::Secrets;
use polyskill_infra::mymemory::MyMemoryTranslator;
use polyskill_infra::virustotal::VirusTotalScanner;
use polyskill_infra::yandex::{DialogsImageStore, YandexGeocoder, YandexStaticMap, YandexWeather};
use polyskill_types::config::ServerConfig;

/// The dialog engine with its production collaborators pinned.
pub type ConcreteEngine = DialogEngine<
    VirusTotalScanner,
    MyMemoryTranslator,
    YandexGeocoder,
    YandexStaticMap,
    YandexWeather,
    DialogsImageStore,
>;

#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<ConcreteEngine>,
}

impl AppState {
    /// Wire the engine to its production collaborators. Secrets come
    /// from the environment; a missing variable fails startup.
    pub fn init(config: &ServerConfig) -> anyhow::Result<Self> {
        let secrets = Secrets::from_env()?;
        let timeout = Duration::from_secs(config.upstream_timeout_secs);

        let engine = DialogEngine::new(
            VirusTotalScanner::new(secrets.virustotal_api_key, timeout),
            MyMemoryTranslator::new(secrets.translator_token, timeout),
            YandexGeocoder::new(secrets.geocoder_api_key, timeout),
            YandexStaticMap::new(timeout),
            YandexWeather::new(secrets.weather_api_key, timeout),
            DialogsImageStore::new(secrets.skill_id, secrets.dialogs_token, timeout),
            Duration::from_secs(config.session_ttl_secs),
        );

        Ok(Self {
            engine: Arc::new(engine),
        })
    }
}
