use std::cell::RefCell;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::{
    ConfigContentProvider, ConfigSerializer, FileContentConfigProvider, Validate,
    YamlConfigSerializer,
};

/// Loads, validates and caches one configuration value. A missing source
/// yields `TConfig::default()`; an unreadable or invalid one is an error.
pub struct ConfigManager<TProvider, TConfig, TSerializer = YamlConfigSerializer>
where
    TProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TSerializer: ConfigSerializer<TConfig>,
{
    provider: TProvider,
    serializer: TSerializer,
    cached: RefCell<Option<TConfig>>,
}

impl<TConfig> ConfigManager<FileContentConfigProvider, TConfig, YamlConfigSerializer>
where
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    pub fn from_yaml_file(path: impl Into<PathBuf>) -> Self {
        Self::new(FileContentConfigProvider::new(path), YamlConfigSerializer::new())
    }
}

impl<TProvider, TConfig, TSerializer> ConfigManager<TProvider, TConfig, TSerializer>
where
    TProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TSerializer: ConfigSerializer<TConfig>,
{
    pub fn new(provider: TProvider, serializer: TSerializer) -> Self {
        Self {
            provider,
            serializer,
            cached: RefCell::new(None),
        }
    }

    pub fn get_config(&self) -> Result<TConfig, String> {
        if let Some(config) = self.cached.borrow().as_ref() {
            return Ok(config.clone());
        }

        let config = match self.provider.get_config_content()? {
            Some(content) => {
                let config = self.serializer.deserialize(&content)?;
                config
                    .validate()
                    .map_err(|e| format!("Config validation error: {}", e))?;
                config
            }
            None => TConfig::default(),
        };

        *self.cached.borrow_mut() = Some(config.clone());
        Ok(config)
    }

    pub fn set_config(&self, config: &TConfig) -> Result<(), String> {
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        let content = self.serializer.serialize(config)?;
        self.provider.set_config_content(&content)?;

        *self.cached.borrow_mut() = Some(config.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
    struct SampleConfig {
        size: u32,
    }

    impl Validate for SampleConfig {
        fn validate(&self) -> Result<(), String> {
            if self.size > 19 {
                return Err("size too large".to_string());
            }
            Ok(())
        }
    }

    struct MemoryProvider {
        content: RefCell<Option<String>>,
        reads: Cell<u32>,
    }

    impl MemoryProvider {
        fn new(content: Option<&str>) -> Self {
            Self {
                content: RefCell::new(content.map(str::to_string)),
                reads: Cell::new(0),
            }
        }
    }

    impl ConfigContentProvider for &MemoryProvider {
        fn get_config_content(&self) -> Result<Option<String>, String> {
            self.reads.set(self.reads.get() + 1);
            Ok(self.content.borrow().clone())
        }

        fn set_config_content(&self, content: &str) -> Result<(), String> {
            *self.content.borrow_mut() = Some(content.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_missing_content_gives_default() {
        let provider = MemoryProvider::new(None);
        let manager: ConfigManager<_, SampleConfig, _> =
            ConfigManager::new(&provider, YamlConfigSerializer::new());
        assert_eq!(manager.get_config().unwrap(), SampleConfig::default());
    }

    #[test]
    fn test_config_is_read_once() {
        let provider = MemoryProvider::new(Some("size: 7\n"));
        let manager: ConfigManager<_, SampleConfig, _> =
            ConfigManager::new(&provider, YamlConfigSerializer::new());

        assert_eq!(manager.get_config().unwrap(), SampleConfig { size: 7 });
        assert_eq!(manager.get_config().unwrap(), SampleConfig { size: 7 });
        assert_eq!(provider.reads.get(), 1);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let provider = MemoryProvider::new(Some("size: 40\n"));
        let manager: ConfigManager<_, SampleConfig, _> =
            ConfigManager::new(&provider, YamlConfigSerializer::new());
        assert!(manager.get_config().is_err());

        assert!(manager.set_config(&SampleConfig { size: 25 }).is_err());
    }

    #[test]
    fn test_set_config_writes_through() {
        let provider = MemoryProvider::new(None);
        let manager: ConfigManager<_, SampleConfig, _> =
            ConfigManager::new(&provider, YamlConfigSerializer::new());

        manager.set_config(&SampleConfig { size: 11 }).unwrap();
        let stored = provider.content.borrow().clone().unwrap();
        assert!(stored.contains("size: 11"));
        assert_eq!(manager.get_config().unwrap(), SampleConfig { size: 11 });
    }
}
