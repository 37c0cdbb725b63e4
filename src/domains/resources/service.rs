//! Resource service implementation.
//!
//! The ResourceService manages resource discovery and access.
//! Resources are defined in `definitions/` and registered via `registry.rs`.

use rmcp::model::{ReadResourceResult, Resource, ResourceContents};
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::{debug, info, warn};

use super::error::ResourceError;
use super::registry::get_all_resources;
use crate::core::config::ResourcesConfig;

/// Service for managing and accessing resources.
pub struct ResourceService {
    /// Directory file-backed resources are read from.
    base_path: PathBuf,

    /// Registry of available resources, keyed by URI.
    resources: BTreeMap<String, ResourceEntry>,
}

/// An entry in the resource registry.
#[derive(Debug, Clone)]
pub struct ResourceEntry {
    /// The resource metadata.
    pub resource: Resource,

    /// The content provider for this resource.
    pub content: ResourceContent,
}

/// Where a resource's content comes from.
#[derive(Debug, Clone)]
pub enum ResourceContent {
    /// A file relative to the resources base path, read on every request.
    File(String),
}

impl ResourceService {
    /// Create a new ResourceService with the given configuration.
    pub fn new(config: ResourcesConfig) -> Self {
        info!("Initializing ResourceService (base path: {})", config.base_path);

        let mut service = Self {
            base_path: PathBuf::from(config.base_path),
            resources: BTreeMap::new(),
        };

        for entry in get_all_resources() {
            service.register_resource(entry);
        }

        service
    }

    /// Register a resource.
    pub fn register_resource(&mut self, entry: ResourceEntry) {
        info!("Registering resource: {}", entry.resource.raw.uri);
        self.resources
            .insert(entry.resource.raw.uri.to_string(), entry);
    }

    /// List all available resources.
    pub async fn list_resources(&self) -> Vec<Resource> {
        self.resources
            .values()
            .map(|entry| entry.resource.clone())
            .collect()
    }

    /// Read a resource by URI.
    ///
    /// File-backed content is returned verbatim, tagged with the resource's
    /// declared MIME type.
    pub async fn read_resource(&self, uri: &str) -> Result<ReadResourceResult, ResourceError> {
        let entry = self
            .resources
            .get(uri)
            .ok_or_else(|| ResourceError::not_found(uri))?;

        let text = match &entry.content {
            ResourceContent::File(name) => {
                let path = self.base_path.join(name);
                debug!("Reading resource file {}", path.display());
                tokio::fs::read_to_string(&path).await.map_err(|e| {
                    warn!("Failed to read {}: {}", path.display(), e);
                    ResourceError::io(path.display().to_string(), e)
                })?
            }
        };

        Ok(ReadResourceResult {
            contents: vec![ResourceContents::TextResourceContents {
                uri: uri.to_string(),
                mime_type: entry.resource.raw.mime_type.clone(),
                text,
                meta: None,
            }],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDGET_URI: &str = "ui://widget/current-weather.html";
    const WIDGET_HTML: &str = "<div id=\"weather\">\n  <span>°C</span>\n</div>\n";

    fn service_in(dir: &tempfile::TempDir) -> ResourceService {
        ResourceService::new(ResourcesConfig {
            base_path: dir.path().display().to_string(),
        })
    }

    #[tokio::test]
    async fn test_lists_widget() {
        let dir = tempfile::tempdir().unwrap();
        let resources = service_in(&dir).list_resources().await;
        assert_eq!(resources.len(), 1);
        assert_eq!(resources[0].raw.uri, WIDGET_URI);
    }

    #[tokio::test]
    async fn test_read_widget_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("current_weather_widget.html"), WIDGET_HTML).unwrap();

        let result = service_in(&dir).read_resource(WIDGET_URI).await.unwrap();
        assert_eq!(result.contents.len(), 1);
        match &result.contents[0] {
            ResourceContents::TextResourceContents {
                uri,
                mime_type,
                text,
                ..
            } => {
                assert_eq!(uri, WIDGET_URI);
                assert_eq!(mime_type.as_deref(), Some("text/html+skybridge"));
                assert_eq!(text, WIDGET_HTML);
            }
            _ => panic!("Expected text contents"),
        }
    }

    #[tokio::test]
    async fn test_read_widget_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = service_in(&dir).read_resource(WIDGET_URI).await;
        assert!(matches!(result, Err(ResourceError::Io { .. })));
    }

    #[tokio::test]
    async fn test_read_nonexistent_resource() {
        let dir = tempfile::tempdir().unwrap();
        let result = service_in(&dir).read_resource("ui://widget/missing.html").await;
        assert!(matches!(result, Err(ResourceError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_bundled_widget_is_readable() {
        let service = ResourceService::new(ResourcesConfig {
            base_path: concat!(env!("CARGO_MANIFEST_DIR"), "/assets").to_string(),
        });
        let result = service.read_resource(WIDGET_URI).await;
        assert!(result.is_ok());
    }
}
