use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{ContentType, DocumentAnalysis};

pub struct CompositeFileLoader {
    adapters: HashMap<ContentType, Arc<dyn FileLoader>>,
}

impl CompositeFileLoader {
    pub fn new(adapters: Vec<(ContentType, Arc<dyn FileLoader>)>) -> Self {
        Self {
            adapters: adapters.into_iter().collect(),
        }
    }
}

#[async_trait]
impl FileLoader for CompositeFileLoader {
    async fn extract_text(
        &self,
        data: &[u8],
        analysis: &DocumentAnalysis,
    ) -> Result<String, FileLoaderError> {
        let adapter = self.adapters.get(&analysis.content_type).ok_or_else(|| {
            FileLoaderError::UnsupportedContentType(analysis.content_type.as_mime().to_string())
        })?;

        adapter.extract_text(data, analysis).await
    }
}
