use std::sync::Arc;

use crate::application::ports::{VideoConcatenator, VideoLibrary};
use crate::application::services::ConversionService;
use crate::presentation::config::Settings;

pub struct AppState<L, C>
where
    L: VideoLibrary,
    C: VideoConcatenator,
{
    pub conversion_service: Arc<ConversionService<L, C>>,
    pub settings: Settings,
}

impl<L, C> Clone for AppState<L, C>
where
    L: VideoLibrary,
    C: VideoConcatenator,
{
    fn clone(&self) -> Self {
        Self {
            conversion_service: Arc::clone(&self.conversion_service),
            settings: self.settings.clone(),
        }
    }
}
