mod local_video_library;
mod mock_video_library;

pub use local_video_library::LocalVideoLibrary;
pub use mock_video_library::MockVideoLibrary;
