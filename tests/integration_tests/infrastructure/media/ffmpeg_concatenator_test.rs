use std::path::{Path, PathBuf};
use std::time::Duration;

use signbridge::application::ports::{ConcatenationError, VideoConcatenator};
use signbridge::infrastructure::media::FfmpegConcatenator;

use crate::helpers::{FakeFfmpeg, TestVideoDir};

fn hint(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

fn dir_entries(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[tokio::test]
async fn given_working_tool_when_concatenating_then_output_is_kept_and_manifest_removed() {
    let ffmpeg = FakeFfmpeg::succeeding("joined");
    let clips = TestVideoDir::with_clips(&["hello", "world"]);
    let output_dir = TestVideoDir::new();
    let concatenator = FfmpegConcatenator::new(ffmpeg.binary(), output_dir.path());
    let paths = vec![clips.path().join("hello.mp4"), clips.path().join("world.mp4")];

    let output = concatenator
        .concatenate(&paths, &hint(&["hello", "world"]))
        .await
        .unwrap();

    let name = output.path().file_name().unwrap().to_string_lossy().into_owned();
    assert!(name.starts_with("sign_language_hello_world_"));
    assert!(name.ends_with(".mp4"));
    assert_eq!(std::fs::read_to_string(output.path()).unwrap(), "joined");
    assert_eq!(dir_entries(output_dir.path()), vec![name]);
}

#[tokio::test]
async fn given_clip_paths_when_concatenating_then_manifest_lists_them_in_order() {
    let ffmpeg = FakeFfmpeg::succeeding("joined");
    let output_dir = TestVideoDir::new();
    let concatenator = FfmpegConcatenator::new(ffmpeg.binary(), output_dir.path());
    let paths = vec![
        PathBuf::from("/clips/world.mp4"),
        PathBuf::from("/clips/hello.mp4"),
    ];

    concatenator.concatenate(&paths, &[]).await.unwrap();

    assert_eq!(
        ffmpeg.captured_manifest().as_deref(),
        Some("file '/clips/world.mp4'\nfile '/clips/hello.mp4'\n")
    );
}

#[tokio::test]
async fn given_tool_failure_when_concatenating_then_reports_stderr_and_leaves_nothing() {
    let ffmpeg = FakeFfmpeg::failing("Invalid data found when processing input");
    let output_dir = TestVideoDir::new();
    let concatenator = FfmpegConcatenator::new(ffmpeg.binary(), output_dir.path());

    let result = concatenator
        .concatenate(&[PathBuf::from("/clips/hello.mp4")], &hint(&["hello"]))
        .await;

    match result {
        Err(ConcatenationError::ToolFailed { stderr, .. }) => {
            assert_eq!(stderr, "Invalid data found when processing input");
        }
        other => panic!("expected ToolFailed, got {:?}", other),
    }
    assert!(dir_entries(output_dir.path()).is_empty());
}

#[tokio::test]
async fn given_tool_writing_nothing_when_concatenating_then_reports_empty_output() {
    let ffmpeg = FakeFfmpeg::silent();
    let output_dir = TestVideoDir::new();
    let concatenator = FfmpegConcatenator::new(ffmpeg.binary(), output_dir.path());

    let result = concatenator
        .concatenate(&[PathBuf::from("/clips/hello.mp4")], &hint(&["hello"]))
        .await;

    assert!(matches!(result, Err(ConcatenationError::EmptyOutput)));
    assert!(dir_entries(output_dir.path()).is_empty());
}

#[tokio::test]
async fn given_missing_binary_when_concatenating_then_reports_spawn_failure() {
    let output_dir = TestVideoDir::new();
    let concatenator =
        FfmpegConcatenator::new(output_dir.path().join("no-such-ffmpeg"), output_dir.path());

    let result = concatenator
        .concatenate(&[PathBuf::from("/clips/hello.mp4")], &hint(&["hello"]))
        .await;

    assert!(matches!(result, Err(ConcatenationError::SpawnFailed(_))));
    assert!(dir_entries(output_dir.path()).is_empty());
}

#[tokio::test]
async fn given_no_clips_when_concatenating_then_rejects_without_running_tool() {
    let output_dir = TestVideoDir::new();
    let concatenator = FfmpegConcatenator::new("/definitely/not/ffmpeg", output_dir.path());

    let result = concatenator.concatenate(&[], &hint(&["hello"])).await;

    assert!(matches!(result, Err(ConcatenationError::NoInputs)));
}

#[tokio::test]
async fn given_missing_output_dir_when_concatenating_then_reports_temp_file_error() {
    let ffmpeg = FakeFfmpeg::succeeding("joined");
    let output_dir = TestVideoDir::new();
    let concatenator =
        FfmpegConcatenator::new(ffmpeg.binary(), output_dir.path().join("missing"));

    let result = concatenator
        .concatenate(&[PathBuf::from("/clips/hello.mp4")], &[])
        .await;

    assert!(matches!(result, Err(ConcatenationError::TempFile(_))));
}

#[tokio::test]
async fn given_binary_when_checking_availability_then_reflects_binary_presence() {
    let ffmpeg = FakeFfmpeg::silent();
    let output_dir = TestVideoDir::new();

    let present = FfmpegConcatenator::new(ffmpeg.binary(), output_dir.path());
    let absent = FfmpegConcatenator::new(output_dir.path().join("nope"), output_dir.path());

    assert!(present.is_available().await);
    assert!(!absent.is_available().await);
}

#[tokio::test]
async fn given_cancelled_job_when_concatenating_then_leaves_nothing() {
    let ffmpeg = FakeFfmpeg::sleeping(3);
    let output_dir = TestVideoDir::new();
    let concatenator = FfmpegConcatenator::new(ffmpeg.binary(), output_dir.path());
    let paths = vec![
        PathBuf::from("/clips/hello.mp4"),
        PathBuf::from("/clips/world.mp4"),
    ];

    let result = tokio::time::timeout(
        Duration::from_millis(300),
        concatenator.concatenate(&paths, &hint(&["hello", "world"])),
    )
    .await;

    assert!(result.is_err(), "job should still be running at the deadline");
    assert!(dir_entries(output_dir.path()).is_empty());
}

#[tokio::test]
async fn given_finished_job_when_result_is_dropped_then_output_is_removed() {
    let ffmpeg = FakeFfmpeg::succeeding("joined");
    let output_dir = TestVideoDir::new();
    let concatenator = FfmpegConcatenator::new(ffmpeg.binary(), output_dir.path());

    let output = concatenator
        .concatenate(&[PathBuf::from("/clips/hello.mp4")], &hint(&["hello"]))
        .await
        .unwrap();
    assert_eq!(dir_entries(output_dir.path()).len(), 1);

    drop(output);

    assert!(dir_entries(output_dir.path()).is_empty());
}
