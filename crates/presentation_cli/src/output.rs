//! Plain-text rendering of pipeline results

use std::fmt::Write;

use domain::{
    OrchestratedResponse, VideoMetadata, format_timestamp, messages::DEFAULT_TRAIL_NAME,
};

/// Render a pipeline response for the terminal
pub fn render_response(response: &OrchestratedResponse) -> String {
    let mut out = response.message.clone();

    if let Some(video) = &response.video {
        let _ = write!(
            out,
            "\n\n▶ {} (starts at {})",
            video.url,
            format_timestamp(video.timestamp)
        );
        if let Some(metadata) = &video.metadata {
            out.push('\n');
            out.push_str(&render_metadata(metadata));
        }
    }

    out
}

/// Render the descriptive fields of one video
pub fn render_metadata(metadata: &VideoMetadata) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", metadata.display_name(DEFAULT_TRAIL_NAME));
    let _ = writeln!(out, "  Difficulty: {}", metadata.difficulty_band());

    if let Some(terrain) = metadata.terrain_type() {
        let _ = writeln!(out, "  Terrain:    {terrain}");
    }
    if let Some(level) = metadata.recommended_skill_level() {
        let _ = writeln!(out, "  Skill:      {level}");
    }
    if let Some(coordinates) = metadata.coordinates() {
        let _ = writeln!(out, "  Location:   {coordinates} ({})", coordinates.map_link());
    }
    if let Some(date) = metadata.indexed_on() {
        let _ = writeln!(out, "  Indexed:    {date}");
    }
    let features = metadata.key_features();
    if !features.is_empty() {
        let _ = writeln!(out, "  Features:   {}", features.join(", "));
    }
    if let Some(summary) = metadata.summary() {
        let _ = writeln!(out, "  {summary}");
    }

    out.trim_end().to_string()
}

/// One line per catalog entry
pub fn render_catalog(videos: &[VideoMetadata]) -> String {
    if videos.is_empty() {
        return "No videos indexed.".to_string();
    }

    videos
        .iter()
        .map(|video| {
            format!(
                "{:<12} {:<32} {}",
                video.video_id().unwrap_or("-"),
                video.display_name(DEFAULT_TRAIL_NAME),
                video.difficulty_band()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
