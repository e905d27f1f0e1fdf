use serde_json::Value;

use super::{require, SupadataClient};
use crate::error::Result;
use crate::options::VideoListOptions;

impl SupadataClient {
    /// Get a YouTube video transcript
    pub async fn get_transcript(&self, video_id: &str) -> Result<Value> {
        require(video_id, "Video ID")?;

        let request = self
            .get("/v1/youtube/transcript")
            .query(&[("videoId", video_id)]);
        self.execute(request).await
    }

    /// Translate a YouTube video transcript into `target_language`
    pub async fn translate_transcript(
        &self,
        video_id: &str,
        target_language: &str,
    ) -> Result<Value> {
        require(video_id, "Video ID")?;
        require(target_language, "Target language")?;

        let request = self
            .get("/v1/youtube/transcript/translate")
            .query(&[("videoId", video_id), ("targetLanguage", target_language)]);
        self.execute(request).await
    }

    /// Get YouTube video metadata
    pub async fn get_video(&self, video_id: &str) -> Result<Value> {
        require(video_id, "Video ID")?;

        let request = self.get("/v1/youtube/video").query(&[("videoId", video_id)]);
        self.execute(request).await
    }

    pub async fn get_channel(&self, channel_id: &str) -> Result<Value> {
        require(channel_id, "Channel ID")?;

        let request = self
            .get("/v1/youtube/channel")
            .query(&[("channelId", channel_id)]);
        self.execute(request).await
    }

    pub async fn get_playlist(&self, playlist_id: &str) -> Result<Value> {
        require(playlist_id, "Playlist ID")?;

        let request = self
            .get("/v1/youtube/playlist")
            .query(&[("playlistId", playlist_id)]);
        self.execute(request).await
    }

    /// List the videos of a channel. Paging options are passed through as-is.
    pub async fn get_channel_videos(
        &self,
        channel_id: &str,
        options: &VideoListOptions,
    ) -> Result<Value> {
        require(channel_id, "Channel ID")?;

        let request = self
            .get("/v1/youtube/channel/videos")
            .query(&[("channelId", channel_id)])
            .query(options);
        self.execute(request).await
    }

    /// List the videos of a playlist
    pub async fn get_playlist_videos(
        &self,
        playlist_id: &str,
        options: &VideoListOptions,
    ) -> Result<Value> {
        require(playlist_id, "Playlist ID")?;

        let request = self
            .get("/v1/youtube/playlist/videos")
            .query(&[("playlistId", playlist_id)])
            .query(options);
        self.execute(request).await
    }
}
