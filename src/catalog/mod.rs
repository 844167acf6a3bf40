// SPDX-License-Identifier: MPL-2.0
//! Static mock catalog backing every screen.
//!
//! There is no network layer; the feed, discovery, and profile screens all
//! render from the fixtures below. Items are immutable once loaded — the
//! counters are display values only and any interaction state lives in the
//! per-item UI state, never here.

pub mod counts;

pub use counts::format_count;

/// A single entry in the vertical feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedItem {
    /// Stable identifier, unique within a feed.
    pub id: &'static str,
    /// Media reference. Not fetched; the card renders a placeholder surface.
    pub media_url: &'static str,
    pub author: &'static str,
    pub caption: &'static str,
    pub like_count: u64,
    pub comment_count: u64,
    pub share_count: u64,
    /// Soundtrack label shown next to the music note.
    pub soundtrack: &'static str,
    pub avatar_url: &'static str,
}

/// A trending hashtag on the discovery screen.
#[derive(Debug, Clone, Copy)]
pub struct Hashtag {
    pub tag: &'static str,
    pub post_count: u64,
}

/// A trending sound on the discovery screen.
#[derive(Debug, Clone, Copy)]
pub struct Sound {
    pub title: &'static str,
    pub artist: &'static str,
    pub use_count: u64,
}

/// A featured video tile on the discovery screen.
#[derive(Debug, Clone, Copy)]
pub struct FeaturedVideo {
    pub id: &'static str,
    pub thumbnail_url: &'static str,
    pub view_count: u64,
}

/// A posted video tile on the profile grid.
#[derive(Debug, Clone, Copy)]
pub struct PostedVideo {
    pub id: &'static str,
    pub thumbnail_url: &'static str,
    pub view_count: u64,
    pub like_count: u64,
}

/// The mock profile shown on the profile screen.
#[derive(Debug, Clone, Copy)]
pub struct Profile {
    pub username: &'static str,
    pub display_name: &'static str,
    pub bio: &'static str,
    pub follower_count: u64,
    pub following_count: u64,
    pub like_count: u64,
    pub verified: bool,
}

/// The built-in feed sequence, in display order.
#[must_use]
pub fn sample_feed() -> Vec<FeedItem> {
    vec![
        FeedItem {
            id: "1",
            media_url:
                "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/BigBuckBunny.mp4",
            author: "creativeuser",
            caption: "Amazing sunset vibes! #sunset #nature #beautiful",
            like_count: 12_400,
            comment_count: 324,
            share_count: 89,
            soundtrack: "original sound - creativeuser",
            avatar_url: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e",
        },
        FeedItem {
            id: "2",
            media_url:
                "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/ElephantsDream.mp4",
            author: "adventurer_jane",
            caption: "Living my best life! What's your weekend plan?",
            like_count: 8_500,
            comment_count: 156,
            share_count: 43,
            soundtrack: "Feel Good Music - Artist",
            avatar_url: "https://images.unsplash.com/photo-1494790108755-2616b612b786",
        },
        FeedItem {
            id: "3",
            media_url:
                "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/ForBiggerBlazes.mp4",
            author: "tech_guru",
            caption: "Mind-blowing tech trick! Try this at home",
            like_count: 15_600,
            comment_count: 789,
            share_count: 234,
            soundtrack: "Epic Beat Drop - DJ Mix",
            avatar_url: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d",
        },
    ]
}

/// Trending hashtags for the discovery screen.
pub const TRENDING_HASHTAGS: &[Hashtag] = &[
    Hashtag { tag: "fyp", post_count: 2_300_000 },
    Hashtag { tag: "viral", post_count: 1_800_000 },
    Hashtag { tag: "dance", post_count: 956_000 },
    Hashtag { tag: "comedy", post_count: 743_000 },
    Hashtag { tag: "food", post_count: 632_000 },
    Hashtag { tag: "travel", post_count: 589_000 },
];

/// Trending sounds for the discovery screen.
pub const TRENDING_SOUNDS: &[Sound] = &[
    Sound { title: "Original Sound", artist: "viral_creator", use_count: 125_400 },
    Sound { title: "Trending Beat", artist: "music_producer", use_count: 89_200 },
    Sound { title: "Viral Song", artist: "popular_artist", use_count: 67_800 },
    Sound { title: "Dance Mix", artist: "dj_master", use_count: 54_300 },
];

/// Featured videos for the discovery screen.
pub const FEATURED_VIDEOS: &[FeaturedVideo] = &[
    FeaturedVideo {
        id: "1",
        thumbnail_url: "https://images.unsplash.com/photo-1506905925346-21bda4d32df4",
        view_count: 2_300_000,
    },
    FeaturedVideo {
        id: "2",
        thumbnail_url: "https://images.unsplash.com/photo-1469474968028-56623f02e42e",
        view_count: 1_800_000,
    },
    FeaturedVideo {
        id: "3",
        thumbnail_url: "https://images.unsplash.com/photo-1441974231531-c6227db76b6e",
        view_count: 1_200_000,
    },
    FeaturedVideo {
        id: "4",
        thumbnail_url: "https://images.unsplash.com/photo-1506905925346-21bda4d32df4",
        view_count: 956_000,
    },
    FeaturedVideo {
        id: "5",
        thumbnail_url: "https://images.unsplash.com/photo-1469474968028-56623f02e42e",
        view_count: 743_000,
    },
    FeaturedVideo {
        id: "6",
        thumbnail_url: "https://images.unsplash.com/photo-1441974231531-c6227db76b6e",
        view_count: 632_000,
    },
];

/// The mock profile.
pub const PROFILE: Profile = Profile {
    username: "johndoe",
    display_name: "John Doe",
    bio: "Content Creator\nFilmmaker\nLos Angeles",
    follower_count: 125_400,
    following_count: 892,
    like_count: 1_200_000,
    verified: true,
};

/// Posted videos for the profile grid.
pub const POSTED_VIDEOS: &[PostedVideo] = &[
    PostedVideo {
        id: "1",
        thumbnail_url: "https://images.unsplash.com/photo-1506905925346-21bda4d32df4",
        view_count: 125_000,
        like_count: 12_400,
    },
    PostedVideo {
        id: "2",
        thumbnail_url: "https://images.unsplash.com/photo-1469474968028-56623f02e42e",
        view_count: 89_000,
        like_count: 8_900,
    },
    PostedVideo {
        id: "3",
        thumbnail_url: "https://images.unsplash.com/photo-1441974231531-c6227db76b6e",
        view_count: 203_000,
        like_count: 25_100,
    },
    PostedVideo {
        id: "4",
        thumbnail_url: "https://images.unsplash.com/photo-1506905925346-21bda4d32df4",
        view_count: 67_000,
        like_count: 6_700,
    },
    PostedVideo {
        id: "5",
        thumbnail_url: "https://images.unsplash.com/photo-1469474968028-56623f02e42e",
        view_count: 156_000,
        like_count: 18_300,
    },
    PostedVideo {
        id: "6",
        thumbnail_url: "https://images.unsplash.com/photo-1441974231531-c6227db76b6e",
        view_count: 92_000,
        like_count: 11_200,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn sample_feed_has_unique_ids() {
        let feed = sample_feed();
        let ids: HashSet<_> = feed.iter().map(|item| item.id).collect();
        assert_eq!(ids.len(), feed.len());
    }

    #[test]
    fn sample_feed_is_non_empty() {
        assert!(!sample_feed().is_empty());
    }

    #[test]
    fn fixtures_are_populated() {
        assert!(!TRENDING_HASHTAGS.is_empty());
        assert!(!TRENDING_SOUNDS.is_empty());
        assert!(!FEATURED_VIDEOS.is_empty());
        assert!(!POSTED_VIDEOS.is_empty());
    }
}
