use serde::{Deserialize, Serialize};

use crate::method::Method;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SocialStats {
    pub reddit: RedditStats,
    pub twitter: TwitterStats,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RedditStats {
    pub avg_active_users: u64,
    pub subscribers: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TwitterStats {
    pub status_count: u64,
    pub followers_count: u64,
}

pub struct Social;

impl Method for Social {
    const PATH: &'static str = "/social_stats/";
    type Response = SocialStats;
}
