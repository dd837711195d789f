//! Static copy and link data for the landing page.

#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    /// Symbolic icon name, resolved by `components::icon::Icon::from_name`.
    pub icon: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SocialLink {
    pub name: &'static str,
    pub icon: &'static str,
    pub url: &'static str,
}

pub const LOGO_URL: &str = "https://customer-assets.emergentagent.com/job_7593d419-9ab6-4246-b323-b30045671f1d/artifacts/1lf12na8_IQ_Coded%282%29.png";

pub const SUPPORT_URL: &str = "https://ko-fi.com/postapocalypticradio";

pub const FEATURES: &[Feature] = &[
    Feature {
        id: 1,
        title: "Artist-Owned Music, Powered by IPFS",
        description: "Instead of uploading music to a corporate server, artists directly control their content. They upload their songs to IPFS (InterPlanetary File System) - a global, decentralized hard drive where files are stored across many computers, making them more resilient and censorship-resistant.",
        icon: "Music",
    },
    Feature {
        id: 2,
        title: "Solana Blockchain for Trust & Transparency",
        description: "All the important information about songs (artist, title, the IPFS link to the song) is immutably recorded on the Solana blockchain. When the artist uploads a song, a record of it goes onto Solana, visible to everyone.",
        icon: "Shield",
    },
    Feature {
        id: 3,
        title: "Social Discovery: \"Ping with a Song\"",
        description: "Forget black-box algorithms! On P.A.R., you discover music through your friends and the community. Our unique \"Ping with a Song\" feature lets you directly send a song recommendation to another user.",
        icon: "Zap",
    },
    Feature {
        id: 4,
        title: "Community-Driven \"Most Pinged Radio\"",
        description: "Want to know what's hot right now in the P.A.R. universe? Tune into the \"Most Pinged Radio.\" This feature automatically compiles a playlist of the songs that have been \"pinged\" (shared) the most by users within a recent timeframe.",
        icon: "Radio",
    },
    Feature {
        id: 5,
        title: "Future of Incentives with a Custom Solana Token",
        description: "While not fully implemented in this early prototype, the vision for P.A.R. includes a custom Solana token. This token will be used to reward artists for their creations and incentivize listeners who actively participate, share, and even help \"seed\" (host) music on the IPFS network.",
        icon: "Coins",
    },
];

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { name: "Twitter", icon: "Twitter", url: "https://x.com/postapradio" },
    SocialLink { name: "TikTok", icon: "Music", url: "https://tiktok.com/@postapradio" },
    SocialLink { name: "Discord", icon: "MessageCircle", url: "https://discord.gg/f2M7tuVe" },
    SocialLink { name: "Instagram", icon: "Instagram", url: "https://instagram.com/postapocalypticradio" },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::icon::Icon;
    use std::collections::HashSet;

    #[test]
    fn feature_ids_are_unique() {
        let ids: HashSet<u32> = FEATURES.iter().map(|f| f.id).collect();
        assert_eq!(ids.len(), FEATURES.len());
    }

    #[test]
    fn features_keep_their_order() {
        let ids: Vec<u32> = FEATURES.iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        assert_eq!(FEATURES[0].icon, "Music");
        assert_eq!(FEATURES[4].icon, "Coins");
    }

    #[test]
    fn social_link_names_are_unique() {
        let names: HashSet<&str> = SOCIAL_LINKS.iter().map(|s| s.name).collect();
        assert_eq!(names.len(), SOCIAL_LINKS.len());
        let ordered: Vec<&str> = SOCIAL_LINKS.iter().map(|s| s.name).collect();
        assert_eq!(ordered, vec!["Twitter", "TikTok", "Discord", "Instagram"]);
    }

    #[test]
    fn every_icon_name_resolves() {
        for name in FEATURES.iter().map(|f| f.icon).chain(SOCIAL_LINKS.iter().map(|s| s.icon)) {
            assert!(Icon::from_name(name).is_some(), "unknown icon name {name}");
        }
    }

    #[test]
    fn outbound_links_are_absolute_https() {
        for url in SOCIAL_LINKS.iter().map(|s| s.url).chain([SUPPORT_URL, LOGO_URL]) {
            assert!(url.starts_with("https://"), "not an absolute https url: {url}");
        }
    }
}
