// SPDX-License-Identifier: MPL-2.0
//! Items of the visualization gallery, in carousel order.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryItem {
    pub image: &'static str,
    pub description: &'static str,
    /// Source post the visualization was published in.
    pub link: &'static str,
}

static GALLERY_ITEMS: [GalleryItem; 9] = [
    GalleryItem {
        image: "https://media.licdn.com/dms/image/v2/D4D22AQH6-TjQycJYtQ/feedshare-shrink_2048_1536/B4DZsjL.6NI4Aw-/0/1765821903800?e=1767225600&v=beta&t=ROosAg-AwjmFiLFXFsTUVPOEcXFISESEfPvbZboqRpc",
        description: "Analyzing Teun Koopmeiners' tactical evolution after shifting to a deeper \
            playmaker role under Luciano Spalletti.",
        link: "https://www.linkedin.com/feed/update/urn:li:activity:7406669356325306368/",
    },
    GalleryItem {
        image: "https://media.licdn.com/dms/image/v2/D4D22AQEJwrZMQjWp5A/feedshare-shrink_1280/B4DZsSxr4jJYAs-/0/1765546575104?e=1767225600&v=beta&t=vdULcsTZNaCjS8AFc-f8lSlSnqZxZBB0DL_OInv8IfU",
        description: "Visualizing Serie A goalkeeper efficiency and performance relative to \
            post-shot expected goals.",
        link: "https://www.linkedin.com/feed/update/urn:li:activity:7405271467476865024/",
    },
    GalleryItem {
        image: "https://media.licdn.com/dms/image/v2/D4D22AQF-y3i_pM3SdQ/feedshare-shrink_1280/B4DZsIpMkPKsAc-/0/1765376576006?e=1767225600&v=beta&t=0i7VkcNBCcypQxBtj8zZcMfpYbeXpLUxr4m3FZF1G58",
        description: "Comparing bookmaker predictions with actual win rates to identify Europe's \
            biggest overachieving and underachieving teams.",
        link: "https://www.linkedin.com/feed/update/urn:li:activity:7404554249050705920/",
    },
    GalleryItem {
        image: "https://media.licdn.com/dms/image/v2/D4D22AQH16CfhD7Y3TA/feedshare-shrink_2048_1536/B4DZrfLrMWGsAo-/0/1764680971364?e=1767225600&v=beta&t=lJ3uM_HBIz_mdvfstAneBzCKyyLb3PyiJUHrlOSaltQ",
        description: "Comparing the statistical profiles and distinct strengths of the top six \
            U20 attackers based on market value.",
        link: "https://www.linkedin.com/feed/update/urn:li:activity:7401655139381620736/",
    },
    GalleryItem {
        image: "https://media.licdn.com/dms/image/v2/D4D22AQHG9IbJgF8qJw/feedshare-shrink_2048_1536/B4DZrJySBaKQAw-/0/1764321993524?e=1767225600&v=beta&t=xAhnc4EPaspqD2N6NH4wNypPd2gGbSqhBwqJizvHwnI",
        description: "Investigating the migration of top Italian youth talents to German clubs \
            by contrasting playing time data with development efficacy.",
        link: "https://www.linkedin.com/feed/update/urn:li:activity:7400137641205174273/",
    },
    GalleryItem {
        image: "https://media.licdn.com/dms/image/v2/D4D22AQGcmcD-5Wz42w/feedshare-shrink_2048_1536/B4DZq7grvkIgAw-/0/1764082500103?e=1767225600&v=beta&t=ByqPpyuTRugb7NaEfiW0sPobqUyzpFMmD5rI0Cd0rK8",
        description: "Ranking the most dangerous attackers in Europe's Top 5 leagues by \
            combining shot quality and finishing overperformance metrics.",
        link: "https://www.linkedin.com/feed/update/urn:li:activity:7399386529577578496/",
    },
    GalleryItem {
        image: "https://media.licdn.com/dms/image/v2/D4E22AQFQg25x5_OnvA/feedshare-shrink_2048_1536/B4EZqcqi93GUAw-/0/1763564991768?e=1767225600&v=beta&t=64GpQ4z1C5n-G5dS1SybUbOhNnyaqNs7H7tU7Idk6Xg",
        description: "Evaluating Pio Esposito's statistical profile.",
        link: "https://www.linkedin.com/feed/update/urn:li:activity:7396944099284774912/",
    },
    GalleryItem {
        image: "https://media.licdn.com/dms/image/v2/D4D22AQHJEIUBg6ZSsA/feedshare-shrink_2048_1536/B4DZqCdWcjIgAw-/0/1763125324085?e=1767225600&v=beta&t=2lHHq7IMlw2rf28YGvH747Ec8B4TawqMZwoEYAD354E",
        description: "Breaking down the feature importance of a predictive model to identify \
            the key factors required for successful algorithmic betting strategies.",
        link: "https://www.linkedin.com/feed/update/urn:li:activity:7396090982636785664/",
    },
    GalleryItem {
        image: "https://media.licdn.com/dms/image/v2/D4D22AQGjqV_07SBwoA/feedshare-shrink_2048_1536/B4DZp42UXTGkAw-/0/1762964097565?e=1767225600&v=beta&t=4cuW4mdzG0phCFogWMQ-gRMNlBhrvxJuk0MBJd9Dh8Y",
        description: "Analyzing the Serie A standings by comparing actual points with Expected \
            Points to identify performance sustainability and anomalies across the league.",
        link: "https://www.linkedin.com/feed/update/urn:li:activity:7394407373567766528/",
    },
];

pub fn gallery_items() -> &'static [GalleryItem] {
    &GALLERY_ITEMS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gallery_has_nine_items() {
        assert_eq!(gallery_items().len(), 9);
    }

    #[test]
    fn every_item_links_to_a_post() {
        assert!(gallery_items()
            .iter()
            .all(|item| item.link.starts_with("https://www.linkedin.com/feed/update/")));
    }
}
