// SPDX-License-Identifier: MPL-2.0
//! Project showcase cards.

use super::{Document, RL_SLIDES, THESIS, THESIS_SLIDES, TWEETS_SLIDES};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectStatus {
    Ongoing,
    Done,
}

impl ProjectStatus {
    pub fn i18n_key(self) -> &'static str {
        match self {
            ProjectStatus::Ongoing => "project-status-ongoing",
            ProjectStatus::Done => "project-status-done",
        }
    }
}

/// What a project card offers when activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectAction {
    /// Opens the visualization gallery carousel.
    Gallery,
    /// Two downloadable documents side by side.
    Downloads {
        primary: Document,
        secondary: Document,
    },
    /// A source repository and a downloadable document.
    CodeAndDocument {
        repository: &'static str,
        document: Document,
    },
    /// A source repository and the post announcing it.
    CodeAndPost {
        repository: &'static str,
        post: &'static str,
    },
}

impl ProjectAction {
    /// Documents this action can download, in display order.
    pub fn documents(&self) -> Vec<Document> {
        match *self {
            ProjectAction::Gallery | ProjectAction::CodeAndPost { .. } => Vec::new(),
            ProjectAction::Downloads { primary, secondary } => vec![primary, secondary],
            ProjectAction::CodeAndDocument { document, .. } => vec![document],
        }
    }
}

#[derive(Debug)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub status: ProjectStatus,
    pub image: &'static str,
    pub action: ProjectAction,
}

static PROJECTS: [Project; 7] = [
    Project {
        title: "Visualization Gallery",
        description: "A collection of data visualizations and insights from my latest work in \
            sports analytics, featuring deep dives into match statistics and player performance \
            metrics published on LinkedIn.",
        tags: &["Data Viz", "Football Analytics", "Insights"],
        status: ProjectStatus::Ongoing,
        image: "https://i.postimg.cc/zXqx8wMh/dl-beatsnoop-com-3000-d-Vy-Si7BHwg-modified.jpg",
        action: ProjectAction::Gallery,
    },
    Project {
        title: "Master Thesis: Shot Dominance",
        description: "Developed a predictive model to forecast shot dominance in football \
            matches. Engineered a robust data pipeline using R for scraping and Python for \
            cleaning and standardizing disparate data sources.",
        tags: &["R", "Python", "Predictive Modeling"],
        status: ProjectStatus::Done,
        image: "https://i.postimg.cc/KYPpw1zN/dl-beatsnoop-com-3000-Fj-Xqbop-Gg-I-modified.jpg",
        action: ProjectAction::Downloads {
            primary: THESIS,
            secondary: THESIS_SLIDES,
        },
    },
    Project {
        title: "ML Predictor for Over/Under 2.5",
        description: "Engineered a LightGBM Classifier using 9-year historical Fbref data. \
            Implemented rigorous backtesting with Monte Carlo simulations to validate model \
            stability against market volatility.",
        tags: &["LightGBM", "Monte Carlo", "Sports Betting"],
        status: ProjectStatus::Done,
        image: "https://i.postimg.cc/rsM0VFSS/dl-beatsnoop-com-3000-90TRnv-Ewi7-modified.jpg",
        action: ProjectAction::CodeAndPost {
            repository: "https://github.com/AntonioWolf01/football-ou2.5-predictor",
            post: "https://www.linkedin.com/feed/update/urn:li:activity:7392470950207807488/",
        },
    },
    Project {
        title: "Reinforcement Learning Agent",
        description: "Developed a custom OpenAI Gym environment to train a Q-Learning Blackjack \
            agent using Linear Function Approximation. Achieved -49% win rate over 1M episodes \
            via binary encoding optimization.",
        tags: &["OpenAI Gym", "Q-Learning", "Python"],
        status: ProjectStatus::Done,
        image: "https://i.postimg.cc/HLWTkcKg/dl-beatsnoop-com-3000-HVyve-Lkw-UA-modified.jpg",
        action: ProjectAction::CodeAndDocument {
            repository: "https://github.com/AntonioWolf01/BlackJack---RL",
            document: RL_SLIDES,
        },
    },
    Project {
        title: "Trump Tweet Emotion Analysis",
        description: "Analyzed the emotional content of Donald Trump's tweets using Natural \
            Language Processing techniques. Implemented sentiment classification to detect \
            distinct emotional patterns and visualize trends over time.",
        tags: &["Python", "NLP", "Sentiment Analysis"],
        status: ProjectStatus::Done,
        image: "https://i.postimg.cc/GmymqvGc/dl-beatsnoop-com-3000-4F2Tso-DG5X-modified.jpg",
        action: ProjectAction::CodeAndDocument {
            repository: "https://github.com/AntonioWolf01/trump-tweet-emotion-analysis",
            document: TWEETS_SLIDES,
        },
    },
    Project {
        title: "Fbref Match Logs Scraper",
        description: "Developed a comprehensive scraping tool to extract detailed match \
            statistics from Fbref. Automated data collection for advanced football metrics, \
            facilitating in-depth analysis and model training.",
        tags: &["Python", "Web Scraping", "Data Engineering"],
        status: ProjectStatus::Done,
        image: "https://i.postimg.cc/FKxdVjXq/dl-beatsnoop-com-3000-v-ODm-HYVT8q-modified.jpg",
        action: ProjectAction::CodeAndPost {
            repository: "https://github.com/AntonioWolf01/fbref-match-logs-scraper",
            post: "https://www.linkedin.com/feed/update/urn:li:activity:7393977061280989184/",
        },
    },
    Project {
        title: "xPoints Calculator",
        description: "A Streamlit web application that calculates Expected Points (xPoints) for \
            football matches based on Expected Goals (xG) data. Utilizes Monte Carlo simulations \
            to provide probabilistic outcome estimates.",
        tags: &["Python", "Streamlit", "Sports Analytics"],
        status: ProjectStatus::Done,
        image: "https://i.postimg.cc/QNzb7rbG/dl-beatsnoop-com-3000-Ggcwdzi-Qf-M-modified.jpg",
        action: ProjectAction::CodeAndPost {
            repository: "https://github.com/AntonioWolf01/xPoints-Calculator",
            post: "https://www.linkedin.com/feed/update/urn:li:activity:7273007167845122048/",
        },
    },
];

pub fn projects() -> &'static [Project] {
    &PROJECTS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_one_project_opens_the_gallery() {
        let count = projects()
            .iter()
            .filter(|p| p.action == ProjectAction::Gallery)
            .count();
        assert_eq!(count, 1);
    }

    #[test]
    fn thesis_offers_both_documents() {
        let thesis = &projects()[1];
        assert_eq!(thesis.action.documents(), vec![THESIS, THESIS_SLIDES]);
    }

    #[test]
    fn repositories_point_to_github() {
        for project in projects() {
            match project.action {
                ProjectAction::CodeAndDocument { repository, .. }
                | ProjectAction::CodeAndPost { repository, .. } => {
                    assert!(repository.starts_with("https://github.com/"));
                }
                _ => {}
            }
        }
    }
}
