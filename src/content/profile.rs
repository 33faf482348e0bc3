// SPDX-License-Identifier: MPL-2.0
//! Owner profile, work experience and skill groups.

use super::{Document, RESUME};

#[derive(Debug)]
pub struct Profile {
    pub name: &'static str,
    pub role: &'static str,
    /// Words cycled by the hero rotator, in order.
    pub hero_words: &'static [&'static str],
    pub tagline: &'static str,
    pub bio: &'static [&'static str],
    pub image: &'static str,
    pub github: &'static str,
    pub linkedin: &'static str,
    pub email: &'static str,
    pub resume: Document,
}

#[derive(Debug)]
pub struct Experience {
    pub role: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub logo: &'static str,
    pub bullets: &'static [&'static str],
}

#[derive(Debug)]
pub struct SkillGroup {
    pub title: &'static str,
    pub skills: &'static [&'static str],
}

static PROFILE: Profile = Profile {
    name: "Antonio Lupo",
    role: "Data Scientist",
    hero_words: &["data", "stats", "machine learning", "football"],
    tagline: "Data Scientist & Analyst specialized in Football Analytics & Predictive Modeling. \
        I see data as the language of the pitch, and data science as the tool to interpret it.",
    bio: &[
        "I'm a Data Scientist who loves finding the story behind the numbers, especially when \
         those numbers belong to the sports world.",
        "I hold a Master's degree where I focused heavily on Sports Analytics and Predictive \
         Modeling. During my studies, I took a deep dive into the field through a specialized \
         course with Soccerment. There, I worked with complex event and tracking data to build \
         a model capable of predicting corner kicks. I carried that momentum into my thesis, \
         where I developed a Deep Learning model designed to forecast shot dominance in \
         football matches.",
        "Off the pitch, I've gained solid technical experience as a Data Analyst at Aesys Srl, \
         building Power BI dashboards and helping optimize Azure pipelines.",
        "My journey started in finance and economics. I earned my BSc at the University of \
         Bologna (including an exchange semester at Dickinson College in the US) and spent time \
         at Banca Mediolanum and the Riot Investment Society before fully shifting my sights to \
         data science.",
    ],
    image: "https://i.postimg.cc/L4rMfZrQ/Gemini-Generated-Image-1qmx0s1qmx0s1qmx.png",
    github: "https://github.com/AntonioWolf01",
    linkedin: "https://www.linkedin.com/in/antonio-lupo-64227920b/",
    email: "mailto:antoniolupuz@gmail.com",
    resume: RESUME,
};

static EXPERIENCES: [Experience; 2] = [
    Experience {
        role: "Data Analyst Intern",
        company: "Aesys S.r.l. (Remote)",
        period: "04/2025 - 06/2025",
        logo: "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcTrEbbc6yOjjugUVgXBQMwq_CMW2w7VIptPWQ&s",
        bullets: &[
            "Developed a sentiment analysis pipeline in Python to process 56,000+ tweets, \
             utilizing NLP techniques to quantify and visualize communication tone shifts.",
            "Optimized Azure cloud ETL pipelines, restructuring data flows to improve processing \
             scalability and reduce latency for large-scale datasets.",
            "Deployed interactive data visualization apps transforming raw unstructured data into \
             strategic insights for executive decision-making.",
        ],
    },
    Experience {
        role: "Financial Analyst Intern",
        company: "Banca Mediolanum S.p.A. (Bologna)",
        period: "10/2022 - 12/2022",
        logo: "https://s3-eu-west-1.amazonaws.com/tpd/logos/4bde7a5b0000640005069647/0x0.png",
        bullets: &[
            "Analyzed portfolio performance metrics to identify growth opportunities, directly \
             supporting senior advisors in wealth management strategies.",
            "Conducted market research and financial reporting, providing data-driven \
             recommendations for client asset allocation.",
        ],
    },
];

static SKILL_GROUPS: [SkillGroup; 3] = [
    SkillGroup {
        title: "Core Stack",
        skills: &["Python", "R", "SQL", "Git"],
    },
    SkillGroup {
        title: "Data Eng & Cloud",
        skills: &["Azure Cloud", "ETL Processes", "Web Scraping", "Power BI"],
    },
    SkillGroup {
        title: "Modeling & Analytics",
        skills: &[
            "Machine Learning",
            "Reinforcement Learning",
            "Statistical Analysis",
            "NLP",
        ],
    },
];

pub fn profile() -> &'static Profile {
    &PROFILE
}

/// Work experience, most recent first.
pub fn experiences() -> &'static [Experience] {
    &EXPERIENCES
}

pub fn skill_groups() -> &'static [SkillGroup] {
    &SKILL_GROUPS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hero_words_are_in_display_order() {
        assert_eq!(
            profile().hero_words,
            &["data", "stats", "machine learning", "football"]
        );
    }

    #[test]
    fn each_skill_group_lists_four_skills() {
        assert_eq!(skill_groups().len(), 3);
        assert!(skill_groups().iter().all(|group| group.skills.len() == 4));
    }

    #[test]
    fn experiences_have_bullets() {
        assert_eq!(experiences()[0].bullets.len(), 3);
        assert_eq!(experiences()[1].bullets.len(), 2);
    }

    #[test]
    fn email_is_a_mailto_link() {
        assert!(profile().email.starts_with("mailto:"));
    }
}
