// SPDX-License-Identifier: MPL-2.0
//! Page geometry.
//!
//! Every section is a band of known height stacked from the top of the page,
//! and every animated [`Block`] inside a band has a known rectangle. Knowing
//! them lets the app turn a scroll viewport into per-block intersection
//! ratios without measuring widgets.

use crate::content;
use crate::ui::design_tokens::{sizing, spacing, typography};
use iced::{Point, Rectangle, Size};
use std::fmt;
use std::str::FromStr;

const HERO_HEIGHT: f32 = 760.0;
const ABOUT_HEIGHT: f32 = 860.0;
pub const EXPERIENCE_CARD_HEIGHT: f32 = 340.0;
const SKILLS_HEIGHT: f32 = 560.0;
const FOOTER_HEIGHT: f32 = 140.0;

/// Hero blocks top to bottom: headline, tagline, CV button, scroll hint.
pub const HERO_BLOCK_HEIGHTS: [f32; 4] = [2.0 * typography::DISPLAY * 1.3, 96.0, 56.0, 40.0];
pub const HERO_BLOCK_GAP: f32 = spacing::XL;
/// Biography column next to the portrait.
pub const ABOUT_TEXT_HEIGHT: f32 = 560.0;
pub const ABOUT_GAP: f32 = spacing::XXL;
pub const EXPERIENCE_COLUMN_WIDTH: f32 = 896.0;

/// Vertical padding above and below a section's content.
pub const SECTION_PADDING: f32 = 96.0;
/// Section heading plus the gap under it.
pub const HEADING_BLOCK: f32 = 112.0;

pub const CARD_GAP: f32 = spacing::XL;
const MAX_PROJECT_COLUMNS: usize = 3;
/// Skill cards fill the band under the heading.
pub const SKILL_CARD_HEIGHT: f32 = SKILLS_HEIGHT - 2.0 * SECTION_PADDING - HEADING_BLOCK;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Hero,
    About,
    Experience,
    Skills,
    Projects,
    Footer,
}

impl SectionId {
    /// Page order.
    pub const ALL: [SectionId; 6] = [
        SectionId::Hero,
        SectionId::About,
        SectionId::Experience,
        SectionId::Skills,
        SectionId::Projects,
        SectionId::Footer,
    ];

    /// Sections reachable from the navbar, in link order.
    pub const NAVIGABLE: [SectionId; 4] = [
        SectionId::About,
        SectionId::Experience,
        SectionId::Skills,
        SectionId::Projects,
    ];

    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// i18n key of the navbar link.
    #[must_use]
    pub fn nav_key(self) -> &'static str {
        match self {
            SectionId::Hero => "nav-home",
            SectionId::About => "nav-about",
            SectionId::Experience => "nav-experience",
            SectionId::Skills => "nav-skills",
            SectionId::Projects => "nav-projects",
            SectionId::Footer => "nav-contact",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SectionId::Hero => "hero",
            SectionId::About => "about",
            SectionId::Experience => "experience",
            SectionId::Skills => "skills",
            SectionId::Projects => "projects",
            SectionId::Footer => "footer",
        };
        f.write_str(name)
    }
}

impl FromStr for SectionId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionId::NAVIGABLE
            .into_iter()
            .find(|section| section.to_string().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!("unknown section '{s}', expected about, experience, skills or projects")
            })
    }
}

/// A block that fades in on its own once enough of it is on screen.
///
/// Indices refer to the position of the item in its content list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Block {
    /// Line of the hero column, `0..HERO_BLOCK_HEIGHTS.len()`.
    Hero(usize),
    Portrait,
    Biography,
    /// Title of a section that has one.
    Heading(SectionId),
    Experience(usize),
    Skill(usize),
    Project(usize),
}

impl Block {
    /// Every block of the page, top to bottom.
    #[must_use]
    pub fn all() -> Vec<Block> {
        let mut blocks: Vec<Block> = (0..HERO_BLOCK_HEIGHTS.len()).map(Block::Hero).collect();
        blocks.extend([Block::Portrait, Block::Biography]);
        blocks.push(Block::Heading(SectionId::Experience));
        blocks.extend((0..content::experiences().len()).map(Block::Experience));
        blocks.push(Block::Heading(SectionId::Skills));
        blocks.extend((0..content::skill_groups().len()).map(Block::Skill));
        blocks.push(Block::Heading(SectionId::Projects));
        blocks.extend((0..content::projects().len()).map(Block::Project));
        blocks
    }

    #[must_use]
    pub fn section(self) -> SectionId {
        match self {
            Block::Hero(_) => SectionId::Hero,
            Block::Portrait | Block::Biography => SectionId::About,
            Block::Heading(section) => section,
            Block::Experience(_) => SectionId::Experience,
            Block::Skill(_) => SectionId::Skills,
            Block::Project(_) => SectionId::Projects,
        }
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Block::Hero(line) => write!(f, "hero line {line}"),
            Block::Portrait => f.write_str("portrait"),
            Block::Biography => f.write_str("biography"),
            Block::Heading(section) => write!(f, "{section} heading"),
            Block::Experience(index) => write!(f, "experience card {index}"),
            Block::Skill(index) => write!(f, "skill card {index}"),
            Block::Project(index) => write!(f, "project card {index}"),
        }
    }
}

/// Section bands for a given window width.
#[derive(Debug, Clone, PartialEq)]
pub struct PageLayout {
    width: f32,
    project_columns: usize,
    heights: [f32; SectionId::ALL.len()],
}

impl PageLayout {
    #[must_use]
    pub fn new(width: f32) -> Self {
        let width = width.max(0.0);
        let project_columns = project_columns_for(width);
        let project_rows = content::projects().len().div_ceil(project_columns) as f32;
        let experience_count = content::experiences().len() as f32;

        let experience = 2.0 * SECTION_PADDING
            + HEADING_BLOCK
            + experience_count * EXPERIENCE_CARD_HEIGHT
            + (experience_count - 1.0).max(0.0) * CARD_GAP;
        let projects = 2.0 * SECTION_PADDING
            + HEADING_BLOCK
            + project_rows * sizing::PROJECT_CARD_HEIGHT
            + (project_rows - 1.0).max(0.0) * CARD_GAP;

        Self {
            width,
            project_columns,
            heights: [
                HERO_HEIGHT,
                ABOUT_HEIGHT,
                experience,
                SKILLS_HEIGHT,
                projects,
                FOOTER_HEIGHT,
            ],
        }
    }

    #[must_use]
    pub fn width(&self) -> f32 {
        self.width
    }

    #[must_use]
    pub fn project_columns(&self) -> usize {
        self.project_columns
    }

    #[must_use]
    pub fn height_of(&self, section: SectionId) -> f32 {
        self.heights[section.index()]
    }

    /// Distance from the top of the page to the section's first pixel.
    #[must_use]
    pub fn top_of(&self, section: SectionId) -> f32 {
        self.heights[..section.index()].iter().sum()
    }

    #[must_use]
    pub fn bounds_of(&self, section: SectionId) -> Rectangle {
        Rectangle::new(
            Point::new(0.0, self.top_of(section)),
            Size::new(self.width, self.height_of(section)),
        )
    }

    #[must_use]
    pub fn total_height(&self) -> f32 {
        self.heights.iter().sum()
    }

    /// Width of the content column for this window.
    #[must_use]
    pub fn content_width(&self) -> f32 {
        (self.width - 2.0 * spacing::LG).clamp(0.0, sizing::CONTENT_MAX_WIDTH)
    }

    /// Where `block` sits on the page, or `None` if this layout does not
    /// render it.
    #[must_use]
    pub fn block_bounds(&self, block: Block) -> Option<Rectangle> {
        let inner = self.content_width();
        let centered = |width: f32, y: f32, height: f32| {
            Rectangle::new(
                Point::new(((self.width - width) / 2.0).max(0.0), y),
                Size::new(width, height),
            )
        };
        let below_heading = |section: SectionId| self.top_of(section) + SECTION_PADDING + HEADING_BLOCK;

        match block {
            Block::Hero(line) => {
                let height = *HERO_BLOCK_HEIGHTS.get(line)?;
                let stack: f32 = HERO_BLOCK_HEIGHTS.iter().sum::<f32>()
                    + HERO_BLOCK_GAP * (HERO_BLOCK_HEIGHTS.len() - 1) as f32;
                let area = HERO_HEIGHT - sizing::NAVBAR_HEIGHT;
                let above: f32 = HERO_BLOCK_HEIGHTS[..line]
                    .iter()
                    .map(|h| h + HERO_BLOCK_GAP)
                    .sum();
                let y = sizing::NAVBAR_HEIGHT + ((area - stack) / 2.0).max(0.0) + above;
                Some(centered(inner, y, height))
            }
            Block::Portrait | Block::Biography => {
                let band = self.top_of(SectionId::About);
                let left = ((self.width - inner) / 2.0).max(0.0);
                let portrait = sizing::PROFILE_IMAGE_WIDTH.min(inner);
                let (x, width, height) = if block == Block::Portrait {
                    (left, portrait, sizing::PROFILE_IMAGE_HEIGHT)
                } else {
                    let x = left + portrait + ABOUT_GAP;
                    (x, (left + inner - x).max(0.0), ABOUT_TEXT_HEIGHT)
                };
                let y = band + ((ABOUT_HEIGHT - height) / 2.0).max(0.0);
                Some(Rectangle::new(Point::new(x, y), Size::new(width, height)))
            }
            Block::Heading(SectionId::Experience | SectionId::Skills | SectionId::Projects) => {
                let section = block.section();
                Some(centered(
                    inner,
                    self.top_of(section) + SECTION_PADDING,
                    HEADING_BLOCK,
                ))
            }
            Block::Heading(_) => None,
            Block::Experience(index) => {
                if index >= content::experiences().len() {
                    return None;
                }
                let y = below_heading(SectionId::Experience)
                    + index as f32 * (EXPERIENCE_CARD_HEIGHT + CARD_GAP);
                Some(centered(
                    EXPERIENCE_COLUMN_WIDTH.min(inner),
                    y,
                    EXPERIENCE_CARD_HEIGHT,
                ))
            }
            Block::Skill(index) => {
                let count = content::skill_groups().len();
                if index >= count {
                    return None;
                }
                let card = ((inner - (count - 1) as f32 * CARD_GAP) / count as f32).max(0.0);
                let left = ((self.width - inner) / 2.0).max(0.0);
                Some(Rectangle::new(
                    Point::new(
                        left + index as f32 * (card + CARD_GAP),
                        below_heading(SectionId::Skills),
                    ),
                    Size::new(card, SKILL_CARD_HEIGHT),
                ))
            }
            Block::Project(index) => {
                if index >= content::projects().len() {
                    return None;
                }
                let columns = self.project_columns;
                let grid = columns as f32 * sizing::PROJECT_CARD_WIDTH
                    + (columns - 1) as f32 * CARD_GAP;
                let left = ((self.width - grid) / 2.0).max(0.0);
                let (row, column) = (index / columns, index % columns);
                Some(Rectangle::new(
                    Point::new(
                        left + column as f32 * (sizing::PROJECT_CARD_WIDTH + CARD_GAP),
                        below_heading(SectionId::Projects)
                            + row as f32 * (sizing::PROJECT_CARD_HEIGHT + CARD_GAP),
                    ),
                    Size::new(sizing::PROJECT_CARD_WIDTH, sizing::PROJECT_CARD_HEIGHT),
                ))
            }
        }
    }

    /// Scroll offset that brings `section` under the navbar.
    #[must_use]
    pub fn scroll_target(&self, section: SectionId) -> f32 {
        (self.top_of(section) - sizing::NAVBAR_HEIGHT_COMPACT).max(0.0)
    }
}

/// The visible part of the page for a scroll offset and viewport size.
#[must_use]
pub fn viewport_rect(offset_y: f32, viewport: Size) -> Rectangle {
    Rectangle::new(Point::new(0.0, offset_y.max(0.0)), viewport)
}

fn project_columns_for(width: f32) -> usize {
    let slot = sizing::PROJECT_CARD_WIDTH + CARD_GAP;
    let fit = ((width - 2.0 * spacing::LG + CARD_GAP) / slot).floor();
    if fit.is_nan() || fit < 1.0 {
        1
    } else {
        (fit as usize).min(MAX_PROJECT_COLUMNS)
    }
}
