// Card Views + Content Dispatcher
// One generic record -> card projection shared by all three tabbed
// datasets, and the pure dispatch from the active tab to its card list.

use serde::{Deserialize, Serialize};

use crate::data::{Learning, PortfolioData, Project, Teaching};
use crate::tabs::Tab;

// ============================================================================
// CARD VIEW DESCRIPTOR
// ============================================================================

/// Rendered form of one record: heading, metadata line, body text, tag
/// badges, and an optional outbound link.
///
/// Field order and tag order mirror the source record exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub heading: String,
    /// Metadata line under the heading (duration, source, or audience)
    pub subline: String,
    pub description: String,
    /// Highlighted impact note; only project cards carry one
    pub impact: Option<String>,
    /// Label above the tag list ("Technologies:", "Key Skills Acquired:", ...)
    pub tag_label: String,
    pub tags: Vec<String>,
    /// External URL opened in a new browsing context; only project cards carry one
    pub link: Option<String>,
}

/// Capability set a record needs to be displayed as a card.
pub trait CardSource {
    fn heading(&self) -> &str;
    fn subline(&self) -> &str;
    fn description(&self) -> &str;
    fn impact(&self) -> Option<&str> {
        None
    }
    fn tag_label(&self) -> &'static str;
    fn tags(&self) -> &[String];
    fn link(&self) -> Option<&str> {
        None
    }
}

impl Card {
    /// Project one record into its card view. Pure field mapping, no
    /// computation.
    pub fn from_source<S: CardSource>(source: &S) -> Self {
        Card {
            heading: source.heading().to_string(),
            subline: source.subline().to_string(),
            description: source.description().to_string(),
            impact: source.impact().map(str::to_string),
            tag_label: source.tag_label().to_string(),
            tags: source.tags().to_vec(),
            link: source.link().map(str::to_string),
        }
    }
}

impl CardSource for Project {
    fn heading(&self) -> &str {
        &self.title
    }

    fn subline(&self) -> &str {
        &self.duration
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn impact(&self) -> Option<&str> {
        Some(&self.impact)
    }

    fn tag_label(&self) -> &'static str {
        "Technologies:"
    }

    fn tags(&self) -> &[String] {
        &self.technologies
    }

    fn link(&self) -> Option<&str> {
        Some(&self.link)
    }
}

impl CardSource for Learning {
    fn heading(&self) -> &str {
        &self.title
    }

    fn subline(&self) -> &str {
        &self.source
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn tag_label(&self) -> &'static str {
        "Key Skills Acquired:"
    }

    fn tags(&self) -> &[String] {
        &self.skills
    }
}

impl CardSource for Teaching {
    fn heading(&self) -> &str {
        &self.title
    }

    fn subline(&self) -> &str {
        &self.audience
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn tag_label(&self) -> &'static str {
        "Topics Covered:"
    }

    fn tags(&self) -> &[String] {
        &self.topics
    }
}

// ============================================================================
// CONTENT DISPATCHER
// ============================================================================

/// Map the active tab to its dataset's card list, preserving insertion
/// order.
///
/// Total over the closed `Tab` enumeration; an empty dataset yields an
/// empty list.
pub fn cards_for(tab: Tab, data: &PortfolioData) -> Vec<Card> {
    match tab {
        Tab::Built => data.projects.iter().map(Card::from_source).collect(),
        Tab::Learnt => data.learnings.iter().map(Card::from_source).collect(),
        Tab::Taught => data.teachings.iter().map(Card::from_source).collect(),
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_built_tab_renders_exactly_the_projects() {
        let data = PortfolioData::new();
        let cards = cards_for(Tab::Built, &data);

        assert_eq!(cards.len(), data.projects.len());
        for (card, project) in cards.iter().zip(&data.projects) {
            assert_eq!(card.heading, project.title);
            assert_eq!(card.subline, project.duration);
            assert_eq!(card.description, project.description);
            assert_eq!(card.impact.as_deref(), Some(project.impact.as_str()));
            assert_eq!(card.tags, project.technologies);
            assert_eq!(card.link.as_deref(), Some(project.link.as_str()));
        }
    }

    #[test]
    fn test_learnt_tab_renders_exactly_the_learnings() {
        let data = PortfolioData::new();
        let cards = cards_for(Tab::Learnt, &data);

        assert_eq!(cards.len(), data.learnings.len());
        for (card, learning) in cards.iter().zip(&data.learnings) {
            assert_eq!(card.heading, learning.title);
            assert_eq!(card.subline, learning.source);
            assert_eq!(card.tags, learning.skills);
            assert_eq!(card.impact, None);
            assert_eq!(card.link, None);
        }
    }

    #[test]
    fn test_taught_tab_renders_exactly_the_teachings() {
        let data = PortfolioData::new();
        let cards = cards_for(Tab::Taught, &data);

        assert_eq!(cards.len(), data.teachings.len());
        for (card, teaching) in cards.iter().zip(&data.teachings) {
            assert_eq!(card.heading, teaching.title);
            assert_eq!(card.subline, teaching.audience);
            assert_eq!(card.tags, teaching.topics);
            assert_eq!(card.impact, None);
            assert_eq!(card.link, None);
        }
    }

    #[test]
    fn test_no_cross_tab_leakage() {
        let data = PortfolioData::new();

        let built: Vec<String> = cards_for(Tab::Built, &data)
            .into_iter()
            .map(|c| c.heading)
            .collect();
        let learnt: Vec<String> = cards_for(Tab::Learnt, &data)
            .into_iter()
            .map(|c| c.heading)
            .collect();
        let taught: Vec<String> = cards_for(Tab::Taught, &data)
            .into_iter()
            .map(|c| c.heading)
            .collect();

        for heading in &built {
            assert!(!learnt.contains(heading));
            assert!(!taught.contains(heading));
        }
        for heading in &learnt {
            assert!(!taught.contains(heading));
        }
    }

    #[test]
    fn test_dispatch_is_idempotent_across_tab_cycles() {
        let data = PortfolioData::new();

        let first = cards_for(Tab::Built, &data);

        // built -> learnt -> taught -> built
        let mut tab = Tab::Built;
        tab = tab.next();
        let _ = cards_for(tab, &data);
        tab = tab.next();
        let _ = cards_for(tab, &data);
        tab = tab.next();

        assert_eq!(tab, Tab::Built);
        assert_eq!(cards_for(tab, &data), first);
    }

    #[test]
    fn test_first_project_card_scenario() {
        let data = PortfolioData::new();
        let cards = cards_for(Tab::Built, &data);

        let first = &cards[0];
        assert_eq!(first.heading, "Local Bookstore Marketplace");
        assert_eq!(
            first.tags,
            vec!["React", "TypeScript", "Stripe API", "Firebase"]
        );
    }

    #[test]
    fn test_tags_preserved_exactly() {
        let data = PortfolioData::new();

        for (card, project) in cards_for(Tab::Built, &data).iter().zip(&data.projects) {
            assert_eq!(card.tags.len(), project.technologies.len());
            for (tag, tech) in card.tags.iter().zip(&project.technologies) {
                assert_eq!(tag, tech);
            }
        }
    }

    #[test]
    fn test_empty_dataset_produces_empty_card_list() {
        let mut data = PortfolioData::new();
        data.learnings.clear();

        assert!(cards_for(Tab::Learnt, &data).is_empty());
        // Other tabs unaffected
        assert_eq!(cards_for(Tab::Built, &data).len(), data.projects.len());
    }

    #[test]
    fn test_tag_labels_per_dataset() {
        let data = PortfolioData::new();

        assert_eq!(cards_for(Tab::Built, &data)[0].tag_label, "Technologies:");
        assert_eq!(
            cards_for(Tab::Learnt, &data)[0].tag_label,
            "Key Skills Acquired:"
        );
        assert_eq!(cards_for(Tab::Taught, &data)[0].tag_label, "Topics Covered:");
    }
}
