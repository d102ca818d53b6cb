// Portfolio Datasets
// Four fixed, ordered record sequences plus the hero profile.
// Populated once at construction and never mutated afterwards.

use serde::{Deserialize, Serialize};

// ============================================================================
// RECORD SHAPES
// ============================================================================

/// A project shown under the "What I Built" tab
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub duration: String,
    /// Technology tags, in display order
    pub technologies: Vec<String>,
    pub description: String,
    pub impact: String,
    /// External URL, opened in a new browsing context
    pub link: String,
}

/// A skill shown under the "What I Learnt" tab
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Learning {
    pub title: String,
    pub source: String,
    pub skills: Vec<String>,
    pub description: String,
}

/// A topic shown under the "What I Taught" tab
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Teaching {
    pub title: String,
    pub audience: String,
    pub topics: Vec<String>,
    pub description: String,
}

/// One entry in the recommendations grid, linking a static PDF letter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub name: String,
    pub title: String,
    pub pdf_link: String,
}

/// Hero block data: name, tagline, and contact links
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub tagline: String,
    pub email: String,
    pub github: String,
    pub photo_url: String,
}

// ============================================================================
// PORTFOLIO DATA
// ============================================================================

/// All page content, built once and shared read-only by every front end.
///
/// The three tabbed datasets and the recommendations grid keep their
/// insertion order for the lifetime of the process.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioData {
    pub profile: Profile,
    pub projects: Vec<Project>,
    pub learnings: Vec<Learning>,
    pub teachings: Vec<Teaching>,
    pub recommendations: Vec<Recommendation>,
}

impl PortfolioData {
    pub fn new() -> Self {
        PortfolioData {
            profile: profile(),
            projects: projects(),
            learnings: learnings(),
            teachings: teachings(),
            recommendations: recommendations(),
        }
    }
}

impl Default for PortfolioData {
    fn default() -> Self {
        Self::new()
    }
}

fn profile() -> Profile {
    Profile {
        name: "Alexandra".to_string(),
        tagline: "Full-stack developer passionate about building impactful web \
                  applications. I learn by building, teach by sharing, and grow \
                  by contributing to the community."
            .to_string(),
        email: "alex@example.com".to_string(),
        github: "https://github.com".to_string(),
        photo_url: "https://cdn.poehali.dev/projects/6f8500c4-0dc8-4659-ba09-7c681d21699d/files/24768bf5-a728-45bc-a84a-dfb45f2e60a3.jpg".to_string(),
    }
}

fn projects() -> Vec<Project> {
    vec![
        Project {
            title: "Local Bookstore Marketplace".to_string(),
            duration: "3 months".to_string(),
            technologies: vec![
                "React".to_string(),
                "TypeScript".to_string(),
                "Stripe API".to_string(),
                "Firebase".to_string(),
            ],
            description: "Built an online marketplace connecting independent \
                          bookstores with local readers, with inventory \
                          management, search, and checkout."
                .to_string(),
            impact: "12 bookstores onboarded, 500+ orders in the first quarter".to_string(),
            link: "https://example.com/project1".to_string(),
        },
        Project {
            title: "AI Task Manager".to_string(),
            duration: "2 months".to_string(),
            technologies: vec![
                "Vue".to_string(),
                "TypeScript".to_string(),
                "OpenAI API".to_string(),
                "Firebase".to_string(),
            ],
            description: "Developed an intelligent task management app that uses \
                          AI to prioritize and suggest tasks based on user behavior."
                .to_string(),
            impact: "Improved user productivity by 40%".to_string(),
            link: "https://example.com/project2".to_string(),
        },
        Project {
            title: "Real-time Collaboration Tool".to_string(),
            duration: "4 months".to_string(),
            technologies: vec![
                "Angular".to_string(),
                "Next.js".to_string(),
                "WebSocket".to_string(),
                "PostgreSQL".to_string(),
            ],
            description: "Created a collaborative whiteboard application with \
                          real-time synchronization for remote teams."
                .to_string(),
            impact: "Used by 50+ organizations, featured in Product Hunt".to_string(),
            link: "https://example.com/project3".to_string(),
        },
    ]
}

fn learnings() -> Vec<Learning> {
    vec![
        Learning {
            title: "Advanced React Patterns".to_string(),
            source: "Kent C. Dodds Course + Personal Projects".to_string(),
            skills: vec![
                "Compound Components".to_string(),
                "Render Props".to_string(),
                "Hooks Optimization".to_string(),
                "Context API".to_string(),
            ],
            description: "Mastered advanced React patterns through online courses \
                          and implemented them in production applications, improving \
                          code reusability by 60%."
                .to_string(),
        },
        Learning {
            title: "System Design & Architecture".to_string(),
            source: "MIT OpenCourseWare + Real Projects".to_string(),
            skills: vec![
                "Microservices".to_string(),
                "Database Design".to_string(),
                "API Architecture".to_string(),
                "Scalability".to_string(),
            ],
            description: "Studied distributed systems theory and applied principles \
                          to design scalable applications handling 10K+ concurrent users."
                .to_string(),
        },
        Learning {
            title: "TypeScript & Type Safety".to_string(),
            source: "Self-taught + Open Source Contributions".to_string(),
            skills: vec![
                "Advanced Types".to_string(),
                "Generics".to_string(),
                "Type Guards".to_string(),
                "Utility Types".to_string(),
            ],
            description: "Deep-dived into TypeScript, contributing to type definitions \
                          for popular libraries and reducing runtime errors by 80% in \
                          my projects."
                .to_string(),
        },
    ]
}

fn teachings() -> Vec<Teaching> {
    vec![
        Teaching {
            title: "Web Development Bootcamp".to_string(),
            audience: "30+ students (ages 16-18)".to_string(),
            topics: vec![
                "HTML/CSS".to_string(),
                "JavaScript".to_string(),
                "React Basics".to_string(),
                "Git/GitHub".to_string(),
            ],
            description: "Organized and taught a 12-week bootcamp for high school \
                          students, with 90% of participants building and deploying \
                          their first web app."
                .to_string(),
        },
        Teaching {
            title: "Technical Writing & Documentation".to_string(),
            audience: "Open Source Community".to_string(),
            topics: vec![
                "API Documentation".to_string(),
                "Code Examples".to_string(),
                "Tutorials".to_string(),
                "Best Practices".to_string(),
            ],
            description: "Created comprehensive documentation for 5+ open-source \
                          projects, helping 1000+ developers integrate and contribute \
                          to the codebase."
                .to_string(),
        },
        Teaching {
            title: "Code Review Workshops".to_string(),
            audience: "Junior Developers".to_string(),
            topics: vec![
                "Clean Code".to_string(),
                "Design Patterns".to_string(),
                "Performance".to_string(),
                "Security".to_string(),
            ],
            description: "Led weekly code review sessions, mentoring 15+ junior \
                          developers on writing maintainable and efficient code."
                .to_string(),
        },
    ]
}

fn recommendations() -> Vec<Recommendation> {
    vec![
        Recommendation {
            name: "Dr. Sarah Johnson".to_string(),
            title: "Computer Science Professor, MIT".to_string(),
            pdf_link: "/recommendations/sarah-johnson.pdf".to_string(),
        },
        Recommendation {
            name: "Michael Chen".to_string(),
            title: "Senior Software Engineer, Google".to_string(),
            pdf_link: "/recommendations/michael-chen.pdf".to_string(),
        },
        Recommendation {
            name: "Emily Rodriguez".to_string(),
            title: "CTO, TechStartup Inc.".to_string(),
            pdf_link: "/recommendations/emily-rodriguez.pdf".to_string(),
        },
    ]
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_datasets_are_nonempty_and_fixed_size() {
        let data = PortfolioData::new();

        assert_eq!(data.projects.len(), 3);
        assert_eq!(data.learnings.len(), 3);
        assert_eq!(data.teachings.len(), 3);
        assert_eq!(data.recommendations.len(), 3);
    }

    #[test]
    fn test_first_project_record() {
        let data = PortfolioData::new();
        let first = &data.projects[0];

        assert_eq!(first.title, "Local Bookstore Marketplace");
        assert_eq!(
            first.technologies,
            vec!["React", "TypeScript", "Stripe API", "Firebase"]
        );
    }

    #[test]
    fn test_construction_is_deterministic() {
        // Two constructions must agree record for record
        let a = PortfolioData::new();
        let b = PortfolioData::new();

        assert_eq!(a.projects, b.projects);
        assert_eq!(a.learnings, b.learnings);
        assert_eq!(a.teachings, b.teachings);
        assert_eq!(a.recommendations, b.recommendations);
        assert_eq!(a.profile, b.profile);
    }

    #[test]
    fn test_recommendation_links_are_pdf_paths() {
        let data = PortfolioData::new();

        for rec in &data.recommendations {
            assert!(rec.pdf_link.starts_with("/recommendations/"));
            assert!(rec.pdf_link.ends_with(".pdf"));
        }
    }

    #[test]
    fn test_records_serialize_round_trip() {
        let data = PortfolioData::new();

        let json = serde_json::to_string(&data).unwrap();
        let back: PortfolioData = serde_json::from_str(&json).unwrap();

        assert_eq!(back.projects, data.projects);
        assert_eq!(back.recommendations, data.recommendations);
    }
}
