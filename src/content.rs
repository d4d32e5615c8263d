//! Static page content. Everything here is hand-authored literal data with
//! no runtime lifecycle; components render it as-is.

pub const OWNER_NAME: &str = "Joel Francis";
pub const OWNER_INITIALS: &str = "JF";
pub const CONTACT_EMAIL: &str = "joelfrancis9398@gmail.com";

/// Tech tags shown on a project card before collapsing into a "+n" marker.
pub const VISIBLE_TECH_TAGS: usize = 5;

#[derive(Clone, Copy, PartialEq)]
pub struct Project {
    pub title: &'static str,
    pub category: &'static str,
    pub problem: &'static str,
    pub approach: &'static str,
    pub role: &'static str,
    pub outcome: &'static str,
    pub technologies: &'static [&'static str],
    pub live_link: Option<&'static str>,
    pub github_link: Option<&'static str>,
    pub image: Option<&'static str>,
}

impl Project {
    /// Tags past this count are summarized rather than rendered.
    pub fn hidden_tech_count(&self) -> usize {
        self.technologies.len().saturating_sub(VISIBLE_TECH_TAGS)
    }
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "XTAZE",
        category: "Music Streaming Platform",
        problem: "Artists lack control and clear analytics on music platforms.",
        approach: "Built a MERN app with User, Artist, and Admin roles, secure auth, subscriptions, and cloud storage.",
        role: "Full Stack Developer — built backend APIs, payments, and frontend UI.",
        outcome: "Streaming platform with role-based access, artist analytics, admin controls, and premium downloads.",
        technologies: &[
            "TypeScript", "React", "Node.js", "Express", "MongoDB", "Stripe", "Redux", "AWS S3",
            "JWT",
        ],
        live_link: Some("https://xtaze.fun/"),
        github_link: Some("https://github.com/joelfrancis1122/Xtaze"),
        image: Some("/assets/xtaze.svg"),
    },
    Project {
        title: "BOOKSAW",
        category: "E-Commerce Book Store",
        problem: "Need for a smooth e-commerce flow with payments and admin control.",
        approach: "Built a server-rendered app with EJS, integrated payments, and an admin dashboard.",
        role: "Sole Developer — handled backend, frontend, and deployment.",
        outcome: "Live bookstore with orders, payments, admin analytics, and AWS deployment.",
        technologies: &[
            "Node.js", "Express", "EJS", "MongoDB", "Razorpay", "AWS EC2", "Nginx", "PM2",
        ],
        live_link: Some("https://booksaw.xtaze.fun/"),
        github_link: Some("https://github.com/joelfrancis1122/BOOKSAW"),
        image: Some("/assets/booksaw.svg"),
    },
];

#[derive(Clone, Copy, PartialEq)]
pub struct MiniProject {
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static str,
    pub link: &'static str,
}

pub const MINI_PROJECTS: &[MiniProject] = &[
    MiniProject {
        title: "User Management System",
        description: "MERN stack auth system with profile management and role-based access.",
        tech: "MongoDB · Express · React · Redux · Node.js",
        link: "https://github.com/joelfrancis1122/WebApplication",
    },
    MiniProject {
        title: "Netflix Clone",
        description: "Real-time streaming UI using TMDB API.",
        tech: "React · TMDB API",
        link: "https://github.com/joelfrancis1122/Netflix-Clone",
    },
    MiniProject {
        title: "OLX Clone",
        description: "Buy/sell marketplace with Firebase and Firestore.",
        tech: "React · Firebase · Firestore",
        link: "https://github.com/joelfrancis1122/olx-clone",
    },
    MiniProject {
        title: "Discord Store Landing",
        description: "Responsive landing page for Discord promotions.",
        tech: "HTML · CSS · JavaScript · Tailwind",
        link: "https://store-mirage.vercel.app/",
    },
];

#[derive(Clone, Copy, PartialEq)]
pub struct SkillGroup {
    pub title: &'static str,
    pub description: &'static str,
    pub bg: &'static str,
    pub skills: &'static [&'static str],
}

/// Two wide cards on the top row, three narrow ones below.
pub const TOP_SKILLS: &[SkillGroup] = &[
    SkillGroup {
        title: "Frontend",
        description: "Interfaces, motion, and interaction",
        bg: "#FFF86B",
        skills: &["React.js", "TypeScript", "Redux", "Tailwind CSS", "HTML/CSS"],
    },
    SkillGroup {
        title: "Backend",
        description: "APIs, auth, and data flow",
        bg: "#FF4D4D",
        skills: &["Node.js", "Express.js", "MongoDB", "JWT", "OAuth"],
    },
];

pub const BOTTOM_SKILLS: &[SkillGroup] = &[
    SkillGroup {
        title: "Cloud & DevOps",
        description: "Hosting, scaling, deployment",
        bg: "#5d9862",
        skills: &["AWS EC2", "S3", "Nginx", "PM2"],
    },
    SkillGroup {
        title: "Payments & APIs",
        description: "External services & integrations",
        bg: "#fea2e4",
        skills: &["Stripe", "Razorpay", "TMDB API", "YouTube API"],
    },
    SkillGroup {
        title: "Workflow",
        description: "How I actually build products",
        bg: "#0A84FF",
        skills: &["Git", "Clean Architecture", "Production Mindset"],
    },
];

#[derive(Clone, Copy, PartialEq)]
pub struct AboutTrait {
    pub title: &'static str,
    pub description: &'static str,
}

pub const ABOUT_TRAITS: &[AboutTrait] = &[
    AboutTrait {
        title: "Full Product Thinking",
        description: "I don't just write code — I think about the entire user journey, business logic, and scalability from day one.",
    },
    AboutTrait {
        title: "Builder Mentality",
        description: "I love taking ideas from zero to production. Creating complete systems excites me more than isolated features.",
    },
    AboutTrait {
        title: "Scale-First Approach",
        description: "Whether it's auth systems, payment flows, or real-time features — I architect for growth, not just MVP.",
    },
];

#[derive(Clone, Copy, PartialEq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "About", href: "#about" },
    NavLink { label: "Work", href: "#work" },
    NavLink { label: "Skills", href: "#skills" },
    NavLink { label: "Contact", href: "#contact" },
];

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ContactIcon {
    Mail,
    GitHub,
    LinkedIn,
}

#[derive(Clone, Copy, PartialEq)]
pub struct ContactLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: ContactIcon,
}

pub const CONTACT_LINKS: &[ContactLink] = &[
    ContactLink {
        label: "Email",
        href: "mailto:joelfrancis9398@gmail.com",
        icon: ContactIcon::Mail,
    },
    ContactLink {
        label: "GitHub",
        href: "https://github.com/joelfrancis1122",
        icon: ContactIcon::GitHub,
    },
    ContactLink {
        label: "LinkedIn",
        href: "https://linkedin.com/in/joelfrancis1122",
        icon: ContactIcon::LinkedIn,
    },
];

/// Site theme identifiers offered by the standalone switcher.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Theme {
    Jungle,
    Moon,
    Light,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Jungle, Theme::Moon, Theme::Light];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Jungle => "jungle",
            Self::Moon => "moon",
            Self::Light => "light",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "jungle" => Some(Self::Jungle),
            "moon" => Some(Self::Moon),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Jungle => "/jungle-theme",
            Self::Moon => "/moon-theme",
            Self::Light => "/light-theme",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Self::Jungle => "🌴",
            Self::Moon => "🌝",
            Self::Light => "🤍",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_project_field_is_populated_for_the_featured_pair() {
        assert_eq!(PROJECTS.len(), 2);
        for project in PROJECTS {
            assert!(project.live_link.is_some());
            assert!(project.github_link.is_some());
            assert!(project.image.is_some());
            assert!(!project.technologies.is_empty());
        }
    }

    #[test]
    fn optional_fields_can_be_absent_independently() {
        let mut bare = PROJECTS[0];
        bare.image = None;
        bare.live_link = None;

        assert!(bare.image.is_none());
        assert!(bare.live_link.is_none());
        // Dropping one optional field leaves its siblings untouched.
        assert_eq!(bare.github_link, PROJECTS[0].github_link);
        assert_eq!(bare.technologies, PROJECTS[0].technologies);
    }

    #[test]
    fn tech_tag_overflow_counts_only_past_the_visible_cap() {
        let xtaze = &PROJECTS[0];
        assert!(xtaze.technologies.len() > VISIBLE_TECH_TAGS);
        assert_eq!(
            xtaze.hidden_tech_count(),
            xtaze.technologies.len() - VISIBLE_TECH_TAGS
        );

        let mut small = PROJECTS[1];
        small.technologies = &["Rust"];
        assert_eq!(small.hidden_tech_count(), 0);
    }

    #[test]
    fn nav_links_target_in_page_anchors() {
        assert_eq!(NAV_LINKS.len(), 4);
        for link in NAV_LINKS {
            assert!(link.href.starts_with('#'), "{} is not an anchor", link.href);
        }
    }

    #[test]
    fn contact_links_cover_mail_and_profiles() {
        assert!(CONTACT_LINKS[0].href.starts_with("mailto:"));
        assert!(CONTACT_LINKS
            .iter()
            .skip(1)
            .all(|link| link.href.starts_with("https://")));
    }

    #[test]
    fn mini_projects_all_link_out() {
        assert_eq!(MINI_PROJECTS.len(), 4);
        for mini in MINI_PROJECTS {
            assert!(mini.link.starts_with("https://"));
        }
    }

    #[test]
    fn skill_groups_declare_backgrounds_and_tags() {
        for group in TOP_SKILLS.iter().chain(BOTTOM_SKILLS) {
            assert!(group.bg.starts_with('#'));
            assert!(!group.skills.is_empty());
        }
        assert_eq!(TOP_SKILLS.len(), 2);
        assert_eq!(BOTTOM_SKILLS.len(), 3);
    }

    #[test]
    fn theme_identifiers_round_trip() {
        for theme in Theme::ALL {
            assert_eq!(Theme::from_str(theme.as_str()), Some(theme));
        }
        assert_eq!(Theme::from_str("solarized"), None);
    }
}
