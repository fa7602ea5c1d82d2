//! Built-in resume content.

use crate::content::catalog::{
    About, Accent, Contact, ContactKind, ContactLink, ContentCatalog, HeroAction, HeroTarget,
    Highlight, Icon, Profile, Project, SkillCategory, Skills, TimelineEntry, TimelineKind,
};
use crate::model::section::SectionId;
use once_cell::sync::Lazy;

static BUILTIN_CATALOG: Lazy<ContentCatalog> = Lazy::new(build_catalog);

/// Returns the page content shipped with the crate.
pub fn builtin_catalog() -> &'static ContentCatalog {
    &BUILTIN_CATALOG
}

fn build_catalog() -> ContentCatalog {
    ContentCatalog {
        profile: Profile {
            name: "Prabath Ishanka",
            initials: "PI",
            headline: "Software Engineer",
            tagline: "Full-stack developer specializing in React.js, Node.js, and .NET Core. \
                      Building scalable solutions that make a difference.",
        },
        hero_actions: vec![
            HeroAction {
                label: Some("Get in Touch"),
                icon: Icon::Mail,
                target: HeroTarget::Link("mailto:prabath.ishanka1@gmail.com"),
            },
            HeroAction {
                label: Some("View Projects"),
                icon: Icon::Code,
                target: HeroTarget::Section(SectionId::Projects),
            },
            HeroAction {
                label: None,
                icon: Icon::ChevronDown,
                target: HeroTarget::Section(SectionId::About),
            },
        ],
        about: About {
            lead: "Results-oriented Software Engineer with 3+ years of experience in \
                   full-stack development.",
            body: "I specialize in building scalable web applications, API integrations, and \
                   automation tools that streamline business processes. With a strong \
                   background in agile development, debugging, and performance optimization, \
                   I'm passionate about delivering clean, efficient, and maintainable code.",
            highlights: vec![
                Highlight {
                    title: "Full-Stack Development",
                    detail: "React.js, Node.js, .NET Core",
                    icon: Icon::Code,
                    accent: Accent::Cyan,
                },
                Highlight {
                    title: "API Development",
                    detail: "RESTful APIs & Integrations",
                    icon: Icon::Server,
                    accent: Accent::Blue,
                },
            ],
        },
        timeline: vec![
            TimelineEntry {
                kind: TimelineKind::Employment,
                period: "January 2022 - Present",
                title: "Software Engineer",
                details: vec!["PBSS Group, Kelaniya, Sri Lanka"],
                bullets: vec![
                    "Develop and maintain ERP system modules across Finance, Inventory, \
                     Production, and Purchasing",
                    "Build and integrate RESTful APIs using full-stack development practices",
                    "Collaborate with teams to optimize performance and ensure quality",
                ],
                accent: Accent::Cyan,
            },
            TimelineEntry {
                kind: TimelineKind::Education,
                period: "01/2023 - 05/2024",
                title: "BSc (Hons) Computing Science",
                details: vec!["Software Engineering", "Kingston University"],
                bullets: vec![],
                accent: Accent::Blue,
            },
        ],
        skills: Skills {
            categories: vec![
                SkillCategory {
                    label: "Frontend",
                    icon: Icon::Code,
                    accent: Accent::Cyan,
                    items: vec![
                        "React.js",
                        "JavaScript (ES6+)",
                        "HTML5",
                        "CSS3",
                        "Bootstrap",
                        "Tailwind CSS",
                    ],
                },
                SkillCategory {
                    label: "Backend",
                    icon: Icon::Server,
                    accent: Accent::Blue,
                    items: vec!["Node.js", ".NET Core", "ASP.NET Core", "C#"],
                },
                SkillCategory {
                    label: "Database",
                    icon: Icon::Database,
                    accent: Accent::Purple,
                    items: vec!["SQL Server", "MySQL", "SAP HANA"],
                },
                SkillCategory {
                    label: "Tools & Platforms",
                    icon: Icon::Terminal,
                    accent: Accent::Green,
                    items: vec!["Git", "GitHub", "Bitbucket", "Postman", "Docker", "Nginx"],
                },
            ],
            practices: vec![
                "RESTful API Development",
                "Agile (Scrum)",
                "Debugging",
                "Code Review",
                "CI/CD",
                "Teamwork",
                "Problem-Solving",
            ],
        },
        projects: vec![
            Project {
                title: "Customer Portal Web App",
                description: "Built a comprehensive customer portal using React.js and Node.js \
                              to enhance customer feedback, scheduling, and banking workflows.",
                tech: vec!["React.js", "Node.js", "RESTful API"],
                impact: "Enhanced customer experience",
                accent: Accent::Cyan,
            },
            Project {
                title: "Excel-to-ERP Journal Entry Tool",
                description: "Developed an automation tool using .NET Core that converts Excel \
                              data into ERP journal entries, reducing manual effort.",
                tech: vec![".NET Core", "C#", "SQL Server"],
                impact: "Reduced manual processing time",
                accent: Accent::Blue,
            },
            Project {
                title: "ERP System Modules",
                description: "Developed and maintained critical modules across Finance, \
                              Inventory, Production, and Purchasing with RESTful APIs.",
                tech: vec!["Full-stack", "RESTful APIs", "Agile"],
                impact: "Improved system efficiency",
                accent: Accent::Purple,
            },
        ],
        contact: Contact {
            heading: "Get In Touch",
            intro: "I'm currently open to new opportunities and interesting projects. Whether \
                    you have a question or just want to say hi, feel free to reach out!",
            links: vec![
                ContactLink {
                    kind: ContactKind::Email,
                    label: "Email",
                    display: "prabath.ishanka1@gmail.com",
                    href: "mailto:prabath.ishanka1@gmail.com",
                    icon: Icon::Mail,
                    accent: Accent::Cyan,
                    opens_new_context: false,
                },
                ContactLink {
                    kind: ContactKind::Phone,
                    label: "Phone",
                    display: "+94 70 1448937",
                    href: "tel:+94701448937",
                    icon: Icon::Phone,
                    accent: Accent::Blue,
                    opens_new_context: false,
                },
                ContactLink {
                    kind: ContactKind::Profile,
                    label: "LinkedIn",
                    display: "prabath-ishanka0",
                    href: "https://linkedin.com/in/prabath-ishanka0",
                    icon: Icon::Linkedin,
                    accent: Accent::Purple,
                    opens_new_context: true,
                },
            ],
        },
        footer: "© 2024 Prabath Ishanka. Built with React & Tailwind CSS",
    }
}
