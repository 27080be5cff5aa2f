//! Terminal rendering for the navigable views.
//!
//! Each route maps to a block of display lines. Rendered pages are what
//! the navigator prints on a route change; they never enter the session
//! scrollback.

use folio_common::route::Route;

struct Experience {
    title: &'static str,
    company: &'static str,
    period: &'static str,
    kind: &'static str,
    description: &'static str,
    technologies: &'static [&'static str],
}

const EXPERIENCES: &[Experience] = &[
    Experience {
        title: "Junior Platform Engineer",
        company: "ODDS Team",
        period: "Apr 2025 - Present",
        kind: "Full-time",
        description: "DevSecOps practices, cloud infrastructure, and full-stack \
                      development for enterprise-scale data projects.",
        technologies: &[
            "Kubernetes",
            "Docker",
            "GitHub Actions",
            "Jenkins",
            "Proxmox",
            "Kong API Gateway",
        ],
    },
    Experience {
        title: "Data Scheduler Project",
        company: "ODDS Team",
        period: "2025",
        kind: "Project",
        description: "Data scheduler system orchestrating data science notebooks \
                      with Airflow, Next.js frontend and FastAPI backend.",
        technologies: &["Next.js", "Python FastAPI", "Apache Airflow", "Kubernetes"],
    },
    Experience {
        title: "Data Streaming Project",
        company: "ODDS Team",
        period: "2025",
        kind: "Project",
        description: "High-throughput CDC streaming over Kafka (300k+ messages \
                      per 15 minutes) with Golang aggregation consumers.",
        technologies: &["Debezium", "Kafka", "Golang", "CDC"],
    },
    Experience {
        title: "Legacy App Migration",
        company: "ODDS Team",
        period: "2025",
        kind: "Project",
        description: "Migrated legacy PHP applications to containerized \
                      environments on AWS.",
        technologies: &["AWS", "Docker", "PHP"],
    },
    Experience {
        title: "Software Engineer Intern",
        company: "ODDS Team",
        period: "Apr 2024 - Oct 2024",
        kind: "Internship",
        description: "Cross-functional Scrum team member contributing to \
                      multiple full-stack web applications.",
        technologies: &["Next.js", "Express.js", "Flutter", "Ruby on Rails", "Spring Boot"],
    },
];

/// Render the view for a route as display lines.
pub fn render(route: Route) -> Vec<String> {
    match route {
        Route::Home => home(),
        Route::About => about(),
        Route::Projects => projects(),
        Route::Experiences => experiences(),
        Route::Contact => contact(),
    }
}

fn home() -> Vec<String> {
    lines(&[
        "",
        "  Phongsaphak (Twan) Maneewong",
        "  Software Developer @ ODDS Team",
        "",
        "  Type \"help\" for available commands, or \"start\" for a quick tour.",
        "",
    ])
}

fn about() -> Vec<String> {
    lines(&[
        "",
        "  # About",
        "",
        "  Hello! I am Twan, a full-stack developer and platform engineer",
        "  based in Bangkok, Thailand. I love building scalable applications,",
        "  automating infrastructure, and exploring new technologies.",
        "",
        "  Tech stack:",
        "    Full-stack   Ruby on Rails, Next.js (TypeScript), Spring Boot, Flutter",
        "    AI/LLM       Gemini API, streaming completion SDKs",
        "    Data         Apache Airflow, Spark on Kubernetes, Debezium, Kafka",
        "    DevOps       Docker, Kubernetes, Proxmox, Jenkins, GitHub Actions",
        "    Cloud/Net    Cloudflare, Kong API Gateway, AWS",
        "",
    ])
}

fn projects() -> Vec<String> {
    lines(&[
        "",
        "  # Projects",
        "",
        "  This section is under construction — public write-ups are on the way.",
        "  In the meantime, see github.com/pongsaphakmw or run \"experiences\".",
        "",
    ])
}

fn experiences() -> Vec<String> {
    let mut out = lines(&["", "  # Experiences", ""]);
    for exp in EXPERIENCES {
        out.push(format!(
            "  {} @ {} ({}, {})",
            exp.title, exp.company, exp.period, exp.kind
        ));
        out.push(format!("    {}", exp.description));
        out.push(format!("    [{}]", exp.technologies.join(", ")));
        out.push(String::new());
    }
    out
}

fn contact() -> Vec<String> {
    lines(&[
        "",
        "  # Contact",
        "",
        "  Email   contact@example.com",
        "  GitHub  github.com/pongsaphakmw",
        "",
        "  Prefer email? POST /api/contact on the folio server sends a message",
        "  straight to my inbox.",
        "",
    ])
}

fn lines(src: &[&str]) -> Vec<String> {
    src.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_route_renders_something() {
        for route in Route::ALL {
            assert!(!render(route).is_empty(), "route {route}");
        }
    }

    #[test]
    fn experiences_page_lists_each_entry() {
        let text = render(Route::Experiences).join("\n");
        for exp in EXPERIENCES {
            assert!(text.contains(exp.title), "missing {}", exp.title);
        }
    }
}
