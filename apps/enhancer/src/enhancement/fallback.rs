//! Deterministic fallbacks: one canned resume per template, plus the fixed
//! improvement list.
//!
//! Built once on first use and shared read-only for the life of the process.
//! Lookups are keyed by template id only, never randomized.

use std::sync::LazyLock;

use crate::enhancement::models::{
    Contact, Education, EnhancedResume, Experience, Improvements, IMPROVEMENT_COUNT,
};

/// Returned whenever improvement analysis fails for any reason.
pub const FALLBACK_IMPROVEMENTS: [&str; IMPROVEMENT_COUNT] = [
    "Added quantifiable metrics and achievements to all experiences",
    "Strengthened action verbs and professional language throughout",
    "Optimized with ATS-friendly keywords for your industry",
    "Created compelling professional summary showcasing your value",
];

pub fn fallback_improvements() -> Improvements {
    FALLBACK_IMPROVEMENTS.map(String::from)
}

struct Canned {
    title: &'static str,
    phone: &'static str,
    summary: &'static str,
    role: &'static str,
    company: &'static str,
    duration: &'static str,
    description: &'static str,
    achievements: [&'static str; 2],
    degree: &'static str,
    school: &'static str,
    year: &'static str,
    skills: &'static [&'static str],
}

/// Indexed by `template_id - 1`.
const CANNED: [Canned; 4] = [
    Canned {
        title: "Senior Software Engineer",
        phone: "+1 555-0100",
        summary: "Results-driven software engineer with 5+ years building scalable applications. \
            Improved system performance by 40% and reduced deployment time by 60%.",
        role: "Senior Software Engineer",
        company: "Tech Corp",
        duration: "2020 - Present",
        description: "Led development of a microservices architecture serving 1M+ users",
        achievements: ["Reduced latency by 45%", "Implemented a CI/CD pipeline"],
        degree: "BS Computer Science",
        school: "Tech University",
        year: "2018",
        skills: &["React", "Node.js", "AWS", "Docker", "TypeScript"],
    },
    Canned {
        title: "Vice President of Engineering",
        phone: "+1 555-0200",
        summary: "Strategic technology executive with 15+ years driving digital transformation. \
            Led $10M+ initiatives resulting in 30% revenue growth.",
        role: "VP of Engineering",
        company: "Enterprise Corp",
        duration: "2018 - Present",
        description: "Oversee 50+ engineers across 5 departments, managing a $5M budget",
        achievements: [
            "Increased team productivity by 35%",
            "Reduced operational costs by $2M annually",
        ],
        degree: "MBA",
        school: "Business School",
        year: "2010",
        skills: &[
            "Strategic Planning",
            "Team Leadership",
            "Budget Management",
            "Digital Transformation",
        ],
    },
    Canned {
        title: "Product Designer & Developer",
        phone: "+1 555-0300",
        summary: "Creative technologist blending design and development. \
            Passionate about user-centric solutions and inventive digital experiences.",
        role: "Product Designer",
        company: "Design Studio",
        duration: "2019 - Present",
        description: "Design and develop intuitive user experiences for web and mobile",
        achievements: ["Won 2 design awards", "Increased user engagement by 50%"],
        degree: "BFA Design",
        school: "Art Institute",
        year: "2019",
        skills: &["UI/UX", "Figma", "React", "Creative Direction", "User Research"],
    },
    Canned {
        title: "Senior Business Analyst",
        phone: "+1 555-0400",
        summary: "Experienced business analyst with a proven record in process optimization and \
            stakeholder management. Strong focus on compliance and operational excellence.",
        role: "Senior Business Analyst",
        company: "Corporate Inc",
        duration: "2017 - Present",
        description: "Analyze business processes and implement improvements across departments",
        achievements: [
            "Streamlined operations saving 20% in costs",
            "Led an ISO certification project",
        ],
        degree: "BS Business Administration",
        school: "State University",
        year: "2017",
        skills: &[
            "Process Improvement",
            "Data Analysis",
            "Project Management",
            "Compliance",
            "SAP",
        ],
    },
];

static FALLBACK_TABLE: LazyLock<Vec<EnhancedResume>> =
    LazyLock::new(|| CANNED.iter().map(to_resume).collect());

fn to_resume(canned: &Canned) -> EnhancedResume {
    EnhancedResume {
        name: "Professional Name".to_string(),
        title: canned.title.to_string(),
        contact: Contact {
            email: "email@example.com".to_string(),
            phone: canned.phone.to_string(),
            ..Contact::default()
        },
        summary: canned.summary.to_string(),
        experience: vec![Experience {
            title: canned.role.to_string(),
            company: canned.company.to_string(),
            duration: canned.duration.to_string(),
            description: canned.description.to_string(),
            achievements: Some(canned.achievements.map(String::from).to_vec()),
        }],
        education: vec![Education {
            degree: canned.degree.to_string(),
            school: canned.school.to_string(),
            year: canned.year.to_string(),
            ..Education::default()
        }],
        skills: canned.skills.iter().map(|s| s.to_string()).collect(),
        projects: Some(Vec::new()),
        certifications: None,
        languages: None,
    }
}

/// The canned resume for `template_id`. Ids outside the table map to the
/// first entry.
pub fn fallback_resume(template_id: u32) -> EnhancedResume {
    let index = (template_id as usize).checked_sub(1).unwrap_or(0);
    FALLBACK_TABLE
        .get(index)
        .unwrap_or(&FALLBACK_TABLE[0])
        .clone()
}
