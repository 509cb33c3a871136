//! Static page content
//!
//! Everything the portfolio displays. Plain data, no behaviour.

use crate::ui::icons;

pub const OWNER_NAME: &str = "Rukshan Amodya";
pub const OWNER_INITIAL: &str = "R";
pub const OWNER_TAGLINE: &str = "Software Engineer | AI Enthusiast | Tech Entrepreneur";
pub const OWNER_PITCH: &str = "I build scalable, intelligent, and impactful software solutions.";
pub const OWNER_EMAIL: &str = "hello@rukshan.dev";
pub const OWNER_LOCATION: &str = "Panadura, Sri Lanka";
pub const PORTRAIT_URL: &str = "/assets/rukshan-face2.png";
pub const CV_URL: &str = "/assets/rukshan-amodya-cv.pdf";

/// Sticker shown in the hero section, relative to the site root.
pub const HERO_STICKER_PATH: &str = "/animations/AnimatedSticker.tgs";

/// Self-hosted lottie-web build exposing the global `lottie` object.
pub const LOTTIE_SCRIPT_PATH: &str = "/vendor/lottie.min.js";

pub const ABOUT_PARAGRAPHS: [&str; 2] = [
    "Rukshan Amodya is a technology entrepreneur and senior software engineer passionate about \
     building scalable, intelligent digital systems. As the Founder of Coding Divers and \
     Co-Founder of Gravix, he leads ventures focused on transforming businesses through smart \
     technology and automation.",
    "Currently a Senior Software Engineer at PIRM Holdings (PVT) Ltd, Rukshan specializes in AI \
     integration, backend development, and cloud infrastructure. With deep expertise in domain \
     systems, full-stack development, and digital architecture, his mission is to make powerful \
     technology usable, reliable, and impactful for everyone.",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub name: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: [NavLink; 6] = [
    NavLink { name: "About", href: "#about" },
    NavLink { name: "Projects", href: "#projects" },
    NavLink { name: "Skills", href: "#skills" },
    NavLink { name: "Experience", href: "#experience" },
    NavLink { name: "Certifications", href: "#certifications" },
    NavLink { name: "Contact", href: "#contact" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub image: &'static str,
    pub live_url: &'static str,
    pub repo_url: &'static str,
}

pub const PROJECTS: [Project; 3] = [
    Project {
        title: "AI-Powered Analytics Dashboard",
        description: "A smart dashboard that uses AI to provide deep business insights and predictive analytics.",
        tags: &["React", "Node.js", "Python", "OpenAI"],
        image: "https://placehold.co/600x400/3b82f6/ffffff?text=Project+One",
        live_url: "#",
        repo_url: "#",
    },
    Project {
        title: "Smart Automation Platform",
        description: "Workflow automation for small businesses, connecting everyday tools with intelligent triggers.",
        tags: &["Laravel", "MySQL", "AWS", "LangChain"],
        image: "https://placehold.co/600x400/14b8a6/ffffff?text=Project+Two",
        live_url: "#",
        repo_url: "#",
    },
    Project {
        title: "Learning Management System",
        description: "A complete platform for online courses with progress tracking and live sessions.",
        tags: &["Next.js", "PostgreSQL", "Docker"],
        image: "https://placehold.co/600x400/6366f1/ffffff?text=Project+Three",
        live_url: "#",
        repo_url: "#",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub icon: &'static str,
    /// Tailwind text colour for the icon
    pub tint: &'static str,
}

pub const SKILLS: [Skill; 16] = [
    Skill { name: "JavaScript", icon: icons::CODE, tint: "text-yellow-500" },
    Skill { name: "Python", icon: icons::CODE, tint: "text-blue-500" },
    Skill { name: "PHP", icon: icons::CODE, tint: "text-indigo-400" },
    Skill { name: "TypeScript", icon: icons::CODE, tint: "text-blue-400" },
    Skill { name: "React", icon: icons::CPU, tint: "text-cyan-400" },
    Skill { name: "Node.js", icon: icons::CPU, tint: "text-green-500" },
    Skill { name: "Laravel", icon: icons::CPU, tint: "text-red-500" },
    Skill { name: "AWS", icon: icons::CLOUD, tint: "text-orange-500" },
    Skill { name: "Firebase", icon: icons::CLOUD, tint: "text-yellow-400" },
    Skill { name: "Docker", icon: icons::BRIEFCASE, tint: "text-blue-600" },
    Skill { name: "Git", icon: icons::GIT_BRANCH, tint: "text-slate-600" },
    Skill { name: "MySQL", icon: icons::DATABASE, tint: "text-blue-700" },
    Skill { name: "MongoDB", icon: icons::DATABASE, tint: "text-green-600" },
    Skill { name: "PostgreSQL", icon: icons::DATABASE, tint: "text-indigo-500" },
    Skill { name: "OpenAI API", icon: icons::CPU, tint: "text-teal-500" },
    Skill { name: "LangChain", icon: icons::LINK, tint: "text-purple-500" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Experience {
    pub role: &'static str,
    pub company: &'static str,
    pub date: &'static str,
    pub description: &'static str,
}

pub const EXPERIENCES: [Experience; 3] = [
    Experience {
        role: "Founder & CEO",
        company: "Coding Divers",
        date: "Present",
        description: "Leading a tech venture to build innovative software solutions and drive digital transformation for businesses.",
    },
    Experience {
        role: "Co-Founder",
        company: "Gravix",
        date: "Present",
        description: "Co-founding a startup focused on smart automation and intelligent systems to enhance business productivity.",
    },
    Experience {
        role: "Senior Software Engineer",
        company: "PIRM Holdings (PVT) Ltd",
        date: "Current Role",
        description: "Developing and maintaining backend systems, integrating AI models, and managing cloud infrastructure for enterprise-level applications.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Certification {
    pub title: &'static str,
    pub issuer: &'static str,
    pub date: &'static str,
    pub verification_url: &'static str,
    pub image: &'static str,
    pub skills: &'static [&'static str],
    /// Tailwind gradient stops for the card background
    pub gradient: &'static str,
}

pub const CERTIFICATIONS: [Certification; 4] = [
    Certification {
        title: "Getting Started with Cloud Ops",
        issuer: "AWS Educate",
        date: "Issued Jun 2024",
        verification_url: "https://www.credly.com/earner/earned/badge/d0624cdf-10ac-4cd6-a03f-eb9a200840e5",
        image: "/assets/aws-educate-getting-started-with-cloud-ops.png",
        skills: &["CloudFormation", "EC2", "IAM", "VPC", "DevOps"],
        gradient: "from-orange-500/20 to-orange-500/5",
    },
    Certification {
        title: "Getting Started with Compute",
        issuer: "AWS Educate",
        date: "Issued May 2024",
        verification_url: "https://www.credly.com/earner/earned/badge/f57acddc-646b-48c0-b3da-06bf8dd9fb36",
        image: "/assets/aws-educate-getting-started-with-compute.png",
        skills: &["EC2", "Lambda", "Elastic Beanstalk", "Containers"],
        gradient: "from-blue-500/20 to-blue-500/5",
    },
    Certification {
        title: "Getting Started with Databases",
        issuer: "AWS Educate",
        date: "Issued May 2024",
        verification_url: "https://www.credly.com/earner/earned/badge/f913010b-84f8-42f7-a898-959e8026de62",
        image: "/assets/aws-educate-getting-started-with-databases.png",
        skills: &["RDS", "DynamoDB", "Aurora", "Database Migration"],
        gradient: "from-green-500/20 to-green-500/5",
    },
    Certification {
        title: "Getting Started with Networking",
        issuer: "AWS Educate",
        date: "Issued Apr 2024",
        verification_url: "https://www.credly.com/earner/earned/badge/a39666da-567f-4cce-9828-19bfe4ff8062",
        image: "/assets/aws-educate-getting-started-with-networking.png",
        skills: &["VPC", "Route 53", "Direct Connect", "Load Balancing"],
        gradient: "from-purple-500/20 to-purple-500/5",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactLink {
    pub title: &'static str,
    pub handle: &'static str,
    pub icon: &'static str,
    pub url: &'static str,
}

pub const CONTACT_LINKS: [ContactLink; 3] = [
    ContactLink { title: "LinkedIn", handle: "rukshan-amodya", icon: icons::LINKEDIN, url: "https://www.linkedin.com/in/rukshan-amodya" },
    ContactLink { title: "GitHub", handle: "rukshanamodya", icon: icons::GITHUB, url: "https://github.com/rukshanamodya" },
    ContactLink { title: "Email", handle: OWNER_EMAIL, icon: icons::MAIL, url: "mailto:hello@rukshan.dev" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQS: [FaqEntry; 3] = [
    FaqEntry {
        question: "Which technologies do you mainly work with?",
        answer: "Mostly React/Next.js, Node.js, Python (Django/FastAPI) and Flutter. I pick whatever fits the project best.",
    },
    FaqEntry {
        question: "How is a project priced?",
        answer: "Pricing depends on complexity, timeline and features. After discussing your requirements I can give a fixed quote.",
    },
    FaqEntry {
        question: "Do you offer support after delivery?",
        answer: "Yes. Maintenance and updates are available after launch under a separate agreement.",
    },
];

/// Stagger step between cards in a grid, in milliseconds.
pub const CARD_STAGGER_MS: u32 = 100;

/// Reveal delay for the `index`-th card of a grid.
pub fn stagger_delay(index: usize) -> u32 {
    CARD_STAGGER_MS.saturating_mul(index as u32)
}
