//! Static content catalog - bundled defaults for every content kind
//!
//! Pure data, no behavior. The resolver hands these out unchanged whenever
//! the remote store is unreachable, unconfigured, or returns no rows for a
//! kind, so the public site always has something meaningful to render.
//! Every kind has exactly one default set and none of them are empty.

use crate::content::display::{
    compose_gradient, ContactCopy, Experience, FormPlaceholders, Icon, Profile, Project, Skill,
    SocialLink, Stat, TechCategory,
};

pub fn profile() -> Profile {
    Profile {
        name: "Avery".into(),
        full_name: "Avery Chen".into(),
        title: "Software Developer".into(),
        tagline: "Crafting digital experiences where design meets engineering".into(),
        email: "hello@averychen.dev".into(),
        location: "Remote".into(),
        bio: "I'm a developer who enjoys pushing the boundaries of web experiences. \
              My work sits at the intersection of design and code, where creativity \
              meets technical precision."
            .into(),
        extended_bio: "With several years of experience, I specialize in building \
                       immersive digital products that look sharp and perform well \
                       across devices."
            .into(),
    }
}

pub fn stats() -> Vec<Stat> {
    vec![
        Stat {
            value: "50+".into(),
            label: "Projects Completed".into(),
            gradient: "from-indigo-900/20 to-purple-900/10".into(),
            border: "border-indigo-500/20".into(),
            text_color: "text-indigo-400".into(),
        },
        Stat {
            value: "5+".into(),
            label: "Years Experience".into(),
            gradient: "from-purple-900/20 to-indigo-900/10".into(),
            border: "border-purple-500/20".into(),
            text_color: "text-purple-400".into(),
        },
        Stat {
            value: "15+".into(),
            label: "Happy Clients".into(),
            gradient: "from-indigo-900/20 to-purple-900/10".into(),
            border: "border-indigo-500/20".into(),
            text_color: "text-indigo-400".into(),
        },
    ]
}

pub fn experiences() -> Vec<Experience> {
    vec![
        Experience {
            year: "2024".into(),
            title: "Senior Full Stack Developer".into(),
            company: "TechCorp Inc.".into(),
            description: "Leading frontend architecture and mentoring junior developers".into(),
        },
        Experience {
            year: "2022".into(),
            title: "Frontend Engineer".into(),
            company: "StartupXYZ".into(),
            description: "Built scalable web applications with modern tooling".into(),
        },
        Experience {
            year: "2020".into(),
            title: "Web Developer".into(),
            company: "Digital Agency".into(),
            description: "Created interactive web experiences for clients".into(),
        },
        Experience {
            year: "2019".into(),
            title: "Junior Developer".into(),
            company: "First Company".into(),
            description: "Started the journey in web development".into(),
        },
    ]
}

pub fn skills() -> Vec<Skill> {
    vec![
        Skill {
            name: "Frontend Development".into(),
            level: 95,
            icon: Icon::Code2,
            color: compose_gradient("indigo-500", "blue-500"),
        },
        Skill {
            name: "UI/UX Design".into(),
            level: 88,
            icon: Icon::Palette,
            color: compose_gradient("purple-500", "pink-500"),
        },
        Skill {
            name: "Responsive Design".into(),
            level: 92,
            icon: Icon::Smartphone,
            color: compose_gradient("blue-500", "cyan-500"),
        },
        Skill {
            name: "Performance".into(),
            level: 90,
            icon: Icon::Zap,
            color: compose_gradient("yellow-500", "orange-500"),
        },
        Skill {
            name: "Backend & APIs".into(),
            level: 85,
            icon: Icon::Database,
            color: compose_gradient("green-500", "emerald-500"),
        },
        Skill {
            name: "DevOps & Cloud".into(),
            level: 82,
            icon: Icon::Cog,
            color: compose_gradient("orange-500", "red-500"),
        },
    ]
}

pub fn tech_categories() -> Vec<TechCategory> {
    vec![
        TechCategory {
            title: "Frontend".into(),
            icon: Icon::Code2,
            gradient: compose_gradient("indigo-500", "blue-500"),
            techs: ["React", "Next.js", "TypeScript", "Tailwind CSS"]
                .map(String::from)
                .to_vec(),
            order: 1,
        },
        TechCategory {
            title: "Backend".into(),
            icon: Icon::Database,
            gradient: compose_gradient("green-500", "emerald-500"),
            techs: ["Node.js", "Express.js"].map(String::from).to_vec(),
            order: 2,
        },
        TechCategory {
            title: "Database".into(),
            icon: Icon::Boxes,
            gradient: compose_gradient("blue-500", "cyan-500"),
            techs: ["PostgreSQL", "Prisma", "Redis"].map(String::from).to_vec(),
            order: 3,
        },
        TechCategory {
            title: "Authentication & Security".into(),
            icon: Icon::Shield,
            gradient: compose_gradient("yellow-500", "orange-500"),
            techs: ["JWT", "OAuth2"].map(String::from).to_vec(),
            order: 4,
        },
        TechCategory {
            title: "Testing".into(),
            icon: Icon::TestTube,
            gradient: compose_gradient("pink-500", "rose-500"),
            techs: ["Jest", "Testing Library", "Cypress"].map(String::from).to_vec(),
            order: 5,
        },
        TechCategory {
            title: "DevOps & Deployment".into(),
            icon: Icon::Cog,
            gradient: compose_gradient("orange-500", "red-500"),
            techs: ["Git", "Docker", "GitHub Actions", "AWS"].map(String::from).to_vec(),
            order: 6,
        },
    ]
}

pub fn projects() -> Vec<Project> {
    vec![
        Project {
            title: "AI-Powered Analytics Dashboard".into(),
            category: "SaaS Platform".into(),
            description: "Real-time analytics dashboard with AI-driven insights and \
                          predictive modeling for enterprise clients."
                .into(),
            tags: ["React", "TypeScript", "D3.js", "Node.js"].map(String::from).to_vec(),
            gradient: compose_gradient("blue-600", "cyan-600"),
            live_url: "#".into(),
            github_url: "#".into(),
        },
        Project {
            title: "Metaverse E-Commerce".into(),
            category: "Web3 Application".into(),
            description: "Immersive 3D shopping experience built with Three.js and \
                          blockchain integration for NFT collectibles."
                .into(),
            tags: ["Three.js", "Web3", "Solidity", "Next.js"].map(String::from).to_vec(),
            gradient: compose_gradient("purple-600", "pink-600"),
            live_url: "#".into(),
            github_url: "#".into(),
        },
        Project {
            title: "Motion Design System".into(),
            category: "Design System".into(),
            description: "Comprehensive component library with advanced animations and \
                          accessibility features for modern web apps."
                .into(),
            tags: ["React", "Motion", "Storybook", "Tailwind"].map(String::from).to_vec(),
            gradient: compose_gradient("indigo-600", "violet-600"),
            live_url: "#".into(),
            github_url: "#".into(),
        },
        Project {
            title: "Real-time Collaboration Tool".into(),
            category: "Productivity App".into(),
            description: "Collaborative workspace with live cursors, comments, and \
                          version control."
                .into(),
            tags: ["WebSockets", "React", "Canvas API", "Redis"].map(String::from).to_vec(),
            gradient: compose_gradient("emerald-600", "teal-600"),
            live_url: "#".into(),
            github_url: "#".into(),
        },
    ]
}

pub fn social_links() -> Vec<SocialLink> {
    vec![
        SocialLink {
            icon: Icon::Github,
            label: "GitHub".into(),
            href: "#".into(),
            color: "hover:text-gray-400".into(),
            username: "@averychen".into(),
        },
        SocialLink {
            icon: Icon::Linkedin,
            label: "LinkedIn".into(),
            href: "#".into(),
            color: "hover:text-blue-400".into(),
            username: "averychen".into(),
        },
        SocialLink {
            icon: Icon::Twitter,
            label: "Twitter".into(),
            href: "#".into(),
            color: "hover:text-sky-400".into(),
            username: "@averychen".into(),
        },
        SocialLink {
            icon: Icon::Mail,
            label: "Email".into(),
            href: "mailto:hello@averychen.dev".into(),
            color: "hover:text-indigo-400".into(),
            username: "hello@averychen.dev".into(),
        },
    ]
}

pub fn contact_copy() -> ContactCopy {
    ContactCopy {
        heading: "Let's Create Something Amazing".into(),
        description: "Have a project in mind? Let's discuss how we can bring your \
                      ideas to life with cutting-edge technology and creative design."
            .into(),
        form_placeholders: FormPlaceholders {
            name: "Your Name".into(),
            email: "Your Email".into(),
            message: "Tell me about your project...".into(),
        },
    }
}
