//! Overview records shown on the pre-assessment screen.

use vetting_core::model::{Niche, NicheOverview};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| (*item).to_string()).collect()
}

pub(crate) fn build(niche: Niche) -> NicheOverview {
    match niche {
        Niche::BackendDev => NicheOverview::new(
            niche,
            "Backend Development",
            "As a Backend Developer at OnSwift, you'll architect and build robust server-side systems, APIs, and databases that power scalable applications and ensure data integrity.",
            strings(&[
                "Node.js, Python, or Java",
                "SQL and NoSQL databases",
                "REST and GraphQL APIs",
                "Cloud platforms (AWS, Azure, GCP)",
            ]),
            strings(&[
                "Design scalable system architectures",
                "Implement secure authentication and authorization",
                "Optimize database queries and performance",
                "Write comprehensive API documentation",
            ]),
            strings(&[
                "RESTful and GraphQL APIs",
                "Database schemas and migrations",
                "Server infrastructure and deployment",
                "Integration with third-party services",
            ]),
        ),
        Niche::Contentwriting => NicheOverview::new(
            niche,
            "Content Writing",
            "As a Content Writer at OnSwift, you'll craft clear, engaging, and SEO-friendly content that helps brands connect with their audiences across digital platforms.",
            strings(&[
                "SEO and keyword tools",
                "Content management systems",
                "Grammar and readability apps",
                "Editorial planning tools",
            ]),
            strings(&[
                "Write audience-focused, on-brand content",
                "Apply SEO best practices",
                "Collaborate with editors and strategists",
                "Deliver polished work on time",
            ]),
            strings(&[
                "Blog posts and web articles",
                "Marketing and landing page copy",
                "Email newsletters",
                "Case studies and brand stories",
            ]),
        ),
        Niche::Copywriting => NicheOverview::new(
            niche,
            "Copywriting",
            "As a Copywriter at OnSwift, you'll craft compelling content that drives action, builds brands, and connects with target audiences across various platforms and industries.",
            strings(&[
                "Content management systems",
                "SEO tools (SEMrush, Ahrefs)",
                "Analytics platforms",
                "Grammar and style checkers",
            ]),
            strings(&[
                "Write engaging, persuasive copy",
                "Understand target audience psychology",
                "Optimize content for search engines",
                "Maintain consistent brand voice",
            ]),
            strings(&[
                "Website copy and landing pages",
                "Email marketing campaigns",
                "Blog articles and content",
                "Sales materials and brochures",
            ]),
        ),
        Niche::FrontendDev => NicheOverview::new(
            niche,
            "Front-End Development",
            "As a Front-End Developer at OnSwift, you'll build modern, responsive web applications that deliver exceptional user experiences and performance.",
            strings(&[
                "React, Vue, or Angular",
                "TypeScript/JavaScript ES6+",
                "CSS frameworks (Tailwind, Bootstrap)",
                "Build tools (Vite, Webpack)",
            ]),
            strings(&[
                "Write clean, maintainable code",
                "Ensure cross-browser compatibility",
                "Optimize for performance and accessibility",
                "Collaborate with design teams",
            ]),
            strings(&[
                "Responsive web applications",
                "Interactive user interfaces",
                "Performance-optimized code",
                "Cross-platform compatibility",
            ]),
        ),
        Niche::GraphicsDesign => NicheOverview::new(
            niche,
            "Graphic Design",
            "As a Graphic Designer at OnSwift, you'll craft visually compelling designs that communicate ideas clearly and strengthen brand presence across digital and print platforms.",
            strings(&[
                "Adobe Creative Suite or Figma",
                "Typography and color systems",
                "Layout and composition tools",
                "Design collaboration platforms",
            ]),
            strings(&[
                "Create high-quality, original visuals",
                "Balance creativity with brand consistency",
                "Collaborate with clients and creative teams",
                "Deliver projects on time and to spec",
            ]),
            strings(&[
                "Brand and marketing assets",
                "Social media and digital graphics",
                "Presentation and print materials",
                "Campaign visuals and ad creatives",
            ]),
        ),
        Niche::ProductDesign => NicheOverview::new(
            niche,
            "Product Designer",
            "As a Product Designer at OnSwift, you'll create intuitive, user-centered digital experiences by combining research, strategy, and visual design to solve complex problems.",
            strings(&[
                "Figma, Sketch, or Adobe XD",
                "Prototyping tools (Framer, ProtoPie)",
                "User research platforms",
                "Design systems and component libraries",
            ]),
            strings(&[
                "Conduct user research and testing",
                "Create wireframes and high-fidelity mockups",
                "Collaborate with developers and stakeholders",
                "Iterate based on feedback and data",
            ]),
            strings(&[
                "User flows and journey maps",
                "Interactive prototypes",
                "Design systems and style guides",
                "Responsive UI/UX designs",
            ]),
        ),
        Niche::SocialMediaMgnt => NicheOverview::new(
            niche,
            "Social Media Management",
            "As a Social Media Manager at OnSwift, you'll develop and execute social media strategies that build brand awareness, engage communities, and drive measurable results.",
            strings(&[
                "Social media management platforms (Hootsuite, Buffer)",
                "Analytics tools (Meta Business Suite, Google Analytics)",
                "Content creation tools (Canva, CapCut)",
                "Scheduling and automation software",
            ]),
            strings(&[
                "Develop content calendars and strategies",
                "Monitor trends and engagement metrics",
                "Respond to comments and messages promptly",
                "Analyze performance and optimize campaigns",
            ]),
            strings(&[
                "Content calendars and posting schedules",
                "Engaging social media posts and stories",
                "Performance reports and insights",
                "Community management and growth",
            ]),
        ),
        Niche::VideoEditing => NicheOverview::new(
            niche,
            "Video Editing",
            "As a Video Editor at OnSwift, you'll transform raw footage into polished, engaging videos that tell compelling stories and captivate audiences across platforms.",
            strings(&[
                "Adobe Premiere Pro or Final Cut Pro",
                "After Effects for motion graphics",
                "Color grading software (DaVinci Resolve)",
                "Audio editing tools (Audition, Audacity)",
            ]),
            strings(&[
                "Edit videos with attention to pacing and flow",
                "Add professional transitions and effects",
                "Ensure color consistency and audio quality",
                "Adapt content for different platforms",
            ]),
            strings(&[
                "Promotional and marketing videos",
                "Social media content and reels",
                "YouTube videos and tutorials",
                "Corporate presentations and testimonials",
            ]),
        ),
        Niche::VirtualAssistant => NicheOverview::new(
            niche,
            "Virtual Assistant",
            "As a Virtual Assistant at OnSwift, you'll provide remote administrative, technical, and creative support to help clients manage their business operations efficiently.",
            strings(&[
                "Project management tools (Asana, Trello)",
                "Communication platforms (Slack, Zoom)",
                "Calendar and scheduling software",
                "Cloud storage solutions",
            ]),
            strings(&[
                "Manage multiple tasks and priorities",
                "Communicate proactively and clearly",
                "Maintain confidentiality and professionalism",
                "Adapt to varying client needs",
            ]),
            strings(&[
                "Calendar and email management",
                "Data entry and document preparation",
                "Travel arrangements and bookings",
                "Customer service and support",
            ]),
        ),
    }
}
