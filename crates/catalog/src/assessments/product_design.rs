use vetting_core::model::{Phase, Question};

pub(crate) fn phases() -> Vec<Phase> {
    vec![
        Phase::new(
            "fundamentals",
            "1. Fundamentals & Thinking",
            vec![
                Question::written("fund_1", "Walk me through your end-to-end product design process."),
                Question::written("fund_2", "What’s the difference between UX, UI, and Product Design — and where do you play strongest?"),
                Question::written("fund_3", "How do you define a “good” user experience?"),
                Question::written("fund_4", "How do you turn a vague idea into a validated concept?"),
                Question::written("fund_5", "Describe a time when your first design direction failed — what did you learn?"),
                Question::written("fund_6", "How do you balance user needs with business goals?"),
                Question::written("fund_7", "How do you prioritize which user problems to solve first?"),
                Question::written("fund_8", "What does “clarity in design” mean to you?"),
            ],
        ),
        Phase::new(
            "technical",
            "2. Technical Execution",
            vec![
                Question::written("tech_1", "What tools do you use for wireframing, prototyping, and handoff — and why?"),
                Question::written("tech_2", "How do you maintain consistency across multiple platforms or devices?"),
                Question::written("tech_3", "How do you organize Figma files and component libraries in growing systems?"),
                Question::written("tech_4", "Explain auto-layout in Figma and its practical use."),
                Question::written("tech_5", "How do you collaborate effectively with developers?"),
                Question::written("tech_6", "How do you test feasibility before handoff?"),
                Question::written("tech_7", "How do you incorporate accessibility (WCAG) standards in your design?"),
            ],
        ),
        Phase::new(
            "strategy",
            "3. Product Strategy & Business",
            vec![
                Question::written("strat_1", "How do you define success for a design project?"),
                Question::written("strat_2", "How do you measure the impact of your design on business metrics?"),
                Question::written("strat_3", "How do you connect user experience to revenue or retention?"),
                Question::written("strat_4", "How do you decide what features to design or remove?"),
                Question::written("strat_5", "Describe a time when design insights influenced product strategy."),
                Question::written("strat_6", "How do you validate design decisions before shipping?"),
                Question::written("strat_7", "What’s the difference between being data-informed and data-driven?"),
            ],
        ),
        Phase::new(
            "research",
            "4. User Research & Insights",
            vec![
                Question::written("res_1", "What’s your process for conducting user research?"),
                Question::written("res_2", "How do you avoid bias when collecting user feedback?"),
                Question::written("res_3", "How do you translate research findings into actionable design decisions?"),
                Question::written("res_4", "What’s one surprising insight that completely changed your design direction?"),
                Question::written("res_5", "How do you prioritize user pain points after research?"),
                Question::written("res_6", "How do you communicate user insights to stakeholders?"),
            ],
        ),
        Phase::new(
            "systems",
            "5. Systems & Scalability",
            vec![
                Question::written("sys_1", "What’s the purpose of a design system in a growing company?"),
                Question::written("sys_2", "How do you maintain visual consistency as a product scales?"),
                Question::written("sys_3", "How do you manage version control in shared design environments?"),
                Question::written("sys_4", "How do you measure the adoption and impact of a design system?"),
            ],
        ),
        Phase::new(
            "team",
            "6. Team & Collaboration",
            vec![
                Question::written("team_1", "How do you handle conflicting feedback from stakeholders?"),
                Question::written("team_2", "How do you explain design decisions to non-designers?"),
                Question::written("team_3", "How do you advocate for design in an organization that doesn’t value it?"),
                Question::written("team_4", "Describe a time when collaboration improved the final product."),
                Question::written("team_5", "How do you receive and give design critiques effectively?"),
            ],
        ),
        Phase::new(
            "creative",
            "7. Creative Thinking & Innovation",
            vec![
                Question::written("creat_1", "How do you overcome creative blocks?"),
                Question::written("creat_2", "Describe a project where you innovated under tight constraints."),
                Question::written("creat_3", "How do you balance creativity with usability?"),
                Question::written("creat_4", "How do you explore multiple directions without wasting time?"),
            ],
        ),
        Phase::new(
            "ethics",
            "8. Ethics & Accessibility",
            vec![
                Question::written("eth_1", "How do you design for inclusivity and accessibility from the start?"),
                Question::written("eth_2", "What’s your stance on persuasive or “dark” design patterns?"),
                Question::written("eth_3", "How do you balance persuasive design with user wellbeing?"),
            ],
        ),
        Phase::new(
            "future",
            "9. Future & Growth",
            vec![
                Question::written("fut_1", "How do you see AI changing the future of product design?"),
                Question::written("fut_2", "What design skills will matter most in the next five years?"),
                Question::written("fut_3", "How do you stay updated with emerging trends and tools?"),
            ],
        ),
        Phase::new(
            "caseStudies",
            "10. Case Studies & Reflection",
            vec![
                Question::written("case_1", "Walk me through one of your most impactful design projects."),
                Question::written("case_2", "What was the measurable outcome of your work?"),
                Question::written("case_3", "If you were to redo that project today, what would you change and why?"),
            ],
        ),
    ]
}
