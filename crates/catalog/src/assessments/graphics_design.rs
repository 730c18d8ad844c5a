use vetting_core::model::{Phase, Question};

pub(crate) fn phases() -> Vec<Phase> {
    vec![
        Phase::new(
            "fundamentals",
            "Fundamentals & Principles (Conceptual Clarity)",
            vec![
                Question::written("fund_1", "What are the five core principles of effective logo design?"),
                Question::written("fund_2", "Which is more important for a logo: originality or recognizability? Explain."),
                Question::written("fund_3", "How do you define the difference between a logo and a symbol?"),
                Question::written("fund_4", "Why is scalability critical in logo design?"),
                Question::written("fund_5", "What's the difference between a monogram and a wordmark logo?"),
            ],
        ),
        Phase::new(
            "history",
            "History & Context",
            vec![
                Question::written("hist_1", "Who designed the original Nike logo and what was unique about its creation?"),
                Question::written("hist_2", "Why is the FedEx logo considered an example of great design?"),
                Question::written("hist_3", "How have minimalist design trends changed logo design in the last decade?"),
                Question::written("hist_4", "Give an example of a global rebrand that failed and why."),
                Question::written("hist_5", "Which logos in history have stood unchanged the longest, and what does that suggest about their design?"),
            ],
        ),
        Phase::new(
            "technical",
            "Technical Knowledge",
            vec![
                Question::written("tech_1", "Why is vector format (.AI, .SVG) non-negotiable for logo design?"),
                Question::written("tech_2", "What's the difference between raster and vector graphics?"),
                Question::written("tech_3", "When should you use Pantone colors vs CMYK vs RGB?"),
                Question::written("tech_4", "What are responsive logos and why are they important?"),
                Question::written("tech_5", "Explain how kerning affects logo readability."),
            ],
        ),
        Phase::new(
            "strategy",
            "Strategy & Brand Alignment",
            vec![
                Question::written("strat_1", "How do you ensure a logo reflects a company's mission/values?"),
                Question::written("strat_2", "A luxury jewelry brand approaches you. What visual cues (colors, typography, styles) do you explore?"),
                Question::written("strat_3", "What's the danger of designing logos based only on client preferences?"),
                Question::written("strat_4", "How would you design a logo differently for a startup vs. a 50-year-old company rebrand?"),
                Question::written("strat_5", "What's the difference between brand identity and brand image?"),
            ],
        ),
        Phase::new(
            "communication",
            "Client Communication & Management",
            vec![
                Question::written("comm_1", "A client says, “Just copy this competitor's logo but change the name.” How do you respond?"),
                Question::written("comm_2", "A client rejects all your concepts, but their feedback is vague (“It just doesn't pop”). What do you do next?"),
                Question::written("comm_3", "How do you present a logo to a client to maximize buy-in?"),
                Question::written("comm_4", "What's your policy if a client keeps asking for endless revisions?"),
                Question::written("comm_5", "How would you explain to a non-designer why simplicity is stronger than complexity?"),
            ],
        ),
        Phase::new(
            "cultural",
            "Cultural Sensitivity & Global Design",
            vec![
                Question::written("cul_1", "Why must logos be tested across cultures before approval?"),
                Question::written("cul_2", "A brand expansion to the Middle East wants to keep their logo. What considerations might you raise?"),
                Question::written("cul_3", "Give an example of a logo that unintentionally carried offensive meaning in another culture."),
                Question::written("cul_4", "How do color meanings vary across cultures (e.g., red in China vs. Western countries)?"),
                Question::written("cul_5", "If a client insists on using an animal symbol, how would you research its meaning globally?"),
            ],
        ),
        Phase::new(
            "industry",
            "Industry-Specific Applications",
            vec![
                Question::written("ind_1", "What makes a healthcare logo trustworthy?"),
                Question::written("ind_2", "How should a tech startup's logo differ from a non-profit organization's?"),
                Question::written("ind_3", "What design elements make a food & beverage logo appetizing?"),
                Question::written("ind_4", "Why do financial institutions lean toward certain colors and shapes?"),
                Question::written("ind_5", "What makes fashion and luxury brand logos distinct?"),
            ],
        ),
        Phase::new(
            "advanced",
            "Advanced Design Scenarios",
            vec![
                Question::written("adv_1", "Explain how negative space can add hidden meaning to a logo."),
                Question::written("adv_2", "What's the difference between an emblem and a combination mark?"),
                Question::written("adv_3", "What’s the role of motion/animated logos in modern branding?"),
                Question::written("adv_4", "How would you adapt a logo for use in an app icon?"),
                Question::written("adv_5", "When is a logotype-only (wordmark) approach best?"),
            ],
        ),
        Phase::new(
            "testing",
            "Testing & Validation",
            vec![
                Question::written("tes_1", "How do you test if a logo works at small sizes?"),
                Question::written("tes_2", "What’s the importance of black-and-white versions of a logo?"),
                Question::written("tes_3", "How do you check contrast for accessibility compliance?"),
                Question::written("tes_4", "Describe how you’d run an A/B test for logo concepts."),
                Question::written("tes_5", "How do you measure whether a logo is memorable?"),
            ],
        ),
        Phase::new(
            "process",
            "Process & Workflow",
            vec![
                Question::written("pro_1", "Walk me through your logo design process from client brief to delivery."),
                Question::written("pro_2", "How many initial concepts should you provide to a client?"),
                Question::written("pro_3", "What deliverables should always be included in a brand identity package?"),
                Question::written("pro_4", "How do you organize and name your design files for client handover?"),
                Question::written("pro_5", "What's your system for ensuring brand consistency across all touchpoints after logo delivery?"),
            ],
        ),
    ]
}
