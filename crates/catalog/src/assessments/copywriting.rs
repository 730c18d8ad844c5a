use vetting_core::model::{Phase, Question};

pub(crate) fn phases() -> Vec<Phase> {
    vec![
        Phase::new(
            "fundamentals",
            "A. Fundamentals & Principles",
            vec![
                Question::written("fund_1", "What’s the difference between copywriting and content writing?"),
                Question::written("fund_2", "Why is clarity more important than cleverness in sales copy?"),
                Question::written("fund_3", "Define a “unique selling proposition” (USP) and why it matters."),
                Question::written("fund_4", "What role does a headline play in copywriting?"),
                Question::written("fund_5", "Why is specificity more persuasive than general claims?"),
            ],
        ),
        Phase::new(
            "psychology",
            "B. Consumer Psychology & Persuasion",
            vec![
                Question::written("psy_1", "What are the AIDA and PAS frameworks in copywriting?"),
                Question::written("psy_2", "Why is social proof effective in landing pages?"),
                Question::written("psy_3", "Explain the concept of “loss aversion” and how it applies to sales copy."),
                Question::written("psy_4", "How do scarcity and urgency increase conversions?"),
                Question::written("psy_5", "What’s the difference between a benefit and a feature?"),
            ],
        ),
        Phase::new(
            "ads",
            "C. Ads-Specific Copywriting",
            vec![
                Question::written("ads_1", "Why must Facebook ads have concise, scannable copy?"),
                Question::written("ads_2", "How do you write copy that passes Meta’s ad policies?"),
                Question::written("ads_3", "What’s the role of a hook in ad copy?"),
                Question::written("ads_4", "Give an example of a weak CTA and rewrite it into a strong one."),
                Question::written("ads_5", "Why should ad copy differ from organic social content?"),
            ],
        ),
        Phase::new(
            "funnels",
            "D. Funnels & Email Copy",
            vec![
                Question::written("funnel_1", "What’s the purpose of a lead magnet funnel?"),
                Question::written("funnel_2", "How do you write a subject line that gets emails opened?"),
                Question::written("funnel_3", "Why should a funnel landing page usually have only one CTA?"),
                Question::written("funnel_4", "What’s the role of storytelling in email nurture sequences?"),
                Question::written("funnel_5", "How do you prevent emails from going into spam?"),
            ],
        ),
        Phase::new(
            "landingPage",
            "E. Landing Page Copy",
            vec![
                Question::written("lp_1", "Why is “above the fold” content critical in landing pages?"),
                Question::written("lp_2", "How do you structure a landing page for maximum conversions?"),
                Question::written("lp_3", "What’s the importance of testimonials on sales pages?"),
                Question::written("lp_4", "Why should long-form sales pages still include multiple CTAs?"),
                Question::written("lp_5", "What makes a guarantee statement credible?"),
            ],
        ),
        Phase::new(
            "testing",
            "F. Testing & Optimization",
            vec![
                Question::written("test_1", "What’s A/B testing in copywriting?"),
                Question::written("test_2", "How would you test different headlines on a landing page?"),
                Question::written("test_3", "What’s the importance of measuring CTR (click-through rate)?"),
                Question::written("test_4", "Which metric shows if your sales copy is actually profitable?"),
                Question::written("test_5", "Why should copy be continuously optimized even after launch?"),
            ],
        ),
        Phase::new(
            "voice",
            "G. Voice, Tone & Audience Fit",
            vec![
                Question::written("voice_1", "How do you adjust tone for B2B vs. B2C sales copy?"),
                Question::written("voice_2", "Why is writing to “one person” more powerful than writing to “everyone”?"),
                Question::written("voice_3", "A client wants a playful brand voice. How would you capture that?"),
                Question::written("voice_4", "What’s the role of empathy in persuasive writing?"),
                Question::written("voice_5", "How do you research the “voice of customer” before writing?"),
            ],
        ),
        Phase::new(
            "clientComm",
            "H. Client Communication & Real-Life Scenarios",
            vec![
                Question::written("client_1", "A client insists on keyword stuffing for SEO. How do you respond?"),
                Question::written("client_2", "A client says your copy “doesn’t sound exciting enough.” What do you ask next?"),
                Question::written("client_3", "The client provides almost no information. What’s your process to extract insights?"),
                Question::written("client_4", "How do you handle a client who keeps rewriting your copy?"),
                Question::written("client_5", "A product is boring (e.g., insurance). How do you still make copy compelling?"),
            ],
        ),
        Phase::new(
            "advanced",
            "I. Advanced Strategy & Persuasion",
            vec![
                Question::written("adv_1", "What’s risk-reversal in copywriting? Give an example."),
                Question::written("adv_2", "Why are objections important to address in copy?"),
                Question::written("adv_3", "How do you use sensory language to create impact?"),
                Question::written("adv_4", "Why do long-form pages often outperform short ones for high-ticket offers?"),
                Question::written("adv_5", "How do you weave a story into sales copy without losing clarity?"),
            ],
        ),
        Phase::new(
            "ethics",
            "J. Ethics & Compliance",
            vec![
                Question::written("ethics_1", "Why must copy avoid false claims?"),
                Question::written("ethics_2", "How do you write compliant copy in health/finance industries?"),
                Question::written("ethics_3", "What’s the danger of manipulative vs. persuasive copy?"),
                Question::written("ethics_4", "A client requests a “clickbait headline.” What’s your professional stance?"),
                Question::written("ethics_5", "How do you balance persuasive urgency with honesty?"),
            ],
        ),
    ]
}
