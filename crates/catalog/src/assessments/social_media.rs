use vetting_core::model::{Phase, Question};

pub(crate) fn phases() -> Vec<Phase> {
    vec![
        Phase::new(
            "fundamentals",
            "A. Fundamentals & Principles",
            vec![
                Question::written("fund_1", "What’s the main difference between social media management and social media marketing?"),
                Question::written("fund_2", "Why is consistency important in social media management?"),
                Question::written("fund_3", "What’s a content calendar and why is it crucial?"),
                Question::written("fund_4", "What’s the role of a social media manager vs. a content creator?"),
                Question::written("fund_5", "How do you decide which platforms a brand should focus on?"),
            ],
        ),
        Phase::new(
            "strategy",
            "B. Strategy & Planning",
            vec![
                Question::written("strat_1", "What’s the first step in creating a social media strategy?"),
                Question::written("strat_2", "How do you define KPIs (key performance indicators) for social media?"),
                Question::written("strat_3", "Why is audience research critical before launching a campaign?"),
                Question::written("strat_4", "What’s the difference between organic and paid growth?"),
                Question::written("strat_5", "How do you balance brand voice across multiple platforms?"),
            ],
        ),
        Phase::new(
            "contentCreation",
            "C. Content Creation & Curation",
            vec![
                Question::written("content_1", "What’s the ideal ratio of promotional vs. value-based content?"),
                Question::written("content_2", "How do you repurpose a blog post into social content?"),
                Question::written("content_3", "Why should content be native to each platform?"),
                Question::written("content_4", "What are trending formats in 2025 (e.g., short-form video, carousels)?"),
                Question::written("content_5", "How do you ensure graphics/videos align with brand guidelines?"),
            ],
        ),
        Phase::new(
            "scheduling",
            "D. Scheduling & Tools",
            vec![
                Question::written("sched_1", "What tools do you use for scheduling posts?"),
                Question::written("sched_2", "What’s the best posting frequency for Instagram vs. LinkedIn?"),
                Question::written("sched_3", "How do you handle scheduling across different time zones?"),
                Question::written("sched_4", "Why is it risky to automate all social media engagement?"),
                Question::written("sched_5", "What’s the importance of real-time monitoring in social management?"),
            ],
        ),
        Phase::new(
            "engagement",
            "E. Engagement & Community Building",
            vec![
                Question::written("eng_1", "How do you increase engagement organically?"),
                Question::written("eng_2", "What’s the difference between reach and impressions?"),
                Question::written("eng_3", "How do you handle trolls or negative comments?"),
                Question::written("eng_4", "Why should you respond to comments quickly?"),
                Question::written("eng_5", "What’s the importance of building relationships, not just followers?"),
            ],
        ),
        Phase::new(
            "analytics",
            "F. Analytics & Performance",
            vec![
                Question::written("anal_1", "What’s the difference between vanity metrics and actionable metrics?"),
                Question::written("anal_2", "How do you measure ROI on social media?"),
                Question::written("anal_3", "Which metrics matter most for brand awareness campaigns?"),
                Question::written("anal_4", "How do you track conversions from social media?"),
                Question::written("anal_5", "Why should you create monthly reports for clients?"),
            ],
        ),
        Phase::new(
            "paidAds",
            "G. Paid Ads & Campaigns",
            vec![
                Question::written("paid_1", "What’s the difference between boosting a post and running an ad campaign?"),
                Question::written("paid_2", "How do you set a target audience for paid ads?"),
                Question::written("paid_3", "What’s retargeting and why is it powerful?"),
                Question::written("paid_4", "Why should ad creatives be tested before scaling budget?"),
                Question::written("paid_5", "How do you balance organic and paid content in strategy?"),
            ],
        ),
        Phase::new(
            "platformSpecific",
            "H. Platform-Specific Knowledge",
            vec![
                Question::written("plat_1", "What makes TikTok content different from Instagram?"),
                Question::written("plat_2", "Why do LinkedIn posts need a different tone than Facebook?"),
                Question::written("plat_3", "How do you adapt content for Twitter/X?"),
                Question::written("plat_4", "What’s the role of hashtags in Instagram growth?"),
                Question::written("plat_5", "What makes Pinterest unique compared to other platforms?"),
            ],
        ),
        Phase::new(
            "clientComm",
            "I. Client Communication & Scenarios",
            vec![
                Question::written("client_1", "A client says, “We just want more followers.” How do you respond?"),
                Question::written("client_2", "A client insists on posting memes that don’t fit their brand voice. What do you do?"),
                Question::written("client_3", "How do you handle a client who wants to post 5 times a day?"),
                Question::written("client_4", "A campaign performs poorly. How do you explain it to a client?"),
                Question::written("client_5", "What’s your process for getting client approvals on content?"),
            ],
        ),
        Phase::new(
            "trends",
            "J. Trends, Crisis & Professionalism",
            vec![
                Question::written("trends_1", "Why must brands avoid jumping on every trending topic?"),
                Question::written("trends_2", "Give an example of a social media crisis and how you’d manage it."),
                Question::written("trends_3", "What’s the risk of ignoring cultural sensitivity in content?"),
                Question::written("trends_4", "How do you keep up with algorithm changes?"),
                Question::written("trends_5", "What’s your philosophy on automation vs. human touch in community management?"),
            ],
        ),
    ]
}
