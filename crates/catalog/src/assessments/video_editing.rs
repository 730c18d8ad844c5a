use vetting_core::model::{Phase, Question};

pub(crate) fn phases() -> Vec<Phase> {
    vec![
        Phase::new(
            "fundamentals",
            "1. Fundamentals & Theory",
            vec![
                Question::written("fund_1", "What’s the difference between a jump cut and a match cut?"),
                Question::written("fund_2", "Explain the 180-degree rule and why it matters."),
                Question::written("fund_3", "What is B-roll, and how do you decide when to use it?"),
                Question::written("fund_4", "Describe the difference between a montage and a sequence."),
                Question::written("fund_5", "How do pacing and rhythm affect storytelling in video editing?"),
                Question::written("fund_6", "What’s the role of continuity editing?"),
                Question::written("fund_7", "What is color grading vs. color correction?"),
                Question::written("fund_8", "Define keyframing in the context of animation/editing."),
                Question::written("fund_9", "What is the rule of thirds and how does it apply in video editing?"),
                Question::written("fund_10", "When should you use cross dissolve vs. a hard cut?"),
            ],
        ),
        Phase::new(
            "software",
            "2. Software Knowledge",
            vec![
                Question::written("soft_1", "Which editing software do you prefer (Premiere Pro, Final Cut, DaVinci Resolve, CapCut Pro, etc.) and why?"),
                Question::written("soft_2", "How do you organize footage in your editing timeline for efficiency?"),
                Question::written("soft_3", "Explain how to use proxies for high-resolution footage."),
                Question::written("soft_4", "What’s the difference between H.264 and ProRes formats?"),
                Question::written("soft_5", "How do you handle audio syncing in post-production?"),
                Question::written("soft_6", "What is a nested sequence (Premiere Pro) or compound clip (Final Cut)?"),
                Question::written("soft_7", "How do you export a video optimized for YouTube vs. Instagram?"),
                Question::written("soft_8", "What’s the importance of frame rates (24fps, 30fps, 60fps)?"),
                Question::written("soft_9", "Explain how you’d edit vertical video differently from widescreen."),
                Question::written("soft_10", "How do you use LUTs in your workflow?"),
            ],
        ),
        Phase::new(
            "storytelling",
            "3. Storytelling & Creativity",
            vec![
                Question::written("story_1", "How do you approach editing a client’s 2-hour raw footage into a 3-minute highlight reel?"),
                Question::written("story_2", "What makes a strong hook in the first 5 seconds of a video?"),
                Question::written("story_3", "How would you edit differently for TikTok vs. LinkedIn?"),
                Question::written("story_4", "Describe how you’d create emotional impact in a testimonial video."),
                Question::written("story_5", "What’s your strategy for editing event highlight videos?"),
                Question::written("story_6", "How do you use sound effects or music to drive narrative?"),
                Question::written("story_7", "Give an example of when you broke editing “rules” for creative effect."),
                Question::written("story_8", "How do you balance fast cuts vs. long takes in storytelling?"),
                Question::written("story_9", "When is silence more powerful than background music in editing?"),
                Question::written("story_10", "How do you adapt editing style for corporate clients vs. lifestyle influencers?"),
            ],
        ),
        Phase::new(
            "clientManagement",
            "4. Practical Client Management",
            vec![
                Question::written("client_1", "A client says, “This feels boring” — what steps do you take to fix it?"),
                Question::written("client_2", "A client requests 20 rounds of edits. How do you set boundaries?"),
                Question::written("client_3", "A startup wants a promo video but has low-quality footage. What do you do?"),
                Question::written("client_4", "How do you explain to a client why certain footage can’t be fixed in post?"),
                Question::written("client_5", "How do you manage deadlines when given 50GB of footage and 3 days to deliver?"),
                Question::written("client_6", "How do you collaborate with a scriptwriter or motion graphics artist?"),
                Question::written("client_7", "How would you handle brand guideline requests (fonts, colors, tone)?"),
                Question::written("client_8", "How do you ensure copyright-safe use of music, fonts, and stock footage?"),
                Question::written("client_9", "How do you price differently for ads vs. long-form content?"),
                Question::written("client_10", "A client insists on vertical video for YouTube. How do you handle the conversation?"),
            ],
        ),
        Phase::new(
            "advanced",
            "5. Advanced & Practical Scenarios",
            vec![
                Question::written("adv_1", "Edit a 30-second ad from raw footage (practical test)."),
                Question::written("adv_2", "Sync a music beat drop with cuts in a highlight reel."),
                Question::written("adv_3", "Remove background noise from a 2-minute interview clip."),
                Question::written("adv_4", "Color-correct a shot with mixed lighting (daylight + tungsten)."),
                Question::written("adv_5", "Stabilize shaky footage without losing too much resolution."),
                Question::written("adv_6", "Create subtitles for a social media video in SRT format."),
                Question::written("adv_7", "Show how you’d cut a 10-minute YouTube vlog into a punchy 1-minute IG reel."),
                Question::written("adv_8", "Add motion graphics for lower-thirds and transitions."),
                Question::written("adv_9", "Demonstrate how you’d apply a cinematic LUT to different shots for consistency."),
                Question::written("adv_10", "Export the same video in 3 formats: 4K (YouTube), 1080p (Facebook), 9:16 vertical (TikTok/Instagram)."),
            ],
        ),
    ]
}
