use vetting_core::model::{Phase, Question};

pub(crate) fn phases() -> Vec<Phase> {
    vec![
        Phase::new(
            "fundamentals",
            "A. Fundamentals & Principles",
            vec![
                Question::written("fund_1", "What’s the main difference between copywriting and content writing?"),
                Question::written("fund_2", "Why is clarity more important than word count?"),
                Question::written("fund_3", "How does website copy differ from blog articles?"),
                Question::written("fund_4", "Why is formatting important in online writing?"),
                Question::written("fund_5", "What’s the difference between editing and proofreading?"),
            ],
        ),
        Phase::new(
            "websiteCopy",
            "B. Website Copywriting",
            vec![
                Question::written("web_1", "What makes a homepage headline effective?"),
                Question::written("web_2", "Why is brevity crucial in website copy?"),
                Question::written("web_3", "What’s the purpose of a value proposition on a homepage?"),
                Question::written("web_4", "Why should CTAs be clear and specific on websites?"),
                Question::written("web_5", "What’s the difference between “About Us” copy and sales copy?"),
            ],
        ),
        Phase::new(
            "blogWriting",
            "C. Blog Writing & Long-Form Content",
            vec![
                Question::written("blog_1", "Why is keyword research important for blog writing?"),
                Question::written("blog_2", "How do you structure a blog post for readability?"),
                Question::written("blog_3", "What’s the ideal length for a blog post?"),
                Question::written("blog_4", "Why should blogs include internal and external links?"),
                Question::written("blog_5", "What makes a headline click-worthy without being clickbait?"),
            ],
        ),
        Phase::new(
            "seoFundamentals",
            "D. SEO Writing Fundamentals",
            vec![
                Question::written("seo_1", "What is the difference between short-tail and long-tail keywords?"),
                Question::written("seo_2", "How do meta titles and descriptions influence SEO?"),
                Question::written("seo_3", "Why is keyword stuffing harmful?"),
                Question::written("seo_4", "How do you optimize images for SEO?"),
                Question::written("seo_5", "What’s the role of backlinks in SEO writing?"),
            ],
        ),
        Phase::new(
            "seoAdvanced",
            "E. Advanced SEO Strategy",
            vec![
                Question::written("seoadv_1", "What’s search intent and why is it important?"),
                Question::written("seoadv_2", "Explain the difference between on-page and off-page SEO."),
                Question::written("seoadv_3", "Why should blogs be updated over time?"),
                Question::written("seoadv_4", "How do you optimize for voice search?"),
                Question::written("seoadv_5", "What are LSI (latent semantic indexing) keywords?"),
            ],
        ),
        Phase::new(
            "readability",
            "F. Readability & UX Writing",
            vec![
                Question::written("read_1", "Why is scannability important in online writing?"),
                Question::written("read_2", "What’s the F-pattern in reading, and how does it affect website copy?"),
                Question::written("read_3", "How do bullet points improve readability?"),
                Question::written("read_4", "Why should web copy avoid jargon (unless industry-specific)?"),
                Question::written("read_5", "What’s the recommended grade level for general web content readability?"),
            ],
        ),
        Phase::new(
            "storytelling",
            "G. Storytelling & Engagement",
            vec![
                Question::written("story_1", "Why does storytelling matter in content writing?"),
                Question::written("story_2", "How do you use case studies/testimonials in content writing?"),
                Question::written("story_3", "What’s the difference between educational and promotional content?"),
                Question::written("story_4", "Why should content balance information and engagement?"),
                Question::written("story_5", "How do you create an effective opening hook for a blog?"),
            ],
        ),
        Phase::new(
            "analytics",
            "H. Analytics & Performance",
            vec![
                Question::written("anal_1", "How do you measure if blog content is performing well?"),
                Question::written("anal_2", "Why is bounce rate important for website content?"),
                Question::written("anal_3", "What’s the difference between CTR and conversion rate in content?"),
                Question::written("anal_4", "How do you measure engagement in blog content?"),
                Question::written("anal_5", "What tools would you use to track SEO performance?"),
            ],
        ),
        Phase::new(
            "clientComm",
            "I. Client Communication & Scenarios",
            vec![
                Question::written("client_1", "A client says, “Just make the article 2,000 words.” What questions should you ask before writing?"),
                Question::written("client_2", "The client gives you a topic with no brief. How do you structure your research?"),
                Question::written("client_3", "The client insists on using a keyword 30 times in 800 words. How do you handle it?"),
                Question::written("client_4", "How do you adapt writing tone for a law firm vs. a fashion blog?"),
                Question::written("client_5", "A client wants immediate SEO results from one blog post. How do you explain reality?"),
            ],
        ),
        Phase::new(
            "ethics",
            "J. Ethics & Professionalism",
            vec![
                Question::written("ethics_1", "Why is plagiarism unacceptable in content writing?"),
                Question::written("ethics_2", "How do you ensure originality in your content?"),
                Question::written("ethics_3", "What’s your stance on using AI tools in writing?"),
                Question::written("ethics_4", "How do you cite sources in blog articles?"),
                Question::written("ethics_5", "Why should SEO writing prioritize humans before algorithms?"),
            ],
        ),
    ]
}
